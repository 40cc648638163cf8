#![forbid(unsafe_code)]

/// `embed_migrations!` cannot track the SQL files it embeds, so adding or
/// editing a migration would not trigger a rebuild on its own.
///
/// Watching the migration directory from a build script forces cargo to
/// recompile the crate whenever the directory changes.
fn main() {
    println!("cargo:rerun-if-changed=./migrations");
}
