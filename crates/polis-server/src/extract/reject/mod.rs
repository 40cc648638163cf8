//! Drop-in replacements for `axum` extractors with JSON error responses.

pub mod enhanced_json;
pub mod enhanced_path;
pub mod enhanced_query;
pub mod validated_json;
pub mod validated_query;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::enhanced_query::Query;
pub use self::validated_json::ValidateJson;
pub use self::validated_query::ValidateQuery;

/// Keeps the first lines of a rejection message, truncated to `max_chars`.
pub(crate) fn sanitize_error_message(message: &str, max_lines: usize, max_chars: usize) -> String {
    message
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_limits_lines_and_length() {
        assert_eq!(sanitize_error_message("a\nb\nc", 2, 100), "a b");
        assert_eq!(sanitize_error_message("abcdef", 3, 4), "abcd");
    }
}
