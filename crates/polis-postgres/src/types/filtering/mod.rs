//! Filters applied to listing queries.

mod user_data;

pub use user_data::UserDataFilter;
