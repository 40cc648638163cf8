//! Request types for HTTP handlers.

mod insurance;
mod paginations;
mod paths;
mod users;
mod validations;

pub use insurance::*;
pub use paginations::*;
pub use paths::*;
pub use users::*;
pub use validations::*;
