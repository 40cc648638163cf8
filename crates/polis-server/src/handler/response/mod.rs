//! Response types for HTTP handlers.

mod error_response;
mod insurance;
mod monitors;
mod paginated;
mod users;

pub use error_response::ErrorResponse;
pub use insurance::*;
pub use monitors::*;
pub use paginated::*;
pub use users::*;
