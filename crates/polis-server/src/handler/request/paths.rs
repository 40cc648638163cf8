//! Path parameter types for HTTP handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Path parameters for customer record operations.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct UserPathParams {
    /// Unique identifier of the customer record.
    pub user_id: i64,
}

/// Path parameters for insurance policy operations.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct InsurancePathParams {
    /// Unique identifier of the insurance policy.
    pub insurance_id: i64,
}
