//! Monitor response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Service health status.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MonitorStatus {
    /// Whether the database answered the health check.
    pub is_healthy: bool,
    /// When this status was generated.
    pub checked_at: Timestamp,
}

impl MonitorStatus {
    pub fn new(is_healthy: bool) -> Self {
        Self {
            is_healthy,
            checked_at: Timestamp::now(),
        }
    }
}
