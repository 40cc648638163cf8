//! Customer record response types.

use jiff::Timestamp;
use polis_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stored customer record.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserData {
    /// Record id.
    pub id: i64,
    /// When the record was created.
    pub time_create: Option<Timestamp>,
    /// When the customer's policy ends.
    pub time_insure_end: Option<Timestamp>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    /// Phone number as `+7XXXXXXXXXX`.
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl UserData {
    pub fn from_model(user: model::UserData) -> Self {
        Self {
            id: user.id,
            time_create: user.time_create.map(Into::into),
            time_insure_end: user.time_insure_end.map(Into::into),
            first_name: user.first_name,
            middle_name: user.middle_name,
            last_name: user.last_name,
            phone: user.phone,
            email: user.email,
        }
    }
}

/// Paginated list of customer records.
pub type UserDataPage = super::Paginated<UserData>;
