//! Insurance policy response types.

use jiff::Timestamp;
use polis_postgres::model;
use polis_postgres::types::InsuranceKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stored insurance policy.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InsuranceInfo {
    /// Policy id.
    pub id: i64,
    /// Id of the customer record owning the policy.
    pub user_id: i64,
    pub insurance_kind: InsuranceKind,
    pub policy_number: Option<String>,
    pub time_insure_start: Option<Timestamp>,
    pub time_insure_end: Option<Timestamp>,
    /// When the policy was recorded.
    pub time_create: Timestamp,
}

impl InsuranceInfo {
    pub fn from_model(info: model::InsuranceInfo) -> Self {
        Self {
            id: info.id,
            user_id: info.user_id,
            insurance_kind: info.insurance_kind,
            policy_number: info.policy_number,
            time_insure_start: info.time_insure_start.map(Into::into),
            time_insure_end: info.time_insure_end.map(Into::into),
            time_create: info.time_create.into(),
        }
    }
}

/// Paginated list of insurance policies.
pub type InsuranceInfoPage = super::Paginated<InsuranceInfo>;
