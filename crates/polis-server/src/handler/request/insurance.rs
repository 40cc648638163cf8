//! Insurance policy request types.

use jiff::Timestamp;
use polis_postgres::model::{NewInsuranceInfo, UpdateInsuranceInfo as UpdateInsuranceInfoModel};
use polis_postgres::types::InsuranceKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::validations::validate_period;

/// Request payload for attaching a policy to a customer record.
///
/// Omitted `insurance_kind` defaults to `other`.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[validate(schema(function = "validate_create_period"))]
pub struct CreateInsuranceInfo {
    /// Kind of cover.
    pub insurance_kind: Option<InsuranceKind>,
    /// Policy number as printed on the contract (1-64 characters).
    #[validate(length(min = 1, max = 64))]
    pub policy_number: Option<String>,
    /// Start of the insured period (RFC 3339).
    pub time_insure_start: Option<Timestamp>,
    /// End of the insured period (RFC 3339).
    pub time_insure_end: Option<Timestamp>,
}

fn validate_create_period(request: &CreateInsuranceInfo) -> Result<(), ValidationError> {
    validate_period(request.time_insure_start, request.time_insure_end)
}

impl CreateInsuranceInfo {
    /// Converts this request into a [`NewInsuranceInfo`] owned by `user_id`.
    pub fn into_model(self, user_id: i64) -> NewInsuranceInfo {
        NewInsuranceInfo {
            user_id,
            insurance_kind: self.insurance_kind,
            policy_number: self.policy_number,
            time_insure_start: self.time_insure_start.map(Into::into),
            time_insure_end: self.time_insure_end.map(Into::into),
        }
    }
}

/// Request payload for a partial update of a policy.
///
/// The period check only applies when both bounds are in the body. Otherwise
/// the database constraint rejects a reversed period.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
#[validate(schema(function = "validate_update_period"))]
pub struct UpdateInsuranceInfo {
    pub insurance_kind: Option<InsuranceKind>,
    #[validate(length(min = 1, max = 64))]
    pub policy_number: Option<String>,
    pub time_insure_start: Option<Timestamp>,
    pub time_insure_end: Option<Timestamp>,
}

fn validate_update_period(request: &UpdateInsuranceInfo) -> Result<(), ValidationError> {
    validate_period(request.time_insure_start, request.time_insure_end)
}

impl UpdateInsuranceInfo {
    pub fn into_model(self) -> UpdateInsuranceInfoModel {
        UpdateInsuranceInfoModel {
            insurance_kind: self.insurance_kind,
            policy_number: self.policy_number,
            time_insure_start: self.time_insure_start.map(Into::into),
            time_insure_end: self.time_insure_end.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> Timestamp {
        value.parse().unwrap()
    }

    #[test]
    fn create_request_into_model() {
        let request = CreateInsuranceInfo {
            insurance_kind: Some(InsuranceKind::Osago),
            policy_number: Some("XXX-0001".to_owned()),
            time_insure_start: Some(ts("2025-01-01T00:00:00Z")),
            time_insure_end: Some(ts("2026-01-01T00:00:00Z")),
        };
        assert!(request.validate().is_ok());

        let model = request.into_model(42);
        assert_eq!(model.user_id, 42);
        assert_eq!(model.insurance_kind, Some(InsuranceKind::Osago));
        assert!(model.time_insure_end.is_some());
    }

    #[test]
    fn reversed_period_is_rejected() {
        let request = CreateInsuranceInfo {
            time_insure_start: Some(ts("2026-01-01T00:00:00Z")),
            time_insure_end: Some(ts("2025-01-01T00:00:00Z")),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn kind_deserializes_from_snake_names() {
        let request: CreateInsuranceInfo =
            serde_json::from_str(r#"{ "insurance_kind": "selfinsurance" }"#).unwrap();
        assert_eq!(request.insurance_kind, Some(InsuranceKind::SelfInsurance));
        assert!(request.validate().is_ok());

        let invalid = serde_json::from_str::<CreateInsuranceInfo>(r#"{ "insurance_kind": "life" }"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn update_request_checks_length() {
        let update = UpdateInsuranceInfo {
            policy_number: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
        assert!(UpdateInsuranceInfo::default().into_model().is_empty());
    }
}
