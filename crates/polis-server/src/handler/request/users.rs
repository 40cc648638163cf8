//! Customer record request types.

use jiff::Timestamp;
use polis_postgres::model::{NewUserData, UpdateUserData as UpdateUserDataModel};
use polis_postgres::types::UserDataFilter;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validations::{normalize_phone, validate_phone};

/// Request payload for creating a customer record.
///
/// Every field is required. The phone number is stored as `+7XXXXXXXXXX`.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct CreateUserData {
    /// When the customer's policy ends (RFC 3339).
    pub time_insure_end: Timestamp,
    /// First name (1-255 characters).
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,
    /// Middle name (1-255 characters).
    #[validate(length(min = 1, max = 255))]
    pub middle_name: String,
    /// Last name (1-255 characters).
    #[validate(length(min = 1, max = 255))]
    pub last_name: String,
    /// Russian phone number starting with `+7` or `8`, in any formatting.
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    /// Contact email address.
    #[validate(email)]
    pub email: String,
}

impl CreateUserData {
    /// Converts this request into a [`NewUserData`] model for database insertion.
    pub fn into_model(self) -> NewUserData {
        NewUserData {
            time_insure_end: Some(self.time_insure_end.into()),
            first_name: Some(self.first_name),
            middle_name: Some(self.middle_name),
            last_name: Some(self.last_name),
            phone: Some(normalize_phone(&self.phone).unwrap_or(self.phone)),
            email: Some(self.email),
        }
    }
}

/// Request payload for a partial update of a customer record.
///
/// Only the fields present in the body are changed.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct UpdateUserData {
    /// New policy end date (RFC 3339).
    pub time_insure_end: Option<Timestamp>,
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub middle_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,
    /// New phone number, normalized like on creation.
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl UpdateUserData {
    pub fn into_model(self) -> UpdateUserDataModel {
        UpdateUserDataModel {
            time_insure_end: self.time_insure_end.map(Into::into),
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            phone: self
                .phone
                .map(|phone| normalize_phone(&phone).unwrap_or(phone)),
            email: self.email,
        }
    }
}

/// Filters of the customer record listing, combined with `AND`.
///
/// Page selection comes separately as [`Pagination`].
///
/// [`Pagination`]: super::Pagination
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct ListUserData {
    /// Matches a single record by id.
    pub user_id: Option<i64>,
    /// Keeps records whose policy ends at or before this instant (RFC 3339).
    pub date_insurance_end: Option<Timestamp>,
    /// Matches a phone number, normalized before comparison.
    #[validate(custom(function = "validate_phone"))]
    pub phone_number: Option<String>,
}

impl ListUserData {
    /// Builds the repository filter from the query parameters.
    pub fn to_filter(&self) -> UserDataFilter {
        let mut filter = UserDataFilter::new();

        if let Some(user_id) = self.user_id {
            filter = filter.with_user_id(user_id);
        }

        if let Some(insured_until) = self.date_insurance_end {
            filter = filter.with_insured_until(insured_until);
        }

        if let Some(phone) = self.phone_number.as_deref() {
            filter = filter.with_phone(normalize_phone(phone).unwrap_or_else(|_| phone.to_owned()));
        }

        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateUserData {
        CreateUserData {
            time_insure_end: "2026-01-01T00:00:00Z".parse().unwrap(),
            first_name: "Ivan".to_owned(),
            middle_name: "Ivanovich".to_owned(),
            last_name: "Petrov".to_owned(),
            phone: "8 (999) 123-45-67".to_owned(),
            email: "ivan@example.com".to_owned(),
        }
    }

    #[test]
    fn create_request_normalizes_phone() {
        let request = create_request();
        assert!(request.validate().is_ok());

        let model = request.into_model();
        assert_eq!(model.phone.as_deref(), Some("+79991234567"));
        assert_eq!(model.first_name.as_deref(), Some("Ivan"));
        assert!(model.time_insure_end.is_some());
    }

    #[test]
    fn create_request_rejects_invalid_fields() {
        let request = CreateUserData {
            first_name: String::new(),
            phone: "12345".to_owned(),
            email: "not-an-email".to_owned(),
            ..create_request()
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("last_name"));
    }

    #[test]
    fn update_request_is_partial() {
        let update = UpdateUserData {
            phone: Some("+7 999 000 11 22".to_owned()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let model = update.into_model();
        assert_eq!(model.phone.as_deref(), Some("+79990001122"));
        assert!(model.first_name.is_none());
        assert!(!model.is_empty());

        assert!(UpdateUserData::default().into_model().is_empty());
    }

    #[test]
    fn listing_filter() {
        let query = ListUserData::default();
        assert!(query.to_filter().is_empty());

        let query = ListUserData {
            user_id: Some(7),
            phone_number: Some("89991234567".to_owned()),
            ..Default::default()
        };
        let filter = query.to_filter();
        assert_eq!(filter.user_id, Some(7));
        assert_eq!(filter.phone.as_deref(), Some("+79991234567"));
        assert!(filter.insured_until.is_none());
    }
}
