//! `user_data` table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// `user_data` table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum UserDataConstraints {
    #[strum(serialize = "user_data_first_name_length")]
    FirstNameLength,
    #[strum(serialize = "user_data_middle_name_length")]
    MiddleNameLength,
    #[strum(serialize = "user_data_last_name_length")]
    LastNameLength,
    #[strum(serialize = "user_data_phone_format")]
    PhoneFormat,
    #[strum(serialize = "user_data_email_format")]
    EmailFormat,
}

impl UserDataConstraints {
    /// Creates a new [`UserDataConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        ConstraintCategory::Validation
    }

    /// Returns the request field the constraint guards.
    pub fn field(&self) -> &'static str {
        match self {
            UserDataConstraints::FirstNameLength => "first_name",
            UserDataConstraints::MiddleNameLength => "middle_name",
            UserDataConstraints::LastNameLength => "last_name",
            UserDataConstraints::PhoneFormat => "phone",
            UserDataConstraints::EmailFormat => "email",
        }
    }
}

impl From<UserDataConstraints> for String {
    #[inline]
    fn from(val: UserDataConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for UserDataConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_constraint_parses_back() {
        for constraint in UserDataConstraints::iter() {
            let name = constraint.to_string();
            assert_eq!(UserDataConstraints::new(&name), Some(constraint));
            assert!(name.starts_with("user_data_"));
        }
    }

    #[test]
    fn constraint_fields() {
        assert_eq!(UserDataConstraints::PhoneFormat.field(), "phone");
        assert_eq!(UserDataConstraints::MiddleNameLength.field(), "middle_name");
    }
}
