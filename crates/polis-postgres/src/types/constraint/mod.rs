//! Named database constraints and their classification.

mod insurance_info;
mod user_data;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::insurance_info::InsuranceInfoConstraints;
pub use self::user_data::UserDataConstraints;

/// A violated constraint from any table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConstraintViolation {
    UserData(UserDataConstraints),
    InsuranceInfo(InsuranceInfoConstraints),
}

/// Broad classes of constraint violations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintCategory {
    /// Format, length or range checks on a single value.
    Validation,
    /// Ordering between timestamps of the same row.
    Chronological,
    /// A foreign key pointing at a missing row.
    Reference,
}

impl ConstraintViolation {
    /// Parses a constraint name reported by Postgres.
    ///
    /// ```
    /// use polis_postgres::types::{ConstraintViolation, UserDataConstraints};
    ///
    /// assert_eq!(
    ///     ConstraintViolation::new("user_data_phone_format"),
    ///     Some(ConstraintViolation::UserData(UserDataConstraints::PhoneFormat)),
    /// );
    /// assert!(ConstraintViolation::new("unknown_constraint").is_none());
    /// ```
    pub fn new(constraint: &str) -> Option<Self> {
        if constraint.starts_with("user_data_") {
            return UserDataConstraints::new(constraint).map(Self::UserData);
        }

        if constraint.starts_with("insurance_info_") {
            return InsuranceInfoConstraints::new(constraint).map(Self::InsuranceInfo);
        }

        None
    }

    /// Returns the table the constraint belongs to.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConstraintViolation::UserData(_) => "user_data",
            ConstraintViolation::InsuranceInfo(_) => "insurance_info",
        }
    }

    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::UserData(c) => c.categorize(),
            ConstraintViolation::InsuranceInfo(c) => c.categorize(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::UserData(c) => write!(f, "{c}"),
            ConstraintViolation::InsuranceInfo(c) => write!(f, "{c}"),
        }
    }
}

impl From<ConstraintViolation> for String {
    #[inline]
    fn from(val: ConstraintViolation) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ConstraintViolation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| format!("unknown constraint: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_constraints() {
        let violation = ConstraintViolation::new("insurance_info_user_id_fkey").unwrap();
        assert_eq!(violation.table_name(), "insurance_info");
        assert_eq!(violation.categorize(), ConstraintCategory::Reference);

        let violation = ConstraintViolation::new("user_data_email_format").unwrap();
        assert_eq!(violation.table_name(), "user_data");
        assert_eq!(violation.categorize(), ConstraintCategory::Validation);
    }

    #[test]
    fn unknown_constraints() {
        assert!(ConstraintViolation::new("user_data_pkey").is_none());
        assert!(ConstraintViolation::new("accounts_email_unique").is_none());
    }

    #[test]
    fn serde_uses_constraint_name() {
        let violation = ConstraintViolation::InsuranceInfo(InsuranceInfoConstraints::PeriodOrder);
        let json = serde_json::to_string(&violation).unwrap();
        assert_eq!(json, "\"insurance_info_period_order\"");

        let parsed: ConstraintViolation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, violation);
    }
}
