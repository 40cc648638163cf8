//! `insurance_info` table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// `insurance_info` table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum InsuranceInfoConstraints {
    // Referential constraints
    #[strum(serialize = "insurance_info_user_id_fkey")]
    UserIdFkey,

    // Policy validation constraints
    #[strum(serialize = "insurance_info_policy_number_length")]
    PolicyNumberLength,

    // Policy chronological constraints
    #[strum(serialize = "insurance_info_period_order")]
    PeriodOrder,
}

impl InsuranceInfoConstraints {
    /// Creates a new [`InsuranceInfoConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            InsuranceInfoConstraints::UserIdFkey => ConstraintCategory::Reference,
            InsuranceInfoConstraints::PolicyNumberLength => ConstraintCategory::Validation,
            InsuranceInfoConstraints::PeriodOrder => ConstraintCategory::Chronological,
        }
    }
}

impl From<InsuranceInfoConstraints> for String {
    #[inline]
    fn from(val: InsuranceInfoConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for InsuranceInfoConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
