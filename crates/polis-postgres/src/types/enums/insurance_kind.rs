//! Insurance kind enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of coverage an insurance policy provides.
///
/// Corresponds to the `INSURANCE_KIND` PostgreSQL enum.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[ExistingTypePath = "crate::schema::sql_types::InsuranceKind"]
pub enum InsuranceKind {
    /// Compulsory motor third-party liability insurance.
    #[db_rename = "osago"]
    #[serde(rename = "osago")]
    #[strum(serialize = "osago")]
    Osago,

    /// Property or life cover required by a mortgage.
    #[db_rename = "mortgage"]
    #[serde(rename = "mortgage")]
    #[strum(serialize = "mortgage")]
    Mortgage,

    /// Voluntary cover bought by the customer.
    #[db_rename = "selfinsurance"]
    #[serde(rename = "selfinsurance")]
    #[strum(serialize = "selfinsurance")]
    SelfInsurance,

    #[db_rename = "other"]
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    #[default]
    Other,
}

impl InsuranceKind {
    /// Returns whether the law requires this kind of cover.
    #[inline]
    pub fn is_mandatory(self) -> bool {
        matches!(self, InsuranceKind::Osago)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn string_round_trip() {
        for kind in InsuranceKind::iter() {
            let parsed: InsuranceKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&InsuranceKind::SelfInsurance).unwrap(),
            "\"selfinsurance\""
        );
        let kind: InsuranceKind = serde_json::from_str("\"osago\"").unwrap();
        assert_eq!(kind, InsuranceKind::Osago);
        assert!(kind.is_mandatory());
        assert!(serde_json::from_str::<InsuranceKind>("\"casco\"").is_err());
    }

    #[test]
    fn default_is_other() {
        assert_eq!(InsuranceKind::default(), InsuranceKind::Other);
    }
}
