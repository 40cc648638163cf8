//! Insurance policy model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::insurance_info;
use crate::types::InsuranceKind;

/// An insurance policy attached to a customer record.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = insurance_info)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InsuranceInfo {
    /// Unique policy identifier.
    pub id: i64,
    /// Owning customer record.
    pub user_id: i64,
    pub insurance_kind: InsuranceKind,
    pub policy_number: Option<String>,
    /// When coverage starts.
    pub time_insure_start: Option<Timestamp>,
    /// When coverage ends.
    pub time_insure_end: Option<Timestamp>,
    pub time_create: Timestamp,
}

/// Data for creating an insurance policy.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = insurance_info)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewInsuranceInfo {
    pub user_id: i64,
    /// Defaults to [`InsuranceKind::Other`] when unset.
    pub insurance_kind: Option<InsuranceKind>,
    pub policy_number: Option<String>,
    pub time_insure_start: Option<Timestamp>,
    pub time_insure_end: Option<Timestamp>,
}

/// Partial update of an insurance policy.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = insurance_info)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateInsuranceInfo {
    pub insurance_kind: Option<InsuranceKind>,
    pub policy_number: Option<String>,
    pub time_insure_start: Option<Timestamp>,
    pub time_insure_end: Option<Timestamp>,
}

impl UpdateInsuranceInfo {
    /// Returns whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.insurance_kind.is_none()
            && self.policy_number.is_none()
            && self.time_insure_start.is_none()
            && self.time_insure_end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update() {
        assert!(UpdateInsuranceInfo::default().is_empty());
        assert!(
            !UpdateInsuranceInfo {
                insurance_kind: Some(InsuranceKind::Mortgage),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
