use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Optional predicates for [`list_user_data`], combined with `AND`.
///
/// [`list_user_data`]: crate::query::UserDataRepository::list_user_data
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDataFilter {
    /// Matches a single record by id.
    pub user_id: Option<i64>,
    /// Keeps records whose policy ends at or before this instant.
    pub insured_until: Option<Timestamp>,
    /// Matches an exact, already normalized phone number.
    pub phone: Option<String>,
}

impl UserDataFilter {
    /// Creates a filter that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_insured_until(mut self, insured_until: Timestamp) -> Self {
        self.insured_until = Some(insured_until);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns whether no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.insured_until.is_none() && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_predicates() {
        let filter = UserDataFilter::new();
        assert!(filter.is_empty());

        let until: Timestamp = "2030-01-01T00:00:00Z".parse().unwrap();
        let filter = filter
            .with_user_id(7)
            .with_insured_until(until)
            .with_phone("+79991234567");

        assert!(!filter.is_empty());
        assert_eq!(filter.user_id, Some(7));
        assert_eq!(filter.insured_until, Some(until));
        assert_eq!(filter.phone.as_deref(), Some("+79991234567"));
    }
}
