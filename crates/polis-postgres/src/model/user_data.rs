//! Customer record model.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::user_data;

/// A customer record.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = user_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserData {
    /// Unique record identifier.
    pub id: i64,
    /// When the record was created.
    pub time_create: Option<Timestamp>,
    /// When the customer's policy ends.
    pub time_insure_end: Option<Timestamp>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    /// Phone number in `+7XXXXXXXXXX` form.
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Data for creating a customer record.
///
/// `time_create` is filled in by the database.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = user_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUserData {
    pub time_insure_end: Option<Timestamp>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Partial update of a customer record.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Default, Clone, AsChangeset)]
#[diesel(table_name = user_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateUserData {
    pub time_insure_end: Option<Timestamp>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl UpdateUserData {
    /// Returns whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.time_insure_end.is_none()
            && self.first_name.is_none()
            && self.middle_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update() {
        assert!(UpdateUserData::default().is_empty());
        let update = UpdateUserData {
            email: Some("a@b.ru".to_owned()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
