//! Customer record repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{NewUserData, UpdateUserData, UserData};
use crate::types::UserDataFilter;
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for `user_data` table operations.
pub trait UserDataRepository {
    /// Inserts a customer record and returns it with its generated id.
    fn create_user_data(
        &mut self,
        new_user: NewUserData,
    ) -> impl Future<Output = PgResult<UserData>> + Send;

    /// Finds a customer record by id.
    fn find_user_data_by_id(
        &mut self,
        user_id: i64,
    ) -> impl Future<Output = PgResult<Option<UserData>>> + Send;

    /// Applies a partial update and returns the updated record.
    ///
    /// Returns `None` if no record has the given id. An empty changeset
    /// returns the stored record unchanged.
    fn update_user_data(
        &mut self,
        user_id: i64,
        changes: UpdateUserData,
    ) -> impl Future<Output = PgResult<Option<UserData>>> + Send;

    /// Deletes a customer record and returns it.
    ///
    /// Policies attached to the record are deleted with it.
    fn delete_user_data(
        &mut self,
        user_id: i64,
    ) -> impl Future<Output = PgResult<Option<UserData>>> + Send;

    /// Lists every record matching `filter`, ordered by id.
    fn list_user_data(
        &mut self,
        filter: UserDataFilter,
    ) -> impl Future<Output = PgResult<Vec<UserData>>> + Send;
}

impl UserDataRepository for PgConnection {
    async fn create_user_data(&mut self, new_user: NewUserData) -> PgResult<UserData> {
        use schema::user_data;

        let user = diesel::insert_into(user_data::table)
            .values(&new_user)
            .returning(UserData::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(target: TRACING_TARGET_QUERY, user_id = user.id, "Created user data");
        Ok(user)
    }

    async fn find_user_data_by_id(&mut self, user_id: i64) -> PgResult<Option<UserData>> {
        use schema::user_data::{self, dsl};

        let user = user_data::table
            .filter(dsl::id.eq(user_id))
            .select(UserData::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn update_user_data(
        &mut self,
        user_id: i64,
        changes: UpdateUserData,
    ) -> PgResult<Option<UserData>> {
        use schema::user_data::{self, dsl};

        if changes.is_empty() {
            return self.find_user_data_by_id(user_id).await;
        }

        let user = diesel::update(user_data::table.filter(dsl::id.eq(user_id)))
            .set(&changes)
            .returning(UserData::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn delete_user_data(&mut self, user_id: i64) -> PgResult<Option<UserData>> {
        use schema::user_data::{self, dsl};

        let user = diesel::delete(user_data::table.filter(dsl::id.eq(user_id)))
            .returning(UserData::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn list_user_data(&mut self, filter: UserDataFilter) -> PgResult<Vec<UserData>> {
        use schema::user_data::{self, dsl};

        let mut query = user_data::table
            .order(dsl::id.asc())
            .select(UserData::as_select())
            .into_boxed();

        if let Some(user_id) = filter.user_id {
            query = query.filter(dsl::id.eq(user_id));
        }

        if let Some(insured_until) = filter.insured_until {
            let insured_until = jiff_diesel::Timestamp::from(insured_until);
            query = query.filter(dsl::time_insure_end.le(insured_until));
        }

        if let Some(phone) = filter.phone {
            query = query.filter(dsl::phone.eq(phone));
        }

        let users: Vec<UserData> = query.load(self).await.map_err(PgError::from)?;

        tracing::debug!(target: TRACING_TARGET_QUERY, count = users.len(), "Listed user data");
        Ok(users)
    }
}
