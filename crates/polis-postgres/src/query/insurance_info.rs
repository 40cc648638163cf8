//! Insurance policy repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{InsuranceInfo, NewInsuranceInfo, UpdateInsuranceInfo};
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for `insurance_info` table operations.
pub trait InsuranceInfoRepository {
    /// Inserts a policy for an existing customer record.
    ///
    /// Fails with the `insurance_info_user_id_fkey` constraint if the
    /// customer does not exist.
    fn create_insurance_info(
        &mut self,
        new_info: NewInsuranceInfo,
    ) -> impl Future<Output = PgResult<InsuranceInfo>> + Send;

    /// Finds a policy by id.
    fn find_insurance_info_by_id(
        &mut self,
        info_id: i64,
    ) -> impl Future<Output = PgResult<Option<InsuranceInfo>>> + Send;

    /// Applies a partial update and returns the updated policy.
    fn update_insurance_info(
        &mut self,
        info_id: i64,
        changes: UpdateInsuranceInfo,
    ) -> impl Future<Output = PgResult<Option<InsuranceInfo>>> + Send;

    /// Deletes a policy and returns it.
    fn delete_insurance_info(
        &mut self,
        info_id: i64,
    ) -> impl Future<Output = PgResult<Option<InsuranceInfo>>> + Send;

    /// Lists the policies of one customer, ordered by id.
    fn list_user_insurance_info(
        &mut self,
        user_id: i64,
    ) -> impl Future<Output = PgResult<Vec<InsuranceInfo>>> + Send;
}

impl InsuranceInfoRepository for PgConnection {
    async fn create_insurance_info(&mut self, new_info: NewInsuranceInfo) -> PgResult<InsuranceInfo> {
        use schema::insurance_info;

        let info = diesel::insert_into(insurance_info::table)
            .values(&new_info)
            .returning(InsuranceInfo::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            insurance_id = info.id,
            user_id = info.user_id,
            insurance_kind = %info.insurance_kind,
            "Created insurance info"
        );

        Ok(info)
    }

    async fn find_insurance_info_by_id(&mut self, info_id: i64) -> PgResult<Option<InsuranceInfo>> {
        use schema::insurance_info::{self, dsl};

        let info = insurance_info::table
            .filter(dsl::id.eq(info_id))
            .select(InsuranceInfo::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(info)
    }

    async fn update_insurance_info(
        &mut self,
        info_id: i64,
        changes: UpdateInsuranceInfo,
    ) -> PgResult<Option<InsuranceInfo>> {
        use schema::insurance_info::{self, dsl};

        if changes.is_empty() {
            return self.find_insurance_info_by_id(info_id).await;
        }

        let info = diesel::update(insurance_info::table.filter(dsl::id.eq(info_id)))
            .set(&changes)
            .returning(InsuranceInfo::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(info)
    }

    async fn delete_insurance_info(&mut self, info_id: i64) -> PgResult<Option<InsuranceInfo>> {
        use schema::insurance_info::{self, dsl};

        let info = diesel::delete(insurance_info::table.filter(dsl::id.eq(info_id)))
            .returning(InsuranceInfo::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(info)
    }

    async fn list_user_insurance_info(&mut self, user_id: i64) -> PgResult<Vec<InsuranceInfo>> {
        use schema::insurance_info::{self, dsl};

        insurance_info::table
            .filter(dsl::user_id.eq(user_id))
            .order(dsl::id.asc())
            .select(InsuranceInfo::as_select())
            .load(self)
            .await
            .map_err(PgError::from)
    }
}
