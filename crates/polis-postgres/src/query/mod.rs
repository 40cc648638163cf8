//! Repository traits implemented for [`PgConnection`].
//!
//! Each trait groups the queries of one table. Methods take plain model
//! records and return them, with no hidden session state.
//!
//! [`PgConnection`]: crate::PgConnection

mod insurance_info;
mod user_data;

pub use insurance_info::InsuranceInfoRepository;
pub use user_data::UserDataRepository;
