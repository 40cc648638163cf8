//! Plain data records mapped to database tables.

mod insurance_info;
mod user_data;

pub use insurance_info::{InsuranceInfo, NewInsuranceInfo, UpdateInsuranceInfo};
pub use user_data::{NewUserData, UpdateUserData, UserData};
