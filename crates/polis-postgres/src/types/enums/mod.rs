//! Enumerations mapped to PostgreSQL enum types.

mod insurance_kind;

pub use insurance_kind::InsuranceKind;
