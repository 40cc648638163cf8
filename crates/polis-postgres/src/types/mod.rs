//! Constraints, enumerations, filters and other custom types.

mod constraint;
mod enums;
mod filtering;

pub use constraint::{
    ConstraintCategory, ConstraintViolation, InsuranceInfoConstraints, UserDataConstraints,
};
pub use enums::InsuranceKind;
pub use filtering::UserDataFilter;
