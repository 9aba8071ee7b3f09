//! Field validators for camper and signup writes.
//!
//! Services call these before executing any statement, so a failure leaves the
//! transaction untouched and it is rolled back without changing a row.

use std::ops::RangeInclusive;

use crate::error::{CampError, CampResult};

pub const CAMPER_AGE_RANGE: RangeInclusive<i64> = 8..=18;
pub const SIGNUP_TIME_RANGE: RangeInclusive<i64> = 0..=23;

pub fn validate_camper_name(name: Option<&str>) -> CampResult<String> {
    match name {
        Some(n) if !n.is_empty() => Ok(n.to_string()),
        _ => Err(CampError::generic_validation()),
    }
}

pub fn validate_camper_age(age: Option<i64>) -> CampResult<i64> {
    match age {
        Some(a) if CAMPER_AGE_RANGE.contains(&a) => Ok(a),
        _ => Err(CampError::validation(format!(
            "Age must be between {} and {}",
            CAMPER_AGE_RANGE.start(),
            CAMPER_AGE_RANGE.end()
        ))),
    }
}

pub fn validate_signup_time(time: Option<i64>) -> CampResult<i64> {
    match time {
        Some(t) if SIGNUP_TIME_RANGE.contains(&t) => Ok(t),
        _ => Err(CampError::generic_validation()),
    }
}
