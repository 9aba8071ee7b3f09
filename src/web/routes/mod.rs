use axum::{extract::rejection::JsonRejection, Json};
use tracing::warn;

use crate::error::{CampError, CampResult};

pub mod activities;
pub mod campers;
pub mod signups;

pub async fn home_handler() -> &'static str {
    ""
}

/// Malformed or mistyped bodies are reported like any other validation failure.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> CampResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected request body");
            Err(CampError::generic_validation())
        }
    }
}
