use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message used for field and relation failures that carry no specific text.
pub const GENERIC_VALIDATION_MESSAGE: &str = "validation errors";

#[derive(Debug, Error)]
pub enum CampError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl CampError {
    pub fn validation(message: impl Into<String>) -> Self {
        CampError::Validation(message.into())
    }

    pub fn generic_validation() -> Self {
        CampError::Validation(GENERIC_VALIDATION_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CampError::NotFound(_) => StatusCode::NOT_FOUND,
            CampError::Validation(_) => StatusCode::BAD_REQUEST,
            CampError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CampError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            CampError::Validation(message) => json!({ "errors": [message] }),
            CampError::NotFound(_) => json!({ "error": self.to_string() }),
            CampError::Database(e) => {
                tracing::error!(error = %e, "database failure");
                json!({ "error": e.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}

pub type CampResult<T> = Result<T, CampError>;
