use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PalmgateError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No palm data registered")]
    NoTemplateRegistered,

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for PalmgateError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            PalmgateError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "EMAIL_TAKEN".to_string(),
                    message: "Email already registered.".to_string(),
                },
            ),
            PalmgateError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message: "Invalid credentials.".to_string(),
                },
            ),
            PalmgateError::NoTemplateRegistered => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NO_TEMPLATE".to_string(),
                    message: "No palm data registered.".to_string(),
                },
            ),
            PalmgateError::Database(_) | PalmgateError::Json(_) | PalmgateError::PasswordHash(_) => {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred.".to_string(),
                    },
                )
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
