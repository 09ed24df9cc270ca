use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal { message: String, cause: String },
}

impl ApiError {
    /// A 500 with a fixed public message; the cause is logged and, in debug
    /// builds only, echoed in the response `details` field.
    pub fn internal(message: &str, cause: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.to_string(),
            cause: cause.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Internal { message, cause } => {
                tracing::error!("internal error: {cause}");
                let details = cfg!(debug_assertions).then_some(cause);
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        (status, Json(ErrorBody { error: message, details })).into_response()
    }
}
