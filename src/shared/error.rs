//! The error taxonomy, and its rendering as the error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// One variant per failure class the API can surface: a missing or
/// malformed input field, an update target that does not exist, and a
/// database read/write failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("query error: {0}")]
    Query(String),
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        Self::Query(error.to_string())
    }
}

impl AppError {
    /// HTTP status code carried by the error envelope.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::Query(_) => "query_error",
        }
    }

    /// Message safe to embed in a response body.
    ///
    /// Driver errors keep their detail in the log only; the client sees a
    /// generic message.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Query(_) => "database operation failed".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failed request reaches the error sink with full detail.
        tracing::error!(error = %self, "request failed");

        let status = self.status();
        let body = Json(serde_json::json!({
            "status": status.as_u16(),
            "msg": "process failed",
            "data": Value::Null,
            "error": {
                "kind": self.kind(),
                "message": self.public_message(),
            },
        }));

        (status, body).into_response()
    }
}
