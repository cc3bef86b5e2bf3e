//! Response Envelope
//!
//! Builds the uniform `{status, msg, data, error}` body every route
//! replies with, and logs the completed-request record before a success
//! envelope is written.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::shared::error::AppError;
use crate::telemetry::{self, RequestTrace};

/// The uniform response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: u16,
    pub msg: String,
    pub data: Value,
    pub error: Value,
}

/// Per-request response builder.
///
/// Pre-bound to the request's trace record and a mutable default
/// message/status pair, so a handler can hand controller results straight
/// to `success` or `failed`.
pub struct Reply {
    trace: RequestTrace,
    msg: String,
    status: StatusCode,
}

impl Reply {
    pub fn new(trace: RequestTrace) -> Self {
        Self {
            trace,
            msg: "process finished successfully".into(),
            status: StatusCode::OK,
        }
    }

    /// Override the status written on success (e.g. 201 for creations).
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Override the message written on success.
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Record the parsed request body so the completed-request log
    /// carries it.
    pub fn with_body<T: Serialize>(mut self, body: &T) -> Self {
        self.trace.body_request = serde_json::to_value(body).unwrap_or(Value::Null);
        self
    }

    /// Log the completed request, then write the success envelope.
    pub fn success<T: Serialize>(self, data: T) -> Response {
        let data = serde_json::to_value(&data).unwrap_or(Value::Null);
        telemetry::finished_process_api(&self.trace, &self.msg, self.status.as_u16(), &data);

        let body = Envelope {
            status: self.status.as_u16(),
            msg: self.msg,
            data,
            error: Value::Null,
        };

        (self.status, Json(body)).into_response()
    }

    /// Write the error envelope for a failed controller call.
    pub fn failed(self, error: AppError) -> Response {
        error.into_response()
    }
}
