//! Request-metadata extraction for the completed-request log record.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderName};
use serde_json::Value;

use crate::telemetry::RequestTrace;

fn header_string(parts: &Parts, name: HeaderName) -> String {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Capture the request metadata the completed-request log record needs.
///
/// Infallible: absent headers become empty strings. The request body is
/// filled in later by the handler, after the body extractor has run.
impl<S> FromRequestParts<S> for RequestTrace
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestTrace {
            method: parts.method.to_string(),
            url: parts.uri.to_string(),
            ip_client: header_string(parts, header::HOST),
            agent_client: header_string(parts, header::USER_AGENT),
            token_access: header_string(parts, header::AUTHORIZATION),
            query_request: parts.uri.query().unwrap_or_default().to_string(),
            body_request: Value::Null,
        })
    }
}
