//! Structured logging setup and the completed-request trace record.

use serde_json::Value;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the process-wide subscriber. `RUST_LOG` wins over the
/// built-in filter.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,chat_api=debug,tower_http=debug"));

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Tracing initialized");
}

/// Request-scoped fields carried into the completed-request record.
///
/// Every field falls back to an empty value when the request did not
/// supply it, so the record always has the same shape.
#[derive(Debug, Clone, Default)]
pub struct RequestTrace {
    pub method: String,
    pub url: String,
    pub ip_client: String,
    pub agent_client: String,
    pub token_access: String,
    pub query_request: String,
    pub body_request: Value,
}

/// Emit one structured record for a completed API request.
///
/// Called by the response formatter right before the success envelope is
/// written; the subscriber stamps the timestamp.
pub fn finished_process_api(trace: &RequestTrace, msg: &str, code: u16, details: &Value) {
    tracing::info!(
        target: "chat_api::request",
        msg,
        code,
        details = %details,
        method = %trace.method,
        url = %trace.url,
        body_request = %trace.body_request,
        query_request = %trace.query_request,
        ip_client = %trace.ip_client,
        agent_client = %trace.agent_client,
        token_access = %trace.token_access,
        "request completed"
    );
}
