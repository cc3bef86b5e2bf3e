//! Request Tracing Middleware

use tower_http::trace::{HttpMakeClassifier, TraceLayer};

/// Create the HTTP trace layer applied to every request.
pub fn create_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
}
