use crate::handler::health::health_handler;
use crate::handler::report::report_handler;
use crate::handler::webhook::call_ended_handler;
use crate::port::LogSink;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Build the HTTP router (health + report + call-ended webhook).
pub fn api_router(sink: Arc<dyn LogSink>) -> Router {
    let health_router = Router::new().route("/v1/health", get(health_handler));

    let sink_router = Router::new()
        .route("/log_report", post(report_handler))
        .route("/webhook/call_ended", post(call_ended_handler))
        .with_state(sink);

    Router::new().merge(health_router).merge(sink_router)
}
