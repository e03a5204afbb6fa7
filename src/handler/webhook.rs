use crate::domain::CallWebhook;
use crate::handler::report::ErrorBody;
use crate::port::LogSink;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
}

/// Handler for POST /webhook/call_ended (call-platform lifecycle events).
///
/// The platform retries only on transport failures, so shape mismatches are
/// absorbed null-safely and answered with success. Only a failed append is
/// surfaced, as a 500 on the offending request.
pub async fn call_ended_handler(State(sink): State<Arc<dyn LogSink>>, body: String) -> Response {
    let payload = serde_json::from_str::<Value>(&body).unwrap_or_else(|e| {
        warn!("Unparseable webhook body, logging header only: {e}");
        Value::Null
    });

    let event = CallWebhook::from_payload(&payload, Local::now().to_rfc3339());
    info!(event = %event.event, call_id = ?event.call.call_id, "Webhook received");

    match sink.append(event.render()).await {
        Ok(()) => (StatusCode::OK, Json(WebhookAck { status: "received" })).into_response(),
        Err(e) => {
            error!("Failed to append webhook block to call log: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Failed to write log",
                }),
            )
                .into_response()
        }
    }
}
