use crate::domain::ReportEntry;
use crate::port::LogSink;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Serialize)]
pub struct ReportAck {
    pub status: &'static str,
    pub issue: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Handler for POST /log_report (free-form issue reports from the agent).
pub async fn report_handler(State(sink): State<Arc<dyn LogSink>>, body: String) -> Response {
    let payload = match serde_json::from_str::<Value>(&body) {
        Ok(Value::Null) | Err(_) => {
            info!("Rejected report with empty or unparseable body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "No data provided",
                }),
            )
                .into_response();
        }
        Ok(payload) => payload,
    };

    let entry = ReportEntry::from_payload(&payload, Local::now().to_rfc3339());
    let issue = entry.message.clone();

    match sink.append(entry.render()).await {
        Ok(()) => {
            info!(issue = %issue, "Logged issue report");
            (
                StatusCode::OK,
                Json(ReportAck {
                    status: "logged",
                    issue,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to append report to call log: {e}");
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
