use crate::adapter::text_file::TextFileSink;
use crate::config::Settings;
use crate::error::ServiceError;
use crate::port::LogSink;
use std::sync::Arc;

/// Shared application state holding the log sink.
pub struct AppState {
    pub sink: Arc<dyn LogSink>,
}

impl AppState {
    /// Create `AppState` from configuration settings, opening the call log
    /// in append mode.
    pub async fn from_settings(settings: &Settings) -> Result<Self, ServiceError> {
        let sink = TextFileSink::open(&settings.log_file)
            .await
            .map_err(|e| ServiceError::Sink(format!("{e:#}")))?;
        ::tracing::info!("Appending call log blocks to {}", sink.path().display());

        Ok(Self {
            sink: Arc::new(sink),
        })
    }
}
