use std::env;

use crate::error::ServiceError;

#[derive(Debug)]
pub struct Settings {
    /// HTTP server port (report + webhook + health)
    pub http_port: u16,
    /// Path of the append-only call log file
    pub log_file: String,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_port(self.http_port)?;
        validate_log_file(&self.log_file)?;
        Ok(())
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ServiceError> {
    if port == 0 {
        return Err(ServiceError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

/// Validates that the log file path is not empty or whitespace-only.
fn validate_log_file(path: &str) -> Result<(), ServiceError> {
    if path.trim().is_empty() {
        return Err(ServiceError::Config("Log file path cannot be empty".into()));
    }
    Ok(())
}

pub fn get_configuration() -> Result<Settings, Box<dyn std::error::Error>> {
    // Server port with default
    let http_port = env::var("HTTP_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()?;

    // Call log path with default (relative to the working directory)
    let log_file = env::var("CALL_LOG_FILE").unwrap_or_else(|_| "call_logs.txt".to_string());

    let settings = Settings {
        http_port,
        log_file,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
