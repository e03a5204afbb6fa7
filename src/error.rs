use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to open call log: {0}")]
    Sink(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Failed to append to call log: {0}")]
    Append(#[source] std::io::Error),
}
