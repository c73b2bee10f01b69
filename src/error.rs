use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("fresher query failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("expected an array of freshers or an object with a `freshers` or `freshersData` array")]
    UnsupportedPayload,
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}
