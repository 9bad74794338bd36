//! Error handling for the dashboard

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Reading or writing a config or data file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config or data file is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record holds a value that cannot be displayed, such as a non-positive goal target.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An asset tab name other than "traditional" or "crypto".
    #[error("Unknown asset kind: {0}")]
    UnknownAssetKind(String),
}
