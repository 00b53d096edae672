//! Error types for trellis-json.

use thiserror::Error;
use trellis_core::HostError;

/// Result type for trellis-json operations.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Errors that can occur while reading or writing table documents.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Malformed JSON, or JSON that does not have the shape of a table document.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The placement engine rejected the host integration.
    #[error(transparent)]
    Host(#[from] HostError),
}
