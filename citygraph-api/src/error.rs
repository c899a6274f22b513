//! API error type wrapping the lower layers.

use citygraph_client::ClientError;
use citygraph_sparql::ValidationError;
use thiserror::Error;

/// Result type alias using our ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error surfaced to the service's callers (HTTP route handlers).
///
/// Validation errors are detected before any network call; store and
/// transport failures pass the store's diagnostic text through unchanged.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Schema or coercion error (caller error, pre-network)
    #[error("{0}")]
    Core(#[from] citygraph_core::Error),

    /// Transport or store protocol error
    #[error("{0}")]
    Client(#[from] ClientError),

    /// Caller-supplied raw query rejected as not read-only
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] ValidationError),

    /// Subject has no triples in the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Create would re-use an existing subject
    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

impl ApiError {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    /// Create an already exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        ApiError::AlreadyExists(msg.into())
    }
}
