//! Client error types.

use thiserror::Error;

/// Result type alias using our ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error type for store protocol operations.
///
/// No retry happens at this layer; every failure is surfaced as-is with the
/// store's diagnostic text where one was returned.
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// Network-level failure: timeout, connection refused, DNS
    #[error("Store unreachable: {0}")]
    StoreUnreachable(String),

    /// Non-success response from the query endpoint
    #[error("Query failed with status {status}: {body}")]
    QueryFailed {
        /// HTTP status code
        status: u16,
        /// Raw response body (store diagnostic text)
        body: String,
    },

    /// Non-success response from the update endpoint
    #[error("Update failed with status {status}: {body}")]
    UpdateFailed {
        /// HTTP status code
        status: u16,
        /// Raw response body (store diagnostic text)
        body: String,
    },

    /// Response body could not be parsed as SPARQL JSON results
    #[error("Invalid response from store: {0}")]
    InvalidResponse(String),
}
