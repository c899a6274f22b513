//! The store seam the service layer programs against.

use crate::error::Result;
use crate::results::SparqlResults;
use async_trait::async_trait;
use std::fmt::Debug;

/// A SPARQL 1.1 protocol store.
///
/// One method per protocol exchange; implementations perform exactly one
/// HTTP round trip per call, with no retry or buffering.
#[async_trait]
pub trait SparqlStore: Debug + Send + Sync {
    /// Execute a SELECT query and return the parsed bindings document.
    async fn query(&self, sparql: &str) -> Result<SparqlResults>;

    /// Execute an ASK query and return its boolean.
    async fn ask(&self, sparql: &str) -> Result<bool>;

    /// Execute an update statement. Success responses carry no body.
    async fn update(&self, sparql: &str) -> Result<()>;
}
