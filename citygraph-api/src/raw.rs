//! Raw read-only queries supplied by callers.
//!
//! The custom-query surface lets clients run their own SELECT/ASK against
//! the store. Queries are validated as read-only before being forwarded;
//! anything else is rejected without touching the network.

use crate::error::Result;
use citygraph_client::{SparqlResults, SparqlStore};
use citygraph_sparql::validate::validate_read_only;
use tracing::info;

/// Validated pass-through for caller-supplied SELECT/ASK queries.
#[derive(Debug)]
pub struct RawQueryService<S> {
    store: S,
}

impl<S: SparqlStore> RawQueryService<S> {
    /// Create a service over a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate and execute a caller-supplied read-only query.
    pub async fn run(&self, sparql: &str) -> Result<SparqlResults> {
        let form = validate_read_only(sparql)?;
        let results = self.store.query(sparql).await?;
        info!(?form, rows = results.bindings().len(), "raw query completed");
        Ok(results)
    }
}
