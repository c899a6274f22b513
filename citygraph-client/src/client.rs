//! HTTP client for the triple store's SPARQL protocol endpoints.

use crate::config::StoreConfig;
use crate::error::{ClientError, Result};
use crate::results::SparqlResults;
use crate::store::SparqlStore;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const CONTENT_TYPE_QUERY: &str = "application/sparql-query";
const CONTENT_TYPE_UPDATE: &str = "application/sparql-update";
const ACCEPT_RESULTS: &str = "application/sparql-results+json";

/// HTTP client for a SPARQL query/update endpoint pair.
///
/// Statements are sent as POST bodies with the protocol content types.
/// Each call is one HTTP exchange with a bounded timeout; there is no retry
/// and no pooling beyond the underlying reqwest client.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    config: StoreConfig,
}

/// Outcome of a connection check against the query endpoint.
#[derive(Debug, Clone)]
pub struct ConnectionStatus {
    /// Whether the store answered the probe
    pub connected: bool,
    /// Query endpoint that was probed
    pub endpoint: String,
    /// Round-trip time of the probe, when it completed
    pub response_time: Option<Duration>,
    /// Failure detail, when the probe failed
    pub error: Option<String>,
}

impl StoreClient {
    /// Create a client for the configured endpoints.
    pub fn new(config: StoreConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { http, config }
    }

    /// The configured query endpoint.
    pub fn query_endpoint(&self) -> &str {
        &self.config.query_endpoint
    }

    /// Map a reqwest error (network/timeout) to a `ClientError`.
    fn map_network_error(e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::StoreUnreachable(format!("request timed out: {e}"))
        } else if e.is_connect() {
            ClientError::StoreUnreachable(format!("connection failed: {e}"))
        } else {
            ClientError::StoreUnreachable(e.to_string())
        }
    }

    async fn post_query(&self, sparql: &str) -> Result<SparqlResults> {
        debug!(endpoint = %self.config.query_endpoint, query = %sparql, "sending SPARQL query");
        let start = Instant::now();

        let resp = self
            .http
            .post(&self.config.query_endpoint)
            .header("Content-Type", CONTENT_TYPE_QUERY)
            .header("Accept", ACCEPT_RESULTS)
            .body(sparql.to_string())
            .send()
            .await
            .map_err(Self::map_network_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "store rejected query");
            return Err(ClientError::QueryFailed {
                status: status.as_u16(),
                body,
            });
        }

        let results: SparqlResults = resp
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        info!(
            rows = results.bindings().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "query completed"
        );
        Ok(results)
    }

    /// Probe the store with `ASK { ?s ?p ?o }` under the short check timeout.
    pub async fn check_connection(&self) -> ConnectionStatus {
        let start = Instant::now();
        let result = self
            .http
            .post(&self.config.query_endpoint)
            .timeout(self.config.check_timeout)
            .header("Content-Type", CONTENT_TYPE_QUERY)
            .header("Accept", ACCEPT_RESULTS)
            .body("ASK { ?s ?p ?o }")
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => ConnectionStatus {
                connected: true,
                endpoint: self.config.query_endpoint.clone(),
                response_time: Some(start.elapsed()),
                error: None,
            },
            Ok(resp) => ConnectionStatus {
                connected: false,
                endpoint: self.config.query_endpoint.clone(),
                response_time: Some(start.elapsed()),
                error: Some(format!("status {}", resp.status())),
            },
            Err(e) => ConnectionStatus {
                connected: false,
                endpoint: self.config.query_endpoint.clone(),
                response_time: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[async_trait]
impl SparqlStore for StoreClient {
    async fn query(&self, sparql: &str) -> Result<SparqlResults> {
        self.post_query(sparql).await
    }

    async fn ask(&self, sparql: &str) -> Result<bool> {
        let results = self.post_query(sparql).await?;
        results
            .boolean
            .ok_or_else(|| ClientError::InvalidResponse("ASK response missing boolean".to_string()))
    }

    async fn update(&self, sparql: &str) -> Result<()> {
        debug!(endpoint = %self.config.update_endpoint, update = %sparql, "sending SPARQL update");

        let resp = self
            .http
            .post(&self.config.update_endpoint)
            .header("Content-Type", CONTENT_TYPE_UPDATE)
            .body(sparql.to_string())
            .send()
            .await
            .map_err(Self::map_network_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "store rejected update");
            return Err(ClientError::UpdateFailed {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
