//! # CityGraph Client
//!
//! HTTP client for a SPARQL 1.1 protocol endpoint (Fuseki in deployment).
//!
//! [`StoreClient`] sends SELECT/ASK queries and updates as POST bodies with
//! the protocol content types and parses the standard SPARQL JSON results
//! shape. The [`SparqlStore`] trait is the seam the service layer programs
//! against, so tests can script a store without a network.

pub mod client;
pub mod config;
pub mod error;
pub mod results;
pub mod store;

pub use client::{ConnectionStatus, StoreClient};
pub use config::StoreConfig;
pub use error::{ClientError, Result};
pub use results::{BoundTerm, SparqlResults};
pub use store::SparqlStore;
