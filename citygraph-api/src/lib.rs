//! # CityGraph API
//!
//! The service layer of the CityGraph semantic data-access stack: the
//! interface HTTP route handlers call.
//!
//! [`EntityService`] offers schema-driven CRUD over the supported entity
//! types (persons, transport modes, parking stations, travel plans); results
//! come back as typed [`EntityRecord`](citygraph_core::EntityRecord)s.
//! [`RawQueryService`] forwards validated read-only queries, and
//! [`SearchService`] explores the ontology itself (keyword concept search,
//! class listings, hierarchy). All are generic over the
//! [`SparqlStore`](citygraph_client::SparqlStore) seam.

pub mod error;
pub mod mapper;
pub mod raw;
pub mod search;
pub mod service;

pub use error::{ApiError, Result};
pub use raw::RawQueryService;
pub use search::{ClassInfo, ClassNode, ConceptMatch, SearchService};
pub use service::EntityService;

// the filter type callers pass to EntityService::list
pub use citygraph_sparql::select::ListFilters;
