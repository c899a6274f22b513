//! # CityGraph SPARQL
//!
//! Schema-driven SPARQL generation: SELECT queries for list/get access
//! patterns, INSERT/DELETE-INSERT/DELETE-WHERE updates for the entity
//! lifecycle, and a read-only validation pass for caller-supplied queries.
//!
//! Everything here is pure string generation with no I/O. Builders take an
//! [`EntitySchema`](citygraph_core::EntitySchema) and emit statements the
//! `citygraph-client` crate sends to the store. The central design decision
//! is that every non-identity property joins via `OPTIONAL`: RDF data is
//! schema-optional, and a record missing a property must still be returned.

pub mod search;
pub mod select;
pub mod update;
pub mod validate;

mod text;

pub use search::{class_list_query, concept_search_query};
pub use select::{get_query, list_query, ListFilters};
pub use update::{ask_subject_query, delete_query, insert_query, update_queries};
pub use validate::{validate_read_only, QueryForm, ValidationError};
