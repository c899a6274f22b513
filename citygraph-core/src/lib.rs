//! # CityGraph Core
//!
//! Core types for the CityGraph semantic data-access layer: entity schemas,
//! the literal codec, and resolved entity records.
//!
//! The layer maps typed CRUD requests onto SPARQL against a triple store.
//! This crate holds everything that is pure data: which predicates and class
//! IRIs each entity type uses ([`schema`]), how native values convert to and
//! from RDF literal syntax ([`literal`]), and the typed record shape handed
//! back to callers ([`record`]). Query generation and I/O live in the
//! `citygraph-sparql` and `citygraph-client` crates.

pub mod datatype;
pub mod error;
pub mod literal;
pub mod record;
pub mod schema;

pub use datatype::Datatype;
pub use error::{Error, Result};
pub use record::{EntityRecord, PropertyValue};
pub use schema::{EntitySchema, EntityType, PropertyDef, SchemaRegistry};
