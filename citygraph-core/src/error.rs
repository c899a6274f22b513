//! Error types for citygraph-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
///
/// Every variant here is a caller error: it is detected before any network
/// call is made, and retrying the same input will fail the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Entity type name not present in the schema registry
    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    /// Subtype name not declared by the entity's schema
    #[error("Unknown subtype '{subtype}' for entity type {entity}")]
    UnknownSubtype {
        /// Entity type name
        entity: &'static str,
        /// Rejected subtype name
        subtype: String,
    },

    /// Field name not declared by the entity's schema
    #[error("Unknown property '{property}' for entity type {entity}")]
    UnknownProperty {
        /// Entity type name
        entity: &'static str,
        /// Rejected field name
        property: String,
    },

    /// Required field absent from a create request
    #[error("Missing required field '{field}' for entity type {entity}")]
    MissingRequiredField {
        /// Entity type name
        entity: &'static str,
        /// Missing field name
        field: &'static str,
    },

    /// Value cannot be coerced to the schema's declared datatype
    #[error("Cannot coerce {value} to {datatype}")]
    InvalidLiteralFormat {
        /// Display form of the rejected value
        value: String,
        /// Target datatype name
        datatype: &'static str,
    },

    /// Local name unusable as an IRI suffix
    #[error("Invalid local name: {0}")]
    InvalidLocalName(String),

    /// Filter not supported by the entity's schema
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),
}

impl Error {
    /// Create an unknown entity type error
    pub fn unknown_entity_type(name: impl Into<String>) -> Self {
        Error::UnknownEntityType(name.into())
    }

    /// Create an invalid literal format error
    pub fn invalid_literal(value: impl Into<String>, datatype: &'static str) -> Self {
        Error::InvalidLiteralFormat {
            value: value.into(),
            datatype,
        }
    }

    /// Create an invalid local name error
    pub fn invalid_local_name(msg: impl Into<String>) -> Self {
        Error::InvalidLocalName(msg.into())
    }

    /// Create an unsupported filter error
    pub fn unsupported_filter(msg: impl Into<String>) -> Self {
        Error::UnsupportedFilter(msg.into())
    }
}
