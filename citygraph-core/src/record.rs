//! Resolved entity instances.

use serde::Serialize;
use std::collections::BTreeMap;

/// A decoded property value.
///
/// Values are decoded to native types using the schema's declared datatype
/// (the store itself often serves untagged lexical forms). `Many` carries the
/// merged values of a multi-valued property: RDF allows several triples with
/// the same predicate, and the mapper folds the resulting binding
/// cross-product into one record instead of emitting duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Plain string
    String(String),
    /// xsd:integer
    Integer(i64),
    /// xsd:float
    Float(f64),
    /// xsd:boolean
    Boolean(bool),
    /// xsd:time lexical form (e.g. "08:00:00")
    Time(String),
    /// IRI of a referenced entity
    Ref(String),
    /// Multi-valued property (distinct values, first-seen order)
    Many(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Merge another binding for the same property into this value.
    ///
    /// Equal values collapse; distinct values promote to `Many`.
    pub fn merge(&mut self, other: PropertyValue) {
        match self {
            PropertyValue::Many(values) => {
                if !values.contains(&other) {
                    values.push(other);
                }
            }
            current => {
                if *current != other {
                    let first = current.clone();
                    *current = PropertyValue::Many(vec![first, other]);
                }
            }
        }
    }
}

/// A resolved entity instance.
///
/// The subject IRI is the instance identity and never changes; `properties`
/// holds one entry per property the store actually has a triple for; absent
/// properties are absent keys, not defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    /// Subject IRI
    pub uri: String,
    /// Resolved class IRI (the exact type triple, which may be a subtype)
    #[serde(rename = "type")]
    pub class_iri: String,
    /// Property name -> decoded value
    #[serde(flatten)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl EntityRecord {
    /// Create an empty record for a subject.
    pub fn new(uri: impl Into<String>, class_iri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            class_iri: class_iri.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Fetch a property value by name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}
