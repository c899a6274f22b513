//! Property datatypes.
//!
//! Centralizes the datatype vocabulary shared by the literal codec, the query
//! builders, and the result mapper. `Reference` marks object properties
//! (entity-to-entity links); everything else is a literal datatype.

use citygraph_vocab::xsd;

/// Declared datatype of a schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datatype {
    /// Plain string literal (no datatype tag on the wire)
    String,
    /// xsd:integer
    Integer,
    /// xsd:float
    Float,
    /// xsd:boolean
    Boolean,
    /// xsd:time
    Time,
    /// IRI reference to another entity
    Reference,
}

impl Datatype {
    /// XSD datatype IRI used to tag encoded literals.
    ///
    /// `String` and `Reference` return `None`: plain strings are written
    /// untagged (matching how the store serves them back), and references are
    /// IRIs, not literals.
    pub fn xsd_iri(self) -> Option<&'static str> {
        match self {
            Datatype::String => None,
            Datatype::Integer => Some(xsd::INTEGER),
            Datatype::Float => Some(xsd::FLOAT),
            Datatype::Boolean => Some(xsd::BOOLEAN),
            Datatype::Time => Some(xsd::TIME),
            Datatype::Reference => None,
        }
    }

    /// Short name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Datatype::String => "string",
            Datatype::Integer => "integer",
            Datatype::Float => "float",
            Datatype::Boolean => "boolean",
            Datatype::Time => "time",
            Datatype::Reference => "reference",
        }
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
