//! SPARQL JSON results format (`application/sparql-results+json`).

use serde::Deserialize;
use std::collections::BTreeMap;

/// One bound term in a results row: `{type, value, datatype?, xml:lang?}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BoundTerm {
    /// Term kind: "uri", "literal", or "bnode"
    #[serde(rename = "type")]
    pub kind: String,
    /// Lexical value (IRI for uri terms)
    pub value: String,
    /// Datatype IRI, when the store tagged the literal
    #[serde(default)]
    pub datatype: Option<String>,
    /// Language tag, when present
    #[serde(default, rename = "xml:lang")]
    pub lang: Option<String>,
}

impl BoundTerm {
    /// True for IRI terms.
    pub fn is_uri(&self) -> bool {
        self.kind == "uri"
    }
}

/// One results row: variable name -> bound term. Unbound variables are
/// absent keys, per the results format.
pub type BindingRow = BTreeMap<String, BoundTerm>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsHead {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsBody {
    #[serde(default)]
    pub bindings: Vec<BindingRow>,
}

/// Parsed SPARQL JSON results document.
///
/// SELECT responses carry `head.vars` + `results.bindings`; ASK responses
/// carry `boolean` and no `results` member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub head: ResultsHead,
    #[serde(default)]
    pub results: Option<ResultsBody>,
    #[serde(default)]
    pub boolean: Option<bool>,
}

impl SparqlResults {
    /// Binding rows, empty for ASK responses.
    pub fn bindings(&self) -> &[BindingRow] {
        self.results.as_ref().map(|r| r.bindings.as_slice()).unwrap_or(&[])
    }
}
