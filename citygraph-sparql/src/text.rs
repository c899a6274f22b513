//! Shared text helpers for query generation.

use citygraph_vocab::{city, rdf};

/// PREFIX header emitted once per generated statement.
pub(crate) fn prefix_header() -> String {
    format!(
        "PREFIX {}: <{}>\nPREFIX rdf: <{}>\n",
        city::PREFIX,
        city::NAMESPACE,
        rdf::NAMESPACE
    )
}

/// Render an IRI as a prefixed name when it lives in the ontology namespace,
/// or as a bracketed IRI otherwise.
pub(crate) fn term(iri: &str) -> String {
    match city::local_name(iri) {
        Some(local) => format!("{}:{}", city::PREFIX, local),
        None => format!("<{iri}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_prefixes_ontology_iris() {
        assert_eq!(term(city::HAS_NAME), "sc:hasName");
        assert_eq!(term("http://example.org/p"), "<http://example.org/p>");
    }
}
