//! Ontology exploration queries: keyword concept search and class listings.
//!
//! Unlike the entity access patterns these are not schema-driven; they walk
//! whatever the store holds. The keyword match uses the same CONTAINS/LCASE
//! idiom as the entity text filter, against both the concept IRI and its
//! label (`rdfs:label` or the ontology's own name predicate).

use citygraph_core::literal::escape_literal;
use citygraph_vocab::{city, owl, rdf, rdfs};
use std::fmt::Write;

/// Row cap for concept search, matching what a browsing client can show.
pub const CONCEPT_SEARCH_LIMIT: usize = 50;

fn exploration_prefix_header() -> String {
    format!(
        "PREFIX {}: <{}>\nPREFIX rdf: <{}>\nPREFIX rdfs: <{}>\nPREFIX owl: <{}>\n",
        city::PREFIX,
        city::NAMESPACE,
        rdf::NAMESPACE,
        rdfs::NAMESPACE,
        owl::NAMESPACE
    )
}

/// Build the keyword concept search query.
///
/// A blank keyword matches everything (browse mode). Concepts with several
/// labels or types yield one row each; the caller folds rows per concept.
pub fn concept_search_query(keyword: &str) -> String {
    let mut body = String::new();
    body.push_str("  ?concept a ?type .\n");
    body.push_str("  OPTIONAL { ?concept rdfs:label ?label . }\n");
    body.push_str("  OPTIONAL { ?concept sc:hasName ?label . }\n");

    let keyword = keyword.trim();
    if !keyword.is_empty() {
        let escaped = escape_literal(keyword);
        writeln!(
            body,
            "  FILTER(CONTAINS(LCASE(STR(?concept)), LCASE(\"{escaped}\")) || CONTAINS(LCASE(STR(?label)), LCASE(\"{escaped}\")))"
        )
        .expect("write to String");
    }

    format!(
        "{}\nSELECT DISTINCT ?concept ?label ?type\nWHERE {{\n{body}}}\nLIMIT {CONCEPT_SEARCH_LIMIT}\n",
        exploration_prefix_header()
    )
}

/// Build the class listing query: every ontology class with its label and
/// direct parent, system vocabularies filtered out.
pub fn class_list_query() -> String {
    let mut body = String::new();
    body.push_str("  ?class a ?meta .\n");
    body.push_str("  FILTER(?meta = rdfs:Class || ?meta = owl:Class)\n");
    body.push_str("  OPTIONAL { ?class rdfs:label ?label . }\n");
    body.push_str("  OPTIONAL { ?class rdfs:subClassOf ?parent . }\n");
    for namespace in [rdfs::NAMESPACE, rdf::NAMESPACE, owl::NAMESPACE] {
        writeln!(body, "  FILTER(!STRSTARTS(STR(?class), \"{namespace}\"))")
            .expect("write to String");
    }

    format!(
        "{}\nSELECT DISTINCT ?class ?label ?parent\nWHERE {{\n{body}}}\n",
        exploration_prefix_header()
    )
}
