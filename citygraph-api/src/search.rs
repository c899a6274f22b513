//! Ontology exploration: keyword concept search and class listings.
//!
//! Complements the entity CRUD surface with queries over the ontology
//! itself: which concepts match a keyword, which classes exist, and how the
//! classes nest. Concepts fold by IRI the same way entity bindings fold by
//! subject, so a concept with several labels or types still comes back once.

use crate::error::Result;
use citygraph_client::SparqlStore;
use citygraph_sparql::search::{class_list_query, concept_search_query};
use citygraph_vocab::city;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::info;

/// One concept matched by a keyword search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptMatch {
    /// Concept IRI
    pub uri: String,
    /// Bound label, or the IRI's local name when no label is stored
    pub label: String,
    /// IRI of the concept's class
    #[serde(rename = "type")]
    pub class_iri: String,
}

/// One ontology class with its direct relatives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassInfo {
    /// Class IRI
    pub uri: String,
    /// Bound label, or the IRI's local name when no label is stored
    pub label: String,
    /// Direct parent class, if any
    pub parent: Option<String>,
    /// Direct subclasses, in first-seen order
    pub subclasses: Vec<String>,
}

/// One node in the nested class hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassNode {
    /// Class IRI
    pub uri: String,
    /// Bound label, or the IRI's local name when no label is stored
    pub label: String,
    /// Direct subclasses as nested nodes
    pub children: Vec<ClassNode>,
}

/// Ontology exploration over a store.
#[derive(Debug)]
pub struct SearchService<S> {
    store: S,
}

impl<S: SparqlStore> SearchService<S> {
    /// Create a service over a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Search concepts by a case-insensitive keyword against IRIs and
    /// labels. A blank keyword browses everything (capped by the query's
    /// row limit).
    pub async fn search(&self, keyword: &str) -> Result<Vec<ConceptMatch>> {
        let results = self.store.query(&concept_search_query(keyword)).await?;

        let mut matches: Vec<ConceptMatch> = Vec::new();
        let mut labeled: HashSet<String> = HashSet::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in results.bindings() {
            let Some(concept) = row.get("concept").filter(|t| t.is_uri()) else {
                continue;
            };
            let idx = *index.entry(concept.value.clone()).or_insert_with(|| {
                matches.push(ConceptMatch {
                    uri: concept.value.clone(),
                    label: display_label(&concept.value),
                    class_iri: row
                        .get("type")
                        .map(|t| t.value.clone())
                        .unwrap_or_default(),
                });
                matches.len() - 1
            });
            // first bound label wins over the local-name fallback
            if let Some(label) = row.get("label") {
                if labeled.insert(concept.value.clone()) {
                    matches[idx].label = label.value.clone();
                }
            }
        }

        info!(keyword, count = matches.len(), "concept search completed");
        Ok(matches)
    }

    /// List every ontology class with its label, direct parent, and direct
    /// subclasses. One exchange; subclasses are derived by inverting the
    /// parent links.
    pub async fn classes(&self) -> Result<Vec<ClassInfo>> {
        let results = self.store.query(&class_list_query()).await?;

        let mut classes: Vec<ClassInfo> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in results.bindings() {
            let Some(class) = row.get("class").filter(|t| t.is_uri()) else {
                continue;
            };
            let idx = *index.entry(class.value.clone()).or_insert_with(|| {
                classes.push(ClassInfo {
                    uri: class.value.clone(),
                    label: row
                        .get("label")
                        .map(|t| t.value.clone())
                        .unwrap_or_else(|| display_label(&class.value)),
                    parent: None,
                    subclasses: Vec::new(),
                });
                classes.len() - 1
            });
            if classes[idx].parent.is_none() {
                classes[idx].parent = row.get("parent").map(|t| t.value.clone());
            }
        }

        for child_idx in 0..classes.len() {
            let Some(parent) = classes[child_idx].parent.clone() else {
                continue;
            };
            let child_uri = classes[child_idx].uri.clone();
            if let Some(&parent_idx) = index.get(&parent) {
                classes[parent_idx].subclasses.push(child_uri);
            }
        }

        info!(count = classes.len(), "class listing completed");
        Ok(classes)
    }

    /// The class hierarchy as nested trees, one per root class. A class
    /// whose parent is unknown (absent, or outside the listed classes)
    /// becomes a root.
    pub async fn hierarchy(&self) -> Result<Vec<ClassNode>> {
        let classes = self.classes().await?;
        Ok(build_hierarchy(&classes))
    }
}

fn build_hierarchy(classes: &[ClassInfo]) -> Vec<ClassNode> {
    let index: HashMap<&str, &ClassInfo> =
        classes.iter().map(|c| (c.uri.as_str(), c)).collect();

    // a malformed subclass cycle would recurse forever; the visited set
    // breaks it by treating the re-entered class as a leaf elsewhere
    let mut visited: HashSet<&str> = HashSet::new();
    classes
        .iter()
        .filter(|c| {
            c.parent
                .as_deref()
                .map_or(true, |p| !index.contains_key(p))
        })
        .map(|root| build_node(root, &index, &mut visited))
        .collect()
}

fn build_node<'a>(
    info: &'a ClassInfo,
    index: &HashMap<&'a str, &'a ClassInfo>,
    visited: &mut HashSet<&'a str>,
) -> ClassNode {
    visited.insert(info.uri.as_str());
    let mut children = Vec::new();
    for uri in &info.subclasses {
        if let Some(child) = index.get(uri.as_str()).copied() {
            if !visited.contains(child.uri.as_str()) {
                children.push(build_node(child, index, visited));
            }
        }
    }
    ClassNode {
        uri: info.uri.clone(),
        label: info.label.clone(),
        children,
    }
}

/// Local-name fallback when a concept carries no label.
fn display_label(uri: &str) -> String {
    match city::local_name(uri) {
        Some(local) => local.to_string(),
        None => uri
            .rsplit(['#', '/'])
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(uri)
            .to_string(),
    }
}
