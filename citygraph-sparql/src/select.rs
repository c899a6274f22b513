//! SELECT query generation for the list and get access patterns.
//!
//! Both patterns bind `?<subject> a ?type` with a class union filter, then
//! join every declared property through `OPTIONAL`. A mandatory join would
//! silently drop any record missing even one property, so no property pattern
//! is ever mandatory. No ORDER BY is emitted; result order is whatever the
//! store returns.

use crate::text::{prefix_header, term};
use citygraph_core::error::{Error, Result};
use citygraph_core::literal::{escape_literal, validate_local_name};
use citygraph_core::schema::EntitySchema;
use std::fmt::Write;

/// Filters accepted by the list access pattern.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    /// Case-insensitive substring match against the name property
    pub q: Option<String>,
    /// Narrow to one exact subtype class
    pub subtype: Option<String>,
}

impl ListFilters {
    /// No filtering: every instance of the type.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Build the list query: all subjects of the schema's classes, optionally
/// narrowed by a text filter and/or an exact subtype.
pub fn list_query(schema: &EntitySchema, filters: &ListFilters) -> Result<String> {
    let mut body = String::new();
    push_class_patterns(&mut body, schema);
    push_property_patterns(&mut body, schema);

    if let Some(q) = filters.q.as_deref() {
        let name = schema
            .name_property
            .and_then(|n| schema.property(n))
            .filter(|p| p.filterable)
            .ok_or_else(|| {
                Error::unsupported_filter(format!(
                    "entity type {} has no filterable name property",
                    schema.entity_type
                ))
            })?;
        writeln!(
            body,
            "  FILTER(CONTAINS(LCASE(STR(?{})), LCASE(\"{}\")))",
            name.name,
            escape_literal(q)
        )
        .expect("write to String");
    }

    if let Some(subtype) = filters.subtype.as_deref() {
        let class = schema.resolve_class(Some(subtype))?;
        writeln!(body, "  FILTER(?type = {})", term(class)).expect("write to String");
    }

    Ok(assemble(schema, &body))
}

/// Build the get-by-local-name query.
///
/// The subject is matched by its local name against both IRI styles the store
/// may hold (`#local` and `/local`). No LIMIT is emitted: a subject with a
/// multi-valued property yields one row per value, and the mapper folds them
/// into a single record the same way it does for the list pattern.
pub fn get_query(schema: &EntitySchema, local: &str) -> Result<String> {
    validate_local_name(local)?;

    let mut body = String::new();
    push_class_patterns(&mut body, schema);
    writeln!(
        body,
        "  FILTER(STRAFTER(STR(?{subject}), \"#\") = \"{local}\" || STRENDS(STR(?{subject}), \"/{local}\"))",
        subject = schema.subject_var,
        local = escape_literal(local)
    )
    .expect("write to String");
    push_property_patterns(&mut body, schema);

    Ok(assemble(schema, &body))
}

fn push_class_patterns(body: &mut String, schema: &EntitySchema) {
    writeln!(body, "  ?{} a ?type .", schema.subject_var).expect("write to String");
    let union = schema
        .classes()
        .map(|class| format!("?type = {}", term(class)))
        .collect::<Vec<_>>()
        .join(" || ");
    writeln!(body, "  FILTER({union})").expect("write to String");
}

fn push_property_patterns(body: &mut String, schema: &EntitySchema) {
    for prop in schema.properties {
        writeln!(
            body,
            "  OPTIONAL {{ ?{} {} ?{} . }}",
            schema.subject_var,
            term(prop.predicate),
            prop.name
        )
        .expect("write to String");
    }
}

fn assemble(schema: &EntitySchema, body: &str) -> String {
    let vars = std::iter::once(schema.subject_var.to_string())
        .chain(std::iter::once("type".to_string()))
        .chain(schema.properties.iter().map(|p| p.name.to_string()))
        .map(|v| format!("?{v}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}\nSELECT {vars}\nWHERE {{\n{body}}}\n", prefix_header())
}
