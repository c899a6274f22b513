//! Update statement generation: create, partial update, delete.
//!
//! Validation (unknown fields, missing required fields, datatype coercion)
//! happens entirely here, before any statement leaves the process. A request
//! that fails validation performs no network call.

use crate::text::{prefix_header, term};
use citygraph_core::error::{Error, Result};
use citygraph_core::literal;
use citygraph_core::schema::EntitySchema;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Encoded (predicate, term) pairs for the supplied fields, in schema order.
///
/// `null` values are treated as absent. Unknown field names are rejected;
/// the store would happily accept triples for undeclared predicates, and the
/// result mapper would then never surface them again.
fn encode_fields<'s>(
    schema: &'s EntitySchema,
    fields: &BTreeMap<String, JsonValue>,
) -> Result<Vec<(&'s str, &'s str, String)>> {
    for name in fields.keys() {
        if schema.property(name).is_none() {
            return Err(Error::UnknownProperty {
                entity: schema.entity_type.name(),
                property: name.clone(),
            });
        }
    }

    let mut encoded = Vec::new();
    for prop in schema.properties {
        match fields.get(prop.name) {
            None | Some(JsonValue::Null) => {}
            Some(value) => {
                encoded.push((prop.name, prop.predicate, literal::encode(value, prop.datatype)?));
            }
        }
    }
    Ok(encoded)
}

/// Build the create statement: one `INSERT DATA` carrying the class assertion
/// plus one triple per supplied property.
///
/// Required fields absent from `fields` fail with `MissingRequiredField`.
pub fn insert_query(
    schema: &EntitySchema,
    uri: &str,
    class_iri: &str,
    fields: &BTreeMap<String, JsonValue>,
) -> Result<String> {
    for prop in schema.properties {
        let supplied = matches!(fields.get(prop.name), Some(v) if !v.is_null());
        if prop.required && !supplied {
            return Err(Error::MissingRequiredField {
                entity: schema.entity_type.name(),
                field: prop.name,
            });
        }
    }

    let encoded = encode_fields(schema, fields)?;

    let mut triples = format!("  <{uri}> a {} .\n", term(class_iri));
    for (_, predicate, object) in &encoded {
        writeln!(triples, "  <{uri}> {} {object} .", term(predicate)).expect("write to String");
    }

    Ok(format!(
        "{}\nINSERT DATA {{\n{triples}}}\n",
        prefix_header()
    ))
}

/// Build the partial-update statements: one combined DELETE/INSERT/WHERE per
/// supplied property, overwriting any existing triple for that predicate and
/// leaving unsupplied properties untouched.
///
/// Statements are meant to be executed sequentially; an interruption between
/// them leaves earlier properties updated and later ones untouched. There is
/// no rollback at this layer.
pub fn update_queries(
    schema: &EntitySchema,
    uri: &str,
    fields: &BTreeMap<String, JsonValue>,
) -> Result<Vec<String>> {
    let encoded = encode_fields(schema, fields)?;

    let statements = encoded
        .iter()
        .map(|(name, predicate, object)| {
            let pred = term(predicate);
            format!(
                "{header}\nDELETE {{\n  <{uri}> {pred} ?old_{name} .\n}}\n\
                 INSERT {{\n  <{uri}> {pred} {object} .\n}}\n\
                 WHERE {{\n  OPTIONAL {{ <{uri}> {pred} ?old_{name} . }}\n}}\n",
                header = prefix_header(),
            )
        })
        .collect();
    Ok(statements)
}

/// Build the delete statement: remove every triple whose subject is `uri`.
///
/// Inbound references from other subjects are not touched; deleting a record
/// can leave dangling edges.
pub fn delete_query(uri: &str) -> String {
    format!("DELETE WHERE {{\n  <{uri}> ?p ?o .\n}}\n")
}

/// Build the existence probe: true when the subject has at least one triple.
pub fn ask_subject_query(uri: &str) -> String {
    format!("ASK {{ <{uri}> ?p ?o }}")
}
