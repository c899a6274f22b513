//! Literal codec: native values <-> SPARQL term syntax.
//!
//! This module is the authoritative coercion point between JSON field values
//! and RDF terms. Encoding is strict: a value that cannot be coerced to the
//! schema's declared datatype is rejected before anything reaches the store.
//! Decoding is best-effort: stored lexical forms that do not parse as the
//! declared datatype are returned as plain strings rather than failing the
//! whole read (the store is schema-optional and holds whatever was written).

use crate::datatype::Datatype;
use crate::error::{Error, Result};
use crate::record::PropertyValue;
use citygraph_vocab::city;
use serde_json::Value as JsonValue;

/// Escape a string for use inside a double-quoted SPARQL literal.
pub fn escape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Validate a local name before it is appended to the namespace base.
///
/// Rejects anything that could break out of the IRI: whitespace and the
/// characters excluded from IRI references by RFC 3987.
pub fn validate_local_name(local: &str) -> Result<()> {
    if local.is_empty() {
        return Err(Error::invalid_local_name("local name is empty"));
    }
    if let Some(bad) = local
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '`'))
    {
        return Err(Error::invalid_local_name(format!(
            "local name '{local}' contains forbidden character '{bad}'"
        )));
    }
    Ok(())
}

/// Form a subject IRI from a validated local name.
pub fn subject_iri(local: &str) -> Result<String> {
    validate_local_name(local)?;
    Ok(city::iri(local))
}

/// Encode a JSON field value as a SPARQL term for the given datatype.
///
/// Literals come back as `"lex"` or `"lex"^^<datatype>`; references come back
/// as `<iri>`. Reference inputs may be absolute IRIs or bare local names
/// (expanded against the ontology namespace).
pub fn encode(value: &JsonValue, datatype: Datatype) -> Result<String> {
    match datatype {
        Datatype::String => {
            let s = value
                .as_str()
                .ok_or_else(|| Error::invalid_literal(value.to_string(), "string"))?;
            Ok(format!("\"{}\"", escape_literal(s)))
        }
        Datatype::Integer => {
            let lexical = match value {
                JsonValue::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
                JsonValue::String(s) if s.trim().parse::<i64>().is_ok() => {
                    s.trim().to_string()
                }
                other => return Err(Error::invalid_literal(other.to_string(), "integer")),
            };
            Ok(tagged(&lexical, Datatype::Integer))
        }
        Datatype::Float => {
            let lexical = match value {
                JsonValue::Number(n) => n.to_string(),
                JsonValue::String(s) if s.trim().parse::<f64>().is_ok() => {
                    s.trim().to_string()
                }
                other => return Err(Error::invalid_literal(other.to_string(), "float")),
            };
            Ok(tagged(&lexical, Datatype::Float))
        }
        Datatype::Boolean => {
            let lexical = match value {
                JsonValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
                JsonValue::String(s) if s == "true" || s == "false" => s.clone(),
                other => return Err(Error::invalid_literal(other.to_string(), "boolean")),
            };
            Ok(tagged(&lexical, Datatype::Boolean))
        }
        Datatype::Time => {
            let s = value
                .as_str()
                .ok_or_else(|| Error::invalid_literal(value.to_string(), "time"))?;
            Ok(tagged(&escape_literal(s), Datatype::Time))
        }
        Datatype::Reference => {
            let s = value
                .as_str()
                .ok_or_else(|| Error::invalid_literal(value.to_string(), "reference"))?;
            let iri = if s.contains("://") {
                s.to_string()
            } else {
                subject_iri(s)?
            };
            if iri.contains(['<', '>', ' ']) {
                return Err(Error::invalid_literal(s, "reference"));
            }
            Ok(format!("<{iri}>"))
        }
    }
}

fn tagged(lexical: &str, datatype: Datatype) -> String {
    // xsd_iri is Some for every tagged datatype; String/Reference never get here
    let iri = datatype.xsd_iri().expect("tagged datatype has an XSD IRI");
    format!("\"{lexical}\"^^<{iri}>")
}

/// Decode a stored lexical form to a native value.
///
/// The schema's declared datatype is the authority, not the (often missing)
/// datatype tag in the store's response. Unparseable lexicals fall back to
/// the raw string.
pub fn decode(lexical: &str, datatype: Datatype) -> PropertyValue {
    match datatype {
        Datatype::String => PropertyValue::String(lexical.to_string()),
        Datatype::Integer => lexical
            .parse::<i64>()
            .map(PropertyValue::Integer)
            .unwrap_or_else(|_| PropertyValue::String(lexical.to_string())),
        Datatype::Float => lexical
            .parse::<f64>()
            .map(PropertyValue::Float)
            .unwrap_or_else(|_| PropertyValue::String(lexical.to_string())),
        Datatype::Boolean => match lexical {
            "true" => PropertyValue::Boolean(true),
            "false" => PropertyValue::Boolean(false),
            other => PropertyValue::String(other.to_string()),
        },
        Datatype::Time => PropertyValue::Time(lexical.to_string()),
        Datatype::Reference => PropertyValue::Ref(lexical.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_string_escapes_quotes() {
        let term = encode(&json!("Central \"Garage\""), Datatype::String).unwrap();
        assert_eq!(term, "\"Central \\\"Garage\\\"\"");
    }

    #[test]
    fn encode_integer_tags_datatype() {
        let term = encode(&json!(200), Datatype::Integer).unwrap();
        assert_eq!(
            term,
            "\"200\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn encode_integer_accepts_numeric_string() {
        let term = encode(&json!("45"), Datatype::Integer).unwrap();
        assert!(term.starts_with("\"45\"^^"));
    }

    #[test]
    fn encode_rejects_non_numeric_capacity() {
        let err = encode(&json!("lots"), Datatype::Integer).unwrap_err();
        assert!(matches!(err, Error::InvalidLiteralFormat { datatype: "integer", .. }));
    }

    #[test]
    fn encode_float_keeps_lexical() {
        let term = encode(&json!(2.5), Datatype::Float).unwrap();
        assert_eq!(term, "\"2.5\"^^<http://www.w3.org/2001/XMLSchema#float>");
    }

    #[test]
    fn encode_boolean_from_bool_and_string() {
        assert!(encode(&json!(true), Datatype::Boolean).unwrap().starts_with("\"true\""));
        assert!(encode(&json!("false"), Datatype::Boolean).unwrap().starts_with("\"false\""));
        assert!(encode(&json!("yes"), Datatype::Boolean).is_err());
    }

    #[test]
    fn encode_reference_expands_local_name() {
        let term = encode(&json!("Alice"), Datatype::Reference).unwrap();
        assert_eq!(term, format!("<{}>", city::iri("Alice")));
    }

    #[test]
    fn encode_reference_keeps_absolute_iri() {
        let term = encode(&json!("http://example.org/Alice"), Datatype::Reference).unwrap();
        assert_eq!(term, "<http://example.org/Alice>");
    }

    #[test]
    fn local_name_rejects_injection() {
        assert!(validate_local_name("Central Garage").is_err());
        assert!(validate_local_name("x> <y").is_err());
        assert!(validate_local_name("").is_err());
        assert!(validate_local_name("CentralGarage").is_ok());
    }

    #[test]
    fn decode_follows_schema_datatype() {
        assert_eq!(decode("45", Datatype::Integer), PropertyValue::Integer(45));
        assert_eq!(decode("2.5", Datatype::Float), PropertyValue::Float(2.5));
        assert_eq!(decode("true", Datatype::Boolean), PropertyValue::Boolean(true));
        assert_eq!(
            decode("08:00:00", Datatype::Time),
            PropertyValue::Time("08:00:00".into())
        );
    }

    #[test]
    fn decode_falls_back_to_string() {
        assert_eq!(
            decode("lots", Datatype::Integer),
            PropertyValue::String("lots".into())
        );
    }
}
