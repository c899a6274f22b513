//! Read-only validation for caller-supplied queries.
//!
//! The raw-query surface accepts arbitrary SELECT/ASK text from callers and
//! forwards it to the store's query endpoint. Validation rejects anything
//! that is not a read-only form before it leaves the process; the store's
//! own parser remains the authority on full SPARQL syntax.

use thiserror::Error;

/// Accepted read-only query forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryForm {
    /// SELECT query (bindings result)
    Select,
    /// ASK query (boolean result)
    Ask,
}

/// Validation failure for a caller-supplied query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Query is empty or whitespace
    #[error("Query is empty")]
    Empty,
    /// Brace nesting does not balance
    #[error("Unbalanced braces in query")]
    UnbalancedBraces,
    /// Query is not a SELECT or ASK form
    #[error("Only SELECT and ASK queries are accepted, found {0}")]
    NotReadOnly(String),
    /// Query does not start with a recognized SPARQL form
    #[error("Unrecognized query form")]
    UnrecognizedForm,
}

/// Update keywords that mark a statement as a write.
const WRITE_KEYWORDS: &[&str] = &[
    "INSERT", "DELETE", "DROP", "CLEAR", "LOAD", "CREATE", "MOVE", "COPY", "ADD",
];

/// Validate that a caller-supplied query is a read-only SELECT or ASK.
///
/// The scan is lexical: quoted strings are skipped and `#` comments are
/// ignored to end of line (only when the `#` is not inside an IRI or string,
/// which the quote/bracket tracking handles).
pub fn validate_read_only(query: &str) -> Result<QueryForm, ValidationError> {
    let significant = strip_noise(query);
    if significant.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut depth: i64 = 0;
    for c in significant.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ValidationError::UnbalancedBraces);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ValidationError::UnbalancedBraces);
    }

    let upper = significant.to_uppercase();
    let words: Vec<&str> = upper.split_whitespace().collect();

    for keyword in WRITE_KEYWORDS {
        if words.contains(keyword) {
            return Err(ValidationError::NotReadOnly((*keyword).to_string()));
        }
    }

    // skip PREFIX/BASE declarations to find the query form; the IRI part
    // was already blanked by strip_noise, so only the label word remains
    let mut i = 0;
    while i < words.len() {
        match words[i] {
            "PREFIX" => i += 2,
            "BASE" => i += 1,
            "SELECT" => return Ok(QueryForm::Select),
            "ASK" => return Ok(QueryForm::Ask),
            _ => return Err(ValidationError::UnrecognizedForm),
        }
    }
    Err(ValidationError::UnrecognizedForm)
}

/// Remove string literals, IRI brackets, and comments so keyword scanning
/// cannot be confused by quoted text.
fn strip_noise(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut chars = query.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                let quote = c;
                out.push(' ');
                while let Some(inner) = chars.next() {
                    if inner == '\\' {
                        chars.next();
                    } else if inner == quote {
                        break;
                    }
                }
            }
            '<' => {
                out.push(' ');
                for inner in chars.by_ref() {
                    if inner == '>' {
                        break;
                    }
                }
            }
            '#' => {
                out.push(' ');
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_select_and_ask() {
        assert_eq!(
            validate_read_only("SELECT ?s WHERE { ?s ?p ?o }"),
            Ok(QueryForm::Select)
        );
        assert_eq!(validate_read_only("ASK { ?s ?p ?o }"), Ok(QueryForm::Ask));
    }

    #[test]
    fn accepts_prefixed_select() {
        let q = "PREFIX sc: <http://example.org/#>\nSELECT ?s WHERE { ?s a sc:Thing }";
        assert_eq!(validate_read_only(q), Ok(QueryForm::Select));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate_read_only("   \n"), Err(ValidationError::Empty));
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert_eq!(
            validate_read_only("SELECT ?s WHERE { ?s ?p ?o"),
            Err(ValidationError::UnbalancedBraces)
        );
    }

    #[test]
    fn rejects_updates() {
        assert_eq!(
            validate_read_only("INSERT DATA { <a> <b> <c> }"),
            Err(ValidationError::NotReadOnly("INSERT".into()))
        );
        assert_eq!(
            validate_read_only("DROP ALL"),
            Err(ValidationError::NotReadOnly("DROP".into()))
        );
    }

    #[test]
    fn rejects_piggybacked_update() {
        let q = "SELECT ?s WHERE { ?s ?p ?o } ; DELETE WHERE { ?s ?p ?o }";
        assert_eq!(
            validate_read_only(q),
            Err(ValidationError::NotReadOnly("DELETE".into()))
        );
    }

    #[test]
    fn keywords_inside_strings_and_iris_are_ignored() {
        let q = r#"SELECT ?s WHERE { ?s <http://example.org/DELETE> "DROP TABLE" }"#;
        assert_eq!(validate_read_only(q), Ok(QueryForm::Select));
    }

    #[test]
    fn comments_do_not_hide_keywords() {
        let q = "SELECT ?s WHERE { ?s ?p ?o } # DELETE hidden in comment\n";
        assert_eq!(validate_read_only(q), Ok(QueryForm::Select));
    }
}
