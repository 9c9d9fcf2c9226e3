//! Splits multi-document YAML into DAG records.
//!
//! Every document is parsed on its own, so one broken document never hides the
//! ones after it. Faults are collected as warnings instead of being returned as errors.

use crate::dag::{Dag, IntoDag};
use crate::error::RecordError;
use serde_yaml::Value;

mod record;

pub use record::{RawDagRecord, RawNodeRecord};

/// The DAGs found in an input, in encounter order, plus the documents that were skipped.
#[derive(Debug, Default)]
pub struct ParsedDocuments {
    pub dags: Vec<Dag>,
    pub warnings: Vec<RecordError>,
}

/// Splits `input` on `---` marker lines and returns the documents that have content.
///
/// Content following the marker on the same line belongs to the next document;
/// a trailing `# comment` does not. `%` directive lines stay with the document
/// whose marker follows them.
pub fn split_documents(input: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();

    for line in input.lines() {
        if let Some(rest) = marker_remainder(line) {
            if is_directive_prologue(&current) {
                current.push_str("---\n");
            } else {
                documents.push(std::mem::take(&mut current));
            }
            if !rest.is_empty() && !rest.starts_with('#') {
                current.push_str(rest);
                current.push('\n');
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    documents.push(current);

    documents.retain(|doc| has_content(doc));
    documents
}

/// Whether a document holds anything besides blank lines, comments and directives.
fn has_content(document: &str) -> bool {
    document.lines().any(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#') && !line.starts_with('%')
    })
}

/// Whether `chunk` is a directive block (`%YAML`, `%TAG`) still waiting for its `---`.
fn is_directive_prologue(chunk: &str) -> bool {
    chunk.lines().any(|line| line.starts_with('%')) && !has_content(chunk)
}

/// Returns the trimmed text after a `---` marker, or `None` if `line` is not a marker.
fn marker_remainder(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("---")?;
    match rest.chars().next() {
        None => Some(""),
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

/// Parses every document of `input` into a `Dag`.
///
/// * Documents that are not valid YAML, or whose shape does not fit a DAG record,
///   are skipped and reported in `warnings`.
/// * Documents without a `dag_id` (including comment-only ones) are dropped silently.
pub fn parse_documents(input: &str) -> ParsedDocuments {
    let mut parsed = ParsedDocuments::default();

    for (document, text) in split_documents(input).iter().enumerate() {
        match parse_document(document, text) {
            Ok(Some(dag)) => parsed.dags.push(dag),
            Ok(None) => {
                tracing::debug!(document, "Skipping document without dag_id");
            }
            Err(err) => {
                tracing::warn!(document, "YAML parse warning: {}", err);
                parsed.warnings.push(err);
            }
        }
    }

    parsed
}

fn parse_document(document: usize, text: &str) -> Result<Option<Dag>, RecordError> {
    let malformed = |e: serde_yaml::Error| RecordError::Malformed {
        document,
        message: e.to_string(),
    };

    let value: Value = serde_yaml::from_str(text).map_err(malformed)?;
    if matches!(value.get("dag_id"), None | Some(Value::Null)) {
        return Ok(None);
    }

    let record: RawDagRecord =
        serde_yaml::from_value(value).map_err(|e| RecordError::InvalidShape {
            document,
            message: e.to_string(),
        })?;
    if record.dag_id.is_empty() {
        return Ok(None);
    }

    record
        .into_dag()
        .map(Some)
        .map_err(|source| RecordError::Conversion { document, source })
}
