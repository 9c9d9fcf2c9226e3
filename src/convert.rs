use crate::document::{ParsedDocuments, parse_documents};
use crate::error::{ConvertError, RecordError};
use crate::mermaid::{GeneratorOptions, MermaidGenerator};
use crate::registry::DagRegistry;

/// The result of a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    /// Mermaid `flowchart` text. Empty for blank input.
    pub code: String,
    /// Documents that were skipped because they could not be read.
    pub warnings: Vec<RecordError>,
}

impl Diagram {
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Converts multi-document YAML into a Mermaid chart in one call.
///
/// Nothing is cached between calls; the registry is rebuilt from `input` every time.
///
/// # Returns
///
/// * `Ok(Diagram)`: The chart, or an empty diagram if `input` is blank.
/// * `Err(ConvertError::NoValidConfiguration)`: No document described a DAG.
pub fn convert(input: &str, options: &GeneratorOptions) -> Result<Diagram, ConvertError> {
    if input.trim().is_empty() {
        return Ok(Diagram::default());
    }

    let ParsedDocuments { dags, warnings } = parse_documents(input);
    let registry = DagRegistry::from_dags(dags);
    let code = MermaidGenerator::new(options.clone()).generate(&registry)?;

    Ok(Diagram { code, warnings })
}
