use crate::error::ConvertError;
use crate::registry::DagRegistry;

mod builder;
pub mod options;
mod writer;

use builder::ScopeBuilder;
use writer::{CLASS_DEFS, DiagramWriter};

pub use options::{Direction, GeneratorOptions, Theme};

/// Turns a `DagRegistry` into Mermaid `flowchart` text.
///
/// Only one DAG is drawn at the top level: the primary DAG, or the first sub DAG
/// when there is no primary. Other sub DAGs only show up when a branch target
/// references them, as a nested cluster.
#[derive(Debug, Clone, Default)]
pub struct MermaidGenerator {
    options: GeneratorOptions,
}

impl MermaidGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates the chart for `registry`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)`: The chart text. Dangling branch targets are left out rather than
    ///   reported; see [`crate::validate`] for surfacing them.
    /// * `Err(ConvertError::NoValidConfiguration)`: The registry holds no DAG at all.
    pub fn generate(&self, registry: &DagRegistry) -> Result<String, ConvertError> {
        let root = registry.root().ok_or(ConvertError::NoValidConfiguration)?;
        let direction = self.options.direction;

        let mut out = DiagramWriter::default();
        if let Some(theme) = self.options.theme {
            out.line(0, format!("%%{{init: {{\"theme\": \"{theme}\"}}}}%%"));
        }
        out.line(0, format!("flowchart {direction}"));
        out.blank();

        out.line(1, "%% Styles");
        for class_def in CLASS_DEFS {
            out.line(1, class_def);
        }
        out.blank();

        ScopeBuilder::new(root, registry, direction, 1).write(&mut out);
        Ok(out.finish())
    }
}
