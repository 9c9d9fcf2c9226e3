//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to go from YAML text to a chart.
//!
//! # Example
//!
//! ```rust
//! use zukai::prelude::*;
//!
//! let parsed = parse_documents("dag_id: \"solo\"\nnodes:\n  - node_id: \"A\"\n");
//! let registry = DagRegistry::from_dags(parsed.dags);
//!
//! let generator = MermaidGenerator::new(
//!     GeneratorOptions::default().with_direction(Direction::LeftToRight),
//! );
//! let code = generator.generate(&registry).unwrap();
//! assert!(code.starts_with("flowchart LR"));
//! ```

// Pipeline
pub use crate::convert::{Diagram, convert};
pub use crate::document::{ParsedDocuments, parse_documents};
pub use crate::mermaid::{Direction, GeneratorOptions, MermaidGenerator, Theme};
pub use crate::registry::{DagRegistry, RegistryBuilder};
pub use crate::validate::{validate_dag, validate_registry};

// Graph model
pub use crate::dag::{BranchLabel, Dag, DagNode, IntoDag};

// Error types
pub use crate::error::{ConversionError, ConvertError, RecordError, ValidationIssue};
