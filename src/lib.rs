//! # Zukai - DAG Definitions to Mermaid Flowcharts
//!
//! **Zukai** turns declarative, multi-document YAML descriptions of DAGs into Mermaid
//! `flowchart` text. Nodes declare their dependencies, decision nodes branch on
//! `true_node` / `false_node`, and a branch target can stand in for a whole sub DAG,
//! which is drawn as a nested cluster.
//!
//! ## Core Workflow
//!
//! 1.  **Split**: [`document::parse_documents`] cuts the input on `---` lines and parses
//!     each document on its own. Broken documents are skipped and reported as warnings.
//! 2.  **Classify**: [`DagRegistry`] picks the primary DAG (the first one whose id does not
//!     start with `sub_`) and files everything else as a sub DAG by its `dag_id`.
//! 3.  **Generate**: [`MermaidGenerator`] draws the primary DAG, derives edges from
//!     `deps` and branch targets, inlines referenced sub DAGs and de-duplicates edges.
//!
//! [`convert`] runs all three steps.
//!
//! ## Quick Start
//!
//! ```rust
//! use zukai::prelude::*;
//!
//! let yaml = r#"
//! dag_id: "conditional_dag"
//! nodes:
//!   - node_id: "Check"
//!     true_node: "Process"
//!     false_node: "HandleError"
//!   - node_id: "Process"
//!     deps: ["Check"]
//!   - node_id: "HandleError"
//!     deps: ["Check"]
//! "#;
//!
//! let diagram = convert(yaml, &GeneratorOptions::default()).unwrap();
//! assert!(diagram.code.starts_with("flowchart TB"));
//! assert!(diagram.code.contains("Check -->|true| Process"));
//! assert!(!diagram.code.contains("Check --> Process"));
//! ```

pub mod convert;
pub mod dag;
pub mod document;
pub mod error;
pub mod mermaid;
pub mod prelude;
pub mod registry;
pub mod validate;

pub use convert::{Diagram, convert};
pub use mermaid::MermaidGenerator;
pub use registry::DagRegistry;
