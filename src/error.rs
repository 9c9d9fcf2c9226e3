use thiserror::Error;

/// A per-document fault found while splitting the input.
///
/// These never abort a conversion: the offending document is skipped and the
/// error is handed back to the caller as a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Document {document} is not valid YAML: {message}")]
    Malformed { document: usize, message: String },

    #[error("Document {document} does not describe a DAG record: {message}")]
    InvalidShape { document: usize, message: String },

    #[error("Document {document} could not be converted into a DAG: {source}")]
    Conversion {
        document: usize,
        #[source]
        source: ConversionError,
    },
}

impl RecordError {
    /// The 0-based index of the document the fault was found in.
    pub fn document(&self) -> usize {
        match self {
            RecordError::Malformed { document, .. }
            | RecordError::InvalidShape { document, .. }
            | RecordError::Conversion { document, .. } => *document,
        }
    }
}

/// Errors that can occur when converting a raw record into a `Dag`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("DAG '{dag_id}' is missing its nodes list")]
    MissingNodes { dag_id: String },

    #[error("Node at index {index} in DAG '{dag_id}' is missing node_id")]
    MissingNodeId { dag_id: String, index: usize },
}

/// Errors surfaced to the caller of a full conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("No valid DAG configuration found")]
    NoValidConfiguration,
}

/// A structural problem found by validation. Conversion still succeeds with these present.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("DAG '{dag_id}' has no nodes")]
    EmptyDag { dag_id: String },

    #[error("Duplicate node_id '{node_id}' in DAG '{dag_id}'")]
    DuplicateNodeId { dag_id: String, node_id: String },

    #[error("Node '{node_id}' in DAG '{dag_id}' depends on undeclared node '{dependency}'")]
    UnknownDependency {
        dag_id: String,
        node_id: String,
        dependency: String,
    },

    #[error(
        "Node '{node_id}' in DAG '{dag_id}' branches on '{label}' to undeclared node '{target}'"
    )]
    UnknownBranchTarget {
        dag_id: String,
        node_id: String,
        label: String,
        target: String,
    },

    #[error("Node '{node_id}' in DAG '{dag_id}' references unknown sub DAG '{sub_dag}'")]
    UnknownSubDag {
        dag_id: String,
        node_id: String,
        sub_dag: String,
    },
}

/// Errors from parsing generator options out of strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("Unknown direction '{0}', expected one of TB, BT, LR, RL")]
    UnknownDirection(String),

    #[error("Unknown theme '{0}', expected one of default, forest, dark, neutral")]
    UnknownTheme(String),
}
