use super::definition::Dag;
use crate::error::ConversionError;

/// A trait for record types that can be converted into a zukai `Dag`.
///
/// The YAML reader in [`crate::document`] implements this for its raw records, but any
/// other front end (JSON, TOML, a database row) can plug into the registry and generator
/// the same way.
///
/// # Example
///
/// ```rust
/// use zukai::dag::{Dag, DagNode, IntoDag};
/// use zukai::error::ConversionError;
///
/// struct Pipeline { name: String, steps: Vec<String> }
///
/// impl IntoDag for Pipeline {
///     fn into_dag(self) -> Result<Dag, ConversionError> {
///         let mut nodes: Vec<DagNode> = Vec::new();
///         for step in self.steps {
///             let node = match nodes.last() {
///                 Some(prev) => DagNode::new(step).with_deps([prev.id.clone()]),
///                 None => DagNode::new(step),
///             };
///             nodes.push(node);
///         }
///         Ok(Dag::new(self.name, nodes))
///     }
/// }
///
/// let dag = Pipeline { name: "etl".into(), steps: vec!["extract".into(), "load".into()] }
///     .into_dag()
///     .unwrap();
/// assert_eq!(dag.node("load").unwrap().deps, vec!["extract".to_string()]);
/// ```
pub trait IntoDag {
    /// Consumes the record and converts it into a DAG.
    fn into_dag(self) -> Result<Dag, ConversionError>;
}

impl IntoDag for Dag {
    fn into_dag(self) -> Result<Dag, ConversionError> {
        Ok(self)
    }
}
