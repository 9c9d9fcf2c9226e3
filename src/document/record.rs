use crate::dag::{Dag, DagNode, IntoDag};
use crate::error::ConversionError;
use serde::Deserialize;

/// One YAML document as written by the user, before any validation.
#[derive(Debug, Deserialize)]
pub struct RawDagRecord {
    pub dag_id: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub thread_pool: Option<String>,
    #[serde(default)]
    pub nodes: Option<Vec<RawNodeRecord>>,
}

/// One entry of a document's `nodes` list.
#[derive(Debug, Deserialize)]
pub struct RawNodeRecord {
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub deps: Option<Vec<String>>,
    #[serde(default)]
    pub true_node: Option<String>,
    #[serde(default)]
    pub false_node: Option<String>,
    #[serde(default)]
    pub sub_dag: Option<String>,
}

/// Empty strings count as absent, the same as a missing key.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl IntoDag for RawDagRecord {
    fn into_dag(self) -> Result<Dag, ConversionError> {
        let raw_nodes = self.nodes.ok_or_else(|| ConversionError::MissingNodes {
            dag_id: self.dag_id.clone(),
        })?;

        let nodes = raw_nodes
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let id = non_empty(raw.node_id).ok_or_else(|| ConversionError::MissingNodeId {
                    dag_id: self.dag_id.clone(),
                    index,
                })?;
                Ok(DagNode {
                    id,
                    deps: raw.deps.unwrap_or_default(),
                    true_node: non_empty(raw.true_node),
                    false_node: non_empty(raw.false_node),
                    sub_dag: non_empty(raw.sub_dag),
                })
            })
            .collect::<Result<Vec<_>, ConversionError>>()?;

        Ok(Dag::new(self.dag_id, nodes)
            .with_desc(self.desc)
            .with_thread_pool(self.thread_pool))
    }
}
