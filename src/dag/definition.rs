use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// The outcome a decision node branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchLabel {
    True,
    False,
}

impl BranchLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            BranchLabel::True => "true",
            BranchLabel::False => "false",
        }
    }
}

impl fmt::Display for BranchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single step of a DAG.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DagNode {
    pub id: String,
    /// Nodes that must run before this one, in declaration order.
    pub deps: Vec<String>,
    pub true_node: Option<String>,
    pub false_node: Option<String>,
    /// `dag_id` of another document this node stands in for.
    pub sub_dag: Option<String>,
}

impl DagNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_deps<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deps = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_branches(mut self, on_true: Option<&str>, on_false: Option<&str>) -> Self {
        self.true_node = on_true.map(str::to_string);
        self.false_node = on_false.map(str::to_string);
        self
    }

    pub fn with_sub_dag(mut self, sub_dag: impl Into<String>) -> Self {
        self.sub_dag = Some(sub_dag.into());
        self
    }

    /// A node is a decision node iff it declares at least one branch target.
    pub fn is_decision(&self) -> bool {
        self.true_node.is_some() || self.false_node.is_some()
    }

    /// Declared branch targets, `true` before `false`.
    pub fn branches(&self) -> impl Iterator<Item = (BranchLabel, &str)> {
        [
            (BranchLabel::True, self.true_node.as_deref()),
            (BranchLabel::False, self.false_node.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, target)| target.map(|t| (label, t)))
    }
}

/// A named DAG with its nodes in declaration order.
///
/// `desc` and `thread_pool` are carried along for callers but play no part in rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Dag {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_pool: Option<String>,
    nodes: Vec<DagNode>,
    #[serde(skip)]
    index: AHashMap<String, usize>,
}

impl Dag {
    pub fn new(id: impl Into<String>, nodes: Vec<DagNode>) -> Self {
        let mut index = AHashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            // First declaration wins lookups when ids collide.
            index.entry(node.id.clone()).or_insert(i);
        }
        Self {
            id: id.into(),
            desc: None,
            thread_pool: None,
            nodes,
            index,
        }
    }

    pub fn with_desc(mut self, desc: Option<String>) -> Self {
        self.desc = desc;
        self
    }

    pub fn with_thread_pool(mut self, thread_pool: Option<String>) -> Self {
        self.thread_pool = thread_pool;
        self
    }

    pub fn nodes(&self) -> &[DagNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&DagNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl PartialEq for Dag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.desc == other.desc
            && self.thread_pool == other.thread_pool
            && self.nodes == other.nodes
    }
}

impl Eq for Dag {}
