use super::options::Direction;
use super::writer::DiagramWriter;
use crate::dag::{Dag, DagNode};
use crate::registry::DagRegistry;
use ahash::AHashSet;

/// Ordered `(from, to)` pairs already drawn in one scope. Labels do not take part.
#[derive(Debug, Default)]
pub(super) struct EdgeSet<'a> {
    drawn: AHashSet<(&'a str, &'a str)>,
}

impl<'a> EdgeSet<'a> {
    fn contains(&self, from: &'a str, to: &'a str) -> bool {
        self.drawn.contains(&(from, to))
    }

    fn insert(&mut self, from: &'a str, to: &'a str) {
        self.drawn.insert((from, to));
    }
}

/// Writes the statements of one DAG scope: the top-level chart or the body of a cluster.
pub(super) struct ScopeBuilder<'a> {
    dag: &'a Dag,
    registry: &'a DagRegistry,
    direction: Direction,
    depth: usize,
}

impl<'a> ScopeBuilder<'a> {
    pub(super) fn new(
        dag: &'a Dag,
        registry: &'a DagRegistry,
        direction: Direction,
        depth: usize,
    ) -> Self {
        Self {
            dag,
            registry,
            direction,
            depth,
        }
    }

    /// Node shapes, then edges, then class statements.
    ///
    /// Nodes that are inlined as clusters are represented by the cluster only, so they
    /// get neither a shape nor a class here.
    pub(super) fn write(&self, out: &mut DiagramWriter) {
        let inlined = self.inlined_targets();

        for node in self.dag.nodes() {
            if !inlined.contains(node.id.as_str()) {
                out.node(self.depth, node);
            }
        }
        out.blank();

        let mut edges = EdgeSet::default();
        let mut clusters = AHashSet::new();
        for node in self.dag.nodes() {
            self.write_branch_edges(out, node, &mut edges, &mut clusters);
            self.write_dependency_edges(out, node, &mut edges);
        }
        out.blank();

        for node in self.dag.nodes() {
            if !inlined.contains(node.id.as_str()) {
                out.class(self.depth, node);
            }
        }
    }

    /// The sub DAG a branch target stands in for, if it names one that exists.
    fn sub_dag_of(&self, target: &DagNode) -> Option<&'a Dag> {
        target
            .sub_dag
            .as_deref()
            .and_then(|id| self.registry.subordinate(id))
    }

    /// Ids of the nodes that some decision node in this scope reaches through a branch
    /// and that carry a resolvable `sub_dag`.
    fn inlined_targets(&self) -> AHashSet<&'a str> {
        self.dag
            .nodes()
            .iter()
            .flat_map(|node| node.branches())
            .filter_map(|(_, target_id)| self.dag.node(target_id))
            .filter(|target| self.sub_dag_of(target).is_some())
            .map(|target| target.id.as_str())
            .collect()
    }

    fn write_branch_edges(
        &self,
        out: &mut DiagramWriter,
        node: &'a DagNode,
        edges: &mut EdgeSet<'a>,
        clusters: &mut AHashSet<&'a str>,
    ) {
        for (label, target_id) in node.branches() {
            if edges.contains(&node.id, target_id) {
                continue;
            }
            let Some(target) = self.dag.node(target_id) else {
                tracing::debug!(
                    dag_id = %self.dag.id,
                    node_id = %node.id,
                    target = target_id,
                    "Omitting branch to undeclared node"
                );
                continue;
            };

            if let Some(sub_dag) = self.sub_dag_of(target) {
                // A second branch into the same target reuses the cluster already drawn.
                if clusters.insert(target.id.as_str()) {
                    self.write_cluster(out, target, sub_dag);
                }
            }
            out.labeled_edge(self.depth, &node.id, label, &target.id);
            edges.insert(&node.id, &target.id);
        }
    }

    /// `dep --> node` for every dependency, unless the dependency is a decision node:
    /// its labeled branch edges already express the relationship.
    fn write_dependency_edges(
        &self,
        out: &mut DiagramWriter,
        node: &'a DagNode,
        edges: &mut EdgeSet<'a>,
    ) {
        for dep in &node.deps {
            if edges.contains(dep, &node.id) {
                continue;
            }
            if self.dag.node(dep).is_some_and(DagNode::is_decision) {
                continue;
            }
            out.edge(self.depth, dep, &node.id);
            edges.insert(dep, &node.id);
        }
    }

    /// Inlines `sub_dag` as a cluster named after `target`.
    ///
    /// The cluster is flat: only the sub DAG's branch edges are drawn, with their own
    /// dedup scope, and nothing inside it is inlined further.
    fn write_cluster(&self, out: &mut DiagramWriter, target: &DagNode, sub_dag: &'a Dag) {
        let inner = self.depth + 1;

        out.blank();
        out.line(self.depth, format!("subgraph {}[\" \"]", target.id));
        out.line(inner, format!("direction {}", self.direction));

        for node in sub_dag.nodes() {
            out.node(inner, node);
        }
        out.blank();

        let mut edges = EdgeSet::default();
        for node in sub_dag.nodes() {
            for (label, target_id) in node.branches() {
                if edges.contains(&node.id, target_id) || !sub_dag.contains(target_id) {
                    continue;
                }
                out.labeled_edge(inner, &node.id, label, target_id);
                edges.insert(&node.id, target_id);
            }
        }

        for node in sub_dag.nodes() {
            out.class(inner, node);
        }
        out.line(self.depth, "end");
        out.blank();
    }
}
