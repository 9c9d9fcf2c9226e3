use crate::dag::{BranchLabel, DagNode};

/// Style classes declared once at the top of every chart.
pub(super) const CLASS_DEFS: [&str; 3] = [
    "classDef operatorNode fill:#d4d4f7,stroke:#7c7cba,stroke-width:2px,color:#333",
    "classDef conditionalNode fill:#d4d4f7,stroke:#7c7cba,stroke-width:2px,color:#333",
    "classDef subgraphStyle fill:#ffffcc,stroke:#999,stroke-width:1px",
];

const INDENT: &str = "  ";

/// The style class a node is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum NodeClass {
    Operator,
    Conditional,
}

impl NodeClass {
    pub(super) fn of(node: &DagNode) -> Self {
        if node.is_decision() {
            NodeClass::Conditional
        } else {
            NodeClass::Operator
        }
    }

    fn name(self) -> &'static str {
        match self {
            NodeClass::Operator => "operatorNode",
            NodeClass::Conditional => "conditionalNode",
        }
    }
}

/// Accumulates Mermaid statements line by line.
#[derive(Debug, Default)]
pub(super) struct DiagramWriter {
    lines: Vec<String>,
}

impl DiagramWriter {
    pub(super) fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", INDENT.repeat(depth), text.as_ref()));
    }

    pub(super) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// `id{{"id"}}` for decision nodes, `id["id"]` for everything else.
    pub(super) fn node(&mut self, depth: usize, node: &DagNode) {
        let id = &node.id;
        match NodeClass::of(node) {
            NodeClass::Conditional => self.line(depth, format!("{id}{{{{\"{id}\"}}}}")),
            NodeClass::Operator => self.line(depth, format!("{id}[\"{id}\"]")),
        }
    }

    pub(super) fn edge(&mut self, depth: usize, from: &str, to: &str) {
        self.line(depth, format!("{from} --> {to}"));
    }

    pub(super) fn labeled_edge(&mut self, depth: usize, from: &str, label: BranchLabel, to: &str) {
        self.line(depth, format!("{from} -->|{label}| {to}"));
    }

    pub(super) fn class(&mut self, depth: usize, node: &DagNode) {
        self.line(
            depth,
            format!("class {} {}", node.id, NodeClass::of(node).name()),
        );
    }

    pub(super) fn finish(self) -> String {
        self.lines.join("\n")
    }
}
