//! Common test fixtures: YAML inputs and small helpers for inspecting charts.
use zukai::prelude::*;

/// A primary DAG with nested decisions whose `false` branch at `F` inlines `sub_dag`.
#[allow(dead_code)]
pub const MAIN_YAML: &str = r#"# Main DAG configuration
dag_id: "main_dag"
nodes:
  - node_id: "C"

  - node_id: "E"
    true_node: "F"
    false_node: "G"
    deps: ["C"]

  - node_id: "F"
    true_node: "J"
    false_node: "K"
    deps: ["E"]

  - node_id: "G"
    deps: ["E"]

  - node_id: "J"
    deps: ["F"]

  - node_id: "K"
    sub_dag: "sub_dag"
    deps: ["F"]

  - node_id: "H"
    deps: ["J", "K", "G"]

---
# Sub DAG configuration
dag_id: "sub_dag"
nodes:
  - node_id: "X"
    true_node: "Y"
    false_node: "Z"

  - node_id: "Y"
    deps: ["X"]

  - node_id: "Z"
    deps: ["X"]
"#;

/// A straight chain `A -> B -> C`.
#[allow(dead_code)]
pub const SIMPLE_YAML: &str = r#"dag_id: "simple_dag"
nodes:
  - node_id: "A"

  - node_id: "B"
    deps: ["A"]

  - node_id: "C"
    deps: ["B"]
"#;

/// One decision node whose targets also declare it as a dependency.
#[allow(dead_code)]
pub const CONDITIONAL_YAML: &str = r#"dag_id: "conditional_dag"
nodes:
  - node_id: "Start"

  - node_id: "Check"
    true_node: "Process"
    false_node: "HandleError"
    deps: ["Start"]

  - node_id: "Process"
    deps: ["Check"]

  - node_id: "HandleError"
    deps: ["Check"]

  - node_id: "End"
    deps: ["Process", "HandleError"]
"#;

/// Parses `yaml` and generates a chart with default options.
#[allow(dead_code)]
pub fn generate(yaml: &str) -> String {
    generate_with(yaml, GeneratorOptions::default())
}

#[allow(dead_code)]
pub fn generate_with(yaml: &str, options: GeneratorOptions) -> String {
    let parsed = parse_documents(yaml);
    assert!(
        parsed.warnings.is_empty(),
        "fixture produced warnings: {:?}",
        parsed.warnings
    );
    let registry = DagRegistry::from_dags(parsed.dags);
    MermaidGenerator::new(options)
        .generate(&registry)
        .expect("Failed to generate chart")
}

/// The chart's statements with indentation stripped, blank lines removed.
#[allow(dead_code)]
pub fn statements(code: &str) -> Vec<&str> {
    code.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Unlabeled `from --> to` edges in order of appearance.
#[allow(dead_code)]
pub fn plain_edges(code: &str) -> Vec<&str> {
    statements(code)
        .into_iter()
        .filter(|line| line.contains(" --> "))
        .collect()
}

#[allow(dead_code)]
pub fn count(code: &str, statement: &str) -> usize {
    statements(code)
        .into_iter()
        .filter(|line| *line == statement)
        .count()
}
