use crate::dag::Dag;
use crate::error::ValidationIssue;
use crate::registry::DagRegistry;
use itertools::Itertools;

/// Checks one DAG for references that do not resolve and for repeated node ids.
///
/// Nothing found here stops a conversion. Dangling dependencies are still drawn as
/// edges, dangling branch targets are left out of the chart, and an unknown `sub_dag`
/// simply is not inlined.
pub fn validate_dag(dag: &Dag, registry: &DagRegistry) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if dag.is_empty() {
        issues.push(ValidationIssue::EmptyDag {
            dag_id: dag.id.clone(),
        });
    }

    issues.extend(
        dag.nodes()
            .iter()
            .map(|node| node.id.as_str())
            .duplicates()
            .map(|node_id| ValidationIssue::DuplicateNodeId {
                dag_id: dag.id.clone(),
                node_id: node_id.to_string(),
            }),
    );

    for node in dag.nodes() {
        for dep in node.deps.iter().filter(|dep| !dag.contains(dep)) {
            issues.push(ValidationIssue::UnknownDependency {
                dag_id: dag.id.clone(),
                node_id: node.id.clone(),
                dependency: dep.clone(),
            });
        }

        for (label, target) in node.branches().filter(|(_, t)| !dag.contains(t)) {
            issues.push(ValidationIssue::UnknownBranchTarget {
                dag_id: dag.id.clone(),
                node_id: node.id.clone(),
                label: label.to_string(),
                target: target.to_string(),
            });
        }

        if let Some(sub_dag) = &node.sub_dag {
            if registry.subordinate(sub_dag).is_none() {
                issues.push(ValidationIssue::UnknownSubDag {
                    dag_id: dag.id.clone(),
                    node_id: node.id.clone(),
                    sub_dag: sub_dag.clone(),
                });
            }
        }
    }

    issues
}

/// Validates every DAG of the registry, primary first.
pub fn validate_registry(registry: &DagRegistry) -> Vec<ValidationIssue> {
    registry
        .iter()
        .flat_map(|dag| validate_dag(dag, registry))
        .collect()
}
