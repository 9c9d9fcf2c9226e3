//! Tests for splitting multi-document YAML into DAG records.
mod common;
use common::*;
use zukai::document::split_documents;
use zukai::prelude::*;

#[test]
fn test_split_on_marker_lines() {
    let docs = split_documents("a: 1\n---\nb: 2\n---   \nc: 3\n");
    assert_eq!(docs, vec!["a: 1\n", "b: 2\n", "c: 3\n"]);
}

#[test]
fn test_split_keeps_content_after_marker_but_not_comments() {
    let docs = split_documents("--- # first\na: 1\n--- b: 2\n");
    assert_eq!(docs, vec!["a: 1\n", "b: 2\n"]);
}

#[test]
fn test_split_ignores_dashes_that_are_not_markers() {
    let docs = split_documents("a: \"---\"\n----\nb: 2\n");
    assert_eq!(docs.len(), 1);
}

#[test]
fn test_split_keeps_directives_with_their_document() {
    let docs = split_documents("%YAML 1.2\n---\na: 1\n---\nb: 2\n");
    assert_eq!(docs, vec!["%YAML 1.2\n---\na: 1\n", "b: 2\n"]);
}

#[test]
fn test_yaml_directive_does_not_produce_a_warning() {
    let yaml = "%YAML 1.2\n---\ndag_id: \"a\"\nnodes:\n  - node_id: \"A\"\n";
    let parsed = parse_documents(yaml);
    assert!(parsed.warnings.is_empty(), "unexpected warnings: {:?}", parsed.warnings);
    assert_eq!(parsed.dags.len(), 1);
    assert_eq!(parsed.dags[0].id, "a");
}

#[test]
fn test_split_drops_blank_and_comment_only_documents() {
    let docs = split_documents("---\n\n---\n# nothing here\n---\na: 1\n");
    assert_eq!(docs, vec!["a: 1\n"]);
}

#[test]
fn test_parse_fixture_documents_in_order() {
    let parsed = parse_documents(MAIN_YAML);
    assert!(parsed.warnings.is_empty());

    let ids: Vec<_> = parsed.dags.iter().map(|dag| dag.id.as_str()).collect();
    assert_eq!(ids, vec!["main_dag", "sub_dag"]);

    let main = &parsed.dags[0];
    assert_eq!(main.nodes().len(), 7);

    let k = main.node("K").expect("K should exist");
    assert_eq!(k.sub_dag.as_deref(), Some("sub_dag"));
    assert_eq!(k.deps, vec!["F".to_string()]);

    let h = main.node("H").expect("H should exist");
    assert_eq!(h.deps, vec!["J", "K", "G"]);
}

#[test]
fn test_parse_passes_through_desc_and_thread_pool() {
    let yaml = "dag_id: \"etl\"\ndesc: \"nightly load\"\nthread_pool: \"io\"\nnodes:\n  - node_id: \"A\"\n";
    let parsed = parse_documents(yaml);
    let dag = &parsed.dags[0];
    assert_eq!(dag.desc.as_deref(), Some("nightly load"));
    assert_eq!(dag.thread_pool.as_deref(), Some("io"));
}

#[test]
fn test_blank_input_yields_nothing() {
    let parsed = parse_documents("   \n\t\n");
    assert!(parsed.dags.is_empty());
    assert!(parsed.warnings.is_empty());
}

#[test]
fn test_malformed_document_is_skipped_with_warning() {
    let yaml = "dag_id: \"first\"\nnodes: []\n---\ndag_id: \"broken\"\nnodes: [\n---\ndag_id: \"third\"\nnodes: []\n";
    let parsed = parse_documents(yaml);

    let ids: Vec<_> = parsed.dags.iter().map(|dag| dag.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "third"]);

    assert_eq!(parsed.warnings.len(), 1);
    let warning = &parsed.warnings[0];
    assert_eq!(warning.document(), 1);
    assert!(matches!(warning, RecordError::Malformed { .. }));
}

#[test]
fn test_wrong_field_type_is_a_warning() {
    let parsed = parse_documents("dag_id: \"x\"\nnodes: \"not a list\"\n");
    assert!(parsed.dags.is_empty());
    assert_eq!(parsed.warnings.len(), 1);
    assert!(matches!(
        parsed.warnings[0],
        RecordError::InvalidShape { document: 0, .. }
    ));
    assert!(parsed.warnings[0]
        .to_string()
        .starts_with("Document 0 does not describe a DAG record"));
}

#[test]
fn test_numeric_ids_reject_the_record() {
    let yaml = "dag_id: \"d\"\nnodes:\n  - node_id: 42\n---\ndag_id: \"ok\"\nnodes:\n  - node_id: \"A\"\n";
    let parsed = parse_documents(yaml);
    assert_eq!(parsed.dags.len(), 1);
    assert_eq!(parsed.dags[0].id, "ok");
    assert_eq!(parsed.warnings.len(), 1);
    assert!(matches!(
        parsed.warnings[0],
        RecordError::InvalidShape { document: 0, .. }
    ));
}

#[test]
fn test_syntax_error_reads_as_invalid_yaml() {
    let parsed = parse_documents("dag_id: \"x\"\nnodes: [\n");
    assert!(matches!(
        parsed.warnings[0],
        RecordError::Malformed { document: 0, .. }
    ));
    assert!(parsed.warnings[0].to_string().contains("is not valid YAML"));
}

#[test]
fn test_document_without_dag_id_is_discarded_silently() {
    let yaml = "name: \"no id\"\nnodes: []\n---\ndag_id: ~\nnodes: []\n---\ndag_id: \"\"\nnodes: []\n";
    let parsed = parse_documents(yaml);
    assert!(parsed.dags.is_empty());
    assert!(parsed.warnings.is_empty());
}

#[test]
fn test_missing_nodes_is_a_conversion_warning() {
    let parsed = parse_documents("dag_id: \"lonely\"\n");
    assert!(parsed.dags.is_empty());
    assert_eq!(
        parsed.warnings,
        vec![RecordError::Conversion {
            document: 0,
            source: ConversionError::MissingNodes {
                dag_id: "lonely".to_string()
            },
        }]
    );
}

#[test]
fn test_node_without_node_id_rejects_the_record() {
    let yaml = "dag_id: \"d\"\nnodes:\n  - node_id: \"A\"\n  - deps: [\"A\"]\n";
    let parsed = parse_documents(yaml);
    assert!(parsed.dags.is_empty());
    assert_eq!(
        parsed.warnings,
        vec![RecordError::Conversion {
            document: 0,
            source: ConversionError::MissingNodeId {
                dag_id: "d".to_string(),
                index: 1,
            },
        }]
    );
}

#[test]
fn test_empty_branch_fields_are_treated_as_absent() {
    let yaml = "dag_id: \"d\"\nnodes:\n  - node_id: \"A\"\n    true_node: \"\"\n    sub_dag: \"\"\n";
    let parsed = parse_documents(yaml);
    let node = parsed.dags[0].node("A").unwrap();
    assert!(!node.is_decision());
    assert!(node.sub_dag.is_none());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let yaml = "dag_id: \"d\"\nowner: \"ops\"\nnodes:\n  - node_id: \"A\"\n    retries: 3\n";
    let parsed = parse_documents(yaml);
    assert!(parsed.warnings.is_empty());
    assert_eq!(parsed.dags.len(), 1);
}
