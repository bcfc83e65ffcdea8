//! Tests for the mutation API: inserts, merges, removal cascades and the
//! atomicity of rejected calls.
mod common;
use common::*;
use flowdoc::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_build_minimal_flow() {
    let mut designer = empty_session();

    designer
        .add_node(start_node("n1", 0.0, 0.0).sized(Size::new(100.0, 40.0)))
        .expect("add n1");
    designer
        .add_node(end_node("n2", 200.0, 0.0).sized(Size::new(100.0, 40.0)))
        .expect("add n2");
    designer
        .add_edge(Edge::new("e1", "n1", "n2"))
        .expect("add e1");

    let document = designer.document().unwrap();
    assert_eq!(document.nodes.len(), 2);
    assert_eq!(document.edges.len(), 1);
}

#[test]
fn test_remove_node_cascades_to_edges() {
    let mut designer = empty_session();
    designer.add_node(start_node("n1", 0.0, 0.0)).unwrap();
    designer.add_node(end_node("n2", 200.0, 0.0)).unwrap();
    designer.add_edge(Edge::new("e1", "n1", "n2")).unwrap();

    let outcome = designer.remove_node("n1");
    assert!(outcome.applied());

    let document = designer.document().unwrap();
    assert_eq!(document.nodes.len(), 1);
    assert_eq!(document.edges.len(), 0, "cascade should remove e1");
}

#[test]
fn test_remove_node_cascade_spares_unrelated_edges() {
    let mut designer = linear_session();

    designer.remove_node("n-end");

    let document = designer.document().unwrap();
    assert!(document.contains_edge("e-1"));
    assert!(!document.contains_edge("e-2"));
    assert!(document.edges_touching("n-end").is_empty());
}

#[test]
fn test_duplicate_node_id_is_rejected() {
    let mut designer = linear_session();
    let before = designer.document().unwrap().clone();

    let result = designer.add_node(start_node("n-start", 500.0, 500.0));
    match result {
        Err(MutationError::DuplicateId { kind, id }) => {
            assert_eq!(kind, ElementKind::Node);
            assert_eq!(id, "n-start");
        }
        other => panic!("expected DuplicateId, got {:?}", other),
    }

    // Rejected mutations must leave the document untouched.
    assert_eq!(designer.document().unwrap(), &before);
}

#[test]
fn test_edge_with_missing_endpoint_is_rejected() {
    let mut designer = linear_session();
    let before = designer.document().unwrap().clone();

    let result = designer.add_edge(Edge::new("e-bad", "n-start", "n-ghost"));
    match result {
        Err(MutationError::MissingEndpoint { edge_id, node_id }) => {
            assert_eq!(edge_id, "e-bad");
            assert_eq!(node_id, "n-ghost");
        }
        other => panic!("expected MissingEndpoint, got {:?}", other),
    }
    assert_eq!(designer.document().unwrap(), &before);
}

#[test]
fn test_self_loop_edge_is_permitted() {
    let mut designer = linear_session();

    let outcome = designer
        .add_edge(Edge::new("e-loop", "n-review", "n-review"))
        .expect("self-loops are structurally legal");
    assert!(outcome.applied());
    assert!(designer.document().unwrap().find_edge("e-loop").unwrap().is_self_loop());
}

#[test]
fn test_update_absent_node_is_a_noop() {
    let mut designer = linear_session();
    let before = designer.document().unwrap().clone();

    let outcome = designer
        .update_node("n-ghost", NodePatch::default().with_name("renamed"))
        .expect("absent id is not an error");

    assert_eq!(outcome, MutationOutcome::NoOp);
    assert_eq!(designer.document().unwrap(), &before);
}

#[test]
fn test_update_node_merges_only_set_fields() {
    let mut designer = linear_session();

    designer
        .update_node(
            "n-review",
            NodePatch::default()
                .with_name("Second review")
                .with_position(Position::new(240.0, 80.0)),
        )
        .unwrap();

    let node = designer.document().unwrap().find_node("n-review").unwrap();
    assert_eq!(node.name, "Second review");
    assert_eq!(node.position, Position::new(240.0, 80.0));
    // Untouched fields survive the merge.
    assert_eq!(node.size, Size::default());
    assert_eq!(node.kind.type_name(), "userTask");
}

#[test]
fn test_update_node_rejects_degenerate_geometry() {
    let mut designer = linear_session();
    let before = designer.document().unwrap().clone();

    let result = designer.update_node(
        "n-review",
        NodePatch::default().with_size(Size::new(-10.0, 40.0)),
    );
    assert!(matches!(
        result,
        Err(MutationError::InvalidGeometry { .. })
    ));
    assert_eq!(designer.document().unwrap(), &before);

    let result = designer.update_node(
        "n-review",
        NodePatch::default().with_position(Position::new(f64::NAN, 0.0)),
    );
    assert!(matches!(
        result,
        Err(MutationError::InvalidGeometry { .. })
    ));
    assert_eq!(designer.document().unwrap(), &before);
}

#[test]
fn test_update_edge_merges_and_validates_rewiring() {
    let mut designer = linear_session();

    designer
        .update_edge(
            "e-1",
            EdgePatch::default()
                .with_label("to review")
                .with_condition("${amount > 100}"),
        )
        .unwrap();
    let edge = designer.document().unwrap().find_edge("e-1").unwrap();
    assert_eq!(edge.label.as_deref(), Some("to review"));
    assert_eq!(edge.condition.as_deref(), Some("${amount > 100}"));

    // Rewiring onto a missing node is rejected, and nothing is applied.
    let before = designer.document().unwrap().clone();
    let result = designer.update_edge(
        "e-1",
        EdgePatch::default()
            .with_label("half-applied")
            .with_target("n-ghost"),
    );
    assert!(matches!(result, Err(MutationError::MissingEndpoint { .. })));
    assert_eq!(designer.document().unwrap(), &before);
}

#[test]
fn test_remove_edge_has_no_cascade() {
    let mut designer = linear_session();

    assert!(designer.remove_edge("e-1").applied());
    assert_eq!(designer.remove_edge("e-1"), MutationOutcome::NoOp);

    let document = designer.document().unwrap();
    assert_eq!(document.nodes.len(), 3);
    assert_eq!(document.edges.len(), 1);
}

#[test]
fn test_update_metadata_shallow_merge() {
    let mut designer = empty_session();

    let outcome = designer.update_metadata(
        MetadataPatch::default()
            .with_name("Invoice flow")
            .with_version("1.1.0")
            .with_status(WorkflowStatus::Active),
    );
    assert!(outcome.applied());

    let document = designer.document().unwrap();
    assert_eq!(document.name, "Invoice flow");
    assert_eq!(document.version, "1.1.0");
    assert_eq!(document.status, WorkflowStatus::Active);
    // Fields absent from the patch keep their values.
    assert_eq!(document.category, "default");
}

#[test]
fn test_mutations_without_document_are_noops() {
    let mut designer = Designer::new();

    assert_eq!(
        designer.update_metadata(MetadataPatch::default().with_name("x")),
        MutationOutcome::NoOp
    );
    assert_eq!(
        designer.add_node(start_node("n1", 0.0, 0.0)).unwrap(),
        MutationOutcome::NoOp
    );
    assert_eq!(designer.remove_node("n1"), MutationOutcome::NoOp);
    assert!(designer.document().is_none());
}
