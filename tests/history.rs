//! Tests for the linear undo/redo history and its integration with the
//! editing session.
mod common;
use common::*;
use flowdoc::prelude::*;
use pretty_assertions::assert_eq;

/// Commits three successive document states and returns the session.
/// D1 = one node, D2 = two nodes, D3 = three nodes.
fn session_with_three_commits() -> Designer {
    let mut designer = empty_session();
    designer.add_node(start_node("n1", 0.0, 0.0)).unwrap();
    designer.commit();
    designer.add_node(user_task("n2", "Review", "alice")).unwrap();
    designer.commit();
    designer.add_node(end_node("n3", 400.0, 0.0)).unwrap();
    designer.commit();
    designer
}

#[test]
fn test_undo_twice_then_redo_once() {
    let mut designer = session_with_three_commits();

    assert!(designer.undo().applied());
    assert!(designer.undo().applied());
    assert_eq!(designer.document().unwrap().nodes.len(), 1, "back at D1");

    assert!(designer.redo().applied());
    assert_eq!(designer.document().unwrap().nodes.len(), 2, "forward to D2");
}

#[test]
fn test_undo_redo_round_trip_restores_document() {
    let mut designer = session_with_three_commits();
    let committed = designer.document().unwrap().clone();

    designer.undo();
    designer.redo();

    assert_eq!(designer.document().unwrap(), &committed);
}

#[test]
fn test_commit_after_undo_discards_redo_lineage() {
    let mut designer = session_with_three_commits();

    designer.undo();
    assert!(designer.can_redo());

    // A fresh commit forks the timeline; the old future must vanish.
    designer.add_node(start_node("n-new", 50.0, 50.0)).unwrap();
    designer.commit();

    assert!(!designer.can_redo());
    assert_eq!(designer.history().redo_depth(), 0);
    assert_eq!(designer.redo(), MutationOutcome::NoOp);
}

#[test]
fn test_undo_at_the_boundary_is_a_noop() {
    let mut designer = empty_session();
    assert_eq!(designer.undo(), MutationOutcome::NoOp);
    assert_eq!(designer.redo(), MutationOutcome::NoOp);

    // A single commit has nothing before it to restore.
    designer.commit();
    assert!(!designer.can_undo());
    assert_eq!(designer.undo(), MutationOutcome::NoOp);
}

#[test]
fn test_present_tracks_last_checkpoint() {
    let mut designer = empty_session();
    designer.add_node(start_node("n1", 0.0, 0.0)).unwrap();
    designer.commit();

    let checkpoint = designer.history().present().unwrap().clone();
    assert_eq!(&checkpoint, designer.document().unwrap());

    // Mutating without committing moves the live document ahead of the
    // checkpoint; committing reconciles them again.
    designer.add_node(end_node("n2", 100.0, 0.0)).unwrap();
    assert_ne!(designer.history().present().unwrap(), designer.document().unwrap());
    designer.commit();
    assert_eq!(designer.history().present().unwrap(), designer.document().unwrap());
}

#[test]
fn test_undo_depths_track_the_triple() {
    let mut designer = session_with_three_commits();
    assert_eq!(designer.history().undo_depth(), 2);
    assert_eq!(designer.history().redo_depth(), 0);

    designer.undo();
    assert_eq!(designer.history().undo_depth(), 1);
    assert_eq!(designer.history().redo_depth(), 1);

    designer.undo();
    assert_eq!(designer.history().undo_depth(), 0);
    assert_eq!(designer.history().redo_depth(), 2);
}

#[test]
fn test_commit_without_document_is_a_noop() {
    let mut designer = Designer::new();
    assert_eq!(designer.commit(), MutationOutcome::NoOp);
    assert!(designer.history().present().is_none());
}

#[test]
fn test_set_document_leaves_history_untouched() {
    let mut designer = session_with_three_commits();
    assert!(designer.can_undo());

    designer.set_document(Some(WorkflowDocument::skeleton("Other")));
    assert!(designer.can_undo(), "set_document must not touch history");

    designer.clear_history();
    assert!(!designer.can_undo());
    assert!(!designer.can_redo());
}

#[test]
fn test_standalone_history_transitions() {
    let mut history = History::new();
    let d1 = WorkflowDocument::skeleton("D1");
    let d2 = WorkflowDocument::skeleton("D2");

    history.commit(d1.clone());
    history.commit(d2.clone());
    assert_eq!(history.present(), Some(&d2));

    assert_eq!(history.undo(), Some(&d1));
    assert_eq!(history.redo(), Some(&d2));
    assert_eq!(history.redo(), None);
}
