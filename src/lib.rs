//! # Flowdoc - Workflow Designer Document Model
//!
//! **Flowdoc** is the document, selection and undo/redo model behind a
//! node-based workflow designer. It owns the workflow graph (typed nodes,
//! directed edges, workflow metadata) and the surrounding editing state
//! (selection, viewport transform, clipboard, linear history), while
//! staying completely independent of any rendering surface or backend:
//! a canvas reads the model every frame, a persister receives JSON
//! snapshots, and neither is part of this crate.
//!
//! ## Core Workflow
//!
//! 1. **Open a session**: create a [`Designer`](editor::Designer) from an
//!    empty [`WorkflowDocument::skeleton`](document::WorkflowDocument::skeleton)
//!    or from backend JSON via
//!    [`WorkflowDocument::from_json`](document::WorkflowDocument::from_json).
//! 2. **Mutate through the API**: every document write goes through the
//!    mutation methods on `Designer` (`add_node`, `update_edge`,
//!    `remove_node`, ...). Each call is atomic; rejected calls leave the
//!    document untouched.
//! 3. **Checkpoint what matters**: the host calls
//!    [`commit`](editor::Designer::commit) after history-worthy edits.
//!    Viewport pans and selection changes stay out of the undo stream.
//! 4. **Save**: hand [`to_json`](document::WorkflowDocument::to_json) output
//!    to the persister. The wire shape going out is the shape that came in.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowdoc::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Start a session from an empty draft.
//!     let mut designer = Designer::with_document(WorkflowDocument::skeleton("Order approval"));
//!
//!     // Build a minimal flow: start -> review.
//!     let review_task = NodeKind::user_task(UserTaskAttrs {
//!         assignee: Some("alice".to_string()),
//!         ..Default::default()
//!     });
//!     designer.add_node(Node::new("n-start", NodeKind::start(), "Start"))?;
//!     designer.add_node(
//!         Node::new("n-review", review_task, "Review order").at(Position::new(260.0, 100.0)),
//!     )?;
//!     designer.add_edge(Edge::new("e-1", "n-start", "n-review"))?;
//!     designer.commit();
//!
//!     // Removing a node cascades to every edge touching it.
//!     designer.remove_node("n-start");
//!     assert!(designer.document().unwrap().edges.is_empty());
//!     designer.commit();
//!
//!     // Undo restores the previous checkpoint.
//!     designer.undo();
//!     assert_eq!(designer.document().unwrap().nodes.len(), 2);
//!
//!     // Hand the snapshot to an external persister.
//!     let json = designer.document().unwrap().to_json()?;
//!     println!("{json}");
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod prelude;
