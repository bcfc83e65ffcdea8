//! The editing session: document ownership, selection, viewport, clipboard
//! and history, tied together by the [`Designer`] context object.
//!
//! The hosting application owns exactly one `Designer` per editing session
//! and passes it wherever editor state is needed; there is no ambient or
//! global store. All document writes go through the mutation API on
//! `Designer`; selection, viewport and settings are freely accessible
//! because they never participate in undo/redo.

mod clipboard;
mod history;
mod mutation;
mod selection;
mod settings;
mod viewport;

pub use clipboard::{Clipboard, ClipboardSnapshot, PASTE_OFFSET};
pub use history::History;
pub use mutation::{EdgePatch, MetadataPatch, MutationOutcome, NodePatch};
pub use selection::Selection;
pub use settings::{DesignerSettings, SettingsPatch, Theme};
pub use viewport::{MAX_ZOOM, MIN_ZOOM, Viewport};

use crate::document::{Edge, Node, WorkflowDocument};
use crate::error::MutationError;

/// Everything pasted by a single paste call, already inserted into the
/// document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasteResult {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl PasteResult {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// The single mutable context of an editing session.
///
/// The document and history are private so the mutation API and the
/// commit/undo/redo cycle stay the only write paths; selection, viewport
/// and settings are plain fields the hosting surface reads and writes every
/// frame.
#[derive(Debug, Clone, Default)]
pub struct Designer {
    pub(crate) document: Option<WorkflowDocument>,
    pub selection: Selection,
    pub viewport: Viewport,
    pub settings: DesignerSettings,
    clipboard: Clipboard,
    history: History,
}

impl Designer {
    /// A session with no document loaded. Every mutation is a no-op until
    /// [`set_document`](Self::set_document) provides one.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session starting from the given document.
    pub fn with_document(document: WorkflowDocument) -> Self {
        Self {
            document: Some(document),
            ..Self::default()
        }
    }

    /// The live document, if any.
    pub fn document(&self) -> Option<&WorkflowDocument> {
        self.document.as_ref()
    }

    /// Replaces the document wholesale, as "load" and "new" do. History is
    /// deliberately untouched; callers switching documents also call
    /// [`clear_history`](Self::clear_history).
    pub fn set_document(&mut self, document: Option<WorkflowDocument>) {
        match &document {
            Some(doc) => tracing::debug!(document = %doc.id, "document set"),
            None => tracing::debug!("document cleared"),
        }
        self.document = document;
    }

    /// Checkpoints the live document onto the undo stack. The host calls
    /// this for history-worthy actions (node/edge edits) and skips it for
    /// cosmetic ones (viewport pans, selection changes).
    pub fn commit(&mut self) -> MutationOutcome {
        match &self.document {
            Some(document) => {
                self.history.commit(document.clone());
                MutationOutcome::Applied
            }
            None => MutationOutcome::NoOp,
        }
    }

    /// Steps the history back one checkpoint and makes that snapshot the
    /// live document. `NoOp` when there is nothing to undo.
    pub fn undo(&mut self) -> MutationOutcome {
        match self.history.undo() {
            Some(document) => {
                self.document = Some(document.clone());
                MutationOutcome::Applied
            }
            None => MutationOutcome::NoOp,
        }
    }

    /// Steps the history forward again, symmetric to [`undo`](Self::undo).
    pub fn redo(&mut self) -> MutationOutcome {
        match self.history.redo() {
            Some(document) => {
                self.document = Some(document.clone());
                MutationOutcome::Applied
            }
            None => MutationOutcome::NoOp,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Copies the given nodes and exactly the given edges into the
    /// clipboard. No-op without a document.
    pub fn copy(&mut self, node_ids: &[&str], edge_ids: &[&str]) {
        if let Some(document) = &self.document {
            self.clipboard.copy(document, node_ids, edge_ids);
        }
    }

    /// Copies whatever the selection currently references.
    pub fn copy_selection(&mut self) {
        let Some(document) = &self.document else {
            return;
        };
        let node_ids: Vec<&str> = self.selection.nodes().iter().map(String::as_str).collect();
        let edge_ids: Vec<&str> = self.selection.edges().iter().map(String::as_str).collect();
        self.clipboard.copy(document, &node_ids, &edge_ids);
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard.clear();
    }

    /// Inserts the clipboard contents into the document with fresh ids,
    /// positions offset by [`PASTE_OFFSET`], and edges remapped onto the
    /// pasted nodes. Returns the newly created elements; empty when the
    /// clipboard or the session has nothing to paste into.
    pub fn paste(&mut self) -> Result<PasteResult, MutationError> {
        if self.document.is_none() {
            return Ok(PasteResult::default());
        }
        let Some((nodes, edges)) = self.clipboard.remapped_for_paste() else {
            return Ok(PasteResult::default());
        };
        for node in &nodes {
            self.add_node(node.clone())?;
        }
        for edge in &edges {
            self.add_edge(edge.clone())?;
        }
        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "pasted subgraph");
        Ok(PasteResult { nodes, edges })
    }
}
