use crate::document::WorkflowDocument;
use std::collections::VecDeque;

/// Linear undo/redo stack of document snapshots.
///
/// The triple `{past, present, future}` moves as one unit: committing pushes
/// the old present onto `past` and discards `future` wholesale, so there is
/// never a branching redo lineage. `past` and `future` never share a top
/// element, and `present` is the snapshot matching what the host currently
/// renders (when the history is non-empty).
///
/// History is deliberately decoupled from the mutation API: the host decides
/// which actions are history-worthy. Node and edge edits are; viewport pans,
/// selection changes and settings tweaks are not, which keeps cosmetic
/// navigation out of the undo stream.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<WorkflowDocument>,
    present: Option<WorkflowDocument>,
    future: VecDeque<WorkflowDocument>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new checkpoint. Any redo lineage is discarded the moment a
    /// commit lands after an undo.
    pub fn commit(&mut self, document: WorkflowDocument) {
        if let Some(previous) = self.present.take() {
            self.past.push(previous);
        }
        self.present = Some(document);
        self.future.clear();
        tracing::debug!(undo_depth = self.past.len(), "history checkpoint committed");
    }

    /// Steps back one checkpoint, returning the document that is now
    /// current. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&WorkflowDocument> {
        let previous = self.past.pop()?;
        if let Some(current) = self.present.take() {
            self.future.push_front(current);
        }
        self.present = Some(previous);
        tracing::debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "undo"
        );
        self.present.as_ref()
    }

    /// Steps forward one checkpoint, symmetric to [`undo`](Self::undo).
    pub fn redo(&mut self) -> Option<&WorkflowDocument> {
        let next = self.future.pop_front()?;
        if let Some(current) = self.present.take() {
            self.past.push(current);
        }
        self.present = Some(next);
        tracing::debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "redo"
        );
        self.present.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// The last committed checkpoint, if any.
    pub fn present(&self) -> Option<&WorkflowDocument> {
        self.present.as_ref()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Drops every snapshot. Used when a different document is loaded into
    /// the session.
    pub fn clear(&mut self) {
        self.past.clear();
        self.present = None;
        self.future.clear();
    }
}
