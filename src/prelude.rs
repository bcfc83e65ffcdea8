//! Prelude module for convenient imports
//!
//! Re-exports the types an embedding application touches on almost every
//! interaction: the session context, the document model, and the mutation
//! surface. Import this module instead of naming each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowdoc::prelude::*;
//!
//! let mut designer = Designer::with_document(WorkflowDocument::skeleton("New workflow"));
//! designer.add_node(Node::new("n1", NodeKind::start(), "Start")).unwrap();
//! designer.selection.select_nodes(["n1"]);
//! ```

// Session context and editing state
pub use crate::editor::{
    Clipboard, ClipboardSnapshot, Designer, DesignerSettings, History, MAX_ZOOM, MIN_ZOOM,
    PASTE_OFFSET, PasteResult, Selection, SettingsPatch, Theme, Viewport,
};

// Mutation API
pub use crate::editor::{EdgePatch, MetadataPatch, MutationOutcome, NodePatch};

// Document model
pub use crate::document::{
    ContainerAttrs, Edge, EdgeAttrs, EdgeStyle, EventAttrs, GatewayAttrs, ListenerDecl, Node,
    NodeKind, NodeStyle, ScriptTaskAttrs, ServiceTaskAttrs, UserTaskAttrs, VariableType,
    WorkflowDocument, WorkflowProperties, WorkflowStatus, WorkflowVariable,
};

// Geometry value types
pub use crate::geometry::{Position, Size};

// Error types
pub use crate::error::{DocumentError, ElementKind, MutationError};
