use std::fmt;
use thiserror::Error;

/// The kind of graph element an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Edge,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Node => write!(f, "node"),
            ElementKind::Edge => write!(f, "edge"),
        }
    }
}

/// Errors that cause a mutation to be rejected.
///
/// A rejected mutation is atomic: the document is left exactly as it was
/// before the call. Mutations that merely reference an absent element are
/// not errors; they report [`MutationOutcome::NoOp`](crate::editor::MutationOutcome).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("a {kind} with id '{id}' already exists in the document")]
    DuplicateId { kind: ElementKind, id: String },

    #[error("edge '{edge_id}' references node '{node_id}', which does not exist in the document")]
    MissingEndpoint { edge_id: String, node_id: String },

    #[error("node '{node_id}' has invalid geometry: {reason}")]
    InvalidGeometry { node_id: String, reason: String },
}

/// Errors raised at the document load/save boundary.
///
/// Documents arriving from an external loader are the one place where the
/// edge-endpoint and unique-id invariants cannot be assumed; `validate`
/// checks them before a document is handed to an editing session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("failed to serialize workflow JSON: {0}")]
    JsonSerializeError(String),

    #[error("duplicate node id '{0}' in document")]
    DuplicateNodeId(String),

    #[error("duplicate edge id '{0}' in document")]
    DuplicateEdgeId(String),

    #[error("edge '{edge_id}' references node '{node_id}', which does not exist in the document")]
    DanglingEdge { edge_id: String, node_id: String },
}
