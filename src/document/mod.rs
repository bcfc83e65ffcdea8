//! The workflow document model: the graph of nodes and edges plus
//! workflow-level metadata.
//!
//! Types in this module are plain values. Read access (lookups, the
//! edges-touching query used by the removal cascade) lives here; every
//! write goes through the mutation API on
//! [`Designer`](crate::editor::Designer).

mod edge;
mod node;
mod style;
mod workflow;

pub use edge::{Edge, EdgeAttrs};
pub use node::{
    ContainerAttrs, EventAttrs, GatewayAttrs, Node, NodeKind, ScriptTaskAttrs, ServiceTaskAttrs,
    UserTaskAttrs,
};
pub use style::{EdgeStyle, NodeStyle};
pub use workflow::{
    ListenerDecl, VariableType, WorkflowDocument, WorkflowProperties, WorkflowStatus,
    WorkflowVariable,
};
