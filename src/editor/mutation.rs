//! The mutation API: the only write path into the document model.
//!
//! Every operation is atomic. Validation runs before anything is touched,
//! so a rejected mutation leaves the document bit-for-bit identical to its
//! pre-call state. References to absent elements are not errors; they
//! resolve to [`MutationOutcome::NoOp`], matching the ergonomics a canvas
//! expects while still giving tests a discriminated outcome to assert on.

use crate::document::{Edge, EdgeAttrs, EdgeStyle, Node, NodeKind, NodeStyle, WorkflowStatus};
use crate::editor::Designer;
use crate::error::{ElementKind, MutationError};
use crate::geometry::{Position, Size};

/// What a mutation did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The document changed.
    Applied,
    /// Nothing matched; the document is untouched.
    NoOp,
}

impl MutationOutcome {
    pub fn applied(self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// Partial update of workflow-level metadata.
#[derive(Debug, Clone, Default)]
pub struct MetadataPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub category: Option<String>,
    pub status: Option<WorkflowStatus>,
}

impl MetadataPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: WorkflowStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.version.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}

/// Partial update of a node. The id is immutable; changing `kind` swaps the
/// type and its typed attributes in one step.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub kind: Option<NodeKind>,
    pub style: Option<NodeStyle>,
}

impl NodePatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.position.is_none()
            && self.size.is_none()
            && self.kind.is_none()
            && self.style.is_none()
    }
}

/// Partial update of an edge. Rewiring `source`/`target` is validated
/// against the document like an insert.
#[derive(Debug, Clone, Default)]
pub struct EdgePatch {
    pub source: Option<String>,
    pub target: Option<String>,
    pub source_anchor: Option<String>,
    pub target_anchor: Option<String>,
    pub label: Option<String>,
    pub condition: Option<String>,
    pub style: Option<EdgeStyle>,
    pub data: Option<EdgeAttrs>,
}

impl EdgePatch {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_data(mut self, data: EdgeAttrs) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.target.is_none()
            && self.source_anchor.is_none()
            && self.target_anchor.is_none()
            && self.label.is_none()
            && self.condition.is_none()
            && self.style.is_none()
            && self.data.is_none()
    }
}

fn check_geometry(node_id: &str, position: Position, size: Size) -> Result<(), MutationError> {
    if !position.is_finite() {
        return Err(MutationError::InvalidGeometry {
            node_id: node_id.to_string(),
            reason: format!("position ({}, {}) is not finite", position.x, position.y),
        });
    }
    if !size.is_valid() {
        return Err(MutationError::InvalidGeometry {
            node_id: node_id.to_string(),
            reason: format!(
                "size ({} x {}) must be finite and non-negative",
                size.width, size.height
            ),
        });
    }
    Ok(())
}

impl Designer {
    /// Shallow-merges the set fields of the patch into the document
    /// metadata. `NoOp` when no document is loaded or the patch is empty.
    pub fn update_metadata(&mut self, patch: MetadataPatch) -> MutationOutcome {
        let Some(document) = self.document.as_mut() else {
            return MutationOutcome::NoOp;
        };
        if patch.is_empty() {
            return MutationOutcome::NoOp;
        }
        if let Some(name) = patch.name {
            document.name = name;
        }
        if let Some(description) = patch.description {
            document.description = Some(description);
        }
        if let Some(version) = patch.version {
            document.version = version;
        }
        if let Some(category) = patch.category {
            document.category = category;
        }
        if let Some(status) = patch.status {
            document.status = status;
        }
        tracing::debug!(document = %document.id, "metadata updated");
        MutationOutcome::Applied
    }

    /// Appends a node. Rejects duplicate ids and degenerate geometry.
    pub fn add_node(&mut self, node: Node) -> Result<MutationOutcome, MutationError> {
        let Some(document) = self.document.as_mut() else {
            return Ok(MutationOutcome::NoOp);
        };
        if document.contains_node(&node.id) {
            return Err(MutationError::DuplicateId {
                kind: ElementKind::Node,
                id: node.id.clone(),
            });
        }
        check_geometry(&node.id, node.position, node.size)?;
        tracing::debug!(node = %node.id, kind = node.kind.type_name(), "node added");
        document.nodes.push(node);
        Ok(MutationOutcome::Applied)
    }

    /// Merges the set fields of the patch into the matching node. `NoOp`
    /// when the id is absent or the patch is empty.
    pub fn update_node(
        &mut self,
        id: &str,
        patch: NodePatch,
    ) -> Result<MutationOutcome, MutationError> {
        let Some(document) = self.document.as_mut() else {
            return Ok(MutationOutcome::NoOp);
        };
        let Some(index) = document.nodes.iter().position(|n| n.id == id) else {
            return Ok(MutationOutcome::NoOp);
        };
        if patch.is_empty() {
            return Ok(MutationOutcome::NoOp);
        }

        // Validate the merged geometry before any field is written.
        let node = &document.nodes[index];
        let position = patch.position.unwrap_or(node.position);
        let size = patch.size.unwrap_or(node.size);
        check_geometry(id, position, size)?;

        let node = &mut document.nodes[index];
        if let Some(name) = patch.name {
            node.name = name;
        }
        if let Some(description) = patch.description {
            node.description = Some(description);
        }
        node.position = position;
        node.size = size;
        if let Some(kind) = patch.kind {
            node.kind = kind;
        }
        if let Some(style) = patch.style {
            node.style = style;
        }
        tracing::debug!(node = %id, "node updated");
        Ok(MutationOutcome::Applied)
    }

    /// Removes a node and cascades removal to every edge touching it, so no
    /// dangling endpoint survives the call.
    pub fn remove_node(&mut self, id: &str) -> MutationOutcome {
        let Some(document) = self.document.as_mut() else {
            return MutationOutcome::NoOp;
        };
        let node_count = document.nodes.len();
        document.nodes.retain(|n| n.id != id);
        if document.nodes.len() == node_count {
            return MutationOutcome::NoOp;
        }
        let edge_count = document.edges.len();
        document.edges.retain(|e| !e.touches(id));
        tracing::debug!(
            node = %id,
            cascaded_edges = edge_count - document.edges.len(),
            "node removed"
        );
        MutationOutcome::Applied
    }

    /// Appends an edge. Both endpoints must already exist in the document;
    /// self-loops are permitted.
    pub fn add_edge(&mut self, edge: Edge) -> Result<MutationOutcome, MutationError> {
        let Some(document) = self.document.as_mut() else {
            return Ok(MutationOutcome::NoOp);
        };
        if document.contains_edge(&edge.id) {
            return Err(MutationError::DuplicateId {
                kind: ElementKind::Edge,
                id: edge.id.clone(),
            });
        }
        for endpoint in [&edge.source, &edge.target] {
            if !document.contains_node(endpoint) {
                return Err(MutationError::MissingEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        tracing::debug!(edge = %edge.id, source = %edge.source, target = %edge.target, "edge added");
        document.edges.push(edge);
        Ok(MutationOutcome::Applied)
    }

    /// Merges the set fields of the patch into the matching edge. Rewired
    /// endpoints are validated against the document first.
    pub fn update_edge(
        &mut self,
        id: &str,
        patch: EdgePatch,
    ) -> Result<MutationOutcome, MutationError> {
        let Some(document) = self.document.as_mut() else {
            return Ok(MutationOutcome::NoOp);
        };
        let Some(index) = document.edges.iter().position(|e| e.id == id) else {
            return Ok(MutationOutcome::NoOp);
        };
        if patch.is_empty() {
            return Ok(MutationOutcome::NoOp);
        }

        for endpoint in [&patch.source, &patch.target].into_iter().flatten() {
            if !document.contains_node(endpoint) {
                return Err(MutationError::MissingEndpoint {
                    edge_id: id.to_string(),
                    node_id: endpoint.clone(),
                });
            }
        }

        let edge = &mut document.edges[index];
        if let Some(source) = patch.source {
            edge.source = source;
        }
        if let Some(target) = patch.target {
            edge.target = target;
        }
        if let Some(source_anchor) = patch.source_anchor {
            edge.source_anchor = Some(source_anchor);
        }
        if let Some(target_anchor) = patch.target_anchor {
            edge.target_anchor = Some(target_anchor);
        }
        if let Some(label) = patch.label {
            edge.label = Some(label);
        }
        if let Some(condition) = patch.condition {
            edge.condition = Some(condition);
        }
        if let Some(style) = patch.style {
            edge.style = style;
        }
        if let Some(data) = patch.data {
            edge.data = data;
        }
        tracing::debug!(edge = %id, "edge updated");
        Ok(MutationOutcome::Applied)
    }

    /// Removes an edge by id. No cascade is needed.
    pub fn remove_edge(&mut self, id: &str) -> MutationOutcome {
        let Some(document) = self.document.as_mut() else {
            return MutationOutcome::NoOp;
        };
        let edge_count = document.edges.len();
        document.edges.retain(|e| e.id != id);
        if document.edges.len() == edge_count {
            MutationOutcome::NoOp
        } else {
            tracing::debug!(edge = %id, "edge removed");
            MutationOutcome::Applied
        }
    }
}
