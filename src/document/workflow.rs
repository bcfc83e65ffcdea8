use crate::document::edge::Edge;
use crate::document::node::Node;
use crate::error::DocumentError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The root aggregate of an editing session: the workflow graph and its
/// metadata.
///
/// A document is created as an empty [`skeleton`](WorkflowDocument::skeleton)
/// when a new session starts, or parsed from the backend's JSON shape via
/// [`from_json`](WorkflowDocument::from_json). It is owned exclusively by the
/// active session and mutated only through the mutation API on
/// [`Designer`](crate::editor::Designer).
///
/// `nodes` and `edges` keep insertion order; for nodes that order is the
/// display (z) order a canvas renders in. Every edge endpoint references an
/// existing node id; the mutation API maintains this by validating inserts
/// and cascading edge removal when a node goes away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDocument {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    pub category: String,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<WorkflowVariable>,
    #[serde(default, skip_serializing_if = "WorkflowProperties::is_empty")]
    pub properties: WorkflowProperties,
    // Audit fields are carried verbatim for the persister; the editor never
    // reads or rewrites them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl WorkflowDocument {
    /// The empty draft a new editing session starts from.
    pub fn skeleton(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            version: "1.0.0".to_string(),
            category: "default".to_string(),
            status: WorkflowStatus::Draft,
            nodes: Vec::new(),
            edges: Vec::new(),
            variables: Vec::new(),
            properties: WorkflowProperties::default(),
            created_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Looks up a node by id. A miss is a normal outcome; callers resolving
    /// edge endpoints mid-edit are expected to tolerate it.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.find_node(id).is_some()
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.find_edge(id).is_some()
    }

    /// Every edge that starts or ends at the given node. Drives the removal
    /// cascade.
    pub fn edges_touching(&self, node_id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.touches(node_id)).collect()
    }

    /// Structural audit for documents arriving from an external loader:
    /// unique node/edge ids and no dangling endpoints. Inside a session the
    /// mutation API keeps these invariants, so this only runs at the load
    /// boundary.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if let Some(id) = self.nodes.iter().map(|n| &n.id).duplicates().next() {
            return Err(DocumentError::DuplicateNodeId(id.clone()));
        }
        if let Some(id) = self.edges.iter().map(|e| &e.id).duplicates().next() {
            return Err(DocumentError::DuplicateEdgeId(id.clone()));
        }
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !self.contains_node(endpoint) {
                    return Err(DocumentError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parses a document from the backend's WorkflowDefinition JSON shape
    /// and validates its structure.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_str(json)
            .map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
        document.validate()?;
        Ok(document)
    }

    /// Serializes the document back to the wire shape it was loaded from.
    /// Top-level fields pass through untouched; only `nodes`, `edges` and
    /// metadata ever change between load and save.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|e| DocumentError::JsonSerializeError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DocumentError::JsonSerializeError(e.to_string()))
    }
}

/// Lifecycle status of a workflow definition. The editor only ever writes
/// this through metadata updates; transitions are the backend's business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStatus {
    #[default]
    Draft,
    Active,
    Suspended,
    Archived,
}

/// A process variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowVariable {
    pub name: String,
    #[serde(rename = "type")]
    pub variable_type: VariableType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    String,
    Number,
    Boolean,
    Date,
    Object,
    Array,
}

/// Lifecycle-listener declarations, opaque to the editor. The flattened
/// `extra` map carries whatever else a deployment hangs off the workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowProperties {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub execution_listeners: Vec<ListenerDecl>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub task_listeners: Vec<ListenerDecl>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event_listeners: Vec<ListenerDecl>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WorkflowProperties {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A single listener declaration: which lifecycle event it reacts to and
/// the class the engine should invoke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerDecl {
    pub event: String,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}
