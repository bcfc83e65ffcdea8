use crate::document::style::NodeStyle;
use crate::geometry::{Position, Size};
use serde::{Deserialize, Serialize};

/// A single vertex in the workflow graph.
///
/// The `id` is unique within a document and immutable after creation.
/// Insertion order of nodes in a document is display (z) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub position: Position,
    pub size: Size,
    #[serde(default, skip_serializing_if = "NodeStyle::is_empty")]
    pub style: NodeStyle,
}

impl Node {
    /// Creates a node at the default palette drop position.
    pub fn new(id: impl Into<String>, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            description: None,
            position: Position::new(100.0, 100.0),
            size: Size::default(),
            style: NodeStyle::default(),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn sized(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }
}

/// The closed set of node types, each carrying its own typed attribute set.
///
/// On the wire this is the `type` discriminator plus the `data` object of
/// the node, so a document produced by any conforming designer parses
/// directly. Attribute structs keep unrecognized keys in their `extra` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Start {
        #[serde(default, skip_serializing_if = "EventAttrs::is_empty")]
        data: EventAttrs,
    },
    End {
        #[serde(default, skip_serializing_if = "EventAttrs::is_empty")]
        data: EventAttrs,
    },
    UserTask {
        #[serde(default, skip_serializing_if = "UserTaskAttrs::is_empty")]
        data: UserTaskAttrs,
    },
    ServiceTask {
        #[serde(default, skip_serializing_if = "ServiceTaskAttrs::is_empty")]
        data: ServiceTaskAttrs,
    },
    ScriptTask {
        #[serde(default, skip_serializing_if = "ScriptTaskAttrs::is_empty")]
        data: ScriptTaskAttrs,
    },
    ExclusiveGateway {
        #[serde(default, skip_serializing_if = "GatewayAttrs::is_empty")]
        data: GatewayAttrs,
    },
    ParallelGateway {
        #[serde(default, skip_serializing_if = "GatewayAttrs::is_empty")]
        data: GatewayAttrs,
    },
    InclusiveGateway {
        #[serde(default, skip_serializing_if = "GatewayAttrs::is_empty")]
        data: GatewayAttrs,
    },
    TimerEvent {
        #[serde(default, skip_serializing_if = "EventAttrs::is_empty")]
        data: EventAttrs,
    },
    MessageEvent {
        #[serde(default, skip_serializing_if = "EventAttrs::is_empty")]
        data: EventAttrs,
    },
    SignalEvent {
        #[serde(default, skip_serializing_if = "EventAttrs::is_empty")]
        data: EventAttrs,
    },
    Subprocess {
        #[serde(default, skip_serializing_if = "ContainerAttrs::is_empty")]
        data: ContainerAttrs,
    },
    Pool {
        #[serde(default, skip_serializing_if = "ContainerAttrs::is_empty")]
        data: ContainerAttrs,
    },
    Lane {
        #[serde(default, skip_serializing_if = "ContainerAttrs::is_empty")]
        data: ContainerAttrs,
    },
}

impl NodeKind {
    /// The wire name of this node type.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Start { .. } => "start",
            NodeKind::End { .. } => "end",
            NodeKind::UserTask { .. } => "userTask",
            NodeKind::ServiceTask { .. } => "serviceTask",
            NodeKind::ScriptTask { .. } => "scriptTask",
            NodeKind::ExclusiveGateway { .. } => "exclusiveGateway",
            NodeKind::ParallelGateway { .. } => "parallelGateway",
            NodeKind::InclusiveGateway { .. } => "inclusiveGateway",
            NodeKind::TimerEvent { .. } => "timerEvent",
            NodeKind::MessageEvent { .. } => "messageEvent",
            NodeKind::SignalEvent { .. } => "signalEvent",
            NodeKind::Subprocess { .. } => "subprocess",
            NodeKind::Pool { .. } => "pool",
            NodeKind::Lane { .. } => "lane",
        }
    }

    pub fn start() -> Self {
        NodeKind::Start {
            data: EventAttrs::default(),
        }
    }

    pub fn end() -> Self {
        NodeKind::End {
            data: EventAttrs::default(),
        }
    }

    pub fn user_task(data: UserTaskAttrs) -> Self {
        NodeKind::UserTask { data }
    }

    pub fn service_task(data: ServiceTaskAttrs) -> Self {
        NodeKind::ServiceTask { data }
    }

    pub fn script_task(data: ScriptTaskAttrs) -> Self {
        NodeKind::ScriptTask { data }
    }
}

/// Attributes of a task assigned to a human participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserTaskAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidate_users: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidate_groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_key: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserTaskAttrs {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Attributes of a task delegated to a backend service class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceTaskAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ServiceTaskAttrs {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Attributes of a task running an inline script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptTaskAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ScriptTaskAttrs {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Attributes shared by the gateway node types. Condition expressions are
/// opaque to the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayAttrs {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GatewayAttrs {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Attributes shared by start/end and the intermediate event node types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventAttrs {
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub variables: serde_json::Map<String, serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EventAttrs {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Attributes of the structural node types (subprocess, pool, lane).
/// Nothing here is interpreted by the editor; the map exists so designer
/// extensions survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerAttrs {
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ContainerAttrs {
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }
}
