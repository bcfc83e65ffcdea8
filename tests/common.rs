//! Common test utilities for building documents and editing sessions.
use flowdoc::prelude::*;

/// Creates a start node at the given position.
#[allow(dead_code)]
pub fn start_node(id: &str, x: f64, y: f64) -> Node {
    Node::new(id, NodeKind::start(), "Start").at(Position::new(x, y))
}

/// Creates an end node at the given position.
#[allow(dead_code)]
pub fn end_node(id: &str, x: f64, y: f64) -> Node {
    Node::new(id, NodeKind::end(), "End").at(Position::new(x, y))
}

/// Creates a user task assigned to `assignee`.
#[allow(dead_code)]
pub fn user_task(id: &str, name: &str, assignee: &str) -> Node {
    Node::new(
        id,
        NodeKind::user_task(UserTaskAttrs {
            assignee: Some(assignee.to_string()),
            ..Default::default()
        }),
        name,
    )
}

/// Creates a session over an empty draft document.
#[allow(dead_code)]
pub fn empty_session() -> Designer {
    Designer::with_document(WorkflowDocument::skeleton("Test workflow"))
}

/// Creates a session holding a small linear flow:
/// `start -> review -> end`, with two edges.
#[allow(dead_code)]
pub fn linear_session() -> Designer {
    let mut designer = empty_session();
    designer
        .add_node(start_node("n-start", 0.0, 0.0))
        .expect("add start");
    designer
        .add_node(user_task("n-review", "Review", "alice").at(Position::new(200.0, 0.0)))
        .expect("add review");
    designer
        .add_node(end_node("n-end", 400.0, 0.0))
        .expect("add end");
    designer
        .add_edge(Edge::new("e-1", "n-start", "n-review"))
        .expect("add e-1");
    designer
        .add_edge(Edge::new("e-2", "n-review", "n-end"))
        .expect("add e-2");
    designer
}

/// A WorkflowDefinition JSON document in the backend's wire shape.
#[allow(dead_code)]
pub fn wire_document() -> &'static str {
    r##"{
        "id": "wf-7031",
        "name": "Expense approval",
        "description": "Approve or reject submitted expenses",
        "version": "2.3.0",
        "category": "finance",
        "status": "ACTIVE",
        "nodes": [
            {
                "id": "n1",
                "type": "start",
                "name": "Start",
                "position": { "x": 40.0, "y": 120.0 },
                "size": { "width": 48.0, "height": 48.0 }
            },
            {
                "id": "n2",
                "type": "userTask",
                "name": "Approve expense",
                "position": { "x": 200.0, "y": 100.0 },
                "size": { "width": 120.0, "height": 60.0 },
                "data": {
                    "assignee": "carol",
                    "candidateGroups": ["finance"],
                    "priority": 2,
                    "customField": "kept-verbatim"
                },
                "style": { "fill": "#e6f7ff", "stroke": "#1890ff" }
            },
            {
                "id": "n3",
                "type": "exclusiveGateway",
                "name": "Approved?",
                "position": { "x": 400.0, "y": 110.0 },
                "size": { "width": 50.0, "height": 50.0 },
                "data": { "conditions": ["${approved}", "${!approved}"] }
            },
            {
                "id": "n4",
                "type": "end",
                "name": "End",
                "position": { "x": 560.0, "y": 120.0 },
                "size": { "width": 48.0, "height": 48.0 }
            }
        ],
        "edges": [
            { "id": "e1", "source": "n1", "target": "n2" },
            {
                "id": "e2",
                "source": "n2",
                "target": "n3",
                "label": "submitted",
                "condition": "${amount > 0}"
            },
            { "id": "e3", "source": "n3", "target": "n4", "label": "approved" }
        ],
        "variables": [
            {
                "name": "amount",
                "type": "number",
                "defaultValue": 0,
                "required": true,
                "description": "Expense amount in cents"
            },
            { "name": "approved", "type": "boolean", "required": false }
        ],
        "properties": {
            "executionListeners": [
                { "event": "start", "class": "com.flowmaster.listeners.AuditListener" }
            ],
            "customExtension": { "enabled": true }
        },
        "createdBy": "carol",
        "createdAt": "2025-11-02T09:14:00Z",
        "updatedAt": "2026-01-15T16:40:00Z"
    }"##
}
