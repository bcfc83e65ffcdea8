use crate::document::{Edge, Node, WorkflowDocument};
use ahash::AHashMap;
use uuid::Uuid;

/// How far a pasted element lands from its original, in document
/// coordinates.
pub const PASTE_OFFSET: (f64, f64) = (20.0, 20.0);

/// Holds at most one copied subgraph; each copy overwrites the previous one.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    contents: Option<ClipboardSnapshot>,
}

/// A copied set of nodes and edges, cloned out of the source document at
/// copy time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Clipboard {
    /// Snapshots the referenced nodes and exactly the explicitly listed
    /// edges, independent of whether their endpoints are among the copied
    /// nodes. Ids that resolve to nothing are skipped. Reconciliation of
    /// cross-boundary edges happens at paste time.
    pub fn copy(&mut self, document: &WorkflowDocument, node_ids: &[&str], edge_ids: &[&str]) {
        let nodes: Vec<Node> = node_ids
            .iter()
            .filter_map(|id| document.find_node(id))
            .cloned()
            .collect();
        let edges: Vec<Edge> = edge_ids
            .iter()
            .filter_map(|id| document.find_edge(id))
            .cloned()
            .collect();
        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "copied subgraph");
        self.contents = Some(ClipboardSnapshot { nodes, edges });
    }

    pub fn clear(&mut self) {
        self.contents = None;
    }

    pub fn is_empty(&self) -> bool {
        self.contents
            .as_ref()
            .is_none_or(|c| c.nodes.is_empty() && c.edges.is_empty())
    }

    pub fn contents(&self) -> Option<&ClipboardSnapshot> {
        self.contents.as_ref()
    }

    /// Produces paste-ready clones of the snapshot: fresh ids for every
    /// element, node positions shifted by [`PASTE_OFFSET`], and edge
    /// endpoints remapped onto the new node ids.
    ///
    /// Only edges with both endpoints inside the copied node set survive;
    /// an edge into the surrounding graph would otherwise silently duplicate
    /// a connection onto an unrelated element.
    pub(crate) fn remapped_for_paste(&self) -> Option<(Vec<Node>, Vec<Edge>)> {
        let snapshot = self.contents.as_ref()?;
        if snapshot.nodes.is_empty() && snapshot.edges.is_empty() {
            return None;
        }

        let id_map: AHashMap<&str, String> = snapshot
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), Uuid::new_v4().to_string()))
            .collect();

        let nodes = snapshot
            .nodes
            .iter()
            .map(|node| {
                let mut pasted = node.clone();
                pasted.id = id_map[node.id.as_str()].clone();
                pasted.position = node.position.translated(PASTE_OFFSET.0, PASTE_OFFSET.1);
                pasted
            })
            .collect();

        let edges = snapshot
            .edges
            .iter()
            .filter_map(|edge| {
                let source = id_map.get(edge.source.as_str())?;
                let target = id_map.get(edge.target.as_str())?;
                let mut pasted = edge.clone();
                pasted.id = Uuid::new_v4().to_string();
                pasted.source = source.clone();
                pasted.target = target.clone();
                Some(pasted)
            })
            .collect();

        Some((nodes, edges))
    }
}
