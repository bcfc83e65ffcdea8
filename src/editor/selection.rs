use ahash::AHashSet;

/// Tracks which nodes or edges are currently selected.
///
/// Selection is whole-set exclusive: selecting nodes clears any edge
/// selection and vice versa, even when the new set is empty. There is no
/// mixed mode.
///
/// Ids are not validated against the document. A selection may reference an
/// element that has since been removed; consumers treat that as a selection
/// of nothing visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    nodes: AHashSet<String>,
    edges: AHashSet<String>,
}

impl Selection {
    /// Replaces the node selection and clears the edge selection
    /// unconditionally.
    pub fn select_nodes<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes = ids.into_iter().map(Into::into).collect();
        self.edges.clear();
        tracing::trace!(selected = self.nodes.len(), "node selection replaced");
    }

    /// Replaces the edge selection and clears the node selection
    /// unconditionally.
    pub fn select_edges<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edges = ids.into_iter().map(Into::into).collect();
        self.nodes.clear();
        tracing::trace!(selected = self.edges.len(), "edge selection replaced");
    }

    /// Empties both sets.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    pub fn nodes(&self) -> &AHashSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &AHashSet<String> {
        &self.edges
    }

    pub fn is_node_selected(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn is_edge_selected(&self, id: &str) -> bool {
        self.edges.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
