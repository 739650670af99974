//! The region-filtered graph handed to the topology builder.
//!
//! # Layout
//!
//! Nodes and edges are stored in insertion order (`Vec`) with an
//! `FxHashMap` from source id to slot, so iteration follows the source
//! document and is identical on every run.  Re-inserting an existing id
//! replaces the value in its original slot.

use rustc_hash::FxHashMap;

use tm_core::PlanarPoint;

/// An edge whose endpoints are both present in the owning graph.
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredEdge {
    pub start:  String,
    pub end:    String,
    /// Polyline in local planar coordinates.
    pub points: Vec<PlanarPoint>,
}

/// Node id → local position and edge id → [`FilteredEdge`].
///
/// Every edge's `start` and `end` are keys of the node map; edges are only
/// admitted through [`insert_edge`](Self::insert_edge), which enforces this.
#[derive(Clone, Debug, Default)]
pub struct FilteredGraph {
    nodes:      Vec<(String, PlanarPoint)>,
    node_index: FxHashMap<String, usize>,
    edges:      Vec<(String, FilteredEdge)>,
    edge_index: FxHashMap<String, usize>,
}

impl FilteredGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert or replace a node.  Returns `true` if the id was new.
    pub fn insert_node(&mut self, id: impl Into<String>, pos: PlanarPoint) -> bool {
        let id = id.into();
        match self.node_index.get(&id) {
            Some(&slot) => {
                self.nodes[slot].1 = pos;
                false
            }
            None => {
                self.node_index.insert(id.clone(), self.nodes.len());
                self.nodes.push((id, pos));
                true
            }
        }
    }

    /// Insert or replace an edge.
    ///
    /// Refused (returns `false`, graph unchanged) unless both endpoints are
    /// already nodes of this graph.
    pub fn insert_edge(&mut self, id: impl Into<String>, edge: FilteredEdge) -> bool {
        if !self.contains_node(&edge.start) || !self.contains_node(&edge.end) {
            return false;
        }
        let id = id.into();
        match self.edge_index.get(&id) {
            Some(&slot) => self.edges[slot].1 = edge,
            None => {
                self.edge_index.insert(id.clone(), self.edges.len());
                self.edges.push((id, edge));
            }
        }
        true
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<PlanarPoint> {
        self.node_index.get(id).map(|&slot| self.nodes[slot].1)
    }

    pub fn edge(&self, id: &str) -> Option<&FilteredEdge> {
        self.edge_index.get(id).map(|&slot| &self.edges[slot].1)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, PlanarPoint)> + '_ {
        self.nodes.iter().map(|(id, p)| (id.as_str(), *p))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &FilteredEdge)> + '_ {
        self.edges.iter().map(|(id, e)| (id.as_str(), e))
    }
}
