//! Region filtering and conversion of raw records into a [`FilteredGraph`].
//!
//! # Algorithm
//!
//! 1. Every [`RawNode`] is unprojected to geographic coordinates.  Nodes
//!    inside the [`BoundingRegion`] are converted to the local frame and kept
//!    under their source id; the rest are dropped.
//! 2. Every [`RawEdge`] whose start *and* end survived step 1 has its
//!    polyline converted to the local frame and is kept.  An edge with one
//!    endpoint outside the region is dropped entirely, never clipped.
//!
//! Endpoints that name no raw node at all are counted separately as
//! dangling references and logged at `debug` level; they are not errors.
//! Records whose positions the projection cannot evaluate are dropped and
//! counted as `unprojectable`.

use std::collections::HashSet;

use log::{debug, info, warn};

use tm_core::BoundingRegion;
use tm_proj::CoordinateTransformer;

use crate::{FilteredEdge, FilteredGraph, RawEdge, RawNode, RawRecords};

/// Counters describing one extraction pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub nodes_seen:      usize,
    pub nodes_kept:      usize,
    pub duplicate_nodes: usize,
    pub edges_seen:      usize,
    pub edges_kept:      usize,
    /// Edge endpoints referencing an id absent from the raw node set.
    pub dangling_refs:   usize,
    /// Nodes and edges dropped because a position could not be projected.
    pub unprojectable:   usize,
}

/// Result of [`extract`]: the filtered graph plus its counters.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub graph: FilteredGraph,
    pub stats: ExtractStats,
}

impl Extraction {
    /// Run [`extract`] over a loaded record set.
    pub fn from_records(
        records:     &RawRecords,
        transformer: &CoordinateTransformer,
        region:      &BoundingRegion,
    ) -> Self {
        extract(&records.nodes, &records.edges, transformer, region)
    }
}

/// Filter `nodes` and `edges` to `region` and convert them to local
/// coordinates.
///
/// Infallible: all format errors are caught when the raw records are built.
pub fn extract(
    nodes:       &[RawNode],
    edges:       &[RawEdge],
    transformer: &CoordinateTransformer,
    region:      &BoundingRegion,
) -> Extraction {
    let mut graph = FilteredGraph::new();
    let mut stats = ExtractStats { nodes_seen: nodes.len(), edges_seen: edges.len(), ..Default::default() };

    // ── Phase 1: nodes ────────────────────────────────────────────────────
    for node in nodes {
        let Some(geo) = transformer.grid_to_geographic(node.position) else {
            debug!("road node {:?} at {} cannot be unprojected", node.id, node.position);
            stats.unprojectable += 1;
            continue;
        };
        if !region.contains(geo) {
            continue;
        }
        let Some(global) = transformer.geographic_to_planar_global(geo) else {
            debug!("road node {:?} at {geo} cannot be projected", node.id);
            stats.unprojectable += 1;
            continue;
        };
        let local = transformer.planar_global_to_local(global);
        if !graph.insert_node(node.id.as_str(), local) {
            warn!("duplicate road node id {:?}; keeping the later position", node.id);
            stats.duplicate_nodes += 1;
        }
    }
    stats.nodes_kept = graph.node_count();

    // ── Phase 2: edges ────────────────────────────────────────────────────
    let raw_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    for edge in edges {
        for endpoint in [&edge.start, &edge.end] {
            if !raw_ids.contains(endpoint.as_str()) {
                debug!("road link {:?} references unknown node {:?}", edge.id, endpoint);
                stats.dangling_refs += 1;
            }
        }

        if !graph.contains_node(&edge.start) || !graph.contains_node(&edge.end) {
            continue;
        }

        let Some(points) = edge
            .points
            .iter()
            .map(|&p| transformer.grid_to_local(p))
            .collect::<Option<Vec<_>>>()
        else {
            debug!("road link {:?} has a point that cannot be projected", edge.id);
            stats.unprojectable += 1;
            continue;
        };

        graph.insert_edge(
            edge.id.as_str(),
            FilteredEdge { start: edge.start.clone(), end: edge.end.clone(), points },
        );
    }
    stats.edges_kept = graph.edge_count();

    info!(
        "kept {}/{} nodes and {}/{} edges inside region",
        stats.nodes_kept, stats.nodes_seen, stats.edges_kept, stats.edges_seen
    );

    Extraction { graph, stats }
}
