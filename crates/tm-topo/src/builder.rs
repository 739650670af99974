//! Incremental construction of a [`TopoMap`].

use log::debug;
use rustc_hash::FxHashMap;

use tm_graph::FilteredGraph;

use crate::{Pose, TopoEdge, TopoError, TopoMap, TopoNode, TopoResult};

/// Prefix of generated node names: `WayPoint0`, `WayPoint1`, …
pub const WAYPOINT_PREFIX: &str = "WayPoint";

/// Append-only builder; call [`finish`](Self::finish) to take the map.
///
/// # Example
///
/// ```
/// use tm_topo::{Pose, TopoMapBuilder};
///
/// let mut b = TopoMapBuilder::new("lincoln", "lincoln_centre");
/// let a = b.add_node(None, Pose::default()).unwrap();
/// let c = b.add_node(None, Pose::default()).unwrap();
/// assert!(b.add_edge(&a, &c, None, None));
/// let map = b.finish();
/// assert_eq!(map.node_count(), 2);
/// assert_eq!(map.edge_count(), 2); // one directed edge per endpoint
/// ```
pub struct TopoMapBuilder {
    map:   TopoMap,
    index: FxHashMap<String, usize>,
}

impl TopoMapBuilder {
    pub fn new(map_name: &str, pointset_name: &str) -> Self {
        Self { map: TopoMap::new(map_name, pointset_name), index: FxHashMap::default() }
    }

    pub fn node_count(&self) -> usize {
        self.map.nodes.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Add a node and return its name.
    ///
    /// With `name = None` the node is called `WayPoint{k}`, `k` being the
    /// current node count (bumped past any name already taken).  An explicit
    /// name that is already in the map is rejected.
    pub fn add_node(&mut self, name: Option<&str>, pose: Pose) -> TopoResult<String> {
        let name = match name {
            Some(n) if self.contains(n) => return Err(TopoError::DuplicateName(n.to_owned())),
            Some(n) => n.to_owned(),
            None => self.next_waypoint_name(),
        };
        self.push_node(&name, pose);
        Ok(name)
    }

    /// Connect `a` and `b` with a pair of directed edges.
    ///
    /// Edge ids are `a_b` / `b_a`, or `{name}_1` / `{name}_2` when `name` is
    /// given; `action` overrides the default traversal action.  Returns
    /// `false` and leaves the map untouched if either node is unknown.  A
    /// self-loop adds only the forward edge.
    pub fn add_edge(&mut self, a: &str, b: &str, name: Option<&str>, action: Option<&str>) -> bool {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            debug!("edge {a:?} ↔ {b:?} skipped: endpoint not in map");
            return false;
        };

        let (id_ab, id_ba) = match name {
            Some(n) => (format!("{n}_1"), format!("{n}_2")),
            None => (format!("{a}_{b}"), format!("{b}_{a}")),
        };

        let mut forward = TopoEdge::new(id_ab, b, self.map.metric_map.as_str());
        let mut reverse = TopoEdge::new(id_ba, a, self.map.metric_map.as_str());
        if let Some(action) = action {
            forward.action = action.to_owned();
            reverse.action = action.to_owned();
        }

        self.map.nodes[ia].node.edges.push(forward);
        if ib != ia {
            self.map.nodes[ib].node.edges.push(reverse);
        }
        true
    }

    /// Freeze and return the map.
    pub fn finish(self) -> TopoMap {
        self.map
    }

    /// Add a node whose name is known to be free.
    fn push_node(&mut self, name: &str, pose: Pose) {
        let node = TopoNode::new(name, &self.map.metric_map, &self.map.pointset, pose);
        self.index.insert(name.to_owned(), self.map.nodes.len());
        self.map.nodes.push(node);
    }

    fn next_waypoint_name(&self) -> String {
        let mut k = self.map.nodes.len();
        loop {
            let candidate = format!("{WAYPOINT_PREFIX}{k}");
            if !self.contains(&candidate) {
                return candidate;
            }
            k += 1;
        }
    }
}

/// Build a [`TopoMap`] from an extracted graph.
///
/// Nodes are named in the graph's insertion order, so the same graph always
/// yields the same names, poses and edges.
pub fn build(graph: &FilteredGraph, map_name: &str, pointset_name: &str) -> TopoMap {
    let mut builder = TopoMapBuilder::new(map_name, pointset_name);
    let mut names: FxHashMap<&str, String> = FxHashMap::default();

    for (id, pos) in graph.nodes() {
        let name = builder.next_waypoint_name();
        builder.push_node(&name, Pose::from_planar(pos));
        names.insert(id, name);
    }

    for (id, edge) in graph.edges() {
        match (names.get(edge.start.as_str()), names.get(edge.end.as_str())) {
            (Some(a), Some(b)) => {
                builder.add_edge(a, b, None, None);
            }
            _ => debug!("edge {id:?} skipped: endpoint has no generated name"),
        }
    }

    let map = builder.finish();
    debug!(
        "built topological map {:?}: {} nodes, {} directed edges",
        map.name,
        map.node_count(),
        map.edge_count()
    );
    map
}

