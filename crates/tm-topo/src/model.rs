//! Topological map records.
//!
//! Field names and nesting follow the topological-navigation `.tmap` schema
//! consumed by the robot's navigation stack, which validates them strictly:
//! every default field is always present, even when the builder never sets
//! it.  Each record type has a constructor that fills in fresh defaults.

use tm_core::PlanarPoint;

// ── Defaults ──────────────────────────────────────────────────────────────────

/// Traversal action of every generated edge.
pub const DEFAULT_ACTION: &str = "move_base";

/// Maximum traversal velocity, m/s.
pub const DEFAULT_TOP_VEL: f64 = 0.55;

pub const DEFAULT_INFLATION_RADIUS: f64 = 0.0;

/// Just under 2π: any heading is accepted on arrival.
pub const DEFAULT_YAW_GOAL_TOLERANCE: f64 = 6.28;

pub const DEFAULT_XY_GOAL_TOLERANCE: f64 = 0.3;

/// Octagonal node footprint shared by every node, metres relative to the
/// node pose.
pub const FOOTPRINT: [Vertex; 8] = [
    Vertex { x:  0.689_999_997_616, y:  0.287_000_000_477 },
    Vertex { x:  0.287_000_000_477, y:  0.490_000_009_537 },
    Vertex { x: -0.287_000_000_477, y:  0.490_000_009_537 },
    Vertex { x: -0.689_999_997_616, y:  0.287_000_000_477 },
    Vertex { x: -0.689_999_997_616, y: -0.287_000_000_477 },
    Vertex { x: -0.287_000_000_477, y: -0.490_000_009_537 },
    Vertex { x:  0.287_000_000_477, y: -0.490_000_009_537 },
    Vertex { x:  0.689_999_997_616, y: -0.287_000_000_477 },
];

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Quaternion orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position:    Position,
    pub orientation: Orientation,
}

impl Pose {
    /// Pose at a map-local planar point, `z = 0`, identity orientation.
    pub fn from_planar(p: PlanarPoint) -> Self {
        Self {
            position:    Position { x: p.x, y: p.y, z: 0.0 },
            orientation: Orientation::IDENTITY,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

// ── Edges ─────────────────────────────────────────────────────────────────────

/// A directed, traversable connection to the node named `node`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopoEdge {
    pub edge_id:                    String,
    /// Name of the target node.
    pub node:                       String,
    pub action:                     String,
    pub top_vel:                    f64,
    pub map_2d:                     String,
    pub inflation_radius:           f64,
    pub recovery_behaviours_config: String,
}

impl TopoEdge {
    pub fn new(edge_id: impl Into<String>, node: impl Into<String>, map_2d: impl Into<String>) -> Self {
        Self {
            edge_id:                    edge_id.into(),
            node:                       node.into(),
            action:                     DEFAULT_ACTION.to_owned(),
            top_vel:                    DEFAULT_TOP_VEL,
            map_2d:                     map_2d.into(),
            inflation_radius:           DEFAULT_INFLATION_RADIUS,
            recovery_behaviours_config: String::new(),
        }
    }
}

// ── Nodes ─────────────────────────────────────────────────────────────────────

/// Identity block stored beside each node body.  `published_at` and
/// `timestamp` are filled in by the map server on upload and are always
/// written empty.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeMeta {
    pub node:         String,
    pub map:          String,
    pub pointset:     String,
    pub published_at: String,
    pub timestamp:    String,
}

/// A waypoint with its footprint, tolerances and outgoing edges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeBody {
    pub map:                String,
    pub name:               String,
    pub pointset:           String,
    pub pose:               Pose,
    pub yaw_goal_tolerance: f64,
    pub xy_goal_tolerance:  f64,
    pub verts:              Vec<Vertex>,
    pub edges:              Vec<TopoEdge>,
    pub localise_by_topic:  String,
}

/// One record of the map: `{ meta: {..}, node: {..} }`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopoNode {
    pub meta: NodeMeta,
    pub node: NodeBody,
}

impl TopoNode {
    pub fn new(name: &str, map: &str, pointset: &str, pose: Pose) -> Self {
        Self {
            meta: NodeMeta {
                node:     name.to_owned(),
                map:      map.to_owned(),
                pointset: pointset.to_owned(),
                ..NodeMeta::default()
            },
            node: NodeBody {
                map:                map.to_owned(),
                name:               name.to_owned(),
                pointset:           pointset.to_owned(),
                pose,
                yaw_goal_tolerance: DEFAULT_YAW_GOAL_TOLERANCE,
                xy_goal_tolerance:  DEFAULT_XY_GOAL_TOLERANCE,
                verts:              FOOTPRINT.to_vec(),
                edges:              Vec::new(),
                localise_by_topic:  String::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.node.name
    }

    pub fn edges(&self) -> &[TopoEdge] {
        &self.node.edges
    }

    /// Outgoing edges whose target is `target`.
    pub fn edges_to<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a TopoEdge> + 'a {
        self.node.edges.iter().filter(move |e| e.node == target)
    }
}

// ── Map ───────────────────────────────────────────────────────────────────────

/// A named, ordered collection of [`TopoNode`]s.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopoMap {
    /// Topological map name; equal to the pointset name.
    pub name:       String,
    pub metric_map: String,
    pub pointset:   String,
    pub nodes:      Vec<TopoNode>,
}

impl TopoMap {
    pub fn new(map_name: &str, pointset_name: &str) -> Self {
        Self {
            name:       pointset_name.to_owned(),
            metric_map: map_name.to_owned(),
            pointset:   pointset_name.to_owned(),
            nodes:      Vec::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.node.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, name: &str) -> Option<&TopoNode> {
        self.nodes.iter().find(|n| n.node.name == name)
    }
}
