//! `tm-topo` — topological navigation map model and builder.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`model`]   | `TopoMap`, `TopoNode`, `NodeBody`, `TopoEdge`, footprint defaults |
//! | [`builder`] | `TopoMapBuilder`, `build`                                     |
//! | [`error`]   | `TopoError`, `TopoResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the model types.      |
//!
//! # Shape of a built map
//!
//! ```text
//! TopoMap { name, metric_map, pointset,
//!     nodes: [ TopoNode { meta: { node: "WayPoint0", map, pointset, published_at, timestamp },
//!                         node: { name: "WayPoint0", pose, verts[8], …,
//!                                 edges: [ TopoEdge { edge_id: "WayPoint0_WayPoint1",
//!                                                     node: "WayPoint1", … } ] } },
//!              TopoNode { meta: { node: "WayPoint1", … },
//!                         node: { name: "WayPoint1", …,
//!                                 edges: [ TopoEdge { edge_id: "WayPoint1_WayPoint0",
//!                                                     node: "WayPoint0", … } ] } } ] }
//! ```
//!
//! Each undirected road becomes a pair of directed edges, one stored on each
//! endpoint.

pub mod builder;
pub mod error;
pub mod model;


pub use builder::{TopoMapBuilder, build};
pub use error::{TopoError, TopoResult};
pub use model::{NodeBody, NodeMeta, Orientation, Pose, Position, TopoEdge, TopoMap, TopoNode, Vertex};
