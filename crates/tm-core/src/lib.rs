//! `tm-core` — foundational types for the road-network → topological-map
//! converter.
//!
//! This crate is a dependency of every other `tm-*` crate.  It has no `tm-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`geo`]         | `GeographicPoint`, `GridPoint`, `PlanarPoint`, `Cartesian` |
//! | [`ellipsoid`]   | `Ellipsoid` (Airy 1830, WGS84, GRS80)                     |
//! | [`region`]      | `BoundingRegion` — the lat/lon inclusion filter           |
//! | [`config`]      | `ProjectionParams`, `MapConfig`                           |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod ellipsoid;
pub mod error;
pub mod geo;
pub mod region;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MapConfig, ProjectionParams};
pub use ellipsoid::Ellipsoid;
pub use error::{CoreError, CoreResult};
pub use geo::{Cartesian, GeographicPoint, GridPoint, PlanarPoint};
pub use region::BoundingRegion;
