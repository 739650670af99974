//! `tm-proj` — cartographic projections and the coordinate pipeline.
//!
//! # Crate layout
//!
//! | Module                 | Contents                                                     |
//! |------------------------|--------------------------------------------------------------|
//! | [`projection`]         | `Projection` trait                                           |
//! | [`geodesy_projection`] | `GeodesyProjection`, a compiled `geodesy` operator           |
//! | [`transformer`]        | `CoordinateTransformer` — grid → geographic → planar → local |
//! | [`error`]              | `ProjError`, `ProjResult<T>`                                 |
//!
//! # Frames
//!
//! ```text
//! GridPoint ──unproject(source)──▶ GeographicPoint ──project(target)──▶ PlanarPoint (global)
//!                                                                         │ − centre
//!                                                                         ▼
//!                                                                   PlanarPoint (local)
//! ```
//!
//! No datum transformation is applied between the source and target
//! projections: geographic coordinates recovered from the survey grid are
//! fed to the target projection unchanged.

pub mod error;
pub mod geodesy_projection;
pub mod projection;
pub mod transformer;


pub use error::{ProjError, ProjResult};
pub use geodesy_projection::GeodesyProjection;
pub use projection::Projection;
pub use transformer::CoordinateTransformer;
