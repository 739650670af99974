//! The four-stage coordinate pipeline used by the graph extractor.

use log::debug;

use tm_core::{GeographicPoint, GridPoint, MapConfig, PlanarPoint, ProjectionParams};

use crate::{GeodesyProjection, ProjError, ProjResult, Projection};

/// Converts survey-grid positions into the map-local planar frame.
///
/// Holds the source-grid and target projections plus the map centre,
/// projected once at construction.  All conversion methods take `&self` and
/// are pure; a stage returns `None` only when `geodesy` cannot evaluate it.
#[derive(Debug)]
pub struct CoordinateTransformer {
    source: GeodesyProjection<GridPoint>,
    target: GeodesyProjection<PlanarPoint>,
    center: PlanarPoint,
}

impl CoordinateTransformer {
    /// Build from explicit projection parameters and a geographic map centre.
    pub fn new(
        source_grid: ProjectionParams,
        target:      ProjectionParams,
        center:      GeographicPoint,
    ) -> ProjResult<Self> {
        let source = GeodesyProjection::from_params(&source_grid)?;
        let target = GeodesyProjection::<PlanarPoint>::from_params(&target)?;

        let center_global = target.project(&center).ok_or(ProjError::NonFiniteCenter(center))?;
        debug!("source grid: {}", source.definition());
        debug!("target: {}", target.definition());
        debug!("map centre {center} → planar {center_global}");

        Ok(Self { source, target, center: center_global })
    }

    /// Build from the projection and centre fields of a [`MapConfig`].
    pub fn from_config(config: &MapConfig) -> ProjResult<Self> {
        Self::new(config.source_grid, config.target, config.center)
    }

    /// Planar (global) coordinates of the map centre — the local origin.
    pub fn center(&self) -> PlanarPoint {
        self.center
    }

    // ── Pipeline stages ───────────────────────────────────────────────────

    /// Inverse source-grid projection.
    #[inline]
    pub fn grid_to_geographic(&self, p: GridPoint) -> Option<GeographicPoint> {
        self.source.unproject(&p)
    }

    /// Forward target projection.
    #[inline]
    pub fn geographic_to_planar_global(&self, p: GeographicPoint) -> Option<PlanarPoint> {
        self.target.project(&p)
    }

    /// Translate so the map centre is the origin.
    #[inline]
    pub fn planar_global_to_local(&self, p: PlanarPoint) -> PlanarPoint {
        p.offset_from(self.center)
    }

    /// All three stages in sequence.
    #[inline]
    pub fn grid_to_local(&self, p: GridPoint) -> Option<PlanarPoint> {
        let geo = self.grid_to_geographic(p)?;
        self.geographic_to_planar_global(geo).map(|g| self.planar_global_to_local(g))
    }

    /// Geographic coordinates of a map-local point, for reporting.
    pub fn local_to_geographic(&self, p: PlanarPoint) -> Option<GeographicPoint> {
        self.target.unproject(&p.offset_by(self.center))
    }
}
