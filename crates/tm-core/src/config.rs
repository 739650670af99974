//! Converter configuration.
//!
//! Every constant the pipeline depends on is a named field here so that an
//! application can load overrides (e.g. from JSON with the `serde` feature)
//! instead of patching code.  [`MapConfig::default`] reproduces the Lincoln
//! city-centre map built from the Ordnance Survey Open Roads `SK` tile.

use crate::{BoundingRegion, CoreError, CoreResult, Ellipsoid, GeographicPoint};

// ── ProjectionParams ──────────────────────────────────────────────────────────

/// Parameters of a transverse Mercator projection.
///
/// Mirrors the `tmerc` operator parameters of `geodesy` (and PROJ): origin latitude/longitude in
/// degrees, central scale factor, and false easting/northing in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionParams {
    pub ellipsoid: Ellipsoid,
    pub lat_0:     f64,
    pub lon_0:     f64,
    pub k_0:       f64,
    pub x_0:       f64,
    pub y_0:       f64,
}

impl ProjectionParams {
    /// Ordnance Survey National Grid (EPSG:27700) on the OSGB36 datum.
    pub const OSGB36_NATIONAL_GRID: ProjectionParams = ProjectionParams {
        ellipsoid: Ellipsoid::AIRY_1830,
        lat_0:     49.0,
        lon_0:     -2.0,
        k_0:       0.999_601_271_7,
        x_0:       400_000.0,
        y_0:       -100_000.0,
    };

    /// Universal Transverse Mercator zone `zone` (1–60).
    ///
    /// Southern-hemisphere zones carry the conventional 10 000 km false
    /// northing.
    pub fn utm(zone: u8, north: bool, ellipsoid: Ellipsoid) -> CoreResult<Self> {
        if !(1..=60).contains(&zone) {
            return Err(CoreError::Config(format!("UTM zone {zone} is outside 1..=60")));
        }
        Ok(Self {
            ellipsoid,
            lat_0: 0.0,
            lon_0: -183.0 + 6.0 * f64::from(zone),
            k_0:   0.9996,
            x_0:   500_000.0,
            y_0:   if north { 0.0 } else { 10_000_000.0 },
        })
    }

    /// UTM zone 30 north on WGS84 — covers Great Britain west of 0°.
    pub fn utm_30n() -> Self {
        Self {
            ellipsoid: Ellipsoid::WGS84,
            lat_0:     0.0,
            lon_0:     -3.0,
            k_0:       0.9996,
            x_0:       500_000.0,
            y_0:       0.0,
        }
    }

    /// `geodesy` operator definition, e.g.
    /// `tmerc lat_0=49 lon_0=-2 k_0=0.9996012717 x_0=400000 y_0=-100000 ellps=airy`.
    pub fn definition(&self) -> String {
        format!(
            "tmerc lat_0={} lon_0={} k_0={} x_0={} y_0={} ellps={}",
            self.lat_0,
            self.lon_0,
            self.k_0,
            self.x_0,
            self.y_0,
            self.ellipsoid.definition()
        )
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.ellipsoid.is_valid() {
            return Err(CoreError::Config(format!("invalid ellipsoid {:?}", self.ellipsoid)));
        }
        if !(self.lat_0.is_finite() && self.lat_0.abs() < 90.0) {
            return Err(CoreError::Config(format!("lat_0 {} must lie strictly within ±90°", self.lat_0)));
        }
        if !(self.lon_0.is_finite() && self.lon_0.abs() <= 180.0) {
            return Err(CoreError::Config(format!("lon_0 {} must lie within ±180°", self.lon_0)));
        }
        if !(self.k_0.is_finite() && self.k_0 > 0.0) {
            return Err(CoreError::Config(format!("scale factor k_0 {} must be positive", self.k_0)));
        }
        if !(self.x_0.is_finite() && self.y_0.is_finite()) {
            return Err(CoreError::Config("false easting/northing must be finite".into()));
        }
        Ok(())
    }
}

// ── MapConfig ─────────────────────────────────────────────────────────────────

/// Top-level converter configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    /// Projection of the raw survey-grid positions.
    pub source_grid: ProjectionParams,

    /// Planar projection of the navigation frame.
    pub target: ProjectionParams,

    /// Only nodes inside this region are kept.
    pub region: BoundingRegion,

    /// Geographic point that becomes the local origin `(0, 0)`.
    pub center: GeographicPoint,

    /// Metric map name written into every node and edge (`map`, `map_2d`).
    pub map_name: String,

    /// Pointset (topological map) name.
    pub pointset_name: String,
}

impl MapConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.source_grid.validate()?;
        self.target.validate()?;
        self.region.validate()?;
        if !self.center.is_finite() {
            return Err(CoreError::Config(format!("map centre {} is not finite", self.center)));
        }
        if self.map_name.is_empty() || self.pointset_name.is_empty() {
            return Err(CoreError::Config("map and pointset names must be non-empty".into()));
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            source_grid:   ProjectionParams::OSGB36_NATIONAL_GRID,
            target:        ProjectionParams::utm_30n(),
            region:        BoundingRegion::LINCOLN,
            center:        GeographicPoint::new(53.229_511, -0.540_325),
            map_name:      "lincoln".to_owned(),
            pointset_name: "lincoln_centre".to_owned(),
        }
    }
}
