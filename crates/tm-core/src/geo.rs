//! Coordinate types for the three frames the converter moves between.
//!
//! All coordinates are `f64`.  Survey-grid inputs are given to the millimetre
//! and the final map frame is expected to be accurate to a few centimetres,
//! which rules out single precision once absolute UTM northings (~6e6 m) are
//! involved.

use std::fmt;

/// A geographic coordinate in decimal degrees.
///
/// The datum is whatever the producing projection was defined on; no datum
/// shift is ever applied between frames.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeographicPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[inline]
    pub fn lat_rad(self) -> f64 {
        self.lat.to_radians()
    }

    #[inline]
    pub fn lon_rad(self) -> f64 {
        self.lon.to_radians()
    }

    /// Build from radians.
    #[inline]
    pub fn from_radians(lat: f64, lon: f64) -> Self {
        Self { lat: lat.to_degrees(), lon: lon.to_degrees() }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl fmt::Display for GeographicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Cartesian frames ──────────────────────────────────────────────────────────

/// A two-dimensional point measured in metres on some projected plane.
///
/// Implemented by [`GridPoint`] and [`PlanarPoint`] so a single projection
/// implementation can produce either frame.
pub trait Cartesian: Copy {
    fn new(x: f64, y: f64) -> Self;
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// Easting/northing in the source survey-grid projection.  Raw input unit.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Cartesian for GridPoint {
    #[inline]
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:.3} N{:.3}", self.x, self.y)
    }
}

/// A point in the target planar projection.
///
/// Either *global* (absolute projected coordinates) or *local* (relative to
/// the configured map centre).  The type does not distinguish the two; the
/// producing function's name does.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub const ORIGIN: PlanarPoint = PlanarPoint { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate so that `origin` becomes `(0, 0)`.
    #[inline]
    pub fn offset_from(self, origin: PlanarPoint) -> PlanarPoint {
        PlanarPoint { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// Inverse of [`offset_from`](Self::offset_from).
    #[inline]
    pub fn offset_by(self, origin: PlanarPoint) -> PlanarPoint {
        PlanarPoint { x: self.x + origin.x, y: self.y + origin.y }
    }

    /// Euclidean distance in metres.
    pub fn distance(self, other: PlanarPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Cartesian for PlanarPoint {
    #[inline]
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
