//! Rectangular lat/lon region used to select which part of the dataset is
//! converted.

use crate::{CoreError, CoreResult, GeographicPoint};

/// Two geographic corners bounding the area of interest.
///
/// `upper` holds the maximum latitude and the maximum (east-most) longitude,
/// `lower` the minimum of each.  For a region west of Greenwich the upper
/// longitude is the one *closer to zero*, e.g. `-0.524` vs `-0.561`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRegion {
    pub upper: GeographicPoint,
    pub lower: GeographicPoint,
}

impl BoundingRegion {
    /// Central Lincoln: 53°14'16.8"N 0°31'27.6"W to 53°13'32.8"N 0°33'40.5"W.
    pub const LINCOLN: BoundingRegion = BoundingRegion {
        upper: GeographicPoint { lat: 53.237_989, lon: -0.524_320 },
        lower: GeographicPoint { lat: 53.225_782, lon: -0.561_247 },
    };

    pub fn new(upper: GeographicPoint, lower: GeographicPoint) -> Self {
        Self { upper, lower }
    }

    /// Inclusive on all four edges.
    #[inline]
    pub fn contains(&self, p: GeographicPoint) -> bool {
        self.lower.lat <= p.lat
            && p.lat <= self.upper.lat
            && self.lower.lon <= p.lon
            && p.lon <= self.upper.lon
    }

    /// Reject corners that are swapped or not finite.  A swapped region would
    /// silently exclude every point.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.upper.is_finite() || !self.lower.is_finite() {
            return Err(CoreError::Config(format!(
                "bounding region has non-finite corner: upper {} lower {}",
                self.upper, self.lower
            )));
        }
        if self.lower.lat > self.upper.lat {
            return Err(CoreError::Config(format!(
                "bounding region lower latitude {} exceeds upper latitude {}",
                self.lower.lat, self.upper.lat
            )));
        }
        if self.lower.lon > self.upper.lon {
            return Err(CoreError::Config(format!(
                "bounding region lower longitude {} exceeds upper longitude {}",
                self.lower.lon, self.upper.lon
            )));
        }
        Ok(())
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> GeographicPoint {
        GeographicPoint::new(
            (self.upper.lat + self.lower.lat) * 0.5,
            (self.upper.lon + self.lower.lon) * 0.5,
        )
    }
}

impl Default for BoundingRegion {
    fn default() -> Self {
        Self::LINCOLN
    }
}
