//! Reference ellipsoids.

/// An ellipsoid of revolution described by its semi-major axis and inverse
/// flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    semimajor:      f64,
    inv_flattening: f64,
}

impl Ellipsoid {
    /// Airy 1830, the ellipsoid of the OSGB36 datum.
    pub const AIRY_1830: Self = Ellipsoid {
        semimajor:      6_377_563.396,
        inv_flattening: 299.324_964_6,
    };

    pub const WGS84: Self = Ellipsoid {
        semimajor:      6_378_137.0,
        inv_flattening: 298.257_223_563,
    };

    pub const GRS80: Self = Ellipsoid {
        semimajor:      6_378_137.0,
        inv_flattening: 298.257_222_101,
    };

    pub const fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Self { semimajor, inv_flattening }
    }

    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// The `ellps=` value of a `geodesy` operator definition: the builtin
    /// name for the three known ellipsoids, `a,rf` otherwise.
    pub fn definition(&self) -> String {
        if *self == Self::AIRY_1830 {
            "airy".to_owned()
        } else if *self == Self::WGS84 {
            "WGS84".to_owned()
        } else if *self == Self::GRS80 {
            "GRS80".to_owned()
        } else {
            format!("{},{}", self.semimajor, self.inv_flattening)
        }
    }

    /// True when both parameters are finite and describe an oblate ellipsoid.
    pub fn is_valid(&self) -> bool {
        self.semimajor.is_finite()
            && self.semimajor > 0.0
            && self.inv_flattening.is_finite()
            && self.inv_flattening > 1.0
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
