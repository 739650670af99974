//! Projections evaluated by the `geodesy` crate.
//!
//! A [`GeodesyProjection`] owns a minimal `geodesy` context holding one
//! compiled operator, built from a PROJ-style definition such as
//! `tmerc lat_0=49 lon_0=-2 k_0=0.9996012717 x_0=400000 y_0=-100000 ellps=airy`.
//! [`ProjectionParams::definition`] renders those strings.

use std::fmt;
use std::marker::PhantomData;

use geodesy::prelude::*;

use tm_core::{Cartesian, GeographicPoint, ProjectionParams};

use crate::{ProjError, ProjResult, Projection};

/// A geographic ↔ planar operator producing points of type `Out`
/// ([`tm_core::GridPoint`] or [`tm_core::PlanarPoint`]).
pub struct GeodesyProjection<Out> {
    definition: String,
    context:    Minimal,
    op:         OpHandle,
    phantom:    PhantomData<Out>,
}

impl<Out> GeodesyProjection<Out> {
    /// Compile `definition` into a fresh context.
    pub fn new(definition: &str) -> ProjResult<Self> {
        let mut context = Minimal::new();
        let op = context.op(definition).map_err(|e| ProjError::Definition {
            definition: definition.to_owned(),
            message:    e.to_string(),
        })?;
        Ok(Self { definition: definition.to_owned(), context, op, phantom: PhantomData })
    }

    /// Validate `params` and compile their `tmerc` definition.
    pub fn from_params(params: &ProjectionParams) -> ProjResult<Self> {
        params.validate()?;
        Self::new(&params.definition())
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

impl<Out> fmt::Debug for GeodesyProjection<Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeodesyProjection")
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

impl<Out: Cartesian> Projection for GeodesyProjection<Out> {
    type InPoint  = GeographicPoint;
    type OutPoint = Out;

    fn project(&self, input: &GeographicPoint) -> Option<Out> {
        let mut data = [Coor2D::geo(input.lat, input.lon)];
        self.context.apply(self.op, Fwd, &mut data).ok()?;

        let [x, y] = data[0].0;
        (x.is_finite() && y.is_finite()).then(|| Out::new(x, y))
    }

    fn unproject(&self, input: &Out) -> Option<GeographicPoint> {
        let mut data = [Coor2D([input.x(), input.y()])];
        self.context.apply(self.op, Inv, &mut data).ok()?;

        // geodesy keeps geographic coordinates as (lon, lat) in radians.
        let [lon, lat] = data[0].0;
        (lon.is_finite() && lat.is_finite()).then(|| GeographicPoint::from_radians(lat, lon))
    }
}
