/// A mapping between a geographic frame and a projected plane.
///
/// Both directions return `None` when the operator cannot produce a finite
/// point for the input.
pub trait Projection {
    type InPoint;
    type OutPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
