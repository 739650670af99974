//! Projection-subsystem error type.

use thiserror::Error;

use tm_core::CoreError;

/// Errors produced by `tm-proj`.
///
/// Only construction can fail; conversions that cannot be evaluated yield
/// `None` instead.
#[derive(Debug, Error)]
pub enum ProjError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("projection definition {definition:?} rejected: {message}")]
    Definition { definition: String, message: String },

    #[error("map centre {0} projects to a non-finite point")]
    NonFiniteCenter(tm_core::GeographicPoint),
}

pub type ProjResult<T> = Result<T, ProjError>;
