//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `tm-graph`.
///
/// Records outside the region and edges with unknown endpoints are *not*
/// errors; they are dropped and counted in
/// [`ExtractStats`](crate::ExtractStats).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("input format error in {context}: {message}")]
    InputFormat { context: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "gml")]
    #[error("GML parse error: {0}")]
    Xml(String),
}

impl GraphError {
    pub(crate) fn input_format(context: impl Into<String>, message: impl Into<String>) -> Self {
        GraphError::InputFormat { context: context.into(), message: message.into() }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
