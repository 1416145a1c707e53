//! Spatial-subsystem error type.

use thiserror::Error;

use wr_core::{CoreError, NodeId};

/// Errors produced by `wr-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("inconsistent wind field: {0}")]
    InconsistentWindField(String),

    #[error("node {0} not found in grid")]
    NodeNotFound(NodeId),

    #[error("route search cancelled after settling {settled} nodes")]
    Cancelled { settled: usize },

    #[error("wind data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for SpatialError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidDomain(msg) | CoreError::Config(msg) => SpatialError::InvalidDomain(msg),
        }
    }
}

pub type SpatialResult<T> = Result<T, SpatialError>;
