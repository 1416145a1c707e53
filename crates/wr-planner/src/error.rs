use thiserror::Error;

use wr_polar::PolarError;
use wr_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Polar(#[from] PolarError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
