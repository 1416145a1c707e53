use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolarError {
    #[error("invalid polar table: {0}")]
    InvalidTable(String),

    #[error("polar parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PolarResult<T> = Result<T, PolarError>;
