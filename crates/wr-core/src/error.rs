//! Core error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls, so `?` works across crate boundaries.

use thiserror::Error;

/// Errors produced by `wr-core` validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `wr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
