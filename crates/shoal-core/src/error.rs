//! Engine-wide base error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `#[from]` or keep them separate.  Prefer whichever keeps
//! error sites clean.

use thiserror::Error;

/// The top-level error type for `shoal-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A normalize / rescale was attempted on a vector shorter than
    /// [`EPSILON`][crate::EPSILON].  Callers must check length first.
    #[error("cannot rescale a near-zero vector (length {length})")]
    DegenerateVector { length: f32 },

    /// A discrete-distribution sampler was given unusable weights
    /// (negative, non-finite, or all zero).
    #[error("invalid sampling weights: {0}")]
    BadWeights(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `shoal-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
