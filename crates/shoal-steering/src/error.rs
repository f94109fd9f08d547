use shoal_core::CoreError;
use thiserror::Error;

use crate::BehaviorKind;

#[derive(Debug, Error)]
pub enum SteeringError {
    /// `truncate_addend` was handed an accumulator already past the limit.
    /// A correct combiner never does this; treat as a defect, not a retry.
    #[error("accumulated force length {length} already exceeds limit {limit}")]
    InvalidTruncationState { length: f32, limit: f32 },

    /// A request named a behavior kind with no registered generator.
    #[error("no generator registered for behavior kind {0}")]
    UnknownBehavior(BehaviorKind),

    /// A request's options variant does not match its kind.
    #[error("options variant does not match behavior kind {0}")]
    MismatchedOptions(BehaviorKind),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SteeringResult<T> = Result<T, SteeringError>;
