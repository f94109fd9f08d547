use shoal_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocomotionError {
    #[error("locomotion configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type LocomotionResult<T> = Result<T, LocomotionError>;
