use shoal_core::CoreError;
use shoal_locomotion::LocomotionError;
use shoal_steering::SteeringError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("fish configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Steering(#[from] SteeringError),

    #[error(transparent)]
    Locomotion(#[from] LocomotionError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type AgentResult<T> = Result<T, AgentError>;
