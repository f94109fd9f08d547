use shoal_agent::AgentError;
use shoal_core::FishId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("tank configuration error: {0}")]
    Config(String),

    #[error("no fish with id {0}")]
    UnknownFish(FishId),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
