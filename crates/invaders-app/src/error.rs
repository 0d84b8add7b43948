use thiserror::Error;

use invaders_sim::SimError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("Game loop thread panicked")]
    LoopPanicked,
}

pub type Result<T> = std::result::Result<T, AppError>;
