//! Configuration errors, reported before the simulation starts.

use thiserror::Error;

/// Invalid configuration values. Fatal at setup, never recovered automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("formation needs at least one row and one column, got {rows}x{cols}")]
    EmptyFormation { rows: u32, cols: u32 },

    #[error("player diameter {diameter} does not fit the {lane} wide lane between the buffers")]
    PlayerTooWide { diameter: f64, lane: f64 },

    #[error("meta.start_lives must be at least 1")]
    NoLives,

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
}
