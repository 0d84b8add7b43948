//! Errors surfaced by the simulation engine.

use thiserror::Error;

use invaders_core::error::ConfigError;
use invaders_core::types::EntityId;
use invaders_formation::FormationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("formation setup failed: {0}")]
    Formation(#[from] FormationError),

    /// An enemy was updated before the formation assigned its move-counter max.
    /// Indicates a setup-ordering bug, never retried.
    #[error("enemy {id} was updated before joining a formation")]
    UnassignedMarcher { id: EntityId },
}
