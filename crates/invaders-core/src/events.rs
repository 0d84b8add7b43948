//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Outcome;
use crate::types::{EntityId, Position};

/// Something the host may want to play a sound for or animate.
/// Drained into the snapshot every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player fired a bullet.
    PlayerFired { bullet: EntityId, position: Position },
    /// A shooting enemy fired a bullet.
    EnemyFired { shooter: EntityId, bullet: EntityId },
    /// A player bullet destroyed an enemy.
    EnemyDestroyed { enemy: EntityId, points: u32 },
    /// An enemy bullet hit the player.
    PlayerHit { lives_remaining: u32 },
    /// The formation reached its turning point and stepped down.
    FormationDropped { tick: u64 },
    /// The match reached a terminal outcome.
    MatchEnded { outcome: Outcome, final_score: u32 },
}
