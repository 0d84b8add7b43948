//! Counter-based marching.
//!
//! Every member counts its own horizontal steps. Because all members start at
//! zero on the same tick and share one max, they reach the turning point on the
//! same tick: drop by `drop_multiplier` x current speed, reverse, reset the
//! counter and speed up. O(1) per member, no extremum scan.

use invaders_core::components::Marcher;
use invaders_core::config::EnemyConfig;
use invaders_core::types::Position;

use crate::FormationError;

/// What a member did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarchStep {
    /// Moved one step horizontally.
    Advanced,
    /// Reached the turning point: dropped, reversed and sped up.
    Dropped,
}

/// Drop and acceleration parameters, taken from the enemy config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchTuning {
    pub drop_multiplier: f64,
    pub speed_increment: f64,
}

impl From<&EnemyConfig> for MarchTuning {
    fn from(enemy: &EnemyConfig) -> Self {
        Self {
            drop_multiplier: enemy.drop_multiplier,
            speed_increment: enemy.speed_increment,
        }
    }
}

/// Advance one formation member by one tick.
pub fn step(
    marcher: &mut Marcher,
    position: &mut Position,
    tuning: &MarchTuning,
) -> Result<MarchStep, FormationError> {
    let max = marcher
        .move_counter_max
        .ok_or(FormationError::MoveCounterMaxUnset)?;

    if marcher.move_counter >= max {
        position.y += tuning.drop_multiplier * marcher.speed;
        marcher.direction = marcher.direction.flipped();
        marcher.move_counter = 0;
        marcher.speed += tuning.speed_increment;
        Ok(MarchStep::Dropped)
    } else {
        position.x += marcher.direction.sign() * marcher.speed;
        marcher.move_counter += 1;
        Ok(MarchStep::Advanced)
    }
}
