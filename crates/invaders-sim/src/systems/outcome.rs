//! Win/loss evaluation and the switch to the end screen.

use tracing::info;

use invaders_core::config::GameConfig;
use invaders_core::enums::{EntityKind, Outcome};
use invaders_core::events::GameEvent;
use invaders_core::types::{EntityId, Position};

use crate::match_state::MatchState;
use crate::registry::EntityRegistry;
use crate::world_setup;

/// Classify the current state without mutating anything.
///
/// Lost when no lives remain or an enemy reached the bottom boundary;
/// otherwise won when no enemies remain; otherwise still playing.
pub fn evaluate(registry: &EntityRegistry, match_state: &MatchState, config: &GameConfig) -> Outcome {
    if !match_state.is_alive() || enemy_reached_bottom(registry, config.bottom_boundary()) {
        return Outcome::Lost;
    }
    if registry.enemy_count() == 0 {
        return Outcome::Won;
    }
    Outcome::Playing
}

/// Evaluate and, on a terminal outcome, record it and replace every entity
/// with a single end screen. Returns the outcome after this tick.
pub fn run(
    registry: &mut EntityRegistry,
    match_state: &mut MatchState,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> Outcome {
    let outcome = evaluate(registry, match_state, config);
    let transitioned = match outcome {
        Outcome::Playing => false,
        Outcome::Won => match_state.set_won(),
        Outcome::Lost => match_state.set_lost(),
    };

    if transitioned {
        let final_score = match_state.score();
        let screen = world_setup::spawn_end_screen(registry, config, outcome, final_score);
        info!(?outcome, final_score, lives = match_state.lives(), %screen, "match ended");
        events.push(GameEvent::MatchEnded {
            outcome,
            final_score,
        });
    }
    match_state.current_outcome()
}

fn enemy_reached_bottom(registry: &EntityRegistry, bottom: f64) -> bool {
    registry
        .world()
        .query::<(&EntityKind, &Position)>()
        .iter()
        .any(|(_, (kind, pos))| kind.is_enemy() && pos.y >= bottom)
}

/// The end screen entity, if the match is over.
pub fn end_screen(registry: &EntityRegistry) -> Option<EntityId> {
    registry.ids_of(EntityKind::EndScreenDisplay).into_iter().next()
}
