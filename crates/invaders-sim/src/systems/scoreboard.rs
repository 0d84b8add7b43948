//! Keeps the score display in step with the match state.

use invaders_core::components::ScoreBoard;

use crate::match_state::MatchState;
use crate::registry::EntityRegistry;

pub fn run(registry: &mut EntityRegistry, match_state: &MatchState) {
    for (_entity, board) in registry.world_mut().query_mut::<&mut ScoreBoard>() {
        board.score = match_state.score();
        board.lives = match_state.lives();
    }
}
