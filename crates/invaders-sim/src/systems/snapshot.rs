//! Snapshot system: reads the registry and builds a `GameStateSnapshot`.
//!
//! Read-only: never modifies the registry.

use invaders_core::components::{EndScreen, ScoreBoard};
use invaders_core::enums::EntityKind;
use invaders_core::events::GameEvent;
use invaders_core::state::{DisplayView, EntityView, GameStateSnapshot};
use invaders_core::types::{EntityId, Position, Radius, SimTime};

use crate::match_state::MatchState;
use crate::registry::EntityRegistry;

pub fn build_snapshot(
    registry: &EntityRegistry,
    time: &SimTime,
    match_state: &MatchState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        outcome: match_state.current_outcome(),
        match_state: match_state.view(),
        entities: build_entities(registry),
        events,
    }
}

/// One view per registered entity, sorted by identity.
fn build_entities(registry: &EntityRegistry) -> Vec<EntityView> {
    let world = registry.world();
    let mut query = world.query::<(
        &EntityId,
        &EntityKind,
        &Position,
        &Radius,
        Option<&ScoreBoard>,
        Option<&EndScreen>,
    )>();

    let mut views: Vec<EntityView> = query
        .iter()
        .map(|(_, (id, kind, pos, radius, board, end))| EntityView {
            id: *id,
            kind: *kind,
            position: *pos,
            radius: radius.0,
            display: display_of(board, end),
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

fn display_of(board: Option<&ScoreBoard>, end: Option<&EndScreen>) -> Option<DisplayView> {
    if let Some(end) = end {
        return Some(DisplayView::EndScreen {
            message: end.message.clone(),
            final_score: end.final_score,
        });
    }
    board.map(|b| DisplayView::Score {
        score: b.score,
        lives: b.lives,
    })
}
