//! Game state snapshot: everything the renderer needs after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, Outcome};
use crate::events::GameEvent;
use crate::types::{EntityId, Position, SimTime};

/// Complete visible state handed to the render collaborator after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub outcome: Outcome,
    pub match_state: MatchView,
    /// Live entities, sorted by identity.
    pub entities: Vec<EntityView>,
    pub events: Vec<GameEvent>,
}

/// Lives, score and outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub lives: u32,
    pub score: u32,
    pub outcome: Outcome,
}

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    pub radius: f64,
    /// Text payload for display entities.
    pub display: Option<DisplayView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DisplayView {
    Score { score: u32, lives: u32 },
    EndScreen { message: String, final_score: u32 },
}

impl GameStateSnapshot {
    /// Entities of one kind, in identity order.
    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &EntityView> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities_of(kind).count()
    }
}
