//! Systems that operate on the entity registry each tick.
//!
//! Systems are free functions over `&mut EntityRegistry` (or `&EntityRegistry`
//! for read-only). They hold no state of their own: entity state lives in
//! components, match state in `MatchState`.

pub mod cleanup;
pub mod collision;
pub mod enemy_fire;
pub mod marching;
pub mod movement;
pub mod outcome;
pub mod player;
pub mod scoreboard;
pub mod snapshot;
