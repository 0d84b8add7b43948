//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior beyond trivial accessors.
//! Game logic lives in systems and in the formation crate, not here.
//! `EntityId`, `EntityKind`, `Position` and `Radius` are attached to every
//! entity; the structs below carry the per-variant state.

use serde::{Deserialize, Serialize};

use crate::enums::{HorizontalDirection, Outcome, VerticalHeading};

/// Player-controlled avatar state. Lives and score belong to the match, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pilot {
    /// Horizontal displacement per tick while a direction key is held.
    pub speed: f64,
    /// Sim time of the last honored shot. `None` until the first shot.
    pub last_shot_secs: Option<f64>,
}

/// Formation marching state shared by both enemy variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Marcher {
    pub direction: HorizontalDirection,
    /// Steps taken since the last turn. Always within `[0, move_counter_max]`.
    pub move_counter: u32,
    /// Steps before the formation drops and turns. Assigned by the formation
    /// controller; an enemy must not be updated while this is `None`.
    pub move_counter_max: Option<u32>,
    /// Horizontal displacement per step. Grows on every drop.
    pub speed: f64,
    /// Score awarded for destroying this enemy.
    pub point_value: u32,
}

/// Autonomous fire state of a shooting enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Gunner {
    /// Sim time at which the current recoil window started.
    pub last_shot_secs: f64,
    /// Length of the current recoil window: base recoil plus jitter in `[0, 1)`.
    pub window_secs: f64,
    /// Probability of firing when a window elapses.
    pub fire_probability: f64,
}

/// Bullet kinematics. Speed is a magnitude; the heading carries the sign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub speed: f64,
    pub heading: VerticalHeading,
}

/// Score display, mirrors the match state each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u32,
    pub lives: u32,
}

/// End-of-match display. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndScreen {
    pub outcome: Outcome,
    pub message: String,
    pub final_score: u32,
}
