//! Simulation engine for the invaders game.
//!
//! Owns the entity registry (a hecs world keyed by stable identities), runs
//! systems at a fixed tick, tracks lives and score, and produces
//! `GameStateSnapshot`s for the host.

pub mod engine;
pub mod error;
pub mod match_state;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
pub use invaders_core as core;
