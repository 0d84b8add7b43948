//! Enemy formation controller for the invaders simulation.
//!
//! Computes the anchor grid the swarm spawns on and the counter-based
//! marching rule that keeps every member turning in unison.
//! Plain data in, plain data out; no ECS dependency.

pub mod grid;
pub mod marching;

pub use grid::{build_layout, Anchor, FormationLayout};
pub use marching::{MarchStep, MarchTuning};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormationError {
    /// The rightmost column does not fit inside the playfield.
    #[error("formation column {column} at x={x} exceeds the right limit {limit}")]
    LayoutOverflow { column: u32, x: f64, limit: f64 },

    /// A formation member was stepped before being assigned a move-counter max.
    #[error("move counter max was never assigned")]
    MoveCounterMaxUnset,
}

#[cfg(test)]
mod tests;
