//! Headless host for the invaders simulation.
//!
//! Wires the engine to its collaborators: a configuration file, an input
//! source, a renderer and a fixed-rate game loop thread that can be stopped
//! between ticks.

pub mod config_loader;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod render;
pub mod state;

pub use invaders_core as core;
