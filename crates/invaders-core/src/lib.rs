//! Core types and definitions for the invaders simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry helpers, components, configuration, input, events, render
//! snapshots and errors. It has no dependency on any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
