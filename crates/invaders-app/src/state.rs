//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use invaders_core::enums::Outcome;
use invaders_core::input::InputState;
use invaders_core::state::GameStateSnapshot;

use crate::error::{AppError, Result};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Use this input for the next tick instead of the input source.
    Input(InputState),
    /// Stop the loop at the next tick boundary.
    Shutdown,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    MatchOver,
    TickBudget,
    Shutdown,
    Disconnected,
}

/// Final state reported when the loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub outcome: Outcome,
    pub score: u32,
    pub lives: u32,
    pub stopped_by: StopReason,
}

/// Handle to a running game loop.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<LoopCommand>,
    /// Latest snapshot for synchronous polling. Updated after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub(crate) join: JoinHandle<Result<LoopSummary>>,
}

impl LoopHandle {
    /// Ask the loop to stop between ticks. A loop that already exited is fine.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
    }

    /// Block until the loop exits.
    pub fn wait(self) -> Result<LoopSummary> {
        self.join.join().map_err(|_| AppError::LoopPanicked)?
    }
}
