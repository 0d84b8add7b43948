//! Render collaborators. The engine never draws; it hands each snapshot here.

use std::io::Write;

use tracing::info;

use invaders_core::events::GameEvent;
use invaders_core::state::GameStateSnapshot;

use crate::error::Result;

/// Consumes one snapshot per tick.
pub trait Renderer: Send {
    fn render(&mut self, snapshot: &GameStateSnapshot) -> Result<()>;
}

/// Logs a one-line summary every `every` ticks, plus every match-ending event.
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &GameStateSnapshot) -> Result<()> {
        for event in &snapshot.events {
            if let GameEvent::MatchEnded {
                outcome,
                final_score,
            } = event
            {
                info!(?outcome, final_score, message = outcome.message(), "match ended");
            }
        }

        if snapshot.time.tick % self.every == 0 {
            let enemies = snapshot
                .entities
                .iter()
                .filter(|e| e.kind.is_enemy())
                .count();
            info!(
                tick = snapshot.time.tick,
                score = snapshot.match_state.score,
                lives = snapshot.match_state.lives,
                enemies,
                "frame"
            );
        }
        Ok(())
    }
}

/// Writes each snapshot as one JSON line.
pub struct JsonRenderer<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for JsonRenderer<W> {
    fn render(&mut self, snapshot: &GameStateSnapshot) -> Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

/// Drops every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &GameStateSnapshot) -> Result<()> {
        Ok(())
    }
}
