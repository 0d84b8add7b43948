//! Game loop thread: advances the engine one tick at a time and hands each
//! snapshot to the renderer.
//!
//! The engine is built on the caller's thread so configuration errors surface
//! before anything is spawned. Commands arrive via an `mpsc` channel and are
//! only looked at between ticks.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use invaders_core::input::InputState;
use invaders_core::state::GameStateSnapshot;
use invaders_sim::engine::{SimConfig, SimulationEngine};

use crate::error::Result;
use crate::input::InputSource;
use crate::render::Renderer;
use crate::state::{LoopCommand, LoopHandle, LoopSummary, StopReason};

/// How the loop paces and bounds itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopSettings {
    /// Sleep between ticks to match the configured tick rate.
    pub realtime: bool,
    /// Stop after this many ticks even if the match is still running.
    pub max_ticks: Option<u64>,
}

/// Nominal duration of one tick at the given rate.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Builds the engine and spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    settings: LoopSettings,
    input: Box<dyn InputSource>,
    renderer: Box<dyn Renderer>,
) -> Result<LoopHandle> {
    let engine = SimulationEngine::new(config)?;
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));

    let shared = Arc::clone(&latest_snapshot);
    let join = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || run_game_loop(engine, settings, input, renderer, command_rx, &shared))?;

    Ok(LoopHandle {
        command_tx,
        latest_snapshot,
        join,
    })
}

/// The game loop. Runs until the match ends, the tick budget is spent, or the
/// host asks it to stop.
fn run_game_loop(
    mut engine: SimulationEngine,
    settings: LoopSettings,
    mut input: Box<dyn InputSource>,
    mut renderer: Box<dyn Renderer>,
    command_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> Result<LoopSummary> {
    let tick_len = tick_duration(engine.config().sim.tick_rate);
    let mut last: Option<GameStateSnapshot> = None;
    let mut ticks = 0u64;
    let mut next_tick_time = Instant::now();

    let stopped_by = loop {
        if settings.max_ticks.is_some_and(|max| ticks >= max) {
            break StopReason::TickBudget;
        }

        // 1. Drain pending commands; the last Input wins for this tick
        let mut forced: Option<InputState> = None;
        let mut stop = None;
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Input(state)) => forced = Some(state),
                Ok(LoopCommand::Shutdown) => {
                    stop = Some(StopReason::Shutdown);
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    stop = Some(StopReason::Disconnected);
                    break;
                }
            }
        }
        if let Some(reason) = stop {
            break reason;
        }

        // 2. Advance one tick
        let state = forced.unwrap_or_else(|| input.next_input(last.as_ref()));
        let snapshot = engine.tick(state)?;
        ticks += 1;

        // 3. Render, then publish for synchronous polling
        renderer.render(&snapshot)?;
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        let finished = snapshot.outcome.is_terminal();
        last = Some(snapshot);

        if finished {
            break StopReason::MatchOver;
        }

        // 4. Sleep until the next tick
        if settings.realtime {
            next_tick_time += tick_len;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_len * 2 {
                debug!(behind = ?(now - next_tick_time), "game loop behind, resetting pace");
                next_tick_time = now;
            }
        }
    };

    let summary = LoopSummary {
        ticks,
        outcome: engine.outcome(),
        score: engine.match_state().score(),
        lives: engine.match_state().lives(),
        stopped_by,
    };
    info!(?summary, "game loop stopped");
    Ok(summary)
}
