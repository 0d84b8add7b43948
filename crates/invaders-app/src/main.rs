//! Headless invaders runner: plays one match with the autopilot and reports
//! the result.
//!
//! Usage:
//!   cargo run -p invaders-app -- --max-ticks 5000
//!   RUST_LOG=debug cargo run -p invaders-app -- --config game.json --realtime
//!   cargo run -p invaders-app -- --json > frames.jsonl

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use invaders_app::config_loader::load_config;
use invaders_app::error::Result;
use invaders_app::game_loop::{spawn_game_loop, LoopSettings};
use invaders_app::input::Autopilot;
use invaders_app::render::{JsonRenderer, LogRenderer, Renderer};
use invaders_app::state::LoopSummary;
use invaders_sim::engine::SimConfig;

#[derive(Parser)]
#[command(name = "invaders")]
#[command(about = "Run a headless invaders match driven by the autopilot")]
struct Args {
    /// JSON game configuration. Missing keys use the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for enemy fire. Overrides the seed in the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if the match is still running.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Pace ticks to the configured tick rate instead of running flat out.
    #[arg(long)]
    realtime: bool,

    /// Write every snapshot to stdout as a JSON line.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(summary) => {
            info!(
                outcome = ?summary.outcome,
                score = summary.score,
                lives = summary.lives,
                ticks = summary.ticks,
                stopped_by = ?summary.stopped_by,
                message = summary.outcome.message(),
                "run finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "invaders failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<LoopSummary> {
    let game = load_config(args.config.as_deref())?;
    let seed = args.seed.or(game.sim.seed).unwrap_or(SimConfig::default().seed);

    let renderer: Box<dyn Renderer> = if args.json {
        Box::new(JsonRenderer::new(std::io::stdout()))
    } else {
        Box::new(LogRenderer::new(u64::from(game.sim.tick_rate)))
    };
    let settings = LoopSettings {
        realtime: args.realtime,
        max_ticks: args.max_ticks,
    };

    let handle = spawn_game_loop(
        SimConfig { game, seed },
        settings,
        Box::new(Autopilot::new()),
        renderer,
    )?;
    handle.wait()
}
