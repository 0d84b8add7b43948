//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the entity registry, consumes one input snapshot
//! per tick, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use invaders_core::config::GameConfig;
use invaders_core::enums::Outcome;
use invaders_core::events::GameEvent;
use invaders_core::input::InputState;
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::{EntityId, SimTime};
use invaders_formation::{build_layout, MarchTuning};

use crate::error::SimError;
use crate::match_state::MatchState;
use crate::registry::EntityRegistry;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub game: GameConfig,
    /// RNG seed for enemy fire. Same seed and inputs = same match.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: 42,
        }
    }
}

/// The simulation engine. Owns the registry and all match state.
pub struct SimulationEngine {
    config: GameConfig,
    registry: EntityRegistry,
    time: SimTime,
    rng: ChaCha8Rng,
    match_state: MatchState,
    tuning: MarchTuning,
    despawn_buffer: Vec<EntityId>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Validate the configuration, lay out the formation and spawn the match.
    ///
    /// Configuration errors and formation overflow are reported here, before
    /// any entity exists.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let SimConfig { game, seed } = config;
        game.validate()?;
        let layout = build_layout(&game)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut registry = EntityRegistry::new();
        let match_state = MatchState::new(game.meta.start_lives, game.meta.start_points);
        let time = SimTime::default();

        world_setup::setup_match(
            &mut registry,
            &game,
            &layout,
            &match_state,
            &mut rng,
            time.elapsed_secs,
        );

        info!(
            seed,
            enemies = layout.len(),
            move_counter_max = layout.move_counter_max,
            lives = match_state.lives(),
            "match ready"
        );

        Ok(Self {
            tuning: MarchTuning::from(&game.enemy),
            config: game,
            registry,
            time,
            rng,
            match_state,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Once the match is won or lost no systems run: the snapshot only shows
    /// the end screen and lives/score/outcome stay frozen.
    pub fn tick(&mut self, input: InputState) -> Result<GameStateSnapshot, SimError> {
        if !self.match_state.current_outcome().is_terminal() {
            self.run_systems(&input)?;
            self.time.advance(self.config.dt());
        }

        let events = std::mem::take(&mut self.events);
        Ok(systems::snapshot::build_snapshot(
            &self.registry,
            &self.time,
            &self.match_state,
            events,
        ))
    }

    pub fn outcome(&self) -> Outcome {
        self.match_state.current_outcome()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// Read-only access to the registry, e.g. for a renderer running in-process.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    #[cfg(test)]
    pub fn match_state_mut(&mut self) -> &mut MatchState {
        &mut self.match_state
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputState) -> Result<(), SimError> {
        let now = self.time.elapsed_secs;

        // 1. Player input: movement and fire requests
        systems::player::run(
            &mut self.registry,
            &self.config,
            input,
            now,
            &mut self.events,
        );
        // 2. Formation marching
        systems::marching::run(
            &mut self.registry,
            &self.tuning,
            self.time.tick,
            &mut self.events,
        )?;
        // 3. Autonomous enemy fire
        systems::enemy_fire::run(
            &mut self.registry,
            &self.config,
            &mut self.rng,
            now,
            &mut self.events,
        );
        // 4. Bullet movement
        systems::movement::run(&mut self.registry);
        // 5. Off-bounds culling
        systems::cleanup::run(
            &mut self.registry,
            &self.config.playfield(),
            &mut self.despawn_buffer,
        );
        // 6. Player bullets vs enemies
        systems::collision::player_bullets_vs_enemies(
            &mut self.registry,
            &mut self.match_state,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 7. Enemy bullets vs player
        systems::collision::enemy_bullets_vs_player(
            &mut self.registry,
            &mut self.match_state,
            self.config.meta.hit_penalty,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 8. Outcome evaluation (may replace everything with the end screen)
        systems::outcome::run(
            &mut self.registry,
            &mut self.match_state,
            &self.config,
            &mut self.events,
        );
        // 9. Score display mirrors the match state
        systems::scoreboard::run(&mut self.registry, &self.match_state);
        Ok(())
    }
}
