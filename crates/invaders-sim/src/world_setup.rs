//! Entity spawn factories for setting up a match.
//!
//! Translates configuration and the formation layout into `EntitySpec`s
//! and registers them.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::config::GameConfig;
use invaders_core::enums::{EntityKind, Outcome};
use invaders_core::types::{EntityId, Position};
use invaders_formation::{Anchor, FormationLayout};

use crate::match_state::MatchState;
use crate::registry::{EntityRegistry, EntitySpec};

/// Populate an empty registry: score display, player, then the formation.
pub fn setup_match(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    layout: &FormationLayout,
    match_state: &MatchState,
    rng: &mut ChaCha8Rng,
    now_secs: f64,
) {
    spawn_score_display(registry, config, match_state);
    spawn_player(registry, config);
    spawn_formation(registry, config, layout, rng, now_secs);
}

pub fn spawn_score_display(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    match_state: &MatchState,
) -> EntityId {
    registry.create(EntitySpec::ScoreDisplay {
        position: Position::new(config.scorebox.x, config.scorebox.y),
        score: match_state.score(),
        lives: match_state.lives(),
    })
}

/// Player starts centered, resting on the bottom buffer.
pub fn spawn_player(registry: &mut EntityRegistry, config: &GameConfig) -> EntityId {
    let radius = config.player.radius;
    let x = (config.window.width / 2.0).floor();
    let y = config.window.height - config.window.bottom_buffer - radius;
    registry.create(EntitySpec::Player {
        position: Position::new(x, y),
        radius,
        speed: config.player.vel,
    })
}

/// Spawn one enemy per anchor, all sharing the layout's move-counter max.
pub fn spawn_formation(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    layout: &FormationLayout,
    rng: &mut ChaCha8Rng,
    now_secs: f64,
) -> Vec<EntityId> {
    layout
        .anchors
        .iter()
        .map(|anchor| spawn_enemy(registry, config, layout, anchor, rng, now_secs))
        .collect()
}

fn spawn_enemy(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    layout: &FormationLayout,
    anchor: &Anchor,
    rng: &mut ChaCha8Rng,
    now_secs: f64,
) -> EntityId {
    let spec = match anchor.kind {
        EntityKind::ShootingEnemy => EntitySpec::ShootingEnemy {
            position: anchor.position,
            radius: layout.radius,
            speed: layout.speed,
            point_value: config.enemy.shooter_point_value,
            move_counter_max: Some(layout.move_counter_max),
            fire_probability: config.enemy.shooting_frequency,
            spawned_at_secs: now_secs,
            window_secs: recoil_window(config, rng),
        },
        _ => EntitySpec::StandardEnemy {
            position: anchor.position,
            radius: layout.radius,
            speed: layout.speed,
            point_value: config.enemy.standard_point_value,
            move_counter_max: Some(layout.move_counter_max),
        },
    };
    registry.create(spec)
}

/// A fresh enemy recoil window: base recoil plus jitter in `[0, 1)` seconds.
pub fn recoil_window(config: &GameConfig, rng: &mut ChaCha8Rng) -> f64 {
    config.enemy.bullet.recoil + rng.gen::<f64>()
}

/// Bullet fired by the player from `origin`.
pub fn spawn_player_bullet(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    origin: Position,
) -> EntityId {
    registry.create(EntitySpec::PlayerBullet {
        position: origin,
        radius: config.player.bullet.radius,
        speed: config.player.bullet.speed,
    })
}

/// Bullet fired by a shooting enemy from `origin`.
pub fn spawn_enemy_bullet(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    origin: Position,
) -> EntityId {
    registry.create(EntitySpec::EnemyBullet {
        position: origin,
        radius: config.enemy.bullet.radius,
        speed: config.enemy.bullet.speed,
    })
}

/// Replace everything with a single end screen centered on the window.
pub fn spawn_end_screen(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    outcome: Outcome,
    final_score: u32,
) -> EntityId {
    registry.clear();
    registry.create(EntitySpec::EndScreenDisplay {
        position: Position::new(
            (config.window.width / 2.0).floor(),
            (config.window.height / 2.0).floor(),
        ),
        outcome,
        final_score,
    })
}
