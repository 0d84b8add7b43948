//! Session configuration.
//!
//! Loaded once by the host, validated, then passed by reference to the
//! formation controller, the factory and the engine. Immutable for a session.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub formation: FormationConfig,
    pub meta: MetaConfig,
    pub scorebox: ScoreBoxConfig,
    pub sim: SimSettings,
}

/// Screen dimensions and the buffers that shrink them into the playfield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub top_buffer: f64,
    pub bottom_buffer: f64,
    pub left_buffer: f64,
    pub right_buffer: f64,
}

/// Player bullet and the minimum time between player shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerBulletConfig {
    pub speed: f64,
    pub radius: f64,
    /// Recoil window in seconds.
    pub recoil: f64,
}

/// Enemy bullet and the base recoil window each shooter adds jitter to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyBulletConfig {
    pub speed: f64,
    pub radius: f64,
    /// Base recoil window in seconds.
    pub recoil: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f64,
    pub vel: f64,
    pub bullet: PlayerBulletConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub radius: f64,
    pub speed: f64,
    pub standard_point_value: u32,
    pub shooter_point_value: u32,
    pub shooting_frequency: f64,
    pub drop_multiplier: f64,
    pub speed_increment: f64,
    pub bullet: EnemyBulletConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationConfig {
    pub rows: u32,
    pub cols: u32,
    /// Gap between neighbouring cells, in diameters.
    pub spacing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    pub start_lives: u32,
    pub start_points: u32,
    pub hit_penalty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBoxConfig {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub tick_rate: u32,
    /// RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
}

/// Axis-aligned playfield rectangle: the screen minus its buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            top_buffer: TOP_BUFFER,
            bottom_buffer: BOTTOM_BUFFER,
            left_buffer: LEFT_BUFFER,
            right_buffer: RIGHT_BUFFER,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            vel: PLAYER_SPEED,
            bullet: PlayerBulletConfig::default(),
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            radius: ENEMY_RADIUS,
            speed: ENEMY_SPEED,
            standard_point_value: STANDARD_POINT_VALUE,
            shooter_point_value: SHOOTER_POINT_VALUE,
            shooting_frequency: SHOOTING_FREQUENCY,
            drop_multiplier: DROP_MULTIPLIER,
            speed_increment: SPEED_INCREMENT,
            bullet: EnemyBulletConfig::default(),
        }
    }
}

impl Default for PlayerBulletConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_BULLET_SPEED,
            radius: PLAYER_BULLET_RADIUS,
            recoil: PLAYER_RECOIL_SECS,
        }
    }
}

impl Default for EnemyBulletConfig {
    fn default() -> Self {
        Self {
            speed: ENEMY_BULLET_SPEED,
            radius: ENEMY_BULLET_RADIUS,
            recoil: ENEMY_RECOIL_SECS,
        }
    }
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            rows: FORMATION_ROWS,
            cols: FORMATION_COLS,
            spacing: FORMATION_SPACING,
        }
    }
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            start_lives: START_LIVES,
            start_points: START_POINTS,
            hit_penalty: HIT_PENALTY,
        }
    }
}

impl Default for ScoreBoxConfig {
    fn default() -> Self {
        Self {
            x: SCOREBOX_X,
            y: SCOREBOX_Y,
        }
    }
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.sim.tick_rate.max(1) as f64
    }

    /// The rectangle bullets must stay inside.
    pub fn playfield(&self) -> Playfield {
        let w = &self.window;
        Playfield {
            min_x: w.left_buffer,
            max_x: w.width - w.right_buffer,
            min_y: w.top_buffer,
            max_y: w.height - w.bottom_buffer,
        }
    }

    /// Enemies reaching this y end the match.
    pub fn bottom_boundary(&self) -> f64 {
        self.window.height - self.window.bottom_buffer
    }

    /// Check every value the simulation depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("player.radius", self.player.radius),
            ("player.vel", self.player.vel),
            ("player.bullet.speed", self.player.bullet.speed),
            ("player.bullet.radius", self.player.bullet.radius),
            ("enemy.radius", self.enemy.radius),
            ("enemy.speed", self.enemy.speed),
            ("enemy.bullet.speed", self.enemy.bullet.speed),
            ("enemy.bullet.radius", self.enemy.bullet.radius),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("window.top_buffer", self.window.top_buffer),
            ("window.bottom_buffer", self.window.bottom_buffer),
            ("window.left_buffer", self.window.left_buffer),
            ("window.right_buffer", self.window.right_buffer),
            ("player.bullet.recoil", self.player.bullet.recoil),
            ("enemy.bullet.recoil", self.enemy.bullet.recoil),
            ("enemy.drop_multiplier", self.enemy.drop_multiplier),
            ("enemy.speed_increment", self.enemy.speed_increment),
            ("formation.spacing", self.formation.spacing),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let lane = self.window.width - self.window.left_buffer - self.window.right_buffer;
        let diameter = 2.0 * self.player.radius;
        if diameter > lane {
            return Err(ConfigError::PlayerTooWide { diameter, lane });
        }

        if self.meta.start_lives == 0 {
            return Err(ConfigError::NoLives);
        }

        let p = self.enemy.shooting_frequency;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange {
                field: "enemy.shooting_frequency",
                value: p,
            });
        }

        if self.formation.rows == 0 || self.formation.cols == 0 {
            return Err(ConfigError::EmptyFormation {
                rows: self.formation.rows,
                cols: self.formation.cols,
            });
        }

        if self.sim.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }
}
