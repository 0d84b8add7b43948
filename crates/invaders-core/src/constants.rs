//! Default tuning parameters.
//!
//! These seed `GameConfig::default()`; every value can be overridden from a
//! configuration file.

// --- Window ---

pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 600.0;
pub const TOP_BUFFER: f64 = 60.0;
pub const BOTTOM_BUFFER: f64 = 10.0;
pub const LEFT_BUFFER: f64 = 10.0;
pub const RIGHT_BUFFER: f64 = 10.0;

// --- Player ---

pub const PLAYER_RADIUS: f64 = 20.0;
pub const PLAYER_SPEED: f64 = 10.0;
pub const PLAYER_BULLET_SPEED: f64 = 20.0;
pub const PLAYER_BULLET_RADIUS: f64 = 5.0;
/// Minimum seconds between two player shots.
pub const PLAYER_RECOIL_SECS: f64 = 0.3;

// --- Enemies ---

pub const ENEMY_RADIUS: f64 = 15.0;
pub const ENEMY_SPEED: f64 = 2.0;
pub const STANDARD_POINT_VALUE: u32 = 10;
pub const SHOOTER_POINT_VALUE: u32 = 30;
/// Probability that a shooting enemy fires when its recoil window elapses.
pub const SHOOTING_FREQUENCY: f64 = 0.2;
/// Formation drop distance in multiples of the current speed.
pub const DROP_MULTIPLIER: f64 = 4.0;
/// Speed added to every formation member on each drop.
pub const SPEED_INCREMENT: f64 = 3.0;
pub const ENEMY_BULLET_SPEED: f64 = 8.0;
pub const ENEMY_BULLET_RADIUS: f64 = 5.0;
/// Base recoil window of a shooting enemy; a jitter in `[0, 1)` is added.
pub const ENEMY_RECOIL_SECS: f64 = 1.0;

// --- Formation ---

pub const FORMATION_ROWS: u32 = 4;
pub const FORMATION_COLS: u32 = 8;
/// Gap between neighbouring cells, in diameters.
pub const FORMATION_SPACING: f64 = 1.0;

// --- Match ---

pub const START_LIVES: u32 = 3;
pub const START_POINTS: u32 = 0;
/// Score removed when the player is hit. The score never drops below zero.
pub const HIT_PENALTY: u32 = 50;

// --- Score display ---

pub const SCOREBOX_X: f64 = 10.0;
pub const SCOREBOX_Y: f64 = 10.0;

// --- Simulation ---

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;
