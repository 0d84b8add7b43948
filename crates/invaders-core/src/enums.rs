//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Entity variant tag. Every registered entity carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    /// Formation member without autonomous fire.
    StandardEnemy,
    /// Formation member that fires stochastically.
    ShootingEnemy,
    PlayerBullet,
    EnemyBullet,
    /// Read-only projection of lives and score.
    ScoreDisplay,
    /// Final message and score, replaces everything else once the match ends.
    EndScreenDisplay,
}

impl EntityKind {
    pub fn is_enemy(self) -> bool {
        matches!(self, EntityKind::StandardEnemy | EntityKind::ShootingEnemy)
    }

    pub fn is_bullet(self) -> bool {
        matches!(self, EntityKind::PlayerBullet | EntityKind::EnemyBullet)
    }
}

/// Match outcome. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    /// Message shown on the end screen.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Playing => "",
            Outcome::Won => "You win!",
            Outcome::Lost => "Game over",
        }
    }
}

/// Horizontal marching direction of a formation member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDirection {
    Left,
    #[default]
    Right,
}

impl HorizontalDirection {
    /// -1.0 for left, +1.0 for right.
    pub fn sign(self) -> f64 {
        match self {
            HorizontalDirection::Left => -1.0,
            HorizontalDirection::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            HorizontalDirection::Left => HorizontalDirection::Right,
            HorizontalDirection::Right => HorizontalDirection::Left,
        }
    }
}

/// Travel axis of a bullet. Player bullets go up the screen, enemy bullets down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalHeading {
    Up,
    Down,
}

impl VerticalHeading {
    /// Sign applied to y per tick (screen y grows downwards).
    pub fn sign(self) -> f64 {
        match self {
            VerticalHeading::Up => -1.0,
            VerticalHeading::Down => 1.0,
        }
    }
}
