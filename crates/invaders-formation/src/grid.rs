//! Anchor grid layout.
//!
//! Cells are one diameter wide plus `spacing` diameters of gap. Columns run
//! left to right from the left buffer, rows top to bottom from the top buffer.
//! The top row holds shooting enemies, every other row standard enemies.

use invaders_core::config::GameConfig;
use invaders_core::enums::EntityKind;
use invaders_core::types::Position;

use crate::FormationError;

/// Spawn point of one formation member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub row: u32,
    pub col: u32,
    pub position: Position,
    pub kind: EntityKind,
}

/// A fully validated formation, ready to spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationLayout {
    /// Column-major: each column top to bottom, columns left to right.
    pub anchors: Vec<Anchor>,
    /// Steps the rightmost column can take before reaching the right limit.
    /// Shared by every member so the whole grid turns together.
    pub move_counter_max: u32,
    pub radius: f64,
    pub speed: f64,
}

/// Lay out `formation.rows` x `formation.cols` anchors.
///
/// Fails with `LayoutOverflow` if any column center lies beyond
/// `width - right_buffer - radius`. Nothing is spawned in that case.
pub fn build_layout(config: &GameConfig) -> Result<FormationLayout, FormationError> {
    let r = config.enemy.radius;
    let speed = config.enemy.speed;
    let window = &config.window;
    let step = 2.0 * r * (1.0 + config.formation.spacing);
    let limit = right_limit(config);

    let mut anchors =
        Vec::with_capacity((config.formation.rows * config.formation.cols) as usize);
    let mut rightmost_x = window.left_buffer + r;

    for col in 0..config.formation.cols {
        let x = window.left_buffer + r + col as f64 * step;
        if x > limit {
            return Err(FormationError::LayoutOverflow { column: col, x, limit });
        }
        rightmost_x = x;

        for row in 0..config.formation.rows {
            let y = window.top_buffer + r + row as f64 * step;
            let kind = if row == 0 {
                EntityKind::ShootingEnemy
            } else {
                EntityKind::StandardEnemy
            };
            anchors.push(Anchor {
                row,
                col,
                position: Position::new(x, y),
                kind,
            });
        }
    }

    Ok(FormationLayout {
        anchors,
        move_counter_max: move_counter_max(limit, rightmost_x, speed),
        radius: r,
        speed,
    })
}

/// Largest x an enemy center may occupy.
pub fn right_limit(config: &GameConfig) -> f64 {
    config.window.width - config.window.right_buffer - config.enemy.radius
}

/// `floor((limit - rightmost_x) / speed)`, saturating at zero.
pub fn move_counter_max(limit: f64, rightmost_x: f64, speed: f64) -> u32 {
    ((limit - rightmost_x) / speed).floor().max(0.0) as u32
}

impl FormationLayout {
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Number of anchors of a given kind.
    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.anchors.iter().filter(|a| a.kind == kind).count()
    }
}
