//! Input snapshot supplied once per tick by the host.

use serde::{Deserialize, Serialize};

/// State of the three controls for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

impl InputState {
    pub const IDLE: InputState = InputState {
        move_left: false,
        move_right: false,
        fire: false,
    };

    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Self::IDLE
        }
    }

    /// Net horizontal intent: -1, 0 or +1. Both keys held cancel out.
    pub fn horizontal_axis(&self) -> f64 {
        let mut axis = 0.0;
        if self.move_left {
            axis -= 1.0;
        }
        if self.move_right {
            axis += 1.0;
        }
        axis
    }
}
