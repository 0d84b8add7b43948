//! Input collaborators: produce one `InputState` per tick.

use std::collections::VecDeque;

use invaders_core::enums::{EntityKind, HorizontalDirection};
use invaders_core::geometry::lead_entity;
use invaders_core::input::InputState;
use invaders_core::state::GameStateSnapshot;

/// Supplies the input for the next tick, given the last rendered snapshot.
pub trait InputSource: Send {
    fn next_input(&mut self, last: Option<&GameStateSnapshot>) -> InputState;
}

/// Replays a fixed sequence, then stays idle.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputState>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self, _last: Option<&GameStateSnapshot>) -> InputState {
        self.frames.pop_front().unwrap_or(InputState::IDLE)
    }
}

/// A simple bot: chases the leading enemy of the lowest formation row in the
/// direction the swarm is marching, firing whenever it can.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    last_swarm_x: Option<f64>,
    direction: HorizontalDirection,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target x for the player, if any enemy is left.
    fn target_x(&mut self, snapshot: &GameStateSnapshot) -> Option<f64> {
        let enemies: Vec<_> = snapshot
            .entities
            .iter()
            .filter(|e| e.kind.is_enemy())
            .collect();
        if enemies.is_empty() {
            self.last_swarm_x = None;
            return None;
        }

        let swarm_x = enemies.iter().map(|e| e.position.x).sum::<f64>() / enemies.len() as f64;
        if let Some(last) = self.last_swarm_x {
            if swarm_x > last {
                self.direction = HorizontalDirection::Right;
            } else if swarm_x < last {
                self.direction = HorizontalDirection::Left;
            }
        }
        self.last_swarm_x = Some(swarm_x);

        let lowest_y = enemies
            .iter()
            .map(|e| e.position.y)
            .fold(f64::NEG_INFINITY, f64::max);
        let bottom_row = enemies
            .iter()
            .filter(|e| e.position.y == lowest_y)
            .map(|e| (e.position.x, e.position));

        lead_entity(self.direction, bottom_row).ok()
    }
}

impl InputSource for Autopilot {
    fn next_input(&mut self, last: Option<&GameStateSnapshot>) -> InputState {
        let Some(snapshot) = last else {
            return InputState::fire();
        };
        let Some(player) = snapshot.entities_of(EntityKind::Player).next() else {
            return InputState::IDLE;
        };
        let Some(target) = self.target_x(snapshot) else {
            return InputState::IDLE;
        };

        let dx = target - player.position.x;
        let deadband = player.radius / 2.0;
        InputState {
            move_left: dx < -deadband,
            move_right: dx > deadband,
            fire: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::state::EntityView;
    use invaders_core::types::{EntityId, Position};

    fn view(id: u64, kind: EntityKind, x: f64, y: f64) -> EntityView {
        EntityView {
            id: EntityId(id),
            kind,
            position: Position::new(x, y),
            radius: 10.0,
            display: None,
        }
    }

    fn snapshot(entities: Vec<EntityView>) -> GameStateSnapshot {
        GameStateSnapshot {
            entities,
            ..Default::default()
        }
    }

    #[test]
    fn test_scripted_input_replays_then_idles() {
        let mut source = ScriptedInput::new([InputState::fire(), InputState::IDLE]);
        assert_eq!(source.next_input(None), InputState::fire());
        assert_eq!(source.next_input(None), InputState::IDLE);
        assert_eq!(source.next_input(None), InputState::IDLE);
    }

    #[test]
    fn test_autopilot_chases_bottom_row_lead() {
        let mut bot = Autopilot::new();
        let frame = |offset: f64| {
            snapshot(vec![
                view(1, EntityKind::Player, 300.0, 570.0),
                view(2, EntityKind::ShootingEnemy, 100.0 + offset, 75.0),
                view(3, EntityKind::StandardEnemy, 100.0 + offset, 135.0),
                view(4, EntityKind::StandardEnemy, 160.0 + offset, 135.0),
            ])
        };

        // Swarm moving right: lead of the bottom row is the right-most one at 160+.
        bot.next_input(Some(&frame(0.0)));
        let input = bot.next_input(Some(&frame(2.0)));
        assert!(input.move_left);
        assert!(!input.move_right);
        assert!(input.fire);

        // Swarm moving left: the left-most member leads.
        bot.next_input(Some(&frame(400.0)));
        let input = bot.next_input(Some(&frame(398.0)));
        assert!(input.move_right, "target 498 is right of the player");
    }

    #[test]
    fn test_autopilot_idles_without_enemies() {
        let mut bot = Autopilot::new();
        let frame = snapshot(vec![view(1, EntityKind::Player, 300.0, 570.0)]);
        assert_eq!(bot.next_input(Some(&frame)), InputState::IDLE);
    }
}
