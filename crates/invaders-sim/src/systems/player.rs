//! Player control: applies the input snapshot to the player entity.

use tracing::trace;

use invaders_core::components::Pilot;
use invaders_core::config::GameConfig;
use invaders_core::enums::EntityKind;
use invaders_core::events::GameEvent;
use invaders_core::geometry::clamp;
use invaders_core::input::InputState;
use invaders_core::types::{Position, Radius};

use crate::registry::EntityRegistry;
use crate::world_setup;

/// Move the player, then honor a fire request if no player bullet is on
/// screen and the recoil window has passed.
pub fn run(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    input: &InputState,
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) {
    let bullet_on_screen = registry.any_of(EntityKind::PlayerBullet);
    let min_x_buffer = config.window.left_buffer;
    let max_x_buffer = config.window.width - config.window.right_buffer;

    let mut shot_from: Option<Position> = None;

    for (_entity, (pos, radius, pilot)) in registry
        .world_mut()
        .query_mut::<(&mut Position, &Radius, &mut Pilot)>()
    {
        let dx = input.horizontal_axis() * pilot.speed;
        pos.x = clamp(pos.x + dx, min_x_buffer + radius.0, max_x_buffer - radius.0);

        if input.fire && !bullet_on_screen && recoil_elapsed(pilot, config, now_secs) {
            pilot.last_shot_secs = Some(now_secs);
            shot_from = Some(*pos);
        }
    }

    if let Some(origin) = shot_from {
        let bullet = world_setup::spawn_player_bullet(registry, config, origin);
        trace!(%bullet, x = origin.x, "player fired");
        events.push(GameEvent::PlayerFired {
            bullet,
            position: origin,
        });
    }
}

fn recoil_elapsed(pilot: &Pilot, config: &GameConfig, now_secs: f64) -> bool {
    match pilot.last_shot_secs {
        None => true,
        Some(last) => now_secs - last > config.player.bullet.recoil,
    }
}
