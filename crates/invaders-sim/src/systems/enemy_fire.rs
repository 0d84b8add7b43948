//! Autonomous enemy fire.
//!
//! Each shooting enemy rolls once per recoil window. The window restarts
//! whether or not it fired, with fresh jitter. Shooters are visited in
//! identity order so a fixed seed gives a fixed sequence of rolls.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use invaders_core::components::Gunner;
use invaders_core::config::GameConfig;
use invaders_core::enums::EntityKind;
use invaders_core::events::GameEvent;
use invaders_core::types::{EntityId, Position};

use crate::registry::EntityRegistry;
use crate::world_setup;

pub fn run(
    registry: &mut EntityRegistry,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) {
    let mut shots: Vec<(EntityId, Position)> = Vec::new();

    for shooter in registry.ids_of(EntityKind::ShootingEnemy) {
        let Some(entity) = registry.handle(shooter) else {
            continue;
        };
        let world = registry.world();
        let (Ok(mut gunner), Ok(pos)) = (
            world.get::<&mut Gunner>(entity),
            world.get::<&Position>(entity),
        ) else {
            continue;
        };

        if now_secs - gunner.last_shot_secs <= gunner.window_secs {
            continue;
        }
        if rng.gen::<f64>() < gunner.fire_probability {
            shots.push((shooter, *pos));
        }
        gunner.last_shot_secs = now_secs;
        gunner.window_secs = world_setup::recoil_window(config, rng);
    }

    for (shooter, origin) in shots {
        let bullet = world_setup::spawn_enemy_bullet(registry, config, origin);
        trace!(%shooter, %bullet, "enemy fired");
        events.push(GameEvent::EnemyFired { shooter, bullet });
    }
}
