//! Bullet kinematics: a fixed vertical displacement per tick.

use invaders_core::components::Projectile;
use invaders_core::types::Position;

use crate::registry::EntityRegistry;

pub fn run(registry: &mut EntityRegistry) {
    for (_entity, (pos, projectile)) in registry
        .world_mut()
        .query_mut::<(&mut Position, &Projectile)>()
    {
        pos.y += projectile.heading.sign() * projectile.speed;
    }
}
