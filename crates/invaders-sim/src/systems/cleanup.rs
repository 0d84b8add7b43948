//! Cleanup system: removes bullets that left the playfield.

use invaders_core::components::Projectile;
use invaders_core::config::Playfield;
use invaders_core::types::{EntityId, Position};

use crate::registry::EntityRegistry;

/// Remove every bullet outside `field`. Uses the caller's buffer to batch
/// removals after the scan.
pub fn run(registry: &mut EntityRegistry, field: &Playfield, despawn_buffer: &mut Vec<EntityId>) {
    despawn_buffer.clear();

    for (_entity, (id, pos, _projectile)) in registry
        .world()
        .query::<(&EntityId, &Position, &Projectile)>()
        .iter()
    {
        if is_outside(pos, field) {
            despawn_buffer.push(*id);
        }
    }

    registry.remove_all(despawn_buffer);
}

pub fn is_outside(pos: &Position, field: &Playfield) -> bool {
    pos.y > field.max_y || pos.y < field.min_y || pos.x > field.max_x || pos.x < field.min_x
}
