//! Collision resolution.
//!
//! Both passes scan read-only index lists built from the registry in identity
//! order, record removals in the despawn buffer, and apply them after the
//! scan. An entity removed earlier in a pass can neither be removed again nor
//! score twice.

use tracing::debug;

use invaders_core::components::Marcher;
use invaders_core::enums::EntityKind;
use invaders_core::events::GameEvent;
use invaders_core::geometry::circles_overlap;
use invaders_core::types::EntityId;

use crate::match_state::MatchState;
use crate::registry::EntityRegistry;

/// Player bullets against enemies. The first overlapping (enemy, bullet) pair
/// in identity order consumes the bullet and awards the enemy's points.
pub fn player_bullets_vs_enemies(
    registry: &mut EntityRegistry,
    match_state: &mut MatchState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<EntityId>,
) {
    despawn_buffer.clear();

    let enemies = registry.circles_where(EntityKind::is_enemy);
    let bullets = registry.circles_where(|k| k == EntityKind::PlayerBullet);
    if bullets.is_empty() {
        return;
    }
    let mut consumed = vec![false; bullets.len()];

    for (enemy, enemy_circle) in &enemies {
        let hit = bullets
            .iter()
            .enumerate()
            .find(|(i, (_, bullet_circle))| {
                !consumed[*i] && circles_overlap(enemy_circle, bullet_circle)
            })
            .map(|(i, (bullet, _))| (i, *bullet));

        let Some((i, bullet)) = hit else {
            continue;
        };
        consumed[i] = true;

        let points = point_value(registry, *enemy);
        match_state.register_kill(points);
        debug!(%enemy, %bullet, points, score = match_state.score(), "enemy destroyed");
        events.push(GameEvent::EnemyDestroyed {
            enemy: *enemy,
            points,
        });
        despawn_buffer.push(*enemy);
        despawn_buffer.push(bullet);
    }

    registry.remove_all(despawn_buffer);
}

/// Enemy bullets against the player. Every overlapping bullet is removed and
/// costs a life plus `penalty` points.
pub fn enemy_bullets_vs_player(
    registry: &mut EntityRegistry,
    match_state: &mut MatchState,
    penalty: u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<EntityId>,
) {
    despawn_buffer.clear();

    let Some((_, player_circle)) = registry
        .circles_where(|k| k == EntityKind::Player)
        .into_iter()
        .next()
    else {
        return;
    };

    for (bullet, bullet_circle) in registry.circles_where(|k| k == EntityKind::EnemyBullet) {
        if !circles_overlap(&player_circle, &bullet_circle) {
            continue;
        }
        let lives_remaining = match_state.register_hit(penalty);
        debug!(%bullet, lives_remaining, score = match_state.score(), "player hit");
        events.push(GameEvent::PlayerHit { lives_remaining });
        despawn_buffer.push(bullet);
    }

    registry.remove_all(despawn_buffer);
}

fn point_value(registry: &EntityRegistry, enemy: EntityId) -> u32 {
    registry
        .handle(enemy)
        .and_then(|entity| registry.world().get::<&Marcher>(entity).ok().map(|m| m.point_value))
        .unwrap_or(0)
}
