//! Entity registry and factory.
//!
//! The single owner of every live entity. Storage is a hecs world; each entity
//! also carries a stable `EntityId` handed out from a monotonic counter and
//! indexed in a `BTreeMap`, so identity order equals creation order and gives
//! systems a deterministic iteration order. Removal is immediate and idempotent.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use invaders_core::components::*;
use invaders_core::enums::{EntityKind, Outcome, VerticalHeading};
use invaders_core::types::{Circle, EntityId, Position, Radius};

/// Everything needed to create one entity of a given variant.
#[derive(Debug, Clone, PartialEq)]
pub enum EntitySpec {
    Player {
        position: Position,
        radius: f64,
        speed: f64,
    },
    StandardEnemy {
        position: Position,
        radius: f64,
        speed: f64,
        point_value: u32,
        move_counter_max: Option<u32>,
    },
    ShootingEnemy {
        position: Position,
        radius: f64,
        speed: f64,
        point_value: u32,
        move_counter_max: Option<u32>,
        fire_probability: f64,
        spawned_at_secs: f64,
        window_secs: f64,
    },
    PlayerBullet {
        position: Position,
        radius: f64,
        speed: f64,
    },
    EnemyBullet {
        position: Position,
        radius: f64,
        speed: f64,
    },
    ScoreDisplay {
        position: Position,
        score: u32,
        lives: u32,
    },
    EndScreenDisplay {
        position: Position,
        outcome: Outcome,
        final_score: u32,
    },
}

impl EntitySpec {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntitySpec::Player { .. } => EntityKind::Player,
            EntitySpec::StandardEnemy { .. } => EntityKind::StandardEnemy,
            EntitySpec::ShootingEnemy { .. } => EntityKind::ShootingEnemy,
            EntitySpec::PlayerBullet { .. } => EntityKind::PlayerBullet,
            EntitySpec::EnemyBullet { .. } => EntityKind::EnemyBullet,
            EntitySpec::ScoreDisplay { .. } => EntityKind::ScoreDisplay,
            EntitySpec::EndScreenDisplay { .. } => EntityKind::EndScreenDisplay,
        }
    }
}

pub struct EntityRegistry {
    world: World,
    index: BTreeMap<EntityId, Entity>,
    next_id: u64,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            index: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a fully initialized entity and register it. Returns its identity.
    pub fn create(&mut self, spec: EntitySpec) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let kind = spec.kind();

        let entity = match spec {
            EntitySpec::Player {
                position,
                radius,
                speed,
            } => self.world.spawn((
                id,
                kind,
                position,
                Radius(radius),
                Pilot {
                    speed,
                    last_shot_secs: None,
                },
            )),
            EntitySpec::StandardEnemy {
                position,
                radius,
                speed,
                point_value,
                move_counter_max,
            } => self.world.spawn((
                id,
                kind,
                position,
                Radius(radius),
                marcher(speed, point_value, move_counter_max),
            )),
            EntitySpec::ShootingEnemy {
                position,
                radius,
                speed,
                point_value,
                move_counter_max,
                fire_probability,
                spawned_at_secs,
                window_secs,
            } => self.world.spawn((
                id,
                kind,
                position,
                Radius(radius),
                marcher(speed, point_value, move_counter_max),
                Gunner {
                    last_shot_secs: spawned_at_secs,
                    window_secs,
                    fire_probability,
                },
            )),
            EntitySpec::PlayerBullet {
                position,
                radius,
                speed,
            } => self.world.spawn((
                id,
                kind,
                position,
                Radius(radius),
                Projectile {
                    speed,
                    heading: VerticalHeading::Up,
                },
            )),
            EntitySpec::EnemyBullet {
                position,
                radius,
                speed,
            } => self.world.spawn((
                id,
                kind,
                position,
                Radius(radius),
                Projectile {
                    speed,
                    heading: VerticalHeading::Down,
                },
            )),
            EntitySpec::ScoreDisplay {
                position,
                score,
                lives,
            } => self
                .world
                .spawn((id, kind, position, Radius(0.0), ScoreBoard { score, lives })),
            EntitySpec::EndScreenDisplay {
                position,
                outcome,
                final_score,
            } => self.world.spawn((
                id,
                kind,
                position,
                Radius(0.0),
                EndScreen {
                    outcome,
                    message: outcome.message().to_string(),
                    final_score,
                },
            )),
        };

        self.index.insert(id, entity);
        id
    }

    /// Remove by identity. Removing an absent identity is a no-op.
    /// Returns whether something was removed.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.index.remove(&id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    /// Remove a batch of identities, draining the buffer.
    pub fn remove_all(&mut self, ids: &mut Vec<EntityId>) {
        for id in ids.drain(..) {
            self.remove(id);
        }
    }

    /// Drop every entity. Identities keep counting up afterwards.
    pub fn clear(&mut self) {
        self.world.clear();
        self.index.clear();
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Identities in creation order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.index.keys().copied()
    }

    /// The hecs handle behind an identity.
    pub fn handle(&self, id: EntityId) -> Option<Entity> {
        self.index.get(&id).copied()
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        let entity = self.handle(id)?;
        self.world.get::<&EntityKind>(entity).ok().map(|k| *k)
    }

    pub fn position(&self, id: EntityId) -> Option<Position> {
        let entity = self.handle(id)?;
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    /// Identities of one kind, in creation order.
    pub fn ids_of(&self, kind: EntityKind) -> Vec<EntityId> {
        self.circles_where(|k| k == kind)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, k)| **k == kind)
            .count()
    }

    /// Whether any entity of the given kind is registered.
    pub fn any_of(&self, kind: EntityKind) -> bool {
        self.world
            .query::<&EntityKind>()
            .iter()
            .any(|(_, k)| *k == kind)
    }

    pub fn enemy_count(&self) -> usize {
        self.world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, k)| k.is_enemy())
            .count()
    }

    /// Collision shapes of every entity whose kind matches, sorted by identity.
    /// A read-only index list for collision scans.
    pub fn circles_where(&self, pred: impl Fn(EntityKind) -> bool) -> Vec<(EntityId, Circle)> {
        let mut circles: Vec<(EntityId, Circle)> = self
            .world
            .query::<(&EntityId, &EntityKind, &Position, &Radius)>()
            .iter()
            .filter(|(_, (_, kind, _, _))| pred(**kind))
            .map(|(_, (id, _, pos, radius))| (*id, Circle::new(*pos, radius.0)))
            .collect();
        circles.sort_by_key(|(id, _)| *id);
        circles
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable component access for the engine's systems. Spawning or
    /// despawning through this would bypass the identity index.
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

fn marcher(speed: f64, point_value: u32, move_counter_max: Option<u32>) -> Marcher {
    Marcher {
        direction: Default::default(),
        move_counter: 0,
        move_counter_max,
        speed,
        point_value,
    }
}
