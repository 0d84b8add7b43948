//! Formation marching: steps every enemy with the counter-based policy.

use tracing::debug;

use invaders_core::components::Marcher;
use invaders_core::events::GameEvent;
use invaders_core::types::{EntityId, Position};
use invaders_formation::marching::{self, MarchStep, MarchTuning};

use crate::error::SimError;
use crate::registry::EntityRegistry;

/// Advance every formation member one tick.
///
/// Fails if a member has no move-counter max: the formation controller must
/// assign one before the first update.
pub fn run(
    registry: &mut EntityRegistry,
    tuning: &MarchTuning,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) -> Result<(), SimError> {
    let mut dropped = false;

    for (_entity, (id, marcher, pos)) in registry
        .world_mut()
        .query_mut::<(&EntityId, &mut Marcher, &mut Position)>()
    {
        let step = marching::step(marcher, pos, tuning)
            .map_err(|_| SimError::UnassignedMarcher { id: *id })?;
        dropped |= step == MarchStep::Dropped;
    }

    if dropped {
        debug!(tick = current_tick, "formation dropped and reversed");
        events.push(GameEvent::FormationDropped { tick: current_tick });
    }
    Ok(())
}
