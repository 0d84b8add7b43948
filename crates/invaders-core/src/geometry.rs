//! Pure geometry helpers: clamping, circle overlap and extremum lookup.

use thiserror::Error;

use crate::enums::HorizontalDirection;
use crate::types::{Circle, Position};

/// `lead_entity` was asked for the extremum of an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick a lead entity from an empty set")]
pub struct EmptySetError;

/// Bound `value` to `[min, max]`. Callers guarantee `min <= max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// True iff the distance between centers is at most the sum of radii.
/// Touching circles collide.
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    a.center.distance_to(&b.center) <= a.radius + b.radius
}

/// The item furthest along `direction`: maximum x when marching right,
/// minimum x when marching left. Ties go to the first item seen.
pub fn lead_entity<T>(
    direction: HorizontalDirection,
    entities: impl IntoIterator<Item = (T, Position)>,
) -> Result<T, EmptySetError> {
    let sign = direction.sign();
    entities
        .into_iter()
        .fold(None, |best: Option<(T, f64)>, (item, pos)| match best {
            Some((_, best_x)) if pos.x * sign <= best_x * sign => best,
            _ => Some((item, pos.x)),
        })
        .map(|(item, _)| item)
        .ok_or(EmptySetError)
}
