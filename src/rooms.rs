use log::trace;

use crate::config::ConstraintRelaxations;
use crate::data::{Classroom, ClassroomId};
use crate::state::RoomUsage;

/// A classroom picked for a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomChoice {
    pub classroom_id: ClassroomId,
    /// Seats requested exceed the room's capacity.
    pub overflow: bool,
}

/// Picks a classroom for `required` seats, or `None` when nothing fits.
///
/// Ties always go to the earliest room in `classrooms`.
pub fn select_classroom(
    classrooms: &[Classroom],
    required: u32,
    usage: &RoomUsage,
    minimize_rooms_used: bool,
    relaxations: &ConstraintRelaxations,
) -> Option<RoomChoice> {
    let fits = |room: &&Classroom| room.capacity >= required;

    if minimize_rooms_used {
        // reverse so max_by_key lands on the first of equal maxima
        let reused = classrooms
            .iter()
            .filter(fits)
            .filter(|room| usage.get(room.id) > 0)
            .rev()
            .max_by_key(|room| usage.get(room.id));
        if let Some(room) = reused {
            return Some(RoomChoice {
                classroom_id: room.id,
                overflow: false,
            });
        }
    }

    if let Some(room) = classrooms.iter().filter(fits).min_by_key(|room| room.capacity) {
        return Some(RoomChoice {
            classroom_id: room.id,
            overflow: false,
        });
    }

    if !relaxations.allow_capacity_overflow {
        return None;
    }

    let largest = classrooms.iter().rev().max_by_key(|room| room.capacity)?;
    let overflow = overflow_percent(required, largest.capacity);
    if overflow <= relaxations.max_capacity_overflow_percent {
        trace!(
            "Room {} overflows by {:.1}% for {} seats.",
            largest.id, overflow, required
        );
        Some(RoomChoice {
            classroom_id: largest.id,
            overflow: true,
        })
    } else {
        None
    }
}

/// `(required - capacity) / capacity * 100`; infinite for an empty room.
pub fn overflow_percent(required: u32, capacity: u32) -> f64 {
    if capacity == 0 {
        return f64::INFINITY;
    }
    (f64::from(required) - f64::from(capacity)) / f64::from(capacity) * 100.0
}
