//! Independent correctness checks run against a produced floor plan.
//!
//! The checks re-derive everything from the grid and room records rather
//! than trusting generator bookkeeping, perform no mutation, and are safe
//! to run repeatedly.

use crate::types::{Direction, GridPos, RoomId, RoomKind};

use super::model::FloorPlan;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub grid_consistency: bool,
    pub single_boss: bool,
    pub boss_connected: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.grid_consistency && self.single_boss && self.boss_connected
    }
}

pub fn validate_floor_plan(plan: &FloorPlan) -> ValidationReport {
    ValidationReport {
        grid_consistency: grid_matches_room_list(plan),
        single_boss: has_single_boss(plan),
        boss_connected: boss_room_connected(plan),
    }
}

/// Every non-empty grid cell must reference a tracked room whose footprint
/// covers that cell, every tracked room must appear in the grid, and the
/// unique references found by scanning must tally with the room list.
pub fn grid_matches_room_list(plan: &FloorPlan) -> bool {
    let mut seen: Vec<RoomId> = Vec::new();
    for y in 0..plan.height as i32 {
        for x in 0..plan.width as i32 {
            let pos = GridPos::new(y, x);
            let Some(id) = plan.room_id_at(pos) else {
                continue;
            };
            let Some(room) = plan.rooms.get(id) else {
                return false;
            };
            if !room.occupies(pos) {
                return false;
            }
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
    }

    if seen.len() != plan.rooms.len() {
        return false;
    }

    plan.rooms
        .iter()
        .all(|(id, room)| room.cell_positions().all(|pos| plan.room_id_at(pos) == Some(id)))
}

pub fn has_single_boss(plan: &FloorPlan) -> bool {
    plan.rooms.values().filter(|room| room.kind == RoomKind::Boss).count() == 1
}

/// A boss room must share at least one orthogonal cell border with another
/// room, whatever its footprint. The walk covers the room's actual
/// perimeter, so non-square boss rooms validate the same way.
pub fn boss_room_connected(plan: &FloorPlan) -> bool {
    plan.rooms.iter().filter(|(_, room)| room.kind == RoomKind::Boss).all(|(id, room)| {
        room.cell_positions().any(|cell| {
            Direction::ALL.iter().any(|&direction| {
                matches!(plan.room_id_at(cell.step(direction)), Some(other) if other != id)
            })
        })
    })
}
