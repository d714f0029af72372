//! Corridor derivation from raw grid adjacency.
//!
//! Playable connectivity is a property of the grid, not of the parent
//! tree: two rooms are corridor-connectable wherever their cells touch
//! orthogonally, parent link or not. Consumers receive one opening per
//! adjacent cell pair and place doors or passages from it.

use crate::types::{Direction, GridPos, RoomId};

use super::model::FloorPlan;

/// One corridor-connectable border between two rooms: the cell on the
/// `room` side, the direction across the border, and the room on the far
/// side. The mirrored opening is obtained by stepping the cell and taking
/// the opposite direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorridorOpening {
    pub room: RoomId,
    pub cell: GridPos,
    pub direction: Direction,
    pub neighbour: RoomId,
}

/// Scans Right and Down only, so each adjacent cell pair is reported
/// exactly once.
pub fn corridor_openings(plan: &FloorPlan) -> Vec<CorridorOpening> {
    let mut openings = Vec::new();
    for y in 0..plan.height as i32 {
        for x in 0..plan.width as i32 {
            let cell = GridPos::new(y, x);
            let Some(room) = plan.room_id_at(cell) else {
                continue;
            };
            for direction in [Direction::Right, Direction::Down] {
                let Some(neighbour) = plan.room_id_at(cell.step(direction)) else {
                    continue;
                };
                if neighbour != room {
                    openings.push(CorridorOpening { room, cell, direction, neighbour });
                }
            }
        }
    }
    openings
}

/// Grid cells no room claims, in row-major order. Consumers backfill these
/// with empty rooms before rendering.
pub fn unoccupied_cells(plan: &FloorPlan) -> Vec<GridPos> {
    let mut cells = Vec::new();
    for y in 0..plan.height as i32 {
        for x in 0..plan.width as i32 {
            let pos = GridPos::new(y, x);
            if plan.room_id_at(pos).is_none() {
                cells.push(pos);
            }
        }
    }
    cells
}
