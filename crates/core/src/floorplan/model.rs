//! Public data models for generated floor plans and their rooms.

use slotmap::SlotMap;
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{GridPos, RoomId, RoomKind, RoomSize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub size: RoomSize,
    pub position: GridPos,
    pub parent: Option<RoomId>,
    pub kind: RoomKind,
}

impl Room {
    pub fn cell_positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        let origin = self.position;
        let width = self.size.width();
        let height = self.size.height();
        (0..height)
            .flat_map(move |dy| (0..width).map(move |dx| GridPos::new(origin.y + dy, origin.x + dx)))
    }

    pub fn occupies(&self, pos: GridPos) -> bool {
        pos.y >= self.position.y
            && pos.y < self.position.y + self.size.height()
            && pos.x >= self.position.x
            && pos.x < self.position.x + self.size.width()
    }
}

#[derive(Clone)]
pub struct FloorPlan {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Option<RoomId>>,
    pub rooms: SlotMap<RoomId, Room>,
    pub dead_ends: Vec<RoomId>,
    pub start_room: RoomId,
    pub boss_room: Option<RoomId>,
}

impl FloorPlan {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            rooms: SlotMap::with_key(),
            dead_ends: Vec::new(),
            start_room: RoomId::default(),
            boss_room: None,
        }
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    pub fn room_id_at(&self, pos: GridPos) -> Option<RoomId> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub fn is_cell_free(&self, pos: GridPos) -> bool {
        self.in_bounds(pos) && self.cells[self.index(pos)].is_none()
    }

    /// A footprint is placeable when every cell it covers is in bounds
    /// and unclaimed.
    pub fn can_place(&self, size: RoomSize, position: GridPos) -> bool {
        (0..size.height()).all(|dy| {
            (0..size.width())
                .all(|dx| self.is_cell_free(GridPos::new(position.y + dy, position.x + dx)))
        })
    }

    /// Inserts a room and claims its grid cells. Callers check `can_place`
    /// first; claiming an already-claimed cell is a bug in the caller.
    pub fn insert_room(
        &mut self,
        size: RoomSize,
        position: GridPos,
        parent: Option<RoomId>,
        kind: RoomKind,
    ) -> RoomId {
        let id = self.rooms.insert(Room { id: RoomId::default(), size, position, parent, kind });
        self.rooms[id].id = id;
        let claimed: Vec<GridPos> = self.rooms[id].cell_positions().collect();
        for pos in claimed {
            let idx = self.index(pos);
            debug_assert!(self.cells[idx].is_none(), "cell {pos:?} claimed twice");
            self.cells[idx] = Some(id);
        }
        id
    }

    /// Number of parent links between a room and the start room.
    pub fn distance_from_start(&self, id: RoomId) -> u32 {
        let mut distance = 0;
        let mut cursor = id;
        while let Some(parent) = self.rooms[cursor].parent {
            distance += 1;
            cursor = parent;
        }
        distance
    }

    /// Unique rooms reachable from the dead-end set by walking parent
    /// links toward the start room, in discovery order. Generation only
    /// records childless rooms as dead ends, so on generated plans this
    /// walk visits every room.
    pub fn rooms_via_parents(&self) -> Vec<RoomId> {
        let mut visited: Vec<RoomId> = Vec::new();
        for &dead_end in &self.dead_ends {
            let mut cursor = Some(dead_end);
            while let Some(id) = cursor {
                if visited.contains(&id) {
                    break;
                }
                visited.push(id);
                cursor = self.rooms[id].parent;
            }
        }
        visited
    }

    pub fn mark_boss(&mut self, id: RoomId) {
        self.rooms[id].kind = RoomKind::Boss;
        self.boss_room = Some(id);
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());

        // Room identity is expressed as first-encounter ordinals over a
        // row-major cell scan so two plans with identical geometry encode
        // identically regardless of slotmap key history.
        let mut order: Vec<RoomId> = Vec::new();
        for cell in &self.cells {
            match cell {
                None => bytes.extend(u16::MAX.to_le_bytes()),
                Some(id) => bytes.extend(encounter_ordinal(&mut order, *id).to_le_bytes()),
            }
        }

        // Every referenced room claims at least one cell, so the scan above
        // has already assigned ordinals to all of them.
        for slot in 0..order.len() {
            let room = &self.rooms[order[slot]];
            bytes.push(room.size.index() as u8);
            bytes.push(match room.kind {
                RoomKind::Start => 0,
                RoomKind::Normal => 1,
                RoomKind::Boss => 2,
                RoomKind::Empty => 3,
            });
            match room.parent {
                None => bytes.extend(u16::MAX.to_le_bytes()),
                Some(parent) => bytes.extend(encounter_ordinal(&mut order, parent).to_le_bytes()),
            }
        }

        bytes.extend((self.dead_ends.len() as u32).to_le_bytes());
        for &id in &self.dead_ends {
            bytes.extend(encounter_ordinal(&mut order, id).to_le_bytes());
        }

        bytes.extend(encounter_ordinal(&mut order, self.start_room).to_le_bytes());
        match self.boss_room {
            None => bytes.extend(u16::MAX.to_le_bytes()),
            Some(id) => bytes.extend(encounter_ordinal(&mut order, id).to_le_bytes()),
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn index(&self, pos: GridPos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

fn encounter_ordinal(order: &mut Vec<RoomId>, id: RoomId) -> u16 {
    if let Some(slot) = order.iter().position(|&known| known == id) {
        return slot as u16;
    }
    order.push(id);
    (order.len() - 1) as u16
}
