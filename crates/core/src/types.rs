use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct RoomId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos {
    pub y: i32,
    pub x: i32,
}

impl GridPos {
    pub fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.offset();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    Start,
    Normal,
    Boss,
    /// Backfill kind for unoccupied cells, assigned by consumers rather
    /// than by generation itself.
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomSize {
    Single,
    Wide,
    Tall,
    Large,
}

impl RoomSize {
    pub const ALL: [RoomSize; 4] = [
        RoomSize::Single,
        RoomSize::Wide,
        RoomSize::Tall,
        RoomSize::Large,
    ];

    pub fn width(self) -> i32 {
        match self {
            RoomSize::Single | RoomSize::Tall => 1,
            RoomSize::Wide | RoomSize::Large => 2,
        }
    }

    pub fn height(self) -> i32 {
        match self {
            RoomSize::Single | RoomSize::Wide => 1,
            RoomSize::Tall | RoomSize::Large => 2,
        }
    }

    pub fn cell_count(self) -> usize {
        (self.width() * self.height()) as usize
    }

    pub(crate) fn index(self) -> usize {
        match self {
            RoomSize::Single => 0,
            RoomSize::Wide => 1,
            RoomSize::Tall => 2,
            RoomSize::Large => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let origin = GridPos::new(3, 3);
        assert_eq!(origin.step(Direction::Up), GridPos::new(2, 3));
        assert_eq!(origin.step(Direction::Right), GridPos::new(3, 4));
        assert_eq!(origin.step(Direction::Down), GridPos::new(4, 3));
        assert_eq!(origin.step(Direction::Left), GridPos::new(3, 2));
    }

    #[test]
    fn opposite_round_trips() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn size_footprints() {
        assert_eq!((RoomSize::Single.width(), RoomSize::Single.height()), (1, 1));
        assert_eq!((RoomSize::Wide.width(), RoomSize::Wide.height()), (2, 1));
        assert_eq!((RoomSize::Tall.width(), RoomSize::Tall.height()), (1, 2));
        assert_eq!((RoomSize::Large.width(), RoomSize::Large.height()), (2, 2));
        assert_eq!(RoomSize::Large.cell_count(), 4);
    }
}
