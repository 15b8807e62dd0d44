use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Two-dimensional grid position `(row, col)`. The top left corner is `(0, 0)`.
pub type Position = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Compass side of a cell, numbered clockwise from north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Maps an index to a direction, wrapping modulo 4.
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn opposite(self) -> Self {
        self.rotated(2)
    }

    /// Rotates by `steps` quarter turns, positive is clockwise.
    pub const fn rotated(self, steps: i32) -> Self {
        let turns = steps.rem_euclid(4) as u8;
        Self::from_index(self.index() + turns)
    }

    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    const fn delta(self) -> (i8, i8) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }
}

/// Steps one cell from `position` towards `direction`, returning a value only when it remains in bounds.
pub fn step(position: Position, direction: Direction, bounds: Position) -> Option<Position> {
    apply_delta(position, direction.delta(), bounds)
}

fn apply_delta(position: Position, delta: (i8, i8), bounds: Position) -> Option<Position> {
    let (row, col) = position;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Orthogonal neighbors of a position, paired with the direction taken to reach them.
#[derive(Debug)]
pub struct NeighborIter {
    center: Position,
    bounds: Position,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Position, bounds: Position) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = (Direction, Position);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(position) = step(self.center, direction, self.bounds) {
                return Some((direction, position));
            }
        }
    }
}
