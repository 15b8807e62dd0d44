use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumString, IntoStaticStr, VariantArray};

use crate::*;

bitflags! {
    /// Set of cell sides, one bit per [`Direction`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        const NORTH = 1 << 0;
        const EAST = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST = 1 << 3;
    }
}

impl Sides {
    pub const fn of(direction: Direction) -> Self {
        Self::from_bits_retain(1 << direction.index())
    }

    pub const fn has(self, direction: Direction) -> bool {
        self.contains(Self::of(direction))
    }

    /// Members in clockwise order starting from north.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.has(direction))
    }

    /// Rotates every member by `steps` quarter turns.
    pub fn rotated(self, steps: i32) -> Self {
        self.directions()
            .fold(Self::empty(), |acc, direction| {
                acc | Self::of(direction.rotated(steps))
            })
    }
}

impl From<Direction> for Sides {
    fn from(direction: Direction) -> Self {
        Self::of(direction)
    }
}

/// Clockwise quarter turns applied to a pipe's canonical layout, always in `0..=3`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Orientation(u8);

impl Orientation {
    pub const fn new(turns: i32) -> Self {
        Self(turns.rem_euclid(4) as u8)
    }

    pub const fn turns(self) -> u8 {
        self.0
    }

    pub const fn rotated(self, steps: i32) -> Self {
        Self((self.0 + steps.rem_euclid(4) as u8) % 4)
    }

    /// Direction a start or end pipe with this orientation points at.
    pub const fn facing(self) -> Direction {
        Direction::from_index(self.0)
    }
}

impl From<u8> for Orientation {
    fn from(turns: u8) -> Self {
        Self(turns % 4)
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> Self {
        orientation.0
    }
}

impl From<Direction> for Orientation {
    fn from(direction: Direction) -> Self {
        Self(direction.index())
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum PipeKind {
    Straight,
    Corner,
    Cross,
    JunctionT,
    Diagonals,
    OverUnder,
}

const NONE: Sides = Sides::empty();
const N: Sides = Sides::NORTH;
const E: Sides = Sides::EAST;
const S: Sides = Sides::SOUTH;
const W: Sides = Sides::WEST;

// indexed by the entered side at orientation 0: N, E, S, W
const STRAIGHT: [Sides; 4] = [NONE, W, NONE, E];
const CORNER: [Sides; 4] = [E, N, NONE, NONE];
const CROSS: [Sides; 4] = [
    E.union(S).union(W),
    N.union(S).union(W),
    N.union(E).union(W),
    N.union(E).union(S),
];
const JUNCTION_T: [Sides; 4] = [NONE, S.union(W), E.union(W), E.union(S)];
const DIAGONALS: [Sides; 4] = [E, N, W, S];
const OVER_UNDER: [Sides; 4] = [S, W, N, E];

impl PipeKind {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Connectivity at orientation 0, indexed by entered side.
    pub const fn canonical(self) -> &'static [Sides; 4] {
        match self {
            Self::Straight => &STRAIGHT,
            Self::Corner => &CORNER,
            Self::Cross => &CROSS,
            Self::JunctionT => &JUNCTION_T,
            Self::Diagonals => &DIAGONALS,
            Self::OverUnder => &OVER_UNDER,
        }
    }

    /// Sides reachable after entering through `side` when rotated to `orientation`.
    pub fn connected(self, orientation: Orientation, side: Direction) -> Sides {
        let turns = i32::from(orientation.turns());
        let canonical_side = side.rotated(-turns);
        self.canonical()[usize::from(canonical_side.index())].rotated(turns)
    }
}

/// A pipe sitting on the board, either from the board description or placed by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedPipe {
    pub kind: PipeKind,
    pub orientation: Orientation,
    pub selectable: bool,
}

impl PlacedPipe {
    pub const fn new(kind: PipeKind, orientation: Orientation) -> Self {
        Self {
            kind,
            orientation,
            selectable: true,
        }
    }

    /// A pipe that is part of the puzzle itself and cannot be rotated or removed.
    pub const fn fixed(kind: PipeKind, orientation: Orientation) -> Self {
        Self {
            kind,
            orientation,
            selectable: false,
        }
    }

    pub fn connected(&self, side: Direction) -> Sides {
        self.kind.connected(self.orientation, side)
    }

    /// Rotates clockwise by `steps` (negative is anticlockwise). Does nothing when not selectable.
    pub fn rotate(&mut self, steps: i32) {
        if self.selectable {
            self.orientation = self.orientation.rotated(steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::str::FromStr;

    #[test]
    fn rotated_lookup_matches_canonical_table() {
        for &kind in PipeKind::VARIANTS {
            for turns in 0..4 {
                let orientation = Orientation::new(turns);
                for side in Direction::ALL {
                    let canonical = kind.connected(Orientation::default(), side.rotated(-turns));
                    assert_eq!(
                        kind.connected(orientation, side),
                        canonical.rotated(turns),
                        "{kind} at {turns} entered from {side:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn connections_are_symmetric() {
        for &kind in PipeKind::VARIANTS {
            for turns in 0..4 {
                let orientation = Orientation::new(turns);
                for side in Direction::ALL {
                    for out in kind.connected(orientation, side).directions() {
                        assert!(
                            kind.connected(orientation, out).has(side),
                            "{kind} at {turns}: {side:?} -> {out:?} is one way"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn straight_turns_from_horizontal_to_vertical() {
        let horizontal = Orientation::new(0);
        let vertical = Orientation::new(1);

        assert_eq!(PipeKind::Straight.connected(horizontal, Direction::West), Sides::EAST);
        assert_eq!(PipeKind::Straight.connected(horizontal, Direction::North), Sides::empty());
        assert_eq!(PipeKind::Straight.connected(vertical, Direction::North), Sides::SOUTH);
        assert_eq!(PipeKind::Straight.connected(vertical, Direction::West), Sides::empty());
    }

    #[test]
    fn corner_follows_rotation() {
        // canonical corner joins north and east; one turn joins east and south
        let orientation = Orientation::new(1);
        assert_eq!(PipeKind::Corner.connected(orientation, Direction::East), Sides::SOUTH);
        assert_eq!(PipeKind::Corner.connected(orientation, Direction::South), Sides::EAST);
        assert_eq!(PipeKind::Corner.connected(orientation, Direction::North), Sides::empty());
    }

    #[test]
    fn junction_t_has_a_closed_side() {
        let orientation = Orientation::new(2);
        assert_eq!(PipeKind::JunctionT.connected(orientation, Direction::South), Sides::empty());
        assert_eq!(
            PipeKind::JunctionT.connected(orientation, Direction::North),
            Sides::EAST | Sides::WEST
        );
    }

    #[test]
    fn cross_connects_every_other_side() {
        for side in Direction::ALL {
            assert_eq!(
                PipeKind::Cross.connected(Orientation::new(3), side),
                Sides::all() - Sides::of(side)
            );
        }
    }

    #[test]
    fn four_rotations_restore_orientation() {
        for steps in [-5, -1, 1, 2, 3, 7] {
            let mut pipe = PlacedPipe::new(PipeKind::Corner, Orientation::new(2));
            for _ in 0..4 {
                pipe.rotate(steps);
            }
            assert_eq!(pipe.orientation, Orientation::new(2));
        }
    }

    #[test]
    fn fixed_pipe_ignores_rotation() {
        let mut pipe = PlacedPipe::fixed(PipeKind::Straight, Orientation::new(1));
        pipe.rotate(1);
        assert_eq!(pipe.orientation.turns(), 1);
    }

    #[test]
    fn orientation_normalizes_any_integer() {
        assert_eq!(Orientation::new(-1).turns(), 3);
        assert_eq!(Orientation::new(9).turns(), 1);
        assert_eq!(Orientation::from(6u8).turns(), 2);
        assert_eq!(Orientation::new(3).rotated(-7).turns(), 0);
        assert_eq!(Orientation::new(1).facing(), Direction::East);
    }

    #[test]
    fn kind_names_are_kebab_case() {
        assert_eq!(PipeKind::JunctionT.to_string(), "junction-t");
        let name: &'static str = PipeKind::OverUnder.into();
        assert_eq!(name, "over-under");
        assert_eq!(PipeKind::from_str("diagonals"), Ok(PipeKind::Diagonals));
        assert!(PipeKind::from_str("elbow").is_err());
        assert_eq!(PipeKind::COUNT, 6);
    }
}
