use serde::{Deserialize, Serialize};

use crate::*;

/// Contents of one board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty walkable space. Pipes can be placed here when selectable.
    Tile { selectable: bool },
    /// Empty space that never receives a pipe.
    Locked,
    Pipe(PlacedPipe),
    /// Fixed entry, emits through the side it faces.
    Start(Orientation),
    /// Fixed exit, accepts flow through the side opposite the one it faces.
    End(Orientation),
}

/// Variant tag of a [`Cell`], used to gate board mutations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Tile,
    Locked,
    Pipe,
    Start,
    End,
}

impl Cell {
    pub const fn tile() -> Self {
        Self::Tile { selectable: true }
    }

    pub const fn kind(&self) -> CellKind {
        match self {
            Self::Tile { .. } => CellKind::Tile,
            Self::Locked => CellKind::Locked,
            Self::Pipe(_) => CellKind::Pipe,
            Self::Start(_) => CellKind::Start,
            Self::End(_) => CellKind::End,
        }
    }

    pub const fn is_selectable(&self) -> bool {
        match self {
            Self::Tile { selectable } => *selectable,
            Self::Pipe(pipe) => pipe.selectable,
            Self::Locked | Self::Start(_) | Self::End(_) => false,
        }
    }

    pub const fn has_pipe(&self) -> bool {
        matches!(self, Self::Pipe(_) | Self::Start(_) | Self::End(_))
    }

    pub const fn pipe(&self) -> Option<&PlacedPipe> {
        match self {
            Self::Pipe(pipe) => Some(pipe),
            _ => None,
        }
    }

    /// The only side through which an end pipe can be entered.
    pub const fn accepted_side(&self) -> Option<Direction> {
        match self {
            Self::End(orientation) => Some(orientation.facing().opposite()),
            _ => None,
        }
    }

    /// Sides this cell lets flow out of after being entered through `incoming`.
    ///
    /// Start and end pipes have a single fixed side and ignore `incoming`.
    pub fn connected(&self, incoming: Option<Direction>) -> Sides {
        match self {
            Self::Tile { .. } | Self::Locked => Sides::empty(),
            Self::Pipe(pipe) => incoming.map_or(Sides::empty(), |side| pipe.connected(side)),
            Self::Start(orientation) => Sides::of(orientation.facing()),
            Self::End(orientation) => Sides::of(orientation.facing().opposite()),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::tile()
    }
}

impl From<PlacedPipe> for Cell {
    fn from(pipe: PlacedPipe) -> Self {
        Self::Pipe(pipe)
    }
}
