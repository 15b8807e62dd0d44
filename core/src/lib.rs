#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, VariantArray};

pub use board::*;
pub use error::*;
pub use path::*;
pub use pipe::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod path;
mod pipe;
mod tile;
mod types;

/// Count type for pipes left to place.
pub type PipeCount = u32;

/// Remaining placeable pipes per [`PipeKind`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: [PipeCount; PipeKind::COUNT],
}

impl Inventory {
    pub const fn new() -> Self {
        Self {
            counts: [0; PipeKind::COUNT],
        }
    }

    /// Counts listed in [`PipeKind::VARIANTS`] order.
    pub const fn from_counts(counts: [PipeCount; PipeKind::COUNT]) -> Self {
        Self { counts }
    }

    pub const fn with(mut self, kind: PipeKind, count: PipeCount) -> Self {
        self.counts[kind.index()] = count;
        self
    }

    pub const fn count(&self, kind: PipeKind) -> PipeCount {
        self.counts[kind.index()]
    }

    pub fn set(&mut self, kind: PipeKind, count: PipeCount) {
        self.counts[kind.index()] = count;
    }

    /// Adds `delta` to the count of `kind`, never going below zero.
    pub fn adjust(&mut self, kind: PipeKind, delta: i64) {
        let count = &mut self.counts[kind.index()];
        let adjusted = i64::from(*count).saturating_add(delta);
        *count = adjusted.clamp(0, i64::from(PipeCount::MAX)) as PipeCount;
    }

    /// Takes one pipe of `kind`, returning `false` when none are left.
    pub fn take(&mut self, kind: PipeKind) -> bool {
        let count = &mut self.counts[kind.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    pub fn put_back(&mut self, kind: PipeKind) {
        let count = &mut self.counts[kind.index()];
        *count = count.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PipeKind, PipeCount)> + '_ {
        PipeKind::VARIANTS
            .iter()
            .map(|&kind| (kind, self.count(kind)))
    }
}

impl Index<PipeKind> for Inventory {
    type Output = PipeCount;

    fn index(&self, kind: PipeKind) -> &Self::Output {
        &self.counts[kind.index()]
    }
}

impl FromIterator<(PipeKind, PipeCount)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (PipeKind, PipeCount)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |inventory, (kind, count)| inventory.with(kind, count))
    }
}

/// Board description handed over by a level loader: the grid and the starting inventory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub inventory: Inventory,
    pub cells: Array2<Cell>,
}

impl BoardLayout {
    pub const fn new(inventory: Inventory, cells: Array2<Cell>) -> Self {
        Self { inventory, cells }
    }

    /// Builds a layout from row-major rows, which must all have the same length.
    pub fn from_rows(inventory: Inventory, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if rows.iter().any(|row| row.len() != col_count) {
            return Err(BoardError::InvalidBoardShape);
        }

        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((row_count, col_count), flat)
            .map_err(|_| BoardError::InvalidBoardShape)?;
        Ok(Self::new(inventory, cells))
    }

    pub fn size(&self) -> (usize, usize) {
        self.cells.dim()
    }
}
