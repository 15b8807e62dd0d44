use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The game board: a rectangular grid of [`Cell`]s together with the pipes left to place.
///
/// A board always holds exactly one start pipe and one end pipe; [`Board::new`] refuses layouts
/// that do not. Player actions ([`place`](Board::place), [`remove`](Board::remove) and
/// [`rotate`](Board::rotate)) never fail loudly: a request that breaks a rule leaves the board as
/// it was.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardLayout", into = "BoardLayout")]
pub struct Board {
    cells: Array2<Cell>,
    inventory: Inventory,
    start: Position,
    end: Position,
}

impl Board {
    pub fn new(layout: BoardLayout) -> Result<Self> {
        let BoardLayout { inventory, cells } = layout;

        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if Coord::try_from(rows).is_err() || Coord::try_from(cols).is_err() {
            return Err(BoardError::BoardTooLarge);
        }

        let mut start = None;
        let mut end = None;
        for ((row, col), cell) in cells.indexed_iter() {
            // bounds checked above
            let position = (row as Coord, col as Coord);
            match cell.kind() {
                CellKind::Start => {
                    if start.replace(position).is_some() {
                        return Err(BoardError::MultipleStarts);
                    }
                }
                CellKind::End => {
                    if end.replace(position).is_some() {
                        return Err(BoardError::MultipleEnds);
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            cells,
            inventory,
            start: start.ok_or(BoardError::MissingStart)?,
            end: end.ok_or(BoardError::MissingEnd)?,
        })
    }

    /// Board dimensions as `(rows, cols)`.
    pub fn size(&self) -> Position {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, position: Position) -> bool {
        let (rows, cols) = self.size();
        position.0 < rows && position.1 < cols
    }

    pub fn validate_position(&self, position: Position) -> Result<Position> {
        if self.contains(position) {
            Ok(position)
        } else {
            Err(BoardError::InvalidCoords)
        }
    }

    /// The cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the board. Use [`Board::get`] when that is not already known.
    pub fn cell_at(&self, position: Position) -> &Cell {
        &self.cells[position.to_nd_index()]
    }

    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.cells.get(position.to_nd_index())
    }

    /// The cell at `position` if it carries a pipe (placed, start or end).
    pub fn pipe_at(&self, position: Position) -> Option<&Cell> {
        self.get(position).filter(|cell| cell.has_pipe())
    }

    pub fn start_position(&self) -> Position {
        self.start
    }

    pub fn end_position(&self) -> Position {
        self.end
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    /// Places a new selectable pipe from the inventory onto an empty, selectable tile.
    pub fn place(&mut self, kind: PipeKind, orientation: Orientation, position: Position) {
        let Some(cell) = self.get(position) else {
            log::debug!("Ignored placing {kind} outside the board at {position:?}");
            return;
        };

        if !matches!(cell, Cell::Tile { selectable: true }) {
            log::debug!("Ignored placing {kind} on {:?} at {position:?}", cell.kind());
            return;
        }

        if !self.inventory.take(kind) {
            log::debug!("Ignored placing {kind} at {position:?}, none left");
            return;
        }

        self.cells[position.to_nd_index()] = PlacedPipe::new(kind, orientation).into();
    }

    /// Takes a selectable pipe off the board and returns it to the inventory.
    pub fn remove(&mut self, position: Position) {
        match self.get(position).copied() {
            Some(Cell::Pipe(pipe)) if pipe.selectable => {
                self.inventory.put_back(pipe.kind);
                self.cells[position.to_nd_index()] = Cell::tile();
            }
            Some(other) => {
                log::debug!("Ignored removing {:?} at {position:?}", other.kind());
            }
            None => {
                log::debug!("Ignored removing outside the board at {position:?}");
            }
        }
    }

    /// Rotates a selectable pipe clockwise by `steps` quarter turns, negative is anticlockwise.
    pub fn rotate(&mut self, position: Position, steps: i32) {
        match self.cells.get_mut(position.to_nd_index()) {
            Some(Cell::Pipe(pipe)) if pipe.selectable => pipe.rotate(steps),
            Some(other) => {
                log::debug!("Ignored rotating {:?} at {position:?}", other.kind());
            }
            None => {
                log::debug!("Ignored rotating outside the board at {position:?}");
            }
        }
    }

    /// The position one step towards `direction`, with the side of that neighbor facing back at
    /// `position`. Returns `None` when the step would leave the board.
    pub fn neighbor(&self, direction: Direction, position: Position) -> Option<(Direction, Position)> {
        step(position, direction, self.size()).map(|next| (direction.opposite(), next))
    }

    pub fn iter_neighbors(&self, position: Position) -> NeighborIter {
        NeighborIter::new(position, self.size())
    }

    /// Whether the pipes connect the start pipe to the end pipe.
    pub fn has_path(&self) -> bool {
        PathChecker::new(self).has_path()
    }

    pub fn check_path(&self) -> PathCheck {
        PathChecker::new(self).check()
    }

    /// Snapshot of the current grid and inventory.
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.inventory, self.cells.clone())
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, position: Position) -> &Self::Output {
        self.cell_at(position)
    }
}

impl TryFrom<BoardLayout> for Board {
    type Error = BoardError;

    fn try_from(layout: BoardLayout) -> Result<Self> {
        Self::new(layout)
    }
}

impl From<Board> for BoardLayout {
    fn from(board: Board) -> Self {
        Self::new(board.inventory, board.cells)
    }
}
