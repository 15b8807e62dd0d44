use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// A traversal state: a board position and the side it was entered through.
///
/// Only the start pipe is expanded without an entry side.
pub type TraversalState = (Position, Option<Direction>);

/// Outcome of walking the pipes from the start pipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PathCheck {
    /// The end pipe was reached through its accepted side.
    pub connected: bool,
    /// Distinct traversal states recorded before the walk stopped.
    pub states_visited: usize,
}

/// Decides whether the pipes on a [`Board`] join the start pipe to the end pipe.
///
/// The walk follows pipe connections breadth first, keyed by `(position, entered side)` so pipes
/// that are crossed more than once (crosses, over-unders) are expanded once per side and cycles
/// terminate. A board of `R x C` cells has at most `4 * R * C` such states.
#[derive(Copy, Clone, Debug)]
pub struct PathChecker<'a> {
    board: &'a Board,
}

impl<'a> PathChecker<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn has_path(&self) -> bool {
        self.check().connected
    }

    pub fn check(&self) -> PathCheck {
        let board = self.board;
        let end = board.end_position();
        let initial: TraversalState = (board.start_position(), None);

        let mut visited = BTreeSet::from([initial]);
        let mut to_visit = VecDeque::from([initial]);

        while let Some((position, incoming)) = to_visit.pop_front() {
            log::trace!("expand {position:?} entered from {incoming:?}");

            for direction in board.cell_at(position).connected(incoming).directions() {
                let Some((entered, next)) = board.neighbor(direction, position) else {
                    continue;
                };
                let next_cell = board.cell_at(next);

                if next == end && next_cell.accepted_side() == Some(entered) {
                    log::debug!(
                        "Path reaches end at {end:?} after {} states",
                        visited.len()
                    );
                    return PathCheck {
                        connected: true,
                        states_visited: visited.len(),
                    };
                }

                // the end pipe is terminal, entering it from the wrong side goes nowhere
                if !next_cell.has_pipe() || next == end {
                    continue;
                }

                let state = (next, Some(entered));
                if visited.insert(state) {
                    to_visit.push_back(state);
                }
            }
        }

        log::debug!("No path to end after {} states", visited.len());
        PathCheck {
            connected: false,
            states_visited: visited.len(),
        }
    }
}
