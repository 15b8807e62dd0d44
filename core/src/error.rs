use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board has no cells")]
    EmptyBoard,
    #[error("Board rows are not all the same length")]
    InvalidBoardShape,
    #[error("Board is too large, at most {max} rows and columns are supported", max = crate::Coord::MAX)]
    BoardTooLarge,
    #[error("Board has no start pipe")]
    MissingStart,
    #[error("Board has more than one start pipe")]
    MultipleStarts,
    #[error("Board has no end pipe")]
    MissingEnd,
    #[error("Board has more than one end pipe")]
    MultipleEnds,
}

pub type Result<T> = core::result::Result<T, BoardError>;
