use thiserror::Error;

use crate::{Move, Side, Square};

/// Why [`Game::try_apply`](crate::Game::try_apply) refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPiece(Square),
    #[error("{mv}: it is {to_move}'s turn")]
    WrongSide { mv: Move, to_move: Side },
    #[error("{0}: a capture is mandatory")]
    CaptureRequired(Move),
    #[error("{0} is not a legal move")]
    Illegal(Move),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid piece value {value} at ({row},{col})")]
    InvalidValue { row: usize, col: usize, value: i8 },
}
