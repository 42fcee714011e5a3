use log::{debug, warn};

use crate::moves::{self, Applied};
use crate::{Board, Move, MoveError, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The other side is to move and has no legal move.
    Won(Side),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A live game: the board plus whose turn it is.
///
/// Every state change goes through [`Game::try_apply`] (or its boolean wrapper
/// [`Game::apply`]), which enforces turn order and the mandatory-capture rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Side,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Side::White,
        }
    }

    /// Starts from an arbitrary position.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self { board, side_to_move }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.side_to_move = Side::White;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn any_capture_available(&self, side: Side) -> bool {
        moves::has_capture(&self.board, side)
    }

    /// Destinations the piece on `(row, col)` may move to right now.
    ///
    /// Empty for off-board coordinates, empty squares and the opponent's
    /// pieces. While any capture is pending for the side to move, only
    /// capture landings are returned, so a piece that cannot itself capture
    /// gets nothing.
    pub fn legal_destinations(&self, row: usize, col: usize) -> Vec<Square> {
        let Some(from) = Square::new(row, col) else {
            return Vec::new();
        };
        match self.board.piece_at(from) {
            Some(piece) if piece.side() == self.side_to_move => {}
            _ => return Vec::new(),
        }

        if self.any_capture_available(self.side_to_move) {
            moves::captures_from(&self.board, from)
                .into_iter()
                .map(|capture| capture.to)
                .collect()
        } else {
            moves::simple_moves_from(&self.board, from)
        }
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        moves::legal_moves(&self.board, self.side_to_move)
    }

    pub fn has_legal_moves(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    /// Squares of the side to move that are obliged to capture this turn.
    pub fn capture_squares(&self) -> Vec<Square> {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.side() == self.side_to_move)
            .map(|(square, _)| square)
            .filter(|&square| !moves::captures_from(&self.board, square).is_empty())
            .collect()
    }

    pub fn status(&self) -> GameStatus {
        if self.has_legal_moves() {
            GameStatus::InProgress
        } else {
            GameStatus::Won(self.side_to_move.opponent())
        }
    }

    /// Plays one ply if it is legal, flipping the side to move.
    pub fn try_apply(&mut self, mv: Move) -> Result<Applied, MoveError> {
        let piece = self.board.piece_at(mv.from).ok_or(MoveError::NoPiece(mv.from))?;
        if piece.side() != self.side_to_move {
            return Err(MoveError::WrongSide {
                mv,
                to_move: self.side_to_move,
            });
        }

        let is_capture = mv.is_capture_shaped()
            && moves::captures_from(&self.board, mv.from)
                .iter()
                .any(|capture| capture.to == mv.to);
        if !is_capture {
            if self.any_capture_available(self.side_to_move) {
                return Err(MoveError::CaptureRequired(mv));
            }
            if !moves::simple_moves_from(&self.board, mv.from).contains(&mv.to) {
                return Err(MoveError::Illegal(mv));
            }
        }

        let applied = moves::play(&mut self.board, mv);
        debug!(
            "{} played {} (captured: {:?}, promoted: {})",
            self.side_to_move, mv, applied.captured, applied.promoted
        );
        self.side_to_move = self.side_to_move.opponent();
        Ok(applied)
    }

    /// Boolean form of [`Game::try_apply`] taking raw coordinates.
    pub fn apply(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> bool {
        let Some(mv) = Move::from_coords(from_row, from_col, to_row, to_col) else {
            warn!("rejected off-board move ({from_row},{from_col})->({to_row},{to_col})");
            return false;
        };
        match self.try_apply(mv) {
            Ok(_) => true,
            Err(err) => {
                warn!("rejected move: {err}");
                false
            }
        }
    }

    /// First available move in row-major order, captures before simple moves.
    pub fn hint(&self) -> Option<Move> {
        let own: Vec<Square> = self
            .board
            .pieces()
            .filter(|(_, piece)| piece.side() == self.side_to_move)
            .map(|(square, _)| square)
            .collect();

        let capture = own.iter().find_map(|&from| {
            moves::captures_from(&self.board, from)
                .first()
                .map(|capture| Move::new(from, capture.to))
        });
        capture.or_else(|| {
            own.iter().find_map(|&from| {
                moves::simple_moves_from(&self.board, from)
                    .first()
                    .map(|&to| Move::new(from, to))
            })
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
