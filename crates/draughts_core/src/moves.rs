use std::fmt;

use crate::{Board, Piece, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

/// A single jump: land on `to`, removing the enemy piece on `over`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    pub to: Square,
    pub over: Square,
}

/// What happened on the board when a move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Applied {
    pub captured: Option<Square>,
    pub promoted: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Bounds-checked constructor from raw coordinates.
    pub fn from_coords(
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Option<Self> {
        Some(Self {
            from: Square::new(from_row, from_col)?,
            to: Square::new(to_row, to_col)?,
        })
    }

    pub fn coords(self) -> (usize, usize, usize, usize) {
        (self.from.row(), self.from.col(), self.to.row(), self.to.col())
    }

    pub fn row_delta(self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }

    pub fn col_delta(self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    /// Two squares along a diagonal. Says nothing about what is on the board.
    pub fn is_capture_shaped(self) -> bool {
        self.row_delta().abs() == 2 && self.col_delta().abs() == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Single jumps available to the piece on `from`, in direction order.
pub fn captures_from(board: &Board, from: Square) -> Vec<Capture> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut captures = Vec::new();
    for &(dr, dc) in piece.directions() {
        let (Some(over), Some(to)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        let jumps_enemy = board
            .piece_at(over)
            .is_some_and(|victim| victim.side() != piece.side());
        if jumps_enemy && board.is_empty(to) {
            captures.push(Capture { to, over });
        }
    }
    captures
}

/// One-step destinations for the piece on `from`, in direction order.
pub fn simple_moves_from(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    piece
        .directions()
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.is_empty(to))
        .collect()
}

fn own_squares(board: &Board, side: Side) -> impl Iterator<Item = Square> + '_ {
    board
        .pieces()
        .filter(move |(_, piece)| piece.side() == side)
        .map(|(square, _)| square)
}

/// Every capture for `side`, row-major by source square then direction order.
pub fn captures_for(board: &Board, side: Side) -> Vec<Move> {
    own_squares(board, side)
        .flat_map(|from| {
            captures_from(board, from)
                .into_iter()
                .map(move |capture| Move::new(from, capture.to))
        })
        .collect()
}

/// Every non-capturing move for `side`, ignoring the mandatory-capture rule.
pub fn simple_moves_for(board: &Board, side: Side) -> Vec<Move> {
    own_squares(board, side)
        .flat_map(|from| {
            simple_moves_from(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

pub fn has_capture(board: &Board, side: Side) -> bool {
    own_squares(board, side).any(|from| !captures_from(board, from).is_empty())
}

/// Legal moves for `side`: its captures if it has any, otherwise its simple moves.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let captures = captures_for(board, side);
    if !captures.is_empty() {
        return captures;
    }
    simple_moves_for(board, side)
}

/// Plays `mv` on `board` without any legality or turn checks.
///
/// If `mv.to` is one of the source piece's capture landings the jumped piece is
/// removed. A man reaching its promotion row is crowned.
pub fn play(board: &mut Board, mv: Move) -> Applied {
    let Some(piece) = board.piece_at(mv.from) else {
        return Applied::default();
    };

    let captured = captures_from(board, mv.from)
        .into_iter()
        .find(|capture| capture.to == mv.to)
        .map(|capture| capture.over);
    if let Some(over) = captured {
        board.set(over, None);
    }

    let promoted = !piece.is_king() && mv.to.row() == piece.side().promotion_row();
    let landed = if promoted { piece.crowned() } else { piece };
    board.set(mv.from, None);
    board.set(mv.to, Some(landed));

    Applied { captured, promoted }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn empty_square_generates_nothing() {
        let board = Board::new();
        assert!(captures_from(&board, sq(3, 0)).is_empty());
        assert!(simple_moves_from(&board, sq(3, 0)).is_empty());
    }

    #[test]
    fn starting_position_has_seven_moves_per_side() {
        let board = Board::new();
        assert_eq!(legal_moves(&board, Side::White).len(), 7);
        assert_eq!(legal_moves(&board, Side::Black).len(), 7);
        assert!(!has_capture(&board, Side::White));
    }

    #[test]
    fn men_do_not_capture_backwards() {
        let mut board = Board::empty();
        board.set(sq(3, 3), Some(Piece::Man(Side::White)));
        board.set(sq(4, 4), Some(Piece::Man(Side::Black)));
        assert!(captures_from(&board, sq(3, 3)).is_empty());

        board.set(sq(3, 3), Some(Piece::King(Side::White)));
        assert_eq!(
            captures_from(&board, sq(3, 3)),
            vec![Capture { to: sq(5, 5), over: sq(4, 4) }]
        );
    }

    #[test]
    fn capture_shape_is_two_diagonal_steps() {
        assert!(Move::new(sq(5, 2), sq(3, 4)).is_capture_shaped());
        assert!(Move::new(sq(2, 5), sq(4, 3)).is_capture_shaped());
        assert!(!Move::new(sq(5, 2), sq(4, 3)).is_capture_shaped());
        assert!(!Move::new(sq(5, 2), sq(3, 2)).is_capture_shaped());
        assert!(!Move::new(sq(5, 2), sq(5, 4)).is_capture_shaped());
    }

    #[test]
    fn play_crowns_on_back_rank() {
        let mut board = Board::empty();
        board.set(sq(1, 2), Some(Piece::Man(Side::White)));
        let applied = play(&mut board, Move::new(sq(1, 2), sq(0, 1)));
        assert!(applied.promoted);
        assert_eq!(board.value_at(sq(0, 1)), 2);
    }
}
