use std::fmt;

use once_cell::sync::Lazy;

use crate::{BoardError, Piece, Side, Square};

pub const BOARD_SIZE: usize = 8;

// Rows 0-2 hold Black, rows 5-7 White, all on dark squares.
static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for square in Square::all().filter(|sq| sq.is_dark()) {
        let piece = match square.row() {
            0..=2 => Some(Piece::Man(Side::Black)),
            5..=7 => Some(Piece::Man(Side::White)),
            _ => None,
        };
        board.set(square, piece);
    }
    board
});

/// An 8×8 grid of pieces. Plain value type: `clone` is a flat copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from the signed piece encoding.
    pub fn from_values(values: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        let mut board = Self::empty();
        for square in Square::all() {
            let value = values[square.row()][square.col()];
            if value == 0 {
                continue;
            }
            let piece = Piece::from_value(value).ok_or(BoardError::InvalidValue {
                row: square.row(),
                col: square.col(),
                value,
            })?;
            board.set(square, Some(piece));
        }
        Ok(board)
    }

    pub fn reset(&mut self) {
        *self = STARTING_BOARD.clone();
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    pub fn value_at(&self, square: Square) -> i8 {
        self.piece_at(square).map_or(0, Piece::value)
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row()][square.col()] = piece;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// The grid in the signed encoding, row-major.
    pub fn values(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut values = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in self.squares.iter().enumerate() {
            for (col, piece) in cells.iter().enumerate() {
                values[row][col] = piece.map_or(0, Piece::value);
            }
        }
        values
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side() == side).count()
    }

    pub fn occupied(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: String = row
                .iter()
                .map(|piece| piece.map_or('.', Piece::symbol))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout() {
        let board = Board::new();
        assert_eq!(board.count(Side::White), 12);
        assert_eq!(board.count(Side::Black), 12);
        for (square, piece) in board.pieces() {
            assert!(square.is_dark());
            match piece.side() {
                Side::Black => assert!(square.row() <= 2),
                Side::White => assert!(square.row() >= 5),
            }
        }
    }

    #[test]
    fn from_values_rejects_bad_encoding() {
        let mut values = [[0; BOARD_SIZE]; BOARD_SIZE];
        values[3][4] = 5;
        assert_eq!(
            Board::from_values(values),
            Err(BoardError::InvalidValue { row: 3, col: 4, value: 5 })
        );
    }

    #[test]
    fn values_match_starting_grid() {
        let values = Board::new().values();
        assert_eq!(values[0], [0, -1, 0, -1, 0, -1, 0, -1]);
        assert_eq!(values[3], [0; BOARD_SIZE]);
        assert_eq!(values[7], [1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn display_uses_one_char_per_square() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], ".b.b.b.b");
        assert_eq!(lines[7], "w.w.w.w.");
    }
}
