use std::fmt;

use crate::board::BOARD_SIZE;

/// A square on the board, always in range.
///
/// Only [`Square::new`], [`Square::offset`] and [`Square::all`] build one, so
/// an off-board square cannot reach the board's indexing:
///
/// ```compile_fail
/// let outside = draughts_core::Square { row: 8, col: 1 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8, // 0-7, row 0 is Black's back rank
    col: u8, // 0-7
}

impl Square {
    /// Returns `None` when either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The square `dr` rows and `dc` columns away, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Playable squares are the ones where `row + col` is odd.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// All 64 squares, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Square {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::new(usize::MAX, 0).is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::new(0, 1).unwrap();
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), Square::new(1, 0));
        assert_eq!(Square::new(6, 6).unwrap().offset(2, 2), None);
    }

    #[test]
    fn all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[1], Square::new(0, 1).unwrap());
        assert_eq!(squares[8], Square::new(1, 0).unwrap());
    }
}
