use std::fmt;

/// Diagonal steps as `(row delta, col delta)`.
pub type Direction = (i8, i8);

// White men move up the board (towards row 0), Black men down.
// Order matters: move generation and search tie-breaks follow it.
const WHITE_DIRECTIONS: [Direction; 2] = [(-1, -1), (-1, 1)];
const BLACK_DIRECTIONS: [Direction; 2] = [(1, -1), (1, 1)];
const KING_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row on which this side's men are crowned.
    pub fn promotion_row(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("White"),
            Side::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Man(Side),
    King(Side),
}

impl Piece {
    pub fn side(self) -> Side {
        match self {
            Piece::Man(side) | Piece::King(side) => side,
        }
    }

    pub fn is_king(self) -> bool {
        matches!(self, Piece::King(_))
    }

    /// Signed encoding: `1`/`-1` for White/Black men, `2`/`-2` for kings.
    pub fn value(self) -> i8 {
        match self {
            Piece::Man(side) => side.sign(),
            Piece::King(side) => 2 * side.sign(),
        }
    }

    /// Inverse of [`Piece::value`]. Zero and anything outside `-2..=2` give `None`.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            1 => Some(Piece::Man(Side::White)),
            -1 => Some(Piece::Man(Side::Black)),
            2 => Some(Piece::King(Side::White)),
            -2 => Some(Piece::King(Side::Black)),
            _ => None,
        }
    }

    /// The king this piece becomes on its promotion row.
    pub fn crowned(self) -> Self {
        Piece::King(self.side())
    }

    pub fn directions(self) -> &'static [Direction] {
        match self {
            Piece::King(_) => &KING_DIRECTIONS,
            Piece::Man(Side::White) => &WHITE_DIRECTIONS,
            Piece::Man(Side::Black) => &BLACK_DIRECTIONS,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::Man(Side::White) => 'w',
            Piece::Man(Side::Black) => 'b',
            Piece::King(Side::White) => 'W',
            Piece::King(Side::Black) => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_encoding_round_trips() {
        for value in [-2, -1, 1, 2] {
            assert_eq!(Piece::from_value(value).map(Piece::value), Some(value));
        }
        assert_eq!(Piece::from_value(0), None);
        assert_eq!(Piece::from_value(3), None);
    }

    #[test]
    fn kings_move_in_all_four_directions() {
        assert_eq!(Piece::King(Side::Black).directions().len(), 4);
        assert_eq!(Piece::Man(Side::White).directions(), &[(-1, -1), (-1, 1)]);
        assert_eq!(Piece::Man(Side::Black).directions(), &[(1, -1), (1, 1)]);
    }

    #[test]
    fn men_directions_point_forward() {
        for side in [Side::White, Side::Black] {
            assert!(Piece::Man(side)
                .directions()
                .iter()
                .all(|&(dr, _)| dr == side.forward()));
        }
    }
}
