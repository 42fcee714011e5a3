use draughts_core::{Board, Side};

// Material values: a king is worth three men.
const MAN_VALUE: i32 = 1;
const KING_VALUE: i32 = 3;

/// Static material score of `board` from `side`'s point of view.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = if piece.is_king() { KING_VALUE } else { MAN_VALUE };
            if piece.side() == side {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::{Piece, Square};

    #[test]
    fn starting_position_is_level() {
        assert_eq!(evaluate(&Board::new(), Side::White), 0);
        assert_eq!(evaluate(&Board::new(), Side::Black), 0);
    }

    #[test]
    fn kings_count_triple() {
        let mut board = Board::empty();
        board.set(Square::new(0, 1).unwrap(), Some(Piece::King(Side::White)));
        board.set(Square::new(5, 2).unwrap(), Some(Piece::Man(Side::Black)));
        assert_eq!(evaluate(&board, Side::White), 2);
        assert_eq!(evaluate(&board, Side::Black), -2);
    }
}
