// Fixed-depth minimax over material, following the mandatory-capture rule at every node
use draughts_core::moves::{legal_moves, play};
use draughts_core::{Board, Move, Side};
use log::{debug, trace};
use rayon::prelude::*;

use crate::evaluation::evaluate;

// Plies searched below each root candidate: the opponent's reply, then ours
pub const SEARCH_DEPTH: u8 = 2;

// Plays a move on a detached copy; the input board is never touched
fn child(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    play(&mut next, mv);
    next
}

/// Minimax value of `board` for `ai_side`.
///
/// `maximizing` says whose turn it is in the simulation: `ai_side` when true,
/// its opponent otherwise. Leaves (depth 0, or no legal move for the side to
/// move) take the static evaluation.
pub fn minimax(board: &Board, depth: u8, maximizing: bool, ai_side: Side) -> i32 {
    let to_move = if maximizing { ai_side } else { ai_side.opponent() };
    let moves = legal_moves(board, to_move);

    if depth == 0 || moves.is_empty() {
        return evaluate(board, ai_side);
    }

    let scores = moves
        .iter()
        .map(|&mv| minimax(&child(board, mv), depth - 1, !maximizing, ai_side));
    if maximizing {
        scores.fold(i32::MIN, i32::max)
    } else {
        scores.fold(i32::MAX, i32::min)
    }
}

// Main function that finds the best move for the side to move
pub fn best_move(board: &Board, ai_side: Side) -> Option<Move> {
    let moves = legal_moves(board, ai_side);

    // Each candidate gets its own board copy, so the subtrees can run in parallel.
    // Collecting keeps generation order for the tie-break below.
    let scores: Vec<i32> = moves
        .par_iter()
        .map(|&mv| minimax(&child(board, mv), SEARCH_DEPTH, false, ai_side))
        .collect();

    let mut best: Option<(Move, i32)> = None;
    for (&mv, &score) in moves.iter().zip(&scores) {
        trace!("{mv}: {score}");
        // Strictly greater: the first of equal moves wins
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => debug!(
            "{ai_side}: best of {} candidates is {mv} scoring {score}",
            moves.len()
        ),
        None => debug!("{ai_side} has no legal move"),
    }
    best.map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_core::{Piece, Square};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn depth_zero_is_static_evaluation() {
        let board = Board::new();
        assert_eq!(minimax(&board, 0, true, Side::White), evaluate(&board, Side::White));
    }

    #[test]
    fn position_without_moves_is_static_evaluation() {
        let mut board = Board::empty();
        board.set(sq(4, 3), Some(Piece::Man(Side::White)));
        // Black has nothing to move, so the minimizing layer stops immediately.
        assert_eq!(minimax(&board, 2, false, Side::White), 1);
    }

    #[test]
    fn child_leaves_parent_untouched() {
        let board = Board::new();
        let next = child(&board, Move::from_coords(5, 0, 4, 1).unwrap());
        assert_eq!(board, Board::new());
        assert_eq!(next.value_at(sq(4, 1)), 1);
    }
}
