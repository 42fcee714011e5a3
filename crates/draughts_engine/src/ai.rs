use draughts_core::moves::{captures_for, legal_moves, simple_moves_for};
use draughts_core::{Game, Move};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::search::best_move;
use crate::Level;

/// Computer opponent. Holds nothing between calls except its level and RNG;
/// every decision is made from the game's current position.
#[derive(Clone, Debug)]
pub struct DraughtsAI {
    level: Level,
    rng: StdRng,
}

impl DraughtsAI {
    pub fn new(level: Level) -> Self {
        DraughtsAI {
            level,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same as [`DraughtsAI::new`] but with reproducible random choices.
    pub fn with_seed(level: Level, seed: u64) -> Self {
        DraughtsAI {
            level,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Picks a move for whichever side is to move in `game`.
    ///
    /// The caller plays it through [`Game::try_apply`]; `None` means that side
    /// has no legal move.
    pub fn choose_move(&mut self, game: &Game) -> Option<Move> {
        let chosen = match self.level {
            Level::Random => self.random_move(game),
            Level::Greedy => self.greedy_move(game),
            Level::Minimax => best_move(game.board(), game.side_to_move()),
        };
        debug!(
            "level {} chose {:?} for {}",
            self.level,
            chosen.map(|mv| mv.to_string()),
            game.side_to_move()
        );
        chosen
    }

    fn random_move(&mut self, game: &Game) -> Option<Move> {
        legal_moves(game.board(), game.side_to_move())
            .choose(&mut self.rng)
            .copied()
    }

    // Captures always win; otherwise the first step towards the promotion row
    fn greedy_move(&mut self, game: &Game) -> Option<Move> {
        let side = game.side_to_move();
        let captures = captures_for(game.board(), side);
        if let Some(&capture) = captures.choose(&mut self.rng) {
            return Some(capture);
        }

        let moves = simple_moves_for(game.board(), side);
        moves
            .iter()
            .find(|mv| mv.row_delta() == side.forward())
            .or_else(|| moves.first())
            .copied()
    }
}

impl Default for DraughtsAI {
    fn default() -> Self {
        DraughtsAI::new(Level::default())
    }
}
