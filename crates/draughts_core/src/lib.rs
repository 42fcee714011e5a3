// Core draughts game logic modules
pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, BOARD_SIZE};
pub use error::{BoardError, MoveError};
pub use game::{Game, GameStatus};
pub use moves::{Applied, Capture, Move};
pub use piece::{Piece, Side};
pub use position::Square;
