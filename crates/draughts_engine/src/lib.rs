pub mod ai;
pub mod evaluation;
pub mod level;
pub mod search;

pub use ai::DraughtsAI;
pub use evaluation::evaluate;
pub use level::{Level, LevelError};
pub use search::best_move;
