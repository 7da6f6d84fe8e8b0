//! Game session state machine and board state

mod board;
mod session;

pub use board::{Board, Grade, GradeMatrix, MAX_GUESSES};
pub use session::{Difficulty, GameSession, Input, Status};
