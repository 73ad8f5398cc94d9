//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Move, Player};
pub use game::{Game, GameOutcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
