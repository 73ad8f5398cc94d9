//! Optimal Tic-Tac-Toe play via exhaustive minimax search
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board model with immutable move application
//! - Exhaustive minimax search engine (no pruning, no memoization)
//! - CLI for position analysis, interactive play, and self-play evaluation

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{best_moves, evaluate_moves, max_value, min_value, minimax};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Move, Player};
