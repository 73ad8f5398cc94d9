//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Player};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
///
/// The game always starts from the empty board with X to move; the board at
/// any point is recovered by replaying the move history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the initial position
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] when the game already has an
    /// outcome, and [`crate::Error::InvalidMove`] when the move is illegal
    /// in the current position.
    pub fn play(&mut self, mv: Move) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let new_state = current.make_move(mv)?;

        self.moves.push(mv);

        if new_state.is_terminal() {
            self.outcome = Some(if let Some(winner) = new_state.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        Ok(())
    }

    /// Get current board state by replaying the move history
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// was played from. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        let mut state = Board::new();
        for &mv in &self.moves {
            state = state.make_move(mv)?;
        }
        Ok(state)
    }

    /// Get the sequence of board states, from the empty board onward
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the state it
    /// was played from. This indicates corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = Board::new();
        states.push(state);

        for &mv in &self.moves {
            state = state.make_move(mv)?;
            states.push(state);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
