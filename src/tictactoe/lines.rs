//! Winning line analysis for Tic-Tac-Toe

use std::collections::HashSet;

use super::{Cell, Move, Player};

/// Winning line coordinates on the 3x3 board: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| cells[row][col] == target))
    }

    /// Find all moves that would immediately win for the player
    pub fn winning_moves(cells: &[[Cell; 3]; 3], player: Player) -> HashSet<Move> {
        let mut moves = HashSet::new();
        for &line in &WINNING_LINES {
            if let Some(mv) = Self::winning_move_in_line(cells, player, &line) {
                moves.insert(mv);
            }
        }
        moves
    }

    /// Find the winning move in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[[Cell; 3]; 3],
        player: Player,
        line: &[(usize, usize); 3],
    ) -> Option<Move> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_at = None;

        for &(row, col) in line {
            match cells[row][col] {
                Cell::Empty => {
                    if empty_at.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_at = Some(Move { row, col });
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_at } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[0][1] = Cell::X;
        cells[0][2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::O;
        cells[1][0] = Cell::O;
        cells[2][0] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[1][1] = Cell::X;
        cells[2][2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_winning_moves() {
        // X.X
        // ...
        // ...
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[0][2] = Cell::X;

        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(&Move::new(0, 1)));
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[0][1] = Cell::X;
        cells[1][0] = Cell::X;

        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(0, 2))); // Complete top row
        assert!(moves.contains(&Move::new(2, 0))); // Complete left column
    }

    #[test]
    fn test_no_winning_moves_with_single_piece() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;

        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }
}
