//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A (row, column) coordinate pair identifying a cell to mark
///
/// Both coordinates are zero-based and range over [0, 2]. A move is only
/// meaningful against a specific board: it is legal iff the addressed cell
/// is empty on that board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete board state: a 3x3 grid of cells, row-major
///
/// The player to move is never stored; it is derived from the piece counts
/// (X moves first, so it is O's turn exactly when X has more marks).
/// This type implements `Copy` since it's only 9 bytes, and every derived
/// operation produces a new value rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; 3]; 3],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::X => count.x += 1,
                    Cell::O => count.o += 1,
                    Cell::Empty => count.empty += 1,
                }
            }
        }
        count
    }

    /// Get the player whose turn it is
    ///
    /// X moves first, so it is O's turn exactly when X has strictly more
    /// marks on the board. The counts are not validated for reachability.
    pub fn to_move(&self) -> Player {
        let count = self.count_pieces();
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order
    /// (whitespace is filtered out): `.` for empty, `X`, `O`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts are unreachable (X must equal O or lead by 1)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in cleaned.iter().take(9).enumerate() {
            board.cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a cell is empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// Get all legal moves: every empty cell, in row-major ascending order
    ///
    /// The order is deterministic and documented because it decides which of
    /// several equally good moves the search returns. Note there is no
    /// terminal guard here: a full board yields an empty Vec, and a board
    /// that has already been won still lists its empty cells. Callers check
    /// `is_terminal` first.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Move { row, col });
                }
            }
        }
        moves
    }

    /// Make a move and return the resulting board
    ///
    /// The addressed cell is set to the mark of the player to move. The
    /// input board is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] when the move is not currently
    /// legal: out-of-range coordinates and occupied cells are rejected
    /// uniformly, since both are simply absent from `legal_moves`.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, mv: Move) -> Result<Board, crate::Error> {
        if mv.row >= 3 || mv.col >= 3 || self.cells[mv.row][mv.col] != Cell::Empty {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.row][mv.col] = self.to_move().to_cell();
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    ///
    /// X is checked first, so on a (unreachable under legal play) board
    /// where both sides hold a completed line, X wins the tie.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.count_pieces().empty == 0
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.count_pieces().empty == 0 && self.winner().is_none()
    }

    /// Game-theoretic value of the board from X's perspective
    ///
    /// Returns +1 if X has won, -1 if O has won, 0 otherwise. The zero case
    /// covers both draws and, degenerately, non-terminal boards; callers are
    /// expected to invoke this on terminal boards only.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Get the canonical string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&c| c.to_char())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.cells[row][col], Cell::Empty);
            }
        }
    }

    #[test]
    fn test_make_move() {
        let board = Board::new();

        // Valid move
        let result = board.make_move(Move::new(1, 1));
        assert!(result.is_ok());
        let new_board = result.unwrap();
        assert_eq!(new_board.cells[1][1], Cell::X);
        assert_eq!(new_board.to_move(), Player::O);

        // Move on occupied cell
        let result2 = new_board.make_move(Move::new(1, 1));
        assert!(result2.is_err());
        assert!(result2.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_make_move_out_of_range() {
        let board = Board::new();
        assert!(board.make_move(Move::new(3, 0)).is_err());
        assert!(board.make_move(Move::new(0, 3)).is_err());
    }

    #[test]
    fn test_make_move_leaves_input_untouched() {
        let board = Board::new();
        let before = board;
        let _ = board.make_move(Move::new(0, 0)).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves() {
        let mut board = Board::new();
        assert_eq!(board.legal_moves().len(), 9);

        board = board.make_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.legal_moves().len(), 8);
        assert!(!board.legal_moves().contains(&Move::new(0, 0)));

        board = board.make_move(Move::new(1, 1)).unwrap();
        assert_eq!(board.legal_moves().len(), 7);
        assert!(!board.legal_moves().contains(&Move::new(1, 1)));
    }

    #[test]
    fn test_legal_moves_row_major_order() {
        let board = Board::new();
        let expected: Vec<Move> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Move::new(row, col)))
            .collect();
        assert_eq!(board.legal_moves(), expected);
    }

    #[test]
    fn test_win_detection_horizontal() {
        let mut board = Board::new();
        // X wins on top row
        board = board.make_move(Move::new(0, 0)).unwrap(); // X
        board = board.make_move(Move::new(1, 0)).unwrap(); // O
        board = board.make_move(Move::new(0, 1)).unwrap(); // X
        board = board.make_move(Move::new(1, 1)).unwrap(); // O
        board = board.make_move(Move::new(0, 2)).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn test_win_detection_vertical() {
        let mut board = Board::new();
        // O wins on middle column
        board = board.make_move(Move::new(0, 0)).unwrap(); // X
        board = board.make_move(Move::new(0, 1)).unwrap(); // O
        board = board.make_move(Move::new(0, 2)).unwrap(); // X
        board = board.make_move(Move::new(1, 1)).unwrap(); // O
        board = board.make_move(Move::new(1, 2)).unwrap(); // X
        board = board.make_move(Move::new(2, 1)).unwrap(); // O

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn test_win_detection_diagonal() {
        let mut board = Board::new();
        // X wins on main diagonal
        board = board.make_move(Move::new(0, 0)).unwrap(); // X
        board = board.make_move(Move::new(0, 1)).unwrap(); // O
        board = board.make_move(Move::new(1, 1)).unwrap(); // X
        board = board.make_move(Move::new(0, 2)).unwrap(); // O
        board = board.make_move(Move::new(2, 2)).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // Classic draw game
        board = board.make_move(Move::new(0, 0)).unwrap(); // X
        board = board.make_move(Move::new(0, 1)).unwrap(); // O
        board = board.make_move(Move::new(0, 2)).unwrap(); // X
        board = board.make_move(Move::new(1, 1)).unwrap(); // O
        board = board.make_move(Move::new(1, 0)).unwrap(); // X
        board = board.make_move(Move::new(2, 0)).unwrap(); // O
        board = board.make_move(Move::new(1, 2)).unwrap(); // X
        board = board.make_move(Move::new(2, 2)).unwrap(); // O
        board = board.make_move(Move::new(2, 1)).unwrap(); // X

        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0][0], Cell::X);
        assert_eq!(board.cells[0][1], Cell::O);
        assert_eq!(board.cells[0][2], Cell::X);
        // to_move is derived from piece counts
        assert_eq!(board.to_move(), Player::O);

        // Invalid string length
        let result = Board::from_string("XO");
        assert!(result.is_err());

        // Invalid character
        let result = Board::from_string("XOZ......");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_string_rejects_unreachable_counts() {
        // O can never lead
        assert!(Board::from_string("O........").is_err());
        // X can never lead by more than one
        assert!(Board::from_string("XX.......").is_err());
    }

    #[test]
    fn test_encode() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO.......");

        let empty = Board::new();
        assert_eq!(empty.encode(), ".........");
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new();
        assert_eq!(board.to_move(), Player::X);

        board = board.make_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.to_move(), Player::O);

        board = board.make_move(Move::new(0, 1)).unwrap();
        assert_eq!(board.to_move(), Player::X);

        board = board.make_move(Move::new(0, 2)).unwrap();
        assert_eq!(board.to_move(), Player::O);
    }

    #[test]
    fn test_utility_on_non_terminal_board_is_zero() {
        let board = Board::from_string("X........").unwrap();
        assert!(!board.is_terminal());
        assert_eq!(board.utility(), 0);
    }
}
