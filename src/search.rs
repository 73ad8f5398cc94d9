//! Exhaustive minimax search for optimal Tic-Tac-Toe play
//!
//! Two mutually recursive value functions explore every reachable board
//! below a position to its terminal utility; the top-level [`minimax`]
//! driver picks the move with the best guaranteed value for the player to
//! move. There is no pruning and no memoization: the game tree is small
//! enough (at most 9 plies) that the full search completes immediately.
//!
//! The search assumes a reachable, consistent board (piece counts differ by
//! at most 1, at most one winner); behavior on inconsistent boards is
//! unspecified.

use crate::tictactoe::{Board, Move, Player};

/// Best utility X can force from this position
///
/// Terminal boards evaluate to their utility; otherwise the maximum over
/// all legal moves of the value O can then force.
pub fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut value = i32::MIN;
    for mv in board.legal_moves() {
        let next = board
            .make_move(mv)
            .expect("legal move generation should not fail");
        value = value.max(min_value(&next));
    }
    value
}

/// Best utility O can force from this position
pub fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut value = i32::MAX;
    for mv in board.legal_moves() {
        let next = board
            .make_move(mv)
            .expect("legal move generation should not fail");
        value = value.min(max_value(&next));
    }
    value
}

/// The optimal move for the player to move, or `None` on a terminal board
///
/// X picks the move maximizing [`min_value`] of the resulting board, O the
/// move minimizing [`max_value`]. Ties between equally good moves resolve
/// to the first one in the row-major order of [`Board::legal_moves`], so
/// the result is deterministic.
pub fn minimax(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }

    let maximizing = board.to_move() == Player::X;
    let mut best: Option<(Move, i32)> = None;

    for mv in board.legal_moves() {
        let next = board
            .make_move(mv)
            .expect("legal move generation should not fail");
        let value = if maximizing {
            min_value(&next)
        } else {
            max_value(&next)
        };

        let improves = match best {
            None => true,
            Some((_, best_value)) => {
                if maximizing {
                    value > best_value
                } else {
                    value < best_value
                }
            }
        };
        if improves {
            best = Some((mv, value));
        }
    }

    best.map(|(mv, _)| mv)
}

/// Evaluate every legal move: the utility each one leads to under optimal
/// play by both sides, in row-major move order
pub fn evaluate_moves(board: &Board) -> Vec<(Move, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }

    let maximizing = board.to_move() == Player::X;
    board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let next = board
                .make_move(mv)
                .expect("legal move generation should not fail");
            let value = if maximizing {
                min_value(&next)
            } else {
                max_value(&next)
            };
            (mv, value)
        })
        .collect()
}

/// All minimax-equivalent moves in this position, in row-major order
pub fn best_moves(board: &Board) -> Vec<Move> {
    let evaluated = evaluate_moves(board);
    if evaluated.is_empty() {
        return Vec::new();
    }

    let maximizing = board.to_move() == Player::X;
    let values = evaluated.iter().map(|&(_, value)| value);
    let best_value = if maximizing {
        values.max()
    } else {
        values.min()
    }
    .expect("non-terminal board has at least one legal move");

    evaluated
        .into_iter()
        .filter(|&(_, value)| value == best_value)
        .map(|(mv, _)| mv)
        .collect()
}
