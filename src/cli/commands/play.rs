//! Interactive play against the engine
//!
//! The human supplies moves as "row col" on stdin; illegal or malformed
//! input is re-solicited rather than aborting the game.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::{
    Error, search,
    tictactoe::{Game, GameOutcome, Move, Player},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl Side {
    fn to_player(self) -> Player {
        match self {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Side played by the human (X moves first)
    #[arg(long, value_enum, default_value = "x")]
    pub side: Side,
}

/// Run an interactive game against the engine
pub fn execute(args: PlayArgs) -> Result<()> {
    let human = args.side.to_player();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    println!("You play {human:?}. Enter moves as: row col (both 0-2)\n");

    while game.outcome.is_none() {
        let board = game.current_state()?;
        println!("{board}\n");

        let mv = if board.to_move() == human {
            match read_move(&mut lines)? {
                Some(mv) => mv,
                None => {
                    println!("Input closed, aborting game.");
                    return Ok(());
                }
            }
        } else {
            let mv = search::minimax(&board).expect("non-terminal board has an optimal move");
            println!("Engine plays {mv}");
            mv
        };

        match game.play(mv) {
            Ok(()) => {}
            // Occupied cell or out-of-range input: re-solicit
            Err(Error::InvalidMove { row, col }) => {
                println!("({row}, {col}) is not a legal move, try again.");
            }
            Err(e) => return Err(e.into()),
        }
    }

    let board = game.current_state()?;
    println!("{board}\n");
    match game.outcome {
        Some(GameOutcome::Win(player)) => println!("{player:?} wins!"),
        Some(GameOutcome::Draw) => println!("Draw."),
        None => unreachable!("loop exits only once the outcome is set"),
    }

    Ok(())
}

/// Read a "row col" pair from stdin; re-prompts on malformed input
fn read_move(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<Move>> {
    loop {
        print!("your move> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };

        let fields: Vec<_> = line.split_whitespace().collect();
        if let [row, col] = fields[..]
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Ok(Some(Move::new(row, col)));
        }

        println!("Expected two numbers, e.g. \"1 2\".");
    }
}
