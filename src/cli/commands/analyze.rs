//! Optimal move analysis
//!
//! This module prints the minimax evaluation of positions and can export
//! the optimal policy for every reachable position as JSON.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    path::PathBuf,
};

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::{
    cli::output,
    search,
    tictactoe::{Board, Move, Player},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PolicyMode {
    /// Report a single optimal move per state (first in row-major order)
    Single,
    /// Report all moves with minimax-optimal value
    Full,
}

impl PolicyMode {
    fn as_str(&self) -> &'static str {
        match self {
            PolicyMode::Single => "single",
            PolicyMode::Full => "full",
        }
    }
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Board as 9 row-major cell characters ('.', 'X', 'O'), e.g. "XX.OO...."
    #[arg(long)]
    pub state: Option<String>,

    /// How many optimal moves to report per position
    #[arg(long, value_enum, default_value = "single")]
    pub mode: PolicyMode,

    /// Export the optimal policy for every reachable position to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Compute and analyze the optimal policy
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    // If custom state provided, analyze just that state
    if let Some(s) = &args.state {
        let board = Board::from_string(s)?;
        output::print_section("Optimal Analysis for Custom State");
        analyze_position(&board, "Custom state", args.mode);
    } else {
        output::print_section("Optimal Policy Analysis");
        println!("Showing optimal moves for key positions:\n");

        let empty = Board::new();
        analyze_position(&empty, "Empty board", args.mode);

        let center = Board::from_string("....X....")?;
        analyze_position(&center, "Center taken by X", args.mode);

        let corner = Board::from_string("X........")?;
        analyze_position(&corner, "Corner taken by X", args.mode);
    }

    if let Some(path) = &args.export {
        export_optimal_policy(path, args.mode)?;
        println!("\nOptimal policy exported to: {}", path.display());
    }

    Ok(())
}

/// Analyze a single position
fn analyze_position(board: &Board, description: &str, mode: PolicyMode) {
    println!("{description}:");
    println!("{board}");

    if board.is_terminal() {
        println!("  (state is terminal, utility {})\n", board.utility());
        return;
    }

    let value = match board.to_move() {
        Player::X => search::max_value(board),
        Player::O => search::min_value(board),
    };
    println!("Player to move: {:?}, position value: {value}", board.to_move());

    let best = search::best_moves(board);
    if mode == PolicyMode::Single {
        println!("Optimal move: {}\n", best[0]);
    } else {
        println!("Optimal moves (all minimax-equivalent):");
        for mv in &best {
            println!("  - {mv}");
        }
        println!();
    }
}

#[derive(Serialize)]
struct OptimalPolicyExport {
    description: &'static str,
    mode: &'static str,
    total_states: usize,
    policy: HashMap<String, PolicyEntry>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PolicyEntry {
    Single(Move),
    Multiple(Vec<Move>),
}

/// Enumerate every board reachable from the initial position, BFS order
fn enumerate_reachable() -> Vec<Board> {
    let mut states = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    queue.push_back(Board::new());
    visited.insert(Board::new().encode());

    while let Some(state) = queue.pop_front() {
        states.push(state);

        if state.is_terminal() {
            continue;
        }

        for mv in state.legal_moves() {
            let next = state
                .make_move(mv)
                .expect("legal move generation should not fail");
            let key = next.encode();

            if !visited.contains(&key) {
                visited.insert(key);
                queue.push_back(next);
            }
        }
    }

    states
}

/// Export the optimal policy for every reachable non-terminal position
fn export_optimal_policy(path: &PathBuf, mode: PolicyMode) -> Result<()> {
    println!("\nComputing optimal policy for all reachable positions...");

    let states = enumerate_reachable();
    println!(
        "  Reachable positions: {}",
        output::format_number(states.len())
    );

    let pb = output::create_analysis_progress(states.len() as u64);
    let mut policy = HashMap::new();

    for state in &states {
        if !state.is_terminal() {
            let best = search::best_moves(state);
            let entry = match mode {
                PolicyMode::Single => PolicyEntry::Single(best[0]),
                PolicyMode::Full => PolicyEntry::Multiple(best),
            };
            policy.insert(state.encode(), entry);
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    println!(
        "  Total policy entries: {}",
        output::format_number(policy.len())
    );

    let export = OptimalPolicyExport {
        description: "Optimal (minimax) policy for Tic-Tac-Toe",
        mode: mode.as_str(),
        total_states: policy.len(),
        policy,
    };

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;

    Ok(())
}
