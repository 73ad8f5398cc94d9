//! Minimax CLI - optimal Tic-Tac-Toe analysis and play
//!
//! This CLI provides a unified interface for:
//! - Analyzing positions and exporting the optimal policy
//! - Playing interactively against the engine
//! - Running self-play and random-opponent evaluations

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "minimax")]
#[command(version, about = "Optimal Tic-Tac-Toe via exhaustive minimax search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze positions and export the optimal policy
    Analyze(tictactoe_minimax::cli::commands::analyze::AnalyzeArgs),

    /// Play against the engine interactively
    Play(tictactoe_minimax::cli::commands::play::PlayArgs),

    /// Run engine self-play and random-opponent evaluation
    Selfplay(tictactoe_minimax::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => tictactoe_minimax::cli::commands::analyze::execute(args),
        Commands::Play(args) => tictactoe_minimax::cli::commands::play::execute(args),
        Commands::Selfplay(args) => tictactoe_minimax::cli::commands::selfplay::execute(args),
    }
}
