//! Engine self-play and random-opponent evaluation

use anyhow::Result;
use clap::Args;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    cli::output,
    search,
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Args, Debug)]
pub struct SelfplayArgs {
    /// Number of games against the random opponent, per side
    #[arg(long, default_value_t = 50)]
    pub games: usize,

    /// RNG seed for the random opponent
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Tally of results from the engine's perspective
#[derive(Debug, Default)]
struct Tally {
    wins: usize,
    draws: usize,
    losses: usize,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome, engine: Player) {
        match outcome {
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Win(player) if player == engine => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
        }
    }
}

/// Run self-play and random-opponent evaluation
pub fn execute(args: SelfplayArgs) -> Result<()> {
    output::print_section("Engine vs Engine");
    let outcome = play_game(Player::X, &mut None)?;
    match outcome {
        GameOutcome::Draw => println!("Optimal play on both sides: draw, as expected."),
        GameOutcome::Win(player) => println!("Unexpected decisive result: {player:?} won."),
    }

    output::print_section("Engine vs Random Opponent");
    let mut rng = StdRng::seed_from_u64(args.seed);

    for engine in [Player::X, Player::O] {
        let mut tally = Tally::default();
        for _ in 0..args.games {
            let outcome = play_game(engine, &mut Some(&mut rng))?;
            tally.record(outcome, engine);
        }

        println!("\nEngine as {engine:?} over {} games:", args.games);
        output::print_kv("wins", &tally.wins.to_string());
        output::print_kv("draws", &tally.draws.to_string());
        output::print_kv("losses", &tally.losses.to_string());
    }

    Ok(())
}

/// Play one full game; the engine takes `engine`'s turns and the random
/// opponent (when present) the rest. With no opponent both sides are
/// played by the engine.
fn play_game(engine: Player, opponent_rng: &mut Option<&mut StdRng>) -> Result<GameOutcome> {
    let mut game = Game::new();

    while game.outcome.is_none() {
        let board = game.current_state()?;

        let mv = if board.to_move() == engine || opponent_rng.is_none() {
            search::minimax(&board).expect("non-terminal board has an optimal move")
        } else {
            let rng = opponent_rng.as_mut().expect("opponent RNG is present");
            *board
                .legal_moves()
                .choose(rng)
                .expect("non-terminal board has legal moves")
        };

        game.play(mv)?;
    }

    Ok(game.outcome.expect("finished game has an outcome"))
}
