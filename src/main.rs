use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use quince_chess::chess_errors::ChessError;
use quince_chess::game_state::game_state::{GameOutcome, GameState};
use quince_chess::moves::chess_move::Move;
use quince_chess::search::alpha_beta::{best_move, SearchConfig};
use quince_chess::search::board_scoring::StandardScorer;
use quince_chess::search::difficulty::Difficulty;

#[derive(Parser, Debug)]
#[command(author, version, about = "Watch the engine play itself", long_about = None)]
struct Args {
    /// Difficulty level, 1 (beginner) to 5 (expert)
    #[arg(long, default_value_t = 3)]
    difficulty: u8,

    /// Explicit search depth; overrides --difficulty
    #[arg(long)]
    depth: Option<u8>,

    /// Stop after this many plies if the game is still running
    #[arg(long, default_value_t = 60)]
    max_plies: u32,

    /// Random plies played before the engine takes over, so games differ
    #[arg(long, default_value_t = 2)]
    opening_plies: u32,

    /// Seed for the opening plies
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print a Unicode diagram instead of the character grid
    #[arg(long)]
    pretty: bool,
}

fn search_config(args: &Args) -> Result<SearchConfig> {
    match args.depth {
        Some(0) => Err(ChessError::ZeroSearchDepth.into()),
        Some(depth) => Ok(SearchConfig { depth }),
        None => Ok(SearchConfig::from(Difficulty::try_from(args.difficulty)?)),
    }
}

fn print_board(game: &GameState, pretty: bool) {
    if pretty {
        println!("{}\n", game.render_pretty());
    } else {
        println!("{}\n", game.render_grid());
    }
}

fn random_move(game: &mut GameState, rng: &mut StdRng) -> Option<Move> {
    let moves = game.generate_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.random_range(0..moves.len())])
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = search_config(&args)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut game = GameState::new_game();

    info!("self-play at depth {} (seed {})", config.depth, args.seed);
    print_board(&game, args.pretty);

    for ply in 0..args.max_plies {
        if let Some(outcome) = game.outcome() {
            match outcome {
                GameOutcome::Checkmate { winner } => println!("Checkmate, {winner} wins"),
                GameOutcome::Stalemate => println!("Stalemate"),
            }
            return Ok(());
        }

        let side = game.side_to_move();
        let chosen = if ply < args.opening_plies {
            random_move(&mut game, &mut rng)
        } else {
            best_move(&mut game, &StandardScorer, config).best_move
        };
        let Some(mv) = chosen else {
            bail!("{side} has no move although the game is not over");
        };

        if !game.make_move(mv.from, mv.to) {
            bail!("engine chose illegal move {mv} for {side}");
        }

        println!("{}. {side} {mv} (eval {})", ply + 1, game.evaluate());
        print_board(&game, args.pretty);
    }

    println!("Stopped after {} plies", args.max_plies);
    Ok(())
}
