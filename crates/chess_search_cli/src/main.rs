//! `bestmove`: run the search core on one position from the command line
//!
//! ```text
//! bestmove --fen "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3" --depth 5
//! RUST_LOG=debug bestmove --time-ms 200
//! ```

use anyhow::Context;
use chess_search::constants::{START_FEN, TT_DEFAULT_ENTRIES};
use chess_search::evaluation::Phase;
use chess_search::{ChessPosition, Engine, Position, SearchBudget};
use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bestmove", about = "Pick a move for a chess position", version)]
struct Args {
    /// Position to search, as FEN
    #[arg(long, default_value = START_FEN)]
    fen: String,

    /// Maximum iterative deepening depth
    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Wall-clock budget in milliseconds
    #[arg(long, default_value_t = 1500)]
    time_ms: u64,

    /// Transposition table size in entries
    #[arg(long, default_value_t = TT_DEFAULT_ENTRIES)]
    tt_entries: usize,

    /// Print the static evaluation and exit without searching
    #[arg(long)]
    eval_only: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut position = ChessPosition::from_fen(&args.fen).context("could not read --fen")?;
    let mut engine = Engine::new(args.tt_entries);

    if args.eval_only {
        println!(
            "eval {} phase {:.2}",
            engine.evaluate(&position),
            Phase::of(&position).fraction()
        );
        return Ok(());
    }

    let budget = SearchBudget::new(args.depth, Duration::from_millis(args.time_ms))
        .context("invalid search budget")?;
    info!(fen = %position.fen(), depth = args.depth, time_ms = args.time_ms, "searching");

    let result = engine.search(&mut position, budget);
    match result.best_move {
        Some(mv) => println!(
            "bestmove {mv} score {} depth {} nodes {}",
            result.score,
            result.depth_reached,
            result.stats.total_nodes()
        ),
        None => println!("bestmove (none) status {:?}", position.status()),
    }

    Ok(())
}
