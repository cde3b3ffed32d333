//! Runs one engine-vs-engine game and prints the final board.
//!
//! Run with:
//! `cargo run --release --bin auto_play`
//! `cargo run --release --bin auto_play -- --depth 2 --max-plies 120 --seed 7`
//!
//! Set `RUST_LOG=debug` to see every move and search summary.

use plum_board::engines::engine_minimax::MinimaxEngine;
use plum_board::errors::ChessError;
use plum_board::session::match_outcome::MatchReport;
use plum_board::game_state::chess_types::Color;
use plum_board::utils::auto_play::{play_auto_game, AutoPlayConfig};
use plum_board::utils::render_game_state::render_board;
use tracing_subscriber::EnvFilter;

fn parse_args() -> Result<(AutoPlayConfig, Option<u64>), ChessError> {
    let mut config = AutoPlayConfig::default();
    let mut seed = None;
    let mut args = std::env::args().skip(1);

    while let Some(flag) = args.next() {
        let value = args.next().unwrap_or_default();
        let invalid = || ChessError::InvalidOptionValue {
            name: flag.clone(),
            value: value.clone(),
        };
        match flag.as_str() {
            "--depth" => {
                config.search.depth = value.parse().map_err(|_| invalid())?;
                if config.search.depth == 0 {
                    return Err(invalid());
                }
            }
            "--noise" => config.search.noise = value.parse().map_err(|_| invalid())?,
            "--max-plies" => config.max_plies = value.parse().map_err(|_| invalid())?,
            "--seed" => seed = Some(value.parse().map_err(|_| invalid())?),
            _ => return Err(ChessError::UnknownOption(flag)),
        }
    }

    Ok((config, seed))
}

fn main() -> Result<(), ChessError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (config, seed) = parse_args()?;
    let (mut white, mut black) = match seed {
        Some(seed) => (
            MinimaxEngine::seeded(config.search, seed),
            MinimaxEngine::seeded(config.search, seed.wrapping_add(1)),
        ),
        None => (MinimaxEngine::new(config.search), MinimaxEngine::new(config.search)),
    };

    let outcome = play_auto_game(&mut white, &mut black, &config)?;

    println!("{}", render_board(&outcome.final_state.board));
    println!(
        "result: {:?} after {} plies",
        outcome.result, outcome.plies
    );
    let moves: Vec<String> = outcome.moves.iter().map(ToString::to_string).collect();
    println!("moves: {}", moves.join(" "));
    if let Some(report) = MatchReport::for_result(outcome.result, Color::Light) {
        println!(
            "white: {:?} (+{} points) at {}",
            report.outcome, report.points, report.finished_at
        );
    }

    Ok(())
}
