//! Engine-vs-engine driver.
//!
//! Runs two `Engine` implementations against each other through a
//! `GameSession`, so every move goes through the same legality check and
//! repetition bookkeeping a human game does.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::ChessResult;
use crate::game_state::chess_types::{ChessMove, Color};
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::GameResult;
use crate::search::alpha_beta::SearchConfig;
use crate::session::game_session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoPlayConfig {
    /// Game is abandoned as unfinished after this many half-moves.
    pub max_plies: u32,
    pub search: SearchConfig,
}

impl Default for AutoPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPlayResult {
    /// `InProgress` when `max_plies` ran out first.
    pub result: GameResult,
    pub plies: u32,
    pub moves: Vec<ChessMove>,
    pub final_state: GameState,
}

/// Plays one game from the standard start. `white` moves for Light.
pub fn play_auto_game(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    config: &AutoPlayConfig,
) -> ChessResult<AutoPlayResult> {
    white.new_game();
    black.new_game();

    let mut session = GameSession::new();
    let mut moves = Vec::new();

    while !session.result().is_terminal() && session.move_count() < config.max_plies {
        let engine: &mut dyn Engine = match session.state().side_to_move {
            Color::Light => &mut *white,
            Color::Dark => &mut *black,
        };
        let mv = session.play_engine_move(engine)?;
        debug!(ply = session.move_count(), mv = %mv, "auto-play move");
        moves.push(mv);
    }

    let result = session.result();
    info!(
        ?result,
        plies = session.move_count(),
        white = white.name(),
        black = black.name(),
        "auto-play game finished"
    );

    Ok(AutoPlayResult {
        result,
        plies: session.move_count(),
        moves,
        final_state: *session.state(),
    })
}

#[cfg(test)]
mod tests {
    use super::{play_auto_game, AutoPlayConfig};
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::game_state::game_state::GameState;
    use crate::game_state::game_status::GameResult;
    use crate::move_generation::legal_move_generator::all_legal_moves;
    use crate::search::alpha_beta::SearchConfig;

    #[test]
    fn short_game_replays_as_legal_moves() {
        let config = AutoPlayConfig {
            max_plies: 12,
            search: SearchConfig { depth: 1, noise: 0.5 },
        };
        let mut white = MinimaxEngine::seeded(config.search, 1);
        let mut black = MinimaxEngine::seeded(config.search, 2);
        let outcome = play_auto_game(&mut white, &mut black, &config).expect("auto-play should run");

        assert_eq!(outcome.plies as usize, outcome.moves.len());
        assert!(outcome.plies <= 12);
        if outcome.plies == 12 {
            assert_eq!(outcome.result, GameResult::InProgress);
        }

        let mut replay = GameState::new_game();
        for mv in &outcome.moves {
            assert!(all_legal_moves(&replay).contains(mv), "{mv} should be legal");
            replay = replay.apply(*mv);
        }
        assert_eq!(replay, outcome.final_state);
    }

    #[test]
    fn config_fills_missing_fields_from_defaults() {
        let config: AutoPlayConfig = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(config, AutoPlayConfig::default());

        let config: AutoPlayConfig =
            serde_json::from_str(r#"{"max_plies":40}"#).expect("config should parse");
        assert_eq!(config.max_plies, 40);
        assert_eq!(config.search, SearchConfig::default());
    }
}
