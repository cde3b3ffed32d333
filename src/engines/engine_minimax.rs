//! Minimax engine with randomized tie-breaking.
//!
//! Scores root moves with `search_root_moves` and adds a small random offset
//! to each before picking the maximum, so repeated identical positions do not
//! always produce the identical move.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, ChessMove, Color};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::alpha_beta::{search_root_moves, ScoredMove, SearchConfig};
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};

pub struct MinimaxEngine<S: BoardScorer = PieceSquareScorer> {
    config: SearchConfig,
    scorer: S,
    rng: StdRng,
}

impl MinimaxEngine<PieceSquareScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(PieceSquareScorer, config)
    }

    /// Deterministic tie-breaking for tests and reproducible matches.
    pub fn seeded(config: SearchConfig, seed: u64) -> Self {
        let mut engine = Self::new(config);
        engine.rng = StdRng::seed_from_u64(seed);
        engine
    }
}

impl Default for MinimaxEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self {
            config,
            scorer,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    fn pick(&mut self, scored_moves: &[ScoredMove]) -> Option<ScoredMove> {
        let noise = self.config.noise;
        let mut best: Option<(f64, ScoredMove)> = None;
        for scored in scored_moves {
            let jitter = if noise > 0.0 {
                self.rng.random_range(0.0..noise)
            } else {
                0.0
            };
            let noisy = f64::from(scored.score) + jitter;
            if best.map_or(true, |(top, _)| noisy > top) {
                best = Some((noisy, *scored));
            }
        }
        best.map(|(_, scored)| scored)
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Plum Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let invalid = || ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = value.trim().parse().map_err(|_| invalid())?;
                if depth == 0 {
                    return Err(invalid());
                }
                self.config.depth = depth;
            }
            "noise" => {
                let noise: f64 = value.trim().parse().map_err(|_| invalid())?;
                if !noise.is_finite() || noise < 0.0 {
                    return Err(invalid());
                }
                self.config.noise = noise;
            }
            "seed" => {
                let seed: u64 = value.trim().parse().map_err(|_| invalid())?;
                self.rng = StdRng::seed_from_u64(seed);
            }
            _ => return Err(ChessError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput {
        let result = search_root_moves(
            game_state,
            &LegalMoveGenerator,
            &self.scorer,
            self.config.depth,
        );

        let picked = self.pick(&result.scored_moves);
        debug!(
            side = ?game_state.side_to_move,
            depth = self.config.depth,
            candidates = result.scored_moves.len(),
            nodes = result.nodes,
            chosen = ?picked.map(|scored| scored.chess_move.to_string()),
            score = ?picked.map(|scored| scored.score),
            "minimax search finished"
        );

        EngineOutput {
            best_move: picked.map(|scored| scored.chess_move),
            score: picked.map(|scored| scored.score),
            nodes: result.nodes,
        }
    }
}

/// Picks a move for `mover` with the default search settings. En passant is
/// not considered. `None` means `mover` has no legal move.
pub fn select_move(board: &Board, mover: Color, castling_rights: CastlingRights) -> Option<ChessMove> {
    let game_state = GameState {
        board: *board,
        side_to_move: mover,
        castling_rights,
        en_passant_target: None,
    };
    MinimaxEngine::default().choose_move(&game_state).best_move
}
