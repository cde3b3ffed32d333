//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The root scores every legal move exactly enough to tell ties apart, so
//! the engine layer can break ties without changing which moves count as
//! best. En passant is not modeled below the root and the search never sees
//! the game's repetition history.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::any_legal_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::search::board_scoring::{piece_value, BoardScorer, MATE_SCORE};

const INFINITY: i32 = MATE_SCORE + 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched, counting the root move. Values below 1 act as 1.
    pub depth: u8,
    /// Upper bound of the random tie-break added to root scores.
    pub noise: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            noise: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub chess_move: ChessMove,
    pub score: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Root moves in generation order. A move that cannot match the best
    /// score may carry an upper bound instead of its exact score.
    pub scored_moves: Vec<ScoredMove>,
    pub best_score: Option<i32>,
    pub nodes: u64,
}

/// Scores every root move of `game_state` searching `depth` plies in total.
pub fn search_root_moves<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
) -> SearchResult {
    let depth = depth.max(1);
    let mut nodes = 1u64;
    let mut moves = generator.generate_legal_moves(game_state);
    order_moves(game_state, &mut moves);

    let mut best = -INFINITY;
    let mut scored_moves = Vec::with_capacity(moves.len());

    for mv in moves {
        // Anything that cannot reach `best` may fail low; ties stay exact.
        let alpha = if best == -INFINITY { -INFINITY } else { best - 1 };
        let child = without_en_passant(mv.game_after_move);
        let score = -negamax(
            &child,
            generator,
            scorer,
            depth - 1,
            -INFINITY,
            -alpha,
            1,
            &mut nodes,
        );

        best = best.max(score);
        scored_moves.push(ScoredMove {
            chess_move: mv.chess_move,
            score,
        });
    }

    SearchResult {
        best_score: (!scored_moves.is_empty()).then_some(best),
        scored_moves,
        nodes,
    }
}

#[allow(clippy::too_many_arguments)]
fn negamax<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        // Terminal positions must dominate material even at the horizon.
        let has_moves = any_legal_moves(
            &game_state.board,
            game_state.side_to_move,
            game_state.castling_rights,
            None,
        );
        if !has_moves {
            return terminal_score(game_state, ply);
        }
        return scorer.score(game_state);
    }

    let mut moves = generator.generate_legal_moves(game_state);
    if moves.is_empty() {
        return terminal_score(game_state, ply);
    }
    order_moves(game_state, &mut moves);

    let mut best = -INFINITY;
    for mv in moves {
        let child = without_en_passant(mv.game_after_move);
        let score = -negamax(
            &child,
            generator,
            scorer,
            depth - 1,
            -beta,
            -alpha,
            ply.saturating_add(1),
            nodes,
        );

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Mated: the side to move loses, sooner mates weigh more. Otherwise a
/// stalemate, scored as even.
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if is_king_in_check(&game_state.board, game_state.side_to_move) {
        -MATE_SCORE + i32::from(ply)
    } else {
        0
    }
}

#[inline]
fn without_en_passant(mut game_state: GameState) -> GameState {
    game_state.en_passant_target = None;
    game_state
}

/// Captures of the most valuable victims first; stable for quiet moves.
fn order_moves(game_state: &GameState, moves: &mut [GeneratedMove]) {
    moves.sort_by_key(|mv| {
        let victim = game_state
            .board
            .piece_at(mv.chess_move.to)
            .map(|piece| piece_value(piece.kind))
            .unwrap_or(0);
        -victim
    });
}
