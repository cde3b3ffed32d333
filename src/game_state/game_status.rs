//! Game status resolution.
//!
//! Classifies the position for the side to move as playing, check,
//! checkmate, stalemate or an externally signalled draw. Always run on the
//! state produced by the latest half-move.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, Position};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::any_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawReason {
    Stalemate,
    ThreefoldRepetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

/// Final (or pending) outcome of a game. Terminal once not `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameResult {
    InProgress,
    LightWins,
    DarkWins,
    Draw(DrawReason),
}

impl GameResult {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::Light => GameResult::LightWins,
            Color::Dark => GameResult::DarkWins,
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::LightWins => Some(Color::Light),
            GameResult::DarkWins => Some(Color::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: GameStatus,
    pub winner: Option<Color>,
    pub draw_reason: Option<DrawReason>,
}

impl StatusReport {
    pub const fn playing() -> Self {
        Self {
            status: GameStatus::Playing,
            winner: None,
            draw_reason: None,
        }
    }

    pub fn result(&self) -> GameResult {
        match self.status {
            GameStatus::Playing | GameStatus::Check => GameResult::InProgress,
            GameStatus::Checkmate => self
                .winner
                .map(GameResult::win_for)
                .unwrap_or(GameResult::InProgress),
            GameStatus::Stalemate => GameResult::Draw(DrawReason::Stalemate),
            GameStatus::Draw => {
                GameResult::Draw(self.draw_reason.unwrap_or(DrawReason::ThreefoldRepetition))
            }
        }
    }
}

/// Classifies the position for `side_to_move`. A draw signal wins over any
/// board analysis.
pub fn resolve_game_status(
    board: &Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
    draw_signal: Option<DrawReason>,
) -> StatusReport {
    if let Some(reason) = draw_signal {
        return StatusReport {
            status: GameStatus::Draw,
            winner: None,
            draw_reason: Some(reason),
        };
    }

    let has_moves = any_legal_moves(board, side_to_move, castling_rights, en_passant_target);
    let in_check = is_king_in_check(board, side_to_move);

    match (has_moves, in_check) {
        (false, true) => StatusReport {
            status: GameStatus::Checkmate,
            winner: Some(side_to_move.opposite()),
            draw_reason: None,
        },
        (false, false) => StatusReport {
            status: GameStatus::Stalemate,
            winner: None,
            draw_reason: Some(DrawReason::Stalemate),
        },
        (true, true) => StatusReport {
            status: GameStatus::Check,
            winner: None,
            draw_reason: None,
        },
        (true, false) => StatusReport::playing(),
    }
}

#[inline]
pub fn resolve_state(game_state: &GameState, draw_signal: Option<DrawReason>) -> StatusReport {
    resolve_game_status(
        &game_state.board,
        game_state.side_to_move,
        game_state.castling_rights,
        game_state.en_passant_target,
        draw_signal,
    )
}
