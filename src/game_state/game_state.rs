//! Full position state threaded through a game.
//!
//! `GameState` bundles the board with the side to move, castling rights and
//! the one-ply en-passant target. Like `Board` it is a `Copy` value: playing
//! a move produces a new state and never edits one in place.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{CastlingRights, ChessMove, Color, Position};
use crate::move_generation::legal_move_apply::advance_game_state;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square a pawn skipped over on the previous ply, if any.
    pub en_passant_target: Option<Position>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::initial(),
            side_to_move: Color::Light,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
        }
    }

    /// A state for `board` with no castling rights and no en-passant target.
    #[inline]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    /// Plays `mv` and returns the follow-up state. The move is assumed legal.
    #[inline]
    #[must_use]
    pub fn apply(&self, mv: ChessMove) -> Self {
        advance_game_state(self, mv)
    }
}
