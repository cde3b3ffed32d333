//! Canonical chess-rule constants.
//!
//! Every rank-dependent rule (setup, pawn double steps, promotion, castling)
//! reads its rows and columns from here so the board orientation is fixed in
//! one place: Light's back rank is row 0, Dark's is row 7.

use crate::game_state::chess_types::{Color, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Occurrence count at which a position is drawn by repetition.
pub const REPETITION_LIMIT: u32 = 3;

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// The row on which a pawn of `color` is promoted.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    back_rank(color.opposite())
}
