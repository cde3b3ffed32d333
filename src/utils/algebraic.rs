//! Square and move conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (`"e4"`, `"e2e4"`) and
//! `Position`/`ChessMove` values. Rendering the other way is `Display`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{ChessMove, Position};

/// Convert algebraic notation (for example: "e4") to a position.
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Position::new(rank - b'1', file - b'a'))
}

/// Convert coordinate move notation (for example: "e2e4") to a move.
pub fn long_algebraic_to_move(text: &str) -> ChessResult<ChessMove> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }
    let from = algebraic_to_position(&text[..2])?;
    let to = algebraic_to_position(&text[2..])?;
    Ok(ChessMove::new(from, to))
}
