//! Terminal-oriented Unicode board renderer.
//!
//! Used by the auto-play binary and in test diagnostics.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::game_state::GameState;

const FILES: &str = "  a b c d e f g h";

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let ranks = board.rows().iter().enumerate().rev().map(|(row, squares)| {
        let rank = row + 1;
        let cells: Vec<String> = squares
            .iter()
            .map(|square| square.map_or('·', glyph).to_string())
            .collect();
        format!("{rank} {} {rank}", cells.join(" "))
    });

    std::iter::once(FILES.to_owned())
        .chain(ranks)
        .chain(std::iter::once(FILES.to_owned()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board view followed by the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    let side = match game_state.side_to_move {
        Color::Light => "white",
        Color::Dark => "black",
    };
    format!("{}\n{side} to move", render_board(&game_state.board))
}

const GLYPHS: [[char; 6]; 2] = [
    ['♙', '♘', '♗', '♖', '♕', '♔'],
    ['♟', '♞', '♝', '♜', '♛', '♚'],
];

#[inline]
fn glyph(piece: Piece) -> char {
    GLYPHS[piece.color.index()][piece.kind.index()]
}
