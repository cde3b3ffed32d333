use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::rook_moves::rook_destinations;

#[inline]
pub fn queen_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = rook_destinations(board, from, color);
    out.extend(bishop_destinations(board, from, color));
    out
}
