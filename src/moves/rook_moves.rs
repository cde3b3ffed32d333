use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::ray_casting::{ray_targets, Offset};

pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub fn rook_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    ray_targets(board, from, color, &ROOK_DIRECTIONS)
}
