use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::ray_casting::{ray_targets, Offset};

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    ray_targets(board, from, color, &BISHOP_DIRECTIONS)
}
