use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::ray_casting::{step_targets, Offset};

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub fn knight_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    step_targets(board, from, color, &KNIGHT_OFFSETS)
}
