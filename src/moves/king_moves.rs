use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::ray_casting::{step_targets, Offset};

pub const KING_OFFSETS: [Offset; 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Adjacent squares only; castling is added by the legality filter.
#[inline]
pub fn king_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    step_targets(board, from, color, &KING_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::king_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Position};

    #[test]
    fn corner_king_has_three_targets() {
        assert_eq!(
            king_destinations(&Board::empty(), Position::new(0, 0), Color::Dark).len(),
            3
        );
    }

    #[test]
    fn boxed_in_starting_king_has_no_targets() {
        let board = Board::initial();
        assert!(king_destinations(&board, Position::new(0, 4), Color::Light).is_empty());
    }
}
