//! Shared stepping and sliding primitives for per-piece move patterns.
//!
//! Steppers (knight, king) look at a fixed list of offsets; sliders (bishop,
//! rook, queen) walk a direction until the first occupied square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Position};

/// `(d_row, d_col)` offset or unit direction.
pub type Offset = (i8, i8);

/// Destinations one offset away that are empty or hold an enemy piece.
pub fn step_targets(board: &Board, from: Position, color: Color, offsets: &[Offset]) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&to| board.color_at(to) != Some(color))
        .collect()
}

/// Destinations along each direction up to the first occupied square, which
/// is included only when it holds an enemy piece.
pub fn ray_targets(board: &Board, from: Position, color: Color, directions: &[Offset]) -> Vec<Position> {
    let mut out = Vec::with_capacity(14);
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.color_at(to) {
                None => out.push(to),
                Some(other) => {
                    if other != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
    out
}

/// First piece met walking from `from` (exclusive) in `direction`.
pub fn first_piece_along(board: &Board, from: Position, direction: Offset) -> Option<(Position, Piece)> {
    let mut cursor = from;
    while let Some(next) = cursor.offset(direction.0, direction.1) {
        if let Some(piece) = board.piece_at(next) {
            return Some((next, piece));
        }
        cursor = next;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{first_piece_along, ray_targets};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Position};

    #[test]
    fn ray_stops_before_friend_and_on_enemy() {
        let board = Board::initial();
        // From a3 looking up the a-file: a4..a6 empty, a7 enemy pawn.
        let targets = ray_targets(&board, Position::new(2, 0), Color::Light, &[(1, 0)]);
        assert_eq!(
            targets,
            vec![
                Position::new(3, 0),
                Position::new(4, 0),
                Position::new(5, 0),
                Position::new(6, 0)
            ]
        );
        let down = ray_targets(&board, Position::new(2, 0), Color::Light, &[(-1, 0)]);
        assert!(down.is_empty());
    }

    #[test]
    fn first_piece_along_reports_blocker() {
        let board = Board::initial();
        let (pos, piece) =
            first_piece_along(&board, Position::new(3, 3), (1, 1)).expect("diagonal hits a piece");
        assert_eq!(pos, Position::new(6, 6));
        assert_eq!(piece.kind, PieceKind::Pawn);
        assert_eq!(piece.color, Color::Dark);
    }
}
