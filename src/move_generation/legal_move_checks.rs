//! Attack and check detection.
//!
//! Attacks are found by running the movement patterns backwards from the
//! target square: a square is attacked by a color when one of that color's
//! pieces sits where the matching pattern from the target would land.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::pawn_moves::pawn_attack_squares;
use crate::moves::ray_casting::{first_piece_along, Offset};
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Position> {
    board.find_king(color)
}

/// Whether any piece of `attacker_color` could capture on `square`. Pawns
/// count through their diagonals whether or not `square` is occupied.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    // A pawn of the attacker attacks `square` exactly when a defending pawn
    // on `square` would attack the pawn's square.
    let pawn_hit = pawn_attack_squares(attacker_color.opposite(), square)
        .into_iter()
        .any(|pos| holds(board, pos, attacker_color, &[PieceKind::Pawn]));
    if pawn_hit {
        return true;
    }

    if stepper_hits(board, square, attacker_color, &KNIGHT_OFFSETS, PieceKind::Knight)
        || stepper_hits(board, square, attacker_color, &KING_OFFSETS, PieceKind::King)
    {
        return true;
    }

    slider_hits(
        board,
        square,
        attacker_color,
        &ROOK_DIRECTIONS,
        &[PieceKind::Rook, PieceKind::Queen],
    ) || slider_hits(
        board,
        square,
        attacker_color,
        &BISHOP_DIRECTIONS,
        &[PieceKind::Bishop, PieceKind::Queen],
    )
}

/// Whether `color`'s king is attacked. A board without that king is out of
/// contract and reports `false`.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

fn holds(board: &Board, pos: Position, color: Color, kinds: &[PieceKind]) -> bool {
    board
        .piece_at(pos)
        .is_some_and(|piece| piece.color == color && kinds.contains(&piece.kind))
}

fn stepper_hits(
    board: &Board,
    square: Position,
    color: Color,
    offsets: &[Offset],
    kind: PieceKind,
) -> bool {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| square.offset(d_row, d_col))
        .any(|pos| holds(board, pos, color, &[kind]))
}

fn slider_hits(
    board: &Board,
    square: Position,
    color: Color,
    directions: &[Offset],
    kinds: &[PieceKind],
) -> bool {
    directions.iter().any(|&direction| {
        first_piece_along(board, square, direction)
            .is_some_and(|(_, piece)| piece.color == color && kinds.contains(&piece.kind))
    })
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    fn put(board: Board, row: u8, col: u8, kind: PieceKind, color: Color) -> Board {
        board.with_piece(Position::new(row, col), Some(Piece::new(kind, color)))
    }

    #[test]
    fn pawn_attacks_diagonal_but_not_forward() {
        let board = put(Board::empty(), 1, 4, PieceKind::Pawn, Color::Light);
        assert!(is_square_attacked(&board, Position::new(2, 3), Color::Light));
        assert!(is_square_attacked(&board, Position::new(2, 5), Color::Light));
        assert!(!is_square_attacked(&board, Position::new(2, 4), Color::Light));
        assert!(!is_square_attacked(&board, Position::new(0, 3), Color::Light));
    }

    #[test]
    fn sliders_are_blocked_by_any_piece() {
        let board = put(Board::empty(), 0, 0, PieceKind::Rook, Color::Dark);
        assert!(is_square_attacked(&board, Position::new(0, 7), Color::Dark));
        let blocked = put(board, 0, 3, PieceKind::Pawn, Color::Light);
        assert!(!is_square_attacked(&blocked, Position::new(0, 7), Color::Dark));
        assert!(is_square_attacked(&blocked, Position::new(0, 3), Color::Dark));
    }

    #[test]
    fn queen_attacks_along_diagonal() {
        let board = put(Board::empty(), 3, 3, PieceKind::Queen, Color::Light);
        assert!(is_square_attacked(&board, Position::new(6, 6), Color::Light));
        assert!(!is_square_attacked(&board, Position::new(5, 6), Color::Light));
    }

    #[test]
    fn knight_gives_check() {
        let board = put(Board::empty(), 0, 4, PieceKind::King, Color::Light);
        let board = put(board, 2, 3, PieceKind::Knight, Color::Dark);
        assert!(is_king_in_check(&board, Color::Light));
        assert!(!is_king_in_check(&Board::initial(), Color::Light));
    }
}
