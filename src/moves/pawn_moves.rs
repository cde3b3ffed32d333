use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::{Color, Position};

/// Diagonal squares a pawn of `color` on `from` attacks, occupied or not.
#[inline]
pub fn pawn_attack_squares(color: Color, from: Position) -> Vec<Position> {
    let forward = color.forward();
    [-1i8, 1]
        .iter()
        .filter_map(|&d_col| from.offset(forward, d_col))
        .collect()
}

pub fn pawn_destinations(
    board: &Board,
    from: Position,
    color: Color,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let forward = color.forward();
    let mut out = Vec::with_capacity(4);

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row == pawn_start_rank(color) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_attack_squares(color, from) {
        match board.color_at(to) {
            Some(other) if other != color => out.push(to),
            None if en_passant_target == Some(to) => out.push(to),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{pawn_attack_squares, pawn_destinations};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn light_pawn_attacks_from_e2() {
        let mut attacks = pawn_attack_squares(Color::Light, Position::new(1, 4));
        attacks.sort();
        assert_eq!(attacks, vec![Position::new(2, 3), Position::new(2, 5)]);
    }

    #[test]
    fn dark_pawn_attacks_from_a7_stay_on_board() {
        assert_eq!(
            pawn_attack_squares(Color::Dark, Position::new(6, 0)),
            vec![Position::new(5, 1)]
        );
    }

    #[test]
    fn starting_pawn_can_advance_one_or_two() {
        let board = Board::initial();
        let targets = pawn_destinations(&board, Position::new(1, 4), Color::Light, None);
        assert_eq!(targets, vec![Position::new(2, 4), Position::new(3, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::initial().with_piece(
            Position::new(2, 4),
            Some(Piece::new(PieceKind::Knight, Color::Dark)),
        );
        let targets = pawn_destinations(&board, Position::new(1, 4), Color::Light, None);
        assert!(targets.is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_and_onto_en_passant_target() {
        let board = Board::empty()
            .with_piece(Position::new(4, 4), Some(Piece::new(PieceKind::Pawn, Color::Light)))
            .with_piece(Position::new(4, 3), Some(Piece::new(PieceKind::Pawn, Color::Dark)))
            .with_piece(Position::new(5, 5), Some(Piece::new(PieceKind::Rook, Color::Dark)));

        let without = pawn_destinations(&board, Position::new(4, 4), Color::Light, None);
        assert!(without.contains(&Position::new(5, 5)));
        assert!(!without.contains(&Position::new(5, 3)));

        let with = pawn_destinations(
            &board,
            Position::new(4, 4),
            Color::Light,
            Some(Position::new(5, 3)),
        );
        assert!(with.contains(&Position::new(5, 3)));
    }
}
