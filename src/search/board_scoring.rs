//! Pluggable static evaluation.
//!
//! Search asks a `BoardScorer` for a score from the side to move's point of
//! view. `PieceSquareScorer` is the default: material plus a positional bonus
//! looked up in a per-kind 8x8 table.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Magnitude of a checkmate score; mates are offset by ply from the root.
pub const MATE_SCORE: i32 = 100_000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20_000,
    }
}

// Tables are written with row 0 as the owner's far rank and row 7 as the
// owner's back rank; `positional_bonus` flips them per color.
const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_TABLE: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

/// Positional bonus for `piece` standing on `pos`.
pub fn positional_bonus(piece: Piece, pos: Position) -> i32 {
    let table_row = match piece.color {
        Color::Light => 7 - pos.row as usize,
        Color::Dark => pos.row as usize,
    };
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[table_row][pos.col as usize]
}

/// Material plus positional bonus, own pieces minus `perspective`'s opponent.
pub fn evaluate_board(board: &Board, perspective: Color) -> i32 {
    board
        .pieces()
        .map(|(pos, piece)| {
            let value = piece_value(piece.kind) + positional_bonus(piece, pos);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        evaluate_board(&game_state.board, game_state.side_to_move)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let side = game_state.side_to_move;
        game_state
            .board
            .pieces()
            .map(|(_, piece)| {
                let value = piece_value(piece.kind);
                if piece.color == side {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced_for_both_sides() {
        let board = Board::initial();
        assert_eq!(evaluate_board(&board, Color::Light), 0);
        assert_eq!(evaluate_board(&board, Color::Dark), 0);
        assert_eq!(MaterialScorer.score(&GameState::new_game()), 0);
    }

    #[test]
    fn tables_mirror_between_colors() {
        let light_pawn = Piece::new(PieceKind::Pawn, Color::Light);
        let dark_pawn = Piece::new(PieceKind::Pawn, Color::Dark);
        // Seventh-rank pawns are one step from promotion for their owner.
        assert_eq!(positional_bonus(light_pawn, Position::new(6, 2)), 50);
        assert_eq!(positional_bonus(dark_pawn, Position::new(1, 2)), 50);

        let light_king = Piece::new(PieceKind::King, Color::Light);
        let dark_king = Piece::new(PieceKind::King, Color::Dark);
        assert_eq!(positional_bonus(light_king, Position::new(0, 6)), 30);
        assert_eq!(positional_bonus(dark_king, Position::new(7, 6)), 30);
    }

    #[test]
    fn missing_pawn_shows_up_from_both_perspectives() {
        let board = Board::initial().with_piece(Position::new(6, 3), None);
        let light = evaluate_board(&board, Color::Light);
        assert!(light > 0);
        assert_eq!(evaluate_board(&board, Color::Dark), -light);
    }

    #[test]
    fn scorer_follows_side_to_move() {
        let light_to_move = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let dark_to_move = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").expect("FEN should parse");
        assert!(PieceSquareScorer.score(&light_to_move) > 800);
        assert_eq!(
            PieceSquareScorer.score(&dark_to_move),
            -PieceSquareScorer.score(&light_to_move)
        );
    }
}
