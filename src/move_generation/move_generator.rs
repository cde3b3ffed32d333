//! Pseudo-legal destination dispatch and the legal move generator seam.
//!
//! `pseudo_legal_destinations` applies the per-piece patterns from `moves`
//! without looking at king safety. `MoveGenerator` is the interface search
//! and perft consume for fully legal moves.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, PieceKind, Position};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Destinations the piece on `from` could reach by its movement pattern,
/// ignoring whether its own king would be left in check. Empty origin yields
/// no destinations. Castling is not included.
pub fn pseudo_legal_destinations(
    board: &Board,
    from: Position,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, piece.color, en_passant_target),
        PieceKind::Knight => knight_destinations(board, from, piece.color),
        PieceKind::Bishop => bishop_destinations(board, from, piece.color),
        PieceKind::Rook => rook_destinations(board, from, piece.color),
        PieceKind::Queen => queen_destinations(board, from, piece.color),
        PieceKind::King => king_destinations(board, from, piece.color),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
