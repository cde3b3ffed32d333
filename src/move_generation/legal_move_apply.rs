//! Board transitions for regular moves and castling.
//!
//! Each function returns a new `Board`/`GameState` value; the input is never
//! modified. Castling relocates king and rook in a single transition.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_rank, promotion_rank, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Plays a non-castling move. An en-passant capture removes the passed pawn
/// and a pawn reaching its promotion rank becomes a queen.
pub fn apply_move(
    board: &Board,
    from: Position,
    to: Position,
    mover: Color,
    en_passant_target: Option<Position>,
) -> Board {
    let mut next = *board;
    let Some(piece) = board.piece_at(from) else {
        return next;
    };

    next.set(from, None);

    if piece.kind == PieceKind::Pawn && en_passant_target == Some(to) && board.is_empty(to) {
        if let Some(captured) = to.offset(-mover.forward(), 0) {
            next.set(captured, None);
        }
    }

    let placed = if piece.kind == PieceKind::Pawn && to.row == promotion_rank(piece.color) {
        Piece::new(PieceKind::Queen, piece.color)
    } else {
        piece
    };
    next.set(to, Some(placed));

    next
}

/// Moves the king two squares from `from` to `to` and the matching rook to
/// the square the king passed over.
pub fn apply_castling(board: &Board, from: Position, to: Position) -> Board {
    let mut next = *board;
    let Some(king) = board.piece_at(from) else {
        return next;
    };

    let kingside = to.col > from.col;
    let (rook_from_col, rook_to_col) = if kingside {
        (KINGSIDE_ROOK_COL, to.col - 1)
    } else {
        (QUEENSIDE_ROOK_COL, to.col + 1)
    };
    let rook_from = Position::new(from.row, rook_from_col);
    let rook_to = Position::new(from.row, rook_to_col);
    let rook = board.piece_at(rook_from);

    next.set(from, None);
    next.set(rook_from, None);
    next.set(to, Some(king));
    next.set(rook_to, rook);

    next
}

/// A king moving two columns along its row.
#[inline]
pub fn is_castling_move(board: &Board, from: Position, to: Position) -> bool {
    board
        .piece_at(from)
        .is_some_and(|piece| piece.kind == PieceKind::King)
        && from.row == to.row
        && from.col.abs_diff(to.col) == 2
}

/// Dispatches to `apply_castling` or `apply_move`.
pub fn apply_chess_move(
    board: &Board,
    mv: ChessMove,
    mover: Color,
    en_passant_target: Option<Position>,
) -> Board {
    if is_castling_move(board, mv.from, mv.to) {
        apply_castling(board, mv.from, mv.to)
    } else {
        apply_move(board, mv.from, mv.to, mover, en_passant_target)
    }
}

/// Rights after `moved` travels `from -> to`. A king move clears both of its
/// rights; any move starting or ending on a rook home square clears the right
/// tied to that corner.
pub fn updated_castling_rights(
    rights: CastlingRights,
    moved: Piece,
    from: Position,
    to: Position,
) -> CastlingRights {
    let mut next = rights;

    if moved.kind == PieceKind::King {
        next.clear_color(moved.color);
    }

    for square in [from, to] {
        for color in [Color::Light, Color::Dark] {
            if square.row != back_rank(color) {
                continue;
            }
            if square.col == KINGSIDE_ROOK_COL {
                next.clear_kingside(color);
            } else if square.col == QUEENSIDE_ROOK_COL {
                next.clear_queenside(color);
            }
        }
    }

    next
}

/// Keeps only the rights whose king and rook still stand on their home
/// squares in `board`.
pub fn restrict_castling_rights(rights: CastlingRights, board: &Board) -> CastlingRights {
    let mut next = rights;
    for color in [Color::Light, Color::Dark] {
        let row = back_rank(color);
        let home = |col: u8, kind: PieceKind| {
            board
                .piece_at(Position::new(row, col))
                .is_some_and(|piece| piece.is(kind, color))
        };
        if !home(KING_HOME_COL, PieceKind::King) {
            next.clear_color(color);
        }
        if !home(KINGSIDE_ROOK_COL, PieceKind::Rook) {
            next.clear_kingside(color);
        }
        if !home(QUEENSIDE_ROOK_COL, PieceKind::Rook) {
            next.clear_queenside(color);
        }
    }
    next
}

/// The skipped square after a pawn's two-square advance, otherwise `None`.
pub fn next_en_passant_target(board: &Board, from: Position, to: Position) -> Option<Position> {
    let piece = board.piece_at(from)?;
    if piece.kind == PieceKind::Pawn && from.col == to.col && from.row.abs_diff(to.row) == 2 {
        Some(Position::new((from.row + to.row) / 2, from.col))
    } else {
        None
    }
}

/// Plays `mv` and performs the bookkeeping that follows every move: rights,
/// en-passant target and side to move.
pub fn advance_game_state(game_state: &GameState, mv: ChessMove) -> GameState {
    let board = &game_state.board;
    let mover = game_state.side_to_move;

    let Some(moved) = board.piece_at(mv.from) else {
        return *game_state;
    };

    GameState {
        board: apply_chess_move(board, mv, mover, game_state.en_passant_target),
        side_to_move: mover.opposite(),
        castling_rights: updated_castling_rights(game_state.castling_rights, moved, mv.from, mv.to),
        en_passant_target: next_en_passant_target(board, mv.from, mv.to),
    }
}
