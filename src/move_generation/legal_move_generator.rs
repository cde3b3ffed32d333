//! Legality filter.
//!
//! Every candidate, castling included, is played on a scratch board and
//! dropped when the mover's king is attacked afterwards.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_rank, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{advance_game_state, apply_castling, apply_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::{
    pseudo_legal_destinations, GeneratedMove, MoveGenerator,
};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        all_legal_moves(game_state)
            .into_iter()
            .map(|chess_move| GeneratedMove {
                chess_move,
                game_after_move: advance_game_state(game_state, chess_move),
            })
            .collect()
    }
}

/// Legal destinations for the piece on `from`. Empty when the square is
/// empty or holds a piece that is not `mover`'s.
pub fn legal_destinations(
    board: &Board,
    from: Position,
    mover: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color != mover {
        return Vec::new();
    }

    let mut legal: Vec<Position> = pseudo_legal_destinations(board, from, en_passant_target)
        .into_iter()
        .filter(|&to| {
            let next = apply_move(board, from, to, mover, en_passant_target);
            !is_king_in_check(&next, mover)
        })
        .collect();

    if piece.kind == PieceKind::King {
        legal.extend(castling_destinations(board, from, mover, castling_rights));
    }

    legal
}

/// Two-square king destinations for each castling side currently allowed.
fn castling_destinations(
    board: &Board,
    from: Position,
    mover: Color,
    castling_rights: CastlingRights,
) -> Vec<Position> {
    let row = back_rank(mover);
    if from != Position::new(row, KING_HOME_COL) {
        return Vec::new();
    }

    let enemy = mover.opposite();
    let rook_home = |col: u8| {
        board
            .piece_at(Position::new(row, col))
            .is_some_and(|piece| piece.is(PieceKind::Rook, mover))
    };
    let empty = |cols: &[u8]| cols.iter().all(|&col| board.is_empty(Position::new(row, col)));
    let safe = |cols: &[u8]| {
        cols.iter()
            .all(|&col| !is_square_attacked(board, Position::new(row, col), enemy))
    };

    let mut out = Vec::with_capacity(2);

    if castling_rights.kingside(mover)
        && rook_home(KINGSIDE_ROOK_COL)
        && empty(&[5, 6])
        && safe(&[KING_HOME_COL, 5, 6])
    {
        out.push(Position::new(row, 6));
    }

    if castling_rights.queenside(mover)
        && rook_home(QUEENSIDE_ROOK_COL)
        && empty(&[1, 2, 3])
        && safe(&[KING_HOME_COL, 3, 2])
    {
        out.push(Position::new(row, 2));
    }

    out.retain(|&to| !is_king_in_check(&apply_castling(board, from, to), mover));
    out
}

/// Whether `mover` has at least one legal move. Stops at the first piece
/// with a non-empty destination set.
pub fn any_legal_moves(
    board: &Board,
    mover: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
) -> bool {
    board.pieces_of(mover).any(|(from, _)| {
        !legal_destinations(board, from, mover, castling_rights, en_passant_target).is_empty()
    })
}

/// Every legal move for the side to move, in board order.
pub fn all_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let board = &game_state.board;
    let mover = game_state.side_to_move;
    let mut out = Vec::with_capacity(48);
    for (from, _) in board.pieces_of(mover) {
        for to in legal_destinations(
            board,
            from,
            mover,
            game_state.castling_rights,
            game_state.en_passant_target,
        ) {
            out.push(ChessMove::new(from, to));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{all_legal_moves, any_legal_moves, legal_destinations, LegalMoveGenerator};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::MoveGenerator;

    #[test]
    fn generator_finds_twenty_moves_on_startpos() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game).len(), 20);
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&game).len(), 20);
    }

    #[test]
    fn wrong_color_or_empty_origin_yields_nothing() {
        let game = GameState::new_game();
        let rights = CastlingRights::all();
        assert!(legal_destinations(&game.board, Position::new(6, 0), Color::Light, rights, None).is_empty());
        assert!(legal_destinations(&game.board, Position::new(3, 3), Color::Light, rights, None).is_empty());
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = legal_destinations(
            &game.board,
            Position::new(1, 4),
            Color::Light,
            game.castling_rights,
            None,
        );
        assert!(moves.is_empty());
    }

    #[test]
    fn kingside_castling_requires_empty_and_safe_path() {
        let open = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        let king = Position::new(0, 4);
        let dests = legal_destinations(&open.board, king, Color::Light, open.castling_rights, None);
        assert!(dests.contains(&Position::new(0, 6)));

        let blocked = GameState::from_fen("4k3/8/8/8/8/8/8/4KB1R w K - 0 1").expect("FEN should parse");
        let dests = legal_destinations(&blocked.board, king, Color::Light, blocked.castling_rights, None);
        assert!(!dests.contains(&Position::new(0, 6)));

        let attacked = GameState::from_fen("4k3/8/8/8/8/8/5r2/4K2R w K - 0 1").expect("FEN should parse");
        let dests = legal_destinations(&attacked.board, king, Color::Light, attacked.castling_rights, None);
        assert!(!dests.contains(&Position::new(0, 6)));

        let in_check = GameState::from_fen("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1").expect("FEN should parse");
        let dests = legal_destinations(&in_check.board, king, Color::Light, in_check.castling_rights, None);
        assert!(!dests.contains(&Position::new(0, 6)));

        let no_right = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1").expect("FEN should parse");
        let dests = legal_destinations(&no_right.board, king, Color::Light, no_right.castling_rights, None);
        assert!(!dests.contains(&Position::new(0, 6)));
    }

    #[test]
    fn queenside_castling_ignores_attack_on_b_file() {
        let game = GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        let dests = legal_destinations(
            &game.board,
            Position::new(0, 4),
            Color::Light,
            game.castling_rights,
            None,
        );
        assert!(dests.contains(&Position::new(0, 2)));
    }

    #[test]
    fn checkmated_side_has_no_legal_moves() {
        let game = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        assert!(!any_legal_moves(&game.board, Color::Light, game.castling_rights, None));
        assert!(any_legal_moves(&game.board, Color::Dark, game.castling_rights, None));
    }
}
