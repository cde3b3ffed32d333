//! Perft node counting over any `MoveGenerator`.
//!
//! Leaf counts at a fixed depth are compared against published numbers to
//! validate move generation. Only positions that need no underpromotion can
//! match, since pawns always promote to a queen here.

use std::thread;

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::MoveGenerator;

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(generator, &mv.game_after_move, depth - 1))
        .sum()
}

/// Per-root-move leaf counts, for diffing against another generator.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(ChessMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_legal_moves(game_state)
        .into_iter()
        .map(|mv| (mv.chess_move, perft(generator, &mv.game_after_move, depth - 1)))
        .collect()
}

/// Same count as `perft`, one scoped worker thread per root move.
pub fn perft_multi_threaded<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> u64 {
    if depth <= 1 {
        return perft(generator, game_state, depth);
    }

    let root_moves = generator.generate_legal_moves(game_state);
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| scope.spawn(move || perft(generator, &mv.game_after_move, depth - 1)))
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(nodes) => nodes,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .sum()
    })
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, perft_multi_threaded};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn counts(fen: &str, depths: &[u64]) {
        let game = GameState::from_fen(fen).expect("perft FEN should parse");
        for (idx, expected) in depths.iter().enumerate() {
            let depth = (idx + 1) as u8;
            assert_eq!(
                perft(&LegalMoveGenerator, &game, depth),
                *expected,
                "{fen} at depth {depth}"
            );
        }
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        assert_eq!(perft(&LegalMoveGenerator, &GameState::new_game(), 0), 1);
    }

    #[test]
    fn start_position_counts() {
        counts(GameState::starting_fen(), &[20, 400, 8902]);
    }

    #[test]
    fn kiwipete_counts() {
        counts(KIWIPETE_FEN, &[48, 2039]);
    }

    #[test]
    fn rook_and_pawn_endgame_counts() {
        counts(ENDGAME_FEN, &[14, 191, 2812]);
    }

    #[test]
    fn divide_and_threaded_totals_agree() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("perft FEN should parse");
        let divided = perft_divide(&LegalMoveGenerator, &game, 2);
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 2039);
        assert_eq!(perft_multi_threaded(&LegalMoveGenerator, &game, 2), 2039);
    }
}
