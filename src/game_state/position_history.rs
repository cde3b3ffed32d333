//! Repetition tracking for one game.
//!
//! Keys cover all 64 squares plus the side to move. Castling rights and the
//! en-passant target are deliberately left out of the key.

use std::collections::HashMap;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::REPETITION_LIMIT;
use crate::game_state::chess_types::{Color, Piece};

/// One byte per square (0 = empty, 1..=12 = piece) followed by the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([u8; 65]);

impl PositionKey {
    pub fn new(board: &Board, side_to_move: Color) -> Self {
        let mut bytes = [0u8; 65];
        for (pos, piece) in board.pieces() {
            bytes[pos.index()] = square_code(piece);
        }
        bytes[64] = side_to_move.index() as u8;
        Self(bytes)
    }
}

#[inline]
fn square_code(piece: Piece) -> u8 {
    1 + (piece.color.index() * 6 + piece.kind.index()) as u8
}

/// Occurrence counts keyed by position. Owned by exactly one game.
#[derive(Debug, Clone, Default)]
pub struct PositionHistory {
    counts: HashMap<PositionKey, u32>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Counts one more occurrence and returns the new total.
    pub fn record(&mut self, board: &Board, side_to_move: Color) -> u32 {
        let count = self
            .counts
            .entry(PositionKey::new(board, side_to_move))
            .or_insert(0);
        *count += 1;
        *count
    }

    pub fn occurrences(&self, board: &Board, side_to_move: Color) -> u32 {
        self.counts
            .get(&PositionKey::new(board, side_to_move))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_threefold(&self, board: &Board, side_to_move: Color) -> bool {
        self.occurrences(board, side_to_move) >= REPETITION_LIMIT
    }

    /// Whether any recorded position has reached the repetition limit.
    pub fn any_threefold(&self) -> bool {
        self.counts.values().any(|&count| count >= REPETITION_LIMIT)
    }

    pub fn distinct_positions(&self) -> usize {
        self.counts.len()
    }
}
