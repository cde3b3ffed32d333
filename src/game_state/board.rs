//! 8x8 mailbox board.
//!
//! `Board` is a plain `Copy` value indexed `[row][col]`. Nothing hands out a
//! mutable view of a board someone else holds: every edit happens on a fresh
//! copy, so search nodes and history entries never alias each other.

use crate::game_state::chess_rules::{back_rank, pawn_start_rank, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting setup: 16 pieces per side.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            let home = back_rank(color);
            let pawns = pawn_start_rank(color);
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.squares[home as usize][col] = Some(Piece::new(*kind, color));
                board.squares[pawns as usize][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(|piece| piece.color)
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Returns a new board with `pos` set to `square`; `self` is untouched.
    #[must_use]
    pub fn with_piece(mut self, pos: Position, square: Option<Piece>) -> Self {
        self.set(pos, square);
        self
    }

    /// Only ever called on a board value the caller owns outright.
    #[inline]
    pub(crate) fn set(&mut self, pos: Position, square: Option<Piece>) {
        self.squares[pos.row as usize][pos.col as usize] = square;
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// All occupied squares, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Square of `color`'s king. Well-formed boards always have exactly one.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(pos, _)| pos)
    }
}
