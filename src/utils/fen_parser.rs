//! FEN-to-GameState parser.
//!
//! Reads the placement, side-to-move, castling and en-passant fields. The
//! two clock fields are optional and ignored since the rules core keeps no
//! move clocks.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let invalid = |msg: &str| ChessError::InvalidFen(format!("{msg}: {fen}"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid("invalid move clock"))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    Ok(GameState {
        board: parse_board(board_part).map_err(|msg| invalid(&msg))?,
        side_to_move: parse_side_to_move(side_part).map_err(|msg| invalid(&msg))?,
        castling_rights: parse_castling_rights(castling_part).map_err(|msg| invalid(&msg))?,
        en_passant_target: parse_en_passant(en_passant_part).map_err(|msg| invalid(&msg))?,
    })
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as u8;
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                if u32::from(col) + empty_count > 8 {
                    return Err("rank has too many files".to_owned());
                }
                col += empty_count as u8;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("invalid piece character '{ch}'"))?;
            if col >= 8 {
                return Err("rank has too many files".to_owned());
            }
            board.set(Position::new(row, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err("rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("invalid side-to-move field '{side_part}'")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(format!("invalid castling character '{ch}'")),
        }
    }

    Ok(rights)
}

fn parse_en_passant(en_passant_part: &str) -> Result<Option<Position>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    algebraic_to_position(en_passant_part)
        .map(Some)
        .map_err(|e| e.to_string())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
