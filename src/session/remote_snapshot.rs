//! Wire shape of a game shared with a remote peer.
//!
//! The remote store keeps an 8x8 grid of optional pieces indexed
//! `board[y][x]`, with `x` the column and `y` the row in the same
//! orientation as `Board`. Castling rights are not stored remotely; the
//! receiving side restricts its own rights to the kings and rooks that are
//! still on their home squares.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::restrict_castling_rights;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemotePosition {
    pub x: u8,
    pub y: u8,
}

impl RemotePosition {
    fn to_position(self) -> ChessResult<Position> {
        Position::try_new(self.y as i8, self.x as i8).ok_or_else(|| {
            ChessError::InvalidSnapshot(format!("square ({}, {}) is off the board", self.x, self.y))
        })
    }
}

impl From<Position> for RemotePosition {
    fn from(pos: Position) -> Self {
        Self {
            x: pos.col,
            y: pos.row,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePiece {
    pub piece_type: PieceKind,
    pub color: Color,
    pub position: RemotePosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteGameState {
    pub board: Vec<Vec<Option<RemotePiece>>>,
    pub current_turn: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_passant_target: Option<RemotePosition>,
    /// Nanoseconds since the Unix epoch.
    pub start_time: i64,
}

impl RemoteGameState {
    pub fn from_game_state(
        game_state: &GameState,
        winner: Option<Color>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let board = game_state
            .board
            .rows()
            .iter()
            .enumerate()
            .map(|(row, squares)| {
                squares
                    .iter()
                    .enumerate()
                    .map(|(col, square)| {
                        square.map(|piece| RemotePiece {
                            piece_type: piece.kind,
                            color: piece.color,
                            position: RemotePosition {
                                x: col as u8,
                                y: row as u8,
                            },
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            board,
            current_turn: game_state.side_to_move,
            winner,
            en_passant_target: game_state.en_passant_target.map(RemotePosition::from),
            start_time: started_at.timestamp_nanos_opt().unwrap_or_default(),
        }
    }

    /// Rebuilds a local state. `local_rights` are narrowed to what the
    /// remote board still allows; they are never widened.
    pub fn to_game_state(&self, local_rights: CastlingRights) -> ChessResult<GameState> {
        if self.board.len() != 8 {
            return Err(ChessError::InvalidSnapshot(format!(
                "expected 8 rows, found {}",
                self.board.len()
            )));
        }

        let mut board = Board::empty();
        for (row, squares) in self.board.iter().enumerate() {
            if squares.len() != 8 {
                return Err(ChessError::InvalidSnapshot(format!(
                    "row {row} has {} squares",
                    squares.len()
                )));
            }
            for (col, square) in squares.iter().enumerate() {
                let pos = Position::new(row as u8, col as u8);
                if let Some(remote) = square {
                    if remote.position.to_position()? != pos {
                        return Err(ChessError::InvalidSnapshot(format!(
                            "piece stored at {pos} claims to be at ({}, {})",
                            remote.position.x, remote.position.y
                        )));
                    }
                    board.set(pos, Some(Piece::new(remote.piece_type, remote.color)));
                }
            }
        }

        let en_passant_target = self
            .en_passant_target
            .map(RemotePosition::to_position)
            .transpose()?;

        Ok(GameState {
            board,
            side_to_move: self.current_turn,
            castling_rights: restrict_castling_rights(local_rights, &board),
            en_passant_target,
        })
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn started() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 18, 30, 0)
            .single()
            .expect("timestamp should be unambiguous")
    }

    #[test]
    fn snapshot_uses_column_x_and_row_y() {
        let game = GameState::new_game().apply(ChessMove::new(Position::new(1, 4), Position::new(3, 4)));
        let snapshot = RemoteGameState::from_game_state(&game, None, started());
        let pawn = snapshot.board[3][4].expect("pawn should be on e4");
        assert_eq!(pawn.position, RemotePosition { x: 4, y: 3 });
        assert_eq!(pawn.piece_type, PieceKind::Pawn);
        assert_eq!(snapshot.current_turn, Color::Dark);
        assert_eq!(snapshot.en_passant_target, Some(RemotePosition { x: 4, y: 2 }));
        assert_eq!(snapshot.started_at(), started());
    }

    #[test]
    fn json_contract_is_camel_case() {
        let snapshot = RemoteGameState::from_game_state(&GameState::new_game(), None, started());
        let json = serde_json::to_value(&snapshot).expect("snapshot should serialize");
        assert_eq!(json["currentTurn"], "white");
        assert_eq!(json["board"][0][4]["pieceType"], "king");
        assert!(json.get("winner").is_none());
        assert!(json.get("startTime").is_some());

        let back: RemoteGameState = serde_json::from_value(json).expect("snapshot should parse");
        assert_eq!(back, snapshot);
    }

    #[test]
    fn castling_rights_are_restricted_to_home_pieces() {
        let game = GameState::from_fen("r3k3/8/8/8/8/8/8/4K2R w KQkq - 0 1").expect("FEN should parse");
        let snapshot = RemoteGameState::from_game_state(&game, None, started());
        let restored = snapshot
            .to_game_state(CastlingRights::all())
            .expect("snapshot should convert");
        assert_eq!(restored.board, game.board);
        assert!(restored.castling_rights.light_kingside);
        assert!(!restored.castling_rights.light_queenside);
        assert!(!restored.castling_rights.dark_kingside);
        assert!(restored.castling_rights.dark_queenside);

        let narrowed = snapshot
            .to_game_state(CastlingRights::none())
            .expect("snapshot should convert");
        assert_eq!(narrowed.castling_rights, CastlingRights::none());
    }

    #[test]
    fn malformed_snapshots_are_rejected() {
        let mut snapshot = RemoteGameState::from_game_state(&GameState::new_game(), None, started());
        snapshot.board.pop();
        assert!(matches!(
            snapshot.to_game_state(CastlingRights::all()),
            Err(ChessError::InvalidSnapshot(_))
        ));

        let mut mislabeled = RemoteGameState::from_game_state(&GameState::new_game(), None, started());
        if let Some(piece) = mislabeled.board[0][0].as_mut() {
            piece.position = RemotePosition { x: 5, y: 5 };
        }
        assert!(matches!(
            mislabeled.to_game_state(CastlingRights::all()),
            Err(ChessError::InvalidSnapshot(_))
        ));
    }
}
