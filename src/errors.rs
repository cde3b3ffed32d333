//! Errors used at the edges of the rules core.
//!
//! Rule functions (move generation, legality, status resolution) are total
//! and never fail. `ChessError` covers the seams around them: a session
//! refusing a move, text parsing, remote snapshot conversion, and engine
//! configuration.

use crate::game_state::chess_types::Position;
use crate::game_state::game_status::GameResult;

/// Unified error type for the session, engine and parsing layers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The requested move is not in the legal set for the side to move.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Position, to: Position },

    /// A move was submitted after the game reached a terminal result.
    #[error("game is already over: {0:?}")]
    GameOver(GameResult),

    /// Square text such as `"e9"` could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A remote board snapshot did not describe an 8x8 board.
    #[error("invalid remote snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for engine option {name}")]
    InvalidOptionValue { name: String, value: String },
}

/// Result alias for fallible session and engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
