//! Engine abstraction used by sessions and the auto-play driver.
//!
//! Lets a host pick the computer player at runtime behind one trait object
//! without the rules core knowing which side, if any, is computer-controlled.

use crate::errors::ChessResult;
use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<ChessMove>,
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> EngineOutput;
}
