//! One game from start to finish.
//!
//! `GameSession` is the orchestration the rules functions expect a caller
//! to perform: it validates a move against the legal set, advances the
//! state, records the new position and resolves the status with the
//! repetition signal. History starts empty; only positions reached by a
//! move or a remote sync are counted. Each session owns its own `PositionHistory`, so two
//! sessions never share repetition counts.

use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{ChessMove, Position};
use crate::game_state::game_state::GameState;
use crate::game_state::game_status::{resolve_state, DrawReason, GameResult, StatusReport};
use crate::game_state::position_history::PositionHistory;
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_destinations};
use crate::session::remote_snapshot::RemoteGameState;

#[derive(Debug, Clone)]
pub struct GameSession {
    game_state: GameState,
    history: PositionHistory,
    last_move: Option<ChessMove>,
    status: StatusReport,
    move_count: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    /// Starts a session at an arbitrary position with an empty history.
    pub fn from_state(game_state: GameState) -> Self {
        let mut session = Self {
            game_state,
            history: PositionHistory::new(),
            last_move: None,
            status: StatusReport::playing(),
            move_count: 0,
        };
        session.start_from(game_state);
        session
    }

    pub fn reset(&mut self) {
        self.start_from(GameState::new_game());
        info!("game reset");
    }

    fn start_from(&mut self, game_state: GameState) {
        self.game_state = game_state;
        self.history.clear();
        self.last_move = None;
        self.move_count = 0;
        self.status = resolve_state(&game_state, None);
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<ChessMove> {
        self.last_move
    }

    #[inline]
    pub fn status(&self) -> StatusReport {
        self.status
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.status.result()
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Destinations for the piece on `from`; empty once the game is over or
    /// when `from` holds no piece of the side to move.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        if self.status.status.is_terminal() {
            return Vec::new();
        }
        let state = &self.game_state;
        legal_destinations(
            &state.board,
            from,
            state.side_to_move,
            state.castling_rights,
            state.en_passant_target,
        )
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        if self.status.status.is_terminal() {
            return Vec::new();
        }
        all_legal_moves(&self.game_state)
    }

    pub fn play_move(&mut self, from: Position, to: Position) -> ChessResult<StatusReport> {
        let result = self.result();
        if result.is_terminal() {
            return Err(ChessError::GameOver(result));
        }
        if !self.legal_destinations(from).contains(&to) {
            return Err(ChessError::IllegalMove { from, to });
        }

        let mv = ChessMove::new(from, to);
        let next = self.game_state.apply(mv);
        let occurrences = self.history.record(&next.board, next.side_to_move);

        self.game_state = next;
        self.last_move = Some(mv);
        self.move_count += 1;
        self.status = resolve_state(&next, self.draw_signal());

        debug!(
            mv = %mv,
            ply = self.move_count,
            occurrences,
            status = ?self.status.status,
            "move played"
        );
        if self.status.status.is_terminal() {
            info!(result = ?self.result(), plies = self.move_count, "game finished");
        }

        Ok(self.status)
    }

    fn draw_signal(&self) -> Option<DrawReason> {
        self.history
            .any_threefold()
            .then_some(DrawReason::ThreefoldRepetition)
    }

    /// Asks `engine` for a move and plays it.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> ChessResult<ChessMove> {
        let result = self.result();
        if result.is_terminal() {
            return Err(ChessError::GameOver(result));
        }

        let output = engine.choose_move(&self.game_state);
        let mv = output
            .best_move
            .ok_or(ChessError::GameOver(self.result()))?;
        self.play_move(mv.from, mv.to)?;
        Ok(mv)
    }

    /// Adopts a position received from a remote peer. A snapshot that
    /// differs from the current position counts as one more occurrence.
    pub fn sync_remote(&mut self, snapshot: &RemoteGameState) -> ChessResult<StatusReport> {
        let next = snapshot.to_game_state(self.game_state.castling_rights)?;
        if next == self.game_state {
            return Ok(self.status);
        }

        self.history.record(&next.board, next.side_to_move);

        self.game_state = next;
        self.last_move = None;
        self.status = resolve_state(&next, self.draw_signal());

        info!(
            turn = ?next.side_to_move,
            remote_winner = ?snapshot.winner,
            status = ?self.status.status,
            "synced remote position"
        );
        Ok(self.status)
    }
}
