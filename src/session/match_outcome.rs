//! Win/draw/loss classification for the stats collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::Color;
use crate::game_state::game_status::GameResult;

pub const WIN_POINTS: u32 = 10;
pub const DRAW_POINTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// Outcome of `result` as seen by `perspective`. `None` while the game
    /// is still in progress.
    pub fn from_result(result: GameResult, perspective: Color) -> Option<Self> {
        match result {
            GameResult::InProgress => None,
            GameResult::Draw(_) => Some(MatchOutcome::Draw),
            decided => Some(if decided.winner() == Some(perspective) {
                MatchOutcome::Win
            } else {
                MatchOutcome::Loss
            }),
        }
    }

    pub const fn points(self) -> u32 {
        match self {
            MatchOutcome::Win => WIN_POINTS,
            MatchOutcome::Draw => DRAW_POINTS,
            MatchOutcome::Loss => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub points: u32,
    pub finished_at: DateTime<Utc>,
}

impl MatchReport {
    pub fn new(outcome: MatchOutcome, finished_at: DateTime<Utc>) -> Self {
        Self {
            outcome,
            points: outcome.points(),
            finished_at,
        }
    }

    /// Report stamped with the current time, or `None` for an unfinished game.
    pub fn for_result(result: GameResult, perspective: Color) -> Option<Self> {
        MatchOutcome::from_result(result, perspective).map(|outcome| Self::new(outcome, Utc::now()))
    }
}
