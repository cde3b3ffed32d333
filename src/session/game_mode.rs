//! Who moves for each side.
//!
//! The rules core never looks at this; drivers ask `controller` to decide
//! whether to wait for a human click, run an engine, or poll a remote peer.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum GameMode {
    TwoPlayers,
    #[serde(rename_all = "camelCase")]
    OnePlayer { engine_color: Color },
    AutoPlay,
    #[serde(rename_all = "camelCase")]
    Online { local_color: Color },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::OnePlayer {
            engine_color: Color::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    Human,
    Engine,
    Remote,
}

impl GameMode {
    pub fn controller(self, color: Color) -> Controller {
        match self {
            GameMode::TwoPlayers => Controller::Human,
            GameMode::OnePlayer { engine_color } if engine_color == color => Controller::Engine,
            GameMode::OnePlayer { .. } => Controller::Human,
            GameMode::AutoPlay => Controller::Engine,
            GameMode::Online { local_color } if local_color == color => Controller::Human,
            GameMode::Online { .. } => Controller::Remote,
        }
    }

    /// Whether a local engine ever moves in this mode.
    pub fn uses_engine(self) -> bool {
        [Color::Light, Color::Dark]
            .into_iter()
            .any(|color| self.controller(color) == Controller::Engine)
    }
}

#[cfg(test)]
mod tests {
    use super::{Controller, GameMode};
    use crate::game_state::chess_types::Color;

    #[test]
    fn controllers_follow_the_mode() {
        let vs_ai = GameMode::default();
        assert_eq!(vs_ai.controller(Color::Light), Controller::Human);
        assert_eq!(vs_ai.controller(Color::Dark), Controller::Engine);

        let online = GameMode::Online {
            local_color: Color::Dark,
        };
        assert_eq!(online.controller(Color::Light), Controller::Remote);
        assert_eq!(online.controller(Color::Dark), Controller::Human);
        assert!(!online.uses_engine());

        assert_eq!(GameMode::AutoPlay.controller(Color::Light), Controller::Engine);
        assert!(!GameMode::TwoPlayers.uses_engine());
    }

    #[test]
    fn mode_round_trips_through_json() {
        let json = r#"{"mode":"onePlayer","engineColor":"white"}"#;
        let mode: GameMode = serde_json::from_str(json).expect("mode JSON should parse");
        assert_eq!(
            mode,
            GameMode::OnePlayer {
                engine_color: Color::Light
            }
        );
    }
}
