use super::*;
use rsb_core::Connection;
use rsb_core::ID;
use rsb_gameplay::Choice;
use rsb_gameplay::Score;
use rsb_gameplay::Verdict;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Messages sent from server to client over WebSocket.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Initial connection confirmation with the assigned player id.
    Connected { player: ID<Connection> },
    /// Queued until another player asks for a match.
    WaitingForOpponent { message: String },
    /// Paired with an opponent.
    MatchFound {
        game_id: SessionId,
        players: Vec<Summary>,
        status: Status,
    },
    /// Someone in the session locked in a choice.
    ChoiceAcknowledged { player: ID<Connection>, round: usize },
    /// A round resolved.
    RoundResult(RoundResult),
    /// The match is over.
    MatchFinished {
        final_scores: BTreeMap<ID<Connection>, Score>,
        round_results: Vec<RoundResult>,
    },
    /// The opponent disconnected.
    OpponentLeft { game_id: SessionId, message: String },
    /// Scores were reset for another match.
    MatchRestarted {
        game_id: SessionId,
        players: Vec<Summary>,
        status: Status,
    },
    /// Single-player round result.
    SoloResult {
        choice: Choice,
        opponent: Choice,
        outcome: Verdict,
        score: Score,
    },
    /// The last request was refused.
    Rejected { reason: String },
}

/// Messages sent from client to server over WebSocket.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ask to be paired with the next waiting player.
    FindGame {
        #[serde(default)]
        player_name: Option<String>,
    },
    /// Submit a throw. Kept as text so unknown throws can be rejected by name.
    MakeChoice { game_id: SessionId, choice: String },
    /// Reset a session for another match.
    PlayAgain { game_id: SessionId },
    /// Play one round against the CPU.
    Solo { choice: String },
}

impl ClientMessage {
    pub const KINDS: [&'static str; 4] = ["find_game", "make_choice", "play_again", "solo"];
}

impl ServerMessage {
    pub fn connected(player: ID<Connection>) -> Self {
        Self::Connected { player }
    }
    pub fn waiting() -> Self {
        Self::WaitingForOpponent {
            message: "Waiting for opponent...".to_string(),
        }
    }
    pub fn opponent_left(game_id: SessionId) -> Self {
        Self::OpponentLeft {
            game_id,
            message: "Opponent disconnected".to_string(),
        }
    }
    pub fn rejected(reason: impl ToString) -> Self {
        Self::Rejected {
            reason: reason.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
