use super::*;

/// Errors that can occur while decoding client frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    Malformed(String),
    Unsupported(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed message: {}", s),
            Self::Unsupported(s) => write!(f, "unsupported message type: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Handles Event to ServerMessage conversion and client frame parsing.
/// Centralizes the protocol layer between internal events and wire format.
pub struct Protocol;

impl Protocol {
    /// Converts an internal Event to a wire ServerMessage.
    pub fn encode(event: &Event) -> ServerMessage {
        match event {
            Event::Connected { player } => ServerMessage::connected(*player),
            Event::Waiting => ServerMessage::waiting(),
            Event::MatchFound {
                session,
                players,
                status,
            } => ServerMessage::MatchFound {
                game_id: session.clone(),
                players: players.clone(),
                status: *status,
            },
            Event::ChoiceAcknowledged { player, round } => ServerMessage::ChoiceAcknowledged {
                player: *player,
                round: *round,
            },
            Event::RoundResult(result) => ServerMessage::RoundResult(result.clone()),
            Event::MatchFinished { scores, history } => ServerMessage::MatchFinished {
                final_scores: scores.clone(),
                round_results: history.clone(),
            },
            Event::OpponentLeft { session } => ServerMessage::opponent_left(session.clone()),
            Event::MatchRestarted {
                session,
                players,
                status,
            } => ServerMessage::MatchRestarted {
                game_id: session.clone(),
                players: players.clone(),
                status: *status,
            },
            Event::Solo(throw) => ServerMessage::SoloResult {
                choice: throw.choice,
                opponent: throw.opponent,
                outcome: throw.verdict,
                score: throw.score,
            },
            Event::Rejected(e) => ServerMessage::rejected(e),
        }
    }
    /// Parses a client text frame.
    pub fn decode(s: &str) -> Result<ClientMessage, ProtocolError> {
        serde_json::from_str::<ClientMessage>(s).map_err(|e| {
            match serde_json::from_str::<serde_json::Value>(s)
                .ok()
                .as_ref()
                .and_then(|v| v.get("type"))
                .and_then(|t| t.as_str())
                .filter(|t| !ClientMessage::KINDS.contains(t))
            {
                Some(kind) => ProtocolError::Unsupported(kind.to_string()),
                None => ProtocolError::Malformed(e.to_string()),
            }
        })
    }
}
