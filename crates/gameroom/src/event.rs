use super::*;
use rsb_core::Connection;
use rsb_core::ID;
use rsb_gameplay::Score;
use rsb_gameplay::Throw;
use std::collections::BTreeMap;

/// Notices the core emits in response to inbound actions.
#[derive(Clone, Debug)]
pub enum Event {
    /// Transport accepted a new connection.
    Connected { player: ID<Connection> },
    /// No opponent yet; the requester is queued.
    Waiting,
    /// Two queued players were paired.
    MatchFound {
        session: SessionId,
        players: Vec<Summary>,
        status: Status,
    },
    /// A player locked in a choice. The value stays hidden until the round resolves.
    ChoiceAcknowledged { player: ID<Connection>, round: usize },
    /// Both players chose and the round was scored.
    RoundResult(RoundResult),
    /// The last round was scored.
    MatchFinished {
        scores: BTreeMap<ID<Connection>, Score>,
        history: Vec<RoundResult>,
    },
    /// The other participant disconnected.
    OpponentLeft { session: SessionId },
    /// The session was reset for another match.
    MatchRestarted {
        session: SessionId,
        players: Vec<Summary>,
        status: Status,
    },
    /// A single-player round against the CPU.
    Solo(Throw),
    /// The action was refused.
    Rejected(SessionError),
}

/// An event and the connections it is addressed to.
#[derive(Clone, Debug)]
pub struct Notice {
    pub to: Vec<ID<Connection>>,
    pub event: Event,
}

impl Notice {
    pub fn unicast(conn: ID<Connection>, event: Event) -> Self {
        Self {
            to: vec![conn],
            event,
        }
    }
    pub fn multicast(to: Vec<ID<Connection>>, event: Event) -> Self {
        Self { to, event }
    }
    pub fn reaches(&self, conn: ID<Connection>) -> bool {
        self.to.contains(&conn)
    }
}

/// Outbound delivery for notices.
///
/// The [`Manager`] posts each notice while it still holds the guard of the
/// state that produced it, so recipients observe notices in transition order.
/// Implementations must not block and must not call back into the manager.
pub trait Sink: std::fmt::Debug + Send + Sync {
    fn post(&self, notice: &Notice);
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Connected { player } => write!(f, "{} connected", player.short()),
            Event::Waiting => write!(f, "waiting for opponent"),
            Event::MatchFound { session, players, .. } => write!(
                f,
                "{} found: {}",
                session,
                players
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(" vs ")
            ),
            Event::ChoiceAcknowledged { player, round } => {
                write!(f, "{} chose in round {}", player.short(), round)
            }
            Event::RoundResult(result) => write!(f, "{}", result),
            Event::MatchFinished { history, .. } => {
                write!(f, "finished after {} rounds", history.len())
            }
            Event::OpponentLeft { session } => write!(f, "opponent left {}", session),
            Event::MatchRestarted { session, .. } => write!(f, "{} restarted", session),
            Event::Solo(throw) => write!(
                f,
                "solo {} vs {} -> {:?}",
                throw.choice, throw.opponent, throw.verdict
            ),
            Event::Rejected(e) => write!(f, "rejected: {}", e),
        }
    }
}
