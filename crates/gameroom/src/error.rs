use super::*;
use rsb_core::Connection;
use rsb_core::ID;

/// Recoverable rejections of a requested action.
/// None of these alter session state; each is reported back to the
/// connection that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The submitted choice is not rock, paper, or scissors.
    InvalidChoice(String),
    /// No live session has this id.
    UnknownSession(SessionId),
    /// The connection holds no seat in the session.
    NotAParticipant(ID<Connection>),
    /// Both seats are already taken.
    SessionFull(SessionId),
    /// A rematch needs both seats filled.
    Vacant(SessionId),
    /// Every session id is in use.
    Exhausted,
    /// Lobby and registry disagree. Unreachable through the public API.
    QueueInconsistency,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChoice(s) => write!(f, "invalid choice: {}", s),
            Self::UnknownSession(id) => write!(f, "unknown session: {}", id),
            Self::NotAParticipant(conn) => write!(f, "not a participant: {}", conn),
            Self::SessionFull(id) => write!(f, "session full: {}", id),
            Self::Vacant(id) => write!(f, "opponent has left session: {}", id),
            Self::Exhausted => write!(f, "no session ids available"),
            Self::QueueInconsistency => write!(f, "matchmaking queue out of sync"),
        }
    }
}

impl std::error::Error for SessionError {}
