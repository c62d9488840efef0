//! Matchmaking and session state for live rock-paper-scissors matches.
//!
//! This crate is the shared-state core: it queues waiting connections,
//! pairs them into sessions, sequences their choices, scores rounds, and
//! cleans up after disconnects. It performs no I/O; every operation hands
//! back the notices a transport should deliver.
//!
//! ## Architecture
//!
//! - [`Manager`] — Sole mutator of the lobby, registry, and session table
//! - [`Session`] — Two-seat match: round counter, status, history
//! - [`Seat`] — One participant's identity, pending choice, and score
//! - [`RoundResult`] — Immutable snapshot of a resolved round
//! - [`Lobby`] — FIFO of connections awaiting an opponent
//! - [`Registry`] — Live connections and the sessions they sit in
//!
//! ## Messaging
//!
//! - [`Event`] / [`Notice`] — Outbound notices and their recipients
//! - [`ServerMessage`] / [`ClientMessage`] — JSON wire format
//! - [`Protocol`] — Conversion between the two layers
mod error;
mod event;
mod lobby;
mod manager;
mod message;
mod protocol;
mod registry;
mod round;
mod seat;
mod session;

pub use error::*;
pub use event::*;
pub use lobby::*;
pub use manager::*;
pub use message::*;
pub use protocol::*;
pub use registry::*;
pub use round::*;
pub use seat::*;
pub use session::*;
