//! Rock-paper-scissors matchmaking and live sessions.
//!
//! This facade crate re-exports all public rsb crates for convenient access.
//!
//! ## Crate Organization
//!
//! ### Core Types
//! - [`core`] — Typed identifiers, constants, and logging setup
//! - [`gameplay`] — Choices, round resolution, scorekeeping, solo play
//!
//! ### Application
//! - [`gameroom`] — Matchmaking queue, sessions, and the wire protocol
//! - [`hosting`] — WebSocket bridge and outbound switchboard
//! - [`server`] — HTTP server and environment config

pub use rsb_core     as core;
pub use rsb_gameplay as gameplay;
pub use rsb_gameroom as gameroom;
pub use rsb_hosting  as hosting;
pub use rsb_server   as server;

// Re-export commonly used types at the root
pub use rsb_core::*;
