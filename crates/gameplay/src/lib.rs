//! Rock-paper-scissors rules with resolution and scorekeeping.
//!
//! Everything here is pure: no shared state, no I/O, no synchronization.
//! Multiplayer coordination lives in `rsb-gameroom`.
//!
//! ## Rules
//!
//! - [`Choice`] — One of rock, paper, scissors
//! - [`Outcome`] — Result of two simultaneous choices: tie, first, or second wins
//! - [`resolve`] — Total function over the 3×3 choice space
//!
//! ## Scorekeeping
//!
//! - [`Score`] — Wins, losses, and ties for one participant
//! - [`Verdict`] — A round seen from one participant's side
//! - [`Solo`] — Single-player rounds against a random CPU opponent
mod choice;
mod outcome;
mod score;
mod solo;

pub use choice::*;
pub use outcome::*;
pub use score::*;
pub use solo::*;
