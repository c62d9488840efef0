//! WebSocket hosting for live rock-paper-scissors matches.
//!
//! This crate is the transport around the session core: it owns one
//! outbound channel per socket, feeds inbound frames to the
//! [`rsb_gameroom::Manager`], and delivers the notices it returns.
//!
//! ## Core Types
//!
//! - [`Arena`] — Manager plus switchboard; bridges sockets to the core
//! - [`Switchboard`] — Connection id → outbound channel
//! - [`Handle`] — Channel endpoints for one connection
//!
//! ## HTTP Handlers
//!
//! The [`handlers`] submodule exposes actix-web routes: health and the
//! WebSocket upgrade.
mod arena;
mod handle;
mod switchboard;
pub mod handlers;

pub use arena::*;
pub use handle::*;
pub use switchboard::*;
