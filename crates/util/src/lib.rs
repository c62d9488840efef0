//! Core identifiers, traits, and constants for roshambo.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by every other crate in the workspace.

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for CPU opponents and testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Short human-readable tag: the last four hex digits of the UUID.
    /// The tail is random in v7 ids, unlike the timestamp head.
    pub fn short(&self) -> String {
        let hex = self.inner.simple().to_string();
        hex[hex.len() - 4..].to_string()
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.inner, serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <uuid::Uuid as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

/// Marker type for a live transport connection.
/// Connections are minted by the transport and have no lifecycle of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Number of seats in a session.
pub const N: usize = 2;
/// Rounds per match before the session finishes.
pub const MAX_ROUNDS: usize = 5;

// ============================================================================
// SESSION IDENTIFIERS
// Four-digit random tags, re-rolled on collision with a live session.
// ============================================================================
/// Prefix for every session identifier.
pub const SESSION_PREFIX: &str = "game_";
/// Smallest session tag.
pub const SESSION_TAG_MIN: u16 = 1000;
/// Largest session tag.
pub const SESSION_TAG_MAX: u16 = 9999;
/// Number of distinct session tags.
pub const SESSION_TAG_COUNT: usize = (SESSION_TAG_MAX - SESSION_TAG_MIN) as usize + 1;

// ============================================================================
// PLAYER NAMES
// ============================================================================
/// Prefix of the fallback display name for players who supply none.
pub const DEFAULT_NAME_PREFIX: &str = "Player_";

/// Fallback display name derived from the connection identifier.
pub fn default_name(conn: ID<Connection>) -> String {
    format!("{}{}", DEFAULT_NAME_PREFIX, conn.short())
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Sessions are in-memory only, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
