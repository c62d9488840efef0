use super::*;
use rsb_core::*;
use rsb_gameplay::Choice;
use rsb_gameplay::Score;
use rsb_gameplay::resolve;
use std::collections::BTreeMap;
use std::time::Duration;
use std::time::Instant;

/// Opaque session identifier of the form `game_NNNN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Draws a random four-digit id. Callers re-roll on collision.
    pub fn random() -> Self {
        Self::from(rand::random_range(SESSION_TAG_MIN..=SESSION_TAG_MAX))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u16> for SessionId {
    fn from(tag: u16) -> Self {
        Self(format!("{}{}", SESSION_PREFIX, tag))
    }
}
impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Match lifecycle. Moves forward only, except rematch (finished → playing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Waiting,
    Playing,
    Finished,
}

/// What a submitted choice did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Session is not playing; nothing changed.
    Ignored,
    /// Choice recorded; the opponent has yet to choose.
    Pending,
    /// Both chose; the round resolved and the match continues.
    Round(RoundResult),
    /// Both chose; the round resolved and it was the last one.
    Finished(RoundResult),
}

/// A two-seat best-of-N match.
///
/// Seats keep their positions for the lifetime of the session, so the
/// resolver always sees seat 0 as its first argument. A seat emptied by
/// a disconnect stays empty; the round it left behind is never resolved.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    seats: [Option<Seat>; N],
    round: usize,
    status: Status,
    history: Vec<RoundResult>,
    created: Instant,
}

impl Session {
    /// Opens a session with a single waiting participant.
    pub fn new(id: SessionId, seat: Seat) -> Self {
        Self {
            id,
            seats: [Some(seat), None],
            round: 1,
            status: Status::Waiting,
            history: Vec::new(),
            created: Instant::now(),
        }
    }
}

impl Session {
    pub fn id(&self) -> &SessionId {
        &self.id
    }
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }
    pub fn age(&self) -> Duration {
        self.created.elapsed()
    }
    /// Number of filled seats.
    pub fn occupancy(&self) -> usize {
        self.seats.iter().flatten().count()
    }
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().flatten()
    }
    pub fn seat(&self, conn: ID<Connection>) -> Option<&Seat> {
        self.seats().find(|s| s.conn() == conn)
    }
    pub fn contains(&self, conn: ID<Connection>) -> bool {
        self.seat(conn).is_some()
    }
    pub fn members(&self) -> Vec<ID<Connection>> {
        self.seats().map(Seat::conn).collect()
    }
    pub fn summaries(&self) -> Vec<Summary> {
        self.seats().map(Seat::summary).collect()
    }
    pub fn scores(&self) -> BTreeMap<ID<Connection>, Score> {
        self.seats().map(|s| (s.conn(), s.score())).collect()
    }
    /// True when every seat is filled and has chosen.
    pub fn ready(&self) -> bool {
        self.seats.iter().all(|s| s.as_ref().is_some_and(Seat::ready))
    }
}

impl Session {
    /// Seats a second participant, which starts play. A third is turned away.
    pub fn join(&mut self, seat: Seat) -> Result<(), SessionError> {
        if self.contains(seat.conn()) {
            return Ok(());
        }
        let slot = self
            .seats
            .iter_mut()
            .find(|s| s.is_none())
            .ok_or_else(|| SessionError::SessionFull(self.id.clone()))?;
        *slot = Some(seat);
        if self.occupancy() == N && self.status == Status::Waiting {
            self.status = Status::Playing;
            log::debug!("[session {}] playing", self.id);
        }
        Ok(())
    }
    /// Records a choice and resolves the round once both seats are ready.
    pub fn choose(&mut self, conn: ID<Connection>, choice: Choice) -> Result<Progress, SessionError> {
        let seat = self
            .seats
            .iter_mut()
            .flatten()
            .find(|s| s.conn() == conn)
            .ok_or(SessionError::NotAParticipant(conn))?;
        if self.status != Status::Playing {
            log::debug!("[session {}] ignoring choice while {:?}", self.id, self.status);
            return Ok(Progress::Ignored);
        }
        seat.choose(choice);
        log::trace!("[session {}] {} is ready", self.id, conn.short());
        match self.ready() {
            true => Ok(self.advance()),
            false => Ok(Progress::Pending),
        }
    }
    /// Resets to round one with zeroed scores. Participants are kept.
    pub fn rematch(&mut self) -> Result<(), SessionError> {
        if self.occupancy() < N {
            return Err(SessionError::Vacant(self.id.clone()));
        }
        self.round = 1;
        self.status = Status::Playing;
        self.history.clear();
        self.seats.iter_mut().flatten().for_each(Seat::reset);
        log::debug!("[session {}] restarted", self.id);
        Ok(())
    }
    /// Empties the seat held by `conn`, returning how many remain filled.
    /// Returns None if `conn` held no seat.
    pub fn leave(&mut self, conn: ID<Connection>) -> Option<usize> {
        let slot = self
            .seats
            .iter_mut()
            .find(|s| matches!(s, Some(seat) if seat.conn() == conn))?;
        *slot = None;
        log::debug!("[session {}] {} left", self.id, conn.short());
        Some(self.occupancy())
    }
}

impl Session {
    fn advance(&mut self) -> Progress {
        let [Some(a), Some(b)] = &self.seats else {
            return Progress::Pending;
        };
        let (Some(x), Some(y)) = (a.choice(), b.choice()) else {
            return Progress::Pending;
        };
        let conns = [a.conn(), b.conn()];
        let outcome = resolve(x, y);
        self.seats
            .iter_mut()
            .flatten()
            .enumerate()
            .for_each(|(i, seat)| seat.record(outcome.verdict(i)));
        let winner = outcome
            .winner()
            .map(|i| Winner::Player(conns[i]))
            .unwrap_or(Winner::Tie);
        let choices = BTreeMap::from([(conns[0], x), (conns[1], y)]);
        let result = RoundResult::new(self.round, choices, winner, self.scores());
        log::debug!("[session {}] {}", self.id, result);
        self.history.push(result.clone());
        self.seats.iter_mut().flatten().for_each(Seat::clear);
        self.round += 1;
        if self.round > MAX_ROUNDS {
            self.status = Status::Finished;
            log::info!("[session {}] finished", self.id);
            Progress::Finished(result)
        } else {
            Progress::Round(result)
        }
    }
}
