use super::*;
use rsb_core::*;
use rsb_gameplay::Choice;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::RwLock;

type Table = HashMap<SessionId, Arc<Mutex<Session>>>;

/// Owns the lobby, the connection registry, and every live session.
///
/// Each session sits behind its own mutex, so actions on one session are
/// serialized while different sessions proceed in parallel. The table,
/// lobby, and registry are guarded separately. Locks are always taken in
/// the order lobby, table, session, registry, and the registry is never
/// held while acquiring anything else.
///
/// Nothing here performs I/O. Every operation returns the [`Notice`]s it
/// produced and, when a [`Sink`] is attached, posts them to it before the
/// guards covering the transition are released. The sink is the last lock
/// in the order.
#[derive(Debug, Default)]
pub struct Manager {
    lobby: Mutex<Lobby>,
    registry: Mutex<Registry>,
    sessions: RwLock<Table>,
    sink: Option<Arc<dyn Sink>>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }
    /// A manager that posts every notice to `sink` in transition order.
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::default()
        }
    }
    /// Number of connections waiting for an opponent.
    pub fn waiting(&self) -> usize {
        lock(&self.lobby).len()
    }
    /// Number of live sessions.
    pub fn live(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }
    /// Number of registered connections.
    pub fn connections(&self) -> usize {
        lock(&self.registry).len()
    }
    /// Copy of a session's current state.
    pub fn snapshot(&self, id: &SessionId) -> Option<Session> {
        self.session(id).ok().map(|s| lock(&s).clone())
    }
}

impl Manager {
    /// Routes a decoded client message. Refusals come back as a notice
    /// addressed to the sender.
    pub fn dispatch(&self, conn: ID<Connection>, message: ClientMessage) -> Vec<Notice> {
        match message {
            ClientMessage::FindGame { player_name } => self.request(conn, player_name.as_deref()),
            ClientMessage::MakeChoice { game_id, choice } => self.choose(conn, &game_id, &choice),
            ClientMessage::PlayAgain { game_id } => self.rematch(&game_id),
            ClientMessage::Solo { choice } => self.solo(conn, &choice),
        }
        .unwrap_or_else(|e| {
            log::warn!("[manager] rejected {}: {}", conn.short(), e);
            self.emit(vec![Notice::unicast(conn, Event::Rejected(e))])
        })
    }
    /// Registers a fresh connection.
    pub fn connect(&self, conn: ID<Connection>) -> Vec<Notice> {
        lock(&self.registry).connect(conn);
        log::info!("[manager] {} connected", conn.short());
        self.emit(vec![Notice::unicast(conn, Event::Connected { player: conn })])
    }
    /// Pairs the requester with the longest-waiting connection, or queues it.
    pub fn request(&self, conn: ID<Connection>, name: Option<&str>) -> Result<Vec<Notice>, SessionError> {
        let mut lobby = lock(&self.lobby);
        let name = lock(&self.registry).rename(conn, name);
        if lobby.contains(conn) {
            return Ok(self.emit(vec![Notice::unicast(conn, Event::Waiting)]));
        }
        let Some(opponent) = lobby.dequeue() else {
            lobby.enqueue(conn);
            return Ok(self.emit(vec![Notice::unicast(conn, Event::Waiting)]));
        };
        let rival = lock(&self.registry).name(opponent).map(str::to_string);
        let Some(rival) = rival else {
            // a queued entry without a record can never pair, so it is not restored
            log::error!("[manager] queued {} has no registry entry, discarding it", opponent.short());
            return Err(SessionError::QueueInconsistency);
        };
        let mut sessions = write(&self.sessions);
        let id = match mint(&sessions) {
            Ok(id) => id,
            Err(e) => {
                lobby.restore(opponent);
                return Err(e);
            }
        };
        let mut session = Session::new(id.clone(), Seat::new(opponent, rival));
        if let Err(e) = session.join(Seat::new(conn, name)) {
            lobby.restore(opponent);
            return Err(e);
        }
        let notice = Notice::multicast(
            session.members(),
            Event::MatchFound {
                session: id.clone(),
                players: session.summaries(),
                status: session.status(),
            },
        );
        sessions.insert(id.clone(), Arc::new(Mutex::new(session)));
        let mut registry = lock(&self.registry);
        registry.enlist(opponent, &id);
        registry.enlist(conn, &id);
        drop(registry);
        log::info!("[manager] {} paired {} with {}", id, opponent.short(), conn.short());
        Ok(self.emit(vec![notice]))
    }
    /// Records a player's choice and resolves the round once both have chosen.
    pub fn choose(&self, conn: ID<Connection>, id: &SessionId, choice: &str) -> Result<Vec<Notice>, SessionError> {
        let choice = Choice::try_from(choice).map_err(|_| SessionError::InvalidChoice(choice.to_string()))?;
        let session = self.session(id)?;
        let mut session = lock(&session);
        let round = session.round();
        let members = session.members();
        let ack = || {
            Notice::multicast(
                members.clone(),
                Event::ChoiceAcknowledged { player: conn, round },
            )
        };
        let notices = match session.choose(conn, choice)? {
            Progress::Ignored => vec![],
            Progress::Pending => vec![ack()],
            Progress::Round(result) => vec![
                ack(),
                Notice::multicast(members.clone(), Event::RoundResult(result)),
            ],
            Progress::Finished(result) => vec![
                ack(),
                Notice::multicast(members.clone(), Event::RoundResult(result)),
                Notice::multicast(
                    members.clone(),
                    Event::MatchFinished {
                        scores: session.scores(),
                        history: session.history().to_vec(),
                    },
                ),
            ],
        };
        Ok(self.emit(notices))
    }
    /// Resets a session for another match between the same two players.
    pub fn rematch(&self, id: &SessionId) -> Result<Vec<Notice>, SessionError> {
        let session = self.session(id)?;
        let mut session = lock(&session);
        session.rematch()?;
        log::info!("[manager] {} rematch", id);
        Ok(self.emit(vec![Notice::multicast(
            session.members(),
            Event::MatchRestarted {
                session: id.clone(),
                players: session.summaries(),
                status: session.status(),
            },
        )]))
    }
    /// Plays one single-player round for `conn` against the CPU.
    pub fn solo(&self, conn: ID<Connection>, choice: &str) -> Result<Vec<Notice>, SessionError> {
        let choice = Choice::try_from(choice).map_err(|_| SessionError::InvalidChoice(choice.to_string()))?;
        let throw = lock(&self.registry).solo(conn).play(choice);
        Ok(self.emit(vec![Notice::unicast(conn, Event::Solo(throw))]))
    }
    /// Drops a connection from the lobby and from every session it sits in.
    /// Sessions left empty are destroyed; the rest are told the opponent left.
    pub fn disconnect(&self, conn: ID<Connection>) -> Vec<Notice> {
        let entry = {
            let mut lobby = lock(&self.lobby);
            lobby.remove(conn);
            lock(&self.registry).disconnect(conn)
        };
        log::info!("[manager] {} disconnected", conn.short());
        let Some(entry) = entry else {
            return vec![];
        };
        let mut notices = Vec::new();
        let mut sessions = write(&self.sessions);
        for id in entry.sessions() {
            let Some(handle) = sessions.get(id).cloned() else {
                continue;
            };
            let mut session = lock(&handle);
            let left = session.leave(conn);
            match left {
                Some(0) => {
                    log::info!("[manager] {} closed after {:?}", id, session.age());
                    drop(session);
                    sessions.remove(id);
                }
                Some(_) => notices.extend(self.emit(vec![Notice::multicast(
                    session.members(),
                    Event::OpponentLeft { session: id.clone() },
                )])),
                None => {}
            }
        }
        notices
    }
}

impl Manager {
    /// Posts notices to the sink. Call while the guard covering the
    /// transition is still held.
    fn emit(&self, notices: Vec<Notice>) -> Vec<Notice> {
        if let Some(sink) = self.sink.as_deref() {
            notices.iter().for_each(|notice| sink.post(notice));
        }
        notices
    }
    fn session(&self, id: &SessionId) -> Result<Arc<Mutex<Session>>, SessionError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownSession(id.clone()))
    }
}

/// Draws session ids until one is free.
fn mint(sessions: &Table) -> Result<SessionId, SessionError> {
    if sessions.len() >= SESSION_TAG_COUNT {
        return Err(SessionError::Exhausted);
    }
    loop {
        let id = SessionId::random();
        if !sessions.contains_key(&id) {
            return Ok(id);
        }
        log::debug!("[manager] {} collides, re-rolling", id);
    }
}

/// A panic while holding a lock cannot leave a session half-updated:
/// every mutation completes before any fallible step. Recover the guard.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
fn write<T>(rwlock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    rwlock.write().unwrap_or_else(PoisonError::into_inner)
}
