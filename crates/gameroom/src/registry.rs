use super::*;
use rsb_core::*;
use rsb_gameplay::Solo;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// What the registry knows about one live connection.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    sessions: BTreeSet<SessionId>,
    solo: Solo,
}

impl Entry {
    fn new(conn: ID<Connection>) -> Self {
        Self {
            name: default_name(conn),
            sessions: BTreeSet::new(),
            solo: Solo::default(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn sessions(&self) -> &BTreeSet<SessionId> {
        &self.sessions
    }
    pub fn solo(&self) -> &Solo {
        &self.solo
    }
}

/// Live connections, their display names, and the sessions they sit in.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<ID<Connection>, Entry>,
}

impl Registry {
    /// Registers a connection. Returns false if it was already known.
    pub fn connect(&mut self, conn: ID<Connection>) -> bool {
        match self.entries.contains_key(&conn) {
            true => false,
            false => {
                self.entries.insert(conn, Entry::new(conn));
                true
            }
        }
    }
    /// Forgets a connection, handing back everything it was attached to.
    pub fn disconnect(&mut self, conn: ID<Connection>) -> Option<Entry> {
        self.entries.remove(&conn)
    }
    /// Records the requested display name, falling back to the default
    /// when it is missing or blank. Returns the name in effect.
    pub fn rename(&mut self, conn: ID<Connection>, requested: Option<&str>) -> String {
        let entry = self.entry(conn);
        if let Some(name) = requested.map(str::trim).filter(|n| !n.is_empty()) {
            entry.name = name.to_string();
        }
        entry.name.clone()
    }
    pub fn name(&self, conn: ID<Connection>) -> Option<&str> {
        self.entries.get(&conn).map(Entry::name)
    }
    pub fn enlist(&mut self, conn: ID<Connection>, session: &SessionId) {
        self.entry(conn).sessions.insert(session.clone());
    }
    pub fn solo(&mut self, conn: ID<Connection>) -> &mut Solo {
        &mut self.entry(conn).solo
    }
    pub fn get(&self, conn: ID<Connection>) -> Option<&Entry> {
        self.entries.get(&conn)
    }
    pub fn contains(&self, conn: ID<Connection>) -> bool {
        self.entries.contains_key(&conn)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    fn entry(&mut self, conn: ID<Connection>) -> &mut Entry {
        self.entries.entry(conn).or_insert_with(|| Entry::new(conn))
    }
}
