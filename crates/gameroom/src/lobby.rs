use rsb_core::Connection;
use rsb_core::ID;
use std::collections::VecDeque;

/// FIFO of connections waiting for an opponent.
/// A connection appears at most once.
#[derive(Debug, Default)]
pub struct Lobby {
    queue: VecDeque<ID<Connection>>,
}

impl Lobby {
    /// Appends a connection. Returns false if it was already waiting.
    pub fn enqueue(&mut self, conn: ID<Connection>) -> bool {
        if self.contains(conn) {
            false
        } else {
            self.queue.push_back(conn);
            log::debug!("[lobby] {} waiting ({} queued)", conn.short(), self.queue.len());
            true
        }
    }
    /// Pops the longest-waiting connection.
    pub fn dequeue(&mut self) -> Option<ID<Connection>> {
        self.queue.pop_front()
    }
    /// Puts a connection back at the head after a failed pairing.
    pub fn restore(&mut self, conn: ID<Connection>) {
        if !self.contains(conn) {
            self.queue.push_front(conn);
        }
    }
    /// Drops a connection from the queue. Returns false if it was absent.
    pub fn remove(&mut self, conn: ID<Connection>) -> bool {
        let before = self.queue.len();
        self.queue.retain(|c| *c != conn);
        before != self.queue.len()
    }
    pub fn contains(&self, conn: ID<Connection>) -> bool {
        self.queue.contains(&conn)
    }
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn first_in_first_out() {
        let mut lobby = Lobby::default();
        let ids = (0..3).map(|_| ID::default()).collect::<Vec<_>>();
        ids.iter().for_each(|id| assert!(lobby.enqueue(*id)));
        assert_eq!(lobby.dequeue(), Some(ids[0]));
        assert_eq!(lobby.dequeue(), Some(ids[1]));
        assert_eq!(lobby.dequeue(), Some(ids[2]));
        assert_eq!(lobby.dequeue(), None);
    }
    #[test]
    fn enqueue_is_idempotent() {
        let mut lobby = Lobby::default();
        let id = ID::default();
        assert!(lobby.enqueue(id));
        assert!(!lobby.enqueue(id));
        assert_eq!(lobby.len(), 1);
    }
    #[test]
    fn remove_absent_is_noop() {
        let mut lobby = Lobby::default();
        let id = ID::default();
        assert!(!lobby.remove(id));
        lobby.enqueue(id);
        assert!(lobby.remove(id));
        assert!(lobby.is_empty());
    }
    #[test]
    fn restore_goes_to_front() {
        let mut lobby = Lobby::default();
        let a = ID::default();
        let b = ID::default();
        lobby.enqueue(a);
        lobby.enqueue(b);
        let head = lobby.dequeue().unwrap();
        lobby.restore(head);
        assert_eq!(lobby.dequeue(), Some(a));
    }
}
