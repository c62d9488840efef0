use rsb_core::Connection;
use rsb_core::ID;
use rsb_gameroom::Notice;
use rsb_gameroom::Protocol;
use rsb_gameroom::ServerMessage;
use rsb_gameroom::Sink;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

type Lines = HashMap<ID<Connection>, UnboundedSender<String>>;

/// Routes outbound JSON to live connections.
/// Implements the send-to-one and send-to-group primitives the core relies on.
/// Pushing onto an unbounded channel never blocks, so the manager can post
/// here while holding its own guards.
#[derive(Debug, Default)]
pub struct Switchboard {
    lines: RwLock<Lines>,
}

impl Switchboard {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn register(&self, conn: ID<Connection>, tx: UnboundedSender<String>) {
        self.lines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(conn, tx);
    }
    pub fn remove(&self, conn: ID<Connection>) -> bool {
        self.lines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&conn)
            .is_some()
    }
    pub fn len(&self) -> usize {
        self.lines.read().unwrap_or_else(PoisonError::into_inner).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Sends one message to one connection.
    pub fn send(&self, conn: ID<Connection>, message: &ServerMessage) {
        let lines = self.lines.read().unwrap_or_else(PoisonError::into_inner);
        Self::push(&lines, conn, message.to_json());
    }
    /// Encodes each notice once and sends it to every recipient.
    pub fn deliver(&self, notices: &[Notice]) {
        notices.iter().for_each(|notice| self.post(notice));
    }
    fn push(lines: &Lines, conn: ID<Connection>, json: String) {
        match lines.get(&conn).map(|tx| tx.send(json)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[switchboard] send to {} failed: {:?}", conn.short(), e),
            None => log::debug!("[switchboard] {} already gone", conn.short()),
        }
    }
}

impl Sink for Switchboard {
    fn post(&self, notice: &Notice) {
        log::debug!("[switchboard] {}", notice.event);
        let lines = self.lines.read().unwrap_or_else(PoisonError::into_inner);
        let json = Protocol::encode(&notice.event).to_json();
        for conn in notice.to.iter() {
            Self::push(&lines, *conn, json.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsb_gameroom::Event;
    use rsb_gameroom::Manager;
    use std::sync::Arc;
    use tokio::sync::mpsc::unbounded_channel;
    #[test]
    fn deliver_reaches_each_recipient() {
        let board = Switchboard::new();
        let a = ID::default();
        let b = ID::default();
        let (tx_a, mut rx_a) = unbounded_channel();
        let (tx_b, mut rx_b) = unbounded_channel();
        board.register(a, tx_a);
        board.register(b, tx_b);
        board.deliver(&[
            Notice::multicast(vec![a, b], Event::Waiting),
            Notice::unicast(b, Event::Waiting),
        ]);
        assert!(rx_a.try_recv().unwrap().contains("waiting_for_opponent"));
        assert!(rx_a.try_recv().is_err());
        assert!(rx_b.try_recv().is_ok());
        assert!(rx_b.try_recv().is_ok());
    }
    #[test]
    fn missing_or_closed_lines_are_skipped() {
        let board = Switchboard::new();
        let a = ID::default();
        let (tx, rx) = unbounded_channel();
        board.register(a, tx);
        drop(rx);
        board.deliver(&[Notice::unicast(a, Event::Waiting)]);
        board.deliver(&[Notice::unicast(ID::default(), Event::Waiting)]);
        assert!(board.remove(a));
        assert!(!board.remove(a));
        assert!(board.is_empty());
    }
    #[test]
    fn send_direct() {
        let board = Switchboard::new();
        let a = ID::default();
        let (tx, mut rx) = unbounded_channel();
        board.register(a, tx);
        board.send(a, &ServerMessage::rejected("nope"));
        assert!(rx.try_recv().unwrap().contains("\"reason\":\"nope\""));
    }
    #[test]
    fn manager_posts_before_returning() {
        let board = Arc::new(Switchboard::new());
        let manager = Manager::with_sink(board.clone());
        let a = ID::default();
        let (tx, mut rx) = unbounded_channel();
        board.register(a, tx);
        manager.connect(a);
        manager.request(a, None).unwrap();
        assert!(rx.try_recv().unwrap().contains("\"type\":\"connected\""));
        assert!(rx.try_recv().unwrap().contains("\"type\":\"waiting_for_opponent\""));
        assert!(rx.try_recv().is_err());
    }
}
