use super::*;
use rsb_core::Connection;
use rsb_core::ID;
use rsb_gameroom::Manager;
use rsb_gameroom::Notice;
use rsb_gameroom::Protocol;
use rsb_gameroom::ServerMessage;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Session manager plus the switchboard that reaches its players.
/// The manager posts straight to the switchboard, so outbound traffic leaves
/// in the order the sessions changed.
#[derive(Debug)]
pub struct Arena {
    manager: Manager,
    switchboard: Arc<Switchboard>,
}

impl Default for Arena {
    fn default() -> Self {
        let switchboard = Arc::new(Switchboard::new());
        Self {
            manager: Manager::with_sink(switchboard.clone()),
            switchboard,
        }
    }
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn manager(&self) -> &Manager {
        &self.manager
    }
    pub fn switchboard(&self) -> &Switchboard {
        &self.switchboard
    }
}

impl Arena {
    /// Registers a new connection with both the switchboard and the core.
    /// The handshake is already queued on the returned channel.
    pub fn open(&self) -> (ID<Connection>, UnboundedReceiver<String>, Vec<Notice>) {
        let Handle { id, tx, rx } = Handle::open();
        self.switchboard.register(id, tx);
        let notices = self.manager.connect(id);
        (id, rx, notices)
    }
    /// Handles one inbound text frame.
    pub fn receive(&self, conn: ID<Connection>, text: &str) {
        match Protocol::decode(text) {
            Ok(message) => {
                log::debug!("[arena] {} sent {:?}", conn.short(), message);
                self.manager.dispatch(conn, message);
            }
            Err(e) => {
                log::warn!("[arena] {} sent bad frame: {}", conn.short(), e);
                self.switchboard.send(conn, &ServerMessage::rejected(e));
            }
        }
    }
    /// Tears down a connection and tells whoever is left.
    pub fn close(&self, conn: ID<Connection>) {
        self.switchboard.remove(conn);
        self.manager.disconnect(conn);
    }
    /// Spawns the WebSocket bridge between a client and the arena.
    /// The handshake is flushed before spawning so a dead socket is
    /// reported to the upgrade handler.
    pub async fn bridge(
        self: &Arc<Self>,
        mut session: actix_ws::Session,
        mut streams: actix_ws::MessageStream,
    ) -> anyhow::Result<ID<Connection>> {
        use futures::StreamExt;
        let (conn, mut rx, _) = self.open();
        while let Ok(json) = rx.try_recv() {
            if let Err(e) = session.text(json).await {
                self.close(conn);
                return Err(anyhow::anyhow!("{}", e));
            }
        }
        log::debug!("[bridge {}] connected", conn.short());
        let arena = self.clone();
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = rx.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = streams.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => arena.receive(conn, &text),
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            arena.close(conn);
            let _ = session.close(None).await;
            log::debug!("[bridge {}] disconnected", conn.short());
        });
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<serde_json::Value> {
        std::iter::from_fn(|| rx.try_recv().ok())
            .map(|s| serde_json::from_str(&s).unwrap())
            .collect()
    }
    fn kinds(seen: &[serde_json::Value]) -> Vec<&str> {
        seen.iter().map(|v| v["type"].as_str().unwrap()).collect()
    }
    #[test]
    fn open_queues_handshake() {
        let arena = Arena::new();
        let (conn, mut rx, notices) = arena.open();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].reaches(conn));
        let seen = drain(&mut rx);
        assert_eq!(kinds(&seen), ["connected"]);
        assert_eq!(seen[0]["player"], conn.to_string());
        assert_eq!(arena.manager().connections(), 1);
        assert_eq!(arena.switchboard().len(), 1);
    }
    #[test]
    fn two_sockets_play_a_round() {
        let arena = Arena::new();
        let (a, mut rx_a, _) = arena.open();
        let (b, mut rx_b, _) = arena.open();
        drain(&mut rx_a);
        drain(&mut rx_b);
        arena.receive(a, r#"{"type":"find_game","player_name":"ada"}"#);
        assert_eq!(kinds(&drain(&mut rx_a)), ["waiting_for_opponent"]);
        arena.receive(b, r#"{"type":"find_game","player_name":"bob"}"#);
        let found = drain(&mut rx_a);
        assert_eq!(found[0]["type"], "match_found");
        let game = found[0]["game_id"].as_str().unwrap().to_string();
        assert_eq!(drain(&mut rx_b)[0]["game_id"], game.as_str());
        let choose = |c: &str| format!(r#"{{"type":"make_choice","game_id":"{}","choice":"{}"}}"#, game, c);
        arena.receive(a, &choose("rock"));
        arena.receive(b, &choose("scissors"));
        let seen = drain(&mut rx_b);
        assert_eq!(kinds(&seen), ["choice_acknowledged", "choice_acknowledged", "round_result"]);
        assert_eq!(seen[2]["winner"], a.to_string());
        assert_eq!(seen[2]["choices"][b.to_string()], "scissors");
    }
    #[test]
    fn last_round_then_restart_arrive_in_order() {
        let arena = Arena::new();
        let (a, mut rx_a, _) = arena.open();
        let (b, _rx_b, _) = arena.open();
        arena.receive(a, r#"{"type":"find_game"}"#);
        arena.receive(b, r#"{"type":"find_game"}"#);
        let game = drain(&mut rx_a)
            .into_iter()
            .find(|v| v["type"] == "match_found")
            .map(|v| v["game_id"].as_str().unwrap().to_string())
            .unwrap();
        let choose = |c: &str| format!(r#"{{"type":"make_choice","game_id":"{}","choice":"{}"}}"#, game, c);
        for _ in 0..rsb_core::MAX_ROUNDS {
            arena.receive(a, &choose("paper"));
            arena.receive(b, &choose("rock"));
        }
        arena.receive(b, &format!(r#"{{"type":"play_again","game_id":"{}"}}"#, game));
        let seen = drain(&mut rx_a);
        let seen = kinds(&seen);
        assert_eq!(
            seen[seen.len() - 4..],
            ["choice_acknowledged", "round_result", "match_finished", "match_restarted"]
        );
    }
    #[test]
    fn bad_frame_is_rejected() {
        let arena = Arena::new();
        let (a, mut rx, _) = arena.open();
        drain(&mut rx);
        arena.receive(a, "{");
        arena.receive(a, r#"{"type":"make_choice","game_id":"game_1000","choice":"rock"}"#);
        let seen = drain(&mut rx);
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|v| v["type"] == "rejected"));
        assert!(seen[1]["reason"].as_str().unwrap().contains("unknown session"));
    }
    #[test]
    fn close_notifies_opponent() {
        let arena = Arena::new();
        let (a, _rx_a, _) = arena.open();
        let (b, mut rx_b, _) = arena.open();
        arena.receive(a, r#"{"type":"find_game"}"#);
        arena.receive(b, r#"{"type":"find_game"}"#);
        drain(&mut rx_b);
        arena.close(a);
        assert_eq!(kinds(&drain(&mut rx_b)), ["opponent_left"]);
        assert_eq!(arena.manager().live(), 1);
        arena.close(b);
        assert_eq!(arena.manager().live(), 0);
        assert!(arena.switchboard().is_empty());
    }
}
