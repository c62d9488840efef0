use rsb_core::Connection;
use rsb_core::ID;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Channel endpoints for one live connection.
/// The switchboard keeps `tx`; the socket task drains `rx`.
pub struct Handle {
    pub id: ID<Connection>,
    pub tx: UnboundedSender<String>,
    pub rx: UnboundedReceiver<String>,
}

impl Handle {
    /// Mints a connection id with a fresh outbound channel.
    pub fn open() -> Self {
        let (tx, rx) = unbounded_channel::<String>();
        Self {
            id: ID::default(),
            tx,
            rx,
        }
    }
}
