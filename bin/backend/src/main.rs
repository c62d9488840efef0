//! Roshambo Backend Binary
//!
//! Serves matchmaking and live matches over WebSocket.
//! Binds BIND_ADDR, or 0.0.0.0:$PORT when only PORT is set.

#[tokio::main]
async fn main() {
    rsb_core::log();
    rsb_core::kys();
    let config = rsb_server::Config::from_env();
    if let Err(e) = rsb_server::run(config).await {
        log::error!("server exited: {}", e);
        std::process::exit(1);
    }
}
