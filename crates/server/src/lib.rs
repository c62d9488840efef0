//! Roshambo Backend Server
//!
//! Serves live rock-paper-scissors matches over WebSocket from a single
//! actix-web server.
//!
//! ## Routes
//!
//! - `GET /health` — liveness plus session, queue, and connection counts
//! - `GET /play` — WebSocket upgrade into the matchmaking arena
mod config;

pub use config::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use rsb_hosting::Arena;
use rsb_hosting::handlers;

#[rustfmt::skip]
pub async fn run(config: Config) -> Result<(), std::io::Error> {
    let arena = web::Data::new(Arena::new());
    log::info!("starting roshambo server on {} ({} workers)", config.bind, config.workers);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(arena.clone())
            .route("/health", web::get().to(handlers::health))
            .route("/play",   web::get().to(handlers::play))
    })
    .workers(config.workers)
    .bind(config.bind.as_str())?
    .run()
    .await
}
