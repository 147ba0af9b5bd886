//! Main entry point for the bracket viewer service.
//!
//! Connects to the pub/sub broker, starts the background listener actor, and
//! launches the HTTP server that publishes random match events.

use actix::Actor;
use actix_web::{App, HttpServer, web};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use config::AppConfig;
use listener::{MessageListener, Shutdown};
use service::MessageService;

mod broker;
pub mod config;
mod listener;
mod message;
mod server;
mod service;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    // One broker connection, shared by the publish path and the listener.
    let broker = broker::connect(&config.broker)
        .await
        .map_err(std::io::Error::other)?;
    let message_service = MessageService::new(broker, &config.broker.channel)
        .with_publish_timeout(config.broker.publish_timeout);

    // Start the listener actor (logs every message received on the channel).
    let listener = MessageListener::new(message_service.clone())
        .with_backoff(
            config.broker.resubscribe_base_delay,
            config.broker.resubscribe_max_delay,
        )
        .start();

    let rng = match config.server.match_seed {
        Some(seed) => {
            info!("[Http] Generating matches from seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    // Shared application state for HTTP handlers.
    let state = web::Data::new(server::state::AppState::new(
        message_service,
        listener.clone(),
        rng,
    ));

    info!(
        "[Http] Listening on {}:{}",
        config.server.host, config.server.port
    );

    // Start the HTTP server.
    let result = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await;

    if let Err(e) = listener.send(Shutdown).await {
        warn!("[Listener] Already stopped: {}", e);
    }
    result
}
