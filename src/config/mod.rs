/// Main configuration module.
///
/// Re-exports submodules for broker, server and roster configuration, and
/// assembles them into an [`AppConfig`] from the process environment.
pub mod broker;
pub mod roster;
pub mod server;

use std::str::FromStr;
use std::time::Duration;

use log::warn;

use broker::{BrokerConfig, BrokerKind};
use server::ServerConfig;

/// Full runtime configuration of the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub broker: BrokerConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let kind = match lookup("BROKER").as_deref() {
            None | Some("redis") => BrokerKind::Redis,
            Some("memory") => BrokerKind::Memory,
            Some(other) => {
                warn!("[Config] Unknown BROKER={}, using redis", other);
                BrokerKind::Redis
            }
        };

        let broker = BrokerConfig {
            kind,
            host: lookup("REDIS_HOST").unwrap_or_else(|| broker::DEFAULT_REDIS_HOST.to_string()),
            port: parse_or("REDIS_PORT", lookup("REDIS_PORT"), broker::DEFAULT_REDIS_PORT),
            channel: lookup("REDIS_CHANNEL").unwrap_or_else(|| broker::DEFAULT_CHANNEL.to_string()),
            publish_timeout: Duration::from_secs(parse_or(
                "PUBLISH_TIMEOUT_SECS",
                lookup("PUBLISH_TIMEOUT_SECS"),
                broker::PUBLISH_TIMEOUT_SECS,
            )),
            resubscribe_base_delay: Duration::from_millis(parse_or(
                "RESUBSCRIBE_BASE_DELAY_MS",
                lookup("RESUBSCRIBE_BASE_DELAY_MS"),
                broker::RESUBSCRIBE_BASE_DELAY_MS,
            )),
            resubscribe_max_delay: Duration::from_millis(parse_or(
                "RESUBSCRIBE_MAX_DELAY_MS",
                lookup("RESUBSCRIBE_MAX_DELAY_MS"),
                broker::RESUBSCRIBE_MAX_DELAY_MS,
            )),
        };

        let server = ServerConfig {
            host: lookup("SERVER_HOST").unwrap_or_else(|| server::DEFAULT_BIND_HOST.to_string()),
            port: parse_or("SERVER_PORT", lookup("SERVER_PORT"), server::DEFAULT_BIND_PORT),
            match_seed: lookup("MATCH_SEED").and_then(|raw| {
                raw.parse()
                    .map_err(|_| warn!("[Config] Invalid MATCH_SEED={}, ignoring", raw))
                    .ok()
            }),
        };

        Self { broker, server }
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!("[Config] Invalid {}={}, using default", key, value);
            default
        }),
        None => default,
    }
}
