use std::time::Duration;

/// Broker configuration constants.
///
/// Connection target and channel of the pub/sub broker, plus publish and
/// resubscribe timings.
pub const DEFAULT_REDIS_HOST: &str = "localhost";

/// Default Redis port.
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Channel every match message is published to and read from.
pub const DEFAULT_CHANNEL: &str = "redisTopic";

/// Maximum time (in seconds) a publish may wait for the broker's acknowledgment.
pub const PUBLISH_TIMEOUT_SECS: u64 = 5;

/// First delay (in milliseconds) before the listener resubscribes after losing its subscription.
pub const RESUBSCRIBE_BASE_DELAY_MS: u64 = 500;

/// Upper bound (in milliseconds) for the resubscribe backoff.
pub const RESUBSCRIBE_MAX_DELAY_MS: u64 = 30_000;

/// Which broker implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerKind {
    Redis,
    /// In-process broadcast broker, no Redis required.
    Memory,
}

#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub kind: BrokerKind,
    pub host: String,
    pub port: u16,
    pub channel: String,
    /// Maximum wait for a publish acknowledgment.
    pub publish_timeout: Duration,
    /// First resubscribe delay after the listener loses its subscription.
    pub resubscribe_base_delay: Duration,
    /// Upper bound for the resubscribe backoff.
    pub resubscribe_max_delay: Duration,
}

impl BrokerConfig {
    /// Redis connection URL for this target.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}
