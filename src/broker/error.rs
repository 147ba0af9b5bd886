use thiserror::Error;

/// Transport-level broker failure: broker unreachable or connection dropped.
#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}
