//! Publish/subscribe broker clients.
//!
//! [`Broker`] is the seam between the message service and the transport:
//! [`RedisBroker`] talks to a Redis server, [`MemoryBroker`] fans out
//! in-process with the same semantics.

mod error;
mod memory;
mod redis_pubsub;

#[cfg(test)]
pub mod testing;

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use log::info;

use crate::config::broker::{BrokerConfig, BrokerKind};

pub use self::error::BrokerError;
pub use self::memory::MemoryBroker;
pub use self::redis_pubsub::RedisBroker;

/// Raw payloads delivered on a subscribed channel.
///
/// Never ends on its own; it only ends when the subscription is lost.
pub type PayloadStream = BoxStream<'static, Vec<u8>>;

#[async_trait]
pub trait Broker: Send + Sync {
    /// Publish a payload to a channel.
    ///
    /// Returns the number of subscribers that received it.
    async fn publish(&self, channel: &str, payload: &[u8]) -> Result<usize, BrokerError>;

    /// Subscribe to a channel.
    ///
    /// The subscription is registered once the returned future resolves, so
    /// anything published afterwards is delivered on the stream.
    async fn subscribe(&self, channel: &str) -> Result<PayloadStream, BrokerError>;
}

/// Build the broker selected by the configuration.
pub async fn connect(config: &BrokerConfig) -> Result<Arc<dyn Broker>, BrokerError> {
    match config.kind {
        BrokerKind::Redis => Ok(Arc::new(RedisBroker::connect(&config.url()).await?)),
        BrokerKind::Memory => {
            info!("[Broker] Using in-memory broker");
            Ok(Arc::new(MemoryBroker::new()))
        }
    }
}
