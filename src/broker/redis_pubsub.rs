use async_trait::async_trait;
use futures::StreamExt;
use log::{debug, info};
use redis::{AsyncCommands, Client, aio::ConnectionManager};

use super::{Broker, BrokerError, PayloadStream};

/// Redis pub/sub broker.
///
/// Publishes share one managed connection that reconnects on its own.
/// Each subscription gets a dedicated connection, since a subscribed Redis
/// connection can no longer issue regular commands.
pub struct RedisBroker {
    client: Client,
    conn: ConnectionManager,
}

impl RedisBroker {
    /// Connect to Redis.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g., redis://localhost:6379/)
    pub async fn connect(url: &str) -> Result<Self, BrokerError> {
        let client = Client::open(url)?;
        let conn = ConnectionManager::new(client.clone()).await?;

        info!("[Broker] Connected to Redis at {}", url);

        Ok(Self { client, conn })
    }
}

#[async_trait]
impl Broker for RedisBroker {
    async fn publish(&self, channel: &str, payload: &[u8]) -> Result<usize, BrokerError> {
        let mut conn = self.conn.clone();
        let receivers: usize = conn.publish(channel, payload).await?;
        debug!("[Broker] Published to {} ({} receivers)", channel, receivers);
        Ok(receivers)
    }

    async fn subscribe(&self, channel: &str) -> Result<PayloadStream, BrokerError> {
        let mut pubsub = self.client.get_async_pubsub().await?;
        pubsub.subscribe(channel).await?;
        info!("[Broker] Subscribed to {}", channel);

        Ok(pubsub
            .into_on_message()
            .map(|msg| msg.get_payload_bytes().to_vec())
            .boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // Requires Redis running on localhost.
    // Run with: cargo test -- --ignored

    #[actix_web::test]
    #[ignore]
    async fn test_redis_publish_reaches_subscriber() {
        let broker = RedisBroker::connect("redis://localhost:6379/")
            .await
            .expect("Failed to connect to Redis");

        let mut stream = broker.subscribe("bracket-viewer-test").await.expect("subscribe");
        let receivers = broker
            .publish("bracket-viewer-test", b"hello")
            .await
            .expect("publish");
        assert!(receivers >= 1);

        let payload = tokio::time::timeout(Duration::from_secs(2), stream.next())
            .await
            .expect("timed out")
            .expect("stream ended");
        assert_eq!(payload, b"hello");
    }
}
