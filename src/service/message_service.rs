use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use futures::stream::BoxStream;
use log::{debug, warn};
use thiserror::Error;

use crate::broker::{Broker, BrokerError};
use crate::config::broker::PUBLISH_TIMEOUT_SECS;
use crate::message::{EncodeError, Message};

/// Decoded messages from a channel subscription.
pub type MessageStream = BoxStream<'static, Message>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Publish failed: {0}")]
    Transport(#[from] BrokerError),

    #[error("Publish timed out after {0:?}")]
    Timeout(Duration),
}

/// Publishes messages to, and reads messages from, one broker channel.
///
/// Cheap to clone; every clone shares the same broker connection.
#[derive(Clone)]
pub struct MessageService {
    broker: Arc<dyn Broker>,
    channel: Arc<str>,
    publish_timeout: Duration,
}

impl MessageService {
    pub fn new(broker: Arc<dyn Broker>, channel: &str) -> Self {
        Self {
            broker,
            channel: Arc::from(channel),
            publish_timeout: Duration::from_secs(PUBLISH_TIMEOUT_SECS),
        }
    }

    pub fn with_publish_timeout(mut self, timeout: Duration) -> Self {
        self.publish_timeout = timeout;
        self
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Encode a message and publish it on the channel.
    pub async fn send(&self, message: &Message) -> Result<(), ServiceError> {
        let payload = message.encode()?;
        let receivers = tokio::time::timeout(
            self.publish_timeout,
            self.broker.publish(&self.channel, &payload),
        )
        .await
        .map_err(|_| ServiceError::Timeout(self.publish_timeout))??;

        debug!(
            "[MessageService] Sent {} to {} ({} receivers)",
            message, self.channel, receivers
        );
        Ok(())
    }

    /// Subscribe to the channel and decode every payload.
    ///
    /// Payloads that do not decode are logged and skipped, so one bad message
    /// never ends the stream.
    pub async fn subscribe(&self) -> Result<MessageStream, BrokerError> {
        let payloads = self.broker.subscribe(&self.channel).await?;
        let channel = self.channel.clone();

        let messages = payloads.filter_map(move |payload| {
            let channel = channel.clone();
            async move {
                match Message::decode(&payload) {
                    Ok(message) => Some(message),
                    Err(e) => {
                        warn!(
                            "[MessageService] Skipping payload on {}: {} (payload={})",
                            channel,
                            e,
                            String::from_utf8_lossy(&payload)
                        );
                        None
                    }
                }
            }
        });

        Ok(messages.boxed())
    }
}
