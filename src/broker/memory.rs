use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures::StreamExt;
use log::{debug, warn};
use tokio::sync::broadcast::{self, error::RecvError};

use super::{Broker, BrokerError, PayloadStream};

/// Messages buffered per subscriber before it starts lagging.
const CHANNEL_CAPACITY: usize = 256;

/// In-process broadcast broker.
///
/// Each channel is a `tokio` broadcast channel, so every subscriber sees every
/// message published after it subscribed.
pub struct MemoryBroker {
    channels: Mutex<HashMap<String, broadcast::Sender<Vec<u8>>>>,
}

impl MemoryBroker {
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Drop a channel, ending every current subscription to it.
    #[cfg(test)]
    pub fn close(&self, channel: &str) {
        if self.channels().remove(channel).is_some() {
            debug!("[Broker] Closed channel {}", channel);
        }
    }

    /// Number of live subscriptions on a channel.
    #[cfg(test)]
    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.channels()
            .get(channel)
            .map_or(0, |sender| sender.receiver_count())
    }

    fn channels(&self) -> MutexGuard<'_, HashMap<String, broadcast::Sender<Vec<u8>>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryBroker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Broker for MemoryBroker {
    async fn publish(&self, channel: &str, payload: &[u8]) -> Result<usize, BrokerError> {
        let receivers = match self.channels().get(channel) {
            // A send only fails when nobody is subscribed.
            Some(sender) => sender.send(payload.to_vec()).unwrap_or(0),
            None => 0,
        };
        debug!("[Broker] Published to {} ({} receivers)", channel, receivers);
        Ok(receivers)
    }

    async fn subscribe(&self, channel: &str) -> Result<PayloadStream, BrokerError> {
        let receiver = self
            .channels()
            .entry(channel.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe();
        let channel = channel.to_string();

        let stream = futures::stream::unfold(receiver, move |mut receiver| {
            let channel = channel.clone();
            async move {
                loop {
                    match receiver.recv().await {
                        Ok(payload) => return Some((payload, receiver)),
                        Err(RecvError::Lagged(skipped)) => {
                            warn!("[Broker] Subscriber on {} lagged, skipped {} messages", channel, skipped);
                        }
                        Err(RecvError::Closed) => return None,
                    }
                }
            }
        });

        Ok(stream.boxed())
    }
}
