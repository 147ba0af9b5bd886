//! Broker doubles for failure-path tests.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;

use super::{Broker, BrokerError, PayloadStream};

fn connection_refused() -> BrokerError {
    redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")).into()
}

/// Broker that cannot be reached.
pub struct UnreachableBroker;

#[async_trait]
impl Broker for UnreachableBroker {
    async fn publish(&self, _channel: &str, _payload: &[u8]) -> Result<usize, BrokerError> {
        Err(connection_refused())
    }

    async fn subscribe(&self, _channel: &str) -> Result<PayloadStream, BrokerError> {
        Err(connection_refused())
    }
}

/// Broker that accepts connections but never acknowledges a publish.
pub struct StalledBroker;

#[async_trait]
impl Broker for StalledBroker {
    async fn publish(&self, _channel: &str, _payload: &[u8]) -> Result<usize, BrokerError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(0)
    }

    async fn subscribe(&self, _channel: &str) -> Result<PayloadStream, BrokerError> {
        Ok(futures::stream::pending::<Vec<u8>>().boxed())
    }
}
