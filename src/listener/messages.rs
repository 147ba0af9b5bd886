use actix::prelude::*;
use serde::Serialize;

use crate::message;

/// Stop the listener and drop its subscription.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Shutdown;

#[derive(Message)]
#[rtype(result = "ListenerStatus")]
pub struct GetStatus;

/// Snapshot of the listener's subscription state.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ListenerStatus {
    /// Whether a subscription is currently live.
    pub subscribed: bool,
    /// Messages received since startup.
    pub received: u64,
    /// Times the subscription was lost or could not be established.
    pub restarts: u64,
    /// Most recent message received, if any.
    pub last_received: Option<message::Message>,
}
