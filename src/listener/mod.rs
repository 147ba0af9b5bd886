//! Background listener.
//!
//! A single actor that stays subscribed to the message channel for the
//! lifetime of the process, logs every message it receives, and resubscribes
//! with backoff whenever the subscription is lost.

pub mod backoff;
pub mod actor;
pub mod messages;

pub use actor::MessageListener;
pub use messages::{GetStatus, Shutdown};
