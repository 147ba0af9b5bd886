//! Message service: the serialization contract between the HTTP surface, the
//! listener and the broker channel.

mod message_service;

pub use message_service::{MessageService, ServiceError};
