//! Message model shared by the publish and subscribe paths.
//!
//! Messages travel over the broker as JSON objects carrying an `@type`
//! discriminator, so a decoder can rebuild the right variant on its own.

pub mod codec;
pub mod generate;
pub mod types;

pub use codec::EncodeError;
pub use generate::random_match;
pub use types::Message;
