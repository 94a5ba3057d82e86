//! Waypoint Fabric - Codec and transport seam for envelopes
//!
//! Provides the [`Codec`](codec::Codec) that frames envelopes as JSON, the
//! [`Transport`](transport::Transport) trait external transports implement,
//! and a [`Channel`] that moves envelopes over a transport.
//!
//! # Example
//!
//! ```no_run
//! use waypoint_core::{BodyKind, Message, RequestEnvelope, SwapMode};
//! use waypoint_fabric::{Channel, codec::JsonCodec};
//!
//! # async fn example(request: RequestEnvelope) -> Result<(), Box<dyn std::error::Error>> {
//! let (mut client, mut server) = Channel::memory_pair(JsonCodec::default());
//! client.send(&request).await?;
//!
//! // Server side: read the request and bounce it back
//! if let Message::Request(incoming) = server.receive_message(BodyKind::Request).await? {
//!     server.reply(incoming, SwapMode::Synchronous).await?;
//! }
//! let echoed: RequestEnvelope = client.receive().await?;
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod codec;
pub mod error;
pub mod request;
pub mod transport;

// Re-exports for convenience
pub use channel::Channel;
pub use error::{Error, Result};
