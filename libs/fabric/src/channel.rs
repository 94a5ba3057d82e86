use serde::de::DeserializeOwned;
use serde::Serialize;
use waypoint_core::{BodyKind, Envelope, Message, SwapMode};

use crate::codec::Codec;
use crate::error::Result;
use crate::transport::{MemoryTransport, Transport};

/// High-level channel for exchanging envelopes
///
/// Combines a transport and codec for persistent connections
pub struct Channel<C> {
    transport: Box<dyn Transport>,
    codec: C,
}

impl<C: Codec> Channel<C> {
    /// Create a channel from an existing transport
    pub fn from_transport(transport: impl Transport + 'static, codec: C) -> Self {
        Self {
            transport: Box::new(transport),
            codec,
        }
    }

    /// Open a connected pair of in-process channels
    pub fn memory_pair(codec: C) -> (Self, Self)
    where
        C: Clone,
    {
        let (a, b) = MemoryTransport::pair();
        (
            Self::from_transport(a, codec.clone()),
            Self::from_transport(b, codec),
        )
    }

    /// Send a message over the channel
    pub async fn send<T: Serialize>(&mut self, message: &T) -> Result<()> {
        let bytes = self.codec.encode(message)?;
        tracing::trace!(len = bytes.len(), "sending frame");
        self.transport.send(&bytes).await
    }

    /// Receive a message from the channel
    pub async fn receive<T: DeserializeOwned>(&mut self) -> Result<T> {
        let bytes = self.transport.receive().await?;
        tracing::trace!(len = bytes.len(), "received frame");
        self.codec.decode(&bytes)
    }

    /// Receive the next envelope as the variant this path carries
    pub async fn receive_message(&mut self, kind: BodyKind) -> Result<Message> {
        let bytes = self.transport.receive().await?;
        tracing::trace!(len = bytes.len(), %kind, "received frame");
        let message = match kind {
            BodyKind::Request => Message::Request(self.codec.decode(&bytes)?),
            BodyKind::Response => Message::Response(self.codec.decode(&bytes)?),
            BodyKind::Generic => Message::Generic(self.codec.decode(&bytes)?),
        };
        Ok(message)
    }

    /// Send `envelope` back along its route
    pub async fn reply<B: Serialize>(&mut self, envelope: Envelope<B>, mode: SwapMode) -> Result<()> {
        let envelope = envelope.reply(mode);
        self.send(&envelope).await
    }

    /// Close the channel
    pub async fn close(mut self) -> Result<()> {
        self.transport.close().await
    }
}
