use crate::error::Result;

pub mod memory;

pub use self::memory::{MemoryTransport, MemoryTransportBuilder};

/// Transport trait for sending and receiving encoded envelopes
///
/// Each transport instance represents a single connection. Network
/// transports live outside this crate and plug in here.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send one frame
    async fn send(&mut self, bytes: &[u8]) -> Result<()>;

    /// Receive one frame
    async fn receive(&mut self) -> Result<Vec<u8>>;

    /// Close the transport connection
    async fn close(&mut self) -> Result<()>;
}
