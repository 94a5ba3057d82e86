use std::time::Duration;

use tokio::sync::mpsc;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Default number of frames buffered in each direction
pub const DEFAULT_CAPACITY: usize = 64;

/// In-process transport connecting two services in the same runtime
///
/// Created in connected pairs; frames sent on one end are received on the
/// other, preserving boundaries.
pub struct MemoryTransport {
    tx: Option<mpsc::Sender<Vec<u8>>>,
    rx: mpsc::Receiver<Vec<u8>>,
    send_timeout: Option<Duration>,
    receive_timeout: Option<Duration>,
}

impl MemoryTransport {
    /// Create a connected pair with default settings
    pub fn pair() -> (Self, Self) {
        Self::builder().pair()
    }

    /// Create a builder for configuring the transport
    pub fn builder() -> MemoryTransportBuilder {
        MemoryTransportBuilder::new()
    }
}

#[async_trait::async_trait]
impl Transport for MemoryTransport {
    async fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let send_timeout = self.send_timeout;
        let tx = self.tx.as_ref().ok_or(Error::ConnectionClosed)?;
        let send_op = async {
            tx.send(bytes.to_vec())
                .await
                .map_err(|_| Error::ConnectionClosed)
        };

        if let Some(timeout) = send_timeout {
            tokio::time::timeout(timeout, send_op)
                .await
                .map_err(|_| Error::Custom("Send timeout exceeded".to_string()))?
        } else {
            send_op.await
        }
    }

    async fn receive(&mut self) -> Result<Vec<u8>> {
        let receive_timeout = self.receive_timeout;
        let rx = &mut self.rx;
        let receive_op = async { rx.recv().await.ok_or(Error::ConnectionClosed) };

        if let Some(timeout) = receive_timeout {
            tokio::time::timeout(timeout, receive_op)
                .await
                .map_err(|_| Error::Custom("Receive timeout exceeded".to_string()))?
        } else {
            receive_op.await
        }
    }

    async fn close(&mut self) -> Result<()> {
        // Dropping the sender lets the peer observe end of stream
        self.tx = None;
        Ok(())
    }
}

/// Builder for configuring in-memory transports
#[derive(Default)]
pub struct MemoryTransportBuilder {
    capacity: Option<usize>,
    send_timeout: Option<Duration>,
    receive_timeout: Option<Duration>,
}

impl MemoryTransportBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of frames buffered in each direction
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the send timeout
    pub fn send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = Some(timeout);
        self
    }

    /// Set the receive timeout
    pub fn receive_timeout(mut self, timeout: Duration) -> Self {
        self.receive_timeout = Some(timeout);
        self
    }

    /// Build both ends of the connection with the configured settings
    pub fn pair(self) -> (MemoryTransport, MemoryTransport) {
        let capacity = self.capacity.unwrap_or(DEFAULT_CAPACITY).max(1);
        let (a_tx, a_rx) = mpsc::channel(capacity);
        let (b_tx, b_rx) = mpsc::channel(capacity);

        let a = MemoryTransport {
            tx: Some(a_tx),
            rx: b_rx,
            send_timeout: self.send_timeout,
            receive_timeout: self.receive_timeout,
        };
        let b = MemoryTransport {
            tx: Some(b_tx),
            rx: a_rx,
            send_timeout: self.send_timeout,
            receive_timeout: self.receive_timeout,
        };
        (a, b)
    }
}
