use serde::Serialize;
use waypoint_core::{RequestEnvelope, ResponseEnvelope};

use crate::channel::Channel;
use crate::codec::Codec;
use crate::error::Result;
use crate::transport::Transport;

/// Perform a one-off request/response exchange
///
/// Sends the request, waits for the response envelope, and closes the
/// connection.
pub async fn request<T, C>(transport: T, request: &RequestEnvelope, codec: C) -> Result<ResponseEnvelope>
where
    T: Transport + 'static,
    C: Codec,
{
    let mut channel = Channel::from_transport(transport, codec);
    channel.send(request).await?;
    let response = channel.receive().await?;
    channel.close().await?;
    Ok(response)
}

/// Send a message without waiting for a response (fire-and-forget)
pub async fn send<T, M, C>(transport: T, message: &M, codec: C) -> Result<()>
where
    T: Transport + 'static,
    M: Serialize,
    C: Codec,
{
    let mut channel = Channel::from_transport(transport, codec);
    channel.send(message).await?;
    channel.close().await?;
    Ok(())
}
