use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::body::{RequestBody, ResponseBody, ResponseStatus};
use crate::error::{Error, Result};
use crate::payload::Payload;
use crate::route::{Route, SwapMode};

/// A route coupled with one body variant
///
/// The wire format carries no variant tag, so the caller picks `B` from its
/// own routing context when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<B> {
    pub route: Route,
    #[serde(rename = "msg")]
    pub body: B,
}

pub type RequestEnvelope = Envelope<RequestBody>;
pub type ResponseEnvelope = Envelope<ResponseBody>;
pub type GenericEnvelope = Envelope<Payload>;

impl<B> Envelope<B> {
    pub fn new(route: Route, body: B) -> Self {
        Self { route, body }
    }

    /// Swap the route for the return hop and hand the envelope back
    pub fn reply(mut self, mode: SwapMode) -> Self {
        self.route.swap(mode);
        self
    }
}

impl<B: Serialize> Envelope<B> {
    /// Encode to canonical JSON text
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encoding)
    }

    /// Encode to canonical JSON bytes
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::Encoding)
    }

    /// Re-wrap the body as an opaque payload for a relay that forwards
    /// without interpreting it
    pub fn into_generic(self) -> Result<GenericEnvelope> {
        let body = Payload::from_value(&self.body)?;
        Ok(Envelope::new(self.route, body))
    }
}

impl<B: DeserializeOwned> Envelope<B> {
    /// Decode JSON text into this envelope variant
    pub fn decode(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::Decode)
    }

    /// Decode JSON bytes into this envelope variant
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::Decode)
    }

    /// Decode `text` and replace `self` with the result
    ///
    /// Returns `false` and leaves `self` unchanged when `text` does not
    /// decode completely. Callers that need the reason use [`Envelope::decode`].
    pub fn parse_into(&mut self, text: &str) -> bool {
        match Self::decode(text) {
            Ok(envelope) => {
                *self = envelope;
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "discarding undecodable envelope");
                false
            }
        }
    }
}

impl GenericEnvelope {
    /// Interpret the opaque body as a concrete variant
    pub fn open<B: DeserializeOwned>(&self) -> Result<Envelope<B>> {
        let body = self.body.decode()?;
        Ok(Envelope::new(self.route.clone(), body))
    }
}

impl ResponseEnvelope {
    /// Build the response to `request`, routed back along its path
    ///
    /// Metadata is copied from the request unchanged.
    pub fn respond_to(
        request: &RequestEnvelope,
        mode: SwapMode,
        data: Payload,
        status: ResponseStatus,
    ) -> Self {
        let route = request.route.reversed(mode);
        let body = ResponseBody::new(data, request.body.metadata.clone(), status);
        Self::new(route, body)
    }
}

impl<B: fmt::Display> fmt::Display for Envelope<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message{{route: {}, msg: {}}}", self.route, self.body)
    }
}
