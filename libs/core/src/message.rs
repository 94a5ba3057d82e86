use std::fmt;

use serde::{Serialize, Serializer};

use crate::envelope::{GenericEnvelope, RequestEnvelope, ResponseEnvelope};
use crate::error::Result;
use crate::route::{Route, SwapMode};

/// Which body shape a receiver expects on a given path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Request,
    Response,
    Generic,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Request => "request",
            Self::Response => "response",
            Self::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Any envelope variant
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Request(RequestEnvelope),
    Response(ResponseEnvelope),
    Generic(GenericEnvelope),
}

impl Message {
    /// Decode `bytes` as the variant named by `kind`
    pub fn decode(kind: BodyKind, bytes: &[u8]) -> Result<Self> {
        let message = match kind {
            BodyKind::Request => Self::Request(RequestEnvelope::from_slice(bytes)?),
            BodyKind::Response => Self::Response(ResponseEnvelope::from_slice(bytes)?),
            BodyKind::Generic => Self::Generic(GenericEnvelope::from_slice(bytes)?),
        };
        Ok(message)
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::Request(envelope) => envelope.to_vec(),
            Self::Response(envelope) => envelope.to_vec(),
            Self::Generic(envelope) => envelope.to_vec(),
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Self::Request(_) => BodyKind::Request,
            Self::Response(_) => BodyKind::Response,
            Self::Generic(_) => BodyKind::Generic,
        }
    }

    pub fn route(&self) -> &Route {
        match self {
            Self::Request(envelope) => &envelope.route,
            Self::Response(envelope) => &envelope.route,
            Self::Generic(envelope) => &envelope.route,
        }
    }

    pub fn route_mut(&mut self) -> &mut Route {
        match self {
            Self::Request(envelope) => &mut envelope.route,
            Self::Response(envelope) => &mut envelope.route,
            Self::Generic(envelope) => &mut envelope.route,
        }
    }

    /// Swap the route for the return hop
    pub fn reply(mut self, mode: SwapMode) -> Self {
        self.route_mut().swap(mode);
        self
    }
}

impl From<RequestEnvelope> for Message {
    fn from(envelope: RequestEnvelope) -> Self {
        Self::Request(envelope)
    }
}

impl From<ResponseEnvelope> for Message {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self::Response(envelope)
    }
}

impl From<GenericEnvelope> for Message {
    fn from(envelope: GenericEnvelope) -> Self {
        Self::Generic(envelope)
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Request(envelope) => envelope.serialize(serializer),
            Self::Response(envelope) => envelope.serialize(serializer),
            Self::Generic(envelope) => envelope.serialize(serializer),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(envelope) => fmt::Display::fmt(envelope, f),
            Self::Response(envelope) => fmt::Display::fmt(envelope, f),
            Self::Generic(envelope) => fmt::Display::fmt(envelope, f),
        }
    }
}
