use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::Codec;
use crate::error::{Error, Result};

/// Default upper bound for a single encoded envelope (16 MiB)
pub const DEFAULT_MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// JSON codec producing the canonical envelope wire format
#[derive(Debug, Clone, Copy)]
pub struct JsonCodec {
    max_frame_size: usize,
    pretty: bool,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self {
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            pretty: false,
        }
    }
}

impl JsonCodec {
    /// Create a builder for configuring the codec
    pub fn builder() -> JsonCodecBuilder {
        JsonCodecBuilder::new()
    }

    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }

    fn check_size(&self, len: usize) -> Result<()> {
        if len > self.max_frame_size {
            tracing::warn!(len, max = self.max_frame_size, "rejecting oversized frame");
            return Err(Error::InvalidFrame(format!(
                "Message too large: {} bytes (max {})",
                len, self.max_frame_size
            )));
        }
        Ok(())
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
        .map_err(waypoint_core::Error::Encoding)?;

        self.check_size(bytes.len())?;
        Ok(bytes)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        self.check_size(bytes.len())?;
        serde_json::from_slice(bytes).map_err(|e| {
            tracing::debug!(error = %e, len = bytes.len(), "frame did not decode");
            waypoint_core::Error::Decode(e).into()
        })
    }
}

/// Builder for configuring [`JsonCodec`]
#[derive(Debug, Default)]
pub struct JsonCodecBuilder {
    max_frame_size: Option<usize>,
    pretty: bool,
}

impl JsonCodecBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest frame accepted on encode and decode
    pub fn max_frame_size(mut self, size: usize) -> Self {
        self.max_frame_size = Some(size);
        self
    }

    /// Emit indented JSON, for diagnostics
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn build(self) -> JsonCodec {
        JsonCodec {
            max_frame_size: self.max_frame_size.unwrap_or(DEFAULT_MAX_FRAME_SIZE),
            pretty: self.pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::{
        Data, Envelope, Metadata, ProcessingInstance, RequestBody, RequestEnvelope, Route,
    };

    fn request() -> RequestEnvelope {
        Envelope::new(
            Route::new(
                "k",
                ProcessingInstance::new("a", "0"),
                ProcessingInstance::new("b", "1"),
            ),
            RequestBody::new(Data::new("x").with_option("o", 1), Metadata::default()),
        )
    }

    #[test]
    fn encodes_canonical_form() {
        let bytes = JsonCodec::default().encode(&request()).unwrap();
        assert_eq!(bytes, request().to_vec().unwrap());
    }

    #[test]
    fn pretty_output_decodes_to_same_envelope() {
        let codec = JsonCodec::builder().pretty(true).build();
        let bytes = codec.encode(&request()).unwrap();

        assert!(bytes.contains(&b'\n'));
        let decoded: RequestEnvelope = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, request());
    }

    #[test]
    fn rejects_oversized_frames() {
        let codec = JsonCodec::builder().max_frame_size(16).build();

        match codec.encode(&request()).unwrap_err() {
            Error::InvalidFrame(msg) => assert!(msg.contains("too large")),
            other => panic!("Expected InvalidFrame, got {:?}", other),
        }

        let bytes = request().to_vec().unwrap();
        assert!(matches!(
            codec.decode::<RequestEnvelope>(&bytes),
            Err(Error::InvalidFrame(_))
        ));
    }

    #[test]
    fn malformed_frame_is_decode_error() {
        let err = JsonCodec::default()
            .decode::<RequestEnvelope>(b"{\"route\":")
            .unwrap_err();
        assert!(err.is_decode());
    }
}
