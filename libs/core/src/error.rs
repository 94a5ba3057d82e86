use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The text was not a well-formed envelope of the requested variant.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A value in the envelope has no representation on the wire.
    #[error("Encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    /// An opaque payload did not match the schema supplied by the caller.
    #[error("Payload error: {0}")]
    Payload(#[source] serde_json::Error),
}

impl Error {
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
