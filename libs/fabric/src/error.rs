use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Envelope error: {0}")]
    Envelope(#[from] waypoint_core::Error),

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Whether the frame arrived but did not decode into the expected envelope
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Envelope(e) if e.is_decode())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
