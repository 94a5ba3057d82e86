//! Waypoint Core - Routable message envelopes
//!
//! Defines the envelope exchanged between pipeline services: a [`Route`]
//! (origin, destination, correlation key) plus one body variant, and the
//! JSON codec that carries it across process boundaries.
//!
//! # Example
//!
//! ```
//! use waypoint_core::{
//!     Data, Envelope, Metadata, Payload, ProcessingInstance, RequestBody, RequestEnvelope,
//!     ResponseEnvelope, ResponseStatus, Route, SwapMode,
//! };
//!
//! # fn example() -> waypoint_core::Result<()> {
//! let route = Route::new(
//!     "trx-1",
//!     ProcessingInstance::new("ingest", "0").with_node("node-a"),
//!     ProcessingInstance::new("validator", "1"),
//! );
//! let body = RequestBody::new(Data::new("hello").with_option("threshold", "98"), Metadata::default());
//! let text = Envelope::new(route, body).encode()?;
//!
//! // On the receiving side
//! let request = RequestEnvelope::decode(&text)?;
//! let response = ResponseEnvelope::respond_to(
//!     &request,
//!     SwapMode::Asynchronous,
//!     Payload::from_value(&"accepted")?,
//!     ResponseStatus::new(200, "OK"),
//! );
//! assert_eq!(response.route.destination.service, "ingest");
//! assert!(response.route.destination.node.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod body;
pub mod envelope;
pub mod error;
pub mod message;
pub mod payload;
pub mod route;

// Re-exports for convenience
pub use body::{Data, Metadata, Options, RequestBody, ResponseBody, ResponseStatus};
pub use envelope::{Envelope, GenericEnvelope, RequestEnvelope, ResponseEnvelope};
pub use error::{Error, Result};
pub use message::{BodyKind, Message};
pub use payload::Payload;
pub use route::{ProcessingInstance, Route, SwapMode};
