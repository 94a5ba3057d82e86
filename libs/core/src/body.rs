use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::payload::Payload;

/// Service-defined request options. Keys are kept sorted so encoding is
/// deterministic.
pub type Options = BTreeMap<String, Value>;

/// Structured request content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    pub content: String,
    #[serde(default, deserialize_with = "options_or_null")]
    pub options: Options,
}

/// Producers that send no options may emit `null` instead of `{}`
fn options_or_null<'de, D>(deserializer: D) -> std::result::Result<Options, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Options>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Data {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            options: Options::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data{{content: {}, options: map[", self.content)?;
        for (i, (key, value)) in self.options.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::String(s) => write!(f, "{key}: {s}")?,
                other => write!(f, "{key}: {other}")?,
            }
        }
        f.write_str("]}")
    }
}

/// Hop bookkeeping carried by requests and responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Attempt counter, managed by the caller
    pub retry_number: i64,
    /// Elapsed nanoseconds, kept as text so no consumer loses precision
    #[serde(rename = "processing_time_ns")]
    pub processing_time_nanos: String,
    pub request_stamp: String,
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metadata{{retryNumber: {}, processingTimeNs: {}, requestStamp: {}}}",
            self.retry_number, self.processing_time_nanos, self.request_stamp
        )
    }
}

/// Outcome of the processing step that produced a response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStatus {
    pub code: i64,
    #[serde(rename = "desc")]
    pub description: String,
}

impl ResponseStatus {
    pub fn new(code: i64, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResponseStatus{{code: {}, desc: {}}}",
            self.code, self.description
        )
    }
}

/// Body of a request in flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub data: Data,
    pub metadata: Metadata,
}

impl RequestBody {
    pub fn new(data: Data, metadata: Metadata) -> Self {
        Self { data, metadata }
    }
}

impl fmt::Display for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body{{data: {}, metadata: {}}}", self.data, self.metadata)
    }
}

/// Body of a response
///
/// `data` stays opaque; a missing `response_status` decodes as the zero
/// status so a request-shaped body can still be read as a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub data: Payload,
    pub metadata: Metadata,
    #[serde(rename = "response_status", default)]
    pub status: ResponseStatus,
}

impl ResponseBody {
    pub fn new(data: Payload, metadata: Metadata, status: ResponseStatus) -> Self {
        Self {
            data,
            metadata,
            status,
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body{{data: {}, metadata: {}, status: {}}}",
            self.data, self.metadata, self.status
        )
    }
}
