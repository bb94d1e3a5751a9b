use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Name of the service, reported in every response.
pub const SERVICE: &str = "sample-app";

/// Greeting reported in every response.
pub const MESSAGE: &str = "Hello from the sample backend!";

/// Version reported in every response.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The JSON document returned for every request.
///
/// A payload lives for a single request: it is built when the request comes in and dropped
/// as soon as it has been serialized. Fields are serialized in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsePayload<'a> {
    pub service: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub path: &'a str,
    pub timestamp: String,
}

impl<'a> ResponsePayload<'a> {
    /// Builds the payload for `path`, stamped with the current wall-clock time.
    pub fn new(path: &'a str) -> ResponsePayload<'a> {
        ResponsePayload::at(path, Utc::now())
    }

    /// Builds the payload for `path`, stamped with `time`.
    pub fn at(path: &'a str, time: DateTime<Utc>) -> ResponsePayload<'a> {
        ResponsePayload {
            service: SERVICE,
            message: MESSAGE,
            version: VERSION,
            path,
            timestamp: format_timestamp(time),
        }
    }

    /// Serializes the payload to UTF-8 JSON.
    pub fn to_json(&self) -> Vec<u8> {
        // only strings in here, serialization cannot fail
        serde_json::to_vec(self).unwrap_or_default()
    }
}

/// Formats `time` as ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
