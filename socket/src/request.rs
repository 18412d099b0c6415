// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use test_dispatch_core::RequestFields;

/// Kind of exchange requested from the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    /// Pull the next work-item name. Payload-free; the response is the item
    /// token, a wait token, or a termination token.
    GetNext,
    /// Push one finished test outcome. The response body is ignored.
    TestResult,
    /// Push one finished test-set outcome. The response body is ignored.
    TestSetResults,
}

impl RequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::GetNext => "GetNext",
            RequestType::TestResult => "TestResult",
            RequestType::TestSetResults => "TestSetResults",
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body: either a bare string or an ordered flat mapping of
/// stringified fields. Field order is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Fields(Vec<(&'static str, String)>),
}

impl Payload {
    pub fn from_fields<P: RequestFields>(payload: &P) -> Self {
        Payload::Fields(payload.request_fields())
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Text(text) => serializer.serialize_str(text),
            Payload::Fields(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

#[derive(Serialize)]
struct RequestLine<'a> {
    hostname: &'a str,
    request: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Payload>,
}

/// Serializes one request as a single newline-terminated JSON line.
pub(crate) fn encode_line(
    hostname: &str,
    request_type: RequestType,
    payload: Option<&Payload>,
) -> String {
    let line = RequestLine {
        hostname,
        request: request_type.as_str(),
        data: payload,
    };
    // String-only content; serde_json cannot fail on it.
    let mut encoded =
        serde_json::to_string(&line).expect("request line serialization is infallible");
    encoded.push('\n');
    encoded
}
