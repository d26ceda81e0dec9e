//! Protobuf payload and codec for the binary echo endpoint.
//!
//! The message is hand-derived rather than generated from a `.proto` file;
//! the field numbering below is the server's wire contract.

use prost::Message;

/// Body accepted and echoed back by the server's protobuf endpoint.
#[derive(Clone, PartialEq, Message)]
pub struct EchoPayload {
    #[prost(int32, tag = "1")]
    pub number: i32,
    #[prost(string, tag = "2")]
    pub name: String,
}

/// Encode a payload into protobuf bytes.
///
/// # Panics
///
/// Never panics in practice; encoding into a growable `Vec<u8>` cannot fail.
#[must_use]
pub fn encode_payload(payload: &EchoPayload) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.encoded_len());
    // prost only fails encoding when the buffer is too small, which cannot
    // happen with a growable Vec.
    payload.encode(&mut out).unwrap_or_default();
    out
}

/// Decode protobuf bytes into a payload.
///
/// # Errors
///
/// Returns [`prost::DecodeError`] for malformed bytes.
pub fn decode_payload(bytes: &[u8]) -> Result<EchoPayload, prost::DecodeError> {
    EchoPayload::decode(bytes)
}

#[cfg(test)]
#[path = "proto_test.rs"]
mod tests;
