//! # Canonical Message
//!
//! The exact byte string every scheme signs: `{msg_id}.{timestamp}.{payload}`.
//!
//! Both sides of the protocol must build byte-identical messages from the
//! same `(id, timestamp, payload)`, so this is the only place the format
//! is written down.

/// Bytes fed to a signature algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalMessage(Vec<u8>);

impl CanonicalMessage {
    /// Build the signing string for a delivery.
    ///
    /// The timestamp is written as whole seconds in base 10. The payload is
    /// appended verbatim and need not be UTF-8.
    pub fn new(msg_id: &str, timestamp: i64, payload: &[u8]) -> Self {
        let timestamp = timestamp.to_string();
        let mut bytes = Vec::with_capacity(msg_id.len() + timestamp.len() + payload.len() + 2);
        bytes.extend_from_slice(msg_id.as_bytes());
        bytes.push(b'.');
        bytes.extend_from_slice(timestamp.as_bytes());
        bytes.push(b'.');
        bytes.extend_from_slice(payload);
        Self(bytes)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
