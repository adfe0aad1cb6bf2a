//! # HMAC-SHA256 Engine (`v1`)
//!
//! Symmetric signatures over the canonical message with a shared secret.
//!
//! ## Security Properties
//!
//! - Deterministic: no nonce, no IV
//! - Candidates are compared in constant time
//! - The secret is zeroized when the engine is dropped

use super::codec::{constant_time_eq, decode_signature};
use super::errors::{KeyKind, Result, WebhookError};
use super::keys::SymmetricKey;
use super::message::CanonicalMessage;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 tag.
pub const SIGNATURE_LENGTH: usize = 32;

/// Shared-secret signer/verifier.
#[derive(Clone, Debug)]
pub struct HmacSha256Engine {
    key: SymmetricKey,
}

impl HmacSha256Engine {
    /// Create an engine around a decoded secret.
    pub fn new(key: SymmetricKey) -> Self {
        Self { key }
    }

    /// Compute the raw HMAC tag of `message`.
    pub fn sign(&self, message: &CanonicalMessage) -> Result<[u8; SIGNATURE_LENGTH]> {
        // HMAC accepts keys of any length; the error arm is unreachable in practice
        let mut mac = HmacSha256::new_from_slice(self.key.as_bytes())
            .map_err(|_| WebhookError::KeyFormat(KeyKind::Secret))?;
        mac.update(message.as_bytes());

        let mut tag = [0u8; SIGNATURE_LENGTH];
        tag.copy_from_slice(&mac.finalize().into_bytes());
        Ok(tag)
    }

    /// Recompute the tag and compare it to raw `candidate` bytes in constant time.
    pub fn verify(&self, message: &CanonicalMessage, candidate: &[u8]) -> Result<bool> {
        let expected = self.sign(message)?;
        Ok(constant_time_eq(candidate, &expected))
    }

    /// Compare a base64 header value against an already computed tag.
    ///
    /// Undecodable values are a non-match.
    pub fn matches_encoded(expected: &[u8], candidate: &str) -> bool {
        decode_signature(candidate).is_some_and(|bytes| constant_time_eq(&bytes, expected))
    }
}
