//! # Ed25519 Engine (`v1a`)
//!
//! Public-key signatures over the canonical message.
//!
//! ## Key Modes
//!
//! | Private seed | Public key | Capability |
//! |--------------|------------|------------|
//! | yes | no | sign + verify (public key derived) |
//! | no | yes | verify only |
//! | yes | yes | sign + verify |
//!
//! ## Security Properties
//!
//! - Deterministic nonces (RFC 8032), no RNG at signing time
//! - Signing key is zeroized on drop
//! - Verification is strict: small-order keys and `R` points are rejected,
//!   and `s` must be canonical
//! - Verification touches only public inputs (message, signature, public
//!   key), so its timing reveals nothing about key material. Constant-time
//!   byte comparison is reserved for HMAC tags, where the expected value is
//!   secret-derived

use super::codec::decode_signature;
use super::errors::{Result, WebhookError};
use super::keys::{decode_signing_key, decode_verifying_key};
use super::message::CanonicalMessage;
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey, SIGNATURE_LENGTH};

/// Ed25519 signer/verifier.
#[derive(Clone)]
pub struct Ed25519Engine {
    signing_key: Option<SigningKey>,
    verifying_key: VerifyingKey,
}

impl Ed25519Engine {
    /// Create from decoded keys.
    ///
    /// With only a signing key the verifying key is derived from it. When both
    /// are given they are used as supplied.
    pub fn new(verifying_key: Option<VerifyingKey>, signing_key: Option<SigningKey>) -> Result<Self> {
        let verifying_key = match (verifying_key, &signing_key) {
            (Some(public), _) => public,
            (None, Some(private)) => private.verifying_key(),
            (None, None) => return Err(WebhookError::MissingKeys),
        };

        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Decode from the external forms (`whpk_...` / `whsk_...`, prefixes optional).
    pub fn from_encoded(public_key: Option<&str>, private_key: Option<&str>) -> Result<Self> {
        if public_key.is_none() && private_key.is_none() {
            return Err(WebhookError::MissingKeys);
        }

        let verifying_key = public_key.map(decode_verifying_key).transpose()?;
        let signing_key = private_key.map(decode_signing_key).transpose()?;
        Self::new(verifying_key, signing_key)
    }

    /// Whether this engine holds a private key.
    pub fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }

    /// Get the verifying key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign `message`.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MissingPrivateKey` on a verify-only engine.
    pub fn sign(&self, message: &CanonicalMessage) -> Result<[u8; SIGNATURE_LENGTH]> {
        let signing_key = self
            .signing_key
            .as_ref()
            .ok_or(WebhookError::MissingPrivateKey)?;
        Ok(signing_key.sign(message.as_bytes()).to_bytes())
    }

    /// Check raw `candidate` bytes against `message`.
    ///
    /// Anything that is not a well-formed, valid signature is a plain `false`.
    /// Uses RFC 8032 strict verification, so malleable or small-order
    /// signatures never match.
    pub fn verify(&self, message: &CanonicalMessage, candidate: &[u8]) -> bool {
        let Ok(bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(candidate) else {
            return false;
        };
        let signature = Signature::from_bytes(&bytes);
        self.verifying_key
            .verify_strict(message.as_bytes(), &signature)
            .is_ok()
    }

    /// Check a base64 header value against `message`.
    pub fn matches_encoded(&self, message: &CanonicalMessage, candidate: &str) -> bool {
        decode_signature(candidate).is_some_and(|bytes| self.verify(message, &bytes))
    }
}

impl std::fmt::Debug for Ed25519Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519Engine")
            .field("can_sign", &self.can_sign())
            .field("verifying_key", &self.verifying_key)
            .finish()
    }
}
