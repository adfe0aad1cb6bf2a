//! # Key Material
//!
//! Decoding of the external key representation (optional literal prefix
//! followed by standard base64) and the owned key types built from it.
//!
//! ## Security Properties
//!
//! - Secret bytes are zeroized on drop
//! - `Debug` output is redacted
//! - Decode errors never echo key characters

use super::errors::{KeyKind, Result, WebhookError};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use ed25519_dalek::{SigningKey, VerifyingKey, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Prefix of an encoded symmetric secret.
pub const SECRET_PREFIX: &str = "whsec_";

/// Prefix of an encoded Ed25519 private seed.
pub const PRIVATE_KEY_PREFIX: &str = "whsk_";

/// Prefix of an encoded Ed25519 public key.
pub const PUBLIC_KEY_PREFIX: &str = "whpk_";

/// Length of generated symmetric secrets.
pub const GENERATED_SECRET_LENGTH: usize = 32;

/// Strip `prefix` if present and base64-decode the remainder.
///
/// A missing prefix is legal; the whole string is then taken as base64.
pub fn decode_key(encoded: &str, prefix: &str, kind: KeyKind) -> Result<Zeroizing<Vec<u8>>> {
    let body = encoded.strip_prefix(prefix).unwrap_or(encoded);
    BASE64_STANDARD
        .decode(body)
        .map(Zeroizing::new)
        .map_err(|_| WebhookError::KeyFormat(kind))
}

/// Decode an Ed25519 private seed (`whsk_...`).
pub fn decode_signing_key(encoded: &str) -> Result<SigningKey> {
    let bytes = decode_key(encoded, PRIVATE_KEY_PREFIX, KeyKind::PrivateKey)?;
    let seed: Zeroizing<[u8; SECRET_KEY_LENGTH]> = Zeroizing::new(
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| WebhookError::KeyFormat(KeyKind::PrivateKey))?,
    );
    Ok(SigningKey::from_bytes(&seed))
}

/// Decode an Ed25519 public key (`whpk_...`), rejecting points off the curve.
pub fn decode_verifying_key(encoded: &str) -> Result<VerifyingKey> {
    let bytes = decode_key(encoded, PUBLIC_KEY_PREFIX, KeyKind::PublicKey)?;
    let raw: [u8; PUBLIC_KEY_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| WebhookError::KeyFormat(KeyKind::PublicKey))?;
    VerifyingKey::from_bytes(&raw).map_err(|_| WebhookError::KeyFormat(KeyKind::PublicKey))
}

/// Shared HMAC secret.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey(Vec<u8>);

impl SymmetricKey {
    /// Create from raw bytes, bypassing decoding.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode from the external form (`whsec_` prefix optional).
    pub fn from_encoded(encoded: &str) -> Result<Self> {
        let bytes = decode_key(encoded, SECRET_PREFIX, KeyKind::Secret)?;
        Ok(Self(bytes.to_vec()))
    }

    /// Generate a random 32-byte secret.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; GENERATED_SECRET_LENGTH];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Encode as `whsec_<base64>`.
    pub fn to_encoded(&self) -> String {
        format!("{}{}", SECRET_PREFIX, BASE64_STANDARD.encode(&self.0))
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey").finish_non_exhaustive()
    }
}

/// Freshly generated Ed25519 key pair in external form.
pub struct AsymmetricKeyPair {
    signing_key: SigningKey,
}

impl AsymmetricKeyPair {
    /// Generate a random key pair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::thread_rng()),
        }
    }

    /// Private seed as `whsk_<base64>`.
    pub fn private_key_encoded(&self) -> String {
        let seed = Zeroizing::new(self.signing_key.to_bytes());
        format!("{}{}", PRIVATE_KEY_PREFIX, BASE64_STANDARD.encode(seed.as_slice()))
    }

    /// Public key as `whpk_<base64>`.
    pub fn public_key_encoded(&self) -> String {
        format!(
            "{}{}",
            PUBLIC_KEY_PREFIX,
            BASE64_STANDARD.encode(self.signing_key.verifying_key().as_bytes())
        )
    }

    /// Borrow the signing key.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Get the verifying key.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}

impl std::fmt::Debug for AsymmetricKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsymmetricKeyPair")
            .field("public_key", &self.public_key_encoded())
            .finish_non_exhaustive()
    }
}
