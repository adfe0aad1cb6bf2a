//! # Webhook Errors
//!
//! One flat error enumeration for every signing, verification and key
//! loading failure. Callers branch on the variant directly.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, WebhookError>;

/// Which piece of key material failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Symmetric HMAC secret (`whsec_`)
    Secret,
    /// Asymmetric Ed25519 private seed (`whsk_`)
    PrivateKey,
    /// Asymmetric Ed25519 public key (`whpk_`)
    PublicKey,
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Secret => write!(f, "secret"),
            Self::PrivateKey => write!(f, "private key"),
            Self::PublicKey => write!(f, "public key"),
        }
    }
}

/// Errors that can occur while signing or verifying webhooks.
///
/// Verification failures never say which candidate signature failed or why.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// One of `webhook-id`, `webhook-signature`, `webhook-timestamp` is missing or empty
    #[error("Missing required headers")]
    RequiredHeaders,

    /// The timestamp header is not a base-10 integer
    #[error("Invalid signature headers")]
    InvalidHeaders,

    /// No signature of this scheme's version matched
    #[error("No matching signature found")]
    NoMatchingSignature,

    /// Timestamp is older than the tolerance window
    #[error("Message timestamp too old")]
    MessageTooOld,

    /// Timestamp is further in the future than the tolerance window
    #[error("Message timestamp too new")]
    MessageTooNew,

    /// Signing was requested on a verify-only asymmetric instance
    #[error("Missing private key")]
    MissingPrivateKey,

    /// Asymmetric construction without any key
    #[error("Missing keys: a public key or a private key is required")]
    MissingKeys,

    /// Key material could not be decoded.
    ///
    /// Never carries the key text or the decoder message, which can echo it.
    #[error("Invalid {0} format")]
    KeyFormat(KeyKind),

    /// Configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WebhookError {
    /// True for the failures `verify` can report about a delivered message.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            Self::RequiredHeaders
                | Self::InvalidHeaders
                | Self::NoMatchingSignature
                | Self::MessageTooOld
                | Self::MessageTooNew
        )
    }

    /// True for failures caused by absent or malformed key material.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPrivateKey | Self::MissingKeys | Self::KeyFormat(_)
        )
    }
}
