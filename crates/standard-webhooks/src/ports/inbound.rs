//! # Inbound Ports (Driving Ports / API)
//!
//! The operations a webhook sender or receiver performs.

use super::outbound::HeaderCarrier;
use crate::domain::errors::Result;

/// Primary webhook signing/verification API.
///
/// Implementations must be thread-safe (`Send + Sync`); every method is a
/// pure function of its inputs and the key held by the instance.
pub trait WebhookApi: Send + Sync {
    /// Version tag of the active scheme (`v1` or `v1a`).
    fn version(&self) -> &'static str;

    /// Sign a delivery and return the `webhook-signature` token.
    ///
    /// # Errors
    /// * `WebhookError::MissingPrivateKey` - asymmetric instance without a private key
    fn sign(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> Result<String>;

    /// Verify a delivery, enforcing the timestamp tolerance window.
    ///
    /// # Errors
    /// * `WebhookError::RequiredHeaders` - id, signature or timestamp missing
    /// * `WebhookError::InvalidHeaders` - timestamp is not an integer
    /// * `WebhookError::MessageTooOld` / `WebhookError::MessageTooNew` - outside the window
    /// * `WebhookError::NoMatchingSignature` - no entry of this version matched
    fn verify(&self, payload: &[u8], headers: &dyn HeaderCarrier) -> Result<()>;

    /// Verify a delivery without the freshness window.
    ///
    /// The timestamp header must still be present and parseable.
    ///
    /// **WARNING:** skipping the window removes replay protection. Prefer `verify`.
    fn verify_ignoring_timestamp(&self, payload: &[u8], headers: &dyn HeaderCarrier) -> Result<()>;
}
