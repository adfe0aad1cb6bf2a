//! # Webhook Service
//!
//! Application service layer that implements the `WebhookApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`WebhookApi`)
//! - Reads headers through the outbound `HeaderCarrier` port and time through `Clock`
//! - Delegates message building, signing and matching to the domain layer
//!
//! ## Verification Flow
//!
//! 1. Read `webhook-id`, `webhook-signature`, `webhook-timestamp` (all required)
//! 2. Parse the timestamp as integer seconds
//! 3. Enforce the tolerance window (skipped by `verify_ignoring_timestamp`)
//! 4. Rebuild the canonical message and scan the signature list for a match

use crate::adapters::clock::SystemClock;
use crate::adapters::headers::WebhookHeaders;
use crate::domain::asymmetric::Ed25519Engine;
use crate::domain::config::WebhookConfig;
use crate::domain::engine::SigningEngine;
use crate::domain::errors::{Result, WebhookError};
use crate::domain::keys::SymmetricKey;
use crate::domain::message::CanonicalMessage;
use crate::domain::symmetric::HmacSha256Engine;
use crate::domain::tolerance::{check_timestamp, parse_timestamp};
use crate::ports::inbound::WebhookApi;
use crate::ports::outbound::{Clock, HeaderCarrier};
use crate::{HEADER_WEBHOOK_ID, HEADER_WEBHOOK_SIGNATURE, HEADER_WEBHOOK_TIMESTAMP};
use ed25519_dalek::{SigningKey, VerifyingKey};
use tracing::debug;

/// Webhook signer/verifier.
///
/// Holds one immutable key for its whole lifetime; safe to share across
/// threads for concurrent `sign`/`verify`.
///
/// # Example
///
/// ```
/// use standard_webhooks::{Webhook, WebhookApi};
///
/// let sender = Webhook::new_asymmetric(None, Some("whsk_VEVTVFNJR05JTkdLRVlET05PVFVTRVRISVNGT1JBTlk=")).unwrap();
/// let headers = sender.sign_headers("msg_1", chrono::Utc::now().timestamp(), b"{}").unwrap();
/// assert!(sender.verify(b"{}", &headers).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Webhook<C: Clock = SystemClock> {
    engine: SigningEngine,
    config: WebhookConfig,
    clock: C,
}

impl Webhook {
    /// Create a symmetric (`v1`) webhook from an encoded secret.
    ///
    /// The `whsec_` prefix is optional.
    ///
    /// # Errors
    /// * `WebhookError::KeyFormat` - the secret is not valid base64
    pub fn new(secret: &str) -> Result<Self> {
        let key = SymmetricKey::from_encoded(secret)?;
        Ok(Self::from_engine(SigningEngine::Symmetric(HmacSha256Engine::new(key))))
    }

    /// Create a symmetric (`v1`) webhook from raw secret bytes.
    pub fn from_bytes(secret: Vec<u8>) -> Self {
        Self::from_engine(SigningEngine::Symmetric(HmacSha256Engine::new(
            SymmetricKey::from_bytes(secret),
        )))
    }

    /// Create an asymmetric (`v1a`) webhook from encoded keys.
    ///
    /// `public_key` (`whpk_...`) and `private_key` (`whsk_...`) are both
    /// optional, prefixes included; at least one must be present. With only a
    /// private key the public key is derived.
    ///
    /// # Errors
    /// * `WebhookError::MissingKeys` - neither key supplied
    /// * `WebhookError::KeyFormat` - a key failed to decode
    pub fn new_asymmetric(public_key: Option<&str>, private_key: Option<&str>) -> Result<Self> {
        let engine = Ed25519Engine::from_encoded(public_key, private_key)?;
        if !engine.can_sign() {
            debug!("Created verify-only asymmetric webhook");
        }
        Ok(Self::from_engine(SigningEngine::Asymmetric(Box::new(engine))))
    }

    /// Create an asymmetric (`v1a`) webhook from already decoded keys.
    pub fn from_asymmetric_keys(
        public_key: Option<VerifyingKey>,
        private_key: Option<SigningKey>,
    ) -> Result<Self> {
        let engine = Ed25519Engine::new(public_key, private_key)?;
        Ok(Self::from_engine(SigningEngine::Asymmetric(Box::new(engine))))
    }

    fn from_engine(engine: SigningEngine) -> Self {
        Self {
            engine,
            config: WebhookConfig::default(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Webhook<C> {
    /// Replace the configuration after validating it.
    ///
    /// # Errors
    /// * `WebhookError::InvalidConfig` - tolerance out of range
    pub fn with_config(mut self, config: WebhookConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Swap the time source.
    pub fn with_clock<D: Clock>(self, clock: D) -> Webhook<D> {
        Webhook {
            engine: self.engine,
            config: self.config,
            clock,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Sign a delivery and return all three headers to attach to it.
    pub fn sign_headers(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> Result<WebhookHeaders> {
        let signature = self.sign(msg_id, timestamp, payload)?;
        Ok(WebhookHeaders::new(msg_id, timestamp, signature))
    }

    fn verify_inner(
        &self,
        payload: &[u8],
        headers: &dyn HeaderCarrier,
        enforce_tolerance: bool,
    ) -> Result<()> {
        let msg_id = required_header(headers, HEADER_WEBHOOK_ID)?;
        let msg_signature = required_header(headers, HEADER_WEBHOOK_SIGNATURE)?;
        let msg_timestamp = required_header(headers, HEADER_WEBHOOK_TIMESTAMP)?;

        let timestamp = parse_timestamp(msg_timestamp).inspect_err(|_| {
            debug!(msg_id, "Rejected webhook with unparseable timestamp");
        })?;

        if enforce_tolerance {
            let now = self.clock.now_unix();
            check_timestamp(timestamp, now, self.config.tolerance_secs).inspect_err(|err| {
                debug!(
                    msg_id,
                    skew_secs = now.saturating_sub(timestamp),
                    tolerance_secs = self.config.tolerance_secs,
                    "Rejected webhook outside tolerance window: {}",
                    err
                );
            })?;
        }

        let message = CanonicalMessage::new(msg_id, timestamp, payload);
        self.engine
            .verify_signature_list(&message, msg_signature)
            .inspect_err(|_| {
                debug!(
                    msg_id,
                    version = self.engine.version(),
                    "Rejected webhook: no matching signature"
                );
            })
    }
}

impl<C: Clock> WebhookApi for Webhook<C> {
    fn version(&self) -> &'static str {
        self.engine.version()
    }

    fn sign(&self, msg_id: &str, timestamp: i64, payload: &[u8]) -> Result<String> {
        let message = CanonicalMessage::new(msg_id, timestamp, payload);
        self.engine.sign(&message)
    }

    fn verify(&self, payload: &[u8], headers: &dyn HeaderCarrier) -> Result<()> {
        self.verify_inner(payload, headers, true)
    }

    fn verify_ignoring_timestamp(&self, payload: &[u8], headers: &dyn HeaderCarrier) -> Result<()> {
        self.verify_inner(payload, headers, false)
    }
}

/// Fetch a header that must be present and non-empty.
fn required_header<'a>(headers: &'a dyn HeaderCarrier, name: &str) -> Result<&'a str> {
    match headers.header(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            debug!(header = name, "Rejected webhook with missing header");
            Err(WebhookError::RequiredHeaders)
        }
    }
}
