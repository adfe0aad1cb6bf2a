//! # Standard Webhooks
//!
//! Signing and verification for the Standard Webhooks protocol.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Canonical message, signature engines, codec, tolerance
//! - **Ports Layer** (`ports/`): The public `WebhookApi` plus collaborator traits
//!   (`HeaderCarrier`, `Clock`)
//! - **Adapters Layer** (`adapters/`): Header carriers and clocks
//! - **Service Layer** (`service.rs`): `Webhook`, which wires the domain to the ports
//!
//! ## Schemes
//!
//! | Version | Algorithm | Key material |
//! |---------|-----------|--------------|
//! | `v1` | HMAC-SHA256 | Shared secret (`whsec_...`) |
//! | `v1a` | Ed25519 | Private seed (`whsk_...`) and/or public key (`whpk_...`) |
//!
//! ## Example
//!
//! ```
//! use standard_webhooks::{Webhook, WebhookApi};
//!
//! let webhook = Webhook::new("whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw").unwrap();
//! let signature = webhook
//!     .sign("msg_p5jXN8AQM9LWM0D4loKWxJek", 1614265330, br#"{"test": 2432232314}"#)
//!     .unwrap();
//! assert_eq!(signature, "v1,g0hM9SsE+OTPJTGt/tmIKtSyZlE3uFJELVlNIOLJ1OE=");
//! ```
//!
//! ## Security Notes
//!
//! - Candidate signatures are compared in constant time (`subtle`)
//! - Key material is zeroized on drop and never logged
//! - Replay protection beyond the timestamp window is the caller's job

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::clock::{FixedClock, SystemClock};
pub use adapters::headers::WebhookHeaders;
pub use domain::config::WebhookConfig;
pub use domain::errors::{Result, WebhookError};
pub use domain::keys::{AsymmetricKeyPair, SymmetricKey};
pub use domain::message::CanonicalMessage;
pub use ports::inbound::WebhookApi;
pub use ports::outbound::{Clock, HeaderCarrier};
pub use service::Webhook;

/// Header carrying the message identifier.
pub const HEADER_WEBHOOK_ID: &str = "webhook-id";

/// Header carrying the space-separated signature list.
pub const HEADER_WEBHOOK_SIGNATURE: &str = "webhook-signature";

/// Header carrying the signing timestamp (integer seconds since epoch).
pub const HEADER_WEBHOOK_TIMESTAMP: &str = "webhook-timestamp";

/// Version tag of the symmetric HMAC-SHA256 scheme.
pub const SYMMETRIC_VERSION: &str = "v1";

/// Version tag of the asymmetric Ed25519 scheme.
pub const ASYMMETRIC_VERSION: &str = "v1a";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
