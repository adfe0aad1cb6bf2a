//! # Signing Engines
//!
//! Closed set of schemes. The variant is fixed by the constructor the caller
//! picks, and key material of one scheme cannot be handed to the other.

use super::asymmetric::Ed25519Engine;
use super::codec::{format_signature, match_any};
use super::errors::Result;
use super::message::CanonicalMessage;
use super::symmetric::HmacSha256Engine;
use crate::{ASYMMETRIC_VERSION, SYMMETRIC_VERSION};

/// The active signature scheme of a webhook instance.
#[derive(Clone, Debug)]
pub enum SigningEngine {
    /// HMAC-SHA256, tagged `v1`
    Symmetric(HmacSha256Engine),
    /// Ed25519, tagged `v1a`
    Asymmetric(Box<Ed25519Engine>),
}

impl SigningEngine {
    /// Version tag this engine produces and accepts.
    pub fn version(&self) -> &'static str {
        match self {
            Self::Symmetric(_) => SYMMETRIC_VERSION,
            Self::Asymmetric(_) => ASYMMETRIC_VERSION,
        }
    }

    /// Sign `message` and format it as a single `<version>,<base64>` token.
    pub fn sign(&self, message: &CanonicalMessage) -> Result<String> {
        match self {
            Self::Symmetric(engine) => Ok(format_signature(self.version(), &engine.sign(message)?)),
            Self::Asymmetric(engine) => Ok(format_signature(self.version(), &engine.sign(message)?)),
        }
    }

    /// Scan a signature header for an entry of this engine's version that
    /// verifies against `message`.
    pub fn verify_signature_list(&self, message: &CanonicalMessage, header: &str) -> Result<()> {
        match self {
            Self::Symmetric(engine) => {
                let expected = engine.sign(message)?;
                match_any(header, self.version(), |candidate| {
                    HmacSha256Engine::matches_encoded(&expected, candidate)
                })
            }
            Self::Asymmetric(engine) => match_any(header, self.version(), |candidate| {
                engine.matches_encoded(message, candidate)
            }),
        }
    }
}
