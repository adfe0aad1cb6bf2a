//! # Header Carriers
//!
//! `HeaderCarrier` implementations for the shapes headers usually arrive in,
//! plus `WebhookHeaders`, the triple a sender attaches to a delivery.

use crate::ports::outbound::HeaderCarrier;
use crate::{HEADER_WEBHOOK_ID, HEADER_WEBHOOK_SIGNATURE, HEADER_WEBHOOK_TIMESTAMP};
use http::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Values that are not visible ASCII read as absent.
impl HeaderCarrier for HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Exact key first, then an ASCII case-insensitive scan.
///
/// More than one case variant of `name` without an exact match reads as absent.
impl<S: BuildHasher> HeaderCarrier for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.get(name) {
            return Some(value.as_str());
        }

        let mut matches = self
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str());
        match (matches.next(), matches.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        }
    }
}

/// The three Standard Webhooks headers of one delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookHeaders {
    /// `webhook-id`
    pub id: String,
    /// `webhook-timestamp`, decimal seconds
    pub timestamp: String,
    /// `webhook-signature`, space-separated signature list
    pub signature: String,
}

impl WebhookHeaders {
    /// Assemble headers from their parts.
    pub fn new(id: impl Into<String>, timestamp: i64, signature: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.to_string(),
            signature: signature.into(),
        }
    }

    /// Append another signature token (e.g. during key rotation).
    pub fn push_signature(&mut self, token: &str) {
        if self.signature.is_empty() {
            self.signature.push_str(token);
        } else {
            self.signature.push(' ');
            self.signature.push_str(token);
        }
    }

    /// Header name/value pairs, ready for an HTTP client builder.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            (HEADER_WEBHOOK_ID.to_string(), self.id.clone()),
            (HEADER_WEBHOOK_TIMESTAMP.to_string(), self.timestamp.clone()),
            (HEADER_WEBHOOK_SIGNATURE.to_string(), self.signature.clone()),
        ]
    }

    /// Convert into an `http::HeaderMap`.
    ///
    /// # Errors
    /// Fails if the message id contains bytes not allowed in a header value.
    pub fn to_header_map(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(
            HeaderName::from_static(HEADER_WEBHOOK_ID),
            HeaderValue::from_str(&self.id)?,
        );
        headers.insert(
            HeaderName::from_static(HEADER_WEBHOOK_TIMESTAMP),
            HeaderValue::from_str(&self.timestamp)?,
        );
        headers.insert(
            HeaderName::from_static(HEADER_WEBHOOK_SIGNATURE),
            HeaderValue::from_str(&self.signature)?,
        );
        Ok(headers)
    }
}

impl HeaderCarrier for WebhookHeaders {
    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(HEADER_WEBHOOK_ID) {
            Some(&self.id)
        } else if name.eq_ignore_ascii_case(HEADER_WEBHOOK_TIMESTAMP) {
            Some(&self.timestamp)
        } else if name.eq_ignore_ascii_case(HEADER_WEBHOOK_SIGNATURE) {
            Some(&self.signature)
        } else {
            None
        }
    }
}
