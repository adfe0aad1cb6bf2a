//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators the verifier reads from: the transport's headers and the
//! current time.

/// Read-only view of transport headers.
///
/// Lookup must be ASCII case-insensitive. The verifier only reads
/// `webhook-id`, `webhook-signature` and `webhook-timestamp`.
pub trait HeaderCarrier {
    /// Value of header `name`, if present and representable as text.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Source of "now" for the tolerance window.
pub trait Clock: Send + Sync {
    /// Current time in whole seconds since the Unix epoch (UTC).
    fn now_unix(&self) -> i64;
}

impl<T: HeaderCarrier + ?Sized> HeaderCarrier for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}
