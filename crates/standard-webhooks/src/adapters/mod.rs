//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.
//!
//! - `headers`: `HeaderCarrier` for `http::HeaderMap`, string maps and `WebhookHeaders`
//! - `clock`: wall-clock and fixed clocks

pub mod clock;
pub mod headers;
