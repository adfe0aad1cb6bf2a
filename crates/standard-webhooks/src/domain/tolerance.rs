//! # Timestamp Tolerance
//!
//! Freshness check for the `webhook-timestamp` header. Pure function of the
//! claimed timestamp, the current time and the window.

use super::errors::{Result, WebhookError};

/// Default tolerance window in seconds (5 minutes).
pub const DEFAULT_TOLERANCE_SECS: u64 = 5 * 60;

/// Check that `timestamp` lies within `tolerance_secs` of `now`.
///
/// - `now - timestamp > tolerance` is `MessageTooOld`
/// - `timestamp > now + tolerance` is `MessageTooNew`
///
/// Both bounds are inclusive, so a skew of exactly the tolerance passes.
/// Arithmetic saturates, so extreme timestamps are rejected rather than
/// wrapping into the window.
pub fn check_timestamp(timestamp: i64, now: i64, tolerance_secs: u64) -> Result<()> {
    let tolerance = i64::try_from(tolerance_secs).unwrap_or(i64::MAX);

    if now.saturating_sub(timestamp) > tolerance {
        Err(WebhookError::MessageTooOld)
    } else if timestamp > now.saturating_add(tolerance) {
        Err(WebhookError::MessageTooNew)
    } else {
        Ok(())
    }
}

/// Parse a `webhook-timestamp` header value as base-10 integer seconds.
pub fn parse_timestamp(header: &str) -> Result<i64> {
    header.parse::<i64>().map_err(|_| WebhookError::InvalidHeaders)
}
