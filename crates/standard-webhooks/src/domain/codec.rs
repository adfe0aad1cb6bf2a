//! # Signature Codec
//!
//! Wire form of the `webhook-signature` header: a space-separated list of
//! `<version>,<base64 signature>` tokens.
//!
//! ## Parsing Rules
//!
//! - Tokens are split on a single space, in header order
//! - Each token splits on its first comma into (version, value)
//! - Tokens without a comma are skipped, never fatal
//! - Entries tagged with another version are ignored

use super::errors::{Result, WebhookError};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use subtle::ConstantTimeEq;

/// One `<version>,<value>` token borrowed from a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureEntry<'a> {
    /// Scheme tag, e.g. `v1`
    pub version: &'a str,
    /// Remainder after the first comma, normally base64
    pub value: &'a str,
}

/// Format a freshly produced signature as a single header token.
pub fn format_signature(version: &str, signature: &[u8]) -> String {
    format!("{},{}", version, BASE64_STANDARD.encode(signature))
}

/// Parse a signature header into its well-formed entries.
pub fn parse_signature_list(header: &str) -> impl Iterator<Item = SignatureEntry<'_>> {
    header
        .split(' ')
        .filter_map(|token| token.split_once(','))
        .map(|(version, value)| SignatureEntry { version, value })
}

/// Decode a base64 entry value. Undecodable values yield `None`.
pub fn decode_signature(value: &str) -> Option<Vec<u8>> {
    BASE64_STANDARD.decode(value).ok()
}

/// Constant-time byte comparison.
///
/// Lengths are public (fixed per scheme); contents are compared with
/// `subtle` so no early exit leaks the first differing byte.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

/// Scan `header` for an entry tagged `expected_version` that satisfies `is_match`.
///
/// Stops at the first match. Returns `NoMatchingSignature` once the list is
/// exhausted, without saying which entries were rejected.
pub fn match_any<F>(header: &str, expected_version: &str, mut is_match: F) -> Result<()>
where
    F: FnMut(&str) -> bool,
{
    parse_signature_list(header)
        .filter(|entry| entry.version == expected_version)
        .any(|entry| is_match(entry.value))
        .then_some(())
        .ok_or(WebhookError::NoMatchingSignature)
}
