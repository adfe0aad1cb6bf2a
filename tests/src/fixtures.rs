//! Shared test fixtures.

use standard_webhooks::{AsymmetricKeyPair, FixedClock, Webhook};
use std::sync::Once;

/// Symmetric secret from the cross-library test vectors.
pub const TEST_SECRET: &str = "whsec_MfKQ9r8GKYqrTwjUPD8ILPZIo2LaLaSw";

/// Base64 of the 32-byte seed `TESTSIGNINGKEYDONOTUSETHISFORANY`.
pub const TEST_SEED: &str = "whsk_VEVTVFNJR05JTkdLRVlET05PVFVTRVRISVNGT1JBTlk=";

/// Message id from the cross-library test vectors.
pub const TEST_MSG_ID: &str = "msg_p5jXN8AQM9LWM0D4loKWxJek";

/// Timestamp from the cross-library test vectors.
pub const TEST_TIMESTAMP: i64 = 1614265330;

/// Payload from the cross-library test vectors.
pub const TEST_PAYLOAD: &[u8] = br#"{"test": 2432232314}"#;

/// Default tolerance window in seconds.
pub const TOLERANCE_SECS: i64 = 300;

static TRACING: Once = Once::new();

/// Install a test subscriber once so `RUST_LOG=debug` shows library logs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Symmetric webhook pinned to `now`.
pub fn symmetric_at(now: i64) -> Webhook<FixedClock> {
    Webhook::new(TEST_SECRET)
        .expect("test secret decodes")
        .with_clock(FixedClock(now))
}

/// Asymmetric signing webhook pinned to `now`.
pub fn asymmetric_at(now: i64) -> Webhook<FixedClock> {
    Webhook::new_asymmetric(None, Some(TEST_SEED))
        .expect("test seed decodes")
        .with_clock(FixedClock(now))
}

/// Fresh key pair plus a signer and a verify-only receiver pinned to `now`.
pub fn asymmetric_pair_at(now: i64) -> (Webhook<FixedClock>, Webhook<FixedClock>) {
    let pair = AsymmetricKeyPair::generate();
    let signer = Webhook::new_asymmetric(None, Some(&pair.private_key_encoded()))
        .expect("generated seed decodes")
        .with_clock(FixedClock(now));
    let receiver = Webhook::new_asymmetric(Some(&pair.public_key_encoded()), None)
        .expect("generated public key decodes")
        .with_clock(FixedClock(now));
    (signer, receiver)
}
