//! # Tampering Attacks
//!
//! A network peer edits a signed delivery, or forges one without the key.
//!
//! ## Attacks Simulated
//!
//! 1. **Payload edits** - any changed byte must break the signature
//! 2. **Header re-binding** - moving a signature to another id or timestamp
//! 3. **Version confusion** - re-tagging a token for another scheme
//! 4. **Signature stuffing** - burying the valid token among junk
//! 5. **Forgery** - signing with a guessed or foreign key

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use proptest::prelude::*;
    use standard_webhooks::{
        FixedClock, SymmetricKey, Webhook, WebhookApi, WebhookError, WebhookHeaders,
    };

    fn signed(webhook: &Webhook<FixedClock>) -> WebhookHeaders {
        webhook
            .sign_headers(TEST_MSG_ID, TEST_TIMESTAMP, TEST_PAYLOAD)
            .unwrap()
    }

    // =========================================================================
    // ATTACK 1: Payload edits
    // =========================================================================

    #[test]
    fn test_every_payload_byte_is_covered() {
        init_tracing();
        for webhook in [symmetric_at(TEST_TIMESTAMP), asymmetric_at(TEST_TIMESTAMP)] {
            let headers = signed(&webhook);
            for index in 0..TEST_PAYLOAD.len() {
                let mut payload = TEST_PAYLOAD.to_vec();
                payload[index] ^= 0x20;
                assert_eq!(
                    webhook.verify(&payload, &headers),
                    Err(WebhookError::NoMatchingSignature),
                    "byte {index} not covered"
                );
            }
        }
    }

    #[test]
    fn test_appended_and_truncated_payloads_fail() {
        let webhook = symmetric_at(TEST_TIMESTAMP);
        let headers = signed(&webhook);

        let mut extended = TEST_PAYLOAD.to_vec();
        extended.extend_from_slice(b" ");
        assert_eq!(
            webhook.verify(&extended, &headers),
            Err(WebhookError::NoMatchingSignature)
        );
        assert_eq!(
            webhook.verify(&TEST_PAYLOAD[..TEST_PAYLOAD.len() - 1], &headers),
            Err(WebhookError::NoMatchingSignature)
        );
    }

    // =========================================================================
    // ATTACK 2: Header re-binding
    // =========================================================================

    #[test]
    fn test_signature_bound_to_message_id() {
        for webhook in [symmetric_at(TEST_TIMESTAMP), asymmetric_at(TEST_TIMESTAMP)] {
            let mut headers = signed(&webhook);
            headers.id = "msg_someone_else".to_string();
            assert_eq!(
                webhook.verify(TEST_PAYLOAD, &headers),
                Err(WebhookError::NoMatchingSignature)
            );
        }
    }

    #[test]
    fn test_signature_bound_to_timestamp() {
        for webhook in [symmetric_at(TEST_TIMESTAMP), asymmetric_at(TEST_TIMESTAMP)] {
            let mut headers = signed(&webhook);
            // Re-dating inside the window still breaks the signature
            headers.timestamp = (TEST_TIMESTAMP + 1).to_string();
            assert_eq!(
                webhook.verify(TEST_PAYLOAD, &headers),
                Err(WebhookError::NoMatchingSignature)
            );
            assert_eq!(
                webhook.verify_ignoring_timestamp(TEST_PAYLOAD, &headers),
                Err(WebhookError::NoMatchingSignature)
            );
        }
    }

    #[test]
    fn test_timestamp_header_is_read_as_an_integer() {
        let webhook = symmetric_at(TEST_TIMESTAMP);
        let mut headers = signed(&webhook);
        // Same integer, so the same canonical message
        headers.timestamp = format!("0{TEST_TIMESTAMP}");
        assert_eq!(webhook.verify(TEST_PAYLOAD, &headers), Ok(()));

        headers.timestamp = format!("{TEST_TIMESTAMP}.0");
        assert_eq!(
            webhook.verify(TEST_PAYLOAD, &headers),
            Err(WebhookError::InvalidHeaders)
        );
    }

    // =========================================================================
    // ATTACK 3: Version confusion
    // =========================================================================

    #[test]
    fn test_retagged_tokens_are_ignored() {
        let symmetric = symmetric_at(TEST_TIMESTAMP);
        let asymmetric = asymmetric_at(TEST_TIMESTAMP);

        let mut headers = signed(&symmetric);
        headers.signature = headers.signature.replacen("v1,", "v1a,", 1);
        assert_eq!(
            symmetric.verify(TEST_PAYLOAD, &headers),
            Err(WebhookError::NoMatchingSignature)
        );
        assert_eq!(
            asymmetric.verify(TEST_PAYLOAD, &headers),
            Err(WebhookError::NoMatchingSignature)
        );

        let mut headers = signed(&asymmetric);
        headers.signature = headers.signature.replacen("v1a,", "v1,", 1);
        assert_eq!(
            symmetric.verify(TEST_PAYLOAD, &headers),
            Err(WebhookError::NoMatchingSignature)
        );
    }

    #[test]
    fn test_unknown_future_versions_are_skipped() {
        let webhook = symmetric_at(TEST_TIMESTAMP);
        let mut headers = signed(&webhook);
        headers.signature = format!("v2,{} v3,abc {}", "A".repeat(44), headers.signature);
        assert_eq!(webhook.verify(TEST_PAYLOAD, &headers), Ok(()));
    }

    // =========================================================================
    // ATTACK 4: Signature stuffing
    // =========================================================================

    #[test]
    fn test_junk_only_header_never_matches() {
        let webhook = symmetric_at(TEST_TIMESTAMP);
        let mut headers = signed(&webhook);
        for junk in [" ", "v1", "v1,", ",", "v1,,", "v1,====", "v1a, v1,%%%"] {
            headers.signature = junk.to_string();
            assert_eq!(
                webhook.verify(TEST_PAYLOAD, &headers),
                Err(WebhookError::NoMatchingSignature),
                "{junk:?}"
            );
        }
    }

    #[test]
    fn test_valid_token_found_among_many_decoys() {
        let webhook = asymmetric_at(TEST_TIMESTAMP);
        let mut headers = signed(&webhook);
        let decoy = format!("v1a,{}", STANDARD.encode([0u8; 64]));
        let mut tokens = vec![decoy; 100];
        tokens.push(headers.signature.clone());
        headers.signature = tokens.join(" ");
        assert_eq!(webhook.verify(TEST_PAYLOAD, &headers), Ok(()));
    }

    // =========================================================================
    // ATTACK 5: Forgery
    // =========================================================================

    #[test]
    fn test_foreign_secret_forgery_fails() {
        let receiver = symmetric_at(TEST_TIMESTAMP);
        let forger = Webhook::new(&SymmetricKey::generate().to_encoded())
            .unwrap()
            .with_clock(FixedClock(TEST_TIMESTAMP));
        let headers = signed(&forger);
        assert_eq!(
            receiver.verify(TEST_PAYLOAD, &headers),
            Err(WebhookError::NoMatchingSignature)
        );
    }

    #[test]
    fn test_public_key_holder_cannot_sign() {
        let (_, receiver) = asymmetric_pair_at(TEST_TIMESTAMP);
        assert_eq!(
            receiver.sign(TEST_MSG_ID, TEST_TIMESTAMP, TEST_PAYLOAD),
            Err(WebhookError::MissingPrivateKey)
        );
    }

    #[test]
    fn test_empty_secret_does_not_verify_real_signatures() {
        let receiver = Webhook::from_bytes(Vec::new()).with_clock(FixedClock(TEST_TIMESTAMP));
        let headers = signed(&symmetric_at(TEST_TIMESTAMP));
        assert_eq!(
            receiver.verify(TEST_PAYLOAD, &headers),
            Err(WebhookError::NoMatchingSignature)
        );
    }

    proptest! {
        #[test]
        fn prop_flipped_signature_bit_fails(byte in 0usize..64, bit in 0u8..8) {
            let webhook = asymmetric_at(TEST_TIMESTAMP);
            let mut headers = signed(&webhook);

            let encoded = headers.signature.trim_start_matches("v1a,");
            let mut raw = STANDARD.decode(encoded).unwrap();
            raw[byte] ^= 1 << bit;
            headers.signature = format!("v1a,{}", STANDARD.encode(&raw));

            prop_assert_eq!(
                webhook.verify(TEST_PAYLOAD, &headers),
                Err(WebhookError::NoMatchingSignature)
            );
        }
    }
}
