//! Integration tests for protection actions

use privguard::detection::EntityDetector;
use privguard::domain::errors::CryptoError;
use privguard::domain::finding::EntityKind;
use privguard::domain::protection::{ProtectionAction, QualityStatus};
use privguard::protection::{
    decrypt_text, encrypt_text, mask_text, mask_value, redact_text, verify_quality,
    EncryptionKey, Protector,
};

const MIXED_TEXT: &str =
    "National ID 12345678, phone 0712345678, email person@example.org, TAX PIN A123456789B.";

#[test]
fn test_redaction_round_trip_is_always_clean() {
    let detector = EntityDetector::new().unwrap();

    for text in [
        MIXED_TEXT,
        "nothing sensitive here",
        "",
        "0712345678 repeated 0712345678 three times 0712345678",
    ] {
        let findings = detector.detect(text);
        let redacted = redact_text(text, &findings, "[REDACTED]");
        let quality = verify_quality(&findings, &redacted);
        assert_eq!(quality.status, QualityStatus::Pass, "leaked for {text:?}");
        assert_eq!(quality.coverage_percent, 100.0);
    }
}

#[test]
fn test_redaction_replaces_repeated_occurrences() {
    let detector = EntityDetector::new().unwrap();
    let text = "0712345678 repeated 0712345678";
    let findings = detector.detect(text);

    let redacted = redact_text(text, &findings, "[REDACTED]");
    assert_eq!(redacted, "[REDACTED] repeated [REDACTED]");
}

#[test]
fn test_mask_round_trip_is_clean_and_length_preserving() {
    let detector = EntityDetector::new().unwrap();
    let findings = detector.detect(MIXED_TEXT);

    let masked = mask_text(MIXED_TEXT, &findings, '*');
    assert_eq!(masked.chars().count(), MIXED_TEXT.chars().count());

    let quality = verify_quality(&findings, &masked);
    assert!(quality.passed());

    assert!(masked.contains("07******78"));
    assert!(masked.contains("12****78"));
    assert!(masked.contains("A1*******9B"));
}

#[test]
fn test_mask_value_length_property() {
    for value in [
        "1",
        "ab",
        "abcd",
        "abcde",
        "0712345678",
        "person@example.org",
        "4111 1111 1111 1111",
    ] {
        assert_eq!(
            mask_value(value, '*').chars().count(),
            value.chars().count(),
            "length changed for {value:?}"
        );
    }
}

#[test]
fn test_encrypt_decrypt_inverse() {
    let key = EncryptionKey::generate();

    for text in [MIXED_TEXT, "", "unicode: héllo → wörld", "line\nbreaks\n"] {
        let token = encrypt_text(text, &key).unwrap();
        assert_ne!(token, text);
        assert_eq!(decrypt_text(&token, &key).unwrap(), text);
    }
}

#[test]
fn test_decrypt_with_wrong_key_fails_distinguishably() {
    let key = EncryptionKey::generate();
    let wrong_key = EncryptionKey::generate();

    let token = encrypt_text(MIXED_TEXT, &key).unwrap();
    let err = decrypt_text(&token, &wrong_key).unwrap_err();
    assert!(matches!(err, CryptoError::DecryptionFailed));
}

#[test]
fn test_decrypt_garbage_is_invalid_token() {
    let key = EncryptionKey::generate();
    let err = decrypt_text("definitely not a token", &key).unwrap_err();
    assert!(matches!(err, CryptoError::InvalidToken(_)));
}

#[test]
fn test_protector_full_pipeline() {
    let detector = EntityDetector::new().unwrap();
    let protector = Protector::default();
    let findings = detector.detect(MIXED_TEXT);

    let redacted = protector.redact(MIXED_TEXT, &findings);
    assert_eq!(redacted.action, ProtectionAction::Redact);
    assert!(redacted.quality.unwrap().passed());
    assert!(!redacted.output.contains("12345678"));
    assert!(!redacted.output.contains("person@example.org"));

    let masked = protector.mask(MIXED_TEXT, &findings);
    assert_eq!(masked.action, ProtectionAction::Mask);
    assert!(masked.quality.unwrap().passed());

    let key = EncryptionKey::generate();
    let encrypted = protector.encrypt(MIXED_TEXT, &key).unwrap();
    assert!(encrypted.quality.is_none());
    assert_eq!(decrypt_text(&encrypted.output, &key).unwrap(), MIXED_TEXT);
}

#[test]
fn test_substring_value_does_not_corrupt_longer_value() {
    let detector = EntityDetector::new().unwrap();
    // "12345678" (national id) is a substring of the card number's digit
    // groups; longest-first substitution must keep both intact.
    let text = "id 12345678 card 4111111111111111 done";
    let findings = detector.detect(text);
    assert_eq!(findings.for_kind(EntityKind::NationalId).len(), 1);
    assert_eq!(findings.for_kind(EntityKind::PaymentCard).len(), 1);

    let redacted = redact_text(text, &findings, "[REDACTED]");
    assert_eq!(redacted, "id [REDACTED] card [REDACTED] done");

    let quality = verify_quality(&findings, &redacted);
    assert!(quality.passed());
}
