//! End-to-end pipeline tests: extract → detect → classify → protect → verify

use privguard::classification::RiskClassifier;
use privguard::detection::EntityDetector;
use privguard::domain::finding::EntityKind;
use privguard::domain::risk::RiskLevel;
use privguard::extraction::read_document_text;
use privguard::protection::{decrypt_text, load_key_file, save_key_file, EncryptionKey, Protector};
use tempfile::tempdir;

const MIXED_TEXT: &str =
    "National ID 12345678, phone 0712345678, email person@example.org, TAX PIN A123456789B.";

#[test]
fn test_scan_pipeline_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.txt");
    std::fs::write(&input, MIXED_TEXT).unwrap();

    let detector = EntityDetector::new().unwrap();
    let classifier = RiskClassifier::new().unwrap();

    let text = read_document_text(&input).unwrap();
    let findings = detector.detect(&text);
    let risk = classifier.classify(&findings);

    assert_eq!(findings.total(), 4);
    assert!(risk.score >= 70);
    assert_eq!(risk.level, RiskLevel::High);
}

#[test]
fn test_protect_then_verify_pipeline() {
    let detector = EntityDetector::new().unwrap();
    let protector = Protector::default();

    let findings = detector.detect(MIXED_TEXT);
    let result = protector.redact(MIXED_TEXT, &findings);

    // The protected output re-scans clean for the original values even
    // when re-detected from scratch.
    let re_detected = detector.detect(&result.output);
    assert!(re_detected.for_kind(EntityKind::NationalId).is_empty());
    assert!(re_detected.for_kind(EntityKind::Phone).is_empty());
    assert!(re_detected.for_kind(EntityKind::Email).is_empty());
    assert!(re_detected.for_kind(EntityKind::TaxPin).is_empty());

    assert!(result.quality.unwrap().passed());
}

#[test]
fn test_encrypt_pipeline_with_key_files() {
    let dir = tempdir().unwrap();
    let key_path = dir.path().join("report.key");

    let key = EncryptionKey::generate();
    save_key_file(&key, &key_path).unwrap();

    let protector = Protector::default();
    let result = protector.encrypt(MIXED_TEXT, &key).unwrap();

    // Token is opaque: none of the original values appear.
    assert!(!result.output.contains("12345678"));
    assert!(!result.output.contains("person@example.org"));

    // A key round-tripped through its file still decrypts.
    let loaded = load_key_file(&key_path).unwrap();
    assert_eq!(decrypt_text(&result.output, &loaded).unwrap(), MIXED_TEXT);
}

#[test]
fn test_masked_output_remains_classifiable() {
    let detector = EntityDetector::new().unwrap();
    let classifier = RiskClassifier::new().unwrap();
    let protector = Protector::default();

    let findings = detector.detect(MIXED_TEXT);
    let masked = protector.mask(MIXED_TEXT, &findings);

    // After masking, a fresh scan of the output finds nothing, and the
    // risk drops to the vacuous Low case.
    let re_scan = detector.detect(&masked.output);
    assert!(re_scan.is_empty());

    let risk = classifier.classify(&re_scan);
    assert_eq!(risk.score, 0);
    assert_eq!(risk.level, RiskLevel::Low);
    assert_eq!(risk.insights.len(), 2);
}
