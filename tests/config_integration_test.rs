//! Integration tests for configuration and policy loading

use privguard::config::{load_config, load_config_or_default, PolicyFile};
use privguard::detection::EntityDetector;
use privguard::domain::finding::EntityKind;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_full_config_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
[application]
log_level = "debug"

[protection]
output_dir = "protected"
redaction_marker = "[HIDDEN]"
mask_char = "#"

[audit]
enabled = false
"##
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.protection.redaction_marker, "[HIDDEN]");
    assert_eq!(config.protection.mask_char, '#');
    assert!(!config.audit.enabled);
}

#[test]
fn test_defaults_apply_without_config_file() {
    let config = load_config_or_default("/definitely/not/here/privguard.toml").unwrap();
    assert_eq!(config.application.log_level, "info");
    assert!(config.policy.path.is_none());

    let policy = config.load_policy().unwrap();
    assert_eq!(policy.detection.patterns.len(), EntityKind::ALL.len());
}

#[test]
fn test_custom_policy_file_drives_detection() {
    let dir = tempdir().unwrap();
    let policy_path = dir.path().join("strict_policy.toml");

    // Narrow the phone pattern so only the international prefix matches.
    let mut policy = PolicyFile::embedded_default().unwrap();
    policy
        .detection
        .spec_for_mut(EntityKind::Phone)
        .unwrap()
        .pattern = r"\+254(?:7[0-9]{8}|1[0-9]{8})".to_string();
    std::fs::write(&policy_path, toml::to_string(&policy).unwrap()).unwrap();

    let loaded = PolicyFile::from_file(&policy_path).unwrap();
    let detector = EntityDetector::from_policy(&loaded.detection).unwrap();

    let findings = detector.detect("+254712345678 and 0712345678");
    let phones = findings.for_kind(EntityKind::Phone);
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0].value, "+254712345678");
}

#[test]
fn test_policy_missing_weight_fails_at_load() {
    let mut policy = PolicyFile::embedded_default().unwrap();
    policy.risk.weights.remove("payment_card");

    let dir = tempdir().unwrap();
    let policy_path = dir.path().join("broken.toml");
    std::fs::write(&policy_path, toml::to_string(&policy).unwrap()).unwrap();

    let err = PolicyFile::from_file(&policy_path).unwrap_err();
    assert!(err.to_string().contains("risk weight"));
}

#[test]
fn test_policy_bad_regex_fails_at_load() {
    let mut policy = PolicyFile::embedded_default().unwrap();
    policy
        .detection
        .spec_for_mut(EntityKind::TaxPin)
        .unwrap()
        .pattern = "(unclosed".to_string();

    let dir = tempdir().unwrap();
    let policy_path = dir.path().join("broken.toml");
    std::fs::write(&policy_path, toml::to_string(&policy).unwrap()).unwrap();

    let err = PolicyFile::from_file(&policy_path).unwrap_err();
    assert!(err.to_string().contains("Invalid pattern"));
}

#[test]
fn test_env_override_changes_audit_setting() {
    // Env vars are process-global; keep this test self-contained.
    std::env::set_var("PRIVGUARD_AUDIT_ENABLED", "false");
    let config = load_config_or_default("/definitely/not/here/privguard.toml").unwrap();
    std::env::remove_var("PRIVGUARD_AUDIT_ENABLED");

    assert!(!config.audit.enabled);
}

#[test]
fn test_tuned_confidence_constants_flow_through() {
    let mut policy = PolicyFile::embedded_default().unwrap();
    policy.detection.confidence.keyword_baseline = 0.5;

    let detector = EntityDetector::from_policy(&policy.detection).unwrap();
    let findings = detector.detect("0712345678");
    assert_eq!(findings.for_kind(EntityKind::Phone)[0].confidence, 0.5);
}
