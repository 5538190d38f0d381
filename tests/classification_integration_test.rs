//! Integration tests for the risk classifier

use privguard::classification::RiskClassifier;
use privguard::detection::EntityDetector;
use privguard::domain::finding::{EntityKind, Finding, FindingSet};
use privguard::domain::risk::RiskLevel;

const MIXED_TEXT: &str =
    "National ID 12345678, phone 0712345678, email person@example.org, TAX PIN A123456789B.";

#[test]
fn test_mixed_document_is_high_risk() {
    let detector = EntityDetector::new().unwrap();
    let classifier = RiskClassifier::new().unwrap();

    let findings = detector.detect(MIXED_TEXT);
    let summary = classifier.classify(&findings);

    // 30 + 15 + 10 + 35 weighted, plus the diversity bonus for four
    // active kinds, clamped to 100.
    assert!(summary.score >= 70);
    assert_eq!(summary.level, RiskLevel::High);
    assert_eq!(summary.counts[&EntityKind::NationalId], 1);
    assert_eq!(summary.counts[&EntityKind::TaxPin], 1);
}

#[test]
fn test_empty_findings_scores_zero_with_two_insights() {
    let classifier = RiskClassifier::new().unwrap();
    let summary = classifier.classify(&FindingSet::new());

    assert_eq!(summary.score, 0);
    assert_eq!(summary.level, RiskLevel::Low);
    assert_eq!(summary.insights.len(), 2);
    assert!(summary.insights[0].contains("No direct personal identifiers"));
    assert!(summary.insights[1].contains("Maintain secure storage"));
}

#[test]
fn test_score_is_linear_in_counts() {
    let classifier = RiskClassifier::new().unwrap();

    let mut one_email = FindingSet::new();
    one_email.push(Finding::new(EntityKind::Email, "a@b.com", 0, 7, 0.9));

    let mut three_emails = FindingSet::new();
    for (i, value) in ["a@b.com", "c@d.com", "e@f.com"].iter().enumerate() {
        three_emails.push(Finding::new(EntityKind::Email, *value, i * 10, i * 10 + 7, 0.9));
    }

    assert_eq!(classifier.classify(&one_email).score, 10);
    assert_eq!(classifier.classify(&three_emails).score, 30);
}

#[test]
fn test_level_thresholds() {
    let classifier = RiskClassifier::new().unwrap();

    // phone (15) + email (10) = 25 < 35: Low
    let mut low = FindingSet::new();
    low.push(Finding::new(EntityKind::Phone, "0712345678", 0, 10, 0.9));
    low.push(Finding::new(EntityKind::Email, "a@b.com", 20, 27, 0.9));
    assert_eq!(classifier.classify(&low).level, RiskLevel::Low);

    // tax pin alone (35) = Medium boundary
    let mut medium = FindingSet::new();
    medium.push(Finding::new(EntityKind::TaxPin, "A123456789B", 0, 11, 0.9));
    let summary = classifier.classify(&medium);
    assert_eq!(summary.score, 35);
    assert_eq!(summary.level, RiskLevel::Medium);

    // two tax pins (70) = High boundary
    let mut high = FindingSet::new();
    high.push(Finding::new(EntityKind::TaxPin, "A123456789B", 0, 11, 0.9));
    high.push(Finding::new(EntityKind::TaxPin, "C987654321D", 20, 31, 0.9));
    let summary = classifier.classify(&high);
    assert_eq!(summary.score, 70);
    assert_eq!(summary.level, RiskLevel::High);
}

#[test]
fn test_diversity_bonus_steps() {
    let classifier = RiskClassifier::new().unwrap();

    // Two kinds: no bonus. email 10 + phone 15 = 25.
    let mut two = FindingSet::new();
    two.push(Finding::new(EntityKind::Email, "a@b.com", 0, 7, 0.9));
    two.push(Finding::new(EntityKind::Phone, "0712345678", 10, 20, 0.9));
    assert_eq!(classifier.classify(&two).score, 25);

    // Three kinds: one bonus. 25 + 20 + 10 = 55.
    let mut three = two.clone();
    three.push(Finding::new(
        EntityKind::ApiSecret,
        "sk_live_abcdefghij0123456789XY",
        30,
        60,
        0.8,
    ));
    assert_eq!(classifier.classify(&three).score, 55);

    // Four kinds: both bonuses. 55 + 25 + 10 = 90.
    let mut four = three.clone();
    four.push(Finding::new(
        EntityKind::PaymentCard,
        "4111111111111111",
        70,
        86,
        0.8,
    ));
    assert_eq!(classifier.classify(&four).score, 90);
}

#[test]
fn test_high_risk_insight_ordering() {
    let detector = EntityDetector::new().unwrap();
    let classifier = RiskClassifier::new().unwrap();

    let summary = classifier.classify(&detector.detect(MIXED_TEXT));

    assert!(summary.insights[0].contains("data minimization"));
    assert!(summary.insights[1].contains("purpose limitation"));
    assert!(summary
        .insights
        .iter()
        .any(|i| i.contains("High-value identifiers")));
    assert!(summary
        .insights
        .last()
        .unwrap()
        .contains("Immediate action advised"));
}
