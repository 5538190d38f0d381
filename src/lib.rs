// PrivGuard - Offline Sensitive Data Protection
// Copyright (c) 2025 PrivGuard Contributors
// Licensed under the MIT License

//! # PrivGuard - Offline Sensitive Data Protection
//!
//! PrivGuard is an offline-first DLP core built in Rust: it locates
//! personally-identifiable and financial data in unstructured text, scores
//! the aggregate disclosure risk, and applies reversible or irreversible
//! protective transforms while proving that no residual sensitive value
//! remains in the protected output.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** sensitive entities with precompiled linear-time patterns
//!   and context-weighted confidence
//! - **Classifying** disclosure risk with a weighted score, diversity
//!   bonus, and configurable thresholds
//! - **Protecting** text via redaction, masking, or authenticated
//!   encryption
//! - **Verifying** that protected output leaks nothing, with
//!   token-boundary matching that avoids numeric-substring false positives
//!
//! ## Architecture
//!
//! PrivGuard follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Pattern matching and confidence scoring
//! - [`classification`] - Risk scoring and compliance insights
//! - [`protection`] - Redact/mask/encrypt and leak verification
//! - [`extraction`] - Document-to-text input boundary
//! - [`audit`] - Hashed, append-only operation trail
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration and policy management
//! - [`logging`] - Structured logging and observability
//!
//! Control flows one way: detector → classifier, and detector → protection
//! → verification. Verification reuses the detector's finding set rather
//! than running a fresh detection pass, so redaction cannot hide behind
//! asymmetric false negatives.
//!
//! ## Quick Start
//!
//! ```rust
//! use privguard::classification::RiskClassifier;
//! use privguard::detection::EntityDetector;
//! use privguard::protection::Protector;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = EntityDetector::new()?;
//! let classifier = RiskClassifier::new()?;
//!
//! let text = "National ID 12345678, phone 0712345678";
//! let findings = detector.detect(text);
//! let risk = classifier.classify(&findings);
//! println!("Risk: {} ({})", risk.score, risk.level);
//!
//! let result = Protector::default().redact(text, &findings);
//! assert!(result.quality.unwrap().passed());
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Detection, classification, and verification are synchronous pure
//! functions over in-memory values. Every call receives its own text and
//! returns a freshly allocated result, so independent scans run
//! concurrently with no coordination. The only scoped resource is the
//! encryption key, which is read once per encrypt/decrypt call and never
//! cached.
//!
//! ## Error Handling
//!
//! PrivGuard uses the [`domain::PrivGuardError`] type for all errors:
//!
//! ```rust,no_run
//! use privguard::domain::PrivGuardError;
//!
//! fn example() -> Result<(), PrivGuardError> {
//!     let config = privguard::config::load_config("privguard.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! PrivGuard uses structured logging with the `tracing` crate. Sensitive
//! values never reach the logs; counts and SHA-256 hashes do.

pub mod audit;
pub mod classification;
pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod extraction;
pub mod logging;
pub mod protection;
