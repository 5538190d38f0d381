//! Audit trail
//!
//! Records every scan, protection, decryption, and verification operation
//! as an append-only event stream with hashed values, never plaintext.

pub mod logger;

pub use logger::{hash_sensitive_value, AuditLogger};
