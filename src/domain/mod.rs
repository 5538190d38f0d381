//! Domain models and types for PrivGuard.
//!
//! This module contains the core domain value objects shared by the
//! detection, classification, and protection subsystems.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The finding contract** ([`EntityKind`], [`Finding`], [`FindingSet`])
//! - **Risk models** ([`RiskLevel`], [`RiskSummary`])
//! - **Protection models** ([`ProtectionAction`], [`ProtectionResult`], [`RedactionQuality`])
//! - **Error types** ([`PrivGuardError`], [`ExtractionError`], [`CryptoError`])
//! - **Result type alias** ([`Result`])
//!
//! All of these are value objects transferred by copy/move between
//! components; none carries shared mutable state or back-references.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, PrivGuardError>`]:
//!
//! ```rust
//! use privguard::domain::{PrivGuardError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = privguard::config::load_config("privguard.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod finding;
pub mod protection;
pub mod result;
pub mod risk;

// Re-export commonly used types for convenience
pub use errors::{CryptoError, ExtractionError, PrivGuardError};
pub use finding::{EntityKind, Finding, FindingSet};
pub use protection::{
    LeakedItem, ProtectionAction, ProtectionResult, QualityStatus, RedactionQuality,
};
pub use result::Result;
pub use risk::{RiskLevel, RiskSummary};
