//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Detection, classification, and verification are total functions and have
//! no error variants here on purpose; only the configuration, extraction,
//! and crypto boundaries can fail.

use thiserror::Error;

/// Main PrivGuard error type
#[derive(Debug, Error)]
pub enum PrivGuardError {
    /// Configuration or policy errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Text extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Encryption/decryption errors
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Audit trail errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Text extraction errors
///
/// Extraction is an input boundary: failures are distinguished conditions
/// returned to the caller, never panics.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Input path does not exist
    #[error("Input file not found: {0}")]
    NotFound(String),

    /// Input path exists but is not a regular file
    #[error("Input path is not a file: {0}")]
    NotAFile(String),

    /// File extension outside the supported set
    #[error("Unsupported file type '{extension}': {message}")]
    UnsupportedType { extension: String, message: String },

    /// Underlying read failed
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
}

/// Encryption/decryption errors
///
/// Wrong-key and corrupted-token conditions are deliberately collapsed into
/// [`CryptoError::DecryptionFailed`]: an authenticated cipher cannot tell
/// them apart, and callers must not be able to either.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key material has the wrong size or encoding
    #[error("Invalid encryption key: {0}")]
    InvalidKey(String),

    /// Input does not parse as a versioned token
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Authenticated decryption failed: wrong key or tampered token
    #[error("Decryption failed: invalid key or corrupted token")]
    DecryptionFailed,

    /// Encryption itself failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PrivGuardError {
    fn from(err: std::io::Error) -> Self {
        PrivGuardError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PrivGuardError {
    fn from(err: serde_json::Error) -> Self {
        PrivGuardError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PrivGuardError {
    fn from(err: toml::de::Error) -> Self {
        PrivGuardError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrivGuardError::Configuration("missing weight".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing weight");
    }

    #[test]
    fn test_extraction_error_conversion() {
        let ext_err = ExtractionError::NotFound("report.txt".to_string());
        let err: PrivGuardError = ext_err.into();
        assert!(matches!(err, PrivGuardError::Extraction(_)));
    }

    #[test]
    fn test_crypto_error_conversion() {
        let crypto_err = CryptoError::DecryptionFailed;
        let err: PrivGuardError = crypto_err.into();
        assert!(matches!(err, PrivGuardError::Crypto(_)));
        assert!(err.to_string().contains("invalid key or corrupted token"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PrivGuardError = io_err.into();
        assert!(matches!(err, PrivGuardError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PrivGuardError = toml_err.into();
        assert!(matches!(err, PrivGuardError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = PrivGuardError::Validation("bad input".to_string());
        let _: &dyn std::error::Error = &err;
        let err = CryptoError::InvalidKey("short".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
