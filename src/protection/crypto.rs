//! Authenticated encryption boundary
//!
//! Delegates to AES-256-GCM; this module only defines the call contract
//! and the versioned token envelope, never cipher internals. Tokens have
//! the shape `pg1.<base64 nonce>.<base64 ciphertext>`; any deviation is an
//! [`CryptoError::InvalidToken`], while a wrong key or tampered ciphertext
//! surfaces as [`CryptoError::DecryptionFailed`].
//!
//! Key material lives behind [`secrecy::Secret`] so it never appears in
//! Debug output, and is read once per encrypt/decrypt call rather than
//! cached.

use crate::domain::errors::CryptoError;
use crate::domain::result::Result;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use secrecy::{ExposeSecret, Secret};
use std::path::Path;

/// Token envelope version prefix
const TOKEN_VERSION: &str = "pg1";

/// Nonce size for AES-256-GCM (96 bits)
const NONCE_LEN: usize = 12;

/// A 256-bit symmetric encryption key
///
/// Wrapped in [`Secret`] so accidental logging or Debug formatting cannot
/// expose the raw bytes.
#[derive(Debug)]
pub struct EncryptionKey(Secret<[u8; 32]>);

impl EncryptionKey {
    /// Generate a fresh random key
    pub fn generate() -> Self {
        let key = Aes256Gcm::generate_key(OsRng);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&key);
        Self(Secret::new(bytes))
    }

    /// Wrap existing key bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(Secret::new(bytes))
    }

    /// Parse a base64-encoded key, validating its size
    pub fn from_base64(encoded: &str) -> std::result::Result<Self, CryptoError> {
        let decoded = BASE64
            .decode(encoded.trim())
            .map_err(|e| CryptoError::InvalidKey(format!("not valid base64: {e}")))?;
        let bytes: [u8; 32] = decoded
            .try_into()
            .map_err(|_| CryptoError::InvalidKey("key must be exactly 32 bytes".to_string()))?;
        Ok(Self(Secret::new(bytes)))
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(self.0.expose_secret()))
    }
}

/// Encrypt plain text into a versioned opaque token
pub fn encrypt_text(text: &str, key: &EncryptionKey) -> std::result::Result<String, CryptoError> {
    let cipher = key.cipher();
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, text.as_bytes())
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    Ok(format!(
        "{TOKEN_VERSION}.{}.{}",
        BASE64.encode(nonce),
        BASE64.encode(ciphertext)
    ))
}

/// Decrypt a token produced by [`encrypt_text`]
///
/// Fails with [`CryptoError::InvalidToken`] when the envelope does not
/// parse and [`CryptoError::DecryptionFailed`] when authentication fails.
pub fn decrypt_text(token: &str, key: &EncryptionKey) -> std::result::Result<String, CryptoError> {
    let (nonce_bytes, ciphertext) = parse_token(token)?;

    let cipher = key.cipher();
    let nonce = Nonce::from_slice(&nonce_bytes);
    let plaintext = cipher
        .decrypt(nonce, ciphertext.as_ref())
        .map_err(|_| CryptoError::DecryptionFailed)?;

    String::from_utf8(plaintext)
        .map_err(|_| CryptoError::InvalidToken("payload is not valid UTF-8".to_string()))
}

/// Shallow token shape check without touching key material
pub fn validate_token_shape(token: &str) -> bool {
    parse_token(token).is_ok()
}

fn parse_token(token: &str) -> std::result::Result<(Vec<u8>, Vec<u8>), CryptoError> {
    let mut parts = token.trim().splitn(3, '.');
    let (version, nonce_part, ct_part) = match (parts.next(), parts.next(), parts.next()) {
        (Some(v), Some(n), Some(c)) => (v, n, c),
        _ => {
            return Err(CryptoError::InvalidToken(
                "expected <version>.<nonce>.<ciphertext>".to_string(),
            ))
        }
    };

    if version != TOKEN_VERSION {
        return Err(CryptoError::InvalidToken(format!(
            "unsupported token version '{version}'"
        )));
    }

    let nonce_bytes = BASE64
        .decode(nonce_part)
        .map_err(|e| CryptoError::InvalidToken(format!("invalid nonce encoding: {e}")))?;
    if nonce_bytes.len() != NONCE_LEN {
        return Err(CryptoError::InvalidToken(format!(
            "nonce must be {NONCE_LEN} bytes, got {}",
            nonce_bytes.len()
        )));
    }

    let ciphertext = BASE64
        .decode(ct_part)
        .map_err(|e| CryptoError::InvalidToken(format!("invalid ciphertext encoding: {e}")))?;

    Ok((nonce_bytes, ciphertext))
}

/// Persist a key as base64 with owner-only permissions where supported
pub fn save_key_file(key: &EncryptionKey, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, BASE64.encode(key.0.expose_secret()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions)?;
    }

    Ok(())
}

/// Load a key previously written by [`save_key_file`]
pub fn load_key_file(path: &Path) -> Result<EncryptionKey> {
    let encoded = std::fs::read_to_string(path)?;
    Ok(EncryptionKey::from_base64(&encoded)?)
}
