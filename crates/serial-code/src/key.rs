//! The shared secret that checksums are keyed with.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CodeError, Result};

/// Key every generator and verifier ships with. Changing it invalidates all
/// codes issued under it.
const BUILTIN_KEY: &str = "CGSRT179SQUY1ZV4Q7LTQHY3K8M6N3PTQUXQGPW7HTD21N5AIDY93M3193H06HI9OC6K35KPOQNVPXZIBXPY3FZEBZHOXMZC9NHEY5MH9LEIQS7QRUZJUHAB1BWR76PE";

/// Symmetric key for the checksum HMAC.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Create a key from raw bytes. Text keys are used as their UTF-8 bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CodeError::EmptyKey);
        }
        Ok(Self { bytes })
    }

    /// Get the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for SecretKey {
    fn default() -> Self {
        Self {
            bytes: BUILTIN_KEY.as_bytes().to_vec(),
        }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_key() {
        let key = SecretKey::default();
        assert_eq!(key.as_bytes().len(), 128);
        assert_eq!(key.as_bytes(), BUILTIN_KEY.as_bytes());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(SecretKey::new(Vec::<u8>::new()), Err(CodeError::EmptyKey));
        assert_eq!(SecretKey::new(""), Err(CodeError::EmptyKey));
    }

    #[test]
    fn test_debug_redacts_bytes() {
        let key = SecretKey::new("hunter2").unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("len: 7"));
    }
}
