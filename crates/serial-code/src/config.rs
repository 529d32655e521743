//! Configuration for serial code generation and verification.

use crate::alphabet::{DEFAULT_CHECKSUM_LENGTH, DEFAULT_GROUP_WIDTH, DEFAULT_TOTAL_LENGTH};
use crate::error::{CodeError, Result};
use crate::key::SecretKey;

/// Layout and key used to generate and verify codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeConfig {
    /// Number of random payload characters.
    pub total_length: usize,
    /// Payload characters per dash-separated group. The last group holds the
    /// remainder when `total_length` is not a multiple of this.
    pub group_width: usize,
    /// Number of checksum characters appended after the payload.
    pub checksum_length: usize,
    /// Key the checksum is computed with.
    pub key: SecretKey,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self::new(SecretKey::default())
    }
}

impl CodeConfig {
    /// Create a config with the default layout and the given key.
    pub fn new(key: SecretKey) -> Self {
        Self {
            total_length: DEFAULT_TOTAL_LENGTH,
            group_width: DEFAULT_GROUP_WIDTH,
            checksum_length: DEFAULT_CHECKSUM_LENGTH,
            key,
        }
    }

    /// Set the payload length and group width.
    pub fn with_layout(mut self, total_length: usize, group_width: usize) -> Self {
        self.total_length = total_length;
        self.group_width = group_width;
        self
    }

    /// Set the checksum length.
    pub fn with_checksum_length(mut self, checksum_length: usize) -> Self {
        self.checksum_length = checksum_length;
        self
    }

    /// Reject lengths that cannot produce a code.
    pub fn validate(&self) -> Result<()> {
        if self.total_length == 0 {
            return Err(CodeError::InvalidLayout(
                "total length must be positive".to_string(),
            ));
        }
        if self.group_width == 0 {
            return Err(CodeError::InvalidLayout(
                "group width must be positive".to_string(),
            ));
        }
        if self.checksum_length == 0 {
            return Err(CodeError::ZeroChecksumLength);
        }
        Ok(())
    }

    /// Number of payload groups a generated code has.
    pub fn group_count(&self) -> usize {
        self.total_length.div_ceil(self.group_width.max(1))
    }

    /// Widths of the payload groups, in order.
    pub fn group_widths(&self) -> Vec<usize> {
        let width = self.group_width.max(1);
        (0..self.group_count())
            .map(|i| width.min(self.total_length - i * width))
            .collect()
    }

    /// Length of a formatted code, delimiters included.
    pub fn code_length(&self) -> usize {
        self.total_length + self.checksum_length + self.group_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodeConfig::default();
        assert_eq!(config.total_length, 16);
        assert_eq!(config.group_width, 4);
        assert_eq!(config.checksum_length, 4);
        assert_eq!(config.key, SecretKey::default());
        assert_eq!(config.group_count(), 4);
        assert_eq!(config.code_length(), "XXXX-XXXX-XXXX-XXXX-XXXX".len());
    }

    #[test]
    fn test_builder_pattern() {
        let key = SecretKey::new("other").unwrap();
        let config = CodeConfig::new(key.clone())
            .with_layout(17, 4)
            .with_checksum_length(6);
        assert_eq!(config.total_length, 17);
        assert_eq!(config.group_width, 4);
        assert_eq!(config.checksum_length, 6);
        assert_eq!(config.key, key);
        assert_eq!(config.group_widths(), vec![4, 4, 4, 4, 1]);
    }

    #[test]
    fn test_validate() {
        assert!(CodeConfig::default().validate().is_ok());
        assert!(matches!(
            CodeConfig::default().with_layout(0, 4).validate(),
            Err(CodeError::InvalidLayout(_))
        ));
        assert!(matches!(
            CodeConfig::default().with_layout(16, 0).validate(),
            Err(CodeError::InvalidLayout(_))
        ));
        assert_eq!(
            CodeConfig::default().with_checksum_length(0).validate(),
            Err(CodeError::ZeroChecksumLength)
        );
    }

    #[test]
    fn test_wide_group() {
        let config = CodeConfig::default().with_layout(3, 8);
        assert_eq!(config.group_widths(), vec![3]);
    }
}
