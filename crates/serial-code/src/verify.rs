//! Serial code verification with constant-time comparison.

use subtle::ConstantTimeEq;

use crate::checksum::compute_checksum;
use crate::code::{SerialCode, parse_code};
use crate::config::CodeConfig;
use crate::error::{CodeError, Result};
use crate::key::SecretKey;

/// Verify a serial code string.
///
/// This function:
/// 1. Parses the code into payload groups and checksum
/// 2. Recomputes the checksum over the payload, with the length of the
///    checksum found in the code
/// 3. Compares both checksums exactly, in constant time
///
/// # Returns
/// * `Ok(true)` if the checksum matches
/// * `Ok(false)` if the code is well formed but the checksum does not match
/// * `Err` if the code can't be parsed
pub fn verify_code(code: &str, key: &SecretKey) -> Result<bool> {
    let parsed = parse_code(code).inspect_err(|e| log::debug!("Rejected serial code: {e}"))?;
    verify_parsed(&parsed, key)
}

/// Verify a pre-parsed serial code.
pub fn verify_parsed(parsed: &SerialCode, key: &SecretKey) -> Result<bool> {
    let expected = compute_checksum(&parsed.groups, parsed.checksum.len(), key)?;
    let valid = checksums_equal(expected.as_bytes(), parsed.checksum.as_bytes());
    log::debug!("Serial code checksum valid: {valid}");
    Ok(valid)
}

/// Verify a code that must also have exactly the configured layout.
///
/// Codes with a different group structure or checksum length are rejected
/// with [`CodeError::LayoutMismatch`] before any checksum is computed.
pub fn verify_code_strict(code: &str, config: &CodeConfig) -> Result<bool> {
    let parsed = parse_code(code)?;

    let mut expected = config.group_widths();
    expected.push(config.checksum_length);
    let mut got = parsed.group_widths();
    got.push(parsed.checksum.len());
    if expected != got {
        return Err(CodeError::LayoutMismatch { expected, got });
    }

    verify_parsed(&parsed, &config.key)
}

/// Constant-time comparison of two checksums.
fn checksums_equal(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
