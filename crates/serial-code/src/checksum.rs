//! Keyed checksum over a payload.
//!
//! The checksum is HMAC-SHA256 of the concatenated payload groups, truncated
//! to a 31-bit value the same way HOTP does (offset taken from the low nibble
//! of digest byte 19), then written out in base 26 over
//! [`CHECKSUM_ALPHABET`], least significant digit first.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::alphabet::CHECKSUM_ALPHABET;
use crate::error::{CodeError, Result};
use crate::key::SecretKey;

type HmacSha256 = Hmac<Sha256>;

/// Digest byte whose low nibble selects the truncation offset.
const OFFSET_BYTE: usize = 19;

/// Compute the 31-bit truncated HMAC value for a payload.
///
/// Grouping does not matter: the groups are hashed as one string.
pub fn checksum_code_value<S: AsRef<str>>(groups: &[S], key: &SecretKey) -> Result<u32> {
    if groups.iter().all(|g| g.as_ref().is_empty()) {
        return Err(CodeError::EmptyPayload);
    }

    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).map_err(|_| CodeError::EmptyKey)?;
    for group in groups {
        mac.update(group.as_ref().as_bytes());
    }
    let digest = mac.finalize().into_bytes();

    let start = usize::from(digest[OFFSET_BYTE] & 0x0F);
    let value = u32::from_be_bytes([
        digest[start],
        digest[start + 1],
        digest[start + 2],
        digest[start + 3],
    ]);
    Ok(value & 0x7FFF_FFFF)
}

/// Compute the checksum string for a payload.
///
/// Always returns exactly `checksum_length` characters. Lengths beyond what
/// 31 bits can fill in base 26 (7 digits) are padded with the zero digit
/// `'2'`, as plain repeated division yields.
pub fn compute_checksum<S: AsRef<str>>(
    groups: &[S],
    checksum_length: usize,
    key: &SecretKey,
) -> Result<String> {
    if checksum_length == 0 {
        return Err(CodeError::ZeroChecksumLength);
    }

    let mut value = checksum_code_value(groups, key)?;
    let radix = CHECKSUM_ALPHABET.len() as u32;
    let mut checksum = String::with_capacity(checksum_length);
    for _ in 0..checksum_length {
        checksum.push(char::from(CHECKSUM_ALPHABET[(value % radix) as usize]));
        value /= radix;
    }
    Ok(checksum)
}
