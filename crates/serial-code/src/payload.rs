//! Random payload generation.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::alphabet::PAYLOAD_ALPHABET;
use crate::error::{CodeError, Result};

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or
/// above it are discarded so every symbol is equally likely.
const ACCEPT_BELOW: u8 = (256 / PAYLOAD_ALPHABET.len() * PAYLOAD_ALPHABET.len()) as u8;

/// Draw a payload from the operating system's secure random source.
///
/// See [`generate_payload_with`].
pub fn generate_payload(total_length: usize, group_width: usize) -> Result<Vec<String>> {
    generate_payload_with(&mut rand::rngs::OsRng, total_length, group_width)
}

/// Draw `total_length` characters uniformly from [`PAYLOAD_ALPHABET`] and pack
/// them into groups of `group_width` in draw order.
///
/// The last group is shorter when `total_length` is not a multiple of
/// `group_width`; it is never padded. A failing random source is reported as
/// [`CodeError::Entropy`] and nothing is returned.
pub fn generate_payload_with<R>(
    rng: &mut R,
    total_length: usize,
    group_width: usize,
) -> Result<Vec<String>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if total_length == 0 {
        return Err(CodeError::InvalidLayout(
            "total length must be positive".to_string(),
        ));
    }
    if group_width == 0 {
        return Err(CodeError::InvalidLayout(
            "group width must be positive".to_string(),
        ));
    }

    let mut chars = Vec::with_capacity(total_length);
    let mut buf = [0u8; 32];
    while chars.len() < total_length {
        if let Err(e) = rng.try_fill_bytes(&mut buf) {
            buf.zeroize();
            return Err(CodeError::Entropy(e.to_string()));
        }
        let accepted = buf.iter().filter(|&&b| b < ACCEPT_BELOW);
        for &b in accepted.take(total_length - chars.len()) {
            chars.push(char::from(PAYLOAD_ALPHABET[usize::from(b) % PAYLOAD_ALPHABET.len()]));
        }
    }
    buf.zeroize();

    Ok(chars
        .chunks(group_width)
        .map(|group| group.iter().collect())
        .collect())
}
