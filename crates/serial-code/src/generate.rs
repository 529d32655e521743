//! Serial code generation.

use rand::{CryptoRng, RngCore};

use crate::checksum::compute_checksum;
use crate::code::SerialCode;
use crate::config::CodeConfig;
use crate::error::Result;
use crate::payload::generate_payload_with;

/// Generate a new serial code.
///
/// Draws a payload with the configured layout from the operating system's
/// secure random source and appends its checksum under `config.key`.
pub fn generate_code(config: &CodeConfig) -> Result<SerialCode> {
    generate_code_with(&mut rand::rngs::OsRng, config)
}

/// Generate a serial code from the given secure random source.
pub fn generate_code_with<R>(rng: &mut R, config: &CodeConfig) -> Result<SerialCode>
where
    R: RngCore + CryptoRng + ?Sized,
{
    config.validate()?;
    let groups = generate_payload_with(rng, config.total_length, config.group_width)?;
    let checksum = compute_checksum(&groups, config.checksum_length, &config.key)?;
    Ok(SerialCode::new(groups, checksum))
}

/// Generate `count` serial codes.
///
/// Fails as a whole on the first error; no partial batch is returned.
pub fn generate_batch(config: &CodeConfig, count: usize) -> Result<Vec<SerialCode>> {
    config.validate()?;
    let mut rng = rand::rngs::OsRng;
    let codes = (0..count)
        .map(|_| generate_code_with(&mut rng, config))
        .collect::<Result<Vec<_>>>()?;
    log::info!("Generated {} serial codes", codes.len());
    Ok(codes)
}
