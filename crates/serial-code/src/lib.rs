//! Offline serial code generation and verification.
//!
//! This crate provides functionality for:
//! - Generating human-typable serial codes from a secure random source
//! - Parsing codes back into payload groups and checksum
//! - Verifying codes by recomputing their keyed checksum, with no lookup
//!
//! # Code Format
//!
//! Codes follow the format: `GGGG-GGGG-GGGG-GGGG-CCCC`
//!
//! Each `G` is drawn from `A-Z0-9`. The `C` block is a checksum over the
//! payload, written with the 26 symbols `23456789BCDFGHJKMNPQRTVWXY` so that
//! `0/O`, `1/I/L`, `5/S` and `U/V` cannot be confused when typed.
//!
//! # Checksum
//!
//! - HMAC-SHA256 of the payload (groups joined without delimiters)
//! - Dynamic truncation to 31 bits, offset from digest byte 19
//! - Base-26 digits, least significant first
//!
//! # Example
//!
//! ```rust
//! use serial_code::{CodeConfig, generate_code, verify_code};
//!
//! let config = CodeConfig::default();
//! let code = generate_code(&config).unwrap();
//!
//! let text = code.to_string();
//! assert_eq!(text.len(), 24);
//!
//! assert!(verify_code(&text, &config.key).unwrap());
//! ```

mod alphabet;
mod checksum;
mod code;
mod config;
mod error;
mod generate;
mod key;
mod payload;
mod verify;

// Public re-exports
pub use alphabet::{
    CHECKSUM_ALPHABET, DEFAULT_CHECKSUM_LENGTH, DEFAULT_GROUP_WIDTH, DEFAULT_TOTAL_LENGTH,
    DELIMITER, PAYLOAD_ALPHABET, is_checksum_char, is_payload_char,
};
pub use checksum::{checksum_code_value, compute_checksum};
pub use code::{SerialCode, format_code, parse_code};
pub use config::CodeConfig;
pub use error::{CodeError, Result};
pub use generate::{generate_batch, generate_code, generate_code_with};
pub use key::SecretKey;
pub use payload::{generate_payload, generate_payload_with};
pub use verify::{verify_code, verify_code_strict, verify_parsed};
