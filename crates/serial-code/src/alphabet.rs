//! Character sets, delimiter and default layout.

/// Symbols a payload character is drawn from.
pub const PAYLOAD_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Checksum digits, least significant first. The index of a symbol is its
/// base-26 digit value, so this order is part of the code format.
pub const CHECKSUM_ALPHABET: &[u8; 26] = b"23456789BCDFGHJKMNPQRTVWXY";

/// Separator between groups and before the checksum.
pub const DELIMITER: char = '-';

/// Payload characters per code.
pub const DEFAULT_TOTAL_LENGTH: usize = 16;

/// Payload characters per group.
pub const DEFAULT_GROUP_WIDTH: usize = 4;

/// Checksum characters per code.
pub const DEFAULT_CHECKSUM_LENGTH: usize = 4;

/// Whether `ch` may appear in a payload group.
pub fn is_payload_char(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit()
}

/// Whether `ch` may appear in the checksum segment.
pub fn is_checksum_char(ch: char) -> bool {
    ch.is_ascii() && CHECKSUM_ALPHABET.contains(&(ch as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_alphabet() {
        assert_eq!(PAYLOAD_ALPHABET.len(), 36);
        assert!(PAYLOAD_ALPHABET.iter().all(|&b| is_payload_char(b as char)));
        assert!(!is_payload_char('a'));
        assert!(!is_payload_char('-'));
        assert!(!is_payload_char('É'));
    }

    #[test]
    fn test_checksum_alphabet_excludes_ambiguous_glyphs() {
        for ch in ['0', '1', 'I', 'L', 'O', 'S', 'U'] {
            assert!(!is_checksum_char(ch), "{ch} must not be a checksum symbol");
        }
        let mut sorted = CHECKSUM_ALPHABET.to_vec();
        sorted.dedup();
        assert_eq!(sorted.len(), 26);
    }
}
