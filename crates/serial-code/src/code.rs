//! Canonical text form of a serial code: `GGGG-GGGG-GGGG-GGGG-CCCC`.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{DELIMITER, is_checksum_char, is_payload_char};
use crate::error::{CodeError, Result};

/// A serial code split into its payload groups and checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialCode {
    /// Payload groups in order.
    pub groups: Vec<String>,
    /// Trailing checksum segment.
    pub checksum: String,
}

impl SerialCode {
    /// Build a code from parts without validating them.
    pub fn new(groups: Vec<String>, checksum: String) -> Self {
        Self { groups, checksum }
    }

    /// The payload as it was checksummed: groups joined without delimiters.
    pub fn payload(&self) -> String {
        self.groups.concat()
    }

    /// Widths of the payload groups.
    pub fn group_widths(&self) -> Vec<usize> {
        self.groups.iter().map(String::len).collect()
    }

    /// The canonical delimited string.
    pub fn as_string(&self) -> String {
        format_code(&self.groups, &self.checksum)
    }
}

impl fmt::Display for SerialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            write!(f, "{group}{DELIMITER}")?;
        }
        f.write_str(&self.checksum)
    }
}

impl FromStr for SerialCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_code(s)
    }
}

/// Join payload groups and the checksum with `-`.
pub fn format_code<S: AsRef<str>>(groups: &[S], checksum: &str) -> String {
    let mut code = String::new();
    for group in groups {
        code.push_str(group.as_ref());
        code.push(DELIMITER);
    }
    code.push_str(checksum);
    code
}

/// Split a code string into payload groups and checksum.
///
/// The last segment is the checksum, every segment before it a payload group.
/// Input is taken as-is: no trimming, no case folding. Character positions in
/// errors are zero-based offsets into `code`.
pub fn parse_code(code: &str) -> Result<SerialCode> {
    if code.is_empty() {
        return Err(CodeError::Empty);
    }

    let segments: Vec<&str> = code.split(DELIMITER).collect();
    if segments.len() < 2 {
        return Err(CodeError::SegmentCount {
            found: segments.len(),
        });
    }

    let last = segments.len() - 1;
    let mut position = 0;
    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            return Err(CodeError::EmptySegment { index });
        }
        for ch in segment.chars() {
            if index == last && !is_checksum_char(ch) {
                return Err(CodeError::InvalidChecksumChar {
                    ch,
                    index: position,
                });
            }
            if index < last && !is_payload_char(ch) {
                return Err(CodeError::InvalidPayloadChar {
                    ch,
                    index: position,
                });
            }
            position += 1;
        }
        // delimiter
        position += 1;
    }

    let checksum = segments[last].to_string();
    let groups = segments[..last].iter().map(|s| s.to_string()).collect();
    Ok(SerialCode { groups, checksum })
}
