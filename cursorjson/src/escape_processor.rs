// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Pure functions for decoding the escape sequences found inside strings.
///
/// The decoder is byte oriented: every escape, including `\uXXXX`, produces
/// exactly one output byte.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Number of input bytes a `\uXXXX` sequence occupies.
    pub const HEX_ESCAPE_LEN: usize = 6;
    /// Number of input bytes any other escape sequence occupies.
    pub const SIMPLE_ESCAPE_LEN: usize = 2;

    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or an error if the escape sequence is invalid.
    /// `u` is not a simple escape; see [`process_hex_escape`](Self::process_hex_escape).
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'"' => Ok(b'"'),
            b'\\' => Ok(b'\\'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            b'n' => Ok(b'\n'),
            b'r' => Ok(b'\r'),
            b't' => Ok(b'\t'),
            _ => Err(ParseError::InvalidStringEscapeSequence),
        }
    }

    /// Validate that a byte represents a hexadecimal digit.
    pub fn validate_hex_digit(byte: u8) -> Result<u8, ParseError> {
        if byte.is_ascii_hexdigit() {
            Ok(byte)
        } else {
            Err(ParseError::InvalidStringHexEscapeSequence)
        }
    }

    /// Decode the four hex digits following `\u`, keeping only the low byte.
    ///
    /// The high byte of the 16-bit value is dropped: `0041` and `1141` both
    /// decode to `A`.
    pub fn process_hex_escape(hex: [u8; 4]) -> Result<u8, ParseError> {
        for &byte in &hex {
            Self::validate_hex_digit(byte)?;
        }
        let digits = core::str::from_utf8(&hex)
            .map_err(|_| ParseError::UnableToParseStringHexEscapeSequence)?;
        let value = u16::from_str_radix(digits, 16)
            .map_err(|_| ParseError::UnableToParseStringHexEscapeSequence)?;
        Ok((value & 0x00FF) as u8)
    }
}
