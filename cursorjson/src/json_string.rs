// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::escape_processor::EscapeProcessor;
use crate::parse_error::ParseError;
use crate::shared::ValueType;

/// Bytes that may appear unescaped inside a string, other than `"` and `\`
/// which terminate or start an escape. Everything below 0x20, 0x7F and every
/// byte with the high bit set is rejected.
const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E)
}

/// Write side of the string decoder.
///
/// Counts decoded bytes and, when a destination is present, stores them. The
/// last slot of the destination is always kept free for the trailing zero.
/// The final count includes that zero.
struct StringSink<'b> {
    dest: Option<&'b mut [u8]>,
    len: usize,
}

impl<'b> StringSink<'b> {
    fn new(dest: Option<&'b mut [u8]>) -> Self {
        Self { dest, len: 0 }
    }

    /// Fails once the destination has no slot left for another byte plus the terminator.
    fn ensure_capacity(&self) -> Result<(), ParseError> {
        match &self.dest {
            Some(dest) if self.len >= dest.len() => Err(ParseError::StringTooLong),
            _ => Ok(()),
        }
    }

    fn push(&mut self, byte: u8) {
        if let Some(slot) = self.dest.as_deref_mut().and_then(|d| d.get_mut(self.len)) {
            *slot = byte;
        }
        self.len = self.len.saturating_add(1);
    }

    /// Writes the trailing zero and returns the byte count including it.
    fn finish(mut self) -> usize {
        self.push(0);
        self.len
    }
}

/// The decoded part of a destination that received `count` bytes, trailing zero included.
fn content(dest: &[u8], count: usize) -> &[u8] {
    dest.get(..count.saturating_sub(1)).unwrap_or(&[])
}

impl<'a> Cursor<'a> {
    /// Decodes a string value, moving the cursor past its closing quote.
    ///
    /// With a destination, the decoded bytes are written to it followed by a
    /// zero byte; decoded content is therefore limited to `dest.len() - 1`
    /// bytes. Without one the string is only validated. Either way the
    /// returned count is the number of bytes the destination receives,
    /// trailing zero included, so it is never less than 1.
    ///
    /// # Example
    /// ```
    /// use cursorjson::Cursor;
    /// let mut buffer = [0u8; 16];
    /// let mut cursor = Cursor::new(r#" "tab\there""#);
    /// let count = cursor.parse_string(Some(&mut buffer))?;
    /// assert_eq!(count, 9);
    /// assert_eq!(&buffer[..count], b"tab\there\0");
    /// # Ok::<(), cursorjson::ParseError>(())
    /// ```
    pub fn parse_string(&mut self, dest: Option<&mut [u8]>) -> Result<usize, ParseError> {
        self.expect_type(ValueType::String)?;
        self.advance(1);

        let mut sink = StringSink::new(dest);
        loop {
            sink.ensure_capacity()?;
            let byte = self.current();
            if byte == 0 {
                return Err(ParseError::MissingStringEnd);
            }
            if !is_printable(byte) {
                return Err(ParseError::InvalidStringCharacter);
            }
            match byte {
                b'\\' => {
                    let decoded = self.parse_escape()?;
                    sink.push(decoded);
                }
                b'"' => {
                    self.advance(1);
                    return Ok(sink.finish());
                }
                _ => {
                    sink.push(byte);
                    self.advance(1);
                }
            }
        }
    }

    /// Decodes a string value into `dest` and returns the decoded bytes,
    /// without the trailing zero.
    pub fn parse_string_bytes<'b>(&mut self, dest: &'b mut [u8]) -> Result<&'b [u8], ParseError> {
        let count = self.parse_string(Some(&mut *dest))?;
        Ok(content(dest, count))
    }

    /// Decodes an object key and the `:` that follows it.
    ///
    /// Returns the same count as [`parse_string`](Self::parse_string). Fails
    /// with [`ParseError::MissingKey`] when the next value is not a string;
    /// errors from decoding the key itself are passed through.
    pub fn parse_key(&mut self, dest: Option<&mut [u8]>) -> Result<usize, ParseError> {
        if self.expect_type(ValueType::String).is_err() {
            return Err(ParseError::MissingKey);
        }
        let count = self.parse_string(dest)?;
        if !self.eat(b':') {
            return Err(ParseError::MissingColon);
        }
        Ok(count)
    }

    /// Decodes an object key and its `:` into `dest` and returns the key
    /// bytes, without the trailing zero.
    pub fn parse_key_bytes<'b>(&mut self, dest: &'b mut [u8]) -> Result<&'b [u8], ParseError> {
        let count = self.parse_key(Some(&mut *dest))?;
        Ok(content(dest, count))
    }

    /// Decodes the escape sequence under the cursor and moves past it.
    fn parse_escape(&mut self) -> Result<u8, ParseError> {
        let escape_char = self.byte_at(1);
        if escape_char == b'u' {
            let hex = [self.byte_at(2), self.byte_at(3), self.byte_at(4), self.byte_at(5)];
            let decoded = EscapeProcessor::process_hex_escape(hex)?;
            self.advance(EscapeProcessor::HEX_ESCAPE_LEN);
            return Ok(decoded);
        }
        let decoded = EscapeProcessor::process_simple_escape(escape_char)?;
        self.advance(EscapeProcessor::SIMPLE_ESCAPE_LEN);
        Ok(decoded)
    }
}
