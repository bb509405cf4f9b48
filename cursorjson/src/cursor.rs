// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;
use crate::shared::{is_whitespace, ValueType};

/// A forward-only position over a JSON document held in memory.
///
/// The cursor is owned by the caller, who drives the parse by calling the
/// primitives below in the order the expected document shape dictates. Every
/// successful call moves the cursor past what it consumed.
///
/// The end of the slice behaves like a NUL terminator: [`current`](Self::current)
/// returns `0` there, and an embedded `0x00` byte ends the document just the same.
///
/// # Example
/// ```
/// use cursorjson::Cursor;
/// let mut cursor = Cursor::new(r#"{"enabled": true}"#);
/// cursor.object_start()?;
/// cursor.parse_key(None)?;
/// assert!(cursor.parse_bool()?);
/// cursor.object_end()?;
/// assert!(cursor.is_at_end());
/// # Ok::<(), cursorjson::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of a string slice.
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a cursor at the start of a byte slice.
    pub fn new_from_slice(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Byte offset of the cursor from the start of the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed part of the input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// The byte under the cursor, or `0` at the end of the input.
    pub fn current(&self) -> u8 {
        self.byte_at(0)
    }

    /// True when the cursor sits on the terminator.
    pub fn is_at_end(&self) -> bool {
        self.current() == 0
    }

    /// The byte `offset` positions ahead of the cursor, or `0` past the end.
    pub(crate) fn byte_at(&self, offset: usize) -> u8 {
        self.pos
            .checked_add(offset)
            .and_then(|i| self.data.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Input bytes from `start` up to the cursor.
    pub(crate) fn consumed_since(&self, start: usize) -> &'a [u8] {
        self.data.get(start..self.pos).unwrap_or(&[])
    }

    pub(crate) fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Moves the cursor over any run of space, tab, line feed and carriage return.
    pub fn skip_whitespace(&mut self) {
        while is_whitespace(self.current()) {
            self.advance(1);
        }
    }

    /// Classifies the next value without consuming it.
    ///
    /// Leading whitespace is skipped; the cursor is left on the first byte of
    /// the value, so calling this twice yields the same answer.
    pub fn peek_type(&mut self) -> Result<ValueType, ParseError> {
        self.skip_whitespace();
        ValueType::from_start_byte(self.current()).ok_or(ParseError::InvalidSyntax)
    }

    /// Checks that the next value is of the `expected` kind, without consuming it.
    pub(crate) fn expect_type(&mut self, expected: ValueType) -> Result<(), ParseError> {
        if self.peek_type()? != expected {
            return Err(ParseError::UnexpectedType);
        }
        Ok(())
    }

    /// Consumes `byte` if it follows after optional whitespace.
    /// On mismatch only the whitespace has been consumed.
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        self.skip_whitespace();
        if self.current() == byte {
            self.advance(1);
            true
        } else {
            false
        }
    }

    /// Consumes `{` and any whitespace after it.
    pub fn object_start(&mut self) -> Result<(), ParseError> {
        self.expect_type(ValueType::Object)?;
        self.advance(1);
        self.skip_whitespace();
        Ok(())
    }

    /// Consumes `}`.
    pub fn object_end(&mut self) -> Result<(), ParseError> {
        if !self.eat(b'}') {
            return Err(ParseError::MissingObjectEnd);
        }
        Ok(())
    }

    /// Consumes `[` and any whitespace after it.
    pub fn array_start(&mut self) -> Result<(), ParseError> {
        self.expect_type(ValueType::Array)?;
        self.advance(1);
        self.skip_whitespace();
        Ok(())
    }

    /// Consumes `]`.
    pub fn array_end(&mut self) -> Result<(), ParseError> {
        if !self.eat(b']') {
            return Err(ParseError::MissingArrayEnd);
        }
        Ok(())
    }

    /// Consumes `,`.
    pub fn comma(&mut self) -> Result<(), ParseError> {
        if !self.eat(b',') {
            return Err(ParseError::MissingComma);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_behavior() {
        let data = b"ab";
        let mut cursor = Cursor::new_from_slice(data);
        assert_eq!(cursor.current(), b'a');
        cursor.advance(1);
        assert_eq!(cursor.current(), b'b');
        assert_eq!(cursor.byte_at(1), 0);
        cursor.advance(1);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), data.len());

        // Never moves past the end of the slice
        cursor.advance(10);
        assert_eq!(cursor.position(), data.len());
        assert_eq!(cursor.remaining(), b"");
    }

    #[test]
    fn test_embedded_nul_terminates() {
        let cursor = Cursor::new_from_slice(b"\0true");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), b"\0true");
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(" \n\r\t \n\r\tx");
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 8);
        assert_eq!(cursor.current(), b'x');

        let mut cursor = Cursor::new("   ");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());

        // Vertical tab and form feed are not whitespace
        let mut cursor = Cursor::new("\x0B");
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_peek_type_is_pure() {
        let mut cursor = Cursor::new("  [1]");
        assert_eq!(cursor.peek_type(), Ok(ValueType::Array));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek_type(), Ok(ValueType::Array));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_peek_type_error() {
        assert_eq!(Cursor::new("").peek_type(), Err(ParseError::InvalidSyntax));
        assert_eq!(Cursor::new(" \t").peek_type(), Err(ParseError::InvalidSyntax));
        assert_eq!(Cursor::new(".5").peek_type(), Err(ParseError::InvalidSyntax));
        assert_eq!(Cursor::new("}").peek_type(), Err(ParseError::InvalidSyntax));
    }

    #[test]
    fn test_structural_helpers() {
        let mut cursor = Cursor::new(" { } [ ] ,");
        assert_eq!(cursor.object_start(), Ok(()));
        assert_eq!(cursor.current(), b'}');
        assert_eq!(cursor.object_end(), Ok(()));
        assert_eq!(cursor.array_start(), Ok(()));
        assert_eq!(cursor.array_end(), Ok(()));
        assert_eq!(cursor.comma(), Ok(()));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_structural_helper_errors() {
        assert_eq!(Cursor::new("[").object_start(), Err(ParseError::UnexpectedType));
        assert_eq!(Cursor::new("").object_start(), Err(ParseError::InvalidSyntax));
        assert_eq!(Cursor::new("]").object_end(), Err(ParseError::MissingObjectEnd));
        assert_eq!(Cursor::new("{").array_start(), Err(ParseError::UnexpectedType));
        assert_eq!(Cursor::new("}").array_end(), Err(ParseError::MissingArrayEnd));
        assert_eq!(Cursor::new(":").comma(), Err(ParseError::MissingComma));
        assert_eq!(Cursor::new("").comma(), Err(ParseError::MissingComma));
    }

    #[test]
    fn test_eat_only_consumes_whitespace_on_mismatch() {
        let mut cursor = Cursor::new("  x");
        assert!(!cursor.eat(b','));
        assert_eq!(cursor.position(), 2);
        assert!(!cursor.eat(b','));
        assert_eq!(cursor.position(), 2);
    }
}
