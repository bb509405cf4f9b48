// SPDX-License-Identifier: Apache-2.0

use core::ops::Deref;
use core::str::FromStr;

use crate::cursor::Cursor;
use crate::parse_error::ParseError;
use crate::shared::ValueType;

/// Size of the scratch region a literal must fit in, with its terminator,
/// to be converted by [`Cursor::parse_number`]. Literals of this length or
/// longer fail with [`ParseError::NumberTooLong`].
pub const NUMBER_SCRATCH_LEN: usize = 32;

/// A number literal borrowed from the input, exactly as spelled there.
///
/// The literal has already been checked against the number grammar; no
/// conversion happens until one is asked for.
///
/// # Example
/// ```
/// use cursorjson::Cursor;
/// let mut cursor = Cursor::new("[-12.5e3, 7]");
/// cursor.array_start()?;
/// let number = cursor.parse_number_literal()?;
/// assert_eq!(number.as_str(), "-12.5e3");
/// assert!(number.is_float());
/// # Ok::<(), cursorjson::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonNumber<'a> {
    raw: &'a str,
}

impl<'a> JsonNumber<'a> {
    /// The exact literal text.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Parse the number as a custom type using the exact string representation.
    pub fn parse<T: FromStr>(&self) -> Result<T, T::Err> {
        T::from_str(self.raw)
    }

    /// Check if this number represents an integer (no decimal point or exponent).
    pub fn is_integer(&self) -> bool {
        !self.raw.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }

    /// Returns true if this number has a decimal point or exponent.
    pub fn is_float(&self) -> bool {
        !self.is_integer()
    }

    /// Converts the literal to `f32`.
    ///
    /// Literals that would not fit the conversion scratch region, and values
    /// that overflow to infinity, are rejected.
    #[cfg(feature = "float")]
    pub fn as_f32(&self) -> Result<f32, ParseError> {
        if self.raw.len() >= NUMBER_SCRATCH_LEN {
            return Err(ParseError::NumberTooLong);
        }
        match f32::from_str(self.raw) {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::UnableToParseNumber),
        }
    }
}

impl AsRef<str> for JsonNumber<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Deref for JsonNumber<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl core::fmt::Display for JsonNumber<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.raw)
    }
}

impl<'a> Cursor<'a> {
    /// Moves over a run of ASCII digits.
    fn skip_digits(&mut self) {
        while self.current().is_ascii_digit() {
            self.advance(1);
        }
    }

    /// Fails unless the cursor is on an ASCII digit.
    fn expect_digit(&self) -> Result<(), ParseError> {
        if !self.current().is_ascii_digit() {
            return Err(ParseError::InvalidNumberFormat);
        }
        Ok(())
    }

    /// Moves over one number literal, checking it against the grammar
    /// `-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?` where a leading `0` may not be
    /// followed by another `0`.
    fn scan_number_literal(&mut self) -> Result<JsonNumber<'a>, ParseError> {
        self.expect_type(ValueType::Number)?;
        let start = self.position();

        if self.current() == b'-' {
            self.advance(1);
            self.expect_digit()?;
        }
        if self.current() == b'0' {
            self.advance(1);
            if self.current() == b'0' {
                return Err(ParseError::InvalidNumberFormat);
            }
        }
        self.skip_digits();

        if self.current() == b'.' {
            self.advance(1);
            self.expect_digit()?;
            self.skip_digits();
        }

        if matches!(self.current(), b'e' | b'E') {
            self.advance(1);
            if matches!(self.current(), b'+' | b'-') {
                self.advance(1);
            }
            self.expect_digit()?;
            self.skip_digits();
        }

        let raw = core::str::from_utf8(self.consumed_since(start))
            .map_err(|_| ParseError::UnableToParseNumber)?;
        Ok(JsonNumber { raw })
    }

    /// Runs `op` against a copy of the cursor and commits the copy only on success,
    /// so a failed number operation leaves the cursor where it was.
    fn with_number<T>(
        &mut self,
        op: impl FnOnce(&mut Cursor<'a>) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let mut scan = self.clone();
        let value = op(&mut scan)?;
        *self = scan;
        Ok(value)
    }

    /// Validates a number and returns its literal text without converting it.
    ///
    /// On failure the cursor is unchanged.
    pub fn parse_number_literal(&mut self) -> Result<JsonNumber<'a>, ParseError> {
        self.with_number(|scan| scan.scan_number_literal())
    }

    /// Validates a number and moves past it. No length limit applies.
    ///
    /// On failure the cursor is unchanged.
    pub fn skip_number(&mut self) -> Result<(), ParseError> {
        self.with_number(|scan| scan.scan_number_literal().map(|_| ()))
    }

    /// Validates a number and converts it to `f32`.
    ///
    /// Literals of [`NUMBER_SCRATCH_LEN`] bytes or more fail with
    /// [`ParseError::NumberTooLong`]. On failure the cursor is unchanged.
    ///
    /// # Example
    /// ```
    /// use cursorjson::Cursor;
    /// let mut cursor = Cursor::new("-0.123");
    /// assert_eq!(cursor.parse_number()?, -0.123f32);
    /// # Ok::<(), cursorjson::ParseError>(())
    /// ```
    #[cfg(feature = "float")]
    pub fn parse_number(&mut self) -> Result<f32, ParseError> {
        self.with_number(|scan| scan.scan_number_literal()?.as_f32())
    }

    /// Validates a number and copies its literal text into `dest`, followed by a zero byte.
    ///
    /// Returns the literal length, excluding the zero. Fails with
    /// [`ParseError::NumberTooLong`] when the literal and its terminator do not
    /// fit. On failure the cursor is unchanged.
    pub fn parse_number_raw(&mut self, dest: &mut [u8]) -> Result<usize, ParseError> {
        self.with_number(|scan| {
            let literal = scan.scan_number_literal()?.as_str().as_bytes();
            if literal.len() >= dest.len() {
                return Err(ParseError::NumberTooLong);
            }
            for (slot, &byte) in dest.iter_mut().zip(literal) {
                *slot = byte;
            }
            if let Some(terminator) = dest.get_mut(literal.len()) {
                *terminator = 0;
            }
            Ok(literal.len())
        })
    }
}
