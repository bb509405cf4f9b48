// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing.
///
/// Every cursor operation either succeeds or fails with exactly one of these.
/// Once an operation fails the cursor position is unspecified (unless the
/// operation documents otherwise) and the cursor should not be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No value starts at the cursor.
    InvalidSyntax,
    /// The next value is not of the kind the caller asked for.
    UnexpectedType,
    /// Expected `}`.
    MissingObjectEnd,
    /// Expected `]`.
    MissingArrayEnd,
    /// Expected `,`.
    MissingComma,
    /// Expected a string key.
    MissingKey,
    /// Expected `:` after a key.
    MissingColon,
    /// Input ended inside a string.
    MissingStringEnd,
    /// The decoded string and its trailing zero do not fit in the destination.
    StringTooLong,
    /// A raw control byte, `0x7F` or a byte with the high bit set inside a string.
    InvalidStringCharacter,
    /// Unknown character after `\`.
    InvalidStringEscapeSequence,
    /// One of the four positions after `\u` is not a hex digit.
    InvalidStringHexEscapeSequence,
    /// The hex digits of a `\u` escape could not be converted.
    UnableToParseStringHexEscapeSequence,
    /// The number literal does not follow the number grammar.
    InvalidNumberFormat,
    /// The number literal and its trailing zero do not fit in the scratch or destination buffer.
    NumberTooLong,
    /// A well-formed number literal could not be converted.
    UnableToParseNumber,
    /// Containers are nested deeper than the walker's stack can track.
    NestingTooDeep,
}

impl ParseError {
    /// Returns a short, fixed English label for the error.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParseError::InvalidSyntax => "Invalid syntax",
            ParseError::UnexpectedType => "Unexpected type",
            ParseError::MissingObjectEnd => "Missing object end",
            ParseError::MissingArrayEnd => "Missing array end",
            ParseError::MissingComma => "Missing comma",
            ParseError::MissingKey => "Missing key",
            ParseError::MissingColon => "Missing colon",
            ParseError::MissingStringEnd => "Missing string end",
            ParseError::StringTooLong => "String too long",
            ParseError::InvalidStringCharacter => "Invalid string character",
            ParseError::InvalidStringEscapeSequence => "Invalid string escape sequence",
            ParseError::InvalidStringHexEscapeSequence => "Invalid string hex escape sequence",
            ParseError::UnableToParseStringHexEscapeSequence => {
                "Unable to parse string hex escape sequence"
            }
            ParseError::InvalidNumberFormat => "Invalid number format",
            ParseError::NumberTooLong => "Number too long",
            ParseError::UnableToParseNumber => "Unable to parse number",
            ParseError::NestingTooDeep => "Nesting too deep",
        }
    }
}

/// Label for the outcome of any cursor operation: `"OK"` on success,
/// otherwise the error's label.
pub fn result_str<T>(result: &Result<T, ParseError>) -> &'static str {
    match result {
        Ok(_) => "OK",
        Err(e) => e.as_str(),
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
