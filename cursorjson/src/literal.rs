// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::parse_error::ParseError;
use crate::shared::ValueType;

const TRUE_LITERAL: &[u8] = b"true";
const FALSE_LITERAL: &[u8] = b"false";
const NULL_LITERAL: &[u8] = b"null";

impl<'a> Cursor<'a> {
    /// Consumes `literal` if the input continues with exactly those bytes.
    fn match_literal(&mut self, literal: &[u8]) -> bool {
        if self.remaining().starts_with(literal) {
            self.advance(literal.len());
            true
        } else {
            false
        }
    }

    /// Decodes `true` or `false`.
    ///
    /// Only the exact lowercase spellings are accepted; anything else starting
    /// with `t` or `f` is [`ParseError::InvalidSyntax`].
    pub fn parse_bool(&mut self) -> Result<bool, ParseError> {
        self.expect_type(ValueType::Boolean)?;
        if self.match_literal(TRUE_LITERAL) {
            return Ok(true);
        }
        if self.match_literal(FALSE_LITERAL) {
            return Ok(false);
        }
        Err(ParseError::InvalidSyntax)
    }

    /// Decodes `null`.
    pub fn parse_null(&mut self) -> Result<(), ParseError> {
        self.expect_type(ValueType::Null)?;
        if self.match_literal(NULL_LITERAL) {
            return Ok(());
        }
        Err(ParseError::InvalidSyntax)
    }
}
