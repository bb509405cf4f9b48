// SPDX-License-Identifier: Apache-2.0

//! Generic value walker.
//!
//! Consumes one complete value of any kind, including everything nested in
//! it. Nesting is tracked on a [`BitStack`] instead of the native call stack,
//! so the deepest accepted nesting is fixed by the chosen [`BitStackConfig`].

use crate::bitstack::{BitStack, BitStackConfig, DefaultConfig};
use crate::cursor::Cursor;
use crate::parse_error::{result_str, ParseError};
use crate::shared::ValueType;

/// Size of the scratch buffer keys are decoded into while walking, including
/// the trailing zero. Longer keys fail with [`ParseError::StringTooLong`].
pub const KEY_SCRATCH_LEN: usize = 64;

/// The containers enclosing the value being walked: one bit per level,
/// set for objects and clear for arrays.
struct ContainerStack<B: BitStack> {
    bits: B,
    depth: usize,
}

impl<B: BitStack> ContainerStack<B> {
    fn new() -> Self {
        Self {
            bits: B::default(),
            depth: 0,
        }
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn push(&mut self, is_object: bool) -> Result<(), ParseError> {
        if self.depth >= B::capacity() {
            return Err(ParseError::NestingTooDeep);
        }
        self.bits.push(is_object);
        self.depth = self.depth.saturating_add(1);
        Ok(())
    }

    fn pop(&mut self) {
        if self.depth > 0 {
            self.bits.pop();
            self.depth -= 1;
        }
    }

    /// Whether the innermost open container is an object, or `None` at top level.
    fn innermost_is_object(&self) -> Option<bool> {
        if self.depth == 0 {
            None
        } else {
            Some(self.bits.top())
        }
    }
}

fn walk<B, F>(cursor: &mut Cursor<'_>, visit: &mut F) -> Result<(), ParseError>
where
    B: BitStack,
    F: FnMut(ValueType, usize),
{
    let mut key = [0u8; KEY_SCRATCH_LEN];
    let mut stack = ContainerStack::<B>::new();

    loop {
        let kind = cursor.peek_type()?;
        visit(kind, stack.depth());

        if kind.is_container() {
            let is_object = kind == ValueType::Object;
            let close = if is_object {
                cursor.object_start()?;
                b'}'
            } else {
                cursor.array_start()?;
                b']'
            };
            if !cursor.eat(close) {
                stack.push(is_object)?;
                log::trace!("Walker: entered {}, depth {}", kind, stack.depth());
                if is_object {
                    cursor.parse_key(Some(&mut key[..]))?;
                }
                continue;
            }
        } else {
            skip_scalar(cursor, kind)?;
        }

        // A value is complete: close containers until one continues after a comma
        loop {
            let Some(in_object) = stack.innermost_is_object() else {
                return Ok(());
            };
            if cursor.eat(b',') {
                if in_object {
                    cursor.parse_key(Some(&mut key[..]))?;
                }
                break;
            }
            if in_object {
                cursor.object_end()?;
            } else {
                cursor.array_end()?;
            }
            log::trace!("Walker: left container, depth {}", stack.depth());
            stack.pop();
        }
    }
}

fn skip_scalar(cursor: &mut Cursor<'_>, kind: ValueType) -> Result<(), ParseError> {
    match kind {
        ValueType::String => cursor.parse_string(None).map(|_| ()),
        ValueType::Number => cursor.skip_number(),
        ValueType::Boolean => cursor.parse_bool().map(|_| ()),
        ValueType::Null => cursor.parse_null(),
        ValueType::Object | ValueType::Array => Err(ParseError::UnexpectedType),
    }
}

impl<'a> Cursor<'a> {
    /// Consumes and discards the next value, whatever its kind.
    ///
    /// Objects and arrays are consumed together with all their contents,
    /// which makes this the building block for skipping parts of a document
    /// the caller is not interested in. Accepts up to 64 levels of nesting.
    ///
    /// # Example
    /// ```
    /// use cursorjson::Cursor;
    /// let mut cursor = Cursor::new(r#"[{"ignored": [1, 2]}, 7]"#);
    /// cursor.array_start()?;
    /// cursor.skip_value()?;
    /// cursor.comma()?;
    /// assert_eq!(cursor.parse_number_literal()?.as_str(), "7");
    /// cursor.array_end()?;
    /// # Ok::<(), cursorjson::ParseError>(())
    /// ```
    pub fn skip_value(&mut self) -> Result<(), ParseError> {
        self.skip_value_with_config::<DefaultConfig>()
    }

    /// Like [`skip_value`](Self::skip_value), with the nesting limit set by `C`.
    pub fn skip_value_with_config<C: BitStackConfig>(&mut self) -> Result<(), ParseError> {
        self.walk_value_with_config::<C, _>(|_, _| {})
    }

    /// Consumes the next value like [`skip_value`](Self::skip_value), calling
    /// `visit` with the kind and nesting depth of every value encountered,
    /// in document order. The outermost value has depth 0.
    pub fn walk_value<F>(&mut self, visit: F) -> Result<(), ParseError>
    where
        F: FnMut(ValueType, usize),
    {
        self.walk_value_with_config::<DefaultConfig, F>(visit)
    }

    /// Like [`walk_value`](Self::walk_value), with the nesting limit set by `C`.
    pub fn walk_value_with_config<C, F>(&mut self, mut visit: F) -> Result<(), ParseError>
    where
        C: BitStackConfig,
        F: FnMut(ValueType, usize),
    {
        let result = walk::<C::Bucket, F>(self, &mut visit);
        if let Err(e) = &result {
            log::debug!("Walker: stopped at byte {}: {}", self.position(), e);
        }
        result
    }
}

/// Writes the structure of the next value: one line per value naming its
/// kind, indented by four spaces per nesting level, followed by a line with
/// the outcome (`OK` or the error label).
///
/// The outer error reports a failed write to `out`; the inner result is the
/// outcome of the walk itself.
///
/// # Example
/// ```
/// use cursorjson::{write_structure, Cursor, ParseError};
/// let mut out = String::new();
/// let walked = write_structure(&mut Cursor::new(r#"{"a": [true]}"#), &mut out)?;
/// assert_eq!(walked, Ok(()));
/// assert_eq!(out, "object\n    array\n        boolean\nOK\n");
///
/// out.clear();
/// let walked = write_structure(&mut Cursor::new("[1 2]"), &mut out)?;
/// assert_eq!(walked, Err(ParseError::MissingArrayEnd));
/// # Ok::<(), core::fmt::Error>(())
/// ```
pub fn write_structure<W: core::fmt::Write>(
    cursor: &mut Cursor<'_>,
    out: &mut W,
) -> Result<Result<(), ParseError>, core::fmt::Error> {
    let mut written = Ok(());
    let result = cursor.walk_value(|kind, depth| {
        if written.is_ok() {
            written = write_line(out, kind, depth);
        }
    });
    written?;
    writeln!(out, "{}", result_str(&result))?;
    Ok(result)
}

fn write_line<W: core::fmt::Write>(out: &mut W, kind: ValueType, depth: usize) -> core::fmt::Result {
    for _ in 0..depth {
        out.write_str("    ")?;
    }
    writeln!(out, "{}", kind.name())
}
