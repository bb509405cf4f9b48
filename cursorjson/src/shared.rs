// SPDX-License-Identifier: Apache-2.0

//! Shared components for the cursor primitives and the walker

/// The kind of the next JSON value, as classified by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// A string value (e.g., `"value"`).
    String,
    /// A number value (e.g., `42` or `-1.5e3`).
    Number,
    /// An object (e.g., `{"key": 1}`).
    Object,
    /// An array (e.g., `[1, 2]`).
    Array,
    /// A boolean value (`true` or `false`).
    Boolean,
    /// A null value.
    Null,
}

impl ValueType {
    /// Classifies a value by its first byte, or `None` if no value can start with it.
    pub const fn from_start_byte(byte: u8) -> Option<Self> {
        match byte {
            b'"' => Some(ValueType::String),
            b'-' | b'0'..=b'9' => Some(ValueType::Number),
            b'{' => Some(ValueType::Object),
            b'[' => Some(ValueType::Array),
            b't' | b'f' => Some(ValueType::Boolean),
            b'n' => Some(ValueType::Null),
            _ => None,
        }
    }

    /// Lowercase name of the kind, as printed by the structure printer.
    pub const fn name(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Object => "object",
            ValueType::Array => "array",
            ValueType::Boolean => "boolean",
            ValueType::Null => "null",
        }
    }

    /// True for objects and arrays.
    pub const fn is_container(&self) -> bool {
        matches!(self, ValueType::Object | ValueType::Array)
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bytes skipped between tokens.
pub(crate) const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
