// SPDX-License-Identifier: Apache-2.0

//! A minimal pull-style JSON cursor for constrained targets.
//!
//! The caller drives parsing by calling a typed operation for whatever it
//! expects next in the document. Every operation skips leading whitespace,
//! decodes one token or value, and leaves the [`Cursor`] just past it. There
//! is no document model and no heap allocation: decoded strings land in
//! caller-provided buffers, and unwanted values are skipped in place.
//!
//! ```
//! use cursorjson::{Cursor, ParseError};
//!
//! let mut cursor = Cursor::new(r#"{"name": "sensor", "gain": 1.5, "extra": [1, 2]}"#);
//! let mut key = [0u8; 16];
//! let mut name = [0u8; 16];
//!
//! cursor.object_start()?;
//! cursor.parse_key(Some(&mut key))?;
//! let name = cursor.parse_string_bytes(&mut name)?;
//! cursor.comma()?;
//! cursor.parse_key(None)?;
//! let gain = cursor.parse_number_literal()?;
//! cursor.comma()?;
//! cursor.parse_key(None)?;
//! cursor.skip_value()?;
//! cursor.object_end()?;
//!
//! assert_eq!(name, b"sensor");
//! assert_eq!(gain.as_str(), "1.5");
//! # Ok::<(), ParseError>(())
//! ```

#![cfg_attr(not(test), no_std)]

mod bitstack;
pub use bitstack::{ArrayBitStack, BitStack, BitStackConfig, BitStackStruct, DefaultConfig};

mod cursor;
pub use cursor::Cursor;

mod escape_processor;

mod json_number;
pub use json_number::{JsonNumber, NUMBER_SCRATCH_LEN};

mod json_string;

mod literal;

mod parse_error;
pub use parse_error::{result_str, ParseError};

mod shared;
pub use shared::ValueType;

mod walker;
pub use walker::{write_structure, KEY_SCRATCH_LEN};
