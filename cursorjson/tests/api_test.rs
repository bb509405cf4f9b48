// SPDX-License-Identifier: Apache-2.0

// End-to-end scenarios and cross-cutting properties of the public API

use cursorjson::{result_str, Cursor, ParseError, ValueType};

const ALL_ERRORS: [ParseError; 17] = [
    ParseError::InvalidSyntax,
    ParseError::UnexpectedType,
    ParseError::MissingObjectEnd,
    ParseError::MissingArrayEnd,
    ParseError::MissingComma,
    ParseError::MissingKey,
    ParseError::MissingColon,
    ParseError::MissingStringEnd,
    ParseError::StringTooLong,
    ParseError::InvalidStringCharacter,
    ParseError::InvalidStringEscapeSequence,
    ParseError::InvalidStringHexEscapeSequence,
    ParseError::UnableToParseStringHexEscapeSequence,
    ParseError::InvalidNumberFormat,
    ParseError::NumberTooLong,
    ParseError::UnableToParseNumber,
    ParseError::NestingTooDeep,
];

#[test]
fn test_walk_object_of_each_type() {
    let json = r#"{"a":"string","b":123,"c":{"x":0},"d":[0],"e":true,"f":false,"g":null}"#;
    let mut cursor = Cursor::new(json);
    assert_eq!(cursor.skip_value(), Ok(()));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), json.len());
}

#[test]
fn test_simple_escape_sequences() {
    let mut buffer = [0u8; 128];
    let mut cursor = Cursor::new(r#"" \" \\ \/ \b \f \n \r \t ""#);
    let count = cursor.parse_string(Some(&mut buffer)).unwrap();
    assert_eq!(count, 18);
    assert_eq!(&buffer[..count], b" \" \\ / \x08 \x0C \n \r \t \0");
}

#[test]
fn test_hex_escape_sequences() {
    let json = format!("\" {0}u0041{0}u0042{0}u0043 \"", '\\');
    let mut buffer = [0u8; 128];
    let count = Cursor::new(&json).parse_string(Some(&mut buffer)).unwrap();
    assert_eq!(count, 6);
    assert_eq!(&buffer[..count], b" ABC \0");
}

#[test]
fn test_hex_escaped_zero_is_kept() {
    let json = format!("\" ABC{}u0000DEF \"", '\\');
    let mut buffer = [0u8; 128];
    let count = Cursor::new(&json).parse_string(Some(&mut buffer)).unwrap();
    assert_eq!(count, 10);
    assert_eq!(&buffer[..count], b" ABC\0DEF \0");
}

#[test]
fn test_capacity_errors() {
    let mut buffer = [0u8; 16];
    assert_eq!(
        Cursor::new(r#""0123456789ABCDEF""#).parse_string(Some(&mut buffer)),
        Err(ParseError::StringTooLong)
    );
    let mut raw = [0u8; 32];
    assert_eq!(
        Cursor::new("01234567890123456789012345678901").parse_number_raw(&mut raw),
        Err(ParseError::NumberTooLong)
    );
}

#[test]
fn test_number_scenarios() {
    assert_eq!(Cursor::new("00").skip_number(), Err(ParseError::InvalidNumberFormat));
    assert_eq!(Cursor::new("-").skip_number(), Err(ParseError::InvalidNumberFormat));
    assert_eq!(Cursor::new("0e").skip_number(), Err(ParseError::InvalidNumberFormat));
    let literal = Cursor::new("-0.123").parse_number_literal().unwrap();
    assert_eq!(literal.parse::<f32>(), Ok(-0.123));
}

#[test]
fn test_structural_error_scenarios() {
    let cases: &[(&str, ParseError)] = &[
        (r#"{"x":0"#, ParseError::MissingObjectEnd),
        ("[0", ParseError::MissingArrayEnd),
        (r#"{"x""#, ParseError::MissingColon),
        ("{", ParseError::MissingKey),
    ];
    for (json, expected) in cases {
        assert_eq!(Cursor::new(json).skip_value(), Err(*expected), "{:?}", json);
    }
}

#[test]
fn test_error_labels() {
    for (i, error) in ALL_ERRORS.iter().enumerate() {
        let label = error.as_str();
        assert!(!label.is_empty());
        assert_eq!(error.to_string(), label);
        for other in &ALL_ERRORS[i + 1..] {
            assert_ne!(label, other.as_str(), "{:?} and {:?} share a label", error, other);
        }
    }
    assert_eq!(result_str(&Ok::<(), ParseError>(())), "OK");
    assert_eq!(result_str(&Err::<(), _>(ParseError::MissingComma)), "Missing comma");
}

#[test]
fn test_successful_operations_advance() {
    let json = r#"{"k": [1, "s", true, null, {}]}"#;
    let mut cursor = Cursor::new(json);
    let mut last = cursor.position();
    let mut step = |cursor: &Cursor, what: &str| {
        assert!(cursor.position() > last, "{} did not advance", what);
        last = cursor.position();
    };

    cursor.object_start().unwrap();
    step(&cursor, "object start");
    cursor.parse_key(None).unwrap();
    step(&cursor, "key");
    cursor.array_start().unwrap();
    step(&cursor, "array start");
    cursor.skip_number().unwrap();
    step(&cursor, "number");
    cursor.comma().unwrap();
    step(&cursor, "comma");
    cursor.parse_string(None).unwrap();
    step(&cursor, "string");
    cursor.comma().unwrap();
    cursor.parse_bool().unwrap();
    step(&cursor, "boolean");
    cursor.comma().unwrap();
    cursor.parse_null().unwrap();
    step(&cursor, "null");
    cursor.comma().unwrap();
    cursor.skip_value().unwrap();
    step(&cursor, "skip");
    cursor.array_end().unwrap();
    step(&cursor, "array end");
    cursor.object_end().unwrap();
    step(&cursor, "object end");
    assert!(cursor.is_at_end());
}

#[test]
fn test_peek_drives_dispatch() {
    let json = r#"["s", -1, {}, [], false, null]"#;
    let mut cursor = Cursor::new(json);
    let mut kinds = Vec::new();
    cursor.array_start().unwrap();
    loop {
        let kind = cursor.peek_type().unwrap();
        kinds.push(kind);
        match kind {
            ValueType::String => {
                cursor.parse_string(None).unwrap();
            }
            ValueType::Number => cursor.skip_number().unwrap(),
            ValueType::Boolean => {
                cursor.parse_bool().unwrap();
            }
            ValueType::Null => cursor.parse_null().unwrap(),
            ValueType::Object | ValueType::Array => cursor.skip_value().unwrap(),
        }
        if cursor.comma().is_err() {
            break;
        }
    }
    cursor.array_end().unwrap();
    assert_eq!(
        kinds,
        [
            ValueType::String,
            ValueType::Number,
            ValueType::Object,
            ValueType::Array,
            ValueType::Boolean,
            ValueType::Null,
        ]
    );
}

#[test]
fn test_independent_cursors_across_threads() {
    let documents = [r#"{"a":[1,2,3]}"#, r#"[{"b":null},"c"]"#];
    let handles: Vec<_> = documents
        .iter()
        .map(|&json| std::thread::spawn(move || Cursor::new(json).skip_value()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(()));
    }
}
