/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
enum ErrorKind {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    InvalidUtf8,
    UnexpectedEndOfString,
}

/// A JSON string contained an escape sequence that could not be decoded.
#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        match &self.kind {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {} as the low word",
                low
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON string"),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

/// Escapes a string for embedding in a JSON string value.
pub fn escape_string(value: &str) -> Cow<str> {
    let bytes = value.as_bytes();
    match bytes
        .iter()
        .position(|byte| matches!(byte, 0..=0x1F | b'"' | b'\\'))
    {
        Some(index) => Cow::Owned(escape_string_inner(&value[0..index], &value[index..])),
        None => Cow::Borrowed(value),
    }
}

fn escape_string_inner(start: &str, rest: &str) -> String {
    let mut escaped = String::with_capacity(start.len() + rest.len() + 1);
    escaped.push_str(start);
    for chr in rest.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{00}'..='\u{1F}' => escaped.push_str(&format!("\\u{:04x}", chr as u32)),
            _ => escaped.push(chr),
        }
    }
    escaped
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, the input is borrowed as-is.
pub fn unescape_string(value: &str) -> Result<Cow<str>, Error> {
    match value.as_bytes().iter().position(|byte| *byte == b'\\') {
        Some(index) => unescape_string_inner(&value.as_bytes()[0..index], &value.as_bytes()[index..])
            .map(Cow::Owned),
        None => Ok(Cow::Borrowed(value)),
    }
}

fn unescape_string_inner(start: &[u8], rest: &[u8]) -> Result<String, Error> {
    let mut unescaped = Vec::with_capacity(start.len() + rest.len());
    unescaped.extend(start);

    let mut index = 0;
    while index < rest.len() {
        if rest[index] != b'\\' {
            unescaped.push(rest[index]);
            index += 1;
            continue;
        }
        let escape = *rest
            .get(index + 1)
            .ok_or(ErrorKind::UnexpectedEndOfString)?;
        match escape {
            b'u' => index += read_unicode_escapes(&rest[index..], &mut unescaped)?,
            b'\\' | b'/' | b'"' | b'b' | b'f' | b'n' | b'r' | b't' => {
                unescaped.push(match escape {
                    b'b' => 0x08,
                    b'f' => 0x0C,
                    b'n' => b'\n',
                    b'r' => b'\r',
                    b't' => b'\t',
                    other => other,
                });
                index += 2;
            }
            other => return Err(ErrorKind::InvalidEscapeCharacter(other.into()).into()),
        }
    }

    String::from_utf8(unescaped).map_err(|_| ErrorKind::InvalidUtf8.into())
}

fn read_codepoint(rest: &[u8]) -> Result<u16, Error> {
    if rest.len() < 6 {
        return Err(ErrorKind::UnexpectedEndOfString.into());
    }
    if &rest[0..2] != b"\\u" {
        // The leading `\u` of the first word was checked by the caller, so this is the low word
        return Err(
            ErrorKind::ExpectedSurrogatePair(String::from_utf8_lossy(&rest[0..6]).into()).into(),
        );
    }
    let hex = std::str::from_utf8(&rest[2..6]).map_err(|_| ErrorKind::InvalidUtf8)?;
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(ErrorKind::InvalidUnicodeEscape(hex.into()).into());
    }
    u16::from_str_radix(hex, 16).map_err(|_| ErrorKind::InvalidUnicodeEscape(hex.into()).into())
}

/// Reads a `\uXXXX` escape, plus a second one when the first is a high surrogate.
/// Returns the number of bytes consumed.
fn read_unicode_escapes(bytes: &[u8], into: &mut Vec<u8>) -> Result<usize, Error> {
    let high = read_codepoint(bytes)?;
    let (consumed, chr) = if (0xD800..0xDC00).contains(&high) {
        let low = read_codepoint(&bytes[6..])?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(ErrorKind::InvalidSurrogatePair(high, low).into());
        }
        let codepoint = 0x10000 + (high as u32 - 0xD800) * 0x400 + (low as u32 - 0xDC00);
        let chr = std::char::from_u32(codepoint)
            .ok_or(ErrorKind::InvalidSurrogatePair(high, low))?;
        (12, chr)
    } else {
        let chr = std::char::from_u32(high as u32)
            .ok_or_else(|| ErrorKind::InvalidUnicodeEscape(format!("{:04X}", high)))?;
        (6, chr)
    };
    let mut buf = [0; 4];
    into.extend(chr.encode_utf8(&mut buf).as_bytes());
    Ok(consumed)
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, Error, ErrorKind};

    #[test]
    fn escape() {
        assert_eq!("", escape_string("").as_ref());
        assert_eq!("foo", escape_string("foo").as_ref());
        assert_eq!("foo\\r\\n", escape_string("foo\r\n").as_ref());
        assert_eq!("foo\\r\\nbar", escape_string("foo\r\nbar").as_ref());
        assert_eq!(r#"foo\\bar"#, escape_string(r#"foo\bar"#).as_ref());
        assert_eq!(r#"\\foobar"#, escape_string(r#"\foobar"#).as_ref());
        assert_eq!(
            r#"\bf\fo\to\r\n"#,
            escape_string("\u{08}f\u{0C}o\to\r\n").as_ref()
        );
        assert_eq!("\\\"test\\\"", escape_string("\"test\"").as_ref());
        assert_eq!("\\u0000", escape_string("\u{0}").as_ref());
        assert_eq!("\\u001f", escape_string("\u{1f}").as_ref());
        assert_eq!("añ\\n😀", escape_string("añ\n😀").as_ref());
    }

    #[test]
    fn unescape_no_escapes_is_borrowed() {
        assert!(matches!(
            unescape_string("campaign").unwrap(),
            std::borrow::Cow::Borrowed("campaign")
        ));
    }

    #[test]
    fn unescape() {
        assert_eq!(
            "\x08f\x0Co\to\r\n",
            unescape_string(r#"\bf\fo\to\r\n"#).unwrap()
        );
        assert_eq!("\"test\"", unescape_string(r#"\"test\""#).unwrap());
        assert_eq!("a/b", unescape_string(r#"a\/b"#).unwrap());
        assert_eq!("\u{0}", unescape_string("\\u0000").unwrap());
        assert_eq!("\u{1f}", unescape_string("\\u001f").unwrap());
        assert_eq!("é", unescape_string("\\u00e9").unwrap());
        assert_eq!("😀", unescape_string("\\uD83D\\uDE00").unwrap());
        assert_eq!("x😀y", unescape_string("x\\ud83d\\ude00y").unwrap());
    }

    #[test]
    fn unescape_failures() {
        assert_eq!(
            Err(Error::from(ErrorKind::InvalidEscapeCharacter('q'))),
            unescape_string("\\q")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::UnexpectedEndOfString)),
            unescape_string("foo\\")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::UnexpectedEndOfString)),
            unescape_string("\\u12")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::InvalidUnicodeEscape("+123".into()))),
            unescape_string("\\u+123")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::ExpectedSurrogatePair("abcdef".into()))),
            unescape_string("\\uD83Dabcdef")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::InvalidSurrogatePair(0xD83D, 0x0041))),
            unescape_string("\\uD83D\\u0041")
        );
        assert_eq!(
            Err(Error::from(ErrorKind::InvalidUnicodeEscape("DE00".into()))),
            unescape_string("\\uDE00")
        );
    }

    use proptest::proptest;
    proptest! {
        #[test]
        fn matches_serde_json(s in ".*") {
            assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!(r#""{}""#, escape_string(&s))
            )
        }

        #[test]
        fn round_trip(s in ".*") {
            let escaped = escape_string(&s);
            let unescaped = unescape_string(&escaped).unwrap();
            assert_eq!(s, unescaped);
        }
    }
}
