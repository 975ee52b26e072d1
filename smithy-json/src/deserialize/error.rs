/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::Error as EscapeError;
use smithy_types::instant::InstantParseError;
use smithy_types::TryFromNumberError;
use std::borrow::Cow;
use std::fmt;
use std::str::Utf8Error;

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorReason {
    Custom(Cow<'static, str>),
    ExpectedLiteral(String),
    InvalidNumber,
    InvalidTimestamp(InstantParseError),
    InvalidUtf8,
    UnescapeFailed(EscapeError),
    UnexpectedControlCharacter(u8),
    UnexpectedEos,
    UnexpectedToken(char, &'static str),
}
use ErrorReason::*;

/// Failed to tokenize or decode a JSON document
#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    reason: ErrorReason,
    offset: Option<usize>,
}

impl Error {
    pub fn new(reason: ErrorReason, offset: Option<usize>) -> Self {
        Error { reason, offset }
    }

    /// Returns a custom error without an offset.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Error {
        Error::new(ErrorReason::Custom(message.into()), None)
    }

    /// Byte offset into the input where the error was detected, if known
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn reason(&self) -> &ErrorReason {
        &self.reason
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            UnescapeFailed(source) => Some(source),
            InvalidTimestamp(source) => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset {
            write!(f, "Error at offset {}: ", offset)?;
        }
        match &self.reason {
            Custom(msg) => write!(f, "failed to parse JSON: {}", msg),
            ExpectedLiteral(literal) => write!(f, "expected literal: {}", literal),
            InvalidNumber => write!(f, "invalid number"),
            InvalidTimestamp(err) => write!(f, "invalid timestamp: {}", err),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON stream"),
            UnescapeFailed(err) => write!(f, "failed to unescape JSON string: {}", err),
            UnexpectedControlCharacter(value) => write!(
                f,
                "encountered unescaped control character in string: 0x{:X}",
                value
            ),
            UnexpectedToken(token, expected) => write!(
                f,
                "unexpected token '{}'. Expected one of {}",
                token, expected
            ),
            UnexpectedEos => write!(f, "unexpected end of stream"),
        }
    }
}

impl From<Utf8Error> for ErrorReason {
    fn from(_: Utf8Error) -> Self {
        InvalidUtf8
    }
}

impl From<EscapeError> for Error {
    fn from(err: EscapeError) -> Self {
        Error::new(UnescapeFailed(err), None)
    }
}

impl From<TryFromNumberError> for Error {
    fn from(_: TryFromNumberError) -> Self {
        Error::new(InvalidNumber, None)
    }
}

impl From<InstantParseError> for Error {
    fn from(err: InstantParseError) -> Self {
        Error::new(InvalidTimestamp(err), None)
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorReason};

    #[test]
    fn display_includes_offset() {
        let err = Error::new(ErrorReason::UnexpectedToken(']', "'}', ','"), Some(10));
        assert_eq!(
            "Error at offset 10: unexpected token ']'. Expected one of '}', ','",
            err.to_string()
        );
        assert_eq!(
            "failed to parse JSON: expected value",
            Error::custom("expected value").to_string()
        );
    }
}
