/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::deserialize::error::ErrorReason::*;
use smithy_types::Number;

pub mod error;
pub mod token;

pub use error::Error;
pub use token::{EscapeError, EscapedStr, Offset, Token};

/// Returns an iterator over the JSON tokens in `input`.
///
/// The iterator validates structure as it goes (balanced brackets, delimiters, literals) but
/// leaves strings escaped until [`EscapedStr::to_unescaped`] is called. Multiple top-level values
/// are tokenized one after the other; callers that expect a single document should check that
/// the iterator is exhausted afterwards.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn peek_expect(&self) -> Result<u8, Error> {
        self.peek_byte()
            .ok_or_else(|| self.error(UnexpectedEos))
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    fn next_expect(&mut self) -> Result<u8, Error> {
        let byte = self.peek_expect()?;
        self.advance();
        Ok(byte)
    }

    fn offset(&self) -> Offset {
        Offset(self.index)
    }

    fn error(&self, reason: error::ErrorReason) -> Error {
        Error::new(reason, Some(self.index))
    }

    fn error_at(&self, offset: usize, reason: error::ErrorReason) -> Error {
        Error::new(reason, Some(offset))
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') = self.peek_byte() {
            self.advance();
        }
    }

    fn state(&self) -> State {
        self.state_stack.last().copied().unwrap_or(State::Initial)
    }

    fn replace_state(&mut self, state: State) {
        self.state_stack.pop();
        self.state_stack.push(state);
    }

    fn start_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.push(State::ObjectFirstKeyOrEnd);
        Token::StartObject { offset }
    }

    fn end_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.pop();
        Token::EndObject { offset }
    }

    fn start_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.push(State::ArrayFirstValueOrEnd);
        Token::StartArray { offset }
    }

    fn end_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.pop();
        Token::EndArray { offset }
    }

    /// Reads a quoted string and returns its contents without unescaping them.
    fn read_string(&mut self) -> Result<&'a str, Error> {
        let quote = self.next_expect()?;
        debug_assert_eq!(b'"', quote);
        let input = self.input;
        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&input[start..self.index])
                        .map_err(|err| self.error_at(start, err.into()))?;
                    self.advance();
                    return Ok(value);
                }
                b'\\' => {
                    self.advance();
                    self.next_expect()?;
                }
                byte @ 0x00..=0x1F => return Err(self.error(UnexpectedControlCharacter(byte))),
                _ => self.advance(),
            }
        }
    }

    fn expect_literal(&mut self, expected: &'static [u8]) -> Result<(), Error> {
        let start = self.index;
        let end = start + expected.len();
        if end > self.input.len() {
            return Err(self.error_at(self.input.len(), UnexpectedEos));
        }
        if &self.input[start..end] != expected {
            return Err(self.error_at(
                start,
                ExpectedLiteral(String::from_utf8_lossy(expected).into()),
            ));
        }
        self.index = end;
        Ok(())
    }

    fn read_number(&mut self) -> Result<Token<'a>, Error> {
        let start = self.index;
        let mut is_float = false;
        while let Some(byte) = self.peek_byte() {
            match byte {
                b'0'..=b'9' | b'-' | b'+' => self.advance(),
                b'.' | b'e' | b'E' => {
                    is_float = true;
                    self.advance();
                }
                _ => break,
            }
        }
        let raw = std::str::from_utf8(&self.input[start..self.index])
            .map_err(|err| self.error_at(start, err.into()))?;
        let invalid = || Error::new(InvalidNumber, Some(start));
        let value = if is_float {
            Number::Float(raw.parse::<f64>().map_err(|_| invalid())?)
        } else if raw.starts_with('-') {
            match raw.parse::<i64>() {
                Ok(value) => Number::NegInt(value),
                Err(_) => Number::Float(raw.parse::<f64>().map_err(|_| invalid())?),
            }
        } else {
            match raw.parse::<u64>() {
                Ok(value) => Number::PosInt(value),
                Err(_) => Number::Float(raw.parse::<f64>().map_err(|_| invalid())?),
            }
        };
        Ok(Token::ValueNumber {
            offset: Offset(start),
            value,
        })
    }

    fn read_value(&mut self) -> Result<Token<'a>, Error> {
        self.discard_whitespace();
        let offset = self.offset();
        match self.peek_expect()? {
            b'{' => Ok(self.start_object()),
            b'[' => Ok(self.start_array()),
            b'"' => Ok(Token::ValueString {
                offset,
                value: EscapedStr::new(self.read_string()?),
            }),
            b'n' => {
                self.expect_literal(b"null")?;
                Ok(Token::ValueNull { offset })
            }
            b't' => {
                self.expect_literal(b"true")?;
                Ok(Token::ValueBool {
                    offset,
                    value: true,
                })
            }
            b'f' => {
                self.expect_literal(b"false")?;
                Ok(Token::ValueBool {
                    offset,
                    value: false,
                })
            }
            b'-' | b'0'..=b'9' => self.read_number(),
            byte => Err(self.error(UnexpectedToken(
                byte.into(),
                "'{', '[', '\"', 'null', 'true', 'false', <number>",
            ))),
        }
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, Error> {
        let offset = self.offset();
        let key = self.read_string()?;
        self.discard_whitespace();
        match self.next_expect()? {
            b':' => {}
            byte => {
                return Err(self.error_at(self.index - 1, UnexpectedToken(byte.into(), "':'")))
            }
        }
        self.replace_state(State::ObjectFieldValue);
        Ok(Token::ObjectKey {
            offset,
            key: EscapedStr::new(key),
        })
    }

    fn state_array_first_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            _ => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
        }
    }

    fn state_array_next_value_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            b',' => {
                self.advance();
                self.read_value()
            }
            byte => Err(self.error(UnexpectedToken(byte.into(), "']', ','"))),
        }
    }

    fn state_object_first_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            b'"' => self.read_object_key(),
            byte => Err(self.error(UnexpectedToken(byte.into(), "'}', '\"'"))),
        }
    }

    fn state_object_next_key_or_end(&mut self) -> Result<Token<'a>, Error> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            b',' => {
                self.advance();
                self.discard_whitespace();
                match self.peek_expect()? {
                    b'"' => self.read_object_key(),
                    byte => Err(self.error(UnexpectedToken(byte.into(), "'\"'"))),
                }
            }
            byte => Err(self.error(UnexpectedToken(byte.into(), "'}', ','"))),
        }
    }

    fn state_object_field_value(&mut self) -> Result<Token<'a>, Error> {
        self.replace_state(State::ObjectNextKeyOrEnd);
        self.read_value()
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.index <= self.input.len());
        self.discard_whitespace();
        if self.index == self.input.len() {
            return match self.state() {
                State::Initial => None,
                _ => {
                    // Report the truncation once, then stop
                    self.state_stack = vec![State::Initial];
                    Some(Err(self.error(UnexpectedEos)))
                }
            };
        }
        let result = match self.state() {
            State::Initial => self.read_value(),
            State::ArrayFirstValueOrEnd => self.state_array_first_value_or_end(),
            State::ArrayNextValueOrEnd => self.state_array_next_value_or_end(),
            State::ObjectFirstKeyOrEnd => self.state_object_first_key_or_end(),
            State::ObjectNextKeyOrEnd => self.state_object_next_key_or_end(),
            State::ObjectFieldValue => self.state_object_field_value(),
        };
        if result.is_err() {
            // Nothing after an error can be trusted
            self.index = self.input.len();
            self.state_stack = vec![State::Initial];
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::deserialize::error::ErrorReason::*;
    use crate::deserialize::token::test::{
        end_array, end_object, object_key, start_array, start_object, value_bool, value_null,
        value_number, value_string,
    };
    use crate::deserialize::{json_token_iter, Error, Token};
    use proptest::prelude::*;
    use smithy_types::Number;

    #[test]
    fn test_empty() {
        assert!(json_token_iter(b"").next().is_none());
        assert!(json_token_iter(b" \r\n\t ").next().is_none());
    }

    #[test]
    fn test_empty_string() {
        let mut iter = json_token_iter(b"\"\"");
        assert_eq!(value_string(0, ""), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_literals() {
        let mut iter = json_token_iter(b" null true false ");
        assert_eq!(value_null(1), iter.next());
        assert_eq!(value_bool(6, true), iter.next());
        assert_eq!(value_bool(11, false), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_numbers() {
        let mut iter = json_token_iter(b"[0, 15, -7, 1.5, -2e3, 18446744073709551616]");
        assert_eq!(start_array(0), iter.next());
        assert_eq!(value_number(1, Number::PosInt(0)), iter.next());
        assert_eq!(value_number(4, Number::PosInt(15)), iter.next());
        assert_eq!(value_number(8, Number::NegInt(-7)), iter.next());
        assert_eq!(value_number(12, Number::Float(1.5)), iter.next());
        assert_eq!(value_number(17, Number::Float(-2000.0)), iter.next());
        assert_eq!(
            value_number(23, Number::Float(18446744073709551616.0)),
            iter.next()
        );
        assert_eq!(end_array(43), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_invalid_number() {
        let mut iter = json_token_iter(b"1.2.3");
        assert_eq!(Some(Err(Error::new(InvalidNumber, Some(0)))), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_object() {
        let mut iter = json_token_iter(
            br#"{ "ApplicationId": "app1", "Enabled" : true, "Tags": {}, "Values": [null] }"#,
        );
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(2, "ApplicationId"), iter.next());
        assert_eq!(value_string(19, "app1"), iter.next());
        assert_eq!(object_key(27, "Enabled"), iter.next());
        assert_eq!(value_bool(39, true), iter.next());
        assert_eq!(object_key(45, "Tags"), iter.next());
        assert_eq!(start_object(53), iter.next());
        assert_eq!(end_object(54), iter.next());
        assert_eq!(object_key(57, "Values"), iter.next());
        assert_eq!(start_array(67), iter.next());
        assert_eq!(value_null(68), iter.next());
        assert_eq!(end_array(72), iter.next());
        assert_eq!(end_object(74), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn test_escaped_strings_stay_escaped() {
        let mut iter = json_token_iter(br#"{"Body\n": "line\nbreak \"quoted\""}"#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "Body\\n"), iter.next());
        match iter.next() {
            Some(Ok(Token::ValueString { value, .. })) => {
                assert_eq!(r#"line\nbreak \"quoted\""#, value.as_escaped_str());
                assert_eq!("line\nbreak \"quoted\"", value.to_unescaped().unwrap());
            }
            other => panic!("unexpected token: {:?}", other),
        }
        assert_eq!(end_object(35), iter.next());
    }

    #[test]
    fn test_unexpected_tokens() {
        assert_eq!(
            Some(Err(Error::new(UnexpectedToken('}', "']', ','"), Some(4)))),
            json_token_iter(b"[5,6}").nth(3)
        );
        assert_eq!(
            Some(Err(Error::new(UnexpectedToken('1', "'\"'"), Some(10)))),
            json_token_iter(br#"{"a": 5,  1}"#).nth(3)
        );
        assert_eq!(
            Some(Err(Error::new(UnexpectedToken('x', "':'"), Some(5)))),
            json_token_iter(br#"{"a" x 5}"#).nth(1)
        );
        assert_eq!(
            Some(Err(Error::new(
                UnexpectedToken('}', "'{', '[', '\"', 'null', 'true', 'false', <number>"),
                Some(0)
            ))),
            json_token_iter(b"}").next()
        );
    }

    #[test]
    fn test_bad_literal() {
        assert_eq!(
            Some(Err(Error::new(ExpectedLiteral("true".into()), Some(0)))),
            json_token_iter(b"trve").next()
        );
        assert_eq!(
            Some(Err(Error::new(UnexpectedEos, Some(3)))),
            json_token_iter(b"nul").next()
        );
    }

    #[test]
    fn test_truncated_document() {
        let mut iter = json_token_iter(br#"{"a": ["#);
        assert_eq!(start_object(0), iter.next());
        assert_eq!(object_key(1, "a"), iter.next());
        assert_eq!(start_array(6), iter.next());
        assert_eq!(Some(Err(Error::new(UnexpectedEos, Some(7)))), iter.next());
        assert_eq!(None, iter.next());

        assert_eq!(
            Some(Err(Error::new(UnexpectedEos, Some(1)))),
            json_token_iter(b"\"").next()
        );
    }

    #[test]
    fn test_control_character_in_string() {
        assert_eq!(
            Some(Err(Error::new(UnexpectedControlCharacter(0x0A), Some(3)))),
            json_token_iter(b"\"ab\ncd\"").next()
        );
    }

    #[test]
    fn test_stops_after_error() {
        let mut iter = json_token_iter(b"[}, 5]");
        assert_eq!(start_array(0), iter.next());
        assert!(matches!(iter.next(), Some(Err(_))));
        assert_eq!(None, iter.next());
    }

    proptest! {
        #[test]
        fn string_tokens_unescape_like_serde(s in ".*") {
            let json = serde_json::to_string(&s).unwrap();
            let mut iter = json_token_iter(json.as_bytes());
            match iter.next() {
                Some(Ok(Token::ValueString { value, .. })) => {
                    prop_assert_eq!(s, value.to_unescaped().unwrap().into_owned())
                }
                other => prop_assert!(false, "unexpected token: {:?}", other),
            }
            prop_assert!(iter.next().is_none());
        }

        #[test]
        fn integers_tokenize_like_serde(value: i64) {
            let json = serde_json::to_string(&value).unwrap();
            let expected = if value < 0 { Number::NegInt(value) } else { Number::PosInt(value as u64) };
            prop_assert_eq!(value_number(0, expected), json_token_iter(json.as_bytes()).next());
        }
    }
}
