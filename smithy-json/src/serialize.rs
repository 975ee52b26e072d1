/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::escape_string;
use smithy_types::instant::{DateTimeFormatError, Format};
use smithy_types::{Instant, Number};

/// Writes exactly one JSON value into the output.
///
/// Obtained from [`JsonObjectWriter::key`] or [`JsonArrayWriter::value`], which take care of the
/// delimiters surrounding the value.
pub struct JsonValueWriter<'a> {
    output: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        JsonValueWriter { output }
    }

    /// Writes a null value.
    pub fn null(self) {
        self.output.push_str("null");
    }

    /// Writes the boolean `value`.
    pub fn boolean(self, value: bool) {
        self.output.push_str(match value {
            true => "true",
            _ => "false",
        });
    }

    /// Writes a string `value`.
    pub fn string(self, value: &str) {
        append_string(self.output, value);
    }

    /// Writes a string `value` without escaping it.
    pub fn string_unchecked(self, value: &str) {
        append_string_unchecked(self.output, value);
    }

    /// Writes a number `value`.
    pub fn number(self, value: Number) {
        append_number(self.output, value);
    }

    /// Writes an Instant `value` with the given `format`.
    pub fn instant(self, instant: &Instant, format: Format) -> Result<(), DateTimeFormatError> {
        let formatted = instant.fmt(format)?;
        match format {
            Format::EpochSeconds => self.output.push_str(&formatted),
            Format::DateTime => append_string(self.output, &formatted),
        }
        Ok(())
    }

    /// Starts an array.
    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.output)
    }

    /// Starts an object.
    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.output)
    }
}

pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes the `key` and returns a writer for its value.
    pub fn key(&mut self, key: &str) -> JsonValueWriter {
        if self.started {
            self.json.push(',');
        }
        self.started = true;

        self.json.push('"');
        self.json.push_str(&escape_string(key));
        self.json.push_str("\":");

        JsonValueWriter::new(self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }
}

pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Returns a writer for the next element of the array.
    pub fn value(&mut self) -> JsonValueWriter {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        JsonValueWriter::new(self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }
}

fn append_string(json: &mut String, value: &str) {
    append_string_unchecked(json, &escape_string(value));
}

fn append_string_unchecked(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(value);
    json.push('"');
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::Float(value) => {
            // JSON has no representation for NaN or the infinities
            if value.is_nan() || value.is_infinite() {
                json.push_str("null");
            } else {
                json.push_str(ryu::Buffer::new().format_finite(value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonArrayWriter, JsonObjectWriter};
    use crate::serialize::{append_number, append_string_unchecked};
    use proptest::proptest;
    use smithy_types::instant::Format;
    use smithy_types::{Instant, Number};

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn object_inside_array() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array.value().start_object().finish();
        array.value().start_object().finish();
        array.finish();
        assert_eq!("[{},{}]", &output);
    }

    #[test]
    fn nested_containers() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);

        let mut limits = object.key("Limits").start_object();
        limits.key("Daily").number(Number::NegInt(100));
        limits.finish();

        object.key("Values").start_array().finish();

        let mut substitutions = object.key("Substitutions").start_object();
        let mut names = substitutions.key("name").start_array();
        names.value().string("Ana");
        names.value().string("Bo");
        names.finish();
        substitutions.finish();

        object.finish();
        assert_eq!(
            r#"{"Limits":{"Daily":100},"Values":[],"Substitutions":{"name":["Ana","Bo"]}}"#,
            &output
        );
    }

    #[test]
    fn object() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("true_val").boolean(true);
        object.key("false_val").boolean(false);
        object.key("some_string").string("some\nstring\nvalue");
        object.key("unchecked_str").string_unchecked("unchecked");
        object.key("some_number").number(Number::Float(3.5));
        object.key("some_null").null();
        object.key("ke\"y").string("value");

        let mut array = object.key("some_mixed_array").start_array();
        array.value().string("1");
        array.value().number(Number::NegInt(-2));
        array.value().boolean(true);
        array.value().null();
        array.finish();

        object.finish();

        assert_eq!(
            r#"{"true_val":true,"false_val":false,"some_string":"some\nstring\nvalue","unchecked_str":"unchecked","some_number":3.5,"some_null":null,"ke\"y":"value","some_mixed_array":["1",-2,true,null]}"#,
            &output
        );
    }

    #[test]
    fn instants() {
        let mut output = String::new();

        let mut object = JsonObjectWriter::new(&mut output);
        object
            .key("epoch_seconds")
            .instant(&Instant::from_f64(5.2), Format::EpochSeconds)
            .unwrap();
        object
            .key("date_time")
            .instant(
                &Instant::from_str("2021-05-24T15:34:50.123Z", Format::DateTime).unwrap(),
                Format::DateTime,
            )
            .unwrap();
        object.finish();

        assert_eq!(
            r#"{"epoch_seconds":5.2,"date_time":"2021-05-24T15:34:50.123Z"}"#,
            &output,
        )
    }

    #[test]
    fn unrepresentable_instant() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        assert!(object
            .key("date_time")
            .instant(&Instant::from_epoch_seconds(i64::MAX), Format::DateTime)
            .is_err());
    }

    #[test]
    fn append_string_unchecked_no_escaping() {
        let mut value = String::new();
        append_string_unchecked(&mut value, "totally\ninvalid");
        assert_eq!("\"totally\ninvalid\"", &value);
    }

    fn format_test_number(number: Number) -> String {
        let mut formatted = String::new();
        append_number(&mut formatted, number);
        formatted
    }

    #[test]
    fn number_formatting() {
        assert_eq!("1", format_test_number(Number::PosInt(1)));
        assert_eq!("-1", format_test_number(Number::NegInt(-1)));
        assert_eq!("1", format_test_number(Number::NegInt(1)));
        assert_eq!("0.0", format_test_number(Number::Float(0.0)));
        assert_eq!("10000000000.0", format_test_number(Number::Float(1e10)));
        assert_eq!("-1.2", format_test_number(Number::Float(-1.2)));

        // matches serde_json for values JSON cannot represent
        assert_eq!(
            serde_json::to_string(&f64::NAN).unwrap(),
            format_test_number(Number::Float(f64::NAN))
        );
        assert_eq!(
            serde_json::to_string(&f64::INFINITY).unwrap(),
            format_test_number(Number::Float(f64::INFINITY))
        );
        assert_eq!(
            serde_json::to_string(&f64::NEG_INFINITY).unwrap(),
            format_test_number(Number::Float(f64::NEG_INFINITY))
        );
    }

    proptest! {
        #[test]
        fn matches_serde_json_pos_int_format(value: u64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::PosInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_neg_int_format(value: i64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::NegInt(value)),
            )
        }

        #[test]
        fn float_format_reads_back_exactly(value: f64) {
            let formatted = format_test_number(Number::Float(value));
            if value.is_finite() {
                assert!(serde_json::from_str::<serde_json::Value>(&formatted).unwrap().is_f64());
                assert_eq!(value, formatted.parse::<f64>().unwrap());
            } else {
                assert_eq!("null", formatted);
            }
        }
    }
}
