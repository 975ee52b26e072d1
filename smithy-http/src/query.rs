/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values and building HTTP query strings

use crate::urlencode::BASE_SET;
use percent_encoding::utf8_percent_encode;
use smithy_types::instant::{DateTimeFormatError, Format};
use smithy_types::Instant;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> Result<String, DateTimeFormatError> {
    Ok(fmt_string(t.fmt(format)?))
}

/// Simple abstraction to enable appending params to a string as query params
///
/// ```rust
/// use smithy_http::query::Writer;
/// let mut s = String::from("/v1/apps/app1/campaigns");
/// let mut q = Writer::new(&mut s);
/// q.push_kv("page-size", "5");
/// q.push_kv("token", "abc");
/// assert_eq!(s, "/v1/apps/app1/campaigns?page-size=5&token=abc");
/// ```
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Writer { out, prefix: '?' }
    }

    /// Appends `k=v`. Both are expected to be encoded already.
    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(k);
        self.out.push('=');
        self.out.push_str(v);
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, fmt_timestamp, Writer};
    use http::Uri;
    use proptest::proptest;
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=;,").as_str(), "%26%3D%3B%2C");
        assert_eq!(fmt_string("-._~").as_str(), "-._~");
    }

    #[test]
    fn writer() {
        let mut out = String::from("/v1/apps/a/jobs/import");
        let mut writer = Writer::new(&mut out);
        writer.push_kv("page-size", "5");
        writer.push_kv("token", &fmt_string("a b"));
        assert_eq!(out, "/v1/apps/a/jobs/import?page-size=5&token=a%20b");
    }

    #[test]
    fn timestamps() {
        assert_eq!(
            fmt_timestamp(&Instant::from_epoch_seconds(1576540098), Format::DateTime).unwrap(),
            "2019-12-16T23%3A48%3A18Z"
        );
        assert_eq!(
            fmt_timestamp(&Instant::from_epoch_seconds(1576540098), Format::EpochSeconds).unwrap(),
            "1576540098"
        );
    }

    proptest! {
        #[test]
        fn test_encode_request(s: String) {
            let _: Uri = format!("http://host.example.com/?{}", fmt_string(s)).parse().expect("all strings should be encoded properly");
        }
    }
}
