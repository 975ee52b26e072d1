/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as HTTP path labels

use crate::urlencode::BASE_SET;
use percent_encoding::AsciiSet;

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

/// Percent-encodes `t` for substitution into a path template.
///
/// A greedy label may span several path segments, so `/` is left as-is.
pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    percent_encoding::utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;

    #[test]
    fn plain_labels_are_unchanged() {
        assert_eq!(fmt_string("app1", false), "app1");
        assert_eq!(fmt_string("", false), "");
        assert_eq!(
            fmt_string("6bd8f3b0-b7d4-41b4-9b2d-1d5c9e9f0f1a", false),
            "6bd8f3b0-b7d4-41b4-9b2d-1d5c9e9f0f1a"
        );
    }

    #[test]
    fn reserved_characters_are_encoded() {
        assert_eq!(fmt_string("a/b", false), "a%2Fb");
        assert_eq!(fmt_string("a/b", true), "a/b");
        assert_eq!(fmt_string("my campaign", false), "my%20campaign");
        assert_eq!(fmt_string("50%", false), "50%25");
        assert_eq!(fmt_string("?x=y&z", false), "%3Fx%3Dy%26z");
        assert_eq!(fmt_string("é", false), "%C3%A9");
    }
}
