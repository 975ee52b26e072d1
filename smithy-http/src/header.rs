/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Header helpers shared by the generated request builders

use http::header::{HeaderName, HeaderValue};

/// Sets `key` to `value` unless the builder already carries a value for `key`.
pub fn set_header_if_absent(
    mut builder: http::request::Builder,
    key: HeaderName,
    value: HeaderValue,
) -> http::request::Builder {
    if let Some(headers) = builder.headers_mut() {
        if !headers.contains_key(&key) {
            headers.insert(key, value);
        }
    }
    builder
}

/// Extracts a request ID from HTTP response headers
pub fn request_id(headers: &http::HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod test {
    use crate::header::{request_id, set_header_if_absent};
    use http::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn sets_missing_header() {
        let builder = set_header_if_absent(
            http::Request::builder(),
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        let request = builder.body(()).unwrap();
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-amz-json-1.0"
        );
    }

    #[test]
    fn keeps_existing_header() {
        let builder = http::Request::builder().header(CONTENT_TYPE, "application/json");
        let builder = set_header_if_absent(
            builder,
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        let request = builder.body(()).unwrap();
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(request.headers().get_all(CONTENT_TYPE).iter().count(), 1);
    }

    #[test]
    fn request_id_headers() {
        let response = http::Response::builder()
            .header("x-amz-request-id", "fallback")
            .body(())
            .unwrap();
        assert_eq!(request_id(response.headers()), Some("fallback"));

        let response = http::Response::builder()
            .header("x-amzn-requestid", "primary")
            .header("x-amz-request-id", "fallback")
            .body(())
            .unwrap();
        assert_eq!(request_id(response.headers()), Some("primary"));
        assert_eq!(request_id(&http::HeaderMap::new()), None);
    }
}
