/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, Response};
use smithy_json::deserialize::token::skip_value;
use smithy_json::deserialize::{json_token_iter, Error as DeserializeError, Token};
use smithy_types::GenericError;
use std::borrow::Cow;

// Error codes may carry a namespace prefix (`aws.protocoltests#FooError`) and/or a trailing
// URL (`FooError:http://internal.amazon.com/coral/...`)
fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

struct ErrorBody<'a> {
    code: Option<Cow<'a, str>>,
    message: Option<Cow<'a, str>>,
    request_id: Option<Cow<'a, str>>,
}

fn parse_error_body(bytes: &[u8]) -> Result<ErrorBody, DeserializeError> {
    let mut tokens = json_token_iter(bytes).peekable();
    let (mut typ, mut code, mut message, mut request_id) = (None, None, None, None);
    if let Some(Token::StartObject { .. }) = tokens.next().transpose()? {
        loop {
            match tokens.next().transpose()? {
                Some(Token::EndObject { .. }) => break,
                Some(Token::ObjectKey { key, .. }) => {
                    if let Some(Ok(Token::ValueString { value, .. })) = tokens.peek() {
                        match key.as_escaped_str() {
                            "code" => code = Some(value.to_unescaped()?),
                            "__type" => typ = Some(value.to_unescaped()?),
                            "message" | "Message" | "errorMessage" => {
                                message = Some(value.to_unescaped()?)
                            }
                            "RequestID" | "RequestId" => request_id = Some(value.to_unescaped()?),
                            _ => {}
                        }
                    }
                    skip_value(&mut tokens)?;
                }
                _ => {
                    return Err(DeserializeError::custom(
                        "expected object key or end object",
                    ))
                }
            }
        }
        if tokens.next().is_some() {
            return Err(DeserializeError::custom(
                "found more JSON tokens after completing parsing",
            ));
        }
    }
    Ok(ErrorBody {
        code: code.or(typ),
        message,
        request_id,
    })
}

fn error_type_from_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
}

/// Extracts the error code, message and request id from a failed response.
///
/// The `x-amzn-ErrorType` header takes precedence over `code`/`__type` in the body, and the
/// request id headers take precedence over `RequestID` in the body.
pub fn parse_generic_error(response: &Response<Bytes>) -> Result<GenericError, DeserializeError> {
    let ErrorBody {
        code,
        message,
        request_id,
    } = parse_error_body(response.body().as_ref())?;

    let mut err_builder = GenericError::builder();
    match error_type_from_header(response.headers()).or_else(|| code.as_deref()) {
        Some(code) => {
            err_builder.code(sanitize_error_code(code));
        }
        None => tracing::trace!(
            status = %response.status(),
            "error response has no recognizable error code"
        ),
    }
    if let Some(message) = message {
        err_builder.message(message);
    }
    if let Some(request_id) =
        smithy_http::header::request_id(response.headers()).or_else(|| request_id.as_deref())
    {
        err_builder.request_id(request_id);
    }
    Ok(err_builder.build())
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_error_body, parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use smithy_types::GenericError;
    use std::borrow::Cow;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            GenericError::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn pinpoint_error_body() {
        let response = http::Response::builder()
            .status(404)
            .header("x-amzn-ErrorType", "NotFoundException:http://internal.amazon.com/coral/")
            .body(Bytes::from_static(
                br#"{"Message":"Resource not found","RequestID":"b1c2"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), Some("NotFoundException"));
        assert_eq!(err.message(), Some("Resource not found"));
        assert_eq!(err.request_id(), Some("b1c2"));
    }

    #[test]
    fn header_overrides_body_code() {
        let response = http::Response::builder()
            .header("X-Amzn-Errortype", "TooManyRequestsException")
            .body(Bytes::from_static(br#"{"code":"BadRequestException"}"#))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap().code(),
            Some("TooManyRequestsException")
        );
    }

    #[test]
    fn empty_body_has_no_code() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            GenericError::default()
        );
    }

    #[test]
    fn error_body_must_be_a_single_document() {
        assert!(parse_error_body(br#"{"code":"FooError"} {}"#).is_err());
        assert!(parse_error_body(br#"{"code": "#).is_err());
    }

    #[test]
    fn code_prefers_code_over_type() {
        let body = parse_error_body(br#"{"__type":"Bar","code":"Foo","extra":[1,{"a":null}]}"#)
            .unwrap();
        assert_eq!(body.code, Some(Cow::Borrowed("Foo")));
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
