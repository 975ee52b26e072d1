/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::result::{SdkError, SdkSuccess};
use bytes::Bytes;
use http::Response;

/// Parses a fully loaded HTTP response into an operation's output or error.
///
/// Every operation in this client reads the complete body before parsing, so there is no
/// streaming counterpart.
pub trait ParseStrictResponse {
    /// For request/response style operations, this is typically something like:
    /// `Result<GetAppOutput, GetAppError>`
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

/// Runs `handler` over `response` and wraps the result along with the raw response.
pub fn parse_response<H, O, E>(
    handler: &H,
    response: Response<Bytes>,
) -> Result<SdkSuccess<O>, SdkError<E>>
where
    H: ParseStrictResponse<Output = Result<O, E>>,
{
    let parsed = handler.parse(&response);
    tracing::debug!(status = %response.status(), success = parsed.is_ok(), "parsed response");
    match parsed {
        Ok(parsed) => Ok(SdkSuccess {
            raw: response,
            parsed,
        }),
        Err(err) => Err(SdkError::ServiceError { raw: response, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::response::{parse_response, ParseStrictResponse};
    use crate::result::SdkError;
    use bytes::Bytes;
    use http::Response;

    struct StatusOnly;

    impl ParseStrictResponse for StatusOnly {
        type Output = Result<u16, String>;

        fn parse(&self, response: &Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(response.status().as_u16())
            } else {
                Err(String::from_utf8_lossy(response.body()).into())
            }
        }
    }

    #[test]
    fn success_keeps_raw_response() {
        let response = Response::builder()
            .status(202)
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        let success = parse_response(&StatusOnly, response).unwrap();
        assert_eq!(success.parsed, 202);
        assert_eq!(success.raw.body().as_ref(), b"{}");
    }

    #[test]
    fn failure_is_service_error() {
        let response = Response::builder()
            .status(404)
            .body(Bytes::from_static(b"missing"))
            .unwrap();
        match parse_response(&StatusOnly, response) {
            Err(SdkError::ServiceError { raw, err }) => {
                assert_eq!(raw.status(), 404);
                assert_eq!(err, "missing");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
