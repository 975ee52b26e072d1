/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;
use pinpoint::error::{GetCampaignError, GetCampaignErrorKind, NotFoundException};
use pinpoint::model::{CampaignState, CampaignStatus};
use pinpoint::operation::{DeleteCampaign, GetCampaign, GetSegments};
use pretty_assertions::assert_eq;
use smithy_http::response::{parse_response, ParseStrictResponse};
use smithy_http::result::SdkError;

fn response(status: u16, body: &'static str) -> Response<Bytes> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

fn get_campaign_error(response: Response<Bytes>) -> GetCampaignError {
    match parse_response(&GetCampaign::new(), response) {
        Err(SdkError::ServiceError { err, .. }) => err,
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[test]
fn get_campaign_success() {
    let raw = response(
        200,
        r#"{
            "ApplicationId": "app1",
            "Id": "c1",
            "HoldoutPercent": 5,
            "IsPaused": false,
            "Name": "Spring sale",
            "SegmentVersion": 2,
            "State": {"CampaignStatus": "PENDING_NEXT_RUN"},
            "tags": {"team": "growth"},
            "FutureField": [true, false]
        }"#,
    );
    let success = parse_response(&GetCampaign::new(), raw).expect("successful response");
    let campaign = success.parsed.campaign_response.expect("payload is present");
    assert_eq!(campaign.application_id.as_deref(), Some("app1"));
    assert_eq!(campaign.id.as_deref(), Some("c1"));
    assert_eq!(campaign.holdout_percent, Some(5));
    assert_eq!(campaign.is_paused, Some(false));
    assert_eq!(campaign.segment_version, Some(2));
    assert_eq!(
        campaign.state,
        Some(
            CampaignState::builder()
                .campaign_status(CampaignStatus::PendingNextRun)
                .build()
        )
    );
    assert_eq!(campaign.tags.unwrap()["team"], "growth");
    assert_eq!(campaign.version, None);
    assert_eq!(success.raw.status(), 200);
}

#[test]
fn empty_success_body_has_no_payload() {
    let output = GetCampaign::new()
        .parse(&response(200, ""))
        .expect("empty bodies are allowed");
    assert_eq!(output.campaign_response, None);

    let output = DeleteCampaign::new()
        .parse(&response(202, "  "))
        .expect("whitespace bodies are allowed");
    assert_eq!(output.campaign_response, None);
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = GetCampaign::new()
        .parse(&response(200, r#"{"Id":"c1"} {"Id":"c2"}"#))
        .expect_err("two documents");
    assert!(matches!(err.kind, GetCampaignErrorKind::Unhandled(_)));
}

#[test]
fn malformed_success_body_is_unhandled() {
    let err = GetCampaign::new()
        .parse(&response(200, r#"{"Id": "#))
        .expect_err("truncated body");
    assert!(matches!(err.kind, GetCampaignErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
}

#[test]
fn list_payload() {
    let output = GetSegments::new()
        .parse(&response(
            200,
            r#"{"Item":[{"Id":"s1","Name":"Everyone"},null,{"Id":"s2"}],"NextToken":"n"}"#,
        ))
        .unwrap();
    let segments = output.segments_response.unwrap();
    let ids: Vec<_> = segments
        .item
        .unwrap()
        .into_iter()
        .map(|segment| segment.id.unwrap())
        .collect();
    assert_eq!(ids, vec!["s1", "s2"]);
    assert_eq!(segments.next_token.as_deref(), Some("n"));
}

#[test]
fn modeled_error() {
    let raw = Response::builder()
        .status(404)
        .header("x-amzn-ErrorType", "NotFoundException")
        .header("x-amzn-RequestId", "from-header")
        .body(Bytes::from_static(
            br#"{"Message":"Resource not found","RequestID":"from-body"}"#,
        ))
        .unwrap();
    let err = get_campaign_error(raw);
    assert!(err.is_not_found_exception());
    assert!(!err.is_bad_request_exception());
    assert_eq!(err.code(), Some("NotFoundException"));
    assert_eq!(err.message(), Some("Resource not found"));
    assert_eq!(err.request_id(), Some("from-header"));
    assert_eq!(err.to_string(), "NotFoundException: Resource not found");
    match &err.kind {
        GetCampaignErrorKind::NotFoundException(inner) => {
            assert_eq!(
                inner,
                &NotFoundException::builder()
                    .message("Resource not found")
                    .request_id("from-body")
                    .build()
            );
            assert_eq!(inner.message(), Some("Resource not found"));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn error_code_from_body() {
    let err = get_campaign_error(response(
        429,
        r#"{"__type":"aws.pinpoint#TooManyRequestsException","message":"slow down"}"#,
    ));
    assert!(err.is_too_many_requests_exception());
    assert_eq!(err.message(), Some("slow down"));
}

#[test]
fn unknown_error_code_is_generic() {
    let err = get_campaign_error(response(
        409,
        r#"{"code":"ConflictException","Message":"already exists","RequestID":"r-1"}"#,
    ));
    assert!(matches!(err.kind, GetCampaignErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("ConflictException"));
    assert_eq!(err.message(), Some("already exists"));
    assert_eq!(err.request_id(), Some("r-1"));
}

#[test]
fn missing_error_code_is_unhandled() {
    let err = get_campaign_error(response(500, ""));
    assert!(matches!(err.kind, GetCampaignErrorKind::Unhandled(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), None);
}

#[test]
fn malformed_modeled_error_body_is_unhandled() {
    let raw = Response::builder()
        .status(400)
        .header("x-amzn-ErrorType", "BadRequestException")
        .body(Bytes::from_static(br#"{"Message": 5}"#))
        .unwrap();
    let err = get_campaign_error(raw);
    assert!(!err.is_bad_request_exception());
    assert!(matches!(err.kind, GetCampaignErrorKind::Unhandled(_)));
}

#[test]
fn deeply_nested_unknown_member_is_an_error() {
    let body = format!(r#"{{"Id":"c1","Extra":{}"#, "[".repeat(100_000));
    let raw = Response::builder()
        .status(200)
        .body(Bytes::from(body.clone()))
        .unwrap();
    let err = GetCampaign::new().parse(&raw).expect_err("unterminated nesting");
    assert!(matches!(err.kind, GetCampaignErrorKind::Unhandled(_)));

    let raw = Response::builder()
        .status(400)
        .header("x-amzn-ErrorType", "BadRequestException")
        .body(Bytes::from(body))
        .unwrap();
    let err = get_campaign_error(raw);
    assert!(matches!(err.kind, GetCampaignErrorKind::Unhandled(_)));
}

#[test]
fn deeply_nested_unknown_member_is_skipped() {
    let depth = 100_000;
    let body = format!(
        r#"{{"Extra":{}{},"Id":"c1"}}"#,
        "[".repeat(depth),
        "]".repeat(depth)
    );
    let raw = Response::builder()
        .status(200)
        .body(Bytes::from(body))
        .unwrap();
    let output = GetCampaign::new().parse(&raw).expect("valid body");
    assert_eq!(
        output.campaign_response.and_then(|campaign| campaign.id),
        Some("c1".to_string())
    );
}
