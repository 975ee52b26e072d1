/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Uri;
use pinpoint::input::{
    CreateCampaignInput, DeleteCampaignInput, GetCampaignActivitiesInput,
    GetCampaignDateRangeKpiInput, GetSegmentsInput, UpdateGcmChannelInput,
};
use pinpoint::model::GcmChannelRequest;
use pinpoint::{Config, Endpoint, Region};
use pretty_assertions::assert_eq;
use protocol_test_helpers::{
    assert_ok, forbid_query_params, validate_body, validate_headers, validate_query_string,
    MediaType,
};
use smithy_http::operation::BuildError;
use smithy_types::Instant;

fn config() -> Config {
    Config::builder().region(Region::new("us-west-2")).build()
}

#[test]
fn update_gcm_channel_request() {
    let input = UpdateGcmChannelInput::builder()
        .application_id("app1")
        .gcm_channel_request(
            GcmChannelRequest::builder()
                .api_key("key")
                .enabled(true)
                .build(),
        )
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    let http_request = op.request().http();

    assert_eq!(http_request.method(), "PUT");
    assert_eq!(
        http_request.uri(),
        &Uri::from_static("https://pinpoint.us-west-2.amazonaws.com/v1/apps/app1/channels/gcm")
    );
    assert_ok(validate_headers(
        http_request,
        &[
            ("content-type", "application/x-amz-json-1.0"),
            ("content-length", "31"),
        ],
    ));
    let body = http_request.body().bytes().expect("body should be strict");
    assert_ok(validate_body(
        body,
        r#"{"ApiKey": "key", "Enabled": true}"#,
        MediaType::from("application/json"),
    ));
    assert_eq!(body, br#"{"ApiKey":"key","Enabled":true}"#);
}

#[test]
fn missing_payload_sends_empty_body() {
    let input = CreateCampaignInput::builder()
        .application_id("app1")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    let http_request = op.request().http();
    assert_eq!(http_request.method(), "POST");
    assert_eq!(http_request.uri().path(), "/v1/apps/app1/campaigns");
    assert_eq!(http_request.body().bytes(), Some(&b""[..]));
    assert_ok(validate_headers(http_request, &[("content-length", "0")]));
}

#[test]
fn query_parameters() {
    let input = GetCampaignActivitiesInput::builder()
        .application_id("app1")
        .campaign_id("c1")
        .page_size("10")
        .token("next page")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    let http_request = op.request().http();
    assert_eq!(http_request.method(), "GET");
    assert_eq!(
        http_request.uri().path(),
        "/v1/apps/app1/campaigns/c1/activities"
    );
    assert_ok(validate_query_string(
        http_request,
        &["page-size=10", "token=next%20page"],
    ));
}

#[test]
fn unset_query_parameters_are_omitted() {
    let input = GetSegmentsInput::builder()
        .application_id("app1")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    let http_request = op.request().http();
    assert_ok(forbid_query_params(http_request, &["page-size", "token"]));
    assert_eq!(http_request.uri().query(), None);
}

#[test]
fn timestamp_query_parameters() {
    let input = GetCampaignDateRangeKpiInput::builder()
        .application_id("app1")
        .campaign_id("c1")
        .kpi_name("unique-deliveries")
        .start_time(Instant::from_epoch_seconds(1576540098))
        .end_time(Instant::from_fractional_seconds(1576626498, 0.5))
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    let http_request = op.request().http();
    assert_eq!(
        http_request.uri().path(),
        "/v1/apps/app1/campaigns/c1/kpis/daterange/unique-deliveries"
    );
    assert_ok(validate_query_string(
        http_request,
        &[
            "start-time=2019-12-16T23%3A48%3A18Z",
            "end-time=2019-12-17T23%3A48%3A18.5Z",
        ],
    ));
    assert_ok(forbid_query_params(http_request, &["next-token", "page-size"]));
}

#[test]
fn timestamp_outside_date_time_range_is_a_build_error() {
    let input = GetCampaignDateRangeKpiInput::builder()
        .application_id("app1")
        .campaign_id("c1")
        .kpi_name("k")
        .start_time(Instant::from_epoch_seconds(i64::MAX))
        .build()
        .unwrap();
    match input.make_operation(&config()) {
        Err(BuildError::SerializationError { operation, .. }) => {
            assert_eq!(operation, "GetCampaignDateRangeKpi")
        }
        other => panic!("expected a serialization error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn labels_are_percent_encoded() {
    let input = DeleteCampaignInput::builder()
        .application_id("my app/1")
        .campaign_id("c:1")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    assert_eq!(
        op.request().http().uri().path(),
        "/v1/apps/my%20app%2F1/campaigns/c%3A1"
    );
}

#[test]
fn missing_label_is_empty() {
    let input = DeleteCampaignInput::builder()
        .campaign_id("c1")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    assert_eq!(op.request().http().uri().path(), "/v1/apps//campaigns/c1");
}

#[test]
fn bodiless_operations_have_no_content_headers() {
    let input = DeleteCampaignInput::builder()
        .application_id("app1")
        .campaign_id("c1")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    let http_request = op.request().http();
    assert_eq!(http_request.method(), "DELETE");
    assert!(http_request.headers().get("content-length").is_none());
    assert!(http_request.headers().get("content-type").is_none());
    assert_eq!(http_request.body().bytes(), Some(&b""[..]));
}

#[test]
fn operation_metadata_and_properties() {
    let input = DeleteCampaignInput::builder()
        .application_id("app1")
        .campaign_id("c1")
        .build()
        .unwrap();
    let op = input.make_operation(&config()).expect("valid operation");
    let metadata = op.metadata().expect("metadata is set");
    assert_eq!(metadata.name(), "DeleteCampaign");
    assert_eq!(metadata.service(), "pinpoint");
    assert_eq!(
        op.request().config().get::<Region>(),
        Some(&Region::new("us-west-2"))
    );
}

#[test]
fn endpoint_override_keeps_path_and_query() {
    let conf = Config::builder()
        .endpoint_resolver(Endpoint::new(Uri::from_static("http://localhost:8080")))
        .build();
    let input = GetCampaignActivitiesInput::builder()
        .application_id("app1")
        .campaign_id("c1")
        .page_size("5")
        .build()
        .unwrap();
    let op = input.make_operation(&conf).expect("valid operation");
    assert_eq!(
        op.request().http().uri(),
        &Uri::from_static("http://localhost:8080/v1/apps/app1/campaigns/c1/activities?page-size=5")
    );
}

#[test]
fn inputs_can_be_reused() {
    let input = GetCampaignActivitiesInput::builder()
        .application_id("app1")
        .campaign_id("c1")
        .build()
        .unwrap();
    let first = input.make_operation(&config()).expect("valid operation");
    let second = input.make_operation(&config()).expect("valid operation");
    assert_eq!(first.request().http().uri(), second.request().http().uri());
}
