/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use pinpoint::json_deser;
use pinpoint::json_ser;
use pinpoint::model::{
    Action, Activity, AddressConfiguration, ApnsMessage, AttributeDimension, AttributeType,
    BaseKpiResult, CampaignDateRangeKpiResponse, CampaignEmailMessage, CampaignEventFilter,
    CampaignHook, CampaignLimits, CampaignSmsMessage, ChannelType, DefaultMessage,
    DimensionType, DirectMessageConfiguration, Duration, EndpointBatchItem,
    EndpointBatchRequest, EndpointDemographic, EndpointLocation, EndpointSendConfiguration,
    EndpointUser, EventDimensions, FilterType, Frequency, GcmChannelRequest, GcmChannelResponse,
    GcmMessage, GpsCoordinates, GpsPointDimension, HoldoutActivity, JourneyResponse,
    JourneySchedule, Message, MessageConfiguration, MessageRequest, MessageType,
    MetricDimension, Mode, QuietTime, RandomSplitActivity, RandomSplitEntry, RecencyDimension,
    RecencyType, ResultRow, ResultRowValue, Schedule, SegmentBehaviors, SegmentDemographics,
    SegmentDimensions, SegmentLocation, SetDimension, SmsMessage, State, WriteCampaignRequest,
    WriteSegmentRequest, WriteTreatmentResource,
};
use pretty_assertions::assert_eq;
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_json::deserialize::json_token_iter;
use smithy_json::serialize::JsonObjectWriter;
use smithy_types::instant::Format;
use smithy_types::Instant;

/// Serializes `$value`, reads it back and asserts nothing was lost. Evaluates to the JSON text.
macro_rules! assert_round_trip {
    ($ser:path, $deser:path, $value:expr) => {{
        let value = $value;
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        $ser(&mut object, &value).expect("serializable");
        object.finish();
        let mut tokens = json_token_iter(out.as_bytes()).peekable();
        let parsed = $deser(&mut tokens)
            .expect("valid document")
            .expect("object");
        assert_eq!(parsed, value);
        out
    }};
}

fn write_gcm_channel_response(value: &GcmChannelResponse) -> String {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    json_ser::serialize_structure_crate_model_gcm_channel_response(&mut object, value)
        .expect("serializable");
    object.finish();
    out
}

fn read_gcm_channel_response(json: &str) -> Option<GcmChannelResponse> {
    let mut tokens = json_token_iter(json.as_bytes()).peekable();
    json_deser::deser_structure_crate_model_gcm_channel_response(&mut tokens)
        .expect("valid document")
}

#[test]
fn unset_fields_are_omitted() {
    let response = GcmChannelResponse::builder()
        .application_id("app1")
        .enabled(true)
        .build();
    let json = write_gcm_channel_response(&response);
    assert_eq!(json, r#"{"ApplicationId":"app1","Enabled":true}"#);

    let parsed = read_gcm_channel_response(&json).expect("object");
    assert_eq!(parsed.application_id.as_deref(), Some("app1"));
    assert_eq!(parsed.enabled, Some(true));
    assert_eq!(parsed.version, None);
    assert_eq!(parsed, response);
}

#[test]
fn fields_are_written_in_wire_name_order() {
    let response = GcmChannelResponse::builder()
        .version(3)
        .platform("GCM")
        .id("gcm")
        .has_credential(false)
        .creation_date("2021-01-01T00:00:00Z")
        .build();
    assert_eq!(
        write_gcm_channel_response(&response),
        r#"{"CreationDate":"2021-01-01T00:00:00Z","HasCredential":false,"Id":"gcm","Platform":"GCM","Version":3}"#
    );
}

#[test]
fn unknown_fields_are_skipped() {
    let parsed = read_gcm_channel_response(
        r#"{
            "ApplicationId": "app1",
            "NewField": {"nested": [1, 2, {"deeper": null}]},
            "AnotherOne": "x",
            "Version": 7
        }"#,
    )
    .expect("object");
    assert_eq!(
        parsed,
        GcmChannelResponse::builder()
            .application_id("app1")
            .version(7)
            .build()
    );
}

#[test]
fn scalars_where_an_object_is_expected_decode_to_none() {
    assert_eq!(read_gcm_channel_response("null"), None);
    assert_eq!(read_gcm_channel_response("\"channel\""), None);
    assert_eq!(read_gcm_channel_response("5"), None);
}

#[test]
fn array_where_an_object_is_expected_is_an_error() {
    let mut tokens = json_token_iter(b"[]").peekable();
    assert!(json_deser::deser_structure_crate_model_gcm_channel_response(&mut tokens).is_err());
}

#[test]
fn null_fields_decode_as_unset() {
    let parsed =
        read_gcm_channel_response(r#"{"ApplicationId":null,"Enabled":null,"Version":null}"#)
            .expect("object");
    assert_eq!(parsed, GcmChannelResponse::builder().build());
}

#[test]
fn mistyped_scalar_is_an_error() {
    let mut tokens = json_token_iter(br#"{"Version":"seven"}"#).peekable();
    assert!(json_deser::deser_structure_crate_model_gcm_channel_response(&mut tokens).is_err());
    let mut tokens = json_token_iter(br#"{"Version":5000000000}"#).peekable();
    assert!(json_deser::deser_structure_crate_model_gcm_channel_response(&mut tokens).is_err());
}

#[test]
fn gcm_message_round_trip() {
    let message = GcmMessage::builder()
        .action(Action::DeepLink)
        .body("Your order has shipped")
        .collapse_key("orders")
        .data("orderId", "o-123")
        .icon_reference("ic_box")
        .image_icon_url("https://example.com/icon.png")
        .image_url("https://example.com/image.png")
        .priority("high")
        .raw_content("{\"data\":{}}")
        .restricted_package_name("com.example.shop")
        .silent_push(false)
        .small_image_icon_url("https://example.com/small.png")
        .sound("default")
        .substitutions("name", vec!["Ana".to_string()])
        .time_to_live(3600)
        .title("Shipped")
        .url("shop://orders/o-123")
        .build();

    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    json_ser::serialize_structure_crate_model_gcm_message(&mut object, &message).unwrap();
    object.finish();

    assert_ok(validate_body(
        &out,
        r#"{
            "Action": "DEEP_LINK",
            "Body": "Your order has shipped",
            "CollapseKey": "orders",
            "Data": {"orderId": "o-123"},
            "IconReference": "ic_box",
            "ImageIconUrl": "https://example.com/icon.png",
            "ImageUrl": "https://example.com/image.png",
            "Priority": "high",
            "RawContent": "{\"data\":{}}",
            "RestrictedPackageName": "com.example.shop",
            "SilentPush": false,
            "SmallImageIconUrl": "https://example.com/small.png",
            "Sound": "default",
            "Substitutions": {"name": ["Ana"]},
            "TimeToLive": 3600,
            "Title": "Shipped",
            "Url": "shop://orders/o-123"
        }"#,
        MediaType::from("application/json"),
    ));

    let mut tokens = json_token_iter(out.as_bytes()).peekable();
    let parsed = json_deser::deser_structure_crate_model_gcm_message(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, message);
}

#[test]
fn journey_round_trip() {
    let journey = JourneyResponse::builder()
        .activities(
            "split",
            Activity::builder()
                .description("A/B")
                .random_split(
                    RandomSplitActivity::builder()
                        .branches(
                            RandomSplitEntry::builder()
                                .next_activity("holdout")
                                .percentage(50)
                                .build(),
                        )
                        .branches(RandomSplitEntry::builder().percentage(50).build())
                        .build(),
                )
                .build(),
        )
        .activities(
            "holdout",
            Activity::builder()
                .holdout(HoldoutActivity::builder().percentage(10).build())
                .build(),
        )
        .application_id("app1")
        .id("journey1")
        .local_time(true)
        .name("Welcome")
        .quiet_time(QuietTime::builder().start("22:00").end("07:00").build())
        .schedule(
            JourneySchedule::builder()
                .start_time(Instant::from_epoch_seconds(1_609_459_200))
                .end_time(Instant::from_str("2021-02-01T12:30:00.5Z", Format::DateTime).unwrap())
                .timezone("UTC")
                .build(),
        )
        .start_activity("split")
        .state(State::Active)
        .tags("team", "growth")
        .build();

    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    json_ser::serialize_structure_crate_model_journey_response(&mut object, &journey).unwrap();
    object.finish();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["Schedule"]["StartTime"], "2021-01-01T00:00:00Z");
    assert_eq!(value["Schedule"]["EndTime"], "2021-02-01T12:30:00.5Z");
    assert_eq!(value["State"], "ACTIVE");
    assert_eq!(
        value["Activities"]["split"]["RandomSplit"]["Branches"][0]["NextActivity"],
        "holdout"
    );

    let mut tokens = json_token_iter(out.as_bytes()).peekable();
    let parsed = json_deser::deser_structure_crate_model_journey_response(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed, journey);
}

#[test]
fn empty_collections_are_written() {
    let dimensions = SegmentDimensions::builder()
        .set_attributes(Some(Default::default()))
        .build();
    let set = SetDimension::builder().set_values(Some(vec![])).build();

    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    json_ser::serialize_structure_crate_model_segment_dimensions(&mut object, &dimensions)
        .unwrap();
    object.finish();
    assert_eq!(out, r#"{"Attributes":{}}"#);

    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    json_ser::serialize_structure_crate_model_set_dimension(&mut object, &set).unwrap();
    object.finish();
    assert_eq!(out, r#"{"Values":[]}"#);

    let mut tokens = json_token_iter(out.as_bytes()).peekable();
    let parsed = json_deser::deser_structure_crate_model_set_dimension(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed.values, Some(vec![]));
}

#[test]
fn null_collection_entries_are_dropped() {
    let mut tokens = json_token_iter(
        br#"{"Data":{"a":"1","b":null},"Substitutions":{"names":["Ana",null,"Bo"],"empty":null}}"#,
    )
    .peekable();
    let parsed = json_deser::deser_structure_crate_model_gcm_message(&mut tokens)
        .unwrap()
        .unwrap();
    let data = parsed.data.unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data["a"], "1");
    let substitutions = parsed.substitutions.unwrap();
    assert_eq!(substitutions.len(), 1);
    assert_eq!(substitutions["names"], vec!["Ana", "Bo"]);
}

#[test]
fn wrong_collection_kind_is_an_error() {
    let mut tokens = json_token_iter(br#"{"Values":{"a":"b"}}"#).peekable();
    assert!(json_deser::deser_structure_crate_model_set_dimension(&mut tokens).is_err());
    let mut tokens = json_token_iter(br#"{"Data":["a"]}"#).peekable();
    assert!(json_deser::deser_structure_crate_model_gcm_message(&mut tokens).is_err());
}

#[test]
fn scalar_collections_decode_to_none() {
    let mut tokens = json_token_iter(br#"{"Values":"INCLUSIVE"}"#).peekable();
    let parsed = json_deser::deser_structure_crate_model_set_dimension(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(parsed.values, None);
}

#[test]
fn unknown_enum_values_round_trip() {
    let mut tokens = json_token_iter(br#"{"ChannelType":"IN_APP"}"#).peekable();
    let parsed = json_deser::deser_structure_crate_model_address_configuration(&mut tokens)
        .unwrap()
        .unwrap();
    assert_eq!(
        parsed.channel_type,
        Some(ChannelType::Unknown("IN_APP".to_string()))
    );

    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    json_ser::serialize_structure_crate_model_address_configuration(&mut object, &parsed)
        .unwrap();
    object.finish();
    assert_eq!(out, r#"{"ChannelType":"IN_APP"}"#);
}

#[test]
fn enum_conversions() {
    assert_eq!(ChannelType::from("APNS_VOIP_SANDBOX"), ChannelType::ApnsVoipSandbox);
    assert_eq!(ChannelType::ApnsVoipSandbox.as_str(), "APNS_VOIP_SANDBOX");
    assert_eq!("EMAIL".parse::<ChannelType>(), Ok(ChannelType::Email));
    assert!(ChannelType::values().contains(&"BAIDU"));
    assert_eq!(Action::Url.as_ref(), "URL");
}

#[test]
fn escaped_strings_round_trip() {
    let response = GcmChannelResponse::builder()
        .last_modified_by("line\nbreak \"quoted\" \u{1F600}")
        .build();
    let json = write_gcm_channel_response(&response);
    assert_eq!(
        json,
        "{\"LastModifiedBy\":\"line\\nbreak \\\"quoted\\\" \u{1F600}\"}"
    );
    assert_eq!(read_gcm_channel_response(&json), Some(response));
}

#[test]
fn secrets_are_redacted() {
    let request = GcmChannelRequest::builder()
        .api_key("AIzaSySecret")
        .enabled(true)
        .build();
    let debug = format!("{:?}", request);
    assert!(!debug.contains("AIzaSySecret"));
    assert!(debug.contains("*** Sensitive Data Redacted ***"));
    assert!(debug.contains("enabled: Some(true)"));

    let builder = GcmChannelRequest::builder().api_key("AIzaSySecret");
    assert!(!format!("{:?}", builder).contains("AIzaSySecret"));

    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    json_ser::serialize_structure_crate_model_gcm_channel_request(&mut object, &request).unwrap();
    object.finish();
    assert_eq!(out, r#"{"ApiKey":"AIzaSySecret","Enabled":true}"#);
}

fn push_message(title: &str) -> Message {
    Message::builder()
        .action(Action::OpenApp)
        .body("Spring sale starts today")
        .image_icon_url("https://example.com/icon.png")
        .image_small_icon_url("https://example.com/small.png")
        .image_url("https://example.com/image.png")
        .json_body("{\"sale\":true}")
        .media_url("https://example.com/clip.mp4")
        .raw_content("{\"notification\":{}}")
        .silent_push(true)
        .time_to_live(600)
        .title(title)
        .url("shop://sale")
        .build()
}

fn campaign_messages() -> MessageConfiguration {
    MessageConfiguration::builder()
        .adm_message(push_message("adm"))
        .apns_message(push_message("apns"))
        .baidu_message(push_message("baidu"))
        .default_message(push_message("default"))
        .email_message(
            CampaignEmailMessage::builder()
                .body("Plain text")
                .from_address("sales@example.com")
                .html_body("<p>Rich text</p>")
                .title("Spring sale")
                .build(),
        )
        .gcm_message(push_message("gcm"))
        .sms_message(
            CampaignSmsMessage::builder()
                .body("Sale today")
                .message_type(MessageType::Promotional)
                .sender_id("SHOP")
                .build(),
        )
        .build()
}

fn event_schedule() -> Schedule {
    Schedule::builder()
        .end_time("2021-06-01T00:00:00Z")
        .event_filter(
            CampaignEventFilter::builder()
                .dimensions(
                    EventDimensions::builder()
                        .attributes(
                            "plan",
                            AttributeDimension::builder()
                                .attribute_type(AttributeType::Exclusive)
                                .values("free")
                                .values("trial")
                                .build(),
                        )
                        .event_type(
                            SetDimension::builder()
                                .dimension_type(DimensionType::Inclusive)
                                .values("purchase")
                                .build(),
                        )
                        .metrics(
                            "cart_total",
                            MetricDimension::builder()
                                .comparison_operator("GREATER_THAN")
                                .value(49.75)
                                .build(),
                        )
                        .build(),
                )
                .filter_type(FilterType::Endpoint)
                .build(),
        )
        .frequency(Frequency::Event)
        .is_local_time(true)
        .quiet_time(QuietTime::builder().start("22:00").end("07:00").build())
        .start_time("2021-05-01T00:00:00Z")
        .timezone("UTC-08")
        .build()
}

#[test]
fn write_campaign_request_round_trip() {
    let request = WriteCampaignRequest::builder()
        .additional_treatments(
            WriteTreatmentResource::builder()
                .message_configuration(campaign_messages())
                .schedule(Schedule::builder().frequency(Frequency::Once).build())
                .size_percent(20)
                .treatment_description("Early access")
                .treatment_name("B")
                .build(),
        )
        .description("Seasonal promotion")
        .holdout_percent(5)
        .hook(
            CampaignHook::builder()
                .lambda_function_name("filterRecipients")
                .mode(Mode::Filter)
                .web_url("https://hooks.example.com/campaign")
                .build(),
        )
        .is_paused(false)
        .limits(
            CampaignLimits::builder()
                .daily(1000)
                .maximum_duration(60)
                .messages_per_second(50)
                .total(5000)
                .build(),
        )
        .message_configuration(campaign_messages())
        .name("Spring sale")
        .schedule(event_schedule())
        .segment_id("seg1")
        .segment_version(3)
        .tags("team", "growth")
        .treatment_description("Control")
        .treatment_name("A")
        .build();

    let json = assert_round_trip!(
        json_ser::serialize_structure_crate_model_write_campaign_request,
        json_deser::deser_structure_crate_model_write_campaign_request,
        request
    );
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tags"]["team"], "growth");
    assert!(value.get("Tags").is_none());
    assert_eq!(
        value["Schedule"]["EventFilter"]["Dimensions"]["Metrics"]["cart_total"]["Value"],
        49.75
    );
    assert_eq!(value["MessageConfiguration"]["SMSMessage"]["MessageType"], "PROMOTIONAL");
    assert_eq!(value["AdditionalTreatments"][0]["Schedule"]["Frequency"], "ONCE");
}

#[test]
fn write_segment_request_round_trip() {
    let set = |value: &str| SetDimension::builder().values(value).build();
    let request = WriteSegmentRequest::builder()
        .dimensions(
            SegmentDimensions::builder()
                .attributes(
                    "plan",
                    AttributeDimension::builder()
                        .attribute_type(AttributeType::Inclusive)
                        .values("pro")
                        .build(),
                )
                .behavior(
                    SegmentBehaviors::builder()
                        .recency(
                            RecencyDimension::builder()
                                .duration(Duration::Day7)
                                .recency_type(RecencyType::Inactive)
                                .build(),
                        )
                        .build(),
                )
                .demographic(
                    SegmentDemographics::builder()
                        .app_version(set("2.1.0"))
                        .channel(set("GCM"))
                        .device_type(set("PHONE"))
                        .make(set("Pixel"))
                        .model(set("6"))
                        .platform(
                            SetDimension::builder()
                                .dimension_type(DimensionType::Exclusive)
                                .values("ios")
                                .values("web")
                                .build(),
                        )
                        .build(),
                )
                .location(
                    SegmentLocation::builder()
                        .country(set("US"))
                        .gps_point(
                            GpsPointDimension::builder()
                                .coordinates(
                                    GpsCoordinates::builder()
                                        .latitude(47.625)
                                        .longitude(-122.3125)
                                        .build(),
                                )
                                .range_in_kilometers(10.5)
                                .build(),
                        )
                        .build(),
                )
                .metrics(
                    "sessions",
                    MetricDimension::builder()
                        .comparison_operator("GREATER_THAN_OR_EQUAL")
                        .value(3.0)
                        .build(),
                )
                .metrics(
                    "spend",
                    MetricDimension::builder()
                        .comparison_operator("LESS_THAN")
                        .value(0.1)
                        .build(),
                )
                .user_attributes(
                    "tier",
                    AttributeDimension::builder().values("gold").build(),
                )
                .build(),
        )
        .name("Active spenders")
        .tags("owner", "analytics")
        .build();

    let json = assert_round_trip!(
        json_ser::serialize_structure_crate_model_write_segment_request,
        json_deser::deser_structure_crate_model_write_segment_request,
        request
    );
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let gps_point = &value["Dimensions"]["Location"]["GPSPoint"];
    assert_eq!(gps_point["Coordinates"]["Longitude"], -122.3125);
    assert_eq!(gps_point["RangeInKilometers"], 10.5);
    assert_eq!(value["Dimensions"]["Behavior"]["Recency"]["Duration"], "DAY_7");
    assert_eq!(value["tags"]["owner"], "analytics");
}

#[test]
fn message_request_round_trip() {
    let request = MessageRequest::builder()
        .addresses(
            "+12065550100",
            AddressConfiguration::builder()
                .body_override("Your code is 1234")
                .channel_type(ChannelType::Sms)
                .context("purpose", "otp")
                .raw_content("{}")
                .substitutions("code", vec!["1234".to_string()])
                .title_override("Verification")
                .build(),
        )
        .addresses(
            "user@example.com",
            AddressConfiguration::builder()
                .channel_type(ChannelType::Email)
                .build(),
        )
        .context("campaign", "otp")
        .endpoints(
            "endpoint-1",
            EndpointSendConfiguration::builder()
                .body_override("Hello again")
                .context("locale", "en-US")
                .raw_content("{\"aps\":{}}")
                .substitutions("name", vec!["Ana".to_string(), "Bo".to_string()])
                .title_override("Welcome back")
                .build(),
        )
        .message_configuration(
            DirectMessageConfiguration::builder()
                .apns_message(
                    ApnsMessage::builder()
                        .action(Action::Url)
                        .badge(2)
                        .body("New message")
                        .category("chat")
                        .collapse_id("thread-9")
                        .data("threadId", "9")
                        .media_url("https://example.com/a.jpg")
                        .preferred_authentication_method("TOKEN")
                        .priority("10")
                        .raw_content("{\"aps\":{\"alert\":\"hi\"}}")
                        .silent_push(false)
                        .sound("ping.aiff")
                        .substitutions("sender", vec!["Bo".to_string()])
                        .thread_id("9")
                        .time_to_live(120)
                        .title("Chat")
                        .url("chat://9")
                        .build(),
                )
                .default_message(
                    DefaultMessage::builder()
                        .body("Hello {{name}}")
                        .substitutions("name", vec!["friend".to_string()])
                        .build(),
                )
                .gcm_message(
                    GcmMessage::builder()
                        .action(Action::OpenApp)
                        .body("New message")
                        .collapse_key("chat")
                        .priority("high")
                        .time_to_live(120)
                        .build(),
                )
                .sms_message(
                    SmsMessage::builder()
                        .body("Your code is 1234")
                        .keyword("OTP")
                        .message_type(MessageType::Transactional)
                        .origination_number("+12065550199")
                        .sender_id("SHOP")
                        .substitutions("code", vec!["1234".to_string()])
                        .build(),
                )
                .build(),
        )
        .trace_id("trace-1")
        .build();

    let json = assert_round_trip!(
        json_ser::serialize_structure_crate_model_message_request,
        json_deser::deser_structure_crate_model_message_request,
        request
    );
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Addresses"]["+12065550100"]["ChannelType"], "SMS");
    assert_eq!(value["Endpoints"]["endpoint-1"]["Substitutions"]["name"][1], "Bo");
    assert_eq!(value["MessageConfiguration"]["APNSMessage"]["Badge"], 2);
}

#[test]
fn endpoint_batch_request_round_trip() {
    let request = EndpointBatchRequest::builder()
        .item(
            EndpointBatchItem::builder()
                .address("device-token")
                .attributes("interests", vec!["shoes".to_string(), "hats".to_string()])
                .channel_type(ChannelType::Gcm)
                .demographic(
                    EndpointDemographic::builder()
                        .app_version("2.1.0")
                        .locale("en_US")
                        .make("Google")
                        .model("Pixel")
                        .model_version("6")
                        .platform("android")
                        .platform_version("12")
                        .timezone("America/Los_Angeles")
                        .build(),
                )
                .effective_date("2021-05-01T00:00:00Z")
                .endpoint_status("ACTIVE")
                .id("endpoint-1")
                .location(
                    EndpointLocation::builder()
                        .city("Seattle")
                        .country("USA")
                        .latitude(47.625)
                        .longitude(-122.3125)
                        .postal_code("98101")
                        .region("WA")
                        .build(),
                )
                .metrics("sessions", 12.0)
                .metrics("spend", 99.5)
                .opt_out("NONE")
                .request_id("req-1")
                .user(
                    EndpointUser::builder()
                        .user_attributes("plan", vec!["pro".to_string()])
                        .user_id("user-1")
                        .build(),
                )
                .build(),
        )
        .item(
            EndpointBatchItem::builder()
                .address("user@example.com")
                .channel_type(ChannelType::Email)
                .id("endpoint-2")
                .build(),
        )
        .build();

    let json = assert_round_trip!(
        json_ser::serialize_structure_crate_model_endpoint_batch_request,
        json_deser::deser_structure_crate_model_endpoint_batch_request,
        request
    );
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Item"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["Item"][0]["Metrics"]["spend"], 99.5);
    assert_eq!(value["Item"][1]["ChannelType"], "EMAIL");
}

#[test]
fn campaign_date_range_kpi_response_round_trip() {
    let row = |date: &str, count: &str| {
        ResultRow::builder()
            .grouped_bys(
                ResultRowValue::builder()
                    .key("Date")
                    .r#type("String")
                    .value(date)
                    .build(),
            )
            .values(
                ResultRowValue::builder()
                    .key("UniqueDeliveries")
                    .r#type("Double")
                    .value(count)
                    .build(),
            )
            .build()
    };
    let response = CampaignDateRangeKpiResponse::builder()
        .application_id("app1")
        .campaign_id("c1")
        .end_time(Instant::from_fractional_seconds(1_576_626_498, 0.25))
        .kpi_name("unique-deliveries")
        .kpi_result(
            BaseKpiResult::builder()
                .rows(row("2019-12-16", "120.0"))
                .rows(row("2019-12-17", "98.0"))
                .build(),
        )
        .next_token("page-2")
        .start_time(Instant::from_epoch_seconds(1_576_540_098))
        .build();

    let json = assert_round_trip!(
        json_ser::serialize_structure_crate_model_campaign_date_range_kpi_response,
        json_deser::deser_structure_crate_model_campaign_date_range_kpi_response,
        response
    );
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["StartTime"], "2019-12-16T23:48:18Z");
    assert_eq!(value["EndTime"], "2019-12-17T23:48:18.25Z");
    assert_eq!(value["KpiResult"]["Rows"][1]["GroupedBys"][0]["Value"], "2019-12-17");
    assert_eq!(value["KpiResult"]["Rows"][0]["Values"][0]["Type"], "Double");
}
