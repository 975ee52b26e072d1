/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_structure_crate_model_activities_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ActivitiesResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.item {
        let mut array_2 = object.key("Item").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_activity_response(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.next_token {
        object.key("NextToken").string(var_5);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_activity(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Activity,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.description {
        object.key("Description").string(var_1);
    }
    if let Some(var_2) = &input.email {
        let mut object_3 = object.key("EMAIL").start_object();
        crate::json_ser::serialize_structure_crate_model_email_message_activity(&mut object_3, var_2)?;
        object_3.finish();
    }
    if let Some(var_4) = &input.holdout {
        let mut object_5 = object.key("Holdout").start_object();
        crate::json_ser::serialize_structure_crate_model_holdout_activity(&mut object_5, var_4)?;
        object_5.finish();
    }
    if let Some(var_6) = &input.random_split {
        let mut object_7 = object.key("RandomSplit").start_object();
        crate::json_ser::serialize_structure_crate_model_random_split_activity(&mut object_7, var_6)?;
        object_7.finish();
    }
    if let Some(var_8) = &input.wait {
        let mut object_9 = object.key("Wait").start_object();
        crate::json_ser::serialize_structure_crate_model_wait_activity(&mut object_9, var_8)?;
        object_9.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_activity_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ActivityResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.application_id {
        object.key("ApplicationId").string(var_1);
    }
    if let Some(var_2) = &input.campaign_id {
        object.key("CampaignId").string(var_2);
    }
    if let Some(var_3) = &input.end {
        object.key("End").string(var_3);
    }
    if let Some(var_4) = &input.id {
        object.key("Id").string(var_4);
    }
    if let Some(var_5) = &input.result {
        object.key("Result").string(var_5);
    }
    if let Some(var_6) = &input.scheduled_start {
        object.key("ScheduledStart").string(var_6);
    }
    if let Some(var_7) = &input.start {
        object.key("Start").string(var_7);
    }
    if let Some(var_8) = &input.state {
        object.key("State").string(var_8);
    }
    if let Some(var_9) = &input.successful_endpoint_count {
        object.key("SuccessfulEndpointCount").number(smithy_types::Number::NegInt(i64::from(*var_9)));
    }
    if let Some(var_10) = &input.timezones_completed_count {
        object.key("TimezonesCompletedCount").number(smithy_types::Number::NegInt(i64::from(*var_10)));
    }
    if let Some(var_11) = &input.timezones_total_count {
        object.key("TimezonesTotalCount").number(smithy_types::Number::NegInt(i64::from(*var_11)));
    }
    if let Some(var_12) = &input.total_endpoint_count {
        object.key("TotalEndpointCount").number(smithy_types::Number::NegInt(i64::from(*var_12)));
    }
    if let Some(var_13) = &input.treatment_id {
        object.key("TreatmentId").string(var_13);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_address_configuration(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::AddressConfiguration,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.body_override {
        object.key("BodyOverride").string(var_1);
    }
    if let Some(var_2) = &input.channel_type {
        object.key("ChannelType").string(var_2.as_str());
    }
    if let Some(var_3) = &input.context {
        let mut object_4 = object.key("Context").start_object();
        for (key_5, value_6) in var_3 {
            {
                object_4.key(key_5).string(value_6);
            }
        }
        object_4.finish();
    }
    if let Some(var_7) = &input.raw_content {
        object.key("RawContent").string(var_7);
    }
    if let Some(var_8) = &input.substitutions {
        let mut object_9 = object.key("Substitutions").start_object();
        for (key_10, value_11) in var_8 {
            {
                let mut array_12 = object_9.key(key_10).start_array();
                for item_13 in value_11 {
                    {
                        array_12.value().string(item_13);
                    }
                }
                array_12.finish();
            }
        }
        object_9.finish();
    }
    if let Some(var_14) = &input.title_override {
        object.key("TitleOverride").string(var_14);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_apns_channel_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ApnsChannelRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.bundle_id {
        object.key("BundleId").string(var_1);
    }
    if let Some(var_2) = &input.certificate {
        object.key("Certificate").string(var_2);
    }
    if let Some(var_3) = &input.default_authentication_method {
        object.key("DefaultAuthenticationMethod").string(var_3);
    }
    if let Some(var_4) = &input.enabled {
        object.key("Enabled").boolean(*var_4);
    }
    if let Some(var_5) = &input.private_key {
        object.key("PrivateKey").string(var_5);
    }
    if let Some(var_6) = &input.team_id {
        object.key("TeamId").string(var_6);
    }
    if let Some(var_7) = &input.token_key {
        object.key("TokenKey").string(var_7);
    }
    if let Some(var_8) = &input.token_key_id {
        object.key("TokenKeyId").string(var_8);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_apns_channel_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ApnsChannelResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.application_id {
        object.key("ApplicationId").string(var_1);
    }
    if let Some(var_2) = &input.creation_date {
        object.key("CreationDate").string(var_2);
    }
    if let Some(var_3) = &input.default_authentication_method {
        object.key("DefaultAuthenticationMethod").string(var_3);
    }
    if let Some(var_4) = &input.enabled {
        object.key("Enabled").boolean(*var_4);
    }
    if let Some(var_5) = &input.has_credential {
        object.key("HasCredential").boolean(*var_5);
    }
    if let Some(var_6) = &input.has_token_key {
        object.key("HasTokenKey").boolean(*var_6);
    }
    if let Some(var_7) = &input.id {
        object.key("Id").string(var_7);
    }
    if let Some(var_8) = &input.is_archived {
        object.key("IsArchived").boolean(*var_8);
    }
    if let Some(var_9) = &input.last_modified_by {
        object.key("LastModifiedBy").string(var_9);
    }
    if let Some(var_10) = &input.last_modified_date {
        object.key("LastModifiedDate").string(var_10);
    }
    if let Some(var_11) = &input.platform {
        object.key("Platform").string(var_11);
    }
    if let Some(var_12) = &input.version {
        object.key("Version").number(smithy_types::Number::NegInt(i64::from(*var_12)));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_apns_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ApnsMessage,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.action {
        object.key("Action").string(var_1.as_str());
    }
    if let Some(var_2) = &input.badge {
        object.key("Badge").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    if let Some(var_3) = &input.body {
        object.key("Body").string(var_3);
    }
    if let Some(var_4) = &input.category {
        object.key("Category").string(var_4);
    }
    if let Some(var_5) = &input.collapse_id {
        object.key("CollapseId").string(var_5);
    }
    if let Some(var_6) = &input.data {
        let mut object_7 = object.key("Data").start_object();
        for (key_8, value_9) in var_6 {
            {
                object_7.key(key_8).string(value_9);
            }
        }
        object_7.finish();
    }
    if let Some(var_10) = &input.media_url {
        object.key("MediaUrl").string(var_10);
    }
    if let Some(var_11) = &input.preferred_authentication_method {
        object.key("PreferredAuthenticationMethod").string(var_11);
    }
    if let Some(var_12) = &input.priority {
        object.key("Priority").string(var_12);
    }
    if let Some(var_13) = &input.raw_content {
        object.key("RawContent").string(var_13);
    }
    if let Some(var_14) = &input.silent_push {
        object.key("SilentPush").boolean(*var_14);
    }
    if let Some(var_15) = &input.sound {
        object.key("Sound").string(var_15);
    }
    if let Some(var_16) = &input.substitutions {
        let mut object_17 = object.key("Substitutions").start_object();
        for (key_18, value_19) in var_16 {
            {
                let mut array_20 = object_17.key(key_18).start_array();
                for item_21 in value_19 {
                    {
                        array_20.value().string(item_21);
                    }
                }
                array_20.finish();
            }
        }
        object_17.finish();
    }
    if let Some(var_22) = &input.thread_id {
        object.key("ThreadId").string(var_22);
    }
    if let Some(var_23) = &input.time_to_live {
        object.key("TimeToLive").number(smithy_types::Number::NegInt(i64::from(*var_23)));
    }
    if let Some(var_24) = &input.title {
        object.key("Title").string(var_24);
    }
    if let Some(var_25) = &input.url {
        object.key("Url").string(var_25);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_application_settings_resource(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ApplicationSettingsResource,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.application_id {
        object.key("ApplicationId").string(var_1);
    }
    if let Some(var_2) = &input.campaign_hook {
        let mut object_3 = object.key("CampaignHook").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_hook(&mut object_3, var_2)?;
        object_3.finish();
    }
    if let Some(var_4) = &input.last_modified_date {
        object.key("LastModifiedDate").string(var_4);
    }
    if let Some(var_5) = &input.limits {
        let mut object_6 = object.key("Limits").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_limits(&mut object_6, var_5)?;
        object_6.finish();
    }
    if let Some(var_7) = &input.quiet_time {
        let mut object_8 = object.key("QuietTime").start_object();
        crate::json_ser::serialize_structure_crate_model_quiet_time(&mut object_8, var_7)?;
        object_8.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_attribute_dimension(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::AttributeDimension,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.attribute_type {
        object.key("AttributeType").string(var_1.as_str());
    }
    if let Some(var_2) = &input.values {
        let mut array_3 = object.key("Values").start_array();
        for item_4 in var_2 {
            {
                array_3.value().string(item_4);
            }
        }
        array_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_base_kpi_result(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::BaseKpiResult,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.rows {
        let mut array_2 = object.key("Rows").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_result_row(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaign_date_range_kpi_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignDateRangeKpiResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.application_id {
        object.key("ApplicationId").string(var_1);
    }
    if let Some(var_2) = &input.campaign_id {
        object.key("CampaignId").string(var_2);
    }
    if let Some(var_3) = &input.end_time {
        object.key("EndTime").instant(var_3, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_4) = &input.kpi_name {
        object.key("KpiName").string(var_4);
    }
    if let Some(var_5) = &input.kpi_result {
        let mut object_6 = object.key("KpiResult").start_object();
        crate::json_ser::serialize_structure_crate_model_base_kpi_result(&mut object_6, var_5)?;
        object_6.finish();
    }
    if let Some(var_7) = &input.next_token {
        object.key("NextToken").string(var_7);
    }
    if let Some(var_8) = &input.start_time {
        object.key("StartTime").instant(var_8, smithy_types::instant::Format::DateTime)?;
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaign_email_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignEmailMessage,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.body {
        object.key("Body").string(var_1);
    }
    if let Some(var_2) = &input.from_address {
        object.key("FromAddress").string(var_2);
    }
    if let Some(var_3) = &input.html_body {
        object.key("HtmlBody").string(var_3);
    }
    if let Some(var_4) = &input.title {
        object.key("Title").string(var_4);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaign_event_filter(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignEventFilter,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.dimensions {
        let mut object_2 = object.key("Dimensions").start_object();
        crate::json_ser::serialize_structure_crate_model_event_dimensions(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.filter_type {
        object.key("FilterType").string(var_3.as_str());
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaign_hook(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignHook,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.lambda_function_name {
        object.key("LambdaFunctionName").string(var_1);
    }
    if let Some(var_2) = &input.mode {
        object.key("Mode").string(var_2.as_str());
    }
    if let Some(var_3) = &input.web_url {
        object.key("WebUrl").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaign_limits(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignLimits,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.daily {
        object.key("Daily").number(smithy_types::Number::NegInt(i64::from(*var_1)));
    }
    if let Some(var_2) = &input.maximum_duration {
        object.key("MaximumDuration").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    if let Some(var_3) = &input.messages_per_second {
        object.key("MessagesPerSecond").number(smithy_types::Number::NegInt(i64::from(*var_3)));
    }
    if let Some(var_4) = &input.total {
        object.key("Total").number(smithy_types::Number::NegInt(i64::from(*var_4)));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaign_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.additional_treatments {
        let mut array_2 = object.key("AdditionalTreatments").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_treatment_resource(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.application_id {
        object.key("ApplicationId").string(var_5);
    }
    if let Some(var_6) = &input.arn {
        object.key("Arn").string(var_6);
    }
    if let Some(var_7) = &input.creation_date {
        object.key("CreationDate").string(var_7);
    }
    if let Some(var_8) = &input.default_state {
        let mut object_9 = object.key("DefaultState").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_state(&mut object_9, var_8)?;
        object_9.finish();
    }
    if let Some(var_10) = &input.description {
        object.key("Description").string(var_10);
    }
    if let Some(var_11) = &input.holdout_percent {
        object.key("HoldoutPercent").number(smithy_types::Number::NegInt(i64::from(*var_11)));
    }
    if let Some(var_12) = &input.hook {
        let mut object_13 = object.key("Hook").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_hook(&mut object_13, var_12)?;
        object_13.finish();
    }
    if let Some(var_14) = &input.id {
        object.key("Id").string(var_14);
    }
    if let Some(var_15) = &input.is_paused {
        object.key("IsPaused").boolean(*var_15);
    }
    if let Some(var_16) = &input.last_modified_date {
        object.key("LastModifiedDate").string(var_16);
    }
    if let Some(var_17) = &input.limits {
        let mut object_18 = object.key("Limits").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_limits(&mut object_18, var_17)?;
        object_18.finish();
    }
    if let Some(var_19) = &input.message_configuration {
        let mut object_20 = object.key("MessageConfiguration").start_object();
        crate::json_ser::serialize_structure_crate_model_message_configuration(&mut object_20, var_19)?;
        object_20.finish();
    }
    if let Some(var_21) = &input.name {
        object.key("Name").string(var_21);
    }
    if let Some(var_22) = &input.schedule {
        let mut object_23 = object.key("Schedule").start_object();
        crate::json_ser::serialize_structure_crate_model_schedule(&mut object_23, var_22)?;
        object_23.finish();
    }
    if let Some(var_24) = &input.segment_id {
        object.key("SegmentId").string(var_24);
    }
    if let Some(var_25) = &input.segment_version {
        object.key("SegmentVersion").number(smithy_types::Number::NegInt(i64::from(*var_25)));
    }
    if let Some(var_26) = &input.state {
        let mut object_27 = object.key("State").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_state(&mut object_27, var_26)?;
        object_27.finish();
    }
    if let Some(var_28) = &input.treatment_description {
        object.key("TreatmentDescription").string(var_28);
    }
    if let Some(var_29) = &input.treatment_name {
        object.key("TreatmentName").string(var_29);
    }
    if let Some(var_30) = &input.version {
        object.key("Version").number(smithy_types::Number::NegInt(i64::from(*var_30)));
    }
    if let Some(var_31) = &input.tags {
        let mut object_32 = object.key("tags").start_object();
        for (key_33, value_34) in var_31 {
            {
                object_32.key(key_33).string(value_34);
            }
        }
        object_32.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaign_sms_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignSmsMessage,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.body {
        object.key("Body").string(var_1);
    }
    if let Some(var_2) = &input.message_type {
        object.key("MessageType").string(var_2.as_str());
    }
    if let Some(var_3) = &input.sender_id {
        object.key("SenderId").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaign_state(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignState,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.campaign_status {
        object.key("CampaignStatus").string(var_1.as_str());
    }
    Ok(())
}

pub fn serialize_structure_crate_model_campaigns_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CampaignsResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.item {
        let mut array_2 = object.key("Item").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_campaign_response(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.next_token {
        object.key("NextToken").string(var_5);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_default_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::DefaultMessage,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.body {
        object.key("Body").string(var_1);
    }
    if let Some(var_2) = &input.substitutions {
        let mut object_3 = object.key("Substitutions").start_object();
        for (key_4, value_5) in var_2 {
            {
                let mut array_6 = object_3.key(key_4).start_array();
                for item_7 in value_5 {
                    {
                        array_6.value().string(item_7);
                    }
                }
                array_6.finish();
            }
        }
        object_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_direct_message_configuration(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::DirectMessageConfiguration,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.apns_message {
        let mut object_2 = object.key("APNSMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_apns_message(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.default_message {
        let mut object_4 = object.key("DefaultMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_default_message(&mut object_4, var_3)?;
        object_4.finish();
    }
    if let Some(var_5) = &input.gcm_message {
        let mut object_6 = object.key("GCMMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_gcm_message(&mut object_6, var_5)?;
        object_6.finish();
    }
    if let Some(var_7) = &input.sms_message {
        let mut object_8 = object.key("SMSMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_sms_message(&mut object_8, var_7)?;
        object_8.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_email_message_activity(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EmailMessageActivity,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.message_config {
        let mut object_2 = object.key("MessageConfig").start_object();
        crate::json_ser::serialize_structure_crate_model_journey_email_message(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.next_activity {
        object.key("NextActivity").string(var_3);
    }
    if let Some(var_4) = &input.template_name {
        object.key("TemplateName").string(var_4);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_batch_item(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointBatchItem,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.address {
        object.key("Address").string(var_1);
    }
    if let Some(var_2) = &input.attributes {
        let mut object_3 = object.key("Attributes").start_object();
        for (key_4, value_5) in var_2 {
            {
                let mut array_6 = object_3.key(key_4).start_array();
                for item_7 in value_5 {
                    {
                        array_6.value().string(item_7);
                    }
                }
                array_6.finish();
            }
        }
        object_3.finish();
    }
    if let Some(var_8) = &input.channel_type {
        object.key("ChannelType").string(var_8.as_str());
    }
    if let Some(var_9) = &input.demographic {
        let mut object_10 = object.key("Demographic").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_demographic(&mut object_10, var_9)?;
        object_10.finish();
    }
    if let Some(var_11) = &input.effective_date {
        object.key("EffectiveDate").string(var_11);
    }
    if let Some(var_12) = &input.endpoint_status {
        object.key("EndpointStatus").string(var_12);
    }
    if let Some(var_13) = &input.id {
        object.key("Id").string(var_13);
    }
    if let Some(var_14) = &input.location {
        let mut object_15 = object.key("Location").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_location(&mut object_15, var_14)?;
        object_15.finish();
    }
    if let Some(var_16) = &input.metrics {
        let mut object_17 = object.key("Metrics").start_object();
        for (key_18, value_19) in var_16 {
            {
                object_17.key(key_18).number(smithy_types::Number::Float(*value_19));
            }
        }
        object_17.finish();
    }
    if let Some(var_20) = &input.opt_out {
        object.key("OptOut").string(var_20);
    }
    if let Some(var_21) = &input.request_id {
        object.key("RequestId").string(var_21);
    }
    if let Some(var_22) = &input.user {
        let mut object_23 = object.key("User").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_user(&mut object_23, var_22)?;
        object_23.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_batch_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointBatchRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.item {
        let mut array_2 = object.key("Item").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_endpoint_batch_item(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_demographic(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointDemographic,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.app_version {
        object.key("AppVersion").string(var_1);
    }
    if let Some(var_2) = &input.locale {
        object.key("Locale").string(var_2);
    }
    if let Some(var_3) = &input.make {
        object.key("Make").string(var_3);
    }
    if let Some(var_4) = &input.model {
        object.key("Model").string(var_4);
    }
    if let Some(var_5) = &input.model_version {
        object.key("ModelVersion").string(var_5);
    }
    if let Some(var_6) = &input.platform {
        object.key("Platform").string(var_6);
    }
    if let Some(var_7) = &input.platform_version {
        object.key("PlatformVersion").string(var_7);
    }
    if let Some(var_8) = &input.timezone {
        object.key("Timezone").string(var_8);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_location(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointLocation,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.city {
        object.key("City").string(var_1);
    }
    if let Some(var_2) = &input.country {
        object.key("Country").string(var_2);
    }
    if let Some(var_3) = &input.latitude {
        object.key("Latitude").number(smithy_types::Number::Float(*var_3));
    }
    if let Some(var_4) = &input.longitude {
        object.key("Longitude").number(smithy_types::Number::Float(*var_4));
    }
    if let Some(var_5) = &input.postal_code {
        object.key("PostalCode").string(var_5);
    }
    if let Some(var_6) = &input.region {
        object.key("Region").string(var_6);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_message_result(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointMessageResult,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.address {
        object.key("Address").string(var_1);
    }
    if let Some(var_2) = &input.delivery_status {
        object.key("DeliveryStatus").string(var_2.as_str());
    }
    if let Some(var_3) = &input.message_id {
        object.key("MessageId").string(var_3);
    }
    if let Some(var_4) = &input.status_code {
        object.key("StatusCode").number(smithy_types::Number::NegInt(i64::from(*var_4)));
    }
    if let Some(var_5) = &input.status_message {
        object.key("StatusMessage").string(var_5);
    }
    if let Some(var_6) = &input.updated_token {
        object.key("UpdatedToken").string(var_6);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.address {
        object.key("Address").string(var_1);
    }
    if let Some(var_2) = &input.attributes {
        let mut object_3 = object.key("Attributes").start_object();
        for (key_4, value_5) in var_2 {
            {
                let mut array_6 = object_3.key(key_4).start_array();
                for item_7 in value_5 {
                    {
                        array_6.value().string(item_7);
                    }
                }
                array_6.finish();
            }
        }
        object_3.finish();
    }
    if let Some(var_8) = &input.channel_type {
        object.key("ChannelType").string(var_8.as_str());
    }
    if let Some(var_9) = &input.demographic {
        let mut object_10 = object.key("Demographic").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_demographic(&mut object_10, var_9)?;
        object_10.finish();
    }
    if let Some(var_11) = &input.effective_date {
        object.key("EffectiveDate").string(var_11);
    }
    if let Some(var_12) = &input.endpoint_status {
        object.key("EndpointStatus").string(var_12);
    }
    if let Some(var_13) = &input.location {
        let mut object_14 = object.key("Location").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_location(&mut object_14, var_13)?;
        object_14.finish();
    }
    if let Some(var_15) = &input.metrics {
        let mut object_16 = object.key("Metrics").start_object();
        for (key_17, value_18) in var_15 {
            {
                object_16.key(key_17).number(smithy_types::Number::Float(*value_18));
            }
        }
        object_16.finish();
    }
    if let Some(var_19) = &input.opt_out {
        object.key("OptOut").string(var_19);
    }
    if let Some(var_20) = &input.request_id {
        object.key("RequestId").string(var_20);
    }
    if let Some(var_21) = &input.user {
        let mut object_22 = object.key("User").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_user(&mut object_22, var_21)?;
        object_22.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.address {
        object.key("Address").string(var_1);
    }
    if let Some(var_2) = &input.application_id {
        object.key("ApplicationId").string(var_2);
    }
    if let Some(var_3) = &input.attributes {
        let mut object_4 = object.key("Attributes").start_object();
        for (key_5, value_6) in var_3 {
            {
                let mut array_7 = object_4.key(key_5).start_array();
                for item_8 in value_6 {
                    {
                        array_7.value().string(item_8);
                    }
                }
                array_7.finish();
            }
        }
        object_4.finish();
    }
    if let Some(var_9) = &input.channel_type {
        object.key("ChannelType").string(var_9.as_str());
    }
    if let Some(var_10) = &input.cohort_id {
        object.key("CohortId").string(var_10);
    }
    if let Some(var_11) = &input.creation_date {
        object.key("CreationDate").string(var_11);
    }
    if let Some(var_12) = &input.demographic {
        let mut object_13 = object.key("Demographic").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_demographic(&mut object_13, var_12)?;
        object_13.finish();
    }
    if let Some(var_14) = &input.effective_date {
        object.key("EffectiveDate").string(var_14);
    }
    if let Some(var_15) = &input.endpoint_status {
        object.key("EndpointStatus").string(var_15);
    }
    if let Some(var_16) = &input.id {
        object.key("Id").string(var_16);
    }
    if let Some(var_17) = &input.location {
        let mut object_18 = object.key("Location").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_location(&mut object_18, var_17)?;
        object_18.finish();
    }
    if let Some(var_19) = &input.metrics {
        let mut object_20 = object.key("Metrics").start_object();
        for (key_21, value_22) in var_19 {
            {
                object_20.key(key_21).number(smithy_types::Number::Float(*value_22));
            }
        }
        object_20.finish();
    }
    if let Some(var_23) = &input.opt_out {
        object.key("OptOut").string(var_23);
    }
    if let Some(var_24) = &input.request_id {
        object.key("RequestId").string(var_24);
    }
    if let Some(var_25) = &input.user {
        let mut object_26 = object.key("User").start_object();
        crate::json_ser::serialize_structure_crate_model_endpoint_user(&mut object_26, var_25)?;
        object_26.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_send_configuration(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointSendConfiguration,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.body_override {
        object.key("BodyOverride").string(var_1);
    }
    if let Some(var_2) = &input.context {
        let mut object_3 = object.key("Context").start_object();
        for (key_4, value_5) in var_2 {
            {
                object_3.key(key_4).string(value_5);
            }
        }
        object_3.finish();
    }
    if let Some(var_6) = &input.raw_content {
        object.key("RawContent").string(var_6);
    }
    if let Some(var_7) = &input.substitutions {
        let mut object_8 = object.key("Substitutions").start_object();
        for (key_9, value_10) in var_7 {
            {
                let mut array_11 = object_8.key(key_9).start_array();
                for item_12 in value_10 {
                    {
                        array_11.value().string(item_12);
                    }
                }
                array_11.finish();
            }
        }
        object_8.finish();
    }
    if let Some(var_13) = &input.title_override {
        object.key("TitleOverride").string(var_13);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_endpoint_user(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EndpointUser,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.user_attributes {
        let mut object_2 = object.key("UserAttributes").start_object();
        for (key_3, value_4) in var_1 {
            {
                let mut array_5 = object_2.key(key_3).start_array();
                for item_6 in value_4 {
                    {
                        array_5.value().string(item_6);
                    }
                }
                array_5.finish();
            }
        }
        object_2.finish();
    }
    if let Some(var_7) = &input.user_id {
        object.key("UserId").string(var_7);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_event_dimensions(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EventDimensions,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.attributes {
        let mut object_2 = object.key("Attributes").start_object();
        for (key_3, value_4) in var_1 {
            {
                let mut object_5 = object_2.key(key_3).start_object();
                crate::json_ser::serialize_structure_crate_model_attribute_dimension(&mut object_5, value_4)?;
                object_5.finish();
            }
        }
        object_2.finish();
    }
    if let Some(var_6) = &input.event_type {
        let mut object_7 = object.key("EventType").start_object();
        crate::json_ser::serialize_structure_crate_model_set_dimension(&mut object_7, var_6)?;
        object_7.finish();
    }
    if let Some(var_8) = &input.metrics {
        let mut object_9 = object.key("Metrics").start_object();
        for (key_10, value_11) in var_8 {
            {
                let mut object_12 = object_9.key(key_10).start_object();
                crate::json_ser::serialize_structure_crate_model_metric_dimension(&mut object_12, value_11)?;
                object_12.finish();
            }
        }
        object_9.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_gcm_channel_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::GcmChannelRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.api_key {
        object.key("ApiKey").string(var_1);
    }
    if let Some(var_2) = &input.enabled {
        object.key("Enabled").boolean(*var_2);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_gcm_channel_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::GcmChannelResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.application_id {
        object.key("ApplicationId").string(var_1);
    }
    if let Some(var_2) = &input.creation_date {
        object.key("CreationDate").string(var_2);
    }
    if let Some(var_3) = &input.credential {
        object.key("Credential").string(var_3);
    }
    if let Some(var_4) = &input.enabled {
        object.key("Enabled").boolean(*var_4);
    }
    if let Some(var_5) = &input.has_credential {
        object.key("HasCredential").boolean(*var_5);
    }
    if let Some(var_6) = &input.id {
        object.key("Id").string(var_6);
    }
    if let Some(var_7) = &input.is_archived {
        object.key("IsArchived").boolean(*var_7);
    }
    if let Some(var_8) = &input.last_modified_by {
        object.key("LastModifiedBy").string(var_8);
    }
    if let Some(var_9) = &input.last_modified_date {
        object.key("LastModifiedDate").string(var_9);
    }
    if let Some(var_10) = &input.platform {
        object.key("Platform").string(var_10);
    }
    if let Some(var_11) = &input.version {
        object.key("Version").number(smithy_types::Number::NegInt(i64::from(*var_11)));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_gcm_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::GcmMessage,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.action {
        object.key("Action").string(var_1.as_str());
    }
    if let Some(var_2) = &input.body {
        object.key("Body").string(var_2);
    }
    if let Some(var_3) = &input.collapse_key {
        object.key("CollapseKey").string(var_3);
    }
    if let Some(var_4) = &input.data {
        let mut object_5 = object.key("Data").start_object();
        for (key_6, value_7) in var_4 {
            {
                object_5.key(key_6).string(value_7);
            }
        }
        object_5.finish();
    }
    if let Some(var_8) = &input.icon_reference {
        object.key("IconReference").string(var_8);
    }
    if let Some(var_9) = &input.image_icon_url {
        object.key("ImageIconUrl").string(var_9);
    }
    if let Some(var_10) = &input.image_url {
        object.key("ImageUrl").string(var_10);
    }
    if let Some(var_11) = &input.priority {
        object.key("Priority").string(var_11);
    }
    if let Some(var_12) = &input.raw_content {
        object.key("RawContent").string(var_12);
    }
    if let Some(var_13) = &input.restricted_package_name {
        object.key("RestrictedPackageName").string(var_13);
    }
    if let Some(var_14) = &input.silent_push {
        object.key("SilentPush").boolean(*var_14);
    }
    if let Some(var_15) = &input.small_image_icon_url {
        object.key("SmallImageIconUrl").string(var_15);
    }
    if let Some(var_16) = &input.sound {
        object.key("Sound").string(var_16);
    }
    if let Some(var_17) = &input.substitutions {
        let mut object_18 = object.key("Substitutions").start_object();
        for (key_19, value_20) in var_17 {
            {
                let mut array_21 = object_18.key(key_19).start_array();
                for item_22 in value_20 {
                    {
                        array_21.value().string(item_22);
                    }
                }
                array_21.finish();
            }
        }
        object_18.finish();
    }
    if let Some(var_23) = &input.time_to_live {
        object.key("TimeToLive").number(smithy_types::Number::NegInt(i64::from(*var_23)));
    }
    if let Some(var_24) = &input.title {
        object.key("Title").string(var_24);
    }
    if let Some(var_25) = &input.url {
        object.key("Url").string(var_25);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_gps_coordinates(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::GpsCoordinates,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.latitude {
        object.key("Latitude").number(smithy_types::Number::Float(*var_1));
    }
    if let Some(var_2) = &input.longitude {
        object.key("Longitude").number(smithy_types::Number::Float(*var_2));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_gps_point_dimension(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::GpsPointDimension,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.coordinates {
        let mut object_2 = object.key("Coordinates").start_object();
        crate::json_ser::serialize_structure_crate_model_gps_coordinates(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.range_in_kilometers {
        object.key("RangeInKilometers").number(smithy_types::Number::Float(*var_3));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_holdout_activity(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::HoldoutActivity,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.next_activity {
        object.key("NextActivity").string(var_1);
    }
    if let Some(var_2) = &input.percentage {
        object.key("Percentage").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_import_job_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ImportJobRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.define_segment {
        object.key("DefineSegment").boolean(*var_1);
    }
    if let Some(var_2) = &input.external_id {
        object.key("ExternalId").string(var_2);
    }
    if let Some(var_3) = &input.format {
        object.key("Format").string(var_3.as_str());
    }
    if let Some(var_4) = &input.register_endpoints {
        object.key("RegisterEndpoints").boolean(*var_4);
    }
    if let Some(var_5) = &input.role_arn {
        object.key("RoleArn").string(var_5);
    }
    if let Some(var_6) = &input.s3_url {
        object.key("S3Url").string(var_6);
    }
    if let Some(var_7) = &input.segment_id {
        object.key("SegmentId").string(var_7);
    }
    if let Some(var_8) = &input.segment_name {
        object.key("SegmentName").string(var_8);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_import_job_resource(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ImportJobResource,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.define_segment {
        object.key("DefineSegment").boolean(*var_1);
    }
    if let Some(var_2) = &input.external_id {
        object.key("ExternalId").string(var_2);
    }
    if let Some(var_3) = &input.format {
        object.key("Format").string(var_3.as_str());
    }
    if let Some(var_4) = &input.register_endpoints {
        object.key("RegisterEndpoints").boolean(*var_4);
    }
    if let Some(var_5) = &input.role_arn {
        object.key("RoleArn").string(var_5);
    }
    if let Some(var_6) = &input.s3_url {
        object.key("S3Url").string(var_6);
    }
    if let Some(var_7) = &input.segment_id {
        object.key("SegmentId").string(var_7);
    }
    if let Some(var_8) = &input.segment_name {
        object.key("SegmentName").string(var_8);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_import_job_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ImportJobResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.application_id {
        object.key("ApplicationId").string(var_1);
    }
    if let Some(var_2) = &input.completed_pieces {
        object.key("CompletedPieces").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    if let Some(var_3) = &input.completion_date {
        object.key("CompletionDate").string(var_3);
    }
    if let Some(var_4) = &input.creation_date {
        object.key("CreationDate").string(var_4);
    }
    if let Some(var_5) = &input.definition {
        let mut object_6 = object.key("Definition").start_object();
        crate::json_ser::serialize_structure_crate_model_import_job_resource(&mut object_6, var_5)?;
        object_6.finish();
    }
    if let Some(var_7) = &input.failed_pieces {
        object.key("FailedPieces").number(smithy_types::Number::NegInt(i64::from(*var_7)));
    }
    if let Some(var_8) = &input.failures {
        let mut array_9 = object.key("Failures").start_array();
        for item_10 in var_8 {
            {
                array_9.value().string(item_10);
            }
        }
        array_9.finish();
    }
    if let Some(var_11) = &input.id {
        object.key("Id").string(var_11);
    }
    if let Some(var_12) = &input.job_status {
        object.key("JobStatus").string(var_12.as_str());
    }
    if let Some(var_13) = &input.total_failures {
        object.key("TotalFailures").number(smithy_types::Number::NegInt(i64::from(*var_13)));
    }
    if let Some(var_14) = &input.total_pieces {
        object.key("TotalPieces").number(smithy_types::Number::NegInt(i64::from(*var_14)));
    }
    if let Some(var_15) = &input.total_processed {
        object.key("TotalProcessed").number(smithy_types::Number::NegInt(i64::from(*var_15)));
    }
    if let Some(var_16) = &input.r#type {
        object.key("Type").string(var_16);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_import_jobs_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ImportJobsResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.item {
        let mut array_2 = object.key("Item").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_import_job_response(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.next_token {
        object.key("NextToken").string(var_5);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_journey_email_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::JourneyEmailMessage,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.from_address {
        object.key("FromAddress").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_journey_limits(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::JourneyLimits,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.daily_cap {
        object.key("DailyCap").number(smithy_types::Number::NegInt(i64::from(*var_1)));
    }
    if let Some(var_2) = &input.endpoint_reentry_cap {
        object.key("EndpointReentryCap").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    if let Some(var_3) = &input.messages_per_second {
        object.key("MessagesPerSecond").number(smithy_types::Number::NegInt(i64::from(*var_3)));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_journey_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::JourneyResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.activities {
        let mut object_2 = object.key("Activities").start_object();
        for (key_3, value_4) in var_1 {
            {
                let mut object_5 = object_2.key(key_3).start_object();
                crate::json_ser::serialize_structure_crate_model_activity(&mut object_5, value_4)?;
                object_5.finish();
            }
        }
        object_2.finish();
    }
    if let Some(var_6) = &input.application_id {
        object.key("ApplicationId").string(var_6);
    }
    if let Some(var_7) = &input.creation_date {
        object.key("CreationDate").string(var_7);
    }
    if let Some(var_8) = &input.id {
        object.key("Id").string(var_8);
    }
    if let Some(var_9) = &input.last_modified_date {
        object.key("LastModifiedDate").string(var_9);
    }
    if let Some(var_10) = &input.limits {
        let mut object_11 = object.key("Limits").start_object();
        crate::json_ser::serialize_structure_crate_model_journey_limits(&mut object_11, var_10)?;
        object_11.finish();
    }
    if let Some(var_12) = &input.local_time {
        object.key("LocalTime").boolean(*var_12);
    }
    if let Some(var_13) = &input.name {
        object.key("Name").string(var_13);
    }
    if let Some(var_14) = &input.quiet_time {
        let mut object_15 = object.key("QuietTime").start_object();
        crate::json_ser::serialize_structure_crate_model_quiet_time(&mut object_15, var_14)?;
        object_15.finish();
    }
    if let Some(var_16) = &input.refresh_frequency {
        object.key("RefreshFrequency").string(var_16);
    }
    if let Some(var_17) = &input.schedule {
        let mut object_18 = object.key("Schedule").start_object();
        crate::json_ser::serialize_structure_crate_model_journey_schedule(&mut object_18, var_17)?;
        object_18.finish();
    }
    if let Some(var_19) = &input.start_activity {
        object.key("StartActivity").string(var_19);
    }
    if let Some(var_20) = &input.start_condition {
        let mut object_21 = object.key("StartCondition").start_object();
        crate::json_ser::serialize_structure_crate_model_start_condition(&mut object_21, var_20)?;
        object_21.finish();
    }
    if let Some(var_22) = &input.state {
        object.key("State").string(var_22.as_str());
    }
    if let Some(var_23) = &input.tags {
        let mut object_24 = object.key("tags").start_object();
        for (key_25, value_26) in var_23 {
            {
                object_24.key(key_25).string(value_26);
            }
        }
        object_24.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_journey_schedule(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::JourneySchedule,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.end_time {
        object.key("EndTime").instant(var_1, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_2) = &input.start_time {
        object.key("StartTime").instant(var_2, smithy_types::instant::Format::DateTime)?;
    }
    if let Some(var_3) = &input.timezone {
        object.key("Timezone").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Message,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.action {
        object.key("Action").string(var_1.as_str());
    }
    if let Some(var_2) = &input.body {
        object.key("Body").string(var_2);
    }
    if let Some(var_3) = &input.image_icon_url {
        object.key("ImageIconUrl").string(var_3);
    }
    if let Some(var_4) = &input.image_small_icon_url {
        object.key("ImageSmallIconUrl").string(var_4);
    }
    if let Some(var_5) = &input.image_url {
        object.key("ImageUrl").string(var_5);
    }
    if let Some(var_6) = &input.json_body {
        object.key("JsonBody").string(var_6);
    }
    if let Some(var_7) = &input.media_url {
        object.key("MediaUrl").string(var_7);
    }
    if let Some(var_8) = &input.raw_content {
        object.key("RawContent").string(var_8);
    }
    if let Some(var_9) = &input.silent_push {
        object.key("SilentPush").boolean(*var_9);
    }
    if let Some(var_10) = &input.time_to_live {
        object.key("TimeToLive").number(smithy_types::Number::NegInt(i64::from(*var_10)));
    }
    if let Some(var_11) = &input.title {
        object.key("Title").string(var_11);
    }
    if let Some(var_12) = &input.url {
        object.key("Url").string(var_12);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_message_body(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::MessageBody,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.message {
        object.key("Message").string(var_1);
    }
    if let Some(var_2) = &input.request_id {
        object.key("RequestID").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_message_configuration(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::MessageConfiguration,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.adm_message {
        let mut object_2 = object.key("ADMMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_message(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.apns_message {
        let mut object_4 = object.key("APNSMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_message(&mut object_4, var_3)?;
        object_4.finish();
    }
    if let Some(var_5) = &input.baidu_message {
        let mut object_6 = object.key("BaiduMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_message(&mut object_6, var_5)?;
        object_6.finish();
    }
    if let Some(var_7) = &input.default_message {
        let mut object_8 = object.key("DefaultMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_message(&mut object_8, var_7)?;
        object_8.finish();
    }
    if let Some(var_9) = &input.email_message {
        let mut object_10 = object.key("EmailMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_email_message(&mut object_10, var_9)?;
        object_10.finish();
    }
    if let Some(var_11) = &input.gcm_message {
        let mut object_12 = object.key("GCMMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_message(&mut object_12, var_11)?;
        object_12.finish();
    }
    if let Some(var_13) = &input.sms_message {
        let mut object_14 = object.key("SMSMessage").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_sms_message(&mut object_14, var_13)?;
        object_14.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_message_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::MessageRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.addresses {
        let mut object_2 = object.key("Addresses").start_object();
        for (key_3, value_4) in var_1 {
            {
                let mut object_5 = object_2.key(key_3).start_object();
                crate::json_ser::serialize_structure_crate_model_address_configuration(&mut object_5, value_4)?;
                object_5.finish();
            }
        }
        object_2.finish();
    }
    if let Some(var_6) = &input.context {
        let mut object_7 = object.key("Context").start_object();
        for (key_8, value_9) in var_6 {
            {
                object_7.key(key_8).string(value_9);
            }
        }
        object_7.finish();
    }
    if let Some(var_10) = &input.endpoints {
        let mut object_11 = object.key("Endpoints").start_object();
        for (key_12, value_13) in var_10 {
            {
                let mut object_14 = object_11.key(key_12).start_object();
                crate::json_ser::serialize_structure_crate_model_endpoint_send_configuration(&mut object_14, value_13)?;
                object_14.finish();
            }
        }
        object_11.finish();
    }
    if let Some(var_15) = &input.message_configuration {
        let mut object_16 = object.key("MessageConfiguration").start_object();
        crate::json_ser::serialize_structure_crate_model_direct_message_configuration(&mut object_16, var_15)?;
        object_16.finish();
    }
    if let Some(var_17) = &input.trace_id {
        object.key("TraceId").string(var_17);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_message_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::MessageResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.application_id {
        object.key("ApplicationId").string(var_1);
    }
    if let Some(var_2) = &input.endpoint_result {
        let mut object_3 = object.key("EndpointResult").start_object();
        for (key_4, value_5) in var_2 {
            {
                let mut object_6 = object_3.key(key_4).start_object();
                crate::json_ser::serialize_structure_crate_model_endpoint_message_result(&mut object_6, value_5)?;
                object_6.finish();
            }
        }
        object_3.finish();
    }
    if let Some(var_7) = &input.request_id {
        object.key("RequestId").string(var_7);
    }
    if let Some(var_8) = &input.result {
        let mut object_9 = object.key("Result").start_object();
        for (key_10, value_11) in var_8 {
            {
                let mut object_12 = object_9.key(key_10).start_object();
                crate::json_ser::serialize_structure_crate_model_message_result(&mut object_12, value_11)?;
                object_12.finish();
            }
        }
        object_9.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_message_result(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::MessageResult,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.delivery_status {
        object.key("DeliveryStatus").string(var_1.as_str());
    }
    if let Some(var_2) = &input.message_id {
        object.key("MessageId").string(var_2);
    }
    if let Some(var_3) = &input.status_code {
        object.key("StatusCode").number(smithy_types::Number::NegInt(i64::from(*var_3)));
    }
    if let Some(var_4) = &input.status_message {
        object.key("StatusMessage").string(var_4);
    }
    if let Some(var_5) = &input.updated_token {
        object.key("UpdatedToken").string(var_5);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_metric_dimension(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::MetricDimension,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.comparison_operator {
        object.key("ComparisonOperator").string(var_1);
    }
    if let Some(var_2) = &input.value {
        object.key("Value").number(smithy_types::Number::Float(*var_2));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_quiet_time(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::QuietTime,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.end {
        object.key("End").string(var_1);
    }
    if let Some(var_2) = &input.start {
        object.key("Start").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_random_split_activity(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::RandomSplitActivity,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.branches {
        let mut array_2 = object.key("Branches").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_random_split_entry(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_random_split_entry(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::RandomSplitEntry,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.next_activity {
        object.key("NextActivity").string(var_1);
    }
    if let Some(var_2) = &input.percentage {
        object.key("Percentage").number(smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_recency_dimension(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::RecencyDimension,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.duration {
        object.key("Duration").string(var_1.as_str());
    }
    if let Some(var_2) = &input.recency_type {
        object.key("RecencyType").string(var_2.as_str());
    }
    Ok(())
}

pub fn serialize_structure_crate_model_result_row(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ResultRow,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.grouped_bys {
        let mut array_2 = object.key("GroupedBys").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_result_row_value(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.values {
        let mut array_6 = object.key("Values").start_array();
        for item_7 in var_5 {
            {
                let mut object_8 = array_6.value().start_object();
                crate::json_ser::serialize_structure_crate_model_result_row_value(&mut object_8, item_7)?;
                object_8.finish();
            }
        }
        array_6.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_result_row_value(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ResultRowValue,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.key {
        object.key("Key").string(var_1);
    }
    if let Some(var_2) = &input.r#type {
        object.key("Type").string(var_2);
    }
    if let Some(var_3) = &input.value {
        object.key("Value").string(var_3);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_schedule(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Schedule,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.end_time {
        object.key("EndTime").string(var_1);
    }
    if let Some(var_2) = &input.event_filter {
        let mut object_3 = object.key("EventFilter").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_event_filter(&mut object_3, var_2)?;
        object_3.finish();
    }
    if let Some(var_4) = &input.frequency {
        object.key("Frequency").string(var_4.as_str());
    }
    if let Some(var_5) = &input.is_local_time {
        object.key("IsLocalTime").boolean(*var_5);
    }
    if let Some(var_6) = &input.quiet_time {
        let mut object_7 = object.key("QuietTime").start_object();
        crate::json_ser::serialize_structure_crate_model_quiet_time(&mut object_7, var_6)?;
        object_7.finish();
    }
    if let Some(var_8) = &input.start_time {
        object.key("StartTime").string(var_8);
    }
    if let Some(var_9) = &input.timezone {
        object.key("Timezone").string(var_9);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_segment_behaviors(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SegmentBehaviors,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.recency {
        let mut object_2 = object.key("Recency").start_object();
        crate::json_ser::serialize_structure_crate_model_recency_dimension(&mut object_2, var_1)?;
        object_2.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_segment_condition(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SegmentCondition,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.segment_id {
        object.key("SegmentId").string(var_1);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_segment_demographics(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SegmentDemographics,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.app_version {
        let mut object_2 = object.key("AppVersion").start_object();
        crate::json_ser::serialize_structure_crate_model_set_dimension(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.channel {
        let mut object_4 = object.key("Channel").start_object();
        crate::json_ser::serialize_structure_crate_model_set_dimension(&mut object_4, var_3)?;
        object_4.finish();
    }
    if let Some(var_5) = &input.device_type {
        let mut object_6 = object.key("DeviceType").start_object();
        crate::json_ser::serialize_structure_crate_model_set_dimension(&mut object_6, var_5)?;
        object_6.finish();
    }
    if let Some(var_7) = &input.make {
        let mut object_8 = object.key("Make").start_object();
        crate::json_ser::serialize_structure_crate_model_set_dimension(&mut object_8, var_7)?;
        object_8.finish();
    }
    if let Some(var_9) = &input.model {
        let mut object_10 = object.key("Model").start_object();
        crate::json_ser::serialize_structure_crate_model_set_dimension(&mut object_10, var_9)?;
        object_10.finish();
    }
    if let Some(var_11) = &input.platform {
        let mut object_12 = object.key("Platform").start_object();
        crate::json_ser::serialize_structure_crate_model_set_dimension(&mut object_12, var_11)?;
        object_12.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_segment_dimensions(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SegmentDimensions,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.attributes {
        let mut object_2 = object.key("Attributes").start_object();
        for (key_3, value_4) in var_1 {
            {
                let mut object_5 = object_2.key(key_3).start_object();
                crate::json_ser::serialize_structure_crate_model_attribute_dimension(&mut object_5, value_4)?;
                object_5.finish();
            }
        }
        object_2.finish();
    }
    if let Some(var_6) = &input.behavior {
        let mut object_7 = object.key("Behavior").start_object();
        crate::json_ser::serialize_structure_crate_model_segment_behaviors(&mut object_7, var_6)?;
        object_7.finish();
    }
    if let Some(var_8) = &input.demographic {
        let mut object_9 = object.key("Demographic").start_object();
        crate::json_ser::serialize_structure_crate_model_segment_demographics(&mut object_9, var_8)?;
        object_9.finish();
    }
    if let Some(var_10) = &input.location {
        let mut object_11 = object.key("Location").start_object();
        crate::json_ser::serialize_structure_crate_model_segment_location(&mut object_11, var_10)?;
        object_11.finish();
    }
    if let Some(var_12) = &input.metrics {
        let mut object_13 = object.key("Metrics").start_object();
        for (key_14, value_15) in var_12 {
            {
                let mut object_16 = object_13.key(key_14).start_object();
                crate::json_ser::serialize_structure_crate_model_metric_dimension(&mut object_16, value_15)?;
                object_16.finish();
            }
        }
        object_13.finish();
    }
    if let Some(var_17) = &input.user_attributes {
        let mut object_18 = object.key("UserAttributes").start_object();
        for (key_19, value_20) in var_17 {
            {
                let mut object_21 = object_18.key(key_19).start_object();
                crate::json_ser::serialize_structure_crate_model_attribute_dimension(&mut object_21, value_20)?;
                object_21.finish();
            }
        }
        object_18.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_segment_import_resource(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SegmentImportResource,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.channel_counts {
        let mut object_2 = object.key("ChannelCounts").start_object();
        for (key_3, value_4) in var_1 {
            {
                object_2.key(key_3).number(smithy_types::Number::NegInt(i64::from(*value_4)));
            }
        }
        object_2.finish();
    }
    if let Some(var_5) = &input.external_id {
        object.key("ExternalId").string(var_5);
    }
    if let Some(var_6) = &input.format {
        object.key("Format").string(var_6.as_str());
    }
    if let Some(var_7) = &input.role_arn {
        object.key("RoleArn").string(var_7);
    }
    if let Some(var_8) = &input.s3_url {
        object.key("S3Url").string(var_8);
    }
    if let Some(var_9) = &input.size {
        object.key("Size").number(smithy_types::Number::NegInt(i64::from(*var_9)));
    }
    Ok(())
}

pub fn serialize_structure_crate_model_segment_location(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SegmentLocation,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.country {
        let mut object_2 = object.key("Country").start_object();
        crate::json_ser::serialize_structure_crate_model_set_dimension(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.gps_point {
        let mut object_4 = object.key("GPSPoint").start_object();
        crate::json_ser::serialize_structure_crate_model_gps_point_dimension(&mut object_4, var_3)?;
        object_4.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_segment_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SegmentResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.application_id {
        object.key("ApplicationId").string(var_1);
    }
    if let Some(var_2) = &input.arn {
        object.key("Arn").string(var_2);
    }
    if let Some(var_3) = &input.creation_date {
        object.key("CreationDate").string(var_3);
    }
    if let Some(var_4) = &input.dimensions {
        let mut object_5 = object.key("Dimensions").start_object();
        crate::json_ser::serialize_structure_crate_model_segment_dimensions(&mut object_5, var_4)?;
        object_5.finish();
    }
    if let Some(var_6) = &input.id {
        object.key("Id").string(var_6);
    }
    if let Some(var_7) = &input.import_definition {
        let mut object_8 = object.key("ImportDefinition").start_object();
        crate::json_ser::serialize_structure_crate_model_segment_import_resource(&mut object_8, var_7)?;
        object_8.finish();
    }
    if let Some(var_9) = &input.last_modified_date {
        object.key("LastModifiedDate").string(var_9);
    }
    if let Some(var_10) = &input.name {
        object.key("Name").string(var_10);
    }
    if let Some(var_11) = &input.segment_type {
        object.key("SegmentType").string(var_11.as_str());
    }
    if let Some(var_12) = &input.version {
        object.key("Version").number(smithy_types::Number::NegInt(i64::from(*var_12)));
    }
    if let Some(var_13) = &input.tags {
        let mut object_14 = object.key("tags").start_object();
        for (key_15, value_16) in var_13 {
            {
                object_14.key(key_15).string(value_16);
            }
        }
        object_14.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_segments_response(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SegmentsResponse,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.item {
        let mut array_2 = object.key("Item").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_segment_response(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.next_token {
        object.key("NextToken").string(var_5);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_set_dimension(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SetDimension,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.dimension_type {
        object.key("DimensionType").string(var_1.as_str());
    }
    if let Some(var_2) = &input.values {
        let mut array_3 = object.key("Values").start_array();
        for item_4 in var_2 {
            {
                array_3.value().string(item_4);
            }
        }
        array_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_sms_message(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SmsMessage,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.body {
        object.key("Body").string(var_1);
    }
    if let Some(var_2) = &input.keyword {
        object.key("Keyword").string(var_2);
    }
    if let Some(var_3) = &input.message_type {
        object.key("MessageType").string(var_3.as_str());
    }
    if let Some(var_4) = &input.origination_number {
        object.key("OriginationNumber").string(var_4);
    }
    if let Some(var_5) = &input.sender_id {
        object.key("SenderId").string(var_5);
    }
    if let Some(var_6) = &input.substitutions {
        let mut object_7 = object.key("Substitutions").start_object();
        for (key_8, value_9) in var_6 {
            {
                let mut array_10 = object_7.key(key_8).start_array();
                for item_11 in value_9 {
                    {
                        array_10.value().string(item_11);
                    }
                }
                array_10.finish();
            }
        }
        object_7.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_start_condition(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::StartCondition,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.description {
        object.key("Description").string(var_1);
    }
    if let Some(var_2) = &input.segment_start_condition {
        let mut object_3 = object.key("SegmentStartCondition").start_object();
        crate::json_ser::serialize_structure_crate_model_segment_condition(&mut object_3, var_2)?;
        object_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_treatment_resource(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::TreatmentResource,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.id {
        object.key("Id").string(var_1);
    }
    if let Some(var_2) = &input.message_configuration {
        let mut object_3 = object.key("MessageConfiguration").start_object();
        crate::json_ser::serialize_structure_crate_model_message_configuration(&mut object_3, var_2)?;
        object_3.finish();
    }
    if let Some(var_4) = &input.schedule {
        let mut object_5 = object.key("Schedule").start_object();
        crate::json_ser::serialize_structure_crate_model_schedule(&mut object_5, var_4)?;
        object_5.finish();
    }
    if let Some(var_6) = &input.size_percent {
        object.key("SizePercent").number(smithy_types::Number::NegInt(i64::from(*var_6)));
    }
    if let Some(var_7) = &input.state {
        let mut object_8 = object.key("State").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_state(&mut object_8, var_7)?;
        object_8.finish();
    }
    if let Some(var_9) = &input.treatment_description {
        object.key("TreatmentDescription").string(var_9);
    }
    if let Some(var_10) = &input.treatment_name {
        object.key("TreatmentName").string(var_10);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_wait_activity(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::WaitActivity,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.next_activity {
        object.key("NextActivity").string(var_1);
    }
    if let Some(var_2) = &input.wait_time {
        let mut object_3 = object.key("WaitTime").start_object();
        crate::json_ser::serialize_structure_crate_model_wait_time(&mut object_3, var_2)?;
        object_3.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_wait_time(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::WaitTime,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.wait_for {
        object.key("WaitFor").string(var_1);
    }
    if let Some(var_2) = &input.wait_until {
        object.key("WaitUntil").string(var_2);
    }
    Ok(())
}

pub fn serialize_structure_crate_model_write_application_settings_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::WriteApplicationSettingsRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.campaign_hook {
        let mut object_2 = object.key("CampaignHook").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_hook(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.cloud_watch_metrics_enabled {
        object.key("CloudWatchMetricsEnabled").boolean(*var_3);
    }
    if let Some(var_4) = &input.limits {
        let mut object_5 = object.key("Limits").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_limits(&mut object_5, var_4)?;
        object_5.finish();
    }
    if let Some(var_6) = &input.quiet_time {
        let mut object_7 = object.key("QuietTime").start_object();
        crate::json_ser::serialize_structure_crate_model_quiet_time(&mut object_7, var_6)?;
        object_7.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_write_campaign_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::WriteCampaignRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.additional_treatments {
        let mut array_2 = object.key("AdditionalTreatments").start_array();
        for item_3 in var_1 {
            {
                let mut object_4 = array_2.value().start_object();
                crate::json_ser::serialize_structure_crate_model_write_treatment_resource(&mut object_4, item_3)?;
                object_4.finish();
            }
        }
        array_2.finish();
    }
    if let Some(var_5) = &input.description {
        object.key("Description").string(var_5);
    }
    if let Some(var_6) = &input.holdout_percent {
        object.key("HoldoutPercent").number(smithy_types::Number::NegInt(i64::from(*var_6)));
    }
    if let Some(var_7) = &input.hook {
        let mut object_8 = object.key("Hook").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_hook(&mut object_8, var_7)?;
        object_8.finish();
    }
    if let Some(var_9) = &input.is_paused {
        object.key("IsPaused").boolean(*var_9);
    }
    if let Some(var_10) = &input.limits {
        let mut object_11 = object.key("Limits").start_object();
        crate::json_ser::serialize_structure_crate_model_campaign_limits(&mut object_11, var_10)?;
        object_11.finish();
    }
    if let Some(var_12) = &input.message_configuration {
        let mut object_13 = object.key("MessageConfiguration").start_object();
        crate::json_ser::serialize_structure_crate_model_message_configuration(&mut object_13, var_12)?;
        object_13.finish();
    }
    if let Some(var_14) = &input.name {
        object.key("Name").string(var_14);
    }
    if let Some(var_15) = &input.schedule {
        let mut object_16 = object.key("Schedule").start_object();
        crate::json_ser::serialize_structure_crate_model_schedule(&mut object_16, var_15)?;
        object_16.finish();
    }
    if let Some(var_17) = &input.segment_id {
        object.key("SegmentId").string(var_17);
    }
    if let Some(var_18) = &input.segment_version {
        object.key("SegmentVersion").number(smithy_types::Number::NegInt(i64::from(*var_18)));
    }
    if let Some(var_19) = &input.treatment_description {
        object.key("TreatmentDescription").string(var_19);
    }
    if let Some(var_20) = &input.treatment_name {
        object.key("TreatmentName").string(var_20);
    }
    if let Some(var_21) = &input.tags {
        let mut object_22 = object.key("tags").start_object();
        for (key_23, value_24) in var_21 {
            {
                object_22.key(key_23).string(value_24);
            }
        }
        object_22.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_write_segment_request(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::WriteSegmentRequest,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.dimensions {
        let mut object_2 = object.key("Dimensions").start_object();
        crate::json_ser::serialize_structure_crate_model_segment_dimensions(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.name {
        object.key("Name").string(var_3);
    }
    if let Some(var_4) = &input.tags {
        let mut object_5 = object.key("tags").start_object();
        for (key_6, value_7) in var_4 {
            {
                object_5.key(key_6).string(value_7);
            }
        }
        object_5.finish();
    }
    Ok(())
}

pub fn serialize_structure_crate_model_write_treatment_resource(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::WriteTreatmentResource,
) -> std::result::Result<(), smithy_http::operation::SerializationError> {
    if let Some(var_1) = &input.message_configuration {
        let mut object_2 = object.key("MessageConfiguration").start_object();
        crate::json_ser::serialize_structure_crate_model_message_configuration(&mut object_2, var_1)?;
        object_2.finish();
    }
    if let Some(var_3) = &input.schedule {
        let mut object_4 = object.key("Schedule").start_object();
        crate::json_ser::serialize_structure_crate_model_schedule(&mut object_4, var_3)?;
        object_4.finish();
    }
    if let Some(var_5) = &input.size_percent {
        object.key("SizePercent").number(smithy_types::Number::NegInt(i64::from(*var_5)));
    }
    if let Some(var_6) = &input.treatment_description {
        object.key("TreatmentDescription").string(var_6);
    }
    if let Some(var_7) = &input.treatment_name {
        object.key("TreatmentName").string(var_7);
    }
    Ok(())
}
