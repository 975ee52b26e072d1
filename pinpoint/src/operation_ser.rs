/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_payload_create_campaign_input(
    input: &crate::input::CreateCampaignInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.write_campaign_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_write_campaign_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_create_import_job_input(
    input: &crate::input::CreateImportJobInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.import_job_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_import_job_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_create_segment_input(
    input: &crate::input::CreateSegmentInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.write_segment_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_write_segment_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_send_messages_input(
    input: &crate::input::SendMessagesInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.message_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_message_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_update_apns_channel_input(
    input: &crate::input::UpdateApnsChannelInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.apns_channel_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_apns_channel_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_update_application_settings_input(
    input: &crate::input::UpdateApplicationSettingsInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.write_application_settings_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_write_application_settings_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_update_campaign_input(
    input: &crate::input::UpdateCampaignInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.write_campaign_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_write_campaign_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_update_endpoint_input(
    input: &crate::input::UpdateEndpointInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.endpoint_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_endpoint_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_update_endpoints_batch_input(
    input: &crate::input::UpdateEndpointsBatchInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.endpoint_batch_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_endpoint_batch_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_update_gcm_channel_input(
    input: &crate::input::UpdateGcmChannelInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.gcm_channel_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_gcm_channel_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}

pub fn serialize_payload_update_segment_input(
    input: &crate::input::UpdateSegmentInput,
) -> std::result::Result<smithy_http::body::SdkBody, smithy_http::operation::SerializationError> {
    if let Some(payload) = &input.write_segment_request {
        let mut out = String::new();
        let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
        crate::json_ser::serialize_structure_crate_model_write_segment_request(&mut object, payload)?;
        object.finish();
        Ok(smithy_http::body::SdkBody::from(out))
    } else {
        Ok(smithy_http::body::SdkBody::empty())
    }
}
