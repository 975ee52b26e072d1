/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::convert::TryInto;

pub fn deser_structure_crate_error_bad_request_exception_json_err(
    value: &[u8],
    mut builder: crate::error::bad_request_exception::Builder,
) -> std::result::Result<crate::error::bad_request_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(value))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Message" => {
                    builder = builder.set_message(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                "RequestID" => {
                    builder = builder.set_request_id(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                _ => smithy_json::deserialize::token::skip_value(tokens)?,
            },
            other => {
                return Err(smithy_json::deserialize::Error::custom(format!(
                    "expected object key or end object, found: {:?}",
                    other
                )))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_crate_error_forbidden_exception_json_err(
    value: &[u8],
    mut builder: crate::error::forbidden_exception::Builder,
) -> std::result::Result<crate::error::forbidden_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(value))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Message" => {
                    builder = builder.set_message(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                "RequestID" => {
                    builder = builder.set_request_id(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                _ => smithy_json::deserialize::token::skip_value(tokens)?,
            },
            other => {
                return Err(smithy_json::deserialize::Error::custom(format!(
                    "expected object key or end object, found: {:?}",
                    other
                )))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_crate_error_internal_server_error_exception_json_err(
    value: &[u8],
    mut builder: crate::error::internal_server_error_exception::Builder,
) -> std::result::Result<crate::error::internal_server_error_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(value))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Message" => {
                    builder = builder.set_message(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                "RequestID" => {
                    builder = builder.set_request_id(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                _ => smithy_json::deserialize::token::skip_value(tokens)?,
            },
            other => {
                return Err(smithy_json::deserialize::Error::custom(format!(
                    "expected object key or end object, found: {:?}",
                    other
                )))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_crate_error_method_not_allowed_exception_json_err(
    value: &[u8],
    mut builder: crate::error::method_not_allowed_exception::Builder,
) -> std::result::Result<crate::error::method_not_allowed_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(value))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Message" => {
                    builder = builder.set_message(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                "RequestID" => {
                    builder = builder.set_request_id(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                _ => smithy_json::deserialize::token::skip_value(tokens)?,
            },
            other => {
                return Err(smithy_json::deserialize::Error::custom(format!(
                    "expected object key or end object, found: {:?}",
                    other
                )))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_crate_error_not_found_exception_json_err(
    value: &[u8],
    mut builder: crate::error::not_found_exception::Builder,
) -> std::result::Result<crate::error::not_found_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(value))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Message" => {
                    builder = builder.set_message(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                "RequestID" => {
                    builder = builder.set_request_id(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                _ => smithy_json::deserialize::token::skip_value(tokens)?,
            },
            other => {
                return Err(smithy_json::deserialize::Error::custom(format!(
                    "expected object key or end object, found: {:?}",
                    other
                )))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_crate_error_too_many_requests_exception_json_err(
    value: &[u8],
    mut builder: crate::error::too_many_requests_exception::Builder,
) -> std::result::Result<crate::error::too_many_requests_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(value))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "Message" => {
                    builder = builder.set_message(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                "RequestID" => {
                    builder = builder.set_request_id(
                        smithy_json::deserialize::token::expect_string_or_null(tokens.next())?,
                    );
                }
                _ => smithy_json::deserialize::token::skip_value(tokens)?,
            },
            other => {
                return Err(smithy_json::deserialize::Error::custom(format!(
                    "expected object key or end object, found: {:?}",
                    other
                )))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn or_empty_doc(data: &[u8]) -> &[u8] {
    if data.is_empty() {
        b"{}"
    } else {
        data
    }
}

pub fn deser_payload_create_campaign_output_campaign_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::CampaignResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_campaign_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_create_import_job_output_import_job_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ImportJobResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_import_job_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_create_segment_output_segment_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::SegmentResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_segment_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_delete_apns_channel_output_apns_channel_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ApnsChannelResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_apns_channel_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_delete_campaign_output_campaign_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::CampaignResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_campaign_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_delete_gcm_channel_output_gcm_channel_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::GcmChannelResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_gcm_channel_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_delete_segment_output_segment_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::SegmentResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_segment_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_apns_channel_output_apns_channel_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ApnsChannelResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_apns_channel_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_application_settings_output_application_settings_resource(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ApplicationSettingsResource>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_application_settings_resource(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_campaign_output_campaign_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::CampaignResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_campaign_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_campaign_activities_output_activities_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ActivitiesResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_activities_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_campaign_date_range_kpi_output_campaign_date_range_kpi_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::CampaignDateRangeKpiResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_campaign_date_range_kpi_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_campaign_version_output_campaign_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::CampaignResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_campaign_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_campaign_versions_output_campaigns_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::CampaignsResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_campaigns_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_campaigns_output_campaigns_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::CampaignsResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_campaigns_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_endpoint_output_endpoint_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::EndpointResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_endpoint_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_gcm_channel_output_gcm_channel_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::GcmChannelResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_gcm_channel_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_import_job_output_import_job_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ImportJobResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_import_job_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_import_jobs_output_import_jobs_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ImportJobsResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_import_jobs_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_journey_output_journey_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::JourneyResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_journey_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_segment_output_segment_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::SegmentResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_segment_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_segment_import_jobs_output_import_jobs_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ImportJobsResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_import_jobs_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_segment_version_output_segment_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::SegmentResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_segment_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_segment_versions_output_segments_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::SegmentsResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_segments_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_get_segments_output_segments_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::SegmentsResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_segments_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_send_messages_output_message_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::MessageResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_message_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_update_apns_channel_output_apns_channel_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ApnsChannelResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_apns_channel_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_update_application_settings_output_application_settings_resource(
    input: &[u8],
) -> std::result::Result<Option<crate::model::ApplicationSettingsResource>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_application_settings_resource(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_update_campaign_output_campaign_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::CampaignResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_campaign_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_update_endpoint_output_message_body(
    input: &[u8],
) -> std::result::Result<Option<crate::model::MessageBody>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_message_body(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_update_endpoints_batch_output_message_body(
    input: &[u8],
) -> std::result::Result<Option<crate::model::MessageBody>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_message_body(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_update_gcm_channel_output_gcm_channel_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::GcmChannelResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_gcm_channel_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_payload_update_segment_output_segment_response(
    input: &[u8],
) -> std::result::Result<Option<crate::model::SegmentResponse>, smithy_json::deserialize::Error> {
    let mut tokens_owned = smithy_json::deserialize::json_token_iter(input).peekable();
    let tokens = &mut tokens_owned;
    if tokens.peek().is_none() {
        return Ok(None);
    }
    let result = crate::json_deser::deser_structure_crate_model_segment_response(tokens)?;
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(result)
}

pub fn deser_structure_crate_model_activities_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ActivitiesResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::activities_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Item" => {
                                builder = builder.set_item(
                                    crate::json_deser::deser_list_of_activity_response(tokens)?
                                );
                            }
                            "NextToken" => {
                                builder = builder.set_next_token(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_activity<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::Activity>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::activity::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Description" => {
                                builder = builder.set_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "EMAIL" => {
                                builder = builder.set_email(
                                    crate::json_deser::deser_structure_crate_model_email_message_activity(tokens)?
                                );
                            }
                            "Holdout" => {
                                builder = builder.set_holdout(
                                    crate::json_deser::deser_structure_crate_model_holdout_activity(tokens)?
                                );
                            }
                            "RandomSplit" => {
                                builder = builder.set_random_split(
                                    crate::json_deser::deser_structure_crate_model_random_split_activity(tokens)?
                                );
                            }
                            "Wait" => {
                                builder = builder.set_wait(
                                    crate::json_deser::deser_structure_crate_model_wait_activity(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_activity_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ActivityResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::activity_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CampaignId" => {
                                builder = builder.set_campaign_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "End" => {
                                builder = builder.set_end(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Result" => {
                                builder = builder.set_result(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ScheduledStart" => {
                                builder = builder.set_scheduled_start(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Start" => {
                                builder = builder.set_start(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "State" => {
                                builder = builder.set_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SuccessfulEndpointCount" => {
                                builder = builder.set_successful_endpoint_count(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "TimezonesCompletedCount" => {
                                builder = builder.set_timezones_completed_count(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "TimezonesTotalCount" => {
                                builder = builder.set_timezones_total_count(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "TotalEndpointCount" => {
                                builder = builder.set_total_endpoint_count(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "TreatmentId" => {
                                builder = builder.set_treatment_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_address_configuration<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::AddressConfiguration>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::address_configuration::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "BodyOverride" => {
                                builder = builder.set_body_override(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ChannelType" => {
                                builder = builder.set_channel_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ChannelType::from(s.as_str()))
                                );
                            }
                            "Context" => {
                                builder = builder.set_context(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            "RawContent" => {
                                builder = builder.set_raw_content(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Substitutions" => {
                                builder = builder.set_substitutions(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            "TitleOverride" => {
                                builder = builder.set_title_override(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_apns_channel_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ApnsChannelRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::apns_channel_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "BundleId" => {
                                builder = builder.set_bundle_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Certificate" => {
                                builder = builder.set_certificate(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "DefaultAuthenticationMethod" => {
                                builder = builder.set_default_authentication_method(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Enabled" => {
                                builder = builder.set_enabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "PrivateKey" => {
                                builder = builder.set_private_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TeamId" => {
                                builder = builder.set_team_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TokenKey" => {
                                builder = builder.set_token_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TokenKeyId" => {
                                builder = builder.set_token_key_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_apns_channel_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ApnsChannelResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::apns_channel_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CreationDate" => {
                                builder = builder.set_creation_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "DefaultAuthenticationMethod" => {
                                builder = builder.set_default_authentication_method(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Enabled" => {
                                builder = builder.set_enabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "HasCredential" => {
                                builder = builder.set_has_credential(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "HasTokenKey" => {
                                builder = builder.set_has_token_key(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "IsArchived" => {
                                builder = builder.set_is_archived(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "LastModifiedBy" => {
                                builder = builder.set_last_modified_by(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "LastModifiedDate" => {
                                builder = builder.set_last_modified_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Platform" => {
                                builder = builder.set_platform(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Version" => {
                                builder = builder.set_version(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_apns_message<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ApnsMessage>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::apns_message::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Action" => {
                                builder = builder.set_action(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Action::from(s.as_str()))
                                );
                            }
                            "Badge" => {
                                builder = builder.set_badge(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Body" => {
                                builder = builder.set_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Category" => {
                                builder = builder.set_category(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CollapseId" => {
                                builder = builder.set_collapse_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Data" => {
                                builder = builder.set_data(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            "MediaUrl" => {
                                builder = builder.set_media_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "PreferredAuthenticationMethod" => {
                                builder = builder.set_preferred_authentication_method(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Priority" => {
                                builder = builder.set_priority(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "RawContent" => {
                                builder = builder.set_raw_content(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SilentPush" => {
                                builder = builder.set_silent_push(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "Sound" => {
                                builder = builder.set_sound(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Substitutions" => {
                                builder = builder.set_substitutions(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            "ThreadId" => {
                                builder = builder.set_thread_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TimeToLive" => {
                                builder = builder.set_time_to_live(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Title" => {
                                builder = builder.set_title(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Url" => {
                                builder = builder.set_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_application_settings_resource<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ApplicationSettingsResource>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::application_settings_resource::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CampaignHook" => {
                                builder = builder.set_campaign_hook(
                                    crate::json_deser::deser_structure_crate_model_campaign_hook(tokens)?
                                );
                            }
                            "LastModifiedDate" => {
                                builder = builder.set_last_modified_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Limits" => {
                                builder = builder.set_limits(
                                    crate::json_deser::deser_structure_crate_model_campaign_limits(tokens)?
                                );
                            }
                            "QuietTime" => {
                                builder = builder.set_quiet_time(
                                    crate::json_deser::deser_structure_crate_model_quiet_time(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_attribute_dimension<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::AttributeDimension>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::attribute_dimension::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "AttributeType" => {
                                builder = builder.set_attribute_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::AttributeType::from(s.as_str()))
                                );
                            }
                            "Values" => {
                                builder = builder.set_values(
                                    crate::json_deser::deser_list_of_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_base_kpi_result<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::BaseKpiResult>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::base_kpi_result::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Rows" => {
                                builder = builder.set_rows(
                                    crate::json_deser::deser_list_of_result_row(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaign_date_range_kpi_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignDateRangeKpiResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaign_date_range_kpi_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CampaignId" => {
                                builder = builder.set_campaign_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "EndTime" => {
                                builder = builder.set_end_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(
                                        tokens.next(),
                                        smithy_types::instant::Format::DateTime,
                                    )?
                                );
                            }
                            "KpiName" => {
                                builder = builder.set_kpi_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "KpiResult" => {
                                builder = builder.set_kpi_result(
                                    crate::json_deser::deser_structure_crate_model_base_kpi_result(tokens)?
                                );
                            }
                            "NextToken" => {
                                builder = builder.set_next_token(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "StartTime" => {
                                builder = builder.set_start_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(
                                        tokens.next(),
                                        smithy_types::instant::Format::DateTime,
                                    )?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaign_email_message<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignEmailMessage>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaign_email_message::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Body" => {
                                builder = builder.set_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "FromAddress" => {
                                builder = builder.set_from_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "HtmlBody" => {
                                builder = builder.set_html_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Title" => {
                                builder = builder.set_title(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaign_event_filter<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignEventFilter>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaign_event_filter::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Dimensions" => {
                                builder = builder.set_dimensions(
                                    crate::json_deser::deser_structure_crate_model_event_dimensions(tokens)?
                                );
                            }
                            "FilterType" => {
                                builder = builder.set_filter_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::FilterType::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaign_hook<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignHook>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaign_hook::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "LambdaFunctionName" => {
                                builder = builder.set_lambda_function_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Mode" => {
                                builder = builder.set_mode(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Mode::from(s.as_str()))
                                );
                            }
                            "WebUrl" => {
                                builder = builder.set_web_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaign_limits<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignLimits>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaign_limits::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Daily" => {
                                builder = builder.set_daily(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "MaximumDuration" => {
                                builder = builder.set_maximum_duration(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "MessagesPerSecond" => {
                                builder = builder.set_messages_per_second(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Total" => {
                                builder = builder.set_total(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaign_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaign_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "AdditionalTreatments" => {
                                builder = builder.set_additional_treatments(
                                    crate::json_deser::deser_list_of_treatment_resource(tokens)?
                                );
                            }
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CreationDate" => {
                                builder = builder.set_creation_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "DefaultState" => {
                                builder = builder.set_default_state(
                                    crate::json_deser::deser_structure_crate_model_campaign_state(tokens)?
                                );
                            }
                            "Description" => {
                                builder = builder.set_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "HoldoutPercent" => {
                                builder = builder.set_holdout_percent(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Hook" => {
                                builder = builder.set_hook(
                                    crate::json_deser::deser_structure_crate_model_campaign_hook(tokens)?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "IsPaused" => {
                                builder = builder.set_is_paused(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "LastModifiedDate" => {
                                builder = builder.set_last_modified_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Limits" => {
                                builder = builder.set_limits(
                                    crate::json_deser::deser_structure_crate_model_campaign_limits(tokens)?
                                );
                            }
                            "MessageConfiguration" => {
                                builder = builder.set_message_configuration(
                                    crate::json_deser::deser_structure_crate_model_message_configuration(tokens)?
                                );
                            }
                            "Name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Schedule" => {
                                builder = builder.set_schedule(
                                    crate::json_deser::deser_structure_crate_model_schedule(tokens)?
                                );
                            }
                            "SegmentId" => {
                                builder = builder.set_segment_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SegmentVersion" => {
                                builder = builder.set_segment_version(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "State" => {
                                builder = builder.set_state(
                                    crate::json_deser::deser_structure_crate_model_campaign_state(tokens)?
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            "TreatmentDescription" => {
                                builder = builder.set_treatment_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TreatmentName" => {
                                builder = builder.set_treatment_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Version" => {
                                builder = builder.set_version(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaign_sms_message<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignSmsMessage>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaign_sms_message::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Body" => {
                                builder = builder.set_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "MessageType" => {
                                builder = builder.set_message_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::MessageType::from(s.as_str()))
                                );
                            }
                            "SenderId" => {
                                builder = builder.set_sender_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaign_state<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignState>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaign_state::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "CampaignStatus" => {
                                builder = builder.set_campaign_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::CampaignStatus::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_campaigns_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::CampaignsResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::campaigns_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Item" => {
                                builder = builder.set_item(
                                    crate::json_deser::deser_list_of_campaign_response(tokens)?
                                );
                            }
                            "NextToken" => {
                                builder = builder.set_next_token(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_default_message<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::DefaultMessage>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::default_message::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Body" => {
                                builder = builder.set_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Substitutions" => {
                                builder = builder.set_substitutions(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_direct_message_configuration<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::DirectMessageConfiguration>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::direct_message_configuration::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "APNSMessage" => {
                                builder = builder.set_apns_message(
                                    crate::json_deser::deser_structure_crate_model_apns_message(tokens)?
                                );
                            }
                            "DefaultMessage" => {
                                builder = builder.set_default_message(
                                    crate::json_deser::deser_structure_crate_model_default_message(tokens)?
                                );
                            }
                            "GCMMessage" => {
                                builder = builder.set_gcm_message(
                                    crate::json_deser::deser_structure_crate_model_gcm_message(tokens)?
                                );
                            }
                            "SMSMessage" => {
                                builder = builder.set_sms_message(
                                    crate::json_deser::deser_structure_crate_model_sms_message(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_email_message_activity<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EmailMessageActivity>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::email_message_activity::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "MessageConfig" => {
                                builder = builder.set_message_config(
                                    crate::json_deser::deser_structure_crate_model_journey_email_message(tokens)?
                                );
                            }
                            "NextActivity" => {
                                builder = builder.set_next_activity(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TemplateName" => {
                                builder = builder.set_template_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_batch_item<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointBatchItem>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_batch_item::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Address" => {
                                builder = builder.set_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Attributes" => {
                                builder = builder.set_attributes(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            "ChannelType" => {
                                builder = builder.set_channel_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ChannelType::from(s.as_str()))
                                );
                            }
                            "Demographic" => {
                                builder = builder.set_demographic(
                                    crate::json_deser::deser_structure_crate_model_endpoint_demographic(tokens)?
                                );
                            }
                            "EffectiveDate" => {
                                builder = builder.set_effective_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "EndpointStatus" => {
                                builder = builder.set_endpoint_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Location" => {
                                builder = builder.set_location(
                                    crate::json_deser::deser_structure_crate_model_endpoint_location(tokens)?
                                );
                            }
                            "Metrics" => {
                                builder = builder.set_metrics(
                                    crate::json_deser::deser_map_of_double(tokens)?
                                );
                            }
                            "OptOut" => {
                                builder = builder.set_opt_out(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "RequestId" => {
                                builder = builder.set_request_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "User" => {
                                builder = builder.set_user(
                                    crate::json_deser::deser_structure_crate_model_endpoint_user(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_batch_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointBatchRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_batch_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Item" => {
                                builder = builder.set_item(
                                    crate::json_deser::deser_list_of_endpoint_batch_item(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_demographic<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointDemographic>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_demographic::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "AppVersion" => {
                                builder = builder.set_app_version(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Locale" => {
                                builder = builder.set_locale(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Make" => {
                                builder = builder.set_make(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Model" => {
                                builder = builder.set_model(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ModelVersion" => {
                                builder = builder.set_model_version(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Platform" => {
                                builder = builder.set_platform(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "PlatformVersion" => {
                                builder = builder.set_platform_version(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Timezone" => {
                                builder = builder.set_timezone(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_location<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointLocation>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_location::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "City" => {
                                builder = builder.set_city(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Country" => {
                                builder = builder.set_country(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Latitude" => {
                                builder = builder.set_latitude(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.to_f64())
                                );
                            }
                            "Longitude" => {
                                builder = builder.set_longitude(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.to_f64())
                                );
                            }
                            "PostalCode" => {
                                builder = builder.set_postal_code(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Region" => {
                                builder = builder.set_region(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_message_result<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointMessageResult>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_message_result::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Address" => {
                                builder = builder.set_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "DeliveryStatus" => {
                                builder = builder.set_delivery_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::DeliveryStatus::from(s.as_str()))
                                );
                            }
                            "MessageId" => {
                                builder = builder.set_message_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "StatusCode" => {
                                builder = builder.set_status_code(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "StatusMessage" => {
                                builder = builder.set_status_message(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "UpdatedToken" => {
                                builder = builder.set_updated_token(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Address" => {
                                builder = builder.set_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Attributes" => {
                                builder = builder.set_attributes(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            "ChannelType" => {
                                builder = builder.set_channel_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ChannelType::from(s.as_str()))
                                );
                            }
                            "Demographic" => {
                                builder = builder.set_demographic(
                                    crate::json_deser::deser_structure_crate_model_endpoint_demographic(tokens)?
                                );
                            }
                            "EffectiveDate" => {
                                builder = builder.set_effective_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "EndpointStatus" => {
                                builder = builder.set_endpoint_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Location" => {
                                builder = builder.set_location(
                                    crate::json_deser::deser_structure_crate_model_endpoint_location(tokens)?
                                );
                            }
                            "Metrics" => {
                                builder = builder.set_metrics(
                                    crate::json_deser::deser_map_of_double(tokens)?
                                );
                            }
                            "OptOut" => {
                                builder = builder.set_opt_out(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "RequestId" => {
                                builder = builder.set_request_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "User" => {
                                builder = builder.set_user(
                                    crate::json_deser::deser_structure_crate_model_endpoint_user(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Address" => {
                                builder = builder.set_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Attributes" => {
                                builder = builder.set_attributes(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            "ChannelType" => {
                                builder = builder.set_channel_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ChannelType::from(s.as_str()))
                                );
                            }
                            "CohortId" => {
                                builder = builder.set_cohort_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CreationDate" => {
                                builder = builder.set_creation_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Demographic" => {
                                builder = builder.set_demographic(
                                    crate::json_deser::deser_structure_crate_model_endpoint_demographic(tokens)?
                                );
                            }
                            "EffectiveDate" => {
                                builder = builder.set_effective_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "EndpointStatus" => {
                                builder = builder.set_endpoint_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Location" => {
                                builder = builder.set_location(
                                    crate::json_deser::deser_structure_crate_model_endpoint_location(tokens)?
                                );
                            }
                            "Metrics" => {
                                builder = builder.set_metrics(
                                    crate::json_deser::deser_map_of_double(tokens)?
                                );
                            }
                            "OptOut" => {
                                builder = builder.set_opt_out(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "RequestId" => {
                                builder = builder.set_request_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "User" => {
                                builder = builder.set_user(
                                    crate::json_deser::deser_structure_crate_model_endpoint_user(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_send_configuration<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointSendConfiguration>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_send_configuration::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "BodyOverride" => {
                                builder = builder.set_body_override(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Context" => {
                                builder = builder.set_context(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            "RawContent" => {
                                builder = builder.set_raw_content(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Substitutions" => {
                                builder = builder.set_substitutions(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            "TitleOverride" => {
                                builder = builder.set_title_override(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_endpoint_user<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EndpointUser>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::endpoint_user::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "UserAttributes" => {
                                builder = builder.set_user_attributes(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            "UserId" => {
                                builder = builder.set_user_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_event_dimensions<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::EventDimensions>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::event_dimensions::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Attributes" => {
                                builder = builder.set_attributes(
                                    crate::json_deser::deser_map_of_attribute_dimension(tokens)?
                                );
                            }
                            "EventType" => {
                                builder = builder.set_event_type(
                                    crate::json_deser::deser_structure_crate_model_set_dimension(tokens)?
                                );
                            }
                            "Metrics" => {
                                builder = builder.set_metrics(
                                    crate::json_deser::deser_map_of_metric_dimension(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_gcm_channel_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::GcmChannelRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::gcm_channel_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApiKey" => {
                                builder = builder.set_api_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Enabled" => {
                                builder = builder.set_enabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_gcm_channel_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::GcmChannelResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::gcm_channel_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CreationDate" => {
                                builder = builder.set_creation_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Credential" => {
                                builder = builder.set_credential(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Enabled" => {
                                builder = builder.set_enabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "HasCredential" => {
                                builder = builder.set_has_credential(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "IsArchived" => {
                                builder = builder.set_is_archived(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "LastModifiedBy" => {
                                builder = builder.set_last_modified_by(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "LastModifiedDate" => {
                                builder = builder.set_last_modified_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Platform" => {
                                builder = builder.set_platform(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Version" => {
                                builder = builder.set_version(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_gcm_message<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::GcmMessage>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::gcm_message::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Action" => {
                                builder = builder.set_action(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Action::from(s.as_str()))
                                );
                            }
                            "Body" => {
                                builder = builder.set_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CollapseKey" => {
                                builder = builder.set_collapse_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Data" => {
                                builder = builder.set_data(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            "IconReference" => {
                                builder = builder.set_icon_reference(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ImageIconUrl" => {
                                builder = builder.set_image_icon_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ImageUrl" => {
                                builder = builder.set_image_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Priority" => {
                                builder = builder.set_priority(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "RawContent" => {
                                builder = builder.set_raw_content(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "RestrictedPackageName" => {
                                builder = builder.set_restricted_package_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SilentPush" => {
                                builder = builder.set_silent_push(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "SmallImageIconUrl" => {
                                builder = builder.set_small_image_icon_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Sound" => {
                                builder = builder.set_sound(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Substitutions" => {
                                builder = builder.set_substitutions(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            "TimeToLive" => {
                                builder = builder.set_time_to_live(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Title" => {
                                builder = builder.set_title(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Url" => {
                                builder = builder.set_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_gps_coordinates<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::GpsCoordinates>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::gps_coordinates::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Latitude" => {
                                builder = builder.set_latitude(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.to_f64())
                                );
                            }
                            "Longitude" => {
                                builder = builder.set_longitude(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.to_f64())
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_gps_point_dimension<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::GpsPointDimension>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::gps_point_dimension::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Coordinates" => {
                                builder = builder.set_coordinates(
                                    crate::json_deser::deser_structure_crate_model_gps_coordinates(tokens)?
                                );
                            }
                            "RangeInKilometers" => {
                                builder = builder.set_range_in_kilometers(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.to_f64())
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_holdout_activity<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::HoldoutActivity>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::holdout_activity::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "NextActivity" => {
                                builder = builder.set_next_activity(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Percentage" => {
                                builder = builder.set_percentage(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_import_job_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ImportJobRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::import_job_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "DefineSegment" => {
                                builder = builder.set_define_segment(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "ExternalId" => {
                                builder = builder.set_external_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Format" => {
                                builder = builder.set_format(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Format::from(s.as_str()))
                                );
                            }
                            "RegisterEndpoints" => {
                                builder = builder.set_register_endpoints(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "RoleArn" => {
                                builder = builder.set_role_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "S3Url" => {
                                builder = builder.set_s3_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SegmentId" => {
                                builder = builder.set_segment_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SegmentName" => {
                                builder = builder.set_segment_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_import_job_resource<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ImportJobResource>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::import_job_resource::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "DefineSegment" => {
                                builder = builder.set_define_segment(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "ExternalId" => {
                                builder = builder.set_external_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Format" => {
                                builder = builder.set_format(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Format::from(s.as_str()))
                                );
                            }
                            "RegisterEndpoints" => {
                                builder = builder.set_register_endpoints(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "RoleArn" => {
                                builder = builder.set_role_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "S3Url" => {
                                builder = builder.set_s3_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SegmentId" => {
                                builder = builder.set_segment_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SegmentName" => {
                                builder = builder.set_segment_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_import_job_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ImportJobResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::import_job_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CompletedPieces" => {
                                builder = builder.set_completed_pieces(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "CompletionDate" => {
                                builder = builder.set_completion_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CreationDate" => {
                                builder = builder.set_creation_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Definition" => {
                                builder = builder.set_definition(
                                    crate::json_deser::deser_structure_crate_model_import_job_resource(tokens)?
                                );
                            }
                            "FailedPieces" => {
                                builder = builder.set_failed_pieces(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Failures" => {
                                builder = builder.set_failures(
                                    crate::json_deser::deser_list_of_string(tokens)?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "JobStatus" => {
                                builder = builder.set_job_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::JobStatus::from(s.as_str()))
                                );
                            }
                            "TotalFailures" => {
                                builder = builder.set_total_failures(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "TotalPieces" => {
                                builder = builder.set_total_pieces(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "TotalProcessed" => {
                                builder = builder.set_total_processed(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_import_jobs_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ImportJobsResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::import_jobs_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Item" => {
                                builder = builder.set_item(
                                    crate::json_deser::deser_list_of_import_job_response(tokens)?
                                );
                            }
                            "NextToken" => {
                                builder = builder.set_next_token(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_journey_email_message<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::JourneyEmailMessage>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::journey_email_message::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "FromAddress" => {
                                builder = builder.set_from_address(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_journey_limits<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::JourneyLimits>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::journey_limits::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "DailyCap" => {
                                builder = builder.set_daily_cap(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "EndpointReentryCap" => {
                                builder = builder.set_endpoint_reentry_cap(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "MessagesPerSecond" => {
                                builder = builder.set_messages_per_second(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_journey_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::JourneyResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::journey_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Activities" => {
                                builder = builder.set_activities(
                                    crate::json_deser::deser_map_of_activity(tokens)?
                                );
                            }
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CreationDate" => {
                                builder = builder.set_creation_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "LastModifiedDate" => {
                                builder = builder.set_last_modified_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Limits" => {
                                builder = builder.set_limits(
                                    crate::json_deser::deser_structure_crate_model_journey_limits(tokens)?
                                );
                            }
                            "LocalTime" => {
                                builder = builder.set_local_time(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "Name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "QuietTime" => {
                                builder = builder.set_quiet_time(
                                    crate::json_deser::deser_structure_crate_model_quiet_time(tokens)?
                                );
                            }
                            "RefreshFrequency" => {
                                builder = builder.set_refresh_frequency(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Schedule" => {
                                builder = builder.set_schedule(
                                    crate::json_deser::deser_structure_crate_model_journey_schedule(tokens)?
                                );
                            }
                            "StartActivity" => {
                                builder = builder.set_start_activity(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "StartCondition" => {
                                builder = builder.set_start_condition(
                                    crate::json_deser::deser_structure_crate_model_start_condition(tokens)?
                                );
                            }
                            "State" => {
                                builder = builder.set_state(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::State::from(s.as_str()))
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_journey_schedule<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::JourneySchedule>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::journey_schedule::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "EndTime" => {
                                builder = builder.set_end_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(
                                        tokens.next(),
                                        smithy_types::instant::Format::DateTime,
                                    )?
                                );
                            }
                            "StartTime" => {
                                builder = builder.set_start_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(
                                        tokens.next(),
                                        smithy_types::instant::Format::DateTime,
                                    )?
                                );
                            }
                            "Timezone" => {
                                builder = builder.set_timezone(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_message<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::Message>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::message::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Action" => {
                                builder = builder.set_action(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Action::from(s.as_str()))
                                );
                            }
                            "Body" => {
                                builder = builder.set_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ImageIconUrl" => {
                                builder = builder.set_image_icon_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ImageSmallIconUrl" => {
                                builder = builder.set_image_small_icon_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ImageUrl" => {
                                builder = builder.set_image_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "JsonBody" => {
                                builder = builder.set_json_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "MediaUrl" => {
                                builder = builder.set_media_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "RawContent" => {
                                builder = builder.set_raw_content(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SilentPush" => {
                                builder = builder.set_silent_push(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "TimeToLive" => {
                                builder = builder.set_time_to_live(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Title" => {
                                builder = builder.set_title(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Url" => {
                                builder = builder.set_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_message_body<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::MessageBody>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::message_body::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Message" => {
                                builder = builder.set_message(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "RequestID" => {
                                builder = builder.set_request_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_message_configuration<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::MessageConfiguration>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::message_configuration::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ADMMessage" => {
                                builder = builder.set_adm_message(
                                    crate::json_deser::deser_structure_crate_model_message(tokens)?
                                );
                            }
                            "APNSMessage" => {
                                builder = builder.set_apns_message(
                                    crate::json_deser::deser_structure_crate_model_message(tokens)?
                                );
                            }
                            "BaiduMessage" => {
                                builder = builder.set_baidu_message(
                                    crate::json_deser::deser_structure_crate_model_message(tokens)?
                                );
                            }
                            "DefaultMessage" => {
                                builder = builder.set_default_message(
                                    crate::json_deser::deser_structure_crate_model_message(tokens)?
                                );
                            }
                            "EmailMessage" => {
                                builder = builder.set_email_message(
                                    crate::json_deser::deser_structure_crate_model_campaign_email_message(tokens)?
                                );
                            }
                            "GCMMessage" => {
                                builder = builder.set_gcm_message(
                                    crate::json_deser::deser_structure_crate_model_message(tokens)?
                                );
                            }
                            "SMSMessage" => {
                                builder = builder.set_sms_message(
                                    crate::json_deser::deser_structure_crate_model_campaign_sms_message(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_message_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::MessageRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::message_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Addresses" => {
                                builder = builder.set_addresses(
                                    crate::json_deser::deser_map_of_address_configuration(tokens)?
                                );
                            }
                            "Context" => {
                                builder = builder.set_context(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            "Endpoints" => {
                                builder = builder.set_endpoints(
                                    crate::json_deser::deser_map_of_endpoint_send_configuration(tokens)?
                                );
                            }
                            "MessageConfiguration" => {
                                builder = builder.set_message_configuration(
                                    crate::json_deser::deser_structure_crate_model_direct_message_configuration(tokens)?
                                );
                            }
                            "TraceId" => {
                                builder = builder.set_trace_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_message_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::MessageResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::message_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "EndpointResult" => {
                                builder = builder.set_endpoint_result(
                                    crate::json_deser::deser_map_of_endpoint_message_result(tokens)?
                                );
                            }
                            "RequestId" => {
                                builder = builder.set_request_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Result" => {
                                builder = builder.set_result(
                                    crate::json_deser::deser_map_of_message_result(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_message_result<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::MessageResult>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::message_result::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "DeliveryStatus" => {
                                builder = builder.set_delivery_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::DeliveryStatus::from(s.as_str()))
                                );
                            }
                            "MessageId" => {
                                builder = builder.set_message_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "StatusCode" => {
                                builder = builder.set_status_code(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "StatusMessage" => {
                                builder = builder.set_status_message(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "UpdatedToken" => {
                                builder = builder.set_updated_token(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_metric_dimension<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::MetricDimension>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::metric_dimension::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ComparisonOperator" => {
                                builder = builder.set_comparison_operator(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Value" => {
                                builder = builder.set_value(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.to_f64())
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_quiet_time<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::QuietTime>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::quiet_time::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "End" => {
                                builder = builder.set_end(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Start" => {
                                builder = builder.set_start(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_random_split_activity<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::RandomSplitActivity>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::random_split_activity::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Branches" => {
                                builder = builder.set_branches(
                                    crate::json_deser::deser_list_of_random_split_entry(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_random_split_entry<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::RandomSplitEntry>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::random_split_entry::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "NextActivity" => {
                                builder = builder.set_next_activity(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Percentage" => {
                                builder = builder.set_percentage(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_recency_dimension<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::RecencyDimension>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::recency_dimension::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Duration" => {
                                builder = builder.set_duration(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Duration::from(s.as_str()))
                                );
                            }
                            "RecencyType" => {
                                builder = builder.set_recency_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::RecencyType::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_result_row<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ResultRow>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::result_row::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "GroupedBys" => {
                                builder = builder.set_grouped_bys(
                                    crate::json_deser::deser_list_of_result_row_value(tokens)?
                                );
                            }
                            "Values" => {
                                builder = builder.set_values(
                                    crate::json_deser::deser_list_of_result_row_value(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_result_row_value<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::ResultRowValue>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::result_row_value::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Key" => {
                                builder = builder.set_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Value" => {
                                builder = builder.set_value(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_schedule<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::Schedule>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::schedule::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "EndTime" => {
                                builder = builder.set_end_time(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "EventFilter" => {
                                builder = builder.set_event_filter(
                                    crate::json_deser::deser_structure_crate_model_campaign_event_filter(tokens)?
                                );
                            }
                            "Frequency" => {
                                builder = builder.set_frequency(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Frequency::from(s.as_str()))
                                );
                            }
                            "IsLocalTime" => {
                                builder = builder.set_is_local_time(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "QuietTime" => {
                                builder = builder.set_quiet_time(
                                    crate::json_deser::deser_structure_crate_model_quiet_time(tokens)?
                                );
                            }
                            "StartTime" => {
                                builder = builder.set_start_time(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Timezone" => {
                                builder = builder.set_timezone(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_segment_behaviors<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SegmentBehaviors>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::segment_behaviors::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Recency" => {
                                builder = builder.set_recency(
                                    crate::json_deser::deser_structure_crate_model_recency_dimension(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_segment_condition<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SegmentCondition>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::segment_condition::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "SegmentId" => {
                                builder = builder.set_segment_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_segment_demographics<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SegmentDemographics>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::segment_demographics::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "AppVersion" => {
                                builder = builder.set_app_version(
                                    crate::json_deser::deser_structure_crate_model_set_dimension(tokens)?
                                );
                            }
                            "Channel" => {
                                builder = builder.set_channel(
                                    crate::json_deser::deser_structure_crate_model_set_dimension(tokens)?
                                );
                            }
                            "DeviceType" => {
                                builder = builder.set_device_type(
                                    crate::json_deser::deser_structure_crate_model_set_dimension(tokens)?
                                );
                            }
                            "Make" => {
                                builder = builder.set_make(
                                    crate::json_deser::deser_structure_crate_model_set_dimension(tokens)?
                                );
                            }
                            "Model" => {
                                builder = builder.set_model(
                                    crate::json_deser::deser_structure_crate_model_set_dimension(tokens)?
                                );
                            }
                            "Platform" => {
                                builder = builder.set_platform(
                                    crate::json_deser::deser_structure_crate_model_set_dimension(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_segment_dimensions<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SegmentDimensions>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::segment_dimensions::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Attributes" => {
                                builder = builder.set_attributes(
                                    crate::json_deser::deser_map_of_attribute_dimension(tokens)?
                                );
                            }
                            "Behavior" => {
                                builder = builder.set_behavior(
                                    crate::json_deser::deser_structure_crate_model_segment_behaviors(tokens)?
                                );
                            }
                            "Demographic" => {
                                builder = builder.set_demographic(
                                    crate::json_deser::deser_structure_crate_model_segment_demographics(tokens)?
                                );
                            }
                            "Location" => {
                                builder = builder.set_location(
                                    crate::json_deser::deser_structure_crate_model_segment_location(tokens)?
                                );
                            }
                            "Metrics" => {
                                builder = builder.set_metrics(
                                    crate::json_deser::deser_map_of_metric_dimension(tokens)?
                                );
                            }
                            "UserAttributes" => {
                                builder = builder.set_user_attributes(
                                    crate::json_deser::deser_map_of_attribute_dimension(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_segment_import_resource<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SegmentImportResource>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::segment_import_resource::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ChannelCounts" => {
                                builder = builder.set_channel_counts(
                                    crate::json_deser::deser_map_of_integer(tokens)?
                                );
                            }
                            "ExternalId" => {
                                builder = builder.set_external_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Format" => {
                                builder = builder.set_format(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::Format::from(s.as_str()))
                                );
                            }
                            "RoleArn" => {
                                builder = builder.set_role_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "S3Url" => {
                                builder = builder.set_s3_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Size" => {
                                builder = builder.set_size(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_segment_location<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SegmentLocation>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::segment_location::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Country" => {
                                builder = builder.set_country(
                                    crate::json_deser::deser_structure_crate_model_set_dimension(tokens)?
                                );
                            }
                            "GPSPoint" => {
                                builder = builder.set_gps_point(
                                    crate::json_deser::deser_structure_crate_model_gps_point_dimension(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_segment_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SegmentResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::segment_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "ApplicationId" => {
                                builder = builder.set_application_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "CreationDate" => {
                                builder = builder.set_creation_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Dimensions" => {
                                builder = builder.set_dimensions(
                                    crate::json_deser::deser_structure_crate_model_segment_dimensions(tokens)?
                                );
                            }
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "ImportDefinition" => {
                                builder = builder.set_import_definition(
                                    crate::json_deser::deser_structure_crate_model_segment_import_resource(tokens)?
                                );
                            }
                            "LastModifiedDate" => {
                                builder = builder.set_last_modified_date(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SegmentType" => {
                                builder = builder.set_segment_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::SegmentType::from(s.as_str()))
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            "Version" => {
                                builder = builder.set_version(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_segments_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SegmentsResponse>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::segments_response::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Item" => {
                                builder = builder.set_item(
                                    crate::json_deser::deser_list_of_segment_response(tokens)?
                                );
                            }
                            "NextToken" => {
                                builder = builder.set_next_token(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_set_dimension<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SetDimension>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::set_dimension::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "DimensionType" => {
                                builder = builder.set_dimension_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::DimensionType::from(s.as_str()))
                                );
                            }
                            "Values" => {
                                builder = builder.set_values(
                                    crate::json_deser::deser_list_of_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_sms_message<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::SmsMessage>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::sms_message::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Body" => {
                                builder = builder.set_body(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Keyword" => {
                                builder = builder.set_keyword(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "MessageType" => {
                                builder = builder.set_message_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::MessageType::from(s.as_str()))
                                );
                            }
                            "OriginationNumber" => {
                                builder = builder.set_origination_number(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SenderId" => {
                                builder = builder.set_sender_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Substitutions" => {
                                builder = builder.set_substitutions(
                                    crate::json_deser::deser_map_of_list_of_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_start_condition<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::StartCondition>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::start_condition::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Description" => {
                                builder = builder.set_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SegmentStartCondition" => {
                                builder = builder.set_segment_start_condition(
                                    crate::json_deser::deser_structure_crate_model_segment_condition(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_treatment_resource<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::TreatmentResource>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::treatment_resource::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "MessageConfiguration" => {
                                builder = builder.set_message_configuration(
                                    crate::json_deser::deser_structure_crate_model_message_configuration(tokens)?
                                );
                            }
                            "Schedule" => {
                                builder = builder.set_schedule(
                                    crate::json_deser::deser_structure_crate_model_schedule(tokens)?
                                );
                            }
                            "SizePercent" => {
                                builder = builder.set_size_percent(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "State" => {
                                builder = builder.set_state(
                                    crate::json_deser::deser_structure_crate_model_campaign_state(tokens)?
                                );
                            }
                            "TreatmentDescription" => {
                                builder = builder.set_treatment_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TreatmentName" => {
                                builder = builder.set_treatment_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_wait_activity<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::WaitActivity>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::wait_activity::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "NextActivity" => {
                                builder = builder.set_next_activity(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "WaitTime" => {
                                builder = builder.set_wait_time(
                                    crate::json_deser::deser_structure_crate_model_wait_time(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_wait_time<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::WaitTime>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::wait_time::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "WaitFor" => {
                                builder = builder.set_wait_for(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "WaitUntil" => {
                                builder = builder.set_wait_until(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_write_application_settings_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::WriteApplicationSettingsRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::write_application_settings_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "CampaignHook" => {
                                builder = builder.set_campaign_hook(
                                    crate::json_deser::deser_structure_crate_model_campaign_hook(tokens)?
                                );
                            }
                            "CloudWatchMetricsEnabled" => {
                                builder = builder.set_cloud_watch_metrics_enabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "Limits" => {
                                builder = builder.set_limits(
                                    crate::json_deser::deser_structure_crate_model_campaign_limits(tokens)?
                                );
                            }
                            "QuietTime" => {
                                builder = builder.set_quiet_time(
                                    crate::json_deser::deser_structure_crate_model_quiet_time(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_write_campaign_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::WriteCampaignRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::write_campaign_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "AdditionalTreatments" => {
                                builder = builder.set_additional_treatments(
                                    crate::json_deser::deser_list_of_write_treatment_resource(tokens)?
                                );
                            }
                            "Description" => {
                                builder = builder.set_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "HoldoutPercent" => {
                                builder = builder.set_holdout_percent(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "Hook" => {
                                builder = builder.set_hook(
                                    crate::json_deser::deser_structure_crate_model_campaign_hook(tokens)?
                                );
                            }
                            "IsPaused" => {
                                builder = builder.set_is_paused(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "Limits" => {
                                builder = builder.set_limits(
                                    crate::json_deser::deser_structure_crate_model_campaign_limits(tokens)?
                                );
                            }
                            "MessageConfiguration" => {
                                builder = builder.set_message_configuration(
                                    crate::json_deser::deser_structure_crate_model_message_configuration(tokens)?
                                );
                            }
                            "Name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "Schedule" => {
                                builder = builder.set_schedule(
                                    crate::json_deser::deser_structure_crate_model_schedule(tokens)?
                                );
                            }
                            "SegmentId" => {
                                builder = builder.set_segment_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "SegmentVersion" => {
                                builder = builder.set_segment_version(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            "TreatmentDescription" => {
                                builder = builder.set_treatment_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TreatmentName" => {
                                builder = builder.set_treatment_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_write_segment_request<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::WriteSegmentRequest>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::write_segment_request::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "Dimensions" => {
                                builder = builder.set_dimensions(
                                    crate::json_deser::deser_structure_crate_model_segment_dimensions(tokens)?
                                );
                            }
                            "Name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_map_of_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

pub fn deser_structure_crate_model_write_treatment_resource<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<crate::model::WriteTreatmentResource>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::write_treatment_resource::Builder::default();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "MessageConfiguration" => {
                                builder = builder.set_message_configuration(
                                    crate::json_deser::deser_structure_crate_model_message_configuration(tokens)?
                                );
                            }
                            "Schedule" => {
                                builder = builder.set_schedule(
                                    crate::json_deser::deser_structure_crate_model_schedule(tokens)?
                                );
                            }
                            "SizePercent" => {
                                builder = builder.set_size_percent(
                                    smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                        .map(|v| v.try_into())
                                        .transpose()?
                                );
                            }
                            "TreatmentDescription" => {
                                builder = builder.set_treatment_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "TreatmentName" => {
                                builder = builder.set_treatment_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_activity_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::ActivityResponse>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_activity_response(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_campaign_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::CampaignResponse>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_campaign_response(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_endpoint_batch_item<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::EndpointBatchItem>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_endpoint_batch_item(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_import_job_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::ImportJobResponse>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_import_job_response(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_random_split_entry<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::RandomSplitEntry>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_random_split_entry(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_result_row<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::ResultRow>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_result_row(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_result_row_value<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::ResultRowValue>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_result_row_value(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_segment_response<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::SegmentResponse>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_segment_response(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_string<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<std::string::String>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_treatment_resource<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::TreatmentResource>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_treatment_resource(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_of_write_treatment_resource<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::vec::Vec<crate::model::WriteTreatmentResource>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_crate_model_write_treatment_resource(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start array or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_activity<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, crate::model::Activity>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            crate::json_deser::deser_structure_crate_model_activity(tokens)?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_address_configuration<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, crate::model::AddressConfiguration>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            crate::json_deser::deser_structure_crate_model_address_configuration(tokens)?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_attribute_dimension<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            crate::json_deser::deser_structure_crate_model_attribute_dimension(tokens)?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_double<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, f64>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                .map(|v| v.to_f64());
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_endpoint_message_result<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, crate::model::EndpointMessageResult>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            crate::json_deser::deser_structure_crate_model_endpoint_message_result(tokens)?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_endpoint_send_configuration<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, crate::model::EndpointSendConfiguration>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            crate::json_deser::deser_structure_crate_model_endpoint_send_configuration(tokens)?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_integer<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, i32>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            smithy_json::deserialize::token::expect_number_or_null(tokens.next())?
                                .map(|v| v.try_into())
                                .transpose()?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_list_of_string<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            crate::json_deser::deser_list_of_string(tokens)?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_message_result<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, crate::model::MessageResult>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            crate::json_deser::deser_structure_crate_model_message_result(tokens)?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_metric_dimension<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            crate::json_deser::deser_structure_crate_model_metric_dimension(tokens)?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_of_string<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> std::result::Result<Option<std::collections::HashMap<std::string::String, std::string::String>>, smithy_json::deserialize::Error>
where
    I: Iterator<
        Item = std::result::Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>,
    >,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. })
        | Some(smithy_json::deserialize::Token::ValueBool { .. })
        | Some(smithy_json::deserialize::Token::ValueNumber { .. })
        | Some(smithy_json::deserialize::Token::ValueString { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped().map(|u| u.into_owned())?;
                        let value =
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    other => {
                        return Err(smithy_json::deserialize::Error::custom(format!(
                            "expected object key or end object, found: {:?}",
                            other
                        )))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom("expected start object or null")),
    }
}
