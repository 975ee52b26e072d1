/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_campaign_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateCampaignOutput, crate::error::CreateCampaignError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::CreateCampaignError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateCampaignError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::CreateCampaignError {
            meta: generic,
            kind: crate::error::CreateCampaignErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::CreateCampaignError {
            meta: generic,
            kind: crate::error::CreateCampaignErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::CreateCampaignError {
            meta: generic,
            kind: crate::error::CreateCampaignErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::CreateCampaignError {
            meta: generic,
            kind: crate::error::CreateCampaignErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::CreateCampaignError {
            meta: generic,
            kind: crate::error::CreateCampaignErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::CreateCampaignError {
            meta: generic,
            kind: crate::error::CreateCampaignErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateCampaignError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::CreateCampaignError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_campaign_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateCampaignOutput, crate::error::CreateCampaignError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::create_campaign_output::Builder::default();
        output = output.set_campaign_response(
            crate::json_deser::deser_payload_create_campaign_output_campaign_response(response.body().as_ref())
                .map_err(crate::error::CreateCampaignError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_import_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateImportJobOutput, crate::error::CreateImportJobError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::CreateImportJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateImportJobError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::CreateImportJobError {
            meta: generic,
            kind: crate::error::CreateImportJobErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateImportJobError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::CreateImportJobError {
            meta: generic,
            kind: crate::error::CreateImportJobErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateImportJobError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::CreateImportJobError {
            meta: generic,
            kind: crate::error::CreateImportJobErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateImportJobError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::CreateImportJobError {
            meta: generic,
            kind: crate::error::CreateImportJobErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateImportJobError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::CreateImportJobError {
            meta: generic,
            kind: crate::error::CreateImportJobErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateImportJobError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::CreateImportJobError {
            meta: generic,
            kind: crate::error::CreateImportJobErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateImportJobError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::CreateImportJobError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_import_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateImportJobOutput, crate::error::CreateImportJobError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::create_import_job_output::Builder::default();
        output = output.set_import_job_response(
            crate::json_deser::deser_payload_create_import_job_output_import_job_response(response.body().as_ref())
                .map_err(crate::error::CreateImportJobError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_segment_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateSegmentOutput, crate::error::CreateSegmentError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::CreateSegmentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateSegmentError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::CreateSegmentError {
            meta: generic,
            kind: crate::error::CreateSegmentErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::CreateSegmentError {
            meta: generic,
            kind: crate::error::CreateSegmentErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::CreateSegmentError {
            meta: generic,
            kind: crate::error::CreateSegmentErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::CreateSegmentError {
            meta: generic,
            kind: crate::error::CreateSegmentErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::CreateSegmentError {
            meta: generic,
            kind: crate::error::CreateSegmentErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::CreateSegmentError {
            meta: generic,
            kind: crate::error::CreateSegmentErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::CreateSegmentError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::CreateSegmentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_create_segment_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateSegmentOutput, crate::error::CreateSegmentError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::create_segment_output::Builder::default();
        output = output.set_segment_response(
            crate::json_deser::deser_payload_create_segment_output_segment_response(response.body().as_ref())
                .map_err(crate::error::CreateSegmentError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_apns_channel_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteApnsChannelOutput, crate::error::DeleteApnsChannelError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::DeleteApnsChannelError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteApnsChannelError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::DeleteApnsChannelError {
            meta: generic,
            kind: crate::error::DeleteApnsChannelErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::DeleteApnsChannelError {
            meta: generic,
            kind: crate::error::DeleteApnsChannelErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::DeleteApnsChannelError {
            meta: generic,
            kind: crate::error::DeleteApnsChannelErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::DeleteApnsChannelError {
            meta: generic,
            kind: crate::error::DeleteApnsChannelErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::DeleteApnsChannelError {
            meta: generic,
            kind: crate::error::DeleteApnsChannelErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::DeleteApnsChannelError {
            meta: generic,
            kind: crate::error::DeleteApnsChannelErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DeleteApnsChannelError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_apns_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteApnsChannelOutput, crate::error::DeleteApnsChannelError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::delete_apns_channel_output::Builder::default();
        output = output.set_apns_channel_response(
            crate::json_deser::deser_payload_delete_apns_channel_output_apns_channel_response(response.body().as_ref())
                .map_err(crate::error::DeleteApnsChannelError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_campaign_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteCampaignOutput, crate::error::DeleteCampaignError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::DeleteCampaignError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteCampaignError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::DeleteCampaignError {
            meta: generic,
            kind: crate::error::DeleteCampaignErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteCampaignError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::DeleteCampaignError {
            meta: generic,
            kind: crate::error::DeleteCampaignErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteCampaignError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::DeleteCampaignError {
            meta: generic,
            kind: crate::error::DeleteCampaignErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteCampaignError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::DeleteCampaignError {
            meta: generic,
            kind: crate::error::DeleteCampaignErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteCampaignError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::DeleteCampaignError {
            meta: generic,
            kind: crate::error::DeleteCampaignErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteCampaignError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::DeleteCampaignError {
            meta: generic,
            kind: crate::error::DeleteCampaignErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteCampaignError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DeleteCampaignError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_campaign_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteCampaignOutput, crate::error::DeleteCampaignError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::delete_campaign_output::Builder::default();
        output = output.set_campaign_response(
            crate::json_deser::deser_payload_delete_campaign_output_campaign_response(response.body().as_ref())
                .map_err(crate::error::DeleteCampaignError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_gcm_channel_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteGcmChannelOutput, crate::error::DeleteGcmChannelError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::DeleteGcmChannelError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteGcmChannelError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::DeleteGcmChannelError {
            meta: generic,
            kind: crate::error::DeleteGcmChannelErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::DeleteGcmChannelError {
            meta: generic,
            kind: crate::error::DeleteGcmChannelErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::DeleteGcmChannelError {
            meta: generic,
            kind: crate::error::DeleteGcmChannelErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::DeleteGcmChannelError {
            meta: generic,
            kind: crate::error::DeleteGcmChannelErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::DeleteGcmChannelError {
            meta: generic,
            kind: crate::error::DeleteGcmChannelErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::DeleteGcmChannelError {
            meta: generic,
            kind: crate::error::DeleteGcmChannelErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DeleteGcmChannelError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_gcm_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteGcmChannelOutput, crate::error::DeleteGcmChannelError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::delete_gcm_channel_output::Builder::default();
        output = output.set_gcm_channel_response(
            crate::json_deser::deser_payload_delete_gcm_channel_output_gcm_channel_response(response.body().as_ref())
                .map_err(crate::error::DeleteGcmChannelError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_segment_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteSegmentOutput, crate::error::DeleteSegmentError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::DeleteSegmentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteSegmentError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::DeleteSegmentError {
            meta: generic,
            kind: crate::error::DeleteSegmentErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteSegmentError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::DeleteSegmentError {
            meta: generic,
            kind: crate::error::DeleteSegmentErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteSegmentError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::DeleteSegmentError {
            meta: generic,
            kind: crate::error::DeleteSegmentErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteSegmentError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::DeleteSegmentError {
            meta: generic,
            kind: crate::error::DeleteSegmentErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteSegmentError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::DeleteSegmentError {
            meta: generic,
            kind: crate::error::DeleteSegmentErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteSegmentError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::DeleteSegmentError {
            meta: generic,
            kind: crate::error::DeleteSegmentErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::DeleteSegmentError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::DeleteSegmentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_delete_segment_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteSegmentOutput, crate::error::DeleteSegmentError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::delete_segment_output::Builder::default();
        output = output.set_segment_response(
            crate::json_deser::deser_payload_delete_segment_output_segment_response(response.body().as_ref())
                .map_err(crate::error::DeleteSegmentError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_apns_channel_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetApnsChannelOutput, crate::error::GetApnsChannelError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetApnsChannelError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetApnsChannelError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetApnsChannelError {
            meta: generic,
            kind: crate::error::GetApnsChannelErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetApnsChannelError {
            meta: generic,
            kind: crate::error::GetApnsChannelErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetApnsChannelError {
            meta: generic,
            kind: crate::error::GetApnsChannelErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetApnsChannelError {
            meta: generic,
            kind: crate::error::GetApnsChannelErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetApnsChannelError {
            meta: generic,
            kind: crate::error::GetApnsChannelErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetApnsChannelError {
            meta: generic,
            kind: crate::error::GetApnsChannelErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetApnsChannelError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_apns_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetApnsChannelOutput, crate::error::GetApnsChannelError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_apns_channel_output::Builder::default();
        output = output.set_apns_channel_response(
            crate::json_deser::deser_payload_get_apns_channel_output_apns_channel_response(response.body().as_ref())
                .map_err(crate::error::GetApnsChannelError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_application_settings_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetApplicationSettingsOutput, crate::error::GetApplicationSettingsError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetApplicationSettingsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetApplicationSettingsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetApplicationSettingsError {
            meta: generic,
            kind: crate::error::GetApplicationSettingsErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetApplicationSettingsError {
            meta: generic,
            kind: crate::error::GetApplicationSettingsErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetApplicationSettingsError {
            meta: generic,
            kind: crate::error::GetApplicationSettingsErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetApplicationSettingsError {
            meta: generic,
            kind: crate::error::GetApplicationSettingsErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetApplicationSettingsError {
            meta: generic,
            kind: crate::error::GetApplicationSettingsErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetApplicationSettingsError {
            meta: generic,
            kind: crate::error::GetApplicationSettingsErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetApplicationSettingsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_application_settings_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetApplicationSettingsOutput, crate::error::GetApplicationSettingsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_application_settings_output::Builder::default();
        output = output.set_application_settings_resource(
            crate::json_deser::deser_payload_get_application_settings_output_application_settings_resource(response.body().as_ref())
                .map_err(crate::error::GetApplicationSettingsError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignOutput, crate::error::GetCampaignError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetCampaignError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetCampaignError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetCampaignError {
            meta: generic,
            kind: crate::error::GetCampaignErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetCampaignError {
            meta: generic,
            kind: crate::error::GetCampaignErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetCampaignError {
            meta: generic,
            kind: crate::error::GetCampaignErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetCampaignError {
            meta: generic,
            kind: crate::error::GetCampaignErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetCampaignError {
            meta: generic,
            kind: crate::error::GetCampaignErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetCampaignError {
            meta: generic,
            kind: crate::error::GetCampaignErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetCampaignError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignOutput, crate::error::GetCampaignError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_campaign_output::Builder::default();
        output = output.set_campaign_response(
            crate::json_deser::deser_payload_get_campaign_output_campaign_response(response.body().as_ref())
                .map_err(crate::error::GetCampaignError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_activities_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignActivitiesOutput, crate::error::GetCampaignActivitiesError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetCampaignActivitiesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetCampaignActivitiesError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetCampaignActivitiesError {
            meta: generic,
            kind: crate::error::GetCampaignActivitiesErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignActivitiesError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetCampaignActivitiesError {
            meta: generic,
            kind: crate::error::GetCampaignActivitiesErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignActivitiesError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetCampaignActivitiesError {
            meta: generic,
            kind: crate::error::GetCampaignActivitiesErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignActivitiesError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetCampaignActivitiesError {
            meta: generic,
            kind: crate::error::GetCampaignActivitiesErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignActivitiesError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetCampaignActivitiesError {
            meta: generic,
            kind: crate::error::GetCampaignActivitiesErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignActivitiesError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetCampaignActivitiesError {
            meta: generic,
            kind: crate::error::GetCampaignActivitiesErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignActivitiesError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetCampaignActivitiesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_activities_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignActivitiesOutput, crate::error::GetCampaignActivitiesError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_campaign_activities_output::Builder::default();
        output = output.set_activities_response(
            crate::json_deser::deser_payload_get_campaign_activities_output_activities_response(response.body().as_ref())
                .map_err(crate::error::GetCampaignActivitiesError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_date_range_kpi_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignDateRangeKpiOutput, crate::error::GetCampaignDateRangeKpiError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetCampaignDateRangeKpiError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetCampaignDateRangeKpiError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetCampaignDateRangeKpiError {
            meta: generic,
            kind: crate::error::GetCampaignDateRangeKpiErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignDateRangeKpiError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetCampaignDateRangeKpiError {
            meta: generic,
            kind: crate::error::GetCampaignDateRangeKpiErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignDateRangeKpiError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetCampaignDateRangeKpiError {
            meta: generic,
            kind: crate::error::GetCampaignDateRangeKpiErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignDateRangeKpiError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetCampaignDateRangeKpiError {
            meta: generic,
            kind: crate::error::GetCampaignDateRangeKpiErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignDateRangeKpiError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetCampaignDateRangeKpiError {
            meta: generic,
            kind: crate::error::GetCampaignDateRangeKpiErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignDateRangeKpiError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetCampaignDateRangeKpiError {
            meta: generic,
            kind: crate::error::GetCampaignDateRangeKpiErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignDateRangeKpiError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetCampaignDateRangeKpiError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_date_range_kpi_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignDateRangeKpiOutput, crate::error::GetCampaignDateRangeKpiError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_campaign_date_range_kpi_output::Builder::default();
        output = output.set_campaign_date_range_kpi_response(
            crate::json_deser::deser_payload_get_campaign_date_range_kpi_output_campaign_date_range_kpi_response(response.body().as_ref())
                .map_err(crate::error::GetCampaignDateRangeKpiError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_version_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignVersionOutput, crate::error::GetCampaignVersionError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetCampaignVersionError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetCampaignVersionError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetCampaignVersionError {
            meta: generic,
            kind: crate::error::GetCampaignVersionErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetCampaignVersionError {
            meta: generic,
            kind: crate::error::GetCampaignVersionErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetCampaignVersionError {
            meta: generic,
            kind: crate::error::GetCampaignVersionErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetCampaignVersionError {
            meta: generic,
            kind: crate::error::GetCampaignVersionErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetCampaignVersionError {
            meta: generic,
            kind: crate::error::GetCampaignVersionErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetCampaignVersionError {
            meta: generic,
            kind: crate::error::GetCampaignVersionErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetCampaignVersionError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_version_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignVersionOutput, crate::error::GetCampaignVersionError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_campaign_version_output::Builder::default();
        output = output.set_campaign_response(
            crate::json_deser::deser_payload_get_campaign_version_output_campaign_response(response.body().as_ref())
                .map_err(crate::error::GetCampaignVersionError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_versions_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignVersionsOutput, crate::error::GetCampaignVersionsError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetCampaignVersionsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetCampaignVersionsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetCampaignVersionsError {
            meta: generic,
            kind: crate::error::GetCampaignVersionsErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionsError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetCampaignVersionsError {
            meta: generic,
            kind: crate::error::GetCampaignVersionsErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetCampaignVersionsError {
            meta: generic,
            kind: crate::error::GetCampaignVersionsErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionsError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetCampaignVersionsError {
            meta: generic,
            kind: crate::error::GetCampaignVersionsErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetCampaignVersionsError {
            meta: generic,
            kind: crate::error::GetCampaignVersionsErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionsError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetCampaignVersionsError {
            meta: generic,
            kind: crate::error::GetCampaignVersionsErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignVersionsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetCampaignVersionsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaign_versions_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignVersionsOutput, crate::error::GetCampaignVersionsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_campaign_versions_output::Builder::default();
        output = output.set_campaigns_response(
            crate::json_deser::deser_payload_get_campaign_versions_output_campaigns_response(response.body().as_ref())
                .map_err(crate::error::GetCampaignVersionsError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaigns_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignsOutput, crate::error::GetCampaignsError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetCampaignsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetCampaignsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetCampaignsError {
            meta: generic,
            kind: crate::error::GetCampaignsErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignsError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetCampaignsError {
            meta: generic,
            kind: crate::error::GetCampaignsErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetCampaignsError {
            meta: generic,
            kind: crate::error::GetCampaignsErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignsError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetCampaignsError {
            meta: generic,
            kind: crate::error::GetCampaignsErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetCampaignsError {
            meta: generic,
            kind: crate::error::GetCampaignsErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignsError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetCampaignsError {
            meta: generic,
            kind: crate::error::GetCampaignsErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetCampaignsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetCampaignsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_campaigns_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetCampaignsOutput, crate::error::GetCampaignsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_campaigns_output::Builder::default();
        output = output.set_campaigns_response(
            crate::json_deser::deser_payload_get_campaigns_output_campaigns_response(response.body().as_ref())
                .map_err(crate::error::GetCampaignsError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_endpoint_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetEndpointOutput, crate::error::GetEndpointError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetEndpointError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetEndpointError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetEndpointError {
            meta: generic,
            kind: crate::error::GetEndpointErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetEndpointError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetEndpointError {
            meta: generic,
            kind: crate::error::GetEndpointErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetEndpointError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetEndpointError {
            meta: generic,
            kind: crate::error::GetEndpointErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetEndpointError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetEndpointError {
            meta: generic,
            kind: crate::error::GetEndpointErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetEndpointError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetEndpointError {
            meta: generic,
            kind: crate::error::GetEndpointErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetEndpointError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetEndpointError {
            meta: generic,
            kind: crate::error::GetEndpointErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetEndpointError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetEndpointError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_endpoint_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetEndpointOutput, crate::error::GetEndpointError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_endpoint_output::Builder::default();
        output = output.set_endpoint_response(
            crate::json_deser::deser_payload_get_endpoint_output_endpoint_response(response.body().as_ref())
                .map_err(crate::error::GetEndpointError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_gcm_channel_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetGcmChannelOutput, crate::error::GetGcmChannelError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetGcmChannelError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetGcmChannelError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetGcmChannelError {
            meta: generic,
            kind: crate::error::GetGcmChannelErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetGcmChannelError {
            meta: generic,
            kind: crate::error::GetGcmChannelErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetGcmChannelError {
            meta: generic,
            kind: crate::error::GetGcmChannelErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetGcmChannelError {
            meta: generic,
            kind: crate::error::GetGcmChannelErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetGcmChannelError {
            meta: generic,
            kind: crate::error::GetGcmChannelErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetGcmChannelError {
            meta: generic,
            kind: crate::error::GetGcmChannelErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetGcmChannelError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_gcm_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetGcmChannelOutput, crate::error::GetGcmChannelError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_gcm_channel_output::Builder::default();
        output = output.set_gcm_channel_response(
            crate::json_deser::deser_payload_get_gcm_channel_output_gcm_channel_response(response.body().as_ref())
                .map_err(crate::error::GetGcmChannelError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_import_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImportJobOutput, crate::error::GetImportJobError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetImportJobError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetImportJobError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetImportJobError {
            meta: generic,
            kind: crate::error::GetImportJobErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetImportJobError {
            meta: generic,
            kind: crate::error::GetImportJobErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetImportJobError {
            meta: generic,
            kind: crate::error::GetImportJobErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetImportJobError {
            meta: generic,
            kind: crate::error::GetImportJobErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetImportJobError {
            meta: generic,
            kind: crate::error::GetImportJobErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetImportJobError {
            meta: generic,
            kind: crate::error::GetImportJobErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetImportJobError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_import_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImportJobOutput, crate::error::GetImportJobError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_import_job_output::Builder::default();
        output = output.set_import_job_response(
            crate::json_deser::deser_payload_get_import_job_output_import_job_response(response.body().as_ref())
                .map_err(crate::error::GetImportJobError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_import_jobs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImportJobsOutput, crate::error::GetImportJobsError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetImportJobsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetImportJobsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetImportJobsError {
            meta: generic,
            kind: crate::error::GetImportJobsErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetImportJobsError {
            meta: generic,
            kind: crate::error::GetImportJobsErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetImportJobsError {
            meta: generic,
            kind: crate::error::GetImportJobsErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetImportJobsError {
            meta: generic,
            kind: crate::error::GetImportJobsErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetImportJobsError {
            meta: generic,
            kind: crate::error::GetImportJobsErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetImportJobsError {
            meta: generic,
            kind: crate::error::GetImportJobsErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetImportJobsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetImportJobsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_import_jobs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetImportJobsOutput, crate::error::GetImportJobsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_import_jobs_output::Builder::default();
        output = output.set_import_jobs_response(
            crate::json_deser::deser_payload_get_import_jobs_output_import_jobs_response(response.body().as_ref())
                .map_err(crate::error::GetImportJobsError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_journey_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetJourneyOutput, crate::error::GetJourneyError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetJourneyError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetJourneyError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetJourneyError {
            meta: generic,
            kind: crate::error::GetJourneyErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetJourneyError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetJourneyError {
            meta: generic,
            kind: crate::error::GetJourneyErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetJourneyError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetJourneyError {
            meta: generic,
            kind: crate::error::GetJourneyErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetJourneyError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetJourneyError {
            meta: generic,
            kind: crate::error::GetJourneyErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetJourneyError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetJourneyError {
            meta: generic,
            kind: crate::error::GetJourneyErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetJourneyError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetJourneyError {
            meta: generic,
            kind: crate::error::GetJourneyErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetJourneyError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetJourneyError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_journey_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetJourneyOutput, crate::error::GetJourneyError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_journey_output::Builder::default();
        output = output.set_journey_response(
            crate::json_deser::deser_payload_get_journey_output_journey_response(response.body().as_ref())
                .map_err(crate::error::GetJourneyError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segment_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentOutput, crate::error::GetSegmentError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetSegmentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetSegmentError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetSegmentError {
            meta: generic,
            kind: crate::error::GetSegmentErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetSegmentError {
            meta: generic,
            kind: crate::error::GetSegmentErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetSegmentError {
            meta: generic,
            kind: crate::error::GetSegmentErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetSegmentError {
            meta: generic,
            kind: crate::error::GetSegmentErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetSegmentError {
            meta: generic,
            kind: crate::error::GetSegmentErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetSegmentError {
            meta: generic,
            kind: crate::error::GetSegmentErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetSegmentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segment_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentOutput, crate::error::GetSegmentError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_segment_output::Builder::default();
        output = output.set_segment_response(
            crate::json_deser::deser_payload_get_segment_output_segment_response(response.body().as_ref())
                .map_err(crate::error::GetSegmentError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segment_import_jobs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentImportJobsOutput, crate::error::GetSegmentImportJobsError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetSegmentImportJobsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetSegmentImportJobsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetSegmentImportJobsError {
            meta: generic,
            kind: crate::error::GetSegmentImportJobsErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetSegmentImportJobsError {
            meta: generic,
            kind: crate::error::GetSegmentImportJobsErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetSegmentImportJobsError {
            meta: generic,
            kind: crate::error::GetSegmentImportJobsErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetSegmentImportJobsError {
            meta: generic,
            kind: crate::error::GetSegmentImportJobsErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetSegmentImportJobsError {
            meta: generic,
            kind: crate::error::GetSegmentImportJobsErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentImportJobsError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetSegmentImportJobsError {
            meta: generic,
            kind: crate::error::GetSegmentImportJobsErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentImportJobsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetSegmentImportJobsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segment_import_jobs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentImportJobsOutput, crate::error::GetSegmentImportJobsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_segment_import_jobs_output::Builder::default();
        output = output.set_import_jobs_response(
            crate::json_deser::deser_payload_get_segment_import_jobs_output_import_jobs_response(response.body().as_ref())
                .map_err(crate::error::GetSegmentImportJobsError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segment_version_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentVersionOutput, crate::error::GetSegmentVersionError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetSegmentVersionError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetSegmentVersionError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetSegmentVersionError {
            meta: generic,
            kind: crate::error::GetSegmentVersionErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetSegmentVersionError {
            meta: generic,
            kind: crate::error::GetSegmentVersionErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetSegmentVersionError {
            meta: generic,
            kind: crate::error::GetSegmentVersionErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetSegmentVersionError {
            meta: generic,
            kind: crate::error::GetSegmentVersionErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetSegmentVersionError {
            meta: generic,
            kind: crate::error::GetSegmentVersionErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetSegmentVersionError {
            meta: generic,
            kind: crate::error::GetSegmentVersionErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetSegmentVersionError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segment_version_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentVersionOutput, crate::error::GetSegmentVersionError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_segment_version_output::Builder::default();
        output = output.set_segment_response(
            crate::json_deser::deser_payload_get_segment_version_output_segment_response(response.body().as_ref())
                .map_err(crate::error::GetSegmentVersionError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segment_versions_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentVersionsOutput, crate::error::GetSegmentVersionsError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetSegmentVersionsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetSegmentVersionsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetSegmentVersionsError {
            meta: generic,
            kind: crate::error::GetSegmentVersionsErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionsError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetSegmentVersionsError {
            meta: generic,
            kind: crate::error::GetSegmentVersionsErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetSegmentVersionsError {
            meta: generic,
            kind: crate::error::GetSegmentVersionsErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionsError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetSegmentVersionsError {
            meta: generic,
            kind: crate::error::GetSegmentVersionsErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetSegmentVersionsError {
            meta: generic,
            kind: crate::error::GetSegmentVersionsErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionsError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetSegmentVersionsError {
            meta: generic,
            kind: crate::error::GetSegmentVersionsErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentVersionsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetSegmentVersionsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segment_versions_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentVersionsOutput, crate::error::GetSegmentVersionsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_segment_versions_output::Builder::default();
        output = output.set_segments_response(
            crate::json_deser::deser_payload_get_segment_versions_output_segments_response(response.body().as_ref())
                .map_err(crate::error::GetSegmentVersionsError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segments_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentsOutput, crate::error::GetSegmentsError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::GetSegmentsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetSegmentsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::GetSegmentsError {
            meta: generic,
            kind: crate::error::GetSegmentsErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentsError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::GetSegmentsError {
            meta: generic,
            kind: crate::error::GetSegmentsErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::GetSegmentsError {
            meta: generic,
            kind: crate::error::GetSegmentsErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentsError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::GetSegmentsError {
            meta: generic,
            kind: crate::error::GetSegmentsErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::GetSegmentsError {
            meta: generic,
            kind: crate::error::GetSegmentsErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentsError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::GetSegmentsError {
            meta: generic,
            kind: crate::error::GetSegmentsErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::GetSegmentsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::GetSegmentsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_get_segments_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetSegmentsOutput, crate::error::GetSegmentsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::get_segments_output::Builder::default();
        output = output.set_segments_response(
            crate::json_deser::deser_payload_get_segments_output_segments_response(response.body().as_ref())
                .map_err(crate::error::GetSegmentsError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_send_messages_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::SendMessagesOutput, crate::error::SendMessagesError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::SendMessagesError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::SendMessagesError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::SendMessagesError {
            meta: generic,
            kind: crate::error::SendMessagesErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SendMessagesError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::SendMessagesError {
            meta: generic,
            kind: crate::error::SendMessagesErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SendMessagesError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::SendMessagesError {
            meta: generic,
            kind: crate::error::SendMessagesErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SendMessagesError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::SendMessagesError {
            meta: generic,
            kind: crate::error::SendMessagesErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SendMessagesError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::SendMessagesError {
            meta: generic,
            kind: crate::error::SendMessagesErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SendMessagesError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::SendMessagesError {
            meta: generic,
            kind: crate::error::SendMessagesErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::SendMessagesError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::SendMessagesError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_send_messages_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::SendMessagesOutput, crate::error::SendMessagesError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::send_messages_output::Builder::default();
        output = output.set_message_response(
            crate::json_deser::deser_payload_send_messages_output_message_response(response.body().as_ref())
                .map_err(crate::error::SendMessagesError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_apns_channel_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateApnsChannelOutput, crate::error::UpdateApnsChannelError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::UpdateApnsChannelError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateApnsChannelError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::UpdateApnsChannelError {
            meta: generic,
            kind: crate::error::UpdateApnsChannelErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::UpdateApnsChannelError {
            meta: generic,
            kind: crate::error::UpdateApnsChannelErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::UpdateApnsChannelError {
            meta: generic,
            kind: crate::error::UpdateApnsChannelErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::UpdateApnsChannelError {
            meta: generic,
            kind: crate::error::UpdateApnsChannelErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::UpdateApnsChannelError {
            meta: generic,
            kind: crate::error::UpdateApnsChannelErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::UpdateApnsChannelError {
            meta: generic,
            kind: crate::error::UpdateApnsChannelErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApnsChannelError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::UpdateApnsChannelError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_apns_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateApnsChannelOutput, crate::error::UpdateApnsChannelError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_apns_channel_output::Builder::default();
        output = output.set_apns_channel_response(
            crate::json_deser::deser_payload_update_apns_channel_output_apns_channel_response(response.body().as_ref())
                .map_err(crate::error::UpdateApnsChannelError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_application_settings_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateApplicationSettingsOutput, crate::error::UpdateApplicationSettingsError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::UpdateApplicationSettingsError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateApplicationSettingsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::UpdateApplicationSettingsError {
            meta: generic,
            kind: crate::error::UpdateApplicationSettingsErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::UpdateApplicationSettingsError {
            meta: generic,
            kind: crate::error::UpdateApplicationSettingsErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::UpdateApplicationSettingsError {
            meta: generic,
            kind: crate::error::UpdateApplicationSettingsErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::UpdateApplicationSettingsError {
            meta: generic,
            kind: crate::error::UpdateApplicationSettingsErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::UpdateApplicationSettingsError {
            meta: generic,
            kind: crate::error::UpdateApplicationSettingsErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::UpdateApplicationSettingsError {
            meta: generic,
            kind: crate::error::UpdateApplicationSettingsErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateApplicationSettingsError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::UpdateApplicationSettingsError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_application_settings_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateApplicationSettingsOutput, crate::error::UpdateApplicationSettingsError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_application_settings_output::Builder::default();
        output = output.set_application_settings_resource(
            crate::json_deser::deser_payload_update_application_settings_output_application_settings_resource(response.body().as_ref())
                .map_err(crate::error::UpdateApplicationSettingsError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_campaign_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateCampaignOutput, crate::error::UpdateCampaignError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::UpdateCampaignError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateCampaignError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::UpdateCampaignError {
            meta: generic,
            kind: crate::error::UpdateCampaignErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::UpdateCampaignError {
            meta: generic,
            kind: crate::error::UpdateCampaignErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::UpdateCampaignError {
            meta: generic,
            kind: crate::error::UpdateCampaignErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::UpdateCampaignError {
            meta: generic,
            kind: crate::error::UpdateCampaignErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::UpdateCampaignError {
            meta: generic,
            kind: crate::error::UpdateCampaignErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateCampaignError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::UpdateCampaignError {
            meta: generic,
            kind: crate::error::UpdateCampaignErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateCampaignError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::UpdateCampaignError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_campaign_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateCampaignOutput, crate::error::UpdateCampaignError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_campaign_output::Builder::default();
        output = output.set_campaign_response(
            crate::json_deser::deser_payload_update_campaign_output_campaign_response(response.body().as_ref())
                .map_err(crate::error::UpdateCampaignError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_endpoint_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateEndpointOutput, crate::error::UpdateEndpointError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::UpdateEndpointError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateEndpointError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::UpdateEndpointError {
            meta: generic,
            kind: crate::error::UpdateEndpointErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::UpdateEndpointError {
            meta: generic,
            kind: crate::error::UpdateEndpointErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::UpdateEndpointError {
            meta: generic,
            kind: crate::error::UpdateEndpointErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::UpdateEndpointError {
            meta: generic,
            kind: crate::error::UpdateEndpointErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::UpdateEndpointError {
            meta: generic,
            kind: crate::error::UpdateEndpointErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::UpdateEndpointError {
            meta: generic,
            kind: crate::error::UpdateEndpointErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::UpdateEndpointError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_endpoint_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateEndpointOutput, crate::error::UpdateEndpointError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_endpoint_output::Builder::default();
        output = output.set_message_body(
            crate::json_deser::deser_payload_update_endpoint_output_message_body(response.body().as_ref())
                .map_err(crate::error::UpdateEndpointError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_endpoints_batch_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateEndpointsBatchOutput, crate::error::UpdateEndpointsBatchError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::UpdateEndpointsBatchError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateEndpointsBatchError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::UpdateEndpointsBatchError {
            meta: generic,
            kind: crate::error::UpdateEndpointsBatchErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointsBatchError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::UpdateEndpointsBatchError {
            meta: generic,
            kind: crate::error::UpdateEndpointsBatchErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointsBatchError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::UpdateEndpointsBatchError {
            meta: generic,
            kind: crate::error::UpdateEndpointsBatchErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointsBatchError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::UpdateEndpointsBatchError {
            meta: generic,
            kind: crate::error::UpdateEndpointsBatchErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointsBatchError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::UpdateEndpointsBatchError {
            meta: generic,
            kind: crate::error::UpdateEndpointsBatchErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointsBatchError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::UpdateEndpointsBatchError {
            meta: generic,
            kind: crate::error::UpdateEndpointsBatchErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateEndpointsBatchError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::UpdateEndpointsBatchError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_endpoints_batch_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateEndpointsBatchOutput, crate::error::UpdateEndpointsBatchError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_endpoints_batch_output::Builder::default();
        output = output.set_message_body(
            crate::json_deser::deser_payload_update_endpoints_batch_output_message_body(response.body().as_ref())
                .map_err(crate::error::UpdateEndpointsBatchError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_gcm_channel_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateGcmChannelOutput, crate::error::UpdateGcmChannelError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::UpdateGcmChannelError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateGcmChannelError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::UpdateGcmChannelError {
            meta: generic,
            kind: crate::error::UpdateGcmChannelErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::UpdateGcmChannelError {
            meta: generic,
            kind: crate::error::UpdateGcmChannelErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::UpdateGcmChannelError {
            meta: generic,
            kind: crate::error::UpdateGcmChannelErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::UpdateGcmChannelError {
            meta: generic,
            kind: crate::error::UpdateGcmChannelErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::UpdateGcmChannelError {
            meta: generic,
            kind: crate::error::UpdateGcmChannelErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::UpdateGcmChannelError {
            meta: generic,
            kind: crate::error::UpdateGcmChannelErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateGcmChannelError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::UpdateGcmChannelError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_gcm_channel_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateGcmChannelOutput, crate::error::UpdateGcmChannelError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_gcm_channel_output::Builder::default();
        output = output.set_gcm_channel_response(
            crate::json_deser::deser_payload_update_gcm_channel_output_gcm_channel_response(response.body().as_ref())
                .map_err(crate::error::UpdateGcmChannelError::unhandled)?,
        );
        output.build()
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_segment_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateSegmentOutput, crate::error::UpdateSegmentError> {
    let generic = crate::json_errors::parse_generic_error(response).map_err(crate::error::UpdateSegmentError::unhandled)?;
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateSegmentError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => crate::error::UpdateSegmentError {
            meta: generic,
            kind: crate::error::UpdateSegmentErrorKind::BadRequestException({
                #[allow(unused_mut)]
                let mut output = crate::error::bad_request_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_bad_request_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "ForbiddenException" => crate::error::UpdateSegmentError {
            meta: generic,
            kind: crate::error::UpdateSegmentErrorKind::ForbiddenException({
                #[allow(unused_mut)]
                let mut output = crate::error::forbidden_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_forbidden_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "InternalServerErrorException" => crate::error::UpdateSegmentError {
            meta: generic,
            kind: crate::error::UpdateSegmentErrorKind::InternalServerErrorException({
                #[allow(unused_mut)]
                let mut output = crate::error::internal_server_error_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_internal_server_error_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "MethodNotAllowedException" => crate::error::UpdateSegmentError {
            meta: generic,
            kind: crate::error::UpdateSegmentErrorKind::MethodNotAllowedException({
                #[allow(unused_mut)]
                let mut output = crate::error::method_not_allowed_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_method_not_allowed_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "NotFoundException" => crate::error::UpdateSegmentError {
            meta: generic,
            kind: crate::error::UpdateSegmentErrorKind::NotFoundException({
                #[allow(unused_mut)]
                let mut output = crate::error::not_found_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_not_found_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateSegmentError::unhandled)?;
                output.build()
            }),
        },
        "TooManyRequestsException" => crate::error::UpdateSegmentError {
            meta: generic,
            kind: crate::error::UpdateSegmentErrorKind::TooManyRequestsException({
                #[allow(unused_mut)]
                let mut output = crate::error::too_many_requests_exception::Builder::default();
                output = crate::json_deser::deser_structure_crate_error_too_many_requests_exception_json_err(
                    response.body().as_ref(),
                    output,
                )
                .map_err(crate::error::UpdateSegmentError::unhandled)?;
                output.build()
            }),
        },
        _ => crate::error::UpdateSegmentError::generic(generic),
    })
}

#[allow(clippy::unnecessary_wraps)]
pub fn parse_update_segment_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateSegmentOutput, crate::error::UpdateSegmentError> {
    Ok({
        #[allow(unused_mut)]
        let mut output = crate::output::update_segment_output::Builder::default();
        output = output.set_segment_response(
            crate::json_deser::deser_payload_update_segment_output_segment_response(response.body().as_ref())
                .map_err(crate::error::UpdateSegmentError::unhandled)?,
        );
        output.build()
    })
}
