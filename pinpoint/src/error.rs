/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `CreateCampaign` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateCampaignError {
    pub kind: CreateCampaignErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateCampaignErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateCampaignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateCampaignErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateCampaignErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateCampaignErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateCampaignErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateCampaignErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateCampaignErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateCampaignErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateCampaignError {
    pub fn new(kind: CreateCampaignErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateCampaignErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateCampaignErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, CreateCampaignErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateCampaignErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, CreateCampaignErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, CreateCampaignErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, CreateCampaignErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, CreateCampaignErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for CreateCampaignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateCampaignErrorKind::BadRequestException(_inner) => Some(_inner),
            CreateCampaignErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateCampaignErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            CreateCampaignErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            CreateCampaignErrorKind::NotFoundException(_inner) => Some(_inner),
            CreateCampaignErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            CreateCampaignErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateImportJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateImportJobError {
    pub kind: CreateImportJobErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateImportJobErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateImportJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateImportJobErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImportJobErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImportJobErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImportJobErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImportJobErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImportJobErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateImportJobErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateImportJobError {
    pub fn new(kind: CreateImportJobErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateImportJobErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateImportJobErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, CreateImportJobErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateImportJobErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, CreateImportJobErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, CreateImportJobErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, CreateImportJobErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, CreateImportJobErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for CreateImportJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateImportJobErrorKind::BadRequestException(_inner) => Some(_inner),
            CreateImportJobErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateImportJobErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            CreateImportJobErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            CreateImportJobErrorKind::NotFoundException(_inner) => Some(_inner),
            CreateImportJobErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            CreateImportJobErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateSegment` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateSegmentError {
    pub kind: CreateSegmentErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateSegmentErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateSegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateSegmentErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateSegmentErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateSegmentErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateSegmentErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateSegmentErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateSegmentErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateSegmentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl CreateSegmentError {
    pub fn new(kind: CreateSegmentErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateSegmentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateSegmentErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, CreateSegmentErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, CreateSegmentErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, CreateSegmentErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, CreateSegmentErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, CreateSegmentErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, CreateSegmentErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for CreateSegmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateSegmentErrorKind::BadRequestException(_inner) => Some(_inner),
            CreateSegmentErrorKind::ForbiddenException(_inner) => Some(_inner),
            CreateSegmentErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            CreateSegmentErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            CreateSegmentErrorKind::NotFoundException(_inner) => Some(_inner),
            CreateSegmentErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            CreateSegmentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteApnsChannel` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteApnsChannelError {
    pub kind: DeleteApnsChannelErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteApnsChannelErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteApnsChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteApnsChannelErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteApnsChannelErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteApnsChannelErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteApnsChannelErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteApnsChannelErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteApnsChannelErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteApnsChannelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteApnsChannelError {
    pub fn new(kind: DeleteApnsChannelErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteApnsChannelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteApnsChannelErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteApnsChannelErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteApnsChannelErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, DeleteApnsChannelErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, DeleteApnsChannelErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteApnsChannelErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, DeleteApnsChannelErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for DeleteApnsChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteApnsChannelErrorKind::BadRequestException(_inner) => Some(_inner),
            DeleteApnsChannelErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteApnsChannelErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            DeleteApnsChannelErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            DeleteApnsChannelErrorKind::NotFoundException(_inner) => Some(_inner),
            DeleteApnsChannelErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            DeleteApnsChannelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteCampaign` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteCampaignError {
    pub kind: DeleteCampaignErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteCampaignErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteCampaignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteCampaignErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteCampaignErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteCampaignErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteCampaignErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteCampaignErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteCampaignErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteCampaignErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteCampaignError {
    pub fn new(kind: DeleteCampaignErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteCampaignErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteCampaignErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteCampaignErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteCampaignErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, DeleteCampaignErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, DeleteCampaignErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteCampaignErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, DeleteCampaignErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for DeleteCampaignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteCampaignErrorKind::BadRequestException(_inner) => Some(_inner),
            DeleteCampaignErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteCampaignErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            DeleteCampaignErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            DeleteCampaignErrorKind::NotFoundException(_inner) => Some(_inner),
            DeleteCampaignErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            DeleteCampaignErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteGcmChannel` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteGcmChannelError {
    pub kind: DeleteGcmChannelErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteGcmChannelErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteGcmChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteGcmChannelErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteGcmChannelErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteGcmChannelErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteGcmChannelErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteGcmChannelErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteGcmChannelErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteGcmChannelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteGcmChannelError {
    pub fn new(kind: DeleteGcmChannelErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteGcmChannelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteGcmChannelErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteGcmChannelErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteGcmChannelErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, DeleteGcmChannelErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, DeleteGcmChannelErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteGcmChannelErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, DeleteGcmChannelErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for DeleteGcmChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteGcmChannelErrorKind::BadRequestException(_inner) => Some(_inner),
            DeleteGcmChannelErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteGcmChannelErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            DeleteGcmChannelErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            DeleteGcmChannelErrorKind::NotFoundException(_inner) => Some(_inner),
            DeleteGcmChannelErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            DeleteGcmChannelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteSegment` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteSegmentError {
    pub kind: DeleteSegmentErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteSegmentErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteSegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteSegmentErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteSegmentErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteSegmentErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteSegmentErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteSegmentErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteSegmentErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteSegmentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl DeleteSegmentError {
    pub fn new(kind: DeleteSegmentErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteSegmentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteSegmentErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteSegmentErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, DeleteSegmentErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, DeleteSegmentErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, DeleteSegmentErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteSegmentErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, DeleteSegmentErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for DeleteSegmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteSegmentErrorKind::BadRequestException(_inner) => Some(_inner),
            DeleteSegmentErrorKind::ForbiddenException(_inner) => Some(_inner),
            DeleteSegmentErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            DeleteSegmentErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            DeleteSegmentErrorKind::NotFoundException(_inner) => Some(_inner),
            DeleteSegmentErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            DeleteSegmentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetApnsChannel` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetApnsChannelError {
    pub kind: GetApnsChannelErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetApnsChannelErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetApnsChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetApnsChannelErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApnsChannelErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApnsChannelErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApnsChannelErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApnsChannelErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApnsChannelErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApnsChannelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetApnsChannelError {
    pub fn new(kind: GetApnsChannelErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetApnsChannelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetApnsChannelErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetApnsChannelErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetApnsChannelErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetApnsChannelErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetApnsChannelErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetApnsChannelErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetApnsChannelErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetApnsChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetApnsChannelErrorKind::BadRequestException(_inner) => Some(_inner),
            GetApnsChannelErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetApnsChannelErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetApnsChannelErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetApnsChannelErrorKind::NotFoundException(_inner) => Some(_inner),
            GetApnsChannelErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetApnsChannelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetApplicationSettings` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetApplicationSettingsError {
    pub kind: GetApplicationSettingsErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetApplicationSettingsErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetApplicationSettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetApplicationSettingsErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApplicationSettingsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApplicationSettingsErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApplicationSettingsErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApplicationSettingsErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApplicationSettingsErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetApplicationSettingsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetApplicationSettingsError {
    pub fn new(kind: GetApplicationSettingsErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetApplicationSettingsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetApplicationSettingsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetApplicationSettingsErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetApplicationSettingsErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetApplicationSettingsErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetApplicationSettingsErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetApplicationSettingsErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetApplicationSettingsErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetApplicationSettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetApplicationSettingsErrorKind::BadRequestException(_inner) => Some(_inner),
            GetApplicationSettingsErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetApplicationSettingsErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetApplicationSettingsErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetApplicationSettingsErrorKind::NotFoundException(_inner) => Some(_inner),
            GetApplicationSettingsErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetApplicationSettingsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetCampaign` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetCampaignError {
    pub kind: GetCampaignErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetCampaignErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetCampaignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetCampaignErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetCampaignError {
    pub fn new(kind: GetCampaignErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetCampaignErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetCampaignErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetCampaignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetCampaignErrorKind::BadRequestException(_inner) => Some(_inner),
            GetCampaignErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetCampaignErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetCampaignErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetCampaignErrorKind::NotFoundException(_inner) => Some(_inner),
            GetCampaignErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetCampaignErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetCampaignActivities` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetCampaignActivitiesError {
    pub kind: GetCampaignActivitiesErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetCampaignActivitiesErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetCampaignActivitiesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetCampaignActivitiesErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignActivitiesErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignActivitiesErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignActivitiesErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignActivitiesErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignActivitiesErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignActivitiesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetCampaignActivitiesError {
    pub fn new(kind: GetCampaignActivitiesErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetCampaignActivitiesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetCampaignActivitiesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignActivitiesErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignActivitiesErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignActivitiesErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignActivitiesErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignActivitiesErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignActivitiesErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetCampaignActivitiesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetCampaignActivitiesErrorKind::BadRequestException(_inner) => Some(_inner),
            GetCampaignActivitiesErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetCampaignActivitiesErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetCampaignActivitiesErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetCampaignActivitiesErrorKind::NotFoundException(_inner) => Some(_inner),
            GetCampaignActivitiesErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetCampaignActivitiesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetCampaignDateRangeKpi` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetCampaignDateRangeKpiError {
    pub kind: GetCampaignDateRangeKpiErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetCampaignDateRangeKpiErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetCampaignDateRangeKpiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetCampaignDateRangeKpiErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignDateRangeKpiErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignDateRangeKpiErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignDateRangeKpiErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignDateRangeKpiErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignDateRangeKpiErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignDateRangeKpiErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetCampaignDateRangeKpiError {
    pub fn new(kind: GetCampaignDateRangeKpiErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetCampaignDateRangeKpiErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetCampaignDateRangeKpiErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignDateRangeKpiErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignDateRangeKpiErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignDateRangeKpiErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignDateRangeKpiErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignDateRangeKpiErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignDateRangeKpiErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetCampaignDateRangeKpiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetCampaignDateRangeKpiErrorKind::BadRequestException(_inner) => Some(_inner),
            GetCampaignDateRangeKpiErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetCampaignDateRangeKpiErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetCampaignDateRangeKpiErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetCampaignDateRangeKpiErrorKind::NotFoundException(_inner) => Some(_inner),
            GetCampaignDateRangeKpiErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetCampaignDateRangeKpiErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetCampaignVersion` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetCampaignVersionError {
    pub kind: GetCampaignVersionErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetCampaignVersionErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetCampaignVersionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetCampaignVersionErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetCampaignVersionError {
    pub fn new(kind: GetCampaignVersionErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetCampaignVersionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetCampaignVersionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetCampaignVersionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetCampaignVersionErrorKind::BadRequestException(_inner) => Some(_inner),
            GetCampaignVersionErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetCampaignVersionErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetCampaignVersionErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetCampaignVersionErrorKind::NotFoundException(_inner) => Some(_inner),
            GetCampaignVersionErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetCampaignVersionErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetCampaignVersions` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetCampaignVersionsError {
    pub kind: GetCampaignVersionsErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetCampaignVersionsErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetCampaignVersionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetCampaignVersionsErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionsErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionsErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionsErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionsErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignVersionsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetCampaignVersionsError {
    pub fn new(kind: GetCampaignVersionsErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetCampaignVersionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetCampaignVersionsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionsErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionsErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionsErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionsErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionsErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignVersionsErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetCampaignVersionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetCampaignVersionsErrorKind::BadRequestException(_inner) => Some(_inner),
            GetCampaignVersionsErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetCampaignVersionsErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetCampaignVersionsErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetCampaignVersionsErrorKind::NotFoundException(_inner) => Some(_inner),
            GetCampaignVersionsErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetCampaignVersionsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetCampaigns` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetCampaignsError {
    pub kind: GetCampaignsErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetCampaignsErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetCampaignsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetCampaignsErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignsErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignsErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignsErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignsErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetCampaignsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetCampaignsError {
    pub fn new(kind: GetCampaignsErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetCampaignsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetCampaignsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignsErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignsErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignsErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignsErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignsErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetCampaignsErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetCampaignsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetCampaignsErrorKind::BadRequestException(_inner) => Some(_inner),
            GetCampaignsErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetCampaignsErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetCampaignsErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetCampaignsErrorKind::NotFoundException(_inner) => Some(_inner),
            GetCampaignsErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetCampaignsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetEndpoint` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetEndpointError {
    pub kind: GetEndpointErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetEndpointErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetEndpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetEndpointErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetEndpointErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetEndpointErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetEndpointErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetEndpointErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetEndpointErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetEndpointErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetEndpointError {
    pub fn new(kind: GetEndpointErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetEndpointErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetEndpointErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetEndpointErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetEndpointErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetEndpointErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetEndpointErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetEndpointErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetEndpointErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetEndpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetEndpointErrorKind::BadRequestException(_inner) => Some(_inner),
            GetEndpointErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetEndpointErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetEndpointErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetEndpointErrorKind::NotFoundException(_inner) => Some(_inner),
            GetEndpointErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetEndpointErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetGcmChannel` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetGcmChannelError {
    pub kind: GetGcmChannelErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetGcmChannelErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetGcmChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetGcmChannelErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetGcmChannelErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetGcmChannelErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetGcmChannelErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetGcmChannelErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetGcmChannelErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetGcmChannelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetGcmChannelError {
    pub fn new(kind: GetGcmChannelErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetGcmChannelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetGcmChannelErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetGcmChannelErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetGcmChannelErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetGcmChannelErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetGcmChannelErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetGcmChannelErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetGcmChannelErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetGcmChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetGcmChannelErrorKind::BadRequestException(_inner) => Some(_inner),
            GetGcmChannelErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetGcmChannelErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetGcmChannelErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetGcmChannelErrorKind::NotFoundException(_inner) => Some(_inner),
            GetGcmChannelErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetGcmChannelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetImportJob` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetImportJobError {
    pub kind: GetImportJobErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetImportJobErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetImportJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetImportJobErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetImportJobError {
    pub fn new(kind: GetImportJobErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetImportJobErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetImportJobErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetImportJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetImportJobErrorKind::BadRequestException(_inner) => Some(_inner),
            GetImportJobErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetImportJobErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetImportJobErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetImportJobErrorKind::NotFoundException(_inner) => Some(_inner),
            GetImportJobErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetImportJobErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetImportJobs` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetImportJobsError {
    pub kind: GetImportJobsErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetImportJobsErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetImportJobsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetImportJobsErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobsErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobsErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobsErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobsErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetImportJobsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetImportJobsError {
    pub fn new(kind: GetImportJobsErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetImportJobsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetImportJobsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobsErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobsErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobsErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobsErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobsErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetImportJobsErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetImportJobsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetImportJobsErrorKind::BadRequestException(_inner) => Some(_inner),
            GetImportJobsErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetImportJobsErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetImportJobsErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetImportJobsErrorKind::NotFoundException(_inner) => Some(_inner),
            GetImportJobsErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetImportJobsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetJourney` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetJourneyError {
    pub kind: GetJourneyErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetJourneyErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetJourneyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetJourneyErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJourneyErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJourneyErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJourneyErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJourneyErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJourneyErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetJourneyErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetJourneyError {
    pub fn new(kind: GetJourneyErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetJourneyErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetJourneyErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetJourneyErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetJourneyErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetJourneyErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetJourneyErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetJourneyErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetJourneyErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetJourneyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetJourneyErrorKind::BadRequestException(_inner) => Some(_inner),
            GetJourneyErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetJourneyErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetJourneyErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetJourneyErrorKind::NotFoundException(_inner) => Some(_inner),
            GetJourneyErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetJourneyErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetSegment` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetSegmentError {
    pub kind: GetSegmentErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetSegmentErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetSegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetSegmentErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetSegmentError {
    pub fn new(kind: GetSegmentErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetSegmentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetSegmentErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetSegmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetSegmentErrorKind::BadRequestException(_inner) => Some(_inner),
            GetSegmentErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetSegmentErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetSegmentErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetSegmentErrorKind::NotFoundException(_inner) => Some(_inner),
            GetSegmentErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetSegmentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetSegmentImportJobs` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetSegmentImportJobsError {
    pub kind: GetSegmentImportJobsErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetSegmentImportJobsErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetSegmentImportJobsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetSegmentImportJobsErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentImportJobsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentImportJobsErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentImportJobsErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentImportJobsErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentImportJobsErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentImportJobsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetSegmentImportJobsError {
    pub fn new(kind: GetSegmentImportJobsErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetSegmentImportJobsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetSegmentImportJobsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentImportJobsErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentImportJobsErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentImportJobsErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentImportJobsErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentImportJobsErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentImportJobsErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetSegmentImportJobsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetSegmentImportJobsErrorKind::BadRequestException(_inner) => Some(_inner),
            GetSegmentImportJobsErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetSegmentImportJobsErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetSegmentImportJobsErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetSegmentImportJobsErrorKind::NotFoundException(_inner) => Some(_inner),
            GetSegmentImportJobsErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetSegmentImportJobsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetSegmentVersion` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetSegmentVersionError {
    pub kind: GetSegmentVersionErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetSegmentVersionErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetSegmentVersionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetSegmentVersionErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetSegmentVersionError {
    pub fn new(kind: GetSegmentVersionErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetSegmentVersionErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetSegmentVersionErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetSegmentVersionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetSegmentVersionErrorKind::BadRequestException(_inner) => Some(_inner),
            GetSegmentVersionErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetSegmentVersionErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetSegmentVersionErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetSegmentVersionErrorKind::NotFoundException(_inner) => Some(_inner),
            GetSegmentVersionErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetSegmentVersionErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetSegmentVersions` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetSegmentVersionsError {
    pub kind: GetSegmentVersionsErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetSegmentVersionsErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetSegmentVersionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetSegmentVersionsErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionsErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionsErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionsErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionsErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentVersionsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetSegmentVersionsError {
    pub fn new(kind: GetSegmentVersionsErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetSegmentVersionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetSegmentVersionsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionsErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionsErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionsErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionsErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionsErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentVersionsErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetSegmentVersionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetSegmentVersionsErrorKind::BadRequestException(_inner) => Some(_inner),
            GetSegmentVersionsErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetSegmentVersionsErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetSegmentVersionsErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetSegmentVersionsErrorKind::NotFoundException(_inner) => Some(_inner),
            GetSegmentVersionsErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetSegmentVersionsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetSegments` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetSegmentsError {
    pub kind: GetSegmentsErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetSegmentsErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetSegmentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetSegmentsErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentsErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentsErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentsErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentsErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetSegmentsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl GetSegmentsError {
    pub fn new(kind: GetSegmentsErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetSegmentsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: GetSegmentsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentsErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentsErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentsErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentsErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentsErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, GetSegmentsErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for GetSegmentsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetSegmentsErrorKind::BadRequestException(_inner) => Some(_inner),
            GetSegmentsErrorKind::ForbiddenException(_inner) => Some(_inner),
            GetSegmentsErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            GetSegmentsErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            GetSegmentsErrorKind::NotFoundException(_inner) => Some(_inner),
            GetSegmentsErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            GetSegmentsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `SendMessages` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct SendMessagesError {
    pub kind: SendMessagesErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum SendMessagesErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for SendMessagesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SendMessagesErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            SendMessagesErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            SendMessagesErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            SendMessagesErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            SendMessagesErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            SendMessagesErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            SendMessagesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl SendMessagesError {
    pub fn new(kind: SendMessagesErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: SendMessagesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: SendMessagesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, SendMessagesErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, SendMessagesErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, SendMessagesErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, SendMessagesErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, SendMessagesErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, SendMessagesErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for SendMessagesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SendMessagesErrorKind::BadRequestException(_inner) => Some(_inner),
            SendMessagesErrorKind::ForbiddenException(_inner) => Some(_inner),
            SendMessagesErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            SendMessagesErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            SendMessagesErrorKind::NotFoundException(_inner) => Some(_inner),
            SendMessagesErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            SendMessagesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateApnsChannel` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateApnsChannelError {
    pub kind: UpdateApnsChannelErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateApnsChannelErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateApnsChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateApnsChannelErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApnsChannelErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApnsChannelErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApnsChannelErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApnsChannelErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApnsChannelErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApnsChannelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateApnsChannelError {
    pub fn new(kind: UpdateApnsChannelErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateApnsChannelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateApnsChannelErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateApnsChannelErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateApnsChannelErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, UpdateApnsChannelErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, UpdateApnsChannelErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateApnsChannelErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, UpdateApnsChannelErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for UpdateApnsChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateApnsChannelErrorKind::BadRequestException(_inner) => Some(_inner),
            UpdateApnsChannelErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateApnsChannelErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            UpdateApnsChannelErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            UpdateApnsChannelErrorKind::NotFoundException(_inner) => Some(_inner),
            UpdateApnsChannelErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            UpdateApnsChannelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateApplicationSettings` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateApplicationSettingsError {
    pub kind: UpdateApplicationSettingsErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateApplicationSettingsErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateApplicationSettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateApplicationSettingsErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApplicationSettingsErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApplicationSettingsErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApplicationSettingsErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApplicationSettingsErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApplicationSettingsErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateApplicationSettingsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateApplicationSettingsError {
    pub fn new(kind: UpdateApplicationSettingsErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateApplicationSettingsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateApplicationSettingsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateApplicationSettingsErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateApplicationSettingsErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, UpdateApplicationSettingsErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, UpdateApplicationSettingsErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateApplicationSettingsErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, UpdateApplicationSettingsErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for UpdateApplicationSettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateApplicationSettingsErrorKind::BadRequestException(_inner) => Some(_inner),
            UpdateApplicationSettingsErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateApplicationSettingsErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            UpdateApplicationSettingsErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            UpdateApplicationSettingsErrorKind::NotFoundException(_inner) => Some(_inner),
            UpdateApplicationSettingsErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            UpdateApplicationSettingsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateCampaign` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateCampaignError {
    pub kind: UpdateCampaignErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateCampaignErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateCampaignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateCampaignErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateCampaignErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateCampaignErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateCampaignErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateCampaignErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateCampaignErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateCampaignErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateCampaignError {
    pub fn new(kind: UpdateCampaignErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateCampaignErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateCampaignErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateCampaignErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateCampaignErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, UpdateCampaignErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, UpdateCampaignErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateCampaignErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, UpdateCampaignErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for UpdateCampaignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateCampaignErrorKind::BadRequestException(_inner) => Some(_inner),
            UpdateCampaignErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateCampaignErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            UpdateCampaignErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            UpdateCampaignErrorKind::NotFoundException(_inner) => Some(_inner),
            UpdateCampaignErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            UpdateCampaignErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateEndpoint` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateEndpointError {
    pub kind: UpdateEndpointErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateEndpointErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateEndpointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateEndpointErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateEndpointError {
    pub fn new(kind: UpdateEndpointErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateEndpointErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateEndpointErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for UpdateEndpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateEndpointErrorKind::BadRequestException(_inner) => Some(_inner),
            UpdateEndpointErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateEndpointErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            UpdateEndpointErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            UpdateEndpointErrorKind::NotFoundException(_inner) => Some(_inner),
            UpdateEndpointErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            UpdateEndpointErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateEndpointsBatch` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateEndpointsBatchError {
    pub kind: UpdateEndpointsBatchErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateEndpointsBatchErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateEndpointsBatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateEndpointsBatchErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointsBatchErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointsBatchErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointsBatchErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointsBatchErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointsBatchErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateEndpointsBatchErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateEndpointsBatchError {
    pub fn new(kind: UpdateEndpointsBatchErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateEndpointsBatchErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateEndpointsBatchErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointsBatchErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointsBatchErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointsBatchErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointsBatchErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointsBatchErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, UpdateEndpointsBatchErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for UpdateEndpointsBatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateEndpointsBatchErrorKind::BadRequestException(_inner) => Some(_inner),
            UpdateEndpointsBatchErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateEndpointsBatchErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            UpdateEndpointsBatchErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            UpdateEndpointsBatchErrorKind::NotFoundException(_inner) => Some(_inner),
            UpdateEndpointsBatchErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            UpdateEndpointsBatchErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateGcmChannel` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateGcmChannelError {
    pub kind: UpdateGcmChannelErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateGcmChannelErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateGcmChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateGcmChannelErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateGcmChannelErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateGcmChannelErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateGcmChannelErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateGcmChannelErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateGcmChannelErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateGcmChannelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateGcmChannelError {
    pub fn new(kind: UpdateGcmChannelErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateGcmChannelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateGcmChannelErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateGcmChannelErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateGcmChannelErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, UpdateGcmChannelErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, UpdateGcmChannelErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateGcmChannelErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, UpdateGcmChannelErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for UpdateGcmChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateGcmChannelErrorKind::BadRequestException(_inner) => Some(_inner),
            UpdateGcmChannelErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateGcmChannelErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            UpdateGcmChannelErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            UpdateGcmChannelErrorKind::NotFoundException(_inner) => Some(_inner),
            UpdateGcmChannelErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            UpdateGcmChannelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateSegment` operation.
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateSegmentError {
    pub kind: UpdateSegmentErrorKind,
    pub(crate) meta: smithy_types::GenericError,
}
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateSegmentErrorKind {
    BadRequestException(crate::error::BadRequestException),
    ForbiddenException(crate::error::ForbiddenException),
    InternalServerErrorException(crate::error::InternalServerErrorException),
    MethodNotAllowedException(crate::error::MethodNotAllowedException),
    NotFoundException(crate::error::NotFoundException),
    TooManyRequestsException(crate::error::TooManyRequestsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateSegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateSegmentErrorKind::BadRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateSegmentErrorKind::ForbiddenException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateSegmentErrorKind::InternalServerErrorException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateSegmentErrorKind::MethodNotAllowedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateSegmentErrorKind::NotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateSegmentErrorKind::TooManyRequestsException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateSegmentErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl UpdateSegmentError {
    pub fn new(kind: UpdateSegmentErrorKind, meta: smithy_types::GenericError) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateSegmentErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::GenericError) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateSegmentErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::GenericError {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateSegmentErrorKind::BadRequestException(_))
    }
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(&self.kind, UpdateSegmentErrorKind::ForbiddenException(_))
    }
    pub fn is_internal_server_error_exception(&self) -> bool {
        matches!(&self.kind, UpdateSegmentErrorKind::InternalServerErrorException(_))
    }
    pub fn is_method_not_allowed_exception(&self) -> bool {
        matches!(&self.kind, UpdateSegmentErrorKind::MethodNotAllowedException(_))
    }
    pub fn is_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateSegmentErrorKind::NotFoundException(_))
    }
    pub fn is_too_many_requests_exception(&self) -> bool {
        matches!(&self.kind, UpdateSegmentErrorKind::TooManyRequestsException(_))
    }
}
impl std::error::Error for UpdateSegmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateSegmentErrorKind::BadRequestException(_inner) => Some(_inner),
            UpdateSegmentErrorKind::ForbiddenException(_inner) => Some(_inner),
            UpdateSegmentErrorKind::InternalServerErrorException(_inner) => Some(_inner),
            UpdateSegmentErrorKind::MethodNotAllowedException(_inner) => Some(_inner),
            UpdateSegmentErrorKind::NotFoundException(_inner) => Some(_inner),
            UpdateSegmentErrorKind::TooManyRequestsException(_inner) => Some(_inner),
            UpdateSegmentErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Simple message object.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BadRequestException {
    pub message: std::option::Option<std::string::String>,
    /// The unique identifier for the request or response.
    pub request_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for BadRequestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BadRequestException");
        formatter.field("message", &self.message);
        formatter.field("request_id", &self.request_id);
        formatter.finish()
    }
}
impl BadRequestException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for BadRequestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BadRequestException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for BadRequestException {}
/// See [`BadRequestException`](crate::error::BadRequestException)
pub mod bad_request_exception {
    /// A builder for [`BadRequestException`](crate::error::BadRequestException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// The unique identifier for the request or response.
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`BadRequestException`](crate::error::BadRequestException)
        pub fn build(self) -> crate::error::BadRequestException {
            crate::error::BadRequestException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl BadRequestException {
    /// Creates a new builder-style object to manufacture [`BadRequestException`](crate::error::BadRequestException)
    pub fn builder() -> crate::error::bad_request_exception::Builder {
        crate::error::bad_request_exception::Builder::default()
    }
}

/// Simple message object.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ForbiddenException {
    pub message: std::option::Option<std::string::String>,
    /// The unique identifier for the request or response.
    pub request_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ForbiddenException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ForbiddenException");
        formatter.field("message", &self.message);
        formatter.field("request_id", &self.request_id);
        formatter.finish()
    }
}
impl ForbiddenException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for ForbiddenException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ForbiddenException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ForbiddenException {}
/// See [`ForbiddenException`](crate::error::ForbiddenException)
pub mod forbidden_exception {
    /// A builder for [`ForbiddenException`](crate::error::ForbiddenException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// The unique identifier for the request or response.
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ForbiddenException`](crate::error::ForbiddenException)
        pub fn build(self) -> crate::error::ForbiddenException {
            crate::error::ForbiddenException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl ForbiddenException {
    /// Creates a new builder-style object to manufacture [`ForbiddenException`](crate::error::ForbiddenException)
    pub fn builder() -> crate::error::forbidden_exception::Builder {
        crate::error::forbidden_exception::Builder::default()
    }
}

/// Simple message object.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct InternalServerErrorException {
    pub message: std::option::Option<std::string::String>,
    /// The unique identifier for the request or response.
    pub request_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for InternalServerErrorException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InternalServerErrorException");
        formatter.field("message", &self.message);
        formatter.field("request_id", &self.request_id);
        formatter.finish()
    }
}
impl InternalServerErrorException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for InternalServerErrorException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalServerErrorException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServerErrorException {}
/// See [`InternalServerErrorException`](crate::error::InternalServerErrorException)
pub mod internal_server_error_exception {
    /// A builder for [`InternalServerErrorException`](crate::error::InternalServerErrorException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// The unique identifier for the request or response.
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`InternalServerErrorException`](crate::error::InternalServerErrorException)
        pub fn build(self) -> crate::error::InternalServerErrorException {
            crate::error::InternalServerErrorException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl InternalServerErrorException {
    /// Creates a new builder-style object to manufacture [`InternalServerErrorException`](crate::error::InternalServerErrorException)
    pub fn builder() -> crate::error::internal_server_error_exception::Builder {
        crate::error::internal_server_error_exception::Builder::default()
    }
}

/// Simple message object.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct MethodNotAllowedException {
    pub message: std::option::Option<std::string::String>,
    /// The unique identifier for the request or response.
    pub request_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for MethodNotAllowedException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MethodNotAllowedException");
        formatter.field("message", &self.message);
        formatter.field("request_id", &self.request_id);
        formatter.finish()
    }
}
impl MethodNotAllowedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for MethodNotAllowedException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MethodNotAllowedException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for MethodNotAllowedException {}
/// See [`MethodNotAllowedException`](crate::error::MethodNotAllowedException)
pub mod method_not_allowed_exception {
    /// A builder for [`MethodNotAllowedException`](crate::error::MethodNotAllowedException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// The unique identifier for the request or response.
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`MethodNotAllowedException`](crate::error::MethodNotAllowedException)
        pub fn build(self) -> crate::error::MethodNotAllowedException {
            crate::error::MethodNotAllowedException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl MethodNotAllowedException {
    /// Creates a new builder-style object to manufacture [`MethodNotAllowedException`](crate::error::MethodNotAllowedException)
    pub fn builder() -> crate::error::method_not_allowed_exception::Builder {
        crate::error::method_not_allowed_exception::Builder::default()
    }
}

/// Simple message object.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NotFoundException {
    pub message: std::option::Option<std::string::String>,
    /// The unique identifier for the request or response.
    pub request_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for NotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NotFoundException");
        formatter.field("message", &self.message);
        formatter.field("request_id", &self.request_id);
        formatter.finish()
    }
}
impl NotFoundException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for NotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NotFoundException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for NotFoundException {}
/// See [`NotFoundException`](crate::error::NotFoundException)
pub mod not_found_exception {
    /// A builder for [`NotFoundException`](crate::error::NotFoundException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// The unique identifier for the request or response.
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`NotFoundException`](crate::error::NotFoundException)
        pub fn build(self) -> crate::error::NotFoundException {
            crate::error::NotFoundException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl NotFoundException {
    /// Creates a new builder-style object to manufacture [`NotFoundException`](crate::error::NotFoundException)
    pub fn builder() -> crate::error::not_found_exception::Builder {
        crate::error::not_found_exception::Builder::default()
    }
}

/// Simple message object.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct TooManyRequestsException {
    pub message: std::option::Option<std::string::String>,
    /// The unique identifier for the request or response.
    pub request_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for TooManyRequestsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TooManyRequestsException");
        formatter.field("message", &self.message);
        formatter.field("request_id", &self.request_id);
        formatter.finish()
    }
}
impl TooManyRequestsException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
impl std::fmt::Display for TooManyRequestsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TooManyRequestsException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TooManyRequestsException {}
/// See [`TooManyRequestsException`](crate::error::TooManyRequestsException)
pub mod too_many_requests_exception {
    /// A builder for [`TooManyRequestsException`](crate::error::TooManyRequestsException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// The unique identifier for the request or response.
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`TooManyRequestsException`](crate::error::TooManyRequestsException)
        pub fn build(self) -> crate::error::TooManyRequestsException {
            crate::error::TooManyRequestsException {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl TooManyRequestsException {
    /// Creates a new builder-style object to manufacture [`TooManyRequestsException`](crate::error::TooManyRequestsException)
    pub fn builder() -> crate::error::too_many_requests_exception::Builder {
        crate::error::too_many_requests_exception::Builder::default()
    }
}
