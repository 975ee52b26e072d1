/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;

/// An error returned by a service that does not correspond to any modeled error shape.
///
/// Every operation error also carries one of these as metadata so that the code, message and
/// request id stay available for modeled errors.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenericError {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct Builder {
    inner: GenericError,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(&mut self) -> GenericError {
        std::mem::take(&mut self.inner)
    }
}

impl GenericError {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for GenericError {}

#[cfg(test)]
mod test {
    use super::GenericError;

    #[test]
    fn display_only_includes_present_fields() {
        let err = GenericError::builder()
            .code("NotFoundException")
            .message("Resource not found")
            .build();
        assert_eq!(
            format!("{}", err),
            r#"Error { code: "NotFoundException", message: "Resource not found" }"#
        );
        assert_eq!(format!("{}", GenericError::default()), "Error");
    }

    #[test]
    fn accessors() {
        let err = GenericError::builder().request_id("abc-123").build();
        assert_eq!(err.request_id(), Some("abc-123"));
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }
}
