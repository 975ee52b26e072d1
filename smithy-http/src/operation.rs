/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use smithy_types::instant::DateTimeFormatError;
use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// A value could not be serialized into the request
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("failed to format timestamp: {0}")]
    DateTimeFormat(#[from] DateTimeFormatError),
}

/// An operation input could not be turned into an HTTP request
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to serialize `{operation}` input: {source}")]
    SerializationError {
        operation: &'static str,
        source: SerializationError,
    },

    #[error("invalid `{operation}` request: {source}")]
    InvalidRequest {
        operation: &'static str,
        source: http::Error,
    },

    #[error("invalid endpoint for `{operation}`: {source}")]
    InvalidEndpoint {
        operation: &'static str,
        source: crate::endpoint::InvalidEndpoint,
    },

    #[error("failed to resolve an endpoint for `{operation}`: {source}")]
    ResolveEndpoint {
        operation: &'static str,
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("`{operation}` could not be built: {message}")]
    Other {
        operation: &'static str,
        message: Cow<'static, str>,
    },
}

impl BuildError {
    pub fn serialization(operation: &'static str, source: impl Into<SerializationError>) -> Self {
        BuildError::SerializationError {
            operation,
            source: source.into(),
        }
    }

    pub fn invalid_request(operation: &'static str, source: http::Error) -> Self {
        BuildError::InvalidRequest { operation, source }
    }

    pub fn invalid_endpoint(
        operation: &'static str,
        source: crate::endpoint::InvalidEndpoint,
    ) -> Self {
        BuildError::InvalidEndpoint { operation, source }
    }

    pub fn resolve_endpoint(
        operation: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        BuildError::ResolveEndpoint {
            operation,
            source: source.into(),
        }
    }

    pub fn other(operation: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        BuildError::Other {
            operation,
            message: message.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A fully built request paired with the handler that parses its response
#[derive(Debug)]
pub struct Operation<H> {
    request: Request,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn into_request_response(self) -> (Request, Parts<H>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Holds the resolved region and anything else needed to augment the request before it is
    /// sent (see `Request::augment`)
    configuration: Rc<RefCell<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            configuration: Rc::new(RefCell::new(PropertyBag::new())),
        }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let configuration: &mut PropertyBag = &mut self.configuration.as_ref().borrow_mut();
            f(self.inner, configuration)?
        };
        Ok(Request {
            inner,
            configuration: self.configuration,
        })
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn config_mut(&mut self) -> RefMut<'_, PropertyBag> {
        self.configuration.as_ref().borrow_mut()
    }

    pub fn config(&self) -> Ref<'_, PropertyBag> {
        self.configuration.as_ref().borrow()
    }

    /// Clones the request, sharing the property bag. Returns `None` if the body can't be cloned.
    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::builder()
            .uri(self.inner.uri().clone())
            .method(self.inner.method())
            .version(self.inner.version());
        *cloned_request.headers_mut()? = self.inner.headers().clone();
        let inner = cloned_request.body(cloned_body).ok()?;
        Some(Request {
            inner,
            configuration: self.configuration.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Rc<RefCell<PropertyBag>>) {
        (self.inner, self.configuration)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{BuildError, Metadata, Operation, Request};
    use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use http::Uri;
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("https://pinpoint.us-east-1.amazonaws.com/v1/apps"))
                .method("POST")
                .header(CONTENT_LENGTH, 12)
                .header(CONTENT_TYPE, "application/json")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request.config_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(
            request.uri(),
            &Uri::from_static("https://pinpoint.us-east-1.amazonaws.com/v1/apps")
        );
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "12");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.as_ref().borrow().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn augment_sees_property_bag() {
        let mut request = Request::new(http::Request::new(SdkBody::empty()));
        request.config_mut().insert(5_u32);
        let request = request
            .augment(|mut req, props| {
                let value = *props.get::<u32>().ok_or("missing")?;
                req.headers_mut().insert("x-count", value.into());
                Ok::<_, &str>(req)
            })
            .unwrap();
        assert_eq!(request.http().headers().get("x-count").unwrap(), "5");
    }

    #[test]
    fn operation_metadata() {
        let op = Operation::new(Request::new(http::Request::new(SdkBody::empty())), ())
            .with_metadata(Metadata::new("GetApp", "pinpoint"));
        let metadata = op.metadata().unwrap();
        assert_eq!(metadata.name(), "GetApp");
        assert_eq!(metadata.service(), "pinpoint");
    }

    #[test]
    fn build_error_display() {
        let err = Instant::from_epoch_seconds(i64::MAX)
            .fmt(Format::DateTime)
            .unwrap_err();
        let err = BuildError::serialization("GetApplicationDateRangeKpi", err);
        assert!(err
            .to_string()
            .starts_with("failed to serialize `GetApplicationDateRangeKpi` input"));
    }
}
