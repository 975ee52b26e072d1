/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod partition;

pub use partition::endpoint::{Definition, Protocol};

use aws_types::region::Region;
use smithy_http::endpoint::Endpoint;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Resolve the endpoint for a request given the configured region (if any)
///
/// Implementations are shared between threads through the client configuration.
pub trait ResolveAwsEndpoint: Send + Sync {
    fn resolve_endpoint(&self, region: Option<&Region>) -> Result<Endpoint, BoxError>;
}

/// A fixed endpoint ignores the region entirely
impl ResolveAwsEndpoint for Endpoint {
    fn resolve_endpoint(&self, _region: Option<&Region>) -> Result<Endpoint, BoxError> {
        Ok(self.clone())
    }
}

impl<T> ResolveAwsEndpoint for Arc<T>
where
    T: ResolveAwsEndpoint + ?Sized,
{
    fn resolve_endpoint(&self, region: Option<&Region>) -> Result<Endpoint, BoxError> {
        self.as_ref().resolve_endpoint(region)
    }
}

/// Endpoint resolution failed because no region was available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoRegion {
    uri_template: &'static str,
}

impl Display for NoRegion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a region is required to resolve endpoint `{}`",
            self.uri_template
        )
    }
}

impl Error for NoRegion {}

#[cfg(test)]
mod test {
    use crate::{Definition, Protocol, ResolveAwsEndpoint};
    use aws_types::region::Region;
    use http::Uri;
    use smithy_http::endpoint::Endpoint;
    use std::sync::Arc;

    #[test]
    fn static_endpoint_ignores_region() {
        let endpoint = Endpoint::new(Uri::from_static("http://localhost:8080"));
        let resolved = endpoint
            .resolve_endpoint(Some(&Region::new("us-west-2")))
            .unwrap();
        assert_eq!(resolved.uri(), &Uri::from_static("http://localhost:8080"));
    }

    #[test]
    fn shared_resolver() {
        let resolver: Arc<dyn ResolveAwsEndpoint> = Arc::new(Definition {
            uri_template: "pinpoint.{region}.amazonaws.com",
            protocol: Protocol::Https,
            fallback_region: None,
        });
        let resolved = resolver
            .resolve_endpoint(Some(&Region::new("eu-west-1")))
            .unwrap();
        assert_eq!(
            resolved.uri(),
            &Uri::from_static("https://pinpoint.eu-west-1.amazonaws.com")
        );
    }
}
