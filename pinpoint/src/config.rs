/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{Definition, Protocol, ResolveAwsEndpoint};
use aws_types::region::{ProvideRegion, Region};
use smithy_http::body::SdkBody;
use smithy_http::operation::{BuildError, Request};
use std::sync::Arc;

/// Default Pinpoint endpoint. Requests without a region go to `us-east-1`.
pub(crate) const DEFAULT_ENDPOINT: Definition = Definition {
    uri_template: "pinpoint.{region}.amazonaws.com",
    protocol: Protocol::Https,
    fallback_region: Some("us-east-1"),
};

/// Client configuration shared by every operation built by this crate
#[derive(Clone)]
pub struct Config {
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    pub(crate) region: Option<Region>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration with the region loaded from `AWS_REGION` / `AWS_DEFAULT_REGION`
    pub fn from_env() -> Self {
        Builder::from_env().build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Resolves the endpoint for `request`, points the request URI at it and records the region
    /// in the property bag.
    pub(crate) fn finalize_request(
        &self,
        operation: &'static str,
        request: http::Request<SdkBody>,
    ) -> Result<Request, BuildError> {
        let endpoint = self
            .endpoint_resolver
            .resolve_endpoint(self.region.as_ref())
            .map_err(|err| BuildError::resolve_endpoint(operation, err))?;
        let region = self.region.clone();
        let request = Request::new(request).augment(|mut req, props| {
            endpoint
                .set_endpoint(req.uri_mut())
                .map_err(|err| BuildError::invalid_endpoint(operation, err))?;
            if let Some(region) = region {
                props.insert(region);
            }
            Ok::<_, BuildError>(req)
        })?;
        tracing::debug!(
            operation,
            method = %request.http().method(),
            uri = %request.http().uri(),
            "built request"
        );
        Ok(request)
    }
}

#[derive(Default)]
pub struct Builder {
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    region: Option<Region>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::new().region(aws_types::region::default_provider())
    }

    /// Overrides endpoint resolution, e.g. with a fixed [`Endpoint`](smithy_http::endpoint::Endpoint)
    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn build(self) -> Config {
        Config {
            endpoint_resolver: self
                .endpoint_resolver
                .unwrap_or_else(|| Arc::new(DEFAULT_ENDPOINT) as Arc<dyn ResolveAwsEndpoint>),
            region: self.region,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use aws_types::os_shim_internal::Env;
    use aws_types::region::{ChainProvider, EnvironmentProvider, Region};
    use http::Uri;
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use tracing_test::traced_test;

    fn request(uri: &'static str) -> http::Request<SdkBody> {
        http::Request::builder()
            .uri(uri)
            .body(SdkBody::empty())
            .unwrap()
    }

    #[test]
    fn default_endpoint_uses_region() {
        let conf = Config::builder()
            .region(Region::new("eu-west-1"))
            .build();
        let request = conf
            .finalize_request("GetApp", request("/v1/apps/app1"))
            .expect("valid request");
        assert_eq!(
            request.http().uri(),
            &Uri::from_static("https://pinpoint.eu-west-1.amazonaws.com/v1/apps/app1")
        );
        assert_eq!(
            request.config().get::<Region>(),
            Some(&Region::new("eu-west-1"))
        );
    }

    #[test]
    fn no_region_falls_back_to_us_east_1() {
        let conf = Config::builder().build();
        let request = conf
            .finalize_request("GetApp", request("/v1/apps/app1"))
            .expect("valid request");
        assert_eq!(
            request.http().uri(),
            &Uri::from_static("https://pinpoint.us-east-1.amazonaws.com/v1/apps/app1")
        );
        assert_eq!(request.config().get::<Region>(), None);
    }

    #[test]
    fn endpoint_override() {
        let conf = Config::builder()
            .endpoint_resolver(Endpoint::new(Uri::from_static("http://localhost:8000/prefix")))
            .build();
        let request = conf
            .finalize_request("GetApp", request("/v1/apps/app1?page-size=1"))
            .expect("valid request");
        assert_eq!(
            request.http().uri(),
            &Uri::from_static("http://localhost:8000/prefix/v1/apps/app1?page-size=1")
        );
    }

    #[test]
    fn region_from_environment() {
        let env = Env::from_slice(&[("AWS_DEFAULT_REGION", "ap-south-1")]);
        let conf = Config::builder()
            .region(EnvironmentProvider::from_env(env))
            .build();
        assert_eq!(conf.region(), Some(&Region::new("ap-south-1")));
        assert_eq!(
            format!("{:?}", conf),
            r#"Config { region: Some(Region("ap-south-1")) }"#
        );
    }

    #[test]
    fn region_from_provider_chain() {
        let empty = Env::from_slice(&[]);
        let conf = Config::builder()
            .region(
                ChainProvider::first_try(EnvironmentProvider::from_env(empty))
                    .or_else(Region::new("ca-central-1")),
            )
            .build();
        assert_eq!(conf.region(), Some(&Region::new("ca-central-1")));
        let request = conf
            .finalize_request("GetApp", request("/v1/apps/app1"))
            .expect("valid request");
        assert_eq!(
            request.http().uri(),
            &Uri::from_static("https://pinpoint.ca-central-1.amazonaws.com/v1/apps/app1")
        );
    }

    #[test]
    #[traced_test]
    fn logs_built_request() {
        let conf = Config::builder()
            .region(Region::new("us-west-2"))
            .build();
        conf.finalize_request("GetCampaign", request("/v1/apps/a/campaigns/c"))
            .expect("valid request");
        assert!(logs_contain("built request"));
        assert!(logs_contain("GetCampaign"));
    }
}
