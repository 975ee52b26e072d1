/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{BoxError, NoRegion, ResolveAwsEndpoint};
use aws_types::region::Region;
use smithy_http::endpoint::Endpoint;

/// Endpoint template for a service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    /// URI for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction
    pub uri_template: &'static str,

    /// Protocol to use for this endpoint
    pub protocol: Protocol,

    /// Region substituted into the template when none is configured
    pub fallback_region: Option<&'static str>,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl ResolveAwsEndpoint for Definition {
    fn resolve_endpoint(&self, region: Option<&Region>) -> Result<Endpoint, BoxError> {
        let region = match (region, self.fallback_region) {
            (Some(region), _) => region.as_ref(),
            (None, Some(fallback)) => fallback,
            (None, None) => {
                return Err(NoRegion {
                    uri_template: self.uri_template,
                }
                .into())
            }
        };
        let uri = self.uri_template.replace("{region}", region);
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        let endpoint = Endpoint::new(uri.parse()?);
        tracing::debug!(endpoint = ?endpoint, region = %region, "resolved endpoint");
        Ok(endpoint)
    }
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::{Definition, Protocol};
    use crate::ResolveAwsEndpoint;
    use aws_types::region::Region;
    use http::Uri;

    const PINPOINT: Definition = Definition {
        uri_template: "pinpoint.{region}.amazonaws.com",
        protocol: Protocol::Https,
        fallback_region: Some("us-east-1"),
    };

    #[test]
    fn substitutes_region() {
        let endpoint = PINPOINT
            .resolve_endpoint(Some(&Region::from_static("ap-southeast-2")))
            .unwrap();
        assert_eq!(
            endpoint.uri(),
            &Uri::from_static("https://pinpoint.ap-southeast-2.amazonaws.com")
        );
    }

    #[test]
    fn uses_fallback_region() {
        let endpoint = PINPOINT.resolve_endpoint(None).unwrap();
        assert_eq!(
            endpoint.uri(),
            &Uri::from_static("https://pinpoint.us-east-1.amazonaws.com")
        );
    }

    #[test]
    fn no_region_and_no_fallback() {
        let definition = Definition {
            fallback_region: None,
            ..PINPOINT
        };
        let err = definition.resolve_endpoint(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "a region is required to resolve endpoint `pinpoint.{region}.amazonaws.com`"
        );
    }

    #[test]
    fn http_protocol() {
        let definition = Definition {
            uri_template: "localhost:{region}",
            protocol: Protocol::Http,
            fallback_region: None,
        };
        let endpoint = definition
            .resolve_endpoint(Some(&Region::from_static("9000")))
            .unwrap();
        assert_eq!(endpoint.uri(), &Uri::from_static("http://localhost:9000"));
    }

    #[test]
    fn invalid_uri() {
        let definition = Definition {
            uri_template: "bad host {region}",
            protocol: Protocol::Https,
            fallback_region: None,
        };
        assert!(definition
            .resolve_endpoint(Some(&Region::from_static("us-east-1")))
            .is_err());
    }
}
