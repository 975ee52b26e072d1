/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::Uri;
use std::borrow::Cow;

/// The endpoint could not be applied to a request
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum InvalidEndpoint {
    #[error("endpoint `{0}` has no authority")]
    EndpointMustHaveAuthority(Uri),
    #[error("endpoint `{0}` has no scheme")]
    EndpointMustHaveScheme(Uri),
    #[error("failed to combine endpoint with request URI: {0}")]
    InvalidUri(#[from] http::Error),
}

/// API Endpoint
///
/// The scheme, authority, and optional base path that request URIs are resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::new(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn new(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Replaces the scheme and authority of `uri` with this endpoint's, and prefixes the endpoint's
    /// path (if any) onto the request path.
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        let authority = self
            .uri
            .authority()
            .ok_or_else(|| InvalidEndpoint::EndpointMustHaveAuthority(self.uri.clone()))?;
        let scheme = self
            .uri
            .scheme()
            .ok_or_else(|| InvalidEndpoint::EndpointMustHaveScheme(self.uri.clone()))?;
        let new_uri = Uri::builder()
            .scheme(scheme.clone())
            .authority(authority.clone())
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.query() {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, InvalidEndpoint};
    use http::Uri;

    #[test]
    fn set_endpoint() {
        let ep = Endpoint::new(Uri::from_static("https://pinpoint.us-west-2.amazonaws.com"));
        let mut uri = Uri::from_static("/v1/apps/app1/campaigns?page-size=5");
        ep.set_endpoint(&mut uri).unwrap();
        assert_eq!(
            uri,
            Uri::from_static(
                "https://pinpoint.us-west-2.amazonaws.com/v1/apps/app1/campaigns?page-size=5"
            )
        );
    }

    #[test]
    fn endpoint_custom_port() {
        let ep = Endpoint::new(Uri::from_static("http://localhost:6443"));
        let mut uri = Uri::from_static("/v1/apps/app1/settings");
        ep.set_endpoint(&mut uri).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("http://localhost:6443/v1/apps/app1/settings")
        );
    }

    #[test]
    fn endpoint_with_path() {
        for uri in &[
            // trailing slashes are normalized
            "https://proxy.example.com/pinpoint",
            "https://proxy.example.com/pinpoint/",
        ] {
            let ep = Endpoint::new(Uri::from_static(uri));
            let mut uri = Uri::from_static("/v1/apps/app1/settings");
            ep.set_endpoint(&mut uri).unwrap();
            assert_eq!(
                uri,
                Uri::from_static("https://proxy.example.com/pinpoint/v1/apps/app1/settings")
            );
        }
    }

    #[test]
    fn endpoint_without_authority() {
        let ep = Endpoint::new(Uri::from_static("/just/a/path"));
        let mut uri = Uri::from_static("/v1/apps/app1/settings");
        assert!(matches!(
            ep.set_endpoint(&mut uri),
            Err(InvalidEndpoint::EndpointMustHaveAuthority(_))
        ));
        assert_eq!(uri, Uri::from_static("/v1/apps/app1/settings"));
    }
}
