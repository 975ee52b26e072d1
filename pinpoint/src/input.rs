/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// See [`CreateCampaignInput`](crate::input::CreateCampaignInput)
pub mod create_campaign_input {
    /// A builder for [`CreateCampaignInput`](crate::input::CreateCampaignInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) write_campaign_request: std::option::Option<crate::model::WriteCampaignRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn write_campaign_request(mut self, input: crate::model::WriteCampaignRequest) -> Self {
            self.write_campaign_request = Some(input);
            self
        }
        pub fn set_write_campaign_request(mut self, input: std::option::Option<crate::model::WriteCampaignRequest>) -> Self {
            self.write_campaign_request = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCampaignInput`](crate::input::CreateCampaignInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateCampaignInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateCampaignInput {
                application_id: self.application_id,
                write_campaign_request: self.write_campaign_request,
            })
        }
    }
}
#[doc(hidden)]
pub type CreateCampaignInputOperationOutputAlias = crate::operation::CreateCampaign;
impl CreateCampaignInput {
    /// Consumes the builder and constructs an Operation<[`CreateCampaign`](crate::operation::CreateCampaign)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateCampaign>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_create_campaign_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("CreateCampaign", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("CreateCampaign", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::CreateCampaign::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("CreateCampaign", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("POST").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("CreateCampaign", err))
    }
    /// Creates a new builder-style object to manufacture [`CreateCampaignInput`](crate::input::CreateCampaignInput)
    pub fn builder() -> crate::input::create_campaign_input::Builder {
        crate::input::create_campaign_input::Builder::default()
    }
}

/// See [`CreateImportJobInput`](crate::input::CreateImportJobInput)
pub mod create_import_job_input {
    /// A builder for [`CreateImportJobInput`](crate::input::CreateImportJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) import_job_request: std::option::Option<crate::model::ImportJobRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn import_job_request(mut self, input: crate::model::ImportJobRequest) -> Self {
            self.import_job_request = Some(input);
            self
        }
        pub fn set_import_job_request(mut self, input: std::option::Option<crate::model::ImportJobRequest>) -> Self {
            self.import_job_request = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImportJobInput`](crate::input::CreateImportJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateImportJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateImportJobInput {
                application_id: self.application_id,
                import_job_request: self.import_job_request,
            })
        }
    }
}
#[doc(hidden)]
pub type CreateImportJobInputOperationOutputAlias = crate::operation::CreateImportJob;
impl CreateImportJobInput {
    /// Consumes the builder and constructs an Operation<[`CreateImportJob`](crate::operation::CreateImportJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateImportJob>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_create_import_job_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("CreateImportJob", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("CreateImportJob", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::CreateImportJob::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("CreateImportJob", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/jobs/import",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("POST").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("CreateImportJob", err))
    }
    /// Creates a new builder-style object to manufacture [`CreateImportJobInput`](crate::input::CreateImportJobInput)
    pub fn builder() -> crate::input::create_import_job_input::Builder {
        crate::input::create_import_job_input::Builder::default()
    }
}

/// See [`CreateSegmentInput`](crate::input::CreateSegmentInput)
pub mod create_segment_input {
    /// A builder for [`CreateSegmentInput`](crate::input::CreateSegmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) write_segment_request: std::option::Option<crate::model::WriteSegmentRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn write_segment_request(mut self, input: crate::model::WriteSegmentRequest) -> Self {
            self.write_segment_request = Some(input);
            self
        }
        pub fn set_write_segment_request(mut self, input: std::option::Option<crate::model::WriteSegmentRequest>) -> Self {
            self.write_segment_request = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateSegmentInput`](crate::input::CreateSegmentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateSegmentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateSegmentInput {
                application_id: self.application_id,
                write_segment_request: self.write_segment_request,
            })
        }
    }
}
#[doc(hidden)]
pub type CreateSegmentInputOperationOutputAlias = crate::operation::CreateSegment;
impl CreateSegmentInput {
    /// Consumes the builder and constructs an Operation<[`CreateSegment`](crate::operation::CreateSegment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateSegment>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_create_segment_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("CreateSegment", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("CreateSegment", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::CreateSegment::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("CreateSegment", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/segments",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("POST").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("CreateSegment", err))
    }
    /// Creates a new builder-style object to manufacture [`CreateSegmentInput`](crate::input::CreateSegmentInput)
    pub fn builder() -> crate::input::create_segment_input::Builder {
        crate::input::create_segment_input::Builder::default()
    }
}

/// See [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
pub mod delete_apns_channel_input {
    /// A builder for [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteApnsChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteApnsChannelInput {
                application_id: self.application_id,
            })
        }
    }
}
#[doc(hidden)]
pub type DeleteApnsChannelInputOperationOutputAlias = crate::operation::DeleteApnsChannel;
impl DeleteApnsChannelInput {
    /// Consumes the builder and constructs an Operation<[`DeleteApnsChannel`](crate::operation::DeleteApnsChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteApnsChannel>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("DeleteApnsChannel", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DeleteApnsChannel::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("DeleteApnsChannel", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/channels/apns",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("DELETE").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("DeleteApnsChannel", err))
    }
    /// Creates a new builder-style object to manufacture [`DeleteApnsChannelInput`](crate::input::DeleteApnsChannelInput)
    pub fn builder() -> crate::input::delete_apns_channel_input::Builder {
        crate::input::delete_apns_channel_input::Builder::default()
    }
}

/// See [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
pub mod delete_campaign_input {
    /// A builder for [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.campaign_id = Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteCampaignInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
            })
        }
    }
}
#[doc(hidden)]
pub type DeleteCampaignInputOperationOutputAlias = crate::operation::DeleteCampaign;
impl DeleteCampaignInput {
    /// Consumes the builder and constructs an Operation<[`DeleteCampaign`](crate::operation::DeleteCampaign)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteCampaign>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("DeleteCampaign", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DeleteCampaign::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("DeleteCampaign", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let campaign_id = smithy_http::label::fmt_string(
            self.campaign_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns/{campaign_id}",
            application_id = application_id,
            campaign_id = campaign_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("DELETE").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("DeleteCampaign", err))
    }
    /// Creates a new builder-style object to manufacture [`DeleteCampaignInput`](crate::input::DeleteCampaignInput)
    pub fn builder() -> crate::input::delete_campaign_input::Builder {
        crate::input::delete_campaign_input::Builder::default()
    }
}

/// See [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
pub mod delete_gcm_channel_input {
    /// A builder for [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteGcmChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteGcmChannelInput {
                application_id: self.application_id,
            })
        }
    }
}
#[doc(hidden)]
pub type DeleteGcmChannelInputOperationOutputAlias = crate::operation::DeleteGcmChannel;
impl DeleteGcmChannelInput {
    /// Consumes the builder and constructs an Operation<[`DeleteGcmChannel`](crate::operation::DeleteGcmChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteGcmChannel>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("DeleteGcmChannel", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DeleteGcmChannel::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("DeleteGcmChannel", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/channels/gcm",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("DELETE").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("DeleteGcmChannel", err))
    }
    /// Creates a new builder-style object to manufacture [`DeleteGcmChannelInput`](crate::input::DeleteGcmChannelInput)
    pub fn builder() -> crate::input::delete_gcm_channel_input::Builder {
        crate::input::delete_gcm_channel_input::Builder::default()
    }
}

/// See [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
pub mod delete_segment_input {
    /// A builder for [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteSegmentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
            })
        }
    }
}
#[doc(hidden)]
pub type DeleteSegmentInputOperationOutputAlias = crate::operation::DeleteSegment;
impl DeleteSegmentInput {
    /// Consumes the builder and constructs an Operation<[`DeleteSegment`](crate::operation::DeleteSegment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteSegment>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("DeleteSegment", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::DeleteSegment::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("DeleteSegment", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let segment_id = smithy_http::label::fmt_string(
            self.segment_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/segments/{segment_id}",
            application_id = application_id,
            segment_id = segment_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("DELETE").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("DeleteSegment", err))
    }
    /// Creates a new builder-style object to manufacture [`DeleteSegmentInput`](crate::input::DeleteSegmentInput)
    pub fn builder() -> crate::input::delete_segment_input::Builder {
        crate::input::delete_segment_input::Builder::default()
    }
}

/// See [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
pub mod get_apns_channel_input {
    /// A builder for [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetApnsChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetApnsChannelInput {
                application_id: self.application_id,
            })
        }
    }
}
#[doc(hidden)]
pub type GetApnsChannelInputOperationOutputAlias = crate::operation::GetApnsChannel;
impl GetApnsChannelInput {
    /// Consumes the builder and constructs an Operation<[`GetApnsChannel`](crate::operation::GetApnsChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetApnsChannel>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetApnsChannel", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetApnsChannel::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetApnsChannel", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/channels/apns",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetApnsChannel", err))
    }
    /// Creates a new builder-style object to manufacture [`GetApnsChannelInput`](crate::input::GetApnsChannelInput)
    pub fn builder() -> crate::input::get_apns_channel_input::Builder {
        crate::input::get_apns_channel_input::Builder::default()
    }
}

/// See [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
pub mod get_application_settings_input {
    /// A builder for [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetApplicationSettingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetApplicationSettingsInput {
                application_id: self.application_id,
            })
        }
    }
}
#[doc(hidden)]
pub type GetApplicationSettingsInputOperationOutputAlias = crate::operation::GetApplicationSettings;
impl GetApplicationSettingsInput {
    /// Consumes the builder and constructs an Operation<[`GetApplicationSettings`](crate::operation::GetApplicationSettings)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetApplicationSettings>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetApplicationSettings", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetApplicationSettings::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetApplicationSettings", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/settings",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetApplicationSettings", err))
    }
    /// Creates a new builder-style object to manufacture [`GetApplicationSettingsInput`](crate::input::GetApplicationSettingsInput)
    pub fn builder() -> crate::input::get_application_settings_input::Builder {
        crate::input::get_application_settings_input::Builder::default()
    }
}

/// See [`GetCampaignInput`](crate::input::GetCampaignInput)
pub mod get_campaign_input {
    /// A builder for [`GetCampaignInput`](crate::input::GetCampaignInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.campaign_id = Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignInput`](crate::input::GetCampaignInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
            })
        }
    }
}
#[doc(hidden)]
pub type GetCampaignInputOperationOutputAlias = crate::operation::GetCampaign;
impl GetCampaignInput {
    /// Consumes the builder and constructs an Operation<[`GetCampaign`](crate::operation::GetCampaign)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaign>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetCampaign", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetCampaign::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetCampaign", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let campaign_id = smithy_http::label::fmt_string(
            self.campaign_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns/{campaign_id}",
            application_id = application_id,
            campaign_id = campaign_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetCampaign", err))
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignInput`](crate::input::GetCampaignInput)
    pub fn builder() -> crate::input::get_campaign_input::Builder {
        crate::input::get_campaign_input::Builder::default()
    }
}

/// See [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
pub mod get_campaign_activities_input {
    /// A builder for [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.campaign_id = Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignActivitiesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignActivitiesInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
#[doc(hidden)]
pub type GetCampaignActivitiesInputOperationOutputAlias = crate::operation::GetCampaignActivities;
impl GetCampaignActivitiesInput {
    /// Consumes the builder and constructs an Operation<[`GetCampaignActivities`](crate::operation::GetCampaignActivities)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaignActivities>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetCampaignActivities", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetCampaignActivities::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetCampaignActivities", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let campaign_id = smithy_http::label::fmt_string(
            self.campaign_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns/{campaign_id}/activities",
            application_id = application_id,
            campaign_id = campaign_id,
        ));
    }
    fn uri_query(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.page_size {
            query.push_kv("page-size", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.token {
            query.push_kv("token", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetCampaignActivities", err))
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignActivitiesInput`](crate::input::GetCampaignActivitiesInput)
    pub fn builder() -> crate::input::get_campaign_activities_input::Builder {
        crate::input::get_campaign_activities_input::Builder::default()
    }
}

/// See [`GetCampaignDateRangeKpiInput`](crate::input::GetCampaignDateRangeKpiInput)
pub mod get_campaign_date_range_kpi_input {
    /// A builder for [`GetCampaignDateRangeKpiInput`](crate::input::GetCampaignDateRangeKpiInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) kpi_name: std::option::Option<std::string::String>,
        pub(crate) end_time: std::option::Option<smithy_types::Instant>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) start_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.campaign_id = Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        pub fn kpi_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.kpi_name = Some(input.into());
            self
        }
        pub fn set_kpi_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kpi_name = input;
            self
        }
        pub fn end_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn start_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.start_time = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignDateRangeKpiInput`](crate::input::GetCampaignDateRangeKpiInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignDateRangeKpiInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignDateRangeKpiInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                kpi_name: self.kpi_name,
                end_time: self.end_time,
                next_token: self.next_token,
                page_size: self.page_size,
                start_time: self.start_time,
            })
        }
    }
}
#[doc(hidden)]
pub type GetCampaignDateRangeKpiInputOperationOutputAlias = crate::operation::GetCampaignDateRangeKpi;
impl GetCampaignDateRangeKpiInput {
    /// Consumes the builder and constructs an Operation<[`GetCampaignDateRangeKpi`](crate::operation::GetCampaignDateRangeKpi)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaignDateRangeKpi>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetCampaignDateRangeKpi", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetCampaignDateRangeKpi::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetCampaignDateRangeKpi", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let campaign_id = smithy_http::label::fmt_string(
            self.campaign_id.as_deref().unwrap_or_default(),
            false,
        );
        let kpi_name = smithy_http::label::fmt_string(
            self.kpi_name.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns/{campaign_id}/kpis/daterange/{kpi_name}",
            application_id = application_id,
            campaign_id = campaign_id,
            kpi_name = kpi_name,
        ));
    }
    fn uri_query(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.end_time {
            query.push_kv(
                "end-time",
                &smithy_http::query::fmt_timestamp(
                    inner_1,
                    smithy_types::instant::Format::DateTime,
                )
                .map_err(|err| smithy_http::operation::BuildError::serialization("GetCampaignDateRangeKpi", err))?,
            );
        }
        if let Some(inner_2) = &self.next_token {
            query.push_kv("next-token", &smithy_http::query::fmt_string(&inner_2));
        }
        if let Some(inner_3) = &self.page_size {
            query.push_kv("page-size", &smithy_http::query::fmt_string(&inner_3));
        }
        if let Some(inner_4) = &self.start_time {
            query.push_kv(
                "start-time",
                &smithy_http::query::fmt_timestamp(
                    inner_4,
                    smithy_types::instant::Format::DateTime,
                )
                .map_err(|err| smithy_http::operation::BuildError::serialization("GetCampaignDateRangeKpi", err))?,
            );
        }
        Ok(())
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetCampaignDateRangeKpi", err))
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignDateRangeKpiInput`](crate::input::GetCampaignDateRangeKpiInput)
    pub fn builder() -> crate::input::get_campaign_date_range_kpi_input::Builder {
        crate::input::get_campaign_date_range_kpi_input::Builder::default()
    }
}

/// See [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
pub mod get_campaign_version_input {
    /// A builder for [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.campaign_id = Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignVersionInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignVersionInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                version: self.version,
            })
        }
    }
}
#[doc(hidden)]
pub type GetCampaignVersionInputOperationOutputAlias = crate::operation::GetCampaignVersion;
impl GetCampaignVersionInput {
    /// Consumes the builder and constructs an Operation<[`GetCampaignVersion`](crate::operation::GetCampaignVersion)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaignVersion>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetCampaignVersion", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetCampaignVersion::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetCampaignVersion", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let campaign_id = smithy_http::label::fmt_string(
            self.campaign_id.as_deref().unwrap_or_default(),
            false,
        );
        let version = smithy_http::label::fmt_string(
            self.version.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns/{campaign_id}/versions/{version}",
            application_id = application_id,
            campaign_id = campaign_id,
            version = version,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetCampaignVersion", err))
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionInput`](crate::input::GetCampaignVersionInput)
    pub fn builder() -> crate::input::get_campaign_version_input::Builder {
        crate::input::get_campaign_version_input::Builder::default()
    }
}

/// See [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
pub mod get_campaign_versions_input {
    /// A builder for [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.campaign_id = Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignVersionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignVersionsInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
#[doc(hidden)]
pub type GetCampaignVersionsInputOperationOutputAlias = crate::operation::GetCampaignVersions;
impl GetCampaignVersionsInput {
    /// Consumes the builder and constructs an Operation<[`GetCampaignVersions`](crate::operation::GetCampaignVersions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaignVersions>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetCampaignVersions", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetCampaignVersions::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetCampaignVersions", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let campaign_id = smithy_http::label::fmt_string(
            self.campaign_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns/{campaign_id}/versions",
            application_id = application_id,
            campaign_id = campaign_id,
        ));
    }
    fn uri_query(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.page_size {
            query.push_kv("page-size", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.token {
            query.push_kv("token", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetCampaignVersions", err))
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionsInput`](crate::input::GetCampaignVersionsInput)
    pub fn builder() -> crate::input::get_campaign_versions_input::Builder {
        crate::input::get_campaign_versions_input::Builder::default()
    }
}

/// See [`GetCampaignsInput`](crate::input::GetCampaignsInput)
pub mod get_campaigns_input {
    /// A builder for [`GetCampaignsInput`](crate::input::GetCampaignsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignsInput`](crate::input::GetCampaignsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetCampaignsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetCampaignsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
#[doc(hidden)]
pub type GetCampaignsInputOperationOutputAlias = crate::operation::GetCampaigns;
impl GetCampaignsInput {
    /// Consumes the builder and constructs an Operation<[`GetCampaigns`](crate::operation::GetCampaigns)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetCampaigns>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetCampaigns", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetCampaigns::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetCampaigns", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns",
            application_id = application_id,
        ));
    }
    fn uri_query(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.page_size {
            query.push_kv("page-size", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.token {
            query.push_kv("token", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetCampaigns", err))
    }
    /// Creates a new builder-style object to manufacture [`GetCampaignsInput`](crate::input::GetCampaignsInput)
    pub fn builder() -> crate::input::get_campaigns_input::Builder {
        crate::input::get_campaigns_input::Builder::default()
    }
}

/// See [`GetEndpointInput`](crate::input::GetEndpointInput)
pub mod get_endpoint_input {
    /// A builder for [`GetEndpointInput`](crate::input::GetEndpointInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn endpoint_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_id = Some(input.into());
            self
        }
        pub fn set_endpoint_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetEndpointInput`](crate::input::GetEndpointInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetEndpointInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetEndpointInput {
                application_id: self.application_id,
                endpoint_id: self.endpoint_id,
            })
        }
    }
}
#[doc(hidden)]
pub type GetEndpointInputOperationOutputAlias = crate::operation::GetEndpoint;
impl GetEndpointInput {
    /// Consumes the builder and constructs an Operation<[`GetEndpoint`](crate::operation::GetEndpoint)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetEndpoint>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetEndpoint", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetEndpoint::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetEndpoint", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let endpoint_id = smithy_http::label::fmt_string(
            self.endpoint_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/endpoints/{endpoint_id}",
            application_id = application_id,
            endpoint_id = endpoint_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetEndpoint", err))
    }
    /// Creates a new builder-style object to manufacture [`GetEndpointInput`](crate::input::GetEndpointInput)
    pub fn builder() -> crate::input::get_endpoint_input::Builder {
        crate::input::get_endpoint_input::Builder::default()
    }
}

/// See [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
pub mod get_gcm_channel_input {
    /// A builder for [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetGcmChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetGcmChannelInput {
                application_id: self.application_id,
            })
        }
    }
}
#[doc(hidden)]
pub type GetGcmChannelInputOperationOutputAlias = crate::operation::GetGcmChannel;
impl GetGcmChannelInput {
    /// Consumes the builder and constructs an Operation<[`GetGcmChannel`](crate::operation::GetGcmChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetGcmChannel>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetGcmChannel", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetGcmChannel::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetGcmChannel", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/channels/gcm",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetGcmChannel", err))
    }
    /// Creates a new builder-style object to manufacture [`GetGcmChannelInput`](crate::input::GetGcmChannelInput)
    pub fn builder() -> crate::input::get_gcm_channel_input::Builder {
        crate::input::get_gcm_channel_input::Builder::default()
    }
}

/// See [`GetImportJobInput`](crate::input::GetImportJobInput)
pub mod get_import_job_input {
    /// A builder for [`GetImportJobInput`](crate::input::GetImportJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) job_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn job_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_id = Some(input.into());
            self
        }
        pub fn set_job_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImportJobInput`](crate::input::GetImportJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImportJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetImportJobInput {
                application_id: self.application_id,
                job_id: self.job_id,
            })
        }
    }
}
#[doc(hidden)]
pub type GetImportJobInputOperationOutputAlias = crate::operation::GetImportJob;
impl GetImportJobInput {
    /// Consumes the builder and constructs an Operation<[`GetImportJob`](crate::operation::GetImportJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImportJob>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetImportJob", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetImportJob::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetImportJob", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let job_id = smithy_http::label::fmt_string(
            self.job_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/jobs/import/{job_id}",
            application_id = application_id,
            job_id = job_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetImportJob", err))
    }
    /// Creates a new builder-style object to manufacture [`GetImportJobInput`](crate::input::GetImportJobInput)
    pub fn builder() -> crate::input::get_import_job_input::Builder {
        crate::input::get_import_job_input::Builder::default()
    }
}

/// See [`GetImportJobsInput`](crate::input::GetImportJobsInput)
pub mod get_import_jobs_input {
    /// A builder for [`GetImportJobsInput`](crate::input::GetImportJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImportJobsInput`](crate::input::GetImportJobsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetImportJobsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetImportJobsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
#[doc(hidden)]
pub type GetImportJobsInputOperationOutputAlias = crate::operation::GetImportJobs;
impl GetImportJobsInput {
    /// Consumes the builder and constructs an Operation<[`GetImportJobs`](crate::operation::GetImportJobs)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetImportJobs>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetImportJobs", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetImportJobs::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetImportJobs", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/jobs/import",
            application_id = application_id,
        ));
    }
    fn uri_query(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.page_size {
            query.push_kv("page-size", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.token {
            query.push_kv("token", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetImportJobs", err))
    }
    /// Creates a new builder-style object to manufacture [`GetImportJobsInput`](crate::input::GetImportJobsInput)
    pub fn builder() -> crate::input::get_import_jobs_input::Builder {
        crate::input::get_import_jobs_input::Builder::default()
    }
}

/// See [`GetJourneyInput`](crate::input::GetJourneyInput)
pub mod get_journey_input {
    /// A builder for [`GetJourneyInput`](crate::input::GetJourneyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) journey_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn journey_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.journey_id = Some(input.into());
            self
        }
        pub fn set_journey_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.journey_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJourneyInput`](crate::input::GetJourneyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetJourneyInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetJourneyInput {
                application_id: self.application_id,
                journey_id: self.journey_id,
            })
        }
    }
}
#[doc(hidden)]
pub type GetJourneyInputOperationOutputAlias = crate::operation::GetJourney;
impl GetJourneyInput {
    /// Consumes the builder and constructs an Operation<[`GetJourney`](crate::operation::GetJourney)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetJourney>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetJourney", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetJourney::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetJourney", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let journey_id = smithy_http::label::fmt_string(
            self.journey_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/journeys/{journey_id}",
            application_id = application_id,
            journey_id = journey_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetJourney", err))
    }
    /// Creates a new builder-style object to manufacture [`GetJourneyInput`](crate::input::GetJourneyInput)
    pub fn builder() -> crate::input::get_journey_input::Builder {
        crate::input::get_journey_input::Builder::default()
    }
}

/// See [`GetSegmentInput`](crate::input::GetSegmentInput)
pub mod get_segment_input {
    /// A builder for [`GetSegmentInput`](crate::input::GetSegmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentInput`](crate::input::GetSegmentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
            })
        }
    }
}
#[doc(hidden)]
pub type GetSegmentInputOperationOutputAlias = crate::operation::GetSegment;
impl GetSegmentInput {
    /// Consumes the builder and constructs an Operation<[`GetSegment`](crate::operation::GetSegment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegment>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetSegment", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetSegment::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetSegment", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let segment_id = smithy_http::label::fmt_string(
            self.segment_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/segments/{segment_id}",
            application_id = application_id,
            segment_id = segment_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetSegment", err))
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentInput`](crate::input::GetSegmentInput)
    pub fn builder() -> crate::input::get_segment_input::Builder {
        crate::input::get_segment_input::Builder::default()
    }
}

/// See [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
pub mod get_segment_import_jobs_input {
    /// A builder for [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentImportJobsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentImportJobsInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
#[doc(hidden)]
pub type GetSegmentImportJobsInputOperationOutputAlias = crate::operation::GetSegmentImportJobs;
impl GetSegmentImportJobsInput {
    /// Consumes the builder and constructs an Operation<[`GetSegmentImportJobs`](crate::operation::GetSegmentImportJobs)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegmentImportJobs>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetSegmentImportJobs", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetSegmentImportJobs::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetSegmentImportJobs", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let segment_id = smithy_http::label::fmt_string(
            self.segment_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/segments/{segment_id}/jobs/import",
            application_id = application_id,
            segment_id = segment_id,
        ));
    }
    fn uri_query(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.page_size {
            query.push_kv("page-size", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.token {
            query.push_kv("token", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetSegmentImportJobs", err))
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentImportJobsInput`](crate::input::GetSegmentImportJobsInput)
    pub fn builder() -> crate::input::get_segment_import_jobs_input::Builder {
        crate::input::get_segment_import_jobs_input::Builder::default()
    }
}

/// See [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
pub mod get_segment_version_input {
    /// A builder for [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn version(mut self, input: impl Into<std::string::String>) -> Self {
            self.version = Some(input.into());
            self
        }
        pub fn set_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentVersionInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentVersionInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                version: self.version,
            })
        }
    }
}
#[doc(hidden)]
pub type GetSegmentVersionInputOperationOutputAlias = crate::operation::GetSegmentVersion;
impl GetSegmentVersionInput {
    /// Consumes the builder and constructs an Operation<[`GetSegmentVersion`](crate::operation::GetSegmentVersion)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegmentVersion>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetSegmentVersion", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetSegmentVersion::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetSegmentVersion", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let segment_id = smithy_http::label::fmt_string(
            self.segment_id.as_deref().unwrap_or_default(),
            false,
        );
        let version = smithy_http::label::fmt_string(
            self.version.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/segments/{segment_id}/versions/{version}",
            application_id = application_id,
            segment_id = segment_id,
            version = version,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetSegmentVersion", err))
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionInput`](crate::input::GetSegmentVersionInput)
    pub fn builder() -> crate::input::get_segment_version_input::Builder {
        crate::input::get_segment_version_input::Builder::default()
    }
}

/// See [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
pub mod get_segment_versions_input {
    /// A builder for [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentVersionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentVersionsInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
#[doc(hidden)]
pub type GetSegmentVersionsInputOperationOutputAlias = crate::operation::GetSegmentVersions;
impl GetSegmentVersionsInput {
    /// Consumes the builder and constructs an Operation<[`GetSegmentVersions`](crate::operation::GetSegmentVersions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegmentVersions>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetSegmentVersions", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetSegmentVersions::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetSegmentVersions", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let segment_id = smithy_http::label::fmt_string(
            self.segment_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/segments/{segment_id}/versions",
            application_id = application_id,
            segment_id = segment_id,
        ));
    }
    fn uri_query(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.page_size {
            query.push_kv("page-size", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.token {
            query.push_kv("token", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetSegmentVersions", err))
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionsInput`](crate::input::GetSegmentVersionsInput)
    pub fn builder() -> crate::input::get_segment_versions_input::Builder {
        crate::input::get_segment_versions_input::Builder::default()
    }
}

/// See [`GetSegmentsInput`](crate::input::GetSegmentsInput)
pub mod get_segments_input {
    /// A builder for [`GetSegmentsInput`](crate::input::GetSegmentsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) page_size: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn page_size(mut self, input: impl Into<std::string::String>) -> Self {
            self.page_size = Some(input.into());
            self
        }
        pub fn set_page_size(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.page_size = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentsInput`](crate::input::GetSegmentsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetSegmentsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetSegmentsInput {
                application_id: self.application_id,
                page_size: self.page_size,
                token: self.token,
            })
        }
    }
}
#[doc(hidden)]
pub type GetSegmentsInputOperationOutputAlias = crate::operation::GetSegments;
impl GetSegmentsInput {
    /// Consumes the builder and constructs an Operation<[`GetSegments`](crate::operation::GetSegments)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetSegments>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = smithy_http::body::SdkBody::from("");
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("GetSegments", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::GetSegments::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("GetSegments", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/segments",
            application_id = application_id,
        ));
    }
    fn uri_query(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.page_size {
            query.push_kv("page-size", &smithy_http::query::fmt_string(&inner_1));
        }
        if let Some(inner_2) = &self.token {
            query.push_kv("token", &smithy_http::query::fmt_string(&inner_2));
        }
        Ok(())
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        self.uri_query(&mut uri)?;
        Ok(builder.method("GET").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        self.update_http_builder(http::request::Builder::new())
    }
    fn assemble(
        builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("GetSegments", err))
    }
    /// Creates a new builder-style object to manufacture [`GetSegmentsInput`](crate::input::GetSegmentsInput)
    pub fn builder() -> crate::input::get_segments_input::Builder {
        crate::input::get_segments_input::Builder::default()
    }
}

/// See [`SendMessagesInput`](crate::input::SendMessagesInput)
pub mod send_messages_input {
    /// A builder for [`SendMessagesInput`](crate::input::SendMessagesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) message_request: std::option::Option<crate::model::MessageRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn message_request(mut self, input: crate::model::MessageRequest) -> Self {
            self.message_request = Some(input);
            self
        }
        pub fn set_message_request(mut self, input: std::option::Option<crate::model::MessageRequest>) -> Self {
            self.message_request = input;
            self
        }
        /// Consumes the builder and constructs a [`SendMessagesInput`](crate::input::SendMessagesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::SendMessagesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::SendMessagesInput {
                application_id: self.application_id,
                message_request: self.message_request,
            })
        }
    }
}
#[doc(hidden)]
pub type SendMessagesInputOperationOutputAlias = crate::operation::SendMessages;
impl SendMessagesInput {
    /// Consumes the builder and constructs an Operation<[`SendMessages`](crate::operation::SendMessages)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::SendMessages>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_send_messages_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("SendMessages", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("SendMessages", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::SendMessages::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("SendMessages", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/messages",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("POST").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("SendMessages", err))
    }
    /// Creates a new builder-style object to manufacture [`SendMessagesInput`](crate::input::SendMessagesInput)
    pub fn builder() -> crate::input::send_messages_input::Builder {
        crate::input::send_messages_input::Builder::default()
    }
}

/// See [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
pub mod update_apns_channel_input {
    /// A builder for [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) apns_channel_request: std::option::Option<crate::model::ApnsChannelRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn apns_channel_request(mut self, input: crate::model::ApnsChannelRequest) -> Self {
            self.apns_channel_request = Some(input);
            self
        }
        pub fn set_apns_channel_request(mut self, input: std::option::Option<crate::model::ApnsChannelRequest>) -> Self {
            self.apns_channel_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateApnsChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateApnsChannelInput {
                application_id: self.application_id,
                apns_channel_request: self.apns_channel_request,
            })
        }
    }
}
#[doc(hidden)]
pub type UpdateApnsChannelInputOperationOutputAlias = crate::operation::UpdateApnsChannel;
impl UpdateApnsChannelInput {
    /// Consumes the builder and constructs an Operation<[`UpdateApnsChannel`](crate::operation::UpdateApnsChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateApnsChannel>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_update_apns_channel_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("UpdateApnsChannel", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("UpdateApnsChannel", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::UpdateApnsChannel::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("UpdateApnsChannel", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/channels/apns",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("PUT").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("UpdateApnsChannel", err))
    }
    /// Creates a new builder-style object to manufacture [`UpdateApnsChannelInput`](crate::input::UpdateApnsChannelInput)
    pub fn builder() -> crate::input::update_apns_channel_input::Builder {
        crate::input::update_apns_channel_input::Builder::default()
    }
}

/// See [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
pub mod update_application_settings_input {
    /// A builder for [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) write_application_settings_request: std::option::Option<crate::model::WriteApplicationSettingsRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn write_application_settings_request(mut self, input: crate::model::WriteApplicationSettingsRequest) -> Self {
            self.write_application_settings_request = Some(input);
            self
        }
        pub fn set_write_application_settings_request(mut self, input: std::option::Option<crate::model::WriteApplicationSettingsRequest>) -> Self {
            self.write_application_settings_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateApplicationSettingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateApplicationSettingsInput {
                application_id: self.application_id,
                write_application_settings_request: self.write_application_settings_request,
            })
        }
    }
}
#[doc(hidden)]
pub type UpdateApplicationSettingsInputOperationOutputAlias = crate::operation::UpdateApplicationSettings;
impl UpdateApplicationSettingsInput {
    /// Consumes the builder and constructs an Operation<[`UpdateApplicationSettings`](crate::operation::UpdateApplicationSettings)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateApplicationSettings>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_update_application_settings_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("UpdateApplicationSettings", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("UpdateApplicationSettings", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::UpdateApplicationSettings::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("UpdateApplicationSettings", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/settings",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("PUT").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("UpdateApplicationSettings", err))
    }
    /// Creates a new builder-style object to manufacture [`UpdateApplicationSettingsInput`](crate::input::UpdateApplicationSettingsInput)
    pub fn builder() -> crate::input::update_application_settings_input::Builder {
        crate::input::update_application_settings_input::Builder::default()
    }
}

/// See [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
pub mod update_campaign_input {
    /// A builder for [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) write_campaign_request: std::option::Option<crate::model::WriteCampaignRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn campaign_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.campaign_id = Some(input.into());
            self
        }
        pub fn set_campaign_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.campaign_id = input;
            self
        }
        pub fn write_campaign_request(mut self, input: crate::model::WriteCampaignRequest) -> Self {
            self.write_campaign_request = Some(input);
            self
        }
        pub fn set_write_campaign_request(mut self, input: std::option::Option<crate::model::WriteCampaignRequest>) -> Self {
            self.write_campaign_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateCampaignInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateCampaignInput {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                write_campaign_request: self.write_campaign_request,
            })
        }
    }
}
#[doc(hidden)]
pub type UpdateCampaignInputOperationOutputAlias = crate::operation::UpdateCampaign;
impl UpdateCampaignInput {
    /// Consumes the builder and constructs an Operation<[`UpdateCampaign`](crate::operation::UpdateCampaign)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateCampaign>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_update_campaign_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("UpdateCampaign", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("UpdateCampaign", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::UpdateCampaign::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("UpdateCampaign", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let campaign_id = smithy_http::label::fmt_string(
            self.campaign_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/campaigns/{campaign_id}",
            application_id = application_id,
            campaign_id = campaign_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("PUT").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("UpdateCampaign", err))
    }
    /// Creates a new builder-style object to manufacture [`UpdateCampaignInput`](crate::input::UpdateCampaignInput)
    pub fn builder() -> crate::input::update_campaign_input::Builder {
        crate::input::update_campaign_input::Builder::default()
    }
}

/// See [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
pub mod update_endpoint_input {
    /// A builder for [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_request: std::option::Option<crate::model::EndpointRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn endpoint_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_id = Some(input.into());
            self
        }
        pub fn set_endpoint_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_id = input;
            self
        }
        pub fn endpoint_request(mut self, input: crate::model::EndpointRequest) -> Self {
            self.endpoint_request = Some(input);
            self
        }
        pub fn set_endpoint_request(mut self, input: std::option::Option<crate::model::EndpointRequest>) -> Self {
            self.endpoint_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateEndpointInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateEndpointInput {
                application_id: self.application_id,
                endpoint_id: self.endpoint_id,
                endpoint_request: self.endpoint_request,
            })
        }
    }
}
#[doc(hidden)]
pub type UpdateEndpointInputOperationOutputAlias = crate::operation::UpdateEndpoint;
impl UpdateEndpointInput {
    /// Consumes the builder and constructs an Operation<[`UpdateEndpoint`](crate::operation::UpdateEndpoint)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateEndpoint>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_update_endpoint_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("UpdateEndpoint", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("UpdateEndpoint", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::UpdateEndpoint::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("UpdateEndpoint", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let endpoint_id = smithy_http::label::fmt_string(
            self.endpoint_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/endpoints/{endpoint_id}",
            application_id = application_id,
            endpoint_id = endpoint_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("PUT").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("UpdateEndpoint", err))
    }
    /// Creates a new builder-style object to manufacture [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
    pub fn builder() -> crate::input::update_endpoint_input::Builder {
        crate::input::update_endpoint_input::Builder::default()
    }
}

/// See [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
pub mod update_endpoints_batch_input {
    /// A builder for [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_batch_request: std::option::Option<crate::model::EndpointBatchRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn endpoint_batch_request(mut self, input: crate::model::EndpointBatchRequest) -> Self {
            self.endpoint_batch_request = Some(input);
            self
        }
        pub fn set_endpoint_batch_request(mut self, input: std::option::Option<crate::model::EndpointBatchRequest>) -> Self {
            self.endpoint_batch_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateEndpointsBatchInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateEndpointsBatchInput {
                application_id: self.application_id,
                endpoint_batch_request: self.endpoint_batch_request,
            })
        }
    }
}
#[doc(hidden)]
pub type UpdateEndpointsBatchInputOperationOutputAlias = crate::operation::UpdateEndpointsBatch;
impl UpdateEndpointsBatchInput {
    /// Consumes the builder and constructs an Operation<[`UpdateEndpointsBatch`](crate::operation::UpdateEndpointsBatch)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateEndpointsBatch>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_update_endpoints_batch_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("UpdateEndpointsBatch", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("UpdateEndpointsBatch", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::UpdateEndpointsBatch::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("UpdateEndpointsBatch", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/endpoints",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("PUT").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("UpdateEndpointsBatch", err))
    }
    /// Creates a new builder-style object to manufacture [`UpdateEndpointsBatchInput`](crate::input::UpdateEndpointsBatchInput)
    pub fn builder() -> crate::input::update_endpoints_batch_input::Builder {
        crate::input::update_endpoints_batch_input::Builder::default()
    }
}

/// See [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
pub mod update_gcm_channel_input {
    /// A builder for [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) gcm_channel_request: std::option::Option<crate::model::GcmChannelRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn gcm_channel_request(mut self, input: crate::model::GcmChannelRequest) -> Self {
            self.gcm_channel_request = Some(input);
            self
        }
        pub fn set_gcm_channel_request(mut self, input: std::option::Option<crate::model::GcmChannelRequest>) -> Self {
            self.gcm_channel_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateGcmChannelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateGcmChannelInput {
                application_id: self.application_id,
                gcm_channel_request: self.gcm_channel_request,
            })
        }
    }
}
#[doc(hidden)]
pub type UpdateGcmChannelInputOperationOutputAlias = crate::operation::UpdateGcmChannel;
impl UpdateGcmChannelInput {
    /// Consumes the builder and constructs an Operation<[`UpdateGcmChannel`](crate::operation::UpdateGcmChannel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateGcmChannel>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_update_gcm_channel_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("UpdateGcmChannel", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("UpdateGcmChannel", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::UpdateGcmChannel::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("UpdateGcmChannel", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/channels/gcm",
            application_id = application_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("PUT").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("UpdateGcmChannel", err))
    }
    /// Creates a new builder-style object to manufacture [`UpdateGcmChannelInput`](crate::input::UpdateGcmChannelInput)
    pub fn builder() -> crate::input::update_gcm_channel_input::Builder {
        crate::input::update_gcm_channel_input::Builder::default()
    }
}

/// See [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
pub mod update_segment_input {
    /// A builder for [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) write_segment_request: std::option::Option<crate::model::WriteSegmentRequest>,
    }
    impl Builder {
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        pub fn write_segment_request(mut self, input: crate::model::WriteSegmentRequest) -> Self {
            self.write_segment_request = Some(input);
            self
        }
        pub fn set_write_segment_request(mut self, input: std::option::Option<crate::model::WriteSegmentRequest>) -> Self {
            self.write_segment_request = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateSegmentInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateSegmentInput {
                application_id: self.application_id,
                segment_id: self.segment_id,
                write_segment_request: self.write_segment_request,
            })
        }
    }
}
#[doc(hidden)]
pub type UpdateSegmentInputOperationOutputAlias = crate::operation::UpdateSegment;
impl UpdateSegmentInput {
    /// Consumes the builder and constructs an Operation<[`UpdateSegment`](crate::operation::UpdateSegment)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateSegment>,
        smithy_http::operation::BuildError,
    > {
        let request = self.request_builder_base()?;
        let body = crate::operation_ser::serialize_payload_update_segment_input(&self)
            .map_err(|err| smithy_http::operation::BuildError::serialization("UpdateSegment", err))?;
        let request = Self::assemble(request, body)?;
        let request = config.finalize_request("UpdateSegment", request)?;
        let op = smithy_http::operation::Operation::new(
            request,
            crate::operation::UpdateSegment::new(),
        )
        .with_metadata(smithy_http::operation::Metadata::new("UpdateSegment", "pinpoint"));
        Ok(op)
    }
    fn uri_base(&self, output: &mut String) {
        let application_id = smithy_http::label::fmt_string(
            self.application_id.as_deref().unwrap_or_default(),
            false,
        );
        let segment_id = smithy_http::label::fmt_string(
            self.segment_id.as_deref().unwrap_or_default(),
            false,
        );
        output.push_str(&format!(
            "/v1/apps/{application_id}/segments/{segment_id}",
            application_id = application_id,
            segment_id = segment_id,
        ));
    }
    #[allow(clippy::unnecessary_wraps)]
    fn update_http_builder(
        &self,
        builder: http::request::Builder,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut uri = String::new();
        self.uri_base(&mut uri);
        Ok(builder.method("PUT").uri(uri))
    }
    #[allow(clippy::unnecessary_wraps)]
    fn request_builder_base(
        &self,
    ) -> std::result::Result<http::request::Builder, smithy_http::operation::BuildError> {
        let mut builder = self.update_http_builder(http::request::Builder::new())?;
        builder = smithy_http::header::set_header_if_absent(
            builder,
            http::header::CONTENT_TYPE,
            http::header::HeaderValue::from_static("application/x-amz-json-1.0"),
        );
        Ok(builder)
    }
    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError> {
        builder = builder.header(http::header::CONTENT_LENGTH, body.content_length());
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::invalid_request("UpdateSegment", err))
    }
    /// Creates a new builder-style object to manufacture [`UpdateSegmentInput`](crate::input::UpdateSegmentInput)
    pub fn builder() -> crate::input::update_segment_input::Builder {
        crate::input::update_segment_input::Builder::default()
    }
}

/// Input for the `CreateCampaign` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateCampaignInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    pub write_campaign_request: std::option::Option<crate::model::WriteCampaignRequest>,
}
impl std::fmt::Debug for CreateCampaignInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateCampaignInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("write_campaign_request", &self.write_campaign_request);
        formatter.finish()
    }
}

/// Input for the `CreateImportJob` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateImportJobInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    pub import_job_request: std::option::Option<crate::model::ImportJobRequest>,
}
impl std::fmt::Debug for CreateImportJobInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateImportJobInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("import_job_request", &self.import_job_request);
        formatter.finish()
    }
}

/// Input for the `CreateSegment` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateSegmentInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    pub write_segment_request: std::option::Option<crate::model::WriteSegmentRequest>,
}
impl std::fmt::Debug for CreateSegmentInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateSegmentInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("write_segment_request", &self.write_segment_request);
        formatter.finish()
    }
}

/// Input for the `DeleteApnsChannel` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteApnsChannelInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteApnsChannelInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteApnsChannelInput");
        formatter.field("application_id", &self.application_id);
        formatter.finish()
    }
}

/// Input for the `DeleteCampaign` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteCampaignInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{campaign-id}` path segment
    pub campaign_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteCampaignInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteCampaignInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.finish()
    }
}

/// Input for the `DeleteGcmChannel` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteGcmChannelInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteGcmChannelInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteGcmChannelInput");
        formatter.field("application_id", &self.application_id);
        formatter.finish()
    }
}

/// Input for the `DeleteSegment` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteSegmentInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{segment-id}` path segment
    pub segment_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteSegmentInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteSegmentInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("segment_id", &self.segment_id);
        formatter.finish()
    }
}

/// Input for the `GetApnsChannel` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetApnsChannelInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetApnsChannelInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetApnsChannelInput");
        formatter.field("application_id", &self.application_id);
        formatter.finish()
    }
}

/// Input for the `GetApplicationSettings` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetApplicationSettingsInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetApplicationSettingsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetApplicationSettingsInput");
        formatter.field("application_id", &self.application_id);
        formatter.finish()
    }
}

/// Input for the `GetCampaign` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{campaign-id}` path segment
    pub campaign_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetCampaignInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.finish()
    }
}

/// Input for the `GetCampaignActivities` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignActivitiesInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{campaign-id}` path segment
    pub campaign_id: std::option::Option<std::string::String>,
    /// Sent as the `page-size` query parameter
    pub page_size: std::option::Option<std::string::String>,
    /// Sent as the `token` query parameter
    pub token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetCampaignActivitiesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignActivitiesInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.field("page_size", &self.page_size);
        formatter.field("token", &self.token);
        formatter.finish()
    }
}

/// Input for the `GetCampaignDateRangeKpi` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignDateRangeKpiInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{campaign-id}` path segment
    pub campaign_id: std::option::Option<std::string::String>,
    /// Substituted into the `{kpi-name}` path segment
    pub kpi_name: std::option::Option<std::string::String>,
    /// Sent as the `end-time` query parameter
    pub end_time: std::option::Option<smithy_types::Instant>,
    /// Sent as the `next-token` query parameter
    pub next_token: std::option::Option<std::string::String>,
    /// Sent as the `page-size` query parameter
    pub page_size: std::option::Option<std::string::String>,
    /// Sent as the `start-time` query parameter
    pub start_time: std::option::Option<smithy_types::Instant>,
}
impl std::fmt::Debug for GetCampaignDateRangeKpiInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignDateRangeKpiInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.field("kpi_name", &self.kpi_name);
        formatter.field("end_time", &self.end_time);
        formatter.field("next_token", &self.next_token);
        formatter.field("page_size", &self.page_size);
        formatter.field("start_time", &self.start_time);
        formatter.finish()
    }
}

/// Input for the `GetCampaignVersion` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignVersionInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{campaign-id}` path segment
    pub campaign_id: std::option::Option<std::string::String>,
    /// Substituted into the `{version}` path segment
    pub version: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetCampaignVersionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignVersionInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.field("version", &self.version);
        formatter.finish()
    }
}

/// Input for the `GetCampaignVersions` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignVersionsInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{campaign-id}` path segment
    pub campaign_id: std::option::Option<std::string::String>,
    /// Sent as the `page-size` query parameter
    pub page_size: std::option::Option<std::string::String>,
    /// Sent as the `token` query parameter
    pub token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetCampaignVersionsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignVersionsInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.field("page_size", &self.page_size);
        formatter.field("token", &self.token);
        formatter.finish()
    }
}

/// Input for the `GetCampaigns` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignsInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Sent as the `page-size` query parameter
    pub page_size: std::option::Option<std::string::String>,
    /// Sent as the `token` query parameter
    pub token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetCampaignsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignsInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("page_size", &self.page_size);
        formatter.field("token", &self.token);
        formatter.finish()
    }
}

/// Input for the `GetEndpoint` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetEndpointInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{endpoint-id}` path segment
    pub endpoint_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetEndpointInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetEndpointInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("endpoint_id", &self.endpoint_id);
        formatter.finish()
    }
}

/// Input for the `GetGcmChannel` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetGcmChannelInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetGcmChannelInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetGcmChannelInput");
        formatter.field("application_id", &self.application_id);
        formatter.finish()
    }
}

/// Input for the `GetImportJob` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetImportJobInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{job-id}` path segment
    pub job_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetImportJobInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetImportJobInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("job_id", &self.job_id);
        formatter.finish()
    }
}

/// Input for the `GetImportJobs` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetImportJobsInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Sent as the `page-size` query parameter
    pub page_size: std::option::Option<std::string::String>,
    /// Sent as the `token` query parameter
    pub token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetImportJobsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetImportJobsInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("page_size", &self.page_size);
        formatter.field("token", &self.token);
        formatter.finish()
    }
}

/// Input for the `GetJourney` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetJourneyInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{journey-id}` path segment
    pub journey_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetJourneyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetJourneyInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("journey_id", &self.journey_id);
        formatter.finish()
    }
}

/// Input for the `GetSegment` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{segment-id}` path segment
    pub segment_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetSegmentInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("segment_id", &self.segment_id);
        formatter.finish()
    }
}

/// Input for the `GetSegmentImportJobs` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentImportJobsInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{segment-id}` path segment
    pub segment_id: std::option::Option<std::string::String>,
    /// Sent as the `page-size` query parameter
    pub page_size: std::option::Option<std::string::String>,
    /// Sent as the `token` query parameter
    pub token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetSegmentImportJobsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentImportJobsInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("segment_id", &self.segment_id);
        formatter.field("page_size", &self.page_size);
        formatter.field("token", &self.token);
        formatter.finish()
    }
}

/// Input for the `GetSegmentVersion` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentVersionInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{segment-id}` path segment
    pub segment_id: std::option::Option<std::string::String>,
    /// Substituted into the `{version}` path segment
    pub version: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetSegmentVersionInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentVersionInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("segment_id", &self.segment_id);
        formatter.field("version", &self.version);
        formatter.finish()
    }
}

/// Input for the `GetSegmentVersions` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentVersionsInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{segment-id}` path segment
    pub segment_id: std::option::Option<std::string::String>,
    /// Sent as the `page-size` query parameter
    pub page_size: std::option::Option<std::string::String>,
    /// Sent as the `token` query parameter
    pub token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetSegmentVersionsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentVersionsInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("segment_id", &self.segment_id);
        formatter.field("page_size", &self.page_size);
        formatter.field("token", &self.token);
        formatter.finish()
    }
}

/// Input for the `GetSegments` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentsInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Sent as the `page-size` query parameter
    pub page_size: std::option::Option<std::string::String>,
    /// Sent as the `token` query parameter
    pub token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetSegmentsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentsInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("page_size", &self.page_size);
        formatter.field("token", &self.token);
        formatter.finish()
    }
}

/// Input for the `SendMessages` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SendMessagesInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    pub message_request: std::option::Option<crate::model::MessageRequest>,
}
impl std::fmt::Debug for SendMessagesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SendMessagesInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("message_request", &self.message_request);
        formatter.finish()
    }
}

/// Input for the `UpdateApnsChannel` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateApnsChannelInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    pub apns_channel_request: std::option::Option<crate::model::ApnsChannelRequest>,
}
impl std::fmt::Debug for UpdateApnsChannelInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateApnsChannelInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("apns_channel_request", &self.apns_channel_request);
        formatter.finish()
    }
}

/// Input for the `UpdateApplicationSettings` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateApplicationSettingsInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    pub write_application_settings_request: std::option::Option<crate::model::WriteApplicationSettingsRequest>,
}
impl std::fmt::Debug for UpdateApplicationSettingsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateApplicationSettingsInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("write_application_settings_request", &self.write_application_settings_request);
        formatter.finish()
    }
}

/// Input for the `UpdateCampaign` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateCampaignInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{campaign-id}` path segment
    pub campaign_id: std::option::Option<std::string::String>,
    pub write_campaign_request: std::option::Option<crate::model::WriteCampaignRequest>,
}
impl std::fmt::Debug for UpdateCampaignInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateCampaignInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.field("write_campaign_request", &self.write_campaign_request);
        formatter.finish()
    }
}

/// Input for the `UpdateEndpoint` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateEndpointInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{endpoint-id}` path segment
    pub endpoint_id: std::option::Option<std::string::String>,
    pub endpoint_request: std::option::Option<crate::model::EndpointRequest>,
}
impl std::fmt::Debug for UpdateEndpointInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateEndpointInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("endpoint_id", &self.endpoint_id);
        formatter.field("endpoint_request", &self.endpoint_request);
        formatter.finish()
    }
}

/// Input for the `UpdateEndpointsBatch` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateEndpointsBatchInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    pub endpoint_batch_request: std::option::Option<crate::model::EndpointBatchRequest>,
}
impl std::fmt::Debug for UpdateEndpointsBatchInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateEndpointsBatchInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("endpoint_batch_request", &self.endpoint_batch_request);
        formatter.finish()
    }
}

/// Input for the `UpdateGcmChannel` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateGcmChannelInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    pub gcm_channel_request: std::option::Option<crate::model::GcmChannelRequest>,
}
impl std::fmt::Debug for UpdateGcmChannelInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateGcmChannelInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("gcm_channel_request", &self.gcm_channel_request);
        formatter.finish()
    }
}

/// Input for the `UpdateSegment` operation
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateSegmentInput {
    /// Substituted into the `{application-id}` path segment
    pub application_id: std::option::Option<std::string::String>,
    /// Substituted into the `{segment-id}` path segment
    pub segment_id: std::option::Option<std::string::String>,
    pub write_segment_request: std::option::Option<crate::model::WriteSegmentRequest>,
}
impl std::fmt::Debug for UpdateSegmentInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateSegmentInput");
        formatter.field("application_id", &self.application_id);
        formatter.field("segment_id", &self.segment_id);
        formatter.field("write_segment_request", &self.write_segment_request);
        formatter.finish()
    }
}
