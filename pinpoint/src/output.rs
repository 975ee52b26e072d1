/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateCampaignOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl std::fmt::Debug for CreateCampaignOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateCampaignOutput");
        formatter.field("campaign_response", &self.campaign_response);
        formatter.finish()
    }
}
/// See [`CreateCampaignOutput`](crate::output::CreateCampaignOutput)
pub mod create_campaign_output {
    /// A builder for [`CreateCampaignOutput`](crate::output::CreateCampaignOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateCampaignOutput`](crate::output::CreateCampaignOutput)
        pub fn build(self) -> crate::output::CreateCampaignOutput {
            crate::output::CreateCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl CreateCampaignOutput {
    /// Creates a new builder-style object to manufacture [`CreateCampaignOutput`](crate::output::CreateCampaignOutput)
    pub fn builder() -> crate::output::create_campaign_output::Builder {
        crate::output::create_campaign_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateImportJobOutput {
    pub import_job_response: std::option::Option<crate::model::ImportJobResponse>,
}
impl std::fmt::Debug for CreateImportJobOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateImportJobOutput");
        formatter.field("import_job_response", &self.import_job_response);
        formatter.finish()
    }
}
/// See [`CreateImportJobOutput`](crate::output::CreateImportJobOutput)
pub mod create_import_job_output {
    /// A builder for [`CreateImportJobOutput`](crate::output::CreateImportJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_job_response: std::option::Option<crate::model::ImportJobResponse>,
    }
    impl Builder {
        pub fn import_job_response(mut self, input: crate::model::ImportJobResponse) -> Self {
            self.import_job_response = Some(input);
            self
        }
        pub fn set_import_job_response(mut self, input: std::option::Option<crate::model::ImportJobResponse>) -> Self {
            self.import_job_response = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateImportJobOutput`](crate::output::CreateImportJobOutput)
        pub fn build(self) -> crate::output::CreateImportJobOutput {
            crate::output::CreateImportJobOutput {
                import_job_response: self.import_job_response,
            }
        }
    }
}
impl CreateImportJobOutput {
    /// Creates a new builder-style object to manufacture [`CreateImportJobOutput`](crate::output::CreateImportJobOutput)
    pub fn builder() -> crate::output::create_import_job_output::Builder {
        crate::output::create_import_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateSegmentOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl std::fmt::Debug for CreateSegmentOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateSegmentOutput");
        formatter.field("segment_response", &self.segment_response);
        formatter.finish()
    }
}
/// See [`CreateSegmentOutput`](crate::output::CreateSegmentOutput)
pub mod create_segment_output {
    /// A builder for [`CreateSegmentOutput`](crate::output::CreateSegmentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateSegmentOutput`](crate::output::CreateSegmentOutput)
        pub fn build(self) -> crate::output::CreateSegmentOutput {
            crate::output::CreateSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl CreateSegmentOutput {
    /// Creates a new builder-style object to manufacture [`CreateSegmentOutput`](crate::output::CreateSegmentOutput)
    pub fn builder() -> crate::output::create_segment_output::Builder {
        crate::output::create_segment_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteApnsChannelOutput {
    pub apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
}
impl std::fmt::Debug for DeleteApnsChannelOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteApnsChannelOutput");
        formatter.field("apns_channel_response", &self.apns_channel_response);
        formatter.finish()
    }
}
/// See [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput)
pub mod delete_apns_channel_output {
    /// A builder for [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::ApnsChannelResponse) -> Self {
            self.apns_channel_response = Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: std::option::Option<crate::model::ApnsChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput)
        pub fn build(self) -> crate::output::DeleteApnsChannelOutput {
            crate::output::DeleteApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}
impl DeleteApnsChannelOutput {
    /// Creates a new builder-style object to manufacture [`DeleteApnsChannelOutput`](crate::output::DeleteApnsChannelOutput)
    pub fn builder() -> crate::output::delete_apns_channel_output::Builder {
        crate::output::delete_apns_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteCampaignOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl std::fmt::Debug for DeleteCampaignOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteCampaignOutput");
        formatter.field("campaign_response", &self.campaign_response);
        formatter.finish()
    }
}
/// See [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput)
pub mod delete_campaign_output {
    /// A builder for [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput)
        pub fn build(self) -> crate::output::DeleteCampaignOutput {
            crate::output::DeleteCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl DeleteCampaignOutput {
    /// Creates a new builder-style object to manufacture [`DeleteCampaignOutput`](crate::output::DeleteCampaignOutput)
    pub fn builder() -> crate::output::delete_campaign_output::Builder {
        crate::output::delete_campaign_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteGcmChannelOutput {
    pub gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
}
impl std::fmt::Debug for DeleteGcmChannelOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteGcmChannelOutput");
        formatter.field("gcm_channel_response", &self.gcm_channel_response);
        formatter.finish()
    }
}
/// See [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput)
pub mod delete_gcm_channel_output {
    /// A builder for [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GcmChannelResponse) -> Self {
            self.gcm_channel_response = Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: std::option::Option<crate::model::GcmChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput)
        pub fn build(self) -> crate::output::DeleteGcmChannelOutput {
            crate::output::DeleteGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}
impl DeleteGcmChannelOutput {
    /// Creates a new builder-style object to manufacture [`DeleteGcmChannelOutput`](crate::output::DeleteGcmChannelOutput)
    pub fn builder() -> crate::output::delete_gcm_channel_output::Builder {
        crate::output::delete_gcm_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteSegmentOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl std::fmt::Debug for DeleteSegmentOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteSegmentOutput");
        formatter.field("segment_response", &self.segment_response);
        formatter.finish()
    }
}
/// See [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput)
pub mod delete_segment_output {
    /// A builder for [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput)
        pub fn build(self) -> crate::output::DeleteSegmentOutput {
            crate::output::DeleteSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl DeleteSegmentOutput {
    /// Creates a new builder-style object to manufacture [`DeleteSegmentOutput`](crate::output::DeleteSegmentOutput)
    pub fn builder() -> crate::output::delete_segment_output::Builder {
        crate::output::delete_segment_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetApnsChannelOutput {
    pub apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
}
impl std::fmt::Debug for GetApnsChannelOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetApnsChannelOutput");
        formatter.field("apns_channel_response", &self.apns_channel_response);
        formatter.finish()
    }
}
/// See [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput)
pub mod get_apns_channel_output {
    /// A builder for [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::ApnsChannelResponse) -> Self {
            self.apns_channel_response = Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: std::option::Option<crate::model::ApnsChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput)
        pub fn build(self) -> crate::output::GetApnsChannelOutput {
            crate::output::GetApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}
impl GetApnsChannelOutput {
    /// Creates a new builder-style object to manufacture [`GetApnsChannelOutput`](crate::output::GetApnsChannelOutput)
    pub fn builder() -> crate::output::get_apns_channel_output::Builder {
        crate::output::get_apns_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetApplicationSettingsOutput {
    pub application_settings_resource: std::option::Option<crate::model::ApplicationSettingsResource>,
}
impl std::fmt::Debug for GetApplicationSettingsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetApplicationSettingsOutput");
        formatter.field("application_settings_resource", &self.application_settings_resource);
        formatter.finish()
    }
}
/// See [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput)
pub mod get_application_settings_output {
    /// A builder for [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_settings_resource: std::option::Option<crate::model::ApplicationSettingsResource>,
    }
    impl Builder {
        pub fn application_settings_resource(mut self, input: crate::model::ApplicationSettingsResource) -> Self {
            self.application_settings_resource = Some(input);
            self
        }
        pub fn set_application_settings_resource(mut self, input: std::option::Option<crate::model::ApplicationSettingsResource>) -> Self {
            self.application_settings_resource = input;
            self
        }
        /// Consumes the builder and constructs a [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput)
        pub fn build(self) -> crate::output::GetApplicationSettingsOutput {
            crate::output::GetApplicationSettingsOutput {
                application_settings_resource: self.application_settings_resource,
            }
        }
    }
}
impl GetApplicationSettingsOutput {
    /// Creates a new builder-style object to manufacture [`GetApplicationSettingsOutput`](crate::output::GetApplicationSettingsOutput)
    pub fn builder() -> crate::output::get_application_settings_output::Builder {
        crate::output::get_application_settings_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl std::fmt::Debug for GetCampaignOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignOutput");
        formatter.field("campaign_response", &self.campaign_response);
        formatter.finish()
    }
}
/// See [`GetCampaignOutput`](crate::output::GetCampaignOutput)
pub mod get_campaign_output {
    /// A builder for [`GetCampaignOutput`](crate::output::GetCampaignOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignOutput`](crate::output::GetCampaignOutput)
        pub fn build(self) -> crate::output::GetCampaignOutput {
            crate::output::GetCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl GetCampaignOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignOutput`](crate::output::GetCampaignOutput)
    pub fn builder() -> crate::output::get_campaign_output::Builder {
        crate::output::get_campaign_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignActivitiesOutput {
    pub activities_response: std::option::Option<crate::model::ActivitiesResponse>,
}
impl std::fmt::Debug for GetCampaignActivitiesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignActivitiesOutput");
        formatter.field("activities_response", &self.activities_response);
        formatter.finish()
    }
}
/// See [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput)
pub mod get_campaign_activities_output {
    /// A builder for [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activities_response: std::option::Option<crate::model::ActivitiesResponse>,
    }
    impl Builder {
        pub fn activities_response(mut self, input: crate::model::ActivitiesResponse) -> Self {
            self.activities_response = Some(input);
            self
        }
        pub fn set_activities_response(mut self, input: std::option::Option<crate::model::ActivitiesResponse>) -> Self {
            self.activities_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput)
        pub fn build(self) -> crate::output::GetCampaignActivitiesOutput {
            crate::output::GetCampaignActivitiesOutput {
                activities_response: self.activities_response,
            }
        }
    }
}
impl GetCampaignActivitiesOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignActivitiesOutput`](crate::output::GetCampaignActivitiesOutput)
    pub fn builder() -> crate::output::get_campaign_activities_output::Builder {
        crate::output::get_campaign_activities_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignDateRangeKpiOutput {
    pub campaign_date_range_kpi_response: std::option::Option<crate::model::CampaignDateRangeKpiResponse>,
}
impl std::fmt::Debug for GetCampaignDateRangeKpiOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignDateRangeKpiOutput");
        formatter.field("campaign_date_range_kpi_response", &self.campaign_date_range_kpi_response);
        formatter.finish()
    }
}
/// See [`GetCampaignDateRangeKpiOutput`](crate::output::GetCampaignDateRangeKpiOutput)
pub mod get_campaign_date_range_kpi_output {
    /// A builder for [`GetCampaignDateRangeKpiOutput`](crate::output::GetCampaignDateRangeKpiOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_date_range_kpi_response: std::option::Option<crate::model::CampaignDateRangeKpiResponse>,
    }
    impl Builder {
        pub fn campaign_date_range_kpi_response(mut self, input: crate::model::CampaignDateRangeKpiResponse) -> Self {
            self.campaign_date_range_kpi_response = Some(input);
            self
        }
        pub fn set_campaign_date_range_kpi_response(mut self, input: std::option::Option<crate::model::CampaignDateRangeKpiResponse>) -> Self {
            self.campaign_date_range_kpi_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignDateRangeKpiOutput`](crate::output::GetCampaignDateRangeKpiOutput)
        pub fn build(self) -> crate::output::GetCampaignDateRangeKpiOutput {
            crate::output::GetCampaignDateRangeKpiOutput {
                campaign_date_range_kpi_response: self.campaign_date_range_kpi_response,
            }
        }
    }
}
impl GetCampaignDateRangeKpiOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignDateRangeKpiOutput`](crate::output::GetCampaignDateRangeKpiOutput)
    pub fn builder() -> crate::output::get_campaign_date_range_kpi_output::Builder {
        crate::output::get_campaign_date_range_kpi_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignVersionOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl std::fmt::Debug for GetCampaignVersionOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignVersionOutput");
        formatter.field("campaign_response", &self.campaign_response);
        formatter.finish()
    }
}
/// See [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput)
pub mod get_campaign_version_output {
    /// A builder for [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput)
        pub fn build(self) -> crate::output::GetCampaignVersionOutput {
            crate::output::GetCampaignVersionOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl GetCampaignVersionOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionOutput`](crate::output::GetCampaignVersionOutput)
    pub fn builder() -> crate::output::get_campaign_version_output::Builder {
        crate::output::get_campaign_version_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignVersionsOutput {
    pub campaigns_response: std::option::Option<crate::model::CampaignsResponse>,
}
impl std::fmt::Debug for GetCampaignVersionsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignVersionsOutput");
        formatter.field("campaigns_response", &self.campaigns_response);
        formatter.finish()
    }
}
/// See [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput)
pub mod get_campaign_versions_output {
    /// A builder for [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaigns_response: std::option::Option<crate::model::CampaignsResponse>,
    }
    impl Builder {
        pub fn campaigns_response(mut self, input: crate::model::CampaignsResponse) -> Self {
            self.campaigns_response = Some(input);
            self
        }
        pub fn set_campaigns_response(mut self, input: std::option::Option<crate::model::CampaignsResponse>) -> Self {
            self.campaigns_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput)
        pub fn build(self) -> crate::output::GetCampaignVersionsOutput {
            crate::output::GetCampaignVersionsOutput {
                campaigns_response: self.campaigns_response,
            }
        }
    }
}
impl GetCampaignVersionsOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignVersionsOutput`](crate::output::GetCampaignVersionsOutput)
    pub fn builder() -> crate::output::get_campaign_versions_output::Builder {
        crate::output::get_campaign_versions_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetCampaignsOutput {
    pub campaigns_response: std::option::Option<crate::model::CampaignsResponse>,
}
impl std::fmt::Debug for GetCampaignsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetCampaignsOutput");
        formatter.field("campaigns_response", &self.campaigns_response);
        formatter.finish()
    }
}
/// See [`GetCampaignsOutput`](crate::output::GetCampaignsOutput)
pub mod get_campaigns_output {
    /// A builder for [`GetCampaignsOutput`](crate::output::GetCampaignsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaigns_response: std::option::Option<crate::model::CampaignsResponse>,
    }
    impl Builder {
        pub fn campaigns_response(mut self, input: crate::model::CampaignsResponse) -> Self {
            self.campaigns_response = Some(input);
            self
        }
        pub fn set_campaigns_response(mut self, input: std::option::Option<crate::model::CampaignsResponse>) -> Self {
            self.campaigns_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetCampaignsOutput`](crate::output::GetCampaignsOutput)
        pub fn build(self) -> crate::output::GetCampaignsOutput {
            crate::output::GetCampaignsOutput {
                campaigns_response: self.campaigns_response,
            }
        }
    }
}
impl GetCampaignsOutput {
    /// Creates a new builder-style object to manufacture [`GetCampaignsOutput`](crate::output::GetCampaignsOutput)
    pub fn builder() -> crate::output::get_campaigns_output::Builder {
        crate::output::get_campaigns_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetEndpointOutput {
    pub endpoint_response: std::option::Option<crate::model::EndpointResponse>,
}
impl std::fmt::Debug for GetEndpointOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetEndpointOutput");
        formatter.field("endpoint_response", &self.endpoint_response);
        formatter.finish()
    }
}
/// See [`GetEndpointOutput`](crate::output::GetEndpointOutput)
pub mod get_endpoint_output {
    /// A builder for [`GetEndpointOutput`](crate::output::GetEndpointOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) endpoint_response: std::option::Option<crate::model::EndpointResponse>,
    }
    impl Builder {
        pub fn endpoint_response(mut self, input: crate::model::EndpointResponse) -> Self {
            self.endpoint_response = Some(input);
            self
        }
        pub fn set_endpoint_response(mut self, input: std::option::Option<crate::model::EndpointResponse>) -> Self {
            self.endpoint_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetEndpointOutput`](crate::output::GetEndpointOutput)
        pub fn build(self) -> crate::output::GetEndpointOutput {
            crate::output::GetEndpointOutput {
                endpoint_response: self.endpoint_response,
            }
        }
    }
}
impl GetEndpointOutput {
    /// Creates a new builder-style object to manufacture [`GetEndpointOutput`](crate::output::GetEndpointOutput)
    pub fn builder() -> crate::output::get_endpoint_output::Builder {
        crate::output::get_endpoint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetGcmChannelOutput {
    pub gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
}
impl std::fmt::Debug for GetGcmChannelOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetGcmChannelOutput");
        formatter.field("gcm_channel_response", &self.gcm_channel_response);
        formatter.finish()
    }
}
/// See [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput)
pub mod get_gcm_channel_output {
    /// A builder for [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GcmChannelResponse) -> Self {
            self.gcm_channel_response = Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: std::option::Option<crate::model::GcmChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput)
        pub fn build(self) -> crate::output::GetGcmChannelOutput {
            crate::output::GetGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}
impl GetGcmChannelOutput {
    /// Creates a new builder-style object to manufacture [`GetGcmChannelOutput`](crate::output::GetGcmChannelOutput)
    pub fn builder() -> crate::output::get_gcm_channel_output::Builder {
        crate::output::get_gcm_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetImportJobOutput {
    pub import_job_response: std::option::Option<crate::model::ImportJobResponse>,
}
impl std::fmt::Debug for GetImportJobOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetImportJobOutput");
        formatter.field("import_job_response", &self.import_job_response);
        formatter.finish()
    }
}
/// See [`GetImportJobOutput`](crate::output::GetImportJobOutput)
pub mod get_import_job_output {
    /// A builder for [`GetImportJobOutput`](crate::output::GetImportJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_job_response: std::option::Option<crate::model::ImportJobResponse>,
    }
    impl Builder {
        pub fn import_job_response(mut self, input: crate::model::ImportJobResponse) -> Self {
            self.import_job_response = Some(input);
            self
        }
        pub fn set_import_job_response(mut self, input: std::option::Option<crate::model::ImportJobResponse>) -> Self {
            self.import_job_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImportJobOutput`](crate::output::GetImportJobOutput)
        pub fn build(self) -> crate::output::GetImportJobOutput {
            crate::output::GetImportJobOutput {
                import_job_response: self.import_job_response,
            }
        }
    }
}
impl GetImportJobOutput {
    /// Creates a new builder-style object to manufacture [`GetImportJobOutput`](crate::output::GetImportJobOutput)
    pub fn builder() -> crate::output::get_import_job_output::Builder {
        crate::output::get_import_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetImportJobsOutput {
    pub import_jobs_response: std::option::Option<crate::model::ImportJobsResponse>,
}
impl std::fmt::Debug for GetImportJobsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetImportJobsOutput");
        formatter.field("import_jobs_response", &self.import_jobs_response);
        formatter.finish()
    }
}
/// See [`GetImportJobsOutput`](crate::output::GetImportJobsOutput)
pub mod get_import_jobs_output {
    /// A builder for [`GetImportJobsOutput`](crate::output::GetImportJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_jobs_response: std::option::Option<crate::model::ImportJobsResponse>,
    }
    impl Builder {
        pub fn import_jobs_response(mut self, input: crate::model::ImportJobsResponse) -> Self {
            self.import_jobs_response = Some(input);
            self
        }
        pub fn set_import_jobs_response(mut self, input: std::option::Option<crate::model::ImportJobsResponse>) -> Self {
            self.import_jobs_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetImportJobsOutput`](crate::output::GetImportJobsOutput)
        pub fn build(self) -> crate::output::GetImportJobsOutput {
            crate::output::GetImportJobsOutput {
                import_jobs_response: self.import_jobs_response,
            }
        }
    }
}
impl GetImportJobsOutput {
    /// Creates a new builder-style object to manufacture [`GetImportJobsOutput`](crate::output::GetImportJobsOutput)
    pub fn builder() -> crate::output::get_import_jobs_output::Builder {
        crate::output::get_import_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetJourneyOutput {
    pub journey_response: std::option::Option<crate::model::JourneyResponse>,
}
impl std::fmt::Debug for GetJourneyOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetJourneyOutput");
        formatter.field("journey_response", &self.journey_response);
        formatter.finish()
    }
}
/// See [`GetJourneyOutput`](crate::output::GetJourneyOutput)
pub mod get_journey_output {
    /// A builder for [`GetJourneyOutput`](crate::output::GetJourneyOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) journey_response: std::option::Option<crate::model::JourneyResponse>,
    }
    impl Builder {
        pub fn journey_response(mut self, input: crate::model::JourneyResponse) -> Self {
            self.journey_response = Some(input);
            self
        }
        pub fn set_journey_response(mut self, input: std::option::Option<crate::model::JourneyResponse>) -> Self {
            self.journey_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetJourneyOutput`](crate::output::GetJourneyOutput)
        pub fn build(self) -> crate::output::GetJourneyOutput {
            crate::output::GetJourneyOutput {
                journey_response: self.journey_response,
            }
        }
    }
}
impl GetJourneyOutput {
    /// Creates a new builder-style object to manufacture [`GetJourneyOutput`](crate::output::GetJourneyOutput)
    pub fn builder() -> crate::output::get_journey_output::Builder {
        crate::output::get_journey_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl std::fmt::Debug for GetSegmentOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentOutput");
        formatter.field("segment_response", &self.segment_response);
        formatter.finish()
    }
}
/// See [`GetSegmentOutput`](crate::output::GetSegmentOutput)
pub mod get_segment_output {
    /// A builder for [`GetSegmentOutput`](crate::output::GetSegmentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentOutput`](crate::output::GetSegmentOutput)
        pub fn build(self) -> crate::output::GetSegmentOutput {
            crate::output::GetSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl GetSegmentOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentOutput`](crate::output::GetSegmentOutput)
    pub fn builder() -> crate::output::get_segment_output::Builder {
        crate::output::get_segment_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentImportJobsOutput {
    pub import_jobs_response: std::option::Option<crate::model::ImportJobsResponse>,
}
impl std::fmt::Debug for GetSegmentImportJobsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentImportJobsOutput");
        formatter.field("import_jobs_response", &self.import_jobs_response);
        formatter.finish()
    }
}
/// See [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput)
pub mod get_segment_import_jobs_output {
    /// A builder for [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) import_jobs_response: std::option::Option<crate::model::ImportJobsResponse>,
    }
    impl Builder {
        pub fn import_jobs_response(mut self, input: crate::model::ImportJobsResponse) -> Self {
            self.import_jobs_response = Some(input);
            self
        }
        pub fn set_import_jobs_response(mut self, input: std::option::Option<crate::model::ImportJobsResponse>) -> Self {
            self.import_jobs_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput)
        pub fn build(self) -> crate::output::GetSegmentImportJobsOutput {
            crate::output::GetSegmentImportJobsOutput {
                import_jobs_response: self.import_jobs_response,
            }
        }
    }
}
impl GetSegmentImportJobsOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentImportJobsOutput`](crate::output::GetSegmentImportJobsOutput)
    pub fn builder() -> crate::output::get_segment_import_jobs_output::Builder {
        crate::output::get_segment_import_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentVersionOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl std::fmt::Debug for GetSegmentVersionOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentVersionOutput");
        formatter.field("segment_response", &self.segment_response);
        formatter.finish()
    }
}
/// See [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput)
pub mod get_segment_version_output {
    /// A builder for [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput)
        pub fn build(self) -> crate::output::GetSegmentVersionOutput {
            crate::output::GetSegmentVersionOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl GetSegmentVersionOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionOutput`](crate::output::GetSegmentVersionOutput)
    pub fn builder() -> crate::output::get_segment_version_output::Builder {
        crate::output::get_segment_version_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentVersionsOutput {
    pub segments_response: std::option::Option<crate::model::SegmentsResponse>,
}
impl std::fmt::Debug for GetSegmentVersionsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentVersionsOutput");
        formatter.field("segments_response", &self.segments_response);
        formatter.finish()
    }
}
/// See [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput)
pub mod get_segment_versions_output {
    /// A builder for [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segments_response: std::option::Option<crate::model::SegmentsResponse>,
    }
    impl Builder {
        pub fn segments_response(mut self, input: crate::model::SegmentsResponse) -> Self {
            self.segments_response = Some(input);
            self
        }
        pub fn set_segments_response(mut self, input: std::option::Option<crate::model::SegmentsResponse>) -> Self {
            self.segments_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput)
        pub fn build(self) -> crate::output::GetSegmentVersionsOutput {
            crate::output::GetSegmentVersionsOutput {
                segments_response: self.segments_response,
            }
        }
    }
}
impl GetSegmentVersionsOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentVersionsOutput`](crate::output::GetSegmentVersionsOutput)
    pub fn builder() -> crate::output::get_segment_versions_output::Builder {
        crate::output::get_segment_versions_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetSegmentsOutput {
    pub segments_response: std::option::Option<crate::model::SegmentsResponse>,
}
impl std::fmt::Debug for GetSegmentsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetSegmentsOutput");
        formatter.field("segments_response", &self.segments_response);
        formatter.finish()
    }
}
/// See [`GetSegmentsOutput`](crate::output::GetSegmentsOutput)
pub mod get_segments_output {
    /// A builder for [`GetSegmentsOutput`](crate::output::GetSegmentsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segments_response: std::option::Option<crate::model::SegmentsResponse>,
    }
    impl Builder {
        pub fn segments_response(mut self, input: crate::model::SegmentsResponse) -> Self {
            self.segments_response = Some(input);
            self
        }
        pub fn set_segments_response(mut self, input: std::option::Option<crate::model::SegmentsResponse>) -> Self {
            self.segments_response = input;
            self
        }
        /// Consumes the builder and constructs a [`GetSegmentsOutput`](crate::output::GetSegmentsOutput)
        pub fn build(self) -> crate::output::GetSegmentsOutput {
            crate::output::GetSegmentsOutput {
                segments_response: self.segments_response,
            }
        }
    }
}
impl GetSegmentsOutput {
    /// Creates a new builder-style object to manufacture [`GetSegmentsOutput`](crate::output::GetSegmentsOutput)
    pub fn builder() -> crate::output::get_segments_output::Builder {
        crate::output::get_segments_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SendMessagesOutput {
    pub message_response: std::option::Option<crate::model::MessageResponse>,
}
impl std::fmt::Debug for SendMessagesOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SendMessagesOutput");
        formatter.field("message_response", &self.message_response);
        formatter.finish()
    }
}
/// See [`SendMessagesOutput`](crate::output::SendMessagesOutput)
pub mod send_messages_output {
    /// A builder for [`SendMessagesOutput`](crate::output::SendMessagesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_response: std::option::Option<crate::model::MessageResponse>,
    }
    impl Builder {
        pub fn message_response(mut self, input: crate::model::MessageResponse) -> Self {
            self.message_response = Some(input);
            self
        }
        pub fn set_message_response(mut self, input: std::option::Option<crate::model::MessageResponse>) -> Self {
            self.message_response = input;
            self
        }
        /// Consumes the builder and constructs a [`SendMessagesOutput`](crate::output::SendMessagesOutput)
        pub fn build(self) -> crate::output::SendMessagesOutput {
            crate::output::SendMessagesOutput {
                message_response: self.message_response,
            }
        }
    }
}
impl SendMessagesOutput {
    /// Creates a new builder-style object to manufacture [`SendMessagesOutput`](crate::output::SendMessagesOutput)
    pub fn builder() -> crate::output::send_messages_output::Builder {
        crate::output::send_messages_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateApnsChannelOutput {
    pub apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
}
impl std::fmt::Debug for UpdateApnsChannelOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateApnsChannelOutput");
        formatter.field("apns_channel_response", &self.apns_channel_response);
        formatter.finish()
    }
}
/// See [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput)
pub mod update_apns_channel_output {
    /// A builder for [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_channel_response: std::option::Option<crate::model::ApnsChannelResponse>,
    }
    impl Builder {
        pub fn apns_channel_response(mut self, input: crate::model::ApnsChannelResponse) -> Self {
            self.apns_channel_response = Some(input);
            self
        }
        pub fn set_apns_channel_response(mut self, input: std::option::Option<crate::model::ApnsChannelResponse>) -> Self {
            self.apns_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput)
        pub fn build(self) -> crate::output::UpdateApnsChannelOutput {
            crate::output::UpdateApnsChannelOutput {
                apns_channel_response: self.apns_channel_response,
            }
        }
    }
}
impl UpdateApnsChannelOutput {
    /// Creates a new builder-style object to manufacture [`UpdateApnsChannelOutput`](crate::output::UpdateApnsChannelOutput)
    pub fn builder() -> crate::output::update_apns_channel_output::Builder {
        crate::output::update_apns_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateApplicationSettingsOutput {
    pub application_settings_resource: std::option::Option<crate::model::ApplicationSettingsResource>,
}
impl std::fmt::Debug for UpdateApplicationSettingsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateApplicationSettingsOutput");
        formatter.field("application_settings_resource", &self.application_settings_resource);
        formatter.finish()
    }
}
/// See [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput)
pub mod update_application_settings_output {
    /// A builder for [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_settings_resource: std::option::Option<crate::model::ApplicationSettingsResource>,
    }
    impl Builder {
        pub fn application_settings_resource(mut self, input: crate::model::ApplicationSettingsResource) -> Self {
            self.application_settings_resource = Some(input);
            self
        }
        pub fn set_application_settings_resource(mut self, input: std::option::Option<crate::model::ApplicationSettingsResource>) -> Self {
            self.application_settings_resource = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput)
        pub fn build(self) -> crate::output::UpdateApplicationSettingsOutput {
            crate::output::UpdateApplicationSettingsOutput {
                application_settings_resource: self.application_settings_resource,
            }
        }
    }
}
impl UpdateApplicationSettingsOutput {
    /// Creates a new builder-style object to manufacture [`UpdateApplicationSettingsOutput`](crate::output::UpdateApplicationSettingsOutput)
    pub fn builder() -> crate::output::update_application_settings_output::Builder {
        crate::output::update_application_settings_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateCampaignOutput {
    pub campaign_response: std::option::Option<crate::model::CampaignResponse>,
}
impl std::fmt::Debug for UpdateCampaignOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateCampaignOutput");
        formatter.field("campaign_response", &self.campaign_response);
        formatter.finish()
    }
}
/// See [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput)
pub mod update_campaign_output {
    /// A builder for [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_response: std::option::Option<crate::model::CampaignResponse>,
    }
    impl Builder {
        pub fn campaign_response(mut self, input: crate::model::CampaignResponse) -> Self {
            self.campaign_response = Some(input);
            self
        }
        pub fn set_campaign_response(mut self, input: std::option::Option<crate::model::CampaignResponse>) -> Self {
            self.campaign_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput)
        pub fn build(self) -> crate::output::UpdateCampaignOutput {
            crate::output::UpdateCampaignOutput {
                campaign_response: self.campaign_response,
            }
        }
    }
}
impl UpdateCampaignOutput {
    /// Creates a new builder-style object to manufacture [`UpdateCampaignOutput`](crate::output::UpdateCampaignOutput)
    pub fn builder() -> crate::output::update_campaign_output::Builder {
        crate::output::update_campaign_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateEndpointOutput {
    pub message_body: std::option::Option<crate::model::MessageBody>,
}
impl std::fmt::Debug for UpdateEndpointOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateEndpointOutput");
        formatter.field("message_body", &self.message_body);
        formatter.finish()
    }
}
/// See [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
pub mod update_endpoint_output {
    /// A builder for [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = Some(input);
            self
        }
        pub fn set_message_body(mut self, input: std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
        pub fn build(self) -> crate::output::UpdateEndpointOutput {
            crate::output::UpdateEndpointOutput {
                message_body: self.message_body,
            }
        }
    }
}
impl UpdateEndpointOutput {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
    pub fn builder() -> crate::output::update_endpoint_output::Builder {
        crate::output::update_endpoint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateEndpointsBatchOutput {
    pub message_body: std::option::Option<crate::model::MessageBody>,
}
impl std::fmt::Debug for UpdateEndpointsBatchOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateEndpointsBatchOutput");
        formatter.field("message_body", &self.message_body);
        formatter.finish()
    }
}
/// See [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput)
pub mod update_endpoints_batch_output {
    /// A builder for [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_body: std::option::Option<crate::model::MessageBody>,
    }
    impl Builder {
        pub fn message_body(mut self, input: crate::model::MessageBody) -> Self {
            self.message_body = Some(input);
            self
        }
        pub fn set_message_body(mut self, input: std::option::Option<crate::model::MessageBody>) -> Self {
            self.message_body = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput)
        pub fn build(self) -> crate::output::UpdateEndpointsBatchOutput {
            crate::output::UpdateEndpointsBatchOutput {
                message_body: self.message_body,
            }
        }
    }
}
impl UpdateEndpointsBatchOutput {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointsBatchOutput`](crate::output::UpdateEndpointsBatchOutput)
    pub fn builder() -> crate::output::update_endpoints_batch_output::Builder {
        crate::output::update_endpoints_batch_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateGcmChannelOutput {
    pub gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
}
impl std::fmt::Debug for UpdateGcmChannelOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateGcmChannelOutput");
        formatter.field("gcm_channel_response", &self.gcm_channel_response);
        formatter.finish()
    }
}
/// See [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput)
pub mod update_gcm_channel_output {
    /// A builder for [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) gcm_channel_response: std::option::Option<crate::model::GcmChannelResponse>,
    }
    impl Builder {
        pub fn gcm_channel_response(mut self, input: crate::model::GcmChannelResponse) -> Self {
            self.gcm_channel_response = Some(input);
            self
        }
        pub fn set_gcm_channel_response(mut self, input: std::option::Option<crate::model::GcmChannelResponse>) -> Self {
            self.gcm_channel_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput)
        pub fn build(self) -> crate::output::UpdateGcmChannelOutput {
            crate::output::UpdateGcmChannelOutput {
                gcm_channel_response: self.gcm_channel_response,
            }
        }
    }
}
impl UpdateGcmChannelOutput {
    /// Creates a new builder-style object to manufacture [`UpdateGcmChannelOutput`](crate::output::UpdateGcmChannelOutput)
    pub fn builder() -> crate::output::update_gcm_channel_output::Builder {
        crate::output::update_gcm_channel_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateSegmentOutput {
    pub segment_response: std::option::Option<crate::model::SegmentResponse>,
}
impl std::fmt::Debug for UpdateSegmentOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateSegmentOutput");
        formatter.field("segment_response", &self.segment_response);
        formatter.finish()
    }
}
/// See [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput)
pub mod update_segment_output {
    /// A builder for [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_response: std::option::Option<crate::model::SegmentResponse>,
    }
    impl Builder {
        pub fn segment_response(mut self, input: crate::model::SegmentResponse) -> Self {
            self.segment_response = Some(input);
            self
        }
        pub fn set_segment_response(mut self, input: std::option::Option<crate::model::SegmentResponse>) -> Self {
            self.segment_response = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput)
        pub fn build(self) -> crate::output::UpdateSegmentOutput {
            crate::output::UpdateSegmentOutput {
                segment_response: self.segment_response,
            }
        }
    }
}
impl UpdateSegmentOutput {
    /// Creates a new builder-style object to manufacture [`UpdateSegmentOutput`](crate::output::UpdateSegmentOutput)
    pub fn builder() -> crate::output::update_segment_output::Builder {
        crate::output::update_segment_output::Builder::default()
    }
}
