/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// What happens when a recipient taps a push notification
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Action {
    OpenApp,
    DeepLink,
    Url,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            "OPEN_APP" => Action::OpenApp,
            "DEEP_LINK" => Action::DeepLink,
            "URL" => Action::Url,
            other => Action::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Action {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Action::from(s))
    }
}
impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::OpenApp => "OPEN_APP",
            Action::DeepLink => "DEEP_LINK",
            Action::Url => "URL",
            Action::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["OPEN_APP", "DEEP_LINK", "URL"]
    }
}
impl AsRef<str> for Action {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ActivitiesResponse {
    pub item: std::option::Option<std::vec::Vec<crate::model::ActivityResponse>>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ActivitiesResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ActivitiesResponse");
        formatter.field("item", &self.item);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`ActivitiesResponse`](crate::model::ActivitiesResponse)
pub mod activities_response {
    /// A builder for [`ActivitiesResponse`](crate::model::ActivitiesResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::ActivityResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn item(mut self, input: impl Into<crate::model::ActivityResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::ActivityResponse>>) -> Self {
            self.item = input;
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
        /// Consumes the builder and constructs a [`ActivitiesResponse`](crate::model::ActivitiesResponse)
        pub fn build(self) -> crate::model::ActivitiesResponse {
            crate::model::ActivitiesResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl ActivitiesResponse {
    /// Creates a new builder-style object to manufacture [`ActivitiesResponse`](crate::model::ActivitiesResponse)
    pub fn builder() -> crate::model::activities_response::Builder {
        crate::model::activities_response::Builder::default()
    }
}

/// A single step of a journey. Exactly one activity type is expected to be set.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Activity {
    pub description: std::option::Option<std::string::String>,
    pub email: std::option::Option<crate::model::EmailMessageActivity>,
    pub holdout: std::option::Option<crate::model::HoldoutActivity>,
    pub random_split: std::option::Option<crate::model::RandomSplitActivity>,
    pub wait: std::option::Option<crate::model::WaitActivity>,
}
impl std::fmt::Debug for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Activity");
        formatter.field("description", &self.description);
        formatter.field("email", &self.email);
        formatter.field("holdout", &self.holdout);
        formatter.field("random_split", &self.random_split);
        formatter.field("wait", &self.wait);
        formatter.finish()
    }
}
/// See [`Activity`](crate::model::Activity)
pub mod activity {
    /// A builder for [`Activity`](crate::model::Activity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) email: std::option::Option<crate::model::EmailMessageActivity>,
        pub(crate) holdout: std::option::Option<crate::model::HoldoutActivity>,
        pub(crate) random_split: std::option::Option<crate::model::RandomSplitActivity>,
        pub(crate) wait: std::option::Option<crate::model::WaitActivity>,
    }
    impl Builder {
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn email(mut self, input: crate::model::EmailMessageActivity) -> Self {
            self.email = Some(input);
            self
        }
        pub fn set_email(mut self, input: std::option::Option<crate::model::EmailMessageActivity>) -> Self {
            self.email = input;
            self
        }
        pub fn holdout(mut self, input: crate::model::HoldoutActivity) -> Self {
            self.holdout = Some(input);
            self
        }
        pub fn set_holdout(mut self, input: std::option::Option<crate::model::HoldoutActivity>) -> Self {
            self.holdout = input;
            self
        }
        pub fn random_split(mut self, input: crate::model::RandomSplitActivity) -> Self {
            self.random_split = Some(input);
            self
        }
        pub fn set_random_split(mut self, input: std::option::Option<crate::model::RandomSplitActivity>) -> Self {
            self.random_split = input;
            self
        }
        pub fn wait(mut self, input: crate::model::WaitActivity) -> Self {
            self.wait = Some(input);
            self
        }
        pub fn set_wait(mut self, input: std::option::Option<crate::model::WaitActivity>) -> Self {
            self.wait = input;
            self
        }
        /// Consumes the builder and constructs a [`Activity`](crate::model::Activity)
        pub fn build(self) -> crate::model::Activity {
            crate::model::Activity {
                description: self.description,
                email: self.email,
                holdout: self.holdout,
                random_split: self.random_split,
                wait: self.wait,
            }
        }
    }
}
impl Activity {
    /// Creates a new builder-style object to manufacture [`Activity`](crate::model::Activity)
    pub fn builder() -> crate::model::activity::Builder {
        crate::model::activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ActivityResponse {
    pub application_id: std::option::Option<std::string::String>,
    pub campaign_id: std::option::Option<std::string::String>,
    pub end: std::option::Option<std::string::String>,
    pub id: std::option::Option<std::string::String>,
    pub result: std::option::Option<std::string::String>,
    pub scheduled_start: std::option::Option<std::string::String>,
    pub start: std::option::Option<std::string::String>,
    pub state: std::option::Option<std::string::String>,
    pub successful_endpoint_count: std::option::Option<i32>,
    pub timezones_completed_count: std::option::Option<i32>,
    pub timezones_total_count: std::option::Option<i32>,
    pub total_endpoint_count: std::option::Option<i32>,
    pub treatment_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ActivityResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ActivityResponse");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.field("end", &self.end);
        formatter.field("id", &self.id);
        formatter.field("result", &self.result);
        formatter.field("scheduled_start", &self.scheduled_start);
        formatter.field("start", &self.start);
        formatter.field("state", &self.state);
        formatter.field("successful_endpoint_count", &self.successful_endpoint_count);
        formatter.field("timezones_completed_count", &self.timezones_completed_count);
        formatter.field("timezones_total_count", &self.timezones_total_count);
        formatter.field("total_endpoint_count", &self.total_endpoint_count);
        formatter.field("treatment_id", &self.treatment_id);
        formatter.finish()
    }
}
/// See [`ActivityResponse`](crate::model::ActivityResponse)
pub mod activity_response {
    /// A builder for [`ActivityResponse`](crate::model::ActivityResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) end: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) result: std::option::Option<std::string::String>,
        pub(crate) scheduled_start: std::option::Option<std::string::String>,
        pub(crate) start: std::option::Option<std::string::String>,
        pub(crate) state: std::option::Option<std::string::String>,
        pub(crate) successful_endpoint_count: std::option::Option<i32>,
        pub(crate) timezones_completed_count: std::option::Option<i32>,
        pub(crate) timezones_total_count: std::option::Option<i32>,
        pub(crate) total_endpoint_count: std::option::Option<i32>,
        pub(crate) treatment_id: std::option::Option<std::string::String>,
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
        pub fn end(mut self, input: impl Into<std::string::String>) -> Self {
            self.end = Some(input.into());
            self
        }
        pub fn set_end(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.end = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn result(mut self, input: impl Into<std::string::String>) -> Self {
            self.result = Some(input.into());
            self
        }
        pub fn set_result(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.result = input;
            self
        }
        pub fn scheduled_start(mut self, input: impl Into<std::string::String>) -> Self {
            self.scheduled_start = Some(input.into());
            self
        }
        pub fn set_scheduled_start(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.scheduled_start = input;
            self
        }
        pub fn start(mut self, input: impl Into<std::string::String>) -> Self {
            self.start = Some(input.into());
            self
        }
        pub fn set_start(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start = input;
            self
        }
        pub fn state(mut self, input: impl Into<std::string::String>) -> Self {
            self.state = Some(input.into());
            self
        }
        pub fn set_state(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.state = input;
            self
        }
        pub fn successful_endpoint_count(mut self, input: i32) -> Self {
            self.successful_endpoint_count = Some(input);
            self
        }
        pub fn set_successful_endpoint_count(mut self, input: std::option::Option<i32>) -> Self {
            self.successful_endpoint_count = input;
            self
        }
        pub fn timezones_completed_count(mut self, input: i32) -> Self {
            self.timezones_completed_count = Some(input);
            self
        }
        pub fn set_timezones_completed_count(mut self, input: std::option::Option<i32>) -> Self {
            self.timezones_completed_count = input;
            self
        }
        pub fn timezones_total_count(mut self, input: i32) -> Self {
            self.timezones_total_count = Some(input);
            self
        }
        pub fn set_timezones_total_count(mut self, input: std::option::Option<i32>) -> Self {
            self.timezones_total_count = input;
            self
        }
        pub fn total_endpoint_count(mut self, input: i32) -> Self {
            self.total_endpoint_count = Some(input);
            self
        }
        pub fn set_total_endpoint_count(mut self, input: std::option::Option<i32>) -> Self {
            self.total_endpoint_count = input;
            self
        }
        pub fn treatment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_id = Some(input.into());
            self
        }
        pub fn set_treatment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ActivityResponse`](crate::model::ActivityResponse)
        pub fn build(self) -> crate::model::ActivityResponse {
            crate::model::ActivityResponse {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                end: self.end,
                id: self.id,
                result: self.result,
                scheduled_start: self.scheduled_start,
                start: self.start,
                state: self.state,
                successful_endpoint_count: self.successful_endpoint_count,
                timezones_completed_count: self.timezones_completed_count,
                timezones_total_count: self.timezones_total_count,
                total_endpoint_count: self.total_endpoint_count,
                treatment_id: self.treatment_id,
            }
        }
    }
}
impl ActivityResponse {
    /// Creates a new builder-style object to manufacture [`ActivityResponse`](crate::model::ActivityResponse)
    pub fn builder() -> crate::model::activity_response::Builder {
        crate::model::activity_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AddressConfiguration {
    pub body_override: std::option::Option<std::string::String>,
    pub channel_type: std::option::Option<crate::model::ChannelType>,
    pub context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub raw_content: std::option::Option<std::string::String>,
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    pub title_override: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for AddressConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AddressConfiguration");
        formatter.field("body_override", &self.body_override);
        formatter.field("channel_type", &self.channel_type);
        formatter.field("context", &self.context);
        formatter.field("raw_content", &self.raw_content);
        formatter.field("substitutions", &self.substitutions);
        formatter.field("title_override", &self.title_override);
        formatter.finish()
    }
}
/// See [`AddressConfiguration`](crate::model::AddressConfiguration)
pub mod address_configuration {
    /// A builder for [`AddressConfiguration`](crate::model::AddressConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body_override: std::option::Option<std::string::String>,
        pub(crate) channel_type: std::option::Option<crate::model::ChannelType>,
        pub(crate) context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) title_override: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn body_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.body_override = Some(input.into());
            self
        }
        pub fn set_body_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body_override = input;
            self
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        pub fn context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.context = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn title_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.title_override = Some(input.into());
            self
        }
        pub fn set_title_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title_override = input;
            self
        }
        /// Consumes the builder and constructs a [`AddressConfiguration`](crate::model::AddressConfiguration)
        pub fn build(self) -> crate::model::AddressConfiguration {
            crate::model::AddressConfiguration {
                body_override: self.body_override,
                channel_type: self.channel_type,
                context: self.context,
                raw_content: self.raw_content,
                substitutions: self.substitutions,
                title_override: self.title_override,
            }
        }
    }
}
impl AddressConfiguration {
    /// Creates a new builder-style object to manufacture [`AddressConfiguration`](crate::model::AddressConfiguration)
    pub fn builder() -> crate::model::address_configuration::Builder {
        crate::model::address_configuration::Builder::default()
    }
}

/// Apple Push Notification Service channel definition.
///
/// Either a certificate and private key, or a token key with its key ID, bundle ID and team ID, authenticate the channel.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ApnsChannelRequest {
    pub bundle_id: std::option::Option<std::string::String>,
    pub certificate: std::option::Option<std::string::String>,
    /// `CERTIFICATE` or `TOKEN`
    pub default_authentication_method: std::option::Option<std::string::String>,
    pub enabled: std::option::Option<bool>,
    pub private_key: std::option::Option<std::string::String>,
    pub team_id: std::option::Option<std::string::String>,
    pub token_key: std::option::Option<std::string::String>,
    pub token_key_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ApnsChannelRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ApnsChannelRequest");
        formatter.field("bundle_id", &self.bundle_id);
        formatter.field("certificate", &"*** Sensitive Data Redacted ***");
        formatter.field("default_authentication_method", &self.default_authentication_method);
        formatter.field("enabled", &self.enabled);
        formatter.field("private_key", &"*** Sensitive Data Redacted ***");
        formatter.field("team_id", &self.team_id);
        formatter.field("token_key", &"*** Sensitive Data Redacted ***");
        formatter.field("token_key_id", &self.token_key_id);
        formatter.finish()
    }
}
/// See [`ApnsChannelRequest`](crate::model::ApnsChannelRequest)
pub mod apns_channel_request {
    /// A builder for [`ApnsChannelRequest`](crate::model::ApnsChannelRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) bundle_id: std::option::Option<std::string::String>,
        pub(crate) certificate: std::option::Option<std::string::String>,
        pub(crate) default_authentication_method: std::option::Option<std::string::String>,
        pub(crate) enabled: std::option::Option<bool>,
        pub(crate) private_key: std::option::Option<std::string::String>,
        pub(crate) team_id: std::option::Option<std::string::String>,
        pub(crate) token_key: std::option::Option<std::string::String>,
        pub(crate) token_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn bundle_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.bundle_id = Some(input.into());
            self
        }
        pub fn set_bundle_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bundle_id = input;
            self
        }
        pub fn certificate(mut self, input: impl Into<std::string::String>) -> Self {
            self.certificate = Some(input.into());
            self
        }
        pub fn set_certificate(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.certificate = input;
            self
        }
        /// `CERTIFICATE` or `TOKEN`
        pub fn default_authentication_method(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_authentication_method = Some(input.into());
            self
        }
        pub fn set_default_authentication_method(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_authentication_method = input;
            self
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn private_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.private_key = Some(input.into());
            self
        }
        pub fn set_private_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.private_key = input;
            self
        }
        pub fn team_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.team_id = Some(input.into());
            self
        }
        pub fn set_team_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.team_id = input;
            self
        }
        pub fn token_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.token_key = Some(input.into());
            self
        }
        pub fn set_token_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token_key = input;
            self
        }
        pub fn token_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.token_key_id = Some(input.into());
            self
        }
        pub fn set_token_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ApnsChannelRequest`](crate::model::ApnsChannelRequest)
        pub fn build(self) -> crate::model::ApnsChannelRequest {
            crate::model::ApnsChannelRequest {
                bundle_id: self.bundle_id,
                certificate: self.certificate,
                default_authentication_method: self.default_authentication_method,
                enabled: self.enabled,
                private_key: self.private_key,
                team_id: self.team_id,
                token_key: self.token_key,
                token_key_id: self.token_key_id,
            }
        }
    }
    impl std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("bundle_id", &self.bundle_id);
            formatter.field("certificate", &"*** Sensitive Data Redacted ***");
            formatter.field("default_authentication_method", &self.default_authentication_method);
            formatter.field("enabled", &self.enabled);
            formatter.field("private_key", &"*** Sensitive Data Redacted ***");
            formatter.field("team_id", &self.team_id);
            formatter.field("token_key", &"*** Sensitive Data Redacted ***");
            formatter.field("token_key_id", &self.token_key_id);
            formatter.finish()
        }
    }
}
impl ApnsChannelRequest {
    /// Creates a new builder-style object to manufacture [`ApnsChannelRequest`](crate::model::ApnsChannelRequest)
    pub fn builder() -> crate::model::apns_channel_request::Builder {
        crate::model::apns_channel_request::Builder::default()
    }
}

/// Apple Push Notification Service channel definition as stored by the service.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ApnsChannelResponse {
    pub application_id: std::option::Option<std::string::String>,
    pub creation_date: std::option::Option<std::string::String>,
    pub default_authentication_method: std::option::Option<std::string::String>,
    pub enabled: std::option::Option<bool>,
    pub has_credential: std::option::Option<bool>,
    pub has_token_key: std::option::Option<bool>,
    pub id: std::option::Option<std::string::String>,
    pub is_archived: std::option::Option<bool>,
    pub last_modified_by: std::option::Option<std::string::String>,
    pub last_modified_date: std::option::Option<std::string::String>,
    pub platform: std::option::Option<std::string::String>,
    pub version: std::option::Option<i32>,
}
impl std::fmt::Debug for ApnsChannelResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ApnsChannelResponse");
        formatter.field("application_id", &self.application_id);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("default_authentication_method", &self.default_authentication_method);
        formatter.field("enabled", &self.enabled);
        formatter.field("has_credential", &self.has_credential);
        formatter.field("has_token_key", &self.has_token_key);
        formatter.field("id", &self.id);
        formatter.field("is_archived", &self.is_archived);
        formatter.field("last_modified_by", &self.last_modified_by);
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("platform", &self.platform);
        formatter.field("version", &self.version);
        formatter.finish()
    }
}
/// See [`ApnsChannelResponse`](crate::model::ApnsChannelResponse)
pub mod apns_channel_response {
    /// A builder for [`ApnsChannelResponse`](crate::model::ApnsChannelResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) default_authentication_method: std::option::Option<std::string::String>,
        pub(crate) enabled: std::option::Option<bool>,
        pub(crate) has_credential: std::option::Option<bool>,
        pub(crate) has_token_key: std::option::Option<bool>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) is_archived: std::option::Option<bool>,
        pub(crate) last_modified_by: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) platform: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<i32>,
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
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn default_authentication_method(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_authentication_method = Some(input.into());
            self
        }
        pub fn set_default_authentication_method(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_authentication_method = input;
            self
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn has_token_key(mut self, input: bool) -> Self {
            self.has_token_key = Some(input);
            self
        }
        pub fn set_has_token_key(mut self, input: std::option::Option<bool>) -> Self {
            self.has_token_key = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn last_modified_by(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_by = Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn platform(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform = input;
            self
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`ApnsChannelResponse`](crate::model::ApnsChannelResponse)
        pub fn build(self) -> crate::model::ApnsChannelResponse {
            crate::model::ApnsChannelResponse {
                application_id: self.application_id,
                creation_date: self.creation_date,
                default_authentication_method: self.default_authentication_method,
                enabled: self.enabled,
                has_credential: self.has_credential,
                has_token_key: self.has_token_key,
                id: self.id,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                platform: self.platform,
                version: self.version,
            }
        }
    }
}
impl ApnsChannelResponse {
    /// Creates a new builder-style object to manufacture [`ApnsChannelResponse`](crate::model::ApnsChannelResponse)
    pub fn builder() -> crate::model::apns_channel_response::Builder {
        crate::model::apns_channel_response::Builder::default()
    }
}

/// Settings for a one-time message sent through the APNs channel.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ApnsMessage {
    pub action: std::option::Option<crate::model::Action>,
    pub badge: std::option::Option<i32>,
    pub body: std::option::Option<std::string::String>,
    pub category: std::option::Option<std::string::String>,
    pub collapse_id: std::option::Option<std::string::String>,
    pub data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub media_url: std::option::Option<std::string::String>,
    pub preferred_authentication_method: std::option::Option<std::string::String>,
    pub priority: std::option::Option<std::string::String>,
    pub raw_content: std::option::Option<std::string::String>,
    pub silent_push: std::option::Option<bool>,
    pub sound: std::option::Option<std::string::String>,
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    pub thread_id: std::option::Option<std::string::String>,
    pub time_to_live: std::option::Option<i32>,
    pub title: std::option::Option<std::string::String>,
    pub url: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ApnsMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ApnsMessage");
        formatter.field("action", &self.action);
        formatter.field("badge", &self.badge);
        formatter.field("body", &self.body);
        formatter.field("category", &self.category);
        formatter.field("collapse_id", &self.collapse_id);
        formatter.field("data", &self.data);
        formatter.field("media_url", &self.media_url);
        formatter.field("preferred_authentication_method", &self.preferred_authentication_method);
        formatter.field("priority", &self.priority);
        formatter.field("raw_content", &self.raw_content);
        formatter.field("silent_push", &self.silent_push);
        formatter.field("sound", &self.sound);
        formatter.field("substitutions", &self.substitutions);
        formatter.field("thread_id", &self.thread_id);
        formatter.field("time_to_live", &self.time_to_live);
        formatter.field("title", &self.title);
        formatter.field("url", &self.url);
        formatter.finish()
    }
}
/// See [`ApnsMessage`](crate::model::ApnsMessage)
pub mod apns_message {
    /// A builder for [`ApnsMessage`](crate::model::ApnsMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: std::option::Option<crate::model::Action>,
        pub(crate) badge: std::option::Option<i32>,
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) category: std::option::Option<std::string::String>,
        pub(crate) collapse_id: std::option::Option<std::string::String>,
        pub(crate) data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) media_url: std::option::Option<std::string::String>,
        pub(crate) preferred_authentication_method: std::option::Option<std::string::String>,
        pub(crate) priority: std::option::Option<std::string::String>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) silent_push: std::option::Option<bool>,
        pub(crate) sound: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) thread_id: std::option::Option<std::string::String>,
        pub(crate) time_to_live: std::option::Option<i32>,
        pub(crate) title: std::option::Option<std::string::String>,
        pub(crate) url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = Some(input);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn badge(mut self, input: i32) -> Self {
            self.badge = Some(input);
            self
        }
        pub fn set_badge(mut self, input: std::option::Option<i32>) -> Self {
            self.badge = input;
            self
        }
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn category(mut self, input: impl Into<std::string::String>) -> Self {
            self.category = Some(input.into());
            self
        }
        pub fn set_category(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.category = input;
            self
        }
        pub fn collapse_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.collapse_id = Some(input.into());
            self
        }
        pub fn set_collapse_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.collapse_id = input;
            self
        }
        pub fn data(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.data.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.data = Some(hash_map);
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.data = input;
            self
        }
        pub fn media_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.media_url = Some(input.into());
            self
        }
        pub fn set_media_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.media_url = input;
            self
        }
        pub fn preferred_authentication_method(mut self, input: impl Into<std::string::String>) -> Self {
            self.preferred_authentication_method = Some(input.into());
            self
        }
        pub fn set_preferred_authentication_method(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.preferred_authentication_method = input;
            self
        }
        pub fn priority(mut self, input: impl Into<std::string::String>) -> Self {
            self.priority = Some(input.into());
            self
        }
        pub fn set_priority(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.priority = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        pub fn sound(mut self, input: impl Into<std::string::String>) -> Self {
            self.sound = Some(input.into());
            self
        }
        pub fn set_sound(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sound = input;
            self
        }
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn thread_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.thread_id = Some(input.into());
            self
        }
        pub fn set_thread_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.thread_id = input;
            self
        }
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = Some(input);
            self
        }
        pub fn set_time_to_live(mut self, input: std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        /// Consumes the builder and constructs a [`ApnsMessage`](crate::model::ApnsMessage)
        pub fn build(self) -> crate::model::ApnsMessage {
            crate::model::ApnsMessage {
                action: self.action,
                badge: self.badge,
                body: self.body,
                category: self.category,
                collapse_id: self.collapse_id,
                data: self.data,
                media_url: self.media_url,
                preferred_authentication_method: self.preferred_authentication_method,
                priority: self.priority,
                raw_content: self.raw_content,
                silent_push: self.silent_push,
                sound: self.sound,
                substitutions: self.substitutions,
                thread_id: self.thread_id,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}
impl ApnsMessage {
    /// Creates a new builder-style object to manufacture [`ApnsMessage`](crate::model::ApnsMessage)
    pub fn builder() -> crate::model::apns_message::Builder {
        crate::model::apns_message::Builder::default()
    }
}

/// Application settings
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ApplicationSettingsResource {
    pub application_id: std::option::Option<std::string::String>,
    pub campaign_hook: std::option::Option<crate::model::CampaignHook>,
    pub last_modified_date: std::option::Option<std::string::String>,
    pub limits: std::option::Option<crate::model::CampaignLimits>,
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
}
impl std::fmt::Debug for ApplicationSettingsResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ApplicationSettingsResource");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_hook", &self.campaign_hook);
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("limits", &self.limits);
        formatter.field("quiet_time", &self.quiet_time);
        formatter.finish()
    }
}
/// See [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource)
pub mod application_settings_resource {
    /// A builder for [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_hook: std::option::Option<crate::model::CampaignHook>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) limits: std::option::Option<crate::model::CampaignLimits>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
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
        pub fn campaign_hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.campaign_hook = Some(input);
            self
        }
        pub fn set_campaign_hook(mut self, input: std::option::Option<crate::model::CampaignHook>) -> Self {
            self.campaign_hook = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        /// Consumes the builder and constructs a [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource)
        pub fn build(self) -> crate::model::ApplicationSettingsResource {
            crate::model::ApplicationSettingsResource {
                application_id: self.application_id,
                campaign_hook: self.campaign_hook,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                quiet_time: self.quiet_time,
            }
        }
    }
}
impl ApplicationSettingsResource {
    /// Creates a new builder-style object to manufacture [`ApplicationSettingsResource`](crate::model::ApplicationSettingsResource)
    pub fn builder() -> crate::model::application_settings_resource::Builder {
        crate::model::application_settings_resource::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct AttributeDimension {
    pub attribute_type: std::option::Option<crate::model::AttributeType>,
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for AttributeDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("AttributeDimension");
        formatter.field("attribute_type", &self.attribute_type);
        formatter.field("values", &self.values);
        formatter.finish()
    }
}
/// See [`AttributeDimension`](crate::model::AttributeDimension)
pub mod attribute_dimension {
    /// A builder for [`AttributeDimension`](crate::model::AttributeDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attribute_type: std::option::Option<crate::model::AttributeType>,
        pub(crate) values: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn attribute_type(mut self, input: crate::model::AttributeType) -> Self {
            self.attribute_type = Some(input);
            self
        }
        pub fn set_attribute_type(mut self, input: std::option::Option<crate::model::AttributeType>) -> Self {
            self.attribute_type = input;
            self
        }
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// Consumes the builder and constructs a [`AttributeDimension`](crate::model::AttributeDimension)
        pub fn build(self) -> crate::model::AttributeDimension {
            crate::model::AttributeDimension {
                attribute_type: self.attribute_type,
                values: self.values,
            }
        }
    }
}
impl AttributeDimension {
    /// Creates a new builder-style object to manufacture [`AttributeDimension`](crate::model::AttributeDimension)
    pub fn builder() -> crate::model::attribute_dimension::Builder {
        crate::model::attribute_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum AttributeType {
    Inclusive,
    Exclusive,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for AttributeType {
    fn from(s: &str) -> Self {
        match s {
            "INCLUSIVE" => AttributeType::Inclusive,
            "EXCLUSIVE" => AttributeType::Exclusive,
            other => AttributeType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AttributeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AttributeType::from(s))
    }
}
impl AttributeType {
    pub fn as_str(&self) -> &str {
        match self {
            AttributeType::Inclusive => "INCLUSIVE",
            AttributeType::Exclusive => "EXCLUSIVE",
            AttributeType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["INCLUSIVE", "EXCLUSIVE"]
    }
}
impl AsRef<str> for AttributeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Rows of KPI results
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BaseKpiResult {
    pub rows: std::option::Option<std::vec::Vec<crate::model::ResultRow>>,
}
impl std::fmt::Debug for BaseKpiResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BaseKpiResult");
        formatter.field("rows", &self.rows);
        formatter.finish()
    }
}
/// See [`BaseKpiResult`](crate::model::BaseKpiResult)
pub mod base_kpi_result {
    /// A builder for [`BaseKpiResult`](crate::model::BaseKpiResult)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) rows: std::option::Option<std::vec::Vec<crate::model::ResultRow>>,
    }
    impl Builder {
        pub fn rows(mut self, input: impl Into<crate::model::ResultRow>) -> Self {
            let mut v = self.rows.unwrap_or_default();
            v.push(input.into());
            self.rows = Some(v);
            self
        }
        pub fn set_rows(mut self, input: std::option::Option<std::vec::Vec<crate::model::ResultRow>>) -> Self {
            self.rows = input;
            self
        }
        /// Consumes the builder and constructs a [`BaseKpiResult`](crate::model::BaseKpiResult)
        pub fn build(self) -> crate::model::BaseKpiResult {
            crate::model::BaseKpiResult {
                rows: self.rows,
            }
        }
    }
}
impl BaseKpiResult {
    /// Creates a new builder-style object to manufacture [`BaseKpiResult`](crate::model::BaseKpiResult)
    pub fn builder() -> crate::model::base_kpi_result::Builder {
        crate::model::base_kpi_result::Builder::default()
    }
}

/// Values for a campaign key performance indicator over a date range
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignDateRangeKpiResponse {
    pub application_id: std::option::Option<std::string::String>,
    pub campaign_id: std::option::Option<std::string::String>,
    pub end_time: std::option::Option<smithy_types::Instant>,
    pub kpi_name: std::option::Option<std::string::String>,
    pub kpi_result: std::option::Option<crate::model::BaseKpiResult>,
    pub next_token: std::option::Option<std::string::String>,
    pub start_time: std::option::Option<smithy_types::Instant>,
}
impl std::fmt::Debug for CampaignDateRangeKpiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignDateRangeKpiResponse");
        formatter.field("application_id", &self.application_id);
        formatter.field("campaign_id", &self.campaign_id);
        formatter.field("end_time", &self.end_time);
        formatter.field("kpi_name", &self.kpi_name);
        formatter.field("kpi_result", &self.kpi_result);
        formatter.field("next_token", &self.next_token);
        formatter.field("start_time", &self.start_time);
        formatter.finish()
    }
}
/// See [`CampaignDateRangeKpiResponse`](crate::model::CampaignDateRangeKpiResponse)
pub mod campaign_date_range_kpi_response {
    /// A builder for [`CampaignDateRangeKpiResponse`](crate::model::CampaignDateRangeKpiResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) campaign_id: std::option::Option<std::string::String>,
        pub(crate) end_time: std::option::Option<smithy_types::Instant>,
        pub(crate) kpi_name: std::option::Option<std::string::String>,
        pub(crate) kpi_result: std::option::Option<crate::model::BaseKpiResult>,
        pub(crate) next_token: std::option::Option<std::string::String>,
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
        pub fn end_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = input;
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
        pub fn kpi_result(mut self, input: crate::model::BaseKpiResult) -> Self {
            self.kpi_result = Some(input);
            self
        }
        pub fn set_kpi_result(mut self, input: std::option::Option<crate::model::BaseKpiResult>) -> Self {
            self.kpi_result = input;
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
        pub fn start_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.start_time = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignDateRangeKpiResponse`](crate::model::CampaignDateRangeKpiResponse)
        pub fn build(self) -> crate::model::CampaignDateRangeKpiResponse {
            crate::model::CampaignDateRangeKpiResponse {
                application_id: self.application_id,
                campaign_id: self.campaign_id,
                end_time: self.end_time,
                kpi_name: self.kpi_name,
                kpi_result: self.kpi_result,
                next_token: self.next_token,
                start_time: self.start_time,
            }
        }
    }
}
impl CampaignDateRangeKpiResponse {
    /// Creates a new builder-style object to manufacture [`CampaignDateRangeKpiResponse`](crate::model::CampaignDateRangeKpiResponse)
    pub fn builder() -> crate::model::campaign_date_range_kpi_response::Builder {
        crate::model::campaign_date_range_kpi_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignEmailMessage {
    pub body: std::option::Option<std::string::String>,
    pub from_address: std::option::Option<std::string::String>,
    pub html_body: std::option::Option<std::string::String>,
    pub title: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CampaignEmailMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignEmailMessage");
        formatter.field("body", &self.body);
        formatter.field("from_address", &self.from_address);
        formatter.field("html_body", &self.html_body);
        formatter.field("title", &self.title);
        formatter.finish()
    }
}
/// See [`CampaignEmailMessage`](crate::model::CampaignEmailMessage)
pub mod campaign_email_message {
    /// A builder for [`CampaignEmailMessage`](crate::model::CampaignEmailMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) from_address: std::option::Option<std::string::String>,
        pub(crate) html_body: std::option::Option<std::string::String>,
        pub(crate) title: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn from_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.from_address = Some(input.into());
            self
        }
        pub fn set_from_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.from_address = input;
            self
        }
        pub fn html_body(mut self, input: impl Into<std::string::String>) -> Self {
            self.html_body = Some(input.into());
            self
        }
        pub fn set_html_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.html_body = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignEmailMessage`](crate::model::CampaignEmailMessage)
        pub fn build(self) -> crate::model::CampaignEmailMessage {
            crate::model::CampaignEmailMessage {
                body: self.body,
                from_address: self.from_address,
                html_body: self.html_body,
                title: self.title,
            }
        }
    }
}
impl CampaignEmailMessage {
    /// Creates a new builder-style object to manufacture [`CampaignEmailMessage`](crate::model::CampaignEmailMessage)
    pub fn builder() -> crate::model::campaign_email_message::Builder {
        crate::model::campaign_email_message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignEventFilter {
    pub dimensions: std::option::Option<crate::model::EventDimensions>,
    pub filter_type: std::option::Option<crate::model::FilterType>,
}
impl std::fmt::Debug for CampaignEventFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignEventFilter");
        formatter.field("dimensions", &self.dimensions);
        formatter.field("filter_type", &self.filter_type);
        formatter.finish()
    }
}
/// See [`CampaignEventFilter`](crate::model::CampaignEventFilter)
pub mod campaign_event_filter {
    /// A builder for [`CampaignEventFilter`](crate::model::CampaignEventFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimensions: std::option::Option<crate::model::EventDimensions>,
        pub(crate) filter_type: std::option::Option<crate::model::FilterType>,
    }
    impl Builder {
        pub fn dimensions(mut self, input: crate::model::EventDimensions) -> Self {
            self.dimensions = Some(input);
            self
        }
        pub fn set_dimensions(mut self, input: std::option::Option<crate::model::EventDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn filter_type(mut self, input: crate::model::FilterType) -> Self {
            self.filter_type = Some(input);
            self
        }
        pub fn set_filter_type(mut self, input: std::option::Option<crate::model::FilterType>) -> Self {
            self.filter_type = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignEventFilter`](crate::model::CampaignEventFilter)
        pub fn build(self) -> crate::model::CampaignEventFilter {
            crate::model::CampaignEventFilter {
                dimensions: self.dimensions,
                filter_type: self.filter_type,
            }
        }
    }
}
impl CampaignEventFilter {
    /// Creates a new builder-style object to manufacture [`CampaignEventFilter`](crate::model::CampaignEventFilter)
    pub fn builder() -> crate::model::campaign_event_filter::Builder {
        crate::model::campaign_event_filter::Builder::default()
    }
}

/// Lambda function or web hook invoked by campaigns
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignHook {
    pub lambda_function_name: std::option::Option<std::string::String>,
    pub mode: std::option::Option<crate::model::Mode>,
    pub web_url: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CampaignHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignHook");
        formatter.field("lambda_function_name", &self.lambda_function_name);
        formatter.field("mode", &self.mode);
        formatter.field("web_url", &self.web_url);
        formatter.finish()
    }
}
/// See [`CampaignHook`](crate::model::CampaignHook)
pub mod campaign_hook {
    /// A builder for [`CampaignHook`](crate::model::CampaignHook)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) lambda_function_name: std::option::Option<std::string::String>,
        pub(crate) mode: std::option::Option<crate::model::Mode>,
        pub(crate) web_url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn lambda_function_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.lambda_function_name = Some(input.into());
            self
        }
        pub fn set_lambda_function_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lambda_function_name = input;
            self
        }
        pub fn mode(mut self, input: crate::model::Mode) -> Self {
            self.mode = Some(input);
            self
        }
        pub fn set_mode(mut self, input: std::option::Option<crate::model::Mode>) -> Self {
            self.mode = input;
            self
        }
        pub fn web_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.web_url = Some(input.into());
            self
        }
        pub fn set_web_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.web_url = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignHook`](crate::model::CampaignHook)
        pub fn build(self) -> crate::model::CampaignHook {
            crate::model::CampaignHook {
                lambda_function_name: self.lambda_function_name,
                mode: self.mode,
                web_url: self.web_url,
            }
        }
    }
}
impl CampaignHook {
    /// Creates a new builder-style object to manufacture [`CampaignHook`](crate::model::CampaignHook)
    pub fn builder() -> crate::model::campaign_hook::Builder {
        crate::model::campaign_hook::Builder::default()
    }
}

/// Campaign limits settings.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignLimits {
    /// Maximum number of messages the campaign sends to an endpoint per day
    pub daily: std::option::Option<i32>,
    /// Seconds a campaign may run before it stops
    pub maximum_duration: std::option::Option<i32>,
    pub messages_per_second: std::option::Option<i32>,
    pub total: std::option::Option<i32>,
}
impl std::fmt::Debug for CampaignLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignLimits");
        formatter.field("daily", &self.daily);
        formatter.field("maximum_duration", &self.maximum_duration);
        formatter.field("messages_per_second", &self.messages_per_second);
        formatter.field("total", &self.total);
        formatter.finish()
    }
}
/// See [`CampaignLimits`](crate::model::CampaignLimits)
pub mod campaign_limits {
    /// A builder for [`CampaignLimits`](crate::model::CampaignLimits)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) daily: std::option::Option<i32>,
        pub(crate) maximum_duration: std::option::Option<i32>,
        pub(crate) messages_per_second: std::option::Option<i32>,
        pub(crate) total: std::option::Option<i32>,
    }
    impl Builder {
        /// Maximum number of messages the campaign sends to an endpoint per day
        pub fn daily(mut self, input: i32) -> Self {
            self.daily = Some(input);
            self
        }
        pub fn set_daily(mut self, input: std::option::Option<i32>) -> Self {
            self.daily = input;
            self
        }
        /// Seconds a campaign may run before it stops
        pub fn maximum_duration(mut self, input: i32) -> Self {
            self.maximum_duration = Some(input);
            self
        }
        pub fn set_maximum_duration(mut self, input: std::option::Option<i32>) -> Self {
            self.maximum_duration = input;
            self
        }
        pub fn messages_per_second(mut self, input: i32) -> Self {
            self.messages_per_second = Some(input);
            self
        }
        pub fn set_messages_per_second(mut self, input: std::option::Option<i32>) -> Self {
            self.messages_per_second = input;
            self
        }
        pub fn total(mut self, input: i32) -> Self {
            self.total = Some(input);
            self
        }
        pub fn set_total(mut self, input: std::option::Option<i32>) -> Self {
            self.total = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignLimits`](crate::model::CampaignLimits)
        pub fn build(self) -> crate::model::CampaignLimits {
            crate::model::CampaignLimits {
                daily: self.daily,
                maximum_duration: self.maximum_duration,
                messages_per_second: self.messages_per_second,
                total: self.total,
            }
        }
    }
}
impl CampaignLimits {
    /// Creates a new builder-style object to manufacture [`CampaignLimits`](crate::model::CampaignLimits)
    pub fn builder() -> crate::model::campaign_limits::Builder {
        crate::model::campaign_limits::Builder::default()
    }
}

/// Campaign definition
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignResponse {
    pub additional_treatments: std::option::Option<std::vec::Vec<crate::model::TreatmentResource>>,
    pub application_id: std::option::Option<std::string::String>,
    pub arn: std::option::Option<std::string::String>,
    pub creation_date: std::option::Option<std::string::String>,
    pub default_state: std::option::Option<crate::model::CampaignState>,
    pub description: std::option::Option<std::string::String>,
    pub holdout_percent: std::option::Option<i32>,
    pub hook: std::option::Option<crate::model::CampaignHook>,
    pub id: std::option::Option<std::string::String>,
    pub is_paused: std::option::Option<bool>,
    pub last_modified_date: std::option::Option<std::string::String>,
    pub limits: std::option::Option<crate::model::CampaignLimits>,
    pub message_configuration: std::option::Option<crate::model::MessageConfiguration>,
    pub name: std::option::Option<std::string::String>,
    pub schedule: std::option::Option<crate::model::Schedule>,
    pub segment_id: std::option::Option<std::string::String>,
    pub segment_version: std::option::Option<i32>,
    pub state: std::option::Option<crate::model::CampaignState>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub treatment_description: std::option::Option<std::string::String>,
    pub treatment_name: std::option::Option<std::string::String>,
    pub version: std::option::Option<i32>,
}
impl std::fmt::Debug for CampaignResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignResponse");
        formatter.field("additional_treatments", &self.additional_treatments);
        formatter.field("application_id", &self.application_id);
        formatter.field("arn", &self.arn);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("default_state", &self.default_state);
        formatter.field("description", &self.description);
        formatter.field("holdout_percent", &self.holdout_percent);
        formatter.field("hook", &self.hook);
        formatter.field("id", &self.id);
        formatter.field("is_paused", &self.is_paused);
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("limits", &self.limits);
        formatter.field("message_configuration", &self.message_configuration);
        formatter.field("name", &self.name);
        formatter.field("schedule", &self.schedule);
        formatter.field("segment_id", &self.segment_id);
        formatter.field("segment_version", &self.segment_version);
        formatter.field("state", &self.state);
        formatter.field("tags", &self.tags);
        formatter.field("treatment_description", &self.treatment_description);
        formatter.field("treatment_name", &self.treatment_name);
        formatter.field("version", &self.version);
        formatter.finish()
    }
}
/// See [`CampaignResponse`](crate::model::CampaignResponse)
pub mod campaign_response {
    /// A builder for [`CampaignResponse`](crate::model::CampaignResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) additional_treatments: std::option::Option<std::vec::Vec<crate::model::TreatmentResource>>,
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) default_state: std::option::Option<crate::model::CampaignState>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) holdout_percent: std::option::Option<i32>,
        pub(crate) hook: std::option::Option<crate::model::CampaignHook>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) is_paused: std::option::Option<bool>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) limits: std::option::Option<crate::model::CampaignLimits>,
        pub(crate) message_configuration: std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) schedule: std::option::Option<crate::model::Schedule>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) segment_version: std::option::Option<i32>,
        pub(crate) state: std::option::Option<crate::model::CampaignState>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) treatment_description: std::option::Option<std::string::String>,
        pub(crate) treatment_name: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<i32>,
    }
    impl Builder {
        pub fn additional_treatments(mut self, input: impl Into<crate::model::TreatmentResource>) -> Self {
            let mut v = self.additional_treatments.unwrap_or_default();
            v.push(input.into());
            self.additional_treatments = Some(v);
            self
        }
        pub fn set_additional_treatments(mut self, input: std::option::Option<std::vec::Vec<crate::model::TreatmentResource>>) -> Self {
            self.additional_treatments = input;
            self
        }
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn default_state(mut self, input: crate::model::CampaignState) -> Self {
            self.default_state = Some(input);
            self
        }
        pub fn set_default_state(mut self, input: std::option::Option<crate::model::CampaignState>) -> Self {
            self.default_state = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn holdout_percent(mut self, input: i32) -> Self {
            self.holdout_percent = Some(input);
            self
        }
        pub fn set_holdout_percent(mut self, input: std::option::Option<i32>) -> Self {
            self.holdout_percent = input;
            self
        }
        pub fn hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.hook = Some(input);
            self
        }
        pub fn set_hook(mut self, input: std::option::Option<crate::model::CampaignHook>) -> Self {
            self.hook = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn is_paused(mut self, input: bool) -> Self {
            self.is_paused = Some(input);
            self
        }
        pub fn set_is_paused(mut self, input: std::option::Option<bool>) -> Self {
            self.is_paused = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
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
        pub fn segment_version(mut self, input: i32) -> Self {
            self.segment_version = Some(input);
            self
        }
        pub fn set_segment_version(mut self, input: std::option::Option<i32>) -> Self {
            self.segment_version = input;
            self
        }
        pub fn state(mut self, input: crate::model::CampaignState) -> Self {
            self.state = Some(input);
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::CampaignState>) -> Self {
            self.state = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn treatment_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_description = Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn treatment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_name = Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignResponse`](crate::model::CampaignResponse)
        pub fn build(self) -> crate::model::CampaignResponse {
            crate::model::CampaignResponse {
                additional_treatments: self.additional_treatments,
                application_id: self.application_id,
                arn: self.arn,
                creation_date: self.creation_date,
                default_state: self.default_state,
                description: self.description,
                holdout_percent: self.holdout_percent,
                hook: self.hook,
                id: self.id,
                is_paused: self.is_paused,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                message_configuration: self.message_configuration,
                name: self.name,
                schedule: self.schedule,
                segment_id: self.segment_id,
                segment_version: self.segment_version,
                state: self.state,
                tags: self.tags,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
                version: self.version,
            }
        }
    }
}
impl CampaignResponse {
    /// Creates a new builder-style object to manufacture [`CampaignResponse`](crate::model::CampaignResponse)
    pub fn builder() -> crate::model::campaign_response::Builder {
        crate::model::campaign_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignSmsMessage {
    pub body: std::option::Option<std::string::String>,
    pub message_type: std::option::Option<crate::model::MessageType>,
    pub sender_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CampaignSmsMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignSmsMessage");
        formatter.field("body", &self.body);
        formatter.field("message_type", &self.message_type);
        formatter.field("sender_id", &self.sender_id);
        formatter.finish()
    }
}
/// See [`CampaignSmsMessage`](crate::model::CampaignSmsMessage)
pub mod campaign_sms_message {
    /// A builder for [`CampaignSmsMessage`](crate::model::CampaignSmsMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) message_type: std::option::Option<crate::model::MessageType>,
        pub(crate) sender_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn message_type(mut self, input: crate::model::MessageType) -> Self {
            self.message_type = Some(input);
            self
        }
        pub fn set_message_type(mut self, input: std::option::Option<crate::model::MessageType>) -> Self {
            self.message_type = input;
            self
        }
        pub fn sender_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.sender_id = Some(input.into());
            self
        }
        pub fn set_sender_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sender_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignSmsMessage`](crate::model::CampaignSmsMessage)
        pub fn build(self) -> crate::model::CampaignSmsMessage {
            crate::model::CampaignSmsMessage {
                body: self.body,
                message_type: self.message_type,
                sender_id: self.sender_id,
            }
        }
    }
}
impl CampaignSmsMessage {
    /// Creates a new builder-style object to manufacture [`CampaignSmsMessage`](crate::model::CampaignSmsMessage)
    pub fn builder() -> crate::model::campaign_sms_message::Builder {
        crate::model::campaign_sms_message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignState {
    pub campaign_status: std::option::Option<crate::model::CampaignStatus>,
}
impl std::fmt::Debug for CampaignState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignState");
        formatter.field("campaign_status", &self.campaign_status);
        formatter.finish()
    }
}
/// See [`CampaignState`](crate::model::CampaignState)
pub mod campaign_state {
    /// A builder for [`CampaignState`](crate::model::CampaignState)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_status: std::option::Option<crate::model::CampaignStatus>,
    }
    impl Builder {
        pub fn campaign_status(mut self, input: crate::model::CampaignStatus) -> Self {
            self.campaign_status = Some(input);
            self
        }
        pub fn set_campaign_status(mut self, input: std::option::Option<crate::model::CampaignStatus>) -> Self {
            self.campaign_status = input;
            self
        }
        /// Consumes the builder and constructs a [`CampaignState`](crate::model::CampaignState)
        pub fn build(self) -> crate::model::CampaignState {
            crate::model::CampaignState {
                campaign_status: self.campaign_status,
            }
        }
    }
}
impl CampaignState {
    /// Creates a new builder-style object to manufacture [`CampaignState`](crate::model::CampaignState)
    pub fn builder() -> crate::model::campaign_state::Builder {
        crate::model::campaign_state::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CampaignStatus {
    Scheduled,
    Executing,
    PendingNextRun,
    Completed,
    Paused,
    Deleted,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CampaignStatus {
    fn from(s: &str) -> Self {
        match s {
            "SCHEDULED" => CampaignStatus::Scheduled,
            "EXECUTING" => CampaignStatus::Executing,
            "PENDING_NEXT_RUN" => CampaignStatus::PendingNextRun,
            "COMPLETED" => CampaignStatus::Completed,
            "PAUSED" => CampaignStatus::Paused,
            "DELETED" => CampaignStatus::Deleted,
            other => CampaignStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CampaignStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CampaignStatus::from(s))
    }
}
impl CampaignStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CampaignStatus::Scheduled => "SCHEDULED",
            CampaignStatus::Executing => "EXECUTING",
            CampaignStatus::PendingNextRun => "PENDING_NEXT_RUN",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Deleted => "DELETED",
            CampaignStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["SCHEDULED", "EXECUTING", "PENDING_NEXT_RUN", "COMPLETED", "PAUSED", "DELETED"]
    }
}
impl AsRef<str> for CampaignStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CampaignsResponse {
    pub item: std::option::Option<std::vec::Vec<crate::model::CampaignResponse>>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CampaignsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CampaignsResponse");
        formatter.field("item", &self.item);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`CampaignsResponse`](crate::model::CampaignsResponse)
pub mod campaigns_response {
    /// A builder for [`CampaignsResponse`](crate::model::CampaignsResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::CampaignResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn item(mut self, input: impl Into<crate::model::CampaignResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::CampaignResponse>>) -> Self {
            self.item = input;
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
        /// Consumes the builder and constructs a [`CampaignsResponse`](crate::model::CampaignsResponse)
        pub fn build(self) -> crate::model::CampaignsResponse {
            crate::model::CampaignsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl CampaignsResponse {
    /// Creates a new builder-style object to manufacture [`CampaignsResponse`](crate::model::CampaignsResponse)
    pub fn builder() -> crate::model::campaigns_response::Builder {
        crate::model::campaigns_response::Builder::default()
    }
}

/// The channel used to reach an endpoint
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ChannelType {
    Gcm,
    Apns,
    ApnsSandbox,
    ApnsVoip,
    ApnsVoipSandbox,
    Adm,
    Sms,
    Voice,
    Email,
    Baidu,
    Custom,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ChannelType {
    fn from(s: &str) -> Self {
        match s {
            "GCM" => ChannelType::Gcm,
            "APNS" => ChannelType::Apns,
            "APNS_SANDBOX" => ChannelType::ApnsSandbox,
            "APNS_VOIP" => ChannelType::ApnsVoip,
            "APNS_VOIP_SANDBOX" => ChannelType::ApnsVoipSandbox,
            "ADM" => ChannelType::Adm,
            "SMS" => ChannelType::Sms,
            "VOICE" => ChannelType::Voice,
            "EMAIL" => ChannelType::Email,
            "BAIDU" => ChannelType::Baidu,
            "CUSTOM" => ChannelType::Custom,
            other => ChannelType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ChannelType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChannelType::from(s))
    }
}
impl ChannelType {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelType::Gcm => "GCM",
            ChannelType::Apns => "APNS",
            ChannelType::ApnsSandbox => "APNS_SANDBOX",
            ChannelType::ApnsVoip => "APNS_VOIP",
            ChannelType::ApnsVoipSandbox => "APNS_VOIP_SANDBOX",
            ChannelType::Adm => "ADM",
            ChannelType::Sms => "SMS",
            ChannelType::Voice => "VOICE",
            ChannelType::Email => "EMAIL",
            ChannelType::Baidu => "BAIDU",
            ChannelType::Custom => "CUSTOM",
            ChannelType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["GCM", "APNS", "APNS_SANDBOX", "APNS_VOIP", "APNS_VOIP_SANDBOX", "ADM", "SMS", "VOICE", "EMAIL", "BAIDU", "CUSTOM"]
    }
}
impl AsRef<str> for ChannelType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DefaultMessage {
    pub body: std::option::Option<std::string::String>,
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
}
impl std::fmt::Debug for DefaultMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DefaultMessage");
        formatter.field("body", &self.body);
        formatter.field("substitutions", &self.substitutions);
        formatter.finish()
    }
}
/// See [`DefaultMessage`](crate::model::DefaultMessage)
pub mod default_message {
    /// A builder for [`DefaultMessage`](crate::model::DefaultMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    }
    impl Builder {
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        /// Consumes the builder and constructs a [`DefaultMessage`](crate::model::DefaultMessage)
        pub fn build(self) -> crate::model::DefaultMessage {
            crate::model::DefaultMessage {
                body: self.body,
                substitutions: self.substitutions,
            }
        }
    }
}
impl DefaultMessage {
    /// Creates a new builder-style object to manufacture [`DefaultMessage`](crate::model::DefaultMessage)
    pub fn builder() -> crate::model::default_message::Builder {
        crate::model::default_message::Builder::default()
    }
}

/// Delivery outcome for a single message
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DeliveryStatus {
    Successful,
    Throttled,
    TemporaryFailure,
    PermanentFailure,
    UnknownFailure,
    OptOut,
    Duplicate,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DeliveryStatus {
    fn from(s: &str) -> Self {
        match s {
            "SUCCESSFUL" => DeliveryStatus::Successful,
            "THROTTLED" => DeliveryStatus::Throttled,
            "TEMPORARY_FAILURE" => DeliveryStatus::TemporaryFailure,
            "PERMANENT_FAILURE" => DeliveryStatus::PermanentFailure,
            "UNKNOWN_FAILURE" => DeliveryStatus::UnknownFailure,
            "OPT_OUT" => DeliveryStatus::OptOut,
            "DUPLICATE" => DeliveryStatus::Duplicate,
            other => DeliveryStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DeliveryStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DeliveryStatus::from(s))
    }
}
impl DeliveryStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DeliveryStatus::Successful => "SUCCESSFUL",
            DeliveryStatus::Throttled => "THROTTLED",
            DeliveryStatus::TemporaryFailure => "TEMPORARY_FAILURE",
            DeliveryStatus::PermanentFailure => "PERMANENT_FAILURE",
            DeliveryStatus::UnknownFailure => "UNKNOWN_FAILURE",
            DeliveryStatus::OptOut => "OPT_OUT",
            DeliveryStatus::Duplicate => "DUPLICATE",
            DeliveryStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["SUCCESSFUL", "THROTTLED", "TEMPORARY_FAILURE", "PERMANENT_FAILURE", "UNKNOWN_FAILURE", "OPT_OUT", "DUPLICATE"]
    }
}
impl AsRef<str> for DeliveryStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum DimensionType {
    Inclusive,
    Exclusive,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for DimensionType {
    fn from(s: &str) -> Self {
        match s {
            "INCLUSIVE" => DimensionType::Inclusive,
            "EXCLUSIVE" => DimensionType::Exclusive,
            other => DimensionType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DimensionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DimensionType::from(s))
    }
}
impl DimensionType {
    pub fn as_str(&self) -> &str {
        match self {
            DimensionType::Inclusive => "INCLUSIVE",
            DimensionType::Exclusive => "EXCLUSIVE",
            DimensionType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["INCLUSIVE", "EXCLUSIVE"]
    }
}
impl AsRef<str> for DimensionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DirectMessageConfiguration {
    pub apns_message: std::option::Option<crate::model::ApnsMessage>,
    pub default_message: std::option::Option<crate::model::DefaultMessage>,
    pub gcm_message: std::option::Option<crate::model::GcmMessage>,
    pub sms_message: std::option::Option<crate::model::SmsMessage>,
}
impl std::fmt::Debug for DirectMessageConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DirectMessageConfiguration");
        formatter.field("apns_message", &self.apns_message);
        formatter.field("default_message", &self.default_message);
        formatter.field("gcm_message", &self.gcm_message);
        formatter.field("sms_message", &self.sms_message);
        formatter.finish()
    }
}
/// See [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration)
pub mod direct_message_configuration {
    /// A builder for [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) apns_message: std::option::Option<crate::model::ApnsMessage>,
        pub(crate) default_message: std::option::Option<crate::model::DefaultMessage>,
        pub(crate) gcm_message: std::option::Option<crate::model::GcmMessage>,
        pub(crate) sms_message: std::option::Option<crate::model::SmsMessage>,
    }
    impl Builder {
        pub fn apns_message(mut self, input: crate::model::ApnsMessage) -> Self {
            self.apns_message = Some(input);
            self
        }
        pub fn set_apns_message(mut self, input: std::option::Option<crate::model::ApnsMessage>) -> Self {
            self.apns_message = input;
            self
        }
        pub fn default_message(mut self, input: crate::model::DefaultMessage) -> Self {
            self.default_message = Some(input);
            self
        }
        pub fn set_default_message(mut self, input: std::option::Option<crate::model::DefaultMessage>) -> Self {
            self.default_message = input;
            self
        }
        pub fn gcm_message(mut self, input: crate::model::GcmMessage) -> Self {
            self.gcm_message = Some(input);
            self
        }
        pub fn set_gcm_message(mut self, input: std::option::Option<crate::model::GcmMessage>) -> Self {
            self.gcm_message = input;
            self
        }
        pub fn sms_message(mut self, input: crate::model::SmsMessage) -> Self {
            self.sms_message = Some(input);
            self
        }
        pub fn set_sms_message(mut self, input: std::option::Option<crate::model::SmsMessage>) -> Self {
            self.sms_message = input;
            self
        }
        /// Consumes the builder and constructs a [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration)
        pub fn build(self) -> crate::model::DirectMessageConfiguration {
            crate::model::DirectMessageConfiguration {
                apns_message: self.apns_message,
                default_message: self.default_message,
                gcm_message: self.gcm_message,
                sms_message: self.sms_message,
            }
        }
    }
}
impl DirectMessageConfiguration {
    /// Creates a new builder-style object to manufacture [`DirectMessageConfiguration`](crate::model::DirectMessageConfiguration)
    pub fn builder() -> crate::model::direct_message_configuration::Builder {
        crate::model::direct_message_configuration::Builder::default()
    }
}

/// Recency window used by segment behaviors
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Duration {
    Hr24,
    Day7,
    Day14,
    Day30,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Duration {
    fn from(s: &str) -> Self {
        match s {
            "HR_24" => Duration::Hr24,
            "DAY_7" => Duration::Day7,
            "DAY_14" => Duration::Day14,
            "DAY_30" => Duration::Day30,
            other => Duration::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Duration {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Duration::from(s))
    }
}
impl Duration {
    pub fn as_str(&self) -> &str {
        match self {
            Duration::Hr24 => "HR_24",
            Duration::Day7 => "DAY_7",
            Duration::Day14 => "DAY_14",
            Duration::Day30 => "DAY_30",
            Duration::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["HR_24", "DAY_7", "DAY_14", "DAY_30"]
    }
}
impl AsRef<str> for Duration {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EmailMessageActivity {
    pub message_config: std::option::Option<crate::model::JourneyEmailMessage>,
    pub next_activity: std::option::Option<std::string::String>,
    pub template_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for EmailMessageActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EmailMessageActivity");
        formatter.field("message_config", &self.message_config);
        formatter.field("next_activity", &self.next_activity);
        formatter.field("template_name", &self.template_name);
        formatter.finish()
    }
}
/// See [`EmailMessageActivity`](crate::model::EmailMessageActivity)
pub mod email_message_activity {
    /// A builder for [`EmailMessageActivity`](crate::model::EmailMessageActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_config: std::option::Option<crate::model::JourneyEmailMessage>,
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) template_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message_config(mut self, input: crate::model::JourneyEmailMessage) -> Self {
            self.message_config = Some(input);
            self
        }
        pub fn set_message_config(mut self, input: std::option::Option<crate::model::JourneyEmailMessage>) -> Self {
            self.message_config = input;
            self
        }
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn template_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.template_name = Some(input.into());
            self
        }
        pub fn set_template_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.template_name = input;
            self
        }
        /// Consumes the builder and constructs a [`EmailMessageActivity`](crate::model::EmailMessageActivity)
        pub fn build(self) -> crate::model::EmailMessageActivity {
            crate::model::EmailMessageActivity {
                message_config: self.message_config,
                next_activity: self.next_activity,
                template_name: self.template_name,
            }
        }
    }
}
impl EmailMessageActivity {
    /// Creates a new builder-style object to manufacture [`EmailMessageActivity`](crate::model::EmailMessageActivity)
    pub fn builder() -> crate::model::email_message_activity::Builder {
        crate::model::email_message_activity::Builder::default()
    }
}

/// Endpoint update request
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointBatchItem {
    pub address: std::option::Option<std::string::String>,
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    pub channel_type: std::option::Option<crate::model::ChannelType>,
    pub demographic: std::option::Option<crate::model::EndpointDemographic>,
    pub effective_date: std::option::Option<std::string::String>,
    pub endpoint_status: std::option::Option<std::string::String>,
    pub id: std::option::Option<std::string::String>,
    pub location: std::option::Option<crate::model::EndpointLocation>,
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
    pub opt_out: std::option::Option<std::string::String>,
    pub request_id: std::option::Option<std::string::String>,
    pub user: std::option::Option<crate::model::EndpointUser>,
}
impl std::fmt::Debug for EndpointBatchItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointBatchItem");
        formatter.field("address", &self.address);
        formatter.field("attributes", &self.attributes);
        formatter.field("channel_type", &self.channel_type);
        formatter.field("demographic", &self.demographic);
        formatter.field("effective_date", &self.effective_date);
        formatter.field("endpoint_status", &self.endpoint_status);
        formatter.field("id", &self.id);
        formatter.field("location", &self.location);
        formatter.field("metrics", &self.metrics);
        formatter.field("opt_out", &self.opt_out);
        formatter.field("request_id", &self.request_id);
        formatter.field("user", &self.user);
        formatter.finish()
    }
}
/// See [`EndpointBatchItem`](crate::model::EndpointBatchItem)
pub mod endpoint_batch_item {
    /// A builder for [`EndpointBatchItem`](crate::model::EndpointBatchItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) channel_type: std::option::Option<crate::model::ChannelType>,
        pub(crate) demographic: std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: std::option::Option<std::string::String>,
        pub(crate) endpoint_status: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
        pub(crate) opt_out: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
        pub(crate) user: std::option::Option<crate::model::EndpointUser>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<std::string::String>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address = input;
            self
        }
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = Some(input);
            self
        }
        pub fn set_demographic(mut self, input: std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn effective_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.effective_date = Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn endpoint_status(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_status = Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = Some(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<f64>,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn opt_out(mut self, input: impl Into<std::string::String>) -> Self {
            self.opt_out = Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = Some(input);
            self
        }
        pub fn set_user(mut self, input: std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointBatchItem`](crate::model::EndpointBatchItem)
        pub fn build(self) -> crate::model::EndpointBatchItem {
            crate::model::EndpointBatchItem {
                address: self.address,
                attributes: self.attributes,
                channel_type: self.channel_type,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                id: self.id,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}
impl EndpointBatchItem {
    /// Creates a new builder-style object to manufacture [`EndpointBatchItem`](crate::model::EndpointBatchItem)
    pub fn builder() -> crate::model::endpoint_batch_item::Builder {
        crate::model::endpoint_batch_item::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointBatchRequest {
    pub item: std::option::Option<std::vec::Vec<crate::model::EndpointBatchItem>>,
}
impl std::fmt::Debug for EndpointBatchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointBatchRequest");
        formatter.field("item", &self.item);
        formatter.finish()
    }
}
/// See [`EndpointBatchRequest`](crate::model::EndpointBatchRequest)
pub mod endpoint_batch_request {
    /// A builder for [`EndpointBatchRequest`](crate::model::EndpointBatchRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::EndpointBatchItem>>,
    }
    impl Builder {
        pub fn item(mut self, input: impl Into<crate::model::EndpointBatchItem>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::EndpointBatchItem>>) -> Self {
            self.item = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointBatchRequest`](crate::model::EndpointBatchRequest)
        pub fn build(self) -> crate::model::EndpointBatchRequest {
            crate::model::EndpointBatchRequest {
                item: self.item,
            }
        }
    }
}
impl EndpointBatchRequest {
    /// Creates a new builder-style object to manufacture [`EndpointBatchRequest`](crate::model::EndpointBatchRequest)
    pub fn builder() -> crate::model::endpoint_batch_request::Builder {
        crate::model::endpoint_batch_request::Builder::default()
    }
}

/// Endpoint demographic data
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointDemographic {
    pub app_version: std::option::Option<std::string::String>,
    pub locale: std::option::Option<std::string::String>,
    pub make: std::option::Option<std::string::String>,
    pub model: std::option::Option<std::string::String>,
    pub model_version: std::option::Option<std::string::String>,
    pub platform: std::option::Option<std::string::String>,
    pub platform_version: std::option::Option<std::string::String>,
    pub timezone: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for EndpointDemographic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointDemographic");
        formatter.field("app_version", &self.app_version);
        formatter.field("locale", &self.locale);
        formatter.field("make", &self.make);
        formatter.field("model", &self.model);
        formatter.field("model_version", &self.model_version);
        formatter.field("platform", &self.platform);
        formatter.field("platform_version", &self.platform_version);
        formatter.field("timezone", &self.timezone);
        formatter.finish()
    }
}
/// See [`EndpointDemographic`](crate::model::EndpointDemographic)
pub mod endpoint_demographic {
    /// A builder for [`EndpointDemographic`](crate::model::EndpointDemographic)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) app_version: std::option::Option<std::string::String>,
        pub(crate) locale: std::option::Option<std::string::String>,
        pub(crate) make: std::option::Option<std::string::String>,
        pub(crate) model: std::option::Option<std::string::String>,
        pub(crate) model_version: std::option::Option<std::string::String>,
        pub(crate) platform: std::option::Option<std::string::String>,
        pub(crate) platform_version: std::option::Option<std::string::String>,
        pub(crate) timezone: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn app_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.app_version = Some(input.into());
            self
        }
        pub fn set_app_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.app_version = input;
            self
        }
        pub fn locale(mut self, input: impl Into<std::string::String>) -> Self {
            self.locale = Some(input.into());
            self
        }
        pub fn set_locale(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.locale = input;
            self
        }
        pub fn make(mut self, input: impl Into<std::string::String>) -> Self {
            self.make = Some(input.into());
            self
        }
        pub fn set_make(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.make = input;
            self
        }
        pub fn model(mut self, input: impl Into<std::string::String>) -> Self {
            self.model = Some(input.into());
            self
        }
        pub fn set_model(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model = input;
            self
        }
        pub fn model_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_version = Some(input.into());
            self
        }
        pub fn set_model_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_version = input;
            self
        }
        pub fn platform(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform = input;
            self
        }
        pub fn platform_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform_version = Some(input.into());
            self
        }
        pub fn set_platform_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform_version = input;
            self
        }
        pub fn timezone(mut self, input: impl Into<std::string::String>) -> Self {
            self.timezone = Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.timezone = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointDemographic`](crate::model::EndpointDemographic)
        pub fn build(self) -> crate::model::EndpointDemographic {
            crate::model::EndpointDemographic {
                app_version: self.app_version,
                locale: self.locale,
                make: self.make,
                model: self.model,
                model_version: self.model_version,
                platform: self.platform,
                platform_version: self.platform_version,
                timezone: self.timezone,
            }
        }
    }
}
impl EndpointDemographic {
    /// Creates a new builder-style object to manufacture [`EndpointDemographic`](crate::model::EndpointDemographic)
    pub fn builder() -> crate::model::endpoint_demographic::Builder {
        crate::model::endpoint_demographic::Builder::default()
    }
}

/// Endpoint location data
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointLocation {
    pub city: std::option::Option<std::string::String>,
    pub country: std::option::Option<std::string::String>,
    pub latitude: std::option::Option<f64>,
    pub longitude: std::option::Option<f64>,
    pub postal_code: std::option::Option<std::string::String>,
    pub region: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for EndpointLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointLocation");
        formatter.field("city", &self.city);
        formatter.field("country", &self.country);
        formatter.field("latitude", &self.latitude);
        formatter.field("longitude", &self.longitude);
        formatter.field("postal_code", &self.postal_code);
        formatter.field("region", &self.region);
        formatter.finish()
    }
}
/// See [`EndpointLocation`](crate::model::EndpointLocation)
pub mod endpoint_location {
    /// A builder for [`EndpointLocation`](crate::model::EndpointLocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) city: std::option::Option<std::string::String>,
        pub(crate) country: std::option::Option<std::string::String>,
        pub(crate) latitude: std::option::Option<f64>,
        pub(crate) longitude: std::option::Option<f64>,
        pub(crate) postal_code: std::option::Option<std::string::String>,
        pub(crate) region: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn city(mut self, input: impl Into<std::string::String>) -> Self {
            self.city = Some(input.into());
            self
        }
        pub fn set_city(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.city = input;
            self
        }
        pub fn country(mut self, input: impl Into<std::string::String>) -> Self {
            self.country = Some(input.into());
            self
        }
        pub fn set_country(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.country = input;
            self
        }
        pub fn latitude(mut self, input: f64) -> Self {
            self.latitude = Some(input);
            self
        }
        pub fn set_latitude(mut self, input: std::option::Option<f64>) -> Self {
            self.latitude = input;
            self
        }
        pub fn longitude(mut self, input: f64) -> Self {
            self.longitude = Some(input);
            self
        }
        pub fn set_longitude(mut self, input: std::option::Option<f64>) -> Self {
            self.longitude = input;
            self
        }
        pub fn postal_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.postal_code = Some(input.into());
            self
        }
        pub fn set_postal_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.postal_code = input;
            self
        }
        pub fn region(mut self, input: impl Into<std::string::String>) -> Self {
            self.region = Some(input.into());
            self
        }
        pub fn set_region(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.region = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointLocation`](crate::model::EndpointLocation)
        pub fn build(self) -> crate::model::EndpointLocation {
            crate::model::EndpointLocation {
                city: self.city,
                country: self.country,
                latitude: self.latitude,
                longitude: self.longitude,
                postal_code: self.postal_code,
                region: self.region,
            }
        }
    }
}
impl EndpointLocation {
    /// Creates a new builder-style object to manufacture [`EndpointLocation`](crate::model::EndpointLocation)
    pub fn builder() -> crate::model::endpoint_location::Builder {
        crate::model::endpoint_location::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointMessageResult {
    pub address: std::option::Option<std::string::String>,
    pub delivery_status: std::option::Option<crate::model::DeliveryStatus>,
    pub message_id: std::option::Option<std::string::String>,
    pub status_code: std::option::Option<i32>,
    pub status_message: std::option::Option<std::string::String>,
    pub updated_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for EndpointMessageResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointMessageResult");
        formatter.field("address", &self.address);
        formatter.field("delivery_status", &self.delivery_status);
        formatter.field("message_id", &self.message_id);
        formatter.field("status_code", &self.status_code);
        formatter.field("status_message", &self.status_message);
        formatter.field("updated_token", &self.updated_token);
        formatter.finish()
    }
}
/// See [`EndpointMessageResult`](crate::model::EndpointMessageResult)
pub mod endpoint_message_result {
    /// A builder for [`EndpointMessageResult`](crate::model::EndpointMessageResult)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: std::option::Option<std::string::String>,
        pub(crate) delivery_status: std::option::Option<crate::model::DeliveryStatus>,
        pub(crate) message_id: std::option::Option<std::string::String>,
        pub(crate) status_code: std::option::Option<i32>,
        pub(crate) status_message: std::option::Option<std::string::String>,
        pub(crate) updated_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<std::string::String>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address = input;
            self
        }
        pub fn delivery_status(mut self, input: crate::model::DeliveryStatus) -> Self {
            self.delivery_status = Some(input);
            self
        }
        pub fn set_delivery_status(mut self, input: std::option::Option<crate::model::DeliveryStatus>) -> Self {
            self.delivery_status = input;
            self
        }
        pub fn message_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.message_id = Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message_id = input;
            self
        }
        pub fn status_code(mut self, input: i32) -> Self {
            self.status_code = Some(input);
            self
        }
        pub fn set_status_code(mut self, input: std::option::Option<i32>) -> Self {
            self.status_code = input;
            self
        }
        pub fn status_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_message = Some(input.into());
            self
        }
        pub fn set_status_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        pub fn updated_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.updated_token = Some(input.into());
            self
        }
        pub fn set_updated_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.updated_token = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointMessageResult`](crate::model::EndpointMessageResult)
        pub fn build(self) -> crate::model::EndpointMessageResult {
            crate::model::EndpointMessageResult {
                address: self.address,
                delivery_status: self.delivery_status,
                message_id: self.message_id,
                status_code: self.status_code,
                status_message: self.status_message,
                updated_token: self.updated_token,
            }
        }
    }
}
impl EndpointMessageResult {
    /// Creates a new builder-style object to manufacture [`EndpointMessageResult`](crate::model::EndpointMessageResult)
    pub fn builder() -> crate::model::endpoint_message_result::Builder {
        crate::model::endpoint_message_result::Builder::default()
    }
}

/// Endpoint update request
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointRequest {
    pub address: std::option::Option<std::string::String>,
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    pub channel_type: std::option::Option<crate::model::ChannelType>,
    pub demographic: std::option::Option<crate::model::EndpointDemographic>,
    pub effective_date: std::option::Option<std::string::String>,
    pub endpoint_status: std::option::Option<std::string::String>,
    pub location: std::option::Option<crate::model::EndpointLocation>,
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
    /// `ALL` to opt out of all messages, `NONE` to receive them
    pub opt_out: std::option::Option<std::string::String>,
    pub request_id: std::option::Option<std::string::String>,
    pub user: std::option::Option<crate::model::EndpointUser>,
}
impl std::fmt::Debug for EndpointRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointRequest");
        formatter.field("address", &self.address);
        formatter.field("attributes", &self.attributes);
        formatter.field("channel_type", &self.channel_type);
        formatter.field("demographic", &self.demographic);
        formatter.field("effective_date", &self.effective_date);
        formatter.field("endpoint_status", &self.endpoint_status);
        formatter.field("location", &self.location);
        formatter.field("metrics", &self.metrics);
        formatter.field("opt_out", &self.opt_out);
        formatter.field("request_id", &self.request_id);
        formatter.field("user", &self.user);
        formatter.finish()
    }
}
/// See [`EndpointRequest`](crate::model::EndpointRequest)
pub mod endpoint_request {
    /// A builder for [`EndpointRequest`](crate::model::EndpointRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) channel_type: std::option::Option<crate::model::ChannelType>,
        pub(crate) demographic: std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: std::option::Option<std::string::String>,
        pub(crate) endpoint_status: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
        pub(crate) opt_out: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
        pub(crate) user: std::option::Option<crate::model::EndpointUser>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<std::string::String>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address = input;
            self
        }
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = Some(input);
            self
        }
        pub fn set_demographic(mut self, input: std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn effective_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.effective_date = Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn endpoint_status(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_status = Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = Some(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<f64>,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        /// `ALL` to opt out of all messages, `NONE` to receive them
        pub fn opt_out(mut self, input: impl Into<std::string::String>) -> Self {
            self.opt_out = Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = Some(input);
            self
        }
        pub fn set_user(mut self, input: std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointRequest`](crate::model::EndpointRequest)
        pub fn build(self) -> crate::model::EndpointRequest {
            crate::model::EndpointRequest {
                address: self.address,
                attributes: self.attributes,
                channel_type: self.channel_type,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}
impl EndpointRequest {
    /// Creates a new builder-style object to manufacture [`EndpointRequest`](crate::model::EndpointRequest)
    pub fn builder() -> crate::model::endpoint_request::Builder {
        crate::model::endpoint_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointResponse {
    pub address: std::option::Option<std::string::String>,
    pub application_id: std::option::Option<std::string::String>,
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    pub channel_type: std::option::Option<crate::model::ChannelType>,
    pub cohort_id: std::option::Option<std::string::String>,
    pub creation_date: std::option::Option<std::string::String>,
    pub demographic: std::option::Option<crate::model::EndpointDemographic>,
    pub effective_date: std::option::Option<std::string::String>,
    pub endpoint_status: std::option::Option<std::string::String>,
    pub id: std::option::Option<std::string::String>,
    pub location: std::option::Option<crate::model::EndpointLocation>,
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
    pub opt_out: std::option::Option<std::string::String>,
    pub request_id: std::option::Option<std::string::String>,
    pub user: std::option::Option<crate::model::EndpointUser>,
}
impl std::fmt::Debug for EndpointResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointResponse");
        formatter.field("address", &self.address);
        formatter.field("application_id", &self.application_id);
        formatter.field("attributes", &self.attributes);
        formatter.field("channel_type", &self.channel_type);
        formatter.field("cohort_id", &self.cohort_id);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("demographic", &self.demographic);
        formatter.field("effective_date", &self.effective_date);
        formatter.field("endpoint_status", &self.endpoint_status);
        formatter.field("id", &self.id);
        formatter.field("location", &self.location);
        formatter.field("metrics", &self.metrics);
        formatter.field("opt_out", &self.opt_out);
        formatter.field("request_id", &self.request_id);
        formatter.field("user", &self.user);
        formatter.finish()
    }
}
/// See [`EndpointResponse`](crate::model::EndpointResponse)
pub mod endpoint_response {
    /// A builder for [`EndpointResponse`](crate::model::EndpointResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) address: std::option::Option<std::string::String>,
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) channel_type: std::option::Option<crate::model::ChannelType>,
        pub(crate) cohort_id: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) demographic: std::option::Option<crate::model::EndpointDemographic>,
        pub(crate) effective_date: std::option::Option<std::string::String>,
        pub(crate) endpoint_status: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) location: std::option::Option<crate::model::EndpointLocation>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, f64>>,
        pub(crate) opt_out: std::option::Option<std::string::String>,
        pub(crate) request_id: std::option::Option<std::string::String>,
        pub(crate) user: std::option::Option<crate::model::EndpointUser>,
    }
    impl Builder {
        pub fn address(mut self, input: impl Into<std::string::String>) -> Self {
            self.address = Some(input.into());
            self
        }
        pub fn set_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.address = input;
            self
        }
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn channel_type(mut self, input: crate::model::ChannelType) -> Self {
            self.channel_type = Some(input);
            self
        }
        pub fn set_channel_type(mut self, input: std::option::Option<crate::model::ChannelType>) -> Self {
            self.channel_type = input;
            self
        }
        pub fn cohort_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.cohort_id = Some(input.into());
            self
        }
        pub fn set_cohort_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cohort_id = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn demographic(mut self, input: crate::model::EndpointDemographic) -> Self {
            self.demographic = Some(input);
            self
        }
        pub fn set_demographic(mut self, input: std::option::Option<crate::model::EndpointDemographic>) -> Self {
            self.demographic = input;
            self
        }
        pub fn effective_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.effective_date = Some(input.into());
            self
        }
        pub fn set_effective_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.effective_date = input;
            self
        }
        pub fn endpoint_status(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_status = Some(input.into());
            self
        }
        pub fn set_endpoint_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn location(mut self, input: crate::model::EndpointLocation) -> Self {
            self.location = Some(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<crate::model::EndpointLocation>) -> Self {
            self.location = input;
            self
        }
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<f64>,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, f64>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn opt_out(mut self, input: impl Into<std::string::String>) -> Self {
            self.opt_out = Some(input.into());
            self
        }
        pub fn set_opt_out(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.opt_out = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn user(mut self, input: crate::model::EndpointUser) -> Self {
            self.user = Some(input);
            self
        }
        pub fn set_user(mut self, input: std::option::Option<crate::model::EndpointUser>) -> Self {
            self.user = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointResponse`](crate::model::EndpointResponse)
        pub fn build(self) -> crate::model::EndpointResponse {
            crate::model::EndpointResponse {
                address: self.address,
                application_id: self.application_id,
                attributes: self.attributes,
                channel_type: self.channel_type,
                cohort_id: self.cohort_id,
                creation_date: self.creation_date,
                demographic: self.demographic,
                effective_date: self.effective_date,
                endpoint_status: self.endpoint_status,
                id: self.id,
                location: self.location,
                metrics: self.metrics,
                opt_out: self.opt_out,
                request_id: self.request_id,
                user: self.user,
            }
        }
    }
}
impl EndpointResponse {
    /// Creates a new builder-style object to manufacture [`EndpointResponse`](crate::model::EndpointResponse)
    pub fn builder() -> crate::model::endpoint_response::Builder {
        crate::model::endpoint_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointSendConfiguration {
    pub body_override: std::option::Option<std::string::String>,
    pub context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub raw_content: std::option::Option<std::string::String>,
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    pub title_override: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for EndpointSendConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointSendConfiguration");
        formatter.field("body_override", &self.body_override);
        formatter.field("context", &self.context);
        formatter.field("raw_content", &self.raw_content);
        formatter.field("substitutions", &self.substitutions);
        formatter.field("title_override", &self.title_override);
        formatter.finish()
    }
}
/// See [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration)
pub mod endpoint_send_configuration {
    /// A builder for [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body_override: std::option::Option<std::string::String>,
        pub(crate) context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) title_override: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn body_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.body_override = Some(input.into());
            self
        }
        pub fn set_body_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body_override = input;
            self
        }
        pub fn context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.context = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        pub fn title_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.title_override = Some(input.into());
            self
        }
        pub fn set_title_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title_override = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration)
        pub fn build(self) -> crate::model::EndpointSendConfiguration {
            crate::model::EndpointSendConfiguration {
                body_override: self.body_override,
                context: self.context,
                raw_content: self.raw_content,
                substitutions: self.substitutions,
                title_override: self.title_override,
            }
        }
    }
}
impl EndpointSendConfiguration {
    /// Creates a new builder-style object to manufacture [`EndpointSendConfiguration`](crate::model::EndpointSendConfiguration)
    pub fn builder() -> crate::model::endpoint_send_configuration::Builder {
        crate::model::endpoint_send_configuration::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EndpointUser {
    pub user_attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    pub user_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for EndpointUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EndpointUser");
        formatter.field("user_attributes", &self.user_attributes);
        formatter.field("user_id", &self.user_id);
        formatter.finish()
    }
}
/// See [`EndpointUser`](crate::model::EndpointUser)
pub mod endpoint_user {
    /// A builder for [`EndpointUser`](crate::model::EndpointUser)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) user_attributes: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) user_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn user_attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.user_attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.user_attributes = Some(hash_map);
            self
        }
        pub fn set_user_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.user_attributes = input;
            self
        }
        pub fn user_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.user_id = Some(input.into());
            self
        }
        pub fn set_user_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.user_id = input;
            self
        }
        /// Consumes the builder and constructs a [`EndpointUser`](crate::model::EndpointUser)
        pub fn build(self) -> crate::model::EndpointUser {
            crate::model::EndpointUser {
                user_attributes: self.user_attributes,
                user_id: self.user_id,
            }
        }
    }
}
impl EndpointUser {
    /// Creates a new builder-style object to manufacture [`EndpointUser`](crate::model::EndpointUser)
    pub fn builder() -> crate::model::endpoint_user::Builder {
        crate::model::endpoint_user::Builder::default()
    }
}

/// Event attributes, type and metrics that trigger an event-based campaign
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EventDimensions {
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
    pub event_type: std::option::Option<crate::model::SetDimension>,
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>,
}
impl std::fmt::Debug for EventDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EventDimensions");
        formatter.field("attributes", &self.attributes);
        formatter.field("event_type", &self.event_type);
        formatter.field("metrics", &self.metrics);
        formatter.finish()
    }
}
/// See [`EventDimensions`](crate::model::EventDimensions)
pub mod event_dimensions {
    /// A builder for [`EventDimensions`](crate::model::EventDimensions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
        pub(crate) event_type: std::option::Option<crate::model::SetDimension>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>,
    }
    impl Builder {
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeDimension>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn event_type(mut self, input: crate::model::SetDimension) -> Self {
            self.event_type = Some(input);
            self
        }
        pub fn set_event_type(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.event_type = input;
            self
        }
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::MetricDimension>,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>) -> Self {
            self.metrics = input;
            self
        }
        /// Consumes the builder and constructs a [`EventDimensions`](crate::model::EventDimensions)
        pub fn build(self) -> crate::model::EventDimensions {
            crate::model::EventDimensions {
                attributes: self.attributes,
                event_type: self.event_type,
                metrics: self.metrics,
            }
        }
    }
}
impl EventDimensions {
    /// Creates a new builder-style object to manufacture [`EventDimensions`](crate::model::EventDimensions)
    pub fn builder() -> crate::model::event_dimensions::Builder {
        crate::model::event_dimensions::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FilterType {
    System,
    Endpoint,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FilterType {
    fn from(s: &str) -> Self {
        match s {
            "SYSTEM" => FilterType::System,
            "ENDPOINT" => FilterType::Endpoint,
            other => FilterType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FilterType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FilterType::from(s))
    }
}
impl FilterType {
    pub fn as_str(&self) -> &str {
        match self {
            FilterType::System => "SYSTEM",
            FilterType::Endpoint => "ENDPOINT",
            FilterType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["SYSTEM", "ENDPOINT"]
    }
}
impl AsRef<str> for FilterType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Format {
    Csv,
    Json,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Format {
    fn from(s: &str) -> Self {
        match s {
            "CSV" => Format::Csv,
            "JSON" => Format::Json,
            other => Format::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Format {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Format::from(s))
    }
}
impl Format {
    pub fn as_str(&self) -> &str {
        match self {
            Format::Csv => "CSV",
            Format::Json => "JSON",
            Format::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["CSV", "JSON"]
    }
}
impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Frequency {
    Once,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Event,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Frequency {
    fn from(s: &str) -> Self {
        match s {
            "ONCE" => Frequency::Once,
            "HOURLY" => Frequency::Hourly,
            "DAILY" => Frequency::Daily,
            "WEEKLY" => Frequency::Weekly,
            "MONTHLY" => Frequency::Monthly,
            "EVENT" => Frequency::Event,
            other => Frequency::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Frequency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Frequency::from(s))
    }
}
impl Frequency {
    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Once => "ONCE",
            Frequency::Hourly => "HOURLY",
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Event => "EVENT",
            Frequency::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ONCE", "HOURLY", "DAILY", "WEEKLY", "MONTHLY", "EVENT"]
    }
}
impl AsRef<str> for Frequency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Google Cloud Messaging credentials
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GcmChannelRequest {
    pub api_key: std::option::Option<std::string::String>,
    pub enabled: std::option::Option<bool>,
}
impl std::fmt::Debug for GcmChannelRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GcmChannelRequest");
        formatter.field("api_key", &"*** Sensitive Data Redacted ***");
        formatter.field("enabled", &self.enabled);
        formatter.finish()
    }
}
/// See [`GcmChannelRequest`](crate::model::GcmChannelRequest)
pub mod gcm_channel_request {
    /// A builder for [`GcmChannelRequest`](crate::model::GcmChannelRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq)]
    pub struct Builder {
        pub(crate) api_key: std::option::Option<std::string::String>,
        pub(crate) enabled: std::option::Option<bool>,
    }
    impl Builder {
        pub fn api_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.api_key = Some(input.into());
            self
        }
        pub fn set_api_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.api_key = input;
            self
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        /// Consumes the builder and constructs a [`GcmChannelRequest`](crate::model::GcmChannelRequest)
        pub fn build(self) -> crate::model::GcmChannelRequest {
            crate::model::GcmChannelRequest {
                api_key: self.api_key,
                enabled: self.enabled,
            }
        }
    }
    impl std::fmt::Debug for Builder {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("api_key", &"*** Sensitive Data Redacted ***");
            formatter.field("enabled", &self.enabled);
            formatter.finish()
        }
    }
}
impl GcmChannelRequest {
    /// Creates a new builder-style object to manufacture [`GcmChannelRequest`](crate::model::GcmChannelRequest)
    pub fn builder() -> crate::model::gcm_channel_request::Builder {
        crate::model::gcm_channel_request::Builder::default()
    }
}

/// Google Cloud Messaging channel definition
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GcmChannelResponse {
    pub application_id: std::option::Option<std::string::String>,
    pub creation_date: std::option::Option<std::string::String>,
    pub credential: std::option::Option<std::string::String>,
    pub enabled: std::option::Option<bool>,
    pub has_credential: std::option::Option<bool>,
    pub id: std::option::Option<std::string::String>,
    pub is_archived: std::option::Option<bool>,
    pub last_modified_by: std::option::Option<std::string::String>,
    pub last_modified_date: std::option::Option<std::string::String>,
    pub platform: std::option::Option<std::string::String>,
    pub version: std::option::Option<i32>,
}
impl std::fmt::Debug for GcmChannelResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GcmChannelResponse");
        formatter.field("application_id", &self.application_id);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("credential", &self.credential);
        formatter.field("enabled", &self.enabled);
        formatter.field("has_credential", &self.has_credential);
        formatter.field("id", &self.id);
        formatter.field("is_archived", &self.is_archived);
        formatter.field("last_modified_by", &self.last_modified_by);
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("platform", &self.platform);
        formatter.field("version", &self.version);
        formatter.finish()
    }
}
/// See [`GcmChannelResponse`](crate::model::GcmChannelResponse)
pub mod gcm_channel_response {
    /// A builder for [`GcmChannelResponse`](crate::model::GcmChannelResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) credential: std::option::Option<std::string::String>,
        pub(crate) enabled: std::option::Option<bool>,
        pub(crate) has_credential: std::option::Option<bool>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) is_archived: std::option::Option<bool>,
        pub(crate) last_modified_by: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) platform: std::option::Option<std::string::String>,
        pub(crate) version: std::option::Option<i32>,
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
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn credential(mut self, input: impl Into<std::string::String>) -> Self {
            self.credential = Some(input.into());
            self
        }
        pub fn set_credential(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.credential = input;
            self
        }
        pub fn enabled(mut self, input: bool) -> Self {
            self.enabled = Some(input);
            self
        }
        pub fn set_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.enabled = input;
            self
        }
        pub fn has_credential(mut self, input: bool) -> Self {
            self.has_credential = Some(input);
            self
        }
        pub fn set_has_credential(mut self, input: std::option::Option<bool>) -> Self {
            self.has_credential = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn is_archived(mut self, input: bool) -> Self {
            self.is_archived = Some(input);
            self
        }
        pub fn set_is_archived(mut self, input: std::option::Option<bool>) -> Self {
            self.is_archived = input;
            self
        }
        pub fn last_modified_by(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_by = Some(input.into());
            self
        }
        pub fn set_last_modified_by(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_by = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn platform(mut self, input: impl Into<std::string::String>) -> Self {
            self.platform = Some(input.into());
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.platform = input;
            self
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`GcmChannelResponse`](crate::model::GcmChannelResponse)
        pub fn build(self) -> crate::model::GcmChannelResponse {
            crate::model::GcmChannelResponse {
                application_id: self.application_id,
                creation_date: self.creation_date,
                credential: self.credential,
                enabled: self.enabled,
                has_credential: self.has_credential,
                id: self.id,
                is_archived: self.is_archived,
                last_modified_by: self.last_modified_by,
                last_modified_date: self.last_modified_date,
                platform: self.platform,
                version: self.version,
            }
        }
    }
}
impl GcmChannelResponse {
    /// Creates a new builder-style object to manufacture [`GcmChannelResponse`](crate::model::GcmChannelResponse)
    pub fn builder() -> crate::model::gcm_channel_response::Builder {
        crate::model::gcm_channel_response::Builder::default()
    }
}

/// Settings for a one-time message sent through the GCM channel.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GcmMessage {
    pub action: std::option::Option<crate::model::Action>,
    pub body: std::option::Option<std::string::String>,
    pub collapse_key: std::option::Option<std::string::String>,
    pub data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub icon_reference: std::option::Option<std::string::String>,
    pub image_icon_url: std::option::Option<std::string::String>,
    pub image_url: std::option::Option<std::string::String>,
    /// `normal` or `high`; GCM uses `high` for messages that wake a sleeping device
    pub priority: std::option::Option<std::string::String>,
    /// Raw JSON payload; overrides every other content field when set
    pub raw_content: std::option::Option<std::string::String>,
    pub restricted_package_name: std::option::Option<std::string::String>,
    pub silent_push: std::option::Option<bool>,
    pub small_image_icon_url: std::option::Option<std::string::String>,
    pub sound: std::option::Option<std::string::String>,
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    /// Seconds the message is kept if the device is offline
    pub time_to_live: std::option::Option<i32>,
    pub title: std::option::Option<std::string::String>,
    pub url: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GcmMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GcmMessage");
        formatter.field("action", &self.action);
        formatter.field("body", &self.body);
        formatter.field("collapse_key", &self.collapse_key);
        formatter.field("data", &self.data);
        formatter.field("icon_reference", &self.icon_reference);
        formatter.field("image_icon_url", &self.image_icon_url);
        formatter.field("image_url", &self.image_url);
        formatter.field("priority", &self.priority);
        formatter.field("raw_content", &self.raw_content);
        formatter.field("restricted_package_name", &self.restricted_package_name);
        formatter.field("silent_push", &self.silent_push);
        formatter.field("small_image_icon_url", &self.small_image_icon_url);
        formatter.field("sound", &self.sound);
        formatter.field("substitutions", &self.substitutions);
        formatter.field("time_to_live", &self.time_to_live);
        formatter.field("title", &self.title);
        formatter.field("url", &self.url);
        formatter.finish()
    }
}
/// See [`GcmMessage`](crate::model::GcmMessage)
pub mod gcm_message {
    /// A builder for [`GcmMessage`](crate::model::GcmMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: std::option::Option<crate::model::Action>,
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) collapse_key: std::option::Option<std::string::String>,
        pub(crate) data: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) icon_reference: std::option::Option<std::string::String>,
        pub(crate) image_icon_url: std::option::Option<std::string::String>,
        pub(crate) image_url: std::option::Option<std::string::String>,
        pub(crate) priority: std::option::Option<std::string::String>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) restricted_package_name: std::option::Option<std::string::String>,
        pub(crate) silent_push: std::option::Option<bool>,
        pub(crate) small_image_icon_url: std::option::Option<std::string::String>,
        pub(crate) sound: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
        pub(crate) time_to_live: std::option::Option<i32>,
        pub(crate) title: std::option::Option<std::string::String>,
        pub(crate) url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = Some(input);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn collapse_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.collapse_key = Some(input.into());
            self
        }
        pub fn set_collapse_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.collapse_key = input;
            self
        }
        pub fn data(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.data.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.data = Some(hash_map);
            self
        }
        pub fn set_data(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.data = input;
            self
        }
        pub fn icon_reference(mut self, input: impl Into<std::string::String>) -> Self {
            self.icon_reference = Some(input.into());
            self
        }
        pub fn set_icon_reference(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.icon_reference = input;
            self
        }
        pub fn image_icon_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_icon_url = Some(input.into());
            self
        }
        pub fn set_image_icon_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_icon_url = input;
            self
        }
        pub fn image_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_url = Some(input.into());
            self
        }
        pub fn set_image_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_url = input;
            self
        }
        /// `normal` or `high`; GCM uses `high` for messages that wake a sleeping device
        pub fn priority(mut self, input: impl Into<std::string::String>) -> Self {
            self.priority = Some(input.into());
            self
        }
        pub fn set_priority(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.priority = input;
            self
        }
        /// Raw JSON payload; overrides every other content field when set
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn restricted_package_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.restricted_package_name = Some(input.into());
            self
        }
        pub fn set_restricted_package_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.restricted_package_name = input;
            self
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        pub fn small_image_icon_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.small_image_icon_url = Some(input.into());
            self
        }
        pub fn set_small_image_icon_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.small_image_icon_url = input;
            self
        }
        pub fn sound(mut self, input: impl Into<std::string::String>) -> Self {
            self.sound = Some(input.into());
            self
        }
        pub fn set_sound(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sound = input;
            self
        }
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        /// Seconds the message is kept if the device is offline
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = Some(input);
            self
        }
        pub fn set_time_to_live(mut self, input: std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        /// Consumes the builder and constructs a [`GcmMessage`](crate::model::GcmMessage)
        pub fn build(self) -> crate::model::GcmMessage {
            crate::model::GcmMessage {
                action: self.action,
                body: self.body,
                collapse_key: self.collapse_key,
                data: self.data,
                icon_reference: self.icon_reference,
                image_icon_url: self.image_icon_url,
                image_url: self.image_url,
                priority: self.priority,
                raw_content: self.raw_content,
                restricted_package_name: self.restricted_package_name,
                silent_push: self.silent_push,
                small_image_icon_url: self.small_image_icon_url,
                sound: self.sound,
                substitutions: self.substitutions,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}
impl GcmMessage {
    /// Creates a new builder-style object to manufacture [`GcmMessage`](crate::model::GcmMessage)
    pub fn builder() -> crate::model::gcm_message::Builder {
        crate::model::gcm_message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GpsCoordinates {
    pub latitude: std::option::Option<f64>,
    pub longitude: std::option::Option<f64>,
}
impl std::fmt::Debug for GpsCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GpsCoordinates");
        formatter.field("latitude", &self.latitude);
        formatter.field("longitude", &self.longitude);
        formatter.finish()
    }
}
/// See [`GpsCoordinates`](crate::model::GpsCoordinates)
pub mod gps_coordinates {
    /// A builder for [`GpsCoordinates`](crate::model::GpsCoordinates)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) latitude: std::option::Option<f64>,
        pub(crate) longitude: std::option::Option<f64>,
    }
    impl Builder {
        pub fn latitude(mut self, input: f64) -> Self {
            self.latitude = Some(input);
            self
        }
        pub fn set_latitude(mut self, input: std::option::Option<f64>) -> Self {
            self.latitude = input;
            self
        }
        pub fn longitude(mut self, input: f64) -> Self {
            self.longitude = Some(input);
            self
        }
        pub fn set_longitude(mut self, input: std::option::Option<f64>) -> Self {
            self.longitude = input;
            self
        }
        /// Consumes the builder and constructs a [`GpsCoordinates`](crate::model::GpsCoordinates)
        pub fn build(self) -> crate::model::GpsCoordinates {
            crate::model::GpsCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            }
        }
    }
}
impl GpsCoordinates {
    /// Creates a new builder-style object to manufacture [`GpsCoordinates`](crate::model::GpsCoordinates)
    pub fn builder() -> crate::model::gps_coordinates::Builder {
        crate::model::gps_coordinates::Builder::default()
    }
}

/// Geographic area, centered on a point, for a segment
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GpsPointDimension {
    pub coordinates: std::option::Option<crate::model::GpsCoordinates>,
    pub range_in_kilometers: std::option::Option<f64>,
}
impl std::fmt::Debug for GpsPointDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GpsPointDimension");
        formatter.field("coordinates", &self.coordinates);
        formatter.field("range_in_kilometers", &self.range_in_kilometers);
        formatter.finish()
    }
}
/// See [`GpsPointDimension`](crate::model::GpsPointDimension)
pub mod gps_point_dimension {
    /// A builder for [`GpsPointDimension`](crate::model::GpsPointDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) coordinates: std::option::Option<crate::model::GpsCoordinates>,
        pub(crate) range_in_kilometers: std::option::Option<f64>,
    }
    impl Builder {
        pub fn coordinates(mut self, input: crate::model::GpsCoordinates) -> Self {
            self.coordinates = Some(input);
            self
        }
        pub fn set_coordinates(mut self, input: std::option::Option<crate::model::GpsCoordinates>) -> Self {
            self.coordinates = input;
            self
        }
        pub fn range_in_kilometers(mut self, input: f64) -> Self {
            self.range_in_kilometers = Some(input);
            self
        }
        pub fn set_range_in_kilometers(mut self, input: std::option::Option<f64>) -> Self {
            self.range_in_kilometers = input;
            self
        }
        /// Consumes the builder and constructs a [`GpsPointDimension`](crate::model::GpsPointDimension)
        pub fn build(self) -> crate::model::GpsPointDimension {
            crate::model::GpsPointDimension {
                coordinates: self.coordinates,
                range_in_kilometers: self.range_in_kilometers,
            }
        }
    }
}
impl GpsPointDimension {
    /// Creates a new builder-style object to manufacture [`GpsPointDimension`](crate::model::GpsPointDimension)
    pub fn builder() -> crate::model::gps_point_dimension::Builder {
        crate::model::gps_point_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct HoldoutActivity {
    pub next_activity: std::option::Option<std::string::String>,
    pub percentage: std::option::Option<i32>,
}
impl std::fmt::Debug for HoldoutActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("HoldoutActivity");
        formatter.field("next_activity", &self.next_activity);
        formatter.field("percentage", &self.percentage);
        formatter.finish()
    }
}
/// See [`HoldoutActivity`](crate::model::HoldoutActivity)
pub mod holdout_activity {
    /// A builder for [`HoldoutActivity`](crate::model::HoldoutActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) percentage: std::option::Option<i32>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn percentage(mut self, input: i32) -> Self {
            self.percentage = Some(input);
            self
        }
        pub fn set_percentage(mut self, input: std::option::Option<i32>) -> Self {
            self.percentage = input;
            self
        }
        /// Consumes the builder and constructs a [`HoldoutActivity`](crate::model::HoldoutActivity)
        pub fn build(self) -> crate::model::HoldoutActivity {
            crate::model::HoldoutActivity {
                next_activity: self.next_activity,
                percentage: self.percentage,
            }
        }
    }
}
impl HoldoutActivity {
    /// Creates a new builder-style object to manufacture [`HoldoutActivity`](crate::model::HoldoutActivity)
    pub fn builder() -> crate::model::holdout_activity::Builder {
        crate::model::holdout_activity::Builder::default()
    }
}

/// Definition of an endpoint import job stored in S3.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ImportJobRequest {
    pub define_segment: std::option::Option<bool>,
    pub external_id: std::option::Option<std::string::String>,
    pub format: std::option::Option<crate::model::Format>,
    pub register_endpoints: std::option::Option<bool>,
    pub role_arn: std::option::Option<std::string::String>,
    pub s3_url: std::option::Option<std::string::String>,
    pub segment_id: std::option::Option<std::string::String>,
    pub segment_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ImportJobRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ImportJobRequest");
        formatter.field("define_segment", &self.define_segment);
        formatter.field("external_id", &self.external_id);
        formatter.field("format", &self.format);
        formatter.field("register_endpoints", &self.register_endpoints);
        formatter.field("role_arn", &self.role_arn);
        formatter.field("s3_url", &self.s3_url);
        formatter.field("segment_id", &self.segment_id);
        formatter.field("segment_name", &self.segment_name);
        formatter.finish()
    }
}
/// See [`ImportJobRequest`](crate::model::ImportJobRequest)
pub mod import_job_request {
    /// A builder for [`ImportJobRequest`](crate::model::ImportJobRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) define_segment: std::option::Option<bool>,
        pub(crate) external_id: std::option::Option<std::string::String>,
        pub(crate) format: std::option::Option<crate::model::Format>,
        pub(crate) register_endpoints: std::option::Option<bool>,
        pub(crate) role_arn: std::option::Option<std::string::String>,
        pub(crate) s3_url: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) segment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn define_segment(mut self, input: bool) -> Self {
            self.define_segment = Some(input);
            self
        }
        pub fn set_define_segment(mut self, input: std::option::Option<bool>) -> Self {
            self.define_segment = input;
            self
        }
        pub fn external_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.external_id = Some(input.into());
            self
        }
        pub fn set_external_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.external_id = input;
            self
        }
        pub fn format(mut self, input: crate::model::Format) -> Self {
            self.format = Some(input);
            self
        }
        pub fn set_format(mut self, input: std::option::Option<crate::model::Format>) -> Self {
            self.format = input;
            self
        }
        pub fn register_endpoints(mut self, input: bool) -> Self {
            self.register_endpoints = Some(input);
            self
        }
        pub fn set_register_endpoints(mut self, input: std::option::Option<bool>) -> Self {
            self.register_endpoints = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn s3_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_url = Some(input.into());
            self
        }
        pub fn set_s3_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_url = input;
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
        pub fn segment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_name = Some(input.into());
            self
        }
        pub fn set_segment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportJobRequest`](crate::model::ImportJobRequest)
        pub fn build(self) -> crate::model::ImportJobRequest {
            crate::model::ImportJobRequest {
                define_segment: self.define_segment,
                external_id: self.external_id,
                format: self.format,
                register_endpoints: self.register_endpoints,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                segment_id: self.segment_id,
                segment_name: self.segment_name,
            }
        }
    }
}
impl ImportJobRequest {
    /// Creates a new builder-style object to manufacture [`ImportJobRequest`](crate::model::ImportJobRequest)
    pub fn builder() -> crate::model::import_job_request::Builder {
        crate::model::import_job_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ImportJobResource {
    pub define_segment: std::option::Option<bool>,
    pub external_id: std::option::Option<std::string::String>,
    pub format: std::option::Option<crate::model::Format>,
    pub register_endpoints: std::option::Option<bool>,
    pub role_arn: std::option::Option<std::string::String>,
    pub s3_url: std::option::Option<std::string::String>,
    pub segment_id: std::option::Option<std::string::String>,
    pub segment_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ImportJobResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ImportJobResource");
        formatter.field("define_segment", &self.define_segment);
        formatter.field("external_id", &self.external_id);
        formatter.field("format", &self.format);
        formatter.field("register_endpoints", &self.register_endpoints);
        formatter.field("role_arn", &self.role_arn);
        formatter.field("s3_url", &self.s3_url);
        formatter.field("segment_id", &self.segment_id);
        formatter.field("segment_name", &self.segment_name);
        formatter.finish()
    }
}
/// See [`ImportJobResource`](crate::model::ImportJobResource)
pub mod import_job_resource {
    /// A builder for [`ImportJobResource`](crate::model::ImportJobResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) define_segment: std::option::Option<bool>,
        pub(crate) external_id: std::option::Option<std::string::String>,
        pub(crate) format: std::option::Option<crate::model::Format>,
        pub(crate) register_endpoints: std::option::Option<bool>,
        pub(crate) role_arn: std::option::Option<std::string::String>,
        pub(crate) s3_url: std::option::Option<std::string::String>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) segment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn define_segment(mut self, input: bool) -> Self {
            self.define_segment = Some(input);
            self
        }
        pub fn set_define_segment(mut self, input: std::option::Option<bool>) -> Self {
            self.define_segment = input;
            self
        }
        pub fn external_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.external_id = Some(input.into());
            self
        }
        pub fn set_external_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.external_id = input;
            self
        }
        pub fn format(mut self, input: crate::model::Format) -> Self {
            self.format = Some(input);
            self
        }
        pub fn set_format(mut self, input: std::option::Option<crate::model::Format>) -> Self {
            self.format = input;
            self
        }
        pub fn register_endpoints(mut self, input: bool) -> Self {
            self.register_endpoints = Some(input);
            self
        }
        pub fn set_register_endpoints(mut self, input: std::option::Option<bool>) -> Self {
            self.register_endpoints = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn s3_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_url = Some(input.into());
            self
        }
        pub fn set_s3_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_url = input;
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
        pub fn segment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_name = Some(input.into());
            self
        }
        pub fn set_segment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportJobResource`](crate::model::ImportJobResource)
        pub fn build(self) -> crate::model::ImportJobResource {
            crate::model::ImportJobResource {
                define_segment: self.define_segment,
                external_id: self.external_id,
                format: self.format,
                register_endpoints: self.register_endpoints,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                segment_id: self.segment_id,
                segment_name: self.segment_name,
            }
        }
    }
}
impl ImportJobResource {
    /// Creates a new builder-style object to manufacture [`ImportJobResource`](crate::model::ImportJobResource)
    pub fn builder() -> crate::model::import_job_resource::Builder {
        crate::model::import_job_resource::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ImportJobResponse {
    pub application_id: std::option::Option<std::string::String>,
    pub completed_pieces: std::option::Option<i32>,
    pub completion_date: std::option::Option<std::string::String>,
    pub creation_date: std::option::Option<std::string::String>,
    pub definition: std::option::Option<crate::model::ImportJobResource>,
    pub failed_pieces: std::option::Option<i32>,
    pub failures: std::option::Option<std::vec::Vec<std::string::String>>,
    pub id: std::option::Option<std::string::String>,
    pub job_status: std::option::Option<crate::model::JobStatus>,
    pub total_failures: std::option::Option<i32>,
    pub total_pieces: std::option::Option<i32>,
    pub total_processed: std::option::Option<i32>,
    pub r#type: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ImportJobResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ImportJobResponse");
        formatter.field("application_id", &self.application_id);
        formatter.field("completed_pieces", &self.completed_pieces);
        formatter.field("completion_date", &self.completion_date);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("definition", &self.definition);
        formatter.field("failed_pieces", &self.failed_pieces);
        formatter.field("failures", &self.failures);
        formatter.field("id", &self.id);
        formatter.field("job_status", &self.job_status);
        formatter.field("total_failures", &self.total_failures);
        formatter.field("total_pieces", &self.total_pieces);
        formatter.field("total_processed", &self.total_processed);
        formatter.field("r#type", &self.r#type);
        formatter.finish()
    }
}
/// See [`ImportJobResponse`](crate::model::ImportJobResponse)
pub mod import_job_response {
    /// A builder for [`ImportJobResponse`](crate::model::ImportJobResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) completed_pieces: std::option::Option<i32>,
        pub(crate) completion_date: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) definition: std::option::Option<crate::model::ImportJobResource>,
        pub(crate) failed_pieces: std::option::Option<i32>,
        pub(crate) failures: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) job_status: std::option::Option<crate::model::JobStatus>,
        pub(crate) total_failures: std::option::Option<i32>,
        pub(crate) total_pieces: std::option::Option<i32>,
        pub(crate) total_processed: std::option::Option<i32>,
        pub(crate) r#type: std::option::Option<std::string::String>,
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
        pub fn completed_pieces(mut self, input: i32) -> Self {
            self.completed_pieces = Some(input);
            self
        }
        pub fn set_completed_pieces(mut self, input: std::option::Option<i32>) -> Self {
            self.completed_pieces = input;
            self
        }
        pub fn completion_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.completion_date = Some(input.into());
            self
        }
        pub fn set_completion_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.completion_date = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn definition(mut self, input: crate::model::ImportJobResource) -> Self {
            self.definition = Some(input);
            self
        }
        pub fn set_definition(mut self, input: std::option::Option<crate::model::ImportJobResource>) -> Self {
            self.definition = input;
            self
        }
        pub fn failed_pieces(mut self, input: i32) -> Self {
            self.failed_pieces = Some(input);
            self
        }
        pub fn set_failed_pieces(mut self, input: std::option::Option<i32>) -> Self {
            self.failed_pieces = input;
            self
        }
        pub fn failures(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.failures.unwrap_or_default();
            v.push(input.into());
            self.failures = Some(v);
            self
        }
        pub fn set_failures(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.failures = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn job_status(mut self, input: crate::model::JobStatus) -> Self {
            self.job_status = Some(input);
            self
        }
        pub fn set_job_status(mut self, input: std::option::Option<crate::model::JobStatus>) -> Self {
            self.job_status = input;
            self
        }
        pub fn total_failures(mut self, input: i32) -> Self {
            self.total_failures = Some(input);
            self
        }
        pub fn set_total_failures(mut self, input: std::option::Option<i32>) -> Self {
            self.total_failures = input;
            self
        }
        pub fn total_pieces(mut self, input: i32) -> Self {
            self.total_pieces = Some(input);
            self
        }
        pub fn set_total_pieces(mut self, input: std::option::Option<i32>) -> Self {
            self.total_pieces = input;
            self
        }
        pub fn total_processed(mut self, input: i32) -> Self {
            self.total_processed = Some(input);
            self
        }
        pub fn set_total_processed(mut self, input: std::option::Option<i32>) -> Self {
            self.total_processed = input;
            self
        }
        pub fn r#type(mut self, input: impl Into<std::string::String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportJobResponse`](crate::model::ImportJobResponse)
        pub fn build(self) -> crate::model::ImportJobResponse {
            crate::model::ImportJobResponse {
                application_id: self.application_id,
                completed_pieces: self.completed_pieces,
                completion_date: self.completion_date,
                creation_date: self.creation_date,
                definition: self.definition,
                failed_pieces: self.failed_pieces,
                failures: self.failures,
                id: self.id,
                job_status: self.job_status,
                total_failures: self.total_failures,
                total_pieces: self.total_pieces,
                total_processed: self.total_processed,
                r#type: self.r#type,
            }
        }
    }
}
impl ImportJobResponse {
    /// Creates a new builder-style object to manufacture [`ImportJobResponse`](crate::model::ImportJobResponse)
    pub fn builder() -> crate::model::import_job_response::Builder {
        crate::model::import_job_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ImportJobsResponse {
    pub item: std::option::Option<std::vec::Vec<crate::model::ImportJobResponse>>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ImportJobsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ImportJobsResponse");
        formatter.field("item", &self.item);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`ImportJobsResponse`](crate::model::ImportJobsResponse)
pub mod import_jobs_response {
    /// A builder for [`ImportJobsResponse`](crate::model::ImportJobsResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::ImportJobResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn item(mut self, input: impl Into<crate::model::ImportJobResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::ImportJobResponse>>) -> Self {
            self.item = input;
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
        /// Consumes the builder and constructs a [`ImportJobsResponse`](crate::model::ImportJobsResponse)
        pub fn build(self) -> crate::model::ImportJobsResponse {
            crate::model::ImportJobsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl ImportJobsResponse {
    /// Creates a new builder-style object to manufacture [`ImportJobsResponse`](crate::model::ImportJobsResponse)
    pub fn builder() -> crate::model::import_jobs_response::Builder {
        crate::model::import_jobs_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum JobStatus {
    Created,
    Initializing,
    Processing,
    Completing,
    Completed,
    Failing,
    Failed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for JobStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATED" => JobStatus::Created,
            "INITIALIZING" => JobStatus::Initializing,
            "PROCESSING" => JobStatus::Processing,
            "COMPLETING" => JobStatus::Completing,
            "COMPLETED" => JobStatus::Completed,
            "FAILING" => JobStatus::Failing,
            "FAILED" => JobStatus::Failed,
            other => JobStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for JobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(JobStatus::from(s))
    }
}
impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Created => "CREATED",
            JobStatus::Initializing => "INITIALIZING",
            JobStatus::Processing => "PROCESSING",
            JobStatus::Completing => "COMPLETING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failing => "FAILING",
            JobStatus::Failed => "FAILED",
            JobStatus::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["CREATED", "INITIALIZING", "PROCESSING", "COMPLETING", "COMPLETED", "FAILING", "FAILED"]
    }
}
impl AsRef<str> for JobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct JourneyEmailMessage {
    pub from_address: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for JourneyEmailMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JourneyEmailMessage");
        formatter.field("from_address", &self.from_address);
        formatter.finish()
    }
}
/// See [`JourneyEmailMessage`](crate::model::JourneyEmailMessage)
pub mod journey_email_message {
    /// A builder for [`JourneyEmailMessage`](crate::model::JourneyEmailMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) from_address: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn from_address(mut self, input: impl Into<std::string::String>) -> Self {
            self.from_address = Some(input.into());
            self
        }
        pub fn set_from_address(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.from_address = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneyEmailMessage`](crate::model::JourneyEmailMessage)
        pub fn build(self) -> crate::model::JourneyEmailMessage {
            crate::model::JourneyEmailMessage {
                from_address: self.from_address,
            }
        }
    }
}
impl JourneyEmailMessage {
    /// Creates a new builder-style object to manufacture [`JourneyEmailMessage`](crate::model::JourneyEmailMessage)
    pub fn builder() -> crate::model::journey_email_message::Builder {
        crate::model::journey_email_message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct JourneyLimits {
    pub daily_cap: std::option::Option<i32>,
    pub endpoint_reentry_cap: std::option::Option<i32>,
    pub messages_per_second: std::option::Option<i32>,
}
impl std::fmt::Debug for JourneyLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JourneyLimits");
        formatter.field("daily_cap", &self.daily_cap);
        formatter.field("endpoint_reentry_cap", &self.endpoint_reentry_cap);
        formatter.field("messages_per_second", &self.messages_per_second);
        formatter.finish()
    }
}
/// See [`JourneyLimits`](crate::model::JourneyLimits)
pub mod journey_limits {
    /// A builder for [`JourneyLimits`](crate::model::JourneyLimits)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) daily_cap: std::option::Option<i32>,
        pub(crate) endpoint_reentry_cap: std::option::Option<i32>,
        pub(crate) messages_per_second: std::option::Option<i32>,
    }
    impl Builder {
        pub fn daily_cap(mut self, input: i32) -> Self {
            self.daily_cap = Some(input);
            self
        }
        pub fn set_daily_cap(mut self, input: std::option::Option<i32>) -> Self {
            self.daily_cap = input;
            self
        }
        pub fn endpoint_reentry_cap(mut self, input: i32) -> Self {
            self.endpoint_reentry_cap = Some(input);
            self
        }
        pub fn set_endpoint_reentry_cap(mut self, input: std::option::Option<i32>) -> Self {
            self.endpoint_reentry_cap = input;
            self
        }
        pub fn messages_per_second(mut self, input: i32) -> Self {
            self.messages_per_second = Some(input);
            self
        }
        pub fn set_messages_per_second(mut self, input: std::option::Option<i32>) -> Self {
            self.messages_per_second = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneyLimits`](crate::model::JourneyLimits)
        pub fn build(self) -> crate::model::JourneyLimits {
            crate::model::JourneyLimits {
                daily_cap: self.daily_cap,
                endpoint_reentry_cap: self.endpoint_reentry_cap,
                messages_per_second: self.messages_per_second,
            }
        }
    }
}
impl JourneyLimits {
    /// Creates a new builder-style object to manufacture [`JourneyLimits`](crate::model::JourneyLimits)
    pub fn builder() -> crate::model::journey_limits::Builder {
        crate::model::journey_limits::Builder::default()
    }
}

/// Status, configuration and other settings of a journey.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct JourneyResponse {
    pub activities: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>,
    pub application_id: std::option::Option<std::string::String>,
    pub creation_date: std::option::Option<std::string::String>,
    pub id: std::option::Option<std::string::String>,
    pub last_modified_date: std::option::Option<std::string::String>,
    pub limits: std::option::Option<crate::model::JourneyLimits>,
    pub local_time: std::option::Option<bool>,
    pub name: std::option::Option<std::string::String>,
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
    /// ISO 8601 duration between segment refreshes
    pub refresh_frequency: std::option::Option<std::string::String>,
    pub schedule: std::option::Option<crate::model::JourneySchedule>,
    pub start_activity: std::option::Option<std::string::String>,
    pub start_condition: std::option::Option<crate::model::StartCondition>,
    pub state: std::option::Option<crate::model::State>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl std::fmt::Debug for JourneyResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JourneyResponse");
        formatter.field("activities", &self.activities);
        formatter.field("application_id", &self.application_id);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("id", &self.id);
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("limits", &self.limits);
        formatter.field("local_time", &self.local_time);
        formatter.field("name", &self.name);
        formatter.field("quiet_time", &self.quiet_time);
        formatter.field("refresh_frequency", &self.refresh_frequency);
        formatter.field("schedule", &self.schedule);
        formatter.field("start_activity", &self.start_activity);
        formatter.field("start_condition", &self.start_condition);
        formatter.field("state", &self.state);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`JourneyResponse`](crate::model::JourneyResponse)
pub mod journey_response {
    /// A builder for [`JourneyResponse`](crate::model::JourneyResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) activities: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>,
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) limits: std::option::Option<crate::model::JourneyLimits>,
        pub(crate) local_time: std::option::Option<bool>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
        pub(crate) refresh_frequency: std::option::Option<std::string::String>,
        pub(crate) schedule: std::option::Option<crate::model::JourneySchedule>,
        pub(crate) start_activity: std::option::Option<std::string::String>,
        pub(crate) start_condition: std::option::Option<crate::model::StartCondition>,
        pub(crate) state: std::option::Option<crate::model::State>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn activities(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Activity>,
        ) -> Self {
            let mut hash_map = self.activities.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.activities = Some(hash_map);
            self
        }
        pub fn set_activities(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Activity>>) -> Self {
            self.activities = input;
            self
        }
        pub fn application_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.application_id = Some(input.into());
            self
        }
        pub fn set_application_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.application_id = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn limits(mut self, input: crate::model::JourneyLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::JourneyLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn local_time(mut self, input: bool) -> Self {
            self.local_time = Some(input);
            self
        }
        pub fn set_local_time(mut self, input: std::option::Option<bool>) -> Self {
            self.local_time = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        /// ISO 8601 duration between segment refreshes
        pub fn refresh_frequency(mut self, input: impl Into<std::string::String>) -> Self {
            self.refresh_frequency = Some(input.into());
            self
        }
        pub fn set_refresh_frequency(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.refresh_frequency = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::JourneySchedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::JourneySchedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn start_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.start_activity = Some(input.into());
            self
        }
        pub fn set_start_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start_activity = input;
            self
        }
        pub fn start_condition(mut self, input: crate::model::StartCondition) -> Self {
            self.start_condition = Some(input);
            self
        }
        pub fn set_start_condition(mut self, input: std::option::Option<crate::model::StartCondition>) -> Self {
            self.start_condition = input;
            self
        }
        pub fn state(mut self, input: crate::model::State) -> Self {
            self.state = Some(input);
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::State>) -> Self {
            self.state = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneyResponse`](crate::model::JourneyResponse)
        pub fn build(self) -> crate::model::JourneyResponse {
            crate::model::JourneyResponse {
                activities: self.activities,
                application_id: self.application_id,
                creation_date: self.creation_date,
                id: self.id,
                last_modified_date: self.last_modified_date,
                limits: self.limits,
                local_time: self.local_time,
                name: self.name,
                quiet_time: self.quiet_time,
                refresh_frequency: self.refresh_frequency,
                schedule: self.schedule,
                start_activity: self.start_activity,
                start_condition: self.start_condition,
                state: self.state,
                tags: self.tags,
            }
        }
    }
}
impl JourneyResponse {
    /// Creates a new builder-style object to manufacture [`JourneyResponse`](crate::model::JourneyResponse)
    pub fn builder() -> crate::model::journey_response::Builder {
        crate::model::journey_response::Builder::default()
    }
}

/// Start and end of a journey.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct JourneySchedule {
    pub end_time: std::option::Option<smithy_types::Instant>,
    pub start_time: std::option::Option<smithy_types::Instant>,
    pub timezone: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for JourneySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("JourneySchedule");
        formatter.field("end_time", &self.end_time);
        formatter.field("start_time", &self.start_time);
        formatter.field("timezone", &self.timezone);
        formatter.finish()
    }
}
/// See [`JourneySchedule`](crate::model::JourneySchedule)
pub mod journey_schedule {
    /// A builder for [`JourneySchedule`](crate::model::JourneySchedule)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end_time: std::option::Option<smithy_types::Instant>,
        pub(crate) start_time: std::option::Option<smithy_types::Instant>,
        pub(crate) timezone: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn end_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = input;
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
        pub fn timezone(mut self, input: impl Into<std::string::String>) -> Self {
            self.timezone = Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.timezone = input;
            self
        }
        /// Consumes the builder and constructs a [`JourneySchedule`](crate::model::JourneySchedule)
        pub fn build(self) -> crate::model::JourneySchedule {
            crate::model::JourneySchedule {
                end_time: self.end_time,
                start_time: self.start_time,
                timezone: self.timezone,
            }
        }
    }
}
impl JourneySchedule {
    /// Creates a new builder-style object to manufacture [`JourneySchedule`](crate::model::JourneySchedule)
    pub fn builder() -> crate::model::journey_schedule::Builder {
        crate::model::journey_schedule::Builder::default()
    }
}

/// Push notification content for a single channel
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Message {
    pub action: std::option::Option<crate::model::Action>,
    pub body: std::option::Option<std::string::String>,
    pub image_icon_url: std::option::Option<std::string::String>,
    pub image_small_icon_url: std::option::Option<std::string::String>,
    pub image_url: std::option::Option<std::string::String>,
    pub json_body: std::option::Option<std::string::String>,
    pub media_url: std::option::Option<std::string::String>,
    pub raw_content: std::option::Option<std::string::String>,
    pub silent_push: std::option::Option<bool>,
    pub time_to_live: std::option::Option<i32>,
    pub title: std::option::Option<std::string::String>,
    pub url: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Message");
        formatter.field("action", &self.action);
        formatter.field("body", &self.body);
        formatter.field("image_icon_url", &self.image_icon_url);
        formatter.field("image_small_icon_url", &self.image_small_icon_url);
        formatter.field("image_url", &self.image_url);
        formatter.field("json_body", &self.json_body);
        formatter.field("media_url", &self.media_url);
        formatter.field("raw_content", &self.raw_content);
        formatter.field("silent_push", &self.silent_push);
        formatter.field("time_to_live", &self.time_to_live);
        formatter.field("title", &self.title);
        formatter.field("url", &self.url);
        formatter.finish()
    }
}
/// See [`Message`](crate::model::Message)
pub mod message {
    /// A builder for [`Message`](crate::model::Message)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) action: std::option::Option<crate::model::Action>,
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) image_icon_url: std::option::Option<std::string::String>,
        pub(crate) image_small_icon_url: std::option::Option<std::string::String>,
        pub(crate) image_url: std::option::Option<std::string::String>,
        pub(crate) json_body: std::option::Option<std::string::String>,
        pub(crate) media_url: std::option::Option<std::string::String>,
        pub(crate) raw_content: std::option::Option<std::string::String>,
        pub(crate) silent_push: std::option::Option<bool>,
        pub(crate) time_to_live: std::option::Option<i32>,
        pub(crate) title: std::option::Option<std::string::String>,
        pub(crate) url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn action(mut self, input: crate::model::Action) -> Self {
            self.action = Some(input);
            self
        }
        pub fn set_action(mut self, input: std::option::Option<crate::model::Action>) -> Self {
            self.action = input;
            self
        }
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn image_icon_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_icon_url = Some(input.into());
            self
        }
        pub fn set_image_icon_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_icon_url = input;
            self
        }
        pub fn image_small_icon_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_small_icon_url = Some(input.into());
            self
        }
        pub fn set_image_small_icon_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_small_icon_url = input;
            self
        }
        pub fn image_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_url = Some(input.into());
            self
        }
        pub fn set_image_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_url = input;
            self
        }
        pub fn json_body(mut self, input: impl Into<std::string::String>) -> Self {
            self.json_body = Some(input.into());
            self
        }
        pub fn set_json_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.json_body = input;
            self
        }
        pub fn media_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.media_url = Some(input.into());
            self
        }
        pub fn set_media_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.media_url = input;
            self
        }
        pub fn raw_content(mut self, input: impl Into<std::string::String>) -> Self {
            self.raw_content = Some(input.into());
            self
        }
        pub fn set_raw_content(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.raw_content = input;
            self
        }
        pub fn silent_push(mut self, input: bool) -> Self {
            self.silent_push = Some(input);
            self
        }
        pub fn set_silent_push(mut self, input: std::option::Option<bool>) -> Self {
            self.silent_push = input;
            self
        }
        pub fn time_to_live(mut self, input: i32) -> Self {
            self.time_to_live = Some(input);
            self
        }
        pub fn set_time_to_live(mut self, input: std::option::Option<i32>) -> Self {
            self.time_to_live = input;
            self
        }
        pub fn title(mut self, input: impl Into<std::string::String>) -> Self {
            self.title = Some(input.into());
            self
        }
        pub fn set_title(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.title = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        /// Consumes the builder and constructs a [`Message`](crate::model::Message)
        pub fn build(self) -> crate::model::Message {
            crate::model::Message {
                action: self.action,
                body: self.body,
                image_icon_url: self.image_icon_url,
                image_small_icon_url: self.image_small_icon_url,
                image_url: self.image_url,
                json_body: self.json_body,
                media_url: self.media_url,
                raw_content: self.raw_content,
                silent_push: self.silent_push,
                time_to_live: self.time_to_live,
                title: self.title,
                url: self.url,
            }
        }
    }
}
impl Message {
    /// Creates a new builder-style object to manufacture [`Message`](crate::model::Message)
    pub fn builder() -> crate::model::message::Builder {
        crate::model::message::Builder::default()
    }
}

/// Simple message object.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct MessageBody {
    pub message: std::option::Option<std::string::String>,
    pub request_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for MessageBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MessageBody");
        formatter.field("message", &self.message);
        formatter.field("request_id", &self.request_id);
        formatter.finish()
    }
}
/// See [`MessageBody`](crate::model::MessageBody)
pub mod message_body {
    /// A builder for [`MessageBody`](crate::model::MessageBody)
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
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageBody`](crate::model::MessageBody)
        pub fn build(self) -> crate::model::MessageBody {
            crate::model::MessageBody {
                message: self.message,
                request_id: self.request_id,
            }
        }
    }
}
impl MessageBody {
    /// Creates a new builder-style object to manufacture [`MessageBody`](crate::model::MessageBody)
    pub fn builder() -> crate::model::message_body::Builder {
        crate::model::message_body::Builder::default()
    }
}

/// Message configuration for a campaign.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct MessageConfiguration {
    pub adm_message: std::option::Option<crate::model::Message>,
    pub apns_message: std::option::Option<crate::model::Message>,
    pub baidu_message: std::option::Option<crate::model::Message>,
    pub default_message: std::option::Option<crate::model::Message>,
    pub email_message: std::option::Option<crate::model::CampaignEmailMessage>,
    pub gcm_message: std::option::Option<crate::model::Message>,
    pub sms_message: std::option::Option<crate::model::CampaignSmsMessage>,
}
impl std::fmt::Debug for MessageConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MessageConfiguration");
        formatter.field("adm_message", &self.adm_message);
        formatter.field("apns_message", &self.apns_message);
        formatter.field("baidu_message", &self.baidu_message);
        formatter.field("default_message", &self.default_message);
        formatter.field("email_message", &self.email_message);
        formatter.field("gcm_message", &self.gcm_message);
        formatter.field("sms_message", &self.sms_message);
        formatter.finish()
    }
}
/// See [`MessageConfiguration`](crate::model::MessageConfiguration)
pub mod message_configuration {
    /// A builder for [`MessageConfiguration`](crate::model::MessageConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) adm_message: std::option::Option<crate::model::Message>,
        pub(crate) apns_message: std::option::Option<crate::model::Message>,
        pub(crate) baidu_message: std::option::Option<crate::model::Message>,
        pub(crate) default_message: std::option::Option<crate::model::Message>,
        pub(crate) email_message: std::option::Option<crate::model::CampaignEmailMessage>,
        pub(crate) gcm_message: std::option::Option<crate::model::Message>,
        pub(crate) sms_message: std::option::Option<crate::model::CampaignSmsMessage>,
    }
    impl Builder {
        pub fn adm_message(mut self, input: crate::model::Message) -> Self {
            self.adm_message = Some(input);
            self
        }
        pub fn set_adm_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.adm_message = input;
            self
        }
        pub fn apns_message(mut self, input: crate::model::Message) -> Self {
            self.apns_message = Some(input);
            self
        }
        pub fn set_apns_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.apns_message = input;
            self
        }
        pub fn baidu_message(mut self, input: crate::model::Message) -> Self {
            self.baidu_message = Some(input);
            self
        }
        pub fn set_baidu_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.baidu_message = input;
            self
        }
        pub fn default_message(mut self, input: crate::model::Message) -> Self {
            self.default_message = Some(input);
            self
        }
        pub fn set_default_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.default_message = input;
            self
        }
        pub fn email_message(mut self, input: crate::model::CampaignEmailMessage) -> Self {
            self.email_message = Some(input);
            self
        }
        pub fn set_email_message(mut self, input: std::option::Option<crate::model::CampaignEmailMessage>) -> Self {
            self.email_message = input;
            self
        }
        pub fn gcm_message(mut self, input: crate::model::Message) -> Self {
            self.gcm_message = Some(input);
            self
        }
        pub fn set_gcm_message(mut self, input: std::option::Option<crate::model::Message>) -> Self {
            self.gcm_message = input;
            self
        }
        pub fn sms_message(mut self, input: crate::model::CampaignSmsMessage) -> Self {
            self.sms_message = Some(input);
            self
        }
        pub fn set_sms_message(mut self, input: std::option::Option<crate::model::CampaignSmsMessage>) -> Self {
            self.sms_message = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageConfiguration`](crate::model::MessageConfiguration)
        pub fn build(self) -> crate::model::MessageConfiguration {
            crate::model::MessageConfiguration {
                adm_message: self.adm_message,
                apns_message: self.apns_message,
                baidu_message: self.baidu_message,
                default_message: self.default_message,
                email_message: self.email_message,
                gcm_message: self.gcm_message,
                sms_message: self.sms_message,
            }
        }
    }
}
impl MessageConfiguration {
    /// Creates a new builder-style object to manufacture [`MessageConfiguration`](crate::model::MessageConfiguration)
    pub fn builder() -> crate::model::message_configuration::Builder {
        crate::model::message_configuration::Builder::default()
    }
}

/// Send message request.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct MessageRequest {
    pub addresses: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AddressConfiguration>>,
    pub context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub endpoints: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointSendConfiguration>>,
    pub message_configuration: std::option::Option<crate::model::DirectMessageConfiguration>,
    pub trace_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for MessageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MessageRequest");
        formatter.field("addresses", &self.addresses);
        formatter.field("context", &self.context);
        formatter.field("endpoints", &self.endpoints);
        formatter.field("message_configuration", &self.message_configuration);
        formatter.field("trace_id", &self.trace_id);
        formatter.finish()
    }
}
/// See [`MessageRequest`](crate::model::MessageRequest)
pub mod message_request {
    /// A builder for [`MessageRequest`](crate::model::MessageRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) addresses: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AddressConfiguration>>,
        pub(crate) context: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) endpoints: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointSendConfiguration>>,
        pub(crate) message_configuration: std::option::Option<crate::model::DirectMessageConfiguration>,
        pub(crate) trace_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn addresses(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AddressConfiguration>,
        ) -> Self {
            let mut hash_map = self.addresses.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.addresses = Some(hash_map);
            self
        }
        pub fn set_addresses(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AddressConfiguration>>) -> Self {
            self.addresses = input;
            self
        }
        pub fn context(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.context.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.context = Some(hash_map);
            self
        }
        pub fn set_context(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.context = input;
            self
        }
        pub fn endpoints(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::EndpointSendConfiguration>,
        ) -> Self {
            let mut hash_map = self.endpoints.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.endpoints = Some(hash_map);
            self
        }
        pub fn set_endpoints(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointSendConfiguration>>) -> Self {
            self.endpoints = input;
            self
        }
        pub fn message_configuration(mut self, input: crate::model::DirectMessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::DirectMessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn trace_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.trace_id = Some(input.into());
            self
        }
        pub fn set_trace_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.trace_id = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageRequest`](crate::model::MessageRequest)
        pub fn build(self) -> crate::model::MessageRequest {
            crate::model::MessageRequest {
                addresses: self.addresses,
                context: self.context,
                endpoints: self.endpoints,
                message_configuration: self.message_configuration,
                trace_id: self.trace_id,
            }
        }
    }
}
impl MessageRequest {
    /// Creates a new builder-style object to manufacture [`MessageRequest`](crate::model::MessageRequest)
    pub fn builder() -> crate::model::message_request::Builder {
        crate::model::message_request::Builder::default()
    }
}

/// Results of a message request
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct MessageResponse {
    pub application_id: std::option::Option<std::string::String>,
    pub endpoint_result: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointMessageResult>>,
    pub request_id: std::option::Option<std::string::String>,
    pub result: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageResult>>,
}
impl std::fmt::Debug for MessageResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MessageResponse");
        formatter.field("application_id", &self.application_id);
        formatter.field("endpoint_result", &self.endpoint_result);
        formatter.field("request_id", &self.request_id);
        formatter.field("result", &self.result);
        formatter.finish()
    }
}
/// See [`MessageResponse`](crate::model::MessageResponse)
pub mod message_response {
    /// A builder for [`MessageResponse`](crate::model::MessageResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) endpoint_result: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointMessageResult>>,
        pub(crate) request_id: std::option::Option<std::string::String>,
        pub(crate) result: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageResult>>,
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
        pub fn endpoint_result(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::EndpointMessageResult>,
        ) -> Self {
            let mut hash_map = self.endpoint_result.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.endpoint_result = Some(hash_map);
            self
        }
        pub fn set_endpoint_result(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::EndpointMessageResult>>) -> Self {
            self.endpoint_result = input;
            self
        }
        pub fn request_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.request_id = Some(input.into());
            self
        }
        pub fn set_request_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.request_id = input;
            self
        }
        pub fn result(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::MessageResult>,
        ) -> Self {
            let mut hash_map = self.result.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.result = Some(hash_map);
            self
        }
        pub fn set_result(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MessageResult>>) -> Self {
            self.result = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageResponse`](crate::model::MessageResponse)
        pub fn build(self) -> crate::model::MessageResponse {
            crate::model::MessageResponse {
                application_id: self.application_id,
                endpoint_result: self.endpoint_result,
                request_id: self.request_id,
                result: self.result,
            }
        }
    }
}
impl MessageResponse {
    /// Creates a new builder-style object to manufacture [`MessageResponse`](crate::model::MessageResponse)
    pub fn builder() -> crate::model::message_response::Builder {
        crate::model::message_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct MessageResult {
    pub delivery_status: std::option::Option<crate::model::DeliveryStatus>,
    pub message_id: std::option::Option<std::string::String>,
    pub status_code: std::option::Option<i32>,
    pub status_message: std::option::Option<std::string::String>,
    pub updated_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for MessageResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MessageResult");
        formatter.field("delivery_status", &self.delivery_status);
        formatter.field("message_id", &self.message_id);
        formatter.field("status_code", &self.status_code);
        formatter.field("status_message", &self.status_message);
        formatter.field("updated_token", &self.updated_token);
        formatter.finish()
    }
}
/// See [`MessageResult`](crate::model::MessageResult)
pub mod message_result {
    /// A builder for [`MessageResult`](crate::model::MessageResult)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) delivery_status: std::option::Option<crate::model::DeliveryStatus>,
        pub(crate) message_id: std::option::Option<std::string::String>,
        pub(crate) status_code: std::option::Option<i32>,
        pub(crate) status_message: std::option::Option<std::string::String>,
        pub(crate) updated_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn delivery_status(mut self, input: crate::model::DeliveryStatus) -> Self {
            self.delivery_status = Some(input);
            self
        }
        pub fn set_delivery_status(mut self, input: std::option::Option<crate::model::DeliveryStatus>) -> Self {
            self.delivery_status = input;
            self
        }
        pub fn message_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.message_id = Some(input.into());
            self
        }
        pub fn set_message_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message_id = input;
            self
        }
        pub fn status_code(mut self, input: i32) -> Self {
            self.status_code = Some(input);
            self
        }
        pub fn set_status_code(mut self, input: std::option::Option<i32>) -> Self {
            self.status_code = input;
            self
        }
        pub fn status_message(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_message = Some(input.into());
            self
        }
        pub fn set_status_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_message = input;
            self
        }
        pub fn updated_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.updated_token = Some(input.into());
            self
        }
        pub fn set_updated_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.updated_token = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageResult`](crate::model::MessageResult)
        pub fn build(self) -> crate::model::MessageResult {
            crate::model::MessageResult {
                delivery_status: self.delivery_status,
                message_id: self.message_id,
                status_code: self.status_code,
                status_message: self.status_message,
                updated_token: self.updated_token,
            }
        }
    }
}
impl MessageResult {
    /// Creates a new builder-style object to manufacture [`MessageResult`](crate::model::MessageResult)
    pub fn builder() -> crate::model::message_result::Builder {
        crate::model::message_result::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum MessageType {
    Transactional,
    Promotional,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for MessageType {
    fn from(s: &str) -> Self {
        match s {
            "TRANSACTIONAL" => MessageType::Transactional,
            "PROMOTIONAL" => MessageType::Promotional,
            other => MessageType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for MessageType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(MessageType::from(s))
    }
}
impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Transactional => "TRANSACTIONAL",
            MessageType::Promotional => "PROMOTIONAL",
            MessageType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["TRANSACTIONAL", "PROMOTIONAL"]
    }
}
impl AsRef<str> for MessageType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct MetricDimension {
    /// `GREATER_THAN`, `LESS_THAN`, `GREATER_THAN_OR_EQUAL`, `LESS_THAN_OR_EQUAL` or `EQUAL`
    pub comparison_operator: std::option::Option<std::string::String>,
    pub value: std::option::Option<f64>,
}
impl std::fmt::Debug for MetricDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("MetricDimension");
        formatter.field("comparison_operator", &self.comparison_operator);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
/// See [`MetricDimension`](crate::model::MetricDimension)
pub mod metric_dimension {
    /// A builder for [`MetricDimension`](crate::model::MetricDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) comparison_operator: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<f64>,
    }
    impl Builder {
        /// `GREATER_THAN`, `LESS_THAN`, `GREATER_THAN_OR_EQUAL`, `LESS_THAN_OR_EQUAL` or `EQUAL`
        pub fn comparison_operator(mut self, input: impl Into<std::string::String>) -> Self {
            self.comparison_operator = Some(input.into());
            self
        }
        pub fn set_comparison_operator(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.comparison_operator = input;
            self
        }
        pub fn value(mut self, input: f64) -> Self {
            self.value = Some(input);
            self
        }
        pub fn set_value(mut self, input: std::option::Option<f64>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`MetricDimension`](crate::model::MetricDimension)
        pub fn build(self) -> crate::model::MetricDimension {
            crate::model::MetricDimension {
                comparison_operator: self.comparison_operator,
                value: self.value,
            }
        }
    }
}
impl MetricDimension {
    /// Creates a new builder-style object to manufacture [`MetricDimension`](crate::model::MetricDimension)
    pub fn builder() -> crate::model::metric_dimension::Builder {
        crate::model::metric_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Mode {
    Delivery,
    Filter,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for Mode {
    fn from(s: &str) -> Self {
        match s {
            "DELIVERY" => Mode::Delivery,
            "FILTER" => Mode::Filter,
            other => Mode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Mode::from(s))
    }
}
impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Delivery => "DELIVERY",
            Mode::Filter => "FILTER",
            Mode::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["DELIVERY", "FILTER"]
    }
}
impl AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Quiet time window, in `HH:mm` local time.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct QuietTime {
    pub end: std::option::Option<std::string::String>,
    pub start: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for QuietTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("QuietTime");
        formatter.field("end", &self.end);
        formatter.field("start", &self.start);
        formatter.finish()
    }
}
/// See [`QuietTime`](crate::model::QuietTime)
pub mod quiet_time {
    /// A builder for [`QuietTime`](crate::model::QuietTime)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end: std::option::Option<std::string::String>,
        pub(crate) start: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn end(mut self, input: impl Into<std::string::String>) -> Self {
            self.end = Some(input.into());
            self
        }
        pub fn set_end(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.end = input;
            self
        }
        pub fn start(mut self, input: impl Into<std::string::String>) -> Self {
            self.start = Some(input.into());
            self
        }
        pub fn set_start(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start = input;
            self
        }
        /// Consumes the builder and constructs a [`QuietTime`](crate::model::QuietTime)
        pub fn build(self) -> crate::model::QuietTime {
            crate::model::QuietTime {
                end: self.end,
                start: self.start,
            }
        }
    }
}
impl QuietTime {
    /// Creates a new builder-style object to manufacture [`QuietTime`](crate::model::QuietTime)
    pub fn builder() -> crate::model::quiet_time::Builder {
        crate::model::quiet_time::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct RandomSplitActivity {
    pub branches: std::option::Option<std::vec::Vec<crate::model::RandomSplitEntry>>,
}
impl std::fmt::Debug for RandomSplitActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RandomSplitActivity");
        formatter.field("branches", &self.branches);
        formatter.finish()
    }
}
/// See [`RandomSplitActivity`](crate::model::RandomSplitActivity)
pub mod random_split_activity {
    /// A builder for [`RandomSplitActivity`](crate::model::RandomSplitActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) branches: std::option::Option<std::vec::Vec<crate::model::RandomSplitEntry>>,
    }
    impl Builder {
        pub fn branches(mut self, input: impl Into<crate::model::RandomSplitEntry>) -> Self {
            let mut v = self.branches.unwrap_or_default();
            v.push(input.into());
            self.branches = Some(v);
            self
        }
        pub fn set_branches(mut self, input: std::option::Option<std::vec::Vec<crate::model::RandomSplitEntry>>) -> Self {
            self.branches = input;
            self
        }
        /// Consumes the builder and constructs a [`RandomSplitActivity`](crate::model::RandomSplitActivity)
        pub fn build(self) -> crate::model::RandomSplitActivity {
            crate::model::RandomSplitActivity {
                branches: self.branches,
            }
        }
    }
}
impl RandomSplitActivity {
    /// Creates a new builder-style object to manufacture [`RandomSplitActivity`](crate::model::RandomSplitActivity)
    pub fn builder() -> crate::model::random_split_activity::Builder {
        crate::model::random_split_activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct RandomSplitEntry {
    pub next_activity: std::option::Option<std::string::String>,
    pub percentage: std::option::Option<i32>,
}
impl std::fmt::Debug for RandomSplitEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RandomSplitEntry");
        formatter.field("next_activity", &self.next_activity);
        formatter.field("percentage", &self.percentage);
        formatter.finish()
    }
}
/// See [`RandomSplitEntry`](crate::model::RandomSplitEntry)
pub mod random_split_entry {
    /// A builder for [`RandomSplitEntry`](crate::model::RandomSplitEntry)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) percentage: std::option::Option<i32>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn percentage(mut self, input: i32) -> Self {
            self.percentage = Some(input);
            self
        }
        pub fn set_percentage(mut self, input: std::option::Option<i32>) -> Self {
            self.percentage = input;
            self
        }
        /// Consumes the builder and constructs a [`RandomSplitEntry`](crate::model::RandomSplitEntry)
        pub fn build(self) -> crate::model::RandomSplitEntry {
            crate::model::RandomSplitEntry {
                next_activity: self.next_activity,
                percentage: self.percentage,
            }
        }
    }
}
impl RandomSplitEntry {
    /// Creates a new builder-style object to manufacture [`RandomSplitEntry`](crate::model::RandomSplitEntry)
    pub fn builder() -> crate::model::random_split_entry::Builder {
        crate::model::random_split_entry::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct RecencyDimension {
    pub duration: std::option::Option<crate::model::Duration>,
    pub recency_type: std::option::Option<crate::model::RecencyType>,
}
impl std::fmt::Debug for RecencyDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RecencyDimension");
        formatter.field("duration", &self.duration);
        formatter.field("recency_type", &self.recency_type);
        formatter.finish()
    }
}
/// See [`RecencyDimension`](crate::model::RecencyDimension)
pub mod recency_dimension {
    /// A builder for [`RecencyDimension`](crate::model::RecencyDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) duration: std::option::Option<crate::model::Duration>,
        pub(crate) recency_type: std::option::Option<crate::model::RecencyType>,
    }
    impl Builder {
        pub fn duration(mut self, input: crate::model::Duration) -> Self {
            self.duration = Some(input);
            self
        }
        pub fn set_duration(mut self, input: std::option::Option<crate::model::Duration>) -> Self {
            self.duration = input;
            self
        }
        pub fn recency_type(mut self, input: crate::model::RecencyType) -> Self {
            self.recency_type = Some(input);
            self
        }
        pub fn set_recency_type(mut self, input: std::option::Option<crate::model::RecencyType>) -> Self {
            self.recency_type = input;
            self
        }
        /// Consumes the builder and constructs a [`RecencyDimension`](crate::model::RecencyDimension)
        pub fn build(self) -> crate::model::RecencyDimension {
            crate::model::RecencyDimension {
                duration: self.duration,
                recency_type: self.recency_type,
            }
        }
    }
}
impl RecencyDimension {
    /// Creates a new builder-style object to manufacture [`RecencyDimension`](crate::model::RecencyDimension)
    pub fn builder() -> crate::model::recency_dimension::Builder {
        crate::model::recency_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum RecencyType {
    Active,
    Inactive,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for RecencyType {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => RecencyType::Active,
            "INACTIVE" => RecencyType::Inactive,
            other => RecencyType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for RecencyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RecencyType::from(s))
    }
}
impl RecencyType {
    pub fn as_str(&self) -> &str {
        match self {
            RecencyType::Active => "ACTIVE",
            RecencyType::Inactive => "INACTIVE",
            RecencyType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "INACTIVE"]
    }
}
impl AsRef<str> for RecencyType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ResultRow {
    pub grouped_bys: std::option::Option<std::vec::Vec<crate::model::ResultRowValue>>,
    pub values: std::option::Option<std::vec::Vec<crate::model::ResultRowValue>>,
}
impl std::fmt::Debug for ResultRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ResultRow");
        formatter.field("grouped_bys", &self.grouped_bys);
        formatter.field("values", &self.values);
        formatter.finish()
    }
}
/// See [`ResultRow`](crate::model::ResultRow)
pub mod result_row {
    /// A builder for [`ResultRow`](crate::model::ResultRow)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) grouped_bys: std::option::Option<std::vec::Vec<crate::model::ResultRowValue>>,
        pub(crate) values: std::option::Option<std::vec::Vec<crate::model::ResultRowValue>>,
    }
    impl Builder {
        pub fn grouped_bys(mut self, input: impl Into<crate::model::ResultRowValue>) -> Self {
            let mut v = self.grouped_bys.unwrap_or_default();
            v.push(input.into());
            self.grouped_bys = Some(v);
            self
        }
        pub fn set_grouped_bys(mut self, input: std::option::Option<std::vec::Vec<crate::model::ResultRowValue>>) -> Self {
            self.grouped_bys = input;
            self
        }
        pub fn values(mut self, input: impl Into<crate::model::ResultRowValue>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<crate::model::ResultRowValue>>) -> Self {
            self.values = input;
            self
        }
        /// Consumes the builder and constructs a [`ResultRow`](crate::model::ResultRow)
        pub fn build(self) -> crate::model::ResultRow {
            crate::model::ResultRow {
                grouped_bys: self.grouped_bys,
                values: self.values,
            }
        }
    }
}
impl ResultRow {
    /// Creates a new builder-style object to manufacture [`ResultRow`](crate::model::ResultRow)
    pub fn builder() -> crate::model::result_row::Builder {
        crate::model::result_row::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ResultRowValue {
    pub key: std::option::Option<std::string::String>,
    /// Data type of `value`
    pub r#type: std::option::Option<std::string::String>,
    pub value: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ResultRowValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ResultRowValue");
        formatter.field("key", &self.key);
        formatter.field("r#type", &self.r#type);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
/// See [`ResultRowValue`](crate::model::ResultRowValue)
pub mod result_row_value {
    /// A builder for [`ResultRowValue`](crate::model::ResultRowValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        /// Data type of `value`
        pub fn r#type(mut self, input: impl Into<std::string::String>) -> Self {
            self.r#type = Some(input.into());
            self
        }
        pub fn set_type(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.r#type = input;
            self
        }
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`ResultRowValue`](crate::model::ResultRowValue)
        pub fn build(self) -> crate::model::ResultRowValue {
            crate::model::ResultRowValue {
                key: self.key,
                r#type: self.r#type,
                value: self.value,
            }
        }
    }
}
impl ResultRowValue {
    /// Creates a new builder-style object to manufacture [`ResultRowValue`](crate::model::ResultRowValue)
    pub fn builder() -> crate::model::result_row_value::Builder {
        crate::model::result_row_value::Builder::default()
    }
}

/// Schedule that controls when a campaign runs.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Schedule {
    pub end_time: std::option::Option<std::string::String>,
    pub event_filter: std::option::Option<crate::model::CampaignEventFilter>,
    pub frequency: std::option::Option<crate::model::Frequency>,
    pub is_local_time: std::option::Option<bool>,
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
    pub start_time: std::option::Option<std::string::String>,
    pub timezone: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Schedule");
        formatter.field("end_time", &self.end_time);
        formatter.field("event_filter", &self.event_filter);
        formatter.field("frequency", &self.frequency);
        formatter.field("is_local_time", &self.is_local_time);
        formatter.field("quiet_time", &self.quiet_time);
        formatter.field("start_time", &self.start_time);
        formatter.field("timezone", &self.timezone);
        formatter.finish()
    }
}
/// See [`Schedule`](crate::model::Schedule)
pub mod schedule {
    /// A builder for [`Schedule`](crate::model::Schedule)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) end_time: std::option::Option<std::string::String>,
        pub(crate) event_filter: std::option::Option<crate::model::CampaignEventFilter>,
        pub(crate) frequency: std::option::Option<crate::model::Frequency>,
        pub(crate) is_local_time: std::option::Option<bool>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
        pub(crate) start_time: std::option::Option<std::string::String>,
        pub(crate) timezone: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn end_time(mut self, input: impl Into<std::string::String>) -> Self {
            self.end_time = Some(input.into());
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.end_time = input;
            self
        }
        pub fn event_filter(mut self, input: crate::model::CampaignEventFilter) -> Self {
            self.event_filter = Some(input);
            self
        }
        pub fn set_event_filter(mut self, input: std::option::Option<crate::model::CampaignEventFilter>) -> Self {
            self.event_filter = input;
            self
        }
        pub fn frequency(mut self, input: crate::model::Frequency) -> Self {
            self.frequency = Some(input);
            self
        }
        pub fn set_frequency(mut self, input: std::option::Option<crate::model::Frequency>) -> Self {
            self.frequency = input;
            self
        }
        pub fn is_local_time(mut self, input: bool) -> Self {
            self.is_local_time = Some(input);
            self
        }
        pub fn set_is_local_time(mut self, input: std::option::Option<bool>) -> Self {
            self.is_local_time = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        pub fn start_time(mut self, input: impl Into<std::string::String>) -> Self {
            self.start_time = Some(input.into());
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.start_time = input;
            self
        }
        pub fn timezone(mut self, input: impl Into<std::string::String>) -> Self {
            self.timezone = Some(input.into());
            self
        }
        pub fn set_timezone(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.timezone = input;
            self
        }
        /// Consumes the builder and constructs a [`Schedule`](crate::model::Schedule)
        pub fn build(self) -> crate::model::Schedule {
            crate::model::Schedule {
                end_time: self.end_time,
                event_filter: self.event_filter,
                frequency: self.frequency,
                is_local_time: self.is_local_time,
                quiet_time: self.quiet_time,
                start_time: self.start_time,
                timezone: self.timezone,
            }
        }
    }
}
impl Schedule {
    /// Creates a new builder-style object to manufacture [`Schedule`](crate::model::Schedule)
    pub fn builder() -> crate::model::schedule::Builder {
        crate::model::schedule::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SegmentBehaviors {
    pub recency: std::option::Option<crate::model::RecencyDimension>,
}
impl std::fmt::Debug for SegmentBehaviors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SegmentBehaviors");
        formatter.field("recency", &self.recency);
        formatter.finish()
    }
}
/// See [`SegmentBehaviors`](crate::model::SegmentBehaviors)
pub mod segment_behaviors {
    /// A builder for [`SegmentBehaviors`](crate::model::SegmentBehaviors)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) recency: std::option::Option<crate::model::RecencyDimension>,
    }
    impl Builder {
        pub fn recency(mut self, input: crate::model::RecencyDimension) -> Self {
            self.recency = Some(input);
            self
        }
        pub fn set_recency(mut self, input: std::option::Option<crate::model::RecencyDimension>) -> Self {
            self.recency = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentBehaviors`](crate::model::SegmentBehaviors)
        pub fn build(self) -> crate::model::SegmentBehaviors {
            crate::model::SegmentBehaviors {
                recency: self.recency,
            }
        }
    }
}
impl SegmentBehaviors {
    /// Creates a new builder-style object to manufacture [`SegmentBehaviors`](crate::model::SegmentBehaviors)
    pub fn builder() -> crate::model::segment_behaviors::Builder {
        crate::model::segment_behaviors::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SegmentCondition {
    pub segment_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for SegmentCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SegmentCondition");
        formatter.field("segment_id", &self.segment_id);
        formatter.finish()
    }
}
/// See [`SegmentCondition`](crate::model::SegmentCondition)
pub mod segment_condition {
    /// A builder for [`SegmentCondition`](crate::model::SegmentCondition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) segment_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn segment_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.segment_id = Some(input.into());
            self
        }
        pub fn set_segment_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.segment_id = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentCondition`](crate::model::SegmentCondition)
        pub fn build(self) -> crate::model::SegmentCondition {
            crate::model::SegmentCondition {
                segment_id: self.segment_id,
            }
        }
    }
}
impl SegmentCondition {
    /// Creates a new builder-style object to manufacture [`SegmentCondition`](crate::model::SegmentCondition)
    pub fn builder() -> crate::model::segment_condition::Builder {
        crate::model::segment_condition::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SegmentDemographics {
    pub app_version: std::option::Option<crate::model::SetDimension>,
    pub channel: std::option::Option<crate::model::SetDimension>,
    pub device_type: std::option::Option<crate::model::SetDimension>,
    pub make: std::option::Option<crate::model::SetDimension>,
    pub model: std::option::Option<crate::model::SetDimension>,
    pub platform: std::option::Option<crate::model::SetDimension>,
}
impl std::fmt::Debug for SegmentDemographics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SegmentDemographics");
        formatter.field("app_version", &self.app_version);
        formatter.field("channel", &self.channel);
        formatter.field("device_type", &self.device_type);
        formatter.field("make", &self.make);
        formatter.field("model", &self.model);
        formatter.field("platform", &self.platform);
        formatter.finish()
    }
}
/// See [`SegmentDemographics`](crate::model::SegmentDemographics)
pub mod segment_demographics {
    /// A builder for [`SegmentDemographics`](crate::model::SegmentDemographics)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) app_version: std::option::Option<crate::model::SetDimension>,
        pub(crate) channel: std::option::Option<crate::model::SetDimension>,
        pub(crate) device_type: std::option::Option<crate::model::SetDimension>,
        pub(crate) make: std::option::Option<crate::model::SetDimension>,
        pub(crate) model: std::option::Option<crate::model::SetDimension>,
        pub(crate) platform: std::option::Option<crate::model::SetDimension>,
    }
    impl Builder {
        pub fn app_version(mut self, input: crate::model::SetDimension) -> Self {
            self.app_version = Some(input);
            self
        }
        pub fn set_app_version(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.app_version = input;
            self
        }
        pub fn channel(mut self, input: crate::model::SetDimension) -> Self {
            self.channel = Some(input);
            self
        }
        pub fn set_channel(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.channel = input;
            self
        }
        pub fn device_type(mut self, input: crate::model::SetDimension) -> Self {
            self.device_type = Some(input);
            self
        }
        pub fn set_device_type(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.device_type = input;
            self
        }
        pub fn make(mut self, input: crate::model::SetDimension) -> Self {
            self.make = Some(input);
            self
        }
        pub fn set_make(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.make = input;
            self
        }
        pub fn model(mut self, input: crate::model::SetDimension) -> Self {
            self.model = Some(input);
            self
        }
        pub fn set_model(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.model = input;
            self
        }
        pub fn platform(mut self, input: crate::model::SetDimension) -> Self {
            self.platform = Some(input);
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.platform = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentDemographics`](crate::model::SegmentDemographics)
        pub fn build(self) -> crate::model::SegmentDemographics {
            crate::model::SegmentDemographics {
                app_version: self.app_version,
                channel: self.channel,
                device_type: self.device_type,
                make: self.make,
                model: self.model,
                platform: self.platform,
            }
        }
    }
}
impl SegmentDemographics {
    /// Creates a new builder-style object to manufacture [`SegmentDemographics`](crate::model::SegmentDemographics)
    pub fn builder() -> crate::model::segment_demographics::Builder {
        crate::model::segment_demographics::Builder::default()
    }
}

/// Segment dimensions attributes.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SegmentDimensions {
    pub attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
    pub behavior: std::option::Option<crate::model::SegmentBehaviors>,
    pub demographic: std::option::Option<crate::model::SegmentDemographics>,
    pub location: std::option::Option<crate::model::SegmentLocation>,
    pub metrics: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>,
    pub user_attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
}
impl std::fmt::Debug for SegmentDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SegmentDimensions");
        formatter.field("attributes", &self.attributes);
        formatter.field("behavior", &self.behavior);
        formatter.field("demographic", &self.demographic);
        formatter.field("location", &self.location);
        formatter.field("metrics", &self.metrics);
        formatter.field("user_attributes", &self.user_attributes);
        formatter.finish()
    }
}
/// See [`SegmentDimensions`](crate::model::SegmentDimensions)
pub mod segment_dimensions {
    /// A builder for [`SegmentDimensions`](crate::model::SegmentDimensions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
        pub(crate) behavior: std::option::Option<crate::model::SegmentBehaviors>,
        pub(crate) demographic: std::option::Option<crate::model::SegmentDemographics>,
        pub(crate) location: std::option::Option<crate::model::SegmentLocation>,
        pub(crate) metrics: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>,
        pub(crate) user_attributes: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>,
    }
    impl Builder {
        pub fn attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeDimension>,
        ) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>) -> Self {
            self.attributes = input;
            self
        }
        pub fn behavior(mut self, input: crate::model::SegmentBehaviors) -> Self {
            self.behavior = Some(input);
            self
        }
        pub fn set_behavior(mut self, input: std::option::Option<crate::model::SegmentBehaviors>) -> Self {
            self.behavior = input;
            self
        }
        pub fn demographic(mut self, input: crate::model::SegmentDemographics) -> Self {
            self.demographic = Some(input);
            self
        }
        pub fn set_demographic(mut self, input: std::option::Option<crate::model::SegmentDemographics>) -> Self {
            self.demographic = input;
            self
        }
        pub fn location(mut self, input: crate::model::SegmentLocation) -> Self {
            self.location = Some(input);
            self
        }
        pub fn set_location(mut self, input: std::option::Option<crate::model::SegmentLocation>) -> Self {
            self.location = input;
            self
        }
        pub fn metrics(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::MetricDimension>,
        ) -> Self {
            let mut hash_map = self.metrics.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.metrics = Some(hash_map);
            self
        }
        pub fn set_metrics(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::MetricDimension>>) -> Self {
            self.metrics = input;
            self
        }
        pub fn user_attributes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeDimension>,
        ) -> Self {
            let mut hash_map = self.user_attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.user_attributes = Some(hash_map);
            self
        }
        pub fn set_user_attributes(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeDimension>>) -> Self {
            self.user_attributes = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentDimensions`](crate::model::SegmentDimensions)
        pub fn build(self) -> crate::model::SegmentDimensions {
            crate::model::SegmentDimensions {
                attributes: self.attributes,
                behavior: self.behavior,
                demographic: self.demographic,
                location: self.location,
                metrics: self.metrics,
                user_attributes: self.user_attributes,
            }
        }
    }
}
impl SegmentDimensions {
    /// Creates a new builder-style object to manufacture [`SegmentDimensions`](crate::model::SegmentDimensions)
    pub fn builder() -> crate::model::segment_dimensions::Builder {
        crate::model::segment_dimensions::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SegmentImportResource {
    pub channel_counts: std::option::Option<std::collections::HashMap<std::string::String, i32>>,
    pub external_id: std::option::Option<std::string::String>,
    pub format: std::option::Option<crate::model::Format>,
    pub role_arn: std::option::Option<std::string::String>,
    pub s3_url: std::option::Option<std::string::String>,
    pub size: std::option::Option<i32>,
}
impl std::fmt::Debug for SegmentImportResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SegmentImportResource");
        formatter.field("channel_counts", &self.channel_counts);
        formatter.field("external_id", &self.external_id);
        formatter.field("format", &self.format);
        formatter.field("role_arn", &self.role_arn);
        formatter.field("s3_url", &self.s3_url);
        formatter.field("size", &self.size);
        formatter.finish()
    }
}
/// See [`SegmentImportResource`](crate::model::SegmentImportResource)
pub mod segment_import_resource {
    /// A builder for [`SegmentImportResource`](crate::model::SegmentImportResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) channel_counts: std::option::Option<std::collections::HashMap<std::string::String, i32>>,
        pub(crate) external_id: std::option::Option<std::string::String>,
        pub(crate) format: std::option::Option<crate::model::Format>,
        pub(crate) role_arn: std::option::Option<std::string::String>,
        pub(crate) s3_url: std::option::Option<std::string::String>,
        pub(crate) size: std::option::Option<i32>,
    }
    impl Builder {
        pub fn channel_counts(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<i32>,
        ) -> Self {
            let mut hash_map = self.channel_counts.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.channel_counts = Some(hash_map);
            self
        }
        pub fn set_channel_counts(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, i32>>) -> Self {
            self.channel_counts = input;
            self
        }
        pub fn external_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.external_id = Some(input.into());
            self
        }
        pub fn set_external_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.external_id = input;
            self
        }
        pub fn format(mut self, input: crate::model::Format) -> Self {
            self.format = Some(input);
            self
        }
        pub fn set_format(mut self, input: std::option::Option<crate::model::Format>) -> Self {
            self.format = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn s3_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_url = Some(input.into());
            self
        }
        pub fn set_s3_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_url = input;
            self
        }
        pub fn size(mut self, input: i32) -> Self {
            self.size = Some(input);
            self
        }
        pub fn set_size(mut self, input: std::option::Option<i32>) -> Self {
            self.size = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentImportResource`](crate::model::SegmentImportResource)
        pub fn build(self) -> crate::model::SegmentImportResource {
            crate::model::SegmentImportResource {
                channel_counts: self.channel_counts,
                external_id: self.external_id,
                format: self.format,
                role_arn: self.role_arn,
                s3_url: self.s3_url,
                size: self.size,
            }
        }
    }
}
impl SegmentImportResource {
    /// Creates a new builder-style object to manufacture [`SegmentImportResource`](crate::model::SegmentImportResource)
    pub fn builder() -> crate::model::segment_import_resource::Builder {
        crate::model::segment_import_resource::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SegmentLocation {
    pub country: std::option::Option<crate::model::SetDimension>,
    pub gps_point: std::option::Option<crate::model::GpsPointDimension>,
}
impl std::fmt::Debug for SegmentLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SegmentLocation");
        formatter.field("country", &self.country);
        formatter.field("gps_point", &self.gps_point);
        formatter.finish()
    }
}
/// See [`SegmentLocation`](crate::model::SegmentLocation)
pub mod segment_location {
    /// A builder for [`SegmentLocation`](crate::model::SegmentLocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) country: std::option::Option<crate::model::SetDimension>,
        pub(crate) gps_point: std::option::Option<crate::model::GpsPointDimension>,
    }
    impl Builder {
        pub fn country(mut self, input: crate::model::SetDimension) -> Self {
            self.country = Some(input);
            self
        }
        pub fn set_country(mut self, input: std::option::Option<crate::model::SetDimension>) -> Self {
            self.country = input;
            self
        }
        pub fn gps_point(mut self, input: crate::model::GpsPointDimension) -> Self {
            self.gps_point = Some(input);
            self
        }
        pub fn set_gps_point(mut self, input: std::option::Option<crate::model::GpsPointDimension>) -> Self {
            self.gps_point = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentLocation`](crate::model::SegmentLocation)
        pub fn build(self) -> crate::model::SegmentLocation {
            crate::model::SegmentLocation {
                country: self.country,
                gps_point: self.gps_point,
            }
        }
    }
}
impl SegmentLocation {
    /// Creates a new builder-style object to manufacture [`SegmentLocation`](crate::model::SegmentLocation)
    pub fn builder() -> crate::model::segment_location::Builder {
        crate::model::segment_location::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SegmentResponse {
    pub application_id: std::option::Option<std::string::String>,
    pub arn: std::option::Option<std::string::String>,
    pub creation_date: std::option::Option<std::string::String>,
    pub dimensions: std::option::Option<crate::model::SegmentDimensions>,
    pub id: std::option::Option<std::string::String>,
    pub import_definition: std::option::Option<crate::model::SegmentImportResource>,
    pub last_modified_date: std::option::Option<std::string::String>,
    pub name: std::option::Option<std::string::String>,
    pub segment_type: std::option::Option<crate::model::SegmentType>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub version: std::option::Option<i32>,
}
impl std::fmt::Debug for SegmentResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SegmentResponse");
        formatter.field("application_id", &self.application_id);
        formatter.field("arn", &self.arn);
        formatter.field("creation_date", &self.creation_date);
        formatter.field("dimensions", &self.dimensions);
        formatter.field("id", &self.id);
        formatter.field("import_definition", &self.import_definition);
        formatter.field("last_modified_date", &self.last_modified_date);
        formatter.field("name", &self.name);
        formatter.field("segment_type", &self.segment_type);
        formatter.field("tags", &self.tags);
        formatter.field("version", &self.version);
        formatter.finish()
    }
}
/// See [`SegmentResponse`](crate::model::SegmentResponse)
pub mod segment_response {
    /// A builder for [`SegmentResponse`](crate::model::SegmentResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) application_id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) creation_date: std::option::Option<std::string::String>,
        pub(crate) dimensions: std::option::Option<crate::model::SegmentDimensions>,
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) import_definition: std::option::Option<crate::model::SegmentImportResource>,
        pub(crate) last_modified_date: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) segment_type: std::option::Option<crate::model::SegmentType>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) version: std::option::Option<i32>,
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
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn creation_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.creation_date = Some(input.into());
            self
        }
        pub fn set_creation_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.creation_date = input;
            self
        }
        pub fn dimensions(mut self, input: crate::model::SegmentDimensions) -> Self {
            self.dimensions = Some(input);
            self
        }
        pub fn set_dimensions(mut self, input: std::option::Option<crate::model::SegmentDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn import_definition(mut self, input: crate::model::SegmentImportResource) -> Self {
            self.import_definition = Some(input);
            self
        }
        pub fn set_import_definition(mut self, input: std::option::Option<crate::model::SegmentImportResource>) -> Self {
            self.import_definition = input;
            self
        }
        pub fn last_modified_date(mut self, input: impl Into<std::string::String>) -> Self {
            self.last_modified_date = Some(input.into());
            self
        }
        pub fn set_last_modified_date(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.last_modified_date = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn segment_type(mut self, input: crate::model::SegmentType) -> Self {
            self.segment_type = Some(input);
            self
        }
        pub fn set_segment_type(mut self, input: std::option::Option<crate::model::SegmentType>) -> Self {
            self.segment_type = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn version(mut self, input: i32) -> Self {
            self.version = Some(input);
            self
        }
        pub fn set_version(mut self, input: std::option::Option<i32>) -> Self {
            self.version = input;
            self
        }
        /// Consumes the builder and constructs a [`SegmentResponse`](crate::model::SegmentResponse)
        pub fn build(self) -> crate::model::SegmentResponse {
            crate::model::SegmentResponse {
                application_id: self.application_id,
                arn: self.arn,
                creation_date: self.creation_date,
                dimensions: self.dimensions,
                id: self.id,
                import_definition: self.import_definition,
                last_modified_date: self.last_modified_date,
                name: self.name,
                segment_type: self.segment_type,
                tags: self.tags,
                version: self.version,
            }
        }
    }
}
impl SegmentResponse {
    /// Creates a new builder-style object to manufacture [`SegmentResponse`](crate::model::SegmentResponse)
    pub fn builder() -> crate::model::segment_response::Builder {
        crate::model::segment_response::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SegmentType {
    Dimensional,
    Import,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SegmentType {
    fn from(s: &str) -> Self {
        match s {
            "DIMENSIONAL" => SegmentType::Dimensional,
            "IMPORT" => SegmentType::Import,
            other => SegmentType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SegmentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SegmentType::from(s))
    }
}
impl SegmentType {
    pub fn as_str(&self) -> &str {
        match self {
            SegmentType::Dimensional => "DIMENSIONAL",
            SegmentType::Import => "IMPORT",
            SegmentType::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["DIMENSIONAL", "IMPORT"]
    }
}
impl AsRef<str> for SegmentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SegmentsResponse {
    pub item: std::option::Option<std::vec::Vec<crate::model::SegmentResponse>>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for SegmentsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SegmentsResponse");
        formatter.field("item", &self.item);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`SegmentsResponse`](crate::model::SegmentsResponse)
pub mod segments_response {
    /// A builder for [`SegmentsResponse`](crate::model::SegmentsResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) item: std::option::Option<std::vec::Vec<crate::model::SegmentResponse>>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn item(mut self, input: impl Into<crate::model::SegmentResponse>) -> Self {
            let mut v = self.item.unwrap_or_default();
            v.push(input.into());
            self.item = Some(v);
            self
        }
        pub fn set_item(mut self, input: std::option::Option<std::vec::Vec<crate::model::SegmentResponse>>) -> Self {
            self.item = input;
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
        /// Consumes the builder and constructs a [`SegmentsResponse`](crate::model::SegmentsResponse)
        pub fn build(self) -> crate::model::SegmentsResponse {
            crate::model::SegmentsResponse {
                item: self.item,
                next_token: self.next_token,
            }
        }
    }
}
impl SegmentsResponse {
    /// Creates a new builder-style object to manufacture [`SegmentsResponse`](crate::model::SegmentsResponse)
    pub fn builder() -> crate::model::segments_response::Builder {
        crate::model::segments_response::Builder::default()
    }
}

/// Dimension specification of a segment.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SetDimension {
    pub dimension_type: std::option::Option<crate::model::DimensionType>,
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for SetDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SetDimension");
        formatter.field("dimension_type", &self.dimension_type);
        formatter.field("values", &self.values);
        formatter.finish()
    }
}
/// See [`SetDimension`](crate::model::SetDimension)
pub mod set_dimension {
    /// A builder for [`SetDimension`](crate::model::SetDimension)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimension_type: std::option::Option<crate::model::DimensionType>,
        pub(crate) values: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn dimension_type(mut self, input: crate::model::DimensionType) -> Self {
            self.dimension_type = Some(input);
            self
        }
        pub fn set_dimension_type(mut self, input: std::option::Option<crate::model::DimensionType>) -> Self {
            self.dimension_type = input;
            self
        }
        pub fn values(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(input.into());
            self.values = Some(v);
            self
        }
        pub fn set_values(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.values = input;
            self
        }
        /// Consumes the builder and constructs a [`SetDimension`](crate::model::SetDimension)
        pub fn build(self) -> crate::model::SetDimension {
            crate::model::SetDimension {
                dimension_type: self.dimension_type,
                values: self.values,
            }
        }
    }
}
impl SetDimension {
    /// Creates a new builder-style object to manufacture [`SetDimension`](crate::model::SetDimension)
    pub fn builder() -> crate::model::set_dimension::Builder {
        crate::model::set_dimension::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SmsMessage {
    pub body: std::option::Option<std::string::String>,
    pub keyword: std::option::Option<std::string::String>,
    pub message_type: std::option::Option<crate::model::MessageType>,
    pub origination_number: std::option::Option<std::string::String>,
    pub sender_id: std::option::Option<std::string::String>,
    pub substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
}
impl std::fmt::Debug for SmsMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SmsMessage");
        formatter.field("body", &self.body);
        formatter.field("keyword", &self.keyword);
        formatter.field("message_type", &self.message_type);
        formatter.field("origination_number", &self.origination_number);
        formatter.field("sender_id", &self.sender_id);
        formatter.field("substitutions", &self.substitutions);
        formatter.finish()
    }
}
/// See [`SmsMessage`](crate::model::SmsMessage)
pub mod sms_message {
    /// A builder for [`SmsMessage`](crate::model::SmsMessage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) body: std::option::Option<std::string::String>,
        pub(crate) keyword: std::option::Option<std::string::String>,
        pub(crate) message_type: std::option::Option<crate::model::MessageType>,
        pub(crate) origination_number: std::option::Option<std::string::String>,
        pub(crate) sender_id: std::option::Option<std::string::String>,
        pub(crate) substitutions: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>,
    }
    impl Builder {
        pub fn body(mut self, input: impl Into<std::string::String>) -> Self {
            self.body = Some(input.into());
            self
        }
        pub fn set_body(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.body = input;
            self
        }
        pub fn keyword(mut self, input: impl Into<std::string::String>) -> Self {
            self.keyword = Some(input.into());
            self
        }
        pub fn set_keyword(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.keyword = input;
            self
        }
        pub fn message_type(mut self, input: crate::model::MessageType) -> Self {
            self.message_type = Some(input);
            self
        }
        pub fn set_message_type(mut self, input: std::option::Option<crate::model::MessageType>) -> Self {
            self.message_type = input;
            self
        }
        pub fn origination_number(mut self, input: impl Into<std::string::String>) -> Self {
            self.origination_number = Some(input.into());
            self
        }
        pub fn set_origination_number(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.origination_number = input;
            self
        }
        pub fn sender_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.sender_id = Some(input.into());
            self
        }
        pub fn set_sender_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sender_id = input;
            self
        }
        pub fn substitutions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<std::string::String>>,
        ) -> Self {
            let mut hash_map = self.substitutions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.substitutions = Some(hash_map);
            self
        }
        pub fn set_substitutions(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<std::string::String>>>) -> Self {
            self.substitutions = input;
            self
        }
        /// Consumes the builder and constructs a [`SmsMessage`](crate::model::SmsMessage)
        pub fn build(self) -> crate::model::SmsMessage {
            crate::model::SmsMessage {
                body: self.body,
                keyword: self.keyword,
                message_type: self.message_type,
                origination_number: self.origination_number,
                sender_id: self.sender_id,
                substitutions: self.substitutions,
            }
        }
    }
}
impl SmsMessage {
    /// Creates a new builder-style object to manufacture [`SmsMessage`](crate::model::SmsMessage)
    pub fn builder() -> crate::model::sms_message::Builder {
        crate::model::sms_message::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct StartCondition {
    pub description: std::option::Option<std::string::String>,
    pub segment_start_condition: std::option::Option<crate::model::SegmentCondition>,
}
impl std::fmt::Debug for StartCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StartCondition");
        formatter.field("description", &self.description);
        formatter.field("segment_start_condition", &self.segment_start_condition);
        formatter.finish()
    }
}
/// See [`StartCondition`](crate::model::StartCondition)
pub mod start_condition {
    /// A builder for [`StartCondition`](crate::model::StartCondition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) segment_start_condition: std::option::Option<crate::model::SegmentCondition>,
    }
    impl Builder {
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn segment_start_condition(mut self, input: crate::model::SegmentCondition) -> Self {
            self.segment_start_condition = Some(input);
            self
        }
        pub fn set_segment_start_condition(mut self, input: std::option::Option<crate::model::SegmentCondition>) -> Self {
            self.segment_start_condition = input;
            self
        }
        /// Consumes the builder and constructs a [`StartCondition`](crate::model::StartCondition)
        pub fn build(self) -> crate::model::StartCondition {
            crate::model::StartCondition {
                description: self.description,
                segment_start_condition: self.segment_start_condition,
            }
        }
    }
}
impl StartCondition {
    /// Creates a new builder-style object to manufacture [`StartCondition`](crate::model::StartCondition)
    pub fn builder() -> crate::model::start_condition::Builder {
        crate::model::start_condition::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum State {
    Draft,
    Active,
    Completed,
    Cancelled,
    Closed,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for State {
    fn from(s: &str) -> Self {
        match s {
            "DRAFT" => State::Draft,
            "ACTIVE" => State::Active,
            "COMPLETED" => State::Completed,
            "CANCELLED" => State::Cancelled,
            "CLOSED" => State::Closed,
            other => State::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for State {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(State::from(s))
    }
}
impl State {
    pub fn as_str(&self) -> &str {
        match self {
            State::Draft => "DRAFT",
            State::Active => "ACTIVE",
            State::Completed => "COMPLETED",
            State::Cancelled => "CANCELLED",
            State::Closed => "CLOSED",
            State::Unknown(s) => s.as_ref(),
        }
    }
    pub fn values() -> &'static [&'static str] {
        &["DRAFT", "ACTIVE", "COMPLETED", "CANCELLED", "CLOSED"]
    }
}
impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct TreatmentResource {
    pub id: std::option::Option<std::string::String>,
    pub message_configuration: std::option::Option<crate::model::MessageConfiguration>,
    pub schedule: std::option::Option<crate::model::Schedule>,
    pub size_percent: std::option::Option<i32>,
    pub state: std::option::Option<crate::model::CampaignState>,
    pub treatment_description: std::option::Option<std::string::String>,
    pub treatment_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for TreatmentResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TreatmentResource");
        formatter.field("id", &self.id);
        formatter.field("message_configuration", &self.message_configuration);
        formatter.field("schedule", &self.schedule);
        formatter.field("size_percent", &self.size_percent);
        formatter.field("state", &self.state);
        formatter.field("treatment_description", &self.treatment_description);
        formatter.field("treatment_name", &self.treatment_name);
        formatter.finish()
    }
}
/// See [`TreatmentResource`](crate::model::TreatmentResource)
pub mod treatment_resource {
    /// A builder for [`TreatmentResource`](crate::model::TreatmentResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) message_configuration: std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) schedule: std::option::Option<crate::model::Schedule>,
        pub(crate) size_percent: std::option::Option<i32>,
        pub(crate) state: std::option::Option<crate::model::CampaignState>,
        pub(crate) treatment_description: std::option::Option<std::string::String>,
        pub(crate) treatment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn size_percent(mut self, input: i32) -> Self {
            self.size_percent = Some(input);
            self
        }
        pub fn set_size_percent(mut self, input: std::option::Option<i32>) -> Self {
            self.size_percent = input;
            self
        }
        pub fn state(mut self, input: crate::model::CampaignState) -> Self {
            self.state = Some(input);
            self
        }
        pub fn set_state(mut self, input: std::option::Option<crate::model::CampaignState>) -> Self {
            self.state = input;
            self
        }
        pub fn treatment_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_description = Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn treatment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_name = Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`TreatmentResource`](crate::model::TreatmentResource)
        pub fn build(self) -> crate::model::TreatmentResource {
            crate::model::TreatmentResource {
                id: self.id,
                message_configuration: self.message_configuration,
                schedule: self.schedule,
                size_percent: self.size_percent,
                state: self.state,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
            }
        }
    }
}
impl TreatmentResource {
    /// Creates a new builder-style object to manufacture [`TreatmentResource`](crate::model::TreatmentResource)
    pub fn builder() -> crate::model::treatment_resource::Builder {
        crate::model::treatment_resource::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct WaitActivity {
    pub next_activity: std::option::Option<std::string::String>,
    pub wait_time: std::option::Option<crate::model::WaitTime>,
}
impl std::fmt::Debug for WaitActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("WaitActivity");
        formatter.field("next_activity", &self.next_activity);
        formatter.field("wait_time", &self.wait_time);
        formatter.finish()
    }
}
/// See [`WaitActivity`](crate::model::WaitActivity)
pub mod wait_activity {
    /// A builder for [`WaitActivity`](crate::model::WaitActivity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) next_activity: std::option::Option<std::string::String>,
        pub(crate) wait_time: std::option::Option<crate::model::WaitTime>,
    }
    impl Builder {
        pub fn next_activity(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_activity = Some(input.into());
            self
        }
        pub fn set_next_activity(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_activity = input;
            self
        }
        pub fn wait_time(mut self, input: crate::model::WaitTime) -> Self {
            self.wait_time = Some(input);
            self
        }
        pub fn set_wait_time(mut self, input: std::option::Option<crate::model::WaitTime>) -> Self {
            self.wait_time = input;
            self
        }
        /// Consumes the builder and constructs a [`WaitActivity`](crate::model::WaitActivity)
        pub fn build(self) -> crate::model::WaitActivity {
            crate::model::WaitActivity {
                next_activity: self.next_activity,
                wait_time: self.wait_time,
            }
        }
    }
}
impl WaitActivity {
    /// Creates a new builder-style object to manufacture [`WaitActivity`](crate::model::WaitActivity)
    pub fn builder() -> crate::model::wait_activity::Builder {
        crate::model::wait_activity::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct WaitTime {
    /// ISO 8601 duration to wait
    pub wait_for: std::option::Option<std::string::String>,
    /// ISO 8601 instant to wait until
    pub wait_until: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for WaitTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("WaitTime");
        formatter.field("wait_for", &self.wait_for);
        formatter.field("wait_until", &self.wait_until);
        formatter.finish()
    }
}
/// See [`WaitTime`](crate::model::WaitTime)
pub mod wait_time {
    /// A builder for [`WaitTime`](crate::model::WaitTime)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) wait_for: std::option::Option<std::string::String>,
        pub(crate) wait_until: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// ISO 8601 duration to wait
        pub fn wait_for(mut self, input: impl Into<std::string::String>) -> Self {
            self.wait_for = Some(input.into());
            self
        }
        pub fn set_wait_for(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.wait_for = input;
            self
        }
        /// ISO 8601 instant to wait until
        pub fn wait_until(mut self, input: impl Into<std::string::String>) -> Self {
            self.wait_until = Some(input.into());
            self
        }
        pub fn set_wait_until(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.wait_until = input;
            self
        }
        /// Consumes the builder and constructs a [`WaitTime`](crate::model::WaitTime)
        pub fn build(self) -> crate::model::WaitTime {
            crate::model::WaitTime {
                wait_for: self.wait_for,
                wait_until: self.wait_until,
            }
        }
    }
}
impl WaitTime {
    /// Creates a new builder-style object to manufacture [`WaitTime`](crate::model::WaitTime)
    pub fn builder() -> crate::model::wait_time::Builder {
        crate::model::wait_time::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct WriteApplicationSettingsRequest {
    pub campaign_hook: std::option::Option<crate::model::CampaignHook>,
    pub cloud_watch_metrics_enabled: std::option::Option<bool>,
    pub limits: std::option::Option<crate::model::CampaignLimits>,
    pub quiet_time: std::option::Option<crate::model::QuietTime>,
}
impl std::fmt::Debug for WriteApplicationSettingsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("WriteApplicationSettingsRequest");
        formatter.field("campaign_hook", &self.campaign_hook);
        formatter.field("cloud_watch_metrics_enabled", &self.cloud_watch_metrics_enabled);
        formatter.field("limits", &self.limits);
        formatter.field("quiet_time", &self.quiet_time);
        formatter.finish()
    }
}
/// See [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest)
pub mod write_application_settings_request {
    /// A builder for [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) campaign_hook: std::option::Option<crate::model::CampaignHook>,
        pub(crate) cloud_watch_metrics_enabled: std::option::Option<bool>,
        pub(crate) limits: std::option::Option<crate::model::CampaignLimits>,
        pub(crate) quiet_time: std::option::Option<crate::model::QuietTime>,
    }
    impl Builder {
        pub fn campaign_hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.campaign_hook = Some(input);
            self
        }
        pub fn set_campaign_hook(mut self, input: std::option::Option<crate::model::CampaignHook>) -> Self {
            self.campaign_hook = input;
            self
        }
        pub fn cloud_watch_metrics_enabled(mut self, input: bool) -> Self {
            self.cloud_watch_metrics_enabled = Some(input);
            self
        }
        pub fn set_cloud_watch_metrics_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.cloud_watch_metrics_enabled = input;
            self
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn quiet_time(mut self, input: crate::model::QuietTime) -> Self {
            self.quiet_time = Some(input);
            self
        }
        pub fn set_quiet_time(mut self, input: std::option::Option<crate::model::QuietTime>) -> Self {
            self.quiet_time = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest)
        pub fn build(self) -> crate::model::WriteApplicationSettingsRequest {
            crate::model::WriteApplicationSettingsRequest {
                campaign_hook: self.campaign_hook,
                cloud_watch_metrics_enabled: self.cloud_watch_metrics_enabled,
                limits: self.limits,
                quiet_time: self.quiet_time,
            }
        }
    }
}
impl WriteApplicationSettingsRequest {
    /// Creates a new builder-style object to manufacture [`WriteApplicationSettingsRequest`](crate::model::WriteApplicationSettingsRequest)
    pub fn builder() -> crate::model::write_application_settings_request::Builder {
        crate::model::write_application_settings_request::Builder::default()
    }
}

/// Used to create a campaign.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct WriteCampaignRequest {
    pub additional_treatments: std::option::Option<std::vec::Vec<crate::model::WriteTreatmentResource>>,
    pub description: std::option::Option<std::string::String>,
    pub holdout_percent: std::option::Option<i32>,
    pub hook: std::option::Option<crate::model::CampaignHook>,
    pub is_paused: std::option::Option<bool>,
    pub limits: std::option::Option<crate::model::CampaignLimits>,
    pub message_configuration: std::option::Option<crate::model::MessageConfiguration>,
    pub name: std::option::Option<std::string::String>,
    pub schedule: std::option::Option<crate::model::Schedule>,
    pub segment_id: std::option::Option<std::string::String>,
    pub segment_version: std::option::Option<i32>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    pub treatment_description: std::option::Option<std::string::String>,
    pub treatment_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for WriteCampaignRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("WriteCampaignRequest");
        formatter.field("additional_treatments", &self.additional_treatments);
        formatter.field("description", &self.description);
        formatter.field("holdout_percent", &self.holdout_percent);
        formatter.field("hook", &self.hook);
        formatter.field("is_paused", &self.is_paused);
        formatter.field("limits", &self.limits);
        formatter.field("message_configuration", &self.message_configuration);
        formatter.field("name", &self.name);
        formatter.field("schedule", &self.schedule);
        formatter.field("segment_id", &self.segment_id);
        formatter.field("segment_version", &self.segment_version);
        formatter.field("tags", &self.tags);
        formatter.field("treatment_description", &self.treatment_description);
        formatter.field("treatment_name", &self.treatment_name);
        formatter.finish()
    }
}
/// See [`WriteCampaignRequest`](crate::model::WriteCampaignRequest)
pub mod write_campaign_request {
    /// A builder for [`WriteCampaignRequest`](crate::model::WriteCampaignRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) additional_treatments: std::option::Option<std::vec::Vec<crate::model::WriteTreatmentResource>>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) holdout_percent: std::option::Option<i32>,
        pub(crate) hook: std::option::Option<crate::model::CampaignHook>,
        pub(crate) is_paused: std::option::Option<bool>,
        pub(crate) limits: std::option::Option<crate::model::CampaignLimits>,
        pub(crate) message_configuration: std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) schedule: std::option::Option<crate::model::Schedule>,
        pub(crate) segment_id: std::option::Option<std::string::String>,
        pub(crate) segment_version: std::option::Option<i32>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        pub(crate) treatment_description: std::option::Option<std::string::String>,
        pub(crate) treatment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn additional_treatments(mut self, input: impl Into<crate::model::WriteTreatmentResource>) -> Self {
            let mut v = self.additional_treatments.unwrap_or_default();
            v.push(input.into());
            self.additional_treatments = Some(v);
            self
        }
        pub fn set_additional_treatments(mut self, input: std::option::Option<std::vec::Vec<crate::model::WriteTreatmentResource>>) -> Self {
            self.additional_treatments = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn holdout_percent(mut self, input: i32) -> Self {
            self.holdout_percent = Some(input);
            self
        }
        pub fn set_holdout_percent(mut self, input: std::option::Option<i32>) -> Self {
            self.holdout_percent = input;
            self
        }
        pub fn hook(mut self, input: crate::model::CampaignHook) -> Self {
            self.hook = Some(input);
            self
        }
        pub fn set_hook(mut self, input: std::option::Option<crate::model::CampaignHook>) -> Self {
            self.hook = input;
            self
        }
        pub fn is_paused(mut self, input: bool) -> Self {
            self.is_paused = Some(input);
            self
        }
        pub fn set_is_paused(mut self, input: std::option::Option<bool>) -> Self {
            self.is_paused = input;
            self
        }
        pub fn limits(mut self, input: crate::model::CampaignLimits) -> Self {
            self.limits = Some(input);
            self
        }
        pub fn set_limits(mut self, input: std::option::Option<crate::model::CampaignLimits>) -> Self {
            self.limits = input;
            self
        }
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
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
        pub fn segment_version(mut self, input: i32) -> Self {
            self.segment_version = Some(input);
            self
        }
        pub fn set_segment_version(mut self, input: std::option::Option<i32>) -> Self {
            self.segment_version = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        pub fn treatment_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_description = Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn treatment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_name = Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteCampaignRequest`](crate::model::WriteCampaignRequest)
        pub fn build(self) -> crate::model::WriteCampaignRequest {
            crate::model::WriteCampaignRequest {
                additional_treatments: self.additional_treatments,
                description: self.description,
                holdout_percent: self.holdout_percent,
                hook: self.hook,
                is_paused: self.is_paused,
                limits: self.limits,
                message_configuration: self.message_configuration,
                name: self.name,
                schedule: self.schedule,
                segment_id: self.segment_id,
                segment_version: self.segment_version,
                tags: self.tags,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
            }
        }
    }
}
impl WriteCampaignRequest {
    /// Creates a new builder-style object to manufacture [`WriteCampaignRequest`](crate::model::WriteCampaignRequest)
    pub fn builder() -> crate::model::write_campaign_request::Builder {
        crate::model::write_campaign_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct WriteSegmentRequest {
    pub dimensions: std::option::Option<crate::model::SegmentDimensions>,
    pub name: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl std::fmt::Debug for WriteSegmentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("WriteSegmentRequest");
        formatter.field("dimensions", &self.dimensions);
        formatter.field("name", &self.name);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`WriteSegmentRequest`](crate::model::WriteSegmentRequest)
pub mod write_segment_request {
    /// A builder for [`WriteSegmentRequest`](crate::model::WriteSegmentRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) dimensions: std::option::Option<crate::model::SegmentDimensions>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn dimensions(mut self, input: crate::model::SegmentDimensions) -> Self {
            self.dimensions = Some(input);
            self
        }
        pub fn set_dimensions(mut self, input: std::option::Option<crate::model::SegmentDimensions>) -> Self {
            self.dimensions = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteSegmentRequest`](crate::model::WriteSegmentRequest)
        pub fn build(self) -> crate::model::WriteSegmentRequest {
            crate::model::WriteSegmentRequest {
                dimensions: self.dimensions,
                name: self.name,
                tags: self.tags,
            }
        }
    }
}
impl WriteSegmentRequest {
    /// Creates a new builder-style object to manufacture [`WriteSegmentRequest`](crate::model::WriteSegmentRequest)
    pub fn builder() -> crate::model::write_segment_request::Builder {
        crate::model::write_segment_request::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct WriteTreatmentResource {
    pub message_configuration: std::option::Option<crate::model::MessageConfiguration>,
    pub schedule: std::option::Option<crate::model::Schedule>,
    pub size_percent: std::option::Option<i32>,
    pub treatment_description: std::option::Option<std::string::String>,
    pub treatment_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for WriteTreatmentResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("WriteTreatmentResource");
        formatter.field("message_configuration", &self.message_configuration);
        formatter.field("schedule", &self.schedule);
        formatter.field("size_percent", &self.size_percent);
        formatter.field("treatment_description", &self.treatment_description);
        formatter.field("treatment_name", &self.treatment_name);
        formatter.finish()
    }
}
/// See [`WriteTreatmentResource`](crate::model::WriteTreatmentResource)
pub mod write_treatment_resource {
    /// A builder for [`WriteTreatmentResource`](crate::model::WriteTreatmentResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) message_configuration: std::option::Option<crate::model::MessageConfiguration>,
        pub(crate) schedule: std::option::Option<crate::model::Schedule>,
        pub(crate) size_percent: std::option::Option<i32>,
        pub(crate) treatment_description: std::option::Option<std::string::String>,
        pub(crate) treatment_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message_configuration(mut self, input: crate::model::MessageConfiguration) -> Self {
            self.message_configuration = Some(input);
            self
        }
        pub fn set_message_configuration(mut self, input: std::option::Option<crate::model::MessageConfiguration>) -> Self {
            self.message_configuration = input;
            self
        }
        pub fn schedule(mut self, input: crate::model::Schedule) -> Self {
            self.schedule = Some(input);
            self
        }
        pub fn set_schedule(mut self, input: std::option::Option<crate::model::Schedule>) -> Self {
            self.schedule = input;
            self
        }
        pub fn size_percent(mut self, input: i32) -> Self {
            self.size_percent = Some(input);
            self
        }
        pub fn set_size_percent(mut self, input: std::option::Option<i32>) -> Self {
            self.size_percent = input;
            self
        }
        pub fn treatment_description(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_description = Some(input.into());
            self
        }
        pub fn set_treatment_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_description = input;
            self
        }
        pub fn treatment_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.treatment_name = Some(input.into());
            self
        }
        pub fn set_treatment_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.treatment_name = input;
            self
        }
        /// Consumes the builder and constructs a [`WriteTreatmentResource`](crate::model::WriteTreatmentResource)
        pub fn build(self) -> crate::model::WriteTreatmentResource {
            crate::model::WriteTreatmentResource {
                message_configuration: self.message_configuration,
                schedule: self.schedule,
                size_percent: self.size_percent,
                treatment_description: self.treatment_description,
                treatment_name: self.treatment_name,
            }
        }
    }
}
impl WriteTreatmentResource {
    /// Creates a new builder-style object to manufacture [`WriteTreatmentResource`](crate::model::WriteTreatmentResource)
    pub fn builder() -> crate::model::write_treatment_resource::Builder {
        crate::model::write_treatment_resource::Builder::default()
    }
}
