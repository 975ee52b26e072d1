/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::new_without_default)]
//! Amazon Pinpoint
//!
//! Typed inputs, outputs and errors for the Pinpoint REST API. Every input can be turned into an
//! [`Operation`](smithy_http::operation::Operation) with `make_operation`. The operation carries the
//! fully formed HTTP request (resolved endpoint, path, query string and JSON body) and a response
//! handler. Sending the request is left to the caller. Pass the raw response to
//! [`parse_response`](smithy_http::response::parse_response) to get the typed output or error.
//!
//! ```rust
//! use pinpoint::input::GetCampaignInput;
//! use pinpoint::{Config, Region};
//!
//! let conf = Config::builder().region(Region::new("us-west-2")).build();
//! let op = GetCampaignInput::builder()
//!     .application_id("app1")
//!     .campaign_id("c1")
//!     .build()
//!     .expect("valid input")
//!     .make_operation(&conf)
//!     .expect("valid operation");
//! assert_eq!(
//!     op.request().http().uri().to_string(),
//!     "https://pinpoint.us-west-2.amazonaws.com/v1/apps/app1/campaigns/c1"
//! );
//! ```

pub use aws_types::region::Region;
pub use config::Config;
pub use smithy_http::endpoint::Endpoint;

pub mod config;
pub mod error;
pub mod input;
#[doc(hidden)]
pub mod json_deser;
mod json_errors;
#[doc(hidden)]
pub mod json_ser;
pub mod model;
pub mod operation;
mod operation_deser;
mod operation_ser;
pub mod output;
