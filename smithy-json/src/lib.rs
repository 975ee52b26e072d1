/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON serializer and tokenizer used by the generated marshallers and unmarshallers.

pub mod deserialize;
mod escape;
pub mod serialize;
