// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hallmark SDK - Client library for the Hallmark signing service
//!
//! This crate provides a typed client for the Hallmark REST API: container
//! management, sharing, smart-card and Mobile ID signing flows, certificate
//! services and document templating. The client normalizes its inputs
//! (file-proxy path resolution, date coercion, file-list shaping), builds
//! JSON requests, authenticates with a client certificate and folds every
//! response into the [`ApiResponse`] union.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No background threads beyond the HTTP connection pool
//! - No runtime initialization (the optional [`SyncClient`] owns one)
//! - No environment loading unless [`ClientConfig::from_env`] is called
//!
//! Service errors are payload, not faults: any error-shaped JSON the service
//! returns comes back unmodified inside [`ApiResponse::Json`] for the caller
//! to inspect. Only transport and input failures surface as [`ClientError`].

pub mod client;
pub mod config;
pub mod normalize;
pub mod transport;
pub mod types;

pub use client::{Client, ClientError, SyncClient};
pub use config::ClientConfig;
pub use transport::{Method, RequestDescriptor};
pub use types::*;
