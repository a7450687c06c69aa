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

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds (can be overridden via `timeout_secs`)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// MIME type applied to input files that carry no explicit type
pub const DEFAULT_FILE_TYPE: &str = "application/octet-stream";

/// Environment variable prefix for [`ClientConfig::from_env`]
pub const ENV_PREFIX: &str = "HALLMARK";

/// Connection configuration for [`crate::Client`]
///
/// Created once and immutable for the client's lifetime. The server URL is
/// normalized to end with a trailing slash so relative API paths can be
/// appended directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
	/// Endpoint of the Hallmark service API
	pub server: String,
	/// Local path to the client certificate in PEM format
	#[serde(default)]
	pub certificate: Option<PathBuf>,
	/// Local path to the client private key in PEM format. When set the
	/// client authenticates over mutual TLS; when absent the certificate
	/// contents travel in the `x-ssl-client-cert` header instead.
	#[serde(default)]
	pub private_key: Option<PathBuf>,
	/// Full URL of your file proxy, including its path. When set, files can
	/// be addressed by bare name in every operation.
	#[serde(default)]
	pub default_file_proxy_url: Option<String>,
	/// Container type used when an operation does not pass one (e.g. "bdoc")
	#[serde(default)]
	pub default_container_type: Option<String>,
	/// Request timeout in seconds (default 30)
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl ClientConfig {
	/// Create a configuration for the given service endpoint
	pub fn new(server: impl Into<String>) -> Self {
		Self {
			server: ensure_trailing_slash(server.into()),
			certificate: None,
			private_key: None,
			default_file_proxy_url: None,
			default_container_type: None,
			timeout_secs: None,
		}
	}

	/// Authenticate with mutual TLS using a certificate and private key
	pub fn with_credentials(
		mut self,
		certificate: impl Into<PathBuf>,
		private_key: impl Into<PathBuf>,
	) -> Self {
		self.certificate = Some(certificate.into());
		self.private_key = Some(private_key.into());
		self
	}

	/// Authenticate by sending the certificate contents in the
	/// `x-ssl-client-cert` header (for deployments without direct mTLS)
	pub fn with_certificate(mut self, certificate: impl Into<PathBuf>) -> Self {
		self.certificate = Some(certificate.into());
		self
	}

	/// Address files by bare name relative to this file-proxy URL
	pub fn with_file_proxy_url(mut self, url: impl Into<String>) -> Self {
		self.default_file_proxy_url = Some(url.into());
		self
	}

	/// Container type applied when operations do not pass one explicitly
	pub fn with_container_type(mut self, container_type: impl Into<String>) -> Self {
		self.default_container_type = Some(container_type.into());
		self
	}

	/// Set the request timeout in seconds
	pub fn with_timeout_secs(mut self, secs: u64) -> Self {
		self.timeout_secs = Some(secs);
		self
	}

	/// Load configuration from environment variables (prefix `HALLMARK_`)
	pub fn from_env() -> Result<Self, config::ConfigError> {
		dotenv::dotenv().ok();

		let cfg = config::Config::builder()
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?;

		Ok(cfg.try_deserialize::<Self>()?.normalized())
	}

	/// Load configuration from file, with environment overrides
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?;

		Ok(cfg.try_deserialize::<Self>()?.normalized())
	}

	/// Enforce the trailing-slash invariant on the server URL
	pub(crate) fn normalized(mut self) -> Self {
		self.server = ensure_trailing_slash(self.server);
		self
	}
}

fn ensure_trailing_slash(mut server: String) -> String {
	if !server.is_empty() && !server.ends_with('/') {
		server.push('/');
	}
	server
}
