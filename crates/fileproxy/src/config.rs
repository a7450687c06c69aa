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

use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};

/// Default log level (can be overridden by RUST_LOG)
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default HTTP bind address (can be overridden by FILEPROXY_BIND_ADDR)
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";

/// Default root directory for stored files (can be overridden by FILEPROXY_ROOT)
pub const DEFAULT_FILES_ROOT: &str = "files";

/// Default maximum request body size in bytes (can be overridden by
/// FILEPROXY_MAX_BODY_BYTES). Containers with attachments can be large.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// File proxy configuration
#[derive(Debug, Clone)]
pub struct FileProxyConfig {
	pub bind_addr: SocketAddr,
	pub files_root: PathBuf,
	pub max_body_bytes: usize,
}

impl FileProxyConfig {
	/// Load configuration from environment variables
	pub fn from_env() -> Result<Self> {
		let bind_addr_str =
			env::var("FILEPROXY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
		let bind_addr = bind_addr_str
			.parse()
			.with_context(|| format!("Invalid bind address: {}", bind_addr_str))?;

		let files_root = env::var("FILEPROXY_ROOT")
			.map(PathBuf::from)
			.unwrap_or_else(|_| PathBuf::from(DEFAULT_FILES_ROOT));

		let max_body_bytes = env::var("FILEPROXY_MAX_BODY_BYTES")
			.ok()
			.and_then(|v| v.parse().ok())
			.unwrap_or(DEFAULT_MAX_BODY_BYTES);

		Ok(Self {
			bind_addr,
			files_root,
			max_body_bytes,
		})
	}
}
