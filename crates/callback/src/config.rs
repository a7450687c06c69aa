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

/// Default HTTP bind address (can be overridden by CALLBACK_BIND_ADDR)
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8091";

/// Default session log file (can be overridden by CALLBACK_SESSIONS_FILE)
pub const DEFAULT_SESSIONS_FILE: &str = "mobile-sessions.log";

/// Callback receiver configuration
#[derive(Debug, Clone)]
pub struct CallbackConfig {
	pub bind_addr: SocketAddr,
	pub sessions_file: PathBuf,
}

impl CallbackConfig {
	/// Load configuration from environment variables
	pub fn from_env() -> Result<Self> {
		let bind_addr_str =
			env::var("CALLBACK_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
		let bind_addr = bind_addr_str
			.parse()
			.with_context(|| format!("Invalid bind address: {}", bind_addr_str))?;

		let sessions_file = env::var("CALLBACK_SESSIONS_FILE")
			.map(PathBuf::from)
			.unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSIONS_FILE));

		Ok(Self {
			bind_addr,
			sessions_file,
		})
	}
}
