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

//! File Proxy
//!
//! A path-addressed HTTP file store the Hallmark service reads and writes
//! container files through: PUT stores the request body, GET serves it
//! back, every other method is rejected. The proxy address must be
//! reachable by the service and whitelisted for your account.

mod config;
mod handlers;

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::FileProxyConfig;
use crate::handlers::ProxyState;

#[actix_rt::main]
async fn main() -> Result<()> {
	dotenv::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL)),
		)
		.init();

	let config = FileProxyConfig::from_env()?;
	std::fs::create_dir_all(&config.files_root)
		.with_context(|| format!("Failed to create files root {}", config.files_root.display()))?;
	info!(target: "server", "Starting Hallmark file proxy on {}", config.bind_addr);
	info!(target: "server", "Files root: {}", config.files_root.display());

	let state = web::Data::new(ProxyState {
		root: config.files_root.clone(),
	});
	let max_body_bytes = config.max_body_bytes;

	HttpServer::new(move || {
		App::new()
			.app_data(state.clone())
			.app_data(web::PayloadConfig::new(max_body_bytes))
			.configure(handlers::configure_routes)
	})
	.bind(config.bind_addr)
	.with_context(|| format!("Failed to bind {}", config.bind_addr))?
	.run()
	.await
	.context("File proxy server failed")?;

	Ok(())
}
