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

//! Mobile Callback Receiver
//!
//! Receives Mobile ID signing and login callbacks from the Hallmark service
//! and records each event against its session token. Sessions are kept in a
//! flat text file for the sake of simplicity; a real integration should use
//! a session database instead.
//!
//! The callback URL handed to `mobile_signing` / `mobile_authentication`
//! must point at this service and carry the session token as a query
//! parameter: `http://example.com/callback?mobileSession=<token>`.

mod config;
mod handlers;
mod store;

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CallbackConfig;
use crate::store::SessionLog;

#[actix_rt::main]
async fn main() -> Result<()> {
	dotenv::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL)),
		)
		.init();

	let config = CallbackConfig::from_env()?;
	info!(target: "server", "Starting Hallmark callback receiver on {}", config.bind_addr);
	info!(target: "server", "Session log: {}", config.sessions_file.display());

	let sessions = web::Data::new(SessionLog::new(config.sessions_file.clone()));

	HttpServer::new(move || {
		App::new()
			.app_data(sessions.clone())
			.configure(handlers::configure_routes)
	})
	.bind(config.bind_addr)
	.with_context(|| format!("Failed to bind {}", config.bind_addr))?
	.run()
	.await
	.context("Callback server failed")?;

	Ok(())
}
