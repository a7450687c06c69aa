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

use actix_web::{HttpResponse, Responder, web};
use thiserror::Error;
use tracing::info;

/// Error types for file-proxy operations
#[derive(Debug, Error)]
pub enum ProxyError {
	#[error("Forbidden path")]
	Forbidden,
	#[error("Storage error: {0}")]
	Storage(String),
}

impl actix_web::ResponseError for ProxyError {
	fn error_response(&self) -> HttpResponse {
		let status = match self {
			ProxyError::Forbidden => actix_web::http::StatusCode::FORBIDDEN,
			ProxyError::Storage(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
		};
		HttpResponse::build(status).json(serde_json::json!({
			"error": self.to_string()
		}))
	}
}

/// Shared file-proxy state
#[derive(Clone)]
pub struct ProxyState {
	pub root: PathBuf,
}

/// Configure routes: PUT stores, GET serves, everything else is 405
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
	cfg.route("/{path:.*}", web::put().to(store_file))
		.route("/{path:.*}", web::get().to(serve_file))
		.default_service(web::route().to(method_not_allowed));
}

/// Reject empty paths and anything attempting to escape the files root
fn sanitize(path: &str) -> Result<&str, ProxyError> {
	if path.is_empty() || path.contains("..") {
		return Err(ProxyError::Forbidden);
	}
	Ok(path)
}

/// Store the request body at the given relative path, creating parent
/// directories as needed
pub async fn store_file(
	state: web::Data<ProxyState>,
	path: web::Path<String>,
	body: web::Bytes,
) -> Result<HttpResponse, ProxyError> {
	let relative = sanitize(&path)?;
	let full_path = state.root.join(relative);
	if let Some(parent) = full_path.parent() {
		std::fs::create_dir_all(parent).map_err(|e| ProxyError::Storage(e.to_string()))?;
	}
	std::fs::write(&full_path, &body).map_err(|e| ProxyError::Storage(e.to_string()))?;
	info!(target: "fileproxy", "Stored {} ({} bytes)", relative, body.len());
	Ok(HttpResponse::Created().finish())
}

/// Serve stored file contents, or 404 when nothing is stored at the path
pub async fn serve_file(
	state: web::Data<ProxyState>,
	path: web::Path<String>,
) -> Result<HttpResponse, ProxyError> {
	let relative = sanitize(&path)?;
	let full_path = state.root.join(relative);
	if !full_path.is_file() {
		return Ok(HttpResponse::NotFound().finish());
	}
	let contents = std::fs::read(&full_path).map_err(|e| ProxyError::Storage(e.to_string()))?;
	Ok(HttpResponse::Ok()
		.content_type("application/octet-stream")
		.body(contents))
}

/// Any method other than PUT and GET
pub async fn method_not_allowed() -> impl Responder {
	HttpResponse::MethodNotAllowed().finish()
}
