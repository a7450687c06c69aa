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

//! Request execution and response normalization
//!
//! Operations describe their request as plain data ([`RequestDescriptor`])
//! and hand it to [`execute`], which owns the wire concerns: URL assembly,
//! JSON body encoding, client-certificate authentication and the four-way
//! response normalization into [`ApiResponse`]. No retries, no caching.

use std::fs;
use std::path::Path;

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

use crate::client::ClientError;
use crate::types::ApiResponse;

/// Header carrying the certificate when mutual TLS is not configured
pub const CLIENT_CERT_HEADER: &str = "x-ssl-client-cert";

/// HTTP method of a [`RequestDescriptor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Get,
	Post,
	Put,
	Patch,
	Delete,
}

impl Method {
	pub fn as_str(&self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Patch => "PATCH",
			Method::Delete => "DELETE",
		}
	}
}

/// One API request described as plain data before execution
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
	pub method: Method,
	/// Path relative to the configured server URL
	pub path: String,
	pub body: Option<Value>,
	/// Return the response body unparsed (file downloads)
	pub raw: bool,
}

impl RequestDescriptor {
	pub fn get(path: impl Into<String>) -> Self {
		Self {
			method: Method::Get,
			path: path.into(),
			body: None,
			raw: false,
		}
	}

	pub fn post(path: impl Into<String>, body: Value) -> Self {
		Self {
			method: Method::Post,
			path: path.into(),
			body: Some(body),
			raw: false,
		}
	}

	/// POST whose response body must stay unparsed
	pub fn post_raw(path: impl Into<String>, body: Value) -> Self {
		Self {
			method: Method::Post,
			path: path.into(),
			body: Some(body),
			raw: true,
		}
	}

	pub fn put(path: impl Into<String>, body: Value) -> Self {
		Self {
			method: Method::Put,
			path: path.into(),
			body: Some(body),
			raw: false,
		}
	}

	pub fn patch(path: impl Into<String>, body: Value) -> Self {
		Self {
			method: Method::Patch,
			path: path.into(),
			body: Some(body),
			raw: false,
		}
	}

	pub fn delete(path: impl Into<String>, body: Option<Value>) -> Self {
		Self {
			method: Method::Delete,
			path: path.into(),
			body,
			raw: false,
		}
	}
}

/// Client credential material, resolved once at construction time
#[derive(Debug, Clone)]
pub(crate) enum Credentials {
	/// Mutual TLS identity built from certificate + private key
	Identity(reqwest::Identity),
	/// Certificate contents sent per request in `x-ssl-client-cert`
	CertHeader(String),
	/// No client authentication
	None,
}

/// Read credential files and decide the authentication mode.
///
/// A configured private key selects mutual TLS; a certificate alone selects
/// the header fallback with newline characters stripped from the PEM.
pub(crate) fn load_credentials(
	certificate: Option<&Path>,
	private_key: Option<&Path>,
) -> Result<Credentials, ClientError> {
	match (certificate, private_key) {
		(Some(certificate), Some(private_key)) => {
			let mut pem = read_credential_file(certificate)?;
			pem.extend(read_credential_file(private_key)?);
			let identity = reqwest::Identity::from_pem(&pem)
				.map_err(|e| ClientError::Credentials(format!("invalid client identity: {}", e)))?;
			Ok(Credentials::Identity(identity))
		}
		(Some(certificate), None) => {
			let contents = fs::read_to_string(certificate).map_err(|e| {
				ClientError::Credentials(format!(
					"failed to read {}: {}",
					certificate.display(),
					e
				))
			})?;
			Ok(Credentials::CertHeader(contents.replace(['\r', '\n'], "")))
		}
		(None, Some(_)) => Err(ClientError::Credentials(
			"private key configured without a certificate".to_string(),
		)),
		(None, None) => Ok(Credentials::None),
	}
}

fn read_credential_file(path: &Path) -> Result<Vec<u8>, ClientError> {
	fs::read(path)
		.map_err(|e| ClientError::Credentials(format!("failed to read {}: {}", path.display(), e)))
}

/// Perform one HTTP exchange and normalize the outcome.
pub(crate) async fn execute(
	http: &reqwest::Client,
	server: &str,
	credentials: &Credentials,
	request: RequestDescriptor,
) -> Result<ApiResponse, ClientError> {
	let url = format!("{}{}", server, request.path);
	debug!(target: "transport", "{} {}", request.method.as_str(), url);

	let mut builder = match request.method {
		Method::Get => http.get(&url),
		Method::Post => http.post(&url),
		Method::Put => http.put(&url),
		Method::Patch => http.patch(&url),
		Method::Delete => http.delete(&url),
	};

	if let Some(body) = effective_body(&request.body) {
		let encoded =
			serde_json::to_vec(body).map_err(|e| ClientError::Serialization(e.to_string()))?;
		builder = builder
			.header(CONTENT_TYPE, "application/json")
			.header(CONTENT_LENGTH, encoded.len())
			.body(encoded);
	}

	// The mutual-TLS identity rides on the underlying client; only the
	// header fallback is applied per request.
	if let Credentials::CertHeader(certificate) = credentials {
		builder = builder.header(CLIENT_CERT_HEADER, certificate);
	}

	let response = builder
		.send()
		.await
		.map_err(|e| ClientError::Network(format!("request failed: {}", e)))?;
	let status = response.status().as_u16();
	let body = response
		.text()
		.await
		.map_err(|e| ClientError::Network(format!("failed to read response body: {}", e)))?;

	Ok(normalize_response(status, body, request.raw))
}

/// An empty data object sends no body at all, so operations whose optional
/// fields are all absent produce a bare request.
fn effective_body(body: &Option<Value>) -> Option<&Value> {
	match body {
		Some(Value::Object(map)) if map.is_empty() => None,
		Some(value) => Some(value),
		None => None,
	}
}

/// Normalize a finished exchange into an [`ApiResponse`].
///
/// An empty or whitespace-only body collapses to a status acknowledgement
/// (`true` iff 200). Raw transfers skip parsing. Everything else parses as
/// JSON, with `null` and unparseable bodies falling back to the raw string.
pub(crate) fn normalize_response(status: u16, body: String, raw: bool) -> ApiResponse {
	if body.trim().is_empty() {
		return ApiResponse::Empty(status == 200);
	}
	if raw {
		return ApiResponse::Raw(body);
	}
	match serde_json::from_str::<Value>(&body) {
		Ok(Value::Null) | Err(_) => ApiResponse::Raw(body),
		Ok(value) => ApiResponse::Json(value),
	}
}
