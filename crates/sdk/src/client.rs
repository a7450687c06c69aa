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

use std::time::Duration;

use serde_json::{Map, Value, json};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::normalize::{
	basename, merge_options, normalize_date, normalize_extract_files, normalize_input_files,
	resolve_container_type, resolve_path,
};
use crate::transport::{self, Credentials, RequestDescriptor};
use crate::types::{ApiResponse, ExtractFile, FileInput};

/// Error types for client operations
///
/// Service-level errors are not represented here: the service's error
/// payloads return to the caller unmodified inside [`ApiResponse`].
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Serialization error: {0}")]
	Serialization(String),
	#[error("Invalid date: {0}")]
	InvalidDate(String),
	#[error("Credentials error: {0}")]
	Credentials(String),
}

/// Client for the Hallmark signing service
///
/// Each operation normalizes its arguments, assembles a
/// [`RequestDescriptor`] and executes it against the configured server.
/// Credential files are read once at construction; requests never touch
/// the filesystem.
///
/// This is an async client interface using reqwest for HTTP communication;
/// the connection pool is internally synchronized, so one instance can be
/// shared across tasks.
pub struct Client {
	config: ClientConfig,
	credentials: Credentials,
	http: reqwest::Client,
}

impl Client {
	/// Create a new client from the given configuration
	pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
		let config = config.normalized();
		let credentials = transport::load_credentials(
			config.certificate.as_deref(),
			config.private_key.as_deref(),
		)?;

		let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
		let mut builder = reqwest::Client::builder().timeout(timeout);
		if let Credentials::Identity(identity) = &credentials {
			builder = builder.use_rustls_tls().identity(identity.clone());
		}
		let http = builder
			.build()
			.map_err(|e| ClientError::Network(format!("failed to build HTTP client: {}", e)))?;

		Ok(Self {
			config,
			credentials,
			http,
		})
	}

	/// Generate a session correlation token for mobile callback URLs,
	/// e.g. `https://example.com/callback?mobileSession=<token>`
	pub fn mobile_session_id() -> String {
		Uuid::new_v4().to_string()
	}

	fn full_url(&self, path: &str) -> String {
		resolve_path(path, self.config.default_file_proxy_url.as_deref())
	}

	fn container_type(&self, explicit: Option<&str>) -> Value {
		match resolve_container_type(explicit, self.config.default_container_type.as_deref()) {
			Some(container_type) => Value::String(container_type),
			None => Value::Null,
		}
	}

	async fn execute(&self, request: RequestDescriptor) -> Result<ApiResponse, ClientError> {
		transport::execute(&self.http, &self.config.server, &self.credentials, request).await
	}

	// Container operations

	/// Get the service API version.
	pub async fn get_version(&self) -> Result<ApiResponse, ClientError> {
		self.execute(RequestDescriptor::get("version")).await
	}

	/// Download a container, or a single file from it when `file_id` is
	/// given. The body comes back unparsed as [`ApiResponse::Raw`].
	pub async fn download(
		&self,
		container_path: &str,
		file_id: Option<&str>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		data.insert("inputPath".to_string(), json!(self.full_url(container_path)));
		data.insert("containerType".to_string(), self.container_type(container_type));
		if let Some(file_id) = file_id {
			data.insert("fileId".to_string(), json!(file_id));
		}
		self.execute(RequestDescriptor::post_raw(
			"container/download",
			Value::Object(data),
		))
		.await
	}

	/// Fetch container metadata: files, signatures and lock state.
	pub async fn container_info(
		&self,
		container_path: &str,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"inputPath": self.full_url(container_path),
			"containerType": self.container_type(container_type),
		});
		self.execute(RequestDescriptor::post("container/info", data))
			.await
	}

	/// Create a new container from files.
	///
	/// `files` entries may be bare path strings or full [`FileInput`]
	/// descriptors; paths resolve against the configured file proxy.
	/// `overwrite` removes an existing container record first.
	pub async fn create_container(
		&self,
		output_path: &str,
		files: &[FileInput],
		container_type: Option<&str>,
		overwrite: bool,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"outputPath": self.full_url(output_path),
			"containerType": self.container_type(container_type),
			"overwrite": overwrite,
			"files": normalize_input_files(files, self.config.default_file_proxy_url.as_deref()),
		});
		self.execute(RequestDescriptor::post("container", data)).await
	}

	/// Add files to an existing container.
	pub async fn add_files(
		&self,
		container_path: &str,
		files: &[FileInput],
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"inputPath": self.full_url(container_path),
			"containerType": self.container_type(container_type),
			"files": normalize_input_files(files, self.config.default_file_proxy_url.as_deref()),
		});
		self.execute(RequestDescriptor::put("container/file", data))
			.await
	}

	/// Extract files from a container. Extracted files are removed from the
	/// container and written to each entry's output path.
	pub async fn extract_files(
		&self,
		container_path: &str,
		files: &[ExtractFile],
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"inputPath": self.full_url(container_path),
			"containerType": self.container_type(container_type),
			"files": normalize_extract_files(files, self.config.default_file_proxy_url.as_deref()),
		});
		self.execute(RequestDescriptor::post("container/file", data))
			.await
	}

	// Share operations

	/// Share a container for signing and/or viewing.
	///
	/// `expire_date` accepts Unix seconds, Unix milliseconds or a free-text
	/// date (parsed in UTC). The share `name` defaults to the container
	/// basename; explicit `options` entries override every computed field.
	pub async fn create_share(
		&self,
		container_path: &str,
		expire_date: &str,
		recipients: &Value,
		options: Option<&Value>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		data.insert("inputPath".to_string(), json!(self.full_url(container_path)));
		data.insert("containerType".to_string(), self.container_type(container_type));
		data.insert("expires".to_string(), json!(normalize_date(expire_date)?));
		data.insert("recipients".to_string(), recipients.clone());
		data.insert("name".to_string(), json!(basename(container_path)));
		merge_options(&mut data, options);
		self.execute(RequestDescriptor::post("container/share", Value::Object(data)))
			.await
	}

	/// Share a document created from a template. The container type is
	/// fixed to `pdf`.
	pub async fn create_document_share(
		&self,
		document_id: &str,
		expire_date: &str,
		recipients: &Value,
		name: &str,
		options: Option<&Value>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		data.insert("document".to_string(), json!(document_id));
		data.insert("name".to_string(), json!(name));
		data.insert("containerType".to_string(), json!("pdf"));
		data.insert("expires".to_string(), json!(normalize_date(expire_date)?));
		data.insert("recipients".to_string(), recipients.clone());
		merge_options(&mut data, options);
		self.execute(RequestDescriptor::post("container/share", Value::Object(data)))
			.await
	}

	/// Update an existing share. A provided `expire_date` or `recipients`
	/// replaces the corresponding entry in `options`.
	pub async fn update_share(
		&self,
		share_id: &str,
		expire_date: Option<&str>,
		recipients: Option<&Value>,
		options: Option<&Value>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		merge_options(&mut data, options);
		if let Some(expire_date) = expire_date {
			data.insert("expires".to_string(), json!(normalize_date(expire_date)?));
		}
		if let Some(recipients) = recipients {
			data.insert("recipients".to_string(), recipients.clone());
		}
		self.execute(RequestDescriptor::patch(
			format!("container/share/{}", share_id),
			Value::Object(data),
		))
		.await
	}

	/// Delete a share, with an optional message for its recipients.
	pub async fn delete_share(
		&self,
		share_id: &str,
		message: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let body = message.map(|message| json!({ "message": message }));
		self.execute(RequestDescriptor::delete(
			format!("container/share/{}", share_id),
			body,
		))
		.await
	}

	// Signing operations

	/// Prepare a container for smart-card signing.
	///
	/// After successful preparation the container is locked until it is
	/// finalized, cancelled, or the service-side timeout passes.
	/// `signerInfo.certificate` is always set to `certificate`, creating
	/// the `signerInfo` object when the options do not carry one.
	#[allow(clippy::too_many_arguments)]
	pub async fn prepare_signature(
		&self,
		container_path: &str,
		tmp_path: &str,
		certificate: &str,
		options: Option<&Value>,
		share_id: Option<&str>,
		recipient_id: Option<&str>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		data.insert("inputPath".to_string(), json!(self.full_url(container_path)));
		data.insert("containerType".to_string(), self.container_type(container_type));
		data.insert("tmpPath".to_string(), json!(self.full_url(tmp_path)));
		if let Some(share_id) = share_id {
			data.insert("shareId".to_string(), json!(share_id));
		}
		if let Some(recipient_id) = recipient_id {
			data.insert("recipientId".to_string(), json!(recipient_id));
		}
		merge_options(&mut data, options);

		let signer_info = data
			.entry("signerInfo".to_string())
			.or_insert_with(|| json!({}));
		if !signer_info.is_object() {
			*signer_info = json!({});
		}
		if let Some(info) = signer_info.as_object_mut() {
			info.insert("certificate".to_string(), json!(certificate));
		}

		self.execute(RequestDescriptor::post(
			"container/sign/prepare",
			Value::Object(data),
		))
		.await
	}

	/// Finalize smart-card signing with the signature value calculated on
	/// the card. The container must be prepared first.
	pub async fn finalize_signature(
		&self,
		container_path: &str,
		signature_value: &str,
		share_id: Option<&str>,
		recipient_id: Option<&str>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		data.insert("inputPath".to_string(), json!(self.full_url(container_path)));
		data.insert("containerType".to_string(), self.container_type(container_type));
		data.insert("signatureValue".to_string(), json!(signature_value));
		if let Some(share_id) = share_id {
			data.insert("shareId".to_string(), json!(share_id));
		}
		if let Some(recipient_id) = recipient_id {
			data.insert("recipientId".to_string(), json!(recipient_id));
		}
		self.execute(RequestDescriptor::post(
			"container/sign/finalize",
			Value::Object(data),
		))
		.await
	}

	/// Prepare and finalize signing with Mobile ID.
	///
	/// The result arrives asynchronously at `callback_url`, which must be
	/// reachable by the service and should carry a session correlation
	/// token (see [`Client::mobile_session_id`]).
	pub async fn mobile_signing(
		&self,
		container_path: &str,
		tmp_path: &str,
		callback_url: &str,
		user_info: &Value,
		options: Option<&Value>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		data.insert("inputPath".to_string(), json!(self.full_url(container_path)));
		data.insert("tmpPath".to_string(), json!(self.full_url(tmp_path)));
		data.insert("containerType".to_string(), self.container_type(container_type));
		data.insert("callbackURL".to_string(), json!(callback_url));
		data.insert("userInfo".to_string(), user_info.clone());
		merge_options(&mut data, options);
		self.execute(RequestDescriptor::post(
			"container/sign/mobile",
			Value::Object(data),
		))
		.await
	}

	/// Cancel a prepared container and unlock it.
	pub async fn cancel_signing(
		&self,
		container_path: &str,
		share_id: Option<&str>,
		recipient_id: Option<&str>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		data.insert("inputPath".to_string(), json!(self.full_url(container_path)));
		data.insert("containerType".to_string(), self.container_type(container_type));
		if let Some(share_id) = share_id {
			data.insert("shareId".to_string(), json!(share_id));
		}
		if let Some(recipient_id) = recipient_id {
			data.insert("recipientId".to_string(), json!(recipient_id));
		}
		self.execute(RequestDescriptor::post(
			"container/sign/cancel",
			Value::Object(data),
		))
		.await
	}

	/// Decline signing a shared container.
	///
	/// The `message` field is always sent, as JSON `null` when no reason is
	/// given.
	pub async fn decline_signing(
		&self,
		container_path: &str,
		share_id: &str,
		recipient_id: &str,
		message: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"inputPath": self.full_url(container_path),
			"shareId": share_id,
			"recipientId": recipient_id,
			"message": message,
		});
		self.execute(RequestDescriptor::post("container/sign/decline", data))
			.await
	}

	// Account operations

	/// Fetch API usage logs. All filters are optional; the time filters
	/// accept the same formats as share expiry dates.
	pub async fn get_logs(
		&self,
		input_path: Option<&str>,
		share_id: Option<&str>,
		start_time: Option<&str>,
		end_time: Option<&str>,
		page_no: Option<u32>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		if let Some(input_path) = input_path {
			data.insert("inputPath".to_string(), json!(self.full_url(input_path)));
		}
		if let Some(share_id) = share_id {
			data.insert("shareId".to_string(), json!(share_id));
		}
		if let Some(start_time) = start_time {
			data.insert("startTime".to_string(), json!(normalize_date(start_time)?));
		}
		if let Some(end_time) = end_time {
			data.insert("endTime".to_string(), json!(normalize_date(end_time)?));
		}
		if let Some(page_no) = page_no {
			data.insert("pageNo".to_string(), json!(page_no));
		}
		self.execute(RequestDescriptor::post("user/log", Value::Object(data)))
			.await
	}

	// Authentication and certificate operations

	/// Verify a smart-card authentication: the service checks the signed
	/// challenge against the certificate and validates its OCSP status.
	pub async fn authentication(
		&self,
		challenge: &str,
		signature: &str,
		certificate: &str,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"digest": challenge,
			"signature": signature,
			"certificate": certificate,
		});
		self.execute(RequestDescriptor::post("authentication/verify", data))
			.await
	}

	/// Authenticate a user with Mobile ID. The result arrives
	/// asynchronously at `callback_url`.
	pub async fn mobile_authentication(
		&self,
		callback_url: &str,
		user_info: &Value,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"callbackURL": callback_url,
			"userInfo": user_info,
		});
		self.execute(RequestDescriptor::post("authentication/mobile", data))
			.await
	}

	/// Parse a PEM certificate into its fields.
	pub async fn parse_certificate(&self, certificate: &str) -> Result<ApiResponse, ClientError> {
		let data = json!({ "certificate": certificate });
		self.execute(RequestDescriptor::post("certificate/parse", data))
			.await
	}

	/// Validate a certificate via OCSP. The returned status is one of
	/// `good`, `revoked` or `unknown`.
	pub async fn validate_certificate(
		&self,
		certificate: &str,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({ "certificate": certificate });
		self.execute(RequestDescriptor::post("certificate/ocsp", data))
			.await
	}

	/// Fetch a user's Mobile ID certificates.
	pub async fn mobile_certificates(
		&self,
		user_info: &Value,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"userInfo": user_info,
			"containerType": self.container_type(container_type),
		});
		self.execute(RequestDescriptor::post("certificate/mobile", data))
			.await
	}

	// Template and document operations

	/// Create a template from a source document. `name` defaults to the
	/// basename of `template_path`.
	pub async fn create_template(
		&self,
		template_path: &str,
		placeholders: &Value,
		name: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"inputPath": self.full_url(template_path),
			"name": name.unwrap_or(basename(template_path)),
			"placeholders": placeholders,
		});
		self.execute(RequestDescriptor::post("template", data)).await
	}

	/// Update a template's placeholders and/or name.
	pub async fn update_template(
		&self,
		template_id: &str,
		placeholders: Option<&Value>,
		name: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		if let Some(placeholders) = placeholders {
			data.insert("placeholders".to_string(), placeholders.clone());
		}
		if let Some(name) = name {
			data.insert("name".to_string(), json!(name));
		}
		self.execute(RequestDescriptor::patch(
			format!("template/{}", template_id),
			Value::Object(data),
		))
		.await
	}

	/// Delete a template.
	pub async fn delete_template(&self, template_id: &str) -> Result<ApiResponse, ClientError> {
		self.execute(RequestDescriptor::delete(
			format!("template/{}", template_id),
			None,
		))
		.await
	}

	/// Create a document entity from a template. The PDF itself is
	/// generated when the document is shared. `name` defaults to the
	/// basename of `output_path`.
	pub async fn create_document(
		&self,
		template_id: &str,
		output_path: &str,
		fields: &Value,
		name: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let data = json!({
			"template": template_id,
			"outputPath": self.full_url(output_path),
			"name": name.unwrap_or(basename(output_path)),
			"fields": fields,
		});
		self.execute(RequestDescriptor::post("document", data)).await
	}

	/// Update a document's fields and/or name.
	pub async fn update_document(
		&self,
		document_id: &str,
		fields: Option<&Value>,
		name: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		let mut data = Map::new();
		data.insert("documentId".to_string(), json!(document_id));
		if let Some(name) = name {
			data.insert("name".to_string(), json!(name));
		}
		if let Some(fields) = fields {
			data.insert("fields".to_string(), fields.clone());
		}
		self.execute(RequestDescriptor::patch(
			format!("document/{}", document_id),
			Value::Object(data),
		))
		.await
	}

	/// Delete a document.
	pub async fn delete_document(&self, document_id: &str) -> Result<ApiResponse, ClientError> {
		self.execute(RequestDescriptor::delete(
			format!("document/{}", document_id),
			None,
		))
		.await
	}
}

/// Synchronous client wrapper (for compatibility)
///
/// This wraps the async client and runs it in a tokio runtime, mirroring
/// every operation with a blocking equivalent. For new code, prefer using
/// the async [`Client`] directly.
pub struct SyncClient {
	client: Client,
	runtime: tokio::runtime::Runtime,
}

impl SyncClient {
	/// Create a new synchronous client
	pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
		let runtime = tokio::runtime::Runtime::new()
			.map_err(|e| anyhow::anyhow!("Failed to create tokio runtime: {}", e))?;
		Ok(Self {
			client: Client::new(config)?,
			runtime,
		})
	}

	/// Get the service API version (blocking)
	pub fn get_version(&self) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.get_version())
	}

	/// Download a container or a single file from it (blocking)
	pub fn download(
		&self,
		container_path: &str,
		file_id: Option<&str>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.download(container_path, file_id, container_type))
	}

	/// Fetch container metadata (blocking)
	pub fn container_info(
		&self,
		container_path: &str,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.container_info(container_path, container_type))
	}

	/// Create a new container from files (blocking)
	pub fn create_container(
		&self,
		output_path: &str,
		files: &[FileInput],
		container_type: Option<&str>,
		overwrite: bool,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.create_container(
			output_path,
			files,
			container_type,
			overwrite,
		))
	}

	/// Add files to an existing container (blocking)
	pub fn add_files(
		&self,
		container_path: &str,
		files: &[FileInput],
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.add_files(container_path, files, container_type))
	}

	/// Extract files from a container (blocking)
	pub fn extract_files(
		&self,
		container_path: &str,
		files: &[ExtractFile],
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.extract_files(container_path, files, container_type))
	}

	/// Share a container for signing and/or viewing (blocking)
	pub fn create_share(
		&self,
		container_path: &str,
		expire_date: &str,
		recipients: &Value,
		options: Option<&Value>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.create_share(
			container_path,
			expire_date,
			recipients,
			options,
			container_type,
		))
	}

	/// Share a document created from a template (blocking)
	pub fn create_document_share(
		&self,
		document_id: &str,
		expire_date: &str,
		recipients: &Value,
		name: &str,
		options: Option<&Value>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.create_document_share(
			document_id,
			expire_date,
			recipients,
			name,
			options,
		))
	}

	/// Update an existing share (blocking)
	pub fn update_share(
		&self,
		share_id: &str,
		expire_date: Option<&str>,
		recipients: Option<&Value>,
		options: Option<&Value>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.update_share(
			share_id,
			expire_date,
			recipients,
			options,
		))
	}

	/// Delete a share (blocking)
	pub fn delete_share(
		&self,
		share_id: &str,
		message: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.delete_share(share_id, message))
	}

	/// Prepare a container for smart-card signing (blocking)
	#[allow(clippy::too_many_arguments)]
	pub fn prepare_signature(
		&self,
		container_path: &str,
		tmp_path: &str,
		certificate: &str,
		options: Option<&Value>,
		share_id: Option<&str>,
		recipient_id: Option<&str>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.prepare_signature(
			container_path,
			tmp_path,
			certificate,
			options,
			share_id,
			recipient_id,
			container_type,
		))
	}

	/// Finalize smart-card signing (blocking)
	pub fn finalize_signature(
		&self,
		container_path: &str,
		signature_value: &str,
		share_id: Option<&str>,
		recipient_id: Option<&str>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.finalize_signature(
			container_path,
			signature_value,
			share_id,
			recipient_id,
			container_type,
		))
	}

	/// Sign a container with Mobile ID (blocking submission; the signing
	/// result still arrives at the callback URL)
	pub fn mobile_signing(
		&self,
		container_path: &str,
		tmp_path: &str,
		callback_url: &str,
		user_info: &Value,
		options: Option<&Value>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.mobile_signing(
			container_path,
			tmp_path,
			callback_url,
			user_info,
			options,
			container_type,
		))
	}

	/// Cancel a prepared container (blocking)
	pub fn cancel_signing(
		&self,
		container_path: &str,
		share_id: Option<&str>,
		recipient_id: Option<&str>,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.cancel_signing(
			container_path,
			share_id,
			recipient_id,
			container_type,
		))
	}

	/// Decline signing a shared container (blocking)
	pub fn decline_signing(
		&self,
		container_path: &str,
		share_id: &str,
		recipient_id: &str,
		message: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.decline_signing(
			container_path,
			share_id,
			recipient_id,
			message,
		))
	}

	/// Fetch API usage logs (blocking)
	pub fn get_logs(
		&self,
		input_path: Option<&str>,
		share_id: Option<&str>,
		start_time: Option<&str>,
		end_time: Option<&str>,
		page_no: Option<u32>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.get_logs(
			input_path,
			share_id,
			start_time,
			end_time,
			page_no,
		))
	}

	/// Verify a smart-card authentication (blocking)
	pub fn authentication(
		&self,
		challenge: &str,
		signature: &str,
		certificate: &str,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.authentication(challenge, signature, certificate))
	}

	/// Authenticate a user with Mobile ID (blocking submission)
	pub fn mobile_authentication(
		&self,
		callback_url: &str,
		user_info: &Value,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.mobile_authentication(callback_url, user_info))
	}

	/// Parse a PEM certificate (blocking)
	pub fn parse_certificate(&self, certificate: &str) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.parse_certificate(certificate))
	}

	/// Validate a certificate via OCSP (blocking)
	pub fn validate_certificate(&self, certificate: &str) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.validate_certificate(certificate))
	}

	/// Fetch a user's Mobile ID certificates (blocking)
	pub fn mobile_certificates(
		&self,
		user_info: &Value,
		container_type: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.mobile_certificates(user_info, container_type))
	}

	/// Create a template from a source document (blocking)
	pub fn create_template(
		&self,
		template_path: &str,
		placeholders: &Value,
		name: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.create_template(template_path, placeholders, name))
	}

	/// Update a template (blocking)
	pub fn update_template(
		&self,
		template_id: &str,
		placeholders: Option<&Value>,
		name: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.update_template(template_id, placeholders, name))
	}

	/// Delete a template (blocking)
	pub fn delete_template(&self, template_id: &str) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.delete_template(template_id))
	}

	/// Create a document entity from a template (blocking)
	pub fn create_document(
		&self,
		template_id: &str,
		output_path: &str,
		fields: &Value,
		name: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.create_document(
			template_id,
			output_path,
			fields,
			name,
		))
	}

	/// Update a document (blocking)
	pub fn update_document(
		&self,
		document_id: &str,
		fields: Option<&Value>,
		name: Option<&str>,
	) -> Result<ApiResponse, ClientError> {
		self.runtime
			.block_on(self.client.update_document(document_id, fields, name))
	}

	/// Delete a document (blocking)
	pub fn delete_document(&self, document_id: &str) -> Result<ApiResponse, ClientError> {
		self.runtime.block_on(self.client.delete_document(document_id))
	}
}
