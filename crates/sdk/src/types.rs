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

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event name delivered to the callback URL for Mobile ID signing
pub const EVENT_MOBILE_SIGN: &str = "mobile-sign";

/// Event name delivered to the callback URL for Mobile ID authentication
pub const EVENT_MOBILE_LOGIN: &str = "mobile-login";

/// A file entry for container creation and file addition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
	/// Source path, resolved against the configured file proxy when bare
	pub input_path: String,
	/// File name stored in the container (defaults to the path basename)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub file_name: Option<String>,
	/// File MIME type (defaults to application/octet-stream)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub file_type: Option<String>,
}

impl FileDescriptor {
	pub fn new(input_path: impl Into<String>) -> Self {
		Self {
			input_path: input_path.into(),
			file_name: None,
			file_type: None,
		}
	}

	/// File name stored in the container
	pub fn with_name(mut self, file_name: impl Into<String>) -> Self {
		self.file_name = Some(file_name.into());
		self
	}

	/// File MIME type
	pub fn with_type(mut self, file_type: impl Into<String>) -> Self {
		self.file_type = Some(file_type.into());
		self
	}
}

/// Input-file list entry: either a bare path shorthand or a full descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum FileInput {
	Path(String),
	File(FileDescriptor),
}

impl From<&str> for FileInput {
	fn from(path: &str) -> Self {
		FileInput::Path(path.to_string())
	}
}

impl From<String> for FileInput {
	fn from(path: String) -> Self {
		FileInput::Path(path)
	}
}

impl From<FileDescriptor> for FileInput {
	fn from(file: FileDescriptor) -> Self {
		FileInput::File(file)
	}
}

/// A file to extract from a container
///
/// Extraction has no shorthand form: both the destination path and the
/// container-internal file id must be explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFile {
	/// Destination path, resolved against the configured file proxy when bare
	pub output_path: String,
	/// Container-internal file id
	pub file_id: String,
}

impl ExtractFile {
	pub fn new(output_path: impl Into<String>, file_id: impl Into<String>) -> Self {
		Self {
			output_path: output_path.into(),
			file_id: file_id.into(),
		}
	}
}

/// Normalized result of one API call
///
/// Service errors are not folded into this type: error-shaped JSON bodies
/// come back as [`ApiResponse::Json`] like any other payload, and the caller
/// inspects the shape. Transport failures surface separately as
/// [`crate::ClientError::Network`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
	/// Response body was empty; `true` iff the HTTP status was exactly 200
	Empty(bool),
	/// Unparsed body: raw transfers, and bodies that are not usable JSON
	Raw(String),
	/// Parsed non-null JSON body
	Json(Value),
}

impl ApiResponse {
	/// `false` only for an empty-body response with a non-200 status
	pub fn is_ok(&self) -> bool {
		match self {
			ApiResponse::Empty(ok) => *ok,
			_ => true,
		}
	}

	/// Parsed JSON body, if this response carries one
	pub fn json(&self) -> Option<&Value> {
		match self {
			ApiResponse::Json(value) => Some(value),
			_ => None,
		}
	}

	/// Raw body string, if this response carries one
	pub fn raw(&self) -> Option<&str> {
		match self {
			ApiResponse::Raw(body) => Some(body),
			_ => None,
		}
	}

	/// Consume the response, keeping only a parsed JSON body
	pub fn into_json(self) -> Option<Value> {
		match self {
			ApiResponse::Json(value) => Some(value),
			_ => None,
		}
	}
}

/// Body of a mobile signing/authentication callback
///
/// The service POSTs this to the callback URL given to
/// [`crate::Client::mobile_signing`] and
/// [`crate::Client::mobile_authentication`]. The session correlation token
/// travels in the callback URL's query string, not in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackEvent {
	/// `mobile-sign` or `mobile-login`
	pub event: String,
	/// Present and `true` on successful login events
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub success: Option<bool>,
	/// Present on failures
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<CallbackError>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub country: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub personal_code: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
}

/// Error details of a failed mobile flow
///
/// Signing failures carry `statusCode`; login failures carry `code`. The
/// service does not document the value domain, so both stay opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackError {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status_code: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<Value>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn file_descriptor_serializes_camel_case() {
		let file = FileDescriptor::new("a.txt")
			.with_name("document.txt")
			.with_type("text/plain");
		assert_eq!(
			serde_json::to_value(&file).unwrap(),
			json!({
				"inputPath": "a.txt",
				"fileName": "document.txt",
				"fileType": "text/plain",
			})
		);
	}

	#[test]
	fn extract_file_serializes_camel_case() {
		let file = ExtractFile::new("out.txt", "file-1");
		assert_eq!(
			serde_json::to_value(&file).unwrap(),
			json!({ "outputPath": "out.txt", "fileId": "file-1" })
		);
	}

	#[test]
	fn callback_event_parses_login_payload() {
		let body = json!({
			"event": "mobile-login",
			"success": true,
			"country": "EE",
			"personalCode": "51001091072",
			"firstName": "John",
			"lastName": "Smith",
		});
		let event: CallbackEvent = serde_json::from_value(body).unwrap();
		assert_eq!(event.event, EVENT_MOBILE_LOGIN);
		assert_eq!(event.success, Some(true));
		assert_eq!(event.personal_code.as_deref(), Some("51001091072"));
		assert!(event.error.is_none());
	}

	#[test]
	fn callback_event_parses_sign_failure() {
		let body = json!({
			"event": "mobile-sign",
			"error": { "statusCode": 301 },
		});
		let event: CallbackEvent = serde_json::from_value(body).unwrap();
		assert_eq!(event.event, EVENT_MOBILE_SIGN);
		assert_eq!(event.error.unwrap().status_code, Some(json!(301)));
	}

	#[test]
	fn api_response_accessors() {
		assert!(ApiResponse::Empty(true).is_ok());
		assert!(!ApiResponse::Empty(false).is_ok());
		assert!(ApiResponse::Raw("body".into()).is_ok());
		assert_eq!(
			ApiResponse::Json(json!({"a": 1})).json(),
			Some(&json!({"a": 1}))
		);
		assert_eq!(ApiResponse::Raw("body".into()).raw(), Some("body"));
		assert_eq!(ApiResponse::Empty(true).json(), None);
	}
}
