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

//! Input normalization for client operations
//!
//! Every public operation funnels its arguments through these helpers before
//! a request is built: path references resolve against the configured file
//! proxy, dates coerce to epoch milliseconds, and file lists expand their
//! shorthand forms. Caller-supplied option maps merge last, so explicit
//! input always wins over derived defaults.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value, json};

use crate::client::ClientError;
use crate::config::DEFAULT_FILE_TYPE;
use crate::types::{ExtractFile, FileDescriptor, FileInput};

/// Resolve a path reference against the file-proxy base.
///
/// A path that already carries a URL scheme (`letters://`) passes through
/// unchanged; a bare name is prefixed with the proxy base. With no proxy
/// configured the bare name is returned as-is.
pub fn resolve_path(path: &str, proxy_base: Option<&str>) -> String {
	if has_url_scheme(path) {
		path.to_string()
	} else {
		format!("{}{}", proxy_base.unwrap_or(""), path)
	}
}

fn has_url_scheme(path: &str) -> bool {
	match path.find("://") {
		Some(idx) => path[..idx].chars().all(|c| c.is_ascii_alphabetic()),
		None => false,
	}
}

/// Pick the explicit container type when given and non-empty, else the
/// configured default. Both may be absent; the value is passed to the
/// service unvalidated.
pub fn resolve_container_type(explicit: Option<&str>, default: Option<&str>) -> Option<String> {
	match explicit {
		Some(container_type) if !container_type.is_empty() => Some(container_type.to_string()),
		_ => default.map(|d| d.to_string()),
	}
}

/// Normalize a date argument to epoch milliseconds.
///
/// Accepts a 10-digit Unix-seconds string, a 13-digit milliseconds string
/// (passed through), or a free-text date parsed in UTC: RFC 3339,
/// `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`. Anything else is an
/// [`ClientError::InvalidDate`] rather than a silent zero timestamp.
pub fn normalize_date(input: &str) -> Result<i64, ClientError> {
	let input = input.trim();
	if all_digits(input, 10) {
		let seconds: i64 = input
			.parse()
			.map_err(|_| ClientError::InvalidDate(input.to_string()))?;
		return Ok(seconds * 1000);
	}
	if all_digits(input, 13) {
		return input
			.parse()
			.map_err(|_| ClientError::InvalidDate(input.to_string()));
	}
	if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
		return Ok(date_time.with_timezone(&Utc).timestamp() * 1000);
	}
	if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
		return Ok(naive.and_utc().timestamp() * 1000);
	}
	if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
		&& let Some(midnight) = date.and_hms_opt(0, 0, 0)
	{
		return Ok(midnight.and_utc().timestamp() * 1000);
	}
	Err(ClientError::InvalidDate(input.to_string()))
}

fn all_digits(input: &str, len: usize) -> bool {
	input.len() == len && input.bytes().all(|b| b.is_ascii_digit())
}

/// Final `/`-separated path segment, ignoring trailing slashes. Works on
/// bare names and full URLs alike.
pub fn basename(path: &str) -> &str {
	let trimmed = path.trim_end_matches('/');
	match trimmed.rfind('/') {
		Some(idx) => &trimmed[idx + 1..],
		None => trimmed,
	}
}

/// Shape an input-file list for container creation and file addition.
///
/// Bare-string entries wrap into `{inputPath}` objects. Every path resolves
/// against the proxy base; a missing `fileName` defaults to the basename of
/// the resolved path and a missing `fileType` to
/// `application/octet-stream`. An empty list stays empty.
pub fn normalize_input_files(files: &[FileInput], proxy_base: Option<&str>) -> Vec<Value> {
	files
		.iter()
		.map(|entry| {
			let file = match entry {
				FileInput::Path(path) => FileDescriptor::new(path.clone()),
				FileInput::File(file) => file.clone(),
			};
			let input_path = resolve_path(&file.input_path, proxy_base);
			let file_name = file
				.file_name
				.unwrap_or_else(|| basename(&input_path).to_string());
			let file_type = file
				.file_type
				.unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string());
			json!({
				"inputPath": input_path,
				"fileName": file_name,
				"fileType": file_type,
			})
		})
		.collect()
}

/// Shape an extraction list: resolve each `outputPath`, keep the `fileId`.
/// No name or type defaulting applies to extraction entries.
pub fn normalize_extract_files(files: &[ExtractFile], proxy_base: Option<&str>) -> Vec<Value> {
	files
		.iter()
		.map(|file| {
			json!({
				"outputPath": resolve_path(&file.output_path, proxy_base),
				"fileId": file.file_id,
			})
		})
		.collect()
}

/// Merge caller-supplied options over computed defaults.
///
/// Entries from `options` overwrite existing keys in `data`, so an explicit
/// option always wins over a derived default. Non-object option values are
/// ignored.
pub fn merge_options(data: &mut Map<String, Value>, options: Option<&Value>) {
	if let Some(Value::Object(entries)) = options {
		for (key, value) in entries {
			data.insert(key.clone(), value.clone());
		}
	}
}
