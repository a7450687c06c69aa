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

//! Flat-file session record
//!
//! One `;`-separated line per mobile event, keyed by the session token from
//! the callback URL. Deliberately primitive: integrators swap this for a
//! session database.

use std::{
	fs::OpenOptions,
	io::Write,
	path::PathBuf,
	sync::Mutex,
};

use hallmark_sdk::{CallbackEvent, EVENT_MOBILE_LOGIN, EVENT_MOBILE_SIGN};
use serde_json::Value;

/// Append-only session event log
pub struct SessionLog {
	path: PathBuf,
	write_lock: Mutex<()>,
}

impl SessionLog {
	pub fn new(path: PathBuf) -> Self {
		Self {
			path,
			write_lock: Mutex::new(()),
		}
	}

	/// Format and append one event line. Unknown events are not recorded
	/// and return `None`.
	pub fn record(&self, session: &str, event: &CallbackEvent) -> std::io::Result<Option<String>> {
		let Some(line) = format_line(session, event) else {
			return Ok(None);
		};
		let _guard = self
			.write_lock
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner());
		let mut file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&self.path)?;
		writeln!(file, "{}", line)?;
		Ok(Some(line))
	}
}

/// Build the session line for an event: `sign;<token>;<status>` for signing
/// and `authenticate;<token>;<status>[;country;personalCode;firstName;lastName]`
/// for logins, with `OK` standing in for a missing error code.
fn format_line(session: &str, event: &CallbackEvent) -> Option<String> {
	match event.event.as_str() {
		EVENT_MOBILE_SIGN => {
			let status = event
				.error
				.as_ref()
				.and_then(|error| error.status_code.as_ref())
				.map(code_text)
				.unwrap_or_else(|| "OK".to_string());
			Some(format!("sign;{};{}", session, status))
		}
		EVENT_MOBILE_LOGIN => {
			let status = event
				.error
				.as_ref()
				.and_then(|error| error.code.as_ref())
				.map(code_text)
				.unwrap_or_else(|| "OK".to_string());
			let mut line = format!("authenticate;{};{}", session, status);
			if event.success.unwrap_or(false) {
				line.push_str(&format!(
					";{};{};{};{}",
					event.country.as_deref().unwrap_or(""),
					event.personal_code.as_deref().unwrap_or(""),
					event.first_name.as_deref().unwrap_or(""),
					event.last_name.as_deref().unwrap_or("")
				));
			}
			Some(line)
		}
		_ => None,
	}
}

fn code_text(code: &Value) -> String {
	match code {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
