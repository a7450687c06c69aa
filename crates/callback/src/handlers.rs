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

use actix_web::{HttpResponse, Responder, web};
use hallmark_sdk::CallbackEvent;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::store::SessionLog;

/// Error types for callback handling
#[derive(Debug, Error)]
pub enum CallbackHandlerError {
	#[error("Session store error: {0}")]
	Store(String),
}

impl actix_web::ResponseError for CallbackHandlerError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::InternalServerError().json(serde_json::json!({
			"error": self.to_string()
		}))
	}
}

/// Query parameters carried on the callback URL
#[derive(Debug, Deserialize)]
pub struct SessionQuery {
	#[serde(rename = "mobileSession")]
	pub mobile_session: String,
}

/// Configure routes for the callback receiver
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
	cfg.route("/callback", web::post().to(receive_callback))
		.route("/health", web::get().to(health));
}

/// Health check endpoint
pub async fn health() -> impl Responder {
	HttpResponse::Ok().json(serde_json::json!({
		"status": "ok",
		"service": "hallmark-callback"
	}))
}

/// Receive a mobile signing/login event and record it against the session
/// token from the callback URL. Unknown events are acknowledged and dropped
/// so the service does not redeliver them.
pub async fn receive_callback(
	sessions: web::Data<SessionLog>,
	query: web::Query<SessionQuery>,
	event: web::Json<CallbackEvent>,
) -> Result<HttpResponse, CallbackHandlerError> {
	match sessions.record(&query.mobile_session, &event) {
		Ok(Some(line)) => {
			info!(target: "callback", "{}", line);
			Ok(HttpResponse::Ok().finish())
		}
		Ok(None) => {
			warn!(target: "callback", "Ignoring unknown event '{}'", event.event);
			Ok(HttpResponse::Ok().finish())
		}
		Err(e) => Err(CallbackHandlerError::Store(e.to_string())),
	}
}
