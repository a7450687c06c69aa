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

//! Request-building tests against a local echo service
//!
//! Each test drives the real client at a mock endpoint that echoes the
//! method, path, auth header and parsed body back as JSON, so the exact
//! wire shape of every operation can be asserted without the real service.

use std::io::Write;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use hallmark_sdk::{ApiResponse, Client, ClientConfig, ExtractFile, FileDescriptor, FileInput};
use serde_json::{Value, json};

async fn echo(req: HttpRequest, body: web::Bytes) -> HttpResponse {
	let parsed: Value = if body.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&body)
			.unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
	};
	let cert_header = req
		.headers()
		.get("x-ssl-client-cert")
		.and_then(|value| value.to_str().ok())
		.map(|value| value.to_string());
	HttpResponse::Ok().json(json!({
		"method": req.method().as_str(),
		"path": req.path(),
		"certHeader": cert_header,
		"body": parsed,
	}))
}

/// Spawn the echo service on an ephemeral port, returning its base URL
fn spawn_echo_server() -> String {
	let server = HttpServer::new(|| App::new().default_service(web::route().to(echo)))
		.workers(1)
		.bind(("127.0.0.1", 0))
		.expect("bind echo server");
	let addr = server.addrs()[0];
	actix_rt::spawn(server.run());
	format!("http://{}/", addr)
}

fn test_client(server: &str) -> Client {
	let config = ClientConfig::new(server)
		.with_file_proxy_url("http://proxy/")
		.with_container_type("bdoc");
	Client::new(config).expect("client")
}

/// Unwrap the echo payload from a JSON response
fn echoed(response: ApiResponse) -> Value {
	match response {
		ApiResponse::Json(value) => value,
		other => panic!("expected JSON echo, got {:?}", other),
	}
}

#[actix_rt::test]
async fn get_version_is_a_bare_get() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(client.get_version().await.unwrap());
	assert_eq!(echo["method"], "GET");
	assert_eq!(echo["path"], "/version");
	assert_eq!(echo["body"], Value::Null);
}

#[actix_rt::test]
async fn create_container_builds_documented_body() {
	let client = test_client(&spawn_echo_server());
	let files = [FileInput::from("a.txt")];
	let echo = echoed(
		client
			.create_container("doc.bdoc", &files, None, true)
			.await
			.unwrap(),
	);
	assert_eq!(echo["method"], "POST");
	assert_eq!(echo["path"], "/container");
	assert_eq!(
		echo["body"],
		json!({
			"outputPath": "http://proxy/doc.bdoc",
			"containerType": "bdoc",
			"overwrite": true,
			"files": [{
				"inputPath": "http://proxy/a.txt",
				"fileName": "a.txt",
				"fileType": "application/octet-stream",
			}],
		})
	);
}

#[actix_rt::test]
async fn add_files_puts_normalized_list() {
	let client = test_client(&spawn_echo_server());
	let files = [FileInput::from(
		FileDescriptor::new("report.pdf").with_type("application/pdf"),
	)];
	let echo = echoed(
		client
			.add_files("doc.bdoc", &files, Some("asice"))
			.await
			.unwrap(),
	);
	assert_eq!(echo["method"], "PUT");
	assert_eq!(echo["path"], "/container/file");
	assert_eq!(echo["body"]["containerType"], "asice");
	assert_eq!(
		echo["body"]["files"],
		json!([{
			"inputPath": "http://proxy/report.pdf",
			"fileName": "report.pdf",
			"fileType": "application/pdf",
		}])
	);
}

#[actix_rt::test]
async fn extract_files_resolves_output_paths() {
	let client = test_client(&spawn_echo_server());
	let files = [ExtractFile::new("out.txt", "file-1")];
	let echo = echoed(client.extract_files("doc.bdoc", &files, None).await.unwrap());
	assert_eq!(echo["method"], "POST");
	assert_eq!(echo["path"], "/container/file");
	assert_eq!(
		echo["body"]["files"],
		json!([{ "outputPath": "http://proxy/out.txt", "fileId": "file-1" }])
	);
}

#[actix_rt::test]
async fn download_returns_raw_body() {
	let client = test_client(&spawn_echo_server());
	let response = client
		.download("doc.bdoc", Some("file-1"), None)
		.await
		.unwrap();
	// Raw mode: the echo JSON arrives unparsed
	let raw = response.raw().expect("raw body").to_string();
	let echo: Value = serde_json::from_str(&raw).unwrap();
	assert_eq!(echo["method"], "POST");
	assert_eq!(echo["path"], "/container/download");
	assert_eq!(echo["body"]["inputPath"], "http://proxy/doc.bdoc");
	assert_eq!(echo["body"]["fileId"], "file-1");
}

#[actix_rt::test]
async fn create_share_defaults_name_and_normalizes_date() {
	let client = test_client(&spawn_echo_server());
	let recipients = json!([{ "email": "john@example.com" }]);
	let echo = echoed(
		client
			.create_share("doc.bdoc", "2015-12-31 23:59:59", &recipients, None, None)
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/container/share");
	assert_eq!(echo["body"]["inputPath"], "http://proxy/doc.bdoc");
	assert_eq!(echo["body"]["expires"], 1_451_606_399_000i64);
	assert_eq!(echo["body"]["name"], "doc.bdoc");
	assert_eq!(echo["body"]["recipients"], recipients);
}

#[actix_rt::test]
async fn create_share_options_override_computed_fields() {
	let client = test_client(&spawn_echo_server());
	let recipients = json!([]);
	let options = json!({ "name": "Contract", "language": "et-EE" });
	let echo = echoed(
		client
			.create_share("doc.bdoc", "1451606399", &recipients, Some(&options), None)
			.await
			.unwrap(),
	);
	assert_eq!(echo["body"]["name"], "Contract");
	assert_eq!(echo["body"]["language"], "et-EE");
	assert_eq!(echo["body"]["expires"], 1_451_606_399_000i64);
}

#[actix_rt::test]
async fn create_document_share_pins_pdf_container() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(
		client
			.create_document_share("doc-1", "1451606399000", &json!([]), "My Share", None)
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/container/share");
	assert_eq!(echo["body"]["document"], "doc-1");
	assert_eq!(echo["body"]["containerType"], "pdf");
	assert_eq!(echo["body"]["name"], "My Share");
	assert_eq!(echo["body"]["expires"], 1_451_606_399_000i64);
}

#[actix_rt::test]
async fn update_share_computed_fields_replace_options() {
	let client = test_client(&spawn_echo_server());
	let options = json!({ "expires": 1, "note": "kept" });
	let echo = echoed(
		client
			.update_share("share-1", Some("1451606399"), None, Some(&options))
			.await
			.unwrap(),
	);
	assert_eq!(echo["method"], "PATCH");
	assert_eq!(echo["path"], "/container/share/share-1");
	// The normalized expiry wins over the caller's entry
	assert_eq!(echo["body"]["expires"], 1_451_606_399_000i64);
	assert_eq!(echo["body"]["note"], "kept");
}

#[actix_rt::test]
async fn delete_share_body_only_with_message() {
	let client = test_client(&spawn_echo_server());

	let echo = echoed(
		client
			.delete_share("share-1", Some("superseded"))
			.await
			.unwrap(),
	);
	assert_eq!(echo["method"], "DELETE");
	assert_eq!(echo["path"], "/container/share/share-1");
	assert_eq!(echo["body"], json!({ "message": "superseded" }));

	let echo = echoed(client.delete_share("share-1", None).await.unwrap());
	assert_eq!(echo["body"], Value::Null);
}

#[actix_rt::test]
async fn prepare_signature_forces_signer_certificate() {
	let client = test_client(&spawn_echo_server());
	let options = json!({ "signerInfo": { "role": "CEO" }, "city": "Tallinn" });
	let echo = echoed(
		client
			.prepare_signature(
				"doc.bdoc",
				"doc.bdoc.tmp",
				"PEM-CERT",
				Some(&options),
				Some("share-1"),
				Some("recipient-1"),
				None,
			)
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/container/sign/prepare");
	assert_eq!(echo["body"]["tmpPath"], "http://proxy/doc.bdoc.tmp");
	assert_eq!(echo["body"]["shareId"], "share-1");
	assert_eq!(echo["body"]["recipientId"], "recipient-1");
	assert_eq!(echo["body"]["city"], "Tallinn");
	// Option-supplied signerInfo is kept, but the certificate is forced
	assert_eq!(echo["body"]["signerInfo"]["role"], "CEO");
	assert_eq!(echo["body"]["signerInfo"]["certificate"], "PEM-CERT");
}

#[actix_rt::test]
async fn prepare_signature_creates_signer_info_when_absent() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(
		client
			.prepare_signature("doc.bdoc", "doc.bdoc.tmp", "PEM-CERT", None, None, None, None)
			.await
			.unwrap(),
	);
	assert_eq!(echo["body"]["signerInfo"], json!({ "certificate": "PEM-CERT" }));
	assert_eq!(echo["body"].get("shareId"), None);
}

#[actix_rt::test]
async fn finalize_signature_carries_signature_value() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(
		client
			.finalize_signature("doc.bdoc", "3a8482b4", None, None, None)
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/container/sign/finalize");
	assert_eq!(echo["body"]["signatureValue"], "3a8482b4");
	assert_eq!(echo["body"]["containerType"], "bdoc");
}

#[actix_rt::test]
async fn mobile_signing_passes_callback_and_user_info() {
	let client = test_client(&spawn_echo_server());
	let user_info = json!({ "language": "et", "ssn": "51001091072", "msisdn": "37260000007" });
	let options = json!({ "messageToDisplay": "Sign?" });
	let echo = echoed(
		client
			.mobile_signing(
				"doc.bdoc",
				"doc.bdoc.tmp",
				"http://example.com/callback?mobileSession=abc",
				&user_info,
				Some(&options),
				None,
			)
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/container/sign/mobile");
	assert_eq!(
		echo["body"]["callbackURL"],
		"http://example.com/callback?mobileSession=abc"
	);
	assert_eq!(echo["body"]["userInfo"], user_info);
	assert_eq!(echo["body"]["messageToDisplay"], "Sign?");
}

#[actix_rt::test]
async fn cancel_signing_omits_absent_share_fields() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(client.cancel_signing("doc.bdoc", None, None, None).await.unwrap());
	assert_eq!(echo["path"], "/container/sign/cancel");
	assert_eq!(echo["body"].get("shareId"), None);
	assert_eq!(echo["body"].get("recipientId"), None);
}

// The service treats a missing decline reason as an explicit null message;
// the field is always present. Current behavior, preserved deliberately.
#[actix_rt::test]
async fn decline_signing_always_sends_message_field() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(
		client
			.decline_signing("doc.bdoc", "share-1", "recipient-1", None)
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/container/sign/decline");
	let body = echo["body"].as_object().unwrap();
	assert!(body.contains_key("message"));
	assert_eq!(body["message"], Value::Null);
	assert_eq!(body["shareId"], "share-1");
	assert_eq!(body["recipientId"], "recipient-1");
}

#[actix_rt::test]
async fn get_logs_normalizes_time_filters() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(
		client
			.get_logs(
				Some("doc.bdoc"),
				Some("share-1"),
				Some("1451606399"),
				Some("2015-12-31 23:59:59"),
				Some(2),
			)
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/user/log");
	assert_eq!(echo["body"]["inputPath"], "http://proxy/doc.bdoc");
	assert_eq!(echo["body"]["startTime"], 1_451_606_399_000i64);
	assert_eq!(echo["body"]["endTime"], 1_451_606_399_000i64);
	assert_eq!(echo["body"]["pageNo"], 2);
}

#[actix_rt::test]
async fn get_logs_without_filters_sends_no_body() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(client.get_logs(None, None, None, None, None).await.unwrap());
	assert_eq!(echo["body"], Value::Null);
}

#[actix_rt::test]
async fn update_template_without_changes_sends_no_body() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(client.update_template("tpl-1", None, None).await.unwrap());
	assert_eq!(echo["method"], "PATCH");
	assert_eq!(echo["body"], Value::Null);
}

#[actix_rt::test]
async fn authentication_sends_challenge_as_digest() {
	let client = test_client(&spawn_echo_server());
	let echo = echoed(
		client
			.authentication("random-challenge", "sig", "PEM-CERT")
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/authentication/verify");
	assert_eq!(
		echo["body"],
		json!({ "digest": "random-challenge", "signature": "sig", "certificate": "PEM-CERT" })
	);
}

#[actix_rt::test]
async fn certificate_operations_pass_through() {
	let client = test_client(&spawn_echo_server());

	let echo = echoed(client.parse_certificate("PEM-CERT").await.unwrap());
	assert_eq!(echo["path"], "/certificate/parse");
	assert_eq!(echo["body"], json!({ "certificate": "PEM-CERT" }));

	let echo = echoed(client.validate_certificate("PEM-CERT").await.unwrap());
	assert_eq!(echo["path"], "/certificate/ocsp");

	let user_info = json!({ "ssn": "51001091072", "msisdn": "37260000007" });
	let echo = echoed(client.mobile_certificates(&user_info, None).await.unwrap());
	assert_eq!(echo["path"], "/certificate/mobile");
	assert_eq!(echo["body"]["userInfo"], user_info);
	assert_eq!(echo["body"]["containerType"], "bdoc");
}

#[actix_rt::test]
async fn template_lifecycle_builds_expected_requests() {
	let client = test_client(&spawn_echo_server());
	let placeholders = json!([{ "placeholder": "[date]", "label": "Date" }]);

	let echo = echoed(
		client
			.create_template("contract.rtf", &placeholders, None)
			.await
			.unwrap(),
	);
	assert_eq!(echo["method"], "POST");
	assert_eq!(echo["path"], "/template");
	assert_eq!(echo["body"]["inputPath"], "http://proxy/contract.rtf");
	assert_eq!(echo["body"]["name"], "contract.rtf");
	assert_eq!(echo["body"]["placeholders"], placeholders);

	let echo = echoed(
		client
			.update_template("tpl-1", None, Some("Renamed"))
			.await
			.unwrap(),
	);
	assert_eq!(echo["method"], "PATCH");
	assert_eq!(echo["path"], "/template/tpl-1");
	assert_eq!(echo["body"], json!({ "name": "Renamed" }));

	let echo = echoed(client.delete_template("tpl-1").await.unwrap());
	assert_eq!(echo["method"], "DELETE");
	assert_eq!(echo["path"], "/template/tpl-1");
	assert_eq!(echo["body"], Value::Null);
}

#[actix_rt::test]
async fn document_lifecycle_builds_expected_requests() {
	let client = test_client(&spawn_echo_server());
	let fields = json!([{ "placeholder": "[date]", "value": "2015-12-31" }]);

	let echo = echoed(
		client
			.create_document("tpl-1", "contract.pdf", &fields, Some("My Contract"))
			.await
			.unwrap(),
	);
	assert_eq!(echo["path"], "/document");
	assert_eq!(echo["body"]["template"], "tpl-1");
	assert_eq!(echo["body"]["outputPath"], "http://proxy/contract.pdf");
	assert_eq!(echo["body"]["name"], "My Contract");

	let echo = echoed(
		client
			.update_document("doc-1", Some(&fields), None)
			.await
			.unwrap(),
	);
	assert_eq!(echo["method"], "PATCH");
	assert_eq!(echo["path"], "/document/doc-1");
	assert_eq!(echo["body"]["documentId"], "doc-1");
	assert_eq!(echo["body"]["fields"], fields);
	assert_eq!(echo["body"].get("name"), None);

	let echo = echoed(client.delete_document("doc-1").await.unwrap());
	assert_eq!(echo["method"], "DELETE");
	assert_eq!(echo["path"], "/document/doc-1");
}

#[actix_rt::test]
async fn header_auth_sends_stripped_certificate() {
	let mut cert = tempfile::NamedTempFile::new().unwrap();
	write!(
		cert,
		"-----BEGIN CERTIFICATE-----\nAAAA\nBBBB\n-----END CERTIFICATE-----\n"
	)
	.unwrap();

	let server = spawn_echo_server();
	let config = ClientConfig::new(server.as_str()).with_certificate(cert.path());
	let client = Client::new(config).unwrap();

	let echo = echoed(client.get_version().await.unwrap());
	assert_eq!(
		echo["certHeader"],
		"-----BEGIN CERTIFICATE-----AAAABBBB-----END CERTIFICATE-----"
	);
}

#[actix_rt::test]
async fn no_auth_mode_sends_no_certificate_header() {
	let server = spawn_echo_server();
	let client = Client::new(ClientConfig::new(server.as_str())).unwrap();
	let echo = echoed(client.get_version().await.unwrap());
	assert_eq!(echo["certHeader"], Value::Null);
}
