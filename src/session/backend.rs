// Copyright 2025 Muvon Un Limited
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

// Client for the remote phone answering service

use crate::config::Config;
use crate::log_debug;
use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

/// Answer fields tried in order on the response payload
const ANSWER_FIELDS: [&str; 3] = ["response_text", "response", "answer"];

/// Shown when the payload carries no usable answer field
pub const NO_RESPONSE_TEXT: &str = "No response.";

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize)]
struct QueryRequest<'a> {
	query: &'a str,
}

/// Extract the answer text from a response payload.
///
/// Tries each known field name in order and takes the first one holding a
/// non-empty string. Any other payload shape degrades to [`NO_RESPONSE_TEXT`]
/// rather than an error.
pub fn extract_answer(payload: &serde_json::Value) -> String {
	for field in ANSWER_FIELDS {
		if let Some(text) = payload.get(field).and_then(|v| v.as_str()) {
			if !text.is_empty() {
				return text.to_string();
			}
		}
	}
	NO_RESPONSE_TEXT.to_string()
}

/// Abstraction over the remote answering service.
///
/// Implementors encapsulate transport and serialization details; the chat
/// controller only sees a query going out and a JSON payload or error
/// coming back.
#[async_trait::async_trait]
pub trait AnswerService: Send + Sync {
	async fn answer(&self, query: &str) -> Result<serde_json::Value>;
}

/// HTTP implementation of [`AnswerService`]
pub struct HttpAnswerService {
	client: Client,
	chat_url: String,
	health_url: String,
}

impl HttpAnswerService {
	pub fn new(config: &Config) -> Self {
		Self {
			client: Client::new(),
			chat_url: config.chat_url(),
			health_url: config.health_url(),
		}
	}

	/// Probe the backend health endpoint and return the reported status
	pub async fn health(&self) -> Result<String> {
		let response = self.client.get(&self.health_url).send().await?;

		if !response.status().is_success() {
			return Err(anyhow::anyhow!(
				"Health check failed with status: {}",
				response.status()
			));
		}

		let payload = response.json::<serde_json::Value>().await?;
		let status = payload
			.get("status")
			.and_then(|v| v.as_str())
			.unwrap_or("unknown")
			.to_string();

		Ok(status)
	}
}

#[async_trait::async_trait]
impl AnswerService for HttpAnswerService {
	async fn answer(&self, query: &str) -> Result<serde_json::Value> {
		let body = QueryRequest { query };

		let response = self
			.client
			.post(&self.chat_url)
			.json(&body)
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(anyhow::anyhow!(
				"Backend returned error status: {}",
				response.status()
			));
		}

		let payload = response.json::<serde_json::Value>().await?;

		// The backend also reports the detected intent; useful when debugging
		// routing issues, never displayed
		if let Some(intent) = payload.get("intent").and_then(|v| v.as_str()) {
			let confidence = payload
				.get("confidence")
				.and_then(|v| v.as_f64())
				.unwrap_or(0.0);
			log_debug!("Backend intent: {} (confidence {:.2})", intent, confidence);
		}

		Ok(payload)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_extract_answer_primary_field() {
		let payload = json!({ "response_text": "A" });
		assert_eq!(extract_answer(&payload), "A");
	}

	#[test]
	fn test_extract_answer_alternate_fields() {
		let payload = json!({ "response": "B" });
		assert_eq!(extract_answer(&payload), "B");

		let payload = json!({ "answer": "C" });
		assert_eq!(extract_answer(&payload), "C");
	}

	#[test]
	fn test_extract_answer_field_precedence() {
		let payload = json!({
			"answer": "C",
			"response_text": "A",
			"response": "B"
		});
		assert_eq!(extract_answer(&payload), "A");
	}

	#[test]
	fn test_extract_answer_empty_payload() {
		let payload = json!({});
		assert_eq!(extract_answer(&payload), NO_RESPONSE_TEXT);
	}

	#[test]
	fn test_extract_answer_skips_empty_and_non_string_values() {
		// Empty primary field falls through to the next one
		let payload = json!({ "response_text": "", "response": "B" });
		assert_eq!(extract_answer(&payload), "B");

		// Non-string values are ignored entirely
		let payload = json!({ "response_text": 42, "answer": ["C"] });
		assert_eq!(extract_answer(&payload), NO_RESPONSE_TEXT);
	}

	#[test]
	fn test_extract_answer_non_object_payload() {
		assert_eq!(extract_answer(&json!("bare string")), NO_RESPONSE_TEXT);
		assert_eq!(extract_answer(&json!(null)), NO_RESPONSE_TEXT);
	}

	#[test]
	fn test_query_request_serialization() {
		let body = QueryRequest {
			query: "best camera phone under 30000",
		};
		let value = serde_json::to_value(&body).unwrap();
		assert_eq!(
			value,
			json!({ "query": "best camera phone under 30000" })
		);
	}
}
