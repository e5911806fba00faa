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

// Chat session controller - owns the message list and the request cycle

use super::formatting::normalize_response_text;
use crate::session::backend::{extract_answer, AnswerService};
use crate::session::{Sender, Session};
use anyhow::Result;

/// Shown when the transport fails. Terminal for the turn, never retried.
pub const BACKEND_ERROR_TEXT: &str = "Error connecting to backend.";

/// Result of one submission
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
	/// The backend answered; the text is already normalized
	Answered(String),
	/// The transport failed; the fixed error text was appended
	Failed(String),
	/// Empty input or a request already pending - nothing was appended
	Ignored,
}

/// Owns the session state and orchestrates the request/response cycle.
///
/// The state machine is just idle ⇄ pending: `begin_turn` moves to pending,
/// `complete_turn` always moves back to idle. While pending, every further
/// submission is rejected - no queueing, no cancellation.
#[derive(Debug, Default)]
pub struct ChatController {
	session: Session,
}

impl ChatController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn set_draft_query(&mut self, text: &str) {
		self.session.set_draft_query(text);
	}

	pub fn clear_messages(&mut self) {
		self.session.clear_messages();
	}

	/// Start a turn. Returns the query string to send to the backend, or
	/// None when the submission is a no-op (whitespace-only input, or a
	/// request already in flight).
	///
	/// On success the user message carries the raw, untrimmed text and the
	/// draft query is cleared - exactly when the request is initiated.
	pub fn begin_turn(&mut self, text: &str) -> Option<String> {
		if text.trim().is_empty() || self.session.is_pending() {
			return None;
		}

		self.session.add_message(Sender::User, text);
		self.session.clear_draft();
		self.session.set_pending(true);

		Some(text.to_string())
	}

	/// Finish a turn with the service outcome.
	///
	/// Success extracts the answer through the field fallback chain and
	/// normalizes it; failure appends the fixed error text. The pending
	/// flag is cleared on every path.
	pub fn complete_turn(&mut self, outcome: Result<serde_json::Value>) -> TurnOutcome {
		let result = match outcome {
			Ok(payload) => {
				let answer = normalize_response_text(&extract_answer(&payload));
				self.session.add_message(Sender::Bot, &answer);
				TurnOutcome::Answered(answer)
			}
			Err(_) => {
				self.session.add_message(Sender::Bot, BACKEND_ERROR_TEXT);
				TurnOutcome::Failed(BACKEND_ERROR_TEXT.to_string())
			}
		};

		self.session.set_pending(false);
		result
	}

	/// Run one full turn against the answering service
	pub async fn run_turn(&mut self, service: &dyn AnswerService, text: &str) -> TurnOutcome {
		let query = match self.begin_turn(text) {
			Some(query) => query,
			None => return TurnOutcome::Ignored,
		};

		let outcome = service.answer(&query).await;
		self.complete_turn(outcome)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	struct FixedService {
		payload: serde_json::Value,
	}

	#[async_trait::async_trait]
	impl AnswerService for FixedService {
		async fn answer(&self, _query: &str) -> Result<serde_json::Value> {
			Ok(self.payload.clone())
		}
	}

	struct FailingService;

	#[async_trait::async_trait]
	impl AnswerService for FailingService {
		async fn answer(&self, _query: &str) -> Result<serde_json::Value> {
			Err(anyhow::anyhow!("connection refused"))
		}
	}

	#[test]
	fn test_begin_turn_appends_user_message_before_completion() {
		let mut controller = ChatController::new();

		let query = controller.begin_turn("best phone under 20000");
		assert_eq!(query.as_deref(), Some("best phone under 20000"));

		let messages = controller.session().messages();
		assert_eq!(messages.len(), 1);
		assert_eq!(messages[0].sender, Sender::User);
		assert!(controller.session().is_pending());
	}

	#[test]
	fn test_empty_and_whitespace_input_is_ignored() {
		let mut controller = ChatController::new();

		assert_eq!(controller.begin_turn(""), None);
		assert_eq!(controller.begin_turn("   \t "), None);

		assert!(controller.session().messages().is_empty());
		assert!(!controller.session().is_pending());
	}

	#[test]
	fn test_second_submission_rejected_while_pending() {
		let mut controller = ChatController::new();

		assert!(controller.begin_turn("first question").is_some());
		assert_eq!(controller.begin_turn("second question"), None);

		// Only the first user message was appended
		assert_eq!(controller.session().messages().len(), 1);
		assert_eq!(controller.session().messages()[0].text, "first question");
	}

	#[test]
	fn test_user_message_keeps_raw_untrimmed_text() {
		let mut controller = ChatController::new();

		let query = controller.begin_turn("  padded question  ");
		assert_eq!(query.as_deref(), Some("  padded question  "));
		assert_eq!(controller.session().messages()[0].text, "  padded question  ");
	}

	#[test]
	fn test_draft_cleared_exactly_when_request_starts() {
		let mut controller = ChatController::new();

		controller.set_draft_query("cheap 5G phone");
		assert!(controller.begin_turn("cheap 5G phone").is_some());
		assert_eq!(controller.session().draft_query(), "");

		// A rejected submission leaves the draft untouched
		controller.set_draft_query("another one");
		assert_eq!(controller.begin_turn("another one"), None);
		assert_eq!(controller.session().draft_query(), "another one");
	}

	#[test]
	fn test_complete_turn_normalizes_answer() {
		let mut controller = ChatController::new();
		controller.begin_turn("battery phones");

		let payload = json!({ "response_text": "**Top Picks**\\n\\n- Phone A\\n- Phone B" });
		let outcome = controller.complete_turn(Ok(payload));

		assert_eq!(
			outcome,
			TurnOutcome::Answered("**Top Picks**\n- Phone A\n- Phone B".to_string())
		);

		let messages = controller.session().messages();
		assert_eq!(messages.len(), 2);
		assert_eq!(messages[1].sender, Sender::Bot);
		assert!(!controller.session().is_pending());
	}

	#[test]
	fn test_unrecognized_payload_degrades_to_no_response() {
		let mut controller = ChatController::new();
		controller.begin_turn("anything");

		let outcome = controller.complete_turn(Ok(json!({ "detail": "oops" })));

		assert_eq!(outcome, TurnOutcome::Answered("No response.".to_string()));
		assert!(!controller.session().is_pending());
	}

	#[test]
	fn test_transport_failure_appends_fixed_error_text() {
		let mut controller = ChatController::new();
		controller.begin_turn("anything");

		let outcome = controller.complete_turn(Err(anyhow::anyhow!("timeout")));

		assert_eq!(outcome, TurnOutcome::Failed(BACKEND_ERROR_TEXT.to_string()));

		let messages = controller.session().messages();
		assert_eq!(messages[1].text, "Error connecting to backend.");
		assert!(!controller.session().is_pending());
	}

	#[tokio::test]
	async fn test_run_turn_success_order() {
		let service = FixedService {
			payload: json!({ "response": "Phone A is a solid pick." }),
		};
		let mut controller = ChatController::new();

		let outcome = controller.run_turn(&service, "what about phone A?").await;
		assert_eq!(
			outcome,
			TurnOutcome::Answered("Phone A is a solid pick.".to_string())
		);

		// User message strictly before its bot message
		let messages = controller.session().messages();
		assert_eq!(messages[0].sender, Sender::User);
		assert_eq!(messages[1].sender, Sender::Bot);
	}

	#[tokio::test]
	async fn test_session_recovers_after_both_outcomes() {
		let failing = FailingService;
		let fixed = FixedService {
			payload: json!({ "answer": "recovered" }),
		};
		let mut controller = ChatController::new();

		let outcome = controller.run_turn(&failing, "first try").await;
		assert!(matches!(outcome, TurnOutcome::Failed(_)));
		assert!(!controller.session().is_pending());

		// A new submission succeeds - the session is not stuck in pending
		let outcome = controller.run_turn(&fixed, "second try").await;
		assert_eq!(outcome, TurnOutcome::Answered("recovered".to_string()));
		assert_eq!(controller.session().messages().len(), 4);
	}

	#[tokio::test]
	async fn test_run_turn_ignores_empty_input() {
		let service = FixedService {
			payload: json!({ "response_text": "unused" }),
		};
		let mut controller = ChatController::new();

		let outcome = controller.run_turn(&service, "   ").await;
		assert_eq!(outcome, TurnOutcome::Ignored);
		assert!(controller.session().messages().is_empty());
	}
}
