// Session module for the phone recommendation chat

pub mod backend; // Remote answering service client
pub mod chat; // Chat session logic
mod chat_helper; // Chat command completion
pub mod logger; // Session transcript logging utilities

pub use backend::HttpAnswerService;
pub(crate) use chat_helper::CommandHelper;

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Who produced a message
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
	#[serde(rename = "user")]
	User,
	#[serde(rename = "bot")]
	Bot,
}

/// A single chat message. Immutable once created.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
	pub sender: Sender,
	pub text: String,
	pub timestamp: u64,
}

fn current_timestamp() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.unwrap_or_default()
		.as_secs()
}

/// In-memory state of one chat session.
///
/// Messages are append-only and strictly ordered: a user message is always
/// appended before the bot message that answers it. At most one request is
/// pending at any time.
#[derive(Debug, Default)]
pub struct Session {
	messages: Vec<Message>,
	pending_request: bool,
	draft_query: String,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn messages(&self) -> &[Message] {
		&self.messages
	}

	pub fn is_pending(&self) -> bool {
		self.pending_request
	}

	pub fn draft_query(&self) -> &str {
		&self.draft_query
	}

	pub fn set_draft_query(&mut self, text: &str) {
		self.draft_query = text.to_string();
	}

	// Append a message and return a clone of it
	pub(crate) fn add_message(&mut self, sender: Sender, text: &str) -> Message {
		let message = Message {
			sender,
			text: text.to_string(),
			timestamp: current_timestamp(),
		};
		self.messages.push(message.clone());
		message
	}

	pub(crate) fn set_pending(&mut self, pending: bool) {
		self.pending_request = pending;
	}

	pub(crate) fn clear_draft(&mut self) {
		self.draft_query.clear();
	}

	/// Drop all messages (conversation restart). Never touches the pending flag.
	pub fn clear_messages(&mut self) {
		self.messages.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages_append_in_order() {
		let mut session = Session::new();
		session.add_message(Sender::User, "first");
		session.add_message(Sender::Bot, "second");

		let messages = session.messages();
		assert_eq!(messages.len(), 2);
		assert_eq!(messages[0].sender, Sender::User);
		assert_eq!(messages[0].text, "first");
		assert_eq!(messages[1].sender, Sender::Bot);
	}

	#[test]
	fn test_clear_messages_keeps_pending_flag() {
		let mut session = Session::new();
		session.add_message(Sender::User, "hello");
		session.set_pending(false);
		session.clear_messages();

		assert!(session.messages().is_empty());
		assert!(!session.is_pending());
	}
}
