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

// Interactive session runner

use super::animation::show_thinking_animation;
use super::controller::{ChatController, TurnOutcome};
use super::input::read_user_input;
use super::markdown::{is_markdown_content, MarkdownRenderer};
use crate::config::Config;
use crate::log_info;
use crate::session::backend::{AnswerService, HttpAnswerService};
use crate::session::logger;
use anyhow::Result;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Run an interactive chat session against the configured backend
pub async fn run_interactive_session(config: &Config) -> Result<()> {
	let session_name = logger::generate_session_name();
	let service = HttpAnswerService::new(config);

	let theme = config.markdown_theme.parse().unwrap_or_default();
	let renderer = MarkdownRenderer::with_theme(theme);
	let mut render_markdown = config.markdown_enable;

	let mut controller = ChatController::new();

	println!(
		"{}",
		"Phone assistant session started. Ask anything about picking a phone.".bright_green()
	);
	println!("Type /help for available commands.");
	println!(
		"{}",
		"💡 Tip: Use ↑/↓ arrows for input history".bright_yellow()
	);
	println!();

	log_info!("Backend: {}", config.chat_url());
	log_info!("Transcript: {}.jsonl", session_name);

	// Main interaction loop
	loop {
		let line = read_user_input()?;
		let trimmed = line.trim();

		if trimmed.is_empty() {
			continue;
		}

		// Session commands are local UI state, never network requests
		if trimmed.starts_with('/') {
			match trimmed {
				"/exit" => break,
				"/help" => {
					print_help();
					continue;
				}
				"/clear" => {
					controller.clear_messages();
					println!("{}", "Conversation cleared.".bright_yellow());
					continue;
				}
				"/raw" => {
					render_markdown = !render_markdown;
					if render_markdown {
						println!("{}", "Markdown rendering enabled.".bright_yellow());
					} else {
						println!("{}", "Markdown rendering disabled.".bright_yellow());
					}
					continue;
				}
				_ => {
					println!(
						"{}",
						format!("Unknown command: {} (try /help)", trimmed).bright_red()
					);
					continue;
				}
			}
		}

		// The submitted line is the draft; begin_turn clears it when the
		// request actually starts
		controller.set_draft_query(&line);

		let query = match controller.begin_turn(&line) {
			Some(query) => query,
			None => continue,
		};

		let _ = logger::log_user_input(&session_name, &line);
		let _ = logger::log_api_request(&session_name, &serde_json::json!({ "query": query }));

		// Show the thinking indicator exactly while the request is pending
		let resolved = Arc::new(AtomicBool::new(false));
		let indicator_flag = resolved.clone();
		let animation_task = tokio::spawn(async move {
			let _ = show_thinking_animation(indicator_flag).await;
		});

		let outcome = service.answer(&query).await;

		resolved.store(true, Ordering::SeqCst);
		let _ = animation_task.await;

		if let Ok(payload) = &outcome {
			let _ = logger::log_api_response(&session_name, payload);
		}

		match controller.complete_turn(outcome) {
			TurnOutcome::Answered(text) => {
				let _ = logger::log_bot_response(&session_name, &text);
				print_bot_reply(&text, render_markdown, &renderer);
			}
			TurnOutcome::Failed(text) => {
				let _ = logger::log_error(&session_name, &text);
				println!("{}", text.bright_red());
			}
			TurnOutcome::Ignored => {}
		}

		println!(); // Spacing between turns
	}

	Ok(())
}

// Print a bot reply, rendered as markdown when enabled and detected
fn print_bot_reply(text: &str, render_markdown: bool, renderer: &MarkdownRenderer) {
	if render_markdown && is_markdown_content(text) {
		if renderer.render_and_print(text).is_err() {
			// Fallback to plain text if markdown rendering fails
			println!("{}", text);
		}
	} else {
		println!("{}", text.bright_green());
	}
}

fn print_help() {
	println!("{}", "Available commands:".bright_blue());
	println!("  /help   - show this help");
	println!("  /clear  - drop the current conversation");
	println!("  /raw    - toggle markdown rendering");
	println!("  /exit   - leave the session (Ctrl+D works too)");
}
