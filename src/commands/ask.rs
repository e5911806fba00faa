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

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::io::{self, Read};

use phonemind::config::Config;
use phonemind::session::chat::controller::{ChatController, TurnOutcome};
use phonemind::session::chat::markdown::{is_markdown_content, MarkdownRenderer};
use phonemind::session::HttpAnswerService;

#[derive(Args, Debug)]
pub struct AskArgs {
	/// Question to ask the phone assistant
	#[arg(value_name = "INPUT")]
	pub input: Option<String>,

	/// Use a specific backend URL instead of the configured one (runtime only, not saved)
	#[arg(long)]
	pub backend_url: Option<String>,

	/// Output raw text without markdown rendering
	#[arg(long)]
	pub raw: bool,
}

// Helper function to print content with optional markdown rendering
fn print_response(content: &str, use_raw: bool, config: &Config) {
	if use_raw || !config.markdown_enable {
		// Use plain text output
		println!("{}", content);
	} else if is_markdown_content(content) {
		// Use markdown rendering with theme from config
		let theme = config.markdown_theme.parse().unwrap_or_default();
		let renderer = MarkdownRenderer::with_theme(theme);
		if renderer.render_and_print(content).is_err() {
			// Fallback to plain text if markdown rendering fails
			println!("{}", content);
		}
	} else {
		// Use plain text with color for non-markdown content
		println!("{}", content.bright_green());
	}
}

pub async fn execute(args: &AskArgs, config: &Config) -> Result<()> {
	let mut config = config.clone();
	if let Some(url) = &args.backend_url {
		config.backend_url = url.clone();
	}

	// Get input from the argument or from piped stdin
	let input = if let Some(input) = &args.input {
		input.clone()
	} else if !atty::is(atty::Stream::Stdin) {
		// Read from stdin if it's being piped
		let mut buffer = String::new();
		io::stdin().read_to_string(&mut buffer)?;
		buffer
	} else {
		eprintln!("Error: No input provided. Pass a question or pipe it via stdin.");
		std::process::exit(1);
	};

	if input.trim().is_empty() {
		eprintln!("Error: No input provided.");
		std::process::exit(1);
	}

	let service = HttpAnswerService::new(&config);
	let mut controller = ChatController::new();

	match controller.run_turn(&service, &input).await {
		TurnOutcome::Answered(text) => {
			print_response(&text, args.raw, &config);
			Ok(())
		}
		TurnOutcome::Failed(text) => {
			eprintln!("{}", text.bright_red());
			std::process::exit(1);
		}
		// Empty input was already rejected above
		TurnOutcome::Ignored => Ok(()),
	}
}
