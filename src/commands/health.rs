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

use phonemind::config::Config;
use phonemind::session::HttpAnswerService;

#[derive(Args, Debug)]
pub struct HealthArgs {
	/// Use a specific backend URL instead of the configured one (runtime only, not saved)
	#[arg(long)]
	pub backend_url: Option<String>,
}

pub async fn execute(args: &HealthArgs, config: &Config) -> Result<()> {
	let mut config = config.clone();
	if let Some(url) = &args.backend_url {
		config.backend_url = url.clone();
	}

	let service = HttpAnswerService::new(&config);

	match service.health().await {
		Ok(status) => {
			println!(
				"{}",
				format!("✓ Backend reachable at {} (status: {})", config.health_url(), status)
					.bright_green()
			);
			Ok(())
		}
		Err(e) => {
			eprintln!(
				"{}",
				format!("✗ Backend unreachable at {}: {}", config.health_url(), e).bright_red()
			);
			std::process::exit(1);
		}
	}
}
