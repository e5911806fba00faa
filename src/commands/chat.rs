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

use phonemind::config::Config;
use phonemind::session::chat::run_interactive_session;

#[derive(Args, Debug)]
pub struct ChatArgs {
	/// Use a specific backend URL instead of the configured one (runtime only, not saved)
	#[arg(long)]
	pub backend_url: Option<String>,
}

pub async fn execute(args: &ChatArgs, config: &Config) -> Result<()> {
	// Apply the runtime backend override without touching the saved config
	let mut config = config.clone();
	if let Some(url) = &args.backend_url {
		config.backend_url = url.clone();
	}

	run_interactive_session(&config).await
}
