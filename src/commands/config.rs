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
use phonemind::directories;

#[derive(Args)]
pub struct ConfigArgs {
	/// Set the backend base URL
	#[arg(long)]
	pub backend_url: Option<String>,

	/// Set log level (none, info, debug)
	#[arg(long)]
	pub log_level: Option<String>,

	/// Enable or disable markdown rendering for bot replies
	#[arg(long)]
	pub markdown_enable: Option<bool>,

	/// Set markdown theme (default, dark, light)
	#[arg(long)]
	pub markdown_theme: Option<String>,

	/// Show current configuration values
	#[arg(long)]
	pub show: bool,
}

pub fn execute(args: &ConfigArgs, mut config: Config) -> Result<()> {
	let mut modified = false;

	if let Some(url) = &args.backend_url {
		config.backend_url = url.clone();
		println!("Set backend URL to {}", url);
		modified = true;
	}

	if let Some(level) = &args.log_level {
		config.log_level = level.parse()?;
		println!("Set log level to {}", level);
		modified = true;
	}

	if let Some(enable) = args.markdown_enable {
		config.markdown_enable = enable;
		println!("Set markdown rendering to {}", enable);
		modified = true;
	}

	if let Some(theme) = &args.markdown_theme {
		// Validate before saving
		let _: phonemind::session::chat::markdown::MarkdownTheme = theme.parse()?;
		config.markdown_theme = theme.clone();
		println!("Set markdown theme to {}", theme);
		modified = true;
	}

	if modified {
		config.save()?;
		println!("Configuration saved successfully");
	} else if !args.show {
		// No modifications requested - write a default config file
		let config_path = Config::create_default_config()?;
		println!(
			"Created default configuration file at: {}",
			config_path.display()
		);
	}

	// Show current configuration
	println!("\nCurrent configuration:");
	println!("Config file:       {}", directories::get_config_file_path()?.display());
	println!("Backend URL:       {}", config.backend_url);
	println!("Log level:         {:?}", config.log_level);
	println!("Markdown enabled:  {}", config.markdown_enable);
	println!("Markdown theme:    {}", config.markdown_theme);

	Ok(())
}
