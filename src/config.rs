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

// Configuration handling for phonemind

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum LogLevel {
	#[serde(rename = "none")]
	None,
	#[serde(rename = "info")]
	Info,
	#[serde(rename = "debug")]
	Debug,
}

impl Default for LogLevel {
	fn default() -> Self {
		LogLevel::None
	}
}

impl LogLevel {
	pub fn is_info_enabled(&self) -> bool {
		matches!(self, LogLevel::Info | LogLevel::Debug)
	}

	pub fn is_debug_enabled(&self) -> bool {
		matches!(self, LogLevel::Debug)
	}
}

impl FromStr for LogLevel {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"none" => Ok(LogLevel::None),
			"info" => Ok(LogLevel::Info),
			"debug" => Ok(LogLevel::Debug),
			other => Err(anyhow::anyhow!(
				"Unknown log level: {} (valid: none, info, debug)",
				other
			)),
		}
	}
}

fn default_backend_url() -> String {
	"http://localhost:8000".to_string()
}

fn default_markdown_enable() -> bool {
	true
}

fn default_markdown_theme() -> String {
	"default".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
	/// Base URL of the phone answering backend
	#[serde(default = "default_backend_url")]
	pub backend_url: String,

	/// Log level for terminal output (none, info, debug)
	#[serde(default)]
	pub log_level: LogLevel,

	/// Render bot replies as markdown
	#[serde(default = "default_markdown_enable")]
	pub markdown_enable: bool,

	/// Markdown color theme (default, dark, light)
	#[serde(default = "default_markdown_theme")]
	pub markdown_theme: String,

	/// Path the config was loaded from, for future saves
	#[serde(skip)]
	pub config_path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			backend_url: default_backend_url(),
			log_level: LogLevel::default(),
			markdown_enable: default_markdown_enable(),
			markdown_theme: default_markdown_theme(),
			config_path: None,
		}
	}
}

impl Config {
	/// Load configuration from the system-wide config file
	pub fn load() -> Result<Self> {
		let config_path = crate::directories::get_config_file_path()?;

		let mut config = if config_path.exists() {
			let config_str = fs::read_to_string(&config_path).context(format!(
				"Failed to read config from {}",
				config_path.display()
			))?;
			let mut config: Config =
				toml::from_str(&config_str).context("Failed to parse TOML configuration")?;
			config.config_path = Some(config_path);
			config
		} else {
			let mut config = Config::default();
			config.config_path = Some(config_path);
			config
		};

		// Environment variables take precedence over config file values
		if let Ok(url) = std::env::var("PHONEMIND_BACKEND_URL") {
			config.backend_url = url;
		}

		Ok(config)
	}

	/// Save the configuration to its file path
	pub fn save(&self) -> Result<()> {
		let config_path = match &self.config_path {
			Some(path) => path.clone(),
			None => crate::directories::get_config_file_path()?,
		};

		let toml_str =
			toml::to_string_pretty(self).context("Failed to serialize configuration")?;
		fs::write(&config_path, toml_str).context(format!(
			"Failed to write config to {}",
			config_path.display()
		))?;

		Ok(())
	}

	/// Write a default configuration file and return its path
	pub fn create_default_config() -> Result<PathBuf> {
		let config_path = crate::directories::get_config_file_path()?;

		let mut config = Config::default();
		config.config_path = Some(config_path.clone());
		config.save()?;

		Ok(config_path)
	}

	pub fn get_log_level(&self) -> LogLevel {
		self.log_level.clone()
	}

	/// Full URL of the chat endpoint
	pub fn chat_url(&self) -> String {
		format!("{}/chat", self.backend_url.trim_end_matches('/'))
	}

	/// Full URL of the health endpoint
	pub fn health_url(&self) -> String {
		format!("{}/health", self.backend_url.trim_end_matches('/'))
	}
}

// Logging macros for different log levels
// These macros automatically check the current log level and only print if appropriate

thread_local! {
	static CURRENT_CONFIG: RefCell<Option<Config>> = const { RefCell::new(None) };
}

/// Set the current config for the thread (to be used by logging macros)
pub fn set_thread_config(config: &Config) {
	CURRENT_CONFIG.with(|c| {
		*c.borrow_mut() = Some(config.clone());
	});
}

/// Get the current config for the thread
pub fn with_thread_config<F, R>(f: F) -> Option<R>
where
	F: FnOnce(&Config) -> R,
{
	CURRENT_CONFIG.with(|c| (*c.borrow()).as_ref().map(f))
}

/// Info logging macro with automatic cyan coloring
/// Shows info messages when log level is Info OR Debug
#[macro_export]
macro_rules! log_info {
	($fmt:expr) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_info_enabled()) {
		if should_log {
		use colored::Colorize;
		println!("{}", $fmt.cyan());
		}
		}
	};
	($fmt:expr, $($arg:expr),*) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_info_enabled()) {
		if should_log {
		use colored::Colorize;
	println!("{}", format!($fmt, $($arg),*).cyan());
	}
	}
	};
}

/// Debug logging macro with automatic bright blue coloring
#[macro_export]
macro_rules! log_debug {
	($fmt:expr) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_debug_enabled()) {
		if should_log {
		use colored::Colorize;
		println!("{}", $fmt.bright_blue());
		}
		}
	};
	($fmt:expr, $($arg:expr),*) => {
		if let Some(should_log) = $crate::config::with_thread_config(|config| config.get_log_level().is_debug_enabled()) {
		if should_log {
		use colored::Colorize;
	println!("{}", format!($fmt, $($arg),*).bright_blue());
	}
	}
	};
}

/// Error logging macro with automatic bright red coloring
/// Always visible regardless of log level (errors should always be shown)
#[macro_export]
macro_rules! log_error {
	($fmt:expr) => {{
		use colored::Colorize;
		eprintln!("{}", $fmt.bright_red());
		}};
	($fmt:expr, $($arg:expr),*) => {{
		use colored::Colorize;
		eprintln!("{}", format!($fmt, $($arg),*).bright_red());
		}};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_applied_for_missing_keys() {
		let config: Config = toml::from_str("").unwrap();
		assert_eq!(config.backend_url, "http://localhost:8000");
		assert_eq!(config.log_level, LogLevel::None);
		assert!(config.markdown_enable);
		assert_eq!(config.markdown_theme, "default");
	}

	#[test]
	fn test_config_toml_round_trip() {
		let config = Config {
			backend_url: "http://10.0.0.5:9000".to_string(),
			log_level: LogLevel::Debug,
			markdown_enable: false,
			markdown_theme: "dark".to_string(),
			config_path: None,
		};

		let toml_str = toml::to_string_pretty(&config).unwrap();
		let parsed: Config = toml::from_str(&toml_str).unwrap();

		assert_eq!(parsed.backend_url, config.backend_url);
		assert_eq!(parsed.log_level, LogLevel::Debug);
		assert!(!parsed.markdown_enable);
		assert_eq!(parsed.markdown_theme, "dark");
	}

	#[test]
	fn test_log_level_parsing() {
		assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
		assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
		assert!("verbose".parse::<LogLevel>().is_err());
	}

	#[test]
	fn test_endpoint_urls_strip_trailing_slash() {
		let config = Config {
			backend_url: "http://localhost:8000/".to_string(),
			..Default::default()
		};
		assert_eq!(config.chat_url(), "http://localhost:8000/chat");
		assert_eq!(config.health_url(), "http://localhost:8000/health");
	}
}
