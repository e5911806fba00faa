// Markdown rendering module

use anyhow::Result;
use std::str::FromStr;
use termimad::MadSkin;

/// Color themes for rendered bot replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkdownTheme {
	#[default]
	Default,
	Dark,
	Light,
}

impl FromStr for MarkdownTheme {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"default" => Ok(MarkdownTheme::Default),
			"dark" => Ok(MarkdownTheme::Dark),
			"light" => Ok(MarkdownTheme::Light),
			other => Err(anyhow::anyhow!(
				"Unknown markdown theme: {} (valid: default, dark, light)",
				other
			)),
		}
	}
}

pub struct MarkdownRenderer {
	skin: MadSkin,
}

impl MarkdownRenderer {
	pub fn new() -> Self {
		Self::with_theme(MarkdownTheme::Default)
	}

	pub fn with_theme(theme: MarkdownTheme) -> Self {
		use termimad::crossterm::style::Attribute;
		use termimad::crossterm::style::Color;

		let mut skin = match theme {
			MarkdownTheme::Default => MadSkin::default(),
			MarkdownTheme::Dark => MadSkin::default_dark(),
			MarkdownTheme::Light => MadSkin::default_light(),
		};

		// Headers with different colors (set separately, not chained)
		skin.headers[0].set_fg(Color::Yellow);
		skin.headers[0].add_attr(Attribute::Bold);
		skin.headers[1].set_fg(Color::Blue);
		skin.headers[1].add_attr(Attribute::Bold);
		skin.headers[2].set_fg(Color::Cyan);
		skin.headers[2].add_attr(Attribute::Bold);

		// Style for inline code - spec names and model numbers show up in backticks
		skin.inline_code.set_bg(Color::Rgb { r: 60, g: 60, b: 60 });
		skin.inline_code.set_fg(Color::Yellow);

		// Style for emphasis
		skin.italic.set_fg(Color::Cyan);
		skin.bold.set_fg(Color::White);
		skin.bold.add_attr(Attribute::Bold);

		// Style for quotes and lists
		skin.quote_mark.set_fg(Color::Blue);
		skin.bullet.set_fg(Color::Green);

		Self { skin }
	}

	pub fn render_and_print(&self, markdown: &str) -> Result<()> {
		self.skin.print_text(markdown);
		Ok(())
	}
}

impl Default for MarkdownRenderer {
	fn default() -> Self {
		Self::new()
	}
}

// Helper function to check if content looks like markdown
pub fn is_markdown_content(content: &str) -> bool {
	// Simple heuristics to detect markdown content
	content.contains("```")
		|| content.contains("# ")
		|| content.contains("## ")
		|| content.contains("### ")
		|| content.contains("**")
		|| content.contains("*")
		|| content.contains("[")
		|| content.contains("|")
		|| content.contains("> ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_markdown_detection() {
		assert!(is_markdown_content("# Best Options"));
		assert!(is_markdown_content("**Top Recommendations:**"));
		assert!(is_markdown_content("| Price | Camera |"));
		assert!(!is_markdown_content("plain text"));
	}

	#[test]
	fn test_theme_parsing() {
		assert_eq!(
			"dark".parse::<MarkdownTheme>().unwrap(),
			MarkdownTheme::Dark
		);
		assert_eq!(
			"DEFAULT".parse::<MarkdownTheme>().unwrap(),
			MarkdownTheme::Default
		);
		assert!("ocean".parse::<MarkdownTheme>().is_err());
	}

	#[test]
	fn test_renderer_creation() {
		let renderer = MarkdownRenderer::new();
		// Just test that it doesn't panic
		assert!(!renderer.skin.headers.is_empty());
	}
}
