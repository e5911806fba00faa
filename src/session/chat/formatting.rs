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

// Utility functions for normalizing response text before rendering

use regex::Regex;

// Replace every literal backslash-n escape sequence with a real newline.
// Backends that double-encode their text produce these.
pub fn unescape_newlines(text: &str) -> String {
	text.replace("\\n", "\n")
}

// Collapse any run of a newline, optional whitespace, and another newline
// into a single newline. Blank lines introduced by unescaping (or already
// present in the source text) disappear.
pub fn collapse_blank_lines(text: &str) -> String {
	if let Ok(re) = Regex::new(r"\n\s*\n") {
		re.replace_all(text, "\n").to_string()
	} else {
		text.to_string()
	}
}

/// Full normalization applied to every bot answer before markdown rendering
pub fn normalize_response_text(text: &str) -> String {
	collapse_blank_lines(&unescape_newlines(text))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unescape_literal_newlines() {
		assert_eq!(unescape_newlines("Hello\\nWorld"), "Hello\nWorld");
		assert_eq!(unescape_newlines("no escapes here"), "no escapes here");
	}

	#[test]
	fn test_unescaped_text_without_blanks_is_unchanged() {
		// "Hello\nWorld" has no blank line to collapse
		assert_eq!(normalize_response_text("Hello\\nWorld"), "Hello\nWorld");
	}

	#[test]
	fn test_collapse_blank_lines() {
		assert_eq!(collapse_blank_lines("Line1\n\n\nLine2"), "Line1\nLine2");
		assert_eq!(collapse_blank_lines("Line1\n  \nLine2"), "Line1\nLine2");
		assert_eq!(collapse_blank_lines("Line1\nLine2"), "Line1\nLine2");
	}

	#[test]
	fn test_normalize_collapses_escaped_blank_lines() {
		// Escaped blank lines collapse after unescaping
		assert_eq!(
			normalize_response_text("**Top Picks:**\\n\\nPhone A\\nPhone B"),
			"**Top Picks:**\nPhone A\nPhone B"
		);
	}

	#[test]
	fn test_normalize_preserves_inner_whitespace() {
		// Indentation after a single newline stays intact
		assert_eq!(
			normalize_response_text("List:\n  - item"),
			"List:\n  - item"
		);
	}
}
