// Animation module for the thinking indicator

use anyhow::Result;
use colored::*;
use crossterm::{cursor, execute};
use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Spinner frames and the label printed next to them
const THINKING_FRAMES: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
const THINKING_LABEL: &str = "Thinking...";
const FRAME_DELAY: Duration = Duration::from_millis(100);

// Show the thinking indicator until `resolved` flips true, then erase it so
// the reply starts where the indicator was. The flag mirrors the
// controller's pending state: the runner sets it once the request resolves.
pub async fn show_thinking_animation(resolved: Arc<AtomicBool>) -> Result<()> {
	let mut out = stdout();
	let mut frames = THINKING_FRAMES.iter().cycle();

	execute!(out, cursor::SavePosition)?;

	while !resolved.load(Ordering::SeqCst) {
		if let Some(frame) = frames.next() {
			execute!(out, cursor::RestorePosition)?;
			print!(" {} {}", frame.to_string().cyan(), THINKING_LABEL.bright_blue());
			out.flush()?;
		}

		tokio::time::sleep(FRAME_DELAY).await;
	}

	// Erase exactly the indicator's footprint: leading space, frame,
	// separator, label
	let footprint = THINKING_LABEL.chars().count() + 3;
	execute!(out, cursor::RestorePosition)?;
	print!("{}", " ".repeat(footprint));
	execute!(out, cursor::RestorePosition)?;
	out.flush()?;

	Ok(())
}
