// Chat module for the interactive phone recommendation session

pub mod animation;
pub mod controller;
pub mod formatting;
pub mod input;
pub mod markdown;
pub mod runner;

pub use controller::{ChatController, TurnOutcome};
pub use runner::run_interactive_session;

/// Slash commands available inside an interactive session
pub const COMMANDS: [&str; 4] = ["/help", "/clear", "/raw", "/exit"];
