mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{AskArgs, ChatArgs, ConfigArgs, HealthArgs};
use phonemind::config::Config;

#[derive(Parser)]
#[command(name = "phonemind")]
#[command(version = "0.1.0")]
#[command(about = "Phonemind is a chat assistant for picking your next phone")]
struct PhonemindArgs {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Start an interactive chat session with the phone assistant
	Chat(ChatArgs),

	/// Ask a single question and print the answer
	Ask(AskArgs),

	/// Check that the answering backend is reachable
	Health(HealthArgs),

	/// Generate or update the configuration file
	Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = PhonemindArgs::parse();

	// Load configuration
	let config = Config::load()?;

	// Make the config available to the logging macros
	phonemind::config::set_thread_config(&config);

	// Execute the appropriate command
	match &args.command {
		Commands::Chat(chat_args) => commands::chat::execute(chat_args, &config).await?,
		Commands::Ask(ask_args) => commands::ask::execute(ask_args, &config).await?,
		Commands::Health(health_args) => commands::health::execute(health_args, &config).await?,
		Commands::Config(config_args) => commands::config::execute(config_args, config)?,
	}

	Ok(())
}
