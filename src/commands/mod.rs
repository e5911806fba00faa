pub mod ask;
pub mod chat;
pub mod config;
pub mod health;

// Re-export all the command structs
pub use ask::AskArgs;
pub use chat::ChatArgs;
pub use config::ConfigArgs;
pub use health::HealthArgs;
