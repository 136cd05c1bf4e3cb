//! Error types for the helpdesk assistant.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown ticket: {0}")]
    UnknownTicket(String),

    #[error("Unknown suggestion: {0}")]
    UnknownSuggestion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}
