//! Shared types and pure logic for the helpdesk assistant.
//!
//! Everything in this crate is deterministic and free of I/O except
//! `settings`, which reads and writes the TOML config file.

pub mod error;
pub mod escalation;
pub mod history;
pub mod knowledge;
pub mod message;
pub mod review;
pub mod settings;
pub mod ticket;

pub use error::HelpdeskError;
pub use knowledge::{ArticleCatalog, ArticleSuggestion, MAX_SUGGESTIONS};
pub use message::{Message, MessageLog, Role};
pub use settings::Settings;
pub use ticket::{Ticket, TicketStatus};
