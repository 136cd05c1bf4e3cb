//! Escalation tickets.
//!
//! A live ticket represents one escalation event in the current session.
//! It is created already `escalated` and never transitions back; user
//! confirmation gates the confirmation message, not the status.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Open, awaiting a first response
    #[default]
    Pending,
    /// Closed with a resolution
    Resolved,
    /// Handed to a human specialist team
    Escalated,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Resolved => write!(f, "resolved"),
            Self::Escalated => write!(f, "escalated"),
        }
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            "escalated" => Ok(Self::Escalated),
            other => Err(format!(
                "unknown status '{other}' (expected pending, resolved, or escalated)"
            )),
        }
    }
}

/// A tracked record for one escalation event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Time-derived id, unique per escalation event
    pub id: String,
    pub status: TicketStatus,
    /// Recipient of the escalation email, when configured
    pub escalation_email: Option<String>,
}

impl Ticket {
    /// Create a ticket for an escalation event. Live tickets are only ever
    /// constructed in the escalated state.
    pub fn escalated(email: impl Into<String>) -> Self {
        Self {
            id: format!("TKT-{}", Utc::now().timestamp_millis()),
            status: TicketStatus::Escalated,
            escalation_email: Some(email.into()),
        }
    }

    /// Confirmation message appended to the conversation after the user
    /// approves the escalation preview.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Your issue has been escalated to our support team (Ticket ID: {}). \
             You will receive updates via email. Expected response time is 2-4 hours \
             for urgent issues.",
            self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_escalated_constructor() {
        let ticket = Ticket::escalated("it@company.com");
        assert!(ticket.id.starts_with("TKT-"));
        assert_eq!(ticket.status, TicketStatus::Escalated);
        assert_eq!(ticket.escalation_email.as_deref(), Some("it@company.com"));
    }

    #[test]
    fn test_confirmation_message_references_id() {
        let ticket = Ticket::escalated("it@company.com");
        let msg = ticket.confirmation_message();
        assert!(msg.contains(&ticket.id));
        assert!(msg.contains("2-4 hours"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TicketStatus::Pending.to_string(), "pending");
        assert_eq!(TicketStatus::Resolved.to_string(), "resolved");
        assert_eq!(TicketStatus::Escalated.to_string(), "escalated");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            TicketStatus::from_str("Escalated").unwrap(),
            TicketStatus::Escalated
        );
        assert_eq!(
            TicketStatus::from_str("pending").unwrap(),
            TicketStatus::Pending
        );
        assert!(TicketStatus::from_str("open").is_err());
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&TicketStatus::Escalated).unwrap();
        assert_eq!(json, "\"escalated\"");
    }
}
