//! Conversation message log.
//!
//! Append-only record of one support conversation. Messages are immutable
//! once appended; ordering is strictly append-order with no compaction.
//! The log lives for one session only and is never persisted.

use crate::knowledge::{ArticleSuggestion, MAX_SUGGESTIONS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed greeting that opens every conversation
pub const AGENT_GREETING: &str = "Hello! I am the IT Support Agent. I can help you with technical issues, software installation, network problems, and policy questions. Please describe your IT issue.";

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Agent,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Agent => write!(f, "agent"),
        }
    }
}

/// A single conversation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique id, monotonic by creation order within the log
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Suggested knowledge base articles (at most [`MAX_SUGGESTIONS`])
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub articles: Vec<ArticleSuggestion>,
}

/// Append-only message log for one session.
///
/// Single logical writer; no deletion, no reordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Log seeded with the standard agent greeting
    pub fn with_greeting() -> Self {
        let mut log = Self::new();
        log.append(Role::Agent, AGENT_GREETING, Vec::new());
        log
    }

    /// Append a message, assigning the next id. Returns the assigned id.
    ///
    /// The article list is truncated to the suggestion cap.
    pub fn append(
        &mut self,
        role: Role,
        content: impl Into<String>,
        mut articles: Vec<ArticleSuggestion>,
    ) -> u64 {
        articles.truncate(MAX_SUGGESTIONS);
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            role,
            content: content.into(),
            timestamp: Utc::now(),
            articles,
        });
        id
    }

    /// Most recent message, if any
    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in append order
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }

    #[test]
    fn test_greeting_seed() {
        let log = MessageLog::with_greeting();
        assert_eq!(log.len(), 1);
        let first = log.latest().unwrap();
        assert_eq!(first.role, Role::Agent);
        assert_eq!(first.content, AGENT_GREETING);
        assert!(first.articles.is_empty());
    }

    #[test]
    fn test_append_assigns_monotonic_ids() {
        let mut log = MessageLog::new();
        let a = log.append(Role::User, "first", Vec::new());
        let b = log.append(Role::Agent, "second", Vec::new());
        let c = log.append(Role::User, "third", Vec::new());
        assert!(a < b && b < c);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_order_is_first_in_first_out() {
        let mut log = MessageLog::new();
        for i in 0..5 {
            log.append(Role::User, format!("msg {i}"), Vec::new());
        }
        let contents: Vec<&str> = log.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["msg 0", "msg 1", "msg 2", "msg 3", "msg 4"]);
        assert_eq!(log.latest().unwrap().content, "msg 4");
    }

    #[test]
    fn test_append_truncates_articles() {
        let mut log = MessageLog::new();
        let articles = (0..5)
            .map(|i| ArticleSuggestion::new(format!("A{i}"), "...", 0.9))
            .collect();
        log.append(Role::Agent, "reply", articles);
        assert_eq!(log.latest().unwrap().articles.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Agent.to_string(), "agent");
    }
}
