//! Escalation policy.
//!
//! A pure predicate over one conversational turn. Matching is intentionally
//! coarse substring matching; false positives and negatives are accepted
//! product behavior, not defects.

/// Keywords in the user text that trigger escalation
const USER_TRIGGERS: [&str; 2] = ["urgent", "critical"];

/// Keyword in the agent reply that triggers escalation
const AGENT_TRIGGER: &str = "escalate";

/// Whether the user text itself requests escalation
pub fn user_requests_escalation(user_text: &str) -> bool {
    let lower = user_text.to_lowercase();
    USER_TRIGGERS.iter().any(|kw| lower.contains(kw))
}

/// Escalation decision for one turn.
///
/// Escalate if the upstream agent flagged it, the user text contains an
/// urgency keyword, or the agent reply mentions escalation.
pub fn should_escalate(user_text: &str, agent_reply: &str, upstream_flag: bool) -> bool {
    upstream_flag
        || user_requests_escalation(user_text)
        || agent_reply.to_lowercase().contains(AGENT_TRIGGER)
}

/// Escalation email preview shown before the user confirms.
pub fn email_preview(recipient: &str, ticket_id: &str, issue: &str) -> String {
    format!(
        "To: {recipient}\n\
         Subject: Escalated IT Support Ticket - {ticket_id}\n\
         \n\
         Ticket ID: {ticket_id}\n\
         Issue: {issue}\n\
         \n\
         Employee has reported an urgent issue requiring specialized support. \
         Please review the conversation history and provide resolution."
    )
}
