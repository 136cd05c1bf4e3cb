//! Conversation session controller.
//!
//! Owns all per-session state: the message log, the single live ticket,
//! the pending escalation preview, and the busy flag. One send may be in
//! flight at a time; every failure is scoped to its own turn.

use crate::agent::{AgentReply, ReplySource};
use helpdesk_core::escalation::{email_preview, should_escalate};
use helpdesk_core::{ArticleCatalog, MessageLog, Role, Settings, Ticket};
use tracing::info;
use uuid::Uuid;

/// Escalation preview awaiting user confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct EscalationPrompt {
    pub ticket_id: String,
    pub email_preview: String,
}

/// What a send produced, beyond the appended messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Reply appended, nothing else to do
    Replied,
    /// Reply appended and an escalation preview awaits confirmation
    EscalationPending,
    /// Input was empty or a send was already in flight
    Rejected,
}

/// One support conversation
pub struct ChatSession {
    log: MessageLog,
    catalog: ArticleCatalog,
    settings: Settings,
    source: ReplySource,
    session_id: String,
    ticket: Option<Ticket>,
    pending: Option<EscalationPrompt>,
    busy: bool,
}

impl ChatSession {
    /// Start a session with the source selected by settings.
    pub fn new(settings: Settings) -> Self {
        let session_id = Uuid::new_v4().to_string();
        let source = ReplySource::from_settings(&settings, &session_id);
        Self::with_source(settings, source, session_id)
    }

    /// Start a session with an explicit reply source.
    pub fn with_source(settings: Settings, source: ReplySource, session_id: String) -> Self {
        Self {
            log: MessageLog::with_greeting(),
            catalog: ArticleCatalog::builtin(),
            settings,
            source,
            session_id,
            ticket: None,
            pending: None,
            busy: false,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    pub fn pending_escalation(&self) -> Option<&EscalationPrompt> {
        self.pending.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Run one conversational turn.
    ///
    /// Appends the user message, obtains the agent reply (failures become
    /// fixed in-conversation messages), attaches knowledge base
    /// suggestions, and evaluates escalation. The first escalation of the
    /// session creates the ticket and the email preview; there is never a
    /// second ticket.
    pub async fn send(&mut self, input: &str) -> SendOutcome {
        let input = input.trim();
        if input.is_empty() || self.busy {
            return SendOutcome::Rejected;
        }
        self.busy = true;

        self.log.append(Role::User, input, Vec::new());

        let AgentReply {
            text,
            requires_escalation,
        } = self.source.reply(input).await;

        let articles = self.catalog.lookup(input);
        self.log.append(Role::Agent, text.clone(), articles);

        let outcome = if should_escalate(input, &text, requires_escalation) && self.ticket.is_none()
        {
            let email = self.settings.escalation.email.clone();
            let ticket = Ticket::escalated(email.clone());
            info!("Escalation ticket {} created", ticket.id);
            self.pending = Some(EscalationPrompt {
                ticket_id: ticket.id.clone(),
                email_preview: email_preview(&email, &ticket.id, input),
            });
            self.ticket = Some(ticket);
            SendOutcome::EscalationPending
        } else {
            SendOutcome::Replied
        };

        self.busy = false;
        outcome
    }

    /// Confirm the pending escalation.
    ///
    /// Appends exactly one confirmation message referencing the existing
    /// ticket and returns its message id. No-op when nothing is pending.
    pub fn confirm_escalation(&mut self) -> Option<u64> {
        self.pending.take()?;
        let ticket = self.ticket.as_ref()?;
        info!("Escalation ticket {} confirmed", ticket.id);
        let message = ticket.confirmation_message();
        Some(self.log.append(Role::Agent, message, Vec::new()))
    }

    /// Dismiss the preview without a confirmation message. The ticket is
    /// not removed; dismissal only suppresses the confirmation.
    pub fn dismiss_escalation(&mut self) {
        self.pending = None;
    }
}
