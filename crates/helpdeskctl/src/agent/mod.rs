//! Agent reply sources.
//!
//! Two interchangeable strategies produce the same reply shape, so the
//! conversation flow stays agnostic to which one is active. The choice is
//! made once, from settings, when the session starts.

pub mod remote;
pub mod simulated;

pub use remote::RemoteAgent;
pub use simulated::SimulatedAgent;

use helpdesk_core::Settings;

/// Reply produced by either source
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    pub text: String,
    /// Escalation signal from the upstream agent, when it provides one
    pub requires_escalation: bool,
}

impl AgentReply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            requires_escalation: false,
        }
    }
}

/// Reply source selected by configuration
#[derive(Debug, Clone)]
pub enum ReplySource {
    Remote(RemoteAgent),
    Simulated(SimulatedAgent),
}

impl ReplySource {
    /// Build the configured source for one session.
    pub fn from_settings(settings: &Settings, session_id: &str) -> Self {
        if settings.agent.simulate {
            Self::Simulated(SimulatedAgent::new())
        } else {
            Self::Remote(RemoteAgent::new(
                &settings.agent.endpoint,
                &settings.agent.agent_id,
                &settings.agent.user_id,
                session_id,
            ))
        }
    }

    /// Produce a reply for one user message.
    ///
    /// Never fails: remote failures are coerced to fixed replies scoped to
    /// this turn.
    pub async fn reply(&self, message: &str) -> AgentReply {
        match self {
            Self::Remote(agent) => agent.reply(message).await,
            Self::Simulated(agent) => agent.reply(message).await,
        }
    }
}
