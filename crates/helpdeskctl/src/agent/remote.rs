//! Remote chat-agent client.
//!
//! One POST per conversational turn, no retry or backoff. Failures never
//! propagate out of a turn: transport errors and `success: false` envelopes
//! are coerced to distinct fixed replies with no escalation signal.

use super::AgentReply;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Reply substituted when the agent service cannot be reached
pub const TRANSPORT_FAILURE_REPLY: &str =
    "I'm sorry, I couldn't reach the support service just now. Please try again in a moment.";

/// Reply substituted when the agent reports a failure
pub const AGENT_FAILURE_REPLY: &str =
    "I'm sorry, something went wrong while processing your request. Please try again.";

/// Request body for one turn
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub agent_id: String,
    pub user_id: String,
    pub session_id: String,
}

/// Response envelope from the chat agent
#[derive(Debug, Clone, Deserialize)]
pub struct ChatEnvelope {
    pub success: bool,
    #[serde(default)]
    pub response: Value,
}

/// HTTP client for the remote chat agent
#[derive(Debug, Clone)]
pub struct RemoteAgent {
    http: reqwest::Client,
    endpoint: String,
    agent_id: String,
    user_id: String,
    session_id: String,
}

impl RemoteAgent {
    pub fn new(endpoint: &str, agent_id: &str, user_id: &str, session_id: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            agent_id: agent_id.to_string(),
            user_id: user_id.to_string(),
            session_id: session_id.to_string(),
        }
    }

    /// One request-response turn. Failures are scoped to this turn and
    /// surface as a fixed reply, never an error.
    pub async fn reply(&self, message: &str) -> AgentReply {
        match self.call(message).await {
            Ok(envelope) => {
                if !envelope.success {
                    warn!("Chat agent reported failure for session {}", self.session_id);
                }
                envelope_reply(&envelope)
            }
            Err(e) => {
                warn!("Chat agent call failed: {:#}", e);
                AgentReply::plain(TRANSPORT_FAILURE_REPLY)
            }
        }
    }

    async fn call(&self, message: &str) -> Result<ChatEnvelope> {
        let request = ChatRequest {
            message: message.to_string(),
            agent_id: self.agent_id.clone(),
            user_id: self.user_id.clone(),
            session_id: self.session_id.clone(),
        };

        info!(
            "[>] agent call [{}] session {}",
            self.agent_id, self.session_id
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to chat agent")?;

        if !response.status().is_success() {
            anyhow::bail!("Chat agent returned error {}", response.status());
        }

        response
            .json()
            .await
            .context("Failed to parse chat agent response")
    }
}

/// Turn a received envelope into a reply.
///
/// A `success: false` envelope yields the fixed agent-failure message,
/// regardless of whatever payload came with it.
pub fn envelope_reply(envelope: &ChatEnvelope) -> AgentReply {
    if envelope.success {
        extract_reply(&envelope.response)
    } else {
        AgentReply::plain(AGENT_FAILURE_REPLY)
    }
}

/// Extract reply text and the escalation flag from the response payload.
///
/// The payload may be a plain string, an object carrying a `response` or
/// `answer` field (plus an optional `requires_escalation` bool), or any
/// other shape, which is serialized back to JSON as a last resort.
pub fn extract_reply(payload: &Value) -> AgentReply {
    match payload {
        Value::String(s) => AgentReply::plain(s.clone()),
        Value::Object(map) => {
            let text = map
                .get("response")
                .and_then(Value::as_str)
                .or_else(|| map.get("answer").and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| payload.to_string());
            let requires_escalation = map
                .get("requires_escalation")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            AgentReply {
                text,
                requires_escalation,
            }
        }
        other => AgentReply::plain(other.to_string()),
    }
}
