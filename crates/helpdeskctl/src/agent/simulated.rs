//! Local canned-reply simulation.
//!
//! Fallback reply source for running without the remote agent: waits a
//! fixed artificial delay, then selects one of five templates by keyword
//! match on the user text. First match wins.

use super::AgentReply;
use helpdesk_core::escalation::user_requests_escalation;
use std::time::Duration;
use tokio::time::sleep;

/// Artificial latency before each simulated reply
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

const EMAIL_REPLY: &str = "I found several helpful articles about email configuration and troubleshooting. Based on our knowledge base, the most common email sync issues on mobile devices are related to authentication settings. Have you tried checking your security settings and enabling \"Less secure app access\"? The articles on the right provide detailed steps.";

const PASSWORD_REPLY: &str = "Password reset is straightforward. You can reset your password through the company portal or use the password reset link sent to your registered email. Our knowledge base has detailed step-by-step instructions in the \"Password Reset Procedures\" article. Is there a specific error message you are encountering?";

const VPN_REPLY: &str = "For VPN connection issues, first ensure you have the latest VPN client installed. Check your connection credentials and network stability. The VPN Connection Guide in our knowledge base provides detailed setup instructions for all operating systems.";

const ESCALATION_REPLY: &str = "I understand this is urgent. Based on the nature of your issue, this may require specialized attention from our senior IT team. I will escalate this to our support team immediately. You will receive an email confirmation shortly.";

const DEFAULT_REPLY: &str = "Thank you for your query. I have searched our knowledge base and found relevant documentation that should help resolve your issue. Please review the articles shown on the right. If you need further assistance, I can escalate this to our specialized support team.";

/// Canned-reply source with a configurable delay
#[derive(Debug, Clone)]
pub struct SimulatedAgent {
    delay: Duration,
}

impl SimulatedAgent {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Override the delay; tests use zero.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Produce a reply after the artificial delay.
    pub async fn reply(&self, message: &str) -> AgentReply {
        sleep(self.delay).await;
        AgentReply::plain(Self::canned_reply(message))
    }

    /// Template selection by keyword, first match wins.
    pub fn canned_reply(message: &str) -> &'static str {
        let lower = message.to_lowercase();
        if lower.contains("email") {
            EMAIL_REPLY
        } else if lower.contains("password") {
            PASSWORD_REPLY
        } else if lower.contains("vpn") {
            VPN_REPLY
        } else if user_requests_escalation(message) {
            ESCALATION_REPLY
        } else {
            DEFAULT_REPLY
        }
    }
}

impl Default for SimulatedAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_selection() {
        assert_eq!(
            SimulatedAgent::canned_reply("my email is broken"),
            EMAIL_REPLY
        );
        assert_eq!(
            SimulatedAgent::canned_reply("How do I reset my password"),
            PASSWORD_REPLY
        );
        assert_eq!(SimulatedAgent::canned_reply("VPN will not connect"), VPN_REPLY);
        assert_eq!(
            SimulatedAgent::canned_reply("this is URGENT"),
            ESCALATION_REPLY
        );
        assert_eq!(
            SimulatedAgent::canned_reply("my monitor flickers"),
            DEFAULT_REPLY
        );
    }

    #[test]
    fn test_topic_keyword_wins_over_urgency() {
        // Topic templates take priority over the escalation reply.
        assert_eq!(
            SimulatedAgent::canned_reply("urgent: email sync broken"),
            EMAIL_REPLY
        );
    }

    #[tokio::test]
    async fn test_reply_carries_no_escalation_flag() {
        let agent = SimulatedAgent::with_delay(Duration::ZERO);
        let reply = agent.reply("critical failure").await;
        assert_eq!(reply.text, ESCALATION_REPLY);
        // The flag is an upstream-agent signal; simulation never sets it.
        assert!(!reply.requires_escalation);
    }
}
