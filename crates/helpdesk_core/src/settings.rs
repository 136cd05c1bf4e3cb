//! Settings for the helpdesk assistant.
//!
//! Loads from the user config directory (`helpdesk/config.toml`) or falls
//! back to defaults. Every field has a serde default so partial files parse.

use crate::error::HelpdeskError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config file name under the user config directory
pub const CONFIG_FILE: &str = "helpdesk/config.toml";

/// Agent communication tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgentTone {
    Formal,
    #[default]
    Professional,
    Casual,
    Technical,
}

impl std::fmt::Display for AgentTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formal => write!(f, "formal"),
            Self::Professional => write!(f, "professional"),
            Self::Casual => write!(f, "casual"),
            Self::Technical => write!(f, "technical"),
        }
    }
}

impl std::str::FromStr for AgentTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "formal" => Ok(Self::Formal),
            "professional" => Ok(Self::Professional),
            "casual" => Ok(Self::Casual),
            "technical" => Ok(Self::Technical),
            other => Err(format!(
                "unknown tone '{other}' (expected formal, professional, casual, or technical)"
            )),
        }
    }
}

/// Escalation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationSettings {
    /// Recipient for escalation emails
    #[serde(default = "default_escalation_email")]
    pub email: String,

    /// Escalate when an urgency keyword is detected
    #[serde(default = "default_true")]
    pub on_urgent: bool,

    /// Escalate when no relevant KB articles are found
    #[serde(default = "default_true")]
    pub on_kb_miss: bool,

    /// Escalate when agent confidence falls below threshold
    #[serde(default = "default_true")]
    pub on_low_confidence: bool,
}

fn default_escalation_email() -> String {
    "it-escalations@company.com".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EscalationSettings {
    fn default() -> Self {
        Self {
            email: default_escalation_email(),
            on_urgent: true,
            on_kb_miss: true,
            on_low_confidence: true,
        }
    }
}

/// Chat agent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Communication tone
    #[serde(default)]
    pub tone: AgentTone,

    /// Remote chat-agent endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Agent identifier sent with every request
    #[serde(default = "default_agent_id")]
    pub agent_id: String,

    /// User identifier sent with every request
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Use the local canned-reply simulation instead of the remote agent
    #[serde(default)]
    pub simulate: bool,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8088/api/chat".to_string()
}

fn default_agent_id() -> String {
    "it-support-agent".to_string()
}

fn default_user_id() -> String {
    "employee".to_string()
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            tone: AgentTone::default(),
            endpoint: default_endpoint(),
            agent_id: default_agent_id(),
            user_id: default_user_id(),
            simulate: false,
        }
    }
}

/// Notification preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Email for ticket escalations and updates
    #[serde(default = "default_true")]
    pub email: bool,

    /// Send ticket updates to the Slack channel
    #[serde(default)]
    pub slack: bool,

    /// Channel used when Slack notifications are on
    #[serde(default = "default_slack_channel")]
    pub slack_channel: String,
}

fn default_slack_channel() -> String {
    "#it-support".to_string()
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            slack: false,
            slack_channel: default_slack_channel(),
        }
    }
}

/// Full settings tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub escalation: EscalationSettings,
    #[serde(default)]
    pub agent: AgentSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Settings {
    /// Default config file location
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    /// Load settings, falling back to defaults if no config exists.
    pub fn load() -> Self {
        Self::load_from_path(&Self::config_path()).unwrap_or_else(|e| {
            warn!("Config not found, using defaults: {}", e);
            Settings::default()
        })
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, HelpdeskError> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), HelpdeskError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), HelpdeskError> {
        self.save_to_path(&Self::config_path())
    }

    /// Apply a `section.key=value` assignment.
    pub fn set(&mut self, assignment: &str) -> Result<(), HelpdeskError> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| HelpdeskError::Config(format!("expected key=value, got '{assignment}'")))?;
        let key = key.trim();
        let value = value.trim();

        let parse_bool = |v: &str| {
            v.parse::<bool>()
                .map_err(|_| HelpdeskError::Config(format!("expected true or false, got '{v}'")))
        };

        match key {
            "escalation.email" => self.escalation.email = value.to_string(),
            "escalation.on_urgent" => self.escalation.on_urgent = parse_bool(value)?,
            "escalation.on_kb_miss" => self.escalation.on_kb_miss = parse_bool(value)?,
            "escalation.on_low_confidence" => self.escalation.on_low_confidence = parse_bool(value)?,
            "agent.tone" => self.agent.tone = value.parse().map_err(HelpdeskError::Config)?,
            "agent.endpoint" => self.agent.endpoint = value.to_string(),
            "agent.agent_id" => self.agent.agent_id = value.to_string(),
            "agent.user_id" => self.agent.user_id = value.to_string(),
            "agent.simulate" => self.agent.simulate = parse_bool(value)?,
            "notifications.email" => self.notifications.email = parse_bool(value)?,
            "notifications.slack" => self.notifications.slack = parse_bool(value)?,
            "notifications.slack_channel" => self.notifications.slack_channel = value.to_string(),
            other => {
                return Err(HelpdeskError::Config(format!("unknown setting '{other}'")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.escalation.email, "it-escalations@company.com");
        assert_eq!(settings.agent.tone, AgentTone::Professional);
        assert!(!settings.agent.simulate);
        assert!(settings.notifications.email);
        assert!(!settings.notifications.slack);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
[escalation]
email = "oncall@example.com"

[agent]
tone = "technical"
simulate = true
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.escalation.email, "oncall@example.com");
        assert_eq!(settings.agent.tone, AgentTone::Technical);
        assert!(settings.agent.simulate);
        // Defaults fill everything the file left out.
        assert!(settings.escalation.on_urgent);
        assert_eq!(settings.notifications.slack_channel, "#it-support");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_set_string_and_bool() {
        let mut settings = Settings::default();
        settings.set("escalation.email=ops@example.com").unwrap();
        assert_eq!(settings.escalation.email, "ops@example.com");
        settings.set("notifications.slack=true").unwrap();
        assert!(settings.notifications.slack);
        settings.set("agent.tone=casual").unwrap();
        assert_eq!(settings.agent.tone, AgentTone::Casual);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut settings = Settings::default();
        assert!(settings.set("no-equals-sign").is_err());
        assert!(settings.set("unknown.key=1").is_err());
        assert!(settings.set("agent.simulate=maybe").is_err());
        assert!(settings.set("agent.tone=sarcastic").is_err());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.set("escalation.email=ops@example.com").unwrap();
        settings.set("agent.simulate=true").unwrap();
        settings.save_to_path(&path).unwrap();

        let reloaded = Settings::load_from_path(&path).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load_from_path(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_tone_round_trip() {
        for tone in [
            AgentTone::Formal,
            AgentTone::Professional,
            AgentTone::Casual,
            AgentTone::Technical,
        ] {
            let parsed: AgentTone = tone.to_string().parse().unwrap();
            assert_eq!(parsed, tone);
        }
    }
}
