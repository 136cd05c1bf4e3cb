//! Knowledge base improvement suggestions and dashboard analytics.
//!
//! Suggestions are proposed KB articles distilled from recurring tickets.
//! The review board approves or rejects them; the analytics fixtures feed
//! the dashboard cards and their derived percentages.

use crate::error::HelpdeskError;
use serde::{Deserialize, Serialize};

/// Expected impact of publishing a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Review state of a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A proposed knowledge base article awaiting review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub category: String,
    pub proposed_content: String,
    pub impact: Impact,
    /// How many tickets this topic appeared in
    pub frequency: u32,
    pub status: SuggestionStatus,
    /// Reviewer-supplied reason, set on rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// In-memory review board over the suggestion set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewBoard {
    suggestions: Vec<Suggestion>,
}

impl ReviewBoard {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self { suggestions }
    }

    /// Board seeded with the built-in suggestion dataset
    pub fn with_samples() -> Self {
        Self::new(sample_suggestions())
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn get(&self, id: &str) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.id == id)
    }

    /// Approve a suggestion for publication.
    pub fn approve(&mut self, id: &str) -> Result<&Suggestion, HelpdeskError> {
        let suggestion = self
            .suggestions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| HelpdeskError::UnknownSuggestion(id.to_string()))?;
        suggestion.status = SuggestionStatus::Approved;
        suggestion.rejection_reason = None;
        Ok(suggestion)
    }

    /// Reject a suggestion, optionally recording why.
    pub fn reject(&mut self, id: &str, reason: Option<&str>) -> Result<&Suggestion, HelpdeskError> {
        let suggestion = self
            .suggestions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| HelpdeskError::UnknownSuggestion(id.to_string()))?;
        suggestion.status = SuggestionStatus::Rejected;
        suggestion.rejection_reason = reason.map(str::to_string);
        Ok(suggestion)
    }

    pub fn pending(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions
            .iter()
            .filter(|s| s.status == SuggestionStatus::Pending)
    }

    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    pub fn approved_count(&self) -> usize {
        self.suggestions
            .iter()
            .filter(|s| s.status == SuggestionStatus::Approved)
            .count()
    }

    /// Resolution rate card figure, one decimal place.
    ///
    /// Follows the dashboard formula: already-published articles count as a
    /// fixed baseline of 10 on both sides.
    pub fn resolution_rate(&self) -> f64 {
        let approved = self.approved_count() as f64;
        let total = self.suggestions.len() as f64;
        let rate = (approved + 10.0) / (total + 10.0) * 100.0;
        (rate * 10.0).round() / 10.0
    }
}

impl Default for ReviewBoard {
    fn default() -> Self {
        Self::with_samples()
    }
}

/// The built-in suggestion dataset
pub fn sample_suggestions() -> Vec<Suggestion> {
    let suggestion =
        |id: &str, title: &str, category: &str, content: &str, impact: Impact, frequency: u32| {
            Suggestion {
                id: id.to_string(),
                title: title.to_string(),
                category: category.to_string(),
                proposed_content: content.to_string(),
                impact,
                frequency,
                status: SuggestionStatus::Pending,
                rejection_reason: None,
            }
        };

    vec![
        suggestion(
            "SUG-001",
            "iOS Email Sync Troubleshooting Guide",
            "Email Issues",
            "Step-by-step guide for resolving email synchronization issues on iOS devices. Includes OAuth setup, app cache clearing, and security settings configuration.",
            Impact::High,
            23,
        ),
        suggestion(
            "SUG-002",
            "VPN Connection Best Practices",
            "VPN Connection",
            "Comprehensive guide covering VPN client installation, connection troubleshooting, split tunneling configuration, and performance optimization tips.",
            Impact::High,
            19,
        ),
        suggestion(
            "SUG-003",
            "Two-Factor Authentication Setup",
            "Security Issues",
            "Complete documentation for enabling and managing 2FA across all company services. Includes backup codes, authenticator app setup, and recovery procedures.",
            Impact::Medium,
            14,
        ),
        suggestion(
            "SUG-004",
            "Remote Work Network Security",
            "Network Issues",
            "Guidelines for secure remote work setup including WiFi security, firewall configuration, and company network access policies.",
            Impact::High,
            17,
        ),
        suggestion(
            "SUG-005",
            "Software Installation Policy Update",
            "Software Install",
            "Updated procedures for requesting and installing business software. Includes approved software list, license management, and installation restrictions.",
            Impact::Medium,
            12,
        ),
    ]
}

/// Issue volume per support category over the analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: u32,
    pub escalated: u32,
}

/// Monthly resolved/escalated counts for the trend card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub resolved: u32,
    pub escalated: u32,
}

/// Tickets covered by the analysis window shown on the dashboard
pub const TICKETS_ANALYZED: u32 = 186;

/// Per-category issue counts for the analysis window
pub fn sample_category_stats() -> Vec<CategoryStats> {
    let stat = |category: &str, count: u32, escalated: u32| CategoryStats {
        category: category.to_string(),
        count,
        escalated,
    };
    vec![
        stat("Email Issues", 28, 8),
        stat("Password Reset", 22, 3),
        stat("VPN Connection", 19, 6),
        stat("Network Issues", 15, 4),
        stat("Software Install", 12, 2),
        stat("Mobile Setup", 10, 3),
        stat("Security Issues", 8, 5),
    ]
}

/// Monthly resolution trend for the analysis window
pub fn sample_trend() -> Vec<TrendPoint> {
    let point = |month: &str, resolved: u32, escalated: u32| TrendPoint {
        month: month.to_string(),
        resolved,
        escalated,
    };
    vec![
        point("Aug", 45, 12),
        point("Sep", 52, 14),
        point("Oct", 67, 11),
        point("Nov", 71, 9),
    ]
}

/// Share of categorized issues that were escalated, one decimal place.
pub fn escalation_rate(stats: &[CategoryStats]) -> f64 {
    let total: u32 = stats.iter().map(|s| s.count).sum();
    if total == 0 {
        return 0.0;
    }
    let escalated: u32 = stats.iter().map(|s| s.escalated).sum();
    let rate = escalated as f64 / total as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_start_pending() {
        let board = ReviewBoard::with_samples();
        assert_eq!(board.suggestions().len(), 5);
        assert_eq!(board.pending_count(), 5);
        assert_eq!(board.approved_count(), 0);
    }

    #[test]
    fn test_approve() {
        let mut board = ReviewBoard::with_samples();
        let approved = board.approve("SUG-001").unwrap();
        assert_eq!(approved.status, SuggestionStatus::Approved);
        assert_eq!(board.pending_count(), 4);
        assert_eq!(board.approved_count(), 1);
    }

    #[test]
    fn test_reject_records_reason() {
        let mut board = ReviewBoard::with_samples();
        let rejected = board.reject("SUG-002", Some("duplicate of SUG-004")).unwrap();
        assert_eq!(rejected.status, SuggestionStatus::Rejected);
        assert_eq!(
            rejected.rejection_reason.as_deref(),
            Some("duplicate of SUG-004")
        );
        assert_eq!(board.pending_count(), 4);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let mut board = ReviewBoard::with_samples();
        assert!(matches!(
            board.approve("SUG-999"),
            Err(HelpdeskError::UnknownSuggestion(_))
        ));
        assert!(board.reject("nope", None).is_err());
    }

    #[test]
    fn test_approve_clears_rejection_reason() {
        let mut board = ReviewBoard::with_samples();
        board.reject("SUG-003", Some("needs rework")).unwrap();
        let approved = board.approve("SUG-003").unwrap();
        assert!(approved.rejection_reason.is_none());
    }

    #[test]
    fn test_resolution_rate_formula() {
        let mut board = ReviewBoard::with_samples();
        // (0 + 10) / (5 + 10) = 66.7%
        assert_eq!(board.resolution_rate(), 66.7);
        board.approve("SUG-001").unwrap();
        // (1 + 10) / (5 + 10) = 73.3%
        assert_eq!(board.resolution_rate(), 73.3);
    }

    #[test]
    fn test_category_fixture_totals() {
        let stats = sample_category_stats();
        let total: u32 = stats.iter().map(|s| s.count).sum();
        let escalated: u32 = stats.iter().map(|s| s.escalated).sum();
        assert_eq!(total, 114);
        assert_eq!(escalated, 31);
        assert!(escalated <= TICKETS_ANALYZED);
    }

    #[test]
    fn test_escalation_rate_derivation() {
        let stats = sample_category_stats();
        // 31 / 114 = 27.2%
        assert_eq!(escalation_rate(&stats), 27.2);
        assert_eq!(escalation_rate(&[]), 0.0);
    }

    #[test]
    fn test_trend_fixture() {
        let trend = sample_trend();
        assert_eq!(trend.len(), 4);
        assert_eq!(trend[0].month, "Aug");
        assert_eq!(trend[3].resolved, 71);
    }
}
