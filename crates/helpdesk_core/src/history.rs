//! Ticket history records and filtering.
//!
//! A read-only view over past tickets. Search matches the ticket id,
//! employee name, or issue summary; the status filter combines with
//! search using AND.

use crate::ticket::TicketStatus;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A closed or in-progress ticket from the history log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryTicket {
    pub id: String,
    pub employee_name: String,
    pub employee_email: String,
    pub issue_summary: String,
    pub status: TicketStatus,
    pub timestamp: DateTime<Utc>,
    /// How the issue was resolved, for resolved tickets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// Where the issue was routed, for escalated tickets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_details: Option<String>,
}

impl HistoryTicket {
    /// Case-insensitive match against id, employee name, or issue summary.
    /// An empty search term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.to_lowercase().contains(&term)
            || self.employee_name.to_lowercase().contains(&term)
            || self.issue_summary.to_lowercase().contains(&term)
    }
}

/// Filter tickets by search term and optional status.
pub fn filter_tickets<'a>(
    tickets: &'a [HistoryTicket],
    search: &str,
    status: Option<TicketStatus>,
) -> Vec<&'a HistoryTicket> {
    tickets
        .iter()
        .filter(|t| t.matches_search(search))
        .filter(|t| status.map_or(true, |s| t.status == s))
        .collect()
}

/// The built-in sample history dataset.
///
/// Timestamps are derived from the current time so ages stay plausible.
pub fn sample_tickets() -> Vec<HistoryTicket> {
    let now = Utc::now();
    let record = |id: &str,
                  name: &str,
                  email: &str,
                  summary: &str,
                  status: TicketStatus,
                  age: Duration,
                  resolution: Option<&str>,
                  escalation: Option<&str>| HistoryTicket {
        id: id.to_string(),
        employee_name: name.to_string(),
        employee_email: email.to_string(),
        issue_summary: summary.to_string(),
        status,
        timestamp: now - age,
        resolution: resolution.map(str::to_string),
        escalation_details: escalation.map(str::to_string),
    };

    vec![
        record(
            "TKT-001",
            "John Smith",
            "john.smith@company.com",
            "Email not syncing on mobile device",
            TicketStatus::Resolved,
            Duration::days(2),
            Some("Configured OAuth authentication and enabled less secure app access. Issue resolved in 15 minutes."),
            None,
        ),
        record(
            "TKT-002",
            "Sarah Johnson",
            "sarah.johnson@company.com",
            "Cannot connect to VPN from home",
            TicketStatus::Escalated,
            Duration::days(1),
            None,
            Some("Escalated to Network Team. Investigating ISP connectivity issues."),
        ),
        record(
            "TKT-003",
            "Michael Chen",
            "michael.chen@company.com",
            "Forgot password - account locked",
            TicketStatus::Resolved,
            Duration::days(3),
            Some("Sent password reset link via email. Account unlocked after 3 failed attempts. Resolved in 5 minutes."),
            None,
        ),
        record(
            "TKT-004",
            "Emily Rodriguez",
            "emily.rodriguez@company.com",
            "Software installation permission denied",
            TicketStatus::Resolved,
            Duration::days(4),
            Some("Escalated to admin panel and installed required software. Updated user permissions for future installations."),
            None,
        ),
        record(
            "TKT-005",
            "David Wilson",
            "david.wilson@company.com",
            "WiFi keeps disconnecting - urgent",
            TicketStatus::Escalated,
            Duration::days(5),
            None,
            Some("Urgent escalation sent to IT Support Team. Expected response time 2-4 hours."),
        ),
        record(
            "TKT-006",
            "Lisa Anderson",
            "lisa.anderson@company.com",
            "Two-factor authentication setup guide needed",
            TicketStatus::Resolved,
            Duration::days(6),
            Some("Provided step-by-step guide from knowledge base. Successfully configured 2FA. Resolved in 10 minutes."),
            None,
        ),
        record(
            "TKT-007",
            "Robert Martinez",
            "robert.martinez@company.com",
            "Printer not responding on network",
            TicketStatus::Pending,
            Duration::hours(1),
            Some("Investigating printer driver compatibility. Will follow up within 24 hours."),
            None,
        ),
        record(
            "TKT-008",
            "Jessica Lee",
            "jessica.lee@company.com",
            "Cannot access shared drives",
            TicketStatus::Resolved,
            Duration::days(7),
            Some("Re-indexed network permissions and restarted file service. Access restored within 20 minutes."),
            None,
        ),
        record(
            "TKT-009",
            "Thomas Brown",
            "thomas.brown@company.com",
            "Outlook calendar sync issues across devices",
            TicketStatus::Escalated,
            Duration::days(8),
            None,
            Some("Complex calendar sync issue escalated to Exchange Admin team. Investigating cloud sync conflict."),
        ),
        record(
            "TKT-010",
            "Amanda White",
            "amanda.white@company.com",
            "Need backup software installation",
            TicketStatus::Resolved,
            Duration::days(9),
            Some("Installed and configured backup software. Provided usage documentation. System operational."),
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_shape() {
        let tickets = sample_tickets();
        assert_eq!(tickets.len(), 10);
        assert!(tickets.iter().all(|t| t.id.starts_with("TKT-")));
        // Escalated records carry escalation details, resolved ones a resolution.
        for t in &tickets {
            match t.status {
                TicketStatus::Escalated => assert!(t.escalation_details.is_some(), "{}", t.id),
                TicketStatus::Resolved => assert!(t.resolution.is_some(), "{}", t.id),
                TicketStatus::Pending => {}
            }
        }
    }

    #[test]
    fn test_search_by_id_name_and_summary() {
        let tickets = sample_tickets();
        assert_eq!(filter_tickets(&tickets, "TKT-003", None).len(), 1);
        assert_eq!(filter_tickets(&tickets, "sarah", None).len(), 1);
        let vpn = filter_tickets(&tickets, "vpn", None);
        assert_eq!(vpn.len(), 1);
        assert_eq!(vpn[0].id, "TKT-002");
    }

    #[test]
    fn test_empty_search_matches_all() {
        let tickets = sample_tickets();
        assert_eq!(filter_tickets(&tickets, "", None).len(), tickets.len());
    }

    #[test]
    fn test_status_filter() {
        let tickets = sample_tickets();
        let escalated = filter_tickets(&tickets, "", Some(TicketStatus::Escalated));
        assert_eq!(escalated.len(), 3);
        let pending = filter_tickets(&tickets, "", Some(TicketStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "TKT-007");
    }

    #[test]
    fn test_search_and_status_combine_with_and() {
        let tickets = sample_tickets();
        let hits = filter_tickets(&tickets, "urgent", Some(TicketStatus::Escalated));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "TKT-005");
        assert!(filter_tickets(&tickets, "urgent", Some(TicketStatus::Resolved)).is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let tickets = sample_tickets();
        assert!(filter_tickets(&tickets, "no such thing", None).is_empty());
    }
}
