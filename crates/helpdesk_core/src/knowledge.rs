//! Keyword-based knowledge base lookup.
//!
//! Deterministic retrieval: lowercase the query, substring-match each
//! catalog keyword in order, concatenate matching article lists without
//! deduplication, truncate to the suggestion cap. No keyword match yields
//! an empty list, which callers treat as "no suggestions", not an error.

use serde::{Deserialize, Serialize};

/// Maximum suggestions attached to a single reply
pub const MAX_SUGGESTIONS: usize = 3;

/// A knowledge base article surfaced alongside a reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSuggestion {
    /// Article title
    pub title: String,
    /// Short excerpt shown in the suggestion card
    pub excerpt: String,
    /// Relevance score in [0, 1]
    pub relevance: f64,
}

impl ArticleSuggestion {
    pub fn new(title: impl Into<String>, excerpt: impl Into<String>, relevance: f64) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            relevance: relevance.clamp(0.0, 1.0),
        }
    }

    /// Relevance as a whole percentage for display
    pub fn relevance_percent(&self) -> u32 {
        (self.relevance * 100.0).round() as u32
    }
}

/// Ordered keyword -> article-list associations.
///
/// Entries are a Vec rather than a map so lookup results keep a stable,
/// catalog-defined order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleCatalog {
    entries: Vec<(String, Vec<ArticleSuggestion>)>,
}

impl ArticleCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in catalog covering the four support topics
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add(
            "email",
            vec![
                ArticleSuggestion::new(
                    "Mobile Email Setup Guide",
                    "Configure email on iOS and Android devices...",
                    0.95,
                ),
                ArticleSuggestion::new(
                    "Common Email Sync Issues",
                    "Troubleshoot email synchronization problems...",
                    0.92,
                ),
            ],
        );
        catalog.add(
            "password",
            vec![
                ArticleSuggestion::new(
                    "Password Reset Procedures",
                    "Step-by-step guide to reset your password...",
                    0.98,
                ),
                ArticleSuggestion::new(
                    "Account Security Best Practices",
                    "Protect your account with strong passwords...",
                    0.85,
                ),
            ],
        );
        catalog.add(
            "vpn",
            vec![
                ArticleSuggestion::new(
                    "VPN Connection Guide",
                    "Connect to company VPN securely...",
                    0.96,
                ),
                ArticleSuggestion::new(
                    "Remote Access Policies",
                    "Company policies for remote work access...",
                    0.88,
                ),
            ],
        );
        catalog.add(
            "network",
            vec![
                ArticleSuggestion::new(
                    "WiFi Troubleshooting",
                    "Resolve WiFi connectivity issues...",
                    0.90,
                ),
                ArticleSuggestion::new(
                    "Network Security Policies",
                    "Company network security guidelines...",
                    0.82,
                ),
            ],
        );
        catalog
    }

    /// Add a keyword association. Keywords are stored lowercase.
    pub fn add(&mut self, keyword: impl Into<String>, articles: Vec<ArticleSuggestion>) {
        let keyword: String = keyword.into();
        self.entries.push((keyword.to_lowercase(), articles));
    }

    /// Configured keywords in catalog order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Find articles relevant to free-text input.
    ///
    /// Pure and deterministic; never returns more than [`MAX_SUGGESTIONS`].
    pub fn lookup(&self, text: &str) -> Vec<ArticleSuggestion> {
        let lower = text.to_lowercase();
        let mut articles = Vec::new();
        for (keyword, items) in &self.entries {
            if lower.contains(keyword.as_str()) {
                articles.extend(items.iter().cloned());
            }
        }
        articles.truncate(MAX_SUGGESTIONS);
        articles
    }
}

impl Default for ArticleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
