//! Terminal rendering helpers for helpdeskctl.

use console::style;
use helpdesk_core::history::HistoryTicket;
use helpdesk_core::knowledge::ArticleSuggestion;
use helpdesk_core::review::{CategoryStats, Suggestion, SuggestionStatus, TrendPoint};
use helpdesk_core::{Message, Role, TicketStatus};

/// Print one conversation message with its local time.
pub fn print_message(message: &Message) {
    let time = message.timestamp.format("%H:%M");
    match message.role {
        Role::User => println!("{} {}", style(format!("[{time}] you:")).cyan().bold(), message.content),
        Role::Agent => println!("{} {}", style(format!("[{time}] agent:")).green().bold(), message.content),
    }
    if !message.articles.is_empty() {
        println!("  {}", style("Suggested articles:").dim());
        for article in &message.articles {
            print_article(article);
        }
    }
}

/// Print one suggested article card.
pub fn print_article(article: &ArticleSuggestion) {
    println!(
        "  {} {} {}",
        style("-").dim(),
        style(&article.title).bold(),
        style(format!("({}% relevant)", article.relevance_percent())).dim()
    );
    println!("    {}", style(&article.excerpt).dim());
}

/// Status label with the dashboard's color coding.
///
/// The word is padded to `width` before styling, since ANSI escapes would
/// otherwise count toward the field width and skew columns.
pub fn status_label(status: TicketStatus, width: usize) -> String {
    let word = format!("{:<width$}", status.to_string());
    match status {
        TicketStatus::Resolved => style(word).green().to_string(),
        TicketStatus::Escalated => style(word).yellow().to_string(),
        TicketStatus::Pending => style(word).dim().to_string(),
    }
}

/// Print one history ticket row.
pub fn print_ticket_row(ticket: &HistoryTicket) {
    println!(
        "{}  {} {}",
        style(&ticket.id).bold(),
        status_label(ticket.status, 10),
        ticket.issue_summary
    );
    println!(
        "    {} <{}>  {}",
        ticket.employee_name,
        style(&ticket.employee_email).dim(),
        style(ticket.timestamp.format("%Y-%m-%d %H:%M")).dim()
    );
}

/// Print full details for one history ticket.
pub fn print_ticket_details(ticket: &HistoryTicket) {
    println!("{} - {}", style(&ticket.id).bold(), ticket.issue_summary);
    println!("  status:   {}", status_label(ticket.status, 0));
    println!("  employee: {} <{}>", ticket.employee_name, ticket.employee_email);
    println!("  date:     {}", ticket.timestamp.format("%Y-%m-%d %H:%M"));
    if let Some(resolution) = &ticket.resolution {
        println!("  {}", style("Resolution").green().bold());
        println!("    {resolution}");
    }
    if let Some(details) = &ticket.escalation_details {
        println!("  {}", style("Escalation Details").yellow().bold());
        println!("    {details}");
    }
}

/// Print one suggestion row.
pub fn print_suggestion(suggestion: &Suggestion) {
    let status = match suggestion.status {
        SuggestionStatus::Approved => style(format!("{:<8}", "approved")).green(),
        SuggestionStatus::Rejected => style(format!("{:<8}", "rejected")).red(),
        SuggestionStatus::Pending => style(format!("{:<8}", "pending")).cyan(),
    };
    println!(
        "{}  {}  {} impact  {}",
        style(&suggestion.id).bold(),
        status,
        style(suggestion.impact.to_string()).magenta(),
        suggestion.title
    );
    println!(
        "    {}  {}",
        style(&suggestion.category).dim(),
        style(format!("appears in {} tickets", suggestion.frequency)).dim()
    );
    if let Some(reason) = &suggestion.rejection_reason {
        println!("    {} {}", style("reason:").dim(), reason);
    }
}

/// Print the analytics dashboard cards and tables.
pub fn print_stats(
    tickets_analyzed: u32,
    resolution_rate: f64,
    escalation_rate: f64,
    pending_suggestions: usize,
    categories: &[CategoryStats],
    trend: &[TrendPoint],
) {
    println!("{}", style("Knowledge Management").bold());
    println!("  tickets analyzed:    {tickets_analyzed} (last 90 days)");
    println!("  resolution rate:     {resolution_rate}% (without escalation)");
    println!("  escalation rate:     {escalation_rate}% (across categories)");
    println!("  pending suggestions: {pending_suggestions}");

    println!("\n{}", style("Issues by category").bold());
    for stat in categories {
        println!(
            "  {:<18} {:>3} issues, {:>2} escalated",
            stat.category, stat.count, stat.escalated
        );
    }

    println!("\n{}", style("Resolution trend").bold());
    for point in trend {
        println!(
            "  {:<4} {:>3} resolved, {:>2} escalated",
            point.month, point.resolved, point.escalated
        );
    }
}
