//! Command implementations for helpdeskctl.

use crate::render;
use crate::session::{ChatSession, SendOutcome};
use anyhow::{bail, Context, Result};
use console::style;
use helpdesk_core::history::{filter_tickets, sample_tickets};
use helpdesk_core::review::{
    escalation_rate, sample_category_stats, sample_trend, ReviewBoard, TICKETS_ANALYZED,
};
use helpdesk_core::{Settings, TicketStatus};
use std::io::{BufRead, Write};
use std::time::Duration;

/// Interactive support chat session.
pub async fn chat(simulate: bool) -> Result<()> {
    let mut settings = Settings::load();
    if simulate {
        settings.agent.simulate = true;
    }

    let mut session = ChatSession::new(settings);
    println!("{}", style("IT Operations Helpdesk").bold());
    println!("{}\n", style("Type your issue, or 'quit' to leave.").dim());
    for message in session.log().iter() {
        render::print_message(message);
    }

    let stdin = std::io::stdin();
    loop {
        print!("\n> ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let before = session.log().len();
        let outcome = session.send(input).await;
        if outcome == SendOutcome::Rejected {
            continue;
        }
        for message in session.log().iter().skip(before + 1) {
            render::print_message(message);
        }

        if outcome == SendOutcome::EscalationPending {
            confirm_escalation_prompt(&mut session, &stdin)?;
        }
    }

    if let Some(ticket) = session.ticket() {
        println!(
            "\n{} Ticket {} remains {}.",
            style("Note:").yellow(),
            ticket.id,
            ticket.status
        );
    }
    Ok(())
}

/// Show the escalation email preview and ask for confirmation.
fn confirm_escalation_prompt(session: &mut ChatSession, stdin: &std::io::Stdin) -> Result<()> {
    let prompt = match session.pending_escalation() {
        Some(p) => p.clone(),
        None => return Ok(()),
    };

    println!("\n{}", style("Escalation Email Preview").yellow().bold());
    for line in prompt.email_preview.lines() {
        println!("  {line}");
    }
    print!("{} ", style("Confirm & escalate? [y/N]").bold());
    std::io::stdout().flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    if answer.trim().eq_ignore_ascii_case("y") {
        if session.confirm_escalation().is_some() {
            if let Some(message) = session.log().latest() {
                render::print_message(message);
            }
        }
    } else {
        session.dismiss_escalation();
        println!("{}", style("Escalation not sent; ticket kept on file.").dim());
    }
    Ok(())
}

/// Browse ticket history with optional search and status filter.
pub async fn tickets(search: Option<String>, status: Option<String>) -> Result<()> {
    let status = status
        .map(|s| s.parse::<TicketStatus>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;
    let history = sample_tickets();
    let hits = filter_tickets(&history, search.as_deref().unwrap_or(""), status);

    if hits.is_empty() {
        println!("No tickets found matching your search");
        return Ok(());
    }
    for ticket in hits {
        render::print_ticket_row(ticket);
    }
    Ok(())
}

/// Show full details for one ticket.
pub async fn show(id: &str) -> Result<()> {
    let history = sample_tickets();
    let ticket = history
        .iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
        .with_context(|| format!("no ticket with id '{id}'"))?;
    render::print_ticket_details(ticket);
    Ok(())
}

/// Review knowledge base improvement suggestions.
pub async fn suggestions(
    approve: Option<String>,
    reject: Option<String>,
    reason: Option<String>,
) -> Result<()> {
    if approve.is_some() && reject.is_some() {
        bail!("--approve and --reject are mutually exclusive");
    }

    let mut board = ReviewBoard::with_samples();
    if let Some(id) = approve {
        let suggestion = board.approve(&id)?;
        println!(
            "{} {} approved and queued for the knowledge base.",
            style("ok:").green().bold(),
            suggestion.id
        );
    } else if let Some(id) = reject {
        let suggestion = board.reject(&id, reason.as_deref())?;
        println!("{} {} rejected.", style("ok:").green().bold(), suggestion.id);
    }

    println!("{}", style("Improvement Suggestions").bold());
    for suggestion in board.suggestions() {
        render::print_suggestion(suggestion);
    }
    println!(
        "\n{} pending, resolution rate {}%",
        board.pending_count(),
        board.resolution_rate()
    );
    Ok(())
}

/// Show knowledge base analytics.
pub async fn stats() -> Result<()> {
    let board = ReviewBoard::with_samples();
    let categories = sample_category_stats();
    render::print_stats(
        TICKETS_ANALYZED,
        board.resolution_rate(),
        escalation_rate(&categories),
        board.pending_count(),
        &categories,
        &sample_trend(),
    );
    Ok(())
}

/// Show or change settings, optionally sending a test escalation email.
pub async fn config(set: Option<String>, test: bool) -> Result<()> {
    let mut settings = Settings::load();

    if let Some(assignment) = set {
        settings.set(&assignment)?;
        settings.save()?;
        println!(
            "{} saved to {}",
            style("ok:").green().bold(),
            Settings::config_path().display()
        );
    }

    println!("{}", style("Settings").bold());
    let rows = settings_rows(&settings);
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in &rows {
        println!("  {key:<width$} = {value}");
    }

    if test {
        println!(
            "\nSending test email to {}...",
            settings.escalation.email
        );
        tokio::time::sleep(Duration::from_millis(1500)).await;
        println!(
            "{} Test email sent successfully! Check {} for the test email.",
            style("ok:").green().bold(),
            settings.escalation.email
        );
    }
    Ok(())
}

/// Every settings key with its display value, in config-file order.
fn settings_rows(settings: &Settings) -> Vec<(&'static str, String)> {
    vec![
        ("escalation.email", settings.escalation.email.clone()),
        (
            "escalation.on_urgent",
            settings.escalation.on_urgent.to_string(),
        ),
        (
            "escalation.on_kb_miss",
            settings.escalation.on_kb_miss.to_string(),
        ),
        (
            "escalation.on_low_confidence",
            settings.escalation.on_low_confidence.to_string(),
        ),
        ("agent.tone", settings.agent.tone.to_string()),
        ("agent.endpoint", settings.agent.endpoint.clone()),
        ("agent.agent_id", settings.agent.agent_id.clone()),
        ("agent.user_id", settings.agent.user_id.clone()),
        ("agent.simulate", settings.agent.simulate.to_string()),
        (
            "notifications.email",
            settings.notifications.email.to_string(),
        ),
        (
            "notifications.slack",
            settings.notifications.slack.to_string(),
        ),
        (
            "notifications.slack_channel",
            settings.notifications.slack_channel.clone(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_rows_cover_every_settable_key() {
        let mut settings = Settings::default();
        for (key, _) in settings_rows(&Settings::default()) {
            // Every displayed key is accepted by the setter, with a value
            // matching its type.
            let value = match key {
                "agent.tone" => "casual",
                k if k.starts_with("escalation.on_")
                    || k == "agent.simulate"
                    || k == "notifications.email"
                    || k == "notifications.slack" =>
                {
                    "false"
                }
                _ => "example-value",
            };
            settings.set(&format!("{key}={value}")).unwrap();
        }
    }

    #[test]
    fn test_settings_rows_align_on_longest_key() {
        let rows = settings_rows(&Settings::default());
        let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        assert_eq!(width, "escalation.on_low_confidence".len());
        assert!(rows.iter().all(|(key, _)| key.len() <= width));
    }
}
