//! Helpdesk Control - CLI for the IT helpdesk assistant.
//!
//! Support chat, ticket history, knowledge base review, and settings.

use anyhow::Result;
use clap::{Parser, Subcommand};
use helpdeskctl::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "helpdeskctl")]
#[command(about = "IT helpdesk assistant - support chat, tickets, and knowledge base", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive support chat session
    Chat {
        /// Use the local canned-reply simulation instead of the remote agent
        #[arg(long)]
        simulate: bool,
    },

    /// Browse ticket history
    Tickets {
        /// Search by ticket ID, employee name, or issue
        #[arg(long)]
        search: Option<String>,

        /// Filter by status (pending, resolved, escalated)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show full details for one ticket
    Show {
        /// Ticket ID (e.g. TKT-003)
        id: String,
    },

    /// Review knowledge base improvement suggestions
    Suggestions {
        /// Approve a suggestion by ID
        #[arg(long)]
        approve: Option<String>,

        /// Reject a suggestion by ID
        #[arg(long)]
        reject: Option<String>,

        /// Reason for rejection
        #[arg(long)]
        reason: Option<String>,
    },

    /// Show knowledge base analytics
    Stats,

    /// Configure helpdesk settings
    Config {
        /// Set a configuration value (section.key=value)
        #[arg(long)]
        set: Option<String>,

        /// Send a test escalation email
        #[arg(long)]
        test: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { simulate } => commands::chat(simulate).await,
        Commands::Tickets { search, status } => commands::tickets(search, status).await,
        Commands::Show { id } => commands::show(&id).await,
        Commands::Suggestions {
            approve,
            reject,
            reason,
        } => commands::suggestions(approve, reject, reason).await,
        Commands::Stats => commands::stats().await,
        Commands::Config { set, test } => commands::config(set, test).await,
    }
}
