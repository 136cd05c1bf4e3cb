//! End-to-end conversation flow scenarios.

use helpdesk_core::{Role, Settings, TicketStatus};
use helpdeskctl::agent::{ReplySource, SimulatedAgent};
use helpdeskctl::session::{ChatSession, SendOutcome};
use std::time::Duration;

fn simulated_session() -> ChatSession {
    let source = ReplySource::Simulated(SimulatedAgent::with_delay(Duration::ZERO));
    ChatSession::with_source(Settings::default(), source, "it-session".to_string())
}

#[tokio::test]
async fn escalation_flow_end_to_end() {
    let mut session = simulated_session();

    // Greeting opens the conversation.
    assert_eq!(session.log().len(), 1);
    assert_eq!(session.log().latest().unwrap().role, Role::Agent);

    // A calm question first: reply with articles, no ticket.
    let outcome = session.send("my email stopped syncing").await;
    assert_eq!(outcome, SendOutcome::Replied);
    assert!(session.ticket().is_none());
    let reply = session.log().latest().unwrap();
    assert!(!reply.articles.is_empty());
    assert!(reply.articles.len() <= 3);

    // The urgent turn creates the one ticket of the session.
    let outcome = session.send("My VPN won't connect, it's urgent").await;
    assert_eq!(outcome, SendOutcome::EscalationPending);
    let ticket_id = {
        let ticket = session.ticket().expect("ticket created");
        assert_eq!(ticket.status, TicketStatus::Escalated);
        ticket.id.clone()
    };
    let preview = session.pending_escalation().expect("preview pending");
    assert!(preview.email_preview.contains(&ticket_id));
    assert!(preview
        .email_preview
        .contains("My VPN won't connect, it's urgent"));

    // Confirmation appends exactly one message and keeps the same ticket.
    let len_before = session.log().len();
    session.confirm_escalation().expect("confirmed");
    assert_eq!(session.log().len(), len_before + 1);
    assert!(session.log().latest().unwrap().content.contains(&ticket_id));
    assert_eq!(session.ticket().unwrap().id, ticket_id);
    assert_eq!(session.ticket().unwrap().status, TicketStatus::Escalated);
}

#[tokio::test]
async fn quiet_conversation_never_creates_ticket() {
    let mut session = simulated_session();

    for input in [
        "How do I reset my password",
        "Where is the software request form",
        "Thanks, that worked",
    ] {
        assert_eq!(session.send(input).await, SendOutcome::Replied);
    }

    assert!(session.ticket().is_none());
    assert!(session.pending_escalation().is_none());
    // Greeting plus user/agent pair per turn, in order.
    assert_eq!(session.log().len(), 7);
    let roles: Vec<Role> = session.log().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Agent,
            Role::User,
            Role::Agent,
            Role::User,
            Role::Agent,
            Role::User,
            Role::Agent,
        ]
    );
}
