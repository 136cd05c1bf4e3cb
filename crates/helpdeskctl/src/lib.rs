//! Helpdesk Control - CLI client for the IT helpdesk assistant.
//!
//! Provides the support chat, ticket history browser, knowledge base
//! review, and settings commands on top of `helpdesk_core`.

pub mod agent;
pub mod commands;
pub mod render;
pub mod session;
