//! # contract: the processor interface consumed by the ticket runner
//!
//! This module defines the single trait ([`TicketProcessor`]) through which a
//! support ticket is handed to the guard-railed RAG processor, together with
//! the plain data types travelling across it.
//!
//! ## Interface & Extensibility
//! - Implement [`TicketProcessor`] to plug in a new backend (HTTP service,
//!   in-process engine, canned fixture).
//! - The call is async and returns a typed [`ProcessorError`]; implementors
//!   convert every upstream failure into one of its variants.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall`, so consumers get a
//!   `MockTicketProcessor` for deterministic tests.

use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

use crate::error::ProcessorError;

/// Ticket intent category. Constrains which knowledge base slice the
/// processor may consult.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[value(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// VPN, WiFi, connectivity problems
    NetworkIssue,
    /// Laptop, keyboard, monitor, physical device issues
    HardwareIssue,
    /// Outlook, Teams, application problems
    SoftwareIssue,
    /// Company policies, procedures, guidelines
    PolicyQuestion,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::NetworkIssue,
        Intent::HardwareIssue,
        Intent::SoftwareIssue,
        Intent::PolicyQuestion,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            Intent::NetworkIssue => "network_issue",
            Intent::HardwareIssue => "hardware_issue",
            Intent::SoftwareIssue => "software_issue",
            Intent::PolicyQuestion => "policy_question",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Intent::NetworkIssue => "VPN, WiFi, connectivity problems",
            Intent::HardwareIssue => "Laptop, keyboard, monitor, physical device issues",
            Intent::SoftwareIssue => "Outlook, Teams, application problems",
            Intent::PolicyQuestion => "Company policies, procedures, guidelines",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Error returned when a string is not one of the four intent wire names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intent '{0}'")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_wire() == s)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}

/// Outcome tag attached to a processed ticket.
///
/// The processor owns the full outcome set; tags other than the two known
/// ones are carried verbatim in [`TicketStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TicketStatus {
    SolvedByRag,
    Escalated,
    Other(String),
}

impl TicketStatus {
    pub fn as_wire(&self) -> &str {
        match self {
            TicketStatus::SolvedByRag => "solved_by_rag",
            TicketStatus::Escalated => "escalated",
            TicketStatus::Other(tag) => tag,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, TicketStatus::SolvedByRag)
    }
}

impl From<&str> for TicketStatus {
    fn from(s: &str) -> Self {
        match s {
            "solved_by_rag" => TicketStatus::SolvedByRag,
            "escalated" => TicketStatus::Escalated,
            other => TicketStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A ticket as submitted on the command line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TicketRequest {
    pub employee_id: String,
    pub ticket_text: String,
    pub intent: Intent,
}

/// The processor's answer for one ticket. Read-only for the runner.
#[derive(Clone, Debug, PartialEq)]
pub struct TicketResult {
    pub employee_id: String,
    pub intent: Intent,
    /// Expected in `[0.0, 1.0]`; not validated here.
    pub kb_relevance: f64,
    pub status: TicketStatus,
    pub message: String,
    /// Opaque diagnostics: a plain string or a structured payload.
    pub debug_info: serde_json::Value,
}

/// Trait for handing an allowed ticket to the RAG processor.
/// Implemented by real clients and by test mocks.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait TicketProcessor: Send + Sync {
    /// Process one ticket and return the processor's result record.
    async fn process_allowed_ticket(
        &self,
        request: TicketRequest,
    ) -> Result<TicketResult, ProcessorError>;
}
