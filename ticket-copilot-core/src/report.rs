//! Text rendering for everything the runner shows on stdout.
//!
//! All functions here are pure: the same input always yields byte-identical
//! output, and nothing is retained between calls.

use std::fmt::Display;

use serde_json::Value;

use crate::contract::{Intent, TicketRequest, TicketResult};

const HEAVY_RULE_WIDTH: usize = 80;
const LIGHT_RULE_WIDTH: usize = 60;

/// Render the framed result report for one processed ticket.
pub fn render_result_banner(result: &TicketResult) -> String {
    let heavy = "=".repeat(HEAVY_RULE_WIDTH);
    let light = "-".repeat(LIGHT_RULE_WIDTH);
    let status_icon = if result.status.is_solved() { "✅" } else { "🔄" };

    let lines = [
        String::new(),
        heavy.clone(),
        "🎯 GUARD-RAILED SUPPORT TICKET COPILOT - RAG RESULT".to_string(),
        heavy.clone(),
        format!("👤 Employee ID: {}", result.employee_id),
        format!("🏷️  Intent Category: {}", result.intent),
        format!("📊 Knowledge Base Relevance: {:.3}", result.kb_relevance),
        String::new(),
        format!(
            "{status_icon} STATUS: {}",
            result.status.as_wire().to_uppercase()
        ),
        String::new(),
        "📝 RESPONSE:".to_string(),
        light.clone(),
        result.message.clone(),
        light,
        String::new(),
        format!("🔍 Debug Info: {}", render_debug_info(&result.debug_info)),
        heavy,
    ];
    join_lines(&lines)
}

/// Short hint printed when the runner is started without any arguments.
pub fn render_usage_hint(program: &str) -> String {
    join_lines(&[
        "🎯 Guard-Railed Support Ticket Copilot - RAG Processor".to_string(),
        String::new(),
        format!("Usage: {program} <employee_id> <intent> \"<ticket_text>\""),
        String::new(),
        format!("For full help: {program} --help"),
    ])
}

/// Echo of the submitted ticket, printed before the processor is called.
pub fn render_ticket_preamble(request: &TicketRequest) -> String {
    join_lines(&[
        format!("📥 Processing ticket from {}...", request.employee_id),
        format!("🏷️  Intent: {}", request.intent),
        format!("📝 Ticket: {}", request.ticket_text),
    ])
}

/// One-line failure report.
pub fn render_error(error: &dyn Display) -> String {
    format!("❌ Error processing ticket: {error}\n")
}

/// Examples and intent list appended to `--help`.
pub fn help_epilog(program: &str) -> String {
    let mut lines = vec![
        "Examples:".to_string(),
        format!("  {program} E007 network_issue \"VPN connects but cannot reach internal sites\""),
        format!("  {program} E002 hardware_issue \"My laptop keyboard N key is stuck\""),
        format!("  {program} E006 software_issue \"Outlook shows mailbox full error\""),
        format!("  {program} E005 policy_question \"What is the WFH policy during probation?\""),
        String::new(),
        "Available Intent Categories:".to_string(),
    ];
    lines.extend(
        Intent::ALL
            .iter()
            .map(|intent| format!("  - {}: {}", intent, intent.description())),
    );
    join_lines(&lines)
}

fn render_debug_info(debug_info: &Value) -> String {
    match debug_info {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
