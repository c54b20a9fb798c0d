use serde_json::json;
use ticket_copilot_core::report::{
    help_epilog, render_error, render_result_banner, render_ticket_preamble, render_usage_hint,
};
use ticket_copilot_core::{Intent, TicketRequest, TicketResult, TicketStatus};

fn sample_result(status: TicketStatus) -> TicketResult {
    TicketResult {
        employee_id: "E002".to_string(),
        intent: Intent::HardwareIssue,
        kb_relevance: 0.5,
        status,
        message: "Request a replacement keyboard from the IT desk.".to_string(),
        debug_info: json!("top_chunk=hw-014"),
    }
}

#[test]
fn banner_is_deterministic() {
    let result = sample_result(TicketStatus::SolvedByRag);
    assert_eq!(render_result_banner(&result), render_result_banner(&result));
}

#[test]
fn banner_for_solved_ticket() {
    let banner = render_result_banner(&sample_result(TicketStatus::SolvedByRag));

    assert!(banner.starts_with(&format!("\n{}\n", "=".repeat(80))));
    assert!(banner.contains("🎯 GUARD-RAILED SUPPORT TICKET COPILOT - RAG RESULT"));
    assert!(banner.contains("👤 Employee ID: E002\n"));
    assert!(banner.contains("🏷️  Intent Category: hardware_issue\n"));
    assert!(banner.contains("📊 Knowledge Base Relevance: 0.500\n"));
    assert!(banner.contains("\n✅ STATUS: SOLVED_BY_RAG\n"));
    assert!(banner.contains(&format!(
        "{rule}\nRequest a replacement keyboard from the IT desk.\n{rule}\n",
        rule = "-".repeat(60)
    )));
    assert!(banner.contains("🔍 Debug Info: top_chunk=hw-014\n"));
    assert!(banner.ends_with(&format!("{}\n", "=".repeat(80))));
}

#[test]
fn banner_for_escalated_ticket_uses_retry_icon() {
    let banner = render_result_banner(&sample_result(TicketStatus::Escalated));
    assert!(banner.contains("\n🔄 STATUS: ESCALATED\n"));
    assert!(!banner.contains("✅"));
}

#[test]
fn structured_debug_info_is_rendered_as_compact_json() {
    let mut result = sample_result(TicketStatus::SolvedByRag);
    result.debug_info = json!({"chunks": 2});

    let banner = render_result_banner(&result);
    assert!(banner.contains("🔍 Debug Info: {\"chunks\":2}\n"));
}

#[test]
fn relevance_is_rounded_to_three_decimals() {
    let mut result = sample_result(TicketStatus::SolvedByRag);
    result.kb_relevance = 0.98765;

    assert!(render_result_banner(&result).contains("Relevance: 0.988\n"));
}

#[test]
fn usage_hint_mentions_usage_and_help() {
    let hint = render_usage_hint("ticket-copilot");
    assert!(hint.contains("Usage: ticket-copilot <employee_id> <intent> \"<ticket_text>\""));
    assert!(hint.contains("ticket-copilot --help"));
}

#[test]
fn preamble_echoes_ticket() {
    let request = TicketRequest {
        employee_id: "E006".to_string(),
        ticket_text: "Outlook shows mailbox full error".to_string(),
        intent: Intent::SoftwareIssue,
    };
    let preamble = render_ticket_preamble(&request);

    assert!(preamble.contains("📥 Processing ticket from E006..."));
    assert!(preamble.contains("🏷️  Intent: software_issue"));
    assert!(preamble.contains("📝 Ticket: Outlook shows mailbox full error"));
}

#[test]
fn error_line_carries_message() {
    assert_eq!(render_error(&"boom"), "❌ Error processing ticket: boom\n");
}

#[test]
fn epilog_lists_every_intent() {
    let epilog = help_epilog("ticket-copilot");
    for intent in Intent::ALL {
        assert!(
            epilog.contains(&format!("  - {}: {}", intent, intent.description())),
            "missing {intent} in epilog"
        );
    }
}
