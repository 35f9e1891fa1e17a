//! Vertical card display for the regulation feed.
//!
//! Renders each record as a labelled card with placeholder text for
//! missing fields, followed by the diagnostic-log panel.

use regwatch_core::{DiagnosticLog, Regulation};

const MAX_CONTENT_CHARS: usize = 160;
const UNTITLED: &str = "(untitled)";

/// One-line connectivity banner.
pub fn print_status(connected: bool) {
    println!(
        "Backend: {}",
        if connected { "connected" } else { "unreachable" }
    );
    println!();
}

/// Print the feed as vertical cards.
pub fn print_feed(records: &[&Regulation]) {
    if records.is_empty() {
        println!("Feed is currently empty. Start a scrape to begin.");
        println!();
        return;
    }
    for record in records {
        print_card(record);
    }
    println!("{} record(s)", records.len());
    println!();
}

/// Print a single regulation as a labelled card.
pub fn print_card(record: &Regulation) {
    println!("=== {} ===", record.id.as_deref().unwrap_or("(no id)"));
    println!("{}", record.title.as_deref().unwrap_or(UNTITLED));

    print_field("jurisdiction", record.jurisdiction.as_deref());
    print_field("agency", record.agency.as_deref());
    print_field("category", record.category.as_deref());
    print_field("source_url", record.source_url.as_deref());
    print_field("publication_date", record.publication_date.as_deref());
    if let Some(content) = record.content.as_deref() {
        println!(
            "  {:<18} {}",
            "content",
            truncate(content, MAX_CONTENT_CHARS)
        );
    }
    println!();
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("  {:<18} {}", label, v);
    }
}

/// Shorten display text on a char boundary.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Print the diagnostic-log panel, newest entry first.
pub fn print_log(log: &DiagnosticLog) {
    if log.is_empty() {
        return;
    }
    println!("--- diagnostics ---");
    for entry in log.entries() {
        println!("[{}] {}", entry.timestamp.format("%H:%M:%S"), entry.message);
    }
}
