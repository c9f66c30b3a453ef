// SPDX-FileCopyrightText: 2026 Mixroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of routing decisions and session history.
//!
//! The decision card shows the fields of one decision; the history table
//! shows time, model, latency, cost, and score per retained decision.

use colored::Colorize;
use mixroute_core::RouteResult;
use mixroute_session::SessionHistory;

/// Renders one routing decision as a card.
pub fn decision_card(result: &RouteResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {}  {}\n",
        "chosen model ".dimmed(),
        result.chosen_model.bold()
    ));
    out.push_str(&format!(
        "  {}  {}\n",
        "quality score".dimmed(),
        format!("{:.1}%", result.quality_score * 100.0).bold()
    ));
    out.push_str(&format!(
        "  {}  {}\n",
        "latency      ".dimmed(),
        format!("{:.0} ms", result.latency_ms).bold()
    ));
    out.push_str(&format!(
        "  {}  {}\n",
        "cost         ".dimmed(),
        format!("${:.4}", result.cost_usd).bold()
    ));
    out.push('\n');
    out.push_str(&format!("  {}\n\n", result.routing_explanation.italic()));
    out.push_str(&result.output_text);
    out.push('\n');
    out
}

/// Renders the session history as a table, oldest decision first.
pub fn history_table(history: &SessionHistory) -> String {
    if history.is_empty() {
        return "no decisions recorded yet\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "  {:<10} {:<24} {:>10} {:>10} {:>8}\n",
        "time".dimmed(),
        "model".dimmed(),
        "latency".dimmed(),
        "cost".dimmed(),
        "score".dimmed()
    ));
    for entry in history.iter() {
        out.push_str(&format!(
            "  {:<10} {:<24} {:>10} {:>10} {:>8}\n",
            format_timestamp(&entry.timestamp),
            entry.chosen_model,
            format!("{:.0} ms", entry.latency_ms),
            format!("${:.4}", entry.cost_usd),
            format!("{:.1}%", entry.quality_score * 100.0),
        ));
    }

    if let (Some(latency), Some(cost)) = (history.mean_latency_ms(), history.mean_cost_usd()) {
        out.push_str(&format!(
            "  {}\n",
            format!(
                "{} decisions, mean {latency:.0} ms, mean ${cost:.4}",
                history.len()
            )
            .dimmed()
        ));
    }

    out
}

/// Formats an ISO-8601 timestamp as a local wall-clock time.
///
/// Unparseable timestamps are shown verbatim.
pub fn format_timestamp(value: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(value) {
        Ok(ts) => ts.format("%H:%M:%S").to_string(),
        Err(_) => value.to_string(),
    }
}
