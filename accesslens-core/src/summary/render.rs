use crate::summary::RunSummary;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Human-readable run report. The last line is always the processed/skipped
/// totals.
pub fn render_summary(summary: &RunSummary, colored: bool) -> String {
    let mut out = String::new();

    let s = &summary.status;
    let _ = writeln!(
        out,
        "Status: 1xx={} 2xx={} 3xx={} 4xx={} 5xx={} other={}",
        s.informational, s.success, s.redirect, s.client_error, s.server_error, s.other
    );

    let _ = writeln!(
        out,
        "Identity: human={} bot={} unknown={}",
        summary.human_count, summary.bot_count, summary.unknown_identity_count
    );

    if !summary.device_counts.is_empty() {
        out.push_str("Devices:");
        for (device, count) in &summary.device_counts {
            let _ = write!(out, " {}={}", device.as_str(), count);
        }
        out.push('\n');
    }

    let totals = format!(
        "Processed {} records, skipped {} lines",
        summary.processed, summary.skipped
    );

    if !colored {
        let _ = writeln!(out, "{totals}");
    } else if summary.skipped > 0 {
        let _ = writeln!(out, "{} {}", "⚠".yellow(), totals.bold());
    } else {
        let _ = writeln!(out, "{} {}", "✔".green(), totals.bold());
    }

    out
}
