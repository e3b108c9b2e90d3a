//! Markdown rendering of a daily report.

use crate::model::{Report, RunResult};

/// Render a [`Report`] as Markdown for terminal or issue display.
pub fn render_report_markdown(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!("## Rule Watch Report {}\n\n", report.id));

    let result_label = match report.result {
        RunResult::Changed => "Changed",
        RunResult::Unchanged => "Unchanged",
        RunResult::Error => "Error",
    };
    out.push_str(&format!(
        "**Result**: {result_label}  \n**Scope**: {}  \n**Summary**: {}\n\n",
        report.scope, report.summary
    ));

    if !report.changes.is_empty() {
        out.push_str("### Changes\n\n");
        out.push_str("| Code | Title | Notice No. | Announced | Effective | Keys |\n");
        out.push_str("|---|---|---|---|---|---|\n");
        for change in &report.changes {
            out.push_str(&format!(
                "| `{}` | {} | {} | {} | {} | {} |\n",
                change.code,
                change.title,
                cell(change.notice_no.as_deref()),
                cell(change.announce_date.as_deref()),
                cell(change.effective_date.as_deref()),
                change.diff_keys.join(", "),
            ));
        }
        out.push('\n');

        for change in &report.changes {
            out.push_str(&format!("#### {} {}\n\n", change.code, change.title));
            out.push_str(&format!("- {}\n", change.reason));
            out.push_str(&format!("- {}\n", change.supplementary));
            for note in &change.impact {
                out.push_str(&format!("- {}\n", note));
            }
            for link in &change.refs {
                out.push_str(&format!("- [{}]({})\n", link.label, link.url));
            }
            out.push('\n');
        }
    }

    if !report.errors.is_empty() {
        out.push_str("### Errors\n\n");
        for err in &report.errors {
            let code = err.code.as_deref().unwrap_or("-");
            let mut line = format!("- `{}` {} / {}", code, err.stage.as_str(), err.kind);
            if let Some(status) = err.status {
                line.push_str(&format!(" (HTTP {})", status));
            }
            if let Some(query) = &err.query {
                line.push_str(&format!(" query=\"{}\"", query));
            }
            if let Some(message) = &err.message {
                line.push_str(&format!(": {}", message));
            }
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    if report.changes.is_empty() && report.errors.is_empty() {
        out.push_str("_No changes detected._\n");
    }

    out
}

fn cell(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}
