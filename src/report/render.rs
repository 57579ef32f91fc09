//! Markdown rendering of the weekly report.
use super::GitInfo;
use chrono::{DateTime, Utc};

/// Maximum number of extension rows in the table.
pub const MAX_EXTENSION_ROWS: usize = 30;

pub fn render_report(now: DateTime<Utc>, git: &GitInfo, counts: &[(String, usize)]) -> String {
    let mut lines: Vec<String> = vec![
        "# Weekly repo report".into(),
        String::new(),
        format!("Generated: `{}`", now.format("%Y-%m-%d")),
        String::new(),
        "## Git".into(),
        String::new(),
        format!("- HEAD: `{}`", git.head_sha),
    ];

    if !git.head_summary.is_empty() {
        lines.push(format!("- HEAD summary: {}", git.head_summary));
    }
    if !git.latest_tag.is_empty() {
        lines.push(format!("- Latest tag: `{}`", git.latest_tag));
    }
    lines.push(format!("- Commits in last 7 days: `{}`", git.commit_count_7d));
    lines.push(String::new());

    lines.push("## File counts by extension".into());
    lines.push(String::new());
    lines.push("| Extension | Files |".into());
    lines.push("|---|---:|".into());
    for (ext, n) in counts.iter().take(MAX_EXTENSION_ROWS) {
        lines.push(format!("| `{ext}` | {n} |"));
    }
    lines.push(String::new());

    lines.join("\n")
}
