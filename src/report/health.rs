//! Repository health report rendered from GitHub repository stats.
//!
//! The stats come from a saved `GET /repos/{owner}/{repo}` response. Fetching
//! it is left to the caller.
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// The subset of the repository payload the report uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RepoStats {
    pub full_name: Option<String>,
    /// GitHub counts open pull requests as issues here.
    pub open_issues: u64,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    pub pushed_at: Option<String>,
}

impl RepoStats {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parsing repository stats")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }
}

/// Score in `0..=100`: 100 minus two points per issue and three per PR.
pub fn health_score(open_issues: u64, open_prs: u64) -> u64 {
    let deduction = open_issues
        .saturating_mul(2)
        .saturating_add(open_prs.saturating_mul(3));
    100u64.saturating_sub(deduction)
}

/// Estimated share of `open_issues` that are pull requests (one in five,
/// only once there are more than five).
pub fn estimate_prs(open_issues: u64) -> u64 {
    if open_issues > 5 {
        open_issues / 5
    } else {
        0
    }
}

/// Reformats an RFC 3339 `pushed_at` value; anything unparsable is kept as is.
pub fn format_pushed_at(pushed_at: Option<&str>) -> String {
    match pushed_at {
        None => "Unknown".to_string(),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc).format(STAMP_FORMAT).to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

/// `1234567` -> `1,234,567`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn render_health_report(now: DateTime<Utc>, stats: &RepoStats) -> String {
    let prs = estimate_prs(stats.open_issues);
    let issues = stats.open_issues - prs;
    let score = health_score(issues, prs);

    format!(
        "# Repository Health Report

*Generated on {generated}*

## Key Metrics

| Metric | Value |
|--------|-------|
| ⭐ Stars | {stars} |
| 🍴 Forks | {forks} |
| 👀 Watchers | {watchers} |
| 🐛 Open Issues | {open_issues} |
| 🔄 Pull Requests | {prs} (estimated) |
| 📅 Last Commit | {last_commit} |

## Health Score

**{score}/100**

*Health score calculation: 100 - (issues × 2 + PRs × 3)*

---
*This report is automatically generated every 10 minutes.*
",
        generated = now.format(STAMP_FORMAT),
        stars = group_thousands(stats.stargazers_count),
        forks = group_thousands(stats.forks_count),
        watchers = group_thousands(stats.watchers_count),
        open_issues = group_thousands(stats.open_issues),
        prs = group_thousands(prs),
        last_commit = format_pushed_at(stats.pushed_at.as_deref()),
    )
}
