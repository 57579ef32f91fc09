//! Git metadata for the weekly report.
use chrono::{DateTime, Days, Utc};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Summary of the checkout at report time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitInfo {
    pub head_sha: String,
    pub head_summary: String,
    pub latest_tag: String,
    pub commit_count_7d: u64,
}

impl GitInfo {
    /// Queries `git` in `repo`. Missing git, a missing repository or an
    /// untagged history all degrade to empty fields.
    pub fn collect(repo: &Path, now: DateTime<Utc>) -> Self {
        let since = window_start(now);
        let count = run_git(
            repo,
            &["rev-list", "--count", &format!("--since={since}"), "HEAD"],
        );

        Self {
            head_sha: run_git(repo, &["rev-parse", "HEAD"]),
            head_summary: run_git(repo, &["show", "-s", "--format=%s", "HEAD"]),
            latest_tag: run_git(repo, &["describe", "--tags", "--abbrev=0"]),
            commit_count_7d: count.parse().unwrap_or(0),
        }
    }
}

/// Midnight UTC seven days before `now`, formatted for `git --since`.
pub fn window_start(now: DateTime<Utc>) -> String {
    let day = now.date_naive() - Days::new(7);
    format!("{}T00:00:00Z", day.format("%Y-%m-%d"))
}

fn run_git(repo: &Path, args: &[&str]) -> String {
    let output = match Command::new("git").args(args).current_dir(repo).output() {
        Ok(output) => output,
        Err(e) => {
            debug!("git {:?} could not run: {}", args, e);
            return String::new();
        }
    };

    if !output.status.success() {
        debug!(
            "git {:?} exited with {}: {}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return String::new();
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
