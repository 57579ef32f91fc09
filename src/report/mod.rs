//! Markdown reports about the repository: the weekly git and file summary,
//! and the health report built from GitHub repository stats.
pub mod files;
pub mod git;
pub mod health;
pub mod render;

pub use files::count_by_extension;
pub use git::GitInfo;
pub use health::{render_health_report, RepoStats};
pub use render::render_report;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

/// Builds the report for the checkout at `root`.
pub fn build_report(root: &Path, now: DateTime<Utc>) -> Result<String> {
    let git = GitInfo::collect(root, now);
    let counts = count_by_extension(root)
        .with_context(|| format!("counting files under {}", root.display()))?;
    Ok(render_report(now, &git, &counts))
}

/// Writes `content` to `path` unless the file already holds exactly that.
///
/// Returns whether the file was written.
pub fn write_report(path: &Path, content: &str) -> Result<bool> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let existing = match fs::read_to_string(path) {
        Ok(existing) => Some(existing),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };

    if existing.as_deref() == Some(content) {
        info!("{} is up to date", path.display());
        return Ok(false);
    }

    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(true)
}
