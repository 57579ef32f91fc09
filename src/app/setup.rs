//! Process-level setup for the binary.
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the default report directory.
pub const REPORT_DIR_ENV: &str = "REPO_UTILS_REPORT_DIR";

const DEFAULT_REPORT_DIR: &str = "reports";

/// Configures diagnostics on stderr so they never mix with log lines on stdout.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the crate to debug.
pub fn configure_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,repo_utils=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolves where a report named `file_name` goes when `--out` is not given.
pub fn default_report_path(root: &Path, file_name: &str) -> PathBuf {
    match std::env::var(REPORT_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir).join(file_name),
        _ => root.join(DEFAULT_REPORT_DIR).join(file_name),
    }
}
