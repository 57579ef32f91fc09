//! Command-line front-end for the repo-utils helpers.
mod app;

use anyhow::Result;

/// Parses the command line and runs the selected subcommand.
///
/// # Errors
///
/// Returns an error for invalid arguments (timestamps, locales, strict
/// levels) or when the weekly report cannot be written.
fn main() -> Result<()> {
    app::launch()
}
