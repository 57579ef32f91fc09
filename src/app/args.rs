use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "repo-utils")]
#[command(about = "Date, id, logging and weekly report helpers")]
pub struct AppArgs {
    #[arg(long, short, global = true, help = "Show internal diagnostics on stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum AppCommand {
    /// Print a calendar date in the host (or given) locale
    Date {
        #[arg(long, help = "RFC 3339 timestamp (defaults to now)")]
        at: Option<String>,

        #[arg(long, help = "Locale such as de_DE (defaults to LC_ALL/LC_TIME/LANG)")]
        locale: Option<String>,
    },

    /// Print short random ids
    Id {
        #[arg(long, short = 'n', default_value_t = 1, help = "Number of ids")]
        count: usize,
    },

    /// Write one log line to stdout
    Log {
        #[arg(help = "Level label, printed verbatim")]
        level: String,

        #[arg(required = true, num_args = 1.., help = "Message text")]
        message: Vec<String>,

        #[arg(long, help = "Reject levels other than ERROR, WARN, INFO, DEBUG")]
        strict: bool,
    },

    /// Print the recognized log levels
    Levels {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Generate the weekly repository report
    Report {
        #[arg(long, default_value = ".", help = "Repository root")]
        root: PathBuf,

        #[arg(
            long,
            help = "Output file (defaults to <REPO_UTILS_REPORT_DIR or reports>/weekly.md)"
        )]
        out: Option<PathBuf>,
    },

    /// Render the repository health report from a GitHub repository JSON dump
    Health {
        #[arg(long, help = "JSON file with the repository stats")]
        stats: PathBuf,

        #[arg(
            long,
            help = "Output file (defaults to <REPO_UTILS_REPORT_DIR or reports>/health.md)"
        )]
        out: Option<PathBuf>,
    },
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
