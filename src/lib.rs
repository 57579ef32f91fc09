//! Small utilities shared by the repository tooling.
//!
//! - [`helpers`] formats dates with the host locale and generates short ids.
//! - [`logging`] prints timestamped, severity-labelled lines to stdout.
//! - [`report`] renders the weekly repository summary.
pub mod error;
pub mod helpers;
pub mod logging;
pub mod report;

pub use error::UtilError;
pub use helpers::{format_date, generate_id};
pub use logging::{log, log_error, log_info, log_levels, Level};
