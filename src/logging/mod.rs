//! Console logging with a fixed set of severity labels.
//!
//! This is the user-facing log output. Internal diagnostics of the crate go
//! through `tracing` instead.
pub mod level;
pub mod logger;

pub use level::{log_levels, Level, ParseLevelError};
pub use logger::{format_line, log, log_debug, log_error, log_info, log_warn, Logger};
