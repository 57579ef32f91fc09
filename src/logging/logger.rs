//! Line-oriented console logger.
//!
//! Every call renders `[<timestamp>] <LEVEL>: <message>` and writes it as one
//! newline-terminated line. Write errors are dropped; logging never fails
//! from the caller's point of view.
use super::Level;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Display;
use std::io::{self, Write};

/// Renders a single log line without the trailing newline.
///
/// The timestamp is ISO-8601 in UTC with millisecond precision, e.g.
/// `2026-10-17T08:30:00.123Z`.
pub fn format_line(timestamp: DateTime<Utc>, level: &str, message: impl Display) -> String {
    format!(
        "[{}] {}: {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        message
    )
}

/// Writes log lines to any [`Write`] sink.
pub struct Logger<W: Write> {
    sink: W,
}

impl<W: Write> Logger<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Writes one line at `level`. The level is printed as given, so labels
    /// outside [`Level`] pass through untouched.
    pub fn log(&mut self, level: impl AsRef<str>, message: impl Display) {
        let mut line = format_line(Utc::now(), level.as_ref(), message);
        line.push('\n');
        let _ = self
            .sink
            .write_all(line.as_bytes())
            .and_then(|_| self.sink.flush());
    }

    pub fn error(&mut self, message: impl Display) {
        self.log(Level::Error, message);
    }

    pub fn warn(&mut self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    pub fn info(&mut self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn debug(&mut self, message: impl Display) {
        self.log(Level::Debug, message);
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

fn stdout_logger() -> Logger<io::StdoutLock<'static>> {
    Logger::new(io::stdout().lock())
}

/// Logs `message` to stdout at `level`.
pub fn log(level: impl AsRef<str>, message: impl Display) {
    stdout_logger().log(level, message);
}

/// Logs `message` to stdout at `ERROR`.
pub fn log_error(message: impl Display) {
    stdout_logger().error(message);
}

/// Logs `message` to stdout at `WARN`.
pub fn log_warn(message: impl Display) {
    stdout_logger().warn(message);
}

/// Logs `message` to stdout at `INFO`.
pub fn log_info(message: impl Display) {
    stdout_logger().info(message);
}

/// Logs `message` to stdout at `DEBUG`.
pub fn log_debug(message: impl Display) {
    stdout_logger().debug(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn capture(f: impl FnOnce(&mut Logger<Vec<u8>>)) -> String {
        let mut logger = Logger::new(Vec::new());
        f(&mut logger);
        String::from_utf8(logger.into_inner()).unwrap()
    }

    /// Splits `[ts] LEVEL: message` and checks the timestamp parses.
    fn split_line(line: &str) -> (DateTime<Utc>, &str) {
        let rest = line.strip_prefix('[').expect("line starts with '['");
        let (ts, tail) = rest.split_once("] ").expect("timestamp is closed");
        assert!(ts.ends_with('Z'), "timestamp not in UTC: {ts}");
        let parsed = DateTime::parse_from_rfc3339(ts).expect("ISO-8601 timestamp");
        (parsed.with_timezone(&Utc), tail)
    }

    #[test]
    fn format_line_layout() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 8, 30, 0).unwrap();
        assert_eq!(
            format_line(ts, "INFO", "hello"),
            "[2026-10-17T08:30:00.000Z] INFO: hello"
        );
    }

    #[test]
    fn writes_exactly_one_line() {
        let before = Utc::now();
        let out = capture(|l| l.log("INFO", "hello"));
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 1);

        let (ts, tail) = split_line(out.trim_end());
        assert_eq!(tail, "INFO: hello");
        // Millisecond truncation can put ts just before `before`.
        assert!(ts >= before - chrono::Duration::milliseconds(1));
        assert!(ts <= Utc::now());
    }

    #[test]
    fn shortcuts_match_explicit_levels() {
        let error = capture(|l| l.error("x"));
        let explicit = capture(|l| l.log("ERROR", "x"));
        assert_eq!(split_line(error.trim_end()).1, split_line(explicit.trim_end()).1);

        let info = capture(|l| l.info("x"));
        let explicit = capture(|l| l.log(Level::Info, "x"));
        assert_eq!(split_line(info.trim_end()).1, split_line(explicit.trim_end()).1);

        assert_eq!(split_line(capture(|l| l.warn("w")).trim_end()).1, "WARN: w");
        assert_eq!(split_line(capture(|l| l.debug("d")).trim_end()).1, "DEBUG: d");
    }

    #[test]
    fn unrecognized_levels_pass_through() {
        let out = capture(|l| l.log("notice", 42));
        assert_eq!(split_line(out.trim_end()).1, "notice: 42");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_swallowed() {
        let mut logger = Logger::new(BrokenPipe);
        logger.error("nobody is listening");
    }

    #[test]
    fn stdout_helpers_do_not_panic() {
        log("INFO", "hello");
        log_error("x");
        log_info("x");
        log_warn("x");
        log_debug("x");
    }
}
