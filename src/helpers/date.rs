//! Locale-aware calendar date formatting.
//!
//! The host locale is taken from the usual POSIX variables, so output follows
//! whatever the user's environment would show for a plain date.
use crate::error::UtilError;
use chrono::{DateTime, FixedOffset, Locale, TimeZone};
use std::fmt::Display;

/// Environment variables consulted for the date locale, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

const FALLBACK_LOCALE: Locale = Locale::en_US;

/// Formats `date` as a calendar date using the host locale.
pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_date_in(date, detect_locale())
}

/// Formats `date` using the locale's preferred date representation (`%x`).
pub fn format_date_in<Tz>(date: &DateTime<Tz>, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let formatted = date.format_localized("%x", locale).to_string();
    if formatted.is_empty() {
        // Some locales leave d_fmt blank.
        date.format("%Y-%m-%d").to_string()
    } else {
        formatted
    }
}

/// Resolves the date locale from `LC_ALL`, `LC_TIME` and `LANG`.
pub fn detect_locale() -> Locale {
    locale_from_vars(|key| std::env::var(key).ok())
}

fn locale_from_vars(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    LOCALE_VARS
        .iter()
        .filter_map(|key| lookup(*key))
        .find(|value| !value.trim().is_empty())
        .and_then(|value| parse_locale(&value))
        .unwrap_or(FALLBACK_LOCALE)
}

/// Parses a locale name such as `de_DE.UTF-8`, `fr-FR` or `C`.
///
/// Encoding and modifier suffixes are ignored. Returns `None` for names the
/// locale tables do not know.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let base = name
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    match base.as_str() {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        other => Locale::try_from(other).ok(),
    }
}

/// Parses an RFC 3339 timestamp supplied on the command line.
pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>, UtilError> {
    DateTime::parse_from_rfc3339(input.trim()).map_err(|source| UtilError::Timestamp {
        input: input.to_string(),
        source,
    })
}

/// Like [`parse_locale`], but reports unknown names as an error.
pub fn require_locale(name: &str) -> Result<Locale, UtilError> {
    parse_locale(name).ok_or_else(|| UtilError::Locale(name.to_string()))
}
