//! Token-based timestamp formatting for generated filenames.
//!
//! Recognized tokens (case-sensitive): `YYYY`, `MM`, `DD`, `HH`, `mm`, `ss`, `SSS`.
//! Everything else in the pattern is copied through unchanged.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// Pattern used when the caller does not supply one.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "YYYYMMDD_HHmmss";

/// Longest tokens first so `SSS` is never read as something shorter.
const TOKENS: &[&str] = &["YYYY", "SSS", "MM", "DD", "HH", "mm", "ss"];

/// Formats the current local time with `pattern`.
pub fn format(pattern: &str) -> String {
    format_at(pattern, &Local::now())
}

/// Formats `at` with `pattern`.
///
/// The pattern is scanned once from left to right, so substituted digits are
/// never re-read as tokens and every occurrence of a token is replaced.
pub fn format_at<Tz: TimeZone>(pattern: &str, at: &DateTime<Tz>) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;
    while !rest.is_empty() {
        match TOKENS.iter().find(|t| rest.starts_with(**t)) {
            Some(token) => {
                out.push_str(&render(token, at));
                rest = &rest[token.len()..];
            }
            None => {
                let c = rest.chars().next().unwrap_or_default();
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

fn render<Tz: TimeZone>(token: &str, at: &DateTime<Tz>) -> String {
    match token {
        "YYYY" => format!("{:04}", at.year()),
        "MM" => format!("{:02}", at.month()),
        "DD" => format!("{:02}", at.day()),
        "HH" => format!("{:02}", at.hour()),
        "mm" => format!("{:02}", at.minute()),
        "ss" => format!("{:02}", at.second()),
        // Leap seconds report up to 1999ms; clamp to three digits.
        "SSS" => format!("{:03}", at.timestamp_subsec_millis().min(999)),
        _ => token.to_string(),
    }
}
