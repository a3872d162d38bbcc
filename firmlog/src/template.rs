//! Rendering of the log-line template.
//!
//! A template is scanned left to right; `%` followed by a recognized letter
//! expands to a field, anything else is copied through unchanged. Unknown
//! specifiers (and a trailing lone `%`) pass through verbatim, so a typo in a
//! template never loses a log line.

use core::fmt;

use crate::level::LogLevel;
use crate::time::Timestamp;

/// The template used when the caller configures none.
pub const DEFAULT_TEMPLATE: &str = "[%D:%H:%M:%S.%U %N %L] %T";

/// The per-emission values substituted into a template.
pub(crate) struct Fields<'a> {
    pub name: &'a str,
    pub level: LogLevel,
    pub message: &'a str,
    pub timestamp: Timestamp,
}

/// Renders one line by substituting `fields` into `template`.
///
/// The name and message expand as-is; separators around them belong to the
/// template, the way [`DEFAULT_TEMPLATE`] spaces its name segment. All
/// numeric fields except the day count are zero-padded to fixed width.
pub(crate) fn render(
    template: &str,
    fields: &Fields<'_>,
    out: &mut impl fmt::Write,
) -> fmt::Result {
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.write_char(ch)?;
            continue;
        }

        match chars.next() {
            Some('N') => out.write_str(fields.name)?,
            Some('L') => out.write_str(fields.level.as_str())?,
            Some('T') => out.write_str(fields.message)?,
            Some('D') => write!(out, "{}", fields.timestamp.days())?,
            Some('H') => write!(out, "{:02}", fields.timestamp.hour_of_day())?,
            Some('M') => write!(out, "{:02}", fields.timestamp.minute_of_hour())?,
            Some('S') => write!(out, "{:02}", fields.timestamp.second_of_minute())?,
            Some('U') => write!(out, "{:06}", fields.timestamp.subsec_micros())?,
            Some(other) => {
                out.write_char('%')?;
                out.write_char(other)?;
            }
            // Trailing lone `%`.
            None => out.write_char('%')?,
        }
    }

    Ok(())
}
