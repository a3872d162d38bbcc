//! Log severity levels and the emission threshold ordering.

use core::fmt;
use core::str::FromStr;

/// Severity of a log message, doubling as the logger's emission threshold.
///
/// Levels are totally ordered by declaration rank. A message is emitted only
/// if its level is greater than or equal to the logger's current threshold,
/// so a threshold of [`LogLevel::Info`] lets everything through while
/// [`LogLevel::None`] suppresses all output.
///
/// # Examples
///
/// ```rust
/// use firmlog::LogLevel;
///
/// assert!(LogLevel::Info < LogLevel::Warning);
/// assert!(LogLevel::Error < LogLevel::Debug);
/// assert!(LogLevel::Debug < LogLevel::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// General runtime information.
    Info,
    /// Potential issues that do not stop the system.
    Warning,
    /// Recoverable errors.
    Error,
    /// Developer diagnostics.
    Debug,
    /// Threshold sentinel that suppresses all output.
    None,
}

impl LogLevel {
    /// Returns the level name as rendered by the `%L` template specifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use firmlog::LogLevel;
    ///
    /// assert_eq!(LogLevel::Warning.as_str(), "WARNING");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing a string into a [`LogLevel`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError(());

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown log level")
    }
}

impl core::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    /// Parses a level name case-insensitively. `WARN` is accepted as a
    /// shorthand for `WARNING`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use firmlog::LogLevel;
    ///
    /// assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
    /// assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warning));
    /// assert!("verbose".parse::<LogLevel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("warning") || s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warning)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else {
            Err(ParseLogLevelError(()))
        }
    }
}
