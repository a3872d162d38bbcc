//! Macro frontends over [`Logger::log`][crate::Logger::log] and
//! [`Logger::log_throttled`][crate::Logger::log_throttled].
//!
//! - `log!`: base macro taking an explicit [`LogLevel`][crate::LogLevel]
//! - `info!`, `warning!`, `error!`, `debug!`: per-level frontends
//! - `log_throttled!` and the `*_throttled!` family: rate-limited variants
//!   that fingerprint their own expansion site
//! - `site_id!`: the expansion-site fingerprint on its own
//!
//! All message arguments go through `format_args!`, so anything `Display` or
//! `Debug` formats without an intermediate allocation.

/// Logs a message at an explicit level.
///
/// # Examples
///
/// ```rust
/// use firmlog::{Callbacks, LogLevel, Logger};
///
/// # let target = Callbacks {
/// #     open: || Ok(()),
/// #     close: || Ok(()),
/// #     print: |line: &str| print!("{line}"),
/// # };
/// let mut logger: Logger<_, _> = Logger::new(target, || 0u64);
/// logger.open()?;
///
/// firmlog::log!(logger, LogLevel::Warning, "battery at {}%", 11);
/// # Ok::<(), firmlog::Error>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log($level, ::core::format_args!($($arg)*))
    };
}

/// Logs an informational message.
///
/// # Examples
///
/// ```rust
/// use firmlog::{Callbacks, Logger};
///
/// # let target = Callbacks {
/// #     open: || Ok(()),
/// #     close: || Ok(()),
/// #     print: |line: &str| print!("{line}"),
/// # };
/// let mut logger: Logger<_, _> = Logger::new(target, || 0u64);
/// logger.open()?;
///
/// firmlog::info!(logger, "boot stage {} complete", 2);
/// # Ok::<(), firmlog::Error>(())
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)*)
    };
}

/// Logs a warning.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)*)
    };
}

/// Logs an error.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)*)
    };
}

/// Logs a developer diagnostic.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)*)
    };
}

/// Derives the [`SiteId`][crate::SiteId] of the expansion site.
///
/// # Examples
///
/// ```rust
/// let here = firmlog::site_id!();
/// let also_here = firmlog::site_id!();
///
/// // Different lines, different sites.
/// assert_ne!(here, also_here);
/// ```
#[macro_export]
macro_rules! site_id {
    () => {
        $crate::SiteId::from_location(::core::file!(), ::core::line!())
    };
}

/// Logs a message at an explicit level, rate-limited per expansion site.
///
/// The first argument after the logger is the minimum interval between
/// emissions from this site, in milliseconds.
///
/// # Examples
///
/// ```rust
/// use firmlog::{Callbacks, LogLevel, Logger};
///
/// # let target = Callbacks {
/// #     open: || Ok(()),
/// #     close: || Ok(()),
/// #     print: |line: &str| print!("{line}"),
/// # };
/// let mut logger: Logger<_, _> = Logger::new(target, || 0u64);
/// logger.open()?;
///
/// for reading in [3.29, 3.28, 3.27] {
///     // At most one line per 500 ms from this statement.
///     firmlog::log_throttled!(logger, 500, LogLevel::Warning, "rail at {reading}V");
/// }
/// # Ok::<(), firmlog::Error>(())
/// ```
#[macro_export]
macro_rules! log_throttled {
    ($logger:expr, $interval_ms:expr, $level:expr, $($arg:tt)*) => {
        $logger.log_throttled(
            $crate::site_id!(),
            $interval_ms,
            $level,
            ::core::format_args!($($arg)*),
        )
    };
}

/// Logs an informational message, rate-limited per expansion site.
#[macro_export]
macro_rules! info_throttled {
    ($logger:expr, $interval_ms:expr, $($arg:tt)*) => {
        $crate::log_throttled!($logger, $interval_ms, $crate::LogLevel::Info, $($arg)*)
    };
}

/// Logs a warning, rate-limited per expansion site.
#[macro_export]
macro_rules! warning_throttled {
    ($logger:expr, $interval_ms:expr, $($arg:tt)*) => {
        $crate::log_throttled!($logger, $interval_ms, $crate::LogLevel::Warning, $($arg)*)
    };
}

/// Logs an error, rate-limited per expansion site.
#[macro_export]
macro_rules! error_throttled {
    ($logger:expr, $interval_ms:expr, $($arg:tt)*) => {
        $crate::log_throttled!($logger, $interval_ms, $crate::LogLevel::Error, $($arg)*)
    };
}

/// Logs a developer diagnostic, rate-limited per expansion site.
#[macro_export]
macro_rules! debug_throttled {
    ($logger:expr, $interval_ms:expr, $($arg:tt)*) => {
        $crate::log_throttled!($logger, $interval_ms, $crate::LogLevel::Debug, $($arg)*)
    };
}
