//! The logging engine.

use core::fmt;
use core::fmt::Write as _;

use heapless::String;

use crate::error::Result;
use crate::level::LogLevel;
use crate::target::Target;
use crate::template::{self, DEFAULT_TEMPLATE, Fields};
use crate::throttle::{SiteId, ThrottleMap};
use crate::time::{Clock, Timestamp};

/// A leveled, templated logger over an injected [`Target`] and [`Clock`].
///
/// The logger owns its capabilities exclusively and performs no locking; if
/// several execution contexts share one instance, the embedding system must
/// serialize access externally (mask interrupts, take a mutex). Every
/// operation either completes synchronously or is skipped by a filter check
/// before any side effect occurs.
///
/// `LINE_CAPACITY` bounds both the rendered message and the final line; a
/// log call whose output would exceed it is dropped whole. Lines never touch
/// the heap. `THROTTLE_CAPACITY` sizes the throttle table and must be a
/// power of two; once it is full, additional throttled sites emit
/// unthrottled.
///
/// # Examples
///
/// ```rust
/// use firmlog::{Callbacks, LogLevel, Logger};
///
/// let target = Callbacks {
///     open: || Ok(()),
///     close: || Ok(()),
///     print: |line: &str| print!("{line}"),
/// };
///
/// let mut logger: Logger<_, _> = Logger::builder(target, || 1_500_000u64)
///     .name("Core")
///     .level(LogLevel::Warning)
///     .build();
///
/// logger.open()?;
/// firmlog::error!(logger, "voltage sag on rail {}", 3);
/// # Ok::<(), firmlog::Error>(())
/// ```
#[derive(Debug)]
pub struct Logger<
    T: Target,
    C: Clock,
    const LINE_CAPACITY: usize = 256,
    const THROTTLE_CAPACITY: usize = 16,
> {
    target: T,
    clock: C,
    name: &'static str,
    template: &'static str,
    level: LogLevel,
    is_open: bool,
    throttle: ThrottleMap<THROTTLE_CAPACITY>,
}

impl<T, C, const LINE_CAPACITY: usize, const THROTTLE_CAPACITY: usize>
    Logger<T, C, LINE_CAPACITY, THROTTLE_CAPACITY>
where
    T: Target,
    C: Clock,
{
    /// Creates a logger with an empty name, the default template
    /// ([`DEFAULT_TEMPLATE`]), and an [`Info`][LogLevel::Info] threshold.
    ///
    /// The logger starts closed; call [`open`][Self::open] before logging.
    pub fn new(target: T, clock: C) -> Self {
        Self::builder(target, clock).build()
    }

    /// Returns a [`Builder`] for a logger over the given capabilities.
    pub fn builder(target: T, clock: C) -> Builder<T, C, LINE_CAPACITY, THROTTLE_CAPACITY> {
        Builder {
            target,
            clock,
            name: "",
            template: DEFAULT_TEMPLATE,
            level: LogLevel::Info,
        }
    }

    /// Opens the output channel.
    ///
    /// On success the logger accepts log calls until closed. Calling `open`
    /// on an already-open logger returns `Ok(())` without re-invoking
    /// [`Target::open`], so underlying hardware is never initialized twice.
    pub fn open(&mut self) -> Result<()> {
        if self.is_open {
            return Ok(());
        }

        self.target.open()?;
        self.is_open = true;
        Ok(())
    }

    /// Closes the output channel.
    ///
    /// On success subsequent log calls become no-ops until reopened. On
    /// failure the logger remains open and the error is returned. Calling
    /// `close` on an already-closed logger returns `Ok(())` without
    /// re-invoking [`Target::close`].
    pub fn close(&mut self) -> Result<()> {
        if !self.is_open {
            return Ok(());
        }

        self.target.close()?;
        self.is_open = false;
        Ok(())
    }

    /// Returns whether the output channel is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the current emission threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Reassigns the emission threshold, effective from the next log call.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Returns the configured display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Emits a message at `level`.
    ///
    /// A no-op if the logger is closed or `level` is below the current
    /// threshold. Otherwise the message is rendered, given a trailing
    /// newline, substituted into the template, and handed to
    /// [`Target::write`] exactly once. A message or line that overflows
    /// `LINE_CAPACITY` is dropped whole; no partial output reaches the
    /// target.
    ///
    /// Prefer the [`log!`][crate::log!]/[`info!`][crate::info!] macro
    /// family, which applies `format_args!` for you.
    pub fn log(&mut self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.accepts(level) {
            return;
        }

        let now = self.clock.now();
        self.emit(level, now, args);
    }

    /// Emits a message at `level`, rate-limited per call site.
    ///
    /// Gated exactly like [`log`][Self::log]. In addition, `site` emits only
    /// if it has never emitted before or more than `min_interval_ms` has
    /// elapsed since its last emission. The window restarts only on an
    /// actual emission, so a burst yields one line per window.
    ///
    /// The clock is sampled once; the same sample drives the window check
    /// and the rendered timestamp.
    pub fn log_throttled(
        &mut self,
        site: SiteId,
        min_interval_ms: u32,
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) {
        if !self.accepts(level) {
            return;
        }

        let now = self.clock.now();
        if !self.throttle.ready(site, now, min_interval_ms) {
            return;
        }

        if self.emit(level, now, args) {
            self.throttle.record(site, now);
        }
    }

    fn accepts(&self, level: LogLevel) -> bool {
        self.is_open && level >= self.level
    }

    /// Renders and writes one line; returns whether the target received it.
    fn emit(&mut self, level: LogLevel, now: Timestamp, args: fmt::Arguments<'_>) -> bool {
        let mut message: String<LINE_CAPACITY> = String::new();
        if write!(message, "{args}").is_err() || message.push('\n').is_err() {
            return false;
        }

        let fields = Fields {
            name: self.name,
            level,
            message: &message,
            timestamp: now,
        };

        let mut line: String<LINE_CAPACITY> = String::new();
        if template::render(self.template, &fields, &mut line).is_err() {
            return false;
        }

        self.target.write(&line);
        true
    }
}

impl<T, C, const LINE_CAPACITY: usize, const THROTTLE_CAPACITY: usize> Drop
    for Logger<T, C, LINE_CAPACITY, THROTTLE_CAPACITY>
where
    T: Target,
    C: Clock,
{
    /// Closes the channel if it is still open.
    ///
    /// [`Target::close`] is invoked at most once across
    /// [`close`][Self::close] and drop, and not at all if the logger was
    /// already closed. A shutdown failure has nowhere to be reported here
    /// and is discarded.
    fn drop(&mut self) {
        if self.is_open {
            let _ = self.target.close();
        }
    }
}

/// Builder for a [`Logger`], created via [`Logger::builder`].
///
/// # Examples
///
/// ```rust
/// use firmlog::{Callbacks, LogLevel, Logger};
///
/// let target = Callbacks {
///     open: || Ok(()),
///     close: || Ok(()),
///     print: |line: &str| print!("{line}"),
/// };
///
/// let logger: Logger<_, _> = Logger::builder(target, || 0u64)
///     .name("Imu")
///     .template("%N%L %T")
///     .level(LogLevel::Debug)
///     .build();
///
/// assert_eq!(logger.name(), "Imu");
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
#[derive(Debug)]
#[must_use]
pub struct Builder<
    T,
    C,
    const LINE_CAPACITY: usize = 256,
    const THROTTLE_CAPACITY: usize = 16,
> {
    target: T,
    clock: C,
    name: &'static str,
    template: &'static str,
    level: LogLevel,
}

impl<T, C, const LINE_CAPACITY: usize, const THROTTLE_CAPACITY: usize>
    Builder<T, C, LINE_CAPACITY, THROTTLE_CAPACITY>
where
    T: Target,
    C: Clock,
{
    /// Sets the display name rendered by the `%N` specifier.
    ///
    /// The name expands as-is; separators around it belong to the template,
    /// the way [`DEFAULT_TEMPLATE`] spaces its name segment.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sets the line template (see [`DEFAULT_TEMPLATE`] for the default).
    pub fn template(mut self, template: &'static str) -> Self {
        self.template = template;
        self
    }

    /// Sets the initial emission threshold.
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Builds the logger. The logger starts closed.
    pub fn build(self) -> Logger<T, C, LINE_CAPACITY, THROTTLE_CAPACITY> {
        Logger {
            target: self.target,
            clock: self.clock,
            name: self.name,
            template: self.template,
            level: self.level,
            is_open: false,
            throttle: ThrottleMap::new(),
        }
    }
}
