//! # `firmlog`
//!
//! A minimal logging facade for resource-constrained embedded targets.
//!
//! Firmware emits leveled, timestamped, optionally rate-limited text lines
//! through caller-supplied I/O primitives. The crate assumes no operating
//! system, no console, and no clock source: the output channel and the time
//! base are injected as a [`Target`] and a [`Clock`], and the engine itself
//! (level filtering, template rendering, timestamp decomposition, per-site
//! throttling) works in fixed-capacity buffers on the caller's stack.
//!
//! ## Feature Flags
//!
//! - `std` - Enable standard library support. The engine itself never
//!   allocates; this only widens what capability implementations and tests
//!   may use. Hosted targets usually want the `firmlog-std` companion crate
//!   instead.
//!
//! ## Basic Usage
//!
//! Inject the output channel and clock, open the logger, and log through the
//! macro family:
//!
//! ```rust
//! use firmlog::{Callbacks, LogLevel, Logger};
//!
//! let target = Callbacks {
//!     open: || Ok(()),
//!     close: || Ok(()),
//!     print: |line: &str| print!("{line}"),
//! };
//!
//! // Any `FnMut() -> u64` over a monotonic microsecond counter is a clock.
//! let mut logger: Logger<_, _> = Logger::builder(target, || 3_661_000_000u64)
//!     .name("Core")
//!     .level(LogLevel::Info)
//!     .build();
//!
//! logger.open()?;
//! firmlog::info!(logger, "boot complete after {} retries", 0);
//! // Prints: [0:01:01:01.000000 Core INFO] boot complete after 0 retries
//! # Ok::<(), firmlog::Error>(())
//! ```
//!
//! ## Line Templates
//!
//! The line layout is a template scanned for `%`-specifiers ([`Logger`]
//! documents the defaults, [`DEFAULT_TEMPLATE`] the default pattern):
//! `%D`/`%H`/`%M`/`%S`/`%U` expand the decomposed timestamp, `%N` the logger
//! name, `%L` the level name, and `%T` the message. Unrecognized specifiers
//! pass through verbatim rather than losing the line.
//!
//! ## Throttling
//!
//! The `*_throttled!` macros fingerprint their expansion site and cap it to
//! one emission per window:
//!
//! ```rust
//! # use firmlog::{Callbacks, Logger};
//! # let target = Callbacks {
//! #     open: || Ok(()),
//! #     close: || Ok(()),
//! #     print: |line: &str| print!("{line}"),
//! # };
//! # let mut logger: Logger<_, _> = Logger::new(target, || 0u64);
//! # logger.open()?;
//! for _ in 0..1_000 {
//!     // One line per second, no matter how hot the loop.
//!     firmlog::warning_throttled!(logger, 1_000, "sensor saturated");
//! }
//! # Ok::<(), firmlog::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! A [`Logger`] performs no internal locking. If several execution contexts
//! share one instance, the embedding system serializes access externally;
//! masking interrupts or taking a mutex around log calls is the caller's
//! responsibility.

#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(feature = "std")]
extern crate std;

mod error;
mod level;
mod logger;
mod macros;
mod target;
mod template;
mod throttle;
mod time;

pub use error::{Error, Result};
pub use level::{LogLevel, ParseLogLevelError};
pub use logger::{Builder, Logger};
pub use target::{Callbacks, Target};
pub use template::DEFAULT_TEMPLATE;
pub use throttle::SiteId;
pub use time::{Clock, Timestamp};
