//! # `firmlog-std`
//!
//! Standard-library implementations of the [`firmlog`] capability seams, for
//! hosted targets, examples, and tests: output channels over anything
//! [`std::io::Write`] and a process-relative monotonic clock.
//!
//! ## Basic Usage
//!
//! ```rust
//! use firmlog::Logger;
//! use firmlog_std::{SystemClock, WriteTarget};
//!
//! let mut logger: Logger<_, _> = Logger::builder(WriteTarget::stdout(), SystemClock::new())
//!     .name("Host")
//!     .build();
//!
//! logger.open()?;
//! firmlog::info!(logger, "hello from the host");
//! # Ok::<(), firmlog::Error>(())
//! ```

pub mod target;
pub mod time;

pub use target::WriteTarget;
pub use time::SystemClock;
