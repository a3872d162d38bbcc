//! The injected output channel of a logger.

use crate::error::Result;

/// `Target` is the output channel a logger writes rendered lines to.
///
/// Implementations wrap whatever the embedding firmware prints through (a
/// UART, a semihosting console, an in-memory ring) behind three operations
/// the engine calls at well-defined points of the logger lifecycle. All
/// three are opaque to the engine: it never retries and never blocks beyond
/// what the implementation itself does.
pub trait Target {
    /// Initializes the channel.
    ///
    /// Called once per successful [`Logger::open`][crate::Logger::open];
    /// implementations should be idempotent with respect to hardware state.
    fn open(&mut self) -> Result<()>;

    /// Releases or flushes the channel.
    ///
    /// Called by [`Logger::close`][crate::Logger::close] and on drop if the
    /// logger is still open.
    fn close(&mut self) -> Result<()>;

    /// Outputs one fully rendered line, including its trailing newline.
    ///
    /// Invoked synchronously, exactly once per accepted log call.
    fn write(&mut self, line: &str);
}

/// A [`Target`] assembled from three injected closures.
///
/// This covers callers that have free functions or capturing closures for the
/// channel primitives and no reason to define a named type:
///
/// ```rust
/// use firmlog::{Callbacks, Target};
///
/// let mut target = Callbacks {
///     open: || Ok(()),
///     close: || Ok(()),
///     print: |line: &str| assert!(line.ends_with('\n')),
/// };
///
/// assert!(target.open().is_ok());
/// target.write("ready\n");
/// ```
#[derive(Debug)]
pub struct Callbacks<O, C, P> {
    /// Channel initialization, reporting success or failure.
    pub open: O,
    /// Channel shutdown, reporting success or failure.
    pub close: C,
    /// Line output.
    pub print: P,
}

impl<O, C, P> Target for Callbacks<O, C, P>
where
    O: FnMut() -> Result<()>,
    C: FnMut() -> Result<()>,
    P: FnMut(&str),
{
    fn open(&mut self) -> Result<()> {
        (self.open)()
    }

    fn close(&mut self) -> Result<()> {
        (self.close)()
    }

    fn write(&mut self, line: &str) {
        (self.print)(line)
    }
}
