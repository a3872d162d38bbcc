//! Output channels backed by `std::io`.

use std::io::{self, Write};

use firmlog::{Error, Result, Target};

/// A [`Target`] forwarding rendered lines to any [`std::io::Write`].
///
/// `open` succeeds without touching the writer, `close` flushes it, and
/// `write` hands over each line as-is. Write errors on the logging path are
/// discarded; a flush failure on close is reported as
/// [`Error::CloseFailed`].
///
/// # Examples
///
/// ```rust
/// use firmlog::Target;
/// use firmlog_std::WriteTarget;
///
/// let mut buffer = Vec::new();
/// let mut target = WriteTarget::new(&mut buffer);
///
/// target.open()?;
/// target.write("[0:00:00:00.000000 INFO] hi\n");
/// target.close()?;
///
/// drop(target);
/// assert_eq!(buffer, b"[0:00:00:00.000000 INFO] hi\n");
/// # Ok::<(), firmlog::Error>(())
/// ```
#[derive(Debug)]
pub struct WriteTarget<W> {
    writer: W,
}

impl<W: Write> WriteTarget<W> {
    /// Creates a target over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteTarget<io::Stdout> {
    /// Creates a target writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriteTarget<io::Stderr> {
    /// Creates a target writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Target for WriteTarget<W> {
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.writer.flush().map_err(|_| Error::CloseFailed)
    }

    fn write(&mut self, line: &str) {
        let _ = self.writer.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lines_reach_the_writer_unchanged() {
        let mut target = WriteTarget::new(Vec::new());

        target.open().unwrap();
        target.write("one\n");
        target.write("two\n");
        target.close().unwrap();

        assert_eq!(target.into_inner(), b"one\ntwo\n");
    }

    #[test]
    fn close_failure_is_reported() {
        struct FailingFlush;

        impl Write for FailingFlush {
            fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
                Ok(buffer.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::other("channel gone"))
            }
        }

        let mut target = WriteTarget::new(FailingFlush);
        assert_eq!(target.close(), Err(Error::CloseFailed));
    }
}
