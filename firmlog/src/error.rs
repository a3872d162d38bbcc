/// A result with the [`Error`] error.
pub type Result<T> = core::result::Result<T, Error>;

/// An error reported by an injected output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The output channel failed to initialize.
    OpenFailed,
    /// The output channel failed to shut down cleanly.
    CloseFailed,
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OpenFailed => write!(f, "failed to open the output channel"),
            Error::CloseFailed => write!(f, "failed to close the output channel"),
        }
    }
}
