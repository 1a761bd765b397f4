//! Implements the retrieval error

use thiserror::Error;

/// An error returned when retrieving the outcome of a future
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error<E> {
    /// The deferred operation itself reported a failure
    #[error("operation failed: {0}")]
    Operation(E),
    /// No outcome was available within the requested deadline
    ///
    /// This does not mean the operation failed; it may still complete and deposit its outcome later.
    #[error("timed out waiting for the result")]
    Timeout,
}
impl<E> Error<E> {
    /// Whether the error is a timeout
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns the operation's failure, or `None` for a timeout
    pub fn into_operation(self) -> Option<E> {
        match self {
            Self::Operation(error) => Some(error),
            Self::Timeout => None,
        }
    }
}
