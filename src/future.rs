//! Implements the consumer half

use crate::{error::Error, slot::Slot};
use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
    time::{Duration, Instant},
};

/// The deadline used by [`Future::get`] unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// The consumer half of a future
///
/// Clones share the same single-slot outcome: exactly one retrieval drains it, and every other retrieval waits for its
/// own deadline and reports [`Error::Timeout`].
pub struct Future<T, E> {
    /// The slot the outcome is deposited into
    slot: Arc<Slot<Result<T, E>>>,
    /// The deadline used by `get`
    default_timeout: Duration,
}
impl<T, E> Future<T, E> {
    /// Creates a new future
    pub(crate) const fn new(slot: Arc<Slot<Result<T, E>>>) -> Self {
        Self { slot, default_timeout: DEFAULT_TIMEOUT }
    }

    /// Overrides the deadline used by [`Self::get`]
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Waits for the outcome with the default deadline of 5000 milliseconds (or the configured override)
    pub fn get(&self) -> Result<T, Error<E>> {
        self.get_timeout(self.default_timeout)
    }

    /// Waits until the outcome is available or the timeout is reached
    ///
    /// The deadline is computed fresh on every call. A timeout reports an unknown outcome, not a failure: the
    /// operation keeps running and its outcome stays in the slot for a later call.
    pub fn get_timeout(&self, timeout: Duration) -> Result<T, Error<E>> {
        // Compute an absolute deadline from the timeout
        let deadline = Instant::now().checked_add(timeout);
        let outcome = match deadline {
            Some(deadline) => self.slot.take_until(deadline),
            // Too far in the future to represent; wait until the outcome arrives
            None => Some(self.slot.take()),
        };

        match outcome {
            Some(outcome) => {
                tracing::trace!(ok = outcome.is_ok(), "Drained outcome");
                outcome.map_err(Error::Operation)
            }
            None => {
                tracing::debug!(?timeout, "Timed out waiting for the outcome");
                Err(Error::Timeout)
            }
        }
    }

    /// Drains the outcome if it is already available, without blocking
    pub fn try_get(&self) -> Option<Result<T, Error<E>>> {
        let outcome = self.slot.try_take()?;
        tracing::trace!(ok = outcome.is_ok(), "Drained outcome");
        Some(outcome.map_err(Error::Operation))
    }

    /// Whether an outcome is currently waiting to be drained
    pub fn is_ready(&self) -> bool {
        self.slot.is_full()
    }
}
impl<T, E> Clone for Future<T, E> {
    fn clone(&self) -> Self {
        Self { slot: Arc::clone(&self.slot), default_timeout: self.default_timeout }
    }
}
impl<T, E> Debug for Future<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Future").field("slot", &self.slot).field("default_timeout", &self.default_timeout).finish()
    }
}
