//! Implements the single-slot delivery channel

use std::{
    fmt::{self, Debug, Formatter},
    sync::{Condvar, Mutex, MutexGuard, PoisonError, TryLockError},
    time::Instant,
};

/// A slot that holds at most one value and wakes waiting threads once it is filled
pub struct Slot<T> {
    /// The signal variable
    signal: Condvar,
    /// The pending value
    value: Mutex<Option<T>>,
}
impl<T> Slot<T> {
    /// Creates a new, empty slot
    pub fn new() -> Self {
        Self { signal: Condvar::new(), value: Mutex::default() }
    }

    /// Locks the value
    ///
    /// The slot only ever stores or takes a whole value, so a poisoned lock still guards a consistent state.
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deposits a value and wakes all waiting threads; never blocks on consumers
    pub fn deposit(&self, value: T) {
        let mut slot = self.lock();
        debug_assert!(slot.is_none(), "The slot has been filled twice");
        *slot = Some(value);
        self.signal.notify_all();
    }

    /// Whether a value is currently waiting in the slot
    pub fn is_full(&self) -> bool {
        self.lock().is_some()
    }

    /// Drains the value if there is one
    pub fn try_take(&self) -> Option<T> {
        self.lock().take()
    }

    /// Waits until a value can be drained, without a deadline
    pub fn take(&self) -> T {
        let mut slot = self.lock();
        loop {
            if let Some(value) = slot.take() {
                return value;
            }
            slot = self.signal.wait(slot).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Waits until a value can be drained or the deadline is reached
    ///
    /// A value that is present when the deadline expires still wins; `None` is only returned once `deadline` has
    /// passed.
    pub fn take_until(&self, deadline: Instant) -> Option<T> {
        let mut slot = self.lock();
        loop {
            // Claim the value if another consumer has not drained it first
            if let Some(value) = slot.take() {
                return Some(value);
            }

            // Compute the remaining time and wait until the deadline is reached or we are signalled
            let remaining = deadline.checked_duration_since(Instant::now()).filter(|remaining| !remaining.is_zero())?;
            let (lock_result, _) = self.signal.wait_timeout(slot, remaining).unwrap_or_else(PoisonError::into_inner);
            slot = lock_result;
        }
    }
}
impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T> Debug for Slot<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // Get a debug representation for the value
        let value: &dyn Debug = match self.value.try_lock() {
            Ok(value) if value.is_some() => &Some("<opaque>"),
            Ok(_) => &Option::<&str>::None,
            Err(TryLockError::Poisoned(_)) => &"<poisoned>",
            Err(TryLockError::WouldBlock) => &"<locked>",
        };

        // Debug-format the struct
        f.debug_struct("Slot").field("signal", &"<opaque>").field("value", &value).finish()
    }
}
