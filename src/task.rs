//! Implements the producer half

use crate::slot::Slot;
use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

/// A deferred zero-argument operation
pub type Operation<T, E> = Box<dyn FnOnce() -> Result<T, E> + Send + 'static>;

/// A type-erased unit of work that an executor can queue regardless of the result type
pub trait Job: Send {
    /// Runs the job
    fn run_boxed(self: Box<Self>);
}

/// The producer half of a future; owns the deferred operation
pub struct Task<T, E> {
    /// The deferred operation, taken once it runs
    operation: Option<Operation<T, E>>,
    /// The slot the outcome is deposited into
    slot: Arc<Slot<Result<T, E>>>,
}
impl<T, E> Task<T, E> {
    /// Creates a new task
    pub(crate) fn new(operation: Operation<T, E>, slot: Arc<Slot<Result<T, E>>>) -> Self {
        Self { operation: Some(operation), slot }
    }

    /// Runs the deferred operation on the calling thread and deposits its outcome
    ///
    /// This never blocks on consumers, even if none is waiting or all of them have already timed out. If the
    /// operation panics, the panic propagates and no outcome is deposited.
    pub fn run(mut self) {
        // Always `Some` here; the `Option` only lets `Drop` tell whether the task has run
        let Some(operation) = self.operation.take() else {
            return;
        };

        let outcome = operation();
        if outcome.is_err() {
            tracing::debug!("Deferred operation reported a failure");
        }

        tracing::trace!(ok = outcome.is_ok(), "Depositing outcome");
        self.slot.deposit(outcome);
    }
}
impl<T, E> Job for Task<T, E>
where
    T: Send,
    E: Send,
{
    fn run_boxed(self: Box<Self>) {
        (*self).run();
    }
}
impl<T, E> Debug for Task<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let operation = self.operation.as_ref().map(|_| "<opaque>");
        f.debug_struct("Task").field("operation", &operation).field("slot", &self.slot).finish()
    }
}
impl<T, E> Drop for Task<T, E> {
    fn drop(&mut self) {
        if self.operation.is_some() {
            tracing::warn!("Task dropped without being run; waiting consumers will time out");
        }
    }
}
