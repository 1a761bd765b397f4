//! This library provides a simple, `Condvar` based single-slot future for deferred operations.
//!
//! A [`Task`] owns a deferred zero-argument operation and is handed to whatever executor runs it. The matching
//! [`Future`] is handed to one or more consumers, which block with a bounded deadline until the operation's value or
//! failure arrives:
//!
//! ```
//! use std::{thread, time::Duration};
//!
//! let (task, future) = callable_future::new(|| Ok::<_, String>(42));
//! thread::spawn(move || task.run());
//!
//! assert_eq!(future.get_timeout(Duration::from_secs(5)), Ok(42));
//! ```
//!
//! A timeout never interrupts the operation; it only reports that the outcome is not known yet. The outcome is
//! deposited into a single slot and can be retrieved exactly once.

mod error;
mod future;
mod slot;
mod task;

pub use crate::{
    error::Error,
    future::{Future, DEFAULT_TIMEOUT},
    task::{Job, Operation, Task},
};
use crate::slot::Slot;
use std::sync::Arc;

/// Creates a new task/future pair for `operation`
pub fn new<T, E, F>(operation: F) -> (Task<T, E>, Future<T, E>)
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
{
    let slot = Arc::new(Slot::new());
    (Task::new(Box::new(operation), Arc::clone(&slot)), Future::new(slot))
}

/// Creates a new task/future pair for an operation that may be absent
///
/// An absent operation resolves to `Ok(T::default())` once the task is run.
pub fn new_optional<T, E, F>(operation: Option<F>) -> (Task<T, E>, Future<T, E>)
where
    T: Default + 'static,
    E: 'static,
    F: FnOnce() -> Result<T, E> + Send + 'static,
{
    match operation {
        Some(operation) => new(operation),
        None => new_empty(),
    }
}

/// Creates a new task/future pair without an operation; the task resolves to `Ok(T::default())`
pub fn new_empty<T, E>() -> (Task<T, E>, Future<T, E>)
where
    T: Default + 'static,
    E: 'static,
{
    new(|| {
        tracing::debug!("Resolving absent operation to the empty value");
        Ok(T::default())
    })
}
