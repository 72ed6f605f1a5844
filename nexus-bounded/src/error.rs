use thiserror::Error;

/// Error returned by [`BoundedQueue::pop_with_timeout`] and
/// [`BoundedQueue::pop_until`] when the queue stayed empty until the deadline.
///
/// The queue is left untouched; callers may retry with a fresh deadline.
///
/// [`BoundedQueue::pop_with_timeout`]: crate::BoundedQueue::pop_with_timeout
/// [`BoundedQueue::pop_until`]: crate::BoundedQueue::pop_until
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pop: queue is empty")]
pub struct PopTimeoutError;

/// Error returned by [`BoundedQueue::try_new`] for a zero capacity.
///
/// [`BoundedQueue::try_new`]: crate::BoundedQueue::try_new
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("capacity must be greater than zero")]
pub struct InvalidCapacity;
