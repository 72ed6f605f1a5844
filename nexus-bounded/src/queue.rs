use core::fmt;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_utils::CachePadded;
use parking_lot::{Condvar, Mutex};

use crate::error::{InvalidCapacity, PopTimeoutError};
use crate::ring::Ring;

/// A fixed-capacity FIFO queue shared by any number of producers and consumers.
///
/// All operations take `&self`. Share the queue with `Arc<BoundedQueue<T>>` or
/// by borrowing it into scoped threads.
///
/// Pushing into a full queue evicts the oldest element instead of blocking.
/// Popping from an empty queue blocks ([`pop`](Self::pop)), blocks up to a
/// deadline ([`pop_with_timeout`](Self::pop_with_timeout),
/// [`pop_until`](Self::pop_until)) or returns immediately
/// ([`try_pop`](Self::try_pop)).
///
/// # Example
///
/// ```
/// use nexus_bounded::BoundedQueue;
///
/// let queue = BoundedQueue::new(2);
///
/// queue.push(1);
/// queue.push(2);
/// queue.push(3); // 1 is dropped
///
/// assert_eq!(queue.pop(), 2);
/// assert_eq!(queue.pop(), 3);
/// assert_eq!(queue.count(), 0);
/// ```
pub struct BoundedQueue<T> {
    ring: CachePadded<Mutex<Ring<T>>>,
    /// Signaled after every push. Waiters re-check the ring on wakeup.
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates a queue holding at most `capacity` elements.
    ///
    /// Storage for every slot is allocated here and never grows. The
    /// capacity is used exactly as given, with no power-of-two rounding.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. Use [`try_new`](Self::try_new) to get an
    /// error instead.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(queue) => queue,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a queue holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCapacity`] if `capacity` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_bounded::{BoundedQueue, InvalidCapacity};
    ///
    /// assert!(BoundedQueue::<u32>::try_new(8).is_ok());
    /// assert_eq!(BoundedQueue::<u32>::try_new(0).unwrap_err(), InvalidCapacity);
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity);
        }

        Ok(Self {
            ring: CachePadded::new(Mutex::new(Ring::with_capacity(capacity))),
            not_empty: Condvar::new(),
            capacity,
        })
    }

    /// Appends `value`, dropping the oldest element if the queue is full.
    ///
    /// Never blocks beyond the critical section and never fails. Wakes at
    /// most one blocked consumer.
    pub fn push(&self, value: T) {
        drop(self.push_evicting(value));
    }

    /// Appends `value`, returning the element it displaced.
    ///
    /// Returns `None` if there was room, or `Some(oldest)` if the queue was
    /// full and its oldest element had to be evicted.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_bounded::BoundedQueue;
    ///
    /// let queue = BoundedQueue::new(2);
    ///
    /// assert_eq!(queue.push_evicting('a'), None);
    /// assert_eq!(queue.push_evicting('b'), None);
    /// assert_eq!(queue.push_evicting('c'), Some('a'));
    /// ```
    pub fn push_evicting(&self, value: T) -> Option<T> {
        let evicted = self.ring.lock().push_overwrite(value);

        if evicted.is_some() {
            tracing::trace!(
                capacity = self.capacity,
                thread = ?thread::current().id(),
                "queue full, dropped oldest element"
            );
        }

        // Lock is already released; the woken consumer re-checks under it.
        self.not_empty.notify_one();
        evicted
    }

    /// Removes the oldest element, blocking until one is available.
    ///
    /// There is no timeout: if nothing is ever pushed, this never returns.
    /// Use [`pop_with_timeout`](Self::pop_with_timeout) for a bounded wait.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::thread;
    ///
    /// use nexus_bounded::BoundedQueue;
    ///
    /// let queue = Arc::new(BoundedQueue::new(4));
    ///
    /// let consumer = {
    ///     let queue = Arc::clone(&queue);
    ///     thread::spawn(move || queue.pop())
    /// };
    ///
    /// queue.push(42);
    /// assert_eq!(consumer.join().unwrap(), 42);
    /// ```
    pub fn pop(&self) -> T {
        let mut ring = self.ring.lock();
        loop {
            if let Some(value) = ring.pop() {
                return value;
            }
            self.not_empty.wait(&mut ring);
        }
    }

    /// Removes the oldest element, waiting at most `timeout` for one to arrive.
    ///
    /// The deadline is fixed on entry and is not extended by spurious
    /// wakeups. A timeout too large to represent as an [`Instant`] waits
    /// forever, like [`pop`](Self::pop).
    ///
    /// # Errors
    ///
    /// Returns [`PopTimeoutError`] if the queue stayed empty for the whole
    /// `timeout`. The queue is unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use nexus_bounded::BoundedQueue;
    ///
    /// let queue = BoundedQueue::<u64>::new(2);
    ///
    /// let err = queue.pop_with_timeout(Duration::from_millis(10)).unwrap_err();
    /// assert_eq!(err.to_string(), "cannot pop: queue is empty");
    /// ```
    pub fn pop_with_timeout(&self, timeout: Duration) -> Result<T, PopTimeoutError> {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.pop_until(deadline),
            None => Ok(self.pop()),
        }
    }

    /// Removes the oldest element, waiting until `deadline` for one to arrive.
    ///
    /// A deadline already in the past still takes an element that is
    /// available right now.
    ///
    /// # Errors
    ///
    /// Returns [`PopTimeoutError`] if the queue is still empty at `deadline`.
    pub fn pop_until(&self, deadline: Instant) -> Result<T, PopTimeoutError> {
        let mut ring = self.ring.lock();
        loop {
            if let Some(value) = ring.pop() {
                return Ok(value);
            }

            if self.not_empty.wait_until(&mut ring, deadline).timed_out() {
                // A push may have landed between the timeout and reacquiring
                // the lock.
                return ring.pop().ok_or_else(|| {
                    tracing::trace!(
                        thread = ?thread::current().id(),
                        "timed pop expired on empty queue"
                    );
                    PopTimeoutError
                });
            }
        }
    }

    /// Removes the oldest element without blocking.
    ///
    /// Returns `None` if the queue is empty.
    pub fn try_pop(&self) -> Option<T> {
        self.ring.lock().pop()
    }

    /// Returns the number of elements currently queued.
    ///
    /// Note: This is a snapshot and may be stale as soon as it returns.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ring.lock().len()
    }

    /// Returns the maximum number of elements the queue holds.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if no elements are queued.
    ///
    /// Note: This is a snapshot and may be stale as soon as it returns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.lock().is_empty()
    }

    /// Returns `true` if the next push will evict.
    ///
    /// Note: This is a snapshot and may be stale as soon as it returns.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ring.lock().is_full()
    }
}

impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity())
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}
