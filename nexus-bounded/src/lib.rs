//! A fixed-capacity MPMC queue with blocking pops and drop-oldest overflow.
//!
//! [`BoundedQueue`] is a ring buffer behind a single mutex. Any number of
//! threads may push and pop concurrently through a shared reference.
//!
//! # Overflow Policy
//!
//! Pushes never block and never fail. When the queue is full, the oldest
//! element is evicted to make room:
//!
//! ```text
//! capacity = 2
//!
//! push(1)  ->  [1]
//! push(2)  ->  [1, 2]
//! push(3)  ->  [2, 3]     1 is dropped
//! pop()    ->  2
//! pop()    ->  3
//! ```
//!
//! [`BoundedQueue::push`] drops the evicted element silently.
//! [`BoundedQueue::push_evicting`] hands it back instead.
//!
//! # Blocking
//!
//! Consumers wait on a condition variable that every push signals:
//!
//! ```text
//! Consumer:                        Producer:
//! ─────────────────────            ─────────────────────
//! lock()
//! ring empty -> wait(not_empty)
//!   [lock released]                lock()
//!                                  ring.push(value)
//!                                  unlock()
//!                                  notify_one(not_empty)
//!   [lock reacquired]
//! ring.pop() -> value
//! unlock()
//! ```
//!
//! The emptiness check and the wait happen under the same lock, so a push
//! cannot slip between them and be missed. Every wakeup re-checks the ring,
//! so spurious wakeups are harmless.
//!
//! [`BoundedQueue::pop_with_timeout`] computes one absolute deadline on the
//! monotonic clock and waits against it. Spurious wakeups never extend it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use std::time::Duration;
//!
//! use nexus_bounded::{BoundedQueue, PopTimeoutError};
//!
//! let queue = Arc::new(BoundedQueue::new(4));
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         for i in 0..4 {
//!             queue.push(i);
//!         }
//!     })
//! };
//!
//! for i in 0..4 {
//!     assert_eq!(queue.pop(), i);
//! }
//! producer.join().unwrap();
//!
//! assert_eq!(
//!     queue.pop_with_timeout(Duration::from_millis(10)),
//!     Err(PopTimeoutError)
//! );
//! ```
//!
//! # When to Use This
//!
//! Use `nexus_bounded` when:
//! - Several threads produce and several consume
//! - Producers must never stall, and losing the oldest data is acceptable
//! - Consumers want to sleep, not spin, while the queue is empty
//!
//! Consider alternatives when:
//! - Every message must be delivered → use `crossbeam-channel`'s `bounded`
//! - Exactly one producer and one consumer → a lock-free SPSC ring is faster
//! - You need async/await → use `tokio::sync::mpsc`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod queue;
mod ring;

pub use error::{InvalidCapacity, PopTimeoutError};
pub use queue::BoundedQueue;
