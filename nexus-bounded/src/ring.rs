//! Fixed-capacity ring storage backing [`BoundedQueue`](crate::BoundedQueue).
//!
//! This type does no synchronization. The queue owns exactly one `Ring`
//! behind its mutex and only touches it while the lock is held.
//!
//! ```text
//! capacity = 4, len = 3, wrapped
//!
//!              tail  head
//!                v     v
//! ┌─────┬─────┬─────┬─────┐
//! │  B  │  C  │  -  │  A  │   A is oldest, C newest
//! └─────┴─────┴─────┴─────┘
//! ```

/// Circular buffer with a fixed number of slots.
///
/// Slots are allocated once in [`Ring::with_capacity`] and never resized.
/// Live elements occupy `[head, head + len)` modulo capacity; every other
/// slot is `None`.
pub(crate) struct Ring<T> {
    slots: Box<[Option<T>]>,
    /// Index of the oldest live element (meaningful while `len > 0`).
    head: usize,
    /// Index the next push writes to.
    tail: usize,
    len: usize,
}

impl<T> Ring<T> {
    /// Allocates `capacity` empty slots.
    ///
    /// Callers guarantee `capacity > 0`.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "ring capacity must be non-zero");

        let slots = std::iter::repeat_with(|| None).take(capacity).collect();

        Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Writes `value` at the tail, evicting the oldest element first if full.
    ///
    /// Returns the evicted element, if any.
    pub(crate) fn push_overwrite(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() { self.pop() } else { None };

        self.slots[self.tail] = Some(value);
        self.tail = self.advance(self.tail);
        self.len += 1;

        evicted
    }

    /// Takes the oldest element, or `None` if the ring is empty.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.head].take();
        debug_assert!(value.is_some(), "live slot at head was vacant");

        self.head = self.advance(self.head);
        self.len -= 1;

        value
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.capacity() { 0 } else { next }
    }
}
