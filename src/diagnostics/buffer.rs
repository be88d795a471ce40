// SPDX-License-Identifier: MPL-2.0
//! Ring buffer for diagnostic event storage.
//!
//! Memory stays bounded no matter how long the host runs: once full, each
//! new event evicts the oldest one.

use crate::domain::BufferCapacity;
use std::collections::VecDeque;

/// A fixed-capacity ring buffer, oldest element first.
///
/// # Example
///
/// ```
/// use toastline::diagnostics::CircularBuffer;
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(2);
/// buffer.push(1);
/// buffer.push(2);
/// assert_eq!(buffer.push(3), Some(1));
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1).
    ///
    /// Handy for tests that want to observe eviction with a few items.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an item and returns the one it evicted, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Most recent item.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_evicts_oldest_and_returns_it() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        assert_eq!(buffer.push(1), None);
        assert_eq!(buffer.push(2), None);
        assert_eq!(buffer.push(3), None);
        assert_eq!(buffer.push(4), Some(1));

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.last(), Some(&4));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(32));
        buffer.push(1);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 32);
    }
}
