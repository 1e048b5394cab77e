//! An array-backed binary min-heap keyed by `f64` priority.
//!
//! Entries with equal priority leave the heap in the order they were pushed,
//! which keeps searches built on it deterministic. There is no decrease-key:
//! callers push a fresh entry when a priority improves and skip stale ones
//! on extraction.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    value: T,
}

impl<T> Entry<T> {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Binary min-heap stored in a `Vec`, with the root at index zero and the
/// children of slot `i` at `2i + 1` and `2i + 2`.
///
/// # Examples
/// ```
/// use courier_planner::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push(3.0, "c");
/// heap.push(1.0, "a");
/// heap.push(1.0, "b");
/// assert_eq!(heap.pop(), Some((1.0, "a")));
/// assert_eq!(heap.pop(), Some((1.0, "b")));
/// assert_eq!(heap.pop(), Some((3.0, "c")));
/// assert!(heap.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    /// Create an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Insert `value` with `priority`.
    pub fn push(&mut self, priority: f64, value: T) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        self.entries.push(Entry {
            priority,
            seq,
            value,
        });
        self.sift_up(self.entries.len().saturating_sub(1));
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<(f64, T)> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let top = self.entries.pop()?;
        self.sift_down(0);
        Some((top.priority, top.value))
    }

    /// Lowest priority currently queued.
    #[must_use]
    pub fn peek_priority(&self) -> Option<f64> {
        self.entries.first().map(|entry| entry.priority)
    }

    /// Number of queued entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        match (self.entries.get(a), self.entries.get(b)) {
            (Some(left), Some(right)) => left.cmp_key(right).is_lt(),
            _ => false,
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) >> 1;
            if !self.precedes(idx, parent) {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = idx.saturating_mul(2).saturating_add(1);
            let right = left.saturating_add(1);
            let mut smallest = idx;
            if self.precedes(left, smallest) {
                smallest = left;
            }
            if self.precedes(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.entries.swap(idx, smallest);
            idx = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn drain<T>(mut heap: MinHeap<T>) -> Vec<(f64, T)> {
        std::iter::from_fn(|| heap.pop()).collect()
    }

    #[rstest]
    fn pops_in_ascending_priority() {
        let mut heap = MinHeap::new();
        for (priority, value) in [(5.0, 'e'), (1.0, 'a'), (4.0, 'd'), (2.0, 'b'), (3.0, 'c')] {
            heap.push(priority, value);
        }
        let order: String = drain(heap).into_iter().map(|(_, v)| v).collect();
        assert_eq!(order, "abcde");
    }

    #[rstest]
    fn equal_priorities_leave_in_push_order() {
        let mut heap = MinHeap::new();
        for value in 0..10 {
            heap.push(7.0, value);
        }
        heap.push(1.0, 99);
        let values: Vec<i32> = drain(heap).into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![99, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[rstest]
    fn stale_duplicates_are_kept_until_popped() {
        let mut heap = MinHeap::new();
        heap.push(9.0, "x");
        heap.push(2.0, "x");
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek_priority(), Some(2.0));
        assert_eq!(heap.pop(), Some((2.0, "x")));
        assert_eq!(heap.pop(), Some((9.0, "x")));
        assert_eq!(heap.pop(), None);
    }

    #[rstest]
    fn interleaved_pushes_and_pops_stay_ordered() {
        let mut heap = MinHeap::new();
        heap.push(4.0, 4);
        heap.push(2.0, 2);
        assert_eq!(heap.pop(), Some((2.0, 2)));
        heap.push(1.0, 1);
        heap.push(3.0, 3);
        let rest: Vec<i32> = drain(heap).into_iter().map(|(_, v)| v).collect();
        assert_eq!(rest, vec![1, 3, 4]);
    }
}
