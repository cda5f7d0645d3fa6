use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::{Error, Result};

/// Heap entry ordered by priority, then by insertion sequence
#[derive(Debug)]
struct Entry<V, P> {
    priority: P,
    seq: u64,
    value: V,
}

impl<V, P: PartialOrd> Entry<V, P> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<V, P: PartialOrd> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl<V, P: PartialOrd> Eq for Entry<V, P> {}

impl<V, P: PartialOrd> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: PartialOrd> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_cmp(other)
    }
}

/// A min-priority queue backed by `BinaryHeap`.
///
/// Entries with equal priority come out in the order they were pushed.
/// Sequence numbers are unique per queue, so no two entries ever compare
/// equal and the heap order is fully deterministic.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    P: PartialOrd,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<Entry<V, P>>>,
    /// Sequence number handed to the next pushed entry
    next_seq: u64,
}

impl<V, P> MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Alias of [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Inserts `value` with the given priority
    pub fn push(&mut self, value: V, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            value,
        }));
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// Among equal priorities the earliest pushed entry wins.
    pub fn pop(&mut self) -> Result<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.value, entry.priority))
            .ok_or(Error::EmptyQueue)
    }

    /// Returns the entry `pop` would return, without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.value, entry.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
