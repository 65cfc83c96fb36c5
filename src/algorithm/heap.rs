//! Fixed-capacity binary min-heap keyed on non-negative priorities
//!
//! Entries are stored in a flat vector where the children of position `i`
//! live at `2i + 1` and `2i + 2`. Public positions used by [`PriorityQueue::compare`]
//! are 1-based, so the root is position 1 and its children are 2 and 3.

use std::cmp::Ordering;
use std::fmt::Display;

use num_traits::Zero;

use crate::io::configuration::QUEUE_PREALLOC_ENTRIES;
use crate::io::error::{Result, SearchError};

/// One unit of enqueued work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<P> {
    /// Extraction key, lower comes out first
    pub priority: P,
    /// Opaque payload, a cell index during grid search
    pub payload: usize,
}

/// Bounded min-heap priority queue
///
/// Capacity is fixed at construction. Enqueueing past it fails without
/// touching the queue, as does enqueueing a negative priority.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P> {
    entries: Vec<HeapEntry<P>>,
    capacity: usize,
}

impl<P> Default for PriorityQueue<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            capacity: 0,
        }
    }
}

impl<P> PriorityQueue<P>
where
    P: Copy + Ord + Zero + Display,
{
    /// Create an empty queue that holds at most `capacity` entries
    ///
    /// Storage grows on demand; only the first `QUEUE_PREALLOC_ENTRIES`
    /// slots are reserved up front, so any capacity is accepted.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(QUEUE_PREALLOC_ENTRIES)),
            capacity,
        }
    }

    /// Number of entries currently queued
    pub const fn size(&self) -> usize {
        self.entries.len()
    }

    /// Alias of [`PriorityQueue::size`]
    pub const fn len(&self) -> usize {
        self.size()
    }

    /// Test if nothing is queued
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert a payload with the given priority
    ///
    /// The new entry is appended as a leaf and sifted up while it is strictly
    /// smaller than its parent, so equal priorities keep insertion order
    /// along any root path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPriority` for a negative priority and `QueueFull` when
    /// the queue is at capacity; the queue is unchanged in both cases
    pub fn enqueue(&mut self, payload: usize, priority: P) -> Result<()> {
        if priority < P::zero() {
            return Err(SearchError::InvalidPriority {
                value: priority.to_string(),
            });
        }
        if self.entries.len() >= self.capacity {
            return Err(SearchError::QueueFull {
                capacity: self.capacity,
            });
        }

        self.entries.push(HeapEntry { priority, payload });
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Minimum-priority entry without removing it
    pub fn peek_min(&self) -> Option<HeapEntry<P>> {
        self.entries.first().copied()
    }

    /// Remove and return the minimum-priority entry
    pub fn dequeue_min(&mut self) -> Option<HeapEntry<P>> {
        if self.entries.is_empty() {
            return None;
        }
        let root = self.entries.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    /// Compare the priorities at two 1-based positions
    ///
    /// Returns `None` if either position is outside `1..=size`.
    pub fn compare(&self, a: usize, b: usize) -> Option<Ordering> {
        let left = self.entries.get(a.checked_sub(1)?)?;
        let right = self.entries.get(b.checked_sub(1)?)?;
        Some(left.priority.cmp(&right.priority))
    }

    /// Entries in heap order, root first
    pub fn entries(&self) -> &[HeapEntry<P>] {
        &self.entries
    }

    fn priority_at(&self, index: usize) -> Option<P> {
        self.entries.get(index).map(|entry| entry.priority)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            match (self.priority_at(index), self.priority_at(parent)) {
                (Some(child), Some(above)) if child < above => {
                    self.entries.swap(index, parent);
                    index = parent;
                }
                _ => break,
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            let Some(left_priority) = self.priority_at(left) else {
                break;
            };
            // Ties go to the left child
            let (child, child_priority) = match self.priority_at(right) {
                Some(right_priority) if right_priority < left_priority => (right, right_priority),
                _ => (left, left_priority),
            };

            match self.priority_at(index) {
                Some(moved) if moved > child_priority => {
                    self.entries.swap(index, child);
                    index = child;
                }
                _ => break,
            }
        }
    }
}
