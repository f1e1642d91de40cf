//! Bucketed priority queue for pixel work items

use crate::io::error::{Result, try_vec};

/// A pending pixel together with its processing priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkItem {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
    /// Solid-neighbor count or distance, depending on the strategy
    pub priority: u32,
}

impl WorkItem {
    /// Create a work item
    pub const fn new(x: u32, y: u32, priority: u32) -> Self {
        Self { x, y, priority }
    }
}

/// Integer-keyed priority queue filled in batches
///
/// A batch is bucketed by priority with a stable counting sort. Popping takes
/// the highest priority first and, among equal priorities, the item inserted
/// last. Ascending iteration visits the lowest priority first in insertion
/// order. Both orders depend only on the batch contents.
///
/// All storage is reserved on construction; refilling with at most `capacity`
/// items never reallocates.
#[derive(Debug, Clone)]
pub struct BucketQueue {
    ordered: Vec<WorkItem>,
    bucket_starts: Vec<usize>,
    max_priority: u32,
}

impl BucketQueue {
    /// Reserve room for `capacity` items with priorities in `0..=max_priority`
    ///
    /// # Errors
    ///
    /// Returns `Allocation` if either buffer cannot be reserved
    pub fn try_with_capacity(capacity: usize, max_priority: u32) -> Result<Self> {
        let buckets = max_priority as usize + 1;
        let ordered = try_vec(capacity, "work queue")?;
        let mut bucket_starts = try_vec(buckets, "work queue buckets")?;
        bucket_starts.resize(buckets, 0);

        Ok(Self {
            ordered,
            bucket_starts,
            max_priority,
        })
    }

    /// Replace the queue contents with `items`, leaving `items` empty
    ///
    /// Priorities above `max_priority` are treated as `max_priority`.
    pub fn refill(&mut self, items: &mut Vec<WorkItem>) {
        self.bucket_starts.fill(0);
        for item in items.iter() {
            let bucket = self.bucket_of(item);
            if let Some(count) = self.bucket_starts.get_mut(bucket) {
                *count += 1;
            }
        }

        let mut offset = 0;
        for start in &mut self.bucket_starts {
            let count = *start;
            *start = offset;
            offset += count;
        }

        self.ordered.clear();
        self.ordered.resize(items.len(), WorkItem::default());

        for item in items.drain(..) {
            let bucket = self.bucket_of(&item);
            if let Some(start) = self.bucket_starts.get_mut(bucket) {
                if let Some(slot) = self.ordered.get_mut(*start) {
                    *slot = item;
                }
                *start += 1;
            }
        }
    }

    /// Remove the item with the highest priority
    pub fn pop_highest(&mut self) -> Option<WorkItem> {
        self.ordered.pop()
    }

    /// Items from lowest to highest priority
    pub fn iter_ascending(&self) -> impl Iterator<Item = &WorkItem> + '_ {
        self.ordered.iter()
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Highest priority this queue buckets separately
    pub const fn max_priority(&self) -> u32 {
        self.max_priority
    }

    fn bucket_of(&self, item: &WorkItem) -> usize {
        item.priority.min(self.max_priority) as usize
    }
}
