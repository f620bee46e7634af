use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{
    distance::{Distance, Kilometers},
    graph::LocationId,
};

/// A location waiting on the search frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub location: LocationId,

    /// Accumulated cost from the start to `location`
    pub cost: Distance<Kilometers>,

    /// Estimated remaining cost from `location` to the goal
    pub heuristic: Distance<Kilometers>,
}

impl FrontierEntry {
    pub fn new(
        location: LocationId,
        cost: Distance<Kilometers>,
        heuristic: Distance<Kilometers>,
    ) -> Self {
        FrontierEntry {
            location,
            cost,
            heuristic,
        }
    }

    pub fn priority(&self) -> Distance<Kilometers> {
        self.cost.saturating_add(self.heuristic)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &FrontierEntry) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip priority to make this a min-heap
        other
            .priority()
            .cmp(&self.priority())
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.location.cmp(&self.location))
    }
}

/// Min-heap of frontier entries ordered by `cost + heuristic`.
///
/// There is no decrease-key: a cheaper path to a queued location is pushed as
/// a new entry and the outdated one is left for the caller to skip when it
/// is popped.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<FrontierEntry>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
    }

    pub fn peek(&self) -> Option<&FrontierEntry> {
        self.heap.peek()
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
