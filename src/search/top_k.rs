// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded top-K selection.
//!
//! Keeps the K best `(score, index)` pairs seen so far in a min-heap, so the weakest
//! survivor sits at the root and can be evicted in O(log K). Over n candidates that's
//! O(n log K) instead of the O(n log n) of sorting everything.
//!
//! Eviction is strictly-greater: a newcomer that only *ties* the weakest entry is
//! dropped. Since candidates arrive in input order, ties end up resolved in favour
//! of the earlier candidate. That's a consequence of the heap discipline, not a
//! promise; nothing upstream should depend on it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::scoring::MatchKind;

/// A score paired with the candidate's input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub score: i64,
    pub index: usize,
    pub kind: MatchKind,
}

// Wrapper for min-heap (BinaryHeap is max-heap by default)
#[derive(Debug, PartialEq, Eq)]
struct MinScored(Scored);

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: lowest score is the "greatest" so it surfaces at the root.
        // Among equal scores the later index surfaces first.
        other
            .0
            .score
            .cmp(&self.0.score)
            .then_with(|| self.0.index.cmp(&other.0.index))
    }
}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fixed-capacity collector of the K highest scores.
#[derive(Debug)]
pub struct TopK {
    capacity: usize,
    heap: BinaryHeap<MinScored>,
}

impl TopK {
    /// A collector that holds at most `capacity` entries.
    ///
    /// Preallocation is capped so a huge `limit` on a small corpus doesn't reserve
    /// memory it will never use.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.min(1024)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Lowest score currently held, if any.
    #[inline]
    pub fn weakest(&self) -> Option<i64> {
        self.heap.peek().map(|e| e.0.score)
    }

    /// Offer an entry. Returns whether it was kept.
    pub fn offer(&mut self, entry: Scored) -> bool {
        if self.capacity == 0 {
            return false;
        }
        // INVARIANT: heap.len() <= capacity
        if self.heap.len() < self.capacity {
            self.heap.push(MinScored(entry));
            return true;
        }
        match self.heap.peek_mut() {
            Some(mut root) if entry.score > root.0.score => {
                // PeekMut restores heap order on drop
                *root = MinScored(entry);
                true
            }
            _ => false,
        }
    }

    /// Drain into a vector ordered best-first (score desc, then index asc).
    pub fn into_sorted_vec(self) -> Vec<Scored> {
        // BinaryHeap::into_sorted_vec is ascending by Ord, which is reversed here
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|e| e.0)
            .collect()
    }
}
