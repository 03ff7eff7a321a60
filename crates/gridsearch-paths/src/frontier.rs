//! Stable min-priority queue used as the A* open set.
//!
//! Entries are kept in a min-heap keyed by `(rank, seq)`. Lower ranks are
//! popped first; ties go to the lowest sequence number, so equal ranks come
//! out in insertion order. Re-pushing an item with its original sequence
//! number ([`push_with_seq`](Frontier::push_with_seq)) keeps its place among
//! equal ranks; the older entry is left behind and must be skipped by the
//! caller.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    rank: f64,
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.rank
            .total_cmp(&other.rank)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with first-in tie-breaking.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push an item, returning the sequence number assigned to it.
    pub fn push(&mut self, item: T, rank: f64) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, rank, seq }));
        seq
    }

    /// Push an item under a sequence number handed out earlier by
    /// [`push`](Self::push).
    pub fn push_with_seq(&mut self, item: T, rank: f64, seq: u64) {
        debug_assert!(seq < self.seq);
        self.heap.push(Reverse(Entry { item, rank, seq }));
    }

    /// Pop the lowest-ranked item (ties broken by sequence number).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove every entry and restart sequence numbering.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    /// Iterate over `(item, rank, seq)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64, u64)> + '_ {
        self.heap
            .iter()
            .map(|Reverse(entry)| (&entry.item, entry.rank, entry.seq))
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_rank_first() {
        let mut q = Frontier::new();
        q.push("a", 3.0);
        q.push("b", 1.0);
        q.push("c", 2.5);

        assert_eq!(q.pop(), Some("b"));
        assert_eq!(q.pop(), Some("c"));
        assert_eq!(q.pop(), Some("a"));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn equal_ranks_pop_in_insertion_order() {
        let mut q = Frontier::new();
        q.push("first", 1.0);
        q.push("second", 1.0);
        q.push("third", 1.0);

        assert_eq!(q.pop(), Some("first"));
        assert_eq!(q.pop(), Some("second"));
        assert_eq!(q.pop(), Some("third"));
    }

    #[test]
    fn push_with_seq_keeps_original_place() {
        let mut q = Frontier::new();
        let a = q.push("a", 5.0);
        q.push("b", 4.0);
        // `a` improves to the same rank as `b` but was found first.
        q.push_with_seq("a", 4.0, a);
        assert_eq!(q.len(), 3);

        assert_eq!(q.pop(), Some("a"));
        assert_eq!(q.pop(), Some("b"));
        // The stale entry is still there.
        assert_eq!(q.pop(), Some("a"));
        assert!(q.is_empty());
    }

    #[test]
    fn clear_resets_sequence() {
        let mut q = Frontier::new();
        q.push(1, 1.0);
        q.push(2, 1.0);
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.push(3, 0.0), 0);
    }

    #[test]
    fn iter_sees_every_entry() {
        let mut q = Frontier::new();
        q.push('x', 2.0);
        q.push('y', 1.0);
        let mut seen: Vec<(char, u64)> = q.iter().map(|(c, _, s)| (*c, s)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![('x', 0), ('y', 1)]);
    }
}
