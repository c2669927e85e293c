//! A push-only priority structure whose ordering is supplied as a policy.
//!
//! Keys decide the extraction order; the attached items never take part
//! in comparisons. Entries with equal keys leave in insertion order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

/// Decides which of two keys leaves the frontier first.
pub trait OrderPolicy<K> {
    /// `Ordering::Greater` means `a` is extracted before `b`.
    fn precedence(a: &K, b: &K) -> Ordering;
}

#[derive(Debug, Clone, Copy)]
pub enum SmallestFirst {}

#[derive(Debug, Clone, Copy)]
pub enum LargestFirst {}

impl<K: Ord> OrderPolicy<K> for SmallestFirst {
    fn precedence(a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: Ord> OrderPolicy<K> for LargestFirst {
    fn precedence(a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

struct Entry<K, T, P> {
    key: K,
    seq: u64,
    item: T,
    _policy: PhantomData<fn() -> P>,
}

impl<K, T, P: OrderPolicy<K>> Ord for Entry<K, T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // earlier insertions win ties
        P::precedence(&self.key, &other.key).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K, T, P: OrderPolicy<K>> PartialOrd for Entry<K, T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, T, P: OrderPolicy<K>> PartialEq for Entry<K, T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K, T, P: OrderPolicy<K>> Eq for Entry<K, T, P> {}

pub struct Frontier<K, T, P: OrderPolicy<K>> {
    heap: BinaryHeap<Entry<K, T, P>>,
    next_seq: u64,
}

impl<K, T, P: OrderPolicy<K>> Frontier<K, T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, key: K, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, seq, item, _policy: PhantomData });
    }

    pub fn pop(&mut self) -> Option<(K, T)> {
        self.heap.pop().map(|e| (e.key, e.item))
    }

    pub fn peek_key(&self) -> Option<&K> {
        self.heap.peek().map(|e| &e.key)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K, T, P: OrderPolicy<K>> Default for Frontier<K, T, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{Frontier, SmallestFirst, LargestFirst};

    fn drain<P: super::OrderPolicy<u64>>(mut f: Frontier<u64, &'static str, P>) -> Vec<(u64, &'static str)> {
        let mut res = Vec::new();
        while let Some(e) = f.pop() {
            res.push(e);
        }
        res
    }

    #[test]
    fn test_smallest_first() {
        let mut f: Frontier<u64, &str, SmallestFirst> = Frontier::new();
        f.push(5, "a");
        f.push(1, "b");
        f.push(3, "c");
        assert_eq!(f.len(), 3);
        assert_eq!(f.peek_key(), Some(&1));
        assert_eq!(drain(f), vec![(1, "b"), (3, "c"), (5, "a")]);
    }

    #[test]
    fn test_largest_first() {
        // task-queue style ordering: higher priority number first
        let mut f: Frontier<u64, &str, LargestFirst> = Frontier::new();
        f.push(5, "task1");
        f.push(3, "task2");
        f.push(9, "task3");
        assert_eq!(drain(f), vec![(9, "task3"), (5, "task1"), (3, "task2")]);
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut f: Frontier<u64, &str, SmallestFirst> = Frontier::new();
        f.push(2, "z");
        f.push(2, "a");
        f.push(1, "m");
        f.push(2, "k");
        assert_eq!(drain(f), vec![(1, "m"), (2, "z"), (2, "a"), (2, "k")]);
    }

    #[test]
    fn test_empty() {
        let mut f: Frontier<u64, usize, SmallestFirst> = Frontier::default();
        assert!(f.is_empty());
        assert_eq!(f.peek_key(), None);
        assert_eq!(f.pop(), None);
    }
}
