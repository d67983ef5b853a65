use log::trace;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::data_structures::frontier::PriorityFrontier;
use crate::graph::Weight;

/// Binary heap frontier with lazy deletion
///
/// `update` pushes a new `(key, vertex)` entry instead of touching the old
/// one. An entry is stale when its vertex is already settled or its key no
/// longer matches the vertex's latest key; stale entries are dropped as they
/// surface in `extract_min`.
#[derive(Debug)]
pub struct LazyFrontier<W>
where
    W: Weight,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(W, usize)>>,

    /// Latest key recorded for each vertex
    keys: Vec<W>,

    settled: Vec<bool>,

    /// Vertices not yet extracted
    remaining: usize,
}

impl<W> LazyFrontier<W>
where
    W: Weight,
{
    /// Number of entries in the heap, stale ones included
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }
}

impl<W> PriorityFrontier<W> for LazyFrontier<W>
where
    W: Weight,
{
    fn from_keys(keys: &[W]) -> Self {
        LazyFrontier {
            heap: keys
                .iter()
                .enumerate()
                .map(|(vertex, &key)| Reverse((key, vertex)))
                .collect(),
            keys: keys.to_vec(),
            settled: vec![false; keys.len()],
            remaining: keys.len(),
        }
    }

    fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    fn len(&self) -> usize {
        self.remaining
    }

    fn extract_min(&mut self) -> Option<(usize, W)> {
        while let Some(Reverse((key, vertex))) = self.heap.pop() {
            if self.settled[vertex] || key != self.keys[vertex] {
                trace!("discarding stale entry ({}, {})", key, vertex);
                continue;
            }
            self.settled[vertex] = true;
            self.remaining -= 1;
            return Some((vertex, key));
        }
        None
    }

    fn update(&mut self, vertex: usize, key: W) {
        debug_assert!(!self.settled[vertex], "update of settled vertex {}", vertex);
        if self.settled[vertex] {
            return;
        }
        self.keys[vertex] = key;
        self.heap.push(Reverse((key, vertex)));
    }
}
