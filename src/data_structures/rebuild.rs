use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::data_structures::frontier::PriorityFrontier;
use crate::graph::Weight;

/// Frontier that holds exactly one entry per present vertex
///
/// Every `update` re-reads all present keys and re-heapifies, which costs
/// O(n) per update. Suitable for the small graphs this crate targets and
/// useful as a reference for [`super::LazyFrontier`].
#[derive(Debug)]
pub struct RebuildFrontier<W>
where
    W: Weight,
{
    heap: BinaryHeap<Reverse<(W, usize)>>,
    keys: Vec<W>,
}

impl<W> RebuildFrontier<W>
where
    W: Weight,
{
    fn rebuild(&mut self) {
        let keys = &self.keys;
        let entries: Vec<_> = self
            .heap
            .drain()
            .map(|Reverse((_, vertex))| Reverse((keys[vertex], vertex)))
            .collect();
        self.heap = BinaryHeap::from(entries);
    }
}

impl<W> PriorityFrontier<W> for RebuildFrontier<W>
where
    W: Weight,
{
    fn from_keys(keys: &[W]) -> Self {
        RebuildFrontier {
            heap: keys
                .iter()
                .enumerate()
                .map(|(vertex, &key)| Reverse((key, vertex)))
                .collect(),
            keys: keys.to_vec(),
        }
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn extract_min(&mut self) -> Option<(usize, W)> {
        self.heap.pop().map(|Reverse((key, vertex))| (vertex, key))
    }

    fn update(&mut self, vertex: usize, key: W) {
        self.keys[vertex] = key;
        self.rebuild();
    }
}
