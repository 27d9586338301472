//! The open set of an A* search.
//!
//! A binary heap keyed by `(f, h, insertion order)` plus hash lookups by
//! node index and by position. Decrease-key pushes a fresh heap entry; the
//! superseded entry stays in the heap and is dropped when it surfaces.

use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tilepath_core::Point;

use crate::node_store::NodeIndex;

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f`, then the smallest `h`, then the earliest pushed node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    f: u32,
    h: u32,
    order: u64,
    idx: NodeIndex,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Live state of a node currently in the frontier.
#[derive(Clone, Copy, Debug)]
struct Slot {
    pos: Point,
    f: u32,
    h: u32,
    order: u64,
}

/// Priority queue of open nodes with membership lookup by position.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    open: FxHashMap<NodeIndex, Slot>,
    by_pos: FxHashMap<Point, NodeIndex>,
    next_order: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with total score `f` and heuristic `h`.
    ///
    /// The node must not already be open.
    pub fn push(&mut self, idx: NodeIndex, pos: Point, f: u32, h: u32) {
        debug_assert!(!self.open.contains_key(&idx), "node pushed twice");
        let order = self.next_order;
        self.next_order += 1;
        self.open.insert(idx, Slot { pos, f, h, order });
        self.by_pos.insert(pos, idx);
        self.heap.push(Entry { f, h, order, idx });
    }

    /// Remove and return the open node with the smallest `f`.
    ///
    /// Ties go to the smaller `h`, then to the node pushed first. Returns
    /// `None` once no open node remains.
    pub fn pop_min(&mut self) -> Option<NodeIndex> {
        while let Some(entry) = self.heap.pop() {
            // Skip entries superseded by decrease_key or already popped.
            let live = self.open.get(&entry.idx).is_some_and(|s| s.f == entry.f);
            if !live {
                continue;
            }
            if let Some(slot) = self.open.remove(&entry.idx) {
                self.by_pos.remove(&slot.pos);
            }
            return Some(entry.idx);
        }
        None
    }

    /// Index of the open node at `pos`, if any.
    #[inline]
    pub fn contains(&self, pos: Point) -> Option<NodeIndex> {
        self.by_pos.get(&pos).copied()
    }

    /// Lower the score of an open node to `new_f`.
    ///
    /// The node keeps its original insertion order for tie-breaking.
    /// Returns `false` (and changes nothing) if the node is not open or
    /// `new_f` is not lower than its current score.
    pub fn decrease_key(&mut self, idx: NodeIndex, new_f: u32) -> bool {
        let Some(slot) = self.open.get_mut(&idx) else {
            return false;
        };
        if new_f >= slot.f {
            return false;
        }
        slot.f = new_f;
        self.heap.push(Entry {
            f: new_f,
            h: slot.h,
            order: slot.order,
            idx,
        });
        true
    }

    /// Number of open nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
