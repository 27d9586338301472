//! Arena of nodes discovered during a single search.
//!
//! Every discovered position gets exactly one [`Node`] and a stable
//! [`NodeIndex`]. Parent links are indices into the same arena, so they stay
//! valid for the whole search no matter how the frontier reorders entries.

use tilepath_core::Point;

/// Stable handle to a node inside a [`NodeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Position of the node in insertion order.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

/// A discovered grid position with its A* scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub pos: Point,
    /// Cost of the best known path from the origin.
    pub g: u32,
    /// Heuristic estimate of the remaining cost.
    pub h: u32,
    pub parent: Option<NodeIndex>,
}

impl Node {
    /// Total estimated cost `g + h`.
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Append-only node arena.
///
/// Lookup by position is the frontier's job; the store is addressed by
/// [`NodeIndex`] only.
#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node for a newly discovered position and return its index.
    ///
    /// `parent`, if any, must already be in the store.
    pub fn insert(&mut self, pos: Point, g: u32, h: u32, parent: Option<NodeIndex>) -> NodeIndex {
        debug_assert!(parent.is_none_or(|p| p.0 < self.nodes.len()));
        let idx = NodeIndex(self.nodes.len());
        self.nodes.push(Node { pos, g, h, parent });
        idx
    }

    /// The node at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` came from a different store.
    #[inline]
    pub fn get(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx.0]
    }

    /// Record a cheaper path to an already discovered node.
    pub fn update_parent(&mut self, idx: NodeIndex, new_parent: NodeIndex, new_g: u32) {
        debug_assert!(new_parent.0 < self.nodes.len() && new_parent != idx);
        let node = &mut self.nodes[idx.0];
        debug_assert!(new_g < node.g);
        node.parent = Some(new_parent);
        node.g = new_g;
    }

    /// Number of discovered nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions from the root of `idx`'s parent chain down to `idx`.
    pub fn path_to(&self, idx: NodeIndex, capacity: usize) -> Vec<Point> {
        let mut path = Vec::with_capacity(capacity);
        let mut cur = Some(idx);
        while let Some(i) = cur {
            let node = &self.nodes[i.0];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_sequential_indices() {
        let mut store = NodeStore::new();
        assert!(store.is_empty());
        let a = store.insert(Point::new(0, 0), 0, 4, None);
        let b = store.insert(Point::new(1, 0), 1, 3, Some(a));
        assert_eq!(a.get(), 0);
        assert_eq!(b.get(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b).parent, Some(a));
        assert_eq!(store.get(b).f(), 4);
        assert_eq!(store.get(a).pos, Point::new(0, 0));
        assert_eq!(store.get(b).pos, Point::new(1, 0));
    }

    #[test]
    fn update_parent_recomputes_f() {
        let mut store = NodeStore::new();
        let root = store.insert(Point::new(0, 0), 0, 2, None);
        let far = store.insert(Point::new(5, 5), 7, 3, Some(root));
        let near = store.insert(Point::new(1, 0), 1, 2, Some(root));
        store.update_parent(far, near, 2);
        let node = store.get(far);
        assert_eq!(node.g, 2);
        assert_eq!(node.f(), 5);
        assert_eq!(node.parent, Some(near));
    }

    #[test]
    fn reparenting_keeps_indices_stable() {
        let mut store = NodeStore::new();
        let root = store.insert(Point::new(0, 0), 0, 3, None);
        let late = store.insert(Point::new(0, 1), 1, 2, Some(root));
        let slow = store.insert(Point::new(1, 1), 5, 1, Some(late));
        let fast = store.insert(Point::new(1, 0), 1, 2, Some(root));
        store.update_parent(slow, fast, 2);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(slow).pos, Point::new(1, 1));
        assert_eq!(
            store.path_to(slow, 3),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
        assert_eq!(store.get(late).parent, Some(root));
    }

    #[test]
    fn path_to_walks_parents_in_order() {
        let mut store = NodeStore::new();
        let a = store.insert(Point::new(0, 0), 0, 2, None);
        let b = store.insert(Point::new(0, 1), 1, 1, Some(a));
        let c = store.insert(Point::new(0, 2), 2, 0, Some(b));
        assert_eq!(
            store.path_to(c, 0),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]
        );
        assert_eq!(store.path_to(a, 0), vec![Point::new(0, 0)]);
    }
}
