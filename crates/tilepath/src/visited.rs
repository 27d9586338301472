use rustc_hash::FxHashSet;
use tilepath_core::Point;

/// Closed set: positions whose cost from the origin is final.
///
/// With unit step costs and a consistent heuristic, a position popped from
/// the frontier never needs to be reopened.
#[derive(Debug, Default)]
pub struct VisitedSet {
    closed: FxHashSet<Point>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `pos` as final. Returns `true` if it was not marked before.
    #[inline]
    pub fn mark(&mut self, pos: Point) -> bool {
        self.closed.insert(pos)
    }

    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        self.closed.contains(&pos)
    }

    /// Number of finalized positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.closed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }
}
