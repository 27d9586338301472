//! Geometry primitives: [`Point`], [`Direction`] and [`Range`].
//!
//! Coordinates follow screen conventions: X grows right, Y grows down, so
//! [`Direction::North`] is a step towards `y - 1`.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbour one step away in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.delta();
        self.shift(d.x, d.y)
    }

    /// The four cardinal neighbours in [`Direction::CARDINAL`] order
    /// (north, east, south, west).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Direction::CARDINAL.map(|d| self.step(d))
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed enumeration order used by neighbour expansion.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset of this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::East => Point::new(1, 0),
            Direction::South => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty ranges are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Range {
    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(width, height),
        }
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range. Both upper bounds are
    /// exclusive: `p.x == max.x` or `p.y == max.y` is outside.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major offset of `p` relative to `min`, or `None` if `p` is outside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_shift_and_step() {
        let p = Point::new(3, 4);
        assert_eq!(p.shift(-1, 2), Point::new(2, 6));
        assert_eq!(p.step(Direction::North), Point::new(3, 3));
        assert_eq!(p.step(Direction::West), Point::new(2, 4));
        assert_eq!(Point::from((3, 4)), p);
        assert_eq!(p.to_string(), "(3, 4)");
    }

    #[test]
    fn neighbors_follow_cardinal_order() {
        let n = Point::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Point::new(5, 4),
                Point::new(6, 5),
                Point::new(5, 6),
                Point::new(4, 5),
            ]
        );
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let p = Point::new(1, 1);
        assert!(p.is_adjacent(Point::new(1, 0)));
        assert!(p.is_adjacent(Point::new(2, 1)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(2, 2)));
        assert!(!p.is_adjacent(Point::new(3, 1)));
    }

    #[test]
    fn range_basics() {
        let r = Range::with_size(4, 3);
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 3);
        assert_eq!(r.len(), 12);
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(3, 2)));
        assert!(!r.contains(Point::new(4, 2)));
        assert!(!r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn with_size_anchors_at_origin() {
        let r = Range::with_size(5, 2);
        assert_eq!(r.min, Point::ZERO);
        assert_eq!(r.max, Point::new(5, 2));
        // Negative extents stay empty instead of flipping corners.
        let neg = Range::with_size(-3, 2);
        assert!(neg.is_empty());
        assert_eq!(neg.len(), 0);
        assert!(!neg.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_index_of() {
        let r = Range {
            min: Point::new(1, 1),
            max: Point::new(4, 3),
        };
        assert_eq!(r.index_of(Point::new(1, 1)), Some(0));
        assert_eq!(r.index_of(Point::new(3, 1)), Some(2));
        assert_eq!(r.index_of(Point::new(1, 2)), Some(3));
        assert_eq!(r.index_of(Point::new(3, 2)), Some(5));
        assert_eq!(r.index_of(Point::new(0, 1)), None);
        assert_eq!(r.index_of(Point::new(4, 2)), None);
    }

    #[test]
    fn range_iter_count() {
        let r = Range::with_size(7, 5);
        let it = r.iter();
        assert_eq!(it.len(), 35);
        let pts: Vec<Point> = it.collect();
        assert_eq!(pts.len(), 35);
        assert_eq!(pts[0], Point::ZERO);
        assert_eq!(pts[1], Point::new(1, 0));
        assert_eq!(pts[7], Point::new(0, 1));
        let unique: HashSet<Point> = pts.iter().copied().collect();
        assert_eq!(unique.len(), 35);
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(r.index_of(*p), Some(i));
        }
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::with_size(0, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
        assert_eq!(r, Range::default());
    }
}
