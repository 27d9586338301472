//! **tilepath-core** — geometry primitives shared by the *tilepath* crates.
//!
//! Grid positions ([`Point`]), the four orthogonal moves ([`Direction`]) and
//! half-open rectangles ([`Range`]) used for map bounds.

pub mod geom;

pub use geom::{Direction, Point, Range, RangeIter};
