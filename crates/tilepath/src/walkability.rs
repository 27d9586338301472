//! The walkability map searched by the engine.
//!
//! A [`WalkabilityGrid`] stores one byte per cell in row-major order. Code
//! `0` is blocked, any other code is walkable. The grid owns its own copy of
//! the cells, so callers may drop their source buffer after construction.

use tilepath_core::{Point, Range};

use crate::error::PathError;
use crate::traits::Walkable;

/// Code returned by [`WalkabilityGrid::get_cell`] for out-of-bounds reads.
pub const INVALID_WALK_CODE: u8 = u8::MAX;

/// Cell code for a blocked cell.
pub const BLOCKED: u8 = 0;

/// Rune treated as blocked by [`WalkabilityGrid::from_ascii`].
pub const WALL_RUNE: char = '#';

/// An immutable 2D map of walkability codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkabilityGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl WalkabilityGrid {
    /// Build a grid of `width × height` cells from a row-major buffer.
    ///
    /// Fails with [`PathError::InvalidMap`] if `cells.len()` does not equal
    /// `width * height`, or if a dimension does not fit in an `i32`
    /// coordinate.
    pub fn new(width: u32, height: u32, cells: &[u8]) -> Result<Self, PathError> {
        let invalid = PathError::InvalidMap {
            width,
            height,
            len: cells.len(),
        };
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(invalid);
        }
        let expected = (width as usize).checked_mul(height as usize);
        if expected != Some(cells.len()) {
            return Err(invalid);
        }
        Ok(Self {
            width,
            height,
            cells: cells.to_vec(),
        })
    }

    /// Build a fully walkable grid.
    pub fn open(width: u32, height: u32) -> Result<Self, PathError> {
        let len = (width as usize).saturating_mul(height as usize);
        Self::new(width, height, &vec![1; len])
    }

    /// Parse an ASCII layout.
    ///
    /// Lines are separated by `'\n'` and must all have the same width.
    /// Leading and trailing whitespace is trimmed from the whole string but
    /// not from individual lines. [`WALL_RUNE`] becomes a blocked cell, any
    /// other character a walkable one.
    pub fn from_ascii(layout: &str) -> Result<Self, PathError> {
        let layout = layout.trim();
        let mut width: Option<usize> = None;
        let mut height = 0usize;
        let mut cells = Vec::with_capacity(layout.len());

        for line in layout.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let before = cells.len();
            cells.extend(line.chars().map(|ch| if ch == WALL_RUNE { BLOCKED } else { 1 }));
            let w = cells.len() - before;
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(PathError::InvalidMap {
                        width: expected as u32,
                        height: (height + 1) as u32,
                        len: cells.len(),
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            height = 0;
        }
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(PathError::InvalidMap {
                width: u32::MAX,
                height: u32::MAX,
                len: cells.len(),
            });
        };
        Self::new(w, h, &cells)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The map bounds as `[0, width) × [0, height)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::with_size(self.width as i32, self.height as i32)
    }

    /// Row-major cell codes.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Whether `p` lies strictly inside `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds_check(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// The code stored at `p`, or [`INVALID_WALK_CODE`] if `p` is outside.
    #[inline]
    pub fn get_cell(&self, p: Point) -> u8 {
        match self.range().index_of(p) {
            Some(i) => self.cells[i],
            None => INVALID_WALK_CODE,
        }
    }

    /// Whether `p` is inside the map and its code is not [`BLOCKED`].
    ///
    /// An in-bounds cell holding the value of [`INVALID_WALK_CODE`] is
    /// still walkable; only the bounds check decides validity.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        match self.range().index_of(p) {
            Some(i) => self.cells[i] != BLOCKED,
            None => false,
        }
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != BLOCKED).count()
    }
}

impl Walkable for WalkabilityGrid {
    #[inline]
    fn bounds_check(&self, p: Point) -> bool {
        WalkabilityGrid::bounds_check(self, p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        WalkabilityGrid::is_walkable(self, p)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WalkabilityGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("WalkabilityGrid", 3)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("cells", &self.cells)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WalkabilityGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            width: u32,
            height: u32,
            cells: Vec<u8>,
        }
        let raw = Raw::deserialize(deserializer)?;
        WalkabilityGrid::new(raw.width, raw.height, &raw.cells).map_err(serde::de::Error::custom)
    }
}
