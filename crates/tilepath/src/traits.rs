use tilepath_core::Point;

/// Walkability map interface searched by the engine.
///
/// Implementations must not change while a search is running.
pub trait Walkable {
    /// Whether `p` lies inside the map.
    fn bounds_check(&self, p: Point) -> bool;

    /// Whether `p` is inside the map and can be stepped on.
    fn is_walkable(&self, p: Point) -> bool;
}

impl<W: Walkable + ?Sized> Walkable for &W {
    #[inline]
    fn bounds_check(&self, p: Point) -> bool {
        (**self).bounds_check(p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }
}
