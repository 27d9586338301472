use tilepath_core::Point;

use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::error::PathError;
use crate::walkability::WalkabilityGrid;

/// Map-owning pathfinding service.
///
/// `PathFinder` stores the current [`WalkabilityGrid`], answers cell
/// queries against it and runs searches through a [`SearchEngine`]. It also
/// remembers the most recent path built by [`create_path`](Self::create_path)
/// for collaborators that poll instead of consuming return values.
///
/// Methods that change state take `&mut self`; [`find_path`](Self::find_path)
/// only needs `&self`, so a shared `PathFinder` (for instance behind an
/// `RwLock` read guard) can serve searches from several threads at once.
#[derive(Debug, Clone)]
pub struct PathFinder {
    grid: Option<WalkabilityGrid>,
    engine: SearchEngine,
    last_path: Vec<Point>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl PathFinder {
    /// Create a path finder with no map and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path finder with no map and the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            grid: None,
            engine: SearchEngine::new(config),
            last_path: Vec::with_capacity(config.path_capacity),
        }
    }

    /// Replace the map with a copy of `cells` (row-major, `0` = blocked).
    ///
    /// On error the previous map stays in place.
    pub fn set_map(&mut self, width: u32, height: u32, cells: &[u8]) -> Result<(), PathError> {
        let grid = WalkabilityGrid::new(width, height, cells)?;
        self.set_grid(grid);
        Ok(())
    }

    /// Replace the map with an already built grid.
    pub fn set_grid(&mut self, grid: WalkabilityGrid) {
        log::debug!(
            "walkability map set: {}x{} ({} walkable)",
            grid.width(),
            grid.height(),
            grid.walkable_count()
        );
        self.grid = Some(grid);
        self.last_path.clear();
    }

    /// The current map, if one is set.
    pub fn grid(&self) -> Option<&WalkabilityGrid> {
        self.grid.as_ref()
    }

    pub fn config(&self) -> &SearchConfig {
        self.engine.config()
    }

    fn require_grid(&self) -> Result<&WalkabilityGrid, PathError> {
        self.grid.as_ref().ok_or(PathError::MapNotSet)
    }

    /// Whether `p` is inside the map and walkable.
    pub fn is_walkable(&self, p: Point) -> Result<bool, PathError> {
        Ok(self.require_grid()?.is_walkable(p))
    }

    /// Whether `p` is inside the map.
    pub fn bounds_check(&self, p: Point) -> Result<bool, PathError> {
        Ok(self.require_grid()?.bounds_check(p))
    }

    /// Cell code at `p`, or [`INVALID_WALK_CODE`](crate::INVALID_WALK_CODE)
    /// outside the map.
    pub fn get_cell(&self, p: Point) -> Result<u8, PathError> {
        Ok(self.require_grid()?.get_cell(p))
    }

    /// Shortest path between two cells of the current map.
    ///
    /// Does not touch [`last_path`](Self::last_path).
    pub fn find_path(&self, origin: Point, destination: Point) -> Result<Vec<Point>, PathError> {
        let grid = self.require_grid()?;
        self.engine.find_path(grid, origin, destination)
    }

    /// Compute a path, keep it as the last path and return its step count.
    ///
    /// On failure the last path is cleared, so pollers never see a path that
    /// belongs to an earlier request.
    pub fn create_path(&mut self, origin: Point, destination: Point) -> Result<usize, PathError> {
        self.last_path.clear();
        let path = self.find_path(origin, destination)?;
        self.last_path.extend_from_slice(&path);
        Ok(path.len() - 1)
    }

    /// The path built by the most recent successful
    /// [`create_path`](Self::create_path) call. Empty if there is none.
    pub fn last_path(&self) -> &[Point] {
        &self.last_path
    }

    /// Release the map and the last path.
    pub fn clear(&mut self) {
        log::debug!("releasing walkability map");
        self.grid = None;
        self.last_path.clear();
    }
}
