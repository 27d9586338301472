use tilepath_core::Point;

use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::error::PathError;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::node_store::NodeStore;
use crate::traits::Walkable;
use crate::visited::VisitedSet;

/// A successful search: the path plus a few statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Positions from origin to destination, both included.
    pub path: Vec<Point>,
    /// Number of steps, always `path.len() - 1`.
    pub cost: u32,
    /// Nodes popped from the frontier and expanded.
    pub expanded: usize,
}

/// A* search over a 4-connected uniform-cost grid.
///
/// The engine holds configuration only. All working state (node arena,
/// frontier, closed set) lives inside a single call, so one engine can
/// serve concurrent searches from several threads.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shortest path from `origin` to `destination`, both included.
    pub fn find_path<W: Walkable + ?Sized>(
        &self,
        map: &W,
        origin: Point,
        destination: Point,
    ) -> Result<Vec<Point>, PathError> {
        self.search(map, origin, destination).map(|outcome| outcome.path)
    }

    /// Like [`find_path`](Self::find_path), but also reports the path cost
    /// and how many nodes were expanded.
    ///
    /// Fails with [`PathError::InvalidPosition`] if an endpoint is outside
    /// the map, [`PathError::Blocked`] if it is not walkable,
    /// [`PathError::Unreachable`] once the frontier runs dry and
    /// [`PathError::StepBudgetExceeded`] when the configured expansion
    /// budget is spent.
    pub fn search<W: Walkable + ?Sized>(
        &self,
        map: &W,
        origin: Point,
        destination: Point,
    ) -> Result<SearchOutcome, PathError> {
        for p in [origin, destination] {
            if !map.bounds_check(p) {
                return Err(PathError::InvalidPosition(p));
            }
        }
        for p in [origin, destination] {
            if !map.is_walkable(p) {
                return Err(PathError::Blocked(p));
            }
        }
        if origin == destination {
            return Ok(SearchOutcome {
                path: vec![origin],
                cost: 0,
                expanded: 0,
            });
        }

        let mut nodes = NodeStore::new();
        let mut open = Frontier::new();
        let mut closed = VisitedSet::new();
        let mut nbuf = Neighbors::new();

        let h = manhattan(origin, destination);
        let root = nodes.insert(origin, 0, h, None);
        open.push(root, origin, h, h);

        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(ci) = open.pop_min() else {
                break 'search None;
            };
            let current = *nodes.get(ci);

            // The goal is final only once it is the cheapest open node.
            if current.pos == destination {
                break 'search Some(ci);
            }

            if let Some(budget) = self.config.max_expansions {
                if expanded >= budget {
                    log::warn!(
                        "search {origin} -> {destination} hit its budget of {budget} expansions"
                    );
                    return Err(PathError::StepBudgetExceeded { budget });
                }
            }

            closed.mark(current.pos);
            expanded += 1;

            let tentative_g = current.g + 1;
            for &np in nbuf.cardinal(current.pos, |n| map.is_walkable(n) && !closed.contains(n)) {
                match open.contains(np) {
                    None => {
                        let h = manhattan(np, destination);
                        let ni = nodes.insert(np, tentative_g, h, Some(ci));
                        open.push(ni, np, tentative_g + h, h);
                    }
                    Some(ni) => {
                        if tentative_g >= nodes.get(ni).g {
                            continue;
                        }
                        nodes.update_parent(ni, ci, tentative_g);
                        open.decrease_key(ni, nodes.get(ni).f());
                    }
                }
            }
        };

        let Some(goal) = found else {
            log::debug!(
                "no path {origin} -> {destination} after {expanded} expansions ({} discovered)",
                nodes.len()
            );
            return Err(PathError::Unreachable);
        };

        let cost = nodes.get(goal).g;
        let path = nodes.path_to(goal, cost as usize + 1);
        debug_assert_eq!(path.len(), cost as usize + 1);
        log::debug!("path {origin} -> {destination}: cost {cost}, {expanded} expansions");

        Ok(SearchOutcome {
            path,
            cost,
            expanded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walkability::WalkabilityGrid;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn same_cell_is_a_single_step_path() {
        let grid = WalkabilityGrid::open(3, 3).unwrap();
        let out = SearchEngine::default()
            .search(&grid, Point::new(1, 1), Point::new(1, 1))
            .unwrap();
        assert_eq!(out.path, pts(&[(1, 1)]));
        assert_eq!(out.cost, 0);
        assert_eq!(out.expanded, 0);
    }

    #[test]
    fn one_by_one_grid() {
        let grid = WalkabilityGrid::open(1, 1).unwrap();
        let path = SearchEngine::default()
            .find_path(&grid, Point::ZERO, Point::ZERO)
            .unwrap();
        assert_eq!(path, vec![Point::ZERO]);
    }

    #[test]
    fn tie_break_prefers_east_then_south() {
        let grid = WalkabilityGrid::open(3, 3).unwrap();
        let path = SearchEngine::default()
            .find_path(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path, pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn routes_through_wall_gap() {
        let grid = WalkabilityGrid::from_ascii(
            "\
..#..
..#..
..#..
..#..
.....",
        )
        .unwrap();
        let out = SearchEngine::default()
            .search(&grid, Point::new(0, 0), Point::new(4, 0))
            .unwrap();
        assert_eq!(out.cost, 12);
        assert_eq!(out.path.len(), 13);
        assert!(out.path.contains(&Point::new(2, 4)));
        assert_eq!(out.path.first(), Some(&Point::new(0, 0)));
        assert_eq!(out.path.last(), Some(&Point::new(4, 0)));
    }

    #[test]
    fn endpoints_are_validated() {
        let grid = WalkabilityGrid::from_ascii(".#\n..").unwrap();
        let engine = SearchEngine::default();
        assert_eq!(
            engine.find_path(&grid, Point::new(2, 0), Point::new(0, 0)),
            Err(PathError::InvalidPosition(Point::new(2, 0)))
        );
        assert_eq!(
            engine.find_path(&grid, Point::new(0, 0), Point::new(0, 2)),
            Err(PathError::InvalidPosition(Point::new(0, 2)))
        );
        assert_eq!(
            engine.find_path(&grid, Point::new(0, 0), Point::new(1, 0)),
            Err(PathError::Blocked(Point::new(1, 0)))
        );
        assert_eq!(
            engine.find_path(&grid, Point::new(1, 0), Point::new(1, 0)),
            Err(PathError::Blocked(Point::new(1, 0)))
        );
    }

    #[test]
    fn enclosed_origin_is_unreachable() {
        let grid = WalkabilityGrid::from_ascii(
            "\
.#...
##...
.....",
        )
        .unwrap();
        let engine = SearchEngine::default();
        assert_eq!(
            engine.find_path(&grid, Point::new(0, 0), Point::new(4, 2)),
            Err(PathError::Unreachable)
        );
        assert_eq!(
            engine.find_path(&grid, Point::new(4, 2), Point::new(0, 0)),
            Err(PathError::Unreachable)
        );
    }

    #[test]
    fn picks_the_shorter_of_two_detours() {
        let grid = WalkabilityGrid::from_ascii(
            "\
.....
.###.
.#...
.#.#.
.....",
        )
        .unwrap();
        let out = SearchEngine::default()
            .search(&grid, Point::new(0, 0), Point::new(2, 3))
            .unwrap();
        assert_eq!(out.cost, 7);
        for w in out.path.windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
    }

    #[test]
    fn budget_stops_long_searches() {
        let grid = WalkabilityGrid::open(20, 20).unwrap();
        let engine = SearchEngine::new(SearchConfig::default().with_max_expansions(5));
        assert_eq!(
            engine.find_path(&grid, Point::new(0, 0), Point::new(19, 19)),
            Err(PathError::StepBudgetExceeded { budget: 5 })
        );
        // A short hop fits in the budget.
        assert_eq!(
            engine
                .find_path(&grid, Point::new(0, 0), Point::new(2, 0))
                .unwrap()
                .len(),
            3
        );
    }

    #[test]
    fn works_through_trait_objects() {
        let grid = WalkabilityGrid::open(4, 1).unwrap();
        let map: &dyn Walkable = &grid;
        let path = SearchEngine::default()
            .find_path(map, Point::new(0, 0), Point::new(3, 0))
            .unwrap();
        assert_eq!(path.len(), 4);
    }
}
