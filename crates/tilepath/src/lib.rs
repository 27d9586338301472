//! A* shortest paths on 4-connected, uniform-cost grids.
//!
//! The crate is built around a small number of pieces:
//!
//! - [`WalkabilityGrid`]: the map, one byte per cell, `0` = blocked
//! - [`SearchEngine`]: the A* search itself ([`SearchEngine::find_path`])
//! - [`PathFinder`]: owns a map, answers cell queries and caches the last
//!   computed path
//!
//! The engine works against any map implementing [`Walkable`], so callers
//! with their own map storage can search it directly.
//!
//! ```
//! use tilepath::{PathFinder, Point};
//!
//! let mut pf = PathFinder::new();
//! pf.set_map(3, 1, &[1, 1, 1]).unwrap();
//! let path = pf.find_path(Point::new(0, 0), Point::new(2, 0)).unwrap();
//! assert_eq!(path.len(), 3);
//! ```
//!
//! Movement is orthogonal only and every step costs 1. Neighbours are
//! expanded north, east, south, west and frontier ties are broken by the
//! smaller heuristic, then by discovery order, so identical queries always
//! return identical paths.

mod config;
mod distance;
mod engine;
mod error;
mod frontier;
mod neighbors;
mod node_store;
mod pathfinder;
mod traits;
mod visited;
mod walkability;

pub use config::{DEFAULT_PATH_CAPACITY, SearchConfig};
pub use distance::manhattan;
pub use engine::{SearchEngine, SearchOutcome};
pub use error::PathError;
pub use frontier::Frontier;
pub use neighbors::Neighbors;
pub use node_store::{Node, NodeIndex, NodeStore};
pub use pathfinder::PathFinder;
pub use tilepath_core::{Direction, Point, Range};
pub use traits::Walkable;
pub use visited::VisitedSet;
pub use walkability::{BLOCKED, INVALID_WALK_CODE, WALL_RUNE, WalkabilityGrid};
