use std::fmt;

use tilepath_core::Point;

/// Reasons a map update or path query can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A query was made before any map was configured.
    MapNotSet,
    /// The cell buffer does not describe a `width × height` map.
    InvalidMap { width: u32, height: u32, len: usize },
    /// An endpoint lies outside the map.
    InvalidPosition(Point),
    /// An endpoint is inside the map but not walkable.
    Blocked(Point),
    /// The frontier was exhausted without reaching the destination.
    Unreachable,
    /// The search expanded more nodes than the configured budget allows.
    StepBudgetExceeded { budget: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MapNotSet => f.write_str("no walkability map has been set"),
            Self::InvalidMap { width, height, len } => write!(
                f,
                "invalid map: {width}x{height} needs {} cells, got {len}",
                u64::from(*width) * u64::from(*height)
            ),
            Self::InvalidPosition(p) => write!(f, "position {p} is outside the map"),
            Self::Blocked(p) => write!(f, "position {p} is not walkable"),
            Self::Unreachable => f.write_str("destination is unreachable"),
            Self::StepBudgetExceeded { budget } => {
                write!(f, "search gave up after {budget} expansions")
            }
        }
    }
}

impl std::error::Error for PathError {}
