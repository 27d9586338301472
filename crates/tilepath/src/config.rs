/// Default capacity reserved for the cached last path.
pub const DEFAULT_PATH_CAPACITY: usize = 100;

/// Tuning knobs for a [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of node expansions before a search gives up with
    /// [`PathError::StepBudgetExceeded`](crate::PathError::StepBudgetExceeded).
    /// `None` means unbounded.
    pub max_expansions: Option<usize>,
    /// Initial capacity reserved for the cached last path of a
    /// [`PathFinder`](crate::PathFinder).
    pub path_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            path_capacity: DEFAULT_PATH_CAPACITY,
        }
    }
}

impl SearchConfig {
    /// Bound every search to at most `budget` expansions.
    pub fn with_max_expansions(mut self, budget: usize) -> Self {
        self.max_expansions = Some(budget);
        self
    }

    /// Initial capacity reserved for the cached last path of a
    /// [`PathFinder`](crate::PathFinder).
    pub fn with_path_capacity(mut self, capacity: usize) -> Self {
        self.path_capacity = capacity;
        self
    }
}
