//! Core data structures: settings, selection grid, and participant responses.
//!
//! [`Settings`] describes how to build a grid; [`Grid`] is the immutable
//! result of one generation; [`ResponseData`] carries everything the
//! participant has entered against the currently active grid. The model
//! (`crate::model`) owns all three and is the only place allowed to
//! mutate them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{
    default_element_name, DEFAULT_RATING_POINTS, DEFAULT_SELECT_COUNT, DEFAULT_SEPARATOR,
    DEFAULT_SIZE,
};

/// One grid row: a length-N binary vector marking which elements are
/// selected for comparison in that row.
pub type SelectionRow = Vec<u8>;

/// Configuration describing how to build a grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Total number of elements (columns), N.
    pub size: usize,
    /// Number of elements marked selected per row, K. Always 1..=N-1.
    pub select_count: usize,
    /// Display names, one per column. May run longer than `size` when a
    /// renamed trailing entry blocks trimming; never shorter.
    pub elements: Vec<String>,
    /// Whether row order is randomized.
    pub shuffle: bool,
    /// Whether the randomization must be reproducible.
    pub use_seed: bool,
    /// Shuffle seed, consulted only when `use_seed` is set.
    pub seed: i64,
    /// Number of discrete points on the rating scale.
    pub rating_points: i32,
    /// Field separator used by the report export.
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            select_count: DEFAULT_SELECT_COUNT,
            elements: (0..DEFAULT_SIZE).map(default_element_name).collect(),
            shuffle: false,
            use_seed: false,
            seed: 0,
            rating_points: DEFAULT_RATING_POINTS,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// An ordered set of selection rows. Immutable once generated —
/// regenerating produces a new `Grid`, never an in-place edit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<SelectionRow>,
}

impl Grid {
    pub fn new(rows: Vec<SelectionRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SelectionRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The two free-text poles of the bipolar construct elicited for one row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoleLabels {
    pub emergent: String,
    pub implicit: String,
}

/// Participant-scoped state, one instance per session.
///
/// Invariant: `ratings.len() == labels.len() == grid.row_count()`, and
/// every rating vector has exactly N slots. Any operation that replaces
/// the grid re-establishes this by whole-vector reallocation — prior
/// per-row responses are intentionally discarded, because regenerating
/// the instrument resets participant progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResponseData {
    pub participant_id: i64,
    /// The currently active grid, shared with the model — response data
    /// never mutates its rows.
    pub grid: Arc<Grid>,
    /// One rating vector per row, one slot per element; `None` is unset.
    pub ratings: Vec<Vec<Option<i32>>>,
    /// One pole-label pair per row.
    pub labels: Vec<PoleLabels>,
}

impl Default for ResponseData {
    fn default() -> Self {
        Self {
            participant_id: 0,
            grid: Arc::new(Grid::default()),
            ratings: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl ResponseData {
    /// Adopt a freshly generated grid, reallocating the rating and label
    /// matrices to all-unset vectors shaped to the new grid.
    pub fn reset_for_grid(&mut self, grid: Arc<Grid>, size: usize) {
        let rows = grid.row_count();
        self.grid = grid;
        self.ratings = vec![vec![None; size]; rows];
        self.labels = vec![PoleLabels::default(); rows];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.size, 6);
        assert_eq!(settings.select_count, 3);
        assert_eq!(settings.rating_points, 7);
        assert!(!settings.shuffle);
        assert_eq!(settings.elements[0], "Element 1");
        assert_eq!(settings.elements[5], "Element 6");
    }

    #[test]
    fn test_reset_for_grid_shapes_matrices() {
        let mut data = ResponseData::default();
        let grid = Arc::new(Grid::new(vec![vec![1, 1, 0], vec![1, 0, 1]]));
        data.reset_for_grid(grid, 3);
        assert_eq!(data.ratings.len(), 2);
        assert_eq!(data.labels.len(), 2);
        assert!(data.ratings.iter().all(|r| r.len() == 3));
        assert!(data.ratings.iter().flatten().all(|r| r.is_none()));
    }
}
