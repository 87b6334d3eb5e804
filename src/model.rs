//! Survey state model: settings plus participant responses, kept consistent.
//!
//! The model is the single owner of [`Settings`], the active [`Grid`], and
//! [`ResponseData`]. Every mutation routes through one of its operations;
//! each operation either rejects its input outright or completes fully, so
//! collaborators never observe a half-applied change. Grid-shaping
//! operations (size, select count, shuffle configuration, explicit
//! regeneration) replace the grid and reallocate the response matrices in
//! the same call.
//!
//! Grid lifecycle: a fresh model is ungenerated (empty grid, empty
//! matrices); the first regeneration produces a grid and every later
//! grid-shaping operation replaces it. There is no terminal state.

use std::sync::Arc;

use thiserror::Error;

use crate::constants::default_element_name;
use crate::generator;
use crate::types::{Grid, PoleLabels, ResponseData, Settings};

/// Contract violations rejected at the model boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("grid size must be at least 2, got {size}")]
    SizeOutOfRange { size: usize },
    #[error("select count must be in 1..={max}, got {select_count}")]
    SelectCountOutOfRange { select_count: usize, max: usize },
    #[error("rating points must be at least 1, got {rating_points}")]
    RatingPointsOutOfRange { rating_points: i32 },
    #[error("row {row} out of bounds for grid with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },
    #[error("element {element} out of bounds for size {size}")]
    ElementOutOfBounds { element: usize, size: usize },
    #[error("rating {value} outside 1..={rating_points}")]
    RatingOutOfRange { value: i32, rating_points: i32 },
}

pub struct SurveyModel {
    settings: Settings,
    grid: Arc<Grid>,
    data: ResponseData,
}

impl Default for SurveyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyModel {
    /// Fresh model with default settings and no generated grid yet.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            grid: Arc::new(Grid::default()),
            data: ResponseData::default(),
        }
    }

    /// Rebuild a model from persisted settings and response data.
    ///
    /// Returns `None` when the snapshot violates the response-shape
    /// invariant — a corrupt session is discarded, not repaired.
    pub fn from_snapshot(settings: Settings, data: ResponseData) -> Option<Self> {
        let rows = data.grid.row_count();
        let shape_ok = data.ratings.len() == rows
            && data.labels.len() == rows
            && data.ratings.iter().all(|r| r.len() == settings.size)
            && data.grid.rows().iter().all(|row| {
                row.len() == settings.size
                    && row.iter().filter(|&&c| c == 1).count() == settings.select_count
            });
        if !shape_ok {
            return None;
        }
        Some(Self {
            grid: data.grid.clone(),
            settings,
            data,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn data(&self) -> &ResponseData {
        &self.data
    }

    /// Whether the first grid generation has happened.
    pub fn is_generated(&self) -> bool {
        !self.grid.is_empty()
    }

    /// Set the element count N. Clamps the select count down to `n - 1`
    /// where needed, re-applies the element naming rule, and regenerates.
    pub fn set_size(&mut self, size: usize) -> Result<(), ModelError> {
        if size < 2 {
            return Err(ModelError::SizeOutOfRange { size });
        }
        self.settings.size = size;
        if self.settings.select_count > size - 1 {
            self.settings.select_count = size - 1;
        }
        resize_elements(&mut self.settings.elements, size);
        self.regenerate_grid();
        Ok(())
    }

    /// Set the per-row selection count K. Rejected unless `1 <= k <= N-1`.
    pub fn set_select_count(&mut self, select_count: usize) -> Result<(), ModelError> {
        let max = self.settings.size - 1;
        if !(1..=max).contains(&select_count) {
            return Err(ModelError::SelectCountOutOfRange { select_count, max });
        }
        self.settings.select_count = select_count;
        self.regenerate_grid();
        Ok(())
    }

    /// Replace the element list, applying the naming rule against the
    /// current size. Names are orthogonal to grid shape, so no
    /// regeneration happens here.
    pub fn set_elements(&mut self, elements: Vec<String>) {
        self.settings.elements = elements;
        resize_elements(&mut self.settings.elements, self.settings.size);
    }

    /// Overwrite the shuffle configuration in one step and regenerate.
    pub fn set_shuffle_options(&mut self, shuffle: bool, use_seed: bool, seed: i64) {
        self.settings.shuffle = shuffle;
        self.settings.use_seed = use_seed;
        self.settings.seed = seed;
        self.regenerate_grid();
    }

    /// Set the rating-scale point count. Existing ratings are left
    /// untouched; they were valid against the scale they were entered on.
    pub fn set_rating_points(&mut self, rating_points: i32) -> Result<(), ModelError> {
        if rating_points < 1 {
            return Err(ModelError::RatingPointsOutOfRange { rating_points });
        }
        self.settings.rating_points = rating_points;
        Ok(())
    }

    pub fn set_separator(&mut self, separator: String) {
        self.settings.separator = separator;
    }

    pub fn set_participant(&mut self, participant_id: i64) {
        self.data.participant_id = participant_id;
    }

    /// Generate a new grid from the current settings and reallocate the
    /// rating and label matrices to match it. All prior per-row responses
    /// are discarded.
    pub fn regenerate_grid(&mut self) {
        self.grid = Arc::new(generator::generate(&self.settings));
        self.data
            .reset_for_grid(self.grid.clone(), self.settings.size);
        tracing::debug!(
            rows = self.grid.row_count(),
            size = self.settings.size,
            select_count = self.settings.select_count,
            "regenerated grid"
        );
    }

    /// Record one rating cell. The value must be on the current scale.
    pub fn set_rating(&mut self, row: usize, element: usize, value: i32) -> Result<(), ModelError> {
        let rows = self.grid.row_count();
        if row >= rows {
            return Err(ModelError::RowOutOfBounds { row, rows });
        }
        if element >= self.settings.size {
            return Err(ModelError::ElementOutOfBounds {
                element,
                size: self.settings.size,
            });
        }
        if !(1..=self.settings.rating_points).contains(&value) {
            return Err(ModelError::RatingOutOfRange {
                value,
                rating_points: self.settings.rating_points,
            });
        }
        self.data.ratings[row][element] = Some(value);
        Ok(())
    }

    /// Record one pole label for a row.
    pub fn set_label(&mut self, row: usize, implicit: bool, text: String) -> Result<(), ModelError> {
        let rows = self.grid.row_count();
        if row >= rows {
            return Err(ModelError::RowOutOfBounds { row, rows });
        }
        let labels: &mut PoleLabels = &mut self.data.labels[row];
        if implicit {
            labels.implicit = text;
        } else {
            labels.emergent = text;
        }
        Ok(())
    }

    /// Drop all state and return to a freshly generated default session.
    pub fn reset(&mut self) {
        *self = SurveyModel::new();
        self.regenerate_grid();
    }
}

/// Apply the element naming rule for the given size:
/// pad with empty slots up to `size`; trim trailing entries while the list
/// is too long and the last entry still carries its synthesized default
/// name (a renamed trailing entry blocks further trimming and is kept);
/// then fill empty slots within `size` with their default names.
fn resize_elements(elements: &mut Vec<String>, size: usize) {
    while elements.len() < size {
        elements.push(String::new());
    }

    while elements.len() > size {
        let last = elements.len() - 1;
        if elements[last] == default_element_name(last) {
            elements.pop();
        } else {
            break;
        }
    }

    for (i, name) in elements.iter_mut().take(size).enumerate() {
        if name.is_empty() {
            *name = default_element_name(i);
        }
    }
}
