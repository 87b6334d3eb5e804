//! Instrument defaults and element-name synthesis.
//!
//! A fresh session starts as a 6-element grid with 3 selections per row and
//! a 7-point rating scale, matching the defaults participants see before
//! the administrator touches any setting.

/// Default number of elements (grid columns).
pub const DEFAULT_SIZE: usize = 6;

/// Default number of elements marked selected in each row.
pub const DEFAULT_SELECT_COUNT: usize = 3;

/// Default number of discrete points on the rating scale.
pub const DEFAULT_RATING_POINTS: i32 = 7;

/// Default field separator for exported reports.
pub const DEFAULT_SEPARATOR: &str = ";";

/// Synthesized display name for the element at `index` (0-based).
///
/// Unnamed slots render as "Element 1", "Element 2", ... and the trim rule
/// treats a trailing entry as disposable only while it still carries this
/// exact name.
pub fn default_element_name(index: usize) -> String {
    format!("Element {}", index + 1)
}
