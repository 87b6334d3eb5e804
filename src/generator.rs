//! Grid generation: enumerate selection rows, then optionally shuffle.

use crate::combinatorics::enumerate_rows;
use crate::rng::{AmbientSource, RandomSource, SplitMix64};
use crate::shuffle::fisher_yates;
use crate::types::{Grid, Settings};

/// Build the grid for the given settings.
///
/// With `shuffle` off the canonical enumeration order is returned
/// unchanged, regardless of the seed fields. With `shuffle` on, the row
/// order is permuted by a source that is seeded iff `use_seed` is set —
/// so identical settings with `use_seed` produce identical grids on every
/// call.
///
/// Callers must hand in validated settings (`size >= 2`,
/// `1 <= select_count <= size - 1`); the model enforces this at its
/// boundary.
pub fn generate(settings: &Settings) -> Grid {
    let mut rows = enumerate_rows(settings.size, settings.select_count);

    if settings.shuffle {
        let mut source: Box<dyn RandomSource> = if settings.use_seed {
            Box::new(SplitMix64::new(settings.seed as u64))
        } else {
            Box::new(AmbientSource::new())
        };
        fisher_yates(&mut rows, source.as_mut());
    }

    Grid::new(rows)
}
