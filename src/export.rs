//! Delimited-text report assembly.
//!
//! The report is a single text document with a participant header followed
//! by two blocks of identical shape: a ratings grid (one line per row:
//! emergent pole, per-element ratings, implicit pole) and a selection grid
//! carrying the raw 0/1 row values in place of ratings. Unset ratings
//! render as empty fields so column positions stay aligned.

use crate::types::{ResponseData, Settings};

/// Build the report using the separator stored in the settings.
pub fn build_report(settings: &Settings, data: &ResponseData) -> String {
    build_report_with_separator(settings, data, &settings.separator)
}

/// Build the report with an explicit separator override.
pub fn build_report_with_separator(settings: &Settings, data: &ResponseData, sep: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("participant{sep}{}\n", data.participant_id));
    out.push_str(&format!(
        "size{sep}{}{sep}{}\n",
        settings.size, settings.select_count
    ));
    out.push_str(&format!(
        "seed{sep}{}{sep}{}{sep}\n",
        settings.use_seed, settings.seed
    ));
    out.push_str(&format!("{sep}\n"));

    out.push_str("Ratings grid,\n");
    out.push_str(&format!("{sep}{}{sep}\n", settings.elements.join(sep)));
    for row in 0..data.grid.row_count() {
        let ratings: Vec<String> = data.ratings[row]
            .iter()
            .map(|r| r.map(|v| v.to_string()).unwrap_or_default())
            .collect();
        out.push_str(&format!(
            "{}{sep}{}{sep}{}\n",
            data.labels[row].emergent,
            ratings.join(sep),
            data.labels[row].implicit
        ));
    }

    out.push_str(&format!("{sep}\n"));

    out.push_str("Set selection grid,\n");
    out.push_str(&format!("{sep}{}{sep}\n", settings.elements.join(sep)));
    for row in 0..data.grid.row_count() {
        let cells: Vec<String> = data.grid.rows()[row]
            .iter()
            .map(|c| c.to_string())
            .collect();
        out.push_str(&format!(
            "{}{sep}{}{sep}{}\n",
            data.labels[row].emergent,
            cells.join(sep),
            data.labels[row].implicit
        ));
    }

    out
}
