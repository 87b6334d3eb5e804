//! Shared environment configuration for the repgrid binaries.
//!
//! Consolidates the `REPGRID_PORT` and `REPGRID_DATA_DIR` reads shared by
//! the server and export binaries.

use std::path::PathBuf;

/// Read `REPGRID_PORT` (default 9000).
pub fn server_port() -> u16 {
    std::env::var("REPGRID_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9000)
}

/// Read `REPGRID_DATA_DIR` (default `data/sessions`).
pub fn data_dir() -> PathBuf {
    std::env::var("REPGRID_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/sessions"))
}
