//! # Repgrid — Repertory-Grid Selection Engine
//!
//! Administers a repertory-grid elicitation instrument: enumerates every
//! combinatorially distinct way of marking K of N elements as selected in
//! a row, assembles the rows into a grid (optionally shuffled,
//! reproducibly when seeded), and keeps a single session's participant
//! responses — free-text pole labels and per-element ratings — consistent
//! with the grid's shape as settings change.
//!
//! ## Layout
//!
//! | Concern | Module |
//! |---------|--------|
//! | Selection-row enumeration (all C(N,K) rows, canonical order) | [`combinatorics`] |
//! | Random sources: ambient and seeded SplitMix64 | [`rng`] |
//! | Fisher–Yates row shuffle | [`shuffle`] |
//! | Grid generation (enumerate + optional shuffle) | [`generator`] |
//! | Settings, grid, and response data structures | [`types`] |
//! | Survey state model and its consistency rules | [`model`] |
//! | Delimited-text report assembly | [`export`] |
//! | Session snapshot persistence | [`storage`] |
//! | HTTP administration API | [`server`] |
//!
//! Grids here are survey instruments, not datasets: N stays in the single
//! or low double digits, so every computation is a bounded, synchronous
//! call. The model serializes all mutation; collaborators only ever read
//! complete snapshots.

pub mod combinatorics;
pub mod constants;
pub mod env_config;
pub mod export;
pub mod generator;
pub mod model;
pub mod rng;
pub mod server;
pub mod shuffle;
pub mod storage;
pub mod types;
