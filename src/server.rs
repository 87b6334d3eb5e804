//! Axum HTTP server: the administration surface for one survey session.
//!
//! Every mutating endpoint routes through the [`SurveyModel`] behind a
//! mutex, persists a whole-session snapshot, and responds with the full
//! session state (settings + grid + response) so the caller can re-render
//! without further reads. Contract violations map to 400.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/session` | Full session state |
//! | GET | `/export` | Delimited-text report (optional `separator` query) |
//! | POST | `/settings/size` | Set element count N |
//! | POST | `/settings/select_count` | Set per-row selection count K |
//! | POST | `/settings/elements` | Replace the element name list |
//! | POST | `/settings/shuffle` | Set shuffle/seed configuration |
//! | POST | `/settings/rating_points` | Set rating-scale point count |
//! | POST | `/settings/separator` | Set the export separator |
//! | POST | `/participant` | Set the participant id |
//! | POST | `/rating` | Record one rating cell |
//! | POST | `/label` | Record one pole label |
//! | POST | `/regenerate` | Regenerate the grid from current settings |
//! | POST | `/reset` | Reset the session and clear stored snapshots |

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::export;
use crate::model::{ModelError, SurveyModel};
use crate::storage::SessionStore;

/// Shared state: the model behind a mutex (model operations must be
/// serialized) plus the snapshot store.
pub struct SessionState {
    pub model: Mutex<SurveyModel>,
    pub store: SessionStore,
}

pub type AppState = Arc<SessionState>;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/session", get(handle_get_session))
        .route("/export", get(handle_export))
        .route("/settings/size", post(handle_set_size))
        .route("/settings/select_count", post(handle_set_select_count))
        .route("/settings/elements", post(handle_set_elements))
        .route("/settings/shuffle", post(handle_set_shuffle))
        .route("/settings/rating_points", post(handle_set_rating_points))
        .route("/settings/separator", post(handle_set_separator))
        .route("/participant", post(handle_set_participant))
        .route("/rating", post(handle_set_rating))
        .route("/label", post(handle_set_label))
        .route("/regenerate", post(handle_regenerate))
        .route("/reset", post(handle_reset))
        .layer(cors)
        .with_state(state)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct SizeRequest {
    size: usize,
}

#[derive(Deserialize)]
struct SelectCountRequest {
    select_count: usize,
}

#[derive(Deserialize)]
struct ElementsRequest {
    elements: Vec<String>,
}

#[derive(Deserialize)]
struct ShuffleRequest {
    shuffle: bool,
    #[serde(default)]
    use_seed: bool,
    #[serde(default)]
    seed: i64,
}

#[derive(Deserialize)]
struct RatingPointsRequest {
    rating_points: i32,
}

#[derive(Deserialize)]
struct SeparatorRequest {
    separator: String,
}

#[derive(Deserialize)]
struct ParticipantRequest {
    participant_id: i64,
}

#[derive(Deserialize)]
struct RatingRequest {
    row: usize,
    element: usize,
    value: i32,
}

#[derive(Deserialize)]
struct LabelRequest {
    row: usize,
    #[serde(default)]
    implicit: bool,
    text: String,
}

#[derive(Deserialize)]
struct ExportQuery {
    separator: Option<String>,
}

// ── Helpers ─────────────────────────────────────────────────────────

type ApiError = (StatusCode, Json<serde_json::Value>);

fn error_response(status: StatusCode, msg: &str) -> ApiError {
    (status, Json(serde_json::json!({ "error": msg })))
}

fn contract_violation(err: ModelError) -> ApiError {
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn lock_model(state: &SessionState) -> MutexGuard<'_, SurveyModel> {
    // A poisoned lock means a handler panicked mid-operation; the model
    // may hold a half-applied mutation, so there is nothing to salvage.
    state.model.lock().expect("survey model mutex poisoned")
}

/// Full session state: everything a UI needs to re-render.
fn session_json(model: &SurveyModel) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "settings": model.settings(),
        "grid": model.grid().rows(),
        "response": model.data(),
    }))
}

/// Persist a whole-session snapshot. Snapshot failures are logged, not
/// surfaced: the in-memory session stays authoritative.
fn persist(state: &SessionState, model: &SurveyModel) {
    if let Err(err) = state.store.save_settings(model.settings()) {
        warn!(%err, "failed to persist settings snapshot");
    }
    if let Err(err) = state.store.save_response(model.data()) {
        warn!(%err, "failed to persist response snapshot");
    }
}

/// Apply one model operation, persist, and answer with the full session.
fn mutate(
    state: &SessionState,
    op: impl FnOnce(&mut SurveyModel) -> Result<(), ModelError>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut model = lock_model(state);
    op(&mut model).map_err(contract_violation)?;
    persist(state, &model);
    Ok(session_json(&model))
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_session(State(state): State<AppState>) -> Json<serde_json::Value> {
    let model = lock_model(&state);
    session_json(&model)
}

async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> impl IntoResponse {
    let model = lock_model(&state);
    let report = match params.separator {
        Some(sep) => export::build_report_with_separator(model.settings(), model.data(), &sep),
        None => export::build_report(model.settings(), model.data()),
    };
    if let Err(err) = state
        .store
        .save_report(model.data().participant_id, &report)
    {
        warn!(%err, "failed to persist report");
    }
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report,
    )
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_set_size(
    State(state): State<AppState>,
    Json(req): Json<SizeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| m.set_size(req.size))
}

async fn handle_set_select_count(
    State(state): State<AppState>,
    Json(req): Json<SelectCountRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| m.set_select_count(req.select_count))
}

async fn handle_set_elements(
    State(state): State<AppState>,
    Json(req): Json<ElementsRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| {
        m.set_elements(req.elements);
        Ok(())
    })
}

async fn handle_set_shuffle(
    State(state): State<AppState>,
    Json(req): Json<ShuffleRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| {
        m.set_shuffle_options(req.shuffle, req.use_seed, req.seed);
        Ok(())
    })
}

async fn handle_set_rating_points(
    State(state): State<AppState>,
    Json(req): Json<RatingPointsRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| m.set_rating_points(req.rating_points))
}

async fn handle_set_separator(
    State(state): State<AppState>,
    Json(req): Json<SeparatorRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| {
        m.set_separator(req.separator);
        Ok(())
    })
}

async fn handle_set_participant(
    State(state): State<AppState>,
    Json(req): Json<ParticipantRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| {
        m.set_participant(req.participant_id);
        Ok(())
    })
}

async fn handle_set_rating(
    State(state): State<AppState>,
    Json(req): Json<RatingRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| m.set_rating(req.row, req.element, req.value))
}

async fn handle_set_label(
    State(state): State<AppState>,
    Json(req): Json<LabelRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| m.set_label(req.row, req.implicit, req.text))
}

async fn handle_regenerate(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    mutate(&state, |m| {
        m.regenerate_grid();
        Ok(())
    })
}

async fn handle_reset(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let mut model = lock_model(&state);
    model.reset();
    if let Err(err) = state.store.clear() {
        warn!(%err, "failed to clear session store");
    }
    persist(&state, &model);
    Ok(session_json(&model))
}
