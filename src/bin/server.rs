use std::sync::{Arc, Mutex};

use tracing::info;
use tracing_subscriber::EnvFilter;

use repgrid::env_config;
use repgrid::model::SurveyModel;
use repgrid::server::{create_router, SessionState};
use repgrid::storage::SessionStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = env_config::server_port();
    let store = SessionStore::new(env_config::data_dir());

    let model = match store
        .load_session()
        .and_then(|(settings, data)| SurveyModel::from_snapshot(settings, data))
    {
        Some(model) => {
            info!(rows = model.grid().row_count(), "restored persisted session");
            model
        }
        None => {
            let mut model = SurveyModel::new();
            model.regenerate_grid();
            info!(rows = model.grid().row_count(), "starting fresh session");
            model
        }
    };

    let state = Arc::new(SessionState {
        model: Mutex::new(model),
        store,
    });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    info!(port, "repgrid API server running, press Ctrl+C to stop");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("server stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
