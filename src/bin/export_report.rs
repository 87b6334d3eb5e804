//! Print the delimited-text report for the persisted session.
//!
//! Usage: `repgrid-export [separator]` — the optional argument overrides
//! the separator stored in the session settings.

use tracing_subscriber::EnvFilter;

use repgrid::env_config;
use repgrid::export;
use repgrid::model::SurveyModel;
use repgrid::storage::SessionStore;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let store = SessionStore::new(env_config::data_dir());
    let snapshot = store
        .load_session()
        .and_then(|(settings, data)| SurveyModel::from_snapshot(settings, data));

    let model = match snapshot {
        Some(model) => model,
        None => {
            eprintln!(
                "No persisted session found in {}",
                store.dir().display()
            );
            std::process::exit(1);
        }
    };

    let report = match std::env::args().nth(1) {
        Some(sep) => export::build_report_with_separator(model.settings(), model.data(), &sep),
        None => export::build_report(model.settings(), model.data()),
    };
    print!("{}", report);
}
