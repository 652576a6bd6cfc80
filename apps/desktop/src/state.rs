//! Global application state using Dioxus signals.

use std::sync::{Arc, OnceLock};

use comment_search_core::{
    HttpCommentSource, HttpError, PendingSearch, SearchConfig, SearchController,
};
use dioxus::prelude::*;
use tracing::warn;

/// Immutable process-wide state: built once in `main` before Dioxus launches.
pub struct AppState {
    pub config: SearchConfig,
    pub source: Arc<HttpCommentSource>,
}

impl AppState {
    pub fn from_config(config: SearchConfig) -> Result<Self, HttpError> {
        let source = HttpCommentSource::new(config.endpoint.clone())?;
        Ok(AppState { config, source: Arc::new(source) })
    }
}

static APP_STATE: OnceLock<AppState> = OnceLock::new();

/// Install the startup state. Returns the state back if one was already installed.
pub fn install(state: AppState) -> Result<(), AppState> {
    APP_STATE.set(state)
}

pub fn app_state() -> Option<&'static AppState> {
    APP_STATE.get()
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// The widget's controller: query text, suggestions and result status.
pub static CONTROLLER: GlobalSignal<SearchController> = Signal::global(|| {
    app_state().map(|s| SearchController::from_config(&s.config)).unwrap_or_default()
});

/// Run a pending search in the background and apply its outcome.
///
/// Outcomes of superseded searches are dropped by the controller.
pub fn run_search(pending: Option<PendingSearch>) {
    let Some(pending) = pending else {
        return;
    };
    let Some(state) = app_state() else {
        warn!("Search requested before app state was installed");
        return;
    };
    let source = state.source.clone();

    spawn(async move {
        let outcome = pending.run(source.as_ref()).await;
        CONTROLLER.write().complete(pending.ticket(), outcome);
    });
}

/// Character budget for result bodies.
pub fn truncate_length() -> usize {
    app_state()
        .map(|s| s.config.truncate_length)
        .unwrap_or(comment_search_core::text::DEFAULT_TRUNCATE_LENGTH)
}
