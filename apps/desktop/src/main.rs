//! Comment Search Desktop: Dioxus-powered typeahead search over the comments API.

use dioxus::prelude::*;
use tracing::{error, info};

mod app;
mod search;
mod state;

use app::App;
use state::AppState;

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("comment_search=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Config and HTTP client are built before launch; the UI only reads them.
    let config = match std::env::current_dir() {
        Ok(cwd) => comment_search_core::load_search_config(&cwd),
        Err(e) => {
            error!(error = %e, "Could not determine current directory, using defaults");
            comment_search_core::SearchConfig::default()
        }
    };
    info!(endpoint = %config.endpoint, terms = config.vocabulary.len(), "Starting");

    match AppState::from_config(config) {
        Ok(app_state) => {
            if state::install(app_state).is_err() {
                error!("App state installed twice");
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!(error = %e, "Could not build HTTP client");
            std::process::exit(1);
        }
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((10, 10, 10, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Comment Search")
                            .with_inner_size(LogicalSize::new(900.0, 700.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 400.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
