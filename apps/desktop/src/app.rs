//! Root application component with title bar, search widget and status bar.

use dioxus::prelude::*;

use crate::search::SearchPanel;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            div {
                class: "titlebar",
                span { class: "titlebar-title", "Comment Search" }
            }

            div {
                class: "content-area",
                SearchPanel {}
            }

            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let controller = CONTROLLER.read();
    let endpoint = app_state()
        .and_then(|s| s.config.endpoint.host_str().map(str::to_string))
        .unwrap_or_else(|| "no endpoint".to_string());
    let count = controller.status().results().len();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-endpoint", "{endpoint}" }
            if count > 0 {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-results", "{count} results" }
            }
        }
    }
}
