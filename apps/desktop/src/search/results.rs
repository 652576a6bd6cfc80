//! Result area: loading indicator, error, empty notice or the result list.

use comment_search_core::SearchStatus;
use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn ResultsPanel() -> Element {
    let controller = CONTROLLER.read();
    let max_len = truncate_length();

    match controller.status() {
        SearchStatus::Idle => rsx! {
            div {
                class: "results-empty",
                span { "Type to search..." }
            }
        },
        SearchStatus::Loading => rsx! {
            div {
                class: "loading-indicator",
                span { class: "spinner" }
                span { "Searching..." }
            }
        },
        SearchStatus::Failed(err) => {
            let notice = err.notice();
            rsx! {
                div { class: "error-message", "{notice}" }
            }
        }
        SearchStatus::Loaded(items) if items.is_empty() => rsx! {
            div { class: "no-results", "No results found" }
        },
        SearchStatus::Loaded(items) => rsx! {
            ul {
                class: "search-results",
                for (i, item) in items.iter().enumerate() {
                    li {
                        key: "{i}",
                        class: "result-item",
                        div {
                            class: "result-header",
                            span { class: "result-name", {item.name().to_string()} }
                            span { class: "result-email", {item.email().to_string()} }
                        }
                        p { class: "result-body", {item.body_preview(max_len)} }
                    }
                }
            }
        },
    }
}
