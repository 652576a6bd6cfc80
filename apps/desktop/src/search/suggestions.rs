//! Typeahead dropdown under the input.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn SuggestionList() -> Element {
    let controller = CONTROLLER.read();

    if !controller.suggestions_visible() {
        return rsx! {};
    }

    rsx! {
        ul {
            class: "suggestions-list",
            for term in controller.suggestions().iter().cloned() {
                li {
                    key: "{term}",
                    class: "suggestion-item",
                    onclick: {
                        let term = term.clone();
                        move |_| {
                            let pending = CONTROLLER.write().select_suggestion(&term);
                            run_search(pending);
                        }
                    },
                    "{term}"
                }
            }
        }
    }
}
