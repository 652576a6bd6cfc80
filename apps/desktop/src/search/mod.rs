//! Search widget: input with typeahead, then the result area.

mod results;
mod search_input;
mod suggestions;

use dioxus::prelude::*;
use results::ResultsPanel;
use search_input::SearchInput;
use suggestions::SuggestionList;

#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            div {
                class: "search-box",
                SearchInput {}
                SuggestionList {}
            }
            ResultsPanel {}
        }
    }
}
