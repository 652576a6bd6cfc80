//! Search input row: text field plus submit button.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let controller = CONTROLLER.read();
    let query = controller.query().to_string();

    rsx! {
        div {
            class: "search-field",

            span { class: "search-label", "SEARCH COMMENTS" }

            div {
                class: "search-input-row",

                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search comments (more than 3 characters)...",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        CONTROLLER.write().set_query(e.value());
                    },
                    onkeyup: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            let pending = CONTROLLER.write().begin_search();
                            run_search(pending);
                        }
                    },
                }

                button {
                    class: "submit-btn",
                    onclick: move |_| {
                        let pending = CONTROLLER.write().begin_search();
                        run_search(pending);
                    },
                    "Search"
                }
            }
        }
    }
}
