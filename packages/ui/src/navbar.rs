use dioxus::prelude::*;

use crate::RECORDS_CSS;

/// Top bar with the app title; `children` go on the right.
#[component]
pub fn Navbar(#[props(default = "Weight Tracker".to_string())] title: String, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: RECORDS_CSS }
        div {
            class: "navbar",
            span { class: "navbar-title", "{title}" }
            div { class: "navbar-actions", {children} }
        }
    }
}
