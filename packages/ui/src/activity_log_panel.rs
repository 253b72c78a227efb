use dioxus::prelude::*;

use crate::activity_log::use_activity_log;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Table of recent API requests, newest on top.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let current = log();
    let shown = current.shown();
    let summary = format!(
        "{} requests, {} failed",
        current.entries.len(),
        current.failure_count()
    );

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        section {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                span { "{summary}" }
                div {
                    class: "activity-log-header-actions",
                    label {
                        class: "activity-log-filter",
                        input {
                            r#type: "checkbox",
                            checked: current.failures_only,
                            onchange: move |evt: FormEvent| log.write().failures_only = evt.checked(),
                        }
                        " Failures only"
                    }
                    button {
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if shown.is_empty() {
                    p { class: "activity-log-empty", "No requests to show." }
                } else {
                    table {
                        class: "activity-log-table",
                        tbody {
                            for (i, entry) in shown.into_iter().enumerate() {
                                tr {
                                    key: "{i}",
                                    class: entry.level.css_class(),
                                    td {
                                        class: "activity-log-time",
                                        {entry.timestamp.unwrap_or_default()}
                                    }
                                    td { class: "activity-log-method", "{entry.method}" }
                                    td { class: "activity-log-target", "{entry.target}" }
                                    td { "{entry.outcome}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Navbar button opening the request table; shows the failure count once
/// anything went wrong.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let failures = log().failure_count();

    rsx! {
        button {
            class: if failures > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            if failures > 0 {
                "Requests ({failures} failed)"
            } else {
                "Requests"
            }
        }
    }
}
