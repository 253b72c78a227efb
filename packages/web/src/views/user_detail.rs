use dioxus::prelude::*;

use records::{ClientError, Record, RecordId, RecordService};
use ui::{log_request, use_activity_log, use_record_client, LogLevel, RecordEditor};

use crate::Route;

#[component]
pub fn UserDetail(id: RecordId) -> Element {
    // Track the id in a signal so the fetch re-runs when the route param changes
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let client = use_record_client();
    let mut user = use_signal(|| Option::<Record>::None);
    let mut load_error = use_signal(|| Option::<ClientError>::None);
    let mut activity_log = use_activity_log();

    // Fetch once per id
    let _loader = use_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move {
            user.set(None);
            load_error.set(None);
            let target = client.target(Some(id));
            match client.get(id).await {
                Ok(record) => {
                    log_request(&mut activity_log, LogLevel::Info, "GET", &target, "Loaded");
                    user.set(Some(record));
                }
                Err(e) => {
                    let level = match e {
                        ClientError::NotFound(_) => LogLevel::Warning,
                        _ => LogLevel::Error,
                    };
                    log_request(&mut activity_log, level, "GET", &target, &e.to_string());
                    load_error.set(Some(e));
                }
            }
        }
    });

    rsx! {
        if let Some(record) = user() {
            RecordEditor {
                key: "{id}",
                record: record,
            }
        } else if let Some(err) = load_error() {
            div {
                class: "page",
                p { class: "record-error", "{err}" }
                Link { to: Route::Users {}, "Back to users" }
            }
        } else {
            div {
                class: "page loading",
                h2 { "Loading..." }
            }
        }
    }
}
