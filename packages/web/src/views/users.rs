use dioxus::prelude::*;

use records::{ClientError, RecordCollection, RecordId, RecordService};
use ui::icons::FaPlus;
use ui::{log_request, notify_failure, use_activity_log, use_record_client, Icon, LogLevel, RecordTable};

use crate::Route;

#[component]
pub fn Users() -> Element {
    let client = use_record_client();
    let mut users = use_signal(RecordCollection::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<ClientError>::None);
    let mut deleting = use_signal(|| Option::<RecordId>::None);
    let mut activity_log = use_activity_log();
    let nav = use_navigator();

    // Load the collection on mount
    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let target = client.target(None);
                match client.list().await {
                    Ok(records) => {
                        let listed = RecordCollection::from_records(records);
                        let note = format!("Loaded {} users", listed.len());
                        log_request(&mut activity_log, LogLevel::Info, "GET", &target, &note);
                        users.set(listed);
                        load_error.set(None);
                    }
                    Err(e) => {
                        log_request(&mut activity_log, LogLevel::Error, "GET", &target, &e.to_string());
                        load_error.set(Some(e));
                    }
                }
                loading.set(false);
            }
        }
    });

    let on_delete = move |id: RecordId| {
        if deleting().is_some() {
            return;
        }
        deleting.set(Some(id));
        let client = client.clone();
        spawn(async move {
            let target = client.target(Some(id));
            let reply = client.delete(id).await;
            let result = users.write().settle_delete(id, reply);
            deleting.set(None);
            match result {
                Ok(()) => {
                    log_request(&mut activity_log, LogLevel::Success, "DELETE", &target, "Deleted");
                }
                Err(e) => {
                    log_request(&mut activity_log, LogLevel::Error, "DELETE", &target, &e.to_string());
                    notify_failure(&format!("Could not delete user {id}: {e}"));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { "Users" }

            if let Some(err) = load_error() {
                p { class: "record-error", "Could not load users: {err}" }
            } else if loading() {
                p { "Loading..." }
            } else if users.read().is_empty() {
                p { "No users yet." }
            } else {
                RecordTable {
                    users: users(),
                    on_select: move |id: RecordId| {
                        nav.push(Route::UserDetail { id });
                    },
                    on_delete: on_delete,
                    deleting: deleting(),
                }
            }

            Link {
                to: Route::NewUser {},
                class: "add-user",
                Icon { icon: FaPlus, width: 12, height: 12 }
                " Add User"
            }
        }
    }
}
