use dioxus::prelude::*;
use records::{
    EditState, Editor, EditorMode, FieldChange, Record, RecordId, SubmitOutcome, USER_FIELDS,
};

use crate::activity_log::{log_request, use_activity_log, LogLevel};
use crate::client::use_record_client;
use crate::notify::notify_failure;
use crate::{ActionButton, AttributeField, RECORDS_CSS};

/// Label of the editor's single action for its current state.
pub fn action_label(editor: &Editor) -> &'static str {
    match (editor.mode(), editor.state()) {
        (EditorMode::Create, _) => "Create User",
        (EditorMode::Update(_), EditState::Viewing) => "Edit",
        (EditorMode::Update(_), EditState::Editing) => "Save",
    }
}

fn heading(editor: &Editor) -> String {
    match editor.mode() {
        EditorMode::Create => "User Creation".to_string(),
        EditorMode::Update(_) => format!("Hello {}!", editor.record().display("name")),
    }
}

/// View/edit form for one user.
///
/// A record with an id opens read-only and the button toggles between "Edit"
/// and "Save". Without one (the default) the form is a blank creation form;
/// after the server accepts it `on_created` receives the new id. Field edits
/// only reach the server on submit, and the shown record only changes on a
/// confirmed success.
#[component]
pub fn RecordEditor(
    #[props(default)] record: Record,
    #[props(default)] on_created: EventHandler<RecordId>,
) -> Element {
    let client = use_record_client();
    let mut activity_log = use_activity_log();
    let mut editor = use_signal(move || Editor::for_existing(record));
    let mut pending = use_signal(|| false);

    let on_change = move |change: FieldChange| {
        editor.write().apply(change);
    };

    let on_action = move |_: ()| {
        if pending() {
            return;
        }
        let state = editor.read().state();
        if state == EditState::Viewing {
            editor.write().begin_edit();
            return;
        }

        let Some(submission) = editor.read().submission() else {
            return;
        };
        pending.set(true);
        let client = client.clone();
        spawn(async move {
            let method = submission.method();
            let target = client.target(submission.target_id());
            let reply = submission.send(&client).await;
            let outcome = editor.write().settle(reply);
            pending.set(false);

            match outcome {
                SubmitOutcome::Created(id) => {
                    let note = format!("Created user {id}");
                    log_request(&mut activity_log, LogLevel::Success, method, &target, &note);
                    on_created.call(id);
                }
                SubmitOutcome::Updated => {
                    log_request(&mut activity_log, LogLevel::Success, method, &target, "Saved");
                }
                SubmitOutcome::Failed(err) => {
                    log_request(&mut activity_log, LogLevel::Error, method, &target, &err.to_string());
                    notify_failure(&err.to_string());
                }
                SubmitOutcome::Ignored => {}
            }
        });
    };

    let current = editor();
    let disabled = current.fields_disabled() || pending();
    let title = heading(&current);
    let label = if pending() { "Saving..." } else { action_label(&current) };

    rsx! {
        document::Stylesheet { href: RECORDS_CSS }
        div {
            class: "record-editor",
            h1 { "{title}" }
            div {
                class: "record-fields",
                for spec in USER_FIELDS.iter().copied() {
                    AttributeField {
                        key: "{spec.name}",
                        record: current.record().clone(),
                        spec: spec,
                        disabled: disabled,
                        on_change: on_change,
                    }
                }
            }
            if let Some(err) = current.error() {
                p { class: "record-error", "{err}" }
            }
            ActionButton {
                label: label.to_string(),
                disabled: pending(),
                on_click: on_action,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_label_follows_state() {
        let mut editor = Editor::for_existing(Record::with_id(RecordId(1)).with("name", "ann"));
        assert_eq!(action_label(&editor), "Edit");
        assert_eq!(heading(&editor), "Hello ann!");

        editor.begin_edit();
        assert_eq!(action_label(&editor), "Save");

        let creating = Editor::for_new();
        assert_eq!(action_label(&creating), "Create User");
        assert_eq!(heading(&creating), "User Creation");
    }
}
