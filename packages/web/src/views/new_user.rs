use dioxus::prelude::*;

use records::RecordId;
use ui::RecordEditor;

use crate::Route;

/// Blank creation form; moves to the new user's page once the server accepts it.
#[component]
pub fn NewUser() -> Element {
    let nav = use_navigator();

    rsx! {
        RecordEditor {
            on_created: move |id: RecordId| {
                nav.push(Route::UserDetail { id });
            },
        }
    }
}
