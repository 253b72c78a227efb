use dioxus::prelude::*;

/// A labeled button that calls `on_click`.
#[component]
pub fn ActionButton(
    label: String,
    on_click: EventHandler<()>,
    #[props(default)] disabled: bool,
    #[props(default = "".to_string())] class: String,
) -> Element {
    rsx! {
        button {
            class: "action-button {class}",
            r#type: "button",
            disabled: disabled,
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}
