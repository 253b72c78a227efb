use dioxus::prelude::*;
use records::{humanize, FieldChange, FieldKind, FieldSpec, Record};

/// One labeled input bound to `record[spec.name]`.
///
/// Text and number fields render a single text input (numbers get a numeric
/// keyboard hint); single-choice fields render a fieldset with one radio
/// button per choice. Raw input goes through
/// [`FieldSpec::interpret`], so a disabled field never calls `on_change` and a
/// non-integer never reaches a number field. The record itself is never
/// touched here; the caller applies the change.
#[component]
pub fn AttributeField(
    record: Record,
    spec: FieldSpec,
    disabled: bool,
    on_change: EventHandler<FieldChange>,
) -> Element {
    let label = spec.label();
    let emit = move |raw: String| {
        if let Some(change) = spec.interpret(&raw, disabled) {
            on_change.call(change);
        }
    };

    match spec.kind {
        FieldKind::Text | FieldKind::Number => {
            let value = spec.input_value(&record);
            rsx! {
                div {
                    class: "attribute-field",
                    label { r#for: spec.name, "{label}: " }
                    input {
                        id: spec.name,
                        r#type: "text",
                        inputmode: spec.input_mode(),
                        value: "{value}",
                        disabled: disabled,
                        oninput: move |evt: FormEvent| emit(evt.value()),
                    }
                }
            }
        }
        FieldKind::SingleChoice(choices) => rsx! {
            fieldset {
                class: "attribute-field attribute-choices",
                disabled: disabled,
                legend { "{label}" }
                for choice in choices.iter().copied() {
                    span {
                        key: "{choice}",
                        class: "attribute-choice",
                        input {
                            id: "{spec.name}_{choice}",
                            r#type: "radio",
                            name: spec.name,
                            value: choice,
                            checked: spec.is_selected(&record, choice),
                            disabled: disabled,
                            onchange: move |_| emit(choice.to_string()),
                        }
                        label { r#for: "{spec.name}_{choice}", {humanize(choice)} }
                    }
                }
            }
        },
    }
}
