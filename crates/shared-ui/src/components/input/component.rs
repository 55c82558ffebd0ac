use dioxus::prelude::*;

/// Single-line text input with optional label, inline error, and an Enter
/// shortcut used by the search and message boxes.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    /// Fired when Enter is pressed inside the field.
    #[props(default)]
    on_enter: Option<EventHandler<()>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": "{invalid}",
                oninput: move |evt| on_input.call(evt),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        if let Some(handler) = &on_enter {
                            evt.prevent_default();
                            handler.call(());
                        }
                    }
                },
                ..merged,
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
