use dioxus::prelude::*;

/// Multi-line input for call descriptions and radio messages.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] error: Option<String>,
    #[props(default = 3)] rows: u32,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                rows: "{rows}",
                "aria-invalid": "{invalid}",
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
