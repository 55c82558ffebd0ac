use dioxus::prelude::*;

/// Native `<select>` styled for the console forms.
///
/// Children are `option { value: "...", "Label" }` elements. A non-empty
/// `placeholder` renders a leading empty option so "nothing selected" is a
/// distinct state. `error` is shown under the control.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                disabled: disabled,
                "aria-invalid": "{invalid}",
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", disabled: true, "{placeholder}" }
                }
                {children}
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
