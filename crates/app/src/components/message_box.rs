use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMessageSquare;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, Card, CardContent, CardHeader, CardTitle, Textarea};

/// Free-text message to dispatch. The text is cleared once `on_send`
/// reports it was accepted.
#[component]
pub fn MessageBox(on_send: Callback<String, bool>) -> Element {
    let mut text = use_signal(String::new);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./components.css") }
        Card {
            CardHeader {
                CardTitle { "Send Message" }
            }
            CardContent {
                div { class: "message-box",
                    Textarea {
                        placeholder: "Type your message to dispatch here...",
                        rows: 4,
                        value: text(),
                        on_input: move |e: FormEvent| text.set(e.value()),
                    }
                    Button {
                        size: ButtonSize::Lg,
                        disabled: text().trim().is_empty(),
                        onclick: move |_| {
                            if on_send.call(text()) {
                                text.set(String::new());
                            }
                        },
                        Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 16, height: 16 }
                        "Send Message"
                    }
                }
            }
        }
    }
}
