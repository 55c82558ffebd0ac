use dioxus::prelude::*;

use crate::components::card::{Card, CardContent};

/// Quick-stat tile shown beneath each dashboard header.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] icon: Option<Element>,
    /// Colour of the value text: `accent`, `danger`, `warning`, `success`.
    #[props(default = "accent".to_string())]
    tone: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card {
            CardContent {
                div { class: "stat-card",
                    div { class: "stat-card-text",
                        span { class: "stat-card-label", "{label}" }
                        span { class: "stat-card-value", "data-tone": "{tone}", "{value}" }
                    }
                    if let Some(icon) = icon {
                        span { class: "stat-card-icon", "data-tone": "{tone}", {icon} }
                    }
                }
            }
        }
    }
}

/// Responsive row of `StatCard`s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-grid", {children} }
    }
}
