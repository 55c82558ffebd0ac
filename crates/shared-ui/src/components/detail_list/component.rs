use dioxus::prelude::*;

/// Label/value rows for a single record.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// One row of a `DetailList`.
///
/// Plain text goes in `value`; badges and lists go in children. `alert`
/// paints the value in the danger colour (warrants, stolen status).
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    #[props(default = false)] alert: bool,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            span { class: "detail-item-label", "{label}" }
            span {
                class: "detail-item-value",
                "data-alert": "{alert}",
                if has_children {
                    {children}
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

/// Bulleted list inside a detail row. Empty lists render `empty` instead.
#[component]
pub fn DetailBullets(items: Vec<String>, #[props(default = "None".to_string())] empty: String) -> Element {
    rsx! {
        if items.is_empty() {
            span { class: "detail-bullets-empty", "{empty}" }
        } else {
            ul { class: "detail-bullets",
                for item in items {
                    li { "{item}" }
                }
            }
        }
    }
}

/// Two-column grid of record cards.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}
