use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "console-tabs", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "console-tab-list", None, false));

    rsx! {
        prim::TabList { ..props }
    }
}

#[component]
pub fn TabTrigger(mut props: prim::TabTriggerProps) -> Element {
    if props.class.is_none() {
        props.class = Some("console-tab-trigger".to_string());
    }

    rsx! {
        prim::TabTrigger { ..props }
    }
}

#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("console-tab-content".to_string());
    }

    rsx! {
        prim::TabContent { ..props }
    }
}

/// Icon plus text label for a `TabTrigger`.
#[component]
pub fn TabLabel(icon: Element, text: String) -> Element {
    rsx! {
        span { class: "console-tab-label",
            span { class: "console-tab-icon", {icon} }
            span { "{text}" }
        }
    }
}
