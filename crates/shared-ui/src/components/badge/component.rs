use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Warning,
    Success,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Success => "success",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline label for priorities, statuses, and counters.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    /// Render a leading status dot.
    #[props(default = false)]
    dot: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            if dot {
                span { class: "badge-dot" }
            }
            {children}
        }
    }
}
