use dioxus::prelude::*;
use shared_types::{format_hhmm, LogEntry};
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use crate::format_helpers::log_kind_class;

#[component]
pub fn ActivityLog(entries: Vec<LogEntry>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./components.css") }
        Card {
            CardHeader {
                CardTitle { "Activity Logs" }
            }
            CardContent {
                div { class: "activity-log",
                    for entry in entries {
                        LogLine { key: "{entry.id}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn LogLine(entry: LogEntry) -> Element {
    let time = format_hhmm(entry.time);

    rsx! {
        div { class: log_kind_class(entry.kind),
            span { class: "log-time", "[{time}]" }
            " {entry.message}"
        }
    }
}
