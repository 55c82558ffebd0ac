use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdX};
use dioxus_free_icons::Icon;
use shared_types::{format_hhmm, Call, CallStatus, Priority, Unit, UnitId};
use shared_ui::{Badge, Button, ButtonSize, ButtonVariant, FormSelect};

use crate::format_helpers::{call_status_variant, priority_variant};

/// One call in the LEO/EMS queue with its decision controls.
///
/// Accept/Deny show for pending calls while on duty. Accepted calls get a
/// unit picker when the board has a roster.
#[component]
pub fn CallCard(
    call: Call,
    on_duty: bool,
    #[props(default)] units: Vec<Unit>,
    #[props(default)] assigned_name: Option<String>,
    on_accept: EventHandler<u32>,
    on_deny: EventHandler<u32>,
    #[props(default)] on_dispatch: Option<EventHandler<(u32, UnitId)>>,
) -> Element {
    let id = call.id;
    let time = format_hhmm(call.time);
    let priority_label = format!("{} Priority", call.priority);
    let show_decision = call.status == CallStatus::Pending && on_duty;
    let show_picker = call.status == CallStatus::Accepted && !units.is_empty();
    let urgent = call.priority == Priority::High && call.status.is_open();
    let options: Vec<(String, String)> = units
        .iter()
        .map(|u| (u.id.to_string(), u.label()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./components.css") }
        div { class: "call-card", "data-urgent": "{urgent}",
            div { class: "call-card-main",
                div { class: "call-card-heading",
                    h3 { class: "call-card-type", "{call.call_type}" }
                    Badge { variant: priority_variant(call.priority), "{priority_label}" }
                    span { class: "call-card-time", "{time}" }
                }
                p { class: "call-card-address", "{call.address}" }
                if let Some(description) = call.description.clone() {
                    p { class: "call-card-description", "{description}" }
                }
                div { class: "call-card-status",
                    Badge { variant: call_status_variant(call.status), "{call.status}" }
                    if let Some(name) = assigned_name {
                        span { class: "call-card-unit", "Assigned: {name}" }
                    }
                }
            }

            div { class: "call-card-actions",
                if show_decision {
                    Button {
                        variant: ButtonVariant::Success,
                        size: ButtonSize::Sm,
                        onclick: move |_| on_accept.call(id),
                        Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                        "Accept"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        size: ButtonSize::Sm,
                        onclick: move |_| on_deny.call(id),
                        Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                        "Deny"
                    }
                }
                if show_picker {
                    FormSelect {
                        value: String::new(),
                        placeholder: "Dispatch Unit",
                        onchange: move |e: Event<FormData>| {
                            let value = e.value();
                            if value.is_empty() {
                                return;
                            }
                            if let Some(handler) = &on_dispatch {
                                handler.call((id, UnitId::from(value)));
                            }
                        },
                        for (value, label) in options {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
