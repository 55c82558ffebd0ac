use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCar, LdDatabase, LdMessageSquare, LdPhone, LdRadio, LdSend, LdTriangleAlert, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    format_hhmm, AppError, BroadcastRequest, Call, CallStatus, LogEntry, LogKind,
    NewCallRequest, Priority, Recipient, Unit, UnitId, UnitStatus, UnitSummary, Urgency,
    ALL_PRIORITIES, CALL_TYPES, UNIT_STATUSES,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, FormSelect, Input, StatCard, StatGrid, TabContent, TabLabel, TabList,
    TabTrigger, Tabs, Textarea,
};

use super::{use_board_actions, use_console_frame, DashboardHeader, ProfileCard};
use crate::components::record_search::DispatchSearch;
use crate::format_helpers::{call_status_variant, priority_variant, unit_status_variant};
use crate::notify;

/// 911 call-taker console: creates calls, broadcasts to units, and keeps the
/// unit roster current.
#[component]
pub fn DispatchDashboard() -> Element {
    let Some(frame) = use_console_frame() else {
        return rsx! {};
    };

    let board = frame.board;
    let stats = board.stats();
    let active = stats.active_calls.to_string();
    let available = stats.units.available.to_string();
    let busy = stats.units.busy.to_string();
    let high = stats.high_priority.to_string();
    let available_units: Vec<Unit> = board.available_units().cloned().collect();
    let units = board.units().to_vec();
    let calls: Vec<(Call, String)> = board
        .calls()
        .iter()
        .map(|call| {
            let unit = call
                .assigned_name
                .clone()
                .unwrap_or_else(|| "Unassigned".to_string());
            (call.clone(), unit)
        })
        .collect();
    let sent: Vec<LogEntry> = board
        .log()
        .iter()
        .filter(|entry| entry.kind == LogKind::Message)
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            DashboardHeader { role: board.role(), on_duty: board.on_duty() }

            main { class: "dashboard-body",
                ProfileCard { profile: frame.profile, badge: frame.badge }

                StatGrid {
                    StatCard {
                        label: "Active Calls",
                        value: active,
                        icon: rsx! { Icon::<LdPhone> { icon: LdPhone, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "Available Units",
                        value: available,
                        tone: "success",
                        icon: rsx! { Icon::<LdCar> { icon: LdCar, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "Busy Units",
                        value: busy,
                        tone: "warning",
                        icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "High Priority",
                        value: high,
                        tone: "danger",
                        icon: rsx! { Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 28, height: 28 } },
                    }
                }

                Tabs { default_value: "calls", horizontal: true,
                    TabList {
                        TabTrigger { value: "calls", index: 0usize,
                            TabLabel {
                                icon: rsx! { Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 } },
                                text: "Dispatch Calls",
                            }
                        }
                        TabTrigger { value: "messaging", index: 1usize,
                            TabLabel {
                                icon: rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 16, height: 16 } },
                                text: "Messaging",
                            }
                        }
                        TabTrigger { value: "database", index: 2usize,
                            TabLabel {
                                icon: rsx! { Icon::<LdDatabase> { icon: LdDatabase, width: 16, height: 16 } },
                                text: "Database Search",
                            }
                        }
                        TabTrigger { value: "units", index: 3usize,
                            TabLabel {
                                icon: rsx! { Icon::<LdRadio> { icon: LdRadio, width: 16, height: 16 } },
                                text: "Unit Status",
                            }
                        }
                    }

                    TabContent { value: "calls", index: 0usize,
                        div { class: "dispatch-calls",
                            NewCallForm { units: available_units }
                            ActiveCalls { calls }
                        }
                    }

                    TabContent { value: "messaging", index: 1usize,
                        div { class: "dispatch-messaging",
                            BroadcastForm { units: units.clone() }
                            SentMessages { entries: sent }
                        }
                    }

                    TabContent { value: "database", index: 2usize,
                        DispatchSearch {}
                    }

                    TabContent { value: "units", index: 3usize,
                        UnitRoster { units, summary: stats.units }
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// New call
// ---------------------------------------------------------------------------

#[component]
fn NewCallForm(units: Vec<Unit>) -> Element {
    let mut actions = use_board_actions();
    let mut call_type = use_signal(String::new);
    let mut priority = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut unit = use_signal(String::new);
    let mut error = use_signal(|| None::<AppError>);

    let field_error = move |field: &str| {
        error
            .read()
            .as_ref()
            .and_then(|e| e.field_error(field).map(str::to_string))
    };
    // Errors not tied to a field (unit no longer available).
    let form_error = error
        .read()
        .as_ref()
        .filter(|e| e.field_errors.is_empty())
        .map(|e| e.message.clone());
    let unit_options: Vec<(String, String)> = units
        .iter()
        .map(|u| (u.id.to_string(), u.label()))
        .collect();

    let mut submit = move || {
        let request = NewCallRequest {
            call_type: call_type(),
            priority: Priority::parse(&priority()),
            address: address(),
            description: description(),
            assigned_unit: (!unit().is_empty()).then(|| UnitId::from(unit())),
        };
        match actions.attempt(|board, now| board.create_call(&request, now).cloned()) {
            Ok(call) => {
                notify::new_call(&call);
                let summary = call.summary();
                actions.success(format!("Call #{} created: {summary}", call.id));
                call_type.set(String::new());
                priority.set(String::new());
                address.set(String::new());
                description.set(String::new());
                unit.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Create New Call" }
                CardDescription { "Enter call details and dispatch a unit" }
            }
            CardContent {
                div { class: "dispatch-form",
                    FormSelect {
                        label: "Call Type",
                        placeholder: "Select call type",
                        value: call_type(),
                        error: field_error("call_type"),
                        onchange: move |e: FormEvent| call_type.set(e.value()),
                        for kind in CALL_TYPES.iter() {
                            option { key: "{kind}", value: "{kind}", "{kind}" }
                        }
                    }
                    FormSelect {
                        label: "Priority",
                        placeholder: "Select priority",
                        value: priority(),
                        error: field_error("priority"),
                        onchange: move |e: FormEvent| priority.set(e.value()),
                        for p in ALL_PRIORITIES.iter() {
                            PriorityOption { priority: *p }
                        }
                    }
                    Input {
                        label: "Address",
                        placeholder: "Enter incident address",
                        value: address(),
                        error: field_error("address"),
                        on_input: move |e: FormEvent| address.set(e.value()),
                    }
                    Textarea {
                        label: "Description",
                        placeholder: "Additional details about the call",
                        value: description(),
                        on_input: move |e: FormEvent| description.set(e.value()),
                    }
                    FormSelect {
                        label: "Assign Unit",
                        placeholder: "Select available unit",
                        value: unit(),
                        error: field_error("assigned_unit"),
                        onchange: move |e: FormEvent| unit.set(e.value()),
                        for (value, label) in unit_options {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                    if let Some(message) = form_error {
                        p { class: "dispatch-form-error", "{message}" }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| submit(),
                        Icon::<LdRadio> { icon: LdRadio, width: 16, height: 16 }
                        "Dispatch Call"
                    }
                }
            }
        }
    }
}

#[component]
fn PriorityOption(priority: Priority) -> Element {
    let label = priority.as_str();
    rsx! {
        option { value: "{label}", "{label}" }
    }
}

// ---------------------------------------------------------------------------
// Active calls
// ---------------------------------------------------------------------------

/// Dispatch-center call list with the follow-up status buttons.
#[component]
fn ActiveCalls(calls: Vec<(Call, String)>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Active Calls" }
                CardDescription { "Currently dispatched calls" }
            }
            CardContent {
                div { class: "dispatch-call-list",
                    for (call, unit) in calls {
                        DispatchCallRow { key: "{call.id}", call: call.clone(), unit }
                    }
                }
            }
        }
    }
}

#[component]
fn DispatchCallRow(call: Call, unit: String) -> Element {
    let mut actions = use_board_actions();
    let id = call.id;
    let time = format_hhmm(call.time);
    let next_steps: Vec<CallStatus> = [CallStatus::EnRoute, CallStatus::InProgress]
        .into_iter()
        .filter(|next| call.status.can_become(*next))
        .collect();

    rsx! {
        div { class: "dispatch-call",
            div { class: "dispatch-call-main",
                div { class: "dispatch-call-heading",
                    span { class: "dispatch-call-id", "#{call.id}" }
                    span { class: "dispatch-call-type", "{call.call_type}" }
                    Badge { variant: priority_variant(call.priority), "{call.priority}" }
                    Badge { variant: call_status_variant(call.status), "{call.status}" }
                }
                p { class: "dispatch-call-address", "{call.address}" }
                p { class: "dispatch-call-meta", "Unit: {unit} | Time: {time}" }
            }
            div { class: "dispatch-call-actions",
                if call.status.is_terminal() {
                    span { class: "dispatch-call-closed", "Closed" }
                }
                for next in next_steps {
                    AdvanceButton {
                        key: "{next}",
                        next,
                        onclick: move |next: CallStatus| {
                            actions.run(|board, now| board.advance_call(id, next, now).map(|_| ()));
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn AdvanceButton(next: CallStatus, onclick: EventHandler<CallStatus>) -> Element {
    let label = next.as_str();
    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            size: ButtonSize::Sm,
            onclick: move |_| onclick.call(next),
            "{label}"
        }
    }
}

// ---------------------------------------------------------------------------
// Messaging
// ---------------------------------------------------------------------------

#[component]
fn BroadcastForm(units: Vec<Unit>) -> Element {
    let mut actions = use_board_actions();
    let mut recipient = use_signal(String::new);
    let mut urgency = use_signal(|| Urgency::default().as_str().to_string());
    let mut content = use_signal(String::new);
    let mut error = use_signal(|| None::<AppError>);

    let field_error = move |field: &str| {
        error
            .read()
            .as_ref()
            .and_then(|e| e.field_error(field).map(str::to_string))
    };
    let unit_options: Vec<(String, String)> = units
        .iter()
        .map(|u| (u.id.to_string(), u.name.clone()))
        .collect();
    let groups = [Recipient::AllLeo, Recipient::AllEms, Recipient::AllUnits];
    let group_options: Vec<(String, String)> = groups
        .iter()
        .map(|r| (r.key(), r.to_string()))
        .collect();

    let send = move |_: MouseEvent| {
        let request = BroadcastRequest {
            recipient: Recipient::from_key(&recipient()),
            urgency: Urgency::from_str_or_default(&urgency()),
            content: content(),
        };
        match actions.attempt(|board, now| board.broadcast(&request, now).map(|_| ())) {
            Ok(()) => {
                actions.success("Message sent");
                content.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Send Message" }
                CardDescription { "Broadcast to field units" }
            }
            CardContent {
                div { class: "dispatch-form",
                    FormSelect {
                        label: "Recipient",
                        placeholder: "Select recipient",
                        value: recipient(),
                        error: field_error("recipient"),
                        onchange: move |e: FormEvent| recipient.set(e.value()),
                        for (value, label) in group_options {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                        for (value, label) in unit_options {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                    FormSelect {
                        label: "Urgency",
                        value: urgency(),
                        onchange: move |e: FormEvent| urgency.set(e.value()),
                        option { value: "high", "High" }
                        option { value: "normal", "Normal" }
                        option { value: "low", "Low" }
                    }
                    Textarea {
                        label: "Message",
                        placeholder: "Type your message here...",
                        rows: 4,
                        value: content(),
                        error: field_error("content"),
                        on_input: move |e: FormEvent| content.set(e.value()),
                    }
                    Button {
                        onclick: send,
                        Icon::<LdSend> { icon: LdSend, width: 16, height: 16 }
                        "Send Message"
                    }
                }
            }
        }
    }
}

#[component]
fn SentMessages(entries: Vec<LogEntry>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Sent Messages" }
            }
            CardContent {
                if entries.is_empty() {
                    p { class: "dispatch-empty", "No messages sent this shift" }
                } else {
                    div { class: "dispatch-sent",
                        for entry in entries {
                            SentMessage { key: "{entry.id}", entry: entry.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SentMessage(entry: LogEntry) -> Element {
    let time = format_hhmm(entry.time);
    rsx! {
        div { class: "dispatch-sent-entry",
            span { class: "dispatch-sent-time", "{time}" }
            span { "{entry.message}" }
        }
    }
}

// ---------------------------------------------------------------------------
// Unit roster
// ---------------------------------------------------------------------------

#[component]
fn UnitRoster(units: Vec<Unit>, summary: UnitSummary) -> Element {
    let available = summary.available.to_string();
    let busy = summary.busy.to_string();
    let unavailable = summary.unavailable.to_string();
    let total = summary.total().to_string();

    rsx! {
        StatGrid {
            StatCard { label: "Available", value: available, tone: "success" }
            StatCard { label: "Busy", value: busy, tone: "warning" }
            StatCard { label: "Out of Service", value: unavailable, tone: "danger" }
            StatCard { label: "Total Units", value: total }
        }
        Card {
            CardHeader {
                CardTitle { "Unit Roster" }
                CardDescription { "Current status of every unit on shift" }
            }
            CardContent {
                table { class: "roster-table",
                    thead {
                        tr {
                            th { "Unit" }
                            th { "Type" }
                            th { "Specialty" }
                            th { "Assigned" }
                            th { "Status" }
                            th { "Last Update" }
                        }
                    }
                    tbody {
                        for unit in units {
                            RosterRow { key: "{unit.id}", unit: unit.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RosterRow(unit: Unit) -> Element {
    let mut actions = use_board_actions();
    let id = unit.id.clone();
    let category = unit.category.as_str();
    let updated = format_hhmm(unit.last_update);
    let status_key = unit.status.key();

    rsx! {
        tr {
            td { class: "roster-unit", "{unit.name}" }
            td {
                Badge { variant: BadgeVariant::Outline, "{category}" }
            }
            td { "{unit.specialty}" }
            td { "{unit.assigned_person}" }
            td {
                div { class: "roster-status",
                    Badge { variant: unit_status_variant(unit.status), dot: true, "{unit.status}" }
                    FormSelect {
                        value: "{status_key}",
                        onchange: move |e: FormEvent| {
                            let Some(status) = UnitStatus::from_key(&e.value()) else {
                                return;
                            };
                            let id = id.clone();
                            actions.run(|board, now| board.set_unit_status(&id, status, now).map(|_| ()));
                        },
                        for status in UNIT_STATUSES.iter() {
                            StatusOption { status: *status }
                        }
                    }
                }
            }
            td { class: "roster-updated", "{updated}" }
        }
    }
}

#[component]
fn StatusOption(status: UnitStatus) -> Element {
    let key = status.key();
    let label = status.as_str();
    rsx! {
        option { value: "{key}", "{label}" }
    }
}
