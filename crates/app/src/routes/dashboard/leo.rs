use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCar, LdClock, LdDatabase, LdMessageSquare, LdRadio, LdShield, LdTriangleAlert,
};
use dioxus_free_icons::Icon;
use shared_types::UnitId;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, StatCard, StatGrid, TabContent,
    TabLabel, TabList, TabTrigger, Tabs,
};

use super::{use_board_actions, use_console_frame, DashboardHeader, ProfileCard};
use crate::components::record_search::{LeadsSearch, NcicSearch};
use crate::components::{ActivityLog, CallCard, MessageBox};
use crate::use_feature_flags;

/// Patrol officer console.
#[component]
pub fn LeoDashboard() -> Element {
    let mut actions = use_board_actions();
    let flags = use_feature_flags();
    let Some(frame) = use_console_frame() else {
        return rsx! {};
    };

    let board = frame.board;
    let on_duty = board.on_duty();
    let stats = board.stats();
    let active = stats.active_calls.to_string();
    let available = stats.units.available.to_string();
    let high = stats.high_priority.to_string();
    let (duty_value, duty_tone) = if on_duty { ("ON", "success") } else { ("OFF", "danger") };
    let units = board.units().to_vec();
    let calls: Vec<_> = board
        .calls()
        .iter()
        .map(|call| {
            (call.clone(), call.assigned_name.clone())
        })
        .collect();
    let log = board.log().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            DashboardHeader { role: board.role(), on_duty }

            main { class: "dashboard-body",
                ProfileCard { profile: frame.profile, badge: frame.badge }

                StatGrid {
                    StatCard {
                        label: "Active Calls",
                        value: active,
                        icon: rsx! { Icon::<LdRadio> { icon: LdRadio, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "Available Units",
                        value: available,
                        tone: "success",
                        icon: rsx! { Icon::<LdCar> { icon: LdCar, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "High Priority",
                        value: high,
                        tone: "danger",
                        icon: rsx! { Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "Status",
                        value: "{duty_value}",
                        tone: "{duty_tone}",
                        icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 28, height: 28 } },
                    }
                }

                Tabs { default_value: "calls", horizontal: true,
                    TabList {
                        TabTrigger { value: "calls", index: 0usize,
                            TabLabel {
                                icon: rsx! { Icon::<LdRadio> { icon: LdRadio, width: 16, height: 16 } },
                                text: "Active Calls",
                            }
                        }
                        TabTrigger { value: "messaging", index: 1usize,
                            TabLabel {
                                icon: rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 16, height: 16 } },
                                text: "Messaging",
                            }
                        }
                        TabTrigger { value: "logs", index: 2usize,
                            TabLabel {
                                icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 16, height: 16 } },
                                text: "Activity Logs",
                            }
                        }
                        if flags.any_records() {
                            TabTrigger { value: "database", index: 3usize,
                                TabLabel {
                                    icon: rsx! { Icon::<LdDatabase> { icon: LdDatabase, width: 16, height: 16 } },
                                    text: "Database Search",
                                }
                            }
                        }
                    }

                    TabContent { value: "calls", index: 0usize,
                        Card {
                            CardHeader {
                                CardTitle { "Incoming Calls" }
                                CardDescription { "Calls awaiting an officer decision" }
                            }
                            CardContent {
                                for (call, assigned) in calls {
                                    CallCard {
                                        key: "{call.id}",
                                        call: call.clone(),
                                        on_duty,
                                        units: units.clone(),
                                        assigned_name: assigned,
                                        on_accept: move |id: u32| {
                                            actions.run(|board, now| board.accept_call(id, now).map(|_| ()));
                                        },
                                        on_deny: move |id: u32| {
                                            actions.run(|board, now| board.deny_call(id, now).map(|_| ()));
                                        },
                                        on_dispatch: move |(id, unit): (u32, UnitId)| {
                                            actions.run(|board, now| board.dispatch_unit(id, &unit, now).map(|_| ()));
                                        },
                                    }
                                }
                            }
                        }
                    }

                    TabContent { value: "messaging", index: 1usize,
                        MessageBox {
                            on_send: move |text: String| {
                                actions
                                    .run(|board, now| board.send_message(&text, now).map(|_| ()))
                                    .is_some()
                            },
                        }
                    }

                    TabContent { value: "logs", index: 2usize,
                        ActivityLog { entries: log }
                    }

                    if flags.any_records() {
                        TabContent { value: "database", index: 3usize,
                            RecordSystems { ncic: flags.ncic, leads: flags.leads }
                        }
                    }
                }
            }
        }
    }
}

/// NCIC and LEADS sub-tabs. Disabled systems are left out.
#[component]
fn RecordSystems(ncic: bool, leads: bool) -> Element {
    let leads_index = if ncic { 1usize } else { 0usize };
    let default_tab = if ncic { "ncic" } else { "leads" };

    rsx! {
        Tabs { default_value: "{default_tab}", horizontal: true,
            TabList {
                if ncic {
                    TabTrigger { value: "ncic", index: 0usize, "NCIC" }
                }
                if leads {
                    TabTrigger { value: "leads", index: leads_index, "LEADS" }
                }
            }
            if ncic {
                TabContent { value: "ncic", index: 0usize, NcicSearch {} }
            }
            if leads {
                TabContent { value: "leads", index: leads_index, LeadsSearch {} }
            }
        }
    }
}
