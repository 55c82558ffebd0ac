use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdClock, LdHeartPulse, LdMessageSquare, LdTriangleAlert,
};
use dioxus_free_icons::Icon;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, StatCard, StatGrid, TabContent,
    TabLabel, TabList, TabTrigger, Tabs,
};

use super::{use_board_actions, use_console_frame, DashboardHeader, ProfileCard};
use crate::components::{ActivityLog, CallCard, MessageBox};

/// Paramedic crew console. Same call queue as LEO but without a unit roster
/// or record search.
#[component]
pub fn EmsDashboard() -> Element {
    let mut actions = use_board_actions();
    let Some(frame) = use_console_frame() else {
        return rsx! {};
    };

    let board = frame.board;
    let on_duty = board.on_duty();
    let stats = board.stats();
    let active = stats.active_calls.to_string();
    let high = stats.high_priority.to_string();
    let pending = stats.open_calls.to_string();
    let (duty_value, duty_tone) = if on_duty { ("ON", "success") } else { ("OFF", "danger") };
    let calls = board.calls().to_vec();
    let log = board.log().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            DashboardHeader { role: board.role(), on_duty }

            main { class: "dashboard-body",
                ProfileCard { profile: frame.profile, badge: frame.badge }

                StatGrid {
                    StatCard {
                        label: "Emergency Calls",
                        value: active,
                        icon: rsx! { Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "High Priority",
                        value: high,
                        tone: "danger",
                        icon: rsx! { Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "Awaiting Response",
                        value: pending,
                        tone: "warning",
                        icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 28, height: 28 } },
                    }
                    StatCard {
                        label: "Status",
                        value: "{duty_value}",
                        tone: "{duty_tone}",
                        icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 28, height: 28 } },
                    }
                }

                Tabs { default_value: "calls", horizontal: true,
                    TabList {
                        TabTrigger { value: "calls", index: 0usize,
                            TabLabel {
                                icon: rsx! { Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 16, height: 16 } },
                                text: "Emergency Calls",
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
                    }

                    TabContent { value: "calls", index: 0usize,
                        Card {
                            CardHeader {
                                CardTitle { "Emergency Calls" }
                                CardDescription { "Medical calls routed to this station" }
                            }
                            CardContent {
                                for call in calls {
                                    CallCard {
                                        key: "{call.id}",
                                        call: call.clone(),
                                        on_duty,
                                        on_accept: move |id: u32| {
                                            actions.run(|board, now| board.accept_call(id, now).map(|_| ()));
                                        },
                                        on_deny: move |id: u32| {
                                            actions.run(|board, now| board.deny_call(id, now).map(|_| ()));
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
                }
            }
        }
    }
}
