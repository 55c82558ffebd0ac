pub mod dispatch;
pub mod ems;
pub mod leo;

use chrono::NaiveTime;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use dispatch_core::Board;
use shared_types::{AppError, Role, UserProfile};
use shared_ui::theme::{ConsoleTheme, ThemeSeed};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    ToastOptions, Toasts,
};

use crate::components::HeaderClock;
use crate::routes::Route;
use crate::session::{use_session, SessionState};
use crate::timer;

/// Role-adaptive dashboard: renders the console for the operator's role.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    match session.profile().map(|p| p.role) {
        Some(Role::Leo) => rsx! { leo::LeoDashboard {} },
        Some(Role::Ems) => rsx! { ems::EmsDashboard {} },
        Some(Role::Dispatch) => rsx! { dispatch::DispatchDashboard {} },
        None => rsx! {},
    }
}

fn theme_for(role: Role) -> ConsoleTheme {
    match role {
        Role::Leo => ConsoleTheme::Leo,
        Role::Ems => ConsoleTheme::Ems,
        Role::Dispatch => ConsoleTheme::Dispatch,
    }
}

/// Header title for each console.
fn console_title(role: Role) -> &'static str {
    match role {
        Role::Leo => "LEO Command Center",
        Role::Ems => "EMS Command Center",
        Role::Dispatch => "Dispatch Command Center",
    }
}

/// Board operation runner for the dashboards.
///
/// Stamps each operation with the current minute and reports rejections as a
/// toast. The board is left untouched when an operation fails.
#[derive(Clone, Copy)]
pub struct BoardActions {
    session: SessionState,
    toast: Toasts,
}

impl BoardActions {
    pub fn run<T>(
        &mut self,
        op: impl FnOnce(&mut Board, NaiveTime) -> Result<T, AppError>,
    ) -> Option<T> {
        match self.attempt(op) {
            Ok(value) => Some(value),
            Err(e) => {
                self.toast.error(e.message, ToastOptions::new());
                None
            }
        }
    }

    /// Like [`BoardActions::run`] but hands the error back for forms that
    /// show it inline.
    pub fn attempt<T>(
        &mut self,
        op: impl FnOnce(&mut Board, NaiveTime) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let now = timer::stamp();
        self.session.apply(|board| op(board, now))
    }

    pub fn success(&self, message: impl Into<String>) {
        self.toast.success(message.into(), ToastOptions::new());
    }
}

pub fn use_board_actions() -> BoardActions {
    BoardActions {
        session: use_session(),
        toast: use_toast(),
    }
}

/// Title bar shared by the three consoles.
#[component]
fn DashboardHeader(role: Role, on_duty: bool) -> Element {
    let mut session = use_session();
    let mut actions = use_board_actions();
    let title = console_title(role);
    let duty_label = if on_duty { "ON DUTY" } else { "OFF DUTY" };
    let duty_variant = if on_duty { BadgeVariant::Success } else { BadgeVariant::Secondary };
    let (toggle_label, toggle_variant) = if on_duty {
        ("Go Off Duty", ButtonVariant::Outline)
    } else {
        ("Go On Duty", ButtonVariant::Success)
    };

    rsx! {
        ThemeSeed { theme: theme_for(role) }
        header { class: "dashboard-header",
            div { class: "dashboard-header-title",
                h1 { "{title}" }
                if role.has_duty_toggle() {
                    Badge { variant: duty_variant, dot: true, "{duty_label}" }
                }
            }
            div { class: "dashboard-header-actions",
                if role.has_duty_toggle() {
                    Button {
                        variant: toggle_variant,
                        size: ButtonSize::Sm,
                        onclick: move |_| {
                            actions.run(|board, now| Ok(board.toggle_duty(now)));
                        },
                        "{toggle_label}"
                    }
                }
                HeaderClock {}
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Sm,
                    onclick: move |_| {
                        session.logout();
                        navigator().replace(Route::Login {});
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Logout"
                }
            }
        }
    }
}

/// Operator name, badge, and affiliation.
#[component]
fn ProfileCard(profile: UserProfile, badge: String) -> Element {
    let affiliation = profile.affiliation();

    rsx! {
        Card {
            CardContent {
                div { class: "profile-card",
                    div {
                        p { class: "profile-card-name", "{profile.name}" }
                        p { class: "profile-card-badge", "Badge #{badge}" }
                    }
                    p { class: "profile-card-affiliation", "{affiliation}" }
                }
            }
        }
    }
}

/// Everything a console needs to render one frame.
#[derive(Clone, PartialEq)]
struct ConsoleFrame {
    profile: UserProfile,
    badge: String,
    board: Board,
}

/// Snapshot of the active session. `None` only while the guard redirects.
fn use_console_frame() -> Option<ConsoleFrame> {
    let session = use_session();
    Some(ConsoleFrame {
        profile: session.profile()?,
        badge: session.badge()?,
        board: session.board()?,
    })
}
