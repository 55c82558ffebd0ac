use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use dispatch_core::directory::{demo_badges, normalize_badge};
use shared_types::Role;
use shared_ui::theme::{ConsoleTheme, ThemeSeed};
use shared_ui::{Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::routes::Route;
use crate::session::use_session;

/// "LEO: L001, L002, L003 | EMS: E001, E002 | Dispatch: D001, D002"
fn demo_badge_hint() -> String {
    [Role::Leo, Role::Ems, Role::Dispatch]
        .iter()
        .map(|role| {
            let label = match role {
                Role::Dispatch => "Dispatch",
                other => other.as_str(),
            };
            format!("{label}: {}", demo_badges(*role).join(", "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Badge-code prompt. The code is uppercased as typed and trimmed on submit.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut badge = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    if session.is_logged_in() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let code = normalize_badge(&badge());
        match session.login(&code) {
            Ok(profile) => {
                tracing::info!(role = %profile.role, "operator logged in");
                error_msg.set(None);
                badge.set(String::new());
                navigator().replace(Route::Dashboard {});
            }
            Err(e) => error_msg.set(Some(e.message)),
        }
    };

    let hint = demo_badge_hint();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }
        ThemeSeed { theme: ConsoleTheme::Console }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div { class: "auth-emblem",
                        Icon::<LdShield> { icon: LdShield, width: 64, height: 64 }
                    }
                    CardTitle { "Command Center" }
                    CardDescription { "Secure Access Portal" }
                }

                CardContent {
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Badge Number",
                            placeholder: "Enter your badge number",
                            value: badge(),
                            on_input: move |e: FormEvent| badge.set(e.value().to_uppercase()),
                        }

                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        Button {
                            button_type: "submit",
                            size: ButtonSize::Lg,
                            disabled: badge().trim().is_empty(),
                            "Access System"
                        }

                        div { class: "auth-demo",
                            p { "Demo Badge Numbers:" }
                            p { "{hint}" }
                        }
                    }
                }
            }
        }
    }
}
