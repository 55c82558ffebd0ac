pub mod dashboard;
pub mod login;
pub mod not_found;

use dioxus::prelude::*;

use crate::session::use_session;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Sends anyone without an active session back to the badge prompt.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();

    if session.is_logged_in() {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().replace(Route::Login {});
        rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        }
    }
}
