use dioxus::prelude::*;
use shared_types::{AppConfig, FeatureFlags};

mod components;
mod format_helpers;
pub mod notify;
mod routes;
mod session;
mod timer;
use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_ROLES: Asset = asset!("/assets/themes/roles.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config: AppConfig = *dispatch_core::load_config();

    use_context_provider(|| config);
    use_context_provider(|| config.features);
    use_context_provider(|| SessionState::new(&config));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_ROLES }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Feature flags from `config.toml`, provided at the root.
pub fn use_feature_flags() -> FeatureFlags {
    use_context::<FeatureFlags>()
}
