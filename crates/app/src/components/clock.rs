use dioxus::prelude::*;
use shared_types::AppConfig;

use crate::format_helpers::{clock_date, clock_time};
use crate::timer;

/// Live time and date in the dashboard header.
#[component]
pub fn HeaderClock() -> Element {
    let config: AppConfig = use_context();
    let mut now = use_signal(timer::now);
    let tick = config.clock.tick();

    use_future(move || async move {
        loop {
            timer::sleep(tick).await;
            now.set(timer::now());
        }
    });

    let time = clock_time(now());
    let date = clock_date(now());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./components.css") }
        div { class: "header-clock",
            p { class: "header-clock-time", "{time}" }
            p { class: "header-clock-date", "{date}" }
        }
    }
}
