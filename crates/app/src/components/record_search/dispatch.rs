use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdDatabase;
use dioxus_free_icons::Icon;
use dispatch_core::records::dispatch_records;
use dispatch_core::RecordSystem;
use shared_types::{AppConfig, DispatchHit, SearchKind, SearchOutcome};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect};

use super::{use_search_panel, NoRecords, PersonCard, SearchBar, VehicleCard};

/// Dispatch-center database: person by name or vehicle by plate.
#[component]
pub fn DispatchSearch() -> Element {
    let config: AppConfig = use_context();
    let mut panel = use_search_panel::<DispatchHit>();
    let mut kind = use_signal(SearchKind::default);

    let search = move || {
        let kind = kind();
        panel.start(RecordSystem::Dispatch, &config.search, move |q| {
            dispatch_records().search(kind, q)
        })
    };

    let placeholder = match kind() {
        SearchKind::Person => "Enter full name (Try: John Doe, Jane Smith, Robert Johnson)",
        SearchKind::Vehicle => "Enter license plate (Try: ABC123, XYZ789, LMN456)",
    };
    let kind_value = kind().as_str();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdDatabase> { icon: LdDatabase, width: 20, height: 20 } },
                    "Database Search"
                }
                CardDescription { "Search person and vehicle records" }
            }
            CardContent {
                div { class: "search-kind",
                    FormSelect {
                        label: "Search Type",
                        value: "{kind_value}",
                        onchange: move |e: FormEvent| {
                            kind.set(SearchKind::from_str_or_default(&e.value()));
                            panel.reset();
                        },
                        option { value: "person", "Person" }
                        option { value: "vehicle", "Vehicle" }
                    }
                }
                SearchBar {
                    value: panel.query.read().clone(),
                    placeholder: placeholder.to_string(),
                    button_label: "Search",
                    searching: panel.is_searching(),
                    enabled: panel.can_search(),
                    on_input: move |value: String| panel.query.set(value),
                    on_search: move |_| search(),
                }

                match panel.outcome() {
                    Some(SearchOutcome::Found { hit: DispatchHit::Person(person), .. }) => rsx! {
                        div { class: "search-results", PersonCard { person } }
                    },
                    Some(SearchOutcome::Found { hit: DispatchHit::Vehicle(vehicle), .. }) => rsx! {
                        div { class: "search-results", VehicleCard { vehicle } }
                    },
                    Some(SearchOutcome::NoRecords { query }) => rsx! {
                        div { class: "search-results", NoRecords { query } }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
