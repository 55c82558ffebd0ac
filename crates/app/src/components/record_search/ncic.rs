use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use dispatch_core::records::ncic;
use dispatch_core::{RecordSource, RecordSystem};
use shared_types::{AppConfig, NcicHit, SearchOutcome};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, DetailGrid};

use super::{use_search_panel, MissingRecord, NoRecords, PersonCard, SearchBar, VehicleCard};

/// National Crime Information Center lookup by exact name or plate.
#[component]
pub fn NcicSearch() -> Element {
    let config: AppConfig = use_context();
    let mut panel = use_search_panel::<NcicHit>();

    let search = move || panel.start(RecordSystem::Ncic, &config.search, |q| ncic().search(q));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 20, height: 20 } },
                    "NCIC Database Access"
                }
                CardDescription { "National Crime Information Center - FBI Criminal Justice Database" }
            }
            CardContent {
                SearchBar {
                    value: panel.query.read().clone(),
                    placeholder: "Enter name or license plate (Try: John Doe, Jane Smith, ABC123, XYZ789)",
                    button_label: "Search NCIC",
                    searching: panel.is_searching(),
                    enabled: panel.can_search(),
                    on_input: move |value: String| panel.query.set(value),
                    on_search: move |_| search(),
                }

                match panel.outcome() {
                    Some(SearchOutcome::Found { hit, .. }) => rsx! {
                        div { class: "search-results",
                            DetailGrid {
                                match hit.person {
                                    Some(person) => rsx! { PersonCard { person } },
                                    None => rsx! { MissingRecord { message: "No person record found" } },
                                }
                                match hit.vehicle {
                                    Some(vehicle) => rsx! { VehicleCard { vehicle } },
                                    None => rsx! { MissingRecord { message: "No vehicle record found" } },
                                }
                            }
                        }
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
