use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use dispatch_core::records::leads;
use dispatch_core::{RecordSource, RecordSystem};
use shared_types::{AppConfig, LeadsHit, LicenseRecord, RegistrationRecord, SearchOutcome};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DetailGrid,
    DetailItem, DetailList,
};

use super::{use_search_panel, MissingRecord, NoRecords, SearchBar};

/// Law Enforcement Agencies Data System lookup by plate or licence number.
/// Keys are uppercased as they are typed.
#[component]
pub fn LeadsSearch() -> Element {
    let config: AppConfig = use_context();
    let mut panel = use_search_panel::<LeadsHit>();

    let search = move || panel.start(RecordSystem::Leads, &config.search, |q| leads().search(q));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }
        Card {
            CardHeader {
                CardTitle { icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
                    "LEADS System Access"
                }
                CardDescription { "Law Enforcement Agencies Data System - State Vehicle & License Database" }
            }
            CardContent {
                SearchBar {
                    value: panel.query.read().clone(),
                    placeholder: "Enter license plate or driver license number (Try: ABC123, D1234567)",
                    button_label: "Search LEADS",
                    searching: panel.is_searching(),
                    enabled: panel.can_search(),
                    on_input: move |value: String| panel.query.set(value.to_uppercase()),
                    on_search: move |_| search(),
                }

                match panel.outcome() {
                    Some(SearchOutcome::Found { hit, .. }) => rsx! {
                        div { class: "search-results",
                            DetailGrid {
                                match hit.vehicle {
                                    Some(registration) => rsx! { RegistrationCard { registration } },
                                    None => rsx! { MissingRecord { message: "No vehicle registration found" } },
                                }
                                match hit.license {
                                    Some(license) => rsx! { LicenseCard { license } },
                                    None => rsx! { MissingRecord { message: "No driver license found" } },
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

#[component]
fn RegistrationCard(registration: RegistrationRecord) -> Element {
    let make_model = registration.make_model();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Vehicle Registration" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "License Plate", value: registration.plate.clone() }
                    DetailItem { label: "VIN", value: registration.vin.clone() }
                    DetailItem { label: "Make/Model", value: make_model }
                    DetailItem { label: "Year", value: registration.year.clone() }
                    DetailItem { label: "Color", value: registration.color.clone() }
                    DetailItem { label: "Registered Owner", value: registration.owner.clone() }
                    DetailItem { label: "Owner Address", value: registration.owner_address.clone() }
                    DetailItem { label: "Registration", value: registration.registration.clone() }
                    DetailItem { label: "Insurance", value: registration.insurance.clone() }
                }
            }
        }
    }
}

#[component]
fn LicenseCard(license: LicenseRecord) -> Element {
    let variant = if license.status == "Valid" {
        BadgeVariant::Success
    } else {
        BadgeVariant::Destructive
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Driver License" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "License Number", value: license.license_number.clone() }
                    DetailItem { label: "Name", value: license.name.clone() }
                    DetailItem { label: "Address", value: license.address.clone() }
                    DetailItem { label: "Date of Birth", value: license.dob.clone() }
                    DetailItem { label: "Class", value: license.class.clone() }
                    DetailItem { label: "Status",
                        Badge { variant, "{license.status}" }
                    }
                    DetailItem { label: "Expires", value: license.expires.clone() }
                    DetailItem { label: "Restrictions", value: license.restrictions.clone() }
                    DetailItem { label: "Endorsements", value: license.endorsements.clone() }
                }
            }
        }
    }
}
