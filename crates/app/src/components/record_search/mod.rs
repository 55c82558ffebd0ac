//! NCIC, LEADS, and dispatch-center record lookups.
//!
//! Every panel runs the same cycle: take a ticket from its `SearchTracker`,
//! wait out the system's simulated latency, look the key up, and publish the
//! outcome only if no newer search has started meanwhile.

mod dispatch;
mod leads;
mod ncic;

pub use dispatch::DispatchSearch;
pub use leads::LeadsSearch;
pub use ncic::NcicSearch;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use dispatch_core::records::no_records_message;
use dispatch_core::search::can_search;
use dispatch_core::{RecordSystem, SearchTracker};
use shared_types::{PersonRecord, SearchConfig, SearchOutcome, VehicleRecord};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle, CardTone, DetailBullets,
    DetailItem, DetailList, Input,
};

use crate::format_helpers::vehicle_status_variant;
use crate::timer;

/// Signals backing one search panel.
pub struct SearchPanel<T: 'static> {
    pub query: Signal<String>,
    pub tracker: Signal<SearchTracker>,
    pub outcome: Signal<Option<SearchOutcome<T>>>,
}

impl<T: 'static> Clone for SearchPanel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SearchPanel<T> {}

impl<T: Clone + 'static> SearchPanel<T> {
    pub fn is_searching(&self) -> bool {
        self.tracker.read().is_searching()
    }

    pub fn can_search(&self) -> bool {
        can_search(&self.query.read(), &self.tracker.read())
    }

    pub fn outcome(&self) -> Option<SearchOutcome<T>> {
        self.outcome.read().clone()
    }

    /// Drop the shown result and any search still in flight.
    pub fn reset(mut self) {
        self.tracker.write().cancel();
        self.outcome.set(None);
    }

    /// Start a search for the current query. Blank queries are ignored.
    pub fn start(
        mut self,
        system: RecordSystem,
        config: &SearchConfig,
        lookup: impl FnOnce(&str) -> SearchOutcome<T> + 'static,
    ) {
        let query = self.query.read().clone();
        let Some(ticket) = self.tracker.write().begin(&query) else {
            return;
        };
        let delay = system.delay(config);
        tracing::info!(system = system.as_str(), query = %ticket.query, "record search started");

        spawn(async move {
            timer::sleep(delay).await;
            let outcome = lookup(&ticket.query);
            let found = outcome.is_found();
            match self.tracker.write().finish(&ticket, outcome) {
                Some(outcome) => {
                    tracing::info!(system = system.as_str(), found, "record search finished");
                    self.outcome.set(Some(outcome));
                }
                None => {
                    tracing::debug!(system = system.as_str(), "stale search result dropped");
                }
            }
        });
    }
}

pub fn use_search_panel<T: Clone + 'static>() -> SearchPanel<T> {
    let query = use_signal(String::new);
    let tracker = use_signal(SearchTracker::new);
    let outcome = use_signal(|| None);
    SearchPanel { query, tracker, outcome }
}

/// Query box plus search button. Enter in the box also searches.
#[component]
fn SearchBar(
    value: String,
    placeholder: String,
    button_label: String,
    searching: bool,
    enabled: bool,
    on_input: EventHandler<String>,
    on_search: EventHandler<()>,
) -> Element {
    let label = if searching { "Searching...".to_string() } else { button_label };

    rsx! {
        div { class: "search-bar",
            Input {
                value: value,
                placeholder: placeholder,
                on_input: move |e: FormEvent| on_input.call(e.value()),
                on_enter: move |_| {
                    if enabled {
                        on_search.call(());
                    }
                },
            }
            Button {
                disabled: !enabled,
                onclick: move |_| on_search.call(()),
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                "{label}"
            }
        }
    }
}

#[component]
fn NoRecords(query: String) -> Element {
    let message = no_records_message(&query);

    rsx! {
        Card {
            CardContent {
                p { class: "search-empty", "{message}" }
            }
        }
    }
}

/// Placeholder for a record type the hit does not carry.
#[component]
fn MissingRecord(message: &'static str) -> Element {
    rsx! {
        Card {
            CardContent {
                p { class: "search-empty", "{message}" }
            }
        }
    }
}

#[component]
fn PersonCard(person: PersonRecord) -> Element {
    let warrants = person.has_warrants();
    let tone = if warrants { CardTone::Danger } else { CardTone::Plain };

    rsx! {
        Card { tone: tone,
            CardHeader {
                CardTitle { "Person Record Found" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "Name", value: person.name.clone() }
                    DetailItem { label: "Date of Birth", value: person.dob.clone() }
                    if let Some(ssn) = person.ssn.clone() {
                        DetailItem { label: "SSN", value: ssn }
                    }
                    if let Some(address) = person.address.clone() {
                        DetailItem { label: "Address", value: address }
                    }
                    if let Some(dl) = person.dl_number.clone() {
                        DetailItem { label: "Driver License", value: dl }
                    }
                    if let Some(status) = person.status.clone() {
                        DetailItem { label: "Status", value: status, alert: warrants }
                    }
                    if warrants {
                        DetailItem { label: "Active Warrants",
                            div { class: "search-badges",
                                for warrant in person.warrants.clone() {
                                    Badge { variant: BadgeVariant::Destructive, "{warrant}" }
                                }
                            }
                        }
                    }
                    if !person.alerts.is_empty() {
                        DetailItem { label: "Alerts",
                            div { class: "search-badges",
                                for alert in person.alerts.clone() {
                                    Badge { variant: BadgeVariant::Warning, "{alert}" }
                                }
                            }
                        }
                    }
                    DetailItem { label: "Criminal History",
                        DetailBullets {
                            items: person.criminal_history.clone(),
                            empty: "No criminal history found",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VehicleCard(vehicle: VehicleRecord) -> Element {
    let make_model = vehicle.make_model();
    let status = vehicle.status.as_str();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Vehicle Record Found" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "License Plate", value: vehicle.plate.clone() }
                    if let Some(vin) = vehicle.vin.clone() {
                        DetailItem { label: "VIN", value: vin }
                    }
                    DetailItem { label: "Make/Model", value: make_model }
                    DetailItem { label: "Year", value: vehicle.year.clone() }
                    DetailItem { label: "Color", value: vehicle.color.clone() }
                    if let Some(owner) = vehicle.owner.clone() {
                        DetailItem { label: "Registered Owner", value: owner }
                    }
                    DetailItem { label: "Status",
                        Badge { variant: vehicle_status_variant(vehicle.status), "{status}" }
                    }
                    if let Some(date) = vehicle.report_date.clone() {
                        DetailItem { label: "Report Date", value: date }
                    }
                }
            }
        }
    }
}
