use std::sync::OnceLock;

use shared_types::{DispatchHit, PersonRecord, SearchKind, SearchOutcome, VehicleRecord, VehicleStatus};

/// Dispatch-center lookup. The operator picks person or vehicle first, so
/// the two tables are searched separately.
#[derive(Debug, Clone, Default)]
pub struct DispatchDatabase {
    persons: Vec<PersonRecord>,
    vehicles: Vec<VehicleRecord>,
}

impl DispatchDatabase {
    pub fn seeded() -> Self {
        let persons = vec![
            person(
                "John Doe",
                "1985-03-15",
                "1234 Oak Street, Los Angeles, CA",
                "CA12345678",
                "Has active warrants",
                &["Outstanding warrant - Failure to appear"],
                &["Assault (2019)", "Drug possession (2021)"],
            ),
            person(
                "Jane Smith",
                "1990-07-22",
                "5678 Pine Avenue, Los Angeles, CA",
                "CA87654321",
                "Clear",
                &[],
                &[],
            ),
            person(
                "Robert Johnson",
                "1975-11-30",
                "910 Maple Drive, Los Angeles, CA",
                "CA55556666",
                "Clear",
                &[],
                &["DUI (2015)"],
            ),
        ];

        let vehicles = vec![
            vehicle("ABC123", "1HGCM82633A123456", "Honda", "Civic", "2018", "Blue", "John Smith", VehicleStatus::Stolen, Some("2024-01-15")),
            vehicle("XYZ789", "5TDZA23C13S012345", "Toyota", "Camry", "2020", "White", "Jane Smith", VehicleStatus::Clear, None),
            vehicle("LMN456", "1FTEW1E53MFA12345", "Ford", "F-150", "2021", "Black", "Robert Johnson", VehicleStatus::Clear, None),
        ];

        Self { persons, vehicles }
    }

    pub fn search(&self, kind: SearchKind, raw: &str) -> SearchOutcome<DispatchHit> {
        let query = raw.trim().to_string();
        let hit = match kind {
            SearchKind::Person => self
                .persons
                .iter()
                .find(|p| p.name == query)
                .cloned()
                .map(DispatchHit::Person),
            SearchKind::Vehicle => self
                .vehicles
                .iter()
                .find(|v| v.plate == query)
                .cloned()
                .map(DispatchHit::Vehicle),
        };
        tracing::debug!(kind = kind.as_str(), %query, found = hit.is_some(), "dispatch lookup");
        match hit {
            Some(hit) => SearchOutcome::Found { query, hit },
            None => SearchOutcome::NoRecords { query },
        }
    }
}

fn person(
    name: &str,
    dob: &str,
    address: &str,
    dl_number: &str,
    status: &str,
    warrants: &[&str],
    history: &[&str],
) -> PersonRecord {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    PersonRecord {
        name: name.to_string(),
        dob: dob.to_string(),
        ssn: None,
        address: Some(address.to_string()),
        dl_number: Some(dl_number.to_string()),
        status: Some(status.to_string()),
        warrants: owned(warrants),
        alerts: Vec::new(),
        criminal_history: owned(history),
    }
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    plate: &str,
    vin: &str,
    make: &str,
    model: &str,
    year: &str,
    color: &str,
    owner: &str,
    status: VehicleStatus,
    report_date: Option<&str>,
) -> VehicleRecord {
    VehicleRecord {
        plate: plate.to_string(),
        vin: Some(vin.to_string()),
        make: make.to_string(),
        model: model.to_string(),
        year: year.to_string(),
        color: color.to_string(),
        owner: Some(owner.to_string()),
        status,
        report_date: report_date.map(str::to_string),
    }
}

static DISPATCH_RECORDS: OnceLock<DispatchDatabase> = OnceLock::new();

pub fn dispatch_records() -> &'static DispatchDatabase {
    DISPATCH_RECORDS.get_or_init(DispatchDatabase::seeded)
}
