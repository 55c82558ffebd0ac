use std::collections::HashMap;
use std::sync::OnceLock;

use shared_types::{NcicHit, PersonRecord, VehicleRecord, VehicleStatus};

use super::RecordSource;

/// NCIC mock: wanted persons and stolen vehicles. Names and plates share one
/// key space and keys are case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct NcicDatabase {
    persons: HashMap<String, PersonRecord>,
    vehicles: HashMap<String, VehicleRecord>,
}

impl NcicDatabase {
    pub fn seeded() -> Self {
        let persons = [
            PersonRecord {
                name: "John Doe".to_string(),
                dob: "1985-03-15".to_string(),
                ssn: Some("***-**-1234".to_string()),
                warrants: vec!["Outstanding warrant - Failure to appear".to_string()],
                alerts: vec!["Armed and dangerous".to_string()],
                criminal_history: vec!["Assault (2019)".to_string(), "Drug possession (2021)".to_string()],
                ..Default::default()
            },
            PersonRecord {
                name: "Jane Smith".to_string(),
                dob: "1990-07-22".to_string(),
                ssn: Some("***-**-5678".to_string()),
                criminal_history: vec!["No criminal history found".to_string()],
                ..Default::default()
            },
        ];

        let vehicles = [
            vehicle("ABC123", "Honda", "Civic", "2018", "Blue", VehicleStatus::Stolen, Some("2024-01-15")),
            vehicle("XYZ789", "Toyota", "Camry", "2020", "White", VehicleStatus::Clear, None),
        ];

        Self {
            persons: persons.into_iter().map(|p| (p.name.clone(), p)).collect(),
            vehicles: vehicles.into_iter().map(|v| (v.plate.clone(), v)).collect(),
        }
    }
}

fn vehicle(
    plate: &str,
    make: &str,
    model: &str,
    year: &str,
    color: &str,
    status: VehicleStatus,
    report_date: Option<&str>,
) -> VehicleRecord {
    VehicleRecord {
        plate: plate.to_string(),
        vin: None,
        make: make.to_string(),
        model: model.to_string(),
        year: year.to_string(),
        color: color.to_string(),
        owner: None,
        status,
        report_date: report_date.map(str::to_string),
    }
}

impl RecordSource for NcicDatabase {
    type Hit = NcicHit;

    fn name(&self) -> &'static str {
        "NCIC"
    }

    fn normalize(&self, raw: &str) -> String {
        raw.trim().to_string()
    }

    fn lookup(&self, key: &str) -> Option<NcicHit> {
        let hit = NcicHit {
            person: self.persons.get(key).cloned(),
            vehicle: self.vehicles.get(key).cloned(),
        };
        (hit.person.is_some() || hit.vehicle.is_some()).then_some(hit)
    }
}

static NCIC: OnceLock<NcicDatabase> = OnceLock::new();

pub fn ncic() -> &'static NcicDatabase {
    NCIC.get_or_init(NcicDatabase::seeded)
}
