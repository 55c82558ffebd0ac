use std::collections::HashMap;
use std::sync::OnceLock;

use shared_types::{LeadsHit, LicenseRecord, RegistrationRecord};

use super::RecordSource;

/// LEADS mock: vehicle registrations and driver licences, keyed by plate or
/// licence number. Keys are uppercased as typed.
#[derive(Debug, Clone, Default)]
pub struct LeadsDatabase {
    registrations: HashMap<String, RegistrationRecord>,
    licenses: HashMap<String, LicenseRecord>,
}

impl LeadsDatabase {
    pub fn seeded() -> Self {
        let registration = RegistrationRecord {
            plate: "ABC123".to_string(),
            vin: "1HGCM82633A123456".to_string(),
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: "2018".to_string(),
            color: "Blue".to_string(),
            owner: "John Smith".to_string(),
            owner_address: "123 Main St, Los Angeles, CA".to_string(),
            registration: "Valid until 2025-03-15".to_string(),
            insurance: "State Farm - Active".to_string(),
        };
        let license = LicenseRecord {
            license_number: "D1234567".to_string(),
            name: "Sarah Johnson".to_string(),
            address: "456 Oak Ave, Los Angeles, CA".to_string(),
            dob: "1990-05-20".to_string(),
            class: "C".to_string(),
            status: "Valid".to_string(),
            expires: "2026-05-20".to_string(),
            restrictions: "None".to_string(),
            endorsements: "None".to_string(),
        };

        let mut db = Self::default();
        db.registrations.insert(registration.plate.clone(), registration);
        db.licenses.insert(license.license_number.clone(), license);
        db
    }
}

impl RecordSource for LeadsDatabase {
    type Hit = LeadsHit;

    fn name(&self) -> &'static str {
        "LEADS"
    }

    fn normalize(&self, raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    fn lookup(&self, key: &str) -> Option<LeadsHit> {
        let hit = LeadsHit {
            vehicle: self.registrations.get(key).cloned(),
            license: self.licenses.get(key).cloned(),
        };
        (hit.vehicle.is_some() || hit.license.is_some()).then_some(hit)
    }
}

static LEADS: OnceLock<LeadsDatabase> = OnceLock::new();

pub fn leads() -> &'static LeadsDatabase {
    LEADS.get_or_init(LeadsDatabase::seeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_plate_is_uppercased() {
        let outcome = leads().search("abc123");
        assert_eq!(outcome.query(), "ABC123");
        let hit = outcome.hit().unwrap();
        assert_eq!(hit.vehicle.as_ref().unwrap().owner, "John Smith");
        assert!(hit.license.is_none());
    }

    #[test]
    fn license_lookup() {
        let outcome = leads().search("D1234567");
        let license = outcome.hit().unwrap().license.clone().unwrap();
        assert_eq!(license.name, "Sarah Johnson");
        assert_eq!(license.class, "C");
    }

    #[test]
    fn unknown_key_reports_no_records() {
        assert!(!leads().search("XYZ789").is_found());
    }
}
