use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// Person record as returned by NCIC and the dispatch-center lookup.
///
/// The two systems carry different optional columns: NCIC exposes a masked
/// SSN and alerts, dispatch exposes address, licence number, and a summary
/// status line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PersonRecord {
    pub name: String,
    pub dob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dl_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub warrants: Vec<String>,
    #[serde(default)]
    pub alerts: Vec<String>,
    #[serde(default)]
    pub criminal_history: Vec<String>,
}

impl PersonRecord {
    pub fn has_warrants(&self) -> bool {
        !self.warrants.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    Stolen,
    Clear,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Stolen => "Stolen",
            VehicleStatus::Clear => "Clear",
        }
    }
}

/// Stolen-vehicle style record (NCIC, dispatch).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleRecord {
    pub plate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub status: VehicleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
}

impl VehicleRecord {
    pub fn make_model(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// LEADS vehicle registration record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub plate: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub owner: String,
    pub owner_address: String,
    pub registration: String,
    pub insurance: String,
}

impl RegistrationRecord {
    pub fn make_model(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// LEADS driver licence record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LicenseRecord {
    pub license_number: String,
    pub name: String,
    pub address: String,
    pub dob: String,
    pub class: String,
    pub status: String,
    pub expires: String,
    pub restrictions: String,
    pub endorsements: String,
}

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// Outcome of one exact-match lookup. Never partial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    Found { query: String, hit: T },
    NoRecords { query: String },
}

impl<T> SearchOutcome<T> {
    pub fn query(&self) -> &str {
        match self {
            SearchOutcome::Found { query, .. } | SearchOutcome::NoRecords { query } => query,
        }
    }

    pub fn hit(&self) -> Option<&T> {
        match self {
            SearchOutcome::Found { hit, .. } => Some(hit),
            SearchOutcome::NoRecords { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// NCIC result: a name and a plate share one key space.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NcicHit {
    pub person: Option<PersonRecord>,
    pub vehicle: Option<VehicleRecord>,
}

/// LEADS result: plate and licence number share one key space.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadsHit {
    pub vehicle: Option<RegistrationRecord>,
    pub license: Option<LicenseRecord>,
}

/// Which table the dispatch-center search consults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    Person,
    Vehicle,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Person => "person",
            SearchKind::Vehicle => "vehicle",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "vehicle" => SearchKind::Vehicle,
            _ => SearchKind::Person,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DispatchHit {
    Person(PersonRecord),
    Vehicle(VehicleRecord),
}
