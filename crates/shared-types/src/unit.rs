use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roster key of a unit (`U2`, `A3`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl UnitId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        UnitId(s.to_string())
    }
}

impl From<String> for UnitId {
    fn from(s: String) -> Self {
        UnitId(s)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitCategory {
    Leo,
    Ems,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Leo => "LEO",
            UnitCategory::Ems => "EMS",
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UnitStatus {
    Available,
    Dispatched,
    EnRoute,
    OnScene,
    OutOfService,
    OffDuty,
}

/// Every status in the order the roster select lists them.
pub const UNIT_STATUSES: &[UnitStatus] = &[
    UnitStatus::Available,
    UnitStatus::Dispatched,
    UnitStatus::EnRoute,
    UnitStatus::OnScene,
    UnitStatus::OutOfService,
    UnitStatus::OffDuty,
];

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Available => "Available",
            UnitStatus::Dispatched => "Dispatched",
            UnitStatus::EnRoute => "En Route",
            UnitStatus::OnScene => "On Scene",
            UnitStatus::OutOfService => "Out of Service",
            UnitStatus::OffDuty => "Off Duty",
        }
    }

    /// Stable key used as a `<select>` option value.
    pub fn key(&self) -> &'static str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Dispatched => "dispatched",
            UnitStatus::EnRoute => "en_route",
            UnitStatus::OnScene => "on_scene",
            UnitStatus::OutOfService => "out_of_service",
            UnitStatus::OffDuty => "off_duty",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        UNIT_STATUSES.iter().copied().find(|s| s.key() == key)
    }

    /// Assigned to a call and not yet cleared.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            UnitStatus::Dispatched | UnitStatus::EnRoute | UnitStatus::OnScene
        )
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, UnitStatus::OutOfService | UnitStatus::OffDuty)
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Unit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub category: UnitCategory,
    /// Patrol, K9, Traffic, ALS...
    pub specialty: String,
    pub status: UnitStatus,
    pub assigned_person: String,
    pub last_update: NaiveTime,
}

impl Unit {
    pub fn new(
        id: &str,
        name: &str,
        category: UnitCategory,
        specialty: &str,
        status: UnitStatus,
        assigned_person: &str,
        last_update: NaiveTime,
    ) -> Self {
        Self {
            id: UnitId::from(id),
            name: name.to_string(),
            category,
            specialty: specialty.to_string(),
            status,
            assigned_person: assigned_person.to_string(),
            last_update,
        }
    }

    /// "Unit 2 - Patrol", used in pick lists.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.specialty)
    }
}

/// Roster counters shown above the unit status table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummary {
    pub available: usize,
    pub busy: usize,
    pub unavailable: usize,
}

impl UnitSummary {
    pub fn total(&self) -> usize {
        self.available + self.busy + self.unavailable
    }
}
