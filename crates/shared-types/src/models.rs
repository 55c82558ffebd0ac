use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator role, selected by the badge code at login.
///
/// - `Leo`: patrol officer. Accepts/denies calls, assigns units, runs NCIC/LEADS.
/// - `Ems`: paramedic crew. Accepts/denies medical calls.
/// - `Dispatch`: 911 call taker. Creates calls, broadcasts, manages the unit roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Leo,
    Ems,
    Dispatch,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Leo => "LEO",
            Role::Ems => "EMS",
            Role::Dispatch => "DISPATCH",
        }
    }

    /// Title used when narrating duty changes ("Officer ... went on duty").
    pub fn duty_title(&self) -> &'static str {
        match self {
            Role::Leo => "Officer",
            Role::Ems => "Paramedic",
            Role::Dispatch => "Dispatcher",
        }
    }

    /// Whether the dashboard for this role has an on/off duty toggle.
    pub fn has_duty_toggle(&self) -> bool {
        matches!(self, Role::Leo | Role::Ems)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personnel record resolved from a badge code. Immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
    pub department: String,
    /// Division (LEO), station (EMS), or dispatch center (DISPATCH).
    pub assignment: String,
}

impl UserProfile {
    pub fn new(name: &str, role: Role, department: &str, assignment: &str) -> Self {
        Self {
            name: name.to_string(),
            role,
            department: department.to_string(),
            assignment: assignment.to_string(),
        }
    }

    /// "Department - Assignment" line shown on the profile card.
    pub fn affiliation(&self) -> String {
        format!("{} - {}", self.department, self.assignment)
    }
}

/// Format a board timestamp the way every list renders it (`14:30`).
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Build a seed timestamp. Out-of-range input clamps to midnight.
pub fn hhmm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Dispatch).unwrap(), "\"DISPATCH\"");
        let parsed: Role = serde_json::from_str("\"EMS\"").unwrap();
        assert_eq!(parsed, Role::Ems);
    }

    #[test]
    fn only_field_roles_toggle_duty() {
        assert!(Role::Leo.has_duty_toggle());
        assert!(Role::Ems.has_duty_toggle());
        assert!(!Role::Dispatch.has_duty_toggle());
    }

    #[test]
    fn affiliation_joins_department_and_assignment() {
        let profile = UserProfile::new("EMT David Kim", Role::Ems, "Paramedic", "Station 15");
        assert_eq!(profile.affiliation(), "Paramedic - Station 15");
    }

    #[test]
    fn hhmm_formats_with_leading_zero() {
        assert_eq!(format_hhmm(hhmm(9, 5)), "09:05");
        assert_eq!(hhmm(25, 0), NaiveTime::MIN);
    }
}
