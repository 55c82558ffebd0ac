//! Static badge directory backing the login form.
//!
//! Badge codes are compared for exact equality. There is no hashing, lockout,
//! or rate limiting: the table is demo data, not a credential store.

use shared_types::{AppError, Role, UserProfile};

/// Message shown inline under the login form for any unknown code.
pub const INVALID_BADGE_MESSAGE: &str = "Invalid badge number. Please contact your supervisor.";

/// (badge, name, role, department, assignment)
const PERSONNEL: &[(&str, &str, Role, &str, &str)] = &[
    ("L001", "Officer John Martinez", Role::Leo, "Politia Romana", "Central"),
    ("L002", "Detective Sarah Johnson", Role::Leo, "Politia Romana", "Hollywood"),
    ("L003", "Sergeant Mike Chen", Role::Leo, "Politia Romana", "West LA"),
    ("E001", "Paramedic Lisa Rodriguez", Role::Ems, "Paramedic", "Station 27"),
    ("E002", "EMT David Kim", Role::Ems, "Paramedic", "Station 15"),
    ("D001", "Dispatcher Maria Gonzalez", Role::Dispatch, "911", "Metro Dispatch"),
    ("D002", "Dispatcher Robert Taylor", Role::Dispatch, "911", "Valley Dispatch"),
];

/// Normalize keyboard input the way the badge field does while typing.
pub fn normalize_badge(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Exact-match lookup of a badge code.
pub fn lookup(code: &str) -> Option<UserProfile> {
    PERSONNEL
        .iter()
        .find(|(badge, ..)| *badge == code)
        .map(|(_, name, role, department, assignment)| {
            UserProfile::new(name, *role, department, assignment)
        })
}

/// Resolve a badge code or fail with the static login error.
pub fn authenticate(code: &str) -> Result<UserProfile, AppError> {
    match lookup(code) {
        Some(profile) => {
            tracing::info!(badge = code, role = %profile.role, "badge accepted");
            Ok(profile)
        }
        None => {
            tracing::warn!(badge = code, "unknown badge code");
            Err(AppError::unauthorized(INVALID_BADGE_MESSAGE))
        }
    }
}

/// Every badge code in the directory, in table order.
pub fn badge_codes() -> impl Iterator<Item = &'static str> {
    PERSONNEL.iter().map(|(badge, ..)| *badge)
}

/// Demo codes grouped by role, for the hint under the login form.
pub fn demo_badges(role: Role) -> Vec<&'static str> {
    PERSONNEL
        .iter()
        .filter(|(_, _, r, ..)| *r == role)
        .map(|(badge, ..)| *badge)
        .collect()
}
