use dispatch_core::directory::{self, INVALID_BADGE_MESSAGE};
use dispatch_core::Session;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role};

#[test]
fn every_badge_yields_its_exact_profile() {
    let expected = [
        ("L001", "Officer John Martinez", Role::Leo, "Central"),
        ("L002", "Detective Sarah Johnson", Role::Leo, "Hollywood"),
        ("L003", "Sergeant Mike Chen", Role::Leo, "West LA"),
        ("E001", "Paramedic Lisa Rodriguez", Role::Ems, "Station 27"),
        ("E002", "EMT David Kim", Role::Ems, "Station 15"),
        ("D001", "Dispatcher Maria Gonzalez", Role::Dispatch, "Metro Dispatch"),
        ("D002", "Dispatcher Robert Taylor", Role::Dispatch, "Valley Dispatch"),
    ];

    for (badge, name, role, assignment) in expected {
        let mut session = Session::default();
        let profile = session.login(badge).unwrap().clone();
        assert_eq!(profile.name, name, "badge {badge}");
        assert_eq!(profile.role, role, "badge {badge}");
        assert_eq!(profile.assignment, assignment, "badge {badge}");
        assert_eq!(session.badge(), Some(badge));
        assert_eq!(session.role(), Some(role));
    }
}

#[test]
fn directory_has_seven_codes() {
    assert_eq!(directory::badge_codes().count(), 7);
}

#[test]
fn unknown_badge_is_rejected_with_static_message() {
    for code in ["", "X999", "l001", " L001", "L0011", "D003"] {
        let mut session = Session::default();
        let err = session.login(code).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized, "code {code:?}");
        assert_eq!(err.message, INVALID_BADGE_MESSAGE);
        assert!(!session.is_logged_in());
    }
}

#[test]
fn failed_login_keeps_the_current_operator() {
    let mut session = Session::default();
    session.login("E001").unwrap();
    let before = session.clone();

    assert!(session.login("BOGUS").is_err());

    assert_eq!(session, before);
    assert_eq!(session.badge(), Some("E001"));
}

#[test]
fn typed_badge_is_normalized_before_lookup() {
    let mut session = Session::default();
    let code = directory::normalize_badge("  d002 ");
    assert_eq!(code, "D002");
    assert_eq!(session.login(&code).unwrap().role, Role::Dispatch);
}
