use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CallStatus, LogKind, NewCallRequest, UnitId, UnitStatus};

use crate::common::{board, board_mut, logged_in, new_call_request, now};

#[test]
fn new_call_is_prepended_with_next_id() {
    let mut session = logged_in("D001");

    let call = board_mut(&mut session)
        .create_call(&new_call_request("U1"), now())
        .unwrap()
        .clone();

    assert_eq!(call.id, 4);
    assert_eq!(call.status, CallStatus::Dispatched);
    assert_eq!(call.assigned_unit, Some(UnitId::from("U1")));
    assert_eq!(call.assigned_name.as_deref(), Some("Unit 1"));
    assert_eq!(call.description.as_deref(), Some("Back door forced"));
    assert_eq!(call.time, now());
    assert_eq!(board(&session).calls()[0], call);
}

#[test]
fn chosen_unit_becomes_dispatched() {
    let mut session = logged_in("D002");
    board_mut(&mut session)
        .create_call(&new_call_request("A5"), now())
        .unwrap();

    let unit = board(&session).unit(&UnitId::from("A5")).unwrap();
    assert_eq!(unit.status, UnitStatus::Dispatched);
    assert!(board(&session).available_units().all(|u| u.id.as_str() != "A5"));
}

#[test]
fn creation_is_logged_as_call_entry() {
    let mut session = logged_in("D001");
    board_mut(&mut session)
        .create_call(&new_call_request("U1"), now())
        .unwrap();

    let last = board(&session).log().last().unwrap();
    assert_eq!(last.kind, LogKind::Call);
    assert_eq!(last.message, "New call dispatched: Burglary at 42 Elm St (Unit 1)");
}

#[test]
fn missing_fields_are_reported_per_field() {
    let mut session = logged_in("D001");
    let snapshot = board(&session).clone();

    let err = board_mut(&mut session)
        .create_call(&NewCallRequest::default(), now())
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    for field in ["call_type", "priority", "address", "assigned_unit"] {
        assert!(err.field_error(field).is_some(), "missing error for {field}");
    }
    assert_eq!(board(&session), &snapshot);
}

#[test]
fn busy_unit_is_a_conflict() {
    let mut session = logged_in("D001");
    let snapshot = board(&session).clone();

    // U3 is seeded Dispatched.
    let err = board_mut(&mut session)
        .create_call(&new_call_request("U3"), now())
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(board(&session), &snapshot);
}

#[test]
fn unit_off_the_roster_is_a_field_error() {
    let mut session = logged_in("D001");
    let err = board_mut(&mut session)
        .create_call(&new_call_request("Z9"), now())
        .unwrap_err();
    assert!(err.field_error("assigned_unit").is_some());
}

#[test]
fn unknown_call_type_is_rejected() {
    let mut session = logged_in("D001");
    let mut request = new_call_request("U1");
    request.call_type = "Alien Landing".to_string();

    let err = board_mut(&mut session).create_call(&request, now()).unwrap_err();
    assert!(err.field_error("call_type").is_some());
}

#[test]
fn ids_keep_increasing() {
    let mut session = logged_in("D001");
    let first = board_mut(&mut session)
        .create_call(&new_call_request("U1"), now())
        .unwrap()
        .id;
    let second = board_mut(&mut session)
        .create_call(&new_call_request("A5"), now())
        .unwrap()
        .id;
    assert_eq!((first, second), (4, 5));
}
