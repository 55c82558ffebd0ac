use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CallStatus, UnitId, UnitStatus};

use crate::common::{board, board_mut, leo_on_duty, logged_in_mirrored, now};

#[test]
fn dispatching_u2_assigns_call_and_leaves_unit_status() {
    let mut session = leo_on_duty();
    let u2 = UnitId::from("U2");
    board_mut(&mut session).accept_call(1, now()).unwrap();

    let call = board_mut(&mut session)
        .dispatch_unit(1, &u2, now())
        .unwrap()
        .clone();

    assert_eq!(call.assigned_unit, Some(u2.clone()));
    assert_eq!(call.assigned_name.as_deref(), Some("Unit 2"));
    assert_eq!(call.status, CallStatus::Dispatched);
    let unit = board(&session).unit(&u2).unwrap();
    assert_eq!(unit.status, UnitStatus::Available);
}

#[test]
fn pending_call_can_be_dispatched_directly() {
    let mut session = leo_on_duty();
    let call = board_mut(&mut session)
        .dispatch_unit(2, &UnitId::from("U5"), now())
        .unwrap()
        .clone();
    assert_eq!(call.status, CallStatus::Dispatched);
}

#[test]
fn dispatch_is_logged_with_unit_name() {
    let mut session = leo_on_duty();
    board_mut(&mut session)
        .dispatch_unit(3, &UnitId::from("U8"), now())
        .unwrap();

    let last = board(&session).log().last().unwrap();
    assert_eq!(last.message, "Dispatched Unit 8 to call: Burglary at 910 Pine Rd");
}

#[test]
fn denied_call_cannot_be_dispatched() {
    let mut session = leo_on_duty();
    board_mut(&mut session).deny_call(1, now()).unwrap();
    let err = board_mut(&mut session)
        .dispatch_unit(1, &UnitId::from("U2"), now())
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidTransition);
}

#[test]
fn unknown_unit_is_not_found() {
    let mut session = leo_on_duty();
    let err = board_mut(&mut session)
        .dispatch_unit(1, &UnitId::from("U99"), now())
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn mirror_link_moves_unit_to_dispatched() {
    let mut session = logged_in_mirrored("L001");
    let u2 = UnitId::from("U2");
    board_mut(&mut session).dispatch_unit(1, &u2, now()).unwrap();

    let unit = board(&session).unit(&u2).unwrap();
    assert_eq!(unit.status, UnitStatus::Dispatched);
    assert_eq!(unit.last_update, now());
}

#[test]
fn mirror_link_refuses_a_busy_unit() {
    let mut session = logged_in_mirrored("L001");
    let u2 = UnitId::from("U2");
    board_mut(&mut session).dispatch_unit(1, &u2, now()).unwrap();
    let snapshot = board(&session).clone();

    let err = board_mut(&mut session).dispatch_unit(2, &u2, now()).unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(board(&session), &snapshot);
}
