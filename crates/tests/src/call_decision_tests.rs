use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CallStatus, LogKind};

use crate::common::{board, board_mut, leo_on_duty, logged_in, now};

#[test]
fn accept_changes_only_the_target_call() {
    let mut session = leo_on_duty();
    let before = board(&session).calls().to_vec();

    board_mut(&mut session).accept_call(2, now()).unwrap();

    let after = board(&session).calls();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after) {
        if old.id == 2 {
            assert_eq!(new.status, CallStatus::Accepted);
            assert_eq!(new.address, old.address);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn accept_logs_an_action_entry() {
    let mut session = leo_on_duty();
    board_mut(&mut session).accept_call(1, now()).unwrap();

    let last = board(&session).log().last().unwrap();
    assert_eq!(last.message, "Accepted call: Domestic Disturbance at 1234 Main St");
    assert_eq!(last.kind, LogKind::Action);
}

#[test]
fn deny_logs_and_marks_denied() {
    let mut session = leo_on_duty();
    let call = board_mut(&mut session).deny_call(3, now()).unwrap().clone();

    assert_eq!(call.status, CallStatus::Denied);
    let last = board(&session).log().last().unwrap();
    assert_eq!(last.message, "Denied call: Burglary at 910 Pine Rd");
}

#[test]
fn second_accept_is_an_invalid_transition() {
    let mut session = leo_on_duty();
    board_mut(&mut session).accept_call(1, now()).unwrap();
    let snapshot = board(&session).clone();

    let err = board_mut(&mut session).accept_call(1, now()).unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InvalidTransition);
    assert_eq!(board(&session), &snapshot);
}

#[test]
fn deny_after_accept_is_rejected() {
    let mut session = leo_on_duty();
    board_mut(&mut session).accept_call(1, now()).unwrap();
    let err = board_mut(&mut session).deny_call(1, now()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InvalidTransition);
}

#[test]
fn off_duty_operator_cannot_decide() {
    let mut session = logged_in("E001");
    let snapshot = board(&session).clone();

    let err = board_mut(&mut session).accept_call(1, now()).unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(board(&session), &snapshot);
}

#[test]
fn unknown_call_is_not_found() {
    let mut session = leo_on_duty();
    let err = board_mut(&mut session).accept_call(99, now()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
