use dispatch_core::Session;
use pretty_assertions::assert_eq;
use shared_types::{CallStatus, UnitId};

use crate::common::{board, board_mut, logged_in, new_call_request, now};

#[test]
fn logout_then_login_restores_leo_seed() {
    let mut session = logged_in("L001");
    let seed = board(&session).clone();

    let b = board_mut(&mut session);
    b.toggle_duty(now());
    b.accept_call(1, now()).unwrap();
    b.deny_call(2, now()).unwrap();
    b.send_message("Arriving shortly", now()).unwrap();
    assert_ne!(board(&session), &seed);

    session.logout();
    assert!(session.board().is_none());
    session.login("L001").unwrap();

    assert_eq!(board(&session), &seed);
}

#[test]
fn logout_then_login_restores_dispatch_seed() {
    let mut session = logged_in("D001");
    let seed = board(&session).clone();

    board_mut(&mut session)
        .create_call(&new_call_request("U1"), now())
        .unwrap();
    assert_eq!(board(&session).calls().len(), 4);

    session.logout();
    session.login("D001").unwrap();

    assert_eq!(board(&session), &seed);
    assert_eq!(board(&session).calls().len(), 3);
    let u1 = board(&session).unit(&UnitId::from("U1")).unwrap();
    assert_eq!(u1.status, shared_types::UnitStatus::Available);
}

#[test]
fn switching_roles_loads_the_new_roles_board() {
    let mut session = logged_in("L002");
    session.logout();
    session.login("E002").unwrap();

    let b = board(&session);
    assert!(b.units().is_empty());
    assert_eq!(b.calls()[0].call_type, "Medical Emergency");
    assert!(b.calls().iter().all(|c| c.status == CallStatus::Pending));
}

#[test]
fn logout_without_session_is_harmless() {
    let mut session = Session::default();
    session.logout();
    assert!(!session.is_logged_in());
}
