use chrono::NaiveTime;
use dispatch_core::{Board, Session, StatusLink};
use shared_types::{hhmm, NewCallRequest, Priority, UnitId};

/// Fixed stamp for operations under test.
pub fn now() -> NaiveTime {
    hhmm(15, 10)
}

/// A fresh session logged in with `badge`.
pub fn logged_in(badge: &str) -> Session {
    let mut session = Session::default();
    session
        .login(badge)
        .unwrap_or_else(|e| panic!("login {badge} failed: {e}"));
    session
}

/// Same as `logged_in` but with unit status mirroring switched on.
pub fn logged_in_mirrored(badge: &str) -> Session {
    let mut session = Session::new(StatusLink::Mirror);
    session
        .login(badge)
        .unwrap_or_else(|e| panic!("login {badge} failed: {e}"));
    session
}

/// Active board of a session. Panics when nobody is logged in.
pub fn board(session: &Session) -> &Board {
    session.board().expect("no active board")
}

pub fn board_mut(session: &mut Session) -> &mut Board {
    session.board_mut().expect("no active board")
}

/// LEO board already on duty.
pub fn leo_on_duty() -> Session {
    let mut session = logged_in("L001");
    board_mut(&mut session).toggle_duty(now());
    session
}

/// A complete new-call form for the dispatch center.
pub fn new_call_request(unit: &str) -> NewCallRequest {
    NewCallRequest {
        call_type: "Burglary".to_string(),
        priority: Some(Priority::High),
        address: "42 Elm St".to_string(),
        description: "Back door forced".to_string(),
        assigned_unit: Some(UnitId::from(unit)),
    }
}
