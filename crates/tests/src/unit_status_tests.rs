use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, UnitId, UnitStatus, UnitSummary, UNIT_STATUSES};

use crate::common::{board, board_mut, logged_in, now};

#[test]
fn dispatch_roster_summary_matches_seed() {
    let session = logged_in("D001");
    assert_eq!(
        board(&session).unit_summary(),
        UnitSummary { available: 2, busy: 3, unavailable: 2 }
    );
}

#[test]
fn status_update_refreshes_stamp_and_logs() {
    let mut session = logged_in("D001");
    let u9 = UnitId::from("U9");

    let unit = board_mut(&mut session)
        .set_unit_status(&u9, UnitStatus::Available, now())
        .unwrap()
        .clone();

    assert_eq!(unit.status, UnitStatus::Available);
    assert_eq!(unit.last_update, now());
    let last = board(&session).log().last().unwrap();
    assert_eq!(last.message, "Unit 9 status changed to Available");
    assert_eq!(board(&session).unit_summary().available, 3);
}

#[test]
fn any_status_can_be_set() {
    let mut session = logged_in("D002");
    let a1 = UnitId::from("A1");
    for status in UNIT_STATUSES {
        let unit = board_mut(&mut session)
            .set_unit_status(&a1, *status, now())
            .unwrap();
        assert_eq!(unit.status, *status);
    }
}

#[test]
fn unknown_unit_is_not_found() {
    let mut session = logged_in("D001");
    let err = board_mut(&mut session)
        .set_unit_status(&UnitId::from("X1"), UnitStatus::OffDuty, now())
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn summary_total_tracks_roster_size() {
    let session = logged_in("D001");
    let b = board(&session);
    assert_eq!(b.unit_summary().total(), b.units().len());
}
