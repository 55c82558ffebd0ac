use pretty_assertions::assert_eq;
use shared_types::LogKind;

use crate::common::{board, board_mut, logged_in, now};

#[test]
fn toggling_twice_restores_flag_and_adds_two_entries() {
    for badge in ["L001", "E001"] {
        let mut session = logged_in(badge);
        let before = board(&session).clone();

        let b = board_mut(&mut session);
        assert!(b.toggle_duty(now()));
        assert!(!b.toggle_duty(now()));

        let after = board(&session);
        assert_eq!(after.on_duty(), before.on_duty());
        assert_eq!(after.log().len(), before.log().len() + 2);
        assert_eq!(after.calls(), before.calls());
    }
}

#[test]
fn duty_entries_name_the_operator() {
    let mut session = logged_in("L003");
    board_mut(&mut session).toggle_duty(now());
    board_mut(&mut session).toggle_duty(now());

    let log = board(&session).log();
    let on = &log[log.len() - 2];
    let off = &log[log.len() - 1];
    assert_eq!(on.message, "Officer Sergeant Mike Chen went on duty");
    assert_eq!(off.message, "Officer Sergeant Mike Chen went off duty");
    assert_eq!(on.kind, LogKind::System);
    assert_eq!(on.time, now());
}

#[test]
fn paramedic_title_is_used_for_ems() {
    let mut session = logged_in("E002");
    board_mut(&mut session).toggle_duty(now());
    let last = board(&session).log().last().unwrap();
    assert_eq!(last.message, "Paramedic EMT David Kim went on duty");
}

#[test]
fn boards_start_off_duty() {
    for badge in ["L001", "E001", "D001"] {
        assert!(!board(&logged_in(badge)).on_duty(), "badge {badge}");
    }
}
