use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, BroadcastRequest, LogKind, Recipient, UnitId, Urgency};

use crate::common::{board, board_mut, logged_in, now};

#[test]
fn field_message_is_logged_to_dispatch() {
    let mut session = logged_in("L001");
    let entry = board_mut(&mut session)
        .send_message("  Requesting backup at Main St  ", now())
        .unwrap()
        .clone();

    assert_eq!(entry.message, "Message to Dispatch: Requesting backup at Main St");
    assert_eq!(entry.kind, LogKind::Message);
}

#[test]
fn blank_field_message_is_rejected() {
    let mut session = logged_in("E001");
    let before = board(&session).log().len();

    let err = board_mut(&mut session).send_message("   ", now()).unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(board(&session).log().len(), before);
}

#[test]
fn broadcast_to_group_names_the_group() {
    let mut session = logged_in("D001");
    let request = BroadcastRequest {
        recipient: Some(Recipient::AllLeo),
        urgency: Urgency::High,
        content: "Suspect heading north on 5th".to_string(),
    };

    let entry = board_mut(&mut session).broadcast(&request, now()).unwrap().clone();

    assert_eq!(
        entry.message,
        "Message to All LEO Units [high]: Suspect heading north on 5th"
    );
}

#[test]
fn broadcast_to_single_unit_uses_unit_name() {
    let mut session = logged_in("D002");
    let request = BroadcastRequest {
        recipient: Some(Recipient::Unit(UnitId::from("A3"))),
        urgency: Urgency::default(),
        content: "Hospital diverted".to_string(),
    };

    let entry = board_mut(&mut session).broadcast(&request, now()).unwrap().clone();

    assert_eq!(entry.message, "Message to Ambulance 3 [normal]: Hospital diverted");
}

#[test]
fn broadcast_needs_recipient_and_content() {
    let mut session = logged_in("D001");
    let err = board_mut(&mut session)
        .broadcast(&BroadcastRequest::default(), now())
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_error("recipient").is_some());
    assert!(err.field_error("content").is_some());
}

#[test]
fn broadcast_to_unknown_unit_is_rejected() {
    let mut session = logged_in("D001");
    let request = BroadcastRequest {
        recipient: Some(Recipient::Unit(UnitId::from("U42"))),
        urgency: Urgency::Low,
        content: "Check in".to_string(),
    };
    let err = board_mut(&mut session).broadcast(&request, now()).unwrap_err();
    assert!(err.field_error("recipient").is_some());
}
