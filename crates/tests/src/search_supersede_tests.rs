use std::sync::{Arc, Mutex};
use std::time::Duration;

use dispatch_core::records::ncic;
use dispatch_core::{RecordSource, SearchTracker};
use pretty_assertions::assert_eq;
use shared_types::{NcicHit, SearchOutcome};

type Slot = Arc<Mutex<(SearchTracker, Option<SearchOutcome<NcicHit>>)>>;

/// Mirror of the panel cycle: take a ticket, wait, look up, publish if current.
async fn run_search(slot: Slot, query: &str, delay: Duration) {
    let ticket = {
        let mut guard = slot.lock().unwrap();
        guard.0.begin(query).unwrap()
    };
    tokio::time::sleep(delay).await;
    let outcome = ncic().search(&ticket.query);
    let mut guard = slot.lock().unwrap();
    if let Some(outcome) = guard.0.finish(&ticket, outcome) {
        guard.1 = Some(outcome);
    }
}

#[tokio::test]
async fn slow_first_search_does_not_overwrite_newer_result() {
    let slot: Slot = Arc::new(Mutex::new((SearchTracker::new(), None)));

    let slow = tokio::spawn(run_search(slot.clone(), "ABC123", Duration::from_millis(80)));
    tokio::time::sleep(Duration::from_millis(10)).await;
    let fast = tokio::spawn(run_search(slot.clone(), "XYZ789", Duration::from_millis(5)));

    fast.await.unwrap();
    slow.await.unwrap();

    let guard = slot.lock().unwrap();
    let outcome = guard.1.as_ref().unwrap();
    assert_eq!(outcome.query(), "XYZ789");
    assert!(!guard.0.is_searching());
}

#[tokio::test]
async fn single_search_publishes_its_result() {
    let slot: Slot = Arc::new(Mutex::new((SearchTracker::new(), None)));

    run_search(slot.clone(), "Jane Smith", Duration::from_millis(1)).await;

    let guard = slot.lock().unwrap();
    let outcome = guard.1.as_ref().unwrap();
    assert!(outcome.is_found());
}

#[test]
fn stale_ticket_yields_nothing() {
    let mut tracker = SearchTracker::new();
    let stale = tracker.begin("ABC123").unwrap();
    let current = tracker.begin("ZZZ000").unwrap();

    assert_eq!(tracker.finish(&stale, ncic().search(&stale.query)), None);
    let published = tracker.finish(&current, ncic().search(&current.query));
    assert_eq!(
        published,
        Some(SearchOutcome::NoRecords { query: "ZZZ000".to_string() })
    );
}

#[test]
fn blank_query_takes_no_ticket() {
    let mut tracker = SearchTracker::new();
    assert!(tracker.begin("").is_none());
    assert!(tracker.begin(" \t ").is_none());
    assert!(!tracker.is_searching());
}

#[tokio::test]
async fn clearing_the_panel_drops_the_in_flight_search() {
    let slot: Slot = Arc::new(Mutex::new((SearchTracker::new(), None)));

    let pending = tokio::spawn(run_search(slot.clone(), "John Doe", Duration::from_millis(40)));
    tokio::time::sleep(Duration::from_millis(5)).await;
    {
        let mut guard = slot.lock().unwrap();
        guard.0.cancel();
        assert!(!guard.0.is_searching());
    }
    pending.await.unwrap();

    let guard = slot.lock().unwrap();
    assert!(guard.1.is_none());
    assert!(!guard.0.is_searching());
}

#[test]
fn cancelled_ticket_is_not_published() {
    let mut tracker = SearchTracker::new();
    let ticket = tracker.begin("John Doe").unwrap();
    tracker.cancel();

    assert_eq!(tracker.finish(&ticket, ncic().search(&ticket.query)), None);
    assert!(!tracker.is_searching());
}
