use dispatch_core::records::{dispatch_records, leads, ncic, no_records_message};
use dispatch_core::RecordSource;
use pretty_assertions::assert_eq;
use shared_types::{DispatchHit, SearchKind, SearchOutcome, VehicleStatus};

#[test]
fn ncic_abc123_returns_the_stolen_civic() {
    let outcome = ncic().search("ABC123");
    let SearchOutcome::Found { query, hit } = outcome else {
        panic!("expected a hit for ABC123");
    };
    assert_eq!(query, "ABC123");
    assert!(hit.person.is_none());
    let vehicle = hit.vehicle.unwrap();
    assert_eq!(vehicle.plate, "ABC123");
    assert_eq!(vehicle.make_model(), "Honda Civic");
    assert_eq!(vehicle.year, "2018");
    assert_eq!(vehicle.color, "Blue");
    assert_eq!(vehicle.status, VehicleStatus::Stolen);
}

#[test]
fn zzz000_is_no_records_everywhere() {
    let expected = SearchOutcome::NoRecords { query: "ZZZ000".to_string() };
    assert_eq!(ncic().search("ZZZ000"), expected);
    assert_eq!(leads().search("ZZZ000"), SearchOutcome::NoRecords { query: "ZZZ000".to_string() });
    assert_eq!(
        dispatch_records().search(SearchKind::Vehicle, "ZZZ000"),
        SearchOutcome::NoRecords { query: "ZZZ000".to_string() }
    );
    assert_eq!(no_records_message("ZZZ000"), "No records found for \"ZZZ000\"");
}

#[test]
fn ncic_person_with_warrants() {
    let outcome = ncic().search("John Doe");
    let person = outcome.hit().and_then(|h| h.person.clone()).unwrap();
    assert!(person.has_warrants());
    assert_eq!(person.alerts, vec!["Armed and dangerous".to_string()]);
}

#[test]
fn leads_uppercases_keys() {
    let outcome = leads().search(" abc123 ");
    assert_eq!(outcome.query(), "ABC123");
    let hit = outcome.hit().unwrap();
    assert_eq!(hit.vehicle.as_ref().unwrap().owner, "John Smith");
    assert!(hit.license.is_none());

    let license = leads().search("d1234567");
    assert_eq!(license.hit().unwrap().license.as_ref().unwrap().status, "Valid");
}

#[test]
fn dispatch_search_respects_kind() {
    let person = dispatch_records().search(SearchKind::Person, "Robert Johnson");
    assert!(matches!(person, SearchOutcome::Found { hit: DispatchHit::Person(_), .. }));

    // A plate is not a person.
    let wrong_kind = dispatch_records().search(SearchKind::Person, "LMN456");
    assert!(!wrong_kind.is_found());

    let vehicle = dispatch_records().search(SearchKind::Vehicle, "LMN456");
    let Some(DispatchHit::Vehicle(v)) = vehicle.hit() else {
        panic!("expected vehicle hit");
    };
    assert_eq!(v.make_model(), "Ford F-150");
}

#[test]
fn lookups_are_exact_match_only() {
    assert!(!ncic().search("ABC").is_found());
    assert!(!ncic().search("John").is_found());
    assert!(!dispatch_records().search(SearchKind::Person, "jane smith").is_found());
}
