use std::time::Duration;

use dispatch_core::config::parse_config;
use dispatch_core::{load_config, RecordSystem, Session, StatusLink};
use pretty_assertions::assert_eq;
use shared_types::AppConfig;

#[test]
fn empty_document_gives_defaults() {
    assert_eq!(parse_config(""), AppConfig::default());
}

#[test]
fn malformed_document_falls_back_to_defaults() {
    assert_eq!(parse_config("[search\nncic_delay_ms = "), AppConfig::default());
}

#[test]
fn partial_document_keeps_other_defaults() {
    let config = parse_config(
        r#"
[search]
ncic_delay_ms = 250

[features]
leads = false
"#,
    );
    assert_eq!(RecordSystem::Ncic.delay(&config.search), Duration::from_millis(250));
    assert_eq!(RecordSystem::Leads.delay(&config.search), Duration::from_millis(1000));
    assert!(config.features.ncic);
    assert!(!config.features.leads);
    assert!(!config.board.mirror_unit_status);
}

#[test]
fn board_section_selects_mirror_link() {
    let config = parse_config("[board]\nmirror_unit_status = true\n");
    assert_eq!(StatusLink::from_config(&config.board), StatusLink::Mirror);

    let mut session = Session::from_config(&config);
    session.login("D001").unwrap();
    assert_eq!(session.board().unwrap().link(), StatusLink::Mirror);
}

#[test]
fn embedded_config_loads_once() {
    let first = load_config() as *const AppConfig;
    let second = load_config() as *const AppConfig;
    assert_eq!(first, second);
}
