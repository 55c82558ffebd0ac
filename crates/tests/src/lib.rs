#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod session_reset_tests;

#[cfg(test)]
mod duty_tests;

#[cfg(test)]
mod call_decision_tests;

#[cfg(test)]
mod dispatch_unit_tests;

#[cfg(test)]
mod create_call_tests;

#[cfg(test)]
mod messaging_tests;

#[cfg(test)]
mod unit_status_tests;

#[cfg(test)]
mod record_search_tests;

#[cfg(test)]
mod search_supersede_tests;

#[cfg(test)]
mod config_tests;
