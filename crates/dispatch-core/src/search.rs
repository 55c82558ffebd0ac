//! In-flight search bookkeeping for the record panels.
//!
//! Every search takes a ticket. When the simulated delay elapses the panel
//! hands the ticket back with the outcome; only the most recent ticket's
//! outcome is applied, so a slow earlier search can never overwrite a newer
//! one.

use std::time::Duration;

use shared_types::SearchConfig;

/// Which record system a panel talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSystem {
    Ncic,
    Leads,
    Dispatch,
}

impl RecordSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSystem::Ncic => "NCIC",
            RecordSystem::Leads => "LEADS",
            RecordSystem::Dispatch => "Dispatch",
        }
    }

    /// Simulated response time for this system.
    pub fn delay(&self, config: &SearchConfig) -> Duration {
        match self {
            RecordSystem::Ncic => config.ncic_delay(),
            RecordSystem::Leads => config.leads_delay(),
            RecordSystem::Dispatch => config.dispatch_delay(),
        }
    }
}

/// Claim on the result slot of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTracker {
    latest: u64,
    pending: bool,
}

impl SearchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `raw`. Blank input is refused.
    pub fn begin(&mut self, raw: &str) -> Option<SearchTicket> {
        if raw.trim().is_empty() {
            return None;
        }
        self.latest += 1;
        self.pending = true;
        tracing::debug!(generation = self.latest, query = raw, "search started");
        Some(SearchTicket {
            generation: self.latest,
            query: raw.to_string(),
        })
    }

    /// Hand back a completed search. Returns the outcome when the ticket is
    /// still current; a superseded ticket yields `None`.
    pub fn finish<T>(&mut self, ticket: &SearchTicket, outcome: T) -> Option<T> {
        if ticket.generation != self.latest {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.latest,
                "discarding superseded search"
            );
            return None;
        }
        self.pending = false;
        Some(outcome)
    }

    /// Drop any in-flight search, e.g. when the panel is cleared.
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = false;
    }

    pub fn is_searching(&self) -> bool {
        self.pending
    }
}

/// Whether the search button should accept a click.
pub fn can_search(query: &str, tracker: &SearchTracker) -> bool {
    !query.trim().is_empty() && !tracker.is_searching()
}
