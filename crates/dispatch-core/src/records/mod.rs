//! Static record databases behind the search panels.
//!
//! Each database is a fixed in-memory table keyed by the exact record key.
//! Lookups never fail: they either find a hit or report no records for the
//! normalized query.

pub mod dispatch;
pub mod leads;
pub mod ncic;

use shared_types::SearchOutcome;

pub use dispatch::{dispatch_records, DispatchDatabase};
pub use leads::{leads, LeadsDatabase};
pub use ncic::{ncic, NcicDatabase};

/// A searchable record system.
pub trait RecordSource {
    type Hit: Clone;

    /// Display name shown in panel headers and log lines.
    fn name(&self) -> &'static str;

    /// Turn raw keyboard input into the lookup key.
    fn normalize(&self, raw: &str) -> String;

    /// Exact-match lookup of an already-normalized key.
    fn lookup(&self, key: &str) -> Option<Self::Hit>;

    fn search(&self, raw: &str) -> SearchOutcome<Self::Hit> {
        let query = self.normalize(raw);
        match self.lookup(&query) {
            Some(hit) => {
                tracing::debug!(system = self.name(), %query, "record found");
                SearchOutcome::Found { query, hit }
            }
            None => {
                tracing::debug!(system = self.name(), %query, "no records");
                SearchOutcome::NoRecords { query }
            }
        }
    }
}

/// Banner text for a no-records outcome.
pub fn no_records_message(query: &str) -> String {
    format!("No records found for \"{query}\"")
}
